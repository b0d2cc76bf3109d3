pub mod date_format;
pub mod markup;
pub mod stagger;
