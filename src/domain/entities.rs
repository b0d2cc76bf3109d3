pub mod blog_post;
pub mod category;
pub mod contact_me;
pub mod experience;
pub mod listing;
pub mod project;
