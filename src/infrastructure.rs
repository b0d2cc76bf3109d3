pub mod rest;
pub mod templates;
pub mod utils;
