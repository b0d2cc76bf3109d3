pub mod blog_posts;
pub mod contact_me;
pub mod experience;
pub mod json_error;
pub mod pages;
pub mod projects;
pub mod system;
