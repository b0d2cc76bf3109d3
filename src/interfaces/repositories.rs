pub mod blog_post;
pub mod contact_me;
pub mod experience;
pub mod project;
pub mod rest_repo;
