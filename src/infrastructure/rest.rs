pub mod client;
pub mod query;

pub use client::RestClient;
pub use query::RestQuery;
