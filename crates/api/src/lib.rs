pub mod client;
pub mod consumer_group_consumers;
pub mod consumer_groups;
pub mod endpoint;
pub mod error;
pub mod response;

pub use client::{Client, Config};
pub use error::Error;
