pub mod consumer;
pub mod consumer_group;
pub mod list;
