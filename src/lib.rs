pub mod cli;
pub mod client;
pub mod generate;
pub mod query;
pub mod types;
pub mod utils;
