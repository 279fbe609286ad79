pub mod cli;
pub mod config;
pub mod publish;

pub use cli::{run, Cli, Commands};
