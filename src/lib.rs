pub mod config;
pub mod error;
pub mod insight;
pub mod server;
pub mod summarizer;
pub mod text;

pub use error::{Error, Result};
