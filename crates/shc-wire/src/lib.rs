#![warn(clippy::pedantic)]

pub mod digit_pairs;
pub mod error;
pub mod scheme;

pub use error::WireError;
