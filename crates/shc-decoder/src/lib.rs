#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod inflate;
pub mod pack;

mod base64_section;

pub use decoder::{DecodedJws, ShcDecoder};
pub use error::DecodeError;
