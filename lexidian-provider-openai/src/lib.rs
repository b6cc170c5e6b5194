#![doc = include_str!("../README.md")]

pub mod client;
pub mod decoder;
pub(crate) mod error;
pub mod streaming;
pub(crate) mod types;

pub use client::OpenAi;
pub use decoder::StreamDecoder;
pub use streaming::decode_byte_stream;

// Re-export lexidian-types for convenience
pub use lexidian_types::{CompletionError, StreamFrame, StreamHandle};
