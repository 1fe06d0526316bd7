//! # Adapters Layer
//!
//! In-process implementations of the outbound ports.
//!
//! - `storage` - in-memory and file-backed ordered key-value stores
//! - `serializer` - bincode governor codec
//! - `params` - static parameter provider

pub mod params;
pub mod serializer;
pub mod storage;

pub use params::StaticParams;
pub use serializer::BincodeGovernorCodec;
pub use storage::{FileBackedKvStore, InMemoryKvStore};
