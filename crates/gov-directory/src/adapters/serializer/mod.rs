//! # Serializer Adapters

pub mod bincode;

pub use bincode::BincodeGovernorCodec;
