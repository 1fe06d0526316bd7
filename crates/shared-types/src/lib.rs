//! # Shared Types Crate
//!
//! This crate contains the primitive types shared between the governor
//! directory and the rest of the governance host: the governor address,
//! the voting-power scalar, and the timestamp alias.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: address and power definitions live here so
//!   delegation logic, voting logic and the directory agree byte-for-byte.
//! - **Byte-Order Is Law**: governor addresses order by their raw bytes;
//!   every index key in the directory is built from these encodings.

pub mod entities;
pub mod errors;

pub use entities::{GovernorAddress, Timestamp, VotingPower, GOVERNOR_ADDRESS_LENGTH};
pub use errors::AddressError;
