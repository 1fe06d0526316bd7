//! # Governor Directory Subsystem
//!
//! The Governor Directory is the system's authority for the set of
//! governors: entities holding delegated voting power. It maintains two
//! indexes over one entity set and keeps them consistent under every
//! mutation:
//!
//! - **Primary Index**: governor address -> serialized record, for O(1)
//!   point lookup and ascending-address full scans.
//! - **Power Index**: (voting power descending, address ascending) ->
//!   address, for ranked top-N iteration without deserializing every
//!   record.
//!
//! ## Key Layout
//!
//! ```text
//! g:{address}                          -> Governor record
//! p:{descending_power}{address}        -> address bytes
//! ```
//!
//! The power component is encoded with an order-reversing transform, so a
//! plain ascending scan over the `p:` prefix walks governors from highest
//! to lowest power, ascending address on ties.
//!
//! ## Update Protocol
//!
//! Simple field edits (description, status) go through `set_governor` and
//! touch only the primary index. Every voting-power change goes through
//! `update_governor_by_power_index`, which reads the previously stored
//! record, drops the power-index entry keyed on the old power, inserts
//! the fresh entry and overwrites the record, all as one atomic batch, so
//! a stale ranking key can never survive a power change.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): governor entity, description and
//!   status validation, key construction; no I/O dependencies
//! - **Ports Layer** (`ports/`): inbound API trait, outbound store/codec/
//!   parameter traits
//! - **Adapters Layer** (`adapters/`): in-memory and file-backed stores,
//!   bincode codec, static parameters
//! - **Service Layer** (`service/`): the directory service wiring it all
//!   together

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types for convenience
pub use domain::{
    cmp_by_address, cmp_by_voting_power, sort_by_address, sort_by_voting_power, DirectoryError,
    DirectoryParams, Governor, GovernorDescription, GovernorStatus, GovernorView, KeyPrefix,
    KvStoreError, SerializationError, DO_NOT_MODIFY, MAX_DETAILS_LENGTH, MAX_IDENTITY_LENGTH,
    MAX_MONIKER_LENGTH, MAX_SECURITY_CONTACT_LENGTH, MAX_WEBSITE_LENGTH,
};

pub use ports::{
    BatchOperation, GovernorCodec, GovernorDirectory, IterationCallback, KeyValueStore,
    ParamsProvider, ScanDirection,
};

pub use adapters::{BincodeGovernorCodec, FileBackedKvStore, InMemoryKvStore, StaticParams};

pub use service::{GovernorDirectoryDependencies, GovernorDirectoryService};
