//! # Governor Directory Service
//!
//! The main service implementing the Governor Directory API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `GovernorDirectory` for CRUD and ranked iteration
//! 2. Keeps the primary and power indexes consistent under every mutation
//! 3. Uses dependency injection for the store, codec and parameter source
//!
//! ## Concurrency Model
//!
//! Single writer per commit: all mutating operations run inside one
//! logical transaction boundary supplied by the host, so the service takes
//! `&mut self` and implements no internal locking. Reads observe the
//! writer's own uncommitted writes through the shared store handle.

mod directory;

use crate::adapters::{BincodeGovernorCodec, InMemoryKvStore, StaticParams};
use crate::domain::value_objects::DirectoryParams;
use crate::ports::outbound::{GovernorCodec, KeyValueStore, ParamsProvider};

/// The Governor Directory Service.
///
/// Owns both indexes over the governor set and guarantees they never
/// diverge; see [`crate::ports::inbound::GovernorDirectory`] for the
/// operation contracts.
pub struct GovernorDirectoryService<KV, C, P>
where
    KV: KeyValueStore,
    C: GovernorCodec,
    P: ParamsProvider,
{
    /// Key-value store holding both indexes.
    pub(crate) kv_store: KV,
    /// Governor record codec.
    pub(crate) codec: C,
    /// Parameter source for the ranked-iteration bound.
    pub(crate) params: P,
}

/// Dependencies for GovernorDirectoryService.
pub struct GovernorDirectoryDependencies<KV, C, P> {
    pub kv_store: KV,
    pub codec: C,
    pub params: P,
}

impl<KV, C, P> GovernorDirectoryService<KV, C, P>
where
    KV: KeyValueStore,
    C: GovernorCodec,
    P: ParamsProvider,
{
    /// Create a new Governor Directory Service with the given dependencies.
    pub fn new(deps: GovernorDirectoryDependencies<KV, C, P>) -> Self {
        Self {
            kv_store: deps.kv_store,
            codec: deps.codec,
            params: deps.params,
        }
    }
}

impl GovernorDirectoryService<InMemoryKvStore, BincodeGovernorCodec, StaticParams> {
    /// Convenience constructor: in-memory store, bincode codec, static
    /// parameters.
    pub fn in_memory(params: DirectoryParams) -> Self {
        Self::new(GovernorDirectoryDependencies {
            kv_store: InMemoryKvStore::new(),
            codec: BincodeGovernorCodec,
            params: StaticParams::new(params),
        })
    }
}
