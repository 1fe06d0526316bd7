//! # Value Objects
//!
//! Immutable configuration and key-construction types for the Governor
//! Directory subsystem.

use shared_types::{GovernorAddress, VotingPower};

/// Maximum length of a governor's moniker.
pub const MAX_MONIKER_LENGTH: usize = 70;
/// Maximum length of a governor's identity field.
pub const MAX_IDENTITY_LENGTH: usize = 3000;
/// Maximum length of a governor's website field.
pub const MAX_WEBSITE_LENGTH: usize = 140;
/// Maximum length of a governor's security contact field.
pub const MAX_SECURITY_CONTACT_LENGTH: usize = 140;
/// Maximum length of a governor's details field.
pub const MAX_DETAILS_LENGTH: usize = 280;

/// Sentinel value meaning "leave this description field unchanged" when
/// applying a partial update. Every other value, including the empty
/// string, fully replaces the field.
pub const DO_NOT_MODIFY: &str = "[do-not-modify]";

/// Key prefixes for the key-value store.
///
/// All keys are prefixed to namespace the two indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Primary index: `g:{address}` -> serialized Governor
    Governor,
    /// Power index: `p:{descending_power}{address}` -> address bytes
    GovernorsByPower,
}

impl KeyPrefix {
    /// Get the byte prefix for this index.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Governor => b"g:",
            KeyPrefix::GovernorsByPower => b"p:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// Build a primary-index key from a governor address.
    pub fn governor_key(address: &GovernorAddress) -> Vec<u8> {
        KeyPrefix::Governor.key(address.as_bytes())
    }

    /// Build a power-index key from a voting power and address.
    ///
    /// The power is encoded with an order-reversing transform (see
    /// [`VotingPower::descending_key_bytes`]), so an *ascending* scan over
    /// this prefix yields descending power, with the trailing address bytes
    /// breaking ties in ascending order.
    pub fn power_key(power: VotingPower, address: &GovernorAddress) -> Vec<u8> {
        let mut key = KeyPrefix::GovernorsByPower.as_bytes().to_vec();
        key.extend_from_slice(&power.descending_key_bytes());
        key.extend_from_slice(address.as_bytes());
        key
    }
}

/// Parameters governing directory iteration.
///
/// In the host system these live in the on-chain parameter store; the
/// directory consumes them through the `ParamsProvider` port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryParams {
    /// Maximum number of active governors yielded by ranked iteration.
    pub max_governors: u64,
}

impl Default for DirectoryParams {
    fn default() -> Self {
        Self { max_governors: 100 }
    }
}

impl DirectoryParams {
    /// Create parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum governor count.
    pub fn with_max_governors(mut self, max: u64) -> Self {
        self.max_governors = max;
        self
    }
}
