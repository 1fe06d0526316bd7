//! # Core Shared Entities
//!
//! Defines the governor address, the voting-power scalar and the timestamp
//! alias used across the governance subsystems.
//!
//! ## Type Decisions
//!
//! - `VotingPower` wraps `u128` of integer micro-power base units. A wider
//!   arbitrary-precision decimal would require an extra dependency and
//!   complex arithmetic; u128 covers all practical delegation totals while
//!   keeping key encodings fixed-width.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AddressError;

/// Length in bytes of a governor address.
pub const GOVERNOR_ADDRESS_LENGTH: usize = 20;

/// Unix timestamp in seconds since epoch.
pub type Timestamp = u64;

/// A 20-byte governor address.
///
/// Addresses order by their raw bytes (lexicographic); the directory relies
/// on this ordering both for the primary index and for tie-breaking in the
/// power index. The string form is lowercase hex without a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct GovernorAddress([u8; GOVERNOR_ADDRESS_LENGTH]);

impl GovernorAddress {
    /// Create an address from its canonical byte form.
    pub const fn new(bytes: [u8; GOVERNOR_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create an address from a byte slice, validating the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; GOVERNOR_ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                got: bytes.len(),
                expected: GOVERNOR_ADDRESS_LENGTH,
            })?;
        Ok(Self(bytes))
    }

    /// The canonical byte form of this address.
    pub fn as_bytes(&self) -> &[u8; GOVERNOR_ADDRESS_LENGTH] {
        &self.0
    }
}

impl fmt::Display for GovernorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for GovernorAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidEncoding {
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }
}

impl AsRef<[u8]> for GovernorAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Delegated voting power, in integer micro-power base units.
///
/// Power is recomputed by external delegation logic and starts at zero for
/// a freshly created governor. Arithmetic saturates rather than wrapping:
/// delegation totals must never alias small values on overflow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct VotingPower(u128);

impl VotingPower {
    /// Zero voting power, the creation default.
    pub const ZERO: VotingPower = VotingPower(0);

    /// Create a voting power value from base units.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// The raw base-unit value.
    pub const fn units(&self) -> u128 {
        self.0
    }

    /// Whether this is exactly zero power.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Saturating addition of delegated power.
    pub const fn saturating_add(self, other: VotingPower) -> VotingPower {
        VotingPower(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction of undelegated power.
    pub const fn saturating_sub(self, other: VotingPower) -> VotingPower {
        VotingPower(self.0.saturating_sub(other.0))
    }

    /// Encode this power so byte-lexicographic *ascending* order over the
    /// encoding equals *descending* numeric order of the power.
    ///
    /// The transform `u128::MAX - v` is an order-reversing bijection; its
    /// big-endian bytes make a forward prefix scan over the power index
    /// yield highest power first, with the address suffix breaking ties in
    /// ascending order.
    pub const fn descending_key_bytes(&self) -> [u8; 16] {
        (u128::MAX - self.0).to_be_bytes()
    }
}

impl fmt::Display for VotingPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VotingPower {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(VotingPower)
    }
}
