//! # Domain Entities
//!
//! Core domain entities for the Governor Directory subsystem: the governor
//! aggregate, its free-text description, its status enumeration and the
//! orderings the directory maintains over governor collections.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{GovernorAddress, Timestamp, VotingPower};

use super::errors::DirectoryError;
use super::value_objects::{
    DO_NOT_MODIFY, MAX_DETAILS_LENGTH, MAX_IDENTITY_LENGTH, MAX_MONIKER_LENGTH,
    MAX_SECURITY_CONTACT_LENGTH, MAX_WEBSITE_LENGTH,
};

/// Operational status of a governor.
///
/// Only `Active` and `Inactive` are valid operational states. `Unspecified`
/// exists as the uninitialized/decode-failure sentinel and never names a
/// live governor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GovernorStatus {
    #[default]
    Unspecified,
    Active,
    Inactive,
}

/// Bidirectional status <-> name table, fixed at compile time.
const STATUS_NAMES: [(GovernorStatus, &str); 3] = [
    (GovernorStatus::Unspecified, "GOVERNOR_STATUS_UNSPECIFIED"),
    (GovernorStatus::Active, "GOVERNOR_STATUS_ACTIVE"),
    (GovernorStatus::Inactive, "GOVERNOR_STATUS_INACTIVE"),
];

impl GovernorStatus {
    /// The canonical name of this status.
    pub fn as_name(&self) -> &'static str {
        STATUS_NAMES
            .iter()
            .find(|(status, _)| status == self)
            .map(|(_, name)| *name)
            .unwrap_or("GOVERNOR_STATUS_UNSPECIFIED")
    }

    /// Parse a status from its canonical name.
    ///
    /// Only the two valid operational states parse; every other input,
    /// including the `Unspecified` name, is an error.
    pub fn from_name(name: &str) -> Result<GovernorStatus, DirectoryError> {
        match STATUS_NAMES.iter().find(|(_, n)| *n == name) {
            Some((status, _)) if status.is_valid() => Ok(*status),
            _ => Err(DirectoryError::UnrecognizedStatus(name.to_string())),
        }
    }

    /// Whether this status is a valid operational state.
    pub fn is_valid(&self) -> bool {
        matches!(self, GovernorStatus::Active | GovernorStatus::Inactive)
    }
}

impl fmt::Display for GovernorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_name())
    }
}

/// Free-text description of a governor.
///
/// Each field is bounded by a per-field maximum; exceeding a bound is a
/// validation error, never a silent truncation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GovernorDescription {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

impl GovernorDescription {
    /// Create a new description from its five fields.
    pub fn new(
        moniker: impl Into<String>,
        identity: impl Into<String>,
        website: impl Into<String>,
        security_contact: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            moniker: moniker.into(),
            identity: identity.into(),
            website: website.into(),
            security_contact: security_contact.into(),
            details: details.into(),
        }
    }

    /// Merge a proposed update into this description.
    ///
    /// For each field, the [`DO_NOT_MODIFY`] sentinel keeps the current
    /// value; any other value, including the empty string, replaces it.
    /// The merged description is length-validated before being returned,
    /// so a violating update leaves no partial state behind.
    pub fn update_description(
        &self,
        proposed: GovernorDescription,
    ) -> Result<GovernorDescription, DirectoryError> {
        let mut next = proposed;

        if next.moniker == DO_NOT_MODIFY {
            next.moniker = self.moniker.clone();
        }
        if next.identity == DO_NOT_MODIFY {
            next.identity = self.identity.clone();
        }
        if next.website == DO_NOT_MODIFY {
            next.website = self.website.clone();
        }
        if next.security_contact == DO_NOT_MODIFY {
            next.security_contact = self.security_contact.clone();
        }
        if next.details == DO_NOT_MODIFY {
            next.details = self.details.clone();
        }

        next.ensure_length()
    }

    /// Validate every field against its maximum length.
    pub fn ensure_length(self) -> Result<GovernorDescription, DirectoryError> {
        if self.moniker.len() > MAX_MONIKER_LENGTH {
            return Err(DirectoryError::DescriptionTooLong {
                field: "moniker",
                got: self.moniker.len(),
                max: MAX_MONIKER_LENGTH,
            });
        }
        if self.identity.len() > MAX_IDENTITY_LENGTH {
            return Err(DirectoryError::DescriptionTooLong {
                field: "identity",
                got: self.identity.len(),
                max: MAX_IDENTITY_LENGTH,
            });
        }
        if self.website.len() > MAX_WEBSITE_LENGTH {
            return Err(DirectoryError::DescriptionTooLong {
                field: "website",
                got: self.website.len(),
                max: MAX_WEBSITE_LENGTH,
            });
        }
        if self.security_contact.len() > MAX_SECURITY_CONTACT_LENGTH {
            return Err(DirectoryError::DescriptionTooLong {
                field: "security_contact",
                got: self.security_contact.len(),
                max: MAX_SECURITY_CONTACT_LENGTH,
            });
        }
        if self.details.len() > MAX_DETAILS_LENGTH {
            return Err(DirectoryError::DescriptionTooLong {
                field: "details",
                got: self.details.len(),
                max: MAX_DETAILS_LENGTH,
            });
        }

        Ok(self)
    }
}

/// A governor: an entity holding delegated voting power.
///
/// The address is immutable and unique across the directory. Power starts
/// at zero and is recomputed by external delegation logic; every power
/// change must flow through the directory's power-index-aware update path
/// so the ranking index never holds a stale key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Governor {
    pub address: GovernorAddress,
    pub description: GovernorDescription,
    pub status: GovernorStatus,
    pub voting_power: VotingPower,
    pub last_status_change_time: Option<Timestamp>,
}

impl Governor {
    /// Construct a new governor.
    ///
    /// The description is length-validated; power starts at zero, status
    /// at `Active`, and the status-change timestamp at the creation time.
    pub fn new(
        address: GovernorAddress,
        description: GovernorDescription,
        creation_time: Timestamp,
    ) -> Result<Governor, DirectoryError> {
        let description = description.ensure_length()?;
        Ok(Governor {
            address,
            description,
            status: GovernorStatus::Active,
            voting_power: VotingPower::ZERO,
            last_status_change_time: Some(creation_time),
        })
    }

    /// Whether the governor status equals `Active`.
    pub fn is_active(&self) -> bool {
        self.status == GovernorStatus::Active
    }

    /// Whether the governor status equals `Inactive`.
    pub fn is_inactive(&self) -> bool {
        self.status == GovernorStatus::Inactive
    }

    /// Transition to a new status, stamping the change time.
    ///
    /// A no-op transition (same status) leaves the timestamp untouched.
    pub fn set_status(&mut self, status: GovernorStatus, now: Timestamp) {
        if self.status != status {
            self.status = status;
            self.last_status_change_time = Some(now);
        }
    }

    /// Minimum equality for replay/validation purposes: address, status,
    /// description and voting power. The status-change timestamp is
    /// excluded from this comparison.
    pub fn min_equal(&self, other: &Governor) -> bool {
        self.address == other.address
            && self.status == other.status
            && self.description == other.description
            && self.voting_power == other.voting_power
    }
}

/// Read-only view of a governor.
///
/// Callers that treat governors generically (ranking consumers, display
/// layers) get exactly the accessor set; mutation stays behind the
/// directory's explicit operations.
pub trait GovernorView {
    fn address(&self) -> GovernorAddress;
    fn description(&self) -> &GovernorDescription;
    fn status(&self) -> GovernorStatus;
    fn voting_power(&self) -> VotingPower;
    fn last_status_change_time(&self) -> Option<Timestamp>;

    fn moniker(&self) -> &str {
        &self.description().moniker
    }
}

impl GovernorView for Governor {
    fn address(&self) -> GovernorAddress {
        self.address
    }

    fn description(&self) -> &GovernorDescription {
        &self.description
    }

    fn status(&self) -> GovernorStatus {
        self.status
    }

    fn voting_power(&self) -> VotingPower {
        self.voting_power
    }

    fn last_status_change_time(&self) -> Option<Timestamp> {
        self.last_status_change_time
    }
}

/// Compare two governors by ascending address.
pub fn cmp_by_address(a: &Governor, b: &Governor) -> Ordering {
    a.address.cmp(&b.address)
}

/// Compare two governors by descending voting power, with ties broken by
/// ascending address. This is the ranking order of the power index.
pub fn cmp_by_voting_power(a: &Governor, b: &Governor) -> Ordering {
    b.voting_power
        .cmp(&a.voting_power)
        .then_with(|| a.address.cmp(&b.address))
}

/// Sort governors in ascending address order.
pub fn sort_by_address(governors: &mut [Governor]) {
    governors.sort_by(cmp_by_address);
}

/// Sort governors in descending voting-power order, ascending address on
/// ties.
pub fn sort_by_voting_power(governors: &mut [Governor]) {
    governors.sort_by(cmp_by_voting_power);
}
