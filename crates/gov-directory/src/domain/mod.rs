//! # Domain Layer
//!
//! Pure governor-directory logic with no I/O dependencies.
//!
//! - `entities` - Governor aggregate, description, status, orderings
//! - `value_objects` - Key construction, length limits, parameters
//! - `errors` - Directory error taxonomy

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{
    cmp_by_address, cmp_by_voting_power, sort_by_address, sort_by_voting_power, Governor,
    GovernorDescription, GovernorStatus, GovernorView,
};
pub use errors::{DirectoryError, KvStoreError, SerializationError};
pub use value_objects::{
    DirectoryParams, KeyPrefix, DO_NOT_MODIFY, MAX_DETAILS_LENGTH, MAX_IDENTITY_LENGTH,
    MAX_MONIKER_LENGTH, MAX_SECURITY_CONTACT_LENGTH, MAX_WEBSITE_LENGTH,
};
