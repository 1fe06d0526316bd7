//! # Inbound Ports (Driving Ports)
//!
//! The Governor Directory API implemented by the service and consumed by
//! the host's governance logic.

use shared_types::GovernorAddress;

use crate::domain::entities::Governor;
use crate::domain::errors::DirectoryError;

/// Iteration callbacks receive a zero-based sequence index and the current
/// governor, and return `true` to stop the scan immediately.
pub type IterationCallback<'a> = dyn FnMut(u64, &Governor) -> bool + 'a;

/// The Governor Directory API.
///
/// The directory owns both indexes over the governor set: the primary
/// by-address index and the by-power ranking index. Plain record writes
/// (`set_governor`) touch only the primary index; anything that changes
/// voting power must go through `update_governor_by_power_index`, the one
/// path that keeps both indexes consistent.
pub trait GovernorDirectory {
    /// Write or overwrite the primary-index record for this governor.
    ///
    /// No validation happens here; the record is expected to have been
    /// validated at construction or update time. The power index is
    /// deliberately untouched: description edits and status flips do not
    /// pay for an index key swap. Callers changing power must use
    /// [`Self::update_governor_by_power_index`].
    fn set_governor(&mut self, governor: &Governor) -> Result<(), DirectoryError>;

    /// Look up a governor by address.
    fn governor(&self, address: &GovernorAddress) -> Result<Option<Governor>, DirectoryError>;

    /// All governors, in ascending address order.
    fn all_governors(&self) -> Result<Vec<Governor>, DirectoryError>;

    /// All governors with `Active` status, in ascending address order.
    fn all_active_governors(&self) -> Result<Vec<Governor>, DirectoryError>;

    /// Iterate all governors in ascending address order. The callback may
    /// stop the scan early by returning `true`.
    fn iterate_governors(&self, cb: &mut IterationCallback<'_>) -> Result<(), DirectoryError>;

    /// Insert the power-index entry for this governor, keyed on its
    /// current voting power.
    fn set_governor_by_power_index(&mut self, governor: &Governor) -> Result<(), DirectoryError>;

    /// Delete the power-index entry keyed on this governor's current
    /// voting power. Must be called with the power value that is actually
    /// stored in the index, or a stale key is leaked.
    fn delete_governor_by_power_index(&mut self, governor: &Governor) -> Result<(), DirectoryError>;

    /// The only safe path to change voting power: reads the previously
    /// stored record, drops the power-index entry keyed on its old power,
    /// inserts the entry for the new power and overwrites the primary
    /// record, all as one atomic write. A first-time write (no prior
    /// record) skips the delete.
    fn update_governor_by_power_index(&mut self, governor: &Governor)
        -> Result<(), DirectoryError>;

    /// Iterate the top governors by voting power: descending power,
    /// ascending address on ties. Inactive governors are skipped without
    /// counting toward the limit; at most `max_governors` (from the
    /// parameter store) active governors are yielded.
    fn iterate_max_governors_by_power(
        &self,
        cb: &mut IterationCallback<'_>,
    ) -> Result<(), DirectoryError>;

    /// Remove a governor entirely, deleting both index entries. Returns
    /// `false` when no record exists for the address.
    fn remove_governor(&mut self, address: &GovernorAddress) -> Result<bool, DirectoryError>;
}
