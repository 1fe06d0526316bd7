//! # Governor Directory API Implementation
//!
//! Implements the GovernorDirectory trait: primary-index CRUD, power-index
//! maintenance, and bounded ranked iteration.

use shared_types::GovernorAddress;

use crate::domain::entities::Governor;
use crate::domain::errors::DirectoryError;
use crate::domain::value_objects::KeyPrefix;
use crate::ports::inbound::{GovernorDirectory, IterationCallback};
use crate::ports::outbound::{
    BatchOperation, GovernorCodec, KeyValueStore, ParamsProvider, ScanDirection,
};

use super::GovernorDirectoryService;

impl<KV, C, P> GovernorDirectory for GovernorDirectoryService<KV, C, P>
where
    KV: KeyValueStore,
    C: GovernorCodec,
    P: ParamsProvider,
{
    fn set_governor(&mut self, governor: &Governor) -> Result<(), DirectoryError> {
        let bytes = self.codec.marshal(governor)?;
        self.kv_store
            .put(&KeyPrefix::governor_key(&governor.address), &bytes)?;

        #[cfg(feature = "tracing-log")]
        tracing::debug!("[gov-directory] set governor {}", governor.address);

        Ok(())
    }

    fn governor(&self, address: &GovernorAddress) -> Result<Option<Governor>, DirectoryError> {
        let Some(bytes) = self.kv_store.get(&KeyPrefix::governor_key(address))? else {
            return Ok(None);
        };
        Ok(Some(self.codec.unmarshal(&bytes)?))
    }

    fn all_governors(&self) -> Result<Vec<Governor>, DirectoryError> {
        let mut governors = Vec::new();
        for (_key, value) in self
            .kv_store
            .scan_prefix(KeyPrefix::Governor.as_bytes(), ScanDirection::Ascending)?
        {
            governors.push(self.codec.unmarshal(&value)?);
        }
        Ok(governors)
    }

    fn all_active_governors(&self) -> Result<Vec<Governor>, DirectoryError> {
        let mut governors = Vec::new();
        for (_key, value) in self
            .kv_store
            .scan_prefix(KeyPrefix::Governor.as_bytes(), ScanDirection::Ascending)?
        {
            let governor = self.codec.unmarshal(&value)?;
            if governor.is_active() {
                governors.push(governor);
            }
        }
        Ok(governors)
    }

    fn iterate_governors(&self, cb: &mut IterationCallback<'_>) -> Result<(), DirectoryError> {
        let iter = self
            .kv_store
            .scan_prefix(KeyPrefix::Governor.as_bytes(), ScanDirection::Ascending)?;

        let mut index: u64 = 0;
        for (_key, value) in iter {
            let governor = self.codec.unmarshal(&value)?;
            if cb(index, &governor) {
                break;
            }
            index += 1;
        }
        Ok(())
    }

    fn set_governor_by_power_index(&mut self, governor: &Governor) -> Result<(), DirectoryError> {
        self.kv_store.put(
            &KeyPrefix::power_key(governor.voting_power, &governor.address),
            governor.address.as_bytes(),
        )?;
        Ok(())
    }

    fn delete_governor_by_power_index(
        &mut self,
        governor: &Governor,
    ) -> Result<(), DirectoryError> {
        self.kv_store
            .delete(&KeyPrefix::power_key(governor.voting_power, &governor.address))?;
        Ok(())
    }

    fn update_governor_by_power_index(
        &mut self,
        governor: &Governor,
    ) -> Result<(), DirectoryError> {
        // The stored record carries the power the index is keyed on; a
        // first-time write has no stale key to drop.
        let previous = self.governor(&governor.address)?;

        let mut operations = Vec::with_capacity(3);
        if let Some(previous) = previous {
            operations.push(BatchOperation::delete(KeyPrefix::power_key(
                previous.voting_power,
                &previous.address,
            )));
        }
        operations.push(BatchOperation::put(
            KeyPrefix::power_key(governor.voting_power, &governor.address),
            governor.address.as_bytes().to_vec(),
        ));
        operations.push(BatchOperation::put(
            KeyPrefix::governor_key(&governor.address),
            self.codec.marshal(governor)?,
        ));

        // One batch: no reader ever observes the power index missing an
        // entry for an existing governor.
        self.kv_store.atomic_batch_write(operations)?;

        #[cfg(feature = "tracing-log")]
        tracing::debug!(
            "[gov-directory] updated power index for {} -> {}",
            governor.address,
            governor.voting_power
        );

        Ok(())
    }

    fn iterate_max_governors_by_power(
        &self,
        cb: &mut IterationCallback<'_>,
    ) -> Result<(), DirectoryError> {
        let max_governors = self.params.max_governors();
        if max_governors == 0 {
            return Ok(());
        }

        // The power encoding reverses numeric order, so an ascending scan
        // yields descending power with ascending address on ties.
        let iter = self.kv_store.scan_prefix(
            KeyPrefix::GovernorsByPower.as_bytes(),
            ScanDirection::Ascending,
        )?;

        let mut yielded: u64 = 0;
        for (_key, value) in iter {
            // The value stored is the governor address.
            let address = GovernorAddress::from_bytes(&value)?;
            let Some(governor) = self.governor(&address)? else {
                #[cfg(feature = "tracing-log")]
                tracing::warn!("[gov-directory] power index entry without record: {address}");
                continue;
            };

            if !governor.is_active() {
                continue;
            }
            if cb(yielded, &governor) {
                break;
            }
            yielded += 1;
            if yielded >= max_governors {
                break;
            }
        }
        Ok(())
    }

    fn remove_governor(&mut self, address: &GovernorAddress) -> Result<bool, DirectoryError> {
        let Some(stored) = self.governor(address)? else {
            return Ok(false);
        };

        self.kv_store.atomic_batch_write(vec![
            BatchOperation::delete(KeyPrefix::power_key(stored.voting_power, address)),
            BatchOperation::delete(KeyPrefix::governor_key(address)),
        ])?;

        #[cfg(feature = "tracing-log")]
        tracing::debug!("[gov-directory] removed governor {address}");

        Ok(true)
    }
}
