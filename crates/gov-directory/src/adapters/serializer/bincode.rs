//! # Bincode Governor Codec
//!
//! Default record codec: compact, injective, no schema negotiation.

use crate::domain::entities::Governor;
use crate::domain::errors::SerializationError;
use crate::ports::outbound::GovernorCodec;

/// Governor codec backed by bincode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeGovernorCodec;

impl GovernorCodec for BincodeGovernorCodec {
    fn marshal(&self, governor: &Governor) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(governor).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn unmarshal(&self, data: &[u8]) -> Result<Governor, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}
