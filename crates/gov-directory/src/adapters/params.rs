//! # Static Parameter Provider
//!
//! Stand-in for the host's parameter store: a fixed `DirectoryParams`
//! value injected at construction. Hosts with live on-chain parameters
//! implement `ParamsProvider` against their own store instead.

use crate::domain::value_objects::DirectoryParams;
use crate::ports::outbound::ParamsProvider;

/// Parameter provider backed by a fixed value.
#[derive(Debug, Clone, Default)]
pub struct StaticParams {
    params: DirectoryParams,
}

impl StaticParams {
    pub fn new(params: DirectoryParams) -> Self {
        Self { params }
    }
}

impl ParamsProvider for StaticParams {
    fn max_governors(&self) -> u64 {
        self.params.max_governors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_params_reports_configured_max() {
        let provider = StaticParams::new(DirectoryParams::new().with_max_governors(3));
        assert_eq!(provider.max_governors(), 3);
    }
}
