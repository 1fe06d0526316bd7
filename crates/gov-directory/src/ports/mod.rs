//! # Ports Layer
//!
//! - `inbound` - The directory API trait (driving port)
//! - `outbound` - Store, codec and parameter interfaces (driven ports)

pub mod inbound;
pub mod outbound;

pub use inbound::{GovernorDirectory, IterationCallback};
pub use outbound::{BatchOperation, GovernorCodec, KeyValueStore, ParamsProvider, ScanDirection};
