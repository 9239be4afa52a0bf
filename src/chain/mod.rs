/// Chain Adapter Layer
///
/// The swap core reaches the chain only through [`ChainAdapter`]:
/// - contract resolution (code lookup at construction)
/// - read-only simulation of quoter calls
/// - preparation and broadcast of router transactions

pub mod adapter;
pub mod alloy_adapter;
pub mod mock;

pub use adapter::{ChainAdapter, ContractHandle};
pub use alloy_adapter::AlloyChainAdapter;
pub use mock::MockChainAdapter;
