/// Execution Layer
///
/// This layer is responsible for:
/// - Building swap transactions from scaled parameters
/// - Submitting them through the chain adapter
/// - Tagging failures with the operation that produced them

pub mod swap_executor;

pub use swap_executor::{EXECUTE_SWAP, SwapExecutor};
