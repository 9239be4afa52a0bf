use super::adapter::ChainAdapter;
use crate::errors::ChainError;
use alloy_primitives::{Address, Bytes, TxHash, TxKind, keccak256};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

type CallKey = (Address, [u8; 4]);

#[derive(Default)]
struct MockState {
    code: HashMap<Address, Bytes>,
    responses: HashMap<CallKey, Result<Bytes, String>>,
    exact_responses: HashMap<(Address, Bytes), Bytes>,
    send_failure: Option<String>,
    calls: Vec<TransactionRequest>,
    sent: Vec<TransactionRequest>,
}

/// In-memory chain adapter. Responses are keyed by target address and function selector.
#[derive(Default)]
pub struct MockChainAdapter {
    state: Mutex<MockState>,
}

impl MockChainAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock adapter lock poisoned")
    }

    /// Marks `address` as holding deployed code.
    pub fn with_contract(self, address: Address) -> Self {
        self.state().code.insert(address, Bytes::from_static(&[0x60, 0x80]));
        self
    }

    pub fn respond<C: SolCall>(&self, to: Address, output: Bytes) {
        self.state().responses.insert((to, C::SELECTOR), Ok(output));
    }

    /// Answers only the call whose encoded input equals `call`; takes precedence over [`Self::respond`].
    pub fn respond_to_call<C: SolCall>(&self, to: Address, call: &C, output: Bytes) {
        self.state().exact_responses.insert((to, call.abi_encode().into()), output);
    }

    pub fn revert<C: SolCall>(&self, to: Address, reason: &str) {
        self.state().responses.insert((to, C::SELECTOR), Err(reason.to_string()));
    }

    pub fn fail_sends(&self, reason: &str) {
        self.state().send_failure = Some(reason.to_string());
    }

    /// Every request passed to `call`, in order.
    pub fn calls(&self) -> Vec<TransactionRequest> {
        self.state().calls.clone()
    }

    /// Every request successfully broadcast, in order.
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.state().sent.clone()
    }
}

fn call_key(tx: &TransactionRequest) -> Option<CallKey> {
    let to = match tx.to {
        Some(TxKind::Call(address)) => address,
        _ => return None,
    };
    let input = tx.input.input()?;
    let selector: [u8; 4] = input.get(..4)?.try_into().ok()?;
    Some((to, selector))
}

#[async_trait]
impl ChainAdapter for MockChainAdapter {
    async fn get_code(&self, address: Address) -> Result<Bytes, ChainError> {
        Ok(self.state().code.get(&address).cloned().unwrap_or_default())
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ChainError> {
        let key = call_key(&tx);
        let exact_key = key.zip(tx.input.input().cloned()).map(|((to, _), input)| (to, input));
        let mut state = self.state();
        state.calls.push(tx);

        if let Some(output) = exact_key.and_then(|exact_key| state.exact_responses.get(&exact_key).cloned()) {
            return Ok(output);
        }

        match key.and_then(|key| state.responses.get(&key).cloned()) {
            Some(Ok(output)) => Ok(output),
            Some(Err(reason)) => Err(ChainError::Rejected(format!("execution reverted: {reason}"))),
            None => Err(ChainError::Rejected("execution reverted".to_string())),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ChainError> {
        let mut state = self.state();
        if let Some(reason) = &state.send_failure {
            return Err(ChainError::Rejected(reason.clone()));
        }

        let mut preimage = (state.sent.len() as u64).to_be_bytes().to_vec();
        if let Some(input) = tx.input.input() {
            preimage.extend_from_slice(input);
        }
        state.sent.push(tx);
        Ok(keccak256(preimage))
    }
}
