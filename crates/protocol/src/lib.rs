pub mod codec;

use serde::{Deserialize, Serialize};

/// Largest number of transfers the service accepts in one request. Requests
/// above this limit are rejected before anything is written to the wire.
pub const MAX_BATCH_SIZE: usize = 8191;

/// A single double-entry transfer between two accounts.
///
/// Identifiers are 128-bit and must be non-zero for the service to accept the
/// transfer; `ledger` and `code` are classification tags interpreted only by
/// the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: u128,
    pub debit_account_id: u128,
    pub credit_account_id: u128,
    pub ledger: u32,
    pub code: u16,
    pub amount: u128,
}

/// Outcome of one submitted transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreateTransferResult {
    Ok,
    IdMustNotBeZero,
    DebitAccountIdMustNotBeZero,
    CreditAccountIdMustNotBeZero,
    AccountNotFound,
}

/// One result entry per transfer in the request, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResult {
    pub index: u32,
    pub result: CreateTransferResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum ClientRequest {
    /// Opening handshake; `concurrency_max` is a hint, the service may ignore it.
    Hello { cluster_id: u128, concurrency_max: u32 },
    CreateTransfers(Vec<Transfer>),
    Close,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum ClientResponse {
    HelloAck,
    TransferResults(Vec<TransferResult>),
    Error(String),
}
