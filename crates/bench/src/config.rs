//! Benchmark parameters. These are deliberately compile-time constants, not
//! flags: comparable runs across machines should differ only in the service
//! under test, never in harness configuration.

/// Total transfers submitted per trial.
pub const SAMPLES: usize = 1_000_000;

/// Transfers per request, one below the service's per-request limit.
pub const BATCH_SIZE: usize = 8190;

/// Independent repetitions of the whole sweep.
pub const TRIES: usize = 10;

pub const CLUSTER_ID: u128 = 0;
pub const CLUSTER_ADDRESSES: &[&str] = &["127.0.0.1:3000"];
pub const CONCURRENCY_MAX: u32 = 1;

/// Field values for the synthetic transfers. Zero identifiers are invalid,
/// so the service rejects every record; the benchmark measures the
/// rejection path deterministically.
pub const TRANSFER_LEDGER: u32 = 1;
pub const TRANSFER_CODE: u16 = 1;
pub const TRANSFER_AMOUNT: u128 = 10;
