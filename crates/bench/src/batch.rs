use ledgerbench_protocol::Transfer;

use crate::config::{TRANSFER_AMOUNT, TRANSFER_CODE, TRANSFER_LEDGER};

/// A synthetic transfer with sentinel (all-zero) account identifiers.
pub fn sentinel_transfer() -> Transfer {
    Transfer {
        id: 0,
        debit_account_id: 0,
        credit_account_id: 0,
        ledger: TRANSFER_LEDGER,
        code: TRANSFER_CODE,
        amount: TRANSFER_AMOUNT,
    }
}

/// Partition `samples` into consecutive batch lengths. Yields
/// `ceil(samples / batch_size)` items summing to `samples`; only the final
/// one may be short. A zero `batch_size` yields nothing.
pub fn batch_lengths(samples: usize, batch_size: usize) -> impl Iterator<Item = usize> {
    let mut remaining = if batch_size == 0 { 0 } else { samples };
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let len = batch_size.min(remaining);
        remaining -= len;
        Some(len)
    })
}

/// Overwrite the reused buffer with `len` sentinel transfers. With capacity
/// reserved up front this never reallocates (clear keeps the allocation).
pub fn fill(batch: &mut Vec<Transfer>, len: usize) {
    batch.clear();
    for _ in 0..len {
        batch.push(sentinel_transfer());
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
