use std::time::Instant;

use anyhow::{Context, bail};
use ledgerbench_client::Client;
use log::debug;

use crate::batch::{batch_lengths, fill};
use crate::trial::TrialStats;

/// One full sweep over `samples`: submit consecutive batches in program
/// order, one in flight, timing each request. The batch buffer is reserved
/// once and overwritten per iteration.
///
/// Any transport error or result-count mismatch aborts the trial; no retry.
pub fn run_trial(
    client: &mut Client,
    samples: usize,
    batch_size: usize,
) -> anyhow::Result<TrialStats> {
    let mut stats = TrialStats::default();
    let mut batch = Vec::with_capacity(batch_size);

    for len in batch_lengths(samples, batch_size) {
        fill(&mut batch, len);

        let start = Instant::now();
        let results = client
            .create_transfers(&batch)
            .with_context(|| format!("failed submitting batch of {len}"))?;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        stats.record(elapsed_ms);

        // Sentinel transfers are all rejected, but the service still owes one
        // result per input; any other count is a logic error.
        if results.len() != batch.len() {
            bail!(
                "result count mismatch: submitted {}, got {}",
                batch.len(),
                results.len()
            );
        }

        debug!("batch of {len} transfers took {elapsed_ms} ms");
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
