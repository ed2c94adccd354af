/// Per-trial timing accumulator.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrialStats {
    pub total_ms: u64,
    pub max_batch_ms: u64,
    pub batches: u64,
}

impl TrialStats {
    pub fn record(&mut self, elapsed_ms: u64) {
        self.total_ms += elapsed_ms;
        self.max_batch_ms = self.max_batch_ms.max(elapsed_ms);
        self.batches += 1;
    }

    /// Trial throughput in transfers per second. `None` when the clock saw
    /// no whole millisecond pass, where the division is undefined.
    pub fn transfers_per_second(&self, samples: usize) -> Option<u64> {
        if self.total_ms == 0 {
            return None;
        }
        Some(samples as u64 * 1000 / self.total_ms)
    }
}

/// The three-line trial report, without a trailing newline.
pub fn report(stats: &TrialStats, samples: usize) -> String {
    let tps = match stats.transfers_per_second(samples) {
        Some(tps) => tps.to_string(),
        None => "n/a".to_string(),
    };
    format!(
        "Total time: {} ms\nMax time per batch: {} ms\nTransfers per second: {}",
        stats.total_ms, stats.max_batch_ms, tps
    )
}

#[cfg(test)]
#[path = "trial_tests.rs"]
mod tests;
