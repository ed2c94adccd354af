use super::*;

#[test]
fn record_accumulates_total_and_max() {
    let mut stats = TrialStats::default();
    for elapsed in [3u64, 0, 7, 2] {
        stats.record(elapsed);
    }

    assert_eq!(stats.total_ms, 12);
    assert_eq!(stats.max_batch_ms, 7);
    assert_eq!(stats.batches, 4);
    assert!(stats.max_batch_ms <= stats.total_ms);
}

#[test]
fn total_is_monotonic_under_recording() {
    let mut stats = TrialStats::default();
    let mut previous = 0;
    for elapsed in [5u64, 0, 1, 9, 0, 4] {
        stats.record(elapsed);
        assert!(stats.total_ms >= previous);
        assert!(stats.max_batch_ms >= elapsed || elapsed == 0);
        previous = stats.total_ms;
    }
}

#[test]
fn throughput_formula() {
    let stats = TrialStats {
        total_ms: 2_000,
        max_batch_ms: 40,
        batches: 123,
    };
    assert_eq!(stats.transfers_per_second(1_000_000), Some(500_000));
}

#[test]
fn throughput_is_undefined_for_zero_elapsed() {
    let stats = TrialStats::default();
    assert_eq!(stats.transfers_per_second(1_000_000), None);
}

#[test]
fn report_formats_three_lines() {
    let stats = TrialStats {
        total_ms: 250,
        max_batch_ms: 30,
        batches: 5,
    };
    assert_eq!(
        report(&stats, 10_000),
        "Total time: 250 ms\nMax time per batch: 30 ms\nTransfers per second: 40000"
    );
}

#[test]
fn report_prints_na_instead_of_dividing_by_zero() {
    let stats = TrialStats::default();
    assert_eq!(
        report(&stats, 10_000),
        "Total time: 0 ms\nMax time per batch: 0 ms\nTransfers per second: n/a"
    );
}
