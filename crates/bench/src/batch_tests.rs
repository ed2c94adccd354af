use super::*;

#[test]
fn lengths_partition_the_sample_count() {
    let cases: &[(usize, usize, &[usize])] = &[
        (10, 4, &[4, 4, 2]),
        (8, 4, &[4, 4]),
        (3, 5, &[3]),
        (1, 1, &[1]),
        (0, 4, &[]),
    ];

    for (samples, batch_size, expected) in cases {
        let lengths: Vec<usize> = batch_lengths(*samples, *batch_size).collect();
        assert_eq!(&lengths, expected, "samples={samples}, batch={batch_size}");
    }
}

#[test]
fn batch_count_is_ceiling_and_lengths_sum_to_samples() {
    for samples in [0usize, 1, 7, 100, 8190, 8191, 1_000_000] {
        for batch_size in [1usize, 3, 8190, 10_000] {
            let lengths: Vec<usize> = batch_lengths(samples, batch_size).collect();
            assert_eq!(lengths.len(), samples.div_ceil(batch_size));
            assert_eq!(lengths.iter().sum::<usize>(), samples);
            // Only the final batch may be short.
            if let Some((last, full)) = lengths.split_last() {
                assert!(full.iter().all(|&l| l == batch_size));
                assert!(*last <= batch_size && *last > 0);
            }
        }
    }
}

#[test]
fn zero_batch_size_yields_nothing() {
    assert_eq!(batch_lengths(10, 0).count(), 0);
}

#[test]
fn sentinel_transfers_carry_invalid_identifiers() {
    let t = sentinel_transfer();
    assert_eq!(t.id, 0);
    assert_eq!(t.debit_account_id, 0);
    assert_eq!(t.credit_account_id, 0);
    assert_eq!(t.ledger, TRANSFER_LEDGER);
    assert_eq!(t.code, TRANSFER_CODE);
    assert_eq!(t.amount, TRANSFER_AMOUNT);
}

#[test]
fn fill_reuses_the_allocation() {
    let mut batch = Vec::with_capacity(8);
    let cap = batch.capacity();

    fill(&mut batch, 4);
    assert_eq!(batch.len(), 4);
    assert!(batch.iter().all(|t| *t == sentinel_transfer()));
    assert_eq!(batch.capacity(), cap);

    // A shorter refill overwrites rather than reallocating.
    fill(&mut batch, 2);
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.capacity(), cap);
}
