use ledgerbench_bench::{config, runner, trial};
use ledgerbench_client::Client;
use ledgerbench_runtime::{PROGRAM_NAME, logging};
use log::{error, info};

fn main() {
    logging::init().ok();

    // Errors are fatal and unrecoverable for a throughput probe; report and
    // exit normally on both paths.
    if let Err(err) = run() {
        error!("{err:#}");
    }
}

fn run() -> anyhow::Result<()> {
    info!(
        "{PROGRAM_NAME}: submitting {} transfers in batches of {} to {:?}, {} tries",
        config::SAMPLES,
        config::BATCH_SIZE,
        config::CLUSTER_ADDRESSES,
        config::TRIES,
    );

    let mut client = Client::connect(
        config::CLUSTER_ID,
        config::CLUSTER_ADDRESSES,
        config::CONCURRENCY_MAX,
    )?;

    let mut best: Option<u64> = None;
    for _ in 0..config::TRIES {
        let stats = runner::run_trial(&mut client, config::SAMPLES, config::BATCH_SIZE)?;
        println!("{}\n", trial::report(&stats, config::SAMPLES));

        if let Some(tps) = stats.transfers_per_second(config::SAMPLES) {
            best = Some(best.map_or(tps, |b| b.max(tps)));
        }
    }

    match best {
        Some(tps) => println!("Best: {tps} transfers per second"),
        None => println!("Best: n/a"),
    }

    Ok(())
}
