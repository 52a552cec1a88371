use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of random elements to push before draining the queue
    #[arg(short, long, default_value_t = 20)]
    pub count: usize,

    /// Priorities are drawn uniformly from 0..MAX_PRIORITY
    #[arg(short, long, default_value_t = 64, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_priority: u64,

    /// Starting capacity of the queue.
    ///
    /// Kept small by default so the queue has to grow while pushing
    #[arg(short, long, default_value_t = 1)]
    pub initial_capacity: usize,

    /// Seed for the random generator. If unset, seeds from system entropy
    #[arg(short, long, required = false)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
