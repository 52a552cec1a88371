mod args;

use args::Args;
use clap::Parser;
use pqueue::{PQueue, PQueueError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut queue = PQueue::try_with_capacity(args.initial_capacity)?;
    for _ in 0..args.count {
        let priority = rng.gen_range(0..args.max_priority) as usize;
        let value: u32 = rng.gen();
        println!("pushing value: {value:#010x}, priority: {priority}");
        queue.try_push(priority, value)?;
    }
    log::info!(
        "pushed {} elements, capacity grew from {} to {}",
        queue.len(),
        args.initial_capacity,
        queue.capacity()
    );

    while !queue.is_empty() {
        let element = queue.try_pop()?;
        println!(
            "popped value: {:#010x}, priority: {}",
            element.value, element.priority
        );
    }

    match queue.try_peek() {
        Err(PQueueError::Empty) => log::info!("queue drained"),
        Err(err) => return Err(err.into()),
        Ok(element) => log::warn!("queue still holds priority {}", element.priority),
    }
    queue.cleanup();
    Ok(())
}
