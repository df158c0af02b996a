mod simulation;

use anyhow::Result;
use clap::Parser;

use simulation::{LogSink, SimWorld};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Single-car elevator dispatch simulation")]
struct Cli {
    /// Lowest floor of the building
    #[arg(long, default_value = "1")]
    min_floor: i32,

    /// Highest floor of the building
    #[arg(long, default_value = "5")]
    max_floor: i32,

    /// Floor the elevator starts on
    #[arg(long, default_value = "4")]
    start_floor: i32,

    /// Number of randomly generated passengers
    #[arg(long, default_value = "4")]
    passengers: u32,

    /// Seed for reproducible passenger generation
    #[arg(long)]
    seed: Option<u64>,

    /// Run the canonical four-passenger demo instead of random passengers
    #[arg(long)]
    demo: bool,

    /// Maximum dispatch steps before giving up
    #[arg(long, default_value = "10000")]
    max_steps: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut world = if cli.demo {
        SimWorld::create_test_world()?
    } else {
        let mut world = match cli.seed {
            Some(seed) => SimWorld::new_with_seed(
                cli.min_floor,
                cli.max_floor,
                cli.start_floor,
                Box::new(LogSink),
                seed,
            )?,
            None => SimWorld::new(
                cli.min_floor,
                cli.max_floor,
                cli.start_floor,
                Box::new(LogSink),
            )?,
        };
        world.seed_random_passengers(cli.passengers);
        world
    };

    println!("Initial state:");
    world.print_summary();

    let steps = world.run_until_idle(cli.max_steps)?;

    println!("Elevator went idle after {} dispatch steps", steps);
    world.print_summary();

    Ok(())
}
