use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;

use truncprimes::direction::Direction;
use truncprimes::histogram::DigitHistogram;
use truncprimes::oracle::{MillerRabin, DEFAULT_TRIALS};
use truncprimes::search::Search;
use truncprimes::truncatable::TruncatablePrimes;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// Left-truncatable primes (strip leading digits)
    Left,
    /// Right-truncatable primes (strip trailing digits)
    Right,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Left => Direction::Left,
            DirectionArg::Right => Direction::Right,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Enumerate truncatable primes")]
struct Cli {
    /// Which end of the number is truncated.
    #[arg(value_enum, default_value = "left")]
    direction: DirectionArg,

    /// Seed for the Miller-Rabin bases (random if not given).
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Miller-Rabin trials per number.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Print the digit-count histogram.
    #[arg(long)]
    histogram: bool,

    /// Re-verify every prime after the search.
    #[arg(long)]
    verify: bool,

    /// Print only the number of primes found.
    #[arg(long)]
    count_only: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 60;

fn print_histogram(hist: &DigitHistogram) {
    let max = hist.max_count().max(1);
    println!("digits | count");
    for (len, count) in hist.iter() {
        let bar = "#".repeat((count * BAR_WIDTH).div_ceil(max));
        println!("{:>6} | {:>5} {}", len, count, bar);
    }
}

fn print_primes(primes: &TruncatablePrimes) {
    println!("All {}-truncatable primes:", primes.direction());
    print!("{}", primes);
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if args.trials == 0 {
        return Err(eyre!("--trials must be at least 1"));
    }

    let direction = Direction::from(args.direction);
    let oracle = match args.seed {
        Some(seed) => MillerRabin::seeded(seed),
        None => MillerRabin::from_os_rng(),
    }
    .with_trials(args.trials);

    let time_search = std::time::Instant::now();
    let mut search = Search::new(direction, oracle);
    let primes = search.run();
    log::info!(
        "Search took {:.3} s, {} primality tests",
        time_search.elapsed().as_secs_f64(),
        search.oracle().tested()
    );

    if !args.count_only {
        print_primes(&primes);
    }
    if args.histogram {
        print_histogram(&primes.histogram());
    }
    if args.verify {
        let mut oracle = match args.seed {
            Some(seed) => MillerRabin::seeded(seed.wrapping_add(1)),
            None => MillerRabin::from_os_rng(),
        }
        .with_trials(args.trials);
        match primes.verify(&mut oracle) {
            Ok(()) => println!("Verified: all {} primes are {}-truncatable", primes.len(), direction),
            Err(p) => return Err(eyre!("{} failed verification", p)),
        }
    }
    println!("There are {} {}-truncatable primes.", primes.len(), direction);

    Ok(())
}
