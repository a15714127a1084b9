use clap::Parser;
use itertools::Itertools;
use max_queue::{generate_random_values, Queue, Rescan, SlidingMax};
use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Copy, Debug, clap::ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum Alg {
    /// Monotone candidate deque, O(1) amortized per window.
    Queue,
    /// Rescan every window, O(w) per window.
    Rescan,
}

impl Alg {
    /// Number of distinct maximum positions over all windows of size w.
    fn distinct_maxima(&self, w: usize, values: &[u64]) -> usize {
        let it = values.iter().copied();
        match self {
            Alg::Queue => Queue.sliding_max(w, it).map(|e| e.pos).dedup().count(),
            Alg::Rescan => Rescan.sliding_max(w, it).map(|e| e.pos).dedup().count(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
struct Record {
    n: usize,
    w: usize,
    alg: Alg,
    seconds: f64,
    distinct: usize,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Time a single algorithm on one window size.
    Run {
        /// Window size.
        #[clap(short, default_value_t = 16)]
        w: usize,
        #[clap(value_enum, default_value_t = Alg::Queue)]
        alg: Alg,
    },
    /// Sweep window sizes over both algorithms and print JSON records.
    Eval,
}

/// Compare sliding-window-maximum algorithms on random input.
#[derive(clap::Parser)]
struct Args {
    /// Length of the generated random input.
    #[clap(short, default_value_t = 1000000)]
    n: usize,
    /// RNG seed.
    #[clap(long, default_value_t = 213456)]
    seed: u64,
    #[clap(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();
    let values = &generate_random_values(args.n, args.seed);

    match args.command {
        Command::Run { w, alg } => {
            eprintln!("Running {alg:?} with w={w}:");
            let start = Instant::now();
            let distinct = alg.distinct_maxima(w, values);
            let seconds = start.elapsed().as_secs_f64();
            eprintln!("  Distinct maxima: {distinct}");
            eprintln!("  Time: {seconds:.3}s");
        }
        Command::Eval => {
            let mut records = vec![];
            for w in [1, 2, 4, 8, 16, 32, 64, 128] {
                for alg in [Alg::Queue, Alg::Rescan] {
                    let start = Instant::now();
                    let distinct = alg.distinct_maxima(w, values);
                    let seconds = start.elapsed().as_secs_f64();
                    eprintln!("n={} w={w} alg={alg:?} t={seconds:.3}s", args.n);
                    records.push(Record {
                        n: args.n,
                        w,
                        alg,
                        seconds,
                        distinct,
                    });
                }
            }

            let record_json = serde_json::to_string(&records).unwrap();
            println!("{}", record_json);
        }
    }
}
