//! Profile Binary
//!
//! Simulates random hands, folds them into per-player profiles,
//! and prints every profile's report.
//!
//! Options: --hands N, --json

use clap::Parser;
use robostats::gameplay::Hand;
use robostats::stats::Ledger;
use robostats::*;

#[derive(Parser, Debug)]
#[command(about = "accumulate per-player statistics over simulated hands")]
struct Args {
    /// number of hands to simulate
    #[arg(short = 'n', long, default_value_t = 10_000)]
    hands: usize,
    /// print raw counters as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    log();
    let args = Args::parse();
    log::info!("simulating {} hands", args.hands);
    let hands = (0..args.hands).map(|_| Hand::random()).collect::<Vec<_>>();
    let mut ledger = Ledger::default();
    ledger.absorb(&hands);
    log::info!("accumulated {} profiles", ledger.len());
    for profile in ledger.profiles() {
        match args.json {
            true => match profile.json() {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("{}: {}", profile, e),
            },
            false => println!("{}\n{}", profile, profile.detail()),
        }
    }
}
