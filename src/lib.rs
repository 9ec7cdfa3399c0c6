//! Per-player, per-game poker statistics.
//!
//! Hands arrive already parsed as [`gameplay::Hand`] records. Each one is
//! folded into a [`stats::Profile`] per (player, game) pair, from which
//! frequencies like VPIP, PFR, aggression factor and showdown rates are
//! derived on demand.
pub mod cards;
pub mod gameplay;
pub mod stats;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Bet amounts, pot contributions, winnings and rake.
pub type Chips = i64;
/// Seat index around the table.
pub type Position = usize;
/// Occurrence counters accumulated across hands.
pub type Count = u32;
/// Frequencies expressed on a 0..=100 scale.
pub type Percent = f32;
/// Unbounded ratios such as aggression factor.
pub type Ratio = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
