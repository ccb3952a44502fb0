pub mod grid;
pub mod puzzle;
pub mod search;
pub mod trace;

/// Laser path lengths and search scores, in cell-to-cell moves.
pub type Score = usize;

/// Hard ceiling on moves per trace. Mirror-only configurations revisit a
/// state before reaching this, but splitting beams need an explicit cap.
pub const MAX_LENGTH: Score = 1000;

/// Default number of candidates retained between beam search depths.
pub const BEAM_WIDTH: usize = 2000;

/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging for the solver binaries.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
