//! Error types for lattice construction and configuration.

use thiserror::Error;

/// Result type for lattice-life operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or configuring a simulation.
///
/// Out-of-bounds coordinates are not errors: reads return dead and writes are
/// ignored.
#[derive(Debug, Error)]
pub enum Error {
    /// A lattice dimension was negative.
    #[error("{axis} must be non-negative, got {value}")]
    NegativeDimension { axis: &'static str, value: i32 },

    /// The lattice volume overflows or cannot be allocated.
    #[error("lattice {width}x{height}x{depth} is too large")]
    TooLarge { width: i32, height: i32, depth: i32 },

    /// The auto-advance interval is outside the supported range.
    #[error("auto-advance interval {0}s is outside [0.01, 5.0]")]
    InvalidInterval(f32),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The evaluation thread pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
