//! Tracing setup for binaries, demos and benchmarks.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! left to the embedding program.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::AmmError;

/// Filter from `RUST_LOG`, falling back to `info`.
#[must_use]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a global fmt subscriber filtered by [`filter_from_env`].
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if a global subscriber is
/// already installed.
pub fn init() -> Result<(), AmmError> {
    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|_| AmmError::InvalidConfiguration("tracing subscriber already installed"))
}
