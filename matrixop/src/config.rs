//! Engine configuration

use matrixop_linalg::{MatrixFormatter, DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding the output precision
pub const PRECISION_ENV: &str = "MATRIXOP_PRECISION";

/// Options shared by every operation run through one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Decimal places for non-integral output values
    pub precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

impl EngineConfig {
    /// Defaults overridden by the environment
    pub fn from_env() -> Self {
        Self::default().apply_env(std::env::var(PRECISION_ENV).ok().as_deref())
    }

    fn apply_env(self, precision: Option<&str>) -> Self {
        match precision.map(|p| p.trim().parse::<u32>()) {
            None => self,
            Some(Ok(p)) => self.with_precision(p),
            Some(Err(e)) => {
                warn!(var = PRECISION_ENV, error = %e, "ignoring invalid precision");
                self
            }
        }
    }

    /// Builder: set precision, capped at the formatter's maximum
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn formatter(&self) -> MatrixFormatter {
        MatrixFormatter::new().with_precision(self.precision)
    }
}
