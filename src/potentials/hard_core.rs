use serde::{Deserialize, Serialize};

use super::{ensure_positive, PairPotential};
use crate::consts::{DEFAULT_EPSILON_OVER_KB, DEFAULT_SIGMA};

// Note: r == sigma is outside the core for every model here

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardSphere {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
}

impl Default for HardSphere {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl PairPotential for HardSphere {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        if r < self.sigma {
            return f64::INFINITY;
        }
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareWell {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
    /// lambda, outer edge of the well in units of sigma
    pub well_width: f64,
    /// depth of the well in units of epsilon
    pub well_depth: f64,
}

impl Default for SquareWell {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
            well_width: 1.5,
            well_depth: 1.0,
        }
    }
}

impl SquareWell {
    pub fn well_edge(&self) -> f64 {
        self.sigma * self.well_width
    }

    pub(crate) fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.well_width.is_finite() && self.well_width >= 1.0,
            "well_width must be at least 1 (in units of sigma), got {}",
            self.well_width
        );
        ensure_positive("well_depth", self.well_depth)
    }
}

impl PairPotential for SquareWell {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        if r < self.sigma {
            return f64::INFINITY;
        }
        if r < self.well_edge() {
            return -self.epsilon_over_kb * self.well_depth;
        }
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sutherland {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
    /// attractive power
    pub n: u32,
}

impl Default for Sutherland {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
            n: 12,
        }
    }
}

impl Sutherland {
    pub(crate) fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.n > 0, "Sutherland power n must be positive");
        Ok(())
    }
}

impl PairPotential for Sutherland {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        if r < self.sigma {
            return f64::INFINITY;
        }
        // saturate huge exponents instead of wrapping
        let n = i32::try_from(self.n).unwrap_or(i32::MAX);
        -self.epsilon_over_kb * (self.sigma / r).powi(n)
    }
}
