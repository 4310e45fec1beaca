use serde::{Deserialize, Serialize};

use super::{ensure_non_negative, ensure_positive, PairPotential};
use crate::consts::{DEFAULT_EPSILON_OVER_KB, DEFAULT_SIGMA};

/// Morse well. sigma is the equilibrium distance, `a` the inverse width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Morse {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
    pub a: f64,
}

impl Default for Morse {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
            a: 1.0,
        }
    }
}

impl Morse {
    pub(crate) fn check(&self) -> anyhow::Result<()> {
        ensure_positive("Morse width a", self.a)
    }
}

impl PairPotential for Morse {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        let x = 1.0 - (-self.a * (r - self.sigma)).exp();
        self.epsilon_over_kb * x * x
    }
}

/// Exp-6 potential. The repulsive A and B do not scale with epsilon or sigma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buckingham {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
}

impl Default for Buckingham {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
            a: 1000.0,
            b: 2.0,
        }
    }
}

impl Buckingham {
    pub(crate) fn check(&self) -> anyhow::Result<()> {
        ensure_non_negative("Buckingham A", self.a)?;
        ensure_positive("Buckingham B", self.b)
    }
}

impl PairPotential for Buckingham {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        self.a * (-self.b * r).exp() - self.epsilon_over_kb * (self.sigma / r).powi(6)
    }
}

/// Screened Coulomb potential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Yukawa {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
    /// inverse screening length
    pub kappa: f64,
}

impl Default for Yukawa {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
            kappa: 1.0,
        }
    }
}

impl Yukawa {
    pub(crate) fn check(&self) -> anyhow::Result<()> {
        // kappa = 0 is plain Coulomb
        ensure_non_negative("Yukawa kappa", self.kappa)
    }
}

impl PairPotential for Yukawa {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        (self.epsilon_over_kb / r) * (-self.kappa * r).exp()
    }
}
