use serde::{Deserialize, Serialize};

use super::{ensure_positive, PairPotential};
use crate::consts::{DEFAULT_EPSILON_OVER_KB, DEFAULT_SIGMA};

// C * eps * [(sigma/r)^n - (sigma/r)^m]
// Lennard-Jones and Mie both go through here so Mie(12, 6) reproduces LJ bit for bit.
fn two_power_law(prefactor: f64, sigma_over_r: f64, n: f64, m: f64) -> f64 {
    prefactor * (sigma_over_r.powf(n) - sigma_over_r.powf(m))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LennardJones {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
}

impl Default for LennardJones {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl LennardJones {
    pub fn r_min(&self) -> f64 {
        2.0_f64.powf(1.0 / 6.0) * self.sigma
    }
}

impl PairPotential for LennardJones {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        two_power_law(4.0 * self.epsilon_over_kb, self.sigma / r, 12.0, 6.0)
    }
}

/// Mie n-m potential.
///
/// Normalized so the well depth is epsilon for any n > m; the prefactor is
/// exactly 4 for n = 12, m = 6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mie {
    pub epsilon_over_kb: f64,
    pub sigma: f64,
    /// repulsive exponent
    pub n: f64,
    /// attractive exponent
    pub m: f64,
}

impl Default for Mie {
    fn default() -> Self {
        Self {
            epsilon_over_kb: DEFAULT_EPSILON_OVER_KB,
            sigma: DEFAULT_SIGMA,
            n: 12.0,
            m: 6.0,
        }
    }
}

impl Mie {
    pub fn prefactor(&self) -> f64 {
        let (n, m) = (self.n, self.m);
        (n / (n - m)) * (n / m).powf(m / (n - m))
    }

    /// sigma * (n/m)^(1/(n-m)), only defined for n > m > 0
    pub fn r_min(&self) -> Option<f64> {
        if !(self.n > self.m && self.m > 0.0) {
            return None;
        }
        Some(self.sigma * (self.n / self.m).powf(1.0 / (self.n - self.m)))
    }

    pub(crate) fn check(&self) -> anyhow::Result<()> {
        ensure_positive("Mie exponent m", self.m)?;
        anyhow::ensure!(
            self.n.is_finite() && self.n > self.m,
            "Mie exponents need n > m, got n = {}, m = {}",
            self.n,
            self.m
        );
        Ok(())
    }
}

impl PairPotential for Mie {
    fn epsilon_over_kb(&self) -> f64 {
        self.epsilon_over_kb
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn energy(&self, r: f64) -> f64 {
        two_power_law(
            self.prefactor() * self.epsilon_over_kb,
            self.sigma / r,
            self.n,
            self.m,
        )
    }
}
