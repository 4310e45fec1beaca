use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{
    DEFAULT_DISTANCE, DEFAULT_NUM_POINTS, DETENT_WIDTH, MAX_NUM_POINTS, PLOT_MAX_DISTANCE,
};
use crate::curve::{linspace, PotentialCurve};
use crate::potentials::{ModelKind, PairPotential, PotentialModel};

/// Everything one redraw needs: the model, where the distance slider sits,
/// and how finely to sample the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub distance: f64,
    pub num_points: usize,
    #[serde(deserialize_with = "model_with_default_kind")]
    pub model: PotentialModel,
}

// a [model] table without `kind` means Lennard-Jones
fn model_with_default_kind<'de, D>(deserializer: D) -> Result<PotentialModel, D::Error>
where
    D: Deserializer<'de>,
{
    let mut table = toml::Table::deserialize(deserializer)?;
    table
        .entry("kind")
        .or_insert_with(|| toml::Value::String("lennard-jones".to_string()));
    toml::Value::Table(table)
        .try_into::<PotentialModel>()
        .map_err(serde::de::Error::custom)
}

impl Default for Session {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            num_points: DEFAULT_NUM_POINTS,
            model: PotentialModel::default(),
        }
    }
}

impl Session {
    pub fn new(model: PotentialModel, distance: f64) -> Self {
        Self {
            model,
            distance,
            ..Self::default()
        }
    }

    pub fn check(&self) -> anyhow::Result<()> {
        self.model.check()?;
        anyhow::ensure!(
            self.distance.is_normal() && self.distance > 0.0,
            "distance must be a positive number, got {}",
            self.distance
        );
        anyhow::ensure!(
            (2..=MAX_NUM_POINTS).contains(&self.num_points),
            "num_points must be between 2 and {MAX_NUM_POINTS}, got {}",
            self.num_points
        );
        anyhow::ensure!(
            self.plot_window().is_finite(),
            "epsilon_over_kb = {} and sigma = {} are too large to plot",
            self.model.epsilon_over_kb(),
            self.model.sigma()
        );
        Ok(())
    }

    /// Move the distance slider. The stored value may snap to a detent.
    pub fn set_distance(&mut self, requested: f64) {
        self.distance = snap_to_detent(&self.model, requested);
    }

    /// Select another model, keeping epsilon/kB and sigma
    pub fn select_model(&mut self, kind: ModelKind) {
        if kind != self.model.kind() {
            log::debug!("Switching model {:?} -> {:?}", self.model.kind(), kind);
            self.model = self.model.switch_to(kind);
        }
    }

    pub fn plot_window(&self) -> PlotWindow {
        PlotWindow::for_model(&self.model)
    }

    pub fn curve(&self) -> PotentialCurve {
        let window = self.plot_window();
        PotentialCurve::sample(
            &self.model,
            linspace(window.r_lo(), window.r_hi(), self.num_points),
        )
    }

    /// Energy at the marker. Infinite inside a hard core.
    pub fn current_energy(&self) -> f64 {
        self.model.evaluate_at(self.distance)
    }
}

/// Snap `value` onto sigma or onto the closed-form minimum when it lies
/// within `DETENT_WIDTH` of either. Sigma wins when both are in range.
pub fn snap_to_detent(model: &PotentialModel, value: f64) -> f64 {
    let sigma = model.sigma();
    if (value - sigma).abs() < DETENT_WIDTH {
        return sigma;
    }
    match model.minimum() {
        Some(r_min) if (value - r_min).abs() < DETENT_WIDTH => r_min,
        _ => value,
    }
}

/// Axis limits of the energy plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotWindow {
    r_lo: f64,
    r_hi: f64,
    v_lo: f64,
    v_hi: f64,
}

impl PlotWindow {
    pub fn for_model(model: &PotentialModel) -> Self {
        let sigma = model.sigma();
        let eps = model.epsilon_over_kb();

        let r_lo = 0.5 * sigma;
        let r_hi = if r_lo < PLOT_MAX_DISTANCE {
            PLOT_MAX_DISTANCE
        } else {
            10.0 * sigma
        };

        let v_hi = 10.0 * eps;
        let v_lo = match model {
            PotentialModel::SquareWell(p) => -1.5 * eps * p.well_depth,
            PotentialModel::HardSphere(_) => -0.5 * eps,
            _ => -2.0 * eps,
        };

        Self {
            r_lo,
            r_hi,
            v_lo,
            v_hi,
        }
    }

    pub fn r_lo(&self) -> f64 {
        self.r_lo
    }

    pub fn r_hi(&self) -> f64 {
        self.r_hi
    }

    pub fn v_lo(&self) -> f64 {
        self.v_lo
    }

    pub fn v_hi(&self) -> f64 {
        self.v_hi
    }

    /// Both axes, and their spans, representable as finite floats
    pub fn is_finite(&self) -> bool {
        [self.r_lo, self.r_hi, self.v_lo, self.v_hi]
            .iter()
            .all(|x| x.is_finite())
            && (self.r_hi - self.r_lo).is_finite()
            && (self.v_hi - self.v_lo).is_finite()
    }

    /// Clamp an energy into the visible band; infinity lands on the top edge
    pub fn clip(&self, v: f64) -> f64 {
        v.max(self.v_lo).min(self.v_hi)
    }

    pub fn contains(&self, r: f64, v: f64) -> bool {
        (self.r_lo..=self.r_hi).contains(&r) && (self.v_lo..=self.v_hi).contains(&v)
    }
}
