use clap::ValueEnum;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

pub mod exponential;
pub mod hard_core;
pub mod power_law;

pub use exponential::{Buckingham, Morse, Yukawa};
pub use hard_core::{HardSphere, SquareWell, Sutherland};
pub use power_law::{LennardJones, Mie};

/// A radial pair potential V(r), in units of epsilon/kB (K).
///
/// Only `energy` needs implementing: sequence and scalar evaluation both go
/// through it, so the two can never disagree (in particular at r == sigma).
pub trait PairPotential {
    fn epsilon_over_kb(&self) -> f64;

    fn sigma(&self) -> f64;

    /// Energy at a single separation. Returns `f64::INFINITY` inside a hard core.
    fn energy(&self, r: f64) -> f64;

    fn evaluate(&self, rs: &[f64]) -> Vec<f64> {
        rs.iter().map(|&r| self.energy(r)).collect()
    }

    fn evaluate_at(&self, r: f64) -> f64 {
        self.evaluate(std::slice::from_ref(&r))[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    LennardJones,
    HardSphere,
    SquareWell,
    Sutherland,
    Morse,
    Buckingham,
    Yukawa,
    Mie,
}

impl ModelKind {
    pub const ALL: [ModelKind; 8] = [
        ModelKind::LennardJones,
        ModelKind::HardSphere,
        ModelKind::SquareWell,
        ModelKind::Sutherland,
        ModelKind::Morse,
        ModelKind::Buckingham,
        ModelKind::Yukawa,
        ModelKind::Mie,
    ];
}

/// The closed set of interaction laws the visualizer knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PotentialModel {
    LennardJones(LennardJones),
    HardSphere(HardSphere),
    SquareWell(SquareWell),
    Sutherland(Sutherland),
    Morse(Morse),
    Buckingham(Buckingham),
    Yukawa(Yukawa),
    Mie(Mie),
}

impl Default for PotentialModel {
    fn default() -> Self {
        PotentialModel::LennardJones(LennardJones::default())
    }
}

impl PotentialModel {
    /// Fresh instance of `kind` with all parameters at their defaults
    pub fn from_kind(kind: ModelKind) -> Self {
        match kind {
            ModelKind::LennardJones => Self::LennardJones(LennardJones::default()),
            ModelKind::HardSphere => Self::HardSphere(HardSphere::default()),
            ModelKind::SquareWell => Self::SquareWell(SquareWell::default()),
            ModelKind::Sutherland => Self::Sutherland(Sutherland::default()),
            ModelKind::Morse => Self::Morse(Morse::default()),
            ModelKind::Buckingham => Self::Buckingham(Buckingham::default()),
            ModelKind::Yukawa => Self::Yukawa(Yukawa::default()),
            ModelKind::Mie => Self::Mie(Mie::default()),
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            Self::LennardJones(_) => ModelKind::LennardJones,
            Self::HardSphere(_) => ModelKind::HardSphere,
            Self::SquareWell(_) => ModelKind::SquareWell,
            Self::Sutherland(_) => ModelKind::Sutherland,
            Self::Morse(_) => ModelKind::Morse,
            Self::Buckingham(_) => ModelKind::Buckingham,
            Self::Yukawa(_) => ModelKind::Yukawa,
            Self::Mie(_) => ModelKind::Mie,
        }
    }

    /// Switch to another model, carrying over epsilon/kB and sigma.
    /// Shape parameters of the new model start from their defaults.
    pub fn switch_to(&self, kind: ModelKind) -> Self {
        let mut model = Self::from_kind(kind);
        model.set_scale(self.epsilon_over_kb(), self.sigma());
        model
    }

    pub fn set_scale(&mut self, epsilon_over_kb: f64, sigma: f64) {
        let (eps, sig) = match self {
            Self::LennardJones(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
            Self::HardSphere(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
            Self::SquareWell(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
            Self::Sutherland(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
            Self::Morse(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
            Self::Buckingham(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
            Self::Yukawa(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
            Self::Mie(p) => (&mut p.epsilon_over_kb, &mut p.sigma),
        };
        *eps = epsilon_over_kb;
        *sig = sigma;
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LennardJones(_) => "Lennard-Jones",
            Self::HardSphere(_) => "Hard Sphere",
            Self::SquareWell(_) => "Square Well",
            Self::Sutherland(_) => "Sutherland",
            Self::Morse(_) => "Morse",
            Self::Buckingham(_) => "Buckingham",
            Self::Yukawa(_) => "Yukawa",
            Self::Mie(_) => "Mie",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::LennardJones(_) => {
                "Most commonly used for noble gases and simple molecules. Combines short-range \
                 repulsion (r⁻¹²) with longer-range attraction (r⁻⁶). The r⁻⁶ term represents \
                 van der Waals forces."
            }
            Self::HardSphere(_) => {
                "Simplest model where particles act as perfect rigid spheres. Used for studying \
                 entropy-driven phenomena and as a reference system for more complex fluids."
            }
            Self::SquareWell(_) => {
                "Combines hard sphere repulsion with a constant attractive well. Useful for \
                 studying phase transitions and as a simple model for colloidal systems."
            }
            Self::Sutherland(_) => {
                "Historical potential with hard-core repulsion and power-law attraction. Used in \
                 theoretical studies and as a simplified model for molecular interactions."
            }
            Self::Morse(_) => {
                "Anharmonic well with an exponential approach to dissociation. Describes the \
                 stretching of chemical bonds better than a harmonic spring."
            }
            Self::Buckingham(_) => {
                "Replaces the r⁻¹² wall of Lennard-Jones with an exponential repulsion, which is \
                 closer to the overlap of electron clouds. Common for ionic solids."
            }
            Self::Yukawa(_) => {
                "Screened Coulomb interaction. Describes charged colloids and plasmas where \
                 surrounding charges screen the interaction beyond a length 1/κ."
            }
            Self::Mie(_) => {
                "Generalized Lennard-Jones with tunable repulsive (n) and attractive (m) \
                 exponents. Reduces to Lennard-Jones for n = 12, m = 6."
            }
        }
    }

    /// Display equation with the current exponents and well shape substituted in.
    pub fn equation(&self) -> String {
        match self {
            Self::LennardJones(_) => "V(r) = 4ε[(σ/r)¹² - (σ/r)⁶]".to_string(),
            Self::HardSphere(_) => "V(r) = ∞ for r < σ, 0 for r ≥ σ".to_string(),
            Self::SquareWell(p) => {
                let depth = coefficient(p.well_depth);
                let width = coefficient(p.well_width);
                format!("V(r) = ∞ for r < σ, -{depth}ε for σ ≤ r < {width}σ, 0 for r ≥ {width}σ")
            }
            Self::Sutherland(p) => format!(
                "V(r) = ∞ for r < σ, -ε(σ/r){} for r ≥ σ",
                superscript(p.n as f64)
            ),
            Self::Morse(_) => "V(r) = ε[1 - exp(-a(r - σ))]²".to_string(),
            Self::Buckingham(_) => "V(r) = A·exp(-B·r) - ε(σ/r)⁶".to_string(),
            Self::Yukawa(_) => "V(r) = (ε/r)·exp(-κr)".to_string(),
            Self::Mie(p) => format!(
                "V(r) = Cε[(σ/r){} - (σ/r){}]",
                superscript(p.n),
                superscript(p.m)
            ),
        }
    }

    /// Whether the model treats r < sigma as an impenetrable core
    pub fn has_hard_core(&self) -> bool {
        matches!(
            self,
            Self::HardSphere(_) | Self::SquareWell(_) | Self::Sutherland(_)
        )
    }

    /// Closed-form location of the potential minimum, where one exists
    pub fn minimum(&self) -> Option<f64> {
        match self {
            Self::LennardJones(p) => Some(p.r_min()),
            Self::Mie(p) => p.r_min(),
            _ => None,
        }
    }

    /// Reject parameters that give a physically meaningless curve.
    /// Evaluation itself never checks; this is for callers that want to fail fast.
    pub fn check(&self) -> anyhow::Result<()> {
        ensure_positive("epsilon_over_kb", self.epsilon_over_kb())?;
        ensure_positive("sigma", self.sigma())?;
        match self {
            Self::LennardJones(_) | Self::HardSphere(_) => Ok(()),
            Self::SquareWell(p) => p.check(),
            Self::Sutherland(p) => p.check(),
            Self::Morse(p) => p.check(),
            Self::Buckingham(p) => p.check(),
            Self::Yukawa(p) => p.check(),
            Self::Mie(p) => p.check(),
        }
    }
}

impl PairPotential for PotentialModel {
    fn epsilon_over_kb(&self) -> f64 {
        match self {
            Self::LennardJones(p) => p.epsilon_over_kb,
            Self::HardSphere(p) => p.epsilon_over_kb,
            Self::SquareWell(p) => p.epsilon_over_kb,
            Self::Sutherland(p) => p.epsilon_over_kb,
            Self::Morse(p) => p.epsilon_over_kb,
            Self::Buckingham(p) => p.epsilon_over_kb,
            Self::Yukawa(p) => p.epsilon_over_kb,
            Self::Mie(p) => p.epsilon_over_kb,
        }
    }

    fn sigma(&self) -> f64 {
        match self {
            Self::LennardJones(p) => p.sigma,
            Self::HardSphere(p) => p.sigma,
            Self::SquareWell(p) => p.sigma,
            Self::Sutherland(p) => p.sigma,
            Self::Morse(p) => p.sigma,
            Self::Buckingham(p) => p.sigma,
            Self::Yukawa(p) => p.sigma,
            Self::Mie(p) => p.sigma,
        }
    }

    fn energy(&self, r: f64) -> f64 {
        match self {
            Self::LennardJones(p) => p.energy(r),
            Self::HardSphere(p) => p.energy(r),
            Self::SquareWell(p) => p.energy(r),
            Self::Sutherland(p) => p.energy(r),
            Self::Morse(p) => p.energy(r),
            Self::Buckingham(p) => p.energy(r),
            Self::Yukawa(p) => p.energy(r),
            Self::Mie(p) => p.energy(r),
        }
    }
}

pub(crate) fn ensure_positive(name: &str, x: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        x.is_normal() && x > 0.0,
        "{name} must be a positive number, got {x}"
    );
    Ok(())
}

pub(crate) fn ensure_non_negative(name: &str, x: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        (x.is_normal() || x.is_zero()) && x >= 0.0,
        "{name} must be zero or a positive number, got {x}"
    );
    Ok(())
}

// multiplier in front of a symbol, dropped when it is 1
fn coefficient(x: f64) -> String {
    if x == 1.0 {
        String::new()
    } else {
        format!("{x}")
    }
}

// integers get unicode superscripts, anything else falls back to ^x
fn superscript(x: f64) -> String {
    if !x.is_finite() || x.fract() != 0.0 {
        return format!("^{x}");
    }
    format!("{}", x as i64)
        .chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            _ => '⁻',
        })
        .collect()
}
