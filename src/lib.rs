use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};

pub mod cli;
pub mod consts;
pub mod curve;
pub mod io;
pub mod potentials;
pub mod session;

pub use potentials::{ModelKind, PairPotential, PotentialModel};
pub use session::Session;

use potentials::{Buckingham, HardSphere, LennardJones, Mie, Morse, SquareWell, Sutherland, Yukawa};

// for arbitrary trait
fn usize_in_range(g: &mut Gen, min: usize, max: usize) -> usize {
    if min == max {
        return max;
    }
    let x = usize::arbitrary(g);
    let r = x % (max - min) + min;
    assert!(r >= min && r < max);
    r
}

fn f64_in_range(g: &mut Gen, min: f64, max: f64) -> f64 {
    let mut r = f64::INFINITY;
    while !(r.is_normal() || r.is_zero()) {
        let x = f64::arbitrary(g).abs();
        r = x % (max - min) + min;
    }

    assert!(r.is_normal() || r.is_zero());
    assert!(r >= min && r < max);
    r
}

impl Arbitrary for ModelKind {
    fn arbitrary(g: &mut Gen) -> Self {
        ModelKind::ALL[usize_in_range(g, 0, ModelKind::ALL.len())]
    }
}

// Parameters stay inside the ranges the UI sliders allow, so every
// generated model passes `check`.
impl Arbitrary for PotentialModel {
    fn arbitrary(g: &mut Gen) -> Self {
        let epsilon_over_kb = f64_in_range(g, 1.0, 500.0); // K
        let sigma = f64_in_range(g, 1.0, 6.0); // Angstrom

        let mut model = match ModelKind::arbitrary(g) {
            ModelKind::LennardJones => Self::LennardJones(LennardJones::default()),
            ModelKind::HardSphere => Self::HardSphere(HardSphere::default()),
            ModelKind::SquareWell => Self::SquareWell(SquareWell {
                well_width: f64_in_range(g, 1.0, 3.0),
                well_depth: f64_in_range(g, 0.1, 2.0),
                ..SquareWell::default()
            }),
            ModelKind::Sutherland => Self::Sutherland(Sutherland {
                n: usize_in_range(g, 6, 19) as u32,
                ..Sutherland::default()
            }),
            ModelKind::Morse => Self::Morse(Morse {
                a: f64_in_range(g, 0.1, 5.0),
                ..Morse::default()
            }),
            ModelKind::Buckingham => Self::Buckingham(Buckingham {
                a: f64_in_range(g, 0.0, 5000.0),
                b: f64_in_range(g, 0.5, 5.0),
                ..Buckingham::default()
            }),
            ModelKind::Yukawa => Self::Yukawa(Yukawa {
                kappa: f64_in_range(g, 0.0, 3.0),
                ..Yukawa::default()
            }),
            ModelKind::Mie => {
                let m = usize_in_range(g, 4, 10) as f64;
                let n = m + usize_in_range(g, 1, 20) as f64;
                Self::Mie(Mie {
                    n,
                    m,
                    ..Mie::default()
                })
            }
        };
        model.set_scale(epsilon_over_kb, sigma);
        model
    }
}

/// A batch of positive separations, for property tests
#[derive(Debug, Clone)]
pub struct Separations(pub Vec<f64>);

impl Arbitrary for Separations {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize_in_range(g, 1, 200);
        Separations((0..len).map(|_| f64_in_range(g, 0.5, 15.0)).collect())
    }
}

impl Arbitrary for Session {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut session = Session::new(PotentialModel::arbitrary(g), f64_in_range(g, 0.5, 15.0));
        session.num_points = usize_in_range(g, 2, 2000);
        session
    }
}

/// Apply a batch of UI edits (model switch, slider move) to a session and
/// refuse the result if it no longer makes sense.
pub fn apply_overrides(
    mut session: Session,
    model: Option<ModelKind>,
    distance: Option<f64>,
) -> anyhow::Result<Session> {
    if let Some(kind) = model {
        session.select_model(kind);
    }
    if let Some(r) = distance {
        session.set_distance(r);
    }
    session.check()?;
    Ok(session)
}
