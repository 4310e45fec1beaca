use crate::potentials::{PairPotential, PotentialModel};

/// `num_points` evenly spaced values from `start` to `stop`, both ends included
pub fn linspace(start: f64, stop: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num_points - 1) as f64;
            (0..num_points)
                .map(|i| {
                    if i == num_points - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Sampled (r, V) pairs of one model
#[derive(Debug, Clone)]
pub struct PotentialCurve {
    r: Vec<f64>,
    v: Vec<f64>,
}

impl PotentialCurve {
    pub fn sample(model: &PotentialModel, r: Vec<f64>) -> Self {
        let v = model.evaluate(&r);
        Self { r, v }
    }

    pub fn r(&self) -> &[f64] {
        &self.r
    }

    pub fn v(&self) -> &[f64] {
        &self.v
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.r.iter().copied().zip(self.v.iter().copied())
    }

    /// Maximal runs of consecutive finite points.
    /// A plot draws each run as its own line so the core never gets joined to the well.
    pub fn finite_runs(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for (r, v) in self.points() {
            if v.is_finite() {
                current.push((r, v));
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }

    /// Distances at which the energy is infinite
    pub fn core_points(&self) -> impl Iterator<Item = f64> + '_ {
        self.points()
            .filter(|(_, v)| v.is_infinite() && v.is_sign_positive())
            .map(|(r, _)| r)
    }
}
