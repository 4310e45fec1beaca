/// Default parameters shown when a model is first selected
pub const DEFAULT_EPSILON_OVER_KB: f64 = 120.0; // K
pub const DEFAULT_SIGMA: f64 = 3.4; // Angstrom
pub const DEFAULT_DISTANCE: f64 = 4.0; // Angstrom

// Half-width of the "magnetic" range around sigma and r_min
pub const DETENT_WIDTH: f64 = 0.05;

pub const DEFAULT_NUM_POINTS: usize = 1000;
pub const MAX_NUM_POINTS: usize = 100_000;
pub const PLOT_MAX_DISTANCE: f64 = 10.0;
