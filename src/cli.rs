use clap::Parser;

use crate::potentials::ModelKind;

#[derive(Parser, Debug, Clone)]
#[command(about = "Render a pair potential and two particles at a chosen separation")]
pub struct VizConfig {
    /// Session file (TOML). Defaults are used for anything it leaves out.
    #[arg(long, default_value = "")]
    input: String,
    #[arg(long, default_value = "./out")]
    output_dir: String,
    /// Override the model from the session file, keeping epsilon/kB and sigma
    #[arg(long, value_enum)]
    model: Option<ModelKind>,
    /// Separation in Angstrom. Snaps to sigma or the potential minimum when close.
    #[arg(long)]
    distance: Option<f64>,
    /// Print every model's equation and description, then exit
    #[arg(long)]
    list_models: bool,
}

impl VizConfig {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn model(&self) -> Option<ModelKind> {
        self.model
    }

    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn list_models(&self) -> bool {
        self.list_models
    }

    pub fn toml(&self) -> String {
        format!("{}/config.toml", self.output_dir())
    }

    pub fn potential(&self) -> String {
        format!("{}/potential.png", self.output_dir())
    }

    pub fn schematic(&self) -> String {
        format!("{}/schematic.png", self.output_dir())
    }

    pub fn curve(&self) -> String {
        format!("{}/curve.json", self.output_dir())
    }
}
