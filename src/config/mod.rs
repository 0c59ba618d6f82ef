pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::LayoutConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "stat-plot-layout")]
#[command(about = "Lay out comparison plots: jittered points, error bars and significance brackets")]
pub struct CliConfig {
    /// Path to a JSON plot request
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    /// Horizontal jitter strength in [0, 1]
    #[arg(long)]
    pub jitter: Option<f64>,

    /// Explicit group order, e.g. --group-order control,low,high
    #[arg(long, value_delimiter = ',')]
    pub group_order: Vec<String>,

    /// Output formats: json, csv
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the config file (if any) and apply command line overrides on top.
    pub fn resolve(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::from_file(path)?,
            None => LayoutConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut LayoutConfig) {
        if let Some(input) = &self.input {
            config.source.path = Some(input.clone());
        }
        if let Some(output_path) = &self.output_path {
            config.output.path = output_path.clone();
        }
        if let Some(jitter) = self.jitter {
            config.layout.jitter_strength = jitter;
        }
        if !self.group_order.is_empty() {
            config.layout.group_order = Some(self.group_order.clone());
        }
        if !self.format.is_empty() {
            config.output.formats = self.format.clone();
        }
    }
}
