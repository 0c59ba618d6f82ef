pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::LayoutConfig;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{
    clusters::{diagonal_cluster_boxes, extract_cluster_boundaries},
    jitter::jitter,
    pipeline::FilePipeline,
    plot::layout_plot,
    roc::{detect_plot_kind, layout_roc_scene},
    runner::LayoutRunner,
    scene::{build_scene, layout_comparison_scene},
};
pub use crate::domain::model::*;
pub use crate::utils::error::{LayoutError, Result};
