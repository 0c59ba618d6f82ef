pub mod axis;
pub mod brackets;
pub mod clusters;
pub mod comparisons;
pub mod jitter;
pub mod pipeline;
pub mod plot;
pub mod roc;
pub mod runner;
pub mod scene;

pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
