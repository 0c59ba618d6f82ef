use crate::core::roc::{detect_plot_kind, layout_roc_scene};
use crate::core::scene::layout_comparison_scene;
use crate::domain::model::{LayoutOptions, Observation, PlotKind, PlotRequest, PlotScene, RocPoint};
use crate::utils::error::{LayoutError, Result};
use serde::de::DeserializeOwned;

/// Dispatch a request to the comparison or ROC layout by the shape of its data.
pub fn layout_plot(request: &PlotRequest, options: &LayoutOptions) -> Result<PlotScene> {
    match detect_plot_kind(&request.data) {
        PlotKind::Roc => {
            let points: Vec<RocPoint> = parse_records(&request.data)?;
            tracing::debug!("Laying out ROC curve with {} point(s)", points.len());
            Ok(PlotScene::Roc(layout_roc_scene(&points)))
        }
        PlotKind::Comparison => {
            let observations: Vec<Observation> = parse_records(&request.data)?;
            tracing::debug!(
                "Laying out {} observation(s), {} summary(ies), {} comparison(s)",
                observations.len(),
                request.summaries.len(),
                request.comparisons.len()
            );
            Ok(PlotScene::Comparison(layout_comparison_scene(
                &observations,
                &request.summaries,
                &request.comparisons,
                options,
            )))
        }
    }
}

fn parse_records<T: DeserializeOwned>(records: &[serde_json::Value]) -> Result<Vec<T>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value(record.clone()).map_err(|e| LayoutError::InvalidInput {
                message: format!("data[{}]: {}", i, e),
            })
        })
        .collect()
}
