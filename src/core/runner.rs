use crate::core::Pipeline;
use crate::domain::model::PlotScene;
use crate::utils::error::Result;
use std::time::Instant;

pub struct LayoutRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LayoutRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting layout run");

        let request = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} data record(s), {} summary(ies), {} comparison(s)",
            request.data.len(),
            request.summaries.len(),
            request.comparisons.len()
        );

        let scene = self.pipeline.transform(request).await?;
        match &scene {
            PlotScene::Comparison(s) => tracing::info!(
                "Laid out {} point(s), {} summary marker(s), {} bracket(s); y-domain [{:.3}, {:.3}]",
                s.points.len(),
                s.summaries.len(),
                s.brackets.len(),
                s.y_domain[0],
                s.y_domain[1]
            ),
            PlotScene::Roc(s) => tracing::info!("Laid out ROC curve with {} point(s)", s.curve.len()),
        }

        let output_path = self.pipeline.load(scene).await?;
        tracing::info!("Scene saved to {} in {:?}", output_path, started.elapsed());

        Ok(output_path)
    }
}
