use crate::core::plot::layout_plot;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{LayoutScene, PlotRequest, PlotScene, PositionedBracket, RocScene};
use crate::utils::error::Result;
use serde::Serialize;

/// Reads a plot request from storage, lays it out and writes the scene back.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, name: &str) -> String {
        format!("{}/{}", self.config.output_path().trim_end_matches('/'), name)
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }

    async fn write_csv<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row)?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?;

        let path = self.output_file(name);
        tracing::debug!("Writing {} row(s) to {}", rows.len(), path);
        self.storage.write_file(&path, &data).await?;
        Ok(path)
    }

    async fn write_comparison_tables(&self, scene: &LayoutScene) -> Result<()> {
        self.write_csv("points.csv", &scene.points).await?;
        self.write_csv("summaries.csv", &scene.summaries).await?;
        let brackets: Vec<BracketRow> = scene.brackets.iter().map(BracketRow::from).collect();
        self.write_csv("brackets.csv", &brackets).await?;
        Ok(())
    }

    async fn write_roc_table(&self, scene: &RocScene) -> Result<()> {
        self.write_csv("roc.csv", &scene.curve).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct BracketRow<'a> {
    x_start: f64,
    x_end: f64,
    y: f64,
    level: usize,
    p_value: f64,
    label: &'a str,
}

impl<'a> From<&'a PositionedBracket> for BracketRow<'a> {
    fn from(b: &'a PositionedBracket) -> Self {
        Self {
            x_start: b.x_start,
            x_end: b.x_end,
            y: b.y,
            level: b.level,
            p_value: b.p_value,
            label: b.label.as_str(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    async fn extract(&self) -> Result<PlotRequest> {
        tracing::debug!("Reading plot request from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;
        let request: PlotRequest = serde_json::from_slice(&bytes)?;
        Ok(request)
    }

    async fn transform(&self, request: PlotRequest) -> Result<PlotScene> {
        layout_plot(&request, &self.config.layout_options())
    }

    async fn load(&self, scene: PlotScene) -> Result<String> {
        if self.wants("csv") {
            match &scene {
                PlotScene::Comparison(s) => self.write_comparison_tables(s).await?,
                PlotScene::Roc(s) => self.write_roc_table(s).await?,
            }
        }

        // scene.json is always written; it is the primary output
        let path = self.output_file("scene.json");
        let json = serde_json::to_vec_pretty(&scene)?;
        tracing::debug!("Writing scene ({} bytes) to {}", json.len(), path);
        self.storage.write_file(&path, &json).await?;

        Ok(path)
    }
}
