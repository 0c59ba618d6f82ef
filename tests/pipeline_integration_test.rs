use anyhow::Result;
use stat_plot_layout::utils::validation::Validate;
use stat_plot_layout::{
    FilePipeline, LayoutConfig, LayoutRunner, LocalStorage, PlotScene,
};
use tempfile::TempDir;

const GROUPED_REQUEST: &str = r#"{
    "data": [
        {"group": "control", "value": 1.2},
        {"group": "control", "value": 1.4},
        {"group": "low", "value": 2.1},
        {"group": "low", "value": 2.6},
        {"group": "high", "value": 3.9},
        {"group": "high", "value": 4.4}
    ],
    "summaries": [
        {"group": "control", "mean": 1.3, "ci_lower": 1.1, "ci_upper": 1.5},
        {"group": "low", "mean": 2.35, "ciLower": 2.0, "ciUpper": 2.7},
        {"group": "high", "mean": null}
    ],
    "comparisons": [
        {"group1": "control", "group2": "high", "p_value": 0.0004},
        {"a": "control", "b": "low", "p": 0.04},
        {"from": "low", "to": "high", "pval": "0.12"},
        {"a": "control", "b": "missing", "p": 0.01}
    ]
}"#;

fn config_for(temp_path: &str, formats: &str) -> Result<LayoutConfig> {
    let normalized = temp_path.replace('\\', "/");
    let toml = format!(
        r#"
[source]
path = "{normalized}/request.json"

[layout]
jitter_strength = 0.2
group_order = ["control", "low", "high"]

[output]
path = "{normalized}/out"
formats = {formats}
"#
    );
    let config = LayoutConfig::from_toml_str(&toml)?;
    config.validate()?;
    Ok(config)
}

/// Full run: request file in, scene.json and CSV tables out.
#[tokio::test]
async fn test_grouped_request_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap();
    tokio::fs::write(temp_dir.path().join("request.json"), GROUPED_REQUEST).await?;

    let config = config_for(temp_path, r#"["json", "csv"]"#)?;
    let runner = LayoutRunner::new(FilePipeline::new(LocalStorage::new("."), config));

    let output_path = runner.run().await?;
    assert!(output_path.ends_with("out/scene.json"));

    let json = tokio::fs::read(temp_dir.path().join("out/scene.json")).await?;
    let PlotScene::Comparison(scene) = serde_json::from_slice::<PlotScene>(&json)? else {
        panic!("expected comparison scene");
    };

    assert_eq!(scene.groups, vec!["control", "low", "high"]);
    assert_eq!(scene.points.len(), 6);
    // "high" has no mean, so only two markers
    assert_eq!(scene.summaries.len(), 2);
    // the comparison against "missing" is dropped
    assert_eq!(scene.brackets.len(), 3);

    let labels: Vec<&str> = scene.brackets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["*", "***", "ns"]);

    let points_csv = tokio::fs::read_to_string(temp_dir.path().join("out/points.csv")).await?;
    assert!(points_csv.starts_with("group,x,y,color"));
    assert_eq!(points_csv.lines().count(), 7);

    let brackets_csv = tokio::fs::read_to_string(temp_dir.path().join("out/brackets.csv")).await?;
    assert_eq!(brackets_csv.lines().count(), 4);

    Ok(())
}

#[tokio::test]
async fn test_roc_request_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap();
    let request = r#"{"data": [{"x": 1.0, "y": 1.0}, {"x": 0.1, "y": 0.7}, {"x": 0.0, "y": 0.0}]}"#;
    tokio::fs::write(temp_dir.path().join("request.json"), request).await?;

    let config = config_for(temp_path, r#"["json", "csv"]"#)?;
    let runner = LayoutRunner::new(FilePipeline::new(LocalStorage::new("."), config));
    runner.run().await?;

    let json = tokio::fs::read(temp_dir.path().join("out/scene.json")).await?;
    let value: serde_json::Value = serde_json::from_slice(&json)?;
    assert_eq!(value["kind"], "roc");
    assert_eq!(value["curve"][0]["x"], 0.0);
    assert_eq!(value["curve"][1]["y"], 0.7);

    let roc_csv = tokio::fs::read_to_string(temp_dir.path().join("out/roc.csv")).await?;
    assert!(roc_csv.starts_with("x,y"));

    Ok(())
}

#[tokio::test]
async fn test_missing_request_file_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap();

    let config = config_for(temp_path, r#"["json"]"#)?;
    let runner = LayoutRunner::new(FilePipeline::new(LocalStorage::new("."), config));

    let err = runner.run().await.unwrap_err();
    assert_eq!(
        err.category(),
        stat_plot_layout::utils::error::ErrorCategory::Io
    );

    Ok(())
}
