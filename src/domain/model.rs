use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a group, used both as display label and ordering key.
pub type GroupId = String;

/// Group id from a JSON scalar. Numbers keep their JSON spelling, so `1` and
/// `1.0` are different groups. Blank strings are not ids.
pub fn group_id_from_value(value: &serde_json::Value) -> Option<GroupId> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn deserialize_group_id<'de, D>(deserializer: D) -> Result<GroupId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    group_id_from_value(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("group must be a non-empty string or a number, got {}", value))
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(deserialize_with = "deserialize_group_id")]
    pub group: GroupId,
    pub value: f64,
}

impl Observation {
    pub fn new(group: impl Into<GroupId>, value: f64) -> Self {
        Self {
            group: group.into(),
            value,
        }
    }
}

/// Per-group summary statistics. A summary without a finite mean is not drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    #[serde(deserialize_with = "deserialize_group_id")]
    pub group: GroupId,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default, alias = "ciLower", alias = "ci_low")]
    pub ci_lower: Option<f64>,
    #[serde(default, alias = "ciUpper", alias = "ci_high")]
    pub ci_upper: Option<f64>,
}

impl GroupSummary {
    pub fn new(group: impl Into<GroupId>, mean: f64, ci_lower: f64, ci_upper: f64) -> Self {
        Self {
            group: group.into(),
            mean: Some(mean),
            ci_lower: Some(ci_lower),
            ci_upper: Some(ci_upper),
        }
    }
}

/// Canonical pairwise comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub group_a: GroupId,
    pub group_b: GroupId,
    pub p_value: f64,
}

impl Comparison {
    pub fn new(group_a: impl Into<GroupId>, group_b: impl Into<GroupId>, p_value: f64) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
            p_value,
        }
    }
}

/// A comparison record as received from upstream, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawComparison(pub serde_json::Value);

impl From<Comparison> for RawComparison {
    fn from(c: Comparison) -> Self {
        RawComparison(serde_json::json!({
            "group_a": c.group_a,
            "group_b": c.group_b,
            "p_value": c.p_value,
        }))
    }
}

impl From<serde_json::Value> for RawComparison {
    fn from(value: serde_json::Value) -> Self {
        RawComparison(value)
    }
}

/// Comparison projected onto 1-based group indices. `start_index < end_index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketInterval {
    pub start_index: usize,
    pub end_index: usize,
    pub level: usize,
    pub p_value: f64,
}

impl BracketInterval {
    pub fn new(start_index: usize, end_index: usize, p_value: f64) -> Self {
        Self {
            start_index,
            end_index,
            level: 0,
            p_value,
        }
    }

    /// Inclusive overlap: shared endpoints collide.
    pub fn overlaps(&self, other: &BracketInterval) -> bool {
        !(self.end_index < other.start_index || self.start_index > other.end_index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Significance {
    #[serde(rename = "***")]
    ThreeStars,
    #[serde(rename = "**")]
    TwoStars,
    #[serde(rename = "*")]
    OneStar,
    #[serde(rename = "ns")]
    NotSignificant,
}

impl Significance {
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.001 {
            Significance::ThreeStars
        } else if p < 0.01 {
            Significance::TwoStars
        } else if p < 0.05 {
            Significance::OneStar
        } else {
            Significance::NotSignificant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::ThreeStars => "***",
            Significance::TwoStars => "**",
            Significance::OneStar => "*",
            Significance::NotSignificant => "ns",
        }
    }
}

impl std::fmt::Display for Significance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors handed to the scene builder. Geometry never depends on these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    pub palette: Vec<String>,
    pub summary_color: String,
    pub bracket_color: String,
}

impl SceneStyle {
    /// Palette color for a 1-based group index.
    pub fn group_color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return &self.summary_color;
        }
        &self.palette[index.saturating_sub(1) % self.palette.len()]
    }
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            palette: ["#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            summary_color: "#222222".to_string(),
            bracket_color: "#444444".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub group_order: Option<Vec<GroupId>>,
    pub jitter_strength: f64,
    #[serde(default)]
    pub style: SceneStyle,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            group_order: None,
            jitter_strength: 0.3,
            style: SceneStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPoint {
    pub group: GroupId,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedSummary {
    pub group: GroupId,
    pub x: f64,
    pub y: f64,
    pub error_neg: f64,
    pub error_pos: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedBracket {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
    pub level: usize,
    pub p_value: f64,
    pub label: Significance,
    pub color: String,
}

/// Fully positioned, renderer-agnostic comparison plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutScene {
    pub groups: Vec<GroupId>,
    pub points: Vec<PositionedPoint>,
    pub summaries: Vec<PositionedSummary>,
    pub brackets: Vec<PositionedBracket>,
    pub y_domain: [f64; 2],
}

impl LayoutScene {
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            points: Vec::new(),
            summaries: Vec::new(),
            brackets: Vec::new(),
            y_domain: [0.0, 1.0],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.summaries.is_empty() && self.brackets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocScene {
    pub curve: Vec<RocPoint>,
    pub chance_line: [RocPoint; 2],
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
}

/// One contiguous run of identically labeled positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterBoundary<L> {
    pub label: L,
    pub start: usize,
    pub count: usize,
}

/// Square box on the diagonal of a symmetric clustered heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterBox<L> {
    pub label: L,
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    Comparison,
    Roc,
}

/// Request file consumed by the pipeline. `data` is either grouped
/// observations or ROC points; the shape decides which.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    #[serde(default)]
    pub summaries: Vec<GroupSummary>,
    #[serde(default)]
    pub comparisons: Vec<RawComparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotScene {
    Comparison(LayoutScene),
    Roc(RocScene),
}
