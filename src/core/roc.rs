//! Receiver-operating-characteristic scenes. Bypasses jitter, domain
//! padding and bracket scheduling entirely.

use crate::domain::model::{PlotKind, RocPoint, RocScene};
use serde_json::Value;

/// `Roc` when every record carries numeric `x` and `y` and no `group`.
pub fn detect_plot_kind(records: &[Value]) -> PlotKind {
    let is_roc_record = |record: &Value| {
        record.as_object().is_some_and(|obj| {
            !obj.contains_key("group")
                && obj.get("x").is_some_and(Value::is_number)
                && obj.get("y").is_some_and(Value::is_number)
        })
    };

    if !records.is_empty() && records.iter().all(is_roc_record) {
        PlotKind::Roc
    } else {
        PlotKind::Comparison
    }
}

pub fn layout_roc_scene(points: &[RocPoint]) -> RocScene {
    let mut curve: Vec<RocPoint> = points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| RocPoint {
            x: p.x.clamp(0.0, 1.0),
            y: p.y.clamp(0.0, 1.0),
        })
        .collect();

    curve.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    RocScene {
        curve,
        chance_line: [RocPoint { x: 0.0, y: 0.0 }, RocPoint { x: 1.0, y: 1.0 }],
        x_domain: [0.0, 1.0],
        y_domain: [0.0, 1.0],
    }
}
