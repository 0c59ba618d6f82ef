//! Cluster runs for the clustered heatmap.
//!
//! Labels are expected to be contiguous already. Non-contiguous labels come
//! back as several disjoint runs, which makes ordering mistakes visible.

use crate::domain::model::{ClusterBoundary, ClusterBox};

pub fn extract_cluster_boundaries<L: PartialEq + Clone>(labels: &[L]) -> Vec<ClusterBoundary<L>> {
    let mut runs: Vec<ClusterBoundary<L>> = Vec::new();

    for (position, label) in labels.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.label == *label => run.count += 1,
            _ => runs.push(ClusterBoundary {
                label: label.clone(),
                start: position,
                count: 1,
            }),
        }
    }

    runs
}

/// Square boxes along the diagonal of a symmetric heatmap.
pub fn diagonal_cluster_boxes<L: PartialEq + Clone>(labels: &[L]) -> Vec<ClusterBox<L>> {
    extract_cluster_boundaries(labels)
        .into_iter()
        .map(|run| ClusterBox {
            label: run.label,
            x: run.start,
            y: run.start,
            size: run.count,
        })
        .collect()
}
