//! Comparison scene builder: points, summary markers, brackets and domain.

use crate::core::axis::{compute_domain, finite_extent};
use crate::core::brackets::assign_levels;
use crate::core::comparisons::{normalize_comparisons, project_to_intervals};
use crate::core::jitter::{clamp_strength, jitter};
use crate::domain::model::{
    Comparison, GroupId, GroupSummary, LayoutOptions, LayoutScene, Observation, PositionedBracket,
    PositionedPoint, PositionedSummary, RawComparison, Significance,
};
use std::collections::BTreeSet;

/// Lay out a grouped comparison plot from raw comparison records.
pub fn layout_comparison_scene(
    observations: &[Observation],
    summaries: &[GroupSummary],
    comparisons: &[RawComparison],
    options: &LayoutOptions,
) -> LayoutScene {
    let comparisons = normalize_comparisons(comparisons);
    build_scene(observations, summaries, &comparisons, options)
}

/// Explicit order de-duplicated, or the sorted distinct groups of the data.
pub fn resolve_group_order(
    explicit: Option<&[GroupId]>,
    observations: &[Observation],
    summaries: &[GroupSummary],
) -> Vec<GroupId> {
    match explicit {
        Some(order) => {
            let mut resolved: Vec<GroupId> = Vec::with_capacity(order.len());
            for group in order {
                if !resolved.contains(group) {
                    resolved.push(group.clone());
                }
            }
            resolved
        }
        None => observations
            .iter()
            .map(|o| o.group.as_str())
            .chain(summaries.iter().map(|s| s.group.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Same as [`layout_comparison_scene`] for already-canonical comparisons.
pub fn build_scene(
    observations: &[Observation],
    summaries: &[GroupSummary],
    comparisons: &[Comparison],
    options: &LayoutOptions,
) -> LayoutScene {
    let groups = resolve_group_order(options.group_order.as_deref(), observations, summaries);
    let index_of = |group: &str| groups.iter().position(|g| g == group).map(|i| i + 1);
    let strength = clamp_strength(options.jitter_strength);
    let style = &options.style;

    let points: Vec<PositionedPoint> = observations
        .iter()
        .filter(|o| o.value.is_finite())
        .filter_map(|o| {
            let index = index_of(&o.group)?;
            Some(PositionedPoint {
                group: o.group.clone(),
                x: index as f64 + jitter(o.value, strength),
                y: o.value,
                color: style.group_color(index).to_string(),
            })
        })
        .collect();

    let mut ci_bounds = Vec::new();
    let positioned_summaries: Vec<PositionedSummary> = summaries
        .iter()
        .filter_map(|s| {
            let mean = s.mean.filter(|m| m.is_finite())?;
            let index = index_of(&s.group)?;
            let lower = s.ci_lower.filter(|v| v.is_finite()).unwrap_or(mean);
            let upper = s.ci_upper.filter(|v| v.is_finite()).unwrap_or(mean);
            ci_bounds.push(lower);
            ci_bounds.push(upper);
            Some(PositionedSummary {
                group: s.group.clone(),
                x: index as f64,
                y: mean,
                error_neg: mean - lower,
                error_pos: upper - mean,
                color: style.summary_color.clone(),
            })
        })
        .collect();

    let skipped = observations.len() - points.len();
    if skipped > 0 {
        tracing::debug!("Skipped {} observation(s) without a finite value or known group", skipped);
    }

    let assignment = assign_levels(project_to_intervals(comparisons, &groups));

    let values = points
        .iter()
        .map(|p| p.y)
        .chain(positioned_summaries.iter().map(|s| s.y));
    let Some(domain) = compute_domain(values, finite_extent(ci_bounds), assignment.max_level)
    else {
        tracing::debug!("No finite values to lay out; returning empty scene");
        return LayoutScene::empty();
    };

    let brackets = assignment
        .brackets
        .iter()
        .map(|b| PositionedBracket {
            x_start: b.start_index as f64,
            x_end: b.end_index as f64,
            y: domain.bracket_y(b.level),
            level: b.level,
            p_value: b.p_value,
            label: Significance::from_p_value(b.p_value),
            color: style.bracket_color.clone(),
        })
        .collect();

    LayoutScene {
        groups,
        points,
        summaries: positioned_summaries,
        brackets,
        y_domain: domain.as_array(),
    }
}
