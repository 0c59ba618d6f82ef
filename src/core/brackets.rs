//! Greedy level assignment for significance brackets.
//!
//! Intervals are swept in `(start, end)` order and each one takes the lowest
//! level where it collides with nothing already placed. Collisions are
//! inclusive: two brackets sharing an endpoint group never share a level.

use crate::domain::model::BracketInterval;

#[derive(Debug, Clone, PartialEq)]
pub struct LevelAssignment {
    /// Intervals in processing order, each with its level set.
    pub brackets: Vec<BracketInterval>,
    /// Highest level used, `None` when there are no brackets.
    pub max_level: Option<usize>,
}

impl LevelAssignment {
    pub fn level_count(&self) -> usize {
        self.max_level.map_or(0, |l| l + 1)
    }
}

pub fn assign_levels(mut intervals: Vec<BracketInterval>) -> LevelAssignment {
    // stable: identical (start, end) keep input order
    intervals.sort_by_key(|i| (i.start_index, i.end_index));

    let mut levels: Vec<Vec<BracketInterval>> = Vec::new();
    let mut max_level: Option<usize> = None;

    for interval in intervals.iter_mut() {
        let free = levels
            .iter()
            .position(|placed| placed.iter().all(|other| !interval.overlaps(other)));
        let level = match free {
            Some(level) => level,
            None => {
                levels.push(Vec::new());
                levels.len() - 1
            }
        };

        interval.level = level;
        levels[level].push(*interval);
        max_level = Some(max_level.map_or(level, |m| m.max(level)));
    }

    tracing::debug!(
        "Placed {} bracket(s) on {} level(s)",
        intervals.len(),
        levels.len()
    );

    LevelAssignment {
        brackets: intervals,
        max_level,
    }
}
