use std::collections::HashSet;

use crate::{
    animation::tween::{Transition, Tween},
    chart::model::{ChartConfig, Frame},
    foundation::core::EntityKey,
    layout::matcher::{Match, PreviousIndex},
};

/// How a row participates in a frame transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPhase {
    /// New entity sliding in from off-canvas.
    Enter,
    /// Entity present in both frames, moving from its old rank to its new one.
    Update,
    /// Entity dropped from the current frame, sliding off-canvas.
    Exit,
}

/// Vertical motion of one entity row.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RowMotion {
    /// Entity the row belongs to.
    pub key: EntityKey,
    /// Enter, update or exit.
    pub phase: RowPhase,
    /// Rank in the previous frame, if any.
    pub from_rank: Option<usize>,
    /// Rank in the current frame, `None` for exits.
    pub to_rank: Option<usize>,
    /// Row y endpoints.
    pub y: Transition<f64>,
}

impl Tween for RowMotion {
    type Output = f64;

    fn at(&self, progress: f64) -> f64 {
        self.y.at(progress)
    }
}

/// Row motions for every entity of `current`, in current rank order.
pub fn current_rows(
    current: &Frame,
    previous: &PreviousIndex<'_>,
    config: &ChartConfig,
) -> Vec<RowMotion> {
    current
        .entities
        .iter()
        .enumerate()
        .map(|(rank, record)| {
            let to = config.row_y(rank);
            match previous.lookup(record.key.as_str()) {
                Match::Found { rank: prev, .. } => RowMotion {
                    key: record.key.clone(),
                    phase: RowPhase::Update,
                    from_rank: Some(prev),
                    to_rank: Some(rank),
                    y: Transition::new(config.row_y(prev), to),
                },
                Match::Absent => RowMotion {
                    key: record.key.clone(),
                    phase: RowPhase::Enter,
                    from_rank: None,
                    to_rank: Some(rank),
                    y: Transition::new(config.offscreen_y, to),
                },
            }
        })
        .collect()
}

/// Row motions for entities of `previous` that `current` no longer contains, in previous
/// rank order.
pub fn exit_rows(
    previous: Option<&Frame>,
    current: &Frame,
    config: &ChartConfig,
) -> Vec<RowMotion> {
    let Some(previous) = previous else {
        return Vec::new();
    };
    let live: HashSet<&str> = current.entities.iter().map(|e| e.key.as_str()).collect();
    previous
        .entities
        .iter()
        .enumerate()
        .filter(|(_, e)| !live.contains(e.key.as_str()))
        .map(|(rank, e)| RowMotion {
            key: e.key.clone(),
            phase: RowPhase::Exit,
            from_rank: Some(rank),
            to_rank: None,
            y: Transition::new(config.row_y(rank), config.offscreen_y),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/rows.rs"]
mod tests;
