use std::collections::{HashMap, HashSet};

use crate::model::{MatchupRecord, PlayerDirectory, Position, RosterSnapshot};

/// A bench player who outscored a starter at the same position this week.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapSuggestion {
    pub starter_id: String,
    pub bench_id: String,
    /// Strictly positive by construction.
    pub point_diff: f64,
}

/// Outcome of swap analysis for one side of a matchup.
///
/// `NoData` (roster, starters, or per-player points missing) is distinct
/// from `Suggestions(vec![])` (full data, no improvement found); the
/// presentation layer renders different copy for each.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapReport {
    NoData,
    Suggestions(Vec<SwapSuggestion>),
}

impl SwapReport {
    pub fn is_no_data(&self) -> bool {
        matches!(self, SwapReport::NoData)
    }
}

/// Find, for each flex-eligible starter, the best bench player at the same
/// position who scored strictly more this week.
///
/// Ties on bench score are broken by first occurrence in the roster's
/// stored `player_ids` order, so results are reproducible for identical
/// inputs. A bench player may back multiple starters; each starter yields
/// at most one suggestion, emitted in starter order.
pub fn recommend_swaps(
    roster: Option<&RosterSnapshot>,
    matchup: &MatchupRecord,
    directory: &PlayerDirectory,
) -> SwapReport {
    let Some(roster) = roster else {
        return SwapReport::NoData;
    };
    let Some(starters) = matchup.starters.as_ref() else {
        return SwapReport::NoData;
    };
    let Some(points) = matchup.players_points.as_ref() else {
        return SwapReport::NoData;
    };

    let starter_set: HashSet<&str> = starters.iter().map(String::as_str).collect();

    let mut suggestions = Vec::new();
    for starter_id in starters {
        let Some(starter) = directory.get(starter_id) else {
            continue;
        };
        let Some(position) = starter.position else {
            continue;
        };
        if !position.is_flex_eligible() {
            continue;
        }

        let starter_points = score_for(points, starter_id);
        if let Some((bench_id, bench_points)) =
            best_bench_candidate(roster, &starter_set, directory, points, position, starter_points)
        {
            suggestions.push(SwapSuggestion {
                starter_id: starter_id.clone(),
                bench_id: bench_id.to_string(),
                point_diff: bench_points - starter_points,
            });
        }
    }

    SwapReport::Suggestions(suggestions)
}

/// Best strictly-better bench player at `position`. Strict `>` against the
/// running best keeps the first occurrence on ties.
fn best_bench_candidate<'a>(
    roster: &'a RosterSnapshot,
    starter_set: &HashSet<&str>,
    directory: &PlayerDirectory,
    points: &HashMap<String, f64>,
    position: Position,
    starter_points: f64,
) -> Option<(&'a str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for id in &roster.player_ids {
        if starter_set.contains(id.as_str()) {
            continue;
        }
        let Some(player) = directory.get(id) else {
            continue;
        };
        if player.position != Some(position) {
            continue;
        }
        let score = score_for(points, id);
        if score <= starter_points {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((id.as_str(), score)),
        }
    }
    best
}

fn score_for(points: &HashMap<String, f64>, id: &str) -> f64 {
    points.get(id).copied().unwrap_or(0.0)
}
