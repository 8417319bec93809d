use std::collections::HashMap;

use rayon::prelude::*;
use thiserror::Error;

use crate::imbalance::{compare_lineups, LineupView};
use crate::model::{
    count_positions, MatchupRecord, PlayerDirectory, PositionCounts, RosterSnapshot,
};
use crate::swaps::{recommend_swaps, SwapReport};

/// Structural errors found while pairing weekly matchup records. Anything
/// here means no report is produced for the week: a one-sided or guessed
/// report is worse than none.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("matchup {matchup_id} has {count} record(s), expected exactly 2")]
    BadPairCount { matchup_id: u64, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leader {
    Team1,
    Team2,
    Tied,
}

/// Per-matchup diagnostics for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    /// Absolute score gap, never negative.
    pub score_diff: f64,
    pub leader: Leader,
    pub imbalance_messages: Vec<String>,
    /// At most two entries after truncation.
    pub risk_messages: Vec<String>,
}

/// One side's share of the report: counts and swap analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SideReport {
    pub roster_id: u64,
    pub team_name: String,
    pub counts: PositionCounts,
    pub swaps: SwapReport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupReport {
    pub matchup_id: u64,
    pub insight: Insight,
    pub sides: [SideReport; 2],
}

/// Two opposing records sharing a matchup id, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupPair {
    pub matchup_id: u64,
    pub records: [MatchupRecord; 2],
}

/// Group weekly records into pairs by matchup id.
///
/// Pair order follows the first appearance of each id in the input, not any
/// map iteration order; callers get byte-identical output for identical
/// input. Any id with a record count other than 2 rejects the whole week.
pub fn group_matchup_pairs(records: &[MatchupRecord]) -> Result<Vec<MatchupPair>, PairingError> {
    let mut order: Vec<u64> = Vec::new();
    let mut groups: HashMap<u64, Vec<&MatchupRecord>> = HashMap::new();
    for record in records {
        let bucket = groups.entry(record.matchup_id).or_default();
        if bucket.is_empty() {
            order.push(record.matchup_id);
        }
        bucket.push(record);
    }

    let mut pairs = Vec::with_capacity(order.len());
    for matchup_id in order {
        let bucket = &groups[&matchup_id];
        if bucket.len() != 2 {
            log::warn!(
                "rejecting week: matchup {} has {} record(s)",
                matchup_id,
                bucket.len()
            );
            return Err(PairingError::BadPairCount {
                matchup_id,
                count: bucket.len(),
            });
        }
        pairs.push(MatchupPair {
            matchup_id,
            records: [bucket[0].clone(), bucket[1].clone()],
        });
    }
    Ok(pairs)
}

/// Default display label for a side, matching the league browser's copy.
pub fn roster_label(roster_id: u64) -> String {
    format!("Roster {roster_id}")
}

/// Assemble the full report for one matchup pair. Pure assembly over the
/// counting, comparison, and swap steps; no additional computation.
pub fn compose_insight(
    pair: &MatchupPair,
    rosters: &HashMap<u64, RosterSnapshot>,
    directory: &PlayerDirectory,
) -> MatchupReport {
    let [team1, team2] = &pair.records;
    let name1 = roster_label(team1.roster_id);
    let name2 = roster_label(team2.roster_id);

    let empty: Vec<String> = Vec::new();
    let starters1 = team1.starters.as_deref().unwrap_or(&empty);
    let starters2 = team2.starters.as_deref().unwrap_or(&empty);
    let counts1 = count_positions(starters1, directory);
    let counts2 = count_positions(starters2, directory);

    let balance = compare_lineups(
        LineupView {
            name: &name1,
            counts: &counts1,
            starter_count: starters1.len(),
        },
        LineupView {
            name: &name2,
            counts: &counts2,
            starter_count: starters2.len(),
        },
    );

    let points1 = team1.points.unwrap_or(0.0);
    let points2 = team2.points.unwrap_or(0.0);
    let raw_diff = points1 - points2;
    let leader = if raw_diff == 0.0 {
        Leader::Tied
    } else if raw_diff > 0.0 {
        Leader::Team1
    } else {
        Leader::Team2
    };

    let swaps1 = recommend_swaps(rosters.get(&team1.roster_id), team1, directory);
    let swaps2 = recommend_swaps(rosters.get(&team2.roster_id), team2, directory);

    MatchupReport {
        matchup_id: pair.matchup_id,
        insight: Insight {
            score_diff: raw_diff.abs(),
            leader,
            imbalance_messages: balance.imbalance_messages,
            risk_messages: balance.risk_messages,
        },
        sides: [
            SideReport {
                roster_id: team1.roster_id,
                team_name: name1,
                counts: counts1,
                swaps: swaps1,
            },
            SideReport {
                roster_id: team2.roster_id,
                team_name: name2,
                counts: counts2,
                swaps: swaps2,
            },
        ],
    }
}

/// Compute reports for a whole scoring week.
///
/// Pairing runs first so a malformed week is rejected before any analysis.
/// Pairs are then independent; they are computed in parallel and collected
/// back in pair order.
pub fn analyze_week(
    matchups: &[MatchupRecord],
    rosters: &[RosterSnapshot],
    directory: &PlayerDirectory,
) -> Result<Vec<MatchupReport>, PairingError> {
    let pairs = group_matchup_pairs(matchups)?;
    let roster_map: HashMap<u64, RosterSnapshot> = rosters
        .iter()
        .map(|r| (r.roster_id, r.clone()))
        .collect();

    Ok(pairs
        .par_iter()
        .map(|pair| compose_insight(pair, &roster_map, directory))
        .collect())
}
