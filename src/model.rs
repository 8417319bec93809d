use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Closed set of lineup positions. The league service reports team defenses
/// as `DST`; we fold that into `Def` at parse time so downstream code only
/// ever sees one spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Def,
}

impl Position {
    /// Classify a raw position string. Returns `None` for anything outside
    /// the closed set (IDP slots, empty strings, future additions) — those
    /// players are excluded from every count rather than guessed at.
    pub fn parse(raw: &str) -> Option<Position> {
        match raw.trim() {
            "QB" => Some(Position::Qb),
            "RB" => Some(Position::Rb),
            "WR" => Some(Position::Wr),
            "TE" => Some(Position::Te),
            "K" => Some(Position::K),
            "DEF" | "DST" => Some(Position::Def),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Def => "DEF",
        }
    }

    /// RB/WR/TE — positions that can occupy a flexible roster slot and the
    /// only ones the swap recommender will consider.
    pub fn is_flex_eligible(self) -> bool {
        matches!(self, Position::Rb | Position::Wr | Position::Te)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub full_name: Option<String>,
    pub position: Option<Position>,
    pub team: Option<String>,
}

/// Snapshot of the league's player reference data, keyed by player id.
/// Refreshed by a collaborator on its own cadence; the engine only ever
/// sees one immutable snapshot per invocation.
pub type PlayerDirectory = HashMap<String, Player>;

/// All players ever rostered by a team, not just this week's starters.
/// `player_ids` preserves the stored order of the source payload; swap
/// tie-breaking depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub roster_id: u64,
    pub owner_id: Option<String>,
    pub player_ids: Vec<String>,
}

/// One side of a weekly matchup. `starters` and `players_points` are
/// `Option` because the service omits them for unscored or pre-lineup
/// weeks; absent is meaningfully different from empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub matchup_id: u64,
    pub roster_id: u64,
    pub points: Option<f64>,
    pub starters: Option<Vec<String>>,
    pub players_points: Option<HashMap<String, f64>>,
}

/// Starter counts per position bucket.
///
/// `flex` mirrors the source system: the field exists but the counting rule
/// never increments it — a starter in a flex slot is counted under its real
/// position. Downstream code must not read anything into `flex`.
// TODO: confirm with product whether flex slots should be counted
// separately; today the bucket is always 0 by design of the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCounts {
    pub qb: u32,
    pub rb: u32,
    pub wr: u32,
    pub te: u32,
    pub flex: u32,
    pub k: u32,
    pub def: u32,
}

impl PositionCounts {
    /// RB+WR+TE — how many flex-eligible bodies are in the lineup.
    pub fn flex_depth(&self) -> u32 {
        self.rb + self.wr + self.te
    }

    /// Sum of all classified starters. Always ≤ the raw starter count
    /// because unclassified players are dropped, not counted.
    pub fn classified_total(&self) -> u32 {
        self.qb + self.rb + self.wr + self.te + self.k + self.def
    }
}

/// Classify a starter list into position buckets.
///
/// Total over its inputs: ids missing from the directory are skipped
/// silently (the id still shows up elsewhere for display), and an empty
/// starter list yields all-zero counts.
pub fn count_positions(starters: &[String], directory: &PlayerDirectory) -> PositionCounts {
    let mut counts = PositionCounts::default();
    for id in starters {
        let Some(player) = directory.get(id) else {
            continue;
        };
        match player.position {
            Some(Position::Qb) => counts.qb += 1,
            Some(Position::Rb) => counts.rb += 1,
            Some(Position::Wr) => counts.wr += 1,
            Some(Position::Te) => counts.te += 1,
            Some(Position::K) => counts.k += 1,
            Some(Position::Def) => counts.def += 1,
            None => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(entries: &[(&str, &str)]) -> PlayerDirectory {
        entries
            .iter()
            .map(|(id, pos)| {
                (
                    (*id).to_string(),
                    Player {
                        id: (*id).to_string(),
                        full_name: Some(format!("Player {id}")),
                        position: Position::parse(pos),
                        team: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn position_parse_normalizes_dst() {
        assert_eq!(Position::parse("DST"), Some(Position::Def));
        assert_eq!(Position::parse("DEF"), Some(Position::Def));
        assert_eq!(Position::parse("qb"), None);
        assert_eq!(Position::parse("LB"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn count_positions_buckets_and_drops() {
        let dir = directory(&[
            ("1", "QB"),
            ("2", "RB"),
            ("3", "RB"),
            ("4", "WR"),
            ("5", "DST"),
            ("6", "LB"),
        ]);
        let starters: Vec<String> =
            ["1", "2", "3", "4", "5", "6", "missing"].map(String::from).to_vec();
        let counts = count_positions(&starters, &dir);
        assert_eq!(counts.qb, 1);
        assert_eq!(counts.rb, 2);
        assert_eq!(counts.wr, 1);
        assert_eq!(counts.def, 1);
        assert_eq!(counts.flex, 0);
        assert!(counts.classified_total() as usize <= starters.len());
    }

    #[test]
    fn count_positions_empty_is_zero() {
        let counts = count_positions(&[], &PlayerDirectory::new());
        assert_eq!(counts, PositionCounts::default());
    }

    #[test]
    fn count_positions_is_order_independent() {
        let dir = directory(&[("1", "QB"), ("2", "RB"), ("3", "WR"), ("4", "TE")]);
        let a: Vec<String> = ["1", "2", "3", "4"].map(String::from).to_vec();
        let b: Vec<String> = ["4", "3", "2", "1"].map(String::from).to_vec();
        assert_eq!(count_positions(&a, &dir), count_positions(&b, &dir));
    }
}
