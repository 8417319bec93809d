use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{MatchupRecord, Player, PlayerDirectory, Position, RosterSnapshot};

// Raw payload shapes as the league service sends them. Fields we do not
// consume are ignored by serde rather than modeled.

#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    team: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRoster {
    roster_id: u64,
    #[serde(default)]
    owner_id: Option<String>,
    #[serde(default)]
    players: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawMatchup {
    #[serde(default)]
    matchup_id: Option<u64>,
    roster_id: u64,
    #[serde(default)]
    points: Option<f64>,
    #[serde(default)]
    starters: Option<Vec<String>>,
    #[serde(default)]
    players_points: Option<HashMap<String, f64>>,
}

/// Parse the service's full player map into a directory snapshot.
///
/// Positions outside the closed QB/RB/WR/TE/K/DEF set (with `DST` folded
/// into `DEF`) come through as `None` and are excluded from all counting
/// downstream. A `"null"` or empty payload parses to an empty directory.
pub fn parse_players_json(raw: &str) -> Result<PlayerDirectory> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(PlayerDirectory::new());
    }

    let players: HashMap<String, RawPlayer> =
        serde_json::from_str(trimmed).context("invalid players json")?;

    Ok(players
        .into_iter()
        .map(|(id, p)| {
            let position = p.position.as_deref().and_then(Position::parse);
            (
                id.clone(),
                Player {
                    id,
                    full_name: p.full_name,
                    position,
                    team: p.team,
                },
            )
        })
        .collect())
}

/// Parse a league's roster list. A roster with a null player list becomes
/// an empty (not absent) roster; the stored player order is preserved.
pub fn parse_rosters_json(raw: &str) -> Result<Vec<RosterSnapshot>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    let rosters: Vec<RawRoster> =
        serde_json::from_str(trimmed).context("invalid rosters json")?;

    Ok(rosters
        .into_iter()
        .map(|r| RosterSnapshot {
            roster_id: r.roster_id,
            owner_id: r.owner_id,
            player_ids: r.players.unwrap_or_default(),
        })
        .collect())
}

/// Parse one week's matchup records.
///
/// Records without a matchup id (bye weeks) cannot be paired and are
/// dropped here, before the pairing invariant is checked. `starters` and
/// `players_points` keep their absent-vs-empty distinction.
pub fn parse_matchups_json(raw: &str) -> Result<Vec<MatchupRecord>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    let matchups: Vec<RawMatchup> =
        serde_json::from_str(trimmed).context("invalid matchups json")?;

    let mut out = Vec::with_capacity(matchups.len());
    for m in matchups {
        let Some(matchup_id) = m.matchup_id else {
            log::debug!("skipping roster {} with no matchup id", m.roster_id);
            continue;
        };
        out.push(MatchupRecord {
            matchup_id,
            roster_id: m.roster_id,
            points: m.points,
            starters: m.starters,
            players_points: m.players_points,
        });
    }
    Ok(out)
}
