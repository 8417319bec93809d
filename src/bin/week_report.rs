use std::fs;
use std::path::PathBuf;

use sleeper_insight::insight::{analyze_week, Leader, MatchupReport};
use sleeper_insight::model::PlayerDirectory;
use sleeper_insight::sleeper_parse::{
    parse_matchups_json, parse_players_json, parse_rosters_json,
};
use sleeper_insight::swaps::SwapReport;

// Offline driver: point it at saved players/rosters/matchups payloads and it
// prints the insight report for the week. No network calls; useful for
// eyeballing a league dump while tuning the analyzers.
fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let players_path = path_arg(args.next(), "tests/fixtures/players.json");
    let rosters_path = path_arg(args.next(), "tests/fixtures/rosters.json");
    let matchups_path = path_arg(args.next(), "tests/fixtures/matchups.json");

    let directory = parse_players_json(&fs::read_to_string(&players_path)?)?;
    let rosters = parse_rosters_json(&fs::read_to_string(&rosters_path)?)?;
    let matchups = parse_matchups_json(&fs::read_to_string(&matchups_path)?)?;

    let reports = analyze_week(&matchups, &rosters, &directory)?;

    println!("Week report ({} matchups) - {}", reports.len(), chrono::Utc::now().to_rfc3339());
    for report in &reports {
        print_report(report, &directory);
    }
    Ok(())
}

fn path_arg(arg: Option<String>, default: &str) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default))
}

fn print_report(report: &MatchupReport, directory: &PlayerDirectory) {
    let [side1, side2] = &report.sides;
    let headline = match report.insight.leader {
        Leader::Team1 => format!("{} leads by {:.2}", side1.team_name, report.insight.score_diff),
        Leader::Team2 => format!("{} leads by {:.2}", side2.team_name, report.insight.score_diff),
        Leader::Tied => "tied".to_string(),
    };
    println!();
    println!(
        "Matchup {}: {} vs {} ({})",
        report.matchup_id, side1.team_name, side2.team_name, headline
    );

    for side in &report.sides {
        let c = &side.counts;
        println!(
            "  {}: QB {} RB {} WR {} TE {} K {} DEF {}",
            side.team_name, c.qb, c.rb, c.wr, c.te, c.k, c.def
        );
    }
    for msg in &report.insight.imbalance_messages {
        println!("  imbalance: {msg}");
    }
    for msg in &report.insight.risk_messages {
        println!("  risk: {msg}");
    }

    for side in &report.sides {
        match &side.swaps {
            SwapReport::NoData => {
                println!("  {}: not enough data for swap analysis", side.team_name);
            }
            SwapReport::Suggestions(list) if list.is_empty() => {
                println!("  {}: no better bench options", side.team_name);
            }
            SwapReport::Suggestions(list) => {
                for s in list {
                    println!(
                        "  {}: start {} over {} (+{:.2})",
                        side.team_name,
                        display_name(directory, &s.bench_id),
                        display_name(directory, &s.starter_id),
                        s.point_diff
                    );
                }
            }
        }
    }
}

/// Player name for display, falling back to the raw id when the directory
/// has no entry.
fn display_name<'a>(directory: &'a PlayerDirectory, id: &'a str) -> &'a str {
    directory
        .get(id)
        .and_then(|p| p.full_name.as_deref())
        .unwrap_or(id)
}
