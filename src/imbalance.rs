use crate::model::PositionCounts;

/// How many risk messages survive truncation in the final report.
const MAX_RISK_MESSAGES: usize = 2;

/// Starter-count threshold below which a lineup looks incomplete.
const MIN_STARTERS: usize = 8;

/// RB+WR+TE depth threshold below which a lineup is flagged as thin.
const MIN_FLEX_DEPTH: u32 = 4;

/// One side's view for lineup comparison: display name, position buckets,
/// and the raw (pre-classification) starter count.
#[derive(Debug, Clone, Copy)]
pub struct LineupView<'a> {
    pub name: &'a str,
    pub counts: &'a PositionCounts,
    pub starter_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceReport {
    pub imbalance_messages: Vec<String>,
    pub risk_messages: Vec<String>,
}

/// Compare two opposing lineups and flag imbalances and risks.
///
/// Rule order is fixed and observable: RB then WR count diffs, then
/// missing-QB, thin-lineup, and flex-depth risks, each checked for side A
/// before side B. Risk messages keep generation order and are truncated to
/// the first two; imbalance messages are never truncated.
pub fn compare_lineups(a: LineupView<'_>, b: LineupView<'_>) -> BalanceReport {
    let mut report = BalanceReport::default();

    for (label, count_a, count_b) in [
        ("RB", a.counts.rb, b.counts.rb),
        ("WR", a.counts.wr, b.counts.wr),
    ] {
        let diff = count_a as i64 - count_b as i64;
        if diff > 1 {
            report
                .imbalance_messages
                .push(format!("{} has {} more {}(s) starting", a.name, diff, label));
        } else if diff < -1 {
            report
                .imbalance_messages
                .push(format!("{} has {} more {}(s) starting", b.name, -diff, label));
        }
    }

    for side in [&a, &b] {
        if side.counts.qb == 0 {
            report
                .risk_messages
                .push(format!("{} has no QB starting", side.name));
        }
    }

    for side in [&a, &b] {
        if side.starter_count < MIN_STARTERS {
            report.risk_messages.push(format!(
                "{} has only {} starter(s) - may be incomplete lineup",
                side.name, side.starter_count
            ));
        }
    }

    for side in [&a, &b] {
        let depth = side.counts.flex_depth();
        if depth < MIN_FLEX_DEPTH {
            report.risk_messages.push(format!(
                "{} has limited RB/WR/TE depth ({} players)",
                side.name, depth
            ));
        }
    }

    report.risk_messages.truncate(MAX_RISK_MESSAGES);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(qb: u32, rb: u32, wr: u32, te: u32, k: u32, def: u32) -> PositionCounts {
        PositionCounts {
            qb,
            rb,
            wr,
            te,
            flex: 0,
            k,
            def,
        }
    }

    fn full_lineup() -> PositionCounts {
        counts(1, 2, 3, 1, 1, 1)
    }

    #[test]
    fn rb_imbalance_names_the_heavier_side() {
        let a = counts(1, 4, 2, 1, 1, 1);
        let b = counts(1, 1, 5, 1, 1, 1);
        let report = compare_lineups(
            LineupView {
                name: "teamA",
                counts: &a,
                starter_count: 10,
            },
            LineupView {
                name: "teamB",
                counts: &b,
                starter_count: 10,
            },
        );
        assert_eq!(
            report.imbalance_messages,
            vec![
                "teamA has 3 more RB(s) starting".to_string(),
                "teamB has 3 more WR(s) starting".to_string(),
            ]
        );
        assert!(report.risk_messages.is_empty());
    }

    #[test]
    fn diff_of_one_is_not_flagged() {
        let a = counts(1, 3, 3, 1, 1, 1);
        let b = counts(1, 2, 4, 1, 1, 1);
        let report = compare_lineups(
            LineupView {
                name: "teamA",
                counts: &a,
                starter_count: 10,
            },
            LineupView {
                name: "teamB",
                counts: &b,
                starter_count: 10,
            },
        );
        assert!(report.imbalance_messages.is_empty());
    }

    #[test]
    fn missing_qb_is_a_risk() {
        let a = counts(0, 3, 3, 1, 1, 1);
        let b = full_lineup();
        let report = compare_lineups(
            LineupView {
                name: "teamA",
                counts: &a,
                starter_count: 9,
            },
            LineupView {
                name: "teamB",
                counts: &b,
                starter_count: 9,
            },
        );
        assert_eq!(report.risk_messages, vec!["teamA has no QB starting".to_string()]);
    }

    #[test]
    fn risk_messages_cap_at_two() {
        // Zero starters fires thin-lineup and flex-depth for the same side,
        // plus missing-QB first; only the first two survive.
        let empty = counts(0, 0, 0, 0, 0, 0);
        let b = full_lineup();
        let report = compare_lineups(
            LineupView {
                name: "teamA",
                counts: &empty,
                starter_count: 0,
            },
            LineupView {
                name: "teamB",
                counts: &b,
                starter_count: 9,
            },
        );
        assert_eq!(report.risk_messages.len(), 2);
        assert_eq!(report.risk_messages[0], "teamA has no QB starting");
        assert_eq!(
            report.risk_messages[1],
            "teamA has only 0 starter(s) - may be incomplete lineup"
        );
    }

    #[test]
    fn thin_flex_depth_is_flagged_for_both_sides_in_order() {
        let thin = counts(1, 1, 1, 1, 1, 1);
        let report = compare_lineups(
            LineupView {
                name: "teamA",
                counts: &thin,
                starter_count: 8,
            },
            LineupView {
                name: "teamB",
                counts: &thin,
                starter_count: 8,
            },
        );
        assert_eq!(
            report.risk_messages,
            vec![
                "teamA has limited RB/WR/TE depth (3 players)".to_string(),
                "teamB has limited RB/WR/TE depth (3 players)".to_string(),
            ]
        );
    }

    #[test]
    fn healthy_matchup_emits_nothing() {
        let a = full_lineup();
        let b = full_lineup();
        let report = compare_lineups(
            LineupView {
                name: "teamA",
                counts: &a,
                starter_count: 9,
            },
            LineupView {
                name: "teamB",
                counts: &b,
                starter_count: 9,
            },
        );
        assert_eq!(report, BalanceReport::default());
    }
}
