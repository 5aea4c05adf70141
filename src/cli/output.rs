//! Shared CLI output helpers.

use owo_colors::OwoColorize;
use std::fmt::Display;
use tabled::{Table, Tabled};

use crate::domain::{
    EvBreakdown, HedgeBreakdown, KellyBreakdown, Odds, RankedBet, RiskLevel, SlipAssessment,
};
use crate::store::StoredSlip;

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<22} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("{} {message}", "⚠".yellow());
}

/// Format a signed money amount, green for positive and red for negative.
fn money(value: f64) -> String {
    let text = format!("{value:+.2}");
    if value > 0.0 {
        text.green().to_string()
    } else if value < 0.0 {
        text.red().to_string()
    } else {
        text
    }
}

/// Render an EV breakdown.
pub fn print_ev(odds: Odds, stake: f64, breakdown: &EvBreakdown) {
    section("Expected value");
    key_value("Odds", format!("{odds} (decimal {:.4})", odds.to_decimal()));
    key_value("Stake", format!("{stake:.2}"));
    key_value(
        "Implied probability",
        format!("{:.2}%", breakdown.implied_probability() * 100.0),
    );
    key_value("Expected value", money(breakdown.expected_value()));
    key_value("EV percent", format!("{:+.2}%", breakdown.ev_percent()));
    println!();
}

/// Render a Kelly breakdown.
pub fn print_kelly(odds: Odds, breakdown: &KellyBreakdown) {
    section("Kelly sizing");
    key_value("Odds", format!("{odds} (decimal {:.4})", odds.to_decimal()));
    key_value(
        "Kelly fraction",
        format!("{:.4} ({:.2}% of bankroll)", breakdown.kelly_fraction(), breakdown.kelly_fraction() * 100.0),
    );
    match breakdown.recommended_stake() {
        Some(stake) => key_value("Recommended stake", format!("{stake:.2}")),
        None => key_value("Recommended stake", "(supply --bankroll)"),
    }
    if breakdown.kelly_fraction() == 0.0 {
        warn("No edge at these odds: the recommended bet is zero");
    }
    println!();
}

/// Render a hedge breakdown.
pub fn print_hedge(stake: f64, breakdown: &HedgeBreakdown) {
    section("Hedge");
    key_value("Original stake", format!("{stake:.2}"));
    key_value("Hedge stake", format!("{:.2}", breakdown.hedge_stake()));
    key_value(
        "If original wins",
        money(breakdown.profit_if_original_wins()),
    );
    key_value("If hedge wins", money(breakdown.profit_if_hedge_wins()));
    key_value("Guaranteed", money(breakdown.guaranteed_profit()));
    println!();
}

fn risk_label(risk: RiskLevel) -> String {
    match risk {
        RiskLevel::Low => risk.to_string().green().to_string(),
        RiskLevel::Medium => risk.to_string().yellow().to_string(),
        RiskLevel::High => risk.to_string().red().to_string(),
    }
}

/// Render a slip assessment with its combined numbers.
pub fn print_slip(
    legs: usize,
    combined_odds: f64,
    combined_probability: f64,
    assessment: &SlipAssessment,
    ev: &EvBreakdown,
    kelly: Option<&KellyBreakdown>,
) {
    section("Slip analysis");
    key_value("Legs", legs);
    key_value("Combined odds", format!("{combined_odds:.4}"));
    key_value(
        "Combined win prob",
        format!("{:.2}%", combined_probability * 100.0),
    );
    key_value("Confidence", assessment.confidence_score());
    key_value("Risk", risk_label(assessment.risk()));
    key_value("Expected value", money(ev.expected_value()));
    if let Some(kelly) = kelly {
        key_value("Kelly fraction", format!("{:.4}", kelly.kelly_fraction()));
        if let Some(stake) = kelly.recommended_stake() {
            key_value("Kelly stake", format!("{stake:.2}"));
        }
    }
    for warning in assessment.warnings() {
        warn(warning);
    }
    println!();
}

#[derive(Tabled)]
struct ScanRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Matchup")]
    matchup: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Book")]
    bookmaker: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "EV")]
    expected_value: String,
    #[tabled(rename = "Edge")]
    edge: String,
    #[tabled(rename = "Score")]
    score: String,
}

/// Render ranked scan results as a table.
pub fn print_ranked(ranked: &[RankedBet]) {
    if ranked.is_empty() {
        println!("No positive-EV quotes on the board.");
        return;
    }

    let rows: Vec<ScanRow> = ranked
        .iter()
        .enumerate()
        .map(|(i, entry)| ScanRow {
            rank: i + 1,
            matchup: entry.bet().matchup().to_string(),
            outcome: entry.bet().outcome().to_string(),
            bookmaker: entry.bet().bookmaker().to_string(),
            odds: format!("{:+}", entry.bet().odds()),
            expected_value: format!("{:+.2}", entry.bet().expected_value()),
            edge: format!("{:+.3}", entry.bet().edge()),
            score: format!("{:.2}", entry.score()),
        })
        .collect();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
    println!();
    println!(
        "  {} quotes shown; estimates are heuristic, verify before betting",
        ranked.len()
    );
}

#[derive(Tabled)]
struct SlipRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Created")]
    created_at: String,
    #[tabled(rename = "Legs")]
    legs: usize,
    #[tabled(rename = "Combined odds")]
    combined_odds: String,
}

/// Render saved slips as a table.
pub fn print_slip_list(slips: &[StoredSlip]) {
    if slips.is_empty() {
        println!("No saved slips.");
        return;
    }

    let rows: Vec<SlipRow> = slips
        .iter()
        .map(|stored| SlipRow {
            id: stored.id.to_string(),
            created_at: stored.created_at.format("%Y-%m-%d %H:%M").to_string(),
            legs: stored.slip.len(),
            combined_odds: format!("{:.2}", stored.slip.combined_decimal_odds()),
        })
        .collect();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
}
