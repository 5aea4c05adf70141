//! Command-line interface definitions.
//!
//! Defines the CLI structure for the vigorish binary using `clap`: one
//! subcommand per core operation plus slip persistence and configuration
//! management.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::{DEFAULT_STAKE, FULL_KELLY};

/// Sports betting slip analysis and expected-value CLI
#[derive(Parser, Debug)]
#[command(name = "vigorish")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the vigorish CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expected value of a single wager
    Ev(EvArgs),

    /// Kelly-criterion stake sizing
    Kelly(KellyArgs),

    /// Hedge stake that locks in both sides
    Hedge(HedgeArgs),

    /// Analyze a bet slip (combined odds, risk, EV)
    Analyze(AnalyzeArgs),

    /// Scan an odds board for positive-EV quotes
    Scan(ScanArgs),

    /// Browse saved slips
    #[command(subcommand)]
    Slips(SlipsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `ev` subcommand.
#[derive(Parser, Debug)]
pub struct EvArgs {
    /// Estimated true win probability, strictly between 0 and 1.
    #[arg(long)]
    pub prob: f64,

    /// Odds quote: +150, -120, or decimal like 2.5.
    #[arg(long, allow_negative_numbers = true)]
    pub odds: f64,

    /// Stake to evaluate at.
    #[arg(long, default_value_t = DEFAULT_STAKE)]
    pub stake: f64,
}

/// Arguments for the `kelly` subcommand.
#[derive(Parser, Debug)]
pub struct KellyArgs {
    /// Estimated true win probability, strictly between 0 and 1.
    #[arg(long)]
    pub prob: f64,

    /// Odds quote: +150, -120, or decimal like 2.5.
    #[arg(long, allow_negative_numbers = true)]
    pub odds: f64,

    /// Fractional-Kelly multiplier in (0, 1]; 0.5 is half-Kelly.
    #[arg(long, default_value_t = FULL_KELLY)]
    pub multiplier: f64,

    /// Bankroll; when given, the recommended stake is reported too.
    #[arg(long)]
    pub bankroll: Option<f64>,
}

/// Arguments for the `hedge` subcommand.
#[derive(Parser, Debug)]
pub struct HedgeArgs {
    /// Stake already placed on the original wager.
    #[arg(long)]
    pub stake: f64,

    /// Odds of the original wager.
    #[arg(long, allow_negative_numbers = true)]
    pub odds: f64,

    /// Current odds on the opposing outcome.
    #[arg(long, allow_negative_numbers = true)]
    pub hedge_odds: f64,
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Leg as "event,odds,probability"; repeat for multi-leg slips.
    #[arg(long = "leg", required = true, value_name = "EVENT,ODDS,PROB")]
    pub legs: Vec<LegSpec>,

    /// Stake to evaluate the ticket at.
    #[arg(long, default_value_t = DEFAULT_STAKE)]
    pub stake: f64,

    /// Bankroll for Kelly sizing of the ticket.
    #[arg(long)]
    pub bankroll: Option<f64>,

    /// Save the analyzed slip to this JSON store.
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Read the board from a JSON file instead of the live feed.
    #[arg(long, value_name = "FILE", conflicts_with = "sport")]
    pub input: Option<PathBuf>,

    /// Sport key to fetch live, e.g. americanfootball_nfl.
    #[arg(long)]
    pub sport: Option<String>,

    /// Override the configured scan stake.
    #[arg(long)]
    pub stake: Option<f64>,

    /// Probability estimator to price edges with.
    #[arg(long, value_enum, default_value = "consensus")]
    pub estimator: EstimatorKind,

    /// RNG seed for reproducible estimates.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show only the top N rows.
    #[arg(long)]
    pub top: Option<usize>,

    /// Also list sharp outlier prices per event.
    #[arg(long)]
    pub sharp: bool,

    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Selectable probability estimators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EstimatorKind {
    /// Blend of board consensus and the quote's implied probability.
    #[default]
    Consensus,
    /// Implied probability plus bounded noise.
    Perturbed,
}

/// Subcommands for `vigorish slips`.
#[derive(Subcommand, Debug)]
pub enum SlipsCommand {
    /// List saved slips.
    List(SlipStoreArg),
    /// Show one saved slip in full.
    Show(SlipShowArgs),
}

/// Shared argument for commands reading the slip store.
#[derive(Parser, Debug)]
pub struct SlipStoreArg {
    /// Path to the slip store file.
    #[arg(long, default_value = "slips.json")]
    pub store: PathBuf,
}

/// Arguments for `slips show`.
#[derive(Parser, Debug)]
pub struct SlipShowArgs {
    /// ID of the slip to show.
    pub id: Uuid,

    /// Path to the slip store file.
    #[arg(long, default_value = "slips.json")]
    pub store: PathBuf,
}

/// Subcommands for `vigorish config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from the template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Shared argument for commands that take a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// One slip leg parsed from `event,odds,probability`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegSpec {
    pub event: String,
    pub odds: f64,
    pub probability: f64,
}

impl FromStr for LegSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // rsplitn so the event label itself may contain commas
        let mut parts = s.rsplitn(3, ',');
        let probability = parts.next().unwrap_or_default().trim();
        let odds = parts.next().unwrap_or_default().trim();
        let event = parts.next().unwrap_or_default().trim();

        if event.is_empty() || odds.is_empty() || probability.is_empty() {
            return Err(format!(
                "expected \"event,odds,probability\", got {s:?}"
            ));
        }

        Ok(Self {
            event: event.to_string(),
            odds: odds
                .parse()
                .map_err(|_| format!("odds {odds:?} is not a number"))?,
            probability: probability
                .parse()
                .map_err(|_| format!("probability {probability:?} is not a number"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_command_factory_builds() {
        let _ = Cli::command();
    }

    #[test]
    fn cli_has_version_and_about() {
        let cmd = Cli::command();
        assert!(cmd.get_version().is_some());
        assert!(cmd.get_about().is_some());
        assert_eq!(cmd.get_name(), "vigorish");
    }

    #[test]
    fn parse_ev_with_negative_odds() {
        let cli = Cli::try_parse_from(["vigorish", "ev", "--prob", "0.55", "--odds", "-120"])
            .unwrap();
        if let Commands::Ev(args) = cli.command {
            assert_eq!(args.prob, 0.55);
            assert_eq!(args.odds, -120.0);
            assert_eq!(args.stake, 100.0);
        } else {
            panic!("Expected Ev command");
        }
    }

    #[test]
    fn parse_kelly_defaults_to_full() {
        let cli = Cli::try_parse_from(["vigorish", "kelly", "--prob", "0.55", "--odds", "150"])
            .unwrap();
        if let Commands::Kelly(args) = cli.command {
            assert_eq!(args.multiplier, 1.0);
            assert!(args.bankroll.is_none());
        } else {
            panic!("Expected Kelly command");
        }
    }

    #[test]
    fn parse_hedge_requires_all_three() {
        let result = Cli::try_parse_from(["vigorish", "hedge", "--stake", "100"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_analyze_collects_legs() {
        let cli = Cli::try_parse_from([
            "vigorish",
            "analyze",
            "--leg",
            "Chiefs ML,-120,0.55",
            "--leg",
            "Bills +3.5,150,0.45",
        ])
        .unwrap();
        if let Commands::Analyze(args) = cli.command {
            assert_eq!(args.legs.len(), 2);
            assert_eq!(args.legs[0].event, "Chiefs ML");
            assert_eq!(args.legs[0].odds, -120.0);
            assert_eq!(args.legs[1].probability, 0.45);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn parse_analyze_requires_a_leg() {
        let result = Cli::try_parse_from(["vigorish", "analyze"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_scan_flags() {
        let cli = Cli::try_parse_from([
            "vigorish",
            "scan",
            "--input",
            "board.json",
            "--estimator",
            "perturbed",
            "--seed",
            "42",
            "--top",
            "5",
        ])
        .unwrap();
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("board.json")));
            assert_eq!(args.estimator, EstimatorKind::Perturbed);
            assert_eq!(args.seed, Some(42));
            assert_eq!(args.top, Some(5));
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn scan_input_conflicts_with_sport() {
        let result = Cli::try_parse_from([
            "vigorish",
            "scan",
            "--input",
            "board.json",
            "--sport",
            "basketball_nba",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_parse_anywhere() {
        let cli = Cli::try_parse_from([
            "vigorish",
            "--json",
            "ev",
            "--prob",
            "0.5",
            "--odds",
            "150",
            "-q",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn leg_spec_parses_commas_in_event() {
        let spec: LegSpec = "Chiefs, moneyline,-120,0.55".parse().unwrap();
        assert_eq!(spec.event, "Chiefs, moneyline");
        assert_eq!(spec.odds, -120.0);
        assert_eq!(spec.probability, 0.55);
    }

    #[test]
    fn leg_spec_rejects_malformed_input() {
        assert!("only-an-event".parse::<LegSpec>().is_err());
        assert!("event,notanumber,0.5".parse::<LegSpec>().is_err());
        assert!("event,150,notanumber".parse::<LegSpec>().is_err());
    }

    #[test]
    fn config_subcommands_parse() {
        assert!(Cli::try_parse_from(["vigorish", "config", "init"]).is_ok());
        assert!(Cli::try_parse_from(["vigorish", "config", "show"]).is_ok());
        assert!(Cli::try_parse_from(["vigorish", "config", "validate"]).is_ok());
    }

    #[test]
    fn slips_show_requires_valid_uuid() {
        let result = Cli::try_parse_from(["vigorish", "slips", "show", "not-a-uuid"]);
        assert!(result.is_err());
    }
}
