//! Command-line interface: argument definitions, handlers, and output.

mod command;
pub mod output;

pub use command::{
    AnalyzeArgs, Cli, Commands, ConfigCommand, ConfigInitArgs, ConfigPathArg, EstimatorKind,
    EvArgs, HedgeArgs, KellyArgs, LegSpec, ScanArgs, SlipShowArgs, SlipStoreArg, SlipsCommand,
};

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use crate::app;
use crate::config::{Config, DEFAULT_CONFIG_TOML};
use crate::domain::{
    expected_value, hedge, kelly_stake, sharp_outliers, ConsensusBlend, EventQuotes, Leg, Odds,
    PerturbedImplied, Probability, ProbabilityEstimator, Slip, FULL_KELLY,
};
use crate::store::{JsonFileStore, SlipStore, StoredSlip};

/// Dispatch a parsed CLI invocation.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Ev(ref args) => run_ev(args, cli.json),
        Commands::Kelly(ref args) => run_kelly(args, cli.json),
        Commands::Hedge(ref args) => run_hedge(args, cli.json),
        Commands::Analyze(ref args) => run_analyze(args, cli.json),
        Commands::Scan(ref args) => run_scan(args, cli.json, cli.quiet, cli.verbose).await,
        Commands::Slips(ref command) => run_slips(command, cli.json),
        Commands::Config(ref command) => run_config(command),
    }
}

fn run_ev(args: &EvArgs, json: bool) -> anyhow::Result<()> {
    let probability = Probability::try_new(args.prob)?;
    let odds = Odds::from_quote(args.odds)?;
    let breakdown = expected_value(probability, odds, args.stake)?.rounded();

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        output::print_ev(odds, args.stake, &breakdown);
    }
    Ok(())
}

fn run_kelly(args: &KellyArgs, json: bool) -> anyhow::Result<()> {
    let probability = Probability::try_new(args.prob)?;
    let odds = Odds::from_quote(args.odds)?;
    let breakdown = kelly_stake(probability, odds, args.multiplier, args.bankroll)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        output::print_kelly(odds, &breakdown);
    }
    Ok(())
}

fn run_hedge(args: &HedgeArgs, json: bool) -> anyhow::Result<()> {
    let odds = Odds::from_quote(args.odds)?;
    let hedge_odds = Odds::from_quote(args.hedge_odds)?;
    let breakdown = hedge(args.stake, odds, hedge_odds)?.rounded();

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        output::print_hedge(args.stake, &breakdown);
    }
    Ok(())
}

fn run_analyze(args: &AnalyzeArgs, json: bool) -> anyhow::Result<()> {
    let legs = args
        .legs
        .iter()
        .map(|spec| {
            Ok(Leg::new(
                &spec.event,
                Odds::from_quote(spec.odds)?,
                Probability::try_new(spec.probability)?,
            ))
        })
        .collect::<Result<Vec<_>, crate::domain::InvalidInput>>()?;

    let slip = Slip::try_new(legs)?;
    let assessment = slip.assess();
    let ev = slip.expected_value(args.stake)?.rounded();

    let kelly = match args.bankroll {
        Some(bankroll) => Some(kelly_stake(
            slip.combined_probability(),
            Odds::decimal(slip.combined_decimal_odds())?,
            FULL_KELLY,
            Some(bankroll),
        )?),
        None => None,
    };

    if json {
        let payload = serde_json::json!({
            "legs": slip.legs(),
            "combined_decimal_odds": slip.combined_decimal_odds(),
            "combined_probability": slip.combined_probability(),
            "assessment": assessment,
            "expected_value": ev,
            "kelly": kelly,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        output::print_slip(
            slip.len(),
            slip.combined_decimal_odds(),
            slip.combined_probability().value(),
            &assessment,
            &ev,
            kelly.as_ref(),
        );
    }

    if let Some(path) = &args.save {
        let store = JsonFileStore::new(path);
        let stored = StoredSlip::new(slip, args.bankroll);
        let id = stored.id;
        store.save(stored)?;
        if !json {
            output::ok(&format!("Slip saved as {id}"));
        }
    }

    Ok(())
}

async fn run_scan(args: &ScanArgs, json: bool, quiet: bool, verbose: u8) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(stake) = args.stake {
        config.scan.stake = stake;
    }
    if let Some(sport) = &args.sport {
        config.feed.sport = sport.clone();
    }
    if verbose > 0 {
        config.logging.level = "debug".into();
    }
    // logs would corrupt machine-readable stdout
    if !quiet && !json {
        config.init_logging();
    }

    let events = load_events(args, &config).await?;
    let mut estimator = build_estimator(args.estimator, args.seed);
    let mut ranked = app::scan_and_rank(&events, &config, estimator.as_mut())?;

    if let Some(top) = args.top {
        ranked.truncate(top);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    output::print_ranked(&ranked);

    if args.sharp {
        for event in &events {
            let outliers = sharp_outliers(event, config.scan.sharp_threshold);
            if !outliers.is_empty() {
                let rendered: Vec<String> =
                    outliers.iter().map(|p| format!("{p:+}")).collect();
                output::warn(&format!(
                    "Sharp lines on {}: {}",
                    event.matchup(),
                    rendered.join(", ")
                ));
            }
        }
    }

    Ok(())
}

fn run_slips(command: &SlipsCommand, json: bool) -> anyhow::Result<()> {
    match command {
        SlipsCommand::List(args) => {
            let store = JsonFileStore::new(&args.store);
            let slips = store.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&slips)?);
            } else {
                output::print_slip_list(&slips);
            }
        }
        SlipsCommand::Show(args) => {
            let store = JsonFileStore::new(&args.store);
            let stored = store
                .get(args.id)?
                .with_context(|| format!("no slip with id {}", args.id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stored)?);
            } else {
                let assessment = stored.slip.assess();
                output::print_slip(
                    stored.slip.len(),
                    stored.slip.combined_decimal_odds(),
                    stored.slip.combined_probability().value(),
                    &assessment,
                    &stored.slip.expected_value(crate::domain::DEFAULT_STAKE)?.rounded(),
                    None,
                );
            }
        }
    }
    Ok(())
}

fn run_config(command: &ConfigCommand) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Init(args) => {
            if args.path.exists() && !args.force {
                anyhow::bail!(
                    "{} already exists; pass --force to overwrite",
                    args.path.display()
                );
            }
            std::fs::write(&args.path, DEFAULT_CONFIG_TOML)?;
            output::ok(&format!("Wrote {}", args.path.display()));
        }
        ConfigCommand::Show(args) => {
            // Validate first so we never print a broken file as if it worked.
            Config::load(&args.config)?;
            print!("{}", std::fs::read_to_string(&args.config)?);
        }
        ConfigCommand::Validate(args) => {
            Config::load(&args.config)?;
            output::ok(&format!("{} is valid", args.config.display()));
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None if Path::new("config.toml").exists() => Ok(Config::load("config.toml")?),
        None => Ok(Config::default()),
    }
}

async fn load_events(args: &ScanArgs, config: &Config) -> anyhow::Result<Vec<EventQuotes>> {
    if let Some(path) = &args.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board file {}", path.display()))?;
        return Ok(serde_json::from_str(&content)?);
    }

    #[cfg(feature = "feed")]
    {
        use crate::feed::{OddsFeed, TheOddsApiClient};

        let api_key = config.feed.resolve_api_key().context(
            "no odds API key: set [feed].api_key in config.toml or the ODDS_API_KEY environment variable",
        )?;
        let client = TheOddsApiClient::new(api_key)?;
        Ok(client.fetch_events(&config.feed.sport).await?)
    }

    #[cfg(not(feature = "feed"))]
    {
        let _ = config;
        anyhow::bail!("built without the `feed` feature; pass --input FILE")
    }
}

fn build_estimator(kind: EstimatorKind, seed: Option<u64>) -> Box<dyn ProbabilityEstimator> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match kind {
        EstimatorKind::Consensus => Box::new(ConsensusBlend::new(rng)),
        EstimatorKind::Perturbed => Box::new(PerturbedImplied::new(rng)),
    }
}
