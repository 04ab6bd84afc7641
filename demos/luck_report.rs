//! Prints luck for a small collection log.
//!
//! `RUST_LOG=clogluck=debug cargo run --example luck_report` shows cache and
//! distribution choices.

use clogluck::{
    CollectionLog, LogItem, LuckCalculator, LuckConfig, LuckError, NamedEnum, TrialLedger, TrialSource,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let calculator = LuckCalculator::standard()?;
    let config: LuckConfig = serde_json::from_str(
        r#"{ "avg_personal_cox_points": 32000, "num_invalid_barrows_kc": 35, "barrows_bolt_racks_enabled": true }"#,
    )?;

    let log = CollectionLog::new("Zezima")
        .with_kill_count(TrialSource::ChambersOfXericCompletions.name(), 1000)
        .with_kill_count(TrialSource::ChambersOfXericCmCompletions.name(), 2000)
        .with_kill_count(TrialSource::CerberusKills.name(), 350)
        .with_kill_count(TrialSource::BarrowsChestsOpened.name(), 135)
        .with_kill_count(TrialSource::ZulrahKills.name(), 2)
        .with_item(LogItem::new(20997, "Twisted bow", 4))
        .with_item(LogItem::new(13249, "Key master teleport", 9))
        .with_item(LogItem::new(4740, "Bolt rack", 3100))
        .with_item(LogItem::new(12921, "Pet snakeling", 3))
        .with_item(LogItem::new(6570, "Fire cape", 1));

    for name in ["Twisted bow", "Key master teleport", "Bolt rack", "Pet snakeling", "Fire cape", "Bronze dagger"] {
        match calculator.luck(&log, name, Some(&config)) {
            Ok(report) => println!(
                "{name}: luck {:.2}%, dryness {:.2}%, overall {:.2}% ({})",
                report.result.luck() * 100.0,
                report.result.dryness() * 100.0,
                report.result.overall_luck() * 100.0,
                report.trial_description,
            ),
            Err(LuckError::Indeterminate { item }) => {
                println!("{item}: more drops than kills, a source is missing")
            }
            Err(err) => println!("{name}: {err}"),
        }
    }

    // check one analytic answer against simulated players
    if let (Some(model), Some(item)) = (calculator.catalog().get("Key master teleport"), log.item("Key master teleport")) {
        let sampler = model.simulator(&log, Some(&config))?;
        let mut rng = StdRng::seed_from_u64(42);
        let (luck, dryness) = sampler.estimate(&mut rng, model.num_successes(item, Some(&config)) as u64, 50_000);
        println!("Key master teleport (simulated): luck {:.2}%, dryness {:.2}%", luck * 100.0, dryness * 100.0);
    }

    Ok(())
}
