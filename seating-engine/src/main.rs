use anyhow::Context;
use seating_engine::{ArrangementStore, ExportFormat, setup_environment};

const USAGE: &str = "usage: seating-engine [SNAPSHOT.json] [json|csv|stats]";

/// Output selected on the command line
enum Output {
    Export(ExportFormat),
    Stats,
}

fn parse_output(arg: &str) -> anyhow::Result<Output> {
    if arg.eq_ignore_ascii_case("stats") {
        return Ok(Output::Stats);
    }
    let format = arg
        .parse::<ExportFormat>()
        .with_context(|| format!("{arg}: expected json, csv or stats\n{USAGE}"))?;
    Ok(Output::Export(format))
}

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment();

    // 2. Arguments: optional snapshot path, optional output
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (snapshot_path, output) = match args.as_slice() {
        [] => (None, Output::Export(ExportFormat::Json)),
        [one] if one.ends_with(".json") => (Some(one.as_str()), Output::Export(ExportFormat::Json)),
        [one] => (None, parse_output(one)?),
        [path, output] => (Some(path.as_str()), parse_output(output)?),
        _ => anyhow::bail!(USAGE),
    };

    // 3. Load or seed the store
    let store = match snapshot_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read snapshot {path}"))?;
            ArrangementStore::from_json(&json, &config)
                .with_context(|| format!("failed to restore snapshot {path}"))?
        }
        None => {
            let mut store = ArrangementStore::new(&config);
            store.initialize()?;
            store
        }
    };
    tracing::info!(
        tables = store.tables().len(),
        seats = store.seats().len(),
        table_limit = store.table_limit(),
        "Arrangement loaded"
    );

    // 4. Print
    let text = match output {
        Output::Export(format) => store.export(format)?,
        Output::Stats => serde_json::to_string_pretty(&store.statistics())?,
    };
    println!("{text}");
    Ok(())
}
