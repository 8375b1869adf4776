use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

use roundtrip_finder::{Cli, RyanairSource, report, run_search};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Cli::parse();
    let request = args.to_request(chrono::Local::now().date_naive());
    // Reject bad input here, before the engine runs.
    request.validate()?;

    let source = RyanairSource::new()?;
    let rt = Runtime::new()?;
    let response = rt.block_on(run_search(&request, &source));

    if let Some(message) = &response.error {
        anyhow::bail!("search failed: {message}");
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        report::print_search(&request, &response);
    }
    Ok(())
}
