use cubefall::{run_viewer, Scenario, SimConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Optional YAML configuration; built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

// load here to keep main clean
fn load_config() -> Result<SimConfig> {
    let args = Args::parse();

    match args.config {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            let reader = BufReader::new(file);
            let cfg: SimConfig = serde_yaml::from_reader(reader)
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            Ok(cfg)
        }
        None => Ok(SimConfig::default()),
    }
}

fn main() -> Result<()> {
    let cfg = load_config()?;

    let scenario = Scenario::build_scenario(cfg);
    run_viewer(scenario);

    Ok(())
}
