use geoprefix::config::{parse_config, Config};
use geoprefix::{GeoAttributes, GeoDataset};

use serde::Serialize;
use std::io::{BufRead, Write};

#[derive(Serialize)]
struct OutputLine<'a> {
    ip: &'a str,
    #[serde(flatten)]
    attributes: &'a GeoAttributes,
}

fn read_stdin_ips() -> anyhow::Result<Vec<String>> {
    let mut ips = vec![];
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let ip = line.trim();
        if !ip.is_empty() {
            ips.push(ip.to_owned());
        }
    }
    Ok(ips)
}

fn run(config: Config, ips: Vec<String>) -> anyhow::Result<()> {
    let dataset: GeoDataset = config.dataset.load()?;
    let result = dataset.lookup_with(&ips, config.strategy)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for ip in &ips {
        let line = OutputLine {
            ip,
            attributes: &result[ip],
        };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "geoprefix.toml".to_owned());

    let config = parse_config(&config_path)?;
    simple_logger::init_with_level(config.log_level)?;

    let mut ips: Vec<String> = args.collect();
    if ips.is_empty() {
        ips = read_stdin_ips()?;
    }
    log::debug!("Looking up {} addresses with {} strategy", ips.len(), config.strategy);

    run(config, ips)
}
