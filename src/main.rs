// German G2P command-line tool
//
// german-g2p [--config PATH] [--no-pad] [--normalize-only] TEXT...

use anyhow::Result;
use std::path::PathBuf;

use german_g2p::{Frontend, FrontendConfig, TextNormalizer};

struct Args {
    config: Option<PathBuf>,
    no_pad: bool,
    normalize_only: bool,
    text: String,
}

fn parse_args() -> Result<Args> {
    let mut config = None;
    let mut no_pad = false;
    let mut normalize_only = false;
    let mut words = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                config = Some(PathBuf::from(path));
            }
            "--no-pad" => no_pad = true,
            "--normalize-only" => normalize_only = true,
            _ => words.push(arg),
        }
    }

    Ok(Args {
        config,
        no_pad,
        normalize_only,
        text: words.join(" "),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = parse_args()?;
    if args.text.trim().is_empty() {
        anyhow::bail!("usage: german-g2p [--config PATH] [--no-pad] [--normalize-only] TEXT...");
    }

    if args.normalize_only {
        println!("{}", TextNormalizer::new().normalize(&args.text));
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => FrontendConfig::load_from_path(path)?,
        None => FrontendConfig::default(),
    };
    if args.no_pad {
        config.pad_boundaries = false;
    }

    let frontend = Frontend::from_config(&config)?;
    let result = frontend.process(&args.text)?;

    tracing::info!("done in {}us", result.elapsed_us);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
