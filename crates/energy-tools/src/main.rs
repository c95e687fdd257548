//! Command-line front end: load a profile, run every applicable rule set,
//! print the report.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use energy_core::ProfileDocument;
use energy_report::evaluate;

mod fixtures;

#[derive(Parser, Debug)]
#[command(name = "energy-tools")]
#[command(version, about = "Energy Star and ErP compliance calculator")]
struct Cli {
    /// JSON profile to evaluate; `-` reads standard input
    #[arg(short, long)]
    profile: Option<String>,

    /// Evaluate a built-in test profile
    #[arg(short, long, value_name = "1..6")]
    test: Option<u8>,

    /// Probe the local hardware and print a profile skeleton
    #[arg(long)]
    probe: bool,

    /// Write the profile document to this path
    #[arg(short = 'x', long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Write the rendered report to this path
    #[arg(short, long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Verbose diagnostics on standard error
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(all_pass) => {
            if all_pass {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    if cli.probe {
        let doc = energy_probe::probe();
        let json = doc.to_json()?;
        println!("{json}");
        if let Some(path) = &cli.export {
            fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
        }
        return Ok(true);
    }

    let doc = load_document(cli)?;
    let device = doc.build()?;
    let report = evaluate(&device)?;
    let text = report.render();
    print!("{text}");

    if let Some(path) = &cli.export {
        fs::write(path, doc.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &cli.report {
        fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(report.all_pass())
}

fn load_document(cli: &Cli) -> Result<ProfileDocument> {
    if let Some(n) = cli.test {
        let Some(fixture) = fixtures::fixture(n) else {
            bail!("no such test profile: {n} (valid: 1..6)");
        };
        println!("{}", fixture.note);
        return Ok(ProfileDocument::from_json(fixture.json)?);
    }
    if let Some(profile) = &cli.profile {
        let raw = if profile == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading standard input")?;
            buf
        } else {
            fs::read_to_string(profile).with_context(|| format!("reading {profile}"))?
        };
        return Ok(ProfileDocument::from_json(&raw)?);
    }
    bail!("no input given: pass --profile <path>, --test <n>, or --probe");
}
