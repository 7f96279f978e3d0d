use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use fitrep::{build_field_map, read_form_record, FormRecord};
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::EnvFilter;
use xfa_core::XfaDocument;

mod args;
mod status;
use args::Cli;
use status::StatusLine;

/// Environment variable holding the log filter (e.g. `debug`)
const LOG_ENV: &str = "FITREP_LOG";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let record = load_record(cli)?;
    let fields = build_field_map(&record);

    let mut doc = XfaDocument::open(&cli.template_path)
        .with_context(|| format!("cannot load template {}", cli.template_path.display()))?;
    let report = doc.fill_fields(&fields)?;

    if !report.dropped.is_empty() {
        tracing::info!(tags = ?report.dropped, "fields without a template element");
    }
    if cli.strict {
        report.ensure_complete()?;
    }

    doc.save(&cli.output_path)
        .with_context(|| format!("cannot write {}", cli.output_path.display()))?;

    let output = cli.output_path.to_string_lossy();
    let status = StatusLine {
        success: true,
        output: &output,
    };
    println!("{}", status.to_json()?);
    Ok(())
}

fn load_record(cli: &Cli) -> anyhow::Result<FormRecord> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open form record {}", path.display()))?;
            read_form_record(BufReader::new(file))
                .with_context(|| format!("invalid form record in {}", path.display()))
        }
        None => read_form_record(std::io::stdin().lock()).context("invalid form record on stdin"),
    }
}
