use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fill-fitrep-pdf", version)]
#[command(about = "Fill the NAVPERS 1610/2 FITREP XFA template from JSON form data", long_about = None)]
pub struct Cli {
    /// XFA template PDF to read
    pub template_path: PathBuf,

    /// Where to write the filled PDF (overwritten if present)
    pub output_path: PathBuf,

    /// Read the form record from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fail, writing nothing, if a field has no element in the template
    #[arg(long)]
    pub strict: bool,
}
