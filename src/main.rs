use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use tracing::info;

use wordgrams::config::DEFAULT_ORDERS;
use wordgrams::logging::init_tracing;
use wordgrams::{driver, InputFormat, OutputTarget, RunConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Count word n-grams in a text file", long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["output", "output_dir"])))]
struct Args {
    /// Path to the input text file
    #[arg(short, long)]
    input: PathBuf,

    /// Write every order into this single file, rows prefixed with n
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write one `{n}-grams.tsv` file per order into this directory
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// N-gram orders to count
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true, default_values_t = DEFAULT_ORDERS)]
    n: Vec<i64>,

    /// Maximum rows per order, 0 for all
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    limit: i64,

    /// Lowercase every token before counting
    #[arg(long)]
    lowercase: bool,

    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Show a progress bar while counting
    #[arg(long)]
    progress: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let output = match (args.output, args.output_dir) {
        (_, Some(dir)) => OutputTarget::Directory(dir),
        (Some(path), None) => OutputTarget::Combined(path),
        (None, None) => anyhow::bail!("one of --output or --output-dir is required"),
    };
    let config = RunConfig::validate(
        args.input,
        args.format,
        output,
        &args.n,
        args.limit,
        args.lowercase,
    )?
    .with_progress(args.progress);

    let written = driver::run(&config)?;
    for path in &written {
        info!(path = %path.display(), "wrote");
    }
    Ok(())
}
