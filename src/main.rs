use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Env;
use log::debug;

use vocab_audio_path::{
    ReportFormat, TransformConfig, TransformationReporter, Transformer, DEFAULT_INPUT_FILE,
    DEFAULT_OUTPUT_FILE,
};

#[derive(Parser, Debug)]
#[command(name = "vocab-audio-path")]
#[command(version, about = "Add an empty audio_path field to every word of a lessons file")]
struct Args {
    /// Vocabulary file to read
    #[arg(short, long, env = "VOCAB_INPUT", default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// File to write the updated vocabulary to (replaced if it exists)
    #[arg(short, long, env = "VOCAB_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// How to print the summary: console, json or yaml
    #[arg(long, value_name = "FORMAT", default_value = "console")]
    report: ReportFormat,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.log_level_filter())
        .parse_env(Env::new().filter("VOCAB_LOG"))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = TransformConfig::new(args.input, args.output);
    debug!("{:?}", config);

    let result = Transformer::new(config).run()?;

    let reporter = TransformationReporter::new().with_format(args.report);
    let report = reporter.generate_report(&result);
    print!("{}", reporter.format_report(&report)?);

    Ok(())
}
