use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod eval;
mod logging;
mod model;
mod ops;
mod pipeline;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "arith-report")]
#[command(
    about = "Evaluate named arithmetic operations from JSON and write a sorted report",
    long_about = None
)]
struct Cli {
    /// JSON object of named operations.
    #[arg(short = 'i', long, default_value = pipeline::DEFAULT_INPUT)]
    input: PathBuf,

    /// Report file, overwritten on success.
    #[arg(short = 'o', long, default_value = pipeline::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<pipeline::RunConfig> {
        if self.input == self.output {
            anyhow::bail!(
                "input and output must be different files: {}",
                self.input.display()
            );
        }
        Ok(pipeline::RunConfig {
            input: self.input,
            output: self.output,
        })
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.into_config()?;
    let outcome = pipeline::run(&config);
    println!("{}", outcome.message);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
