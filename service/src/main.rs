use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use seedgate::commands::{self, seed, totp, ErrorResponse};
use seedgate::config::{Config, DEFAULT_CONFIG_FILE};
use seedgate::logging;
use seedgate_crypto_core::KeyStore;
use seedgate_store::{FileSeedStore, TwoFactor};

#[derive(Parser, Debug)]
#[command(author, version, about = "Envelope-provisioned TOTP second factor")]
struct Cli {
    /// Path to the JSON config file.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open an encrypted seed envelope and store the seed.
    Provision(ProvisionArgs),
    /// Print the current code and its remaining validity.
    Generate,
    /// Check a code against the stored seed.
    Verify {
        /// The code to check.
        code: String,
    },
    /// Report whether a seed has been provisioned.
    Status,
}

#[derive(Args, Debug, Clone)]
struct ProvisionArgs {
    /// Envelope file; `-` or omitted reads stdin.
    #[arg(long, value_name = "PATH")]
    envelope_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("seedgate: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(&cli.config);
    let _guard = logging::init(&config.log_level)
        .map_err(|e| anyhow!(e))
        .context("failed to install logger")?;

    if let Err(e) = seedgate_crypto_core::disable_core_dumps() {
        tracing::warn!("{e}");
    }

    let two_factor =
        TwoFactor::new(FileSeedStore::new(&config.seed_path)).with_window(config.verify_window);

    match cli.command {
        Command::Provision(args) => {
            let outcome = seed::read_envelope(open_envelope(&args)?).and_then(|envelope| {
                seed::load_key(&KeyStore::new(&config.private_key_path))
                    .and_then(|key| seed::provision(&two_factor, &key, &envelope))
            });
            respond(outcome)
        }
        Command::Generate => respond(totp::generate(&two_factor, commands::unix_now())),
        Command::Verify { code } => {
            respond(totp::verify(&two_factor, code.trim(), commands::unix_now()))
        }
        Command::Status => respond(Ok(seed::status(&two_factor))),
    }
}

fn open_envelope(args: &ProvisionArgs) -> Result<Box<dyn Read>> {
    match args.envelope_file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open envelope {}", path.display()))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdin())),
    }
}

fn respond<T: Serialize>(outcome: Result<T, ErrorResponse>) -> Result<ExitCode> {
    match outcome {
        Ok(body) => {
            println!("{}", serde_json::to_string(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err.to_json());
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
