use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod clipboard;
mod prompt;
mod render;
mod terminal;

/// Generate random passwords from letters, digits and punctuation.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Seed the random number generator, for reproducible output.
    #[arg(long, global = true, hide = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Ask for a length and print one password (the default).
    Prompt,
    /// Open the interactive generator panel, with a length slider, copying, and themes.
    Panel {
        /// Read settings from this file instead of ~/.passgen/config.yaml.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => {
            log::debug!("seeding the random number generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut sampler = passgen::PasswordSampler::new(rng);

    match args.command.unwrap_or(Command::Prompt) {
        Command::Prompt => {
            prompt::prompt_password(&mut sampler, io::stdin().lock(), io::stdout())?;
        }
        Command::Panel { config } => {
            let config = passgen::Config::load(config.as_deref())?;
            let mut panel = passgen::GeneratorPanel::new(sampler, clipboard::SystemClipboard)
                .with_length(config.panel.length)
                .with_theme(config.panel.theme);
            terminal::run_panel(&mut panel)?;
        }
    }

    Ok(())
}

fn main() {
    pretty_env_logger::init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("{err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Invalid password length {0:?}; expected a whole number.")]
    InvalidLength(String),
    #[error("No password length given.")]
    NoInput,
    #[error("Configuration error: {0}")]
    Config(passgen::ConfigError),
    #[error("{0}")]
    Panel(passgen::PanelError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::ConfigError> for ProgError {
    fn from(err: passgen::ConfigError) -> ProgError {
        ProgError::Config(err)
    }
}

impl From<passgen::PanelError> for ProgError {
    fn from(err: passgen::PanelError) -> ProgError {
        ProgError::Panel(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_a_panel_option() {
        let args = Args::try_parse_from(["passgen", "panel", "--config", "panel.yaml"]).unwrap();

        match args.command {
            Some(Command::Panel { config }) => {
                assert_eq!(config, Some(PathBuf::from("panel.yaml")));
            }
            _ => panic!("expected the panel command"),
        }
    }

    #[test]
    fn prompt_does_not_accept_config() {
        assert!(Args::try_parse_from(["passgen", "--config", "x.yaml", "prompt"]).is_err());
        assert!(Args::try_parse_from(["passgen", "prompt", "--config", "x.yaml"]).is_err());
    }

    #[test]
    fn prompt_is_the_default_and_seed_is_global() {
        let args = Args::try_parse_from(["passgen", "--seed", "7"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.seed, Some(7));

        let args = Args::try_parse_from(["passgen", "panel", "--seed", "9"]).unwrap();
        assert_eq!(args.seed, Some(9));
    }
}
