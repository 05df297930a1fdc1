//! Command-line configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bjround::{DEFAULT_BALANCE, GameOptions};
use pico_args::Arguments;

pub const HELP: &str = "\
Play blackjack in the terminal

USAGE:
  bjround [OPTIONS]

OPTIONS:
  --balance-file PATH       File holding the balance  [default: balance.txt]
                            (or set BJROUND_BALANCE_FILE)
  --starting-balance N      Balance used when the file is missing  [default: 5000]
  --seed N                  Seed for the first round's shuffle  [default: clock]
  --blackjack-pays RATIO    Blackjack payout ratio  [default: 1.5]
  --dealer-stands-on N      Dealer draws below this value  [default: 17]

FLAGS:
  -h, --help                Print help information

Set RUST_LOG=debug to see round transitions.
";

pub const BALANCE_FILE_ENV: &str = "BJROUND_BALANCE_FILE";
const DEFAULT_BALANCE_FILE: &str = "balance.txt";

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the balance is persisted.
    pub balance_file: PathBuf,
    /// Balance used when the file is missing or unreadable.
    pub starting_balance: u64,
    /// Fixed seed, or `None` to seed each round from the clock.
    pub seed: Option<u64>,
    /// Table rules.
    pub options: GameOptions,
}

impl Config {
    /// Reads the configuration from parsed arguments.
    ///
    /// The `--balance-file` flag wins over `env_balance_file`.
    pub fn from_args(mut pargs: Arguments, env_balance_file: Option<OsString>) -> Result<Self> {
        let balance_file = pargs
            .opt_value_from_str::<_, PathBuf>("--balance-file")
            .context("invalid --balance-file")?
            .or_else(|| env_balance_file.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BALANCE_FILE));

        let starting_balance = pargs
            .opt_value_from_str("--starting-balance")
            .context("invalid --starting-balance")?
            .unwrap_or(DEFAULT_BALANCE);

        let seed = pargs
            .opt_value_from_str("--seed")
            .context("invalid --seed")?;

        let mut options = GameOptions::default();
        if let Some(ratio) = pargs
            .opt_value_from_str::<_, f64>("--blackjack-pays")
            .context("invalid --blackjack-pays")?
        {
            if !ratio.is_finite() || ratio < 0.0 {
                bail!("--blackjack-pays must be a non-negative number, got {ratio}");
            }
            options = options.with_blackjack_pays(ratio);
        }
        if let Some(value) = pargs
            .opt_value_from_str("--dealer-stands-on")
            .context("invalid --dealer-stands-on")?
        {
            options = options.with_dealer_stands_on(value);
        }

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            bail!("unexpected arguments: {remaining:?}");
        }

        Ok(Self {
            balance_file,
            starting_balance,
            seed,
            options,
        })
    }
}
