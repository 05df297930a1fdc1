//! Persisted player balance.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Balance handed out when nothing usable is stored.
pub const DEFAULT_BALANCE: u64 = 5000;

/// Errors that can occur while reading or writing the balance.
#[derive(Debug, Error)]
pub enum BankrollError {
    /// Reading or writing the balance file failed.
    #[error("balance file {path}: {source}")]
    Io {
        /// The balance file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Storage for the balance that outlives a round.
///
/// Loaded once when a session starts and stored once per settled round.
pub trait Bankroll {
    /// Reads the stored balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn load(&mut self) -> Result<u64, BankrollError>;

    /// Replaces the stored balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn store(&mut self, balance: u64) -> Result<(), BankrollError>;
}

/// A balance kept in a text file holding a single decimal integer.
#[derive(Debug, Clone)]
pub struct FileBankroll {
    path: PathBuf,
    default_balance: u64,
}

impl FileBankroll {
    /// Creates a bankroll backed by `path`, falling back to
    /// [`DEFAULT_BALANCE`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_balance: DEFAULT_BALANCE,
        }
    }

    /// Sets the balance used when the file is missing or unreadable as a
    /// number.
    #[must_use]
    pub const fn with_default_balance(mut self, balance: u64) -> Self {
        self.default_balance = balance;
        self
    }

    /// Returns the path of the balance file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> BankrollError {
        BankrollError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Bankroll for FileBankroll {
    /// Reads the balance file.
    ///
    /// A missing file or contents that are not a non-negative integer give
    /// the default balance, which is written back straight away.
    fn load(&mut self) -> Result<u64, BankrollError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!(
                    "no balance file at {}, starting with {}",
                    self.path.display(),
                    self.default_balance
                );
                self.store(self.default_balance)?;
                return Ok(self.default_balance);
            }
            Err(err) => return Err(self.io_error(err)),
        };

        if let Ok(balance) = contents.trim().parse::<u64>() {
            log::debug!("loaded balance {balance} from {}", self.path.display());
            Ok(balance)
        } else {
            log::warn!(
                "unreadable balance {:?} in {}, resetting to {}",
                contents.trim(),
                self.path.display(),
                self.default_balance
            );
            self.store(self.default_balance)?;
            Ok(self.default_balance)
        }
    }

    fn store(&mut self, balance: u64) -> Result<(), BankrollError> {
        fs::write(&self.path, format!("{balance}\n")).map_err(|err| self.io_error(err))?;
        log::debug!("stored balance {balance} to {}", self.path.display());
        Ok(())
    }
}

/// A balance held in memory, for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBankroll {
    balance: u64,
    stores: usize,
}

impl MemoryBankroll {
    /// Creates an in-memory bankroll holding `balance`.
    #[must_use]
    pub const fn new(balance: u64) -> Self {
        Self { balance, stores: 0 }
    }

    /// Returns the stored balance.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns how many times the balance has been stored.
    #[must_use]
    pub const fn stores(&self) -> usize {
        self.stores
    }
}

impl Bankroll for MemoryBankroll {
    fn load(&mut self) -> Result<u64, BankrollError> {
        Ok(self.balance)
    }

    fn store(&mut self, balance: u64) -> Result<(), BankrollError> {
        self.balance = balance;
        self.stores += 1;
        Ok(())
    }
}
