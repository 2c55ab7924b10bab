use std::path::PathBuf;

pub mod amount;
pub mod form;

pub use amount::{format_amount, parse_amount, sanitize_amount_input};
pub use form::{Transfer, TransferForm, ValidationError, DEFAULT_BALANCE, DEFAULT_CURRENCY};

/// The directory where all application data is stored.
/// Defaults to ~/.remit
pub fn data_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".remit"))
}
