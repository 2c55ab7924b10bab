use std::error::Error;
use std::fmt;

use log::{debug, info};

use crate::amount::{format_amount, parse_amount, sanitize_amount_input};

pub const DEFAULT_BALANCE: f64 = 5000.0;
pub const DEFAULT_CURRENCY: &str = "S/.";

/// Why the current amount can't be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    AmountNotPositive,
    InsufficientBalance,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotPositive => write!(f, "amount must be greater than zero"),
            Self::InsufficientBalance => write!(f, "insufficient balance"),
        }
    }
}

impl Error for ValidationError {}

/// A settled transfer, handed back by [`TransferForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub recipient: String,
    pub amount: f64,
}

/// State behind the send money screen.
///
/// Only the two inputs and [`TransferForm::submit`] mutate it. Everything the
/// screen needs to decide (whether the button is enabled, which warning to
/// show) is derived from the stored fields on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferForm {
    recipient_name: String,
    amount_input: String,
    balance: f64,
    last_message: String,
    currency: String,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}

impl TransferForm {
    /// A negative or non-finite starting balance is clamped to zero.
    pub fn new(initial_balance: f64) -> Self {
        let balance = if initial_balance.is_finite() && initial_balance > 0.0 {
            initial_balance
        } else {
            0.0
        };

        Self {
            recipient_name: String::new(),
            amount_input: String::new(),
            balance,
            last_message: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn formatted_balance(&self) -> String {
        format!("{} {}", self.currency, format_amount(self.balance))
    }

    pub fn set_recipient_name(&mut self, name: impl Into<String>) {
        self.recipient_name = name.into();
    }

    /// Stores the input with any character other than a digit or `.` removed.
    pub fn set_amount_input(&mut self, input: &str) {
        self.amount_input = sanitize_amount_input(input);
    }

    pub fn parsed_amount(&self) -> f64 {
        parse_amount(&self.amount_input)
    }

    pub fn can_submit(&self) -> bool {
        let amount = self.parsed_amount();
        !self.recipient_name.trim().is_empty() && amount > 0.0 && amount <= self.balance
    }

    pub fn validation_message(&self) -> Option<ValidationError> {
        if self.amount_input.is_empty() {
            return None;
        }

        let amount = self.parsed_amount();
        if amount <= 0.0 {
            Some(ValidationError::AmountNotPositive)
        } else if amount > self.balance {
            Some(ValidationError::InsufficientBalance)
        } else {
            None
        }
    }

    /// Settles the transfer against the balance.
    ///
    /// Does nothing and returns `None` when [`TransferForm::can_submit`] is
    /// false. The recipient is left in place so repeat sends only need a new
    /// amount.
    pub fn submit(&mut self) -> Option<Transfer> {
        if !self.can_submit() {
            debug!("Ignoring submit on an invalid transfer form");
            return None;
        }

        let amount = self.parsed_amount();
        self.balance -= amount;
        self.last_message = format!(
            "Sent {} {} to {}.",
            self.currency,
            format_amount(amount),
            self.recipient_name
        );
        self.amount_input.clear();

        info!(
            "Settled transfer of {} to {}, balance now {}",
            format_amount(amount),
            self.recipient_name,
            format_amount(self.balance)
        );

        Some(Transfer {
            recipient: self.recipient_name.clone(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn form_with(name: &str, amount: &str) -> TransferForm {
        let mut form = TransferForm::default();
        form.set_recipient_name(name);
        form.set_amount_input(amount);
        form
    }

    #[test]
    fn starts_empty_with_default_balance() {
        let form = TransferForm::default();
        assert_eq!(form.balance(), DEFAULT_BALANCE);
        assert_eq!(form.recipient_name(), "");
        assert_eq!(form.amount_input(), "");
        assert_eq!(form.last_message(), "");
        assert_eq!(form.validation_message(), None);
        assert!(!form.can_submit());
    }

    #[test]
    fn clamps_bad_starting_balance() {
        assert_eq!(TransferForm::new(-10.0).balance(), 0.0);
        assert_eq!(TransferForm::new(f64::NAN).balance(), 0.0);
        assert_eq!(TransferForm::new(f64::INFINITY).balance(), 0.0);
        assert_eq!(TransferForm::new(12.5).balance(), 12.5);
    }

    #[test]
    fn sends_within_balance() {
        init();
        let mut form = form_with("Ana", "100");
        assert!(form.can_submit());

        let transfer = form.submit().expect("transfer should settle");
        assert_eq!(
            transfer,
            Transfer {
                recipient: "Ana".to_string(),
                amount: 100.0
            }
        );
        assert_eq!(form.balance(), 4900.0);
        assert_eq!(form.amount_input(), "");
        assert!(form.last_message().contains("Ana"));
        assert!(form.last_message().contains("100.00"));
        assert_eq!(form.recipient_name(), "Ana");
    }

    #[test]
    fn rejects_amount_over_balance() {
        let mut form = form_with("Ana", "6000");
        assert!(!form.can_submit());
        assert_eq!(
            form.validation_message(),
            Some(ValidationError::InsufficientBalance)
        );
        assert_eq!(
            form.validation_message().unwrap().to_string(),
            "insufficient balance"
        );

        assert_eq!(form.submit(), None);
        assert_eq!(form.balance(), 5000.0);
        assert_eq!(form.amount_input(), "6000");
        assert_eq!(form.last_message(), "");
    }

    #[test]
    fn needs_a_recipient() {
        for name in ["", "   ", "\t\n"] {
            let mut form = form_with(name, "50");
            assert!(!form.can_submit(), "{name:?} should not be sendable");
            assert_eq!(form.submit(), None);
            assert_eq!(form.balance(), 5000.0);
        }

        // Even a balance that covers it doesn't matter
        let mut form = TransferForm::new(1_000_000.0);
        form.set_amount_input("50");
        assert!(!form.can_submit());
    }

    #[test]
    fn letters_never_reach_the_amount() {
        let mut form = TransferForm::default();
        for c in "abc".chars() {
            let typed = format!("{}{}", form.amount_input(), c);
            form.set_amount_input(&typed);
        }
        assert_eq!(form.amount_input(), "");
        assert_eq!(form.parsed_amount(), 0.0);
        assert_eq!(form.validation_message(), None);
    }

    #[test]
    fn zero_is_not_a_valid_amount() {
        let form = form_with("Ana", "0");
        assert!(!form.can_submit());
        assert_eq!(
            form.validation_message(),
            Some(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            form.validation_message().unwrap().to_string(),
            "amount must be greater than zero"
        );
    }

    #[test]
    fn malformed_amount_reads_as_zero() {
        let form = form_with("Ana", "1.2.3");
        assert_eq!(form.parsed_amount(), 0.0);
        assert_eq!(
            form.validation_message(),
            Some(ValidationError::AmountNotPositive)
        );

        let form = form_with("Ana", ".");
        assert_eq!(form.parsed_amount(), 0.0);
        assert!(!form.can_submit());
    }

    #[test]
    fn second_submit_is_a_noop() {
        let mut form = form_with("Ana", "100");
        assert!(form.submit().is_some());
        let balance = form.balance();
        let message = form.last_message().to_string();

        assert!(!form.can_submit());
        assert_eq!(form.submit(), None);
        assert_eq!(form.balance(), balance);
        assert_eq!(form.last_message(), message);
    }

    #[test]
    fn can_send_the_whole_balance() {
        let mut form = form_with("Ana", "5000");
        assert!(form.can_submit());
        assert!(form.submit().is_some());
        assert_eq!(form.balance(), 0.0);

        form.set_amount_input("0.01");
        assert_eq!(
            form.validation_message(),
            Some(ValidationError::InsufficientBalance)
        );
        assert!(!form.can_submit());
    }

    #[test]
    fn balance_stays_non_negative_across_sends() {
        let mut form = TransferForm::new(1.0);
        form.set_recipient_name("Ana");
        for _ in 0..20 {
            form.set_amount_input("0.1");
            form.submit();
            assert!(form.balance() >= 0.0);
        }
    }

    #[test]
    fn confirmation_uses_currency_label() {
        let mut form = TransferForm::new(250.0).with_currency("USD");
        form.set_recipient_name("Luis");
        form.set_amount_input("12.5");
        form.submit();
        assert_eq!(form.last_message(), "Sent USD 12.50 to Luis.");
        assert_eq!(form.formatted_balance(), "USD 237.50");
    }

    #[test]
    fn default_balance_display() {
        assert_eq!(TransferForm::default().formatted_balance(), "S/. 5000.00");
    }

    #[test]
    fn recipient_is_stored_verbatim() {
        let mut form = TransferForm::default();
        form.set_recipient_name("  Ana María ");
        assert_eq!(form.recipient_name(), "  Ana María ");
    }
}
