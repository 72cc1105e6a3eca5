use std::num::IntErrorKind;

use crate::lex::Message;
use crate::portfolio::RiskLevel;

pub const FIRST_NAME_SLOT: &str = "firstName";
pub const AGE_SLOT: &str = "age";
pub const INVESTMENT_AMOUNT_SLOT: &str = "investmentAmount";
pub const RISK_LEVEL_SLOT: &str = "riskLevel";

pub const MAX_AGE_EXCLUSIVE: i64 = 65;
pub const MIN_INVESTMENT_AMOUNT: i64 = 5_000;

/// Used in messages when the `firstName` slot has not been filled yet.
pub const ANONYMOUS_NAME: &str = "friend";

/// Outcome of reading a numeric slot. Unparseable input never satisfies a
/// range rule, so it cannot be rejected by one either. Well-formed integers
/// beyond `i64` saturate so they keep their sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedInt {
    Number(i64),
    NotANumber,
}

impl ParsedInt {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(value) => Self::Number(value),
            Err(error) => match error.kind() {
                IntErrorKind::PosOverflow => Self::Number(i64::MAX),
                IntErrorKind::NegOverflow => Self::Number(i64::MIN),
                _ => Self::NotANumber,
            },
        }
    }

    fn is_at_most(&self, bound: i64) -> bool {
        matches!(self, Self::Number(value) if *value <= bound)
    }

    fn is_at_least(&self, bound: i64) -> bool {
        matches!(self, Self::Number(value) if *value >= bound)
    }

    fn is_below(&self, bound: i64) -> bool {
        matches!(self, Self::Number(value) if *value < bound)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violated_slot: Option<&'static str>,
    pub message: Option<Message>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { is_valid: true, violated_slot: None, message: None }
    }

    pub fn invalid(violated_slot: &'static str, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(violated_slot),
            message: Some(Message::plain(message)),
        }
    }
}

/// Checks age, then investment amount, then risk level; the first failing
/// slot is reported and the remaining checks are skipped.
pub fn validate(
    first_name: Option<&str>,
    age: Option<&str>,
    investment_amount: Option<&str>,
    risk_level: Option<&str>,
) -> ValidationResult {
    let name = first_name.unwrap_or(ANONYMOUS_NAME);

    if let Some(age) = age.map(ParsedInt::parse) {
        if age.is_at_most(0) {
            return ValidationResult::invalid(
                AGE_SLOT,
                format!("{name}, you must exist in the flesh to have a portfolio."),
            );
        }
        if age.is_at_least(MAX_AGE_EXCLUSIVE) {
            return ValidationResult::invalid(
                AGE_SLOT,
                format!(
                    "Congratulations {name}, you are aged for retirement already. You are past investing, go collect Social Security."
                ),
            );
        }
    }

    if let Some(amount) = investment_amount.map(ParsedInt::parse) {
        if amount.is_below(MIN_INVESTMENT_AMOUNT) {
            return ValidationResult::invalid(
                INVESTMENT_AMOUNT_SLOT,
                format!("We are sorry {name}, but the minimum investment is $5000."),
            );
        }
    }

    if let Some(risk_level) = risk_level {
        if risk_level.parse::<RiskLevel>().is_err() {
            return ValidationResult::invalid(
                RISK_LEVEL_SLOT,
                format!(
                    "{name}, please enter one of the following options: 'none', 'low', 'medium', 'high'"
                ),
            );
        }
    }

    ValidationResult::valid()
}
