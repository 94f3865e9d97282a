//! Parsing of the comma-separated `nums` parameter.

use std::ops::Deref;

use serde::Serialize;

use crate::error::{Result, StatsError};
use crate::stats;

/// Ordered, non-empty list of finite numbers.
///
/// Only [`parse_numeric_list`] builds one, so every statistic can rely on
/// the list holding at least one finite value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NumericSequence(Vec<f64>);

impl NumericSequence {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn mean(&self) -> f64 {
        stats::mean(&self.0)
    }

    pub fn median(&self) -> f64 {
        stats::median(&self.0)
    }

    pub fn mode(&self) -> f64 {
        stats::mode(&self.0)
    }
}

impl Deref for NumericSequence {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

/// Parse raw `nums` text into a [`NumericSequence`].
///
/// Tokens are split on `,` and parsed as-is: no whitespace trimming, and an
/// empty token (`"1,,2"`, `"1,2,"`) is an invalid number. Non-finite values
/// such as `inf` or `NaN` are rejected too.
pub fn parse_numeric_list(raw: Option<&str>) -> Result<NumericSequence> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(StatsError::MissingInput),
    };

    raw.split(',')
        .map(parse_token)
        .collect::<Result<Vec<f64>>>()
        .map(NumericSequence)
}

fn parse_token(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(StatsError::InvalidInput),
    }
}
