use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::numbers::{parse_numeric_list, NumericSequence};

/// A supported statistic, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Mean,
    Median,
    Mode,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Mean, Operation::Median, Operation::Mode];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Mean => "mean",
            Operation::Median => "median",
            Operation::Mode => "mode",
        }
    }

    pub fn apply(&self, values: &NumericSequence) -> StatisticResult {
        let value = match self {
            Operation::Mean => values.mean(),
            Operation::Median => values.median(),
            Operation::Mode => values.mode(),
        };
        StatisticResult { operation: *self, value }
    }
}

impl FromStr for Operation {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| StatsError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{ "operation": "...", "value": ... }` response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticResult {
    pub operation: Operation,
    pub value: f64,
}

/// Resolve `operation`, validate `nums`, and compute the statistic.
///
/// The operation is checked before the input, so an unknown operation is
/// reported even when `nums` is also bad.
pub fn evaluate(operation: &str, nums: Option<&str>) -> Result<StatisticResult, StatsError> {
    let operation: Operation = operation.parse()?;
    let values = parse_numeric_list(nums)?;
    Ok(operation.apply(&values))
}
