pub mod config;
pub mod error;
pub mod numbers;
pub mod operation;
pub mod stats;

pub use config::Config;
pub use error::*;
pub use numbers::{parse_numeric_list, NumericSequence};
pub use operation::{evaluate, Operation, StatisticResult};
