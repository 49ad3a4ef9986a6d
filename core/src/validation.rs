//! Cross-product validation of provider tests against consumer mocks.
//!
//! # Design
//! Both collections are `BTreeMap`s, so rows come out tests-major, then
//! mocks, each in identifier order. The mode only decides which side is
//! the reference for `compare` and which identifier goes in the left
//! column; pass/fail is whatever the matching engine says.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ContractError;
use crate::matching::{compare, ValidationOutcome};
use crate::schema::Schema;

/// Schemas keyed by identifier, e.g. `"test-get-products"`.
pub type Catalog = BTreeMap<String, Schema>;

/// Which side of the contract drives the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Provider tests are the reference; consumer mocks must conform.
    Consumer,
    /// Consumer mocks are the reference; provider tests must conform.
    Provider,
}

impl Mode {
    /// Headings for the `(left, right)` identifier columns.
    pub fn column_labels(self) -> (&'static str, &'static str) {
        match self {
            Mode::Consumer => ("Consumer Mock", "Provider Test"),
            Mode::Provider => ("Provider Test", "Consumer Mock"),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::Consumer => "Consumer-Driven Validation",
            Mode::Provider => "Provider-Driven Validation",
        }
    }
}

impl FromStr for Mode {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consumer" => Ok(Mode::Consumer),
            "provider" => Ok(Mode::Provider),
            other => Err(ContractError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Consumer => write!(f, "consumer"),
            Mode::Provider => write!(f, "provider"),
        }
    }
}

/// One compared pair. `left`/`right` follow [`Mode::column_labels`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationRow {
    pub left: String,
    pub right: String,
    pub outcome: ValidationOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub mode: Mode,
    pub rows: Vec<ValidationRow>,
}

impl ValidationReport {
    pub fn passed(&self) -> usize {
        self.rows.iter().filter(|r| r.outcome.pass).count()
    }

    pub fn failed(&self) -> usize {
        self.rows.len() - self.passed()
    }
}

/// Compare every test against every mock in the direction `mode` selects.
pub fn validate(tests: &Catalog, mocks: &Catalog, mode: Mode) -> ValidationReport {
    let mut rows = Vec::with_capacity(tests.len() * mocks.len());

    for (test_name, test) in tests {
        for (mock_name, mock) in mocks {
            let row = match mode {
                Mode::Consumer => ValidationRow {
                    left: mock_name.clone(),
                    right: test_name.clone(),
                    outcome: compare(test, mock),
                },
                Mode::Provider => ValidationRow {
                    left: test_name.clone(),
                    right: mock_name.clone(),
                    outcome: compare(mock, test),
                },
            };
            tracing::debug!(
                %mode,
                left = %row.left,
                right = %row.right,
                pass = row.outcome.pass,
                score = row.outcome.score,
                "validated pair"
            );
            rows.push(row);
        }
    }

    ValidationReport { mode, rows }
}
