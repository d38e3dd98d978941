// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Error types for input validation and configuration loading
//!
//! The physics formulas themselves are total over their non-negative domain
//! and never fail. Errors only arise at the edges: turning raw form strings
//! into an [`ImpactInput`](crate::metrics::ImpactInput), strict material key
//! parsing, and reading a material table from disk.

use std::fmt;

/// Errors produced while validating inputs or loading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ImpactError {
    /// A form field could not be parsed as a number
    InvalidNumber {
        /// Name of the offending field (e.g. "mass")
        field: &'static str,
        /// The raw text that failed to parse
        value: String,
    },

    /// Mass or velocity was negative
    NegativeInput {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Mass or velocity was NaN or infinite
    NonFiniteInput {
        /// Name of the offending field
        field: &'static str,
    },

    /// The headline option was not an integer
    InvalidOption {
        /// The raw option text
        value: String,
    },

    /// A material key was not one of the known target materials
    UnknownMaterial {
        /// The key that was not recognised
        key: String,
    },

    /// A material table file could not be read, parsed, or validated
    Config {
        /// Path of the configuration source
        path: String,
        /// Human-readable description of the problem
        message: String,
    },
}

impl fmt::Display for ImpactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactError::InvalidNumber { field, value } => {
                write!(f, "{} '{}' is not a valid number", field, value)
            }
            ImpactError::NegativeInput { field, value } => {
                write!(f, "{} must be non-negative, got {}", field, value)
            }
            ImpactError::NonFiniteInput { field } => {
                write!(f, "{} must be finite", field)
            }
            ImpactError::InvalidOption { value } => {
                write!(f, "option '{}' is not an integer", value)
            }
            ImpactError::UnknownMaterial { key } => write!(
                f,
                "unknown target material '{}' (expected water, rock, ice, sand or forest)",
                key
            ),
            ImpactError::Config { path, message } => {
                write!(f, "material table '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ImpactError {}

/// Convenience alias: a `Result` using [`ImpactError`] as the error type.
pub type ImpactResult<T> = Result<T, ImpactError>;

impl ImpactError {
    /// True for errors caused by invalid numeric input (bad or negative numbers)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ImpactError::InvalidNumber { .. }
                | ImpactError::NegativeInput { .. }
                | ImpactError::NonFiniteInput { .. }
        )
    }
}
