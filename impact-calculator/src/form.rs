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
//! Request handling for the impact calculator form
//!
//! A web front end posts four text fields: `option`, `mass` (metric tons),
//! `velocity` (km/s) and `target_material`. This module turns those raw
//! strings into a validated [`ImpactInput`], runs the [`Calculator`], and
//! produces the headline string, metrics, and insights to display.
//!
//! Invalid numbers never reach the calculator: the outcome carries a
//! user-facing error message and no metrics.
//!
//! # Example
//!
//! ```
//! use impact_calculator::form::{handle_form, FormFields};
//!
//! let fields = FormFields::from_pairs([("option", "1"), ("mass", "1000"), ("velocity", "20")]);
//! let outcome = handle_form(&fields);
//! assert_eq!(outcome.result, "Kinetic Energy: 0.042 Megatons of TNT");
//! assert!(outcome.metrics.is_some());
//! ```

use crate::error::{ImpactError, ImpactResult};
use crate::insights::{format_value, generate_insights};
use crate::metrics::{Calculator, ImpactInput, ImpactMetrics};

/// Message shown when mass or velocity is not a number
pub const INVALID_NUMBER_MESSAGE: &str =
    "Error: Please enter valid numeric values for Mass and Velocity.";

/// Message shown when mass or velocity is negative
pub const NEGATIVE_INPUT_MESSAGE: &str = "Error: Mass and Velocity must be non-negative values.";

/// Headline shown for an option outside 1..=5
pub const INVALID_OPTION_MESSAGE: &str = "Invalid Option Selected";

/// Raw form fields as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Headline selector, "1" through "5"
    pub option: Option<String>,
    /// Mass in metric tons
    pub mass: Option<String>,
    /// Velocity in km/s
    pub velocity: Option<String>,
    /// Material key, e.g. "rock"
    pub target_material: Option<String>,
}

impl FormFields {
    /// Build fields from decoded key/value pairs; unknown keys are ignored
    ///
    /// When a key repeats, the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fields = FormFields::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "option" => &mut fields.option,
                "mass" => &mut fields.mass,
                "velocity" => &mut fields.velocity,
                "target_material" => &mut fields.target_material,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        fields
    }
}

/// Which single metric the result page headlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineOption {
    /// 1: kinetic energy
    Energy,
    /// 2: crater diameter
    Crater,
    /// 3: air blast radius
    AirBlast,
    /// 4: shock wave radius
    ShockWave,
    /// 5: thermal radiation radius
    Thermal,
    /// Any other integer
    Invalid,
}

impl HeadlineOption {
    /// Map a numeric option to a headline
    pub fn from_number(option: i64) -> Self {
        match option {
            1 => HeadlineOption::Energy,
            2 => HeadlineOption::Crater,
            3 => HeadlineOption::AirBlast,
            4 => HeadlineOption::ShockWave,
            5 => HeadlineOption::Thermal,
            _ => HeadlineOption::Invalid,
        }
    }

    /// Parse the raw `option` field
    ///
    /// Missing or blank input selects [`HeadlineOption::Energy`].
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::InvalidOption`] if the text is not an integer.
    pub fn parse(raw: Option<&str>) -> ImpactResult<Self> {
        let text = match raw.map(str::trim) {
            None | Some("") => return Ok(HeadlineOption::Energy),
            Some(text) => text,
        };
        text.parse::<i64>()
            .map(HeadlineOption::from_number)
            .map_err(|_| ImpactError::InvalidOption { value: text.to_string() })
    }

    /// Render the headline for a metrics record
    pub fn headline(self, metrics: &ImpactMetrics) -> String {
        match self {
            HeadlineOption::Energy => format!(
                "Kinetic Energy: {} Megatons of TNT",
                format_value(metrics.energy_megatons_tnt)
            ),
            HeadlineOption::Crater => {
                format!("Crater Diameter: {} km", format_value(metrics.crater_km))
            }
            HeadlineOption::AirBlast => {
                format!("Air Blast Radius: {} km", format_value(metrics.air_km))
            }
            HeadlineOption::ShockWave => {
                format!("Shock Wave Radius: {} km", format_value(metrics.shock_km))
            }
            HeadlineOption::Thermal => format!(
                "Thermal Radiation Radius: {} km",
                format_value(metrics.thermal_km)
            ),
            HeadlineOption::Invalid => INVALID_OPTION_MESSAGE.to_string(),
        }
    }
}

/// Everything a result page needs
#[derive(Debug, Clone, PartialEq)]
pub struct FormOutcome {
    /// Headline or error message
    pub result: String,
    /// Metrics, absent when the input was rejected
    pub metrics: Option<ImpactMetrics>,
    /// Insight sentences, empty when the input was rejected
    pub insights: Vec<String>,
}

impl FormOutcome {
    fn rejected(message: &str) -> Self {
        FormOutcome {
            result: message.to_string(),
            metrics: None,
            insights: Vec::new(),
        }
    }

    /// True when the input was rejected and nothing was computed
    pub fn is_error(&self) -> bool {
        self.metrics.is_none()
    }
}

/// Remove `_` digit separators, accepting them only between two digits
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut cleaned = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        cleaned.push(c);
    }
    Some(cleaned)
}

fn parse_number(field: &'static str, raw: Option<&str>) -> ImpactResult<f64> {
    let text = raw.unwrap_or("0").trim();
    let invalid = || ImpactError::InvalidNumber {
        field,
        value: text.to_string(),
    };
    strip_digit_separators(text)
        .ok_or_else(invalid)?
        .parse::<f64>()
        .map_err(|_| invalid())
}

/// Parse and validate the mass, velocity, and material fields
///
/// Missing mass or velocity counts as `0`. A missing material is rock, and
/// an unknown one resolves to rock through the calculator's table.
///
/// # Errors
///
/// Returns [`ImpactError::InvalidNumber`], [`ImpactError::NonFiniteInput`], or
/// [`ImpactError::NegativeInput`]. Both numbers are parsed before either is
/// range-checked, so a non-numeric field is always reported first.
pub fn parse_input(calculator: &Calculator, fields: &FormFields) -> ImpactResult<ImpactInput> {
    let mass_tons = parse_number("mass", fields.mass.as_deref())?;
    let velocity_kms = parse_number("velocity", fields.velocity.as_deref())?;
    let material = calculator.resolve_material(fields.target_material.as_deref().unwrap_or("rock"));
    ImpactInput::from_display_units(mass_tons, velocity_kms, material)
}

/// Handle a form submission with the default calculator
pub fn handle_form(fields: &FormFields) -> FormOutcome {
    handle_form_with(&Calculator::default(), fields)
}

/// Handle a form submission with a specific calculator
///
/// A non-integer `option` is shown as an invalid option; the metrics are
/// still computed.
pub fn handle_form_with(calculator: &Calculator, fields: &FormFields) -> FormOutcome {
    let input = match parse_input(calculator, fields) {
        Ok(input) => input,
        Err(ImpactError::NegativeInput { .. }) => {
            return FormOutcome::rejected(NEGATIVE_INPUT_MESSAGE)
        }
        Err(_) => return FormOutcome::rejected(INVALID_NUMBER_MESSAGE),
    };

    let option = HeadlineOption::parse(fields.option.as_deref()).unwrap_or(HeadlineOption::Invalid);
    let metrics = calculator.compute(&input);
    let insights = generate_insights(&metrics);

    FormOutcome {
        result: option.headline(&metrics),
        metrics: Some(metrics),
        insights,
    }
}
