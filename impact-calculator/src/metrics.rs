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
//! Impact inputs, the metrics record, and the calculator that links them
//!
//! [`ImpactInput`] can only be built from finite, non-negative values, so the
//! [`Calculator`] never has to handle invalid numbers. [`ImpactMetrics`] is the
//! rounded output record handed to display code and to
//! [`generate_insights`](crate::insights::generate_insights).

use crate::error::{ImpactError, ImpactResult};
use crate::materials::{MaterialTable, TargetMaterial};
use crate::physics::{joules_to_megatons, kinetic_energy, EffectModel};
use crate::severity::{classify_severity, Severity};
use serde::Serialize;

/// Number of decimal places kept in [`ImpactMetrics`]
pub const METRIC_DECIMALS: i32 = 3;

/// Magnitude above which every f64 already has at most three decimals
///
/// At 1e15 adjacent doubles are 0.125 apart, so any representable value has
/// no digits past the third decimal and scaling would only add error.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round a value to [`METRIC_DECIMALS`] decimal places
///
/// Values of magnitude 1e15 and above, and non-finite values, are returned
/// unchanged.
pub fn round_metric(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    let scale = 10f64.powi(METRIC_DECIMALS);
    (value * scale).round() / scale
}

/// Validated calculator input in SI units
///
/// # Examples
///
/// ```
/// use impact_calculator::{ImpactInput, TargetMaterial};
///
/// let input = ImpactInput::from_display_units(1000.0, 20.0, TargetMaterial::Rock).unwrap();
/// assert_eq!(input.mass_kg(), 1.0e6);
/// assert_eq!(input.velocity_m_s(), 2.0e4);
///
/// assert!(ImpactInput::new(-1.0, 10.0, TargetMaterial::Rock).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactInput {
    mass_kg: f64,
    velocity_m_s: f64,
    target_material: TargetMaterial,
}

impl ImpactInput {
    /// Create an input from mass (kg) and velocity (m/s)
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::NonFiniteInput`] for NaN or infinite values and
    /// [`ImpactError::NegativeInput`] for negative values.
    pub fn new(mass_kg: f64, velocity_m_s: f64, target_material: TargetMaterial) -> ImpactResult<Self> {
        check_non_negative("mass", mass_kg)?;
        check_non_negative("velocity", velocity_m_s)?;
        Ok(ImpactInput {
            mass_kg,
            velocity_m_s,
            target_material,
        })
    }

    /// Create an input from mass in metric tons and velocity in km/s
    pub fn from_display_units(
        mass_tons: f64,
        velocity_kms: f64,
        target_material: TargetMaterial,
    ) -> ImpactResult<Self> {
        // Check before scaling so the error reports the value the user typed
        check_non_negative("mass", mass_tons)?;
        check_non_negative("velocity", velocity_kms)?;
        ImpactInput::new(mass_tons * 1000.0, velocity_kms * 1000.0, target_material)
    }

    /// Projectile mass (kg)
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Impact velocity (m/s)
    pub fn velocity_m_s(&self) -> f64 {
        self.velocity_m_s
    }

    /// Surface struck
    pub fn target_material(&self) -> TargetMaterial {
        self.target_material
    }

    /// Projectile mass (metric tons)
    pub fn mass_tons(&self) -> f64 {
        self.mass_kg / 1000.0
    }

    /// Impact velocity (km/s)
    pub fn velocity_kms(&self) -> f64 {
        self.velocity_m_s / 1000.0
    }
}

fn check_non_negative(field: &'static str, value: f64) -> ImpactResult<()> {
    if !value.is_finite() {
        return Err(ImpactError::NonFiniteInput { field });
    }
    if value < 0.0 {
        return Err(ImpactError::NegativeInput { field, value });
    }
    Ok(())
}

/// Rounded impact estimates for one input
///
/// Distances are in kilometers, energy in megatons of TNT. Every numeric
/// field is rounded to three decimals; `severity` is classified from the
/// unrounded energy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactMetrics {
    /// Projectile mass echoed back (metric tons)
    pub mass_tons: f64,
    /// Impact velocity echoed back (km/s)
    pub velocity_kms: f64,
    /// Kinetic energy (Mt TNT)
    pub energy_megatons_tnt: f64,
    /// Crater diameter (km)
    pub crater_km: f64,
    /// Air blast radius (km)
    pub air_km: f64,
    /// Shock wave radius (km)
    pub shock_km: f64,
    /// Thermal radiation radius (km)
    pub thermal_km: f64,
    /// Severity band
    pub severity: Severity,
    /// Display name of the target material
    pub target_material_display: String,
}

impl Default for ImpactMetrics {
    /// All-zero metrics on rock
    fn default() -> Self {
        ImpactMetrics {
            mass_tons: 0.0,
            velocity_kms: 0.0,
            energy_megatons_tnt: 0.0,
            crater_km: 0.0,
            air_km: 0.0,
            shock_km: 0.0,
            thermal_km: 0.0,
            severity: Severity::VeryLow,
            target_material_display: MaterialTable::builtin()
                .display_name(TargetMaterial::Rock)
                .to_string(),
        }
    }
}

/// Computes [`ImpactMetrics`] from a material table and an effect model
///
/// The calculator holds no mutable state; one instance can serve any number
/// of requests, including concurrently.
///
/// # Example
///
/// ```
/// use impact_calculator::{Calculator, ImpactInput, Severity, TargetMaterial};
///
/// let calculator = Calculator::default();
/// let input = ImpactInput::from_display_units(1.0e6, 30.0, TargetMaterial::Rock).unwrap();
/// let metrics = calculator.compute(&input);
/// assert_eq!(metrics.energy_megatons_tnt, 94.5);
/// assert_eq!(metrics.severity, Severity::High);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    table: MaterialTable,
    model: EffectModel,
    warn_on_fallback: bool,
}

impl Calculator {
    /// Create a calculator from a material table and effect model
    pub fn new(table: MaterialTable, model: EffectModel) -> Self {
        Calculator {
            table,
            model,
            warn_on_fallback: false,
        }
    }

    /// Set whether to print a warning when a material key falls back to rock
    pub fn set_warn_on_fallback(&mut self, warn: bool) {
        self.warn_on_fallback = warn;
    }

    /// Material table in use
    pub fn table(&self) -> &MaterialTable {
        &self.table
    }

    /// Effect model in use
    pub fn model(&self) -> &EffectModel {
        &self.model
    }

    /// Resolve a material key, substituting rock for unknown keys
    pub fn resolve_material(&self, key: &str) -> TargetMaterial {
        match TargetMaterial::lookup(key) {
            Some(material) => material,
            None => {
                if self.warn_on_fallback {
                    eprintln!(
                        "Warning: unknown target material '{}', using {}",
                        key,
                        self.table.display_name(TargetMaterial::Rock)
                    );
                }
                TargetMaterial::Rock
            }
        }
    }

    /// Compute the full metrics record for one input
    pub fn compute(&self, input: &ImpactInput) -> ImpactMetrics {
        let ke = kinetic_energy(input.mass_kg, input.velocity_m_s);
        let energy_mt = joules_to_megatons(ke);
        let props = self.table.get(input.target_material);

        ImpactMetrics {
            mass_tons: round_metric(input.mass_tons()),
            velocity_kms: round_metric(input.velocity_kms()),
            energy_megatons_tnt: round_metric(energy_mt),
            crater_km: round_metric(props.crater_diameter_m(ke) / 1000.0),
            air_km: round_metric(self.model.air_blast_radius_km(ke)),
            shock_km: round_metric(self.model.shock_wave_radius_km(ke)),
            thermal_km: round_metric(self.model.thermal_radiation_radius_km(ke)),
            severity: classify_severity(energy_mt),
            target_material_display: props.display_name().to_string(),
        }
    }
}

/// Compute metrics with the built-in material table and classic coefficients
pub fn compute_metrics(input: &ImpactInput) -> ImpactMetrics {
    Calculator::default().compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{MaterialProperties, STANDARD_GRAVITY};

    #[test]
    fn test_round_metric() {
        assert_eq!(round_metric(0.0420000001), 0.042);
        assert_eq!(round_metric(1.23456), 1.235);
        assert_eq!(round_metric(0.0), 0.0);
    }

    #[test]
    fn test_round_metric_keeps_large_values() {
        assert_eq!(round_metric(1.05e35), 1.05e35);
        assert_eq!(round_metric(1e15 + 0.125), 1e15 + 0.125);
        assert_eq!(round_metric(f64::MAX), f64::MAX);
        assert_eq!(round_metric(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_metric(999_999_999.12345), 999_999_999.123);
    }

    #[test]
    fn test_huge_impact_energy_is_not_altered() {
        let input = ImpactInput::from_display_units(1e30, 1e6, TargetMaterial::Rock).unwrap();
        let metrics = compute_metrics(&input);
        let unrounded = joules_to_megatons(kinetic_energy(input.mass_kg(), input.velocity_m_s()));
        assert_eq!(metrics.energy_megatons_tnt, unrounded);
        assert!(metrics.energy_megatons_tnt.is_finite());
        assert_eq!(metrics.severity, Severity::Extreme);
    }

    #[test]
    fn test_input_validation_order() {
        assert_eq!(
            ImpactInput::new(f64::NAN, -1.0, TargetMaterial::Rock),
            Err(ImpactError::NonFiniteInput { field: "mass" })
        );
        assert_eq!(
            ImpactInput::new(1.0, -3.0, TargetMaterial::Rock),
            Err(ImpactError::NegativeInput { field: "velocity", value: -3.0 })
        );
        assert_eq!(
            ImpactInput::from_display_units(-2.0, 1.0, TargetMaterial::Ice),
            Err(ImpactError::NegativeInput { field: "mass", value: -2.0 })
        );
        assert!(ImpactInput::new(0.0, 0.0, TargetMaterial::Water).is_ok());
    }

    #[test]
    fn test_small_impact_is_very_low() {
        let input = ImpactInput::from_display_units(1000.0, 20.0, TargetMaterial::Rock).unwrap();
        let metrics = compute_metrics(&input);
        assert_eq!(metrics.mass_tons, 1000.0);
        assert_eq!(metrics.velocity_kms, 20.0);
        assert_eq!(metrics.energy_megatons_tnt, 0.042);
        assert_eq!(metrics.severity, Severity::VeryLow);
        assert_eq!(metrics.target_material_display, "Rock/Solid Ground");
    }

    #[test]
    fn test_zero_input_gives_zero_metrics() {
        let input = ImpactInput::new(0.0, 25_000.0, TargetMaterial::Sand).unwrap();
        let metrics = compute_metrics(&input);
        assert_eq!(metrics.energy_megatons_tnt, 0.0);
        assert_eq!(metrics.crater_km, 0.0);
        assert_eq!(metrics.air_km, 0.0);
        assert_eq!(metrics.shock_km, 0.0);
        assert_eq!(metrics.thermal_km, 0.0);
        assert_eq!(metrics.severity, Severity::VeryLow);
        assert_eq!(metrics.target_material_display, "Desert Sand");
    }

    #[test]
    fn test_custom_table_changes_crater_only() {
        let table = MaterialTable::default().with_properties(
            TargetMaterial::Rock,
            MaterialProperties::new(2500.0, STANDARD_GRAVITY, 3.6, "Soft Rock"),
        );
        let input = ImpactInput::from_display_units(1.0e5, 20.0, TargetMaterial::Rock).unwrap();
        let stock = Calculator::default().compute(&input);
        let custom = Calculator::new(table, EffectModel::classic()).compute(&input);

        assert!(custom.crater_km > stock.crater_km);
        assert_eq!(custom.air_km, stock.air_km);
        assert_eq!(custom.target_material_display, "Soft Rock");
    }

    #[test]
    fn test_resolve_material() {
        let calculator = Calculator::default();
        assert_eq!(calculator.resolve_material("ice"), TargetMaterial::Ice);
        assert_eq!(calculator.resolve_material("plasma"), TargetMaterial::Rock);
    }

    #[test]
    fn test_default_metrics() {
        let metrics = ImpactMetrics::default();
        assert_eq!(metrics.air_km, 0.0);
        assert_eq!(metrics.severity, Severity::VeryLow);
        assert_eq!(metrics.target_material_display, "Rock/Solid Ground");
    }
}
