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
//! Closed-form impact effect formulas
//!
//! Every function in this module is pure and total over non-negative mass
//! and velocity. Zero mass or zero velocity yields zero energy and zero-sized
//! effects.
//!
//! # Physics Background
//!
//! All effects derive from the projectile's kinetic energy:
//!
//! **E = ½ · m · v²**
//!
//! The damage zones then follow simple scaling laws:
//!
//! - **Crater diameter**: `D = k · (E / (g · ρ))^(1/4)`, gravity-regime
//!   scaling against target density ρ and surface gravity g
//! - **Air blast radius**: `R = 0.28 · (E / 10¹²)^(1/3)` km
//! - **Shock wave radius**: `R = k · E^(1/3)` km with `k = 0.005`
//! - **Thermal radiation radius**: the distance at which the radiated
//!   fraction of E, spread over a sphere, drops to the fluence threshold:
//!   `R = sqrt(f · E / (4π · F))`
//!
//! Because crater size grows as E^(1/4) and the atmospheric effects as
//! E^(1/3) (thermal as E^(1/2)), the radii outpace the crater as energy grows.
//!
//! # References
//!
//! - Collins, G. S., Melosh, H. J., & Marcus, R. A. (2005). "Earth Impact
//!   Effects Program", Meteoritics & Planetary Science 40(6)
//! - Glasstone, S., & Dolan, P. J. (1977). "The Effects of Nuclear Weapons"
//!
//! These are educational approximations, not a substitute for the full
//! models in the references.

use crate::materials::MaterialTable;
use std::f64::consts::PI;

/// Empirical conversion factor from joules to megatons of TNT
///
/// The physical value is 1 / 4.184e15 ≈ 2.39e-16; the calculator keeps the
/// rounder 2.1e-16 so published example numbers stay reproducible.
pub const MEGATONS_PER_JOULE: f64 = 2.1e-16;

/// Default shock wave coefficient (km / J^(1/3))
pub const DEFAULT_SHOCK_K: f64 = 0.005;

/// Default fraction of kinetic energy radiated as heat
pub const DEFAULT_THERMAL_FRACTION: f64 = 0.2;

/// Default thermal fluence threshold for the damage boundary (J/m²)
pub const DEFAULT_FLUENCE_THRESHOLD: f64 = 350_000.0;

/// Kinetic energy in joules: `0.5 * m * v²`
pub fn kinetic_energy(mass_kg: f64, velocity_m_s: f64) -> f64 {
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Convert joules to megatons of TNT using [`MEGATONS_PER_JOULE`]
pub fn joules_to_megatons(energy_j: f64) -> f64 {
    energy_j * MEGATONS_PER_JOULE
}

/// Crater diameter in kilometers on the material named by `target_material`
///
/// Uses the built-in material table. Unknown keys use rock's properties.
pub fn crater_diameter_km(mass_kg: f64, velocity_m_s: f64, target_material: &str) -> f64 {
    let props = MaterialTable::builtin().get_by_key(target_material);
    props.crater_diameter_m(kinetic_energy(mass_kg, velocity_m_s)) / 1000.0
}

/// Air blast radius in kilometers: `0.28 * (E / 1e12)^(1/3)`
pub fn air_blast_radius_km(mass_kg: f64, velocity_m_s: f64) -> f64 {
    EffectModel::classic().air_blast_radius_km(kinetic_energy(mass_kg, velocity_m_s))
}

/// Shock wave radius in kilometers with the default coefficient
pub fn shock_wave_radius_km(mass_kg: f64, velocity_m_s: f64) -> f64 {
    shock_wave_radius_km_with(mass_kg, velocity_m_s, DEFAULT_SHOCK_K)
}

/// Shock wave radius in kilometers: `k * E^(1/3)`
pub fn shock_wave_radius_km_with(mass_kg: f64, velocity_m_s: f64, k: f64) -> f64 {
    k * kinetic_energy(mass_kg, velocity_m_s).cbrt()
}

/// Thermal radiation radius in kilometers with the default fraction and threshold
pub fn thermal_radiation_radius_km(mass_kg: f64, velocity_m_s: f64) -> f64 {
    thermal_radiation_radius_km_with(
        mass_kg,
        velocity_m_s,
        DEFAULT_THERMAL_FRACTION,
        DEFAULT_FLUENCE_THRESHOLD,
    )
}

/// Thermal radiation radius in kilometers
///
/// `thermal_energy = thermal_fraction * E`, then
/// `radius_m = sqrt(thermal_energy / (4π * fluence_threshold))`.
pub fn thermal_radiation_radius_km_with(
    mass_kg: f64,
    velocity_m_s: f64,
    thermal_fraction: f64,
    fluence_threshold: f64,
) -> f64 {
    let thermal_energy = thermal_fraction * kinetic_energy(mass_kg, velocity_m_s);
    (thermal_energy / (4.0 * PI * fluence_threshold)).sqrt() / 1000.0
}

/// How the air blast radius scales with energy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AirBlastScaling {
    /// `coefficient * (E / 1e12)^(1/3)`, energy normalized to terajoules
    Terajoule {
        /// Radius in km for 1 TJ
        coefficient: f64,
    },
    /// `coefficient * E^(1/3)`, energy in raw joules
    Joule {
        /// Radius in km per J^(1/3)
        coefficient: f64,
    },
}

/// Coefficients for the atmospheric effect formulas
///
/// Crater scaling lives in the [`MaterialTable`]; everything else that shapes
/// the damage radii is bundled here so a [`Calculator`](crate::Calculator)
/// can switch between coefficient sets.
///
/// # Example
///
/// ```
/// use impact_calculator::physics::EffectModel;
///
/// let model = EffectModel::classic().with_fluence_threshold(200_000.0);
/// assert_eq!(model.fluence_threshold(), 200_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectModel {
    air_blast: AirBlastScaling,
    shock_k: f64,
    thermal_fraction: f64,
    fluence_threshold: f64,
}

impl EffectModel {
    /// Default coefficients, matching the free functions in this module
    pub const fn classic() -> Self {
        EffectModel {
            air_blast: AirBlastScaling::Terajoule { coefficient: 0.28 },
            shock_k: DEFAULT_SHOCK_K,
            thermal_fraction: DEFAULT_THERMAL_FRACTION,
            fluence_threshold: DEFAULT_FLUENCE_THRESHOLD,
        }
    }

    /// Rebalanced coefficients used by the browser-side calculator
    ///
    /// Smaller blast and shock coefficients and a lower fluence threshold,
    /// which keeps the three radii closer together on a chart.
    pub const fn calibrated() -> Self {
        EffectModel {
            air_blast: AirBlastScaling::Joule { coefficient: 0.0018 },
            shock_k: 0.0015,
            thermal_fraction: DEFAULT_THERMAL_FRACTION,
            fluence_threshold: 150_000.0,
        }
    }

    /// Replace the air blast scaling
    pub fn with_air_blast(mut self, scaling: AirBlastScaling) -> Self {
        let coefficient = match scaling {
            AirBlastScaling::Terajoule { coefficient } | AirBlastScaling::Joule { coefficient } => {
                coefficient
            }
        };
        assert!(
            coefficient >= 0.0 && coefficient.is_finite(),
            "Air blast coefficient must be non-negative and finite"
        );
        self.air_blast = scaling;
        self
    }

    /// Replace the shock wave coefficient
    ///
    /// # Panics
    ///
    /// Panics if `k` is negative or not finite.
    pub fn with_shock_k(mut self, k: f64) -> Self {
        assert!(k >= 0.0 && k.is_finite(), "Shock coefficient must be non-negative and finite");
        self.shock_k = k;
        self
    }

    /// Replace the radiated energy fraction
    ///
    /// # Panics
    ///
    /// Panics if `fraction` is outside `[0, 1]`.
    pub fn with_thermal_fraction(mut self, fraction: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&fraction),
            "Thermal fraction must be between 0 and 1"
        );
        self.thermal_fraction = fraction;
        self
    }

    /// Replace the fluence threshold (J/m²)
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not positive and finite.
    pub fn with_fluence_threshold(mut self, threshold: f64) -> Self {
        assert!(
            threshold > 0.0 && threshold.is_finite(),
            "Fluence threshold must be positive and finite"
        );
        self.fluence_threshold = threshold;
        self
    }

    /// Air blast scaling in use
    pub fn air_blast(&self) -> AirBlastScaling {
        self.air_blast
    }

    /// Shock wave coefficient
    pub fn shock_k(&self) -> f64 {
        self.shock_k
    }

    /// Fraction of energy radiated as heat
    pub fn thermal_fraction(&self) -> f64 {
        self.thermal_fraction
    }

    /// Fluence threshold (J/m²)
    pub fn fluence_threshold(&self) -> f64 {
        self.fluence_threshold
    }

    /// Air blast radius in km for a kinetic energy in joules
    pub fn air_blast_radius_km(&self, energy_j: f64) -> f64 {
        match self.air_blast {
            AirBlastScaling::Terajoule { coefficient } => coefficient * (energy_j / 1e12).cbrt(),
            AirBlastScaling::Joule { coefficient } => coefficient * energy_j.cbrt(),
        }
    }

    /// Shock wave radius in km for a kinetic energy in joules
    pub fn shock_wave_radius_km(&self, energy_j: f64) -> f64 {
        self.shock_k * energy_j.cbrt()
    }

    /// Thermal radiation radius in km for a kinetic energy in joules
    pub fn thermal_radiation_radius_km(&self, energy_j: f64) -> f64 {
        let thermal_energy = self.thermal_fraction * energy_j;
        (thermal_energy / (4.0 * PI * self.fluence_threshold)).sqrt() / 1000.0
    }
}

impl Default for EffectModel {
    fn default() -> Self {
        EffectModel::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-12 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_kinetic_energy() {
        assert_eq!(kinetic_energy(2.0, 3.0), 9.0);
        assert_eq!(kinetic_energy(0.0, 1e4), 0.0);
        assert_eq!(kinetic_energy(1e6, 0.0), 0.0);
        assert_eq!(kinetic_energy(1e6, 2e4), 2e14);
    }

    #[test]
    fn test_megaton_conversion() {
        assert_close(joules_to_megatons(2e14), 0.042);
        assert_close(joules_to_megatons(4.5e17), 94.5);
    }

    #[test]
    fn test_air_blast_one_terajoule() {
        // m = 2 kg, v = 1e6 m/s gives exactly 1e12 J
        assert_close(air_blast_radius_km(2.0, 1e6), 0.28);
    }

    #[test]
    fn test_shock_wave_known_value() {
        // E = 1e15 J -> cbrt = 1e5
        let v = (2.0f64 * 1e15).sqrt();
        let r = shock_wave_radius_km(1.0, v);
        assert!((r - 500.0).abs() < 1e-6, "got {}", r);
        let r = shock_wave_radius_km_with(1.0, v, 0.001);
        assert!((r - 100.0).abs() < 1e-6, "got {}", r);
    }

    #[test]
    fn test_thermal_radius_formula() {
        let (m, v) = (1e6, 2e4);
        let expected = (0.2 * 2e14 / (4.0 * PI * 350_000.0)).sqrt() / 1000.0;
        assert_close(thermal_radiation_radius_km(m, v), expected);
        let wider = thermal_radiation_radius_km_with(m, v, 0.2, 150_000.0);
        assert!(wider > expected);
    }

    #[test]
    fn test_crater_formula_on_rock() {
        let ke: f64 = 2e14;
        let expected = 1.8 * (ke / (9.81 * 2500.0)).powf(0.25) / 1000.0;
        assert_close(crater_diameter_km(1e6, 2e4, "rock"), expected);
    }

    #[test]
    fn test_model_matches_free_functions() {
        let model = EffectModel::classic();
        let (m, v) = (5e7, 1.7e4);
        let ke = kinetic_energy(m, v);
        assert_eq!(model.air_blast_radius_km(ke), air_blast_radius_km(m, v));
        assert_eq!(model.shock_wave_radius_km(ke), shock_wave_radius_km(m, v));
        assert_eq!(
            model.thermal_radiation_radius_km(ke),
            thermal_radiation_radius_km(m, v)
        );
    }

    #[test]
    fn test_calibrated_model_coefficients() {
        let model = EffectModel::calibrated();
        assert_eq!(model.shock_k(), 0.0015);
        assert_eq!(model.fluence_threshold(), 150_000.0);
        assert_close(model.air_blast_radius_km(1e18), 0.0018 * 1e6);
    }

    #[test]
    fn test_builder_setters() {
        let model = EffectModel::classic()
            .with_air_blast(AirBlastScaling::Joule { coefficient: 0.002 })
            .with_shock_k(0.001)
            .with_thermal_fraction(0.3);
        assert_eq!(model.air_blast(), AirBlastScaling::Joule { coefficient: 0.002 });
        assert_eq!(model.shock_k(), 0.001);
        assert_eq!(model.thermal_fraction(), 0.3);
        assert_close(model.air_blast_radius_km(1e15), 0.002 * 1e5);
        assert_close(model.shock_wave_radius_km(1e15), 0.001 * 1e5);

        let terajoule = model.with_air_blast(AirBlastScaling::Terajoule { coefficient: 0.5 });
        assert_close(terajoule.air_blast_radius_km(1e12), 0.5);
        assert_eq!(
            EffectModel::classic().air_blast(),
            AirBlastScaling::Terajoule { coefficient: 0.28 }
        );
    }

    #[test]
    fn test_shock_setter_matches_free_function() {
        let (m, v) = (3e8, 1.5e4);
        let model = EffectModel::classic().with_shock_k(0.002);
        assert_eq!(
            model.shock_wave_radius_km(kinetic_energy(m, v)),
            shock_wave_radius_km_with(m, v, 0.002)
        );
    }

    #[test]
    #[should_panic(expected = "Shock coefficient must be non-negative and finite")]
    fn test_negative_shock_coefficient_rejected() {
        EffectModel::classic().with_shock_k(-0.005);
    }

    #[test]
    #[should_panic(expected = "Air blast coefficient must be non-negative and finite")]
    fn test_infinite_air_blast_coefficient_rejected() {
        EffectModel::classic().with_air_blast(AirBlastScaling::Terajoule { coefficient: f64::INFINITY });
    }

    #[test]
    #[should_panic(expected = "Fluence threshold must be positive and finite")]
    fn test_zero_fluence_threshold_rejected() {
        EffectModel::classic().with_fluence_threshold(0.0);
    }

    #[test]
    #[should_panic(expected = "Thermal fraction must be between 0 and 1")]
    fn test_thermal_fraction_out_of_range() {
        EffectModel::classic().with_thermal_fraction(1.5);
    }
}
