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
//! Target materials and their crater-scaling properties
//!
//! Crater size depends on what the asteroid hits. Each [`TargetMaterial`]
//! maps to a [`MaterialProperties`] record in a [`MaterialTable`]. The table
//! is built once (the built-in one is a process-wide static) and is read-only
//! afterwards, so it can be shared freely between threads.
//!
//! Lookups by string key never fail: unknown keys resolve to rock.
//!
//! # Example
//!
//! ```
//! use impact_calculator::materials::{MaterialTable, TargetMaterial};
//!
//! let table = MaterialTable::builtin();
//! assert_eq!(table.get(TargetMaterial::Ice).display_name(), "Ice/Glacier");
//! assert_eq!(table.get_by_key("lava").display_name(), "Rock/Solid Ground");
//! ```

use crate::error::ImpactError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Standard surface gravity used by every built-in material (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Surface the asteroid strikes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetMaterial {
    /// Open water or ocean
    Water,
    /// Solid rock (the fallback for unknown keys)
    #[default]
    Rock,
    /// Ice sheet or glacier
    Ice,
    /// Desert sand
    Sand,
    /// Forest or dense vegetation
    Forest,
}

impl TargetMaterial {
    /// Every material, in table order
    pub const ALL: [TargetMaterial; 5] = [
        TargetMaterial::Water,
        TargetMaterial::Rock,
        TargetMaterial::Ice,
        TargetMaterial::Sand,
        TargetMaterial::Forest,
    ];

    /// Form/config key for this material
    pub fn key(self) -> &'static str {
        match self {
            TargetMaterial::Water => "water",
            TargetMaterial::Rock => "rock",
            TargetMaterial::Ice => "ice",
            TargetMaterial::Sand => "sand",
            TargetMaterial::Forest => "forest",
        }
    }

    /// Look up a material by key, returning `None` for unknown keys
    pub fn lookup(key: &str) -> Option<TargetMaterial> {
        TargetMaterial::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Look up a material by key, falling back to rock for unknown keys
    pub fn from_key(key: &str) -> TargetMaterial {
        TargetMaterial::lookup(key).unwrap_or_default()
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TargetMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TargetMaterial {
    type Err = ImpactError;

    /// Strict parse: unknown keys are an error rather than rock
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetMaterial::lookup(s).ok_or_else(|| ImpactError::UnknownMaterial { key: s.to_string() })
    }
}

/// Physical properties of a target material used by crater scaling
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperties {
    density: f64,
    gravity: f64,
    crater_scaling_k: f64,
    display_name: Cow<'static, str>,
}

impl MaterialProperties {
    /// Create a property record
    ///
    /// Use [`validate`](Self::validate) to check values that come from
    /// outside the program.
    pub fn new(
        density: f64,
        gravity: f64,
        crater_scaling_k: f64,
        display_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        MaterialProperties {
            density,
            gravity,
            crater_scaling_k,
            display_name: display_name.into(),
        }
    }

    const fn builtin(density: f64, crater_scaling_k: f64, display_name: &'static str) -> Self {
        MaterialProperties {
            density,
            gravity: STANDARD_GRAVITY,
            crater_scaling_k,
            display_name: Cow::Borrowed(display_name),
        }
    }

    /// Bulk density of the target (kg/m³)
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Surface gravity at the target (m/s²)
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Dimensionless crater scaling coefficient `k`
    pub fn crater_scaling_k(&self) -> f64 {
        self.crater_scaling_k
    }

    /// Human-readable name, e.g. "Rock/Solid Ground"
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Final crater diameter in meters for the given kinetic energy
    ///
    /// `D = k * (E / (g * ρ))^(1/4)`
    pub fn crater_diameter_m(&self, kinetic_energy_j: f64) -> f64 {
        self.crater_scaling_k * (kinetic_energy_j / (self.gravity * self.density)).powf(0.25)
    }

    /// Check that every numeric property is positive and finite
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("density", self.density),
            ("gravity", self.gravity),
            ("crater_scaling_k", self.crater_scaling_k),
        ];
        for (name, value) in checks {
            if !(value > 0.0 && value.is_finite()) {
                return Err(format!("{} must be positive and finite, got {}", name, value));
            }
        }
        if self.display_name.trim().is_empty() {
            return Err("display_name must not be empty".to_string());
        }
        Ok(())
    }
}

/// Immutable lookup table from [`TargetMaterial`] to [`MaterialProperties`]
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialTable {
    entries: [MaterialProperties; 5],
}

static BUILTIN_TABLE: MaterialTable = MaterialTable {
    entries: [
        MaterialProperties::builtin(1000.0, 2.1, "Water/Ocean"),
        MaterialProperties::builtin(2500.0, 1.8, "Rock/Solid Ground"),
        MaterialProperties::builtin(900.0, 2.5, "Ice/Glacier"),
        MaterialProperties::builtin(1600.0, 2.8, "Desert Sand"),
        MaterialProperties::builtin(1200.0, 2.2, "Forest/Vegetation"),
    ],
};

impl MaterialTable {
    /// The built-in table shared by the whole process
    pub fn builtin() -> &'static MaterialTable {
        &BUILTIN_TABLE
    }

    /// Return a copy of this table with one material's properties replaced
    pub fn with_properties(mut self, material: TargetMaterial, properties: MaterialProperties) -> Self {
        self.entries[material.index()] = properties;
        self
    }

    /// Properties for a material
    pub fn get(&self, material: TargetMaterial) -> &MaterialProperties {
        &self.entries[material.index()]
    }

    /// Properties for a material key; unknown keys resolve to rock
    pub fn get_by_key(&self, key: &str) -> &MaterialProperties {
        self.get(TargetMaterial::from_key(key))
    }

    /// Display name for a material
    pub fn display_name(&self, material: TargetMaterial) -> &str {
        self.get(material).display_name()
    }

    /// Crater diameter in kilometers for a mass/velocity pair on the given material
    pub fn crater_diameter_km(&self, mass_kg: f64, velocity_m_s: f64, material: TargetMaterial) -> f64 {
        let ke = crate::physics::kinetic_energy(mass_kg, velocity_m_s);
        self.get(material).crater_diameter_m(ke) / 1000.0
    }

    /// Iterate over all materials with their properties, in table order
    pub fn iter(&self) -> impl Iterator<Item = (TargetMaterial, &MaterialProperties)> {
        TargetMaterial::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        BUILTIN_TABLE.clone()
    }
}
