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
//! # Impact Calculator
//!
//! Simplified, closed-form estimates of what happens when an asteroid hits
//! the ground: kinetic energy, crater diameter, air blast radius, shock wave
//! radius, thermal radiation radius, a severity band, and a short list of
//! plain-language insights explaining the numbers.
//!
//! ## Features
//!
//! - **Pure Formulas**: Every estimate is a stateless function of mass and velocity
//! - **Material Table**: Five target surfaces with an immutable, injectable property table
//! - **Insights**: An ordered list of rules rendering explanatory sentences
//! - **Form Handling**: Parsing and validation for a web form front end
//! - **Batch Evaluation**: Optional Rayon integration for scenario sweeps
//! - **Configuration**: TOML overrides for material properties and coefficients
//!
//! ## Example
//!
//! ```rust
//! use impact_calculator::{compute_metrics, generate_insights, ImpactInput, Severity, TargetMaterial};
//!
//! // 1000 t at 20 km/s on solid rock
//! let input = ImpactInput::from_display_units(1000.0, 20.0, TargetMaterial::Rock).unwrap();
//! let metrics = compute_metrics(&input);
//!
//! assert_eq!(metrics.energy_megatons_tnt, 0.042);
//! assert_eq!(metrics.severity, Severity::VeryLow);
//! assert!(generate_insights(&metrics).len() >= 6);
//! ```

#![warn(missing_docs)]

/// Input validation and configuration errors
pub mod error;

/// Target materials and crater-scaling properties
pub mod materials;

/// Kinetic energy and damage radius formulas
pub mod physics;

/// Severity bands
pub mod severity;

/// Inputs, the metrics record, and the calculator
pub mod metrics;

/// Explanatory sentences derived from metrics
pub mod insights;

/// Per-effect breakdown for display
pub mod effects;

/// Web form request handling
pub mod form;

/// Batch and sweep evaluation
pub mod batch;

/// TOML configuration loading
pub mod config;

pub use error::{ImpactError, ImpactResult};
pub use insights::generate_insights;
pub use materials::{MaterialProperties, MaterialTable, TargetMaterial};
pub use metrics::{compute_metrics, Calculator, ImpactInput, ImpactMetrics};
pub use physics::{
    air_blast_radius_km, crater_diameter_km, kinetic_energy, shock_wave_radius_km,
    thermal_radiation_radius_km, EffectModel,
};
pub use severity::{classify_severity, Severity};
