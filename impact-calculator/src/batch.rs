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
//! Evaluating many scenarios at once
//!
//! Each scenario is independent, so batches split across Rayon's thread pool
//! when the `parallel` feature is enabled (the default) and fall back to a
//! plain loop otherwise. Output order always matches input order, and every
//! element equals what [`Calculator::compute`] returns for that input alone.

use crate::error::ImpactResult;
use crate::materials::TargetMaterial;
use crate::metrics::{Calculator, ImpactInput, ImpactMetrics};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute metrics for every input, preserving order
pub fn compute_batch(calculator: &Calculator, inputs: &[ImpactInput]) -> Vec<ImpactMetrics> {
    #[cfg(feature = "parallel")]
    {
        inputs.par_iter().map(|input| calculator.compute(input)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        inputs.iter().map(|input| calculator.compute(input)).collect()
    }
}

/// Metrics for a fixed mass across a range of velocities (m/s)
///
/// Useful for sensitivity tables: energy grows with the square of velocity,
/// so this shows the severity bands much sooner than a mass sweep.
///
/// # Errors
///
/// Fails on the first negative or non-finite value.
pub fn velocity_sweep(
    calculator: &Calculator,
    mass_kg: f64,
    target_material: TargetMaterial,
    velocities_m_s: &[f64],
) -> ImpactResult<Vec<ImpactMetrics>> {
    let inputs = velocities_m_s
        .iter()
        .map(|&v| ImpactInput::new(mass_kg, v, target_material))
        .collect::<ImpactResult<Vec<_>>>()?;
    Ok(compute_batch(calculator, &inputs))
}

/// Metrics for a fixed velocity across a range of masses (kg)
///
/// # Errors
///
/// Fails on the first negative or non-finite value.
pub fn mass_sweep(
    calculator: &Calculator,
    velocity_m_s: f64,
    target_material: TargetMaterial,
    masses_kg: &[f64],
) -> ImpactResult<Vec<ImpactMetrics>> {
    let inputs = masses_kg
        .iter()
        .map(|&m| ImpactInput::new(m, velocity_m_s, target_material))
        .collect::<ImpactResult<Vec<_>>>()?;
    Ok(compute_batch(calculator, &inputs))
}
