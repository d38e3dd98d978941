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
//! Per-effect breakdown for charts and impact visualizations

use crate::insights::format_value;
use crate::metrics::ImpactMetrics;

/// One of the four damage estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Crater diameter
    Crater,
    /// Air blast radius
    AirBlast,
    /// Shock wave radius
    ShockWave,
    /// Thermal radiation radius
    Thermal,
}

impl EffectKind {
    /// Every effect in display order
    pub const ALL: [EffectKind; 4] = [
        EffectKind::Crater,
        EffectKind::AirBlast,
        EffectKind::ShockWave,
        EffectKind::Thermal,
    ];

    /// Chart label
    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Crater => "Crater diameter",
            EffectKind::AirBlast => "Air blast radius",
            EffectKind::ShockWave => "Shock wave radius",
            EffectKind::Thermal => "Thermal radiation radius",
        }
    }

    /// One-sentence explanation of how the effect behaves
    pub fn explanation(self) -> &'static str {
        match self {
            EffectKind::Crater => {
                "Crater diameter is local to the impact point and grows sub‑linearly with energy (~E^1/4)."
            }
            EffectKind::AirBlast => {
                "Air blast radius extends far as pressure waves propagate through the atmosphere."
            }
            EffectKind::ShockWave => {
                "Shock wave radius often exceeds thermal as pressure attenuates slower than heat."
            }
            EffectKind::Thermal => {
                "Thermal radiation radius falls off roughly with 1/r² and is absorbed by the air."
            }
        }
    }

    /// Tooltip-sized explanation
    pub fn short_explanation(self) -> &'static str {
        match self {
            EffectKind::Crater => "Local; grows slowly with energy",
            EffectKind::AirBlast => "Pressure waves travel far",
            EffectKind::ShockWave => "Pressure drops slower than heat",
            EffectKind::Thermal => "Heat ~1/r² and absorbed by air",
        }
    }

    /// This effect's value in a metrics record (km)
    pub fn value_km(self, metrics: &ImpactMetrics) -> f64 {
        match self {
            EffectKind::Crater => metrics.crater_km,
            EffectKind::AirBlast => metrics.air_km,
            EffectKind::ShockWave => metrics.shock_km,
            EffectKind::Thermal => metrics.thermal_km,
        }
    }
}

/// A labelled effect value ready for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSummary {
    /// Which effect this is
    pub kind: EffectKind,
    /// Size in kilometers
    pub value_km: f64,
}

impl EffectSummary {
    /// Chart label
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Full explanation
    pub fn explanation(&self) -> &'static str {
        self.kind.explanation()
    }

    /// Tooltip explanation
    pub fn short_explanation(&self) -> &'static str {
        self.kind.short_explanation()
    }
}

/// All four effects in display order: crater, air blast, shock wave, thermal
pub fn effect_breakdown(metrics: &ImpactMetrics) -> [EffectSummary; 4] {
    EffectKind::ALL.map(|kind| EffectSummary {
        kind,
        value_km: kind.value_km(metrics),
    })
}

/// Chart heading, e.g. "Energy: 0.042 Mt | Severity: Very Low"
pub fn chart_title(metrics: &ImpactMetrics) -> String {
    format!(
        "Energy: {} Mt | Severity: {}",
        format_value(metrics.energy_megatons_tnt),
        metrics.severity
    )
}

/// Radius used to scale concentric effect rings, never below 1 km
///
/// The crater is excluded: rings show the atmospheric effects only.
pub fn ring_scale_km(metrics: &ImpactMetrics) -> f64 {
    [metrics.air_km, metrics.shock_km, metrics.thermal_km]
        .into_iter()
        .fold(1.0, f64::max)
}
