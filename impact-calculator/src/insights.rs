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
//! Templated explanatory sentences derived from an [`ImpactMetrics`] record
//!
//! Insights come from an ordered list of rules, [`INSIGHT_RULES`]. Each rule
//! is a pure predicate plus a pure renderer over the metrics; the generator
//! walks the list top to bottom and renders every rule whose predicate holds.
//! The same metrics therefore always produce the same sentences in the same
//! order.
//!
//! Six rules always apply. The `blast_vs_crater` rule applies only when the
//! air blast radius is at least the crater diameter, so a result has either
//! six or seven entries.

use crate::metrics::ImpactMetrics;

/// One entry in the ordered insight list
pub struct InsightRule {
    name: &'static str,
    applies: fn(&ImpactMetrics) -> bool,
    render: fn(&ImpactMetrics) -> String,
}

impl InsightRule {
    /// Stable identifier for this rule
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this rule contributes a sentence for `metrics`
    pub fn applies(&self, metrics: &ImpactMetrics) -> bool {
        (self.applies)(metrics)
    }

    /// Render this rule's sentence for `metrics`
    pub fn render(&self, metrics: &ImpactMetrics) -> String {
        (self.render)(metrics)
    }
}

impl std::fmt::Debug for InsightRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightRule").field("name", &self.name).finish()
    }
}

/// Rules in evaluation order
pub static INSIGHT_RULES: [InsightRule; 7] = [
    InsightRule {
        name: "energy_drivers",
        applies: always,
        render: energy_drivers,
    },
    InsightRule {
        name: "largest_zone",
        applies: always,
        render: largest_zone,
    },
    InsightRule {
        name: "shock_vs_thermal",
        applies: always,
        render: shock_vs_thermal,
    },
    InsightRule {
        name: "blast_vs_crater",
        applies: blast_reaches_past_crater,
        render: blast_vs_crater,
    },
    InsightRule {
        name: "scaling_note",
        applies: always,
        render: scaling_note,
    },
    InsightRule {
        name: "target_material",
        applies: always,
        render: target_material,
    },
    InsightRule {
        name: "severity",
        applies: always,
        render: severity,
    },
];

/// Generate the explanatory sentences for a metrics record
///
/// # Example
///
/// ```
/// use impact_calculator::{compute_metrics, generate_insights, ImpactInput, TargetMaterial};
///
/// let input = ImpactInput::from_display_units(1000.0, 20.0, TargetMaterial::Rock).unwrap();
/// let insights = generate_insights(&compute_metrics(&input));
/// assert!(insights[0].contains("At 20.0 km/s"));
/// assert!(insights.last().unwrap().contains("'Very Low'"));
/// ```
pub fn generate_insights(metrics: &ImpactMetrics) -> Vec<String> {
    INSIGHT_RULES
        .iter()
        .filter(|rule| rule.applies(metrics))
        .map(|rule| rule.render(metrics))
        .collect()
}

/// The zone names compared by the `largest_zone` rule, in tie-break order
pub const ZONE_NAMES: [&str; 3] = [
    "Air blast radius",
    "Shock wave radius",
    "Thermal radiation radius",
];

/// Name of the largest of the air blast, shock wave, and thermal radii
///
/// Ties go to the zone listed first in [`ZONE_NAMES`].
pub fn largest_zone_name(metrics: &ImpactMetrics) -> &'static str {
    let zones = [metrics.air_km, metrics.shock_km, metrics.thermal_km];
    let mut best = 0;
    for (i, value) in zones.iter().enumerate().skip(1) {
        if *value > zones[best] {
            best = i;
        }
    }
    ZONE_NAMES[best]
}

/// Format a metric the way it is shown to users: shortest form, `20.0` not `20`
///
/// Very large values use scientific notation with an explicit sign on the
/// exponent (`1e+16`).
pub(crate) fn format_value(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

fn always(_: &ImpactMetrics) -> bool {
    true
}

fn blast_reaches_past_crater(metrics: &ImpactMetrics) -> bool {
    metrics.air_km >= metrics.crater_km
}

fn energy_drivers(metrics: &ImpactMetrics) -> String {
    format!(
        "Kinetic energy rises strongly with speed (E ∝ v²). At {} km/s, even modest mass ({} t) can yield {} Mt TNT.",
        format_value(metrics.velocity_kms),
        format_value(metrics.mass_tons),
        format_value(metrics.energy_megatons_tnt)
    )
}

fn largest_zone(metrics: &ImpactMetrics) -> String {
    format!(
        "{} is the largest zone here. Atmospheric pressure waves travel farther than intense heat, so blast/shock often extend beyond thermal effects.",
        largest_zone_name(metrics)
    )
}

fn shock_vs_thermal(metrics: &ImpactMetrics) -> String {
    if metrics.shock_km >= metrics.thermal_km {
        "Shock wave ≥ Thermal: Pressure waves attenuate more slowly with distance, while thermal radiation drops roughly with 1/r² and is absorbed by the atmosphere.".to_string()
    } else {
        "Thermal ≥ Shock: A large fraction of energy coupled into heat can drive a wider thermal zone in this scenario.".to_string()
    }
}

fn blast_vs_crater(_: &ImpactMetrics) -> String {
    "Air blast ≫ Crater: Cratering is local to the impact point, but blast effects propagate through the atmosphere over much larger distances.".to_string()
}

fn scaling_note(_: &ImpactMetrics) -> String {
    "Scaling note: Crater size grows sub‑linearly with energy (~E^1/4), while blast/thermal radii grow a bit faster (~E^1/3), so radii can outpace crater size.".to_string()
}

fn target_material(metrics: &ImpactMetrics) -> String {
    format!(
        "Target: {}. Softer materials (water, ice) create larger craters, while dense rock produces smaller, deeper craters.",
        metrics.target_material_display
    )
}

fn severity(metrics: &ImpactMetrics) -> String {
    format!(
        "Overall severity rated as '{}'. Reducing speed or mass reduces energy fastest (speed has the biggest effect).",
        metrics.severity
    )
}
