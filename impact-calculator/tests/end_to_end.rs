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
//! End-to-end scenarios: form fields in, headline, metrics and insights out
//!
//! Covers the worked examples, the severity ladder, the insight rule list,
//! and the rejection paths of the form handler.

use impact_calculator::config::parse_config;
use impact_calculator::effects::{chart_title, effect_breakdown};
use impact_calculator::form::{
    handle_form, handle_form_with, FormFields, INVALID_NUMBER_MESSAGE, INVALID_OPTION_MESSAGE,
    NEGATIVE_INPUT_MESSAGE,
};
use impact_calculator::{
    classify_severity, compute_metrics, generate_insights, ImpactInput, Severity, TargetMaterial,
};

fn submit(option: &str, mass: &str, velocity: &str, material: &str) -> FormFields {
    FormFields::from_pairs([
        ("option", option),
        ("mass", mass),
        ("velocity", velocity),
        ("target_material", material),
    ])
}

#[test]
fn test_thousand_tons_at_twenty_kms() {
    let input = ImpactInput::from_display_units(1000.0, 20.0, TargetMaterial::Rock).unwrap();
    assert_eq!(input.mass_kg(), 1.0e6);
    assert_eq!(input.velocity_m_s(), 2.0e4);

    let metrics = compute_metrics(&input);
    assert_eq!(metrics.energy_megatons_tnt, 0.042);
    assert_eq!(metrics.crater_km, 0.541);
    assert_eq!(metrics.air_km, 1.637);
    assert_eq!(metrics.thermal_km, 3.016);
    assert!((metrics.shock_km - 292.402).abs() < 0.0015);
    assert_eq!(metrics.severity, Severity::VeryLow);
}

#[test]
fn test_million_tons_at_thirty_kms() {
    let input = ImpactInput::from_display_units(1.0e6, 30.0, TargetMaterial::Rock).unwrap();
    let metrics = compute_metrics(&input);
    assert_eq!(metrics.energy_megatons_tnt, 94.5);
    assert_eq!(metrics.severity, Severity::High);
    assert_eq!(metrics.crater_km, 3.725);
    assert_eq!(metrics.air_km, 21.457);
    assert_eq!(metrics.thermal_km, 143.048);
}

#[test]
fn test_severity_ladder_boundaries() {
    assert_eq!(classify_severity(0.0999), Severity::VeryLow);
    assert_eq!(classify_severity(0.1), Severity::Low);
    assert_eq!(classify_severity(1.0), Severity::Moderate);
    assert_eq!(classify_severity(10.0), Severity::High);
    assert_eq!(classify_severity(100.0), Severity::Extreme);
}

#[test]
fn test_insights_for_large_impact() {
    let input = ImpactInput::from_display_units(1000.0, 20.0, TargetMaterial::Rock).unwrap();
    let insights = generate_insights(&compute_metrics(&input));

    assert_eq!(insights.len(), 7);
    assert_eq!(
        insights[0],
        "Kinetic energy rises strongly with speed (E ∝ v²). At 20.0 km/s, even modest mass (1000.0 t) can yield 0.042 Mt TNT."
    );
    assert!(insights[1].starts_with("Shock wave radius is the largest zone here."));
    assert!(insights[2].starts_with("Shock wave ≥ Thermal"));
    assert!(insights[3].starts_with("Air blast ≫ Crater"));
    assert!(insights[4].starts_with("Scaling note"));
    assert!(insights[5].starts_with("Target: Rock/Solid Ground."));
    assert_eq!(
        insights[6],
        "Overall severity rated as 'Very Low'. Reducing speed or mass reduces energy fastest (speed has the biggest effect)."
    );
}

#[test]
fn test_small_impact_omits_blast_vs_crater_note() {
    // 1 t at 0.1 km/s: crater 0.007 km, air blast 0.005 km
    let input = ImpactInput::from_display_units(1.0, 0.1, TargetMaterial::Rock).unwrap();
    let metrics = compute_metrics(&input);
    assert!(metrics.air_km < metrics.crater_km);

    let insights = generate_insights(&metrics);
    assert_eq!(insights.len(), 6);
    assert!(insights.iter().all(|s| !s.starts_with("Air blast ≫ Crater")));
    assert!(insights[3].starts_with("Scaling note"));
}

#[test]
fn test_zero_input_produces_well_defined_output() {
    let outcome = handle_form(&submit("1", "0", "0", "rock"));
    assert_eq!(outcome.result, "Kinetic Energy: 0.0 Megatons of TNT");
    let metrics = outcome.metrics.unwrap();
    assert_eq!(metrics.severity, Severity::VeryLow);
    // Every radius ties at zero, so the first-listed zone wins
    assert!(outcome.insights[1].starts_with("Air blast radius is the largest zone here."));
    assert_eq!(outcome.insights.len(), 7);
}

#[test]
fn test_form_headlines_for_each_option() {
    let expectations = [
        ("1", "Kinetic Energy: 0.042 Megatons of TNT"),
        ("2", "Crater Diameter: 0.541 km"),
        ("3", "Air Blast Radius: 1.637 km"),
        ("5", "Thermal Radiation Radius: 3.016 km"),
        ("9", INVALID_OPTION_MESSAGE),
        ("abc", INVALID_OPTION_MESSAGE),
    ];
    for (option, expected) in expectations {
        let outcome = handle_form(&submit(option, "1000", "20", "rock"));
        assert_eq!(outcome.result, expected, "option {}", option);
        assert!(outcome.metrics.is_some());
    }

    let outcome = handle_form(&submit("4", "1000", "20", "rock"));
    assert!(outcome.result.starts_with("Shock Wave Radius: 292.40"));
}

#[test]
fn test_form_rejects_bad_numbers() {
    let outcome = handle_form(&submit("1", "heavy", "20", "rock"));
    assert_eq!(outcome.result, INVALID_NUMBER_MESSAGE);
    assert!(outcome.is_error());
    assert!(outcome.insights.is_empty());

    let outcome = handle_form(&submit("1", "1000", "NaN", "rock"));
    assert_eq!(outcome.result, INVALID_NUMBER_MESSAGE);

    let outcome = handle_form(&submit("1", "1000", "-20", "rock"));
    assert_eq!(outcome.result, NEGATIVE_INPUT_MESSAGE);
    assert!(outcome.metrics.is_none());
}

#[test]
fn test_form_unknown_material_uses_rock() {
    let lava = handle_form(&submit("2", "1000", "20", "lava"));
    let rock = handle_form(&submit("2", "1000", "20", "rock"));
    assert_eq!(lava, rock);
    assert_eq!(
        lava.metrics.unwrap().target_material_display,
        "Rock/Solid Ground"
    );
}

#[test]
fn test_form_missing_fields_use_defaults() {
    let outcome = handle_form(&FormFields::from_pairs([("mass", "1000"), ("velocity", "20")]));
    assert_eq!(outcome.result, "Kinetic Energy: 0.042 Megatons of TNT");
    assert!(outcome.insights[5].starts_with("Target: Rock/Solid Ground."));
}

#[test]
fn test_configured_calculator_flows_through_form() {
    let calculator = parse_config(
        "[materials.water]\ndisplay_name = \"Pacific Ocean\"\n",
        "inline",
    )
    .unwrap();
    let outcome = handle_form_with(&calculator, &submit("2", "1000", "20", "water"));
    assert_eq!(outcome.result, "Crater Diameter: 0.794 km");
    assert!(outcome.insights.iter().any(|s| s.starts_with("Target: Pacific Ocean.")));
}

#[test]
fn test_effect_breakdown_for_chart() {
    let input = ImpactInput::from_display_units(1.0e6, 30.0, TargetMaterial::Rock).unwrap();
    let metrics = compute_metrics(&input);
    let breakdown = effect_breakdown(&metrics);
    assert_eq!(breakdown[0].value_km, metrics.crater_km);
    assert_eq!(breakdown[1].value_km, metrics.air_km);
    assert_eq!(breakdown[2].value_km, metrics.shock_km);
    assert_eq!(breakdown[3].value_km, metrics.thermal_km);
    assert_eq!(chart_title(&metrics), "Energy: 94.5 Mt | Severity: High");
}
