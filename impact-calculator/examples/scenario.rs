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
//! Impact scenario example
//!
//! Computes and prints the full metrics record, effect breakdown, and
//! insights for one impact.
//!
//! Usage: cargo run --example scenario -- [mass_tons] [velocity_kms] [material]
//!
//! Defaults to 1000 t at 20 km/s on rock. Set `IMPACT_CALCULATOR_CONFIG` to
//! load material overrides from a TOML file.

use impact_calculator::config::calculator_from_env;
use impact_calculator::effects::{chart_title, effect_breakdown};
use impact_calculator::{generate_insights, ImpactInput, ImpactResult};

fn parse_arg(args: &[String], index: usize, default: f64) -> f64 {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> ImpactResult<()> {
    let args: Vec<String> = std::env::args().collect();
    let mass_tons = parse_arg(&args, 1, 1000.0);
    let velocity_kms = parse_arg(&args, 2, 20.0);
    let material_key = args.get(3).map(String::as_str).unwrap_or("rock");

    let mut calculator = calculator_from_env()?;
    calculator.set_warn_on_fallback(true);

    let material = calculator.resolve_material(material_key);
    let input = ImpactInput::from_display_units(mass_tons, velocity_kms, material)?;
    let metrics = calculator.compute(&input);

    println!("Asteroid Impact Calculator");
    println!("==========================\n");
    println!("Mass:      {} t", metrics.mass_tons);
    println!("Velocity:  {} km/s", metrics.velocity_kms);
    println!("Target:    {}", metrics.target_material_display);
    println!();
    println!("{}", chart_title(&metrics));
    println!();

    for effect in effect_breakdown(&metrics) {
        println!(
            "  {:<26} {:>12.3} km   {}",
            effect.label(),
            effect.value_km,
            effect.short_explanation()
        );
    }

    println!("\nInsights:");
    for (i, insight) in generate_insights(&metrics).iter().enumerate() {
        println!("  {}. {}", i + 1, insight);
    }

    Ok(())
}
