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
//! Calculator configuration loaded from TOML
//!
//! The built-in material table and classic coefficients need no
//! configuration. A TOML file can override individual material properties
//! and pick the effect model; anything it leaves out keeps the built-in value.
//!
//! ```toml
//! schema_version = "1.0.0"
//! effect_model = "calibrated"
//!
//! [materials.rock]
//! density = 2700.0
//! display_name = "Granite"
//! ```
//!
//! # Environment Configuration
//!
//! Set `IMPACT_CALCULATOR_CONFIG` to the path of such a file and call
//! [`calculator_from_env`]:
//!
//! ```bash
//! export IMPACT_CALCULATOR_CONFIG=/etc/impact-calculator/materials.toml
//! ```
//!
//! The table is read once at startup and is immutable afterwards.

use crate::error::{ImpactError, ImpactResult};
use crate::materials::{MaterialProperties, MaterialTable, TargetMaterial};
use crate::metrics::Calculator;
use crate::physics::EffectModel;
use semver::Version;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "IMPACT_CALCULATOR_CONFIG";

/// Version of the configuration file format this crate reads
///
/// Files declare the version they were written for. The major version must
/// match and the file's minor version must not be newer than this one.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    schema_version: Option<String>,
    effect_model: Option<EffectModelName>,
    #[serde(default)]
    materials: BTreeMap<String, MaterialOverride>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EffectModelName {
    Classic,
    Calibrated,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MaterialOverride {
    density: Option<f64>,
    gravity: Option<f64>,
    crater_scaling_k: Option<f64>,
    display_name: Option<String>,
}

impl MaterialOverride {
    fn apply(self, base: &MaterialProperties) -> MaterialProperties {
        let display_name = match self.display_name {
            Some(name) => name,
            None => base.display_name().to_string(),
        };
        MaterialProperties::new(
            self.density.unwrap_or(base.density()),
            self.gravity.unwrap_or(base.gravity()),
            self.crater_scaling_k.unwrap_or(base.crater_scaling_k()),
            display_name,
        )
    }
}

/// Check whether a file's schema version can be read by this crate
pub fn is_schema_compatible(file_version: &str) -> bool {
    let file_ver = match Version::parse(file_version) {
        Ok(v) => v,
        Err(_) => return false,
    };
    let ours = match Version::parse(CONFIG_SCHEMA_VERSION) {
        Ok(v) => v,
        Err(_) => return false,
    };

    if file_ver.major != ours.major {
        return false;
    }

    // 0.x formats treat every minor bump as breaking
    if ours.major != 0 {
        file_ver.minor <= ours.minor
    } else {
        file_ver.minor == ours.minor
    }
}

/// Build a calculator from TOML text
///
/// `source` names the text in error messages (usually its path).
///
/// # Errors
///
/// Returns [`ImpactError::Config`] for malformed TOML, an incompatible
/// `schema_version`, an unknown material key, or a property that is not
/// positive and finite.
pub fn parse_config(text: &str, source: &str) -> ImpactResult<Calculator> {
    let config_error = |message: String| ImpactError::Config {
        path: source.to_string(),
        message,
    };

    let file: ConfigFile = toml::from_str(text).map_err(|e| config_error(e.to_string()))?;

    if let Some(version) = &file.schema_version {
        if !is_schema_compatible(version) {
            return Err(config_error(format!(
                "schema version {} is incompatible with supported version {}",
                version, CONFIG_SCHEMA_VERSION
            )));
        }
    }

    let mut table = MaterialTable::default();
    for (key, overrides) in file.materials {
        let material = TargetMaterial::lookup(&key)
            .ok_or_else(|| config_error(format!("unknown material '{}'", key)))?;
        let properties = overrides.apply(table.get(material));
        properties
            .validate()
            .map_err(|e| config_error(format!("material '{}': {}", key, e)))?;
        table = table.with_properties(material, properties);
    }

    let model = match file.effect_model {
        None | Some(EffectModelName::Classic) => EffectModel::classic(),
        Some(EffectModelName::Calibrated) => EffectModel::calibrated(),
    };

    Ok(Calculator::new(table, model))
}

/// Build a calculator from a TOML file
///
/// # Errors
///
/// Returns [`ImpactError::Config`] if the file cannot be read or fails
/// [`parse_config`].
pub fn load_config(path: impl AsRef<Path>) -> ImpactResult<Calculator> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| ImpactError::Config {
        path: source.clone(),
        message: e.to_string(),
    })?;
    parse_config(&text, &source)
}

/// Build a calculator from the file named by [`CONFIG_ENV_VAR`]
///
/// Returns the default calculator when the variable is unset.
pub fn calculator_from_env() -> ImpactResult<Calculator> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => {
            eprintln!("Info: loading calculator configuration from {}", path);
            load_config(path)
        }
        Err(_) => Ok(Calculator::default()),
    }
}
