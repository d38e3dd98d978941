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
//! Five-band severity classification of impact energy

use serde::{Serialize, Serializer};
use std::fmt;

/// Ordinal severity band for an impact's total energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Below 0.1 Mt
    VeryLow,
    /// 0.1 Mt up to (not including) 1 Mt
    Low,
    /// 1 Mt up to 10 Mt
    Moderate,
    /// 10 Mt up to 100 Mt
    High,
    /// 100 Mt and above
    Extreme,
}

/// Upper bounds (exclusive, in megatons) for every band except [`Severity::Extreme`]
const BANDS: [(f64, Severity); 4] = [
    (0.1, Severity::VeryLow),
    (1.0, Severity::Low),
    (10.0, Severity::Moderate),
    (100.0, Severity::High),
];

impl Severity {
    /// Human-readable label, e.g. "Very Low"
    pub fn label(self) -> &'static str {
        match self {
            Severity::VeryLow => "Very Low",
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify an energy in megatons of TNT
///
/// Bands are half-open on the upper bound, so a value exactly on a threshold
/// belongs to the band above it (0.1 Mt is "Low"). NaN compares false against
/// every bound and lands in [`Severity::Extreme`].
pub fn classify_severity(energy_megatons_tnt: f64) -> Severity {
    BANDS
        .iter()
        .find(|(upper, _)| energy_megatons_tnt < *upper)
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Extreme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_severity(0.0), Severity::VeryLow);
        assert_eq!(classify_severity(0.0999), Severity::VeryLow);
        assert_eq!(classify_severity(0.1), Severity::Low);
        assert_eq!(classify_severity(0.999), Severity::Low);
        assert_eq!(classify_severity(1.0), Severity::Moderate);
        assert_eq!(classify_severity(10.0), Severity::High);
        assert_eq!(classify_severity(99.999), Severity::High);
        assert_eq!(classify_severity(100.0), Severity::Extreme);
        assert_eq!(classify_severity(1e9), Severity::Extreme);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::VeryLow.to_string(), "Very Low");
        assert_eq!(Severity::Extreme.label(), "Extreme");
    }

    #[test]
    fn test_ordering_follows_energy() {
        assert!(Severity::VeryLow < Severity::Low);
        assert!(Severity::High < Severity::Extreme);
    }
}
