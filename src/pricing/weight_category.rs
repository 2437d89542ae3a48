use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightCategory {
    Unknown,
    Small,
    Medium,
    Large,
    Huge,
}

impl WeightCategory {
    /// Bands a weight in kilograms. Negative, NaN and anything above 1000 kg is `Unknown`.
    pub fn from_weight(weight: f64) -> WeightCategory {
        match weight {
            w if (0.0..=10.0).contains(&w) => WeightCategory::Small,
            w if w > 10.0 && w <= 25.0 => WeightCategory::Medium,
            w if w > 25.0 && w <= 50.0 => WeightCategory::Large,
            w if w > 50.0 && w <= 1000.0 => WeightCategory::Huge,
            _ => WeightCategory::Unknown,
        }
    }

    pub fn base_price(&self) -> Option<f64> {
        match self {
            WeightCategory::Small => Some(100.0),
            WeightCategory::Medium => Some(300.0),
            WeightCategory::Large => Some(500.0),
            WeightCategory::Huge => Some(2000.0),
            WeightCategory::Unknown => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeightCategory::Small => "small",
            WeightCategory::Medium => "medium",
            WeightCategory::Large => "large",
            WeightCategory::Huge => "huge",
            WeightCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeightCategory {
    type Err = std::convert::Infallible;

    // Unrecognised names fall back to Unknown rather than failing.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "small" => WeightCategory::Small,
            "medium" => WeightCategory::Medium,
            "large" => WeightCategory::Large,
            "huge" => WeightCategory::Huge,
            _ => WeightCategory::Unknown,
        })
    }
}
