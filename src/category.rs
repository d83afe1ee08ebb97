use serde::{Deserialize, Serialize};
use std::fmt;

/// AQI bands, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl Category {
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            Category::Good
        } else if aqi <= 100.0 {
            Category::Satisfactory
        } else if aqi <= 200.0 {
            Category::Moderate
        } else if aqi <= 300.0 {
            Category::Poor
        } else if aqi <= 400.0 {
            Category::VeryPoor
        } else {
            Category::Severe
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Satisfactory => "Satisfactory",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::VeryPoor => "Very Poor",
            Category::Severe => "Severe",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
