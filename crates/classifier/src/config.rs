use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which rule decides the adulteration flag.
///
/// The two rules observed in the field deployments were never reconciled;
/// they stay separate here and the deployment picks one. They are not
/// merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdulterationPolicy {
    /// Flag when the pH-derived purity score drops below the purity floor.
    PhPurity,
    /// Flag from raw conductivity, RF resonance, and moisture cutoffs.
    SensorThresholds,
}

impl AdulterationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhPurity => "ph-purity",
            Self::SensorThresholds => "sensor-thresholds",
        }
    }
}

impl FromStr for AdulterationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ph-purity" => Ok(Self::PhPurity),
            "sensor-thresholds" => Ok(Self::SensorThresholds),
            _ => Err(format!("unknown adulteration policy: {value}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Purity floor for the ph-purity policy; below it a sample is flagged.
    pub purity_floor: f64,
    /// Conductivity ceiling for the sensor-thresholds policy (uS/cm).
    pub tds_ec_max: f64,
    /// RF resonance shift ceiling for the sensor-thresholds policy.
    pub rf_resonator_max: f64,
    /// Moisture ceiling for the sensor-thresholds policy (percent).
    pub moisture_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            purity_floor: 85.0,
            tds_ec_max: 500.0,
            rf_resonator_max: 3.0,
            moisture_max: 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub policy: AdulterationPolicy,
    pub thresholds: Thresholds,
    /// Label attached to every result; passed through, never derived.
    pub herb_name: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            policy: AdulterationPolicy::PhPurity,
            thresholds: Thresholds::default(),
            herb_name: "Tulsi".to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn with_policy(policy: AdulterationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}
