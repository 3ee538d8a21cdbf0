use herbauth_store::samples::models::SensorReading;
use serde::Serialize;

use crate::config::{AdulterationPolicy, ClassifierConfig};
use crate::rasa::taste_profile;

/// Recommendation attached to authentic samples.
pub const RECOMMEND_AUTHENTIC: &str = "Safe for Ayurvedic use";
/// Recommendation attached to adulterated samples.
pub const RECOMMEND_ADULTERATED: &str = "Use with caution";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub herb_name: String,
    pub purity_percent: f64,
    pub adulteration_flag: bool,
    pub confidence_score: f64,
    pub taste_profile: Vec<String>,
    pub recommendation: String,
}

/// Derive a purity percentage from pH alone.
///
/// Linear model anchored at neutral pH:
///   - pH 7 → 90.0 (baseline)
///   - each pH unit away from 7 shifts purity by 2 points
///   - clamped to [0, 100]
fn purity_from_ph(ph: f64) -> f64 {
    (90.0 + (ph - 7.0) * 2.0).clamp(0.0, 100.0)
}

fn flag_adulterated(config: &ClassifierConfig, reading: &SensorReading, purity: f64) -> bool {
    match config.policy {
        AdulterationPolicy::PhPurity => purity < config.thresholds.purity_floor,
        AdulterationPolicy::SensorThresholds => {
            reading.tds_ec > config.thresholds.tds_ec_max
                || reading.rf_resonator > config.thresholds.rf_resonator_max
                || reading.moisture > config.thresholds.moisture_max
        }
    }
}

/// Classify one sensor reading into an authenticity verdict.
///
/// Pipeline:
///   - purity: linear in pH (pH 7 → 90, ±2 points per unit, clamped to 0-100)
///   - adulteration flag: configured policy (purity floor, or raw sensor limits)
///   - confidence: 0.8 baseline plus up to 0.2 scaled by purity
///   - taste profile: fixed lookup on the verdict and pH bucket
///
/// Pure function of the config and the reading; callers persist the sample
/// separately if they want it in history.
pub fn classify(config: &ClassifierConfig, reading: &SensorReading) -> Classification {
    let purity = purity_from_ph(reading.ph);
    let adulterated = flag_adulterated(config, reading, purity);
    let confidence = 0.8 + (purity / 100.0) * 0.2;

    let recommendation = if adulterated {
        RECOMMEND_ADULTERATED
    } else {
        RECOMMEND_AUTHENTIC
    };

    Classification {
        herb_name: config.herb_name.clone(),
        purity_percent: purity,
        adulteration_flag: adulterated,
        confidence_score: confidence,
        taste_profile: taste_profile(adulterated, reading.ph),
        recommendation: recommendation.to_string(),
    }
}
