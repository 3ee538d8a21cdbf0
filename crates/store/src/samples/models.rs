use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ion-selective electrode readings, one channel per ion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IonSelective {
    #[serde(rename = "Na")]
    pub na: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "Ca")]
    pub ca: f64,
}

/// One e-tongue capture. Wire names match the device payload exactly.
///
/// Values are taken as-is: there is no range validation, and degenerate
/// numbers (NaN, out-of-domain pH) flow through the classifier arithmetic
/// rather than being rejected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub voltammetry: Vec<f64>,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub tds_ec: f64,
    pub orp: f64,
    pub turbidity: f64,
    pub temperature: f64,
    pub moisture: f64,
    pub ion_selective: IonSelective,
    pub rf_resonator: f64,
}

/// A submitted test sample. `sample_id` is caller-supplied and not
/// guaranteed unique; the store never mutates or deletes a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "sampleID")]
    pub sample_id: String,
    pub timestamp: DateTime<Utc>,
    pub sensors: SensorReading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_wire_names_round_trip() {
        let json = r#"{
            "sampleID": "S-1",
            "timestamp": "2024-01-01T00:00:00Z",
            "sensors": {
                "voltammetry": [0.1, 0.2],
                "pH": 6.8,
                "tds_ec": 120.0,
                "orp": 180.0,
                "turbidity": 3.0,
                "temperature": 24.0,
                "moisture": 11.0,
                "ion_selective": {"Na": 12.0, "K": 6.0, "Ca": 9.0},
                "rf_resonator": 1.5
            }
        }"#;

        let sample: Sample = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(sample.sample_id, "S-1");
        assert_eq!(sample.sensors.ph, 6.8);
        assert_eq!(sample.sensors.ion_selective.na, 12.0);

        let out = serde_json::to_value(&sample).expect("should serialize");
        assert!(out.get("sampleID").is_some());
        assert!(out["sensors"].get("pH").is_some());
        assert!(out["sensors"]["ion_selective"].get("Na").is_some());
        assert_eq!(out["timestamp"], "2024-01-01T00:00:00Z");
    }
}
