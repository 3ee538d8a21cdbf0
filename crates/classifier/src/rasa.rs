/// Taste-profile (rasa) labels: fixed Ayurvedic tags attached to results
/// for domain flavor, not derived from any physical taste sensor.
///
/// Lookup is keyed by the adulteration verdict and the sample's pH bucket
/// (acidic below 6, neutral 6 to 7 inclusive, alkaline above 7).
/// The full vocabulary results may draw from.
pub const TASTE_VOCABULARY: &[&str] = &[
    "sweet",
    "bitter",
    "sour",
    "pungent",
    "salty",
    "astringent",
    "mild",
];

/// Taste labels for a verdict/pH pair, from the fixed six-row table.
pub fn taste_profile(adulterated: bool, ph: f64) -> Vec<String> {
    let labels: &[&str] = match (adulterated, ph) {
        (true, p) if p < 6.0 => &["bitter", "sour", "pungent"],
        (true, p) if p <= 7.0 => &["bitter", "pungent"],
        (true, _) => &["bitter", "salty"],
        (false, p) if p < 6.0 => &["sweet", "sour", "mild"],
        (false, p) if p <= 7.0 => &["sweet", "mild"],
        (false, _) => &["sweet", "salty"],
    };
    labels.iter().map(|s| s.to_string()).collect()
}
