//! Request and response entities exchanged with the prediction service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Eight soil measurements submitted for a health prediction.
///
/// No range checks are applied here; the prediction service owns validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    /// Saturation (% weight).
    pub saturation: f64,
    /// Organic carbon (% weight).
    pub organic_carbon: f64,
    pub soil_ph: f64,
    pub nitrogen_level: f64,
    pub phosphorus_level: f64,
    pub potassium_level: f64,
    /// Salinity (dS/m).
    pub salinity: f64,
    /// Oxygen level (%).
    pub oxygen_level: f64,
}

impl SoilSample {
    /// Create a sample from its eight measurements, in wire order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        saturation: f64,
        organic_carbon: f64,
        soil_ph: f64,
        nitrogen_level: f64,
        phosphorus_level: f64,
        potassium_level: f64,
        salinity: f64,
        oxygen_level: f64,
    ) -> Self {
        Self {
            saturation,
            organic_carbon,
            soil_ph,
            nitrogen_level,
            phosphorus_level,
            potassium_level,
            salinity,
            oxygen_level,
        }
    }
}

/// Prediction returned by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilHealthVerdict {
    /// Classification label, e.g. "Healthy".
    pub soil_health_prediction: String,

    /// Recommendation text keyed by category.
    pub recommendations: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_uses_camel_case_keys() {
        let sample = SoilSample::new(0.5, 1.2, 6.8, 10.0, 5.0, 8.0, 0.1, 7.0);
        let value = serde_json::to_value(sample).unwrap();

        assert_eq!(
            value,
            json!({
                "saturation": 0.5,
                "organicCarbon": 1.2,
                "soilPh": 6.8,
                "nitrogenLevel": 10.0,
                "phosphorusLevel": 5.0,
                "potassiumLevel": 8.0,
                "salinity": 0.1,
                "oxygenLevel": 7.0,
            })
        );
    }

    #[test]
    fn test_sample_measurements_keep_exact_bits() {
        let values = [10.341174163541055, 20.015760496183322, 52.556215850604396];
        for v in values {
            let sample = SoilSample::new(v, v, v, v, v, v, v, v);
            let text = serde_json::to_string(&sample).unwrap();
            let back: SoilSample = serde_json::from_str(&text).unwrap();

            assert_eq!(back.saturation.to_bits(), v.to_bits(), "{v} via {text}");
            assert_eq!(back.oxygen_level.to_bits(), v.to_bits(), "{v} via {text}");
            assert_eq!(back, sample);
        }
    }

    #[test]
    fn test_sample_accepts_integer_measurements() {
        let sample: SoilSample = serde_json::from_value(json!({
            "saturation": 0.5,
            "organicCarbon": 1.2,
            "soilPh": 6.8,
            "nitrogenLevel": 10,
            "phosphorusLevel": 5,
            "potassiumLevel": 8,
            "salinity": 0.1,
            "oxygenLevel": 7,
        }))
        .unwrap();

        assert_eq!(sample.nitrogen_level, 10.0);
        assert_eq!(sample.oxygen_level, 7.0);
    }

    #[test]
    fn test_sample_rejects_missing_or_mistyped_fields() {
        let missing = serde_json::from_value::<SoilSample>(json!({ "saturation": 0.5 }));
        assert!(missing.is_err());

        let mistyped = serde_json::from_value::<SoilSample>(json!({ "saturation": "not-a-number" }));
        assert!(mistyped.is_err());
    }

    #[test]
    fn test_verdict_ignores_unknown_fields() {
        let verdict: SoilHealthVerdict = serde_json::from_value(json!({
            "soilHealthPrediction": "Moderate",
            "recommendations": { "Soil pH": "Apply lime to raise pH levels." },
            "modelVersion": "v2",
        }))
        .unwrap();

        assert_eq!(verdict.soil_health_prediction, "Moderate");
        assert_eq!(
            verdict.recommendations.get("Soil pH").map(String::as_str),
            Some("Apply lime to raise pH levels.")
        );
    }

    #[test]
    fn test_verdict_requires_recommendations() {
        let result = serde_json::from_value::<SoilHealthVerdict>(json!({
            "soilHealthPrediction": "Poor",
        }));
        assert!(result.is_err());
    }
}
