//! Prediction encoding
//!
//! This module wraps prediction results into envelopes carrying producer and
//! timing metadata, and serializes them to JSON.

use chrono::Utc;
use uuid::Uuid;

use crate::error::PredictError;
use crate::types::{
    PredictionEnvelope, PredictionProducer, PredictionResult, ScoreBreakdown, StartupProfile,
};
use crate::{PREDICTOR_VERSION, PRODUCER_NAME};

/// Encoder for prediction envelopes
pub struct PredictionEncoder {
    instance_id: String,
}

impl Default for PredictionEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Wrap a result into an envelope
    pub fn encode(
        &self,
        profile: &StartupProfile,
        result: PredictionResult,
        breakdown: Option<ScoreBreakdown>,
    ) -> PredictionEnvelope {
        PredictionEnvelope {
            predictor_version: PREDICTOR_VERSION.to_string(),
            producer: PredictionProducer {
                name: PRODUCER_NAME.to_string(),
                version: PREDICTOR_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            profile: profile.clone(),
            result,
            breakdown,
        }
    }

    /// Encode to a single-line JSON string
    pub fn encode_to_json(
        &self,
        profile: &StartupProfile,
        result: PredictionResult,
        breakdown: Option<ScoreBreakdown>,
    ) -> Result<String, PredictError> {
        let envelope = self.encode(profile, result, breakdown);
        serde_json::to_string(&envelope).map_err(|e| PredictError::EncodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::FixedFactors;
    use crate::scorer::HeuristicScorer;
    use crate::types::Industry;

    fn sample_profile() -> StartupProfile {
        StartupProfile {
            industry: Industry::Healthcare,
            funding: 1_500_000,
            experience: 6,
            team_size: 9,
            market_size: 8,
            competition: 6,
        }
    }

    #[test]
    fn test_encode_envelope() {
        let profile = sample_profile();
        let result = HeuristicScorer::score(&profile, &mut FixedFactors::constant(1.0));
        let encoder = PredictionEncoder::with_instance_id("test-instance".to_string());

        let envelope = encoder.encode(&profile, result.clone(), None);

        assert_eq!(envelope.predictor_version, PREDICTOR_VERSION);
        assert_eq!(envelope.producer.name, PRODUCER_NAME);
        assert_eq!(envelope.producer.instance_id, "test-instance");
        assert_eq!(envelope.profile, profile);
        assert_eq!(envelope.result, result);
        assert!(envelope.breakdown.is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(&envelope.computed_at_utc).is_ok());
    }

    #[test]
    fn test_encode_to_json_shape() {
        let profile = sample_profile();
        let result = HeuristicScorer::score(&profile, &mut FixedFactors::constant(1.0));
        let breakdown = HeuristicScorer::breakdown(&profile);
        let encoder = PredictionEncoder::new();

        let json = encoder
            .encode_to_json(&profile, result, Some(breakdown))
            .unwrap();
        assert!(!json.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let result = &parsed["result"];
        assert!(result["probability"].is_u64());
        assert!(result["riskLevel"].is_string());
        assert_eq!(result["insights"].as_array().unwrap().len(), 6);
        assert_eq!(result["forecast"]["months"].as_array().unwrap().len(), 12);
        assert_eq!(parsed["profile"]["teamSize"], 9);
        assert!(parsed["breakdown"]["industryMultiplier"].is_number());
    }

    #[test]
    fn test_breakdown_omitted_when_absent() {
        let profile = sample_profile();
        let result = HeuristicScorer::score(&profile, &mut FixedFactors::constant(1.0));
        let json = PredictionEncoder::new()
            .encode_to_json(&profile, result, None)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("breakdown").is_none());
    }
}
