//! Pipeline orchestration
//!
//! This module provides the public API for Startup Predictor.
//! It orchestrates a prediction from raw profile JSON to an encoded envelope.

use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::PredictorConfig;
use crate::encoder::PredictionEncoder;
use crate::error::PredictError;
use crate::forecast::{FactorSource, RandomFactors};
use crate::scorer::HeuristicScorer;
use crate::types::{PredictionEnvelope, PredictionResult, StartupProfile};

/// Predict a single profile with an unseeded forecast.
///
/// The profile is validated first; out-of-range ratings are rejected with
/// [`PredictError::InvalidInput`].
///
/// # Example
/// ```ignore
/// let result = predict(&profile)?;
/// println!("{}% ({:?})", result.probability, result.risk_level);
/// ```
pub fn predict(profile: &StartupProfile) -> Result<PredictionResult, PredictError> {
    check_profile(profile)?;
    let mut factors = RandomFactors::new(rand::thread_rng());
    Ok(HeuristicScorer::score(profile, &mut factors))
}

/// Convert a raw profile JSON object into an encoded prediction envelope.
///
/// # Arguments
/// * `raw_json` - JSON object with `industry`, `funding`, `experience`,
///   `teamSize`, `marketSize` and `competition`
///
/// # Returns
/// Envelope JSON containing the profile and its prediction
pub fn predict_json(raw_json: String) -> Result<String, PredictError> {
    let profile: StartupProfile = serde_json::from_str(&raw_json)?;
    let result = predict(&profile)?;
    PredictionEncoder::new().encode_to_json(&profile, result, None)
}

/// Parse a JSON array of profiles
pub fn parse_array(json: &str) -> Result<Vec<StartupProfile>, PredictError> {
    let profiles: Vec<StartupProfile> = serde_json::from_str(json)?;
    Ok(profiles)
}

/// Parse NDJSON (one profile per line, blank lines skipped)
pub fn parse_ndjson(ndjson: &str) -> Result<Vec<StartupProfile>, PredictError> {
    let mut profiles = Vec::new();
    for (line_num, line) in ndjson.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<StartupProfile>(trimmed) {
            Ok(profile) => profiles.push(profile),
            Err(e) => {
                return Err(PredictError::ParseError(format!(
                    "Failed to parse line {}: {}",
                    line_num + 1,
                    e
                )));
            }
        }
    }
    Ok(profiles)
}

fn check_profile(profile: &StartupProfile) -> Result<(), PredictError> {
    profile.validate().map_err(|e| {
        warn!(error = %e, "rejected startup profile");
        PredictError::InvalidInput(e.to_string())
    })
}

/// Stateful predictor with its own configuration and forecast generator.
///
/// With a configured seed, the sequence of forecasts it produces is
/// reproducible across runs.
pub struct Predictor {
    config: PredictorConfig,
    encoder: PredictionEncoder,
    factors: RandomFactors<StdRng>,
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor {
    /// Create a predictor with default settings
    pub fn new() -> Self {
        Self::with_config(PredictorConfig::default())
    }

    /// Create a predictor from a configuration
    pub fn with_config(config: PredictorConfig) -> Self {
        let factors = match config.seed {
            Some(seed) => RandomFactors::seeded(seed),
            None => RandomFactors::from_entropy(),
        };
        let encoder = match &config.instance_id {
            Some(id) => PredictionEncoder::with_instance_id(id.clone()),
            None => PredictionEncoder::new(),
        };
        debug!(seed = ?config.seed, instance_id = encoder.instance_id(), "predictor created");

        Self {
            config,
            encoder,
            factors,
        }
    }

    /// Create a predictor with a fixed forecast seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(PredictorConfig::default().with_seed(seed))
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predict one profile
    pub fn predict(&mut self, profile: &StartupProfile) -> Result<PredictionResult, PredictError> {
        if self.config.validate_input {
            check_profile(profile)?;
        }
        let factors: &mut dyn FactorSource = &mut self.factors;
        Ok(HeuristicScorer::score(profile, factors))
    }

    /// Predict one profile and wrap it in an envelope
    pub fn predict_envelope(
        &mut self,
        profile: &StartupProfile,
    ) -> Result<PredictionEnvelope, PredictError> {
        let result = self.predict(profile)?;
        let breakdown = self
            .config
            .include_breakdown
            .then(|| HeuristicScorer::breakdown(profile));
        Ok(self.encoder.encode(profile, result, breakdown))
    }

    /// Process a raw profile JSON object into envelope JSON
    pub fn process_json(&mut self, raw_json: &str) -> Result<String, PredictError> {
        let profile: StartupProfile = serde_json::from_str(raw_json)?;
        let envelope = self.predict_envelope(&profile)?;
        serde_json::to_string(&envelope).map_err(|e| PredictError::EncodingError(e.to_string()))
    }

    /// Predict a batch in order, stopping at the first invalid profile
    pub fn predict_batch(
        &mut self,
        profiles: &[StartupProfile],
    ) -> Result<Vec<PredictionEnvelope>, PredictError> {
        let mut envelopes = Vec::with_capacity(profiles.len());
        for (index, profile) in profiles.iter().enumerate() {
            let envelope = self.predict_envelope(profile).map_err(|e| match e {
                PredictError::InvalidInput(msg) => {
                    PredictError::InvalidInput(format!("profile {}: {}", index, msg))
                }
                other => other,
            })?;
            envelopes.push(envelope);
        }
        debug!(count = envelopes.len(), "batch predicted");
        Ok(envelopes)
    }
}
