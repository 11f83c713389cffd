//! Core types for the Startup Predictor
//!
//! This module defines the data structures that flow through a prediction:
//! the input profile, the score breakdown, the forecast series and the
//! encoded envelope.

use serde::{Deserialize, Serialize};

/// Industry sector of the startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Healthcare,
    Finance,
    Ecommerce,
    Education,
    /// Also used for any unrecognized industry name
    #[serde(other)]
    Other,
}

impl Industry {
    /// All industries, in multiplier order
    pub const ALL: [Industry; 6] = [
        Industry::Tech,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Ecommerce,
        Industry::Education,
        Industry::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Ecommerce => "ecommerce",
            Industry::Education => "education",
            Industry::Other => "other",
        }
    }

    /// Parse an industry name, case-insensitively. Unknown names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tech" => Industry::Tech,
            "healthcare" => Industry::Healthcare,
            "finance" => Industry::Finance,
            "ecommerce" => Industry::Ecommerce,
            "education" => Industry::Education,
            _ => Industry::Other,
        }
    }

    /// Multiplier applied once to the additive score
    pub fn multiplier(&self) -> f64 {
        match self {
            Industry::Tech => 1.10,
            Industry::Healthcare => 1.05,
            Industry::Finance => 1.00,
            Industry::Ecommerce => 0.95,
            Industry::Education => 0.90,
            Industry::Other => 0.85,
        }
    }
}

/// Input description of a startup candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupProfile {
    /// Industry sector
    pub industry: Industry,
    /// Funding raised (currency units)
    pub funding: u64,
    /// Founder experience (years)
    pub experience: u32,
    /// Headcount
    pub team_size: u32,
    /// Subjective market size (1-10)
    pub market_size: u8,
    /// Subjective competition level (1-10)
    pub competition: u8,
}

/// Coarse risk bucket derived from the final probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a probability: >= 70 Low, >= 40 Medium, otherwise High
    pub fn from_probability(probability: u8) -> Self {
        if probability >= 70 {
            RiskLevel::Low
        } else if probability >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Individual contribution terms of a heuristic score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Starting score before any adjustment
    pub base: f64,
    /// Funding term (0 to +20)
    pub funding: f64,
    /// Experience term (0 to +15)
    pub experience: f64,
    /// Team size term (+10, -5 or -10)
    pub team: f64,
    /// Market size term, centered at 5
    pub market: f64,
    /// Competition term, centered at 5
    pub competition: f64,
    /// Sum of base and all additive terms
    pub subtotal: f64,
    /// Industry multiplier
    pub industry_multiplier: f64,
    /// Subtotal times multiplier, before clamping
    pub raw_score: f64,
    /// Raw score clamped to [0, 100]
    pub clamped_score: f64,
    /// Clamped score rounded to an integer
    pub probability: u8,
}

/// Synthetic twelve-month financial projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub months: Vec<String>,
    pub revenue: Vec<u64>,
    pub profit: Vec<u64>,
    pub loss: Vec<u64>,
}

impl ForecastSeries {
    /// Number of months in the series
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Largest value across revenue, profit and loss
    pub fn max_value(&self) -> u64 {
        self.revenue
            .iter()
            .chain(&self.profit)
            .chain(&self.loss)
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Complete prediction for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Success probability (0-100)
    pub probability: u8,
    /// Risk bucket consistent with `probability`
    pub risk_level: RiskLevel,
    /// One insight per factor plus an overall summary
    pub insights: Vec<String>,
    /// Synthetic forecast for charting
    pub forecast: ForecastSeries,
}

/// Envelope producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Encoded prediction with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    pub predictor_version: String,
    pub producer: PredictionProducer,
    pub computed_at_utc: String,
    pub profile: StartupProfile,
    pub result: PredictionResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}
