//! Heuristic scoring
//!
//! This module computes the success probability of a startup profile with a
//! fixed-weight linear/piecewise heuristic:
//! - Additive contribution terms for funding, experience, team, market and competition
//! - A single industry multiplier over the additive total
//! - Clamping to [0, 100] and rounding to an integer probability

use tracing::debug;

use crate::forecast::{FactorSource, ForecastGenerator};
use crate::insights::generate_insights;
use crate::types::{PredictionResult, RiskLevel, ScoreBreakdown, StartupProfile};

/// Starting score before any adjustment
pub const BASE_SCORE: f64 = 50.0;

/// Funding units per score point
const FUNDING_UNIT: f64 = 1_000_000.0;
/// Maximum funding contribution
const FUNDING_CAP: f64 = 20.0;
/// Score points per year of experience
const EXPERIENCE_WEIGHT: f64 = 2.0;
/// Maximum experience contribution
const EXPERIENCE_CAP: f64 = 15.0;
/// Neutral midpoint for market size and competition
const NEUTRAL_RATING: f64 = 5.0;
const MARKET_WEIGHT: f64 = 3.0;
const COMPETITION_WEIGHT: f64 = 2.0;

/// Deterministic part of a prediction: score, risk and insights
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub breakdown: ScoreBreakdown,
    pub risk_level: RiskLevel,
    pub insights: Vec<String>,
}

impl Assessment {
    pub fn probability(&self) -> u8 {
        self.breakdown.probability
    }
}

/// Heuristic scorer for startup profiles
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Compute every contribution term and the final probability.
    ///
    /// Total over its input type: no range checks are made here, out-of-range
    /// ratings simply push the score towards a clamp bound.
    pub fn breakdown(profile: &StartupProfile) -> ScoreBreakdown {
        let funding = funding_contribution(profile.funding);
        let experience = experience_contribution(profile.experience);
        let team = team_contribution(profile.team_size);
        let market = (f64::from(profile.market_size) - NEUTRAL_RATING) * MARKET_WEIGHT;
        let competition = (NEUTRAL_RATING - f64::from(profile.competition)) * COMPETITION_WEIGHT;

        let subtotal = BASE_SCORE + funding + experience + team + market + competition;
        let industry_multiplier = profile.industry.multiplier();
        let raw_score = subtotal * industry_multiplier;
        let clamped_score = raw_score.clamp(0.0, 100.0);
        // Clamped values are non-negative, so this rounds half up
        let probability = clamped_score.round() as u8;

        ScoreBreakdown {
            base: BASE_SCORE,
            funding,
            experience,
            team,
            market,
            competition,
            subtotal,
            industry_multiplier,
            raw_score,
            clamped_score,
            probability,
        }
    }

    /// Score a profile: probability, risk level and insights.
    pub fn assess(profile: &StartupProfile) -> Assessment {
        let breakdown = Self::breakdown(profile);
        let risk_level = RiskLevel::from_probability(breakdown.probability);
        let insights = generate_insights(profile, breakdown.probability);

        debug!(
            industry = profile.industry.as_str(),
            raw_score = breakdown.raw_score,
            probability = breakdown.probability,
            risk = risk_level.as_str(),
            "scored startup profile"
        );

        Assessment {
            breakdown,
            risk_level,
            insights,
        }
    }

    /// Full prediction: assessment plus a forecast drawn from `factors`.
    pub fn score(profile: &StartupProfile, factors: &mut dyn FactorSource) -> PredictionResult {
        let assessment = Self::assess(profile);
        let forecast = ForecastGenerator::generate(profile, assessment.probability(), factors);

        PredictionResult {
            probability: assessment.probability(),
            risk_level: assessment.risk_level,
            insights: assessment.insights,
            forecast,
        }
    }
}

/// Funding adds one point per million, capped at +20
fn funding_contribution(funding: u64) -> f64 {
    (funding as f64 / FUNDING_UNIT).min(FUNDING_CAP)
}

/// Experience adds two points per year, capped at +15
fn experience_contribution(years: u32) -> f64 {
    (f64::from(years) * EXPERIENCE_WEIGHT).min(EXPERIENCE_CAP)
}

/// Teams of 5-15 are rewarded; larger teams lose a little, smaller lose more
fn team_contribution(team_size: u32) -> f64 {
    match team_size {
        5..=15 => 10.0,
        n if n > 15 => -5.0,
        _ => -10.0,
    }
}
