//! Insight generation
//!
//! One canned message per input factor, chosen from the raw input value
//! (not its score contribution), followed by one overall message chosen by
//! the final probability.

use crate::types::{RiskLevel, StartupProfile};

/// Number of insights produced for every profile
pub const INSIGHT_COUNT: usize = 6;

const FUNDING_LOW: &str = "Consider seeking additional funding to support growth initiatives.";
const FUNDING_HIGH: &str = "Strong funding position provides runway for strategic experiments.";
const FUNDING_MID: &str = "Adequate funding level for initial operations and market testing.";

const EXPERIENCE_LOW: &str =
    "Founder experience is limited; consider adding advisors with industry expertise.";
const EXPERIENCE_HIGH: &str =
    "Strong founder experience increases credibility with investors and customers.";
const EXPERIENCE_MID: &str = "Founder experience is adequate for navigating early-stage challenges.";

const TEAM_SMALL: &str = "Small team may struggle with workload; consider strategic hiring.";
const TEAM_LARGE: &str = "Large team requires strong management to maintain efficiency.";
const TEAM_OPTIMAL: &str = "Team size is optimal for agility and capability balance.";

const MARKET_LARGE: &str = "Large target market provides significant growth potential.";
const MARKET_NICHE: &str =
    "Niche market requires precise targeting and efficient customer acquisition.";
const MARKET_MODERATE: &str = "Moderate market size offers balanced opportunity and competition.";

const COMPETITION_HIGH: &str =
    "High competition requires strong differentiation and value proposition.";
const COMPETITION_LOW: &str =
    "Low competition suggests potential market opportunity or validation needed.";
const COMPETITION_MODERATE: &str = "Moderate competition indicates healthy market with proven demand.";

const OVERALL_STRONG: &str = "Strong indicators for success; focus on execution and scaling.";
const OVERALL_PROMISING: &str =
    "Promising venture with areas for improvement; iterate based on market feedback.";
const OVERALL_CHALLENGED: &str =
    "Significant challenges identified; consider pivoting strategy or strengthening team.";

/// Build the six insights for a profile scored at `probability`
pub fn generate_insights(profile: &StartupProfile, probability: u8) -> Vec<String> {
    [
        funding_insight(profile.funding),
        experience_insight(profile.experience),
        team_insight(profile.team_size),
        market_insight(profile.market_size),
        competition_insight(profile.competition),
        overall_insight(probability),
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn funding_insight(funding: u64) -> &'static str {
    if funding < 100_000 {
        FUNDING_LOW
    } else if funding > 1_000_000 {
        FUNDING_HIGH
    } else {
        FUNDING_MID
    }
}

fn experience_insight(years: u32) -> &'static str {
    if years < 3 {
        EXPERIENCE_LOW
    } else if years > 10 {
        EXPERIENCE_HIGH
    } else {
        EXPERIENCE_MID
    }
}

// Note the large-team threshold (20) differs from the scoring threshold (15)
fn team_insight(team_size: u32) -> &'static str {
    if team_size < 5 {
        TEAM_SMALL
    } else if team_size > 20 {
        TEAM_LARGE
    } else {
        TEAM_OPTIMAL
    }
}

fn market_insight(market_size: u8) -> &'static str {
    if market_size >= 8 {
        MARKET_LARGE
    } else if market_size <= 3 {
        MARKET_NICHE
    } else {
        MARKET_MODERATE
    }
}

fn competition_insight(competition: u8) -> &'static str {
    if competition >= 8 {
        COMPETITION_HIGH
    } else if competition <= 3 {
        COMPETITION_LOW
    } else {
        COMPETITION_MODERATE
    }
}

fn overall_insight(probability: u8) -> &'static str {
    match RiskLevel::from_probability(probability) {
        RiskLevel::Low => OVERALL_STRONG,
        RiskLevel::Medium => OVERALL_PROMISING,
        RiskLevel::High => OVERALL_CHALLENGED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Industry;
    use pretty_assertions::assert_eq;

    fn profile(funding: u64, experience: u32, team_size: u32, market: u8, comp: u8) -> StartupProfile {
        StartupProfile {
            industry: Industry::Tech,
            funding,
            experience,
            team_size,
            market_size: market,
            competition: comp,
        }
    }

    #[test]
    fn test_reference_profile_insights() {
        let insights = generate_insights(&profile(500_000, 5, 10, 7, 3), 89);
        assert_eq!(
            insights,
            vec![
                FUNDING_MID.to_string(),
                EXPERIENCE_MID.to_string(),
                TEAM_OPTIMAL.to_string(),
                MARKET_MODERATE.to_string(),
                COMPETITION_LOW.to_string(),
                OVERALL_STRONG.to_string(),
            ]
        );
    }

    #[test]
    fn test_always_six_insights() {
        for probability in [0u8, 39, 40, 69, 70, 100] {
            let insights = generate_insights(&profile(0, 0, 0, 1, 10), probability);
            assert_eq!(insights.len(), INSIGHT_COUNT);
        }
    }

    #[test]
    fn test_funding_boundaries() {
        assert_eq!(funding_insight(99_999), FUNDING_LOW);
        assert_eq!(funding_insight(100_000), FUNDING_MID);
        assert_eq!(funding_insight(1_000_000), FUNDING_MID);
        assert_eq!(funding_insight(1_000_001), FUNDING_HIGH);
    }

    #[test]
    fn test_experience_boundaries() {
        assert_eq!(experience_insight(2), EXPERIENCE_LOW);
        assert_eq!(experience_insight(3), EXPERIENCE_MID);
        assert_eq!(experience_insight(10), EXPERIENCE_MID);
        assert_eq!(experience_insight(11), EXPERIENCE_HIGH);
    }

    #[test]
    fn test_team_uses_raw_size_not_contribution() {
        // 18 people lose score points but still read as an optimal team
        assert_eq!(team_insight(18), TEAM_OPTIMAL);
        assert_eq!(team_insight(20), TEAM_OPTIMAL);
        assert_eq!(team_insight(21), TEAM_LARGE);
        assert_eq!(team_insight(4), TEAM_SMALL);
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(market_insight(8), MARKET_LARGE);
        assert_eq!(market_insight(4), MARKET_MODERATE);
        assert_eq!(market_insight(3), MARKET_NICHE);
        assert_eq!(competition_insight(8), COMPETITION_HIGH);
        assert_eq!(competition_insight(7), COMPETITION_MODERATE);
        assert_eq!(competition_insight(3), COMPETITION_LOW);
    }

    #[test]
    fn test_overall_follows_risk_thresholds() {
        assert_eq!(overall_insight(70), OVERALL_STRONG);
        assert_eq!(overall_insight(69), OVERALL_PROMISING);
        assert_eq!(overall_insight(40), OVERALL_PROMISING);
        assert_eq!(overall_insight(39), OVERALL_CHALLENGED);
    }
}
