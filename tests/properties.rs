use proptest::prelude::*;
use startup_predictor::forecast::{ForecastGenerator, RandomFactors, FACTOR_MAX, FACTOR_MIN};
use startup_predictor::insights::INSIGHT_COUNT;
use startup_predictor::{HeuristicScorer, Industry, RiskLevel, StartupProfile};

fn industry() -> impl Strategy<Value = Industry> {
    prop::sample::select(Industry::ALL.to_vec())
}

prop_compose! {
    fn valid_profile()(
        industry in industry(),
        funding in 0u64..100_000_000,
        experience in 0u32..60,
        team_size in 0u32..500,
        market_size in 1u8..=10,
        competition in 1u8..=10,
    ) -> StartupProfile {
        StartupProfile { industry, funding, experience, team_size, market_size, competition }
    }
}

prop_compose! {
    fn any_profile()(
        industry in industry(),
        funding in any::<u64>(),
        experience in any::<u32>(),
        team_size in any::<u32>(),
        market_size in any::<u8>(),
        competition in any::<u8>(),
    ) -> StartupProfile {
        StartupProfile { industry, funding, experience, team_size, market_size, competition }
    }
}

// ── Score bounds and risk consistency ─────────────────────────────────────

proptest! {
    #[test]
    fn probability_is_always_within_bounds(profile in any_profile()) {
        let assessment = HeuristicScorer::assess(&profile);
        prop_assert!(assessment.probability() <= 100);
    }

    #[test]
    fn risk_level_matches_probability(profile in any_profile()) {
        let assessment = HeuristicScorer::assess(&profile);
        let p = assessment.probability();
        let expected = if p >= 70 {
            RiskLevel::Low
        } else if p >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        prop_assert_eq!(assessment.risk_level, expected);
    }

    #[test]
    fn always_six_insights(profile in any_profile()) {
        prop_assert_eq!(HeuristicScorer::assess(&profile).insights.len(), INSIGHT_COUNT);
    }

    #[test]
    fn assessment_is_deterministic(profile in valid_profile()) {
        prop_assert_eq!(HeuristicScorer::assess(&profile), HeuristicScorer::assess(&profile));
    }

    #[test]
    fn small_teams_always_lose_ten(mut profile in valid_profile(), team_size in 0u32..5) {
        profile.team_size = team_size;
        prop_assert_eq!(HeuristicScorer::breakdown(&profile).team, -10.0);
    }
}

// ── Funding monotonicity ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn funding_term_never_decreases(
        profile in valid_profile(),
        low in 0u64..=20_000_000,
        extra in 0u64..=20_000_000,
    ) {
        let high = (low + extra).min(20_000_000);
        let mut a = profile.clone();
        let mut b = profile;
        a.funding = low;
        b.funding = high;

        let fa = HeuristicScorer::breakdown(&a).funding;
        let fb = HeuristicScorer::breakdown(&b).funding;
        prop_assert!(fb >= fa);
        prop_assert!(fb <= 20.0);
    }
}

// ── Forecast shape ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn forecast_has_twelve_exclusive_entries(
        profile in valid_profile(),
        probability in 0u8..=100,
        seed in any::<u64>(),
    ) {
        let series = ForecastGenerator::generate(&profile, probability, &mut RandomFactors::seeded(seed));

        prop_assert_eq!(series.months.len(), 12);
        prop_assert_eq!(series.revenue.len(), 12);
        prop_assert_eq!(series.profit.len(), 12);
        prop_assert_eq!(series.loss.len(), 12);
        for i in 0..12 {
            prop_assert!(series.profit[i] == 0 || series.loss[i] == 0);
        }
    }

    #[test]
    fn forecast_is_reproducible_per_seed(
        profile in valid_profile(),
        probability in 0u8..=100,
        seed in any::<u64>(),
    ) {
        let a = ForecastGenerator::generate(&profile, probability, &mut RandomFactors::seeded(seed));
        let b = ForecastGenerator::generate(&profile, probability, &mut RandomFactors::seeded(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn first_month_revenue_within_factor_bounds(
        funding in 1_000_000u64..50_000_000,
        probability in 1u8..=100,
        seed in any::<u64>(),
    ) {
        let profile = StartupProfile {
            industry: Industry::Tech,
            funding,
            experience: 5,
            team_size: 10,
            market_size: 5,
            competition: 5,
        };
        let series = ForecastGenerator::generate(&profile, probability, &mut RandomFactors::seeded(seed));

        let p = f64::from(probability);
        let start = funding as f64 * 0.1 * (p / 100.0) * (1.0 + p / 500.0);
        let first = series.revenue[0] as f64;
        prop_assert!(first >= (start * FACTOR_MIN).floor());
        prop_assert!(first <= (start * FACTOR_MAX).ceil());
    }
}
