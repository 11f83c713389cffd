//! Forecast generation
//!
//! Builds a synthetic twelve-month revenue/profit/loss projection from the
//! funding and the final probability. Monthly growth is perturbed by a random
//! factor in [0.8, 1.2]; the source of that factor is injected so callers can
//! choose between true randomness, a seeded generator, or a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{ForecastSeries, StartupProfile};

/// Calendar labels for the forecast months
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Lowest random growth factor
pub const FACTOR_MIN: f64 = 0.8;
/// Highest random growth factor
pub const FACTOR_MAX: f64 = 1.2;

/// Share of funding used as the starting monthly revenue at 100% probability
const BASE_REVENUE_RATIO: f64 = 0.1;
/// Probability divisor for the monthly growth rate (100% → 1.2x)
const GROWTH_DIVISOR: f64 = 500.0;
/// Funding is spent evenly over this many months
const EXPENSE_MONTHS: f64 = 24.0;

/// Supplier of per-month growth factors
pub trait FactorSource {
    /// Next multiplicative factor, nominally within [0.8, 1.2]
    fn next_factor(&mut self) -> f64;
}

/// Uniform factors drawn from a `rand` generator
pub struct RandomFactors<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomFactors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomFactors<StdRng> {
    /// Unseeded generator; every forecast differs
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FactorSource for RandomFactors<R> {
    fn next_factor(&mut self) -> f64 {
        self.rng.gen_range(FACTOR_MIN..FACTOR_MAX)
    }
}

/// Fixed, cycling sequence of factors
#[derive(Debug, Clone)]
pub struct FixedFactors {
    factors: Vec<f64>,
    next: usize,
}

impl FixedFactors {
    /// Cycle through `factors`; an empty list yields 1.0
    pub fn new(factors: Vec<f64>) -> Self {
        Self { factors, next: 0 }
    }

    /// Always yield `factor`
    pub fn constant(factor: f64) -> Self {
        Self::new(vec![factor])
    }
}

impl FactorSource for FixedFactors {
    fn next_factor(&mut self) -> f64 {
        if self.factors.is_empty() {
            return 1.0;
        }
        let factor = self.factors[self.next % self.factors.len()];
        self.next = (self.next + 1) % self.factors.len();
        factor
    }
}

/// Forecast generator
pub struct ForecastGenerator;

impl ForecastGenerator {
    /// Generate the twelve-month series for a profile scored at `probability`.
    pub fn generate(
        profile: &StartupProfile,
        probability: u8,
        factors: &mut dyn FactorSource,
    ) -> ForecastSeries {
        let funding = profile.funding as f64;
        let probability = f64::from(probability);

        let base_revenue = funding * BASE_REVENUE_RATIO * (probability / 100.0);
        let base_growth = 1.0 + probability / GROWTH_DIVISOR;
        let expenses = funding / EXPENSE_MONTHS;

        let mut revenue = Vec::with_capacity(MONTHS.len());
        let mut profit = Vec::with_capacity(MONTHS.len());
        let mut loss = Vec::with_capacity(MONTHS.len());

        let mut current_revenue = base_revenue;
        for _ in MONTHS {
            current_revenue = current_revenue * base_growth * factors.next_factor();
            revenue.push(round_amount(current_revenue));

            let net = current_revenue - expenses;
            if net > 0.0 {
                profit.push(round_amount(net));
                loss.push(0);
            } else {
                profit.push(0);
                loss.push(round_amount(net.abs()));
            }
        }

        ForecastSeries {
            months: MONTHS.iter().map(|m| m.to_string()).collect(),
            revenue,
            profit,
            loss,
        }
    }
}

/// Round a non-negative amount to whole currency units
fn round_amount(value: f64) -> u64 {
    value.max(0.0).round() as u64
}
