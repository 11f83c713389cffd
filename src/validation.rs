//! Profile validation
//!
//! The scorer accepts any profile its types can represent. Callers that take
//! profiles from untrusted input run them through this module first.

use thiserror::Error;

use crate::types::StartupProfile;

/// Lowest accepted market size / competition rating
pub const RATING_MIN: u8 = 1;
/// Highest accepted market size / competition rating
pub const RATING_MAX: u8 = 10;

/// Validation errors for a startup profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("marketSize must be between {min} and {max}, got {actual}")]
    MarketSizeOutOfRange { min: u8, max: u8, actual: u8 },

    #[error("competition must be between {min} and {max}, got {actual}")]
    CompetitionOutOfRange { min: u8, max: u8, actual: u8 },
}

impl StartupProfile {
    /// Validate the subjective ratings of this profile
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(RATING_MIN..=RATING_MAX).contains(&self.market_size) {
            return Err(ValidationError::MarketSizeOutOfRange {
                min: RATING_MIN,
                max: RATING_MAX,
                actual: self.market_size,
            });
        }

        if !(RATING_MIN..=RATING_MAX).contains(&self.competition) {
            return Err(ValidationError::CompetitionOutOfRange {
                min: RATING_MIN,
                max: RATING_MAX,
                actual: self.competition,
            });
        }

        Ok(())
    }
}

/// Failed validation of one profile in a batch
#[derive(Debug)]
pub struct ValidationResult {
    pub index: usize,
    pub error: ValidationError,
}

/// Validate a batch, returning only the failures
pub fn validate_profiles(profiles: &[StartupProfile]) -> Vec<ValidationResult> {
    profiles
        .iter()
        .enumerate()
        .filter_map(|(index, profile)| {
            profile
                .validate()
                .err()
                .map(|error| ValidationResult { index, error })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Industry;

    fn profile(market_size: u8, competition: u8) -> StartupProfile {
        StartupProfile {
            industry: Industry::Tech,
            funding: 250_000,
            experience: 4,
            team_size: 6,
            market_size,
            competition,
        }
    }

    #[test]
    fn test_valid_bounds() {
        assert!(profile(1, 1).validate().is_ok());
        assert!(profile(10, 10).validate().is_ok());
    }

    #[test]
    fn test_market_size_out_of_range() {
        let err = profile(0, 5).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MarketSizeOutOfRange {
                min: 1,
                max: 10,
                actual: 0
            }
        );
        assert!(err.to_string().contains("marketSize"));
    }

    #[test]
    fn test_competition_out_of_range() {
        let err = profile(5, 11).validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::CompetitionOutOfRange { actual: 11, .. }
        ));
    }

    #[test]
    fn test_validate_profiles_reports_indices() {
        let profiles = vec![profile(5, 5), profile(0, 5), profile(5, 5), profile(5, 12)];
        let failures = validate_profiles(&profiles);

        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].index, 1);
        assert_eq!(failures[1].index, 3);
    }
}
