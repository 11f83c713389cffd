//! Startup Predictor - Heuristic startup success scoring
//!
//! Scores a startup profile with a fixed-weight heuristic and produces a
//! synthetic twelve-month forecast for charting:
//! profile validation → contribution scoring → insights → forecast → encoding.
//!
//! ## Modules
//!
//! - **Scoring**: [`scorer::HeuristicScorer`] and [`insights`]
//! - **Forecasting**: [`forecast::ForecastGenerator`] with injectable randomness
//! - **Output**: [`encoder::PredictionEncoder`] envelopes and [`layout::BarLayout`]

pub mod config;
pub mod encoder;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod layout;
pub mod pipeline;
pub mod scorer;
pub mod types;
pub mod validation;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use config::PredictorConfig;
pub use error::PredictError;
pub use forecast::{FactorSource, FixedFactors, ForecastGenerator, RandomFactors};
pub use pipeline::{predict, predict_json, Predictor};
pub use scorer::HeuristicScorer;
pub use types::{ForecastSeries, Industry, PredictionResult, RiskLevel, StartupProfile};

/// Crate version embedded in all prediction envelopes
pub const PREDICTOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for prediction envelopes
pub const PRODUCER_NAME: &str = "startup-predictor";
