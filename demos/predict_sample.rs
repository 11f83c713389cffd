//! Score a sample profile and print the envelope with its 3D bar layout

use startup_predictor::config::PredictorConfig;
use startup_predictor::layout::{BarLayout, SeriesKind};
use startup_predictor::Predictor;

fn main() {
    let json = r#"{
        "industry": "tech",
        "funding": 500000,
        "experience": 5,
        "teamSize": 10,
        "marketSize": 7,
        "competition": 3
    }"#;

    let profile = match serde_json::from_str(json) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    let mut predictor = Predictor::with_config(PredictorConfig::default().with_breakdown(true));
    match predictor.predict_envelope(&profile) {
        Ok(envelope) => {
            let layout = BarLayout::from_forecast(&envelope.result.forecast);
            match serde_json::to_string_pretty(&envelope) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("Error: {e}"),
            }
            println!(
                "bars: {} revenue, {} profit, {} loss",
                layout.series(SeriesKind::Revenue).count(),
                layout.series(SeriesKind::Profit).count(),
                layout.series(SeriesKind::Loss).count()
            );
        }
        Err(e) => eprintln!("Error: {e:?}"),
    }
}
