//! 3D bar-chart layout
//!
//! Computes the bars a 3D chart draws for a forecast, without rendering
//! anything. Each month gets up to three bars placed along the x axis, with
//! profit behind and loss in front of revenue. Heights are normalized so the
//! largest value across all three series is `MAX_HEIGHT` tall.

use serde::{Deserialize, Serialize};

use crate::types::ForecastSeries;

pub const BAR_WIDTH: f64 = 0.6;
pub const BAR_GAP: f64 = 0.2;
/// Height of the tallest bar
pub const MAX_HEIGHT: f64 = 10.0;
/// Depth offset between series rows
const ROW_OFFSET: f64 = BAR_WIDTH + 0.1;

/// Which forecast series a bar belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Revenue,
    Profit,
    Loss,
}

impl SeriesKind {
    /// Display colour (hex)
    pub fn color(&self) -> &'static str {
        match self {
            SeriesKind::Revenue => "#4361ee",
            SeriesKind::Profit => "#4cc9f0",
            SeriesKind::Loss => "#f72585",
        }
    }

    /// Row position along z
    fn depth(&self) -> f64 {
        match self {
            SeriesKind::Revenue => 0.0,
            SeriesKind::Profit => -ROW_OFFSET,
            SeriesKind::Loss => ROW_OFFSET,
        }
    }
}

/// One bar, centred on `(x, height / 2, z)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub series: SeriesKind,
    pub month: String,
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Full set of bars for a forecast
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub bars: Vec<Bar>,
    /// Largest raw value, used for normalization
    pub max_value: u64,
}

impl BarLayout {
    /// Lay out the bars for `forecast`. Zero entries produce no bar.
    pub fn from_forecast(forecast: &ForecastSeries) -> Self {
        let max_value = forecast.max_value();
        if max_value == 0 {
            return Self::default();
        }

        let step = BAR_WIDTH + BAR_GAP;
        let span = forecast.len() as f64 * step;
        let mut bars = Vec::new();

        for (i, month) in forecast.months.iter().enumerate() {
            let x = i as f64 * step - span / 2.0;
            let entries = [
                (SeriesKind::Revenue, forecast.revenue.get(i)),
                (SeriesKind::Profit, forecast.profit.get(i)),
                (SeriesKind::Loss, forecast.loss.get(i)),
            ];

            for (series, value) in entries {
                let value = match value {
                    Some(&v) if v > 0 => v,
                    _ => continue,
                };
                bars.push(Bar {
                    series,
                    month: month.clone(),
                    x,
                    z: series.depth(),
                    width: BAR_WIDTH,
                    height: value as f64 / max_value as f64 * MAX_HEIGHT,
                    color: series.color().to_string(),
                });
            }
        }

        Self { bars, max_value }
    }

    /// Bars of a single series, in month order
    pub fn series(&self, kind: SeriesKind) -> impl Iterator<Item = &Bar> {
        self.bars.iter().filter(move |b| b.series == kind)
    }
}
