//! Quantile Bucketer — salary five-number summaries per experience band.

use serde::{Deserialize, Serialize};

use crate::models::employee::AnalyzedEmployee;

/// One box on the salary-vs-experience chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotData {
    pub name: String,
    /// [min, q1, median, q3, max]
    #[serde(rename = "boxPlot")]
    pub box_plot: [f64; 5],
}

/// Experience bands in display order. Bounds are inclusive; the last band is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBand {
    Entry,
    Early,
    Mid,
    Senior,
}

impl ExperienceBand {
    pub const ALL: [ExperienceBand; 4] = [
        ExperienceBand::Entry,
        ExperienceBand::Early,
        ExperienceBand::Mid,
        ExperienceBand::Senior,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceBand::Entry => "0-2 Yrs",
            ExperienceBand::Early => "3-5 Yrs",
            ExperienceBand::Mid => "6-8 Yrs",
            ExperienceBand::Senior => "9+ Yrs",
        }
    }

    /// Fractional years fall into the band whose upper bound they do not exceed.
    pub fn for_years(years: f64) -> Self {
        if years <= 2.0 {
            ExperienceBand::Entry
        } else if years <= 5.0 {
            ExperienceBand::Early
        } else if years <= 8.0 {
            ExperienceBand::Mid
        } else {
            ExperienceBand::Senior
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Groups current salaries by experience band and summarises every band that
/// has at least two samples. Output follows band order.
pub fn experience_box_plots(employees: &[AnalyzedEmployee]) -> Vec<BoxPlotData> {
    let mut bands: [Vec<f64>; 4] = Default::default();
    for analyzed in employees {
        let band = ExperienceBand::for_years(analyzed.employee.experience_years);
        bands[band.index()].push(analyzed.employee.current_salary);
    }

    ExperienceBand::ALL
        .into_iter()
        .zip(bands)
        .filter_map(|(band, salaries)| {
            five_number_summary(salaries).map(|box_plot| BoxPlotData {
                name: band.label().to_string(),
                box_plot,
            })
        })
        .collect()
}

/// Order-statistic summary without interpolation: q1, median and q3 are the
/// sorted elements at ⌊n/4⌋, ⌊n/2⌋ and ⌊3n/4⌋. `None` below two samples.
pub fn five_number_summary(mut samples: Vec<f64>) -> Option<[f64; 5]> {
    let n = samples.len();
    if n < 2 {
        return None;
    }
    samples.sort_by(f64::total_cmp);
    Some([
        samples[0],
        samples[n / 4],
        samples[n / 2],
        samples[(3 * n) / 4],
        samples[n - 1],
    ])
}
