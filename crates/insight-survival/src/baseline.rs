//! Stage-specific baseline survival curves.
//!
//! Percent surviving at diagnosis, 1, 3, 5 and 10 years, per cancer type
//! and stage group.

use serde::Serialize;

use insight_core::models::{CancerStage, CancerType, ComorbidityProfile, TimePoint};
use insight_core::traits::ISurvivalAdjuster;

type Curve = [u32; 5];

const BREAST: [Curve; 4] = [
    [100, 99, 98, 98, 95],
    [100, 97, 92, 90, 82],
    [100, 90, 75, 72, 55],
    [100, 65, 40, 28, 15],
];

const COLORECTAL: [Curve; 4] = [
    [100, 98, 94, 91, 85],
    [100, 94, 85, 82, 70],
    [100, 88, 72, 65, 50],
    [100, 50, 22, 14, 8],
];

const LUNG: [Curve; 4] = [
    [100, 88, 72, 63, 45],
    [100, 75, 52, 45, 30],
    [100, 55, 28, 18, 10],
    [100, 30, 10, 6, 3],
];

const PROSTATE: [Curve; 4] = [
    [100, 100, 99, 99, 98],
    [100, 99, 99, 98, 95],
    [100, 98, 95, 92, 80],
    [100, 75, 50, 32, 18],
];

fn curves(cancer: CancerType) -> &'static [Curve; 4] {
    match cancer {
        CancerType::Breast => &BREAST,
        CancerType::Colorectal => &COLORECTAL,
        CancerType::Lung => &LUNG,
        CancerType::Prostate => &PROSTATE,
    }
}

/// Baseline survival curve for a cancer type and stage.
pub fn curve(cancer: CancerType, stage: CancerStage) -> Curve {
    curves(cancer)[stage.index()]
}

/// Baseline survival at one point on the curve.
pub fn baseline(cancer: CancerType, stage: CancerStage, time_point: TimePoint) -> u32 {
    curve(cancer, stage)[time_point.index()]
}

/// Curve adjusted for comorbidities. The diagnosis point stays at its
/// baseline; an empty profile returns the baseline unchanged. No point
/// rises above its baseline, including baselines under the floor.
pub fn adjusted_curve<A: ISurvivalAdjuster + ?Sized>(
    adjuster: &A,
    cancer: CancerType,
    stage: CancerStage,
    profile: &ComorbidityProfile,
) -> Curve {
    let mut points = curve(cancer, stage);
    if profile.is_empty() {
        return points;
    }
    for point in points.iter_mut().skip(1) {
        let adjusted = adjuster.adjust_profile(f64::from(*point), profile);
        *point = (*point).min(adjusted);
    }
    points
}

/// One line on the survival chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u32>,
}

/// Data for the survival chart: one dataset per stage over shared labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalChart {
    pub cancer: CancerType,
    pub labels: Vec<&'static str>,
    pub datasets: Vec<ChartDataset>,
}

fn chart_with(cancer: CancerType, mut points: impl FnMut(CancerStage) -> Curve) -> SurvivalChart {
    SurvivalChart {
        cancer,
        labels: TimePoint::ALL.iter().map(|t| t.label()).collect(),
        datasets: CancerStage::ALL
            .into_iter()
            .map(|stage| ChartDataset {
                label: stage.label(),
                data: points(stage).to_vec(),
            })
            .collect(),
    }
}

/// Baseline chart data for a cancer type.
pub fn chart_series(cancer: CancerType) -> SurvivalChart {
    chart_with(cancer, |stage| curve(cancer, stage))
}

/// Baseline chart data by cancer code. `None` for unrecognised codes, in
/// which case the caller keeps whatever chart it is showing.
pub fn chart_series_for_code(code: &str) -> Option<SurvivalChart> {
    CancerType::from_code(code).map(chart_series)
}

/// Chart data with every post-diagnosis point adjusted for comorbidities.
pub fn adjusted_chart_series<A: ISurvivalAdjuster + ?Sized>(
    adjuster: &A,
    cancer: CancerType,
    profile: &ComorbidityProfile,
) -> SurvivalChart {
    chart_with(cancer, |stage| adjusted_curve(adjuster, cancer, stage, profile))
}
