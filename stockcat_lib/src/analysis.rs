//! Summary helpers over a revenue series.
//!
//! All functions operate on slices of [`RevenuePoint`] (usually an already
//! windowed series) and do not perform network calls.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::series::RevenuePoint;

/// Groups points by calendar year (`YYYY`), sorted chronologically.
pub fn points_by_year(points: &[RevenuePoint]) -> BTreeMap<String, Vec<&RevenuePoint>> {
    let mut map: BTreeMap<String, Vec<&RevenuePoint>> = BTreeMap::new();
    for point in points {
        map.entry(year_of(point).to_string()).or_default().push(point);
    }
    map
}

/// Sums revenue per calendar year.
pub fn yearly_totals(points: &[RevenuePoint]) -> BTreeMap<String, i64> {
    let mut map: BTreeMap<String, i64> = BTreeMap::new();
    for point in points {
        *map.entry(year_of(point).to_string()).or_default() += point.revenue;
    }
    map
}

/// The most recent point of a sorted series.
pub fn latest_point(points: &[RevenuePoint]) -> Option<&RevenuePoint> {
    points.last()
}

/// The month with the highest revenue. Ties go to the most recent month.
pub fn peak_revenue(points: &[RevenuePoint]) -> Option<&RevenuePoint> {
    points.iter().max_by_key(|p| p.revenue)
}

/// Mean YoY growth rate across the points, `None` for an empty slice.
pub fn average_growth(points: &[RevenuePoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let sum: f64 = points.iter().map(|p| p.yoy_growth_rate).sum();
    Some(sum / points.len() as f64)
}

fn year_of(point: &RevenuePoint) -> &str {
    point.period.split('/').next().unwrap_or(&point.period)
}

/// Headline figures for a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub months: usize,
    pub first_period: Option<String>,
    pub last_period: Option<String>,
    pub total_revenue: i64,
    pub latest: Option<RevenuePoint>,
    pub peak: Option<RevenuePoint>,
    pub average_growth: Option<f64>,
}

impl SeriesSummary {
    pub fn from_points(points: &[RevenuePoint]) -> Self {
        Self {
            months: points.len(),
            first_period: points.first().map(|p| p.period.clone()),
            last_period: points.last().map(|p| p.period.clone()),
            total_revenue: points.iter().map(|p| p.revenue).sum(),
            latest: latest_point(points).cloned(),
            peak: peak_revenue(points).cloned(),
            average_growth: average_growth(points),
        }
    }
}
