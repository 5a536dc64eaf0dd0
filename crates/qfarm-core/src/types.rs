//! Core types for QFarm
//!
//! Defines the values a render pass hands to the presentation layer:
//! - Yield series points and summary statistics
//! - Annotation events, configured and placed
//! - Survey collections and the sentiment index

use serde::{Deserialize, Serialize};

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldPoint {
    /// Projection year
    pub year: i32,
    /// Yield index for that year
    pub value: f64,
}

/// Synthetic yield index, one point per year of the range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YieldSeries {
    points: Vec<YieldPoint>,
}

impl YieldSeries {
    /// Build from ordered points
    #[inline]
    #[must_use]
    pub fn from_points(points: Vec<YieldPoint>) -> Self {
        Self { points }
    }

    /// Ordered points
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[YieldPoint] {
        &self.points
    }

    /// Years only
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.year)
    }

    /// Values only
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Number of points
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value for a given year
    #[must_use]
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points.iter().find(|p| p.year == year).map(|p| p.value)
    }

    /// Summary statistics, `None` for an empty series
    #[must_use]
    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = self.points.first()?.value;
        let last = self.points.last()?.value;

        let (min, max, sum) = self.values().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), v| (min.min(v), max.max(v), sum + v),
        );

        #[allow(clippy::cast_precision_loss)]
        let mean = sum / self.points.len() as f64;

        Some(SeriesSummary {
            min,
            max,
            mean,
            first,
            last,
        })
    }
}

/// Summary statistics for metric widgets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Value in the first year
    pub first: f64,
    /// Value in the last year
    pub last: f64,
}

/// Configured chart marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationEvent {
    /// Year the marker points at
    pub year: i32,
    /// Display text
    pub label: String,
}

impl AnnotationEvent {
    /// Create an annotation event
    #[inline]
    pub fn new(year: i32, label: impl Into<String>) -> Self {
        Self {
            year,
            label: label.into(),
        }
    }

    /// The two markers shown on the sample dashboard
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(2030, "Policy Overhaul"),
            Self::new(2040, "Global Market Shock"),
        ]
    }
}

/// Annotation resolved against the trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedAnnotation {
    /// Marker year
    pub year: i32,
    /// Display text
    pub label: String,
    /// Noise-free trend value at `year`
    pub y: f64,
}

/// Ordered free-text survey statements
///
/// Statement text is carried through untouched; nothing reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyCollection {
    items: Vec<String>,
}

impl SurveyCollection {
    /// Build from statements
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Sample farmer statements from the dashboard
    #[must_use]
    pub fn sample() -> Self {
        Self::new([
            "Subsidy cuts are hurting our production.",
            "Dairy yields are steady, but weather remains unpredictable.",
            "We need more support for sustainable practices.",
            "Market conditions are volatile.",
        ])
    }

    /// Statements in order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of statements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SurveyCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Aggregate farmer sentiment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentIndex {
    /// Mean of the per-item scores
    pub value: f64,
    /// Number of statements scored
    pub sample_size: usize,
}

impl std::fmt::Display for SentimentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> YieldSeries {
        YieldSeries::from_points(
            values
                .iter()
                .zip(2020..)
                .map(|(&value, year)| YieldPoint { year, value })
                .collect(),
        )
    }

    #[test]
    fn summary_of_empty_series() {
        assert!(YieldSeries::default().summary().is_none());
    }

    #[test]
    fn summary_statistics() {
        let s = series(&[2.0, 3.0, 1.0, 2.0]).summary().unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.first, 2.0);
        assert_eq!(s.last, 2.0);
    }

    #[test]
    fn value_lookup_by_year() {
        let s = series(&[2.0, 2.05]);
        assert_eq!(s.value_at(2021), Some(2.05));
        assert_eq!(s.value_at(2022), None);
    }

    #[test]
    fn sample_surveys() {
        let surveys = SurveyCollection::sample();
        assert_eq!(surveys.len(), 4);
        assert_eq!(surveys.items()[3], "Market conditions are volatile.");
    }

    #[test]
    fn sentiment_displays_two_decimals() {
        let index = SentimentIndex {
            value: 1.0049,
            sample_size: 4,
        };
        assert_eq!(index.to_string(), "1.00");
    }

    #[test]
    fn series_serializes_as_point_list() {
        let json = serde_json::to_string(&series(&[2.0])).unwrap();
        assert_eq!(json, r#"[{"year":2020,"value":2.0}]"#);
    }
}
