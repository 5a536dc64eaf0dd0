//! Dashboard configuration
//!
//! Every constant the sample dashboard hard-codes lives here with a default
//! matching the sample, and can be overridden per call or from a TOML file.

use crate::error::{QFarmError, Result};
use crate::random::{check_interval, check_normal};
use crate::range::YearRange;
use crate::types::{AnnotationEvent, SurveyCollection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Linear trend underlying the yield projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Projected years
    pub range: YearRange,
    /// Trend value in the first year
    pub baseline: f64,
    /// Trend increase per year
    pub slope: f64,
}

impl TrendConfig {
    /// Noise-free trend value for `year`
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn trend(&self, year: i32) -> f64 {
        self.baseline + self.slope * self.range.offset_of(year) as f64
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            range: YearRange::default(),
            baseline: 2.0,
            slope: 0.05,
        }
    }
}

/// Multiplicative noise applied per year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Mean multiplier
    pub mean: f64,
    /// Standard deviation of the multiplier
    pub std_dev: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            mean: 1.0,
            std_dev: 0.05,
        }
    }
}

/// Per-statement score interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Lowest score
    pub low: f64,
    /// Highest score
    pub high: f64,
}

impl SentimentConfig {
    /// Check whether a value lies within the score interval
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            low: 0.8,
            high: 1.2,
        }
    }
}

/// Full render-pass configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seed for reproducible passes; entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Trend line
    pub trend: TrendConfig,
    /// Noise multiplier
    pub noise: NoiseConfig,
    /// Sentiment score interval
    pub sentiment: SentimentConfig,
    /// Survey statements to summarize
    pub surveys: SurveyCollection,
    /// Chart markers
    pub annotations: Vec<AnnotationEvent>,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With projected years
    ///
    /// # Errors
    /// `InvalidRange` if `end < start`
    pub fn with_range(mut self, start: i32, end: i32) -> Result<Self> {
        self.trend.range = YearRange::new(start, end)?;
        Ok(self)
    }

    /// With fixed seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// With trend parameters
    #[inline]
    #[must_use]
    pub fn with_trend(mut self, baseline: f64, slope: f64) -> Self {
        self.trend.baseline = baseline;
        self.trend.slope = slope;
        self
    }

    /// With noise parameters
    #[inline]
    #[must_use]
    pub fn with_noise(mut self, mean: f64, std_dev: f64) -> Self {
        self.noise = NoiseConfig { mean, std_dev };
        self
    }

    /// With sentiment score interval
    #[inline]
    #[must_use]
    pub fn with_sentiment_interval(mut self, low: f64, high: f64) -> Self {
        self.sentiment = SentimentConfig { low, high };
        self
    }

    /// With survey statements
    #[inline]
    #[must_use]
    pub fn with_surveys(mut self, surveys: SurveyCollection) -> Self {
        self.surveys = surveys;
        self
    }

    /// With chart markers
    #[inline]
    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<AnnotationEvent>) -> Self {
        self.annotations = annotations;
        self
    }

    /// Check everything a render pass would reject, before drawing anything
    ///
    /// # Errors
    /// The first problem found: non-finite trend parameters (`Config`), an
    /// annotation outside the range, or invalid noise / sentiment parameters
    pub fn validate(&self) -> Result<()> {
        let TrendConfig { baseline, slope, range } = self.trend;
        if !baseline.is_finite() || !slope.is_finite() {
            return Err(QFarmError::Config(format!(
                "trend parameters must be finite: baseline={baseline}, slope={slope}"
            )));
        }
        if let Some(event) = self.annotations.iter().find(|e| !range.contains(e.year)) {
            return Err(QFarmError::AnnotationOutOfRange {
                year: event.year,
                label: event.label.clone(),
                start: range.start(),
                end: range.end(),
            });
        }
        check_normal(self.noise.mean, self.noise.std_dev)?;
        check_interval(self.sentiment.low, self.sentiment.high)?;
        Ok(())
    }

    /// Parse from TOML text; missing keys take their defaults
    ///
    /// # Errors
    /// `Config` if the text is not valid configuration
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// `Config` if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| QFarmError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Render as TOML
    ///
    /// # Errors
    /// `Config` if serialization fails
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| QFarmError::Config(e.to_string()))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trend: TrendConfig::default(),
            noise: NoiseConfig::default(),
            sentiment: SentimentConfig::default(),
            surveys: SurveyCollection::sample(),
            annotations: AnnotationEvent::defaults(),
        }
    }
}
