//! Render pass
//!
//! One pass computes everything the dashboard shows, in a fixed order:
//! 1. Yield series (one noise draw per year)
//! 2. Annotation placement (no draws)
//! 3. Sentiment index (one uniform draw per statement)
//!
//! Nothing is cached between passes; each call draws fresh values from the
//! source it is handed.

use crate::config::DashboardConfig;
use crate::error::{QFarmError, Result};
use crate::random::{RandomSource, RngSource};
use crate::sentiment::SentimentSummarizer;
use crate::series::SeriesGenerator;
use crate::types::{PlacedAnnotation, SentimentIndex, SeriesSummary, YieldSeries};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Display text for chart and metric widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    /// Chart title
    pub title: String,
    /// X-axis label
    pub x_axis: String,
    /// Y-axis label
    pub y_axis: String,
    /// Series legend name
    pub trace: String,
    /// Sentiment metric label
    pub metric: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Projected Agri-Yield under Quantum Simulation".into(),
            x_axis: "Year".into(),
            y_axis: "Yield Index".into(),
            trace: "Simulated Yield".into(),
            metric: "Farmer Sentiment Index".into(),
        }
    }
}

/// Everything one render pass produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    /// Widget text
    pub labels: ChartLabels,
    /// Projected yield index
    pub series: YieldSeries,
    /// Markers on the trend line
    pub annotations: Vec<PlacedAnnotation>,
    /// Series statistics
    pub summary: SeriesSummary,
    /// Farmer sentiment
    pub sentiment: SentimentIndex,
}

impl ProjectionReport {
    /// Generate text report
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        let _ = writeln!(report, "=== {} ===\n", self.labels.title);
        let _ = writeln!(
            report,
            "{}: {} ({} statements)",
            self.labels.metric, self.sentiment, self.sentiment.sample_size
        );
        let _ = writeln!(
            report,
            "{}: first {:.3}, last {:.3}, min {:.3}, max {:.3}, mean {:.3}",
            self.labels.y_axis,
            self.summary.first,
            self.summary.last,
            self.summary.min,
            self.summary.max,
            self.summary.mean
        );

        if !self.annotations.is_empty() {
            report.push_str("\n=== Events ===\n");
            for a in &self.annotations {
                let _ = writeln!(report, "{}: {} (trend {:.3})", a.year, a.label, a.y);
            }
        }

        let _ = writeln!(report, "\n=== {} ===", self.labels.trace);
        let _ = writeln!(report, "{:>6}  {}", self.labels.x_axis, self.labels.y_axis);
        for p in self.series.points() {
            let _ = writeln!(report, "{:>6}  {:.4}", p.year, p.value);
        }

        report
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    /// `Config` if serialization fails (non-finite values)
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| QFarmError::Config(e.to_string()))
    }
}

/// Computes dashboard data from a configuration
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    config: DashboardConfig,
    labels: ChartLabels,
}

impl Dashboard {
    /// Create a dashboard
    #[inline]
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            labels: ChartLabels::default(),
        }
    }

    /// With custom widget text
    #[inline]
    #[must_use]
    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Series generator for this configuration
    #[inline]
    #[must_use]
    pub fn series_generator(&self) -> SeriesGenerator {
        SeriesGenerator::new(self.config.trend, self.config.noise)
    }

    /// Sentiment summarizer for this configuration
    #[inline]
    #[must_use]
    pub fn summarizer(&self) -> SentimentSummarizer {
        SentimentSummarizer::new(self.config.sentiment)
    }

    /// Run one render pass with an injected source
    ///
    /// Configuration is validated before the first draw, so a rejected pass
    /// consumes nothing from `source`.
    ///
    /// # Errors
    /// Any error from validation, series generation, annotation placement or
    /// sentiment summarization
    pub fn render<S>(&self, source: &mut S) -> Result<ProjectionReport>
    where
        S: RandomSource + ?Sized,
    {
        tracing::info!(
            "Rendering projection over {} with {} survey statements",
            self.config.trend.range,
            self.config.surveys.len()
        );

        self.config.validate()?;
        if self.config.surveys.is_empty() {
            return Err(QFarmError::EmptySurveyCollection);
        }

        let generator = self.series_generator();
        let series = generator.generate(source)?;
        let annotations = generator.place_annotations(&self.config.annotations)?;
        let sentiment = self.summarizer().summarize(&self.config.surveys, source)?;

        // Range is never empty, so neither is the series
        let summary = series
            .summary()
            .ok_or_else(|| QFarmError::InvalidRange {
                start: self.config.trend.range.start(),
                end: self.config.trend.range.end(),
            })?;

        tracing::info!(
            "Render complete: {} points, {} events, sentiment {}",
            series.len(),
            annotations.len(),
            sentiment
        );

        Ok(ProjectionReport {
            labels: self.labels.clone(),
            series,
            annotations,
            summary,
            sentiment,
        })
    }

    /// Run one render pass with a source built from the configured seed
    ///
    /// Seeded when `config.seed` is set, entropy-seeded otherwise.
    ///
    /// # Errors
    /// `RandomSource` if entropy is unavailable, plus anything from [`Self::render`]
    pub fn render_fresh(&self) -> Result<ProjectionReport> {
        let mut source = RngSource::from_seed_or_entropy(self.config.seed)?;
        self.render(&mut source)
    }
}
