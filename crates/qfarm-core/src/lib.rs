//! QFarm Core - Synthetic Agri-Yield Projection
//!
//! Computes the data behind the quantum farming dashboard:
//! - A yield index series over a year range, scaled by normal noise
//! - Event annotations placed on the noise-free trend line
//! - A farmer sentiment index from survey statements
//!
//! All randomness comes through an injected [`RandomSource`], so a fixed seed
//! reproduces a render pass exactly.
//!
//! # Example
//!
//! ```rust
//! use qfarm_core::{Dashboard, DashboardConfig, RngSource};
//!
//! let dashboard = Dashboard::new(DashboardConfig::new());
//! let report = dashboard.render(&mut RngSource::seeded(42)).unwrap();
//!
//! assert_eq!(report.series.len(), 31);
//! assert_eq!(report.annotations[0].y, 2.5);
//! ```

// Core modules
pub mod config;
pub mod dashboard;
pub mod error;
pub mod random;
pub mod range;
pub mod sentiment;
pub mod series;
pub mod types;

// Re-exports for convenience
pub use config::{DashboardConfig, NoiseConfig, SentimentConfig, TrendConfig};
pub use dashboard::{ChartLabels, Dashboard, ProjectionReport};
pub use error::{QFarmError, RandomSourceError, Result};
pub use random::{RandomSource, RngSource};
pub use range::YearRange;
pub use sentiment::SentimentSummarizer;
pub use series::SeriesGenerator;
pub use types::{
    AnnotationEvent, PlacedAnnotation, SentimentIndex, SeriesSummary, SurveyCollection, YieldPoint,
    YieldSeries,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with QFarm Core
    pub use crate::{
        Dashboard, DashboardConfig, ProjectionReport, QFarmError, RandomSource, RngSource,
        SentimentSummarizer, SeriesGenerator, SurveyCollection, YearRange,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
