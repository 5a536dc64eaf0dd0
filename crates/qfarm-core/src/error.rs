//! Error types for QFarm Core
//!
//! Covers the few ways a render pass can fail:
//! - Invalid year ranges
//! - Empty survey collections
//! - Annotation years outside the projected range
//! - Random source failures
//! - Configuration parse failures

/// Main QFarm error type
#[derive(Debug, thiserror::Error)]
pub enum QFarmError {
    /// Year range is empty (end before start)
    #[error("invalid year range: {start}..={end}")]
    InvalidRange {
        /// First year requested
        start: i32,
        /// Last year requested
        end: i32,
    },

    /// No survey statements to summarize
    #[error("survey collection is empty; no sentiment index can be computed")]
    EmptySurveyCollection,

    /// Annotation placed outside the projected years
    #[error("annotation '{label}' at {year} lies outside {start}..={end}")]
    AnnotationOutOfRange {
        /// Annotation year
        year: i32,
        /// Annotation label
        label: String,
        /// First projected year
        start: i32,
        /// Last projected year
        end: i32,
    },

    /// Random source could not produce a draw
    #[error("random source failure: {0}")]
    RandomSource(#[from] RandomSourceError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl QFarmError {
    /// Check if error is retryable
    ///
    /// Nothing in a render pass touches I/O, so a failed pass fails the same
    /// way when repeated.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Check if error comes from the random source
    #[inline]
    #[must_use]
    pub fn is_random_source(&self) -> bool {
        matches!(self, Self::RandomSource(_))
    }
}

impl From<toml::de::Error> for QFarmError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Random source errors
#[derive(Debug, thiserror::Error)]
pub enum RandomSourceError {
    /// Normal distribution parameters rejected
    #[error("invalid normal distribution: mean={mean}, std_dev={std_dev}")]
    InvalidNormal {
        /// Requested mean
        mean: f64,
        /// Requested standard deviation
        std_dev: f64,
    },

    /// Uniform interval rejected
    #[error("invalid uniform interval: [{low}, {high}]")]
    InvalidInterval {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// Entropy source unavailable
    #[error("entropy unavailable: {0}")]
    Entropy(String),

    /// Draw fell outside the requested interval
    #[error("draw {value} outside [{low}, {high}]")]
    OutOfInterval {
        /// Value returned by the source
        value: f64,
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// Source ran out of values (scripted sources)
    #[error("random source exhausted after {draws} draws")]
    Exhausted {
        /// Draws served before exhaustion
        draws: usize,
    },
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, QFarmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_error_is_retryable() {
        let errors = [
            QFarmError::InvalidRange { start: 2050, end: 2020 },
            QFarmError::EmptySurveyCollection,
            QFarmError::RandomSource(RandomSourceError::Exhausted { draws: 3 }),
            QFarmError::Config("bad".into()),
        ];
        assert!(errors.iter().all(|e| !e.is_retryable()));
    }

    #[test]
    fn random_source_error_converts() {
        let err: QFarmError = RandomSourceError::InvalidInterval { low: 1.2, high: 0.8 }.into();
        assert!(err.is_random_source());
        assert_eq!(
            err.to_string(),
            "random source failure: invalid uniform interval: [1.2, 0.8]"
        );
    }

    #[test]
    fn annotation_error_message() {
        let err = QFarmError::AnnotationOutOfRange {
            year: 2060,
            label: "Global Market Shock".into(),
            start: 2020,
            end: 2050,
        };
        assert_eq!(
            err.to_string(),
            "annotation 'Global Market Shock' at 2060 lies outside 2020..=2050"
        );
    }
}
