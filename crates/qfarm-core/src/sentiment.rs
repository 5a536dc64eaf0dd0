//! Survey sentiment summarization
//!
//! Each statement gets one uniform draw from the score interval and the index
//! is their mean. Statement text is never read: scores are independent of
//! content. This is a placeholder for real text scoring and is kept as-is
//! until a scoring model is chosen.

use crate::config::SentimentConfig;
use crate::error::{QFarmError, RandomSourceError, Result};
use crate::random::{check_interval, RandomSource};
use crate::types::{SentimentIndex, SurveyCollection};

/// Reduces survey statements to a sentiment index
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentSummarizer {
    config: SentimentConfig,
}

impl SentimentSummarizer {
    /// Create a summarizer
    #[inline]
    #[must_use]
    pub fn new(config: SentimentConfig) -> Self {
        Self { config }
    }

    /// Score interval
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Summarize a survey collection, one draw per statement in order
    ///
    /// # Errors
    /// - `EmptySurveyCollection` when there are no statements
    /// - `RandomSource` if the interval is invalid or a draw fails
    pub fn summarize<S>(&self, surveys: &SurveyCollection, source: &mut S) -> Result<SentimentIndex>
    where
        S: RandomSource + ?Sized,
    {
        if surveys.is_empty() {
            return Err(QFarmError::EmptySurveyCollection);
        }
        let SentimentConfig { low, high } = self.config;
        check_interval(low, high)?;

        let mut total = 0.0;
        for _ in surveys.items() {
            let score = source.sample_uniform(low, high)?;
            if !(low..=high).contains(&score) {
                return Err(RandomSourceError::OutOfInterval { value: score, low, high }.into());
            }
            total += score;
        }

        // Every score is in range; clamping only absorbs rounding in the mean
        #[allow(clippy::cast_precision_loss)]
        let value = (total / surveys.len() as f64).clamp(low, high);

        tracing::debug!("Scored {} survey statements: {:.4}", surveys.len(), value);
        Ok(SentimentIndex {
            value,
            sample_size: surveys.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    /// Uniform draws return a fixed value
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn sample_normal(&mut self, mean: f64, _: f64) -> std::result::Result<f64, RandomSourceError> {
            Ok(mean)
        }

        fn sample_uniform(&mut self, _: f64, _: f64) -> std::result::Result<f64, RandomSourceError> {
            Ok(self.0)
        }
    }

    #[test]
    fn single_item_stubbed_draw() {
        let surveys = SurveyCollection::new(["Market conditions are volatile."]);
        let index = SentimentSummarizer::default()
            .summarize(&surveys, &mut Fixed(1.0))
            .unwrap();
        assert_eq!(index.value, 1.0);
        assert_eq!(index.sample_size, 1);
    }

    #[test]
    fn empty_collection_signals_no_data() {
        let err = SentimentSummarizer::default()
            .summarize(&SurveyCollection::default(), &mut Fixed(1.0))
            .unwrap_err();
        assert!(matches!(err, QFarmError::EmptySurveyCollection));
    }

    #[test]
    fn sample_surveys_within_interval() {
        let summarizer = SentimentSummarizer::default();
        let mut source = RngSource::seeded(2024);
        for _ in 0..200 {
            let index = summarizer
                .summarize(&SurveyCollection::sample(), &mut source)
                .unwrap();
            assert!(summarizer.config().contains(index.value), "{}", index.value);
        }
    }

    #[test]
    fn text_does_not_change_score() {
        let summarizer = SentimentSummarizer::default();
        let a = summarizer
            .summarize(&SurveyCollection::new(["great harvest", "good"]), &mut RngSource::seeded(5))
            .unwrap();
        let b = summarizer
            .summarize(&SurveyCollection::new(["ruined", "terrible"]), &mut RngSource::seeded(5))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn draw_outside_interval_is_reported() {
        let err = SentimentSummarizer::default()
            .summarize(&SurveyCollection::sample(), &mut Fixed(5.0))
            .unwrap_err();
        assert!(matches!(
            err,
            QFarmError::RandomSource(RandomSourceError::OutOfInterval { value, .. }) if value == 5.0
        ));
    }

    #[test]
    fn reversed_interval_is_random_source_failure() {
        let summarizer = SentimentSummarizer::new(SentimentConfig { low: 1.2, high: 0.8 });
        let err = summarizer
            .summarize(&SurveyCollection::sample(), &mut Fixed(1.0))
            .unwrap_err();
        assert!(err.is_random_source());
    }
}
