//! Yield series generation
//!
//! `value(y) = trend(y) * noise(y)` where `trend(y) = baseline + slope * (y - start)`
//! and `noise(y)` is one independent normal draw per year. Annotations sit on
//! the noise-free trend line.

use crate::config::{NoiseConfig, TrendConfig};
use crate::error::{QFarmError, Result};
use crate::random::{check_normal, RandomSource};
use crate::types::{AnnotationEvent, PlacedAnnotation, YieldPoint, YieldSeries};

/// Generates the synthetic yield projection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeriesGenerator {
    trend: TrendConfig,
    noise: NoiseConfig,
}

impl SeriesGenerator {
    /// Create a generator
    #[inline]
    #[must_use]
    pub fn new(trend: TrendConfig, noise: NoiseConfig) -> Self {
        Self { trend, noise }
    }

    /// Trend configuration
    #[inline]
    #[must_use]
    pub fn trend(&self) -> &TrendConfig {
        &self.trend
    }

    /// Generate one series, drawing one noise multiplier per year in order
    ///
    /// # Errors
    /// `RandomSource` if the noise parameters are invalid or a draw fails
    pub fn generate<S>(&self, source: &mut S) -> Result<YieldSeries>
    where
        S: RandomSource + ?Sized,
    {
        check_normal(self.noise.mean, self.noise.std_dev)?;

        let range = self.trend.range;
        let mut points = Vec::with_capacity(range.len());
        for year in range.iter() {
            let noise = source.sample_normal(self.noise.mean, self.noise.std_dev)?;
            points.push(YieldPoint {
                year,
                value: self.trend.trend(year) * noise,
            });
        }

        tracing::debug!("Generated {} yield points over {}", points.len(), range);
        Ok(YieldSeries::from_points(points))
    }

    /// Place annotations on the trend line
    ///
    /// # Errors
    /// `AnnotationOutOfRange` for the first event outside the projected years
    pub fn place_annotations(&self, events: &[AnnotationEvent]) -> Result<Vec<PlacedAnnotation>> {
        let range = self.trend.range;
        events
            .iter()
            .map(|event| {
                if !range.contains(event.year) {
                    return Err(QFarmError::AnnotationOutOfRange {
                        year: event.year,
                        label: event.label.clone(),
                        start: range.start(),
                        end: range.end(),
                    });
                }
                Ok(PlacedAnnotation {
                    year: event.year,
                    label: event.label.clone(),
                    y: self.trend.trend(event.year),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RandomSourceError;
    use crate::random::RngSource;
    use crate::range::YearRange;

    /// Returns the mean for every normal draw
    struct MeanSource;

    impl RandomSource for MeanSource {
        fn sample_normal(&mut self, mean: f64, _: f64) -> std::result::Result<f64, RandomSourceError> {
            Ok(mean)
        }

        fn sample_uniform(&mut self, low: f64, _: f64) -> std::result::Result<f64, RandomSourceError> {
            Ok(low)
        }
    }

    fn generator(start: i32, end: i32) -> SeriesGenerator {
        SeriesGenerator::new(
            TrendConfig {
                range: YearRange::new(start, end).unwrap(),
                ..TrendConfig::default()
            },
            NoiseConfig::default(),
        )
    }

    #[test]
    fn noise_free_three_years() {
        let series = generator(2020, 2022).generate(&mut MeanSource).unwrap();
        let values: Vec<f64> = series.values().collect();
        let expected = [2.0, 2.05, 2.10];
        assert_eq!(values.len(), expected.len());
        for (v, e) in values.iter().zip(expected) {
            assert!((v - e).abs() < 1e-12, "{v} != {e}");
        }
        assert_eq!(series.years().collect::<Vec<_>>(), vec![2020, 2021, 2022]);
    }

    #[test]
    fn default_series_covers_range() {
        let series = SeriesGenerator::default()
            .generate(&mut RngSource::seeded(1))
            .unwrap();
        assert_eq!(series.len(), 31);
        assert_eq!(series.points()[0].year, 2020);
        assert_eq!(series.points()[30].year, 2050);
    }

    #[test]
    fn sample_annotations_on_trend() {
        let placed = SeriesGenerator::default()
            .place_annotations(&AnnotationEvent::defaults())
            .unwrap();
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].label, "Policy Overhaul");
        assert!((placed[0].y - 2.5).abs() < 1e-12);
        assert_eq!(placed[1].label, "Global Market Shock");
        assert!((placed[1].y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn annotation_outside_range_rejected() {
        let err = generator(2020, 2022)
            .place_annotations(&[AnnotationEvent::new(2019, "Early")])
            .unwrap_err();
        assert!(matches!(err, QFarmError::AnnotationOutOfRange { year: 2019, .. }));
    }

    #[test]
    fn invalid_noise_fails_before_drawing() {
        let series_gen = SeriesGenerator::new(
            TrendConfig::default(),
            NoiseConfig {
                mean: 1.0,
                std_dev: f64::NAN,
            },
        );
        assert!(series_gen.generate(&mut MeanSource).unwrap_err().is_random_source());
    }
}
