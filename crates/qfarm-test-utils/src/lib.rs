//! Testing utilities for QFarm workspace
//!
//! Shared random-source doubles and configuration fixtures.

#![allow(missing_docs)]

use qfarm_core::{
    AnnotationEvent, DashboardConfig, RandomSource, RandomSourceError, SurveyCollection,
};
use std::collections::VecDeque;

/// Every draw returns the same value, regardless of distribution parameters
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource {
    pub normal: f64,
    pub uniform: f64,
    pub draws: usize,
}

impl ConstantSource {
    pub fn new(value: f64) -> Self {
        Self::split(value, value)
    }

    pub fn split(normal: f64, uniform: f64) -> Self {
        Self {
            normal,
            uniform,
            draws: 0,
        }
    }
}

impl RandomSource for ConstantSource {
    fn sample_normal(&mut self, _mean: f64, _std_dev: f64) -> Result<f64, RandomSourceError> {
        self.draws += 1;
        Ok(self.normal)
    }

    fn sample_uniform(&mut self, _low: f64, _high: f64) -> Result<f64, RandomSourceError> {
        self.draws += 1;
        Ok(self.uniform)
    }
}

/// Serves a fixed script of values in order, then fails with `Exhausted`
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<f64>,
    served: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            served: 0,
        }
    }

    pub fn served(&self) -> usize {
        self.served
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next(&mut self) -> Result<f64, RandomSourceError> {
        let value = self
            .values
            .pop_front()
            .ok_or(RandomSourceError::Exhausted { draws: self.served })?;
        self.served += 1;
        Ok(value)
    }
}

impl RandomSource for ScriptedSource {
    fn sample_normal(&mut self, _mean: f64, _std_dev: f64) -> Result<f64, RandomSourceError> {
        self.next()
    }

    fn sample_uniform(&mut self, _low: f64, _high: f64) -> Result<f64, RandomSourceError> {
        self.next()
    }
}

/// Fails every draw, standing in for an unavailable entropy source
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl RandomSource for FailingSource {
    fn sample_normal(&mut self, _mean: f64, _std_dev: f64) -> Result<f64, RandomSourceError> {
        Err(RandomSourceError::Entropy("source offline".into()))
    }

    fn sample_uniform(&mut self, _low: f64, _high: f64) -> Result<f64, RandomSourceError> {
        Err(RandomSourceError::Entropy("source offline".into()))
    }
}

pub fn short_range_config(start: i32, end: i32) -> DashboardConfig {
    DashboardConfig::new()
        .with_range(start, end)
        .unwrap()
        .with_annotations(vec![AnnotationEvent::new(start, "Start")])
}

pub fn single_survey(text: &str) -> SurveyCollection {
    SurveyCollection::new([text])
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
