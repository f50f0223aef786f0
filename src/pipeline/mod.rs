//! Self-play training pipeline
//!
//! This module provides:
//! - Batched self-play training with a cooperative stop flag
//! - Observers for progress display and outcome metrics

pub mod observers;
pub mod training;

pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use training::{StopHandle, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
