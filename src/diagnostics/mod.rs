//! Serializable diagnostics produced alongside the saliency map.
//!
//! `SaliencyReport` is returned by the engine after every successful run and
//! records the input size, the weights in effect, per-stage timings, and
//! statistics of the four conspicuity maps.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, MapStats, SaliencyReport};
pub use timing::{StageTiming, TimingBreakdown};
