//! Recommendation orchestration for WattWise.
//!
//! `prompt` renders validated readings plus tier policy plus augmentation
//! context into one deterministic instruction string; `orchestrator` owns
//! the validate → augment → compose → send sequence for a single run.

pub mod orchestrator;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use orchestrator::Recommender;
