//! The VibeShift generation pipeline.
//!
//! [`GenerationPipeline::run`] takes a project's lyrics (and optionally an
//! audio track) through scene scripting, image generation, lip-sync and a
//! final render submission, persisting assets as it goes.

pub mod config;
pub mod error;
pub mod outcome;
pub mod providers;
pub mod request;
pub mod runner;
pub mod steps;
pub mod store;

pub use config::PipelineConfig;
pub use error::{PipelineError, StoreError};
pub use outcome::StepOutcome;
pub use providers::{ProviderAvailability, Providers};
pub use request::{GenerationRequest, GenerationSummary};
pub use runner::GenerationPipeline;
pub use store::{GenerationStore, MemoryStore, PgStore};
