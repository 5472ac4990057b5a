//! The four generation steps, in the order the pipeline runs them.
//!
//! Each step takes its provider as an `Option` (absent when unconfigured)
//! and never returns an error: failures are logged and folded into the
//! returned [`crate::StepOutcome`].

pub mod animate;
pub mod images;
pub mod render;
pub mod script;

pub use animate::animate;
pub use images::{generate_images, scene_image};
pub use render::render_final;
pub use script::script_scenes;
