pub mod generation;
pub mod project;
