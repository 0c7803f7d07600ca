//! Request models

pub mod size_spec;

pub use size_spec::SizeSpec;
