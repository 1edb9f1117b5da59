//! Command-line workflow layer

pub mod orchestration;
