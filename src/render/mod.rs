//! Report rendering.

pub mod text;

pub use text::write_report;
