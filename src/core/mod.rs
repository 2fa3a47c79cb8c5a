//! Core business logic modules

pub mod offsets;
pub mod timefmt;

// Re-export commonly used functions
pub use offsets::{compute_offsets, compute_offsets_report};
pub use timefmt::format_time_difference;
