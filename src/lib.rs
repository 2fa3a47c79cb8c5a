//! Sailrace - Sailboat handicap race-time calculator
//!
//! This library provides:
//! - TAUD handicap rating lookups for the DH-DM 2024 fleet
//! - Relative race-time offset computation and ranking
//! - Signed MM:SS formatting for display
//!
//! # Example
//!
//! ```
//! use sailrace::core::offsets::compute_offsets;
//! use sailrace::core::timefmt::format_time_difference;
//! use sailrace::data::RatingTable;
//! use sailrace::models::WindStrength;
//!
//! let table = RatingTable::dh_dm_2024();
//! let offsets = compute_offsets(&table, WindStrength::Light, "Stony", 10.0).unwrap();
//!
//! // Quinta Light rates 715.8 against Stony's 830.6, so it gains
//! // 19:08 over a 10 NM race and ranks first
//! assert_eq!(offsets[0].boat, "Quinta Light");
//! assert_eq!(format_time_difference(offsets[0].offset_seconds), "-19:08");
//! ```

pub mod core;
pub mod data;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{compute_offsets, compute_offsets_report, format_time_difference};
pub use crate::data::RatingTable;
pub use crate::error::CalcError;
pub use crate::models::{OffsetReport, OffsetResult, WindStrength};
