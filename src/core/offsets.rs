//! Relative race-time offset computation
//!
//! A rating is the seconds a boat is allowed per nautical mile, so the
//! rating delta between two boats times the race distance is the total time
//! one is expected to gain or lose on the other over the full race:
//!
//! ```text
//! offset_seconds = (rating(boat) - rating(reference)) * distance_nm
//! ```

use crate::data::RatingTable;
use crate::error::{validate_distance, validate_reference_boat, CalcError};
use crate::models::{OffsetReport, OffsetResult, WindStrength};

/// Compute ranked time offsets against a reference boat
///
/// Every fleet boat except the reference gets one entry, sorted ascending by
/// offset so the fastest competitor relative to the reference comes first.
/// Boats with equal offsets keep their fleet enumeration order (stable sort).
///
/// # Arguments
/// * `table` - Validated rating table
/// * `wind` - Wind band the race is sailed under
/// * `reference_boat` - Boat the offsets are measured against
/// * `distance_nm` - Race length in nautical miles
///
/// # Errors
/// `InvalidInput` for an empty reference boat or a non-finite/non-positive
/// distance, `NotFound` for a boat absent under the band. No partial list is
/// returned on error.
///
/// # Examples
/// ```
/// use sailrace::core::offsets::compute_offsets;
/// use sailrace::data::RatingTable;
/// use sailrace::models::WindStrength;
///
/// let table = RatingTable::dh_dm_2024();
/// let offsets = compute_offsets(&table, WindStrength::Light, "Stony", 10.0).unwrap();
/// assert_eq!(offsets.len(), 9);
/// assert_eq!(offsets[0].boat, "Quinta Light");
/// ```
pub fn compute_offsets(
    table: &RatingTable,
    wind: WindStrength,
    reference_boat: &str,
    distance_nm: f64,
) -> Result<Vec<OffsetResult>, CalcError> {
    validate_reference_boat(reference_boat)?;
    validate_distance(distance_nm)?;

    let reference_rating = table.rating_of(wind, reference_boat)?;

    let mut offsets = Vec::with_capacity(table.fleet_size().saturating_sub(1));
    for boat in table.fleet() {
        if boat == reference_boat {
            continue;
        }

        let rating = table.rating_of(wind, boat)?;
        offsets.push(OffsetResult {
            boat: boat.clone(),
            offset_seconds: (rating - reference_rating) * distance_nm,
        });
    }

    // Ascending: most negative (fastest relative to the reference) first.
    // sort_by is stable, so equal offsets keep fleet order.
    offsets.sort_by(|a, b| {
        a.offset_seconds
            .partial_cmp(&b.offset_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(offsets)
}

/// Compute offsets and bundle them with the query echo for serialization
pub fn compute_offsets_report(
    table: &RatingTable,
    wind: WindStrength,
    reference_boat: &str,
    distance_nm: f64,
) -> Result<OffsetReport, CalcError> {
    let offsets = compute_offsets(table, wind, reference_boat, distance_nm)?;

    Ok(OffsetReport {
        wind,
        reference_boat: reference_boat.to_string(),
        distance_nm,
        offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TOL: f64 = 1e-9;

    fn table() -> RatingTable {
        RatingTable::dh_dm_2024()
    }

    fn offset_of(offsets: &[OffsetResult], boat: &str) -> f64 {
        offsets
            .iter()
            .find(|o| o.boat == boat)
            .unwrap()
            .offset_seconds
    }

    #[test]
    fn test_excludes_reference_and_counts() {
        let table = table();

        for wind in WindStrength::ALL {
            for boat in table.fleet() {
                let offsets = compute_offsets(&table, wind, boat, 12.5).unwrap();

                assert_eq!(offsets.len(), table.fleet_size() - 1);
                assert!(offsets.iter().all(|o| &o.boat != boat));
            }
        }
    }

    #[test]
    fn test_concrete_scenario_light_stony_10nm() {
        let offsets = compute_offsets(&table(), WindStrength::Light, "Stony", 10.0).unwrap();

        // (857.2 - 830.6) * 10 = 266.0
        assert!((offset_of(&offsets, "Astarte II") - 266.0).abs() < 1e-6);
        // (715.8 - 830.6) * 10 = -1148.0
        assert!((offset_of(&offsets, "Quinta Light") + 1148.0).abs() < 1e-6);

        let quinta_pos = offsets.iter().position(|o| o.boat == "Quinta Light").unwrap();
        let astarte_pos = offsets.iter().position(|o| o.boat == "Astarte II").unwrap();
        assert!(quinta_pos < astarte_pos);

        // Stony is the second-slowest rated boat under light wind, so only
        // Astarte II carries a positive offset
        assert_eq!(offsets[0].boat, "Quinta Light");
        assert_eq!(offsets[offsets.len() - 1].boat, "Astarte II");
    }

    #[test]
    fn test_sign_convention() {
        let offsets = compute_offsets(&table(), WindStrength::Light, "Stony", 10.0).unwrap();

        // Lower rating (faster boat) means a negative offset
        assert!(offset_of(&offsets, "Quinta Light") < 0.0);
        // Higher rating (slower boat) means a positive offset
        assert!(offset_of(&offsets, "Astarte II") > 0.0);
    }

    #[test]
    fn test_antisymmetry() {
        let table = table();

        for wind in WindStrength::ALL {
            for a in table.fleet() {
                for b in table.fleet() {
                    if a == b {
                        continue;
                    }
                    let from_a = compute_offsets(&table, wind, a, 7.3).unwrap();
                    let from_b = compute_offsets(&table, wind, b, 7.3).unwrap();

                    assert!((offset_of(&from_a, b) + offset_of(&from_b, a)).abs() < TOL);
                }
            }
        }
    }

    #[test]
    fn test_linear_distance_scaling() {
        let table = table();
        let short = compute_offsets(&table, WindStrength::Medium, "Sirena", 8.0).unwrap();
        let long = compute_offsets(&table, WindStrength::Medium, "Sirena", 16.0).unwrap();

        for result in &short {
            assert_eq!(
                offset_of(&long, &result.boat),
                2.0 * result.offset_seconds
            );
        }
    }

    #[test]
    fn test_sorted_ascending() {
        let table = table();

        for wind in WindStrength::ALL {
            for boat in table.fleet() {
                let offsets = compute_offsets(&table, wind, boat, 15.0).unwrap();

                for pair in offsets.windows(2) {
                    assert!(pair[0].offset_seconds <= pair[1].offset_seconds);
                }
            }
        }
    }

    #[test]
    fn test_equal_offsets_keep_fleet_order() {
        // Twin and Double carry identical ratings, so their offsets against
        // Solo tie exactly and must stay in fleet order
        let fleet: Vec<String> = ["Solo", "Twin", "Double"]
            .iter()
            .map(|b| b.to_string())
            .collect();

        let mut ratings = HashMap::new();
        for wind in WindStrength::ALL {
            let band: HashMap<String, f64> = [
                ("Solo".to_string(), 700.0),
                ("Twin".to_string(), 650.0),
                ("Double".to_string(), 650.0),
            ]
            .into_iter()
            .collect();
            ratings.insert(wind, band);
        }

        let table = RatingTable::new(fleet, ratings).unwrap();
        let offsets = compute_offsets(&table, WindStrength::Light, "Solo", 20.0).unwrap();

        assert_eq!(offsets[0].boat, "Twin");
        assert_eq!(offsets[1].boat, "Double");
        assert_eq!(offsets[0].offset_seconds, offsets[1].offset_seconds);
    }

    #[test]
    fn test_empty_reference_boat() {
        let result = compute_offsets(&table(), WindStrength::Light, "", 10.0);
        assert!(matches!(result, Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_distance() {
        let table = table();

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = compute_offsets(&table, WindStrength::Light, "Stony", bad);
            assert!(matches!(result, Err(CalcError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_unknown_reference_boat() {
        let result = compute_offsets(&table(), WindStrength::Light, "Titanic", 10.0);
        assert!(matches!(result, Err(CalcError::NotFound(_))));
    }

    #[test]
    fn test_report_echoes_query() {
        let report =
            compute_offsets_report(&table(), WindStrength::Strong, "Xbox", 24.0).unwrap();

        assert_eq!(report.wind, WindStrength::Strong);
        assert_eq!(report.reference_boat, "Xbox");
        assert_eq!(report.distance_nm, 24.0);
        assert_eq!(report.offsets.len(), 9);
    }
}
