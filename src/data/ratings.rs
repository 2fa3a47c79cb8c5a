//! TAUD handicap rating table
//!
//! Ratings are seconds allowed per nautical mile; lower is faster. The
//! reference dataset is the DH-DM 2024 fleet, rated per wind band.

use std::collections::HashMap;
use tracing::debug;

use crate::error::CalcError;
use crate::models::WindStrength;

/// DH-DM 2024 fleet in table listing order, ratings per band (light, medium, strong)
const DH_DM_2024: [(&str, [f64; 3]); 10] = [
    ("Astarte II", [857.2, 666.4, 577.6]),
    ("Stony", [830.6, 652.2, 574.0]),
    ("Xbox", [821.6, 625.4, 536.4]),
    ("Dixi 4", [786.2, 624.4, 550.6]),
    ("Esbern Snarre", [769.6, 611.4, 540.2]),
    ("Intermezzo", [760.4, 604.2, 532.8]),
    ("Sirena", [751.2, 599.2, 528.4]),
    ("Easy Lover", [723.8, 589.6, 519.8]),
    ("Al Capone 2.0", [717.6, 577.4, 505.0]),
    ("Quinta Light", [715.8, 578.6, 507.0]),
];

/// Immutable wind band → boat → rating mapping
///
/// Construction validates the table is total: every fleet boat carries a
/// strictly positive, finite rating under every wind band. The fleet vector
/// fixes the enumeration order used for listings and as the stable-sort
/// tie-break in offset ranking.
#[derive(Debug, Clone)]
pub struct RatingTable {
    fleet: Vec<String>,
    ratings: HashMap<WindStrength, HashMap<String, f64>>,
}

impl RatingTable {
    /// Build a validated rating table
    ///
    /// # Errors
    /// `InvalidTable` for a duplicate fleet entry, a missing wind band, a
    /// missing rating cell, a rating for a boat not in the fleet, or a
    /// rating that is not strictly positive and finite.
    pub fn new(
        fleet: Vec<String>,
        ratings: HashMap<WindStrength, HashMap<String, f64>>,
    ) -> Result<Self, CalcError> {
        let mut seen = std::collections::HashSet::new();
        for boat in &fleet {
            if !seen.insert(boat.as_str()) {
                return Err(CalcError::InvalidTable(format!(
                    "Duplicate boat '{}' in fleet",
                    boat
                )));
            }
        }

        for wind in WindStrength::ALL {
            let band = ratings.get(&wind).ok_or_else(|| {
                CalcError::InvalidTable(format!("Missing ratings for {} wind", wind))
            })?;

            for boat in &fleet {
                let rating = band.get(boat).ok_or_else(|| {
                    CalcError::InvalidTable(format!(
                        "Missing {} rating for boat '{}'",
                        wind, boat
                    ))
                })?;
                if !rating.is_finite() || *rating <= 0.0 {
                    return Err(CalcError::InvalidTable(format!(
                        "Rating for boat '{}' under {} wind must be a positive number, got {}",
                        boat, wind, rating
                    )));
                }
            }

            if band.len() != fleet.len() {
                return Err(CalcError::InvalidTable(format!(
                    "{} wind band rates {} boats, fleet has {}",
                    wind,
                    band.len(),
                    fleet.len()
                )));
            }
        }

        debug!(
            "Validated rating table: {} boats x {} wind bands",
            fleet.len(),
            WindStrength::ALL.len()
        );

        Ok(Self { fleet, ratings })
    }

    /// The compiled-in DH-DM 2024 reference dataset
    pub fn dh_dm_2024() -> Self {
        let fleet: Vec<String> = DH_DM_2024.iter().map(|(name, _)| name.to_string()).collect();

        let mut ratings = HashMap::new();
        for (band_idx, wind) in WindStrength::ALL.iter().enumerate() {
            let band: HashMap<String, f64> = DH_DM_2024
                .iter()
                .map(|(name, per_band)| (name.to_string(), per_band[band_idx]))
                .collect();
            ratings.insert(*wind, band);
        }

        Self::new(fleet, ratings).expect("built-in rating table is total and positive")
    }

    /// Look up the rating for a boat under a wind band
    ///
    /// # Errors
    /// `NotFound` if the boat has no rating under that band. A validated
    /// table cannot trigger this for fleet boats, but lookups take arbitrary
    /// names from the caller.
    pub fn rating_of(&self, wind: WindStrength, boat: &str) -> Result<f64, CalcError> {
        self.ratings
            .get(&wind)
            .and_then(|band| band.get(boat))
            .copied()
            .ok_or_else(|| {
                CalcError::NotFound(format!("No {} rating for boat '{}'", wind, boat))
            })
    }

    /// Fleet in natural enumeration order
    pub fn fleet(&self) -> &[String] {
        &self.fleet
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    pub fn contains(&self, boat: &str) -> bool {
        self.fleet.iter().any(|b| b == boat)
    }
}
