use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Wind-strength band classifying a race
///
/// The TAUD rating table carries one column per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindStrength {
    Light,
    Medium,
    Strong,
}

impl WindStrength {
    /// All bands in table column order
    pub const ALL: [WindStrength; 3] = [
        WindStrength::Light,
        WindStrength::Medium,
        WindStrength::Strong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WindStrength::Light => "light",
            WindStrength::Medium => "medium",
            WindStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for WindStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindStrength {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(WindStrength::Light),
            "medium" => Ok(WindStrength::Medium),
            "strong" => Ok(WindStrength::Strong),
            other => Err(CalcError::InvalidInput(format!(
                "Wind strength must be light, medium, or strong, got '{}'",
                other
            ))),
        }
    }
}

/// Signed time offset for one competitor
///
/// Negative offsets mean the boat is expected to finish earlier than the
/// reference boat, positive offsets later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetResult {
    pub boat: String,
    pub offset_seconds: f64,
}

/// Full calculation answer handed to a front-end for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetReport {
    pub wind: WindStrength,
    pub reference_boat: String,
    pub distance_nm: f64,
    pub offsets: Vec<OffsetResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_strength_parse() {
        assert_eq!("light".parse::<WindStrength>().unwrap(), WindStrength::Light);
        assert_eq!("MEDIUM".parse::<WindStrength>().unwrap(), WindStrength::Medium);
        assert_eq!(" strong ".parse::<WindStrength>().unwrap(), WindStrength::Strong);
    }

    #[test]
    fn test_wind_strength_parse_invalid() {
        assert!("gale".parse::<WindStrength>().is_err());
        assert!("".parse::<WindStrength>().is_err());
    }

    #[test]
    fn test_wind_strength_display_round_trip() {
        for wind in WindStrength::ALL {
            assert_eq!(wind.to_string().parse::<WindStrength>().unwrap(), wind);
        }
    }
}
