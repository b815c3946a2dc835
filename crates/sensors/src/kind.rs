//! Sensor kinds and their alert predicates

use crate::error::SensorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported sensor kinds
///
/// Deserialized through [`FromStr`], so settings files accept the same
/// tokens as [`crate::SensorFactory::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SensorKind {
    /// Temperature (°C)
    Temperature,
    /// Vibration amplitude
    Vibration,
    /// Pressure
    Pressure,
}

impl SensorKind {
    /// All kinds, in declaration order
    pub const ALL: [SensorKind; 3] = [Self::Temperature, Self::Vibration, Self::Pressure];

    /// Default alert threshold for this kind
    pub fn default_threshold(self) -> f64 {
        match self {
            Self::Temperature => 80.0,
            Self::Vibration => 2.5,
            Self::Pressure => 100.0,
        }
    }

    /// Alert predicate over the window average.
    ///
    /// Vibration compares the absolute mean, a stand-in for an RMS amplitude.
    pub fn is_alerting(self, average: f64, threshold: f64) -> bool {
        match self {
            Self::Temperature => average >= threshold,
            Self::Vibration => average.abs() >= threshold,
            Self::Pressure => average >= threshold,
        }
    }

    /// Canonical token
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Vibration => "vibration",
            Self::Pressure => "pressure",
        }
    }
}

impl FromStr for SensorKind {
    type Err = SensorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "temperature" | "temperatura" => Ok(Self::Temperature),
            "vibration" | "vibracion" => Ok(Self::Vibration),
            "pressure" | "presion" => Ok(Self::Pressure),
            other => Err(SensorError::UnknownSensorKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for SensorKind {
    type Error = SensorError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("temperature".parse::<SensorKind>(), Ok(SensorKind::Temperature));
        assert_eq!("temperatura".parse::<SensorKind>(), Ok(SensorKind::Temperature));
        assert_eq!("vibracion".parse::<SensorKind>(), Ok(SensorKind::Vibration));
        assert_eq!("presion".parse::<SensorKind>(), Ok(SensorKind::Pressure));
        assert_eq!(
            "humidity".parse::<SensorKind>(),
            Err(SensorError::UnknownSensorKind("humidity".to_string()))
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!("Temperature".parse::<SensorKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in SensorKind::ALL {
            assert_eq!(kind.to_string().parse::<SensorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_predicates() {
        assert!(SensorKind::Temperature.is_alerting(80.0, 80.0));
        assert!(!SensorKind::Temperature.is_alerting(-90.0, 80.0));
        assert!(SensorKind::Vibration.is_alerting(-3.0, 2.5));
        assert!(!SensorKind::Pressure.is_alerting(99.99, 100.0));
    }

    #[test]
    fn test_serde_accepts_localized_tokens() {
        let kind: SensorKind = serde_json::from_str("\"vibracion\"").unwrap();
        assert_eq!(kind, SensorKind::Vibration);
        assert_eq!(serde_json::to_string(&SensorKind::Pressure).unwrap(), "\"pressure\"");
    }

    #[test]
    fn test_deserialize_unknown_kind_reports_token() {
        let err = serde_json::from_str::<SensorKind>("\"humidity\"").unwrap_err();
        assert!(err.to_string().contains("Unknown sensor kind: humidity"));
    }
}
