use std::fmt;
use std::str::FromStr;

use anyhow::{Error, bail};

/// Air-quality category for an IAQ score. Higher scores mean more polluted air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AirQuality {
    Excellent,
    Good,
    LightlyPolluted,
    ModeratelyPolluted,
    HeavilyPolluted,
    SeverelyPolluted,
}

impl AirQuality {
    /// Maps an IAQ score onto its band. Upper bounds are inclusive.
    pub fn from_score(score: i32) -> Self {
        match score {
            ..=50 => AirQuality::Excellent,
            51..=100 => AirQuality::Good,
            101..=150 => AirQuality::LightlyPolluted,
            151..=200 => AirQuality::ModeratelyPolluted,
            201..=300 => AirQuality::HeavilyPolluted,
            _ => AirQuality::SeverelyPolluted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AirQuality::Excellent => "Excellent",
            AirQuality::Good => "Good",
            AirQuality::LightlyPolluted => "Lightly Polluted",
            AirQuality::ModeratelyPolluted => "Moderately Polluted",
            AirQuality::HeavilyPolluted => "Heavily Polluted",
            AirQuality::SeverelyPolluted => "Severely Polluted",
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AirQuality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excellent" => Ok(AirQuality::Excellent),
            "Good" => Ok(AirQuality::Good),
            "Lightly Polluted" => Ok(AirQuality::LightlyPolluted),
            "Moderately Polluted" => Ok(AirQuality::ModeratelyPolluted),
            "Heavily Polluted" => Ok(AirQuality::HeavilyPolluted),
            "Severely Polluted" => Ok(AirQuality::SeverelyPolluted),
            _ => bail!("unknown air quality category: {}", s),
        }
    }
}

pub fn air_quality_description(score: i32) -> AirQuality {
    AirQuality::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_upper_bounds_are_inclusive() {
        assert_eq!(air_quality_description(50).as_str(), "Excellent");
        assert_eq!(air_quality_description(100).as_str(), "Good");
        assert_eq!(air_quality_description(150).as_str(), "Lightly Polluted");
        assert_eq!(air_quality_description(200).as_str(), "Moderately Polluted");
        assert_eq!(air_quality_description(300).as_str(), "Heavily Polluted");
        assert_eq!(air_quality_description(301).as_str(), "Severely Polluted");
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(air_quality_description(-5), AirQuality::Excellent);
        assert_eq!(air_quality_description(25), AirQuality::Excellent);
        assert_eq!(air_quality_description(75), AirQuality::Good);
        assert_eq!(air_quality_description(125), AirQuality::LightlyPolluted);
        assert_eq!(air_quality_description(175), AirQuality::ModeratelyPolluted);
        assert_eq!(air_quality_description(250), AirQuality::HeavilyPolluted);
        assert_eq!(air_quality_description(400), AirQuality::SeverelyPolluted);
    }

    #[test]
    fn test_parse_display_name() {
        let parsed: AirQuality = "Lightly Polluted".parse().unwrap();
        assert_eq!(parsed, AirQuality::LightlyPolluted);
        assert_eq!(parsed.to_string(), "Lightly Polluted");
        assert!("Smoggy".parse::<AirQuality>().is_err());
    }
}
