//! A [Scenario] captures a track and the dice still to be rolled, so that a leg can be analysed from
//! a known position. Scenarios are stored as JSON.

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::exact::check_preconditions;
use crate::leg::Leg;
use crate::pyramid::Pyramid;
use crate::track::Track;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub track: Track,
    #[serde(default)]
    pub pyramid: Pyramid,
}
impl Scenario {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.track.validate()?;
        if self.track.placed() < 2 {
            bail!("at least two camels must be on the track");
        }
        check_preconditions(&self.track, &self.pyramid)?;
        Ok(())
    }
}

impl From<Scenario> for Leg {
    fn from(scenario: Scenario) -> Self {
        Leg::new(scenario.track).with_pyramid(scenario.pyramid)
    }
}

impl From<&Leg> for Scenario {
    fn from(leg: &Leg) -> Self {
        Self {
            track: leg.track.clone(),
            pyramid: leg.pyramid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camel::Camel::{Blue, Green, Red, Yellow};
    use crate::file::{ReadJsonFile, WriteJsonFile};
    use std::env;

    #[test]
    fn from_json() {
        let json = r#"{
            "track": [["r", "b"], [], ["g"], [], [], [], [], [], [], [], [], [], [], [], [], []],
            "pyramid": ["b", "g"]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        scenario.validate().unwrap();
        assert_eq!(&[Red, Blue], scenario.track.stack(0));
        assert_eq!(&[Green], scenario.track.stack(2));
        assert_eq!(vec![Blue, Green], Vec::from(scenario.pyramid));
    }

    #[test]
    fn pyramid_defaults_to_full() {
        let json = r#"{
            "track": [["r", "b", "g", "y", "p"], [], [], [], [], [], [], [], [], [], [], [], [], [], [], []]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(Pyramid::full(), scenario.pyramid);
        scenario.validate().unwrap();
    }

    #[test]
    fn decode_rejects_duplicates() {
        let json = r#"{
            "track": [["r", "b"], ["r"], [], [], [], [], [], [], [], [], [], [], [], [], [], []],
            "pyramid": []
        }"#;
        let err = serde_json::from_str::<Scenario>(json).err().unwrap();
        assert!(
            err.to_string().contains("camel r is already on the track"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn validate_rejects_lone_camel() {
        let scenario = Scenario {
            track: Track::default().with_stack(4, &[Yellow]).unwrap(),
            pyramid: Pyramid::empty(),
        };
        assert_eq!(
            "at least two camels must be on the track",
            scenario.validate().err().unwrap().to_string()
        );
    }

    #[test]
    fn validate_rejects_unplaced_dice() {
        let scenario = Scenario {
            track: Track::default().with_stack(4, &[Yellow, Red]).unwrap(),
            pyramid: Pyramid::from(vec![Red, Green]),
        };
        assert_eq!(
            "camel g is not on the track",
            scenario.validate().err().unwrap().to_string()
        );
    }

    #[test]
    fn file_round_trip() {
        let leg = Leg::new(Track::default().with_stack(1, &[Green, Red]).unwrap())
            .with_pyramid(Pyramid::from(vec![Red]));
        let scenario = Scenario::from(&leg);
        let path = env::temp_dir().join(format!("dromedary-scenario-{}.json", std::process::id()));
        scenario.write_json_file(&path).unwrap();
        let loaded = Scenario::read_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(scenario, loaded);

        let leg = Leg::from(loaded);
        assert_eq!(vec![Red], Vec::from(leg.pyramid));
    }
}
