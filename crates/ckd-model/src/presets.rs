//! Quick-test preset vectors.
//!
//! Four literal demonstration profiles. Loading one overwrites the whole
//! form state; there is no validation and no undo.

use crate::profile::PatientProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    One,
    Two,
    Three,
    Four,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::One, Preset::Two, Preset::Three, Preset::Four];

    pub fn from_index(index: u8) -> Option<Preset> {
        match index {
            1 => Some(Preset::One),
            2 => Some(Preset::Two),
            3 => Some(Preset::Three),
            4 => Some(Preset::Four),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Preset::One => 1,
            Preset::Two => 2,
            Preset::Three => 3,
            Preset::Four => 4,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::One => "Healthy adult, all markers in normal range",
            Preset::Two => "Early-stage markers: mild proteinuria, reduced hemoglobin",
            Preset::Three => "Advanced markers: elevated urea and creatinine, anemia",
            Preset::Four => "Borderline profile near clinical thresholds",
        }
    }

    /// The literal test vector for this preset.
    pub fn profile(self) -> PatientProfile {
        match self {
            Preset::One => PatientProfile {
                bp: 80.0,
                sg: 1.025,
                al: 0.0,
                su: 0.0,
                rbc: 5.4,
                bu: 15.0,
                sc: 0.9,
                sod: 141.0,
                pot: 4.2,
                hemo: 15.8,
                wbcc: 6700.0,
                rbcc: 5.3,
                htn: 0.0,
            },
            Preset::Two => PatientProfile {
                bp: 90.0,
                sg: 1.015,
                al: 2.0,
                su: 0.0,
                rbc: 4.6,
                bu: 45.0,
                sc: 1.8,
                sod: 135.0,
                pot: 4.9,
                hemo: 11.2,
                wbcc: 9200.0,
                rbcc: 4.1,
                htn: 1.0,
            },
            Preset::Three => PatientProfile {
                bp: 110.0,
                sg: 1.010,
                al: 4.0,
                su: 3.0,
                rbc: 3.1,
                bu: 120.0,
                sc: 6.5,
                sod: 128.0,
                pot: 6.2,
                hemo: 7.9,
                wbcc: 12400.0,
                rbcc: 3.0,
                htn: 1.0,
            },
            Preset::Four => PatientProfile {
                bp: 76.0,
                sg: 1.020,
                al: 1.0,
                su: 0.0,
                rbc: 4.9,
                bu: 28.0,
                sc: 1.1,
                sod: 139.0,
                pot: 4.4,
                hemo: 13.6,
                wbcc: 7300.0,
                rbcc: 4.8,
                htn: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileState;
    use crate::schema::Feature;

    #[test]
    fn preset_indices_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_index(preset.index()), Some(preset));
        }
        assert_eq!(Preset::from_index(0), None);
        assert_eq!(Preset::from_index(5), None);
    }

    #[test]
    fn preset_load_overwrites_prior_edits() {
        let mut state = ProfileState::new();
        state.load(Preset::Two.profile());
        state.set(Feature::Bp, 155.0);
        state.load(Preset::Three.profile());
        assert_eq!(state.profile(), Preset::Three.profile());
    }

    #[test]
    fn presets_stay_within_input_bounds() {
        for preset in Preset::ALL {
            let profile = preset.profile();
            for feature in Feature::ALL {
                let (min, max) = feature.bounds();
                let value = profile.get(feature);
                assert!(
                    value >= min && value <= max,
                    "{} preset {} value {} outside [{}, {}]",
                    feature.name(),
                    preset.index(),
                    value,
                    min,
                    max
                );
            }
        }
    }
}
