//! Patient profile: the thirteen current form values.
//!
//! A profile is an immutable-per-request snapshot. The interactive surface
//! mutates a [`ProfileState`] and takes a copy of the inner profile when a
//! prediction is requested, so the pipeline itself stays pure.

use crate::schema::Feature;

/// One patient's bio-chemical measurements.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PatientProfile {
    pub bp: f64,
    pub sg: f64,
    pub al: f64,
    pub su: f64,
    pub rbc: f64,
    pub bu: f64,
    pub sc: f64,
    pub sod: f64,
    pub pot: f64,
    pub hemo: f64,
    pub wbcc: f64,
    pub rbcc: f64,
    pub htn: f64,
}

impl Default for PatientProfile {
    fn default() -> Self {
        let mut profile = Self {
            bp: 0.0,
            sg: 0.0,
            al: 0.0,
            su: 0.0,
            rbc: 0.0,
            bu: 0.0,
            sc: 0.0,
            sod: 0.0,
            pot: 0.0,
            hemo: 0.0,
            wbcc: 0.0,
            rbcc: 0.0,
            htn: 0.0,
        };
        for feature in Feature::ALL {
            profile.set(feature, feature.default_value());
        }
        profile
    }
}

impl PatientProfile {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Bp => self.bp,
            Feature::Sg => self.sg,
            Feature::Al => self.al,
            Feature::Su => self.su,
            Feature::Rbc => self.rbc,
            Feature::Bu => self.bu,
            Feature::Sc => self.sc,
            Feature::Sod => self.sod,
            Feature::Pot => self.pot,
            Feature::Hemo => self.hemo,
            Feature::Wbcc => self.wbcc,
            Feature::Rbcc => self.rbcc,
            Feature::Htn => self.htn,
        }
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        match feature {
            Feature::Bp => self.bp = value,
            Feature::Sg => self.sg = value,
            Feature::Al => self.al = value,
            Feature::Su => self.su = value,
            Feature::Rbc => self.rbc = value,
            Feature::Bu => self.bu = value,
            Feature::Sc => self.sc = value,
            Feature::Sod => self.sod = value,
            Feature::Pot => self.pot = value,
            Feature::Hemo => self.hemo = value,
            Feature::Wbcc => self.wbcc = value,
            Feature::Rbcc => self.rbcc = value,
            Feature::Htn => self.htn = value,
        }
    }

    /// Values in schema order.
    pub fn values(&self) -> Vec<f64> {
        Feature::ALL.iter().map(|f| self.get(*f)).collect()
    }
}

/// Mutable form state backing the interactive surface.
///
/// Loading a preset overwrites every field; a later edit overwrites the
/// preset value. Last write wins, with no stale field bleed.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    profile: PatientProfile,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> PatientProfile {
        self.profile
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        self.profile.set(feature, value);
    }

    pub fn load(&mut self, profile: PatientProfile) {
        self.profile = profile;
    }
}
