//! Binary risk label and its user-facing verdict text.

/// Classifier output: 0 = low risk, 1 = high risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RiskLabel {
    Negative,
    Positive,
}

impl RiskLabel {
    pub fn from_class(class: u8) -> Option<RiskLabel> {
        match class {
            0 => Some(RiskLabel::Negative),
            1 => Some(RiskLabel::Positive),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            RiskLabel::Negative => 0,
            RiskLabel::Positive => 1,
        }
    }

    /// Diagnostic verdict shown to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            RiskLabel::Negative => "Low CKD Probability (Negative Prediction)",
            RiskLabel::Positive => "High CKD Probability (Positive Prediction)",
        }
    }
}
