use std::fmt;
use std::str::FromStr;

/// Risk appetite collected in the `riskLevel` slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Fixed bond/equity split recommended for this risk level.
    pub fn allocation(&self) -> &'static str {
        match self {
            Self::None => "100% bonds (AGG), 0% equities (SPY)",
            Self::Low => "60% bonds (AGG), 40% equities (SPY)",
            Self::Medium => "40% bonds (AGG), 60% equities (SPY)",
            Self::High => "20% bonds (AGG), 80% equities (SPY)",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(UnknownRiskLevel(value.to_owned())),
        }
    }
}

pub fn recommendation(first_name: &str, risk_level: RiskLevel) -> String {
    format!("Thank you {first_name}, we recommend {}", risk_level.allocation())
}
