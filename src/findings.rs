use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// T2-weighted signal intensity of the mass relative to renal cortex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum T2Signal {
    Low,
    Intermediate,
    High,
}

impl T2Signal {
    pub fn code(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Intermediate => 1,
            Self::High => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Intermediate => "intermediate",
            Self::High => "high",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Low),
            1 => Some(Self::Intermediate),
            2 => Some(Self::High),
            _ => None,
        }
    }
}

/// Degree of corticomedullary-phase enhancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enhancement {
    Mild,
    Moderate,
    Marked,
}

impl Enhancement {
    pub fn code(self) -> u8 {
        match self {
            Self::Mild => 0,
            Self::Moderate => 1,
            Self::Marked => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Marked => "marked",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Mild),
            1 => Some(Self::Moderate),
            2 => Some(Self::Marked),
            _ => None,
        }
    }
}

/// Presence of a binary imaging finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Absent,
    Present,
}

impl Presence {
    pub fn code(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            _ => None,
        }
    }
}

/// The six findings of one mass, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Findings {
    pub t2_signal: T2Signal,
    pub enhancement: Enhancement,
    pub microscopic_fat: Presence,
    pub sei: Presence,
    pub ader: Presence,
    pub diffusion_restriction: Presence,
}

impl Findings {
    /// Validates six raw codes in the fixed order
    /// [t2, enhancement, fat, sei, ader, diffusion].
    pub fn from_codes(codes: [i64; 6]) -> Result<Self, ScoreError> {
        let t2_signal = T2Signal::from_code(codes[0])
            .ok_or_else(|| invalid("t2_signal", codes[0], "{0,1,2}"))?;
        let enhancement = Enhancement::from_code(codes[1])
            .ok_or_else(|| invalid("corticomedullary_enhancement", codes[1], "{0,1,2}"))?;
        let microscopic_fat = Presence::from_code(codes[2])
            .ok_or_else(|| invalid("microscopic_fat", codes[2], "{0,1}"))?;
        let sei = Presence::from_code(codes[3]).ok_or_else(|| invalid("sei", codes[3], "{0,1}"))?;
        let ader =
            Presence::from_code(codes[4]).ok_or_else(|| invalid("ader", codes[4], "{0,1}"))?;
        let diffusion_restriction = Presence::from_code(codes[5])
            .ok_or_else(|| invalid("diffusion_restriction", codes[5], "{0,1}"))?;
        Ok(Self {
            t2_signal,
            enhancement,
            microscopic_fat,
            sei,
            ader,
            diffusion_restriction,
        })
    }

    pub fn codes(&self) -> [u8; 6] {
        [
            self.t2_signal.code(),
            self.enhancement.code(),
            self.microscopic_fat.code(),
            self.sei.code(),
            self.ader.code(),
            self.diffusion_restriction.code(),
        ]
    }
}

fn invalid(name: &'static str, value: i64, domain: &'static str) -> ScoreError {
    ScoreError::InvalidFinding {
        name,
        value,
        domain,
    }
}
