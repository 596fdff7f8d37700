//! Static metadata for the signature dimensions.
//!
//! Index order here is the component order of every `Signature`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Temperature,
    Hardness,
    Wetness,
    Luminosity,
    Weight,
    Conductivity,
    Volatility,
    Resonance,
}

/// Number of components in every signature.
pub const DIMENSIONS: usize = 8;

impl Dimension {
    pub const ALL: [Dimension; DIMENSIONS] = [
        Dimension::Temperature,
        Dimension::Hardness,
        Dimension::Wetness,
        Dimension::Luminosity,
        Dimension::Weight,
        Dimension::Conductivity,
        Dimension::Volatility,
        Dimension::Resonance,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Temperature => "Temperature",
            Dimension::Hardness => "Hardness",
            Dimension::Wetness => "Wetness",
            Dimension::Luminosity => "Luminosity",
            Dimension::Weight => "Weight",
            Dimension::Conductivity => "Conductivity",
            Dimension::Volatility => "Volatility",
            Dimension::Resonance => "Resonance",
        }
    }

    /// Word used when the component sits below the low threshold.
    pub fn low_descriptor(self) -> &'static str {
        match self {
            Dimension::Temperature => "Cold",
            Dimension::Hardness => "Soft",
            Dimension::Wetness => "Dry",
            Dimension::Luminosity => "Dark",
            Dimension::Weight => "Light",
            Dimension::Conductivity => "Insulating",
            Dimension::Volatility => "Stable",
            Dimension::Resonance => "Dissonant",
        }
    }

    /// Word used when the component sits above the high threshold.
    pub fn high_descriptor(self) -> &'static str {
        match self {
            Dimension::Temperature => "Hot",
            Dimension::Hardness => "Hard",
            Dimension::Wetness => "Wet",
            Dimension::Luminosity => "Bright",
            Dimension::Weight => "Heavy",
            Dimension::Conductivity => "Conductive",
            Dimension::Volatility => "Volatile",
            Dimension::Resonance => "Resonant",
        }
    }

    /// Descriptor for a component value, if it crosses either threshold.
    /// Thresholds are strict: a value equal to `high` is not "high".
    pub fn descriptor_for(self, value: f64, high: f64, low: f64) -> Option<&'static str> {
        if value > high {
            Some(self.high_descriptor())
        } else if value < low {
            Some(self.low_descriptor())
        } else {
            None
        }
    }
}
