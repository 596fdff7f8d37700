use super::catalog::{Dimension, DIMENSIONS};
use crate::core::error::SignatureError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Lower bound of every signature component.
pub const COMPONENT_MIN: f64 = -1.0;
/// Upper bound of every signature component.
pub const COMPONENT_MAX: f64 = 1.0;

/// A fixed-length elemental/material theme vector.
///
/// Every value is expected to lie in `[-1, 1]`; generators clamp to that
/// range. The length is fixed by the type, so a `Signature` can never hold
/// the wrong number of components once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    values: [f64; DIMENSIONS],
}

impl Signature {
    pub const fn from_array(values: [f64; DIMENSIONS]) -> Self {
        Self { values }
    }

    /// Builds a signature from a slice, failing unless it has exactly
    /// [`DIMENSIONS`] components.
    pub fn new(values: &[f64]) -> Result<Self, SignatureError> {
        let values: [f64; DIMENSIONS] =
            values.try_into().map_err(|_| SignatureError::WrongLength {
                expected: DIMENSIONS,
                actual: values.len(),
            })?;
        Ok(Self { values })
    }

    /// The all-zero signature.
    pub const fn neutral() -> Self {
        Self {
            values: [0.0; DIMENSIONS],
        }
    }

    /// Every component drawn independently and uniformly from `[-1, 1]`.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut values = [0.0; DIMENSIONS];
        for value in values.iter_mut() {
            *value = rng.gen::<f64>() * 2.0 - 1.0;
        }
        Self { values }
    }

    /// A signature clustered around `self`: each component is offset by a
    /// uniform draw from `[-variance, variance]` and clamped to `[-1, 1]`.
    /// A variance of zero returns `self` unchanged.
    pub fn similar(&self, variance: f64, rng: &mut impl Rng) -> Self {
        let mut values = self.values;
        for value in values.iter_mut() {
            let delta = (rng.gen::<f64>() * 2.0 - 1.0) * variance;
            *value = (*value + delta).clamp(COMPONENT_MIN, COMPONENT_MAX);
        }
        Self { values }
    }

    /// Shifts every component by the same amount, clamping to `[-1, 1]`.
    pub fn shifted(&self, delta: f64) -> Self {
        let mut values = self.values;
        for value in values.iter_mut() {
            *value = (*value + delta).clamp(COMPONENT_MIN, COMPONENT_MAX);
        }
        Self { values }
    }

    pub fn values(&self) -> &[f64; DIMENSIONS] {
        &self.values
    }

    /// Component at `index`, or an error if `index >= DIMENSIONS`.
    pub fn get(&self, index: usize) -> Result<f64, SignatureError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SignatureError::IndexOutOfRange {
                index,
                dimensions: DIMENSIONS,
            })
    }

    pub fn value(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()]
    }

    pub fn temperature(&self) -> f64 {
        self.value(Dimension::Temperature)
    }

    pub fn hardness(&self) -> f64 {
        self.value(Dimension::Hardness)
    }

    pub fn wetness(&self) -> f64 {
        self.value(Dimension::Wetness)
    }

    pub fn luminosity(&self) -> f64 {
        self.value(Dimension::Luminosity)
    }

    pub fn weight(&self) -> f64 {
        self.value(Dimension::Weight)
    }

    pub fn conductivity(&self) -> f64 {
        self.value(Dimension::Conductivity)
    }

    pub fn volatility(&self) -> f64 {
        self.value(Dimension::Volatility)
    }

    pub fn resonance(&self) -> f64 {
        self.value(Dimension::Resonance)
    }

    /// Largest possible distance between two in-range signatures:
    /// `sqrt(DIMENSIONS * 2^2)`.
    pub fn max_distance() -> f64 {
        let width = COMPONENT_MAX - COMPONENT_MIN;
        (DIMENSIONS as f64 * width * width).sqrt()
    }

    /// Euclidean distance over all components.
    pub fn distance(&self, other: &Signature) -> f64 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// `1 - min(distance / max_distance, 1)`: 1 for identical signatures, 0
    /// for maximally different ones, never negative.
    pub fn similarity(&self, other: &Signature) -> f64 {
        1.0 - (self.distance(other) / Self::max_distance()).min(1.0)
    }

    /// Mean absolute component value, in `[0, 1]` for in-range signatures.
    pub fn intensity(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum::<f64>() / DIMENSIONS as f64
    }

    /// Descriptor words of every component crossing a threshold, in index order.
    pub fn descriptors(&self, high: f64, low: f64) -> Vec<&'static str> {
        Dimension::ALL
            .iter()
            .filter_map(|dim| dim.descriptor_for(self.value(*dim), high, low))
            .collect()
    }

    /// Descriptor of the first component (in index order) crossing a threshold.
    pub fn first_descriptor(&self, high: f64, low: f64) -> Option<&'static str> {
        Dimension::ALL
            .iter()
            .find_map(|dim| dim.descriptor_for(self.value(*dim), high, low))
    }

    /// Descriptor of the component furthest from zero, if it crosses a threshold.
    pub fn dominant_descriptor(&self, high: f64, low: f64) -> Option<&'static str> {
        let strongest = Dimension::ALL
            .iter()
            .copied()
            .max_by(|a, b| self.value(*a).abs().total_cmp(&self.value(*b).abs()))?;
        strongest.descriptor_for(self.value(strongest), high, low)
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Index<Dimension> for Signature {
    type Output = f64;

    fn index(&self, dimension: Dimension) -> &f64 {
        &self.values[dimension.index()]
    }
}

impl TryFrom<&[f64]> for Signature {
    type Error = SignatureError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<Vec<f64>> for Signature {
    type Error = SignatureError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(&values)
    }
}

impl From<[f64; DIMENSIONS]> for Signature {
    fn from(values: [f64; DIMENSIONS]) -> Self {
        Self::from_array(values)
    }
}
