use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Axis;

/// Immutable position of one image along every axis it varies on.
///
/// Axes that are not stored read as index 0. Derived coordinates are built
/// with [`Coords::with_index`] rather than by mutating an existing value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coords {
    indices: BTreeMap<Axis, usize>,
}

impl Coords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, usize)>,
        A: Into<Axis>,
    {
        Self {
            indices: pairs
                .into_iter()
                .map(|(axis, index)| (axis.into(), index))
                .collect(),
        }
    }

    pub fn index(&self, axis: &str) -> usize {
        self.get(axis).unwrap_or(0)
    }

    pub fn get(&self, axis: &str) -> Option<usize> {
        self.indices.get(axis).copied()
    }

    pub fn has_axis(&self, axis: &str) -> bool {
        self.indices.contains_key(axis)
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.indices.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Axis, usize)> {
        self.indices.iter().map(|(axis, index)| (axis, *index))
    }

    pub fn with_index(&self, axis: impl Into<Axis>, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.insert(axis.into(), index);
        Self { indices }
    }

    pub fn without_axis(&self, axis: &str) -> Self {
        let mut indices = self.indices.clone();
        indices.remove(axis);
        Self { indices }
    }

    /// Sum of per-axis index differences, treating absent axes as 0.
    pub fn distance(&self, other: &Coords) -> usize {
        self.axes()
            .chain(other.axes())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|axis| self.index(axis.name()).abs_diff(other.index(axis.name())))
            .sum()
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (position, (axis, index)) in self.indices.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{axis}={index}")?;
        }
        formatter.write_str("]")
    }
}

impl<A: Into<Axis>> FromIterator<(A, usize)> for Coords {
    fn from_iter<I: IntoIterator<Item = (A, usize)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
