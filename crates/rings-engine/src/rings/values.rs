use std::collections::BTreeMap;

use super::RingType;

/// Progress per ring. `1.0` is the goal; larger values overflow.
///
/// Iterates in ring order (Stand, Exercise, Move) regardless of insertion
/// order, so rendering the same values always issues the same draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityValues {
    values: BTreeMap<RingType, f32>,
}

impl ActivityValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, kind: RingType, value: f32) -> Self {
        self.insert(kind, value);
        self
    }

    /// Sets `kind` to `value`, returning the previous value.
    pub fn insert(&mut self, kind: RingType, value: f32) -> Option<f32> {
        self.values.insert(kind, value)
    }

    pub fn get(&self, kind: RingType) -> Option<f32> {
        self.values.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RingType, f32)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Builds values from ring names; names that are not a ring are skipped.
    pub fn from_named<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let mut values = Self::new();
        for (name, value) in pairs {
            match name.parse::<RingType>() {
                Ok(kind) => {
                    values.insert(kind, value);
                }
                Err(e) => log::debug!("{e}; ignoring"),
            }
        }
        values
    }
}

impl FromIterator<(RingType, f32)> for ActivityValues {
    fn from_iter<I: IntoIterator<Item = (RingType, f32)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}
