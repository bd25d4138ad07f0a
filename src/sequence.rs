use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::slice_utils::{self, NegativeOffsets};

/// An owned sequence of integers, as read from the command line.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(pub Vec<i64>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn rotate(&mut self, offset: i64) -> Result<(), Error> {
        slice_utils::rotate_slice(&mut self.0, offset)
    }

    pub fn rotate_with(
        &mut self,
        offset: i64,
        policy: NegativeOffsets,
    ) -> Result<(), Error> {
        slice_utils::rotate_slice_with(&mut self.0, offset, policy)
    }

    pub fn reverse_range(&mut self, start: usize, end: usize) -> Result<(), Error> {
        slice_utils::reverse_range(&mut self.0, start, end)
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl AsRef<[i64]> for Sequence {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

impl AsMut<[i64]> for Sequence {
    fn as_mut(&mut self) -> &mut [i64] {
        &mut self.0
    }
}

/// `[1, 2, 3]`, or `1 2 3` with the alternate flag.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.0.iter().join(" "))
        } else {
            write!(f, "[{}]", self.0.iter().join(", "))
        }
    }
}

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.starts_with('[') {
            return serde_json::from_str(s)
                .map_err(|err| Error::ParseSequence(err.to_string()));
        }

        if s.is_empty() {
            return Ok(Self::default());
        }

        // Runs of whitespace are one separator, but every comma needs an
        // item on both sides
        let mut values = vec![];
        for (i, field) in s.split(',').enumerate() {
            let field = field.trim();
            if field.is_empty() {
                return Err(Error::ParseSequence(format!(
                    "empty item at position {i}"
                )));
            }

            for item in field.split_whitespace() {
                let value = item.parse::<i64>().map_err(|err| {
                    Error::ParseSequence(format!("{item:?}: {err}"))
                })?;
                values.push(value);
            }
        }

        Ok(Self(values))
    }
}
