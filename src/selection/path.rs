use crate::error::{Error, ErrorType};
use std::fmt;

/// The location of a node in a selection forest.
///
/// The first index selects a top-level field, every following index descends into the
/// sub-fields of the node selected so far. A path's length is hence one more than the depth of
/// the node it addresses. Paths are written as dot-separated indices, e.g. `0.2.1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub indices: Vec<usize>,
}

impl FieldPath {
    pub fn new(indices: Vec<usize>) -> Self {
        FieldPath { indices }
    }

    pub fn push(&mut self, index: usize) {
        self.indices.push(index)
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.indices.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The index of the addressed node within its parent's sub-fields.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// The path of the addressed node's parent. Top-level paths have an empty parent path.
    pub fn parent(&self) -> Option<FieldPath> {
        let (_, parent) = self.indices.split_last()?;
        Some(FieldPath::new(parent.to_vec()))
    }

    /// The path of the addressed node's sub-field at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> FieldPath {
        let mut path = self.clone();
        path.push(index);
        path
    }
}

impl From<Vec<usize>> for FieldPath {
    fn from(indices: Vec<usize>) -> Self {
        FieldPath { indices }
    }
}

impl From<&[usize]> for FieldPath {
    fn from(indices: &[usize]) -> Self {
        FieldPath {
            indices: indices.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for FieldPath {
    fn from(indices: [usize; N]) -> Self {
        FieldPath {
            indices: indices.to_vec(),
        }
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let indices = value
            .split('.')
            .map(|segment| {
                segment.trim().parse::<usize>().map_err(|_| {
                    Error::new(
                        format!("Invalid path segment {segment:?} in {value:?}"),
                        ErrorType::InvalidPath,
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { indices })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.indices
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<_>>()
                .join(".")
        )
    }
}
