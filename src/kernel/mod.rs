
// src/kernel/mod.rs

//! The numerical kernel of the crate.
//! This module provides the `Vector` value type and its arithmetic.

use std::fmt;

use nalgebra::DVector;

use crate::{Result, VectorError};

/// A fixed-dimension integer vector with value semantics.
///
/// Every derived value owns freshly allocated storage, so no operation
/// observable by a caller ever changes an existing `Vector`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    data: DVector<i64>,
}

impl Vector {
    /// Creates a vector holding `elements` in order.
    pub fn new(elements: Vec<i64>) -> Self {
        Vector {
            data: DVector::from_vec(elements),
        }
    }

    /// A vector of the given dimension with every element set to 0.
    pub fn zero(dimension: usize) -> Self {
        Self::create(dimension, 0)
    }

    /// A vector of the given dimension with every element set to `default_value`.
    pub fn create(dimension: usize, default_value: i64) -> Self {
        Vector {
            data: DVector::from_element(dimension, default_value),
        }
    }

    /// Like [`Vector::create`], for callers holding a signed count.
    ///
    /// A dimension that does not fit in `usize` (any negative one included)
    /// is rejected with [`VectorError::InvalidArgument`].
    pub fn try_create(dimension: i64, default_value: i64) -> Result<Self> {
        let dimension = usize::try_from(dimension).map_err(|_| {
            log::debug!("rejected vector creation with dimension {}", dimension);
            VectorError::InvalidArgument(format!(
                "dimension: out of range, got {}",
                dimension
            ))
        })?;
        Ok(Self::create(dimension, default_value))
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn elements(&self) -> &[i64] {
        self.data.as_slice()
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.elements().to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &i64> + '_ {
        self.data.iter()
    }

    /// Element-wise sum of `self` and `other`.
    ///
    /// `other` is required; `None` is rejected with
    /// [`VectorError::InvalidArgument`].
    pub fn add(&self, other: Option<&Vector>) -> Result<Vector> {
        let other = other.ok_or_else(|| {
            log::debug!("rejected addition without an operand");
            VectorError::InvalidArgument("other: operand is absent".to_string())
        })?;
        self.checked_add(other)
    }

    /// Element-wise sum of two vectors of equal dimension.
    ///
    /// A sum that does not fit in an `i64` fails with
    /// [`VectorError::Overflow`] naming the first such index.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        if self.dimension() != other.dimension() {
            log::debug!(
                "rejected addition of dimension {} to dimension {}",
                other.dimension(),
                self.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        let sum = self.data.zip_map(&other.data, i64::checked_add);
        if let Some(index) = sum.iter().position(Option::is_none) {
            log::debug!("rejected addition overflowing at index {}", index);
            return Err(VectorError::Overflow { index });
        }
        Ok(Vector {
            data: sum.map(|e| e.unwrap_or_default()),
        })
    }

    /// Euclidean length: the square root of the sum of squared elements.
    pub fn length(&self) -> f64 {
        self.data.map(|e| e as f64).norm()
    }

    /// Structural equality; an absent value is never equal.
    pub fn equals(&self, other: Option<&Vector>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, ")")
    }
}

impl From<Vec<i64>> for Vector {
    fn from(elements: Vec<i64>) -> Self {
        Vector::new(elements)
    }
}

impl From<&[i64]> for Vector {
    fn from(elements: &[i64]) -> Self {
        Vector::new(elements.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Vector {
    fn from(elements: [i64; N]) -> Self {
        Vector::new(elements.to_vec())
    }
}

impl FromIterator<i64> for Vector {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}
