//! Scalar-or-array numeric fields.
//!
//! Every relation in this crate is defined elementwise, so callers can pass a
//! single value or an array of any shape.
//! A [`Field`] stores the values as an [`ndarray::ArrayD`] and remembers
//! whether it started out as a plain scalar, which decides whether outputs are
//! reported as scalars or arrays.
//!
//! Inputs are converted with [`IntoField`], which accepts `f64`, `Vec<f64>`,
//! `&[f64]`, and `ndarray` arrays of any dimension.
//! Complex inputs ([`Complex64`] scalars and arrays) are also accepted, but
//! only if every imaginary part is zero.
//!
//! ```
//! use ndarray::array;
//! use twine_aero::support::field::{Field, IntoField};
//!
//! let scalar = 1.4_f64.into_field().unwrap();
//! assert!(scalar.is_scalar());
//! assert_eq!(scalar.as_scalar(), Some(1.4));
//!
//! let grid = array![[0.5_f64, 1.0], [1.5, 2.0]].into_field().unwrap();
//! assert_eq!(grid.shape(), &[2, 2]);
//! assert_eq!(grid.as_scalar(), None);
//! ```

use ndarray::{Array, Array1, ArrayD, Dimension, arr0};
use num_complex::Complex64;

/// A real-valued scalar or array of any shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    values: ArrayD<f64>,
    scalar: bool,
}

impl Field {
    /// Creates a scalar field.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            values: arr0(value).into_dyn(),
            scalar: true,
        }
    }

    /// Creates an array field from an `ndarray` array of any dimension.
    ///
    /// The field is treated as an array even if it holds a single element.
    #[must_use]
    pub fn from_array<D: Dimension>(values: Array<f64, D>) -> Self {
        Self {
            values: values.into_dyn(),
            scalar: false,
        }
    }

    /// Wraps computed values, preserving the scalar flag of the inputs.
    pub(crate) fn from_parts(values: ArrayD<f64>, scalar: bool) -> Self {
        debug_assert!(!scalar || values.len() == 1);
        Self { values, scalar }
    }

    /// Returns `true` if this field was created from a scalar.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.scalar
    }

    /// Returns the value of a scalar field, or `None` for an array field.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        if self.scalar {
            self.values.first().copied()
        } else {
            None
        }
    }

    /// Returns the array shape, which is empty for a scalar.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the underlying values.
    #[must_use]
    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    /// Consumes the field and returns the underlying values.
    #[must_use]
    pub fn into_values(self) -> ArrayD<f64> {
        self.values
    }

    /// Iterates over the values in logical (row-major) order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// An element with a nonzero imaginary part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonRealValue {
    /// Position of the element in logical (row-major) order.
    pub index: usize,
    pub value: Complex64,
}

/// Conversion into a real-valued [`Field`].
pub trait IntoField {
    /// Converts `self` into a [`Field`].
    ///
    /// # Errors
    ///
    /// Returns the first element with a nonzero imaginary part, if any.
    fn into_field(self) -> Result<Field, NonRealValue>;
}

impl IntoField for Field {
    fn into_field(self) -> Result<Field, NonRealValue> {
        Ok(self)
    }
}

impl IntoField for &Field {
    fn into_field(self) -> Result<Field, NonRealValue> {
        Ok(self.clone())
    }
}

impl IntoField for f64 {
    fn into_field(self) -> Result<Field, NonRealValue> {
        Ok(Field::scalar(self))
    }
}

impl IntoField for Complex64 {
    fn into_field(self) -> Result<Field, NonRealValue> {
        if self.im == 0.0 {
            Ok(Field::scalar(self.re))
        } else {
            Err(NonRealValue {
                index: 0,
                value: self,
            })
        }
    }
}

impl IntoField for Vec<f64> {
    fn into_field(self) -> Result<Field, NonRealValue> {
        Ok(Field::from_array(Array1::from(self)))
    }
}

impl IntoField for &[f64] {
    fn into_field(self) -> Result<Field, NonRealValue> {
        Ok(Field::from_array(Array1::from(self.to_vec())))
    }
}

impl<D: Dimension> IntoField for Array<f64, D> {
    fn into_field(self) -> Result<Field, NonRealValue> {
        Ok(Field::from_array(self))
    }
}

impl<D: Dimension> IntoField for Array<Complex64, D> {
    fn into_field(self) -> Result<Field, NonRealValue> {
        if let Some((index, value)) = self.iter().enumerate().find(|(_, z)| z.im != 0.0) {
            return Err(NonRealValue {
                index,
                value: *value,
            });
        }
        Ok(Field::from_array(self.map(|z| z.re)))
    }
}
