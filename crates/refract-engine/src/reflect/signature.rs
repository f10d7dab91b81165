//! Canonical parameter signatures
//!
//! Both shapes a signature can come from (a constructor's declared
//! parameter tuple and a factory function's type) are normalized into one
//! ordered [`Signature`] before anything inspects them. Default-argument
//! matching and wrapper metadata only ever see this form.

use std::fmt;

use refract_sdk::Type;

use super::accessor::Callable;
use super::param::ParamList;

/// Metadata of one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamInfo {
    /// Raw parameter type
    pub ty: Type,
    /// Taken by reference
    pub is_reference: bool,
    /// Referenced value is immutable
    pub is_const: bool,
}

/// Ordered parameter list of a constructor or factory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    params: Vec<ParamInfo>,
}

impl Signature {
    /// Signature of a declared parameter tuple
    pub fn of<Args: ParamList>() -> Self {
        Self {
            params: Args::params(),
        }
    }

    /// Signature of a callable
    pub fn of_callable<F: Callable<Args>, Args>(_callable: &F) -> Self {
        F::signature()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter metadata in order
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    /// Raw parameter types in order
    pub fn types(&self) -> Vec<Type> {
        self.params.iter().map(|p| p.ty).collect()
    }

    /// Per-parameter reference flags
    pub fn is_reference(&self) -> Vec<bool> {
        self.params.iter().map(|p| p.is_reference).collect()
    }

    /// Per-parameter const flags
    pub fn is_const(&self) -> Vec<bool> {
        self.params.iter().map(|p| p.is_const).collect()
    }

    /// The trailing parameters starting at `start` (empty past the end)
    pub fn suffix(&self, start: usize) -> &[ParamInfo] {
        self.params.get(start..).unwrap_or(&[])
    }

    /// Check whether the suffix starting at `start` has exactly the types in `shape`
    pub fn suffix_matches(&self, start: usize, shape: &[Type]) -> bool {
        let suffix = self.suffix(start);
        suffix.len() == shape.len() && suffix.iter().zip(shape).all(|(p, ty)| p.ty == *ty)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if param.is_reference {
                f.write_str("&")?;
            }
            f.write_str(param.ty.name())?;
        }
        f.write_str(")")
    }
}
