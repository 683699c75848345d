//! Scalar-or-sequence inputs
//!
//! Every public entry point takes either one value or an ordered list of
//! values and answers in the same shape. A string is always one value.

use serde::{Deserialize, Serialize};

use crate::{Number, Value};

/// One value, or an ordered sequence of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Batch<T> {
    Scalar(T),
    Sequence(Vec<T>),
}

impl<T> Batch<T> {
    /// Apply `f` to every element, keeping the shape
    pub fn map<U, F>(self, mut f: F) -> Batch<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Batch::Scalar(v) => Batch::Scalar(f(v)),
            Batch::Sequence(items) => Batch::Sequence(items.into_iter().map(f).collect()),
        }
    }

    /// Apply a fallible `f` to every element, stopping at the first error
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Batch<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        match self {
            Batch::Scalar(v) => f(v).map(Batch::Scalar),
            Batch::Sequence(items) => items
                .into_iter()
                .map(f)
                .collect::<Result<Vec<U>, E>>()
                .map(Batch::Sequence),
        }
    }

    /// Number of elements (a scalar counts as one)
    pub fn len(&self) -> usize {
        match self {
            Batch::Scalar(_) => 1,
            Batch::Sequence(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Batch::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Batch::Scalar(v) => Some(v),
            Batch::Sequence(_) => None,
        }
    }

    pub fn into_scalar(self) -> Option<T> {
        match self {
            Batch::Scalar(v) => Some(v),
            Batch::Sequence(_) => None,
        }
    }

    /// Flatten into a vector (a scalar becomes a one-element vector)
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Batch::Scalar(v) => vec![v],
            Batch::Sequence(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Batch::Scalar(v) => std::slice::from_ref(v).iter(),
            Batch::Sequence(items) => items.iter(),
        }
    }
}

impl<T> FromIterator<T> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Batch::Sequence(iter.into_iter().collect())
    }
}

// ========== Numeric batches ==========

impl From<f64> for Batch<f64> {
    fn from(v: f64) -> Self {
        Batch::Scalar(v)
    }
}

impl From<i64> for Batch<f64> {
    fn from(v: i64) -> Self {
        Batch::Scalar(v as f64)
    }
}

impl From<Vec<f64>> for Batch<f64> {
    fn from(v: Vec<f64>) -> Self {
        Batch::Sequence(v)
    }
}

impl From<&[f64]> for Batch<f64> {
    fn from(v: &[f64]) -> Self {
        Batch::Sequence(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Batch<f64> {
    fn from(v: [f64; N]) -> Self {
        Batch::Sequence(v.to_vec())
    }
}

// ========== Text batches ==========

impl From<&str> for Batch<String> {
    fn from(s: &str) -> Self {
        Batch::Scalar(s.to_string())
    }
}

impl From<String> for Batch<String> {
    fn from(s: String) -> Self {
        Batch::Scalar(s)
    }
}

impl From<Vec<&str>> for Batch<String> {
    fn from(v: Vec<&str>) -> Self {
        Batch::Sequence(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Batch<String> {
    fn from(v: Vec<String>) -> Self {
        Batch::Sequence(v)
    }
}

// ========== Value batches ==========

impl From<Value> for Batch<Value> {
    fn from(v: Value) -> Self {
        Batch::Scalar(v)
    }
}

impl From<Number> for Batch<Value> {
    fn from(n: Number) -> Self {
        Batch::Scalar(Value::Number(n))
    }
}

impl From<f64> for Batch<Value> {
    fn from(v: f64) -> Self {
        Batch::Scalar(v.into())
    }
}

impl From<i64> for Batch<Value> {
    fn from(v: i64) -> Self {
        Batch::Scalar(v.into())
    }
}

impl From<&str> for Batch<Value> {
    fn from(s: &str) -> Self {
        Batch::Scalar(s.into())
    }
}

impl From<String> for Batch<Value> {
    fn from(s: String) -> Self {
        Batch::Scalar(s.into())
    }
}

impl From<Vec<Value>> for Batch<Value> {
    fn from(v: Vec<Value>) -> Self {
        Batch::Sequence(v)
    }
}

impl From<Vec<Number>> for Batch<Value> {
    fn from(v: Vec<Number>) -> Self {
        Batch::Sequence(v.into_iter().map(Value::Number).collect())
    }
}

impl From<Vec<f64>> for Batch<Value> {
    fn from(v: Vec<f64>) -> Self {
        Batch::Sequence(v.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<i64>> for Batch<Value> {
    fn from(v: Vec<i64>) -> Self {
        Batch::Sequence(v.into_iter().map(Value::from).collect())
    }
}

impl From<Number> for Batch<Number> {
    fn from(n: Number) -> Self {
        Batch::Scalar(n)
    }
}

impl From<Vec<Number>> for Batch<Number> {
    fn from(v: Vec<Number>) -> Self {
        Batch::Sequence(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_scalar() {
        let b: Batch<String> = "kg".into();
        assert!(b.is_scalar());
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_empty_sequence_keeps_shape() {
        let b: Batch<f64> = Vec::<f64>::new().into();
        let out = b.map(|x| x * 2.0);
        assert_eq!(out, Batch::Sequence(vec![]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_try_map_fail_fast() {
        let b: Batch<f64> = vec![1.0_f64, -1.0, 2.0].into();
        let mut seen = 0;
        let result: Result<Batch<f64>, String> = b.try_map(|x| {
            seen += 1;
            if x < 0.0 { Err(format!("negative: {}", x)) } else { Ok(x) }
        });
        assert_eq!(result.unwrap_err(), "negative: -1");
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_from_iterator() {
        let b: Batch<i32> = (1..=3).collect();
        assert_eq!(b.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_iter_scalar() {
        let b = Batch::Scalar(7);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![7]);
        assert_eq!(b.into_scalar(), Some(7));
    }
}
