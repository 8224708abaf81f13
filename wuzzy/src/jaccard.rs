//! Set-based similarities.
use std::hash::Hash;

use crate::errors::{Result, WuzzyError};
use crate::set::{intersection, union};

/// Computes the Jaccard index `|A ∩ B| / |A ∪ B|` of the distinct values in `a` and `b`.
///
/// # Errors
///
/// [`WuzzyError::Degenerate`] is returned when both sequences are empty.
///
/// # Examples
///
/// ```
/// use wuzzy::jaccard;
///
/// let a = ['a', 'b', 'c'];
/// let b = ['b', 'c', 'd'];
/// assert_eq!(jaccard(&a, &b).unwrap(), 0.5);
/// ```
pub fn jaccard<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: Hash + Eq,
{
    if a.is_empty() && b.is_empty() {
        return Err(WuzzyError::degenerate("Jaccard index is undefined for two empty sequences."));
    }
    let both = intersection(&[a, b]).len();
    let all = union(&[a, b]).len();
    Ok(both as f64 / all as f64)
}

/// Computes the Tanimoto coefficient `both / (|a| + |b| - both)`, where `both` is the number
/// of distinct values shared by `a` and `b`.
///
/// The lengths count repeated elements, so the result equals [`jaccard`] only when
/// neither sequence has duplicates.
///
/// # Errors
///
/// [`WuzzyError::Degenerate`] is returned when both sequences are empty.
pub fn tanimoto<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: Hash + Eq,
{
    if a.is_empty() && b.is_empty() {
        return Err(WuzzyError::degenerate(
            "Tanimoto coefficient is undefined for two empty sequences.",
        ));
    }
    let both = intersection(&[a, b]).len();
    Ok(both as f64 / (a.len() + b.len() - both) as f64)
}
