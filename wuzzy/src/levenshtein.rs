//! Weighted Levenshtein distance.
use crate::errors::{Result, WuzzyError};

/// Costs of the edit operations.
///
/// Every field defaults to 1, so a partial override only needs the fields it changes:
///
/// ```
/// use wuzzy::Weights;
///
/// let weights = Weights::default().substitution(2.);
/// assert_eq!(weights.deletion_cost(), 1.);
/// assert_eq!(weights.substitution_cost(), 2.);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    deletion: f64,
    insertion: f64,
    substitution: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            deletion: 1.,
            insertion: 1.,
            substitution: 1.,
        }
    }
}

impl Weights {
    /// Sets the deletion cost.
    pub const fn deletion(mut self, cost: f64) -> Self {
        self.deletion = cost;
        self
    }

    /// Sets the insertion cost.
    pub const fn insertion(mut self, cost: f64) -> Self {
        self.insertion = cost;
        self
    }

    /// Sets the substitution cost.
    pub const fn substitution(mut self, cost: f64) -> Self {
        self.substitution = cost;
        self
    }

    /// Gets the deletion cost.
    pub const fn deletion_cost(&self) -> f64 {
        self.deletion
    }

    /// Gets the insertion cost.
    pub const fn insertion_cost(&self) -> f64 {
        self.insertion
    }

    /// Gets the substitution cost.
    pub const fn substitution_cost(&self) -> f64 {
        self.substitution
    }

    fn is_valid(&self) -> bool {
        [self.deletion, self.insertion, self.substitution]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.)
    }
}

/// Levenshtein distance with weighted operations, normalized into a similarity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Levenshtein {
    weights: Weights,
}

impl Levenshtein {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `weights` - Operation costs (must be finite and non-negative).
    pub fn new(weights: Weights) -> Result<Self> {
        if !weights.is_valid() {
            return Err(WuzzyError::input("Weights must be finite and non-negative."));
        }
        Ok(Self { weights })
    }

    /// Gets the operation costs.
    pub const fn weights(&self) -> Weights {
        self.weights
    }

    /// Computes the normalized similarity with [`PartialEq`].
    pub fn similarity<T>(&self, a: &[T], b: &[T]) -> f64
    where
        T: PartialEq,
    {
        self.similarity_by(a, b, |x, y| x == y)
    }

    /// Computes `(max_len - distance) / max_len`, comparing elements with `eq`.
    ///
    /// When either sequence is empty, the length of the other one is returned as is,
    /// without normalization. Hence two empty sequences score 0, and the result is
    /// out of `[0,1]` for one empty sequence against one of two or more elements.
    /// Otherwise the score lies in `[0,1]` as long as the raw distance does not exceed
    /// the longer length, which holds for unit weights.
    pub fn similarity_by<T, F>(&self, a: &[T], b: &[T], eq: F) -> f64
    where
        F: Fn(&T, &T) -> bool,
    {
        if a.is_empty() {
            return b.len() as f64;
        }
        if b.is_empty() {
            return a.len() as f64;
        }
        let max_len = a.len().max(b.len()) as f64;
        (max_len - self.distance_by(a, b, eq)) / max_len
    }

    /// Computes the raw weighted distance with [`PartialEq`].
    pub fn distance<T>(&self, a: &[T], b: &[T]) -> f64
    where
        T: PartialEq,
    {
        self.distance_by(a, b, |x, y| x == y)
    }

    /// Computes the raw weighted distance, comparing elements with `eq`.
    ///
    /// The first row and column of the table hold plain element counts.
    pub fn distance_by<T, F>(&self, a: &[T], b: &[T], eq: F) -> f64
    where
        F: Fn(&T, &T) -> bool,
    {
        let Weights {
            deletion,
            insertion,
            substitution,
        } = self.weights;

        let mut prev: Vec<f64> = (0..=b.len()).map(|j| j as f64).collect();
        let mut curr = vec![0.; b.len() + 1];
        for (i, x) in a.iter().enumerate() {
            curr[0] = (i + 1) as f64;
            for (j, y) in b.iter().enumerate() {
                let cost = if eq(x, y) { 0. } else { substitution };
                curr[j + 1] = (curr[j] + deletion)
                    .min(prev[j + 1] + insertion)
                    .min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[b.len()]
    }
}

/// Computes the normalized Levenshtein similarity with unit weights and [`PartialEq`].
///
/// # Examples
///
/// ```
/// use wuzzy::{levenshtein, sequence};
///
/// let a = sequence::chars("DIXON");
/// let b = sequence::chars("DICKSONX");
/// assert_eq!(levenshtein(&a, &b), 4. / 8.);
/// ```
pub fn levenshtein<T>(a: &[T], b: &[T]) -> f64
where
    T: PartialEq,
{
    Levenshtein::default().similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::chars;

    #[test]
    fn test_literals() {
        let cases = [
            ("MARTHA", "MARHTA", 4. / 6.),
            ("DWAYNE", "DUANE", 4. / 6.),
            ("DIXON", "DICKSONX", 4. / 8.),
            ("JOE", "MATT", 0.),
            ("JOE", "JOE", 1.),
        ];
        for (a, b, expected) in cases {
            let (a, b) = (chars(a), chars(b));
            assert_eq!(levenshtein(&a, &b), expected);
            assert_eq!(levenshtein(&b, &a), expected);
        }
    }

    #[test]
    fn test_raw_distance() {
        let lev = Levenshtein::default();
        assert_eq!(lev.distance(&chars("kitten"), &chars("sitting")), 3.);
        assert_eq!(lev.distance(&chars("MARTHA"), &chars("MARHTA")), 2.);
        assert_eq!(lev.distance(&chars("ABC"), &chars("")), 3.);
        assert_eq!(lev.distance(&chars(""), &chars("")), 0.);
    }

    #[test]
    fn test_empty_is_not_normalized() {
        let empty: Vec<char> = vec![];
        assert_eq!(levenshtein(&empty, &empty), 0.);
        assert_eq!(levenshtein(&empty, &chars("ABC")), 3.);
        assert_eq!(levenshtein(&chars("AB"), &empty), 2.);
    }

    #[test]
    fn test_weights() {
        let a = chars("MARTHA");
        let b = chars("MARHTA");
        let lev = Levenshtein::new(Weights::default().substitution(2.)).unwrap();
        // The swap costs two either way.
        assert_eq!(lev.similarity(&a, &b), 4. / 6.);

        let a = chars("ABC");
        let b = chars("ABD");
        let lev = Levenshtein::new(Weights::default().substitution(0.5)).unwrap();
        assert_eq!(lev.distance(&a, &b), 0.5);
        assert_eq!(lev.similarity(&a, &b), 2.5 / 3.);
    }

    #[test]
    fn test_deletion_and_insertion_weights() {
        let a = chars("AB");
        let b = chars("A");
        let lev = Levenshtein::new(Weights::default().deletion(5.).insertion(0.25)).unwrap();
        assert_eq!(lev.distance(&a, &b), 0.25);
        assert_eq!(lev.distance(&b, &a), 2.);
    }

    #[test]
    fn test_custom_predicate() {
        let a = [('D', 1), ('I', 2), ('X', 3), ('O', 4), ('N', 5)];
        let b = [('d', 1), ('i', 2), ('c', 0), ('k', 0), ('s', 0), ('o', 4), ('n', 5), ('x', 0)];
        let lev = Levenshtein::default();
        let score = lev.similarity_by(&a, &b, |p, q| p.0.eq_ignore_ascii_case(&q.0));
        assert_eq!(score, 4. / 8.);
    }

    #[test]
    fn test_invalid_weights() {
        assert!(Levenshtein::new(Weights::default().deletion(-1.)).is_err());
        assert!(Levenshtein::new(Weights::default().insertion(f64::NAN)).is_err());
        assert!(Levenshtein::new(Weights::default().substitution(f64::INFINITY)).is_err());
        assert!(Levenshtein::new(Weights::default().substitution(0.)).is_ok());
    }
}
