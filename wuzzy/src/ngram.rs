//! N-gram edit distance.
use crate::errors::{Result, WuzzyError};
use crate::gram::{self, GramIter};

/// Default gram size.
pub const DEFAULT_GRAM_SIZE: usize = 2;

/// N-gram edit distance normalized into a similarity, following Lucene's `NGramDistance`.
///
/// Sequences are compared as series of overlapping grams, where the leading grams
/// are padded with sentinels. Two grams are substituted at the cost of the fraction
/// of their mismatched slots, so small perturbations score more smoothly than with
/// the plain Levenshtein distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NGram {
    gram_size: usize,
}

impl Default for NGram {
    fn default() -> Self {
        Self {
            gram_size: DEFAULT_GRAM_SIZE,
        }
    }
}

impl NGram {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `gram_size` - Number of elements in a gram (must be more than 0).
    pub fn new(gram_size: usize) -> Result<Self> {
        if gram_size == 0 {
            return Err(WuzzyError::input("Gram size must not be 0."));
        }
        Ok(Self { gram_size })
    }

    /// Gets the gram size.
    pub const fn gram_size(&self) -> usize {
        self.gram_size
    }

    /// Computes the similarity in `[0,1]` with [`PartialEq`].
    pub fn similarity<T>(&self, a: &[T], b: &[T]) -> f64
    where
        T: PartialEq,
    {
        self.similarity_by(a, b, |x, y| x == y)
    }

    /// Computes the similarity in `[0,1]`, comparing elements with `eq`.
    ///
    /// Two empty sequences score 1, and one empty sequence against a non-empty one scores 0.
    /// If either sequence is shorter than the gram size, the ratio of equal elements at
    /// the same positions to the longer length is returned.
    pub fn similarity_by<T, F>(&self, a: &[T], b: &[T], eq: F) -> f64
    where
        F: Fn(&T, &T) -> bool,
    {
        let n = self.gram_size;
        if a.is_empty() || b.is_empty() {
            return if a.len() == b.len() { 1. } else { 0. };
        }
        let max_len = a.len().max(b.len()) as f64;
        if a.len() < n || b.len() < n {
            let same = a.iter().zip(b.iter()).filter(|&(x, y)| eq(x, y)).count();
            return same as f64 / max_len;
        }

        let padded_a = gram::pad(a, n);
        let padded_b = gram::pad(b, n);
        let grams_a: Vec<_> = GramIter::new(&padded_a, n).collect();

        let mut prev: Vec<f64> = (0..=a.len()).map(|i| i as f64).collect();
        let mut curr = vec![0.; a.len() + 1];
        for (j, gram_b) in GramIter::new(&padded_b, n).enumerate() {
            curr[0] = (j + 1) as f64;
            for (i, &gram_a) in grams_a.iter().enumerate() {
                let cost = gram::mismatch_ratio(gram_a, gram_b, &eq);
                curr[i + 1] = (curr[i] + 1.).min(prev[i + 1] + 1.).min(prev[i] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        1. - prev[a.len()] / max_len
    }
}

/// Computes the bigram similarity with [`PartialEq`].
///
/// # Examples
///
/// ```
/// use wuzzy::{ngram, sequence};
///
/// let a = sequence::chars("MARTHA");
/// let b = sequence::chars("MARHTA");
/// assert!((ngram(&a, &b) - 0.667).abs() < 1e-3);
/// ```
pub fn ngram<T>(a: &[T], b: &[T]) -> f64
where
    T: PartialEq,
{
    NGram::default().similarity(a, b)
}
