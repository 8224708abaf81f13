//! Similarity and distance metrics over arbitrary sequences.
//!
//! Every metric takes two slices `&[T]` and returns one score. Jaro-Winkler,
//! Levenshtein and n-gram distance compare elements with [`PartialEq`] by default,
//! or with a caller-supplied predicate through their `*_by` methods.
//! Jaccard and Tanimoto treat sequences as sets of hashable values.
//!
//! Text is not converted implicitly; use [`sequence::chars`] at the boundary.
//!
//! ```
//! use wuzzy::{jarowinkler, levenshtein, ngram, sequence};
//!
//! let a = sequence::chars("DWAYNE");
//! let b = sequence::chars("DUANE");
//! assert!((jarowinkler(&a, &b) - 0.84).abs() < 1e-9);
//! assert!((levenshtein(&a, &b) - 4. / 6.).abs() < 1e-9);
//! assert!((ngram(&a, &b) - 0.583).abs() < 1e-3);
//! ```
#![deny(missing_docs)]

pub mod errors;
pub mod jaccard;
pub mod jarowinkler;
pub mod levenshtein;
pub mod ngram;
pub mod sequence;
pub mod set;

pub(crate) mod gram;

pub use errors::{Result, WuzzyError};
pub use jaccard::{jaccard, tanimoto};
pub use jarowinkler::{jarowinkler, JaroWinkler};
pub use levenshtein::{levenshtein, Levenshtein, Weights};
pub use ngram::{ngram, NGram};
