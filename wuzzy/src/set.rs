//! Set algebra over sequences.
//!
//! Elements are identified by value through [`Hash`] and [`Eq`]; custom equality
//! predicates do not apply here. To compare records by some of their fields,
//! map each record to a key first.
use std::hash::Hash;

use hashbrown::HashSet;

/// Computes the union of sequences, returning one representative per distinct value
/// in order of first occurrence.
///
/// # Examples
///
/// ```
/// use wuzzy::set::union;
///
/// let seqs = [vec![1, 2, 2], vec![3, 1]];
/// assert_eq!(union(&seqs), vec![&1, &2, &3]);
/// ```
pub fn union<'a, T, S>(sequences: &'a [S]) -> Vec<&'a T>
where
    T: Hash + Eq,
    S: AsRef<[T]>,
{
    let mut seen = HashSet::new();
    let mut results = vec![];
    for seq in sequences {
        for x in seq.as_ref() {
            if seen.insert(x) {
                results.push(x);
            }
        }
    }
    results
}

/// Computes the intersection of sequences, returning each distinct value that
/// appears in every sequence, in order of first occurrence in the first sequence.
/// No sequences give an empty intersection.
///
/// # Examples
///
/// ```
/// use wuzzy::set::intersection;
///
/// let seqs = ["MATT".as_bytes(), "JOE".as_bytes()];
/// assert!(intersection(&seqs).is_empty());
/// let seqs = ["ABBA".as_bytes(), "BAD".as_bytes(), "CAB".as_bytes()];
/// assert_eq!(intersection(&seqs), vec![&b'A', &b'B']);
/// ```
pub fn intersection<'a, T, S>(sequences: &'a [S]) -> Vec<&'a T>
where
    T: Hash + Eq,
    S: AsRef<[T]>,
{
    let (first, rest) = match sequences.split_first() {
        Some(split) => split,
        None => return vec![],
    };
    let mut results = union(std::slice::from_ref(first));
    for seq in rest {
        if results.is_empty() {
            break;
        }
        let members: HashSet<&T> = seq.as_ref().iter().collect();
        results.retain(|x| members.contains(x));
    }
    results
}
