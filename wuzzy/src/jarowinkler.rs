//! Jaro-Winkler similarity.
use crate::errors::{Result, WuzzyError};

/// Default threshold above which the Winkler prefix bonus is applied.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Upper bound of the prefix scaling factor.
const PREFIX_WEIGHT: f64 = 0.1;

/// Jaro-Winkler similarity, following the matching scheme of Lucene's `JaroWinklerDistance`.
///
/// Matching is greedy: each element of the shorter sequence takes the first
/// unmatched equal element of the longer one within the window.
/// The common prefix that drives the bonus is not capped at four elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JaroWinkler {
    threshold: f64,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl JaroWinkler {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Jaro score from which the prefix bonus is added (must be in `[0,1]`).
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0. ..=1.).contains(&threshold) {
            return Err(WuzzyError::input("Threshold must be in the range of [0,1]."));
        }
        Ok(Self { threshold })
    }

    /// Gets the threshold.
    pub const fn threshold(&self) -> f64 {
        self.threshold
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
    /// Two empty sequences have no matches and score 0.
    pub fn similarity_by<T, F>(&self, a: &[T], b: &[T], eq: F) -> f64
    where
        F: Fn(&T, &T) -> bool,
    {
        let (max, min) = if a.len() > b.len() { (a, b) } else { (b, a) };
        let range = (max.len() / 2).saturating_sub(1);

        let mut min_flags = vec![false; min.len()];
        let mut max_flags = vec![false; max.len()];
        let mut matches = 0;
        for (mi, x) in min.iter().enumerate() {
            let lo = mi.saturating_sub(range);
            let hi = (mi + range + 1).min(max.len());
            for xi in lo..hi {
                if !max_flags[xi] && eq(x, &max[xi]) {
                    min_flags[mi] = true;
                    max_flags[xi] = true;
                    matches += 1;
                    break;
                }
            }
        }
        if matches == 0 {
            return 0.;
        }

        let matched_min = min.iter().zip(&min_flags).filter(|&(_, &f)| f);
        let matched_max = max.iter().zip(&max_flags).filter(|&(_, &f)| f);
        let transpositions = matched_min
            .zip(matched_max)
            .filter(|&((x, _), (y, _))| !eq(x, y))
            .count();

        let prefix = a
            .iter()
            .zip(b.iter())
            .take_while(|&(x, y)| eq(x, y))
            .count();

        let m = matches as f64;
        let t = transpositions as f64 / 2.;
        let j = (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.;
        if j < self.threshold {
            j
        } else {
            let weight = PREFIX_WEIGHT.min(1. / max.len() as f64);
            j + weight * prefix as f64 * (1. - j)
        }
    }
}

/// Computes the Jaro-Winkler similarity with the default threshold 0.7 and [`PartialEq`].
///
/// # Examples
///
/// ```
/// use wuzzy::{jarowinkler, sequence};
///
/// let a = sequence::chars("MARTHA");
/// let b = sequence::chars("MARHTA");
/// assert!((jarowinkler(&a, &b) - 0.961).abs() < 1e-3);
/// ```
pub fn jarowinkler<T>(a: &[T], b: &[T]) -> f64
where
    T: PartialEq,
{
    JaroWinkler::default().similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::chars;

    fn round3(x: f64) -> f64 {
        (x * 1000.).round() / 1000.
    }

    #[derive(Debug)]
    struct Record {
        x: char,
        y: u32,
    }

    fn records(xs: &str, ys: &[u32]) -> Vec<Record> {
        xs.chars()
            .zip(ys.iter())
            .map(|(x, &y)| Record { x, y })
            .collect()
    }

    #[test]
    fn test_literals() {
        let cases = [
            ("MARTHA", "MARHTA", 0.961),
            ("DWAYNE", "DUANE", 0.840),
            ("DIXON", "DICKSONX", 0.813),
            ("JOE", "MATT", 0.),
            ("JOE", "JOE", 1.),
        ];
        for (a, b, expected) in cases {
            let (a, b) = (chars(a), chars(b));
            assert_eq!(round3(jarowinkler(&a, &b)), expected);
            assert_eq!(round3(jarowinkler(&b, &a)), expected);
        }
    }

    #[test]
    fn test_exact_value() {
        let a = chars("MARTHA");
        let b = chars("MARHTA");
        let j = (1. + 1. + 5. / 6.) / 3.;
        let expected = j + 0.1 * 3. * (1. - j);
        assert!((jarowinkler(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<char> = vec![];
        assert_eq!(jarowinkler(&empty, &empty), 0.);
        assert_eq!(jarowinkler(&empty, &chars("A")), 0.);
        assert_eq!(jarowinkler(&chars("A"), &empty), 0.);
    }

    #[test]
    fn test_below_threshold() {
        let a = chars("DWAYNE");
        let b = chars("DUANE");
        let jw = JaroWinkler::new(0.9).unwrap();
        let j = (4. / 6. + 4. / 5. + 1.) / 3.;
        assert!((jw.similarity(&a, &b) - j).abs() < 1e-12);
    }

    #[test]
    fn test_short_bonus_weight() {
        // 1/2 exceeds 0.1, so the weight stays at 0.1.
        let a = chars("A");
        let b = chars("AA");
        assert_eq!(round3(jarowinkler(&a, &b)), 0.85);
    }

    #[test]
    fn test_long_bonus_weight() {
        // With 12 elements the weight is 1/12 and the whole 11-element prefix counts.
        let a = chars("ABCDEFGHIJKX");
        let b = chars("ABCDEFGHIJKY");
        let j = 17. / 18.;
        let expected = j + 11. / 12. * (1. - j);
        let score = jarowinkler(&a, &b);
        assert!((score - expected).abs() < 1e-12);
        assert_eq!(round3(score), 0.995);
        assert_eq!(round3(jarowinkler(&b, &a)), 0.995);
        assert!(score <= 1.);
    }

    #[test]
    fn test_custom_predicate() {
        let a = records("DIXON", &[0; 5]);
        let b = records("DICKSONX", &[0; 8]);
        let jw = JaroWinkler::default();
        assert_eq!(round3(jw.similarity_by(&a, &b, |p, q| p.x == q.x)), 0.813);

        let a = records("MARTHA", &[1, 2, 3, 1, 2, 2]);
        let b = records("MARHTA", &[1, 2, 3, 2, 1, 2]);
        let score = jw.similarity_by(&a, &b, |p, q| p.x == q.x && p.y == q.y);
        assert_eq!(score, jarowinkler(&chars("MARTHA"), &chars("MARHTA")));
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(JaroWinkler::new(-0.1).is_err());
        assert!(JaroWinkler::new(1.5).is_err());
        assert!(JaroWinkler::new(f64::NAN).is_err());
        assert_eq!(JaroWinkler::new(0.).unwrap().threshold(), 0.);
    }
}
