/// A slot of a padded sequence, where `None` is the sentinel placed before the first element.
pub type Slot<'a, T> = Option<&'a T>;

/// Prepends `n - 1` sentinels to `seq`, so that the padded sequence has
/// exactly `seq.len()` windows of size `n`.
pub fn pad<T>(seq: &[T], n: usize) -> Vec<Slot<'_, T>> {
    debug_assert!(n >= 1);
    let mut padded = Vec::with_capacity(seq.len() + n - 1);
    padded.resize(n - 1, None);
    padded.extend(seq.iter().map(Some));
    padded
}

pub struct GramIter<'a, T> {
    slots: &'a [T],
    gram_size: usize,
    position: usize,
}

impl<'a, T> GramIter<'a, T> {
    pub fn new(slots: &'a [T], gram_size: usize) -> Self {
        Self {
            slots,
            gram_size,
            position: 0,
        }
    }
}

impl<'a, T> Iterator for GramIter<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.slots.len() < self.position + self.gram_size {
            return None;
        }
        let gram = &self.slots[self.position..self.position + self.gram_size];
        self.position += 1;
        Some(gram)
    }
}

/// Fraction of mismatched slots between two grams of the same size.
///
/// A sentinel against an element counts as a mismatch. Slots where both grams
/// hold a sentinel are excluded from the denominator.
pub fn mismatch_ratio<T, F>(x: &[Slot<T>], y: &[Slot<T>], eq: &F) -> f64
where
    F: Fn(&T, &T) -> bool,
{
    debug_assert_eq!(x.len(), y.len());
    let mut cost = 0;
    let mut effective = x.len();
    for (a, b) in x.iter().zip(y.iter()) {
        match (a, b) {
            (Some(a), Some(b)) => {
                if !eq(a, b) {
                    cost += 1;
                }
            }
            (None, None) => effective -= 1,
            _ => cost += 1,
        }
    }
    // At least the last slot of a padded window holds an element.
    debug_assert!(effective > 0);
    cost as f64 / effective as f64
}
