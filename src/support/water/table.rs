/// A property tabulated against temperature, with nearest-key lookup.
///
/// Entries must be sorted by ascending key.
#[derive(Debug)]
pub(super) struct PropertyTable {
    entries: &'static [(f64, f64)],
}

impl PropertyTable {
    pub(super) const fn new(entries: &'static [(f64, f64)]) -> Self {
        Self { entries }
    }

    /// Returns the value at the key nearest to `celsius`.
    ///
    /// Ties go to the lower key. Queries beyond either end return that end.
    pub(super) fn nearest(&self, celsius: f64) -> f64 {
        let entries = self.entries;
        let idx = entries.partition_point(|&(key, _)| key < celsius);

        if idx == 0 {
            return entries[0].1;
        }
        if idx == entries.len() {
            return entries[idx - 1].1;
        }

        let (lower_key, lower) = entries[idx - 1];
        let (upper_key, upper) = entries[idx];
        if (celsius - lower_key).abs() <= (upper_key - celsius).abs() {
            lower
        } else {
            upper
        }
    }
}
