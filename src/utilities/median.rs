use crate::utilities::stat_element::StatElement;

/// Returns the median of the given values.
///
/// Odd length returns the middle value of the sorted sequence, even length
/// returns the mean of the two middle values. An empty sequence yields NaN.
///
/// Ordering uses [`f64::total_cmp`], so NaN inputs sort to the ends rather
/// than poisoning the sort.
pub fn median_of<A, I>(values: I) -> f64
where
    A: StatElement,
    I: IntoIterator<Item = A>,
{
    let mut sorted: Vec<f64> = values.into_iter().map(StatElement::to_f64).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }

    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
