/// Trailing simple moving average aligned to `values`.
///
/// Entry `i` is the mean of `values[i + 1 - window..=i]`, or `None` while
/// fewer than `window` values are available. A zero window yields no values.
pub fn simple_moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|index| {
            if index + 1 < window {
                return None;
            }
            let start = index + 1 - window;
            let sum: f64 = values[start..=index].iter().sum();
            Some(sum / window as f64)
        })
        .collect()
}
