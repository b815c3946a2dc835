//! Exactly-rounded floating point summation

/// Sum `values` rounded once from the exact result (Shewchuk partials with
/// a round-half-even fix-up, as in `math.fsum`).
///
/// Inputs must be finite.
pub(crate) fn exact_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    // Non-overlapping partials, increasing magnitude
    let mut partials: Vec<f64> = Vec::new();

    for mut x in values {
        let mut i = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[i] = lo;
                i += 1;
            }
            x = hi;
        }
        partials.truncate(i);
        partials.push(x);
    }

    let Some(&top) = partials.last() else {
        return 0.0;
    };

    let mut idx = partials.len() - 1;
    let mut hi = top;
    let mut lo = 0.0;
    while idx > 0 {
        idx -= 1;
        let x = hi;
        let y = partials[idx];
        hi = x + y;
        let y_rounded = hi - x;
        lo = y - y_rounded;
        if lo != 0.0 {
            break;
        }
    }

    // Halfway case: the remaining partials decide the rounding direction
    if idx > 0
        && ((lo < 0.0 && partials[idx - 1] < 0.0) || (lo > 0.0 && partials[idx - 1] > 0.0))
    {
        let y = lo * 2.0;
        let x = hi + y;
        if y == x - hi {
            hi = x;
        }
    }

    hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sum() {
        assert_eq!(exact_sum(std::iter::empty::<f64>()), 0.0);
    }

    #[test]
    fn test_cancellation() {
        assert_eq!(exact_sum([1e100, 1.0, -1e100, 1e-100]), 1.0);
        assert_eq!(exact_sum([0.1; 10]), 1.0);
    }

    #[test]
    fn test_rounds_half_to_even() {
        // 80.1 + 79.8 + 80.1 lands exactly between two doubles
        assert_eq!(exact_sum([80.1, 79.8, 80.1]), 240.0);
        assert_eq!(exact_sum([2.8, 3.4, 2.2, 1.6]), 10.0);
    }
}
