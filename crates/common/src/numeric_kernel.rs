use super::error::Error;

/// Validates an edge weight returned by a weight function.
///
/// Negative, NaN and infinite values are rejected. Negative zero is normalised to
/// `0.0` so that distances compare by bit pattern.
pub fn checked_weight(edge: usize, weight: f64) -> Result<f64, Error> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidWeight { edge, weight });
    }

    if weight == 0.0 {
        return Ok(0.0);
    }

    Ok(weight)
}

/// Neumaier-compensated summation, used for reported cycle weights.
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0f64;
    let mut compensation = 0.0f64;

    for value in values {
        let t = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - t) + value;
        } else {
            compensation += (value - t) + sum;
        }
        sum = t;
    }

    sum + compensation
}

#[cfg(test)]
mod numerical_kernel_tests {
    use super::*;

    #[test]
    fn accepts_positive_and_zero_weights() {
        assert_eq!(checked_weight(0, 2.5), Ok(2.5));
        assert_eq!(checked_weight(1, 0.0), Ok(0.0));
    }

    #[test]
    fn normalises_negative_zero() {
        let w = checked_weight(0, -0.0).unwrap();
        assert_eq!(w.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn rejects_negative_weight() {
        assert_eq!(
            checked_weight(3, -1.0),
            Err(Error::InvalidWeight {
                edge: 3,
                weight: -1.0
            })
        );
    }

    #[test]
    fn rejects_non_finite_weights() {
        assert!(checked_weight(0, f64::INFINITY).is_err());
        assert!(checked_weight(0, f64::NEG_INFINITY).is_err());
        assert!(checked_weight(0, f64::NAN).is_err());
    }

    #[test]
    fn compensated_sum_recovers_small_terms() {
        // Naive left-to-right summation loses both 1.0 terms.
        let values = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(compensated_sum(values), 2.0);
    }

    #[test]
    fn compensated_sum_of_nothing_is_zero() {
        assert_eq!(compensated_sum(std::iter::empty()), 0.0);
    }
}
