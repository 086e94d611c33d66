//! In-place stepping of a digit slice through its arrangements
//!
//! Slices are stored least-significant digit first, while arrangements
//! are ordered by the numeric reading of the digits, where the most
//! significant position is the strongest. The classic pivot/suffix
//! "next permutation" algorithm therefore runs mirrored over the
//! storage order: the reading's suffix is the slice's prefix.

/// Advance `digits` to the arrangement next in increasing numeric order.
///
/// Returns `false`, without touching the slice, when the arrangement
/// is already the greatest one.
pub(crate) fn next_arrangement(digits: &mut [u8]) -> bool {
    // lowest index whose digit exceeds its more significant neighbor;
    // the prefix below it is the reading's longest non-increasing suffix
    let boundary = match find_storage_boundary(digits, |low, high| low > high) {
        Some(i) => i,
        None => return false,
    };
    let pivot = boundary + 1;

    // smallest index holding a digit greater than the pivot digit;
    // digits[boundary] qualifies, so the search cannot miss
    let successor = (0..boundary).find(|&j| digits[j] > digits[pivot]).unwrap_or(boundary);

    digits.swap(successor, pivot);
    digits[..pivot].reverse();
    true
}

/// Step `digits` back to the arrangement previous in numeric order.
///
/// Returns `false`, without touching the slice, when the arrangement
/// is already the smallest one.
pub(crate) fn prev_arrangement(digits: &mut [u8]) -> bool {
    let boundary = match find_storage_boundary(digits, |low, high| low < high) {
        Some(i) => i,
        None => return false,
    };
    let pivot = boundary + 1;

    let successor = (0..boundary).find(|&j| digits[j] < digits[pivot]).unwrap_or(boundary);

    digits.swap(successor, pivot);
    digits[..pivot].reverse();
    true
}

/// Lowest index `i` where `stop(digits[i], digits[i + 1])` holds.
fn find_storage_boundary<F>(digits: &[u8], stop: F) -> Option<usize>
where
    F: Fn(u8, u8) -> bool,
{
    (0..digits.len().saturating_sub(1)).find(|&i| stop(digits[i], digits[i + 1]))
}



#[cfg(test)]
mod test_prev_arrangement {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($digit:literal),* ] => [ $($expected:literal),* ]; $stepped:literal) => {
            #[test]
            fn $name() {
                let mut digits = [ $($digit),* ];
                assert_eq!(prev_arrangement(&mut digits), $stepped);
                assert_eq!(digits, [ $($expected),* ]);
            }
        };
    }

    impl_case!(case_321_to_312: [1, 2, 3] => [2, 1, 3]; true);
    impl_case!(case_312_to_231: [2, 1, 3] => [1, 3, 2]; true);
    impl_case!(case_213_to_132: [3, 1, 2] => [2, 3, 1]; true);
    impl_case!(case_123_exhausted: [3, 2, 1] => [3, 2, 1]; false);

    impl_case!(case_single_digit_exhausted: [9] => [9]; false);

    #[test]
    fn round_trip_through_every_arrangement() {
        let mut forward = [9, 0, 5, 2]; // reading 2509
        let start = forward;

        let mut steps = 0;
        while next_arrangement(&mut forward) {
            steps += 1;
        }
        for _ in 0..steps {
            assert!(prev_arrangement(&mut forward));
        }
        assert_eq!(forward, start);
    }
}
