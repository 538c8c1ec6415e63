use time::macros::date;
use time::{Date, Duration};

use crate::domain::index::{compute_index, parse_index, DatedDifferential, Method};

/// Differentials on consecutive dates, oldest first.
fn dated(values: &[f64]) -> Vec<DatedDifferential> {
    let start: Date = date!(2024 - 01 - 01);
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| DatedDifferential {
            date: start + Duration::days(i as i64),
            value,
        })
        .collect()
}

#[test]
fn empty_input_yields_no_index() {
    assert_eq!(compute_index(&[], Method::Usga), "");
    assert_eq!(compute_index(&[], Method::Roch), "");
}

#[test]
fn zero_differentials_are_placeholders_not_data() {
    assert_eq!(compute_index(&dated(&[0.0, 0.0, 0.0]), Method::Usga), "");
}

#[test]
fn three_equal_differentials_keep_the_marker() {
    // n = 3 still flags an insufficient sample under USGA (numToUse = 1).
    assert_eq!(compute_index(&dated(&[10.0, 10.0, 10.0]), Method::Usga), "9.6*");
}

#[test]
fn nine_differentials_average_the_best_three() {
    let records = dated(&[4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    assert_eq!(compute_index(&records, Method::Usga), "4.8");
}

#[test]
fn roch_applies_no_bias() {
    // n = 7 -> numToUse 5; average of [4..=8] = 6.0, published as-is.
    let records = dated(&[4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    assert_eq!(compute_index(&records, Method::Roch), "6.0");
}

#[test]
fn usga_window_drops_rounds_older_than_twenty() {
    // Oldest round is the only good one; with the window applied it is
    // ignored and the index comes from the twenty 10.0 rounds.
    let mut values = vec![1.0];
    values.extend(std::iter::repeat(10.0).take(20));
    assert_eq!(compute_index(&dated(&values), Method::Usga), "9.6");
}

#[test]
fn roch_window_is_eight() {
    // Nine rounds: the oldest (best) falls outside the window of 8.
    let values = [2.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0];
    // n = 8 -> numToUse 5, average of five 10.0s.
    assert_eq!(compute_index(&dated(&values), Method::Roch), "10.0");
}

#[test]
fn usga_index_is_capped_at_fifty_four() {
    let records = dated(&[100.0; 9]);
    assert_eq!(compute_index(&records, Method::Usga), "54.0");
}

#[test]
fn roch_index_is_capped_at_twenty_six() {
    let records = dated(&[40.0; 8]);
    assert_eq!(compute_index(&records, Method::Roch), "26.0");
}

#[test]
fn single_differential_is_marked_provisional() {
    assert_eq!(compute_index(&dated(&[10.0]), Method::Usga), "9.6*");
    assert_eq!(compute_index(&dated(&[10.0]), Method::Roch), "10.0*");
}

#[test]
fn parse_index_ignores_the_marker() {
    assert_eq!(parse_index("12.3"), Some(12.3));
    assert_eq!(parse_index("12.3*"), Some(12.3));
    assert_eq!(parse_index(""), None);
    assert_eq!(parse_index("*"), None);
}

#[test]
fn method_strings_fall_back_to_usga() {
    assert_eq!("usga".parse::<Method>(), Ok(Method::Usga));
    assert_eq!("roch".parse::<Method>(), Ok(Method::Roch));
    assert_eq!("ROCH".parse::<Method>(), Ok(Method::Roch));
    assert_eq!("ega".parse::<Method>(), Ok(Method::Usga));
    assert_eq!("".parse::<Method>(), Ok(Method::Usga));
}
