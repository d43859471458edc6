use neardup::choose;

#[test]
fn choose_3_from_6_matches_expected_order() {
    let population: Vec<u64> = (0..6).collect();
    let actual = choose(&population, 3).unwrap();
    assert_eq!(actual.len(), 20);
    assert_eq!(actual[0], vec![0, 1, 2]);
    assert_eq!(actual[1], vec![0, 1, 3]);
    assert_eq!(actual[2], vec![0, 1, 4]);
    assert_eq!(actual[actual.len() - 1], vec![3, 4, 5]);
}

#[test]
fn choose_too_many_is_invalid_argument() {
    let population: Vec<u64> = (0..6).collect();
    assert!(choose(&population, 7).is_err());
}

#[test]
fn choose_zero_returns_single_empty_sequence() {
    let population: Vec<u64> = (0..6).collect();
    let actual = choose(&population, 0).unwrap();
    assert_eq!(actual.len(), 1);
    assert!(actual[0].is_empty());
}

#[test]
fn result_size_is_binomial_coefficient() {
    let population: Vec<char> = "abcdefg".chars().collect();
    let actual = choose(&population, 3).unwrap();
    // C(7, 3) = 35
    assert_eq!(actual.len(), 35);
    assert!(actual.iter().all(|combo| combo.len() == 3));
}
