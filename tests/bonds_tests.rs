/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use covbond_rs::bonds::{get_bond_length, get_bond_order, is_bonded, BondError, DEFAULT_TOL};
use covbond_rs::{Site, Vector3D};
use rstest::rstest;

#[test]
fn test_get_bond_length_exact_orders() {
    assert_relative_eq!(get_bond_length("C", "C", 1.0, None).unwrap(), 1.54);
    assert_relative_eq!(get_bond_length("C", "C", 2.0, None).unwrap(), 1.34);
    assert_relative_eq!(get_bond_length("C", "C", 3.0, None).unwrap(), 1.2);
    assert_relative_eq!(get_bond_length("C", "H", 1.0, None).unwrap(), 1.08);
    assert_relative_eq!(get_bond_length("C", "H", 2.0, None).unwrap(), 0.95);
}

#[test]
fn test_get_bond_length_is_symmetric() {
    assert_relative_eq!(
        get_bond_length("H", "C", 1.0, None).unwrap(),
        get_bond_length("C", "H", 1.0, None).unwrap()
    );
    assert_relative_eq!(
        get_bond_length("n", "c", 2.0, None).unwrap(),
        get_bond_length("C", "N", 2.0, None).unwrap()
    );
}

#[test]
fn test_get_bond_length_untabulated_order() {
    // Between tabulated orders: the next stronger entry stands in
    assert_relative_eq!(get_bond_length("C", "C", 1.5, None).unwrap(), 1.34);
    assert_relative_eq!(get_bond_length("C", "C", 2.5, None).unwrap(), 1.2);
    // Beyond the tabulated maximum: the strongest entry stands in
    assert_relative_eq!(get_bond_length("C", "C", 4.0, None).unwrap(), 1.2);
    assert_relative_eq!(get_bond_length("H", "H", 3.0, None).unwrap(), 0.74);
}

#[test]
fn test_get_bond_length_untabulated_pair() {
    assert!(matches!(
        get_bond_length("C", "Br", 1.0, None),
        Err(BondError::NoBondData(_, _))
    ));
    // A supplied default seeds the order-1 reference
    assert_relative_eq!(get_bond_length("C", "Br", 1.0, Some(1.85)).unwrap(), 1.85);
}

#[rstest]
#[case(1.0, 3.0)]
#[case(1.2, 3.0)]
#[case(1.25, 2.642857142857143)]
#[case(1.34, 2.0)]
#[case(1.4, 1.7)]
#[case(1.54, 1.0)]
#[case(2.5, 0.0)]
#[case(9999.0, 0.0)]
fn test_carbon_carbon_bond_orders(#[case] distance: f64, #[case] expected: f64) {
    let order = get_bond_order("C", "C", distance, DEFAULT_TOL, None).unwrap();
    assert_relative_eq!(order, expected, epsilon = 1e-8);
}

#[test]
fn test_bond_order_with_default_length() {
    assert_relative_eq!(
        get_bond_order("C", "Br", 1.9, DEFAULT_TOL, Some(1.9)).unwrap(),
        1.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        get_bond_order("C", "Br", 2.0, DEFAULT_TOL, Some(1.9)).unwrap(),
        0.7368421052631575,
        epsilon = 1e-8
    );
    assert_relative_eq!(
        get_bond_order("C", "Br", 1.9, 0.5, Some(1.9)).unwrap(),
        1.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        get_bond_order("C", "Br", 2.0, 0.5, Some(1.9)).unwrap(),
        0.894736842105263,
        epsilon = 1e-8
    );
}

#[test]
fn test_bond_order_untabulated_pair() {
    assert!(matches!(
        get_bond_order("C", "Br", 1.9, DEFAULT_TOL, None),
        Err(BondError::NoBondData(_, _))
    ));
}

#[test]
fn test_nitrogen_nitrogen_double_bond() {
    assert_relative_eq!(
        get_bond_order("N", "N", 1.25, DEFAULT_TOL, None).unwrap(),
        2.0,
        epsilon = 1e-8
    );
}

#[test]
fn test_bond_order_is_monotone_in_distance() {
    let mut previous = f64::INFINITY;
    let mut distance = 0.8;
    while distance < 3.0 {
        let order = get_bond_order("C", "C", distance, DEFAULT_TOL, None).unwrap();
        assert!(
            order <= previous + 1e-9,
            "order increased from {} to {} at distance {}",
            previous,
            order,
            distance
        );
        previous = order;
        distance += 0.01;
    }
}

#[test]
fn test_order_length_round_trip() {
    // An exactly tabulated length estimates back to its integer order, and
    // that order maps back to the tabulated length
    for (order, length) in [(1.0, 1.54), (2.0, 1.34), (3.0, 1.2)] {
        let estimated = get_bond_order("C", "C", length, DEFAULT_TOL, None).unwrap();
        assert_relative_eq!(estimated, order, epsilon = 1e-8);
        assert_relative_eq!(
            get_bond_length("C", "C", estimated, None).unwrap(),
            length,
            epsilon = 1e-8
        );
    }
}

#[test]
fn test_is_bonded_boundaries() {
    let c = Site::new("C", Vector3D::origin()).unwrap();
    // Exactly at the order-1 reference length: bonded
    let at_reference = Site::new("H", Vector3D::new(0.0, 0.0, 1.08)).unwrap();
    assert!(is_bonded(&c, &at_reference, DEFAULT_TOL, None).unwrap());
    // At reference + 2*tol: not bonded
    let past_tolerance = Site::new("H", Vector3D::new(0.0, 0.0, 1.48)).unwrap();
    assert!(!is_bonded(&c, &past_tolerance, DEFAULT_TOL, None).unwrap());
}

#[test]
fn test_is_bonded_without_reference_scale() {
    let u = Site::new("U", Vector3D::origin()).unwrap();
    let h = Site::new("H", Vector3D::new(0.0, 0.0, 1.5)).unwrap();

    assert!(is_bonded(&u, &h, DEFAULT_TOL, None).is_err());
    assert!(is_bonded(&u, &h, DEFAULT_TOL, Some(2.0)).unwrap());
}
