use renal_ccls::findings::Findings;
use renal_ccls::scores::CclsClass;
use renal_ccls::scores::ccls::{evaluate, evaluate_codes};

/// All 144 valid input combinations and their expected class, in
/// (t2, enhancement, fat, sei, ader, diffusion, class) order.
const TABLE: [(i64, i64, i64, i64, i64, i64, u8); 144] = [
    (0, 0, 0, 0, 0, 0, 1), (0, 0, 0, 0, 0, 1, 1), (0, 0, 0, 0, 1, 0, 1), (0, 0, 0, 0, 1, 1, 1),
    (0, 0, 0, 1, 0, 0, 1), (0, 0, 0, 1, 0, 1, 1), (0, 0, 0, 1, 1, 0, 1), (0, 0, 0, 1, 1, 1, 1),
    (0, 0, 1, 0, 0, 0, 3), (0, 0, 1, 0, 0, 1, 3), (0, 0, 1, 0, 1, 0, 3), (0, 0, 1, 0, 1, 1, 3),
    (0, 0, 1, 1, 0, 0, 3), (0, 0, 1, 1, 0, 1, 3), (0, 0, 1, 1, 1, 0, 3), (0, 0, 1, 1, 1, 1, 3),
    (0, 1, 0, 0, 0, 0, 3), (0, 1, 0, 0, 0, 1, 3), (0, 1, 0, 0, 1, 0, 3), (0, 1, 0, 0, 1, 1, 3),
    (0, 1, 0, 1, 0, 0, 3), (0, 1, 0, 1, 0, 1, 3), (0, 1, 0, 1, 1, 0, 3), (0, 1, 0, 1, 1, 1, 3),
    (0, 1, 1, 0, 0, 0, 3), (0, 1, 1, 0, 0, 1, 3), (0, 1, 1, 0, 1, 0, 3), (0, 1, 1, 0, 1, 1, 3),
    (0, 1, 1, 1, 0, 0, 3), (0, 1, 1, 1, 0, 1, 3), (0, 1, 1, 1, 1, 0, 3), (0, 1, 1, 1, 1, 1, 3),
    (0, 2, 0, 0, 0, 0, 4), (0, 2, 0, 0, 0, 1, 3), (0, 2, 0, 0, 1, 0, 3), (0, 2, 0, 0, 1, 1, 2),
    (0, 2, 0, 1, 0, 0, 4), (0, 2, 0, 1, 0, 1, 3), (0, 2, 0, 1, 1, 0, 3), (0, 2, 0, 1, 1, 1, 2),
    (0, 2, 1, 0, 0, 0, 4), (0, 2, 1, 0, 0, 1, 3), (0, 2, 1, 0, 1, 0, 3), (0, 2, 1, 0, 1, 1, 2),
    (0, 2, 1, 1, 0, 0, 4), (0, 2, 1, 1, 0, 1, 3), (0, 2, 1, 1, 1, 0, 3), (0, 2, 1, 1, 1, 1, 2),
    (1, 0, 0, 0, 0, 0, 2), (1, 0, 0, 0, 0, 1, 1), (1, 0, 0, 0, 1, 0, 2), (1, 0, 0, 0, 1, 1, 1),
    (1, 0, 0, 1, 0, 0, 2), (1, 0, 0, 1, 0, 1, 1), (1, 0, 0, 1, 1, 0, 2), (1, 0, 0, 1, 1, 1, 1),
    (1, 0, 1, 0, 0, 0, 3), (1, 0, 1, 0, 0, 1, 3), (1, 0, 1, 0, 1, 0, 3), (1, 0, 1, 0, 1, 1, 3),
    (1, 0, 1, 1, 0, 0, 3), (1, 0, 1, 1, 0, 1, 3), (1, 0, 1, 1, 1, 0, 3), (1, 0, 1, 1, 1, 1, 3),
    (1, 1, 0, 0, 0, 0, 3), (1, 1, 0, 0, 0, 1, 3), (1, 1, 0, 0, 1, 0, 3), (1, 1, 0, 0, 1, 1, 3),
    (1, 1, 0, 1, 0, 0, 2), (1, 1, 0, 1, 0, 1, 2), (1, 1, 0, 1, 1, 0, 2), (1, 1, 0, 1, 1, 1, 2),
    (1, 1, 1, 0, 0, 0, 3), (1, 1, 1, 0, 0, 1, 3), (1, 1, 1, 0, 1, 0, 3), (1, 1, 1, 0, 1, 1, 3),
    (1, 1, 1, 1, 0, 0, 3), (1, 1, 1, 1, 0, 1, 3), (1, 1, 1, 1, 1, 0, 3), (1, 1, 1, 1, 1, 1, 3),
    (1, 2, 0, 0, 0, 0, 4), (1, 2, 0, 0, 0, 1, 4), (1, 2, 0, 0, 1, 0, 4), (1, 2, 0, 0, 1, 1, 4),
    (1, 2, 0, 1, 0, 0, 3), (1, 2, 0, 1, 0, 1, 3), (1, 2, 0, 1, 1, 0, 3), (1, 2, 0, 1, 1, 1, 3),
    (1, 2, 1, 0, 0, 0, 5), (1, 2, 1, 0, 0, 1, 5), (1, 2, 1, 0, 1, 0, 5), (1, 2, 1, 0, 1, 1, 5),
    (1, 2, 1, 1, 0, 0, 5), (1, 2, 1, 1, 0, 1, 5), (1, 2, 1, 1, 1, 0, 5), (1, 2, 1, 1, 1, 1, 5),
    (2, 0, 0, 0, 0, 0, 3), (2, 0, 0, 0, 0, 1, 3), (2, 0, 0, 0, 1, 0, 3), (2, 0, 0, 0, 1, 1, 3),
    (2, 0, 0, 1, 0, 0, 3), (2, 0, 0, 1, 0, 1, 3), (2, 0, 0, 1, 1, 0, 3), (2, 0, 0, 1, 1, 1, 3),
    (2, 0, 1, 0, 0, 0, 3), (2, 0, 1, 0, 0, 1, 3), (2, 0, 1, 0, 1, 0, 3), (2, 0, 1, 0, 1, 1, 3),
    (2, 0, 1, 1, 0, 0, 3), (2, 0, 1, 1, 0, 1, 3), (2, 0, 1, 1, 1, 0, 3), (2, 0, 1, 1, 1, 1, 3),
    (2, 1, 0, 0, 0, 0, 3), (2, 1, 0, 0, 0, 1, 3), (2, 1, 0, 0, 1, 0, 3), (2, 1, 0, 0, 1, 1, 3),
    (2, 1, 0, 1, 0, 0, 2), (2, 1, 0, 1, 0, 1, 2), (2, 1, 0, 1, 1, 0, 2), (2, 1, 0, 1, 1, 1, 2),
    (2, 1, 1, 0, 0, 0, 3), (2, 1, 1, 0, 0, 1, 3), (2, 1, 1, 0, 1, 0, 3), (2, 1, 1, 0, 1, 1, 3),
    (2, 1, 1, 1, 0, 0, 3), (2, 1, 1, 1, 0, 1, 3), (2, 1, 1, 1, 1, 0, 3), (2, 1, 1, 1, 1, 1, 3),
    (2, 2, 0, 0, 0, 0, 4), (2, 2, 0, 0, 0, 1, 4), (2, 2, 0, 0, 1, 0, 4), (2, 2, 0, 0, 1, 1, 4),
    (2, 2, 0, 1, 0, 0, 3), (2, 2, 0, 1, 0, 1, 3), (2, 2, 0, 1, 1, 0, 3), (2, 2, 0, 1, 1, 1, 3),
    (2, 2, 1, 0, 0, 0, 5), (2, 2, 1, 0, 0, 1, 5), (2, 2, 1, 0, 1, 0, 5), (2, 2, 1, 0, 1, 1, 5),
    (2, 2, 1, 1, 0, 0, 5), (2, 2, 1, 1, 0, 1, 5), (2, 2, 1, 1, 1, 0, 5), (2, 2, 1, 1, 1, 1, 5),
];

#[test]
fn full_branch_table_snapshot() {
    assert_eq!(TABLE.len(), 144);
    for &(t2, enh, fat, sei, ader, diff, expected) in &TABLE {
        let findings = Findings::from_codes([t2, enh, fat, sei, ader, diff]).unwrap();
        let class = evaluate(&findings);
        assert_eq!(
            class.code(),
            expected,
            "inputs ({}, {}, {}, {}, {}, {})",
            t2,
            enh,
            fat,
            sei,
            ader,
            diff
        );
    }
}

#[test]
fn every_class_is_in_range() {
    for &(t2, enh, fat, sei, ader, diff, _) in &TABLE {
        let class = evaluate_codes([t2, enh, fat, sei, ader, diff]);
        assert!(class.code() <= 5);
        assert_ne!(class, CclsClass::Unmatched);
    }
}

#[test]
fn worked_vectors() {
    let f = Findings::from_codes([1, 2, 0, 1, 0, 0]).unwrap();
    assert_eq!(evaluate(&f), CclsClass::Equivocal);

    let f = Findings::from_codes([0, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(evaluate(&f), CclsClass::VeryUnlikely);

    for sei in 0..2 {
        for ader in 0..2 {
            for diff in 0..2 {
                let f = Findings::from_codes([2, 2, 1, sei, ader, diff]).unwrap();
                assert_eq!(evaluate(&f), CclsClass::VeryLikely);
            }
        }
    }
}

#[test]
fn out_of_domain_codes_map_to_unmatched() {
    assert_eq!(evaluate_codes([3, 0, 0, 0, 0, 0]), CclsClass::Unmatched);
    assert_eq!(evaluate_codes([-1, 0, 0, 0, 0, 0]), CclsClass::Unmatched);
    assert_eq!(evaluate_codes([0, 0, 2, 0, 0, 0]), CclsClass::Unmatched);
    assert_eq!(evaluate_codes([0, 0, 0, 0, 0, 9]), CclsClass::Unmatched);
    assert_eq!(CclsClass::Unmatched.code(), 0);
}

#[test]
fn evaluation_is_idempotent() {
    let f = Findings::from_codes([1, 2, 0, 1, 0, 0]).unwrap();
    assert_eq!(evaluate(&f), evaluate(&f));
}
