use renal_ccls::findings::{Enhancement, Findings, Presence, T2Signal};
use renal_ccls::ScoreError;

#[test]
fn valid_codes_roundtrip() {
    let f = Findings::from_codes([1, 2, 0, 1, 0, 0]).unwrap();
    assert_eq!(f.t2_signal, T2Signal::Intermediate);
    assert_eq!(f.enhancement, Enhancement::Marked);
    assert_eq!(f.microscopic_fat, Presence::Absent);
    assert_eq!(f.sei, Presence::Present);
    assert_eq!(f.codes(), [1, 2, 0, 1, 0, 0]);

    let f = Findings::from_codes([2, 0, 1, 0, 1, 1]).unwrap();
    assert_eq!(f.codes(), [2, 0, 1, 0, 1, 1]);
}

#[test]
fn each_field_reports_its_own_name() {
    let cases: [([i64; 6], &str); 6] = [
        ([3, 0, 0, 0, 0, 0], "t2_signal"),
        ([0, -1, 0, 0, 0, 0], "corticomedullary_enhancement"),
        ([0, 0, 2, 0, 0, 0], "microscopic_fat"),
        ([0, 0, 0, 7, 0, 0], "sei"),
        ([0, 0, 0, 0, 2, 0], "ader"),
        ([0, 0, 0, 0, 0, -3], "diffusion_restriction"),
    ];
    for (codes, expected) in cases {
        let err = Findings::from_codes(codes).unwrap_err();
        match err {
            ScoreError::InvalidFinding { name, .. } => assert_eq!(name, expected),
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn error_message_carries_value_and_domain() {
    let err = Findings::from_codes([0, 0, 0, 0, 0, 5]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("diffusion_restriction"), "{msg}");
    assert!(msg.contains('5'), "{msg}");
    assert!(msg.contains("{0,1}"), "{msg}");
}

#[test]
fn first_invalid_field_wins() {
    let err = Findings::from_codes([9, 9, 9, 9, 9, 9]).unwrap_err();
    match err {
        ScoreError::InvalidFinding { name, value, .. } => {
            assert_eq!(name, "t2_signal");
            assert_eq!(value, 9);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn labels_are_stable() {
    assert_eq!(T2Signal::Low.label(), "low");
    assert_eq!(T2Signal::Intermediate.label(), "intermediate");
    assert_eq!(T2Signal::High.label(), "high");
    assert_eq!(Enhancement::Mild.label(), "mild");
    assert_eq!(Enhancement::Moderate.label(), "moderate");
    assert_eq!(Enhancement::Marked.label(), "marked");
    assert_eq!(Presence::Absent.label(), "absent");
    assert_eq!(Presence::Present.label(), "present");
}
