/// Calibrated malignancy probability for a CCLS class code.
///
/// The five constants come from the clinical calibration of the score and
/// must stay bit-identical to these literals. Codes outside {1..5}, the
/// unmatched class included, carry probability 0.0.
pub fn probability_for(class_code: u8) -> f64 {
    match class_code {
        1 => 0.05,
        2 => 0.06,
        3 => 0.35,
        4 => 0.78,
        5 => 0.93,
        _ => 0.0,
    }
}
