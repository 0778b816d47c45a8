use crate::findings::{Enhancement, Findings, Presence, T2Signal};
use crate::scores::CclsClass;

/// Maps the six findings to a CCLS class.
///
/// The branch table is total over the valid domains, so this never returns
/// [`CclsClass::Unmatched`]; use [`evaluate_codes`] when the inputs are raw,
/// unvalidated codes.
pub fn evaluate(f: &Findings) -> CclsClass {
    use CclsClass::*;
    use Enhancement::*;
    use Presence::*;
    use T2Signal::*;

    match (
        f.t2_signal,
        f.enhancement,
        f.microscopic_fat,
        f.sei,
        f.ader,
        f.diffusion_restriction,
    ) {
        // T2 low
        (Low, Mild, Absent, _, _, _) => VeryUnlikely,
        (Low, Mild, Present, _, _, _) => Equivocal,
        (Low, Moderate, _, _, _, _) => Equivocal,
        (Low, Marked, _, _, Absent, Absent) => Likely,
        (Low, Marked, _, _, Absent, Present) => Equivocal,
        (Low, Marked, _, _, Present, Absent) => Equivocal,
        (Low, Marked, _, _, Present, Present) => Unlikely,
        // T2 intermediate
        (Intermediate, Mild, Absent, _, _, Absent) => Unlikely,
        (Intermediate, Mild, Absent, _, _, Present) => VeryUnlikely,
        (Intermediate, Mild, Present, _, _, _) => Equivocal,
        (Intermediate, Moderate, Absent, Absent, _, _) => Equivocal,
        (Intermediate, Moderate, Absent, Present, _, _) => Unlikely,
        (Intermediate, Moderate, Present, _, _, _) => Equivocal,
        (Intermediate, Marked, Absent, Absent, _, _) => Likely,
        (Intermediate, Marked, Absent, Present, _, _) => Equivocal,
        (Intermediate, Marked, Present, _, _, _) => VeryLikely,
        // T2 high
        (High, Mild, _, _, _, _) => Equivocal,
        (High, Moderate, Absent, Absent, _, _) => Equivocal,
        (High, Moderate, Absent, Present, _, _) => Unlikely,
        (High, Moderate, Present, _, _, _) => Equivocal,
        (High, Marked, Absent, Absent, _, _) => Likely,
        (High, Marked, Absent, Present, _, _) => Equivocal,
        (High, Marked, Present, _, _, _) => VeryLikely,
    }
}

/// Code-level evaluation. Out-of-domain codes yield `Unmatched` instead of
/// an error; callers that want the error go through
/// [`Findings::from_codes`] first.
pub fn evaluate_codes(codes: [i64; 6]) -> CclsClass {
    match Findings::from_codes(codes) {
        Ok(f) => evaluate(&f),
        Err(_) => CclsClass::Unmatched,
    }
}

/// Which findings the branch table consults for a given mass. T2 and
/// enhancement gate everything; the rest depend on the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsultedFindings {
    pub t2_signal: bool,
    pub enhancement: bool,
    pub microscopic_fat: bool,
    pub sei: bool,
    pub ader: bool,
    pub diffusion_restriction: bool,
}

impl ConsultedFindings {
    pub fn names(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.t2_signal {
            out.push("t2_signal");
        }
        if self.enhancement {
            out.push("corticomedullary_enhancement");
        }
        if self.microscopic_fat {
            out.push("microscopic_fat");
        }
        if self.sei {
            out.push("sei");
        }
        if self.ader {
            out.push("ader");
        }
        if self.diffusion_restriction {
            out.push("diffusion_restriction");
        }
        out
    }
}

pub fn consulted(f: &Findings) -> ConsultedFindings {
    use Enhancement::*;
    use Presence::*;
    use T2Signal::*;

    let microscopic_fat = match (f.t2_signal, f.enhancement) {
        (High, Mild) => false,
        (Low, e) => e == Mild,
        _ => true,
    };
    let sei = matches!(f.t2_signal, Intermediate | High)
        && matches!(f.enhancement, Moderate | Marked)
        && f.microscopic_fat == Absent;
    let ader = f.t2_signal == Low && f.enhancement == Marked;
    let diffusion_restriction = (f.t2_signal == Low && f.enhancement == Marked)
        || (f.t2_signal == Intermediate && f.enhancement == Mild && f.microscopic_fat == Absent);

    ConsultedFindings {
        t2_signal: true,
        enhancement: true,
        microscopic_fat,
        sei,
        ader,
        diffusion_restriction,
    }
}
