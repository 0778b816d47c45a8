use crate::findings::{Enhancement, Findings, Presence, T2Signal};

/// Histologies other than ccRCC that specific finding patterns point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Histology {
    Oncocytoma,
    ChromophobeRcc,
    PapillaryRcc,
    Aml,
    PapillaryRccOrAml,
}

impl Histology {
    pub fn label(self) -> &'static str {
        match self {
            Self::Oncocytoma => "oncocytoma",
            Self::ChromophobeRcc => "chromophobe RCC",
            Self::PapillaryRcc => "papillary RCC",
            Self::Aml => "AML",
            Self::PapillaryRccOrAml => "papillary RCC or AML (rare)",
        }
    }
}

/// Differential hint for patterns that argue against clear cell histology.
/// Most combinations carry no hint.
pub fn suspected_histology(f: &Findings) -> Option<Histology> {
    use Enhancement::*;
    use Histology::*;
    use Presence::*;
    use T2Signal::*;

    match (
        f.t2_signal,
        f.enhancement,
        f.microscopic_fat,
        f.sei,
        f.ader,
    ) {
        (High, Marked, Absent, Present, _) => Some(Oncocytoma),
        (High, Moderate, Present, _, _) => Some(ChromophobeRcc),
        (High, Moderate, Absent, Absent, _) => Some(ChromophobeRcc),
        (High, Moderate, Absent, Present, _) => Some(Oncocytoma),
        (Intermediate, Marked, Absent, Absent, _) => Some(ChromophobeRcc),
        (Intermediate, Marked, Absent, Present, _) => Some(Oncocytoma),
        (Intermediate, Moderate, Present, _, _) => Some(ChromophobeRcc),
        (Intermediate, Moderate, Absent, Absent, _) => Some(Oncocytoma),
        (Intermediate, Mild, Absent, _, _) => Some(PapillaryRcc),
        (Low, Marked, _, _, Present) => Some(Aml),
        (Low, Mild, Absent, _, _) => Some(PapillaryRccOrAml),
        _ => None,
    }
}
