use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// Letter grade. Each grade carries a fixed point value; `I` (incomplete) and
/// `W` (withdrawn) are excluded from GPA computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    I,
    W,
}

impl Grade {
    pub fn points(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::B => 3.0,
            Grade::C => 2.0,
            Grade::D => 1.0,
            Grade::F | Grade::I | Grade::W => 0.0,
        }
    }

    /// False only for `I` and `W`: those entries contribute neither credits
    /// nor quality points.
    pub fn counts_toward_gpa(self) -> bool {
        !matches!(self, Grade::I | Grade::W)
    }
}
