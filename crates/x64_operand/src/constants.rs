//! The immediate constants some encodings require, e.g. `shl r/m8, 1` has its own op code and does
//! not take a general immediate byte.

use crate::{Imm, OpType};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constant {
    Zero,
    One,
    Three,
}

impl Constant {
    pub const fn value(self) -> u64 {
        match self {
            Constant::Zero => 0,
            Constant::One => 1,
            Constant::Three => 3,
        }
    }

    pub const fn op_type(self) -> OpType {
        match self {
            Constant::Zero => OpType::Zero,
            Constant::One => OpType::One,
            Constant::Three => OpType::Three,
        }
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The only place the canonical constant immediates can be obtained from.
///
/// ```rust
/// use x64_operand::*;
///
/// let one = Constants::one();
/// assert_eq!(one.op_type(), OpType::One);
/// assert!(one.is_a(OpType::Imm8));
/// ```
pub struct Constants;

impl Constants {
    /// The immediate constant 0.
    pub const fn zero() -> Imm {
        Imm::constant(Constant::Zero)
    }

    /// The immediate constant 1.
    pub const fn one() -> Imm {
        Imm::constant(Constant::One)
    }

    /// The immediate constant 3.
    pub const fn three() -> Imm {
        Imm::constant(Constant::Three)
    }

    pub const fn get(constant: Constant) -> Imm {
        Imm::constant(constant)
    }
}
