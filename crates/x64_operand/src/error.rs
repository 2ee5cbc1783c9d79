use crate::{Constant, ImmWidth};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ImmError {
    #[error("immediate {value:#x} does not fit in {width}")]
    OutOfRange { value: u64, width: ImmWidth },

    #[error("immediate {value:#x} is not the constant {expected}")]
    NotConstant { value: u64, expected: Constant },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown operand type ({0})")]
pub struct UnknownOpType(pub String);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown assembly syntax ({0})")]
pub struct UnknownSyntax(pub String);

pub type Result<T> = std::result::Result<T, ImmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ImmError::OutOfRange {
            value: 0x1_0000,
            width: ImmWidth::Byte,
        };
        assert_eq!(err.to_string(), "immediate 0x10000 does not fit in imm8");

        let err = ImmError::NotConstant {
            value: 2,
            expected: Constant::One,
        };
        assert_eq!(err.to_string(), "immediate 0x2 is not the constant 1");

        let err = UnknownOpType("IMM_128".to_string());
        assert_eq!(err.to_string(), "unknown operand type (IMM_128)");
    }
}
