use crate::{Imm, OpType};

/// Any operand accepted by an instruction.
pub trait Operand {
    /// The single tag identifying the kind of operand.
    fn op_type(&self) -> OpType;

    /// The raw value carried by the operand.
    fn raw(&self) -> u64;

    /// Returns true if the operand can be encoded as is.
    fn check(&self) -> bool;
}

impl Operand for Imm {
    fn op_type(&self) -> OpType {
        Imm::op_type(self)
    }

    fn raw(&self) -> u64 {
        self.value()
    }

    fn check(&self) -> bool {
        Imm::check(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constants, ImmWidth};

    fn describe(operand: &dyn Operand) -> (OpType, u64, bool) {
        (operand.op_type(), operand.raw(), operand.check())
    }

    #[test]
    fn dispatch_through_trait() {
        assert_eq!(describe(&Imm::imm16(7)), (OpType::Imm16, 7, true));
        assert_eq!(describe(&Constants::three()), (OpType::Three, 3, true));
        assert_eq!(
            describe(&Imm::from_raw(ImmWidth::Dword, 1 << 40)),
            (OpType::Imm32, 1 << 40, false)
        );
    }
}
