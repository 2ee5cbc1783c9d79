//! Tags for every kind of operand that appears in the Intel manual.
//!
//! The tag is how generic code (encoders, printers, matchers) tells operands apart without relying
//! on the concrete Rust type. Adding a new kind of operand means adding a tag here.

use crate::error::UnknownOpType;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The group an [OpType] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpCategory {
    ConditionRegister,
    DebugRegister,
    Eflag,
    Hint,
    Immediate,
    Label,
    Memory,
    Mmx,
    Modifier,
    MemoryOffset,
    Operand,
    GeneralPurposeRegister,
    Relative,
    SegmentRegister,
    FpStack,
    Xmm,
    Ymm,
}

macro_rules! op_types {
    ($($category:ident { $($(#[$meta:meta])* $variant:ident => $name:literal,)* })*) => {
        /// Any of the operand types which appear in the Intel manual.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum OpType {
            $($($(#[$meta])* $variant,)*)*
        }

        impl OpType {
            /// Every tag, in declaration order.
            pub const ALL: &'static [OpType] = &[$($(OpType::$variant,)*)*];

            /// The name of the tag, e.g. `IMM_8`.
            pub const fn name(self) -> &'static str {
                match self {
                    $($(OpType::$variant => $name,)*)*
                }
            }

            pub const fn category(self) -> OpCategory {
                match self {
                    $($(OpType::$variant => OpCategory::$category,)*)*
                }
            }
        }
    };
}

op_types! {
    ConditionRegister {
        Cr => "CR",
        /// One of cr0, cr2, cr3 or cr4.
        Cr0234 => "CR_0234",
        Cr8 => "CR_8",
    }

    DebugRegister {
        Dr => "DR",
    }

    Eflag {
        Eflag => "EFLAG",
    }

    Hint {
        /// Conditional jump hint.
        Hint => "HINT",
    }

    Immediate {
        Imm => "IMM",
        Imm8 => "IMM_8",
        Imm16 => "IMM_16",
        Imm32 => "IMM_32",
        Imm64 => "IMM_64",
        /// The immediate constant 0.
        Zero => "ZERO",
        /// The immediate constant 1.
        One => "ONE",
        /// The immediate constant 3.
        Three => "THREE",
    }

    Label {
        Label => "LABEL",
    }

    Memory {
        M => "M",
        M8 => "M_8",
        M16 => "M_16",
        M32 => "M_32",
        M64 => "M_64",
        M128 => "M_128",
        M256 => "M_256",
        MPair16_64 => "M_PAIR_16_64",
        MPtr16_16 => "M_PTR_16_16",
        MPtr16_32 => "M_PTR_16_32",
        MPtr16_64 => "M_PTR_16_64",
        M16Int => "M_16_INT",
        M32Int => "M_32_INT",
        M64Int => "M_64_INT",
        M32Fp => "M_32_FP",
        M64Fp => "M_64_FP",
        M80Fp => "M_80_FP",
        M80Bcd => "M_80_BCD",
        M2Byte => "M_2_BYTE",
        M14Byte => "M_14_BYTE",
        M28Byte => "M_28_BYTE",
        M94Byte => "M_94_BYTE",
        M108Byte => "M_108_BYTE",
        M512Byte => "M_512_BYTE",
    }

    Mmx {
        Mm => "MM",
    }

    Modifier {
        Modifier => "MODIFIER",
        Pref66 => "PREF_66",
        PrefRexW => "PREF_REX_W",
        Far => "FAR",
    }

    MemoryOffset {
        Moffs => "MOFFS",
        Moffs8 => "MOFFS_8",
        Moffs16 => "MOFFS_16",
        Moffs32 => "MOFFS_32",
        Moffs64 => "MOFFS_64",
    }

    Operand {
        Operand => "OPERAND",
        AtomicOperand => "ATOMIC_OPERAND",
        CompoundOperand => "COMPOUND_OPERAND",
    }

    GeneralPurposeRegister {
        R => "R",
        /// Low byte registers.
        Rl => "RL",
        /// High byte registers (ah, ch, dh, bh).
        Rh => "RH",
        /// Byte registers only reachable with a REX prefix.
        Rb => "RB",
        Al => "AL",
        Cl => "CL",
        R16 => "R_16",
        Ax => "AX",
        Dx => "DX",
        AddrR => "ADDR_R",
        R32 => "R_32",
        Eax => "EAX",
        R64 => "R_64",
        Rax => "RAX",
    }

    Relative {
        Rel => "REL",
        Rel8 => "REL_8",
        Rel32 => "REL_32",
    }

    SegmentRegister {
        Sreg => "SREG",
        Fs => "FS",
        Gs => "GS",
    }

    FpStack {
        St => "ST",
        St0 => "ST_0",
    }

    Xmm {
        Xmm => "XMM",
        Xmm0 => "XMM_0",
    }

    Ymm {
        Ymm => "YMM",
    }
}

impl OpType {
    #[inline]
    pub const fn is_immediate(self) -> bool {
        matches!(self.category(), OpCategory::Immediate)
    }
}

impl Display for OpType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpType {
    type Err = UnknownOpType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpType::ALL
            .iter()
            .copied()
            .find(|op_type| op_type.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownOpType(s.to_string()))
    }
}
