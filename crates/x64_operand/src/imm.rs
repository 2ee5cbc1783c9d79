use crate::code::CodeBuffer;
use crate::error::{ImmError, Result};
#[cfg(feature = "serde")]
use crate::Constants;
use crate::{Constant, OpType};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

/// The declared width of an immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImmWidth {
    /// 8 bits. Bits 8..64 of the value must be all zeros or all ones, so both 0xFF and -1 fit.
    /// When combined with a word or doubleword operand the value is sign-extended.
    Byte,
    /// 16 bits. Bits 16..64 of the value must be all zeros or all ones.
    Word,
    /// 32 bits. Bits 32..64 of the value must be all zeros or all ones.
    Dword,
    /// Any 64-bit value.
    Qword,
}

impl ImmWidth {
    pub const fn bits(self) -> u32 {
        match self {
            ImmWidth::Byte => 8,
            ImmWidth::Word => 16,
            ImmWidth::Dword => 32,
            ImmWidth::Qword => 64,
        }
    }

    pub const fn op_type(self) -> OpType {
        match self {
            ImmWidth::Byte => OpType::Imm8,
            ImmWidth::Word => OpType::Imm16,
            ImmWidth::Dword => OpType::Imm32,
            ImmWidth::Qword => OpType::Imm64,
        }
    }

    /// Returns true if every bit of `value` above this width is a copy of the width's sign bit,
    /// i.e. all zeros or all ones.
    pub const fn fits(self, value: u64) -> bool {
        match self {
            ImmWidth::Qword => true,
            _ => {
                let high = value >> self.bits();
                high == 0 || high == u64::MAX >> self.bits()
            }
        }
    }
}

impl Display for ImmWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "imm{}", self.bits())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Kind {
    Sized(ImmWidth),
    Constant(Constant),
}

/// An immediate value.
///
/// The value is always stored as the full 64 bits it was created with. Construction never fails;
/// use [Imm::check] (or [Imm::validate]) to find out whether the value actually fits in the width
/// it was declared with before encoding it.
///
/// ```rust
/// use x64_operand::*;
///
/// let imm = Imm::imm32(0xFFFF_FFFF);
/// assert_eq!(imm.value(), 0x0000_0000_FFFF_FFFF);
/// assert!(imm.check());
///
/// let imm = Imm::from_raw(ImmWidth::Byte, 0x100);
/// assert!(!imm.check());
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawImm"))]
pub struct Imm {
    value: u64,
    kind: Kind,
}

/// Deserialized form of [Imm]. Canonical constants are rebuilt through [Constants].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawImm {
    value: u64,
    kind: Kind,
}

#[cfg(feature = "serde")]
impl TryFrom<RawImm> for Imm {
    type Error = ImmError;

    fn try_from(raw: RawImm) -> Result<Self> {
        match raw.kind {
            Kind::Sized(width) => Ok(Imm::from_raw(width, raw.value)),
            Kind::Constant(expected) => {
                let imm = Constants::get(expected);
                if imm.value() == raw.value {
                    Ok(imm)
                } else {
                    Err(ImmError::NotConstant {
                        value: raw.value,
                        expected,
                    })
                }
            }
        }
    }
}

impl Imm {
    /// Create an 8-bit immediate.
    pub const fn imm8(value: u8) -> Self {
        Self::from_raw(ImmWidth::Byte, value as u64)
    }

    /// Create a 16-bit immediate.
    pub const fn imm16(value: u16) -> Self {
        Self::from_raw(ImmWidth::Word, value as u64)
    }

    /// Create a 32-bit immediate.
    pub const fn imm32(value: u32) -> Self {
        Self::from_raw(ImmWidth::Dword, value as u64)
    }

    /// Create a 64-bit immediate.
    pub const fn imm64(value: u64) -> Self {
        Self::from_raw(ImmWidth::Qword, value)
    }

    /// Create an immediate of the given width from a raw 64-bit value. The value is stored as is,
    /// even if it does not fit.
    pub const fn from_raw(width: ImmWidth, value: u64) -> Self {
        Self {
            value,
            kind: Kind::Sized(width),
        }
    }

    /// Create a 64-bit immediate holding the address `ptr` points to.
    pub fn from_address<T: ?Sized>(ptr: *const T) -> Self {
        Self::imm64(ptr.cast::<u8>() as usize as u64)
    }

    /// Create a 64-bit immediate holding the entry address of a compiled code buffer.
    pub fn from_code_buffer<B: CodeBuffer + ?Sized>(buffer: &B) -> Self {
        let address = buffer.entry_address();
        trace!("captured code buffer address {:p}", address);
        Self::from_address(address)
    }

    pub(crate) const fn constant(constant: Constant) -> Self {
        Self {
            value: constant.value(),
            kind: Kind::Constant(constant),
        }
    }

    /// The raw 64-bit value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// The declared width. The canonical constants are 8-bit immediates.
    pub const fn width(&self) -> ImmWidth {
        match self.kind {
            Kind::Sized(width) => width,
            Kind::Constant(_) => ImmWidth::Byte,
        }
    }

    /// Returns the canonical constant this immediate was handed out as, if any.
    pub const fn as_constant(&self) -> Option<Constant> {
        match self.kind {
            Kind::Sized(_) => None,
            Kind::Constant(constant) => Some(constant),
        }
    }

    /// The most specific operand type of this immediate.
    pub const fn op_type(&self) -> OpType {
        match self.kind {
            Kind::Sized(width) => width.op_type(),
            Kind::Constant(constant) => constant.op_type(),
        }
    }

    /// Returns true if this immediate can be used where an operand of `op_type` is expected. A
    /// canonical constant is also an 8-bit immediate, and every immediate is an [OpType::Imm].
    pub fn is_a(&self, op_type: OpType) -> bool {
        match op_type {
            OpType::Operand | OpType::Imm => true,
            OpType::Imm8 => self.width() == ImmWidth::Byte,
            _ => self.op_type() == op_type,
        }
    }

    /// Checks that the stored value fits in the declared width. For the canonical constants the
    /// value must be exactly the constant.
    pub const fn check(&self) -> bool {
        match self.kind {
            Kind::Sized(width) => width.fits(self.value),
            Kind::Constant(constant) => self.value == constant.value(),
        }
    }

    /// Like [Imm::check], but returns the reason the immediate is invalid.
    pub fn validate(self) -> Result<Self> {
        if self.check() {
            return Ok(self);
        }

        let err = match self.kind {
            Kind::Sized(width) => ImmError::OutOfRange {
                value: self.value,
                width,
            },
            Kind::Constant(expected) => ImmError::NotConstant {
                value: self.value,
                expected,
            },
        };
        debug!("{}", err);

        Err(err)
    }
}

impl PartialEq for Imm {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Imm {}

impl PartialOrd for Imm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Imm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Imm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl From<Imm> for u64 {
    fn from(imm: Imm) -> Self {
        imm.value
    }
}

macro_rules! impl_from {
    ($from:ty, $ctor:ident) => {
        impl From<$from> for Imm {
            fn from(value: $from) -> Self {
                Imm::$ctor(value)
            }
        }
    };
}

impl_from!(u8, imm8);
impl_from!(u16, imm16);
impl_from!(u32, imm32);
impl_from!(u64, imm64);
