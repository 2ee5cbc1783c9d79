//! This crate holds the operand values of an x86-64 assembler: immediates with their range checks,
//! the canonical constant immediates and the tags identifying every kind of operand.

mod code;
mod constants;
mod display;
mod error;
mod imm;
mod op_type;
mod operand;

pub use code::CodeBuffer;
pub use constants::{Constant, Constants};
pub use display::{Printed, Syntax};
pub use error::{ImmError, Result as ImmResult, UnknownOpType, UnknownSyntax};
pub use imm::{Imm, ImmWidth};
pub use op_type::{OpCategory, OpType};
pub use operand::Operand;
