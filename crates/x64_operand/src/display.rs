use crate::error::UnknownSyntax;
use crate::Imm;
use std::fmt::{Display, Formatter, Write};
use std::str::FromStr;

/// The assembly syntax operands are printed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Syntax {
    /// AT&T syntax, as used by `gas`.
    Att,
    #[default]
    Intel,
}

impl Display for Syntax {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Syntax::Att => write!(f, "att"),
            Syntax::Intel => write!(f, "intel"),
        }
    }
}

impl FromStr for Syntax {
    type Err = UnknownSyntax;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "att" | "at&t" | "gas" => Ok(Syntax::Att),
            "intel" | "nasm" => Ok(Syntax::Intel),
            _ => Err(UnknownSyntax(s.to_string())),
        }
    }
}

/// Displays `item` in the given [Syntax].
pub struct Printed<'a, I> {
    pub item: &'a I,
    pub syntax: Syntax,
}

impl Display for Printed<'_, Imm> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.syntax {
            Syntax::Att => write!(f, "$0x{:x}", self.item.value()),
            Syntax::Intel => write!(f, "0x{:x}", self.item.value()),
        }
    }
}

impl Imm {
    pub fn printed(&self, syntax: Syntax) -> Printed<'_, Imm> {
        Printed { item: self, syntax }
    }

    pub fn att(&self) -> Printed<'_, Imm> {
        self.printed(Syntax::Att)
    }

    pub fn intel(&self) -> Printed<'_, Imm> {
        self.printed(Syntax::Intel)
    }

    /// Writes this immediate using AT&T syntax.
    pub fn write_att<W: Write + ?Sized>(&self, w: &mut W) -> std::fmt::Result {
        write!(w, "{}", self.att())
    }

    /// Writes this immediate using Intel syntax.
    pub fn write_intel<W: Write + ?Sized>(&self, w: &mut W) -> std::fmt::Result {
        write!(w, "{}", self.intel())
    }
}

impl Display for Imm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.intel().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constants, ImmWidth};

    #[test]
    fn att() {
        assert_eq!(Imm::imm8(0x2a).att().to_string(), "$0x2a");
        assert_eq!(Constants::zero().att().to_string(), "$0x0");
        assert_eq!(
            Imm::from_raw(ImmWidth::Byte, u64::MAX).att().to_string(),
            "$0xffffffffffffffff"
        );
    }

    #[test]
    fn intel() {
        assert_eq!(Imm::imm8(0x2a).intel().to_string(), "0x2a");
        assert_eq!(Imm::imm64(0xDEAD_BEEF).to_string(), "0xdeadbeef");
        assert_eq!(Constants::three().to_string(), "0x3");
    }

    #[test]
    fn write_to_string() {
        let imm = Imm::imm32(0x1000);
        let mut out = String::new();
        imm.write_att(&mut out).unwrap();
        out.push_str(", ");
        imm.write_intel(&mut out).unwrap();
        assert_eq!(out, "$0x1000, 0x1000");
    }

    #[test]
    fn parse_syntax() {
        assert_eq!("ATT".parse::<Syntax>(), Ok(Syntax::Att));
        assert_eq!("gas".parse::<Syntax>(), Ok(Syntax::Att));
        assert_eq!("Intel".parse::<Syntax>(), Ok(Syntax::Intel));
        assert_eq!(
            "masm".parse::<Syntax>(),
            Err(UnknownSyntax("masm".to_string()))
        );
        assert_eq!(Syntax::default(), Syntax::Intel);
        assert_eq!(Syntax::Att.to_string(), "att");
    }
}
