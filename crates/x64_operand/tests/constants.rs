use x64_operand::{Constant, Constants, Imm, ImmError, ImmWidth, OpType};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn constants_pass_their_check() {
    init_tracing();

    for (imm, expected) in [
        (Constants::zero(), Constant::Zero),
        (Constants::one(), Constant::One),
        (Constants::three(), Constant::Three),
    ] {
        assert!(imm.check());
        assert_eq!(imm.validate(), Ok(imm));
        assert_eq!(imm.as_constant(), Some(expected));
        assert_eq!(imm.value(), expected.value());
    }
}

#[test]
fn constants_equal_plain_immediates() {
    assert_eq!(Constants::zero(), Imm::imm8(0));
    assert_eq!(Constants::one(), Imm::imm32(1));
    assert_eq!(Constants::three(), Imm::from_raw(ImmWidth::Qword, 3));
    assert!(Constants::zero() < Constants::one());
    assert!(Constants::one() < Constants::three());
}

#[test]
fn only_constants_report_constant_tags() {
    assert_eq!(Imm::imm8(1).op_type(), OpType::Imm8);
    assert_eq!(Constants::one().op_type(), OpType::One);
    assert!(Constants::one().is_a(OpType::Imm8));
    assert!(!Imm::imm8(1).is_a(OpType::One));
}

#[test]
fn range_violations_are_reported() {
    init_tracing();

    let imm = Imm::from_raw(ImmWidth::Byte, 0x1FF);
    assert!(!imm.check());
    assert_eq!(
        imm.validate(),
        Err(ImmError::OutOfRange {
            value: 0x1FF,
            width: ImmWidth::Byte,
        })
    );
}

mod glob_import {
    use x64_operand::*;

    fn parse_digit(s: &str) -> Result<u8, String> {
        s.parse::<u8>().map_err(|err| err.to_string())
    }

    #[test]
    fn keeps_prelude_result() {
        assert_eq!(parse_digit("3").map(Imm::imm8), Ok(Constants::three()));

        let checked: ImmResult<Imm> = Imm::imm16(0x7FFF).validate();
        assert!(checked.is_ok());
    }
}
