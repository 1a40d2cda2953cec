//! Expression evaluation vectors.
//!
//! The expected bytes encode the assembler's exact arithmetic: 32-bit
//! two's-complement, division and modulo rounding towards zero, '>>' as an
//! arithmetic shift and '>>>' as a logical one.

use super::{TestCase, TestGroup};

/// Wrap an expression in the minimal single-byte emission program.
fn byte(expr: &str) -> String {
    format!("ORG 0 ; BYTE {expr} ;")
}

pub(super) fn group() -> TestGroup {
    TestGroup {
        name: "expressions",
        cases: vec![
            TestCase::emits("Operator '+'", byte("1 + 2"), b"\x03"),
            TestCase::emits("Operator '-' 1", byte("2 - 1"), b"\x01"),
            TestCase::emits("Operator '-' 2", byte("1 - 2"), b"\xFF"),
            TestCase::emits("Operator '*'", byte("3 * 2"), b"\x06"),
            TestCase::emits("Operator '/' 1", byte("6 / 2"), b"\x03"),
            TestCase::emits("Operator '/' 2", byte("5 / 2"), b"\x02"), // +2 (round towards zero)
            TestCase::emits("Operator '/' 3", byte("(-5) / 2"), b"\xFE"), // -2 (round towards zero)
            TestCase::emits("Operator '%' 1", byte("5 % 2"), b"\x01"), // +1
            TestCase::emits("Operator '%' 2", byte("(-5) % 2"), b"\xFF"), // -1
            TestCase::emits("Operator '<<'", byte("3 << 2"), b"\x0C"), // 12
            TestCase::emits("Operator '>>'", byte("3 >> 1"), b"\x01"),
            TestCase::emits("Operator '>>>'", byte("0x80000000 >>> 25"), b"\xC0"), // 0b11000000
            TestCase::emits("Operator '<' 1", byte("1 < 2"), b"\x01"),
            TestCase::emits("Operator '<' 2", byte("2 < 1"), b"\x00"),
            TestCase::emits("Operator '<' 3", byte("2 < 2"), b"\x00"),
            TestCase::emits("Operator '<=' 1", byte("1 <= 2"), b"\x01"),
            TestCase::emits("Operator '<=' 2", byte("2 <= 1"), b"\x00"),
            TestCase::emits("Operator '<=' 3", byte("2 <= 2"), b"\x01"),
            TestCase::emits("Operator '==' 1", byte("1 == 2"), b"\x00"),
            TestCase::emits("Operator '==' 2", byte("2 == 1"), b"\x00"),
            TestCase::emits("Operator '==' 3", byte("2 == 2"), b"\x01"),
            TestCase::emits("Operator '!=' 1", byte("1 != 2"), b"\x01"),
            TestCase::emits("Operator '!=' 2", byte("2 != 1"), b"\x01"),
            TestCase::emits("Operator '!=' 3", byte("2 != 2"), b"\x00"),
            TestCase::emits("Operator '>=' 1", byte("1 >= 2"), b"\x00"),
            TestCase::emits("Operator '>=' 2", byte("2 >= 1"), b"\x01"),
            TestCase::emits("Operator '>=' 3", byte("2 >= 2"), b"\x01"),
            TestCase::emits("Operator '>' 1", byte("1 > 2"), b"\x00"),
            TestCase::emits("Operator '>' 2", byte("2 > 1"), b"\x01"),
            TestCase::emits("Operator '>' 3", byte("2 > 2"), b"\x00"),
            TestCase::emits("Operator '&' 1", byte("3 & 6"), b"\x02"),
            TestCase::emits("Operator '&' 2", byte("1 & 6"), b"\x00"),
            TestCase::emits("Operator '|' 1", byte("1 | 12"), b"\x0D"), // 0b1101
            TestCase::emits("Operator '|' 2", byte("1 | 1"), b"\x01"),
            TestCase::emits("Operator '^' 1", byte("3 ^ 6"), b"\x05"),
            TestCase::emits("Operator '^' 2", byte("1 ^ 6"), b"\x07"),
            // '&&' and '||' return an operand, not a canonical boolean
            TestCase::emits("Operator '&&' 1", byte("0 && 1"), b"\x00"),
            TestCase::emits("Operator '&&' 2", byte("1 && 1"), b"\x01"),
            TestCase::emits("Operator '&&' 3", byte("1 && 10"), b"\x0A"),
            TestCase::emits("Operator '||' 1", byte("0 || 1"), b"\x01"),
            TestCase::emits("Operator '||' 2", byte("1 || 1"), b"\x01"),
            TestCase::emits("Operator '||' 3", byte("1 || 10"), b"\x01"),
            TestCase::emits("Operator '||' 4", byte("0 || 10"), b"\x0A"),
            TestCase::emits("Operator '||' 5", byte("8 || 1"), b"\x08"),
            // '??' coerces an undefined operand instead of erroring
            TestCase::emits(
                "Operator '??' 1",
                format!("A := 0 ;{}", byte("(A || 1) ?? 0")),
                b"\x01",
            ),
            TestCase::emits("Operator '??' 2", byte("(A || 1) ?? 0"), b"\x00"),
            TestCase::emits("Operator unary '-' 1", byte("-1"), b"\xFF"),
            TestCase::emits("Operator unary '-' 2", byte("-(1 + 2)"), b"\xFD"),
            TestCase::emits("Operator unary '~' 1", byte("~0"), b"\xFF"),
            TestCase::emits("Operator unary '~' 2", byte("~3"), b"\xFC"),
            TestCase::emits("Operator unary '~' 3", byte("~(-1)"), b"\x00"),
            TestCase::emits("Operator unary '!' 1", byte("!76"), b"\x00"),
            TestCase::emits("Operator unary '!' 2", byte("!0"), b"\x01"),
            TestCase::emits("Operator unary '!' 3", byte("!!7"), b"\x01"),
            TestCase::emits("Precedence 1 ('+', '*')", byte("1 + 2 * 3"), b"\x07"), // +7
            TestCase::emits("Precedence 2 ('-', '*')", byte("1 - 2 * 3"), b"\xFB"), // -5
            TestCase::emits("Precedence 3 ('+', '/')", byte("4 + 6 / 2"), b"\x07"), // +7 (not +5)
            TestCase::emits("Precedence 4 ('+', '%')", byte("5 + 5 % 2"), b"\x06"), // +6 (not +0)
            // Shifts bind looser than addition
            TestCase::emits("Precedence 5 ('<<', '+')", byte("2 << 1 + 5"), b"\x80"), // not 9
            TestCase::emits("Precedence 6 ('>>', '+')", byte("0xFF >> 1 + 5"), b"\x03"),
            TestCase::emits(
                "Precedence 7 ('>>>', '+')",
                byte("0x80000000 >>> 20 + 5"),
                b"\xC0",
            ),
            // TODO: more
        ],
    }
}
