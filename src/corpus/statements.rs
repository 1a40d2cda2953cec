//! Statement vectors: ORG, PUSH/POP, ALIGN, FILL, ASSERT, STRING, BASE64,
//! PROTECT.
//!
//! Gaps between written regions are zero-filled, so the artifact always
//! spans offset 0 through the highest written byte.

use super::{TestCase, TestGroup};

pub(super) fn group() -> TestGroup {
    TestGroup {
        name: "statements",
        cases: vec![
            // =================
            // = ORG Statement =
            // =================

            // Nominal behavior
            TestCase::emits(
                "ORG Basic",
                "ORG 1 ; BYTE 1 ; ORG 10 ; BYTE 10",
                b"\x00\x01\x00\x00\x00\x00\x00\x00\x00\x00\x0A",
            ),
            // Also works backwards
            TestCase::emits(
                "ORG Backwards",
                "ORG 10 ; BYTE 10 ; ORG 1 ; BYTE 1",
                b"\x00\x01\x00\x00\x00\x00\x00\x00\x00\x00\x0A",
            ),
            // Addresses are offsets
            TestCase::emits(
                "ORG Addresses",
                "ORG 0x08000001 ; BYTE 1 ; ORG 0x0800000A ; BYTE 10",
                b"\x00\x01\x00\x00\x00\x00\x00\x00\x00\x00\x0A",
            ),
            // Error on offset too big
            TestCase::rejects("ORG Overflow", "ORG 0x10000000 ; BYTE 1"),
            // Error on offset too small/negative
            TestCase::rejects("ORG Underflow", "ORG -1 ; BYTE 1"),
            // =======================
            // = PUSH/POP Statements =
            // =======================
            TestCase::emits(
                "PUSH POP Basic",
                "ORG 4 ; PUSH ; ORG 1 ; POP ; BYTE CURRENTOFFSET",
                b"\x00\x00\x00\x00\x04",
            ),
            TestCase::emits(
                "PUSH POP Override",
                "ORG 0 ; PUSH ; BYTE 0xAA ; POP ; BYTE 0xBB",
                b"\xBB",
            ),
            TestCase::rejects("POP Naked", "ORG 0 ; BYTE 0 ; POP"),
            // ===================
            // = ALIGN Statement =
            // ===================
            TestCase::emits(
                "ALIGN Basic",
                "ORG 1 ; ALIGN 4 ; BYTE CURRENTOFFSET",
                b"\x00\x00\x00\x00\x04",
            ),
            TestCase::emits(
                "ALIGN Aligned",
                "ORG 4 ; ALIGN 4 ; BYTE CURRENTOFFSET",
                b"\x00\x00\x00\x00\x04",
            ),
            TestCase::rejects("ALIGN Zero", "ORG 1 ; ALIGN 0 ; BYTE CURRENTOFFSET"),
            TestCase::rejects("ALIGN Negative", "ORG 1 ; ALIGN -1 ; BYTE CURRENTOFFSET"),
            // Second operand offsets the alignment grid
            TestCase::emits(
                "ALIGN Offset",
                "ORG 2 ; ALIGN 4 1 ; BYTE CURRENTOFFSET",
                b"\x00\x00\x00\x00\x00\x05",
            ),
            TestCase::emits(
                "ALIGN Offset Aligned",
                "ORG 1 ; ALIGN 4 1 ; BYTE CURRENTOFFSET",
                b"\x00\x01",
            ),
            // ==================
            // = FILL Statement =
            // ==================
            TestCase::emits(
                "FILL Basic",
                "ORG 0 ; FILL 0x10",
                &[0x00; 0x10],
            ),
            TestCase::emits(
                "FILL Value",
                "ORG 4 ; FILL 0x10 0xFF",
                b"\x00\x00\x00\x00\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF",
            ),
            TestCase::rejects("FILL Zero", "ORG 0 ; FILL 0"),
            TestCase::rejects("FILL Negative", "ORG -1 ; FILL 0"),
            // ====================
            // = ASSERT Statement =
            // ====================

            // Traditional form: asserts the expression is non-negative
            TestCase::emits("ASSERT Traditional", "ASSERT 0", b""),
            TestCase::rejects("ASSERT Traditional Failure", "ASSERT -1"),
            TestCase::emits("ASSERT Conditional", "ASSERT 1 > 0", b""),
            TestCase::rejects("ASSERT Conditional Failure", "ASSERT 1 < 0"),
            TestCase::rejects("ASSERT Traditional Expression Failure", "ASSERT 1 - 2"),
            // ====================
            // = STRING Statement =
            // ====================
            // incomplete
            TestCase::emits("STRING Basic", "ORG 0 ; STRING \"Hello World\"", b"Hello World"),
            // ====================
            // = BASE64 Statement =
            // ====================
            TestCase::emits(
                "BASE64",
                " BASE64 \"RXZlbnQgQXNzZW1ibGVy\"",
                b"Event Assembler",
            ),
            // =====================
            // = PROTECT Statement =
            // =====================
            TestCase::rejects("PROTECT Basic", "PROTECT 0 4 ; ORG 0 ; BYTE 1"),
            TestCase::rejects("PROTECT Edge 1", "PROTECT 0 4 ; ORG 3 ; BYTE 1"),
            TestCase::emits(
                "PROTECT Edge 2",
                "PROTECT 0 4 ; ORG 4 ; BYTE 1",
                b"\x00\x00\x00\x00\x01",
            ),
            // PROTECT only guards writes issued after it
            TestCase::emits("PROTECT Late", "ORG 0 ; BYTE 1 ; PROTECT 0 4", b"\x01"),
            // default PROTECT end is start + 4
            TestCase::emits(
                "PROTECT Default range 1",
                "PROTECT 0 ; ORG 4 ; BYTE 1",
                b"\x00\x00\x00\x00\x01",
            ),
            TestCase::rejects("PROTECT Default range 2", "PROTECT 0 ; ORG 3 ; BYTE 1"),
        ],
    }
}
