//! Label and symbol resolution vectors.
//!
//! Labels evaluate to hardware addresses (ROM offset mapped into the 0x08
//! address space) while `:=` symbols evaluate to whatever expression they
//! were assigned; both support forward references.

use super::{TestCase, TestGroup};

pub(super) fn group() -> TestGroup {
    TestGroup {
        name: "symbols",
        cases: vec![
            TestCase::emits(
                "Label Basic",
                "ORG 4 ; MyLabel: ; ORG 0 ; BYTE MyLabel",
                b"\x04",
            ),
            TestCase::rejects("Label None", "ORG 0 ; BYTE MyLabel"),
            TestCase::emits(
                "Label Address",
                "ORG 4 ; MyLabel: ; ORG 0 ; WORD MyLabel",
                b"\x04\x00\x00\x08",
            ),
            TestCase::emits(
                "Label POIN",
                "ORG 4 ; MyLabel: ; ORG 0 ; POIN MyLabel",
                b"\x04\x00\x00\x08",
            ),
            TestCase::emits(
                "Label Forward",
                "ORG 0 ; WORD MyLabel ; MyLabel:",
                b"\x04\x00\x00\x08",
            ),
            TestCase::emits(
                "Symbol Basic",
                "MySymbol := 0xBEEF ; ORG 0 ; SHORT MySymbol",
                b"\xEF\xBE",
            ),
            TestCase::emits(
                "Symbol Reference Forward",
                "ORG 0 ; SHORT MySymbol ; MySymbol := 0xBEEF",
                b"\xEF\xBE",
            ),
            TestCase::emits(
                "Symbol Evaluate Forward",
                "MySymbol := MyLabel + 0xA0 ; ORG 0 ; BYTE MySymbol ; MyLabel:",
                b"\xA1",
            ),
            // Scoped labels are invisible outside their block
            TestCase::emits(
                "Scope Basic",
                "ORG 0 ; { MyLabel: BYTE MyLabel + 1 ; }",
                b"\x01",
            ),
            TestCase::rejects("Scope Failure", "ORG 0 ; { MyLabel: BYTE 0 ; } BYTE MyLabel"),
            TestCase::emits(
                "Scope Up",
                "ORG 0 ; MyLabel: { BYTE MyLabel + 1 ; }",
                b"\x01",
            ),
        ],
    }
}
