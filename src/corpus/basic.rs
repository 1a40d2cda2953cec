//! Smoke vectors: minimal emission plus POIN pointer conversion.

use super::{TestCase, TestGroup};

pub(super) fn group() -> TestGroup {
    TestGroup {
        name: "basic",
        cases: vec![
            TestCase::emits("Basic", "ORG 0 ; BYTE 1", b"\x01"),
            TestCase::emits("Addition", "ORG 0 ; BYTE 1 + 2", b"\x03"),
            TestCase::emits("Precedence 1", "ORG 0 ; BYTE 1 + 2 * 10", b"\x15"),
            // POIN maps ROM offsets into the hardware address space.
            TestCase::emits("POIN 1", "ORG 0 ; POIN 4", b"\x04\x00\x00\x08"),
            TestCase::emits("POIN 2", "ORG 0 ; POIN 0", b"\x00\x00\x00\x00"),
            TestCase::emits("POIN 3", "ORG 0 ; POIN 0x08000000", b"\x00\x00\x00\x08"),
            TestCase::emits("POIN 4", "ORG 0 ; POIN 0x02000000", b"\x00\x00\x00\x02"),
        ],
    }
}
