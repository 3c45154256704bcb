// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use printex::platform::{PersistentStore, RamEeprom};
use printex::{EepromPrinter, Print, ProgmemPrinter, Render, SramPrinter};

struct Capture(Vec<u8>);

impl Print for Capture {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.0.push(byte);
        1
    }
}

fn replay<R: Render>(source: &R) -> Vec<u8> {
    let mut out = Capture(Vec::new());
    source.render_to(&mut out);
    out.0
}

fuzz_target!(|data: &[u8]| {
    let Some((&offset, payload)) = data.split_first() else {
        return;
    };

    // SRAM: render returns exactly what fit
    let mut buf = [0u8; 64];
    let mut sram = SramPrinter::with_region(&mut buf);
    let accepted = sram.write_bytes(payload);
    assert_eq!(accepted, payload.len().min(64));
    assert_eq!(replay(&sram), &payload[..accepted]);

    // EEPROM: same bytes back, never more writes than bytes
    let address = usize::from(offset % 64);
    let mut eeprom = RamEeprom::<128>::new();
    {
        let mut printer = EepromPrinter::with_address(&mut eeprom, address).unwrap();
        let accepted = printer.write_bytes(payload);
        assert_eq!(accepted, payload.len().min(128 - address));
        assert_eq!(replay(&printer), &payload[..accepted]);
    }
    assert!(eeprom.physical_writes() <= payload.len());
    assert!(eeprom.capacity() == 128);

    // PROGMEM: scan stops at the first zero or the end of the table
    let table = ProgmemPrinter::with_start(payload, 0);
    let expected = payload.iter().position(|&b| b == 0).unwrap_or(payload.len());
    assert_eq!(replay(&table), &payload[..expected]);
});
