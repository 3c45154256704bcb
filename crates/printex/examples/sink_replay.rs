// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sink Replay Example
//!
//! Formats a sensor reading into RAM, persists it to a simulated EEPROM,
//! then replays both plus a PROGMEM banner to stdout.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --example sink_replay --features std
//! ```

use std::io::Write;

use printex::platform::RamEeprom;
use printex::traits::{array_info, int_width};
use printex::{
    classify, extends, is_derived_from, EepromPrinter, Print, ProgmemPrinter, Result, SramPrinter,
};

/// Stdout as a print consumer
struct Stdout(std::io::Stdout);

impl Print for Stdout {
    fn write_byte(&mut self, byte: u8) -> usize {
        usize::from(self.0.write_all(&[byte]).is_ok())
    }
}

struct Sensor {
    id: u8,
}

struct Thermometer {
    sensor: Sensor,
    celsius: f32,
}

classify!(Sensor, Thermometer);
extends!(Thermometer => Sensor, sensor);

static BANNER: [u8; 18] = *b"printex demo v0.3\0";

fn main() -> Result<()> {
    // RUST_LOG=debug shows sink binds and dropped bytes
    env_logger::init();

    let mut out = Stdout(std::io::stdout());

    let banner = ProgmemPrinter::with_start(&BANNER, 0);
    out.print_from(&banner);
    out.print("\n");

    let probe = Thermometer {
        sensor: Sensor { id: 3 },
        celsius: 21.5,
    };

    // Format once into RAM
    let mut scratch = [0u8; 64];
    let mut sram = SramPrinter::with_region(&mut scratch);
    sram.print("sensor=");
    sram.print(&probe.sensor.id);
    sram.print(" celsius=");
    sram.print(&probe.celsius);
    sram.print(" raw=");
    sram.print(&[0x1Fu8, 0x2A]);
    println!("sram: {} bytes", sram.count());

    // Persist twice; the second pass finds every cell already programmed
    let mut eeprom = RamEeprom::<128>::new();
    for pass in 1..=2 {
        let mut log = EepromPrinter::with_address(&mut eeprom, 0x10)?;
        log.print_from(&sram);
        println!(
            "eeprom pass {}: {} bytes, {} cell writes so far",
            pass,
            log.count(),
            log.store().physical_writes()
        );
    }

    let mut log = EepromPrinter::new(&mut eeprom);
    log.assign(0x10, sram.count())?;
    out.print("replay: ");
    out.print_from(&log);
    out.print("\n");

    println!(
        "Thermometer derives from Sensor: {}",
        is_derived_from!(Sensor, Thermometer)
    );
    println!("u16 width: {:?}", int_width::<u16>());
    println!(
        "[[f32; 3]; 2] extents: {:?}",
        array_info::<[[f32; 3]; 2]>().extents()
    );
    Ok(())
}
