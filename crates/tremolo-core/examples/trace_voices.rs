//! Headless demo: runs a small hand-assembled program that beeps the second
//! pulse voice and prints every oscillator parameter ramp the APU emits.
//!
//! Usage: `cargo run --example trace_voices [--seconds=N]`

use std::env;

use tremolo_core::cartridge::RomOnly;
use tremolo_core::diagnostics::{self, StderrSink};
use tremolo_core::gameboy::GameBoy;
use tremolo_core::oscillator::Oscillator;

const DEFAULT_SECONDS: f64 = 0.5;
const CLOCK_HZ: f64 = 4_194_304.0;

struct TraceOscillator {
    name: &'static str,
    last_amplitude: f32,
    last_frequency: f32,
}

impl TraceOscillator {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            last_amplitude: -1.0,
            last_frequency: -1.0,
        }
    }
}

impl Oscillator for TraceOscillator {
    fn start(&mut self) {
        println!("{}: start", self.name);
    }

    fn stop(&mut self) {
        println!("{}: stop", self.name);
    }

    fn set_frequency(&mut self, hz: f32) {
        println!("{}: frequency = {hz:.1} Hz", self.name);
    }

    fn ramp_frequency(&mut self, hz: f32, seconds: f32) {
        if hz != self.last_frequency {
            println!("{}: frequency -> {hz:.1} Hz over {seconds}s", self.name);
            self.last_frequency = hz;
        }
    }

    fn set_amplitude(&mut self, amplitude: f32) {
        println!("{}: amplitude = {amplitude:.3}", self.name);
    }

    fn ramp_amplitude(&mut self, amplitude: f32, seconds: f32) {
        if amplitude != self.last_amplitude {
            println!("{}: amplitude -> {amplitude:.3} over {seconds}s", self.name);
            self.last_amplitude = amplitude;
        }
    }

    fn set_pulse_width(&mut self, width: f32) {
        println!("{}: pulse width = {width}", self.name);
    }

    fn ramp_pan(&mut self, _pan: f32, _seconds: f32) {}
}

// LDH (reg), A pairs: program the APU, then halt.
#[rustfmt::skip]
const PROGRAM: &[u8] = &[
    0x3E, 0x80, 0xE0, 0x26, // NR52 <- 0x80 (master enable)
    0x3E, 0x77, 0xE0, 0x24, // NR50 <- 0x77 (full master volume)
    0x3E, 0x22, 0xE0, 0x25, // NR51 <- 0x22 (voice 2 on both channels)
    0x3E, 0xF3, 0xE0, 0x17, // NR22 <- 0xF3 (start 15, decreasing, 3/64 s)
    0x3E, 0x83, 0xE0, 0x18, // NR23 <- 0x83
    0x3E, 0x87, 0xE0, 0x19, // NR24 <- 0x87 (trigger, frequency 0x783)
    0x76,                   // HALT
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut seconds = DEFAULT_SECONDS;
    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--seconds=") {
            seconds = value.parse()?;
        } else {
            return Err(format!("unrecognised flag: {arg}").into());
        }
    }
    if seconds <= 0.0 {
        return Err("seconds must be positive".into());
    }

    // Route core diagnostic events (illegal opcodes, power edges) to stderr.
    let _ = diagnostics::try_set_sink(Box::new(StderrSink));

    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + PROGRAM.len()].copy_from_slice(PROGRAM);

    let mut gb = GameBoy::new();
    gb.apu.pulse_b.set_oscillator(Box::new(TraceOscillator::new("pulse B")));
    gb.load_cart(Box::new(RomOnly::new(rom)));

    let budget = (seconds * CLOCK_HZ) as u64;
    let mut elapsed = 0u64;
    while elapsed < budget {
        elapsed += gb.step()? as u64;
    }

    println!(
        "ran {elapsed} T-states ({:.3}s); {}",
        elapsed as f64 / CLOCK_HZ,
        gb.cpu.debug_state()
    );
    Ok(())
}
