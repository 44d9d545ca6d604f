#![allow(dead_code)]

use tremolo_core::bus::Bus;
use tremolo_core::cartridge::RomOnly;
use tremolo_core::cpu::Cpu;
use tremolo_core::gameboy::GameBoy;

/// A 32 KiB flat ROM with `program` placed at the post-boot entry point.
pub fn rom_with_program(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom
}

/// A machine booted with `program` mapped at 0x0100.
pub fn boot_with_program(program: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.load_cart(Box::new(RomOnly::new(rom_with_program(program))));
    gb
}

/// A bare CPU and bus with `program` mapped at 0x0100.
pub fn cpu_with_program(program: &[u8]) -> (Cpu, Bus) {
    let mut bus = Bus::new();
    bus.load_cart(Box::new(RomOnly::new(rom_with_program(program))));
    (Cpu::new(), bus)
}
