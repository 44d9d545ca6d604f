mod common;

use tremolo_core::bus::{self, MemOp, MemoryFault};
use tremolo_core::cartridge::{Cartridge, RomOnly};
use tremolo_core::cpu::{OpcodeTable, StepError};
use tremolo_core::envelope::bits_to_frequency;
use tremolo_core::gameboy::GameBoy;

#[test]
fn step_returns_t_states() {
    // LD BC,d16 is 3 machine cycles.
    let mut gb = common::boot_with_program(&[0x01, 0x34, 0x12]);
    assert_eq!(gb.step().unwrap(), 12);
    assert_eq!(gb.cpu.bc(), 0x1234);
}

#[test]
fn small_program_runs_to_halt() {
    // XOR A; INC A; INC A; INC A; HALT
    let mut gb = common::boot_with_program(&[0xAF, 0x3C, 0x3C, 0x3C, 0x76]);
    let mut total = 0u64;
    while !gb.cpu.halted {
        total += gb.step().unwrap() as u64;
    }
    assert_eq!(gb.cpu.a, 3);
    // Five 1-machine-cycle instructions.
    assert_eq!(total, 20);
}

#[test]
fn audio_advances_in_lockstep_with_the_cpu() {
    // Program the APU to beep voice 2 with a 1/4 s length, then halt.
    #[rustfmt::skip]
    let program = [
        0x3E, 0x80, 0xE0, 0x26, // NR52 <- 0x80
        0x3E, 0x22, 0xE0, 0x25, // NR51 <- voice 2 both sides
        0x3E, 0xF0, 0xE0, 0x17, // NR22 <- start 15, static
        0x3E, 0x83, 0xE0, 0x18, // NR23
        0x3E, 0xC7, 0xE0, 0x19, // NR24 <- trigger, length on, bits 0b111
        0x76,                   // HALT
    ];
    let mut gb = common::boot_with_program(&program);
    while !gb.cpu.halted {
        gb.step().unwrap();
    }
    assert!(gb.bus.register(bus::NR52).bit(1));
    assert!(!gb.apu.pulse_b.stopped);
    let expected = bits_to_frequency(0x783);
    assert!((gb.apu.pulse_b.frequency - expected).abs() < 1e-9);

    // The program leaves NR21 at its power-on value (0x3F), so with length
    // enabled the voice expires after (64 - 63) / 256 s of halting.
    let mut budget = 0u64;
    while gb.bus.register(bus::NR52).bit(1) {
        budget += gb.step().unwrap() as u64;
        assert!(budget < 4_194_304, "voice never expired");
    }
    assert!(gb.apu.pulse_b.stopped);
}

#[test]
fn unknown_opcode_stops_the_machine() {
    let mut gb = common::boot_with_program(&[0xED]);
    let err = gb.step().unwrap_err();
    assert_eq!(
        err,
        StepError::UnknownOpcode {
            table: OpcodeTable::Base,
            opcode: 0xED,
            pc: 0x0100,
        }
    );
}

/// Mapper that refuses RAM-window writes.
struct RamlessCart {
    rom: Vec<u8>,
}

impl Cartridge for RamlessCart {
    fn read(&mut self, addr: u16) -> Result<u8, MemoryFault> {
        Ok(self.rom.get(addr as usize).copied().unwrap_or(0xFF))
    }

    fn write(&mut self, addr: u16, _value: u8) -> Result<(), MemoryFault> {
        if (0xA000..=0xBFFF).contains(&addr) {
            return Err(MemoryFault {
                addr,
                op: MemOp::Write,
            });
        }
        Ok(())
    }
}

#[test]
fn memory_fault_surfaces_through_the_facade() {
    // LD (0xA123), A
    let rom = common::rom_with_program(&[0xEA, 0x23, 0xA1]);
    let mut gb = GameBoy::new();
    gb.load_cart(Box::new(RamlessCart { rom }));

    let err = gb.step().unwrap_err();
    assert_eq!(
        err,
        StepError::Memory(MemoryFault {
            addr: 0xA123,
            op: MemOp::Write,
        })
    );
}

#[test]
fn reset_preserves_the_cartridge() {
    let mut rom = common::rom_with_program(&[0x3C]); // INC A
    rom[0x0200] = 0x5A;
    let mut gb = GameBoy::new();
    gb.load_cart(Box::new(RomOnly::new(rom)));

    gb.step().unwrap();
    gb.bus.write_byte(0xC000, 0x11).unwrap();
    gb.reset();

    assert_eq!(gb.cpu.pc, 0x0100);
    assert_eq!(gb.cpu.a, 0x01);
    assert_eq!(gb.bus.read_byte(0xC000).unwrap(), 0x00);
    assert_eq!(gb.bus.read_byte(0x0200).unwrap(), 0x5A);
}

#[test]
fn interrupt_driven_wake_from_halt() {
    // EI; HALT; INC A (resume point); handler at 0x0050 is RETI.
    let mut rom = common::rom_with_program(&[0xFB, 0x76, 0x3C]);
    rom[0x0050] = 0xD9; // RETI
    let mut gb = GameBoy::new();
    gb.load_cart(Box::new(RomOnly::new(rom)));
    gb.bus.write_byte(0xFFFF, 0x04).unwrap(); // enable timer

    gb.step().unwrap(); // EI
    gb.step().unwrap(); // HALT
    assert!(gb.cpu.halted);
    for _ in 0..4 {
        gb.step().unwrap();
        assert!(gb.cpu.halted);
    }

    // A timer interrupt arrives (the timer itself is outside the core).
    gb.bus.register_mut(bus::IF).set(0x04);
    gb.step().unwrap(); // dispatch
    assert_eq!(gb.cpu.pc, 0x0050);
    gb.step().unwrap(); // RETI
    assert_eq!(gb.cpu.pc, 0x0102);
    gb.step().unwrap(); // INC A
    assert_eq!(gb.cpu.a, 0x02);
}
