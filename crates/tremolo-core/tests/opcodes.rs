mod common;

use tremolo_core::bus::Bus;
use tremolo_core::cpu::{Cpu, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use tremolo_core::opcodes::{BASE, Exec, PREFIXED};

#[test]
fn ld_bc_d16() {
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x01, 0x34, 0x12]);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.bc(), 0x1234);
    assert_eq!(cpu.pc, 0x0103);
    assert_eq!(cycles, 3);
}

#[test]
fn inc_b_sets_zero_and_half_carry() {
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x04]);
    cpu.b = 0xFF;
    cpu.set_f(0x00);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.b, 0x00);
    assert_eq!(cpu.f(), FLAG_Z | FLAG_H);
    assert_eq!(cycles, 1);

    // Carry is untouched in either direction.
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x04]);
    cpu.b = 0xFF;
    cpu.set_f(FLAG_C);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.f(), FLAG_Z | FLAG_H | FLAG_C);
}

#[test]
fn rlca() {
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x07]);
    cpu.a = 0x85;
    cpu.set_f(0x00);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x0B);
    assert_eq!(cpu.f(), FLAG_C);
    assert_eq!(cycles, 1);
}

#[test]
fn xor_a() {
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xAF]);
    cpu.a = 0x3C;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x00);
    assert_eq!(cpu.f(), FLAG_Z);
    assert_eq!(cycles, 1);
}

#[test]
fn daa_adjusts_bcd_addition() {
    // LD A,0x15; ADD A,0x27; DAA
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x3E, 0x15, 0xC6, 0x27, 0x27]);
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x42);
    assert!(!cpu.flag(FLAG_C));
}

#[test]
fn jr_backwards_offset_is_signed() {
    // JR -2 loops onto itself.
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x18, 0xFE]);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc, 0x0100);
}

#[test]
fn conditional_jr_cycles() {
    // JR NZ,+2 taken
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x20, 0x02]);
    cpu.set_f(0x00);
    assert_eq!(cpu.step(&mut bus).unwrap(), 3);
    assert_eq!(cpu.pc, 0x0104);

    // JR NZ,+2 not taken: operand is still consumed.
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x20, 0x02]);
    cpu.set_f(FLAG_Z);
    assert_eq!(cpu.step(&mut bus).unwrap(), 2);
    assert_eq!(cpu.pc, 0x0102);
}

#[test]
fn conditional_jp_call_ret_cycles() {
    // JP Z,a16
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCA, 0x00, 0xC0]);
    cpu.set_f(FLAG_Z);
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.pc, 0xC000);

    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCA, 0x00, 0xC0]);
    cpu.set_f(0x00);
    assert_eq!(cpu.step(&mut bus).unwrap(), 3);
    assert_eq!(cpu.pc, 0x0103);

    // CALL NC,a16
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xD4, 0x00, 0xC0]);
    cpu.sp = 0xD000;
    cpu.set_f(0x00);
    assert_eq!(cpu.step(&mut bus).unwrap(), 6);
    assert_eq!(cpu.pc, 0xC000);
    assert_eq!(bus.read_word(0xCFFE).unwrap(), 0x0103);

    let (mut cpu, mut bus) = common::cpu_with_program(&[0xD4, 0x00, 0xC0]);
    cpu.set_f(FLAG_C);
    assert_eq!(cpu.step(&mut bus).unwrap(), 3);

    // RET C
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xD8]);
    cpu.sp = 0xD000;
    bus.write_word(0xD000, 0x4321).unwrap();
    cpu.set_f(FLAG_C);
    assert_eq!(cpu.step(&mut bus).unwrap(), 5);
    assert_eq!(cpu.pc, 0x4321);

    let (mut cpu, mut bus) = common::cpu_with_program(&[0xD8]);
    cpu.set_f(0x00);
    assert_eq!(cpu.step(&mut bus).unwrap(), 2);
    assert_eq!(cpu.pc, 0x0101);
}

#[test]
fn ld_hl_variants_move_the_pointer() {
    // LD (HL+),A; LD (HL-),A
    let (mut cpu, mut bus) = common::cpu_with_program(&[0x22, 0x32]);
    cpu.a = 0x5A;
    cpu.set_hl(0xC000);
    cpu.step(&mut bus).unwrap();
    assert_eq!(bus.read_byte(0xC000).unwrap(), 0x5A);
    assert_eq!(cpu.hl(), 0xC001);
    cpu.step(&mut bus).unwrap();
    assert_eq!(bus.read_byte(0xC001).unwrap(), 0x5A);
    assert_eq!(cpu.hl(), 0xC000);
}

#[test]
fn add_sp_relative_flags() {
    // ADD SP,-1
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xE8, 0xFF]);
    cpu.sp = 0x0000;
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.sp, 0xFFFF);
    assert!(!cpu.flag(FLAG_Z));
    assert!(!cpu.flag(FLAG_N));
}

#[test]
fn cb_bit_test_keeps_carry() {
    // BIT 7,H with H=0x00
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCB, 0x7C]);
    cpu.h = 0x00;
    cpu.set_f(FLAG_C);
    assert_eq!(cpu.step(&mut bus).unwrap(), 2);
    assert_eq!(cpu.f(), FLAG_Z | FLAG_H | FLAG_C);
}

#[test]
fn cb_swap() {
    // SWAP A
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCB, 0x37]);
    cpu.a = 0xF0;
    cpu.set_f(FLAG_C | FLAG_N | FLAG_H);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x0F);
    assert_eq!(cpu.f(), 0x00);
}

#[test]
fn cb_hl_memory_operand_cycles() {
    // RLC (HL): 4 machine cycles (16 T-states).
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCB, 0x06]);
    cpu.set_hl(0xC000);
    bus.write_byte(0xC000, 0x80).unwrap();
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(bus.read_byte(0xC000).unwrap(), 0x01);

    // BIT 0,(HL): 3 machine cycles (12 T-states), no write-back.
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCB, 0x46]);
    cpu.set_hl(0xC000);
    bus.write_byte(0xC000, 0x01).unwrap();
    assert_eq!(cpu.step(&mut bus).unwrap(), 3);
    assert!(!cpu.flag(FLAG_Z));

    // SET 3,(HL): 4 machine cycles (16 T-states).
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCB, 0xDE]);
    cpu.set_hl(0xC000);
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(bus.read_byte(0xC000).unwrap(), 0x08);

    // RES 3,(HL)
    let (mut cpu, mut bus) = common::cpu_with_program(&[0xCB, 0x9E]);
    cpu.set_hl(0xC000);
    bus.write_byte(0xC000, 0xFF).unwrap();
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(bus.read_byte(0xC000).unwrap(), 0xF7);
}

#[test]
fn base_table_shape() {
    assert_eq!(BASE.len(), 256);
    let holes: Vec<usize> = BASE
        .iter()
        .enumerate()
        .filter(|(_, op)| matches!(op.exec, Exec::Illegal))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(
        holes,
        vec![0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
    );
}

#[test]
fn prefixed_table_has_no_holes() {
    assert_eq!(PREFIXED.len(), 256);
    for (i, op) in PREFIXED.iter().enumerate() {
        assert!(
            !matches!(op.exec, Exec::Illegal),
            "prefixed opcode {i:#04X} should be implemented"
        );
        assert!(op.cycles >= 2, "prefixed opcode {i:#04X} is at least 2 cycles");
    }
}

#[test]
fn conditional_entries_declare_both_cycle_counts() {
    for (i, op) in BASE.iter().enumerate() {
        match op.exec {
            Exec::Cond(_) => assert!(
                op.cycles > op.cycles_not_taken,
                "opcode {i:#04X}: taken path must cost more"
            ),
            Exec::Fixed(_) => assert_eq!(op.cycles, op.cycles_not_taken),
            Exec::Illegal => {}
        }
    }
}

/// Execute an opcode out of WRAM with zeroed operands and benign register
/// state, and check the returned cycle count against the table's declaration.
fn run_one(opcode: &[u8], f: u8) -> (u32, Cpu) {
    let mut bus = Bus::new();
    let mut cpu = Cpu::new();
    for (i, byte) in opcode.iter().enumerate() {
        bus.write_byte(0xC000 + i as u16, *byte).unwrap();
    }
    cpu.pc = 0xC000;
    cpu.sp = 0xD800;
    cpu.set_hl(0xD000);
    cpu.set_bc(0xD010);
    cpu.set_de(0xD020);
    cpu.set_f(f);
    let cycles = cpu.step(&mut bus).unwrap();
    (cycles, cpu)
}

#[test]
fn every_implemented_base_opcode_returns_its_declared_cycles() {
    for (i, op) in BASE.iter().enumerate() {
        match op.exec {
            Exec::Fixed(_) => {
                if i == 0xCB {
                    continue; // never dispatched as a base entry
                }
                let (cycles, _) = run_one(&[i as u8, 0x00, 0x00], 0x00);
                assert_eq!(
                    cycles, op.cycles as u32,
                    "opcode {i:#04X} ({})",
                    op.mnemonic
                );
            }
            Exec::Cond(_) => {
                // One flag state takes the branch, the other does not; both
                // declared counts must be observed.
                let (clear, _) = run_one(&[i as u8, 0x00, 0x00], 0x00);
                let (set, _) = run_one(&[i as u8, 0x00, 0x00], 0xF0);
                let mut observed = [clear, set];
                observed.sort_unstable();
                assert_eq!(
                    observed,
                    [op.cycles_not_taken as u32, op.cycles as u32],
                    "opcode {i:#04X} ({})",
                    op.mnemonic
                );
            }
            Exec::Illegal => {}
        }
    }
}

#[test]
fn every_prefixed_opcode_returns_its_declared_cycles() {
    for (i, op) in PREFIXED.iter().enumerate() {
        let (cycles, cpu) = run_one(&[0xCB, i as u8], 0x00);
        assert_eq!(
            cycles, op.cycles as u32,
            "prefixed opcode {i:#04X} ({})",
            op.mnemonic
        );
        assert_eq!(cpu.pc, 0xC002, "prefixed opcode {i:#04X} length");
    }
}

#[test]
fn register_operand_decode_follows_the_cb_pattern() {
    // Bits 2..0 select the operand: B,C,D,E,H,L,(HL),A.
    for (lo, expect) in [(0x00u8, "B"), (0x01, "C"), (0x05, "L"), (0x07, "A")] {
        let op = &PREFIXED[(0x80 | lo) as usize];
        assert_eq!(op.mnemonic, format!("RES 0,{expect}"));
    }
    assert_eq!(PREFIXED[0x86].mnemonic, "RES 0,(HL)");
    assert_eq!(PREFIXED[0xFE].mnemonic, "SET 7,(HL)");
    assert_eq!(PREFIXED[0x40].mnemonic, "BIT 0,B");
    assert_eq!(PREFIXED[0x38].mnemonic, "SRL B");
}
