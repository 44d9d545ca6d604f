//! The two 256-entry instruction dispatch tables.
//!
//! Every entry is a data record: mnemonic, machine-cycle cost (plus a
//! separate not-taken cost for conditional control flow) and the effect to
//! apply to the CPU and bus. The step loop in [`crate::cpu`] indexes these
//! tables with the fetched opcode byte; a `0xCB` fetch re-routes into
//! [`PREFIXED`]. Effects read their own immediate operands through
//! `read_next_byte`/`read_next_word`, which advance PC.

use crate::alu;
use crate::bus::Bus;
use crate::cpu::{Cpu, FLAG_C, FLAG_H, FLAG_N, FLAG_Z, StepError};

/// Effect of an unconditional instruction.
pub type EffectFn = fn(&mut Cpu, &mut Bus) -> Result<(), StepError>;

/// Effect of a conditional instruction; the returned flag selects between
/// the taken and not-taken cycle counts.
pub type BranchFn = fn(&mut Cpu, &mut Bus) -> Result<bool, StepError>;

pub enum Exec {
    Fixed(EffectFn),
    Cond(BranchFn),
    /// No defined effect on the LR35902; dispatching reports `UnknownOpcode`.
    Illegal,
}

/// One decoded instruction-table entry.
pub struct Opcode {
    pub mnemonic: &'static str,
    /// Machine cycles consumed (the taken path for conditional entries).
    pub cycles: u8,
    pub cycles_not_taken: u8,
    pub exec: Exec,
}

const fn fixed(mnemonic: &'static str, cycles: u8, effect: EffectFn) -> Opcode {
    Opcode {
        mnemonic,
        cycles,
        cycles_not_taken: cycles,
        exec: Exec::Fixed(effect),
    }
}

const fn cond(mnemonic: &'static str, taken: u8, not_taken: u8, effect: BranchFn) -> Opcode {
    Opcode {
        mnemonic,
        cycles: taken,
        cycles_not_taken: not_taken,
        exec: Exec::Cond(effect),
    }
}

const fn illegal() -> Opcode {
    Opcode {
        mnemonic: "??",
        cycles: 0,
        cycles_not_taken: 0,
        exec: Exec::Illegal,
    }
}

fn add_a(cpu: &mut Cpu, value: u8) {
    let r = alu::add8(cpu.a, value);
    cpu.a = r.value;
    cpu.set_flags_from(&r);
}

fn adc_a(cpu: &mut Cpu, value: u8) {
    let r = alu::adc8(cpu.a, value, cpu.flag(FLAG_C));
    cpu.a = r.value;
    cpu.set_flags_from(&r);
}

fn sub_a(cpu: &mut Cpu, value: u8) {
    let r = alu::sub8(cpu.a, value);
    cpu.a = r.value;
    cpu.set_flags_from(&r);
}

fn sbc_a(cpu: &mut Cpu, value: u8) {
    let r = alu::sbc8(cpu.a, value, cpu.flag(FLAG_C));
    cpu.a = r.value;
    cpu.set_flags_from(&r);
}

fn and_a(cpu: &mut Cpu, value: u8) {
    let r = alu::and8(cpu.a, value);
    cpu.a = r.value;
    cpu.set_flags_from(&r);
}

fn xor_a(cpu: &mut Cpu, value: u8) {
    let r = alu::xor8(cpu.a, value);
    cpu.a = r.value;
    cpu.set_flags_from(&r);
}

fn or_a(cpu: &mut Cpu, value: u8) {
    let r = alu::or8(cpu.a, value);
    cpu.a = r.value;
    cpu.set_flags_from(&r);
}

/// CP discards the difference; only the flags land.
fn cp_a(cpu: &mut Cpu, value: u8) {
    let r = alu::sub8(cpu.a, value);
    cpu.set_flags_from(&r);
}

fn inc(cpu: &mut Cpu, value: u8) -> u8 {
    let r = alu::inc8(value);
    cpu.set_flags_keep_carry(&r);
    r.value
}

fn dec(cpu: &mut Cpu, value: u8) -> u8 {
    let r = alu::dec8(value);
    cpu.set_flags_keep_carry(&r);
    r.value
}

fn add_hl(cpu: &mut Cpu, value: u16) {
    let r = alu::add16(cpu.hl(), value);
    cpu.set_hl(r.value);
    cpu.set_flags_keep_zero(&r);
}

fn daa_a(cpu: &mut Cpu) {
    let r = alu::daa(cpu.a, cpu.flag(FLAG_N), cpu.flag(FLAG_H), cpu.flag(FLAG_C));
    cpu.a = r.value;
    let mut f = cpu.f() & FLAG_N;
    if r.zero {
        f |= FLAG_Z;
    }
    if r.carry {
        f |= FLAG_C;
    }
    cpu.set_f(f);
}

/// The relative offset is fetched whether or not the jump is taken.
fn jr_if(cpu: &mut Cpu, bus: &mut Bus, taken: bool) -> Result<bool, StepError> {
    let offset = cpu.read_next_byte(bus)? as i8;
    if taken {
        cpu.pc = cpu.pc.wrapping_add(offset as u16);
    }
    Ok(taken)
}

fn jp_if(cpu: &mut Cpu, bus: &mut Bus, taken: bool) -> Result<bool, StepError> {
    let addr = cpu.read_next_word(bus)?;
    if taken {
        cpu.pc = addr;
    }
    Ok(taken)
}

fn call_if(cpu: &mut Cpu, bus: &mut Bus, taken: bool) -> Result<bool, StepError> {
    let addr = cpu.read_next_word(bus)?;
    if taken {
        cpu.push_word(bus, cpu.pc)?;
        cpu.pc = addr;
    }
    Ok(taken)
}

fn ret_if(cpu: &mut Cpu, bus: &mut Bus, taken: bool) -> Result<bool, StepError> {
    if taken {
        cpu.pc = cpu.pop_word(bus)?;
    }
    Ok(taken)
}

fn rst(cpu: &mut Cpu, bus: &mut Bus, target: u16) -> Result<(), StepError> {
    cpu.push_word(bus, cpu.pc)?;
    cpu.pc = target;
    Ok(())
}


/// The unprefixed opcode space.
pub static BASE: [Opcode; 256] = [
    // 0x00
    fixed("NOP", 1, |_, _| Ok(())),
    // 0x01
    fixed("LD BC,d16", 3, |cpu, bus| {
        let value = cpu.read_next_word(bus)?;
        cpu.set_bc(value);
        Ok(())
    }),
    // 0x02
    fixed("LD (BC),A", 2, |cpu, bus| {
        bus.write_byte(cpu.bc(), cpu.a)?;
        Ok(())
    }),
    // 0x03
    fixed("INC BC", 2, |cpu, _| {
        cpu.set_bc(cpu.bc().wrapping_add(1));
        Ok(())
    }),
    // 0x04
    fixed("INC B", 1, |cpu, _| {
        let value = cpu.b;
        cpu.b = inc(cpu, value);
        Ok(())
    }),
    // 0x05
    fixed("DEC B", 1, |cpu, _| {
        let value = cpu.b;
        cpu.b = dec(cpu, value);
        Ok(())
    }),
    // 0x06
    fixed("LD B,d8", 2, |cpu, bus| {
        cpu.b = cpu.read_next_byte(bus)?;
        Ok(())
    }),
    // 0x07
    fixed("RLCA", 1, |cpu, _| {
        let r = alu::rlc(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_rotate_a(&r);
        Ok(())
    }),
    // 0x08
    fixed("LD (a16),SP", 5, |cpu, bus| {
        let addr = cpu.read_next_word(bus)?;
        bus.write_word(addr, cpu.sp)?;
        Ok(())
    }),
    // 0x09
    fixed("ADD HL,BC", 2, |cpu, _| {
        let value = cpu.bc();
        add_hl(cpu, value);
        Ok(())
    }),
    // 0x0A
    fixed("LD A,(BC)", 2, |cpu, bus| {
        cpu.a = bus.read_byte(cpu.bc())?;
        Ok(())
    }),
    // 0x0B
    fixed("DEC BC", 2, |cpu, _| {
        cpu.set_bc(cpu.bc().wrapping_sub(1));
        Ok(())
    }),
    // 0x0C
    fixed("INC C", 1, |cpu, _| {
        let value = cpu.c;
        cpu.c = inc(cpu, value);
        Ok(())
    }),
    // 0x0D
    fixed("DEC C", 1, |cpu, _| {
        let value = cpu.c;
        cpu.c = dec(cpu, value);
        Ok(())
    }),
    // 0x0E
    fixed("LD C,d8", 2, |cpu, bus| {
        cpu.c = cpu.read_next_byte(bus)?;
        Ok(())
    }),
    // 0x0F
    fixed("RRCA", 1, |cpu, _| {
        let r = alu::rrc(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_rotate_a(&r);
        Ok(())
    }),
    // 0x10
    fixed("STOP", 1, |cpu, bus| {
        // The padding byte after STOP is fetched and discarded.
        let _ = cpu.read_next_byte(bus)?;
        cpu.stopped = true;
        Ok(())
    }),
    // 0x11
    fixed("LD DE,d16", 3, |cpu, bus| {
        let value = cpu.read_next_word(bus)?;
        cpu.set_de(value);
        Ok(())
    }),
    // 0x12
    fixed("LD (DE),A", 2, |cpu, bus| {
        bus.write_byte(cpu.de(), cpu.a)?;
        Ok(())
    }),
    // 0x13
    fixed("INC DE", 2, |cpu, _| {
        cpu.set_de(cpu.de().wrapping_add(1));
        Ok(())
    }),
    // 0x14
    fixed("INC D", 1, |cpu, _| {
        let value = cpu.d;
        cpu.d = inc(cpu, value);
        Ok(())
    }),
    // 0x15
    fixed("DEC D", 1, |cpu, _| {
        let value = cpu.d;
        cpu.d = dec(cpu, value);
        Ok(())
    }),
    // 0x16
    fixed("LD D,d8", 2, |cpu, bus| {
        cpu.d = cpu.read_next_byte(bus)?;
        Ok(())
    }),
    // 0x17
    fixed("RLA", 1, |cpu, _| {
        let r = alu::rl(cpu.a, cpu.flag(FLAG_C));
        cpu.a = r.value;
        cpu.set_flags_rotate_a(&r);
        Ok(())
    }),
    // 0x18
    fixed("JR r8", 3, |cpu, bus| {
        jr_if(cpu, bus, true)?;
        Ok(())
    }),
    // 0x19
    fixed("ADD HL,DE", 2, |cpu, _| {
        let value = cpu.de();
        add_hl(cpu, value);
        Ok(())
    }),
    // 0x1A
    fixed("LD A,(DE)", 2, |cpu, bus| {
        cpu.a = bus.read_byte(cpu.de())?;
        Ok(())
    }),
    // 0x1B
    fixed("DEC DE", 2, |cpu, _| {
        cpu.set_de(cpu.de().wrapping_sub(1));
        Ok(())
    }),
    // 0x1C
    fixed("INC E", 1, |cpu, _| {
        let value = cpu.e;
        cpu.e = inc(cpu, value);
        Ok(())
    }),
    // 0x1D
    fixed("DEC E", 1, |cpu, _| {
        let value = cpu.e;
        cpu.e = dec(cpu, value);
        Ok(())
    }),
    // 0x1E
    fixed("LD E,d8", 2, |cpu, bus| {
        cpu.e = cpu.read_next_byte(bus)?;
        Ok(())
    }),
    // 0x1F
    fixed("RRA", 1, |cpu, _| {
        let r = alu::rr(cpu.a, cpu.flag(FLAG_C));
        cpu.a = r.value;
        cpu.set_flags_rotate_a(&r);
        Ok(())
    }),
    // 0x20
    cond("JR NZ,r8", 3, 2, |cpu, bus| {
        let taken = !cpu.flag(FLAG_Z);
        jr_if(cpu, bus, taken)
    }),
    // 0x21
    fixed("LD HL,d16", 3, |cpu, bus| {
        let value = cpu.read_next_word(bus)?;
        cpu.set_hl(value);
        Ok(())
    }),
    // 0x22
    fixed("LD (HL+),A", 2, |cpu, bus| {
        let addr = cpu.hl();
        bus.write_byte(addr, cpu.a)?;
        cpu.set_hl(addr.wrapping_add(1));
        Ok(())
    }),
    // 0x23
    fixed("INC HL", 2, |cpu, _| {
        cpu.set_hl(cpu.hl().wrapping_add(1));
        Ok(())
    }),
    // 0x24
    fixed("INC H", 1, |cpu, _| {
        let value = cpu.h;
        cpu.h = inc(cpu, value);
        Ok(())
    }),
    // 0x25
    fixed("DEC H", 1, |cpu, _| {
        let value = cpu.h;
        cpu.h = dec(cpu, value);
        Ok(())
    }),
    // 0x26
    fixed("LD H,d8", 2, |cpu, bus| {
        cpu.h = cpu.read_next_byte(bus)?;
        Ok(())
    }),
    // 0x27
    fixed("DAA", 1, |cpu, _| {
        daa_a(cpu);
        Ok(())
    }),
    // 0x28
    cond("JR Z,r8", 3, 2, |cpu, bus| {
        let taken = cpu.flag(FLAG_Z);
        jr_if(cpu, bus, taken)
    }),
    // 0x29
    fixed("ADD HL,HL", 2, |cpu, _| {
        let value = cpu.hl();
        add_hl(cpu, value);
        Ok(())
    }),
    // 0x2A
    fixed("LD A,(HL+)", 2, |cpu, bus| {
        let addr = cpu.hl();
        cpu.a = bus.read_byte(addr)?;
        cpu.set_hl(addr.wrapping_add(1));
        Ok(())
    }),
    // 0x2B
    fixed("DEC HL", 2, |cpu, _| {
        cpu.set_hl(cpu.hl().wrapping_sub(1));
        Ok(())
    }),
    // 0x2C
    fixed("INC L", 1, |cpu, _| {
        let value = cpu.l;
        cpu.l = inc(cpu, value);
        Ok(())
    }),
    // 0x2D
    fixed("DEC L", 1, |cpu, _| {
        let value = cpu.l;
        cpu.l = dec(cpu, value);
        Ok(())
    }),
    // 0x2E
    fixed("LD L,d8", 2, |cpu, bus| {
        cpu.l = cpu.read_next_byte(bus)?;
        Ok(())
    }),
    // 0x2F
    fixed("CPL", 1, |cpu, _| {
        cpu.a ^= 0xFF;
        cpu.set_f((cpu.f() & (FLAG_Z | FLAG_C)) | FLAG_N | FLAG_H);
        Ok(())
    }),
    // 0x30
    cond("JR NC,r8", 3, 2, |cpu, bus| {
        let taken = !cpu.flag(FLAG_C);
        jr_if(cpu, bus, taken)
    }),
    // 0x31
    fixed("LD SP,d16", 3, |cpu, bus| {
        let value = cpu.read_next_word(bus)?;
        cpu.sp = value;
        Ok(())
    }),
    // 0x32
    fixed("LD (HL-),A", 2, |cpu, bus| {
        let addr = cpu.hl();
        bus.write_byte(addr, cpu.a)?;
        cpu.set_hl(addr.wrapping_sub(1));
        Ok(())
    }),
    // 0x33
    fixed("INC SP", 2, |cpu, _| {
        cpu.sp = cpu.sp.wrapping_add(1);
        Ok(())
    }),
    // 0x34
    fixed("INC (HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let value = inc(cpu, value);
        cpu.write_hl(bus, value)?;
        Ok(())
    }),
    // 0x35
    fixed("DEC (HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let value = dec(cpu, value);
        cpu.write_hl(bus, value)?;
        Ok(())
    }),
    // 0x36
    fixed("LD (HL),d8", 3, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        cpu.write_hl(bus, value)?;
        Ok(())
    }),
    // 0x37
    fixed("SCF", 1, |cpu, _| {
        cpu.set_f((cpu.f() & FLAG_Z) | FLAG_C);
        Ok(())
    }),
    // 0x38
    cond("JR C,r8", 3, 2, |cpu, bus| {
        let taken = cpu.flag(FLAG_C);
        jr_if(cpu, bus, taken)
    }),
    // 0x39
    fixed("ADD HL,SP", 2, |cpu, _| {
        let value = cpu.sp;
        add_hl(cpu, value);
        Ok(())
    }),
    // 0x3A
    fixed("LD A,(HL-)", 2, |cpu, bus| {
        let addr = cpu.hl();
        cpu.a = bus.read_byte(addr)?;
        cpu.set_hl(addr.wrapping_sub(1));
        Ok(())
    }),
    // 0x3B
    fixed("DEC SP", 2, |cpu, _| {
        cpu.sp = cpu.sp.wrapping_sub(1);
        Ok(())
    }),
    // 0x3C
    fixed("INC A", 1, |cpu, _| {
        let value = cpu.a;
        cpu.a = inc(cpu, value);
        Ok(())
    }),
    // 0x3D
    fixed("DEC A", 1, |cpu, _| {
        let value = cpu.a;
        cpu.a = dec(cpu, value);
        Ok(())
    }),
    // 0x3E
    fixed("LD A,d8", 2, |cpu, bus| {
        cpu.a = cpu.read_next_byte(bus)?;
        Ok(())
    }),
    // 0x3F
    fixed("CCF", 1, |cpu, _| {
        cpu.set_f((cpu.f() & FLAG_Z) | ((cpu.f() ^ FLAG_C) & FLAG_C));
        Ok(())
    }),
    // 0x40
    fixed("LD B,B", 1, |_, _| Ok(())),
    // 0x41
    fixed("LD B,C", 1, |cpu, _| {
        cpu.b = cpu.c;
        Ok(())
    }),
    // 0x42
    fixed("LD B,D", 1, |cpu, _| {
        cpu.b = cpu.d;
        Ok(())
    }),
    // 0x43
    fixed("LD B,E", 1, |cpu, _| {
        cpu.b = cpu.e;
        Ok(())
    }),
    // 0x44
    fixed("LD B,H", 1, |cpu, _| {
        cpu.b = cpu.h;
        Ok(())
    }),
    // 0x45
    fixed("LD B,L", 1, |cpu, _| {
        cpu.b = cpu.l;
        Ok(())
    }),
    // 0x46
    fixed("LD B,(HL)", 2, |cpu, bus| {
        cpu.b = cpu.read_hl(bus)?;
        Ok(())
    }),
    // 0x47
    fixed("LD B,A", 1, |cpu, _| {
        cpu.b = cpu.a;
        Ok(())
    }),
    // 0x48
    fixed("LD C,B", 1, |cpu, _| {
        cpu.c = cpu.b;
        Ok(())
    }),
    // 0x49
    fixed("LD C,C", 1, |_, _| Ok(())),
    // 0x4A
    fixed("LD C,D", 1, |cpu, _| {
        cpu.c = cpu.d;
        Ok(())
    }),
    // 0x4B
    fixed("LD C,E", 1, |cpu, _| {
        cpu.c = cpu.e;
        Ok(())
    }),
    // 0x4C
    fixed("LD C,H", 1, |cpu, _| {
        cpu.c = cpu.h;
        Ok(())
    }),
    // 0x4D
    fixed("LD C,L", 1, |cpu, _| {
        cpu.c = cpu.l;
        Ok(())
    }),
    // 0x4E
    fixed("LD C,(HL)", 2, |cpu, bus| {
        cpu.c = cpu.read_hl(bus)?;
        Ok(())
    }),
    // 0x4F
    fixed("LD C,A", 1, |cpu, _| {
        cpu.c = cpu.a;
        Ok(())
    }),
    // 0x50
    fixed("LD D,B", 1, |cpu, _| {
        cpu.d = cpu.b;
        Ok(())
    }),
    // 0x51
    fixed("LD D,C", 1, |cpu, _| {
        cpu.d = cpu.c;
        Ok(())
    }),
    // 0x52
    fixed("LD D,D", 1, |_, _| Ok(())),
    // 0x53
    fixed("LD D,E", 1, |cpu, _| {
        cpu.d = cpu.e;
        Ok(())
    }),
    // 0x54
    fixed("LD D,H", 1, |cpu, _| {
        cpu.d = cpu.h;
        Ok(())
    }),
    // 0x55
    fixed("LD D,L", 1, |cpu, _| {
        cpu.d = cpu.l;
        Ok(())
    }),
    // 0x56
    fixed("LD D,(HL)", 2, |cpu, bus| {
        cpu.d = cpu.read_hl(bus)?;
        Ok(())
    }),
    // 0x57
    fixed("LD D,A", 1, |cpu, _| {
        cpu.d = cpu.a;
        Ok(())
    }),
    // 0x58
    fixed("LD E,B", 1, |cpu, _| {
        cpu.e = cpu.b;
        Ok(())
    }),
    // 0x59
    fixed("LD E,C", 1, |cpu, _| {
        cpu.e = cpu.c;
        Ok(())
    }),
    // 0x5A
    fixed("LD E,D", 1, |cpu, _| {
        cpu.e = cpu.d;
        Ok(())
    }),
    // 0x5B
    fixed("LD E,E", 1, |_, _| Ok(())),
    // 0x5C
    fixed("LD E,H", 1, |cpu, _| {
        cpu.e = cpu.h;
        Ok(())
    }),
    // 0x5D
    fixed("LD E,L", 1, |cpu, _| {
        cpu.e = cpu.l;
        Ok(())
    }),
    // 0x5E
    fixed("LD E,(HL)", 2, |cpu, bus| {
        cpu.e = cpu.read_hl(bus)?;
        Ok(())
    }),
    // 0x5F
    fixed("LD E,A", 1, |cpu, _| {
        cpu.e = cpu.a;
        Ok(())
    }),
    // 0x60
    fixed("LD H,B", 1, |cpu, _| {
        cpu.h = cpu.b;
        Ok(())
    }),
    // 0x61
    fixed("LD H,C", 1, |cpu, _| {
        cpu.h = cpu.c;
        Ok(())
    }),
    // 0x62
    fixed("LD H,D", 1, |cpu, _| {
        cpu.h = cpu.d;
        Ok(())
    }),
    // 0x63
    fixed("LD H,E", 1, |cpu, _| {
        cpu.h = cpu.e;
        Ok(())
    }),
    // 0x64
    fixed("LD H,H", 1, |_, _| Ok(())),
    // 0x65
    fixed("LD H,L", 1, |cpu, _| {
        cpu.h = cpu.l;
        Ok(())
    }),
    // 0x66
    fixed("LD H,(HL)", 2, |cpu, bus| {
        cpu.h = cpu.read_hl(bus)?;
        Ok(())
    }),
    // 0x67
    fixed("LD H,A", 1, |cpu, _| {
        cpu.h = cpu.a;
        Ok(())
    }),
    // 0x68
    fixed("LD L,B", 1, |cpu, _| {
        cpu.l = cpu.b;
        Ok(())
    }),
    // 0x69
    fixed("LD L,C", 1, |cpu, _| {
        cpu.l = cpu.c;
        Ok(())
    }),
    // 0x6A
    fixed("LD L,D", 1, |cpu, _| {
        cpu.l = cpu.d;
        Ok(())
    }),
    // 0x6B
    fixed("LD L,E", 1, |cpu, _| {
        cpu.l = cpu.e;
        Ok(())
    }),
    // 0x6C
    fixed("LD L,H", 1, |cpu, _| {
        cpu.l = cpu.h;
        Ok(())
    }),
    // 0x6D
    fixed("LD L,L", 1, |_, _| Ok(())),
    // 0x6E
    fixed("LD L,(HL)", 2, |cpu, bus| {
        cpu.l = cpu.read_hl(bus)?;
        Ok(())
    }),
    // 0x6F
    fixed("LD L,A", 1, |cpu, _| {
        cpu.l = cpu.a;
        Ok(())
    }),
    // 0x70
    fixed("LD (HL),B", 2, |cpu, bus| {
        cpu.write_hl(bus, cpu.b)?;
        Ok(())
    }),
    // 0x71
    fixed("LD (HL),C", 2, |cpu, bus| {
        cpu.write_hl(bus, cpu.c)?;
        Ok(())
    }),
    // 0x72
    fixed("LD (HL),D", 2, |cpu, bus| {
        cpu.write_hl(bus, cpu.d)?;
        Ok(())
    }),
    // 0x73
    fixed("LD (HL),E", 2, |cpu, bus| {
        cpu.write_hl(bus, cpu.e)?;
        Ok(())
    }),
    // 0x74
    fixed("LD (HL),H", 2, |cpu, bus| {
        cpu.write_hl(bus, cpu.h)?;
        Ok(())
    }),
    // 0x75
    fixed("LD (HL),L", 2, |cpu, bus| {
        cpu.write_hl(bus, cpu.l)?;
        Ok(())
    }),
    // 0x76
    fixed("HALT", 1, |cpu, _| {
        cpu.halted = true;
        Ok(())
    }),
    // 0x77
    fixed("LD (HL),A", 2, |cpu, bus| {
        cpu.write_hl(bus, cpu.a)?;
        Ok(())
    }),
    // 0x78
    fixed("LD A,B", 1, |cpu, _| {
        cpu.a = cpu.b;
        Ok(())
    }),
    // 0x79
    fixed("LD A,C", 1, |cpu, _| {
        cpu.a = cpu.c;
        Ok(())
    }),
    // 0x7A
    fixed("LD A,D", 1, |cpu, _| {
        cpu.a = cpu.d;
        Ok(())
    }),
    // 0x7B
    fixed("LD A,E", 1, |cpu, _| {
        cpu.a = cpu.e;
        Ok(())
    }),
    // 0x7C
    fixed("LD A,H", 1, |cpu, _| {
        cpu.a = cpu.h;
        Ok(())
    }),
    // 0x7D
    fixed("LD A,L", 1, |cpu, _| {
        cpu.a = cpu.l;
        Ok(())
    }),
    // 0x7E
    fixed("LD A,(HL)", 2, |cpu, bus| {
        cpu.a = cpu.read_hl(bus)?;
        Ok(())
    }),
    // 0x7F
    fixed("LD A,A", 1, |_, _| Ok(())),
    // 0x80
    fixed("ADD A,B", 1, |cpu, _| {
        let value = cpu.b;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x81
    fixed("ADD A,C", 1, |cpu, _| {
        let value = cpu.c;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x82
    fixed("ADD A,D", 1, |cpu, _| {
        let value = cpu.d;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x83
    fixed("ADD A,E", 1, |cpu, _| {
        let value = cpu.e;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x84
    fixed("ADD A,H", 1, |cpu, _| {
        let value = cpu.h;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x85
    fixed("ADD A,L", 1, |cpu, _| {
        let value = cpu.l;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x86
    fixed("ADD A,(HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x87
    fixed("ADD A,A", 1, |cpu, _| {
        let value = cpu.a;
        add_a(cpu, value);
        Ok(())
    }),
    // 0x88
    fixed("ADC A,B", 1, |cpu, _| {
        let value = cpu.b;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x89
    fixed("ADC A,C", 1, |cpu, _| {
        let value = cpu.c;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x8A
    fixed("ADC A,D", 1, |cpu, _| {
        let value = cpu.d;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x8B
    fixed("ADC A,E", 1, |cpu, _| {
        let value = cpu.e;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x8C
    fixed("ADC A,H", 1, |cpu, _| {
        let value = cpu.h;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x8D
    fixed("ADC A,L", 1, |cpu, _| {
        let value = cpu.l;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x8E
    fixed("ADC A,(HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x8F
    fixed("ADC A,A", 1, |cpu, _| {
        let value = cpu.a;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0x90
    fixed("SUB B", 1, |cpu, _| {
        let value = cpu.b;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x91
    fixed("SUB C", 1, |cpu, _| {
        let value = cpu.c;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x92
    fixed("SUB D", 1, |cpu, _| {
        let value = cpu.d;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x93
    fixed("SUB E", 1, |cpu, _| {
        let value = cpu.e;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x94
    fixed("SUB H", 1, |cpu, _| {
        let value = cpu.h;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x95
    fixed("SUB L", 1, |cpu, _| {
        let value = cpu.l;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x96
    fixed("SUB (HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x97
    fixed("SUB A", 1, |cpu, _| {
        let value = cpu.a;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0x98
    fixed("SBC A,B", 1, |cpu, _| {
        let value = cpu.b;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0x99
    fixed("SBC A,C", 1, |cpu, _| {
        let value = cpu.c;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0x9A
    fixed("SBC A,D", 1, |cpu, _| {
        let value = cpu.d;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0x9B
    fixed("SBC A,E", 1, |cpu, _| {
        let value = cpu.e;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0x9C
    fixed("SBC A,H", 1, |cpu, _| {
        let value = cpu.h;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0x9D
    fixed("SBC A,L", 1, |cpu, _| {
        let value = cpu.l;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0x9E
    fixed("SBC A,(HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0x9F
    fixed("SBC A,A", 1, |cpu, _| {
        let value = cpu.a;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0xA0
    fixed("AND B", 1, |cpu, _| {
        let value = cpu.b;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA1
    fixed("AND C", 1, |cpu, _| {
        let value = cpu.c;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA2
    fixed("AND D", 1, |cpu, _| {
        let value = cpu.d;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA3
    fixed("AND E", 1, |cpu, _| {
        let value = cpu.e;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA4
    fixed("AND H", 1, |cpu, _| {
        let value = cpu.h;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA5
    fixed("AND L", 1, |cpu, _| {
        let value = cpu.l;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA6
    fixed("AND (HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA7
    fixed("AND A", 1, |cpu, _| {
        let value = cpu.a;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xA8
    fixed("XOR B", 1, |cpu, _| {
        let value = cpu.b;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xA9
    fixed("XOR C", 1, |cpu, _| {
        let value = cpu.c;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xAA
    fixed("XOR D", 1, |cpu, _| {
        let value = cpu.d;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xAB
    fixed("XOR E", 1, |cpu, _| {
        let value = cpu.e;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xAC
    fixed("XOR H", 1, |cpu, _| {
        let value = cpu.h;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xAD
    fixed("XOR L", 1, |cpu, _| {
        let value = cpu.l;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xAE
    fixed("XOR (HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xAF
    fixed("XOR A", 1, |cpu, _| {
        let value = cpu.a;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xB0
    fixed("OR B", 1, |cpu, _| {
        let value = cpu.b;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB1
    fixed("OR C", 1, |cpu, _| {
        let value = cpu.c;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB2
    fixed("OR D", 1, |cpu, _| {
        let value = cpu.d;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB3
    fixed("OR E", 1, |cpu, _| {
        let value = cpu.e;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB4
    fixed("OR H", 1, |cpu, _| {
        let value = cpu.h;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB5
    fixed("OR L", 1, |cpu, _| {
        let value = cpu.l;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB6
    fixed("OR (HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB7
    fixed("OR A", 1, |cpu, _| {
        let value = cpu.a;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xB8
    fixed("CP B", 1, |cpu, _| {
        let value = cpu.b;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xB9
    fixed("CP C", 1, |cpu, _| {
        let value = cpu.c;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xBA
    fixed("CP D", 1, |cpu, _| {
        let value = cpu.d;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xBB
    fixed("CP E", 1, |cpu, _| {
        let value = cpu.e;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xBC
    fixed("CP H", 1, |cpu, _| {
        let value = cpu.h;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xBD
    fixed("CP L", 1, |cpu, _| {
        let value = cpu.l;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xBE
    fixed("CP (HL)", 2, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xBF
    fixed("CP A", 1, |cpu, _| {
        let value = cpu.a;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xC0
    cond("RET NZ", 5, 2, |cpu, bus| {
        let taken = !cpu.flag(FLAG_Z);
        ret_if(cpu, bus, taken)
    }),
    // 0xC1
    fixed("POP BC", 3, |cpu, bus| {
        let value = cpu.pop_word(bus)?;
        cpu.set_bc(value);
        Ok(())
    }),
    // 0xC2
    cond("JP NZ,a16", 4, 3, |cpu, bus| {
        let taken = !cpu.flag(FLAG_Z);
        jp_if(cpu, bus, taken)
    }),
    // 0xC3
    fixed("JP a16", 4, |cpu, bus| {
        jp_if(cpu, bus, true)?;
        Ok(())
    }),
    // 0xC4
    cond("CALL NZ,a16", 6, 3, |cpu, bus| {
        let taken = !cpu.flag(FLAG_Z);
        call_if(cpu, bus, taken)
    }),
    // 0xC5
    fixed("PUSH BC", 4, |cpu, bus| {
        cpu.push_word(bus, cpu.bc())?;
        Ok(())
    }),
    // 0xC6
    fixed("ADD A,d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        add_a(cpu, value);
        Ok(())
    }),
    // 0xC7
    fixed("RST 00H", 4, |cpu, bus| rst(cpu, bus, 0x00)),
    // 0xC8
    cond("RET Z", 5, 2, |cpu, bus| {
        let taken = cpu.flag(FLAG_Z);
        ret_if(cpu, bus, taken)
    }),
    // 0xC9
    fixed("RET", 4, |cpu, bus| {
        ret_if(cpu, bus, true)?;
        Ok(())
    }),
    // 0xCA
    cond("JP Z,a16", 4, 3, |cpu, bus| {
        let taken = cpu.flag(FLAG_Z);
        jp_if(cpu, bus, taken)
    }),
    // 0xCB
    // Never dispatched: the step loop consumes the prefix byte itself and
    // indexes PREFIXED with the byte that follows.
    fixed("PREFIX CB", 1, |_, _| Ok(())),
    // 0xCC
    cond("CALL Z,a16", 6, 3, |cpu, bus| {
        let taken = cpu.flag(FLAG_Z);
        call_if(cpu, bus, taken)
    }),
    // 0xCD
    fixed("CALL a16", 6, |cpu, bus| {
        call_if(cpu, bus, true)?;
        Ok(())
    }),
    // 0xCE
    fixed("ADC A,d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        adc_a(cpu, value);
        Ok(())
    }),
    // 0xCF
    fixed("RST 08H", 4, |cpu, bus| rst(cpu, bus, 0x08)),
    // 0xD0
    cond("RET NC", 5, 2, |cpu, bus| {
        let taken = !cpu.flag(FLAG_C);
        ret_if(cpu, bus, taken)
    }),
    // 0xD1
    fixed("POP DE", 3, |cpu, bus| {
        let value = cpu.pop_word(bus)?;
        cpu.set_de(value);
        Ok(())
    }),
    // 0xD2
    cond("JP NC,a16", 4, 3, |cpu, bus| {
        let taken = !cpu.flag(FLAG_C);
        jp_if(cpu, bus, taken)
    }),
    // 0xD3
    illegal(),
    // 0xD4
    cond("CALL NC,a16", 6, 3, |cpu, bus| {
        let taken = !cpu.flag(FLAG_C);
        call_if(cpu, bus, taken)
    }),
    // 0xD5
    fixed("PUSH DE", 4, |cpu, bus| {
        cpu.push_word(bus, cpu.de())?;
        Ok(())
    }),
    // 0xD6
    fixed("SUB d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        sub_a(cpu, value);
        Ok(())
    }),
    // 0xD7
    fixed("RST 10H", 4, |cpu, bus| rst(cpu, bus, 0x10)),
    // 0xD8
    cond("RET C", 5, 2, |cpu, bus| {
        let taken = cpu.flag(FLAG_C);
        ret_if(cpu, bus, taken)
    }),
    // 0xD9
    fixed("RETI", 4, |cpu, bus| {
        cpu.pc = cpu.pop_word(bus)?;
        cpu.enable_interrupts_now();
        Ok(())
    }),
    // 0xDA
    cond("JP C,a16", 4, 3, |cpu, bus| {
        let taken = cpu.flag(FLAG_C);
        jp_if(cpu, bus, taken)
    }),
    // 0xDB
    illegal(),
    // 0xDC
    cond("CALL C,a16", 6, 3, |cpu, bus| {
        let taken = cpu.flag(FLAG_C);
        call_if(cpu, bus, taken)
    }),
    // 0xDD
    illegal(),
    // 0xDE
    fixed("SBC A,d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        sbc_a(cpu, value);
        Ok(())
    }),
    // 0xDF
    fixed("RST 18H", 4, |cpu, bus| rst(cpu, bus, 0x18)),
    // 0xE0
    fixed("LDH (a8),A", 3, |cpu, bus| {
        let offset = cpu.read_next_byte(bus)?;
        bus.write_byte(0xFF00 | offset as u16, cpu.a)?;
        Ok(())
    }),
    // 0xE1
    fixed("POP HL", 3, |cpu, bus| {
        let value = cpu.pop_word(bus)?;
        cpu.set_hl(value);
        Ok(())
    }),
    // 0xE2
    fixed("LD (C),A", 2, |cpu, bus| {
        bus.write_byte(0xFF00 | cpu.c as u16, cpu.a)?;
        Ok(())
    }),
    // 0xE3
    illegal(),
    // 0xE4
    illegal(),
    // 0xE5
    fixed("PUSH HL", 4, |cpu, bus| {
        cpu.push_word(bus, cpu.hl())?;
        Ok(())
    }),
    // 0xE6
    fixed("AND d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        and_a(cpu, value);
        Ok(())
    }),
    // 0xE7
    fixed("RST 20H", 4, |cpu, bus| rst(cpu, bus, 0x20)),
    // 0xE8
    fixed("ADD SP,r8", 4, |cpu, bus| {
        let offset = cpu.read_next_byte(bus)? as i8;
        let r = alu::add16_signed(cpu.sp, offset);
        cpu.sp = r.value;
        cpu.set_flags_from16(&r);
        Ok(())
    }),
    // 0xE9
    fixed("JP HL", 1, |cpu, _| {
        cpu.pc = cpu.hl();
        Ok(())
    }),
    // 0xEA
    fixed("LD (a16),A", 4, |cpu, bus| {
        let addr = cpu.read_next_word(bus)?;
        bus.write_byte(addr, cpu.a)?;
        Ok(())
    }),
    // 0xEB
    illegal(),
    // 0xEC
    illegal(),
    // 0xED
    illegal(),
    // 0xEE
    fixed("XOR d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        xor_a(cpu, value);
        Ok(())
    }),
    // 0xEF
    fixed("RST 28H", 4, |cpu, bus| rst(cpu, bus, 0x28)),
    // 0xF0
    fixed("LDH A,(a8)", 3, |cpu, bus| {
        let offset = cpu.read_next_byte(bus)?;
        cpu.a = bus.read_byte(0xFF00 | offset as u16)?;
        Ok(())
    }),
    // 0xF1
    fixed("POP AF", 3, |cpu, bus| {
        let value = cpu.pop_word(bus)?;
        cpu.set_af(value);
        Ok(())
    }),
    // 0xF2
    fixed("LD A,(C)", 2, |cpu, bus| {
        cpu.a = bus.read_byte(0xFF00 | cpu.c as u16)?;
        Ok(())
    }),
    // 0xF3
    fixed("DI", 1, |cpu, _| {
        cpu.disable_interrupts();
        Ok(())
    }),
    // 0xF4
    illegal(),
    // 0xF5
    fixed("PUSH AF", 4, |cpu, bus| {
        cpu.push_word(bus, cpu.af())?;
        Ok(())
    }),
    // 0xF6
    fixed("OR d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        or_a(cpu, value);
        Ok(())
    }),
    // 0xF7
    fixed("RST 30H", 4, |cpu, bus| rst(cpu, bus, 0x30)),
    // 0xF8
    fixed("LD HL,SP+r8", 3, |cpu, bus| {
        let offset = cpu.read_next_byte(bus)? as i8;
        let r = alu::add16_signed(cpu.sp, offset);
        cpu.set_hl(r.value);
        cpu.set_flags_from16(&r);
        Ok(())
    }),
    // 0xF9
    fixed("LD SP,HL", 2, |cpu, _| {
        cpu.sp = cpu.hl();
        Ok(())
    }),
    // 0xFA
    fixed("LD A,(a16)", 4, |cpu, bus| {
        let addr = cpu.read_next_word(bus)?;
        cpu.a = bus.read_byte(addr)?;
        Ok(())
    }),
    // 0xFB
    fixed("EI", 1, |cpu, _| {
        cpu.schedule_interrupt_enable();
        Ok(())
    }),
    // 0xFC
    illegal(),
    // 0xFD
    illegal(),
    // 0xFE
    fixed("CP d8", 2, |cpu, bus| {
        let value = cpu.read_next_byte(bus)?;
        cp_a(cpu, value);
        Ok(())
    }),
    // 0xFF
    fixed("RST 38H", 4, |cpu, bus| rst(cpu, bus, 0x38)),
];

/// The CB-prefixed opcode space. Fully populated: every byte after a
/// `0xCB` fetch decodes to a rotate/shift, SWAP, BIT, RES or SET.
pub static PREFIXED: [Opcode; 256] = [
    // 0x00
    fixed("RLC B", 2, |cpu, _| {
        let r = alu::rlc(cpu.b);
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x01
    fixed("RLC C", 2, |cpu, _| {
        let r = alu::rlc(cpu.c);
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x02
    fixed("RLC D", 2, |cpu, _| {
        let r = alu::rlc(cpu.d);
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x03
    fixed("RLC E", 2, |cpu, _| {
        let r = alu::rlc(cpu.e);
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x04
    fixed("RLC H", 2, |cpu, _| {
        let r = alu::rlc(cpu.h);
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x05
    fixed("RLC L", 2, |cpu, _| {
        let r = alu::rlc(cpu.l);
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x06
    fixed("RLC (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::rlc(value);
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x07
    fixed("RLC A", 2, |cpu, _| {
        let r = alu::rlc(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x08
    fixed("RRC B", 2, |cpu, _| {
        let r = alu::rrc(cpu.b);
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x09
    fixed("RRC C", 2, |cpu, _| {
        let r = alu::rrc(cpu.c);
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x0A
    fixed("RRC D", 2, |cpu, _| {
        let r = alu::rrc(cpu.d);
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x0B
    fixed("RRC E", 2, |cpu, _| {
        let r = alu::rrc(cpu.e);
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x0C
    fixed("RRC H", 2, |cpu, _| {
        let r = alu::rrc(cpu.h);
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x0D
    fixed("RRC L", 2, |cpu, _| {
        let r = alu::rrc(cpu.l);
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x0E
    fixed("RRC (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::rrc(value);
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x0F
    fixed("RRC A", 2, |cpu, _| {
        let r = alu::rrc(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x10
    fixed("RL B", 2, |cpu, _| {
        let r = alu::rl(cpu.b, cpu.flag(FLAG_C));
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x11
    fixed("RL C", 2, |cpu, _| {
        let r = alu::rl(cpu.c, cpu.flag(FLAG_C));
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x12
    fixed("RL D", 2, |cpu, _| {
        let r = alu::rl(cpu.d, cpu.flag(FLAG_C));
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x13
    fixed("RL E", 2, |cpu, _| {
        let r = alu::rl(cpu.e, cpu.flag(FLAG_C));
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x14
    fixed("RL H", 2, |cpu, _| {
        let r = alu::rl(cpu.h, cpu.flag(FLAG_C));
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x15
    fixed("RL L", 2, |cpu, _| {
        let r = alu::rl(cpu.l, cpu.flag(FLAG_C));
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x16
    fixed("RL (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::rl(value, cpu.flag(FLAG_C));
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x17
    fixed("RL A", 2, |cpu, _| {
        let r = alu::rl(cpu.a, cpu.flag(FLAG_C));
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x18
    fixed("RR B", 2, |cpu, _| {
        let r = alu::rr(cpu.b, cpu.flag(FLAG_C));
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x19
    fixed("RR C", 2, |cpu, _| {
        let r = alu::rr(cpu.c, cpu.flag(FLAG_C));
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x1A
    fixed("RR D", 2, |cpu, _| {
        let r = alu::rr(cpu.d, cpu.flag(FLAG_C));
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x1B
    fixed("RR E", 2, |cpu, _| {
        let r = alu::rr(cpu.e, cpu.flag(FLAG_C));
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x1C
    fixed("RR H", 2, |cpu, _| {
        let r = alu::rr(cpu.h, cpu.flag(FLAG_C));
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x1D
    fixed("RR L", 2, |cpu, _| {
        let r = alu::rr(cpu.l, cpu.flag(FLAG_C));
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x1E
    fixed("RR (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::rr(value, cpu.flag(FLAG_C));
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x1F
    fixed("RR A", 2, |cpu, _| {
        let r = alu::rr(cpu.a, cpu.flag(FLAG_C));
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x20
    fixed("SLA B", 2, |cpu, _| {
        let r = alu::sla(cpu.b);
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x21
    fixed("SLA C", 2, |cpu, _| {
        let r = alu::sla(cpu.c);
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x22
    fixed("SLA D", 2, |cpu, _| {
        let r = alu::sla(cpu.d);
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x23
    fixed("SLA E", 2, |cpu, _| {
        let r = alu::sla(cpu.e);
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x24
    fixed("SLA H", 2, |cpu, _| {
        let r = alu::sla(cpu.h);
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x25
    fixed("SLA L", 2, |cpu, _| {
        let r = alu::sla(cpu.l);
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x26
    fixed("SLA (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::sla(value);
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x27
    fixed("SLA A", 2, |cpu, _| {
        let r = alu::sla(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x28
    fixed("SRA B", 2, |cpu, _| {
        let r = alu::sra(cpu.b);
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x29
    fixed("SRA C", 2, |cpu, _| {
        let r = alu::sra(cpu.c);
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x2A
    fixed("SRA D", 2, |cpu, _| {
        let r = alu::sra(cpu.d);
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x2B
    fixed("SRA E", 2, |cpu, _| {
        let r = alu::sra(cpu.e);
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x2C
    fixed("SRA H", 2, |cpu, _| {
        let r = alu::sra(cpu.h);
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x2D
    fixed("SRA L", 2, |cpu, _| {
        let r = alu::sra(cpu.l);
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x2E
    fixed("SRA (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::sra(value);
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x2F
    fixed("SRA A", 2, |cpu, _| {
        let r = alu::sra(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x30
    fixed("SWAP B", 2, |cpu, _| {
        let r = alu::swap(cpu.b);
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x31
    fixed("SWAP C", 2, |cpu, _| {
        let r = alu::swap(cpu.c);
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x32
    fixed("SWAP D", 2, |cpu, _| {
        let r = alu::swap(cpu.d);
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x33
    fixed("SWAP E", 2, |cpu, _| {
        let r = alu::swap(cpu.e);
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x34
    fixed("SWAP H", 2, |cpu, _| {
        let r = alu::swap(cpu.h);
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x35
    fixed("SWAP L", 2, |cpu, _| {
        let r = alu::swap(cpu.l);
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x36
    fixed("SWAP (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::swap(value);
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x37
    fixed("SWAP A", 2, |cpu, _| {
        let r = alu::swap(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x38
    fixed("SRL B", 2, |cpu, _| {
        let r = alu::srl(cpu.b);
        cpu.b = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x39
    fixed("SRL C", 2, |cpu, _| {
        let r = alu::srl(cpu.c);
        cpu.c = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x3A
    fixed("SRL D", 2, |cpu, _| {
        let r = alu::srl(cpu.d);
        cpu.d = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x3B
    fixed("SRL E", 2, |cpu, _| {
        let r = alu::srl(cpu.e);
        cpu.e = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x3C
    fixed("SRL H", 2, |cpu, _| {
        let r = alu::srl(cpu.h);
        cpu.h = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x3D
    fixed("SRL L", 2, |cpu, _| {
        let r = alu::srl(cpu.l);
        cpu.l = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x3E
    fixed("SRL (HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::srl(value);
        cpu.write_hl(bus, r.value)?;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x3F
    fixed("SRL A", 2, |cpu, _| {
        let r = alu::srl(cpu.a);
        cpu.a = r.value;
        cpu.set_flags_from(&r);
        Ok(())
    }),
    // 0x40
    fixed("BIT 0,B", 2, |cpu, _| {
        let r = alu::bit(0, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x41
    fixed("BIT 0,C", 2, |cpu, _| {
        let r = alu::bit(0, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x42
    fixed("BIT 0,D", 2, |cpu, _| {
        let r = alu::bit(0, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x43
    fixed("BIT 0,E", 2, |cpu, _| {
        let r = alu::bit(0, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x44
    fixed("BIT 0,H", 2, |cpu, _| {
        let r = alu::bit(0, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x45
    fixed("BIT 0,L", 2, |cpu, _| {
        let r = alu::bit(0, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x46
    fixed("BIT 0,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(0, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x47
    fixed("BIT 0,A", 2, |cpu, _| {
        let r = alu::bit(0, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x48
    fixed("BIT 1,B", 2, |cpu, _| {
        let r = alu::bit(1, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x49
    fixed("BIT 1,C", 2, |cpu, _| {
        let r = alu::bit(1, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x4A
    fixed("BIT 1,D", 2, |cpu, _| {
        let r = alu::bit(1, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x4B
    fixed("BIT 1,E", 2, |cpu, _| {
        let r = alu::bit(1, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x4C
    fixed("BIT 1,H", 2, |cpu, _| {
        let r = alu::bit(1, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x4D
    fixed("BIT 1,L", 2, |cpu, _| {
        let r = alu::bit(1, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x4E
    fixed("BIT 1,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(1, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x4F
    fixed("BIT 1,A", 2, |cpu, _| {
        let r = alu::bit(1, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x50
    fixed("BIT 2,B", 2, |cpu, _| {
        let r = alu::bit(2, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x51
    fixed("BIT 2,C", 2, |cpu, _| {
        let r = alu::bit(2, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x52
    fixed("BIT 2,D", 2, |cpu, _| {
        let r = alu::bit(2, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x53
    fixed("BIT 2,E", 2, |cpu, _| {
        let r = alu::bit(2, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x54
    fixed("BIT 2,H", 2, |cpu, _| {
        let r = alu::bit(2, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x55
    fixed("BIT 2,L", 2, |cpu, _| {
        let r = alu::bit(2, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x56
    fixed("BIT 2,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(2, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x57
    fixed("BIT 2,A", 2, |cpu, _| {
        let r = alu::bit(2, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x58
    fixed("BIT 3,B", 2, |cpu, _| {
        let r = alu::bit(3, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x59
    fixed("BIT 3,C", 2, |cpu, _| {
        let r = alu::bit(3, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x5A
    fixed("BIT 3,D", 2, |cpu, _| {
        let r = alu::bit(3, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x5B
    fixed("BIT 3,E", 2, |cpu, _| {
        let r = alu::bit(3, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x5C
    fixed("BIT 3,H", 2, |cpu, _| {
        let r = alu::bit(3, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x5D
    fixed("BIT 3,L", 2, |cpu, _| {
        let r = alu::bit(3, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x5E
    fixed("BIT 3,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(3, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x5F
    fixed("BIT 3,A", 2, |cpu, _| {
        let r = alu::bit(3, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x60
    fixed("BIT 4,B", 2, |cpu, _| {
        let r = alu::bit(4, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x61
    fixed("BIT 4,C", 2, |cpu, _| {
        let r = alu::bit(4, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x62
    fixed("BIT 4,D", 2, |cpu, _| {
        let r = alu::bit(4, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x63
    fixed("BIT 4,E", 2, |cpu, _| {
        let r = alu::bit(4, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x64
    fixed("BIT 4,H", 2, |cpu, _| {
        let r = alu::bit(4, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x65
    fixed("BIT 4,L", 2, |cpu, _| {
        let r = alu::bit(4, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x66
    fixed("BIT 4,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(4, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x67
    fixed("BIT 4,A", 2, |cpu, _| {
        let r = alu::bit(4, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x68
    fixed("BIT 5,B", 2, |cpu, _| {
        let r = alu::bit(5, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x69
    fixed("BIT 5,C", 2, |cpu, _| {
        let r = alu::bit(5, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x6A
    fixed("BIT 5,D", 2, |cpu, _| {
        let r = alu::bit(5, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x6B
    fixed("BIT 5,E", 2, |cpu, _| {
        let r = alu::bit(5, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x6C
    fixed("BIT 5,H", 2, |cpu, _| {
        let r = alu::bit(5, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x6D
    fixed("BIT 5,L", 2, |cpu, _| {
        let r = alu::bit(5, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x6E
    fixed("BIT 5,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(5, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x6F
    fixed("BIT 5,A", 2, |cpu, _| {
        let r = alu::bit(5, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x70
    fixed("BIT 6,B", 2, |cpu, _| {
        let r = alu::bit(6, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x71
    fixed("BIT 6,C", 2, |cpu, _| {
        let r = alu::bit(6, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x72
    fixed("BIT 6,D", 2, |cpu, _| {
        let r = alu::bit(6, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x73
    fixed("BIT 6,E", 2, |cpu, _| {
        let r = alu::bit(6, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x74
    fixed("BIT 6,H", 2, |cpu, _| {
        let r = alu::bit(6, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x75
    fixed("BIT 6,L", 2, |cpu, _| {
        let r = alu::bit(6, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x76
    fixed("BIT 6,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(6, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x77
    fixed("BIT 6,A", 2, |cpu, _| {
        let r = alu::bit(6, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x78
    fixed("BIT 7,B", 2, |cpu, _| {
        let r = alu::bit(7, cpu.b);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x79
    fixed("BIT 7,C", 2, |cpu, _| {
        let r = alu::bit(7, cpu.c);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x7A
    fixed("BIT 7,D", 2, |cpu, _| {
        let r = alu::bit(7, cpu.d);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x7B
    fixed("BIT 7,E", 2, |cpu, _| {
        let r = alu::bit(7, cpu.e);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x7C
    fixed("BIT 7,H", 2, |cpu, _| {
        let r = alu::bit(7, cpu.h);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x7D
    fixed("BIT 7,L", 2, |cpu, _| {
        let r = alu::bit(7, cpu.l);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x7E
    fixed("BIT 7,(HL)", 3, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        let r = alu::bit(7, value);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x7F
    fixed("BIT 7,A", 2, |cpu, _| {
        let r = alu::bit(7, cpu.a);
        cpu.set_flags_bit_test(&r);
        Ok(())
    }),
    // 0x80
    fixed("RES 0,B", 2, |cpu, _| {
        cpu.b &= !(1 << 0);
        Ok(())
    }),
    // 0x81
    fixed("RES 0,C", 2, |cpu, _| {
        cpu.c &= !(1 << 0);
        Ok(())
    }),
    // 0x82
    fixed("RES 0,D", 2, |cpu, _| {
        cpu.d &= !(1 << 0);
        Ok(())
    }),
    // 0x83
    fixed("RES 0,E", 2, |cpu, _| {
        cpu.e &= !(1 << 0);
        Ok(())
    }),
    // 0x84
    fixed("RES 0,H", 2, |cpu, _| {
        cpu.h &= !(1 << 0);
        Ok(())
    }),
    // 0x85
    fixed("RES 0,L", 2, |cpu, _| {
        cpu.l &= !(1 << 0);
        Ok(())
    }),
    // 0x86
    fixed("RES 0,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 0))?;
        Ok(())
    }),
    // 0x87
    fixed("RES 0,A", 2, |cpu, _| {
        cpu.a &= !(1 << 0);
        Ok(())
    }),
    // 0x88
    fixed("RES 1,B", 2, |cpu, _| {
        cpu.b &= !(1 << 1);
        Ok(())
    }),
    // 0x89
    fixed("RES 1,C", 2, |cpu, _| {
        cpu.c &= !(1 << 1);
        Ok(())
    }),
    // 0x8A
    fixed("RES 1,D", 2, |cpu, _| {
        cpu.d &= !(1 << 1);
        Ok(())
    }),
    // 0x8B
    fixed("RES 1,E", 2, |cpu, _| {
        cpu.e &= !(1 << 1);
        Ok(())
    }),
    // 0x8C
    fixed("RES 1,H", 2, |cpu, _| {
        cpu.h &= !(1 << 1);
        Ok(())
    }),
    // 0x8D
    fixed("RES 1,L", 2, |cpu, _| {
        cpu.l &= !(1 << 1);
        Ok(())
    }),
    // 0x8E
    fixed("RES 1,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 1))?;
        Ok(())
    }),
    // 0x8F
    fixed("RES 1,A", 2, |cpu, _| {
        cpu.a &= !(1 << 1);
        Ok(())
    }),
    // 0x90
    fixed("RES 2,B", 2, |cpu, _| {
        cpu.b &= !(1 << 2);
        Ok(())
    }),
    // 0x91
    fixed("RES 2,C", 2, |cpu, _| {
        cpu.c &= !(1 << 2);
        Ok(())
    }),
    // 0x92
    fixed("RES 2,D", 2, |cpu, _| {
        cpu.d &= !(1 << 2);
        Ok(())
    }),
    // 0x93
    fixed("RES 2,E", 2, |cpu, _| {
        cpu.e &= !(1 << 2);
        Ok(())
    }),
    // 0x94
    fixed("RES 2,H", 2, |cpu, _| {
        cpu.h &= !(1 << 2);
        Ok(())
    }),
    // 0x95
    fixed("RES 2,L", 2, |cpu, _| {
        cpu.l &= !(1 << 2);
        Ok(())
    }),
    // 0x96
    fixed("RES 2,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 2))?;
        Ok(())
    }),
    // 0x97
    fixed("RES 2,A", 2, |cpu, _| {
        cpu.a &= !(1 << 2);
        Ok(())
    }),
    // 0x98
    fixed("RES 3,B", 2, |cpu, _| {
        cpu.b &= !(1 << 3);
        Ok(())
    }),
    // 0x99
    fixed("RES 3,C", 2, |cpu, _| {
        cpu.c &= !(1 << 3);
        Ok(())
    }),
    // 0x9A
    fixed("RES 3,D", 2, |cpu, _| {
        cpu.d &= !(1 << 3);
        Ok(())
    }),
    // 0x9B
    fixed("RES 3,E", 2, |cpu, _| {
        cpu.e &= !(1 << 3);
        Ok(())
    }),
    // 0x9C
    fixed("RES 3,H", 2, |cpu, _| {
        cpu.h &= !(1 << 3);
        Ok(())
    }),
    // 0x9D
    fixed("RES 3,L", 2, |cpu, _| {
        cpu.l &= !(1 << 3);
        Ok(())
    }),
    // 0x9E
    fixed("RES 3,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 3))?;
        Ok(())
    }),
    // 0x9F
    fixed("RES 3,A", 2, |cpu, _| {
        cpu.a &= !(1 << 3);
        Ok(())
    }),
    // 0xA0
    fixed("RES 4,B", 2, |cpu, _| {
        cpu.b &= !(1 << 4);
        Ok(())
    }),
    // 0xA1
    fixed("RES 4,C", 2, |cpu, _| {
        cpu.c &= !(1 << 4);
        Ok(())
    }),
    // 0xA2
    fixed("RES 4,D", 2, |cpu, _| {
        cpu.d &= !(1 << 4);
        Ok(())
    }),
    // 0xA3
    fixed("RES 4,E", 2, |cpu, _| {
        cpu.e &= !(1 << 4);
        Ok(())
    }),
    // 0xA4
    fixed("RES 4,H", 2, |cpu, _| {
        cpu.h &= !(1 << 4);
        Ok(())
    }),
    // 0xA5
    fixed("RES 4,L", 2, |cpu, _| {
        cpu.l &= !(1 << 4);
        Ok(())
    }),
    // 0xA6
    fixed("RES 4,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 4))?;
        Ok(())
    }),
    // 0xA7
    fixed("RES 4,A", 2, |cpu, _| {
        cpu.a &= !(1 << 4);
        Ok(())
    }),
    // 0xA8
    fixed("RES 5,B", 2, |cpu, _| {
        cpu.b &= !(1 << 5);
        Ok(())
    }),
    // 0xA9
    fixed("RES 5,C", 2, |cpu, _| {
        cpu.c &= !(1 << 5);
        Ok(())
    }),
    // 0xAA
    fixed("RES 5,D", 2, |cpu, _| {
        cpu.d &= !(1 << 5);
        Ok(())
    }),
    // 0xAB
    fixed("RES 5,E", 2, |cpu, _| {
        cpu.e &= !(1 << 5);
        Ok(())
    }),
    // 0xAC
    fixed("RES 5,H", 2, |cpu, _| {
        cpu.h &= !(1 << 5);
        Ok(())
    }),
    // 0xAD
    fixed("RES 5,L", 2, |cpu, _| {
        cpu.l &= !(1 << 5);
        Ok(())
    }),
    // 0xAE
    fixed("RES 5,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 5))?;
        Ok(())
    }),
    // 0xAF
    fixed("RES 5,A", 2, |cpu, _| {
        cpu.a &= !(1 << 5);
        Ok(())
    }),
    // 0xB0
    fixed("RES 6,B", 2, |cpu, _| {
        cpu.b &= !(1 << 6);
        Ok(())
    }),
    // 0xB1
    fixed("RES 6,C", 2, |cpu, _| {
        cpu.c &= !(1 << 6);
        Ok(())
    }),
    // 0xB2
    fixed("RES 6,D", 2, |cpu, _| {
        cpu.d &= !(1 << 6);
        Ok(())
    }),
    // 0xB3
    fixed("RES 6,E", 2, |cpu, _| {
        cpu.e &= !(1 << 6);
        Ok(())
    }),
    // 0xB4
    fixed("RES 6,H", 2, |cpu, _| {
        cpu.h &= !(1 << 6);
        Ok(())
    }),
    // 0xB5
    fixed("RES 6,L", 2, |cpu, _| {
        cpu.l &= !(1 << 6);
        Ok(())
    }),
    // 0xB6
    fixed("RES 6,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 6))?;
        Ok(())
    }),
    // 0xB7
    fixed("RES 6,A", 2, |cpu, _| {
        cpu.a &= !(1 << 6);
        Ok(())
    }),
    // 0xB8
    fixed("RES 7,B", 2, |cpu, _| {
        cpu.b &= !(1 << 7);
        Ok(())
    }),
    // 0xB9
    fixed("RES 7,C", 2, |cpu, _| {
        cpu.c &= !(1 << 7);
        Ok(())
    }),
    // 0xBA
    fixed("RES 7,D", 2, |cpu, _| {
        cpu.d &= !(1 << 7);
        Ok(())
    }),
    // 0xBB
    fixed("RES 7,E", 2, |cpu, _| {
        cpu.e &= !(1 << 7);
        Ok(())
    }),
    // 0xBC
    fixed("RES 7,H", 2, |cpu, _| {
        cpu.h &= !(1 << 7);
        Ok(())
    }),
    // 0xBD
    fixed("RES 7,L", 2, |cpu, _| {
        cpu.l &= !(1 << 7);
        Ok(())
    }),
    // 0xBE
    fixed("RES 7,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value & !(1 << 7))?;
        Ok(())
    }),
    // 0xBF
    fixed("RES 7,A", 2, |cpu, _| {
        cpu.a &= !(1 << 7);
        Ok(())
    }),
    // 0xC0
    fixed("SET 0,B", 2, |cpu, _| {
        cpu.b |= 1 << 0;
        Ok(())
    }),
    // 0xC1
    fixed("SET 0,C", 2, |cpu, _| {
        cpu.c |= 1 << 0;
        Ok(())
    }),
    // 0xC2
    fixed("SET 0,D", 2, |cpu, _| {
        cpu.d |= 1 << 0;
        Ok(())
    }),
    // 0xC3
    fixed("SET 0,E", 2, |cpu, _| {
        cpu.e |= 1 << 0;
        Ok(())
    }),
    // 0xC4
    fixed("SET 0,H", 2, |cpu, _| {
        cpu.h |= 1 << 0;
        Ok(())
    }),
    // 0xC5
    fixed("SET 0,L", 2, |cpu, _| {
        cpu.l |= 1 << 0;
        Ok(())
    }),
    // 0xC6
    fixed("SET 0,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 0))?;
        Ok(())
    }),
    // 0xC7
    fixed("SET 0,A", 2, |cpu, _| {
        cpu.a |= 1 << 0;
        Ok(())
    }),
    // 0xC8
    fixed("SET 1,B", 2, |cpu, _| {
        cpu.b |= 1 << 1;
        Ok(())
    }),
    // 0xC9
    fixed("SET 1,C", 2, |cpu, _| {
        cpu.c |= 1 << 1;
        Ok(())
    }),
    // 0xCA
    fixed("SET 1,D", 2, |cpu, _| {
        cpu.d |= 1 << 1;
        Ok(())
    }),
    // 0xCB
    fixed("SET 1,E", 2, |cpu, _| {
        cpu.e |= 1 << 1;
        Ok(())
    }),
    // 0xCC
    fixed("SET 1,H", 2, |cpu, _| {
        cpu.h |= 1 << 1;
        Ok(())
    }),
    // 0xCD
    fixed("SET 1,L", 2, |cpu, _| {
        cpu.l |= 1 << 1;
        Ok(())
    }),
    // 0xCE
    fixed("SET 1,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 1))?;
        Ok(())
    }),
    // 0xCF
    fixed("SET 1,A", 2, |cpu, _| {
        cpu.a |= 1 << 1;
        Ok(())
    }),
    // 0xD0
    fixed("SET 2,B", 2, |cpu, _| {
        cpu.b |= 1 << 2;
        Ok(())
    }),
    // 0xD1
    fixed("SET 2,C", 2, |cpu, _| {
        cpu.c |= 1 << 2;
        Ok(())
    }),
    // 0xD2
    fixed("SET 2,D", 2, |cpu, _| {
        cpu.d |= 1 << 2;
        Ok(())
    }),
    // 0xD3
    fixed("SET 2,E", 2, |cpu, _| {
        cpu.e |= 1 << 2;
        Ok(())
    }),
    // 0xD4
    fixed("SET 2,H", 2, |cpu, _| {
        cpu.h |= 1 << 2;
        Ok(())
    }),
    // 0xD5
    fixed("SET 2,L", 2, |cpu, _| {
        cpu.l |= 1 << 2;
        Ok(())
    }),
    // 0xD6
    fixed("SET 2,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 2))?;
        Ok(())
    }),
    // 0xD7
    fixed("SET 2,A", 2, |cpu, _| {
        cpu.a |= 1 << 2;
        Ok(())
    }),
    // 0xD8
    fixed("SET 3,B", 2, |cpu, _| {
        cpu.b |= 1 << 3;
        Ok(())
    }),
    // 0xD9
    fixed("SET 3,C", 2, |cpu, _| {
        cpu.c |= 1 << 3;
        Ok(())
    }),
    // 0xDA
    fixed("SET 3,D", 2, |cpu, _| {
        cpu.d |= 1 << 3;
        Ok(())
    }),
    // 0xDB
    fixed("SET 3,E", 2, |cpu, _| {
        cpu.e |= 1 << 3;
        Ok(())
    }),
    // 0xDC
    fixed("SET 3,H", 2, |cpu, _| {
        cpu.h |= 1 << 3;
        Ok(())
    }),
    // 0xDD
    fixed("SET 3,L", 2, |cpu, _| {
        cpu.l |= 1 << 3;
        Ok(())
    }),
    // 0xDE
    fixed("SET 3,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 3))?;
        Ok(())
    }),
    // 0xDF
    fixed("SET 3,A", 2, |cpu, _| {
        cpu.a |= 1 << 3;
        Ok(())
    }),
    // 0xE0
    fixed("SET 4,B", 2, |cpu, _| {
        cpu.b |= 1 << 4;
        Ok(())
    }),
    // 0xE1
    fixed("SET 4,C", 2, |cpu, _| {
        cpu.c |= 1 << 4;
        Ok(())
    }),
    // 0xE2
    fixed("SET 4,D", 2, |cpu, _| {
        cpu.d |= 1 << 4;
        Ok(())
    }),
    // 0xE3
    fixed("SET 4,E", 2, |cpu, _| {
        cpu.e |= 1 << 4;
        Ok(())
    }),
    // 0xE4
    fixed("SET 4,H", 2, |cpu, _| {
        cpu.h |= 1 << 4;
        Ok(())
    }),
    // 0xE5
    fixed("SET 4,L", 2, |cpu, _| {
        cpu.l |= 1 << 4;
        Ok(())
    }),
    // 0xE6
    fixed("SET 4,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 4))?;
        Ok(())
    }),
    // 0xE7
    fixed("SET 4,A", 2, |cpu, _| {
        cpu.a |= 1 << 4;
        Ok(())
    }),
    // 0xE8
    fixed("SET 5,B", 2, |cpu, _| {
        cpu.b |= 1 << 5;
        Ok(())
    }),
    // 0xE9
    fixed("SET 5,C", 2, |cpu, _| {
        cpu.c |= 1 << 5;
        Ok(())
    }),
    // 0xEA
    fixed("SET 5,D", 2, |cpu, _| {
        cpu.d |= 1 << 5;
        Ok(())
    }),
    // 0xEB
    fixed("SET 5,E", 2, |cpu, _| {
        cpu.e |= 1 << 5;
        Ok(())
    }),
    // 0xEC
    fixed("SET 5,H", 2, |cpu, _| {
        cpu.h |= 1 << 5;
        Ok(())
    }),
    // 0xED
    fixed("SET 5,L", 2, |cpu, _| {
        cpu.l |= 1 << 5;
        Ok(())
    }),
    // 0xEE
    fixed("SET 5,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 5))?;
        Ok(())
    }),
    // 0xEF
    fixed("SET 5,A", 2, |cpu, _| {
        cpu.a |= 1 << 5;
        Ok(())
    }),
    // 0xF0
    fixed("SET 6,B", 2, |cpu, _| {
        cpu.b |= 1 << 6;
        Ok(())
    }),
    // 0xF1
    fixed("SET 6,C", 2, |cpu, _| {
        cpu.c |= 1 << 6;
        Ok(())
    }),
    // 0xF2
    fixed("SET 6,D", 2, |cpu, _| {
        cpu.d |= 1 << 6;
        Ok(())
    }),
    // 0xF3
    fixed("SET 6,E", 2, |cpu, _| {
        cpu.e |= 1 << 6;
        Ok(())
    }),
    // 0xF4
    fixed("SET 6,H", 2, |cpu, _| {
        cpu.h |= 1 << 6;
        Ok(())
    }),
    // 0xF5
    fixed("SET 6,L", 2, |cpu, _| {
        cpu.l |= 1 << 6;
        Ok(())
    }),
    // 0xF6
    fixed("SET 6,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 6))?;
        Ok(())
    }),
    // 0xF7
    fixed("SET 6,A", 2, |cpu, _| {
        cpu.a |= 1 << 6;
        Ok(())
    }),
    // 0xF8
    fixed("SET 7,B", 2, |cpu, _| {
        cpu.b |= 1 << 7;
        Ok(())
    }),
    // 0xF9
    fixed("SET 7,C", 2, |cpu, _| {
        cpu.c |= 1 << 7;
        Ok(())
    }),
    // 0xFA
    fixed("SET 7,D", 2, |cpu, _| {
        cpu.d |= 1 << 7;
        Ok(())
    }),
    // 0xFB
    fixed("SET 7,E", 2, |cpu, _| {
        cpu.e |= 1 << 7;
        Ok(())
    }),
    // 0xFC
    fixed("SET 7,H", 2, |cpu, _| {
        cpu.h |= 1 << 7;
        Ok(())
    }),
    // 0xFD
    fixed("SET 7,L", 2, |cpu, _| {
        cpu.l |= 1 << 7;
        Ok(())
    }),
    // 0xFE
    fixed("SET 7,(HL)", 4, |cpu, bus| {
        let value = cpu.read_hl(bus)?;
        cpu.write_hl(bus, value | (1 << 7))?;
        Ok(())
    }),
    // 0xFF
    fixed("SET 7,A", 2, |cpu, _| {
        cpu.a |= 1 << 7;
        Ok(())
    }),
];
