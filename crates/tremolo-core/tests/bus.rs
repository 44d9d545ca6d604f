use tremolo_core::bus::{self, Bus, MemOp, MemoryFault};
use tremolo_core::cartridge::{Cartridge, RomOnly};

#[test]
fn wram_echo_mirror_both_directions() {
    let mut bus = Bus::new();
    bus.write_byte(0xC100, 0x42).unwrap();
    assert_eq!(bus.read_byte(0xE100).unwrap(), 0x42);

    bus.write_byte(0xE200, 0x55).unwrap();
    assert_eq!(bus.read_byte(0xC200).unwrap(), 0x55);
}

#[test]
fn echo_mirror_holds_over_the_whole_range() {
    let mut bus = Bus::new();
    for addr in (0xE000u16..0xFE00).step_by(0x100) {
        bus.write_byte(addr - 0x2000, addr as u8).unwrap();
        assert_eq!(bus.read_byte(addr).unwrap(), addr as u8);
    }
}

#[test]
fn prohibited_range_reads_ff_and_drops_writes() {
    let mut bus = Bus::new();
    for addr in [0xFEA0u16, 0xFEC3, 0xFEFF] {
        bus.write_byte(addr, 0x12).unwrap();
        assert_eq!(bus.read_byte(addr).unwrap(), 0xFF);
    }
}

#[test]
fn words_are_little_endian() {
    let mut bus = Bus::new();
    bus.write_word(0xC000, 0x1234).unwrap();
    assert_eq!(bus.read_byte(0xC000).unwrap(), 0x34);
    assert_eq!(bus.read_byte(0xC001).unwrap(), 0x12);
    assert_eq!(bus.read_word(0xC000).unwrap(), 0x1234);
}

#[test]
fn hram_and_ie() {
    let mut bus = Bus::new();
    bus.write_byte(0xFF80, 0xAB).unwrap();
    bus.write_byte(0xFFFE, 0xCD).unwrap();
    assert_eq!(bus.read_byte(0xFF80).unwrap(), 0xAB);
    assert_eq!(bus.read_byte(0xFFFE).unwrap(), 0xCD);

    bus.write_byte(0xFFFF, 0x1F).unwrap();
    assert_eq!(bus.read_byte(0xFFFF).unwrap(), 0x1F);
    assert_eq!(bus.register(bus::IE).get(), 0x1F);
}

#[test]
fn open_bus_without_a_cartridge() {
    let mut bus = Bus::new();
    assert_eq!(bus.read_byte(0x0000).unwrap(), 0xFF);
    assert_eq!(bus.read_byte(0x4000).unwrap(), 0xFF);
    assert_eq!(bus.read_byte(0xA000).unwrap(), 0xFF);
    bus.write_byte(0x2000, 0x01).unwrap();
}

#[test]
fn rom_writes_reach_the_mapper_not_memory() {
    let mut rom = vec![0u8; 0x8000];
    rom[0x1234] = 0x77;
    let mut bus = Bus::new();
    bus.load_cart(Box::new(RomOnly::new(rom)));

    bus.write_byte(0x1234, 0x00).unwrap();
    assert_eq!(bus.read_byte(0x1234).unwrap(), 0x77);
}

#[test]
fn cartridge_ram_window() {
    let mut bus = Bus::new();
    bus.load_cart(Box::new(RomOnly::with_ram(vec![0; 0x200], 0x2000)));

    bus.write_byte(0xA000, 0x55).unwrap();
    assert_eq!(bus.read_byte(0xA000).unwrap(), 0x55);
    bus.write_byte(0xBFFF, 0xAA).unwrap();
    assert_eq!(bus.read_byte(0xBFFF).unwrap(), 0xAA);
}

#[test]
fn register_version_counts_every_write() {
    let mut bus = Bus::new();
    let before = bus.register(bus::NR12).version();
    bus.write_byte(0xFF12, 0x80).unwrap();
    bus.write_byte(0xFF12, 0x80).unwrap();
    let after = bus.register(bus::NR12).version();
    assert_eq!(after, before + 2);
}

#[test]
fn register_bit_access() {
    let mut bus = Bus::new();
    let reg = bus.register_mut(bus::NR52);
    reg.set(0x00);
    reg.set_bit(7, true);
    assert_eq!(reg.get(), 0x80);
    assert!(reg.bit(7));
    assert!(!reg.bit(0));
    reg.set_bit(7, false);
    assert_eq!(reg.get(), 0x00);
    assert_eq!(reg.bits(4, 6), 0);

    reg.set(0b0101_0000);
    assert_eq!(reg.bits(4, 6), 0b101);
}

#[test]
fn wave_ram_version_is_monotonic() {
    let mut bus = Bus::new();
    let v0 = bus.wave_ram_version();
    bus.write_byte(0xFF30, 0x12).unwrap();
    let v1 = bus.wave_ram_version();
    assert!(v1 > v0);
    bus.write_byte(0xFF3F, 0x34).unwrap();
    assert!(bus.wave_ram_version() > v1);
    // Non-wave writes do not move it.
    bus.write_byte(0xFF26, 0x80).unwrap();
    assert_eq!(bus.wave_ram_version(), v1 + 1);
}

/// Mapper that refuses everything, for exercising the fault path.
struct RefusingCart;

impl Cartridge for RefusingCart {
    fn read(&mut self, addr: u16) -> Result<u8, MemoryFault> {
        Err(MemoryFault {
            addr,
            op: MemOp::Read,
        })
    }

    fn write(&mut self, addr: u16, _value: u8) -> Result<(), MemoryFault> {
        Err(MemoryFault {
            addr,
            op: MemOp::Write,
        })
    }
}

#[test]
fn mapper_refusal_surfaces_as_memory_fault() {
    let mut bus = Bus::new();
    bus.load_cart(Box::new(RefusingCart));

    let fault = bus.read_byte(0x0100).unwrap_err();
    assert_eq!(fault.addr, 0x0100);
    assert_eq!(fault.op, MemOp::Read);

    let fault = bus.write_byte(0x2000, 0x01).unwrap_err();
    assert_eq!(fault.addr, 0x2000);
    assert_eq!(fault.op, MemOp::Write);

    // Internal regions stay infallible.
    assert!(bus.write_byte(0xC000, 0x00).is_ok());
}
