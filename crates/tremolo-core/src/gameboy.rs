use crate::apu::Apu;
use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, StepError};

/// T-states per machine cycle: the instruction tables count machine cycles,
/// audio time is counted in T-states.
pub const T_CYCLES_PER_M_CYCLE: u32 = 4;

/// A complete machine: CPU, bus and APU wired together for a scheduler.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: Bus,
    pub apu: Apu,
}

impl GameBoy {
    /// Machine in the post-boot state, no cartridge loaded.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::new(),
            apu: Apu::new(),
        }
    }

    pub fn load_cart(&mut self, cart: Box<dyn Cartridge>) {
        self.bus.load_cart(cart);
    }

    /// Execute one instruction (or service one interrupt) and advance the
    /// audio unit by the same span of time. Returns the T-states consumed.
    ///
    /// Within one call the CPU completes before the APU observes its
    /// register writes, so audio state is always consistent with the
    /// program-visible MMIO state.
    pub fn step(&mut self) -> Result<u32, StepError> {
        let m_cycles = self.cpu.step(&mut self.bus)?;
        let t_cycles = m_cycles * T_CYCLES_PER_M_CYCLE;
        self.apu.run(&mut self.bus, t_cycles as u64);
        Ok(t_cycles)
    }

    /// Reset to the post-boot state while preserving the loaded cartridge.
    pub fn reset(&mut self) {
        let cart = self.bus.cart.take();
        self.cpu = Cpu::new();
        self.bus = Bus::new();
        self.apu = Apu::new();
        if let Some(c) = cart {
            self.bus.load_cart(c);
        }
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
