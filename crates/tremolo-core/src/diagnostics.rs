//! Structured diagnostics for embedders.
//!
//! The core does not link a logging framework. Hosts that want visibility
//! install an [`EventSink`] once per process; with no sink installed every
//! report is a cheap no-op. Events are typed rather than pre-formatted so a
//! frontend can count, filter or route them without parsing strings; the
//! `Display` impl gives a ready-made log line for hosts that just print.

use std::fmt;
use std::sync::OnceLock;

use crate::bus::MemOp;

/// Coarse severity, for hosts that map events onto a leveled logger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace,
    Info,
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Trace => f.write_str("TRACE"),
            Severity::Info => f.write_str("INFO"),
            Severity::Warn => f.write_str("WARN"),
        }
    }
}

/// Something the core wants the host to know about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Dispatch landed on an opcode byte with no defined effect; the
    /// machine is about to stop with an `UnknownOpcode` error.
    IllegalOpcode { opcode: u8, pc: u16 },
    /// The CPU pushed PC and jumped to an interrupt vector.
    InterruptDispatched { vector: u16, if_bits: u8 },
    /// A cartridge mapper refused a memory access.
    CartridgeRefusal { addr: u16, op: MemOp },
    /// NR52 bit 7 fell and the sound registers were cleared.
    ApuPowerOff,
    /// One instruction was fetched (emitted only with the `cpu-trace`
    /// feature; far too hot for normal runs).
    Instruction { pc: u16, mnemonic: &'static str },
}

impl Event {
    pub fn severity(&self) -> Severity {
        match self {
            Event::IllegalOpcode { .. } | Event::CartridgeRefusal { .. } => Severity::Warn,
            Event::ApuPowerOff => Severity::Info,
            Event::InterruptDispatched { .. } | Event::Instruction { .. } => Severity::Trace,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::IllegalOpcode { opcode, pc } => {
                write!(f, "illegal opcode {opcode:#04X} at {pc:#06X}")
            }
            Event::InterruptDispatched { vector, if_bits } => {
                write!(f, "interrupt dispatch to {vector:#06X}, IF now {if_bits:#04X}")
            }
            Event::CartridgeRefusal { addr, op } => {
                write!(f, "cartridge refused {op} at {addr:#06X}")
            }
            Event::ApuPowerOff => f.write_str("audio master disable, sound registers cleared"),
            Event::Instruction { pc, mnemonic } => write!(f, "{pc:04X}: {mnemonic}"),
        }
    }
}

/// Receiver for core events. `Send + Sync` because an embedder may observe
/// from an audio or UI thread while the scheduler thread reports.
pub trait EventSink: Send + Sync + 'static {
    fn event(&self, event: Event);
}

/// Sink that prints one line per event to standard error.
pub struct StderrSink;

impl EventSink for StderrSink {
    fn event(&self, event: Event) {
        eprintln!("[{}] {event}", event.severity());
    }
}

static EVENT_SINK: OnceLock<Box<dyn EventSink>> = OnceLock::new();

/// Install the process-wide sink. Hands the sink back if one was already
/// installed.
pub fn try_set_sink(sink: Box<dyn EventSink>) -> Result<(), Box<dyn EventSink>> {
    EVENT_SINK.set(sink)
}

pub(crate) fn report(event: Event) {
    if let Some(sink) = EVENT_SINK.get() {
        sink.event(event);
    }
}
