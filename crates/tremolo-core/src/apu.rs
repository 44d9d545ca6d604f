use std::collections::HashMap;

use crate::bus::{self, Bus};
use crate::diagnostics::{self, Event};
use crate::envelope::{
    AmplitudeEnvelope, EnvelopeStatus, FrequencySweepEnvelope, LengthEnvelope, bits_to_frequency,
};
use crate::oscillator::{NullOscillator, Oscillator};

/// DMG master clock in T-states per second.
pub const CLOCK_HZ: u32 = 4_194_304;

/// Seconds over which oscillator parameter changes are smoothed. Hard steps
/// click audibly; 10 ms is short enough to track envelopes faithfully.
const RAMP_SECONDS: f32 = 0.01;

// NR10 pace field -> seconds per sweep tick (128 Hz frame-sequencer units).
const SWEEP_TIMES: [f64; 8] = [0.0, 0.0078, 0.0156, 0.0234, 0.0313, 0.0391, 0.0469, 0.0547];

// NRx1 duty selector -> pulse width.
const DUTY_CYCLES: [f32; 4] = [0.125, 0.25, 0.5, 0.75];

// Volume envelope steps are 64 Hz frame-sequencer units.
const ENVELOPE_STEP_SECONDS: f64 = 1.0 / 64.0;

// Length counter units are 256 Hz frame-sequencer units.
const LENGTH_UNIT_SECONDS: f64 = 1.0 / 256.0;

/// Immutable per-run decode of a pulse voice's registers (NR10-NR14 or
/// NR21-NR24). Change detection is equality on this snapshot; nothing in the
/// APU resets an envelope merely because a field was assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PulseParams {
    frequency_bits: u16,
    duty: u8,
    length_enabled: bool,
    length: f64,
    envelope_start: u8,
    envelope_increasing: bool,
    envelope_step: f64,
    sweep: Option<SweepParams>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SweepParams {
    time: f64,
    increasing: bool,
    shifts: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WaveParams {
    frequency_bits: u16,
    enabled: bool,
    length_enabled: bool,
    length: f64,
    output_shift: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct NoiseParams {
    clock_shift: u8,
    divisor: u8,
    length_enabled: bool,
    length: f64,
    envelope_start: u8,
    envelope_increasing: bool,
    envelope_step: f64,
}

fn decode_pulse(bus: &Bus, base: u16, with_sweep: bool) -> PulseParams {
    let nrx1 = bus.register(base + 1);
    let nrx2 = bus.register(base + 2);
    let nrx3 = bus.register(base + 3);
    let nrx4 = bus.register(base + 4);
    let sweep = with_sweep.then(|| {
        let nr10 = bus.register(bus::NR10);
        SweepParams {
            time: SWEEP_TIMES[nr10.bits(4, 6) as usize],
            increasing: nr10.bit(3),
            shifts: nr10.bits(0, 2),
        }
    });
    PulseParams {
        frequency_bits: ((nrx4.bits(0, 2) as u16) << 8) | nrx3.get() as u16,
        duty: nrx1.bits(6, 7),
        length_enabled: nrx4.bit(6),
        length: (64 - nrx1.bits(0, 5)) as f64 * LENGTH_UNIT_SECONDS,
        envelope_start: nrx2.bits(4, 7),
        envelope_increasing: nrx2.bit(3),
        envelope_step: nrx2.bits(0, 2) as f64 * ENVELOPE_STEP_SECONDS,
        sweep,
    }
}

fn decode_wave(bus: &Bus) -> WaveParams {
    let nr30 = bus.register(bus::NR30);
    let nr31 = bus.register(bus::NR31);
    let nr32 = bus.register(bus::NR32);
    let nr33 = bus.register(bus::NR33);
    let nr34 = bus.register(bus::NR34);
    WaveParams {
        frequency_bits: ((nr34.bits(0, 2) as u16) << 8) | nr33.get() as u16,
        enabled: nr30.bit(7),
        length_enabled: nr34.bit(6),
        length: (256 - nr31.get() as u16) as f64 * LENGTH_UNIT_SECONDS,
        output_shift: nr32.bits(5, 6),
    }
}

fn decode_noise(bus: &Bus) -> NoiseParams {
    let nr41 = bus.register(bus::NR41);
    let nr42 = bus.register(bus::NR42);
    let nr43 = bus.register(bus::NR43);
    NoiseParams {
        clock_shift: nr43.bits(4, 7),
        divisor: nr43.bits(0, 2),
        length_enabled: bus.register(bus::NR44).bit(6),
        length: (64 - nr41.bits(0, 5)) as f64 * LENGTH_UNIT_SECONDS,
        envelope_start: nr42.bits(4, 7),
        envelope_increasing: nr42.bit(3),
        envelope_step: nr42.bits(0, 2) as f64 * ENVELOPE_STEP_SECONDS,
    }
}

/// LFSR clock rate in Hz for the noise voice (NR43 divisor/shift fields).
fn noise_frequency(clock_shift: u8, divisor: u8) -> f64 {
    let period = match divisor {
        0 => 8u32,
        d => d as u32 * 16,
    } << clock_shift;
    CLOCK_HZ as f64 / period as f64
}

/// Which voice a [`Voice`] is; carries the per-kind state that has no
/// common shape (sweep for pulse A, wavetable shift for the wave voice).
enum VoiceKind {
    Pulse {
        sweep: Option<FrequencySweepEnvelope>,
        duty: f32,
    },
    Wave {
        output_shift: u8,
    },
    Noise,
}

/// One of the four sound sources, driving exactly one oscillator sink.
pub struct Voice {
    kind: VoiceKind,
    osc: Box<dyn Oscillator>,
    pub frequency: f64,
    pub amplitude: f32,
    pub pan: f32,
    pub muted: bool,
    pub stopped: bool,
    /// Last observed state of NRx4 bit 7.
    pub triggered: bool,
    pub left_on: bool,
    pub right_on: bool,
    amplitude_env: Option<AmplitudeEnvelope>,
    length_env: LengthEnvelope,
    /// NRx4 handle version at the last trigger observation; a version bump
    /// with bit 7 set is a trigger edge even without an intervening clear.
    trigger_seen: u64,
}

impl Voice {
    fn new(kind: VoiceKind, osc: Box<dyn Oscillator>) -> Self {
        Self {
            kind,
            osc,
            frequency: 0.0,
            amplitude: 0.0,
            pan: 0.0,
            muted: false,
            stopped: true,
            triggered: false,
            left_on: false,
            right_on: false,
            amplitude_env: None,
            length_env: LengthEnvelope::new(false, 0.0),
            trigger_seen: 0,
        }
    }

    /// Replace the sink. The next update re-ramps every parameter.
    pub fn set_oscillator(&mut self, osc: Box<dyn Oscillator>) {
        self.osc = osc;
    }

    /// Duty fraction for pulse voices, `None` for the others.
    pub fn pulse_width(&self) -> Option<f32> {
        match &self.kind {
            VoiceKind::Pulse { duty, .. } => Some(*duty),
            _ => None,
        }
    }

    /// NR32 output shift for the wave voice, `None` for the others.
    pub fn wave_output_shift(&self) -> Option<u8> {
        match &self.kind {
            VoiceKind::Wave { output_shift } => Some(*output_shift),
            _ => None,
        }
    }

    /// Trigger edge: restart playback and rewind every owned envelope.
    fn on_triggered(&mut self, start_frequency: f64) {
        self.stopped = false;
        if let Some(env) = self.amplitude_env.as_mut() {
            env.reset();
        }
        self.length_env.reset();
        if let VoiceKind::Pulse {
            sweep: Some(sweep), ..
        } = &mut self.kind
        {
            sweep.reset(start_frequency);
        }
        self.osc.start();
    }

    /// Ramp the sink toward the voice's current targets.
    fn update(&mut self) {
        let audible = !(self.muted || self.stopped || (!self.left_on && !self.right_on));
        let target = if audible { self.amplitude } else { 0.0 };
        self.osc.ramp_amplitude(target, RAMP_SECONDS);
        self.osc.ramp_frequency(self.frequency as f32, RAMP_SECONDS);
        self.osc.ramp_pan(self.pan, RAMP_SECONDS);
    }

    fn silence(&mut self) {
        self.stopped = true;
        self.osc.ramp_amplitude(0.0, RAMP_SECONDS);
        self.osc.stop();
    }
}

/// Wave RAM to wavetable conversion, memoized on the aggregate wave RAM
/// version and the NR32 output shift. The table is pushed to the oscillator
/// only when that key changes.
struct WaveformMemo {
    tables: HashMap<(u64, u8), [f32; 32]>,
    pushed: Option<(u64, u8)>,
}

impl WaveformMemo {
    fn new() -> Self {
        Self {
            tables: HashMap::new(),
            pushed: None,
        }
    }

    fn convert(bus: &Bus, output_shift: u8) -> [f32; 32] {
        let mut table = [0.0f32; 32];
        for (i, slot) in table.iter_mut().enumerate() {
            let byte = bus.register(bus::WAVE_RAM_START + (i as u16 / 2)).get();
            // High nibble first.
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0F };
            *slot = (nibble >> output_shift) as f32 / 15.0 * 2.0 - 1.0;
        }
        table
    }

    /// Returns the table only when the sink has not seen this key yet.
    fn refresh(&mut self, bus: &Bus, output_shift: u8) -> Option<[f32; 32]> {
        let key = (bus.wave_ram_version(), output_shift);
        if self.pushed == Some(key) {
            return None;
        }
        let table = *self
            .tables
            .entry(key)
            .or_insert_with(|| Self::convert(bus, output_shift));
        self.pushed = Some(key);
        Some(table)
    }
}

/// The four-voice audio unit.
///
/// `run` is driven with the T-state count the CPU just consumed; all
/// envelope math happens in seconds at the 4.194304 MHz T-state rate. The
/// APU reads program-visible state exclusively through the bus's MMIO
/// register handles and publishes voice activity back into NR52.
pub struct Apu {
    pub pulse_a: Voice,
    pub pulse_b: Voice,
    pub wave: Voice,
    pub noise: Voice,
    /// Last observed state of NR52 bit 7, for falling-edge detection.
    enabled: bool,
    master_volume: f32,
    memo: WaveformMemo,
    pulse_a_params: Option<PulseParams>,
    pulse_b_params: Option<PulseParams>,
    wave_params: Option<WaveParams>,
    noise_params: Option<NoiseParams>,
}

impl Apu {
    /// An APU with null sinks on every voice (headless).
    pub fn new() -> Self {
        Self::with_oscillators(
            Box::new(NullOscillator),
            Box::new(NullOscillator),
            Box::new(NullOscillator),
            Box::new(NullOscillator),
        )
    }

    pub fn with_oscillators(
        pulse_a: Box<dyn Oscillator>,
        pulse_b: Box<dyn Oscillator>,
        wave: Box<dyn Oscillator>,
        noise: Box<dyn Oscillator>,
    ) -> Self {
        Self {
            pulse_a: Voice::new(
                VoiceKind::Pulse {
                    sweep: Some(FrequencySweepEnvelope::new(0.0, false, 0, 0.0)),
                    duty: 0.5,
                },
                pulse_a,
            ),
            pulse_b: Voice::new(VoiceKind::Pulse { sweep: None, duty: 0.5 }, pulse_b),
            wave: Voice::new(VoiceKind::Wave { output_shift: 4 }, wave),
            noise: Voice::new(VoiceKind::Noise, noise),
            enabled: true,
            master_volume: 1.0,
            memo: WaveformMemo::new(),
            pulse_a_params: None,
            pulse_b_params: None,
            wave_params: None,
            noise_params: None,
        }
    }

    /// Master mix volume decoded from NR50, normalized to `0.0..=1.0`.
    ///
    /// Applied by the host at its output stage; per-voice amplitudes ignore
    /// it. The louder of the two output channels wins.
    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Advance the audio unit by `cycles` T-states.
    pub fn run(&mut self, bus: &mut Bus, cycles: u64) {
        let master_on = bus.register(bus::NR52).bit(7);
        if !master_on {
            // Zero the sound registers exactly once on the falling edge;
            // repeated runs with the APU off are no-ops.
            if self.enabled {
                self.power_off(bus);
                self.enabled = false;
            }
            return;
        }
        self.enabled = true;

        let dt = cycles as f64 / CLOCK_HZ as f64;

        let nr50 = bus.register(bus::NR50).get();
        let left_vol = (nr50 >> 4) & 0x07;
        let right_vol = nr50 & 0x07;
        self.master_volume = left_vol.max(right_vol) as f32 / 7.0;

        let nr51 = bus.register(bus::NR51).get();

        self.update_pulse_a(bus, dt, nr51);
        self.update_pulse_b(bus, dt, nr51);
        self.update_wave(bus, dt, nr51);
        self.update_noise(bus, dt, nr51);
    }

    fn power_off(&mut self, bus: &mut Bus) {
        diagnostics::report(Event::ApuPowerOff);
        // Wave RAM survives a power cycle; NR10-NR51 do not.
        for addr in bus::NR10..=bus::NR51 {
            bus.register_mut(addr).set(0);
        }
        // The channel-status bits fall with the voices. Bit 7 and the unused
        // bits read back as written.
        for i in 0..4 {
            bus.register_mut(bus::NR52).set_bit(i, false);
        }
        for voice in [
            &mut self.pulse_a,
            &mut self.pulse_b,
            &mut self.wave,
            &mut self.noise,
        ] {
            voice.silence();
        }
        self.pulse_a_params = None;
        self.pulse_b_params = None;
        self.wave_params = None;
        self.noise_params = None;
    }

    /// Stereo routing from one NR51 bit pair to a pan position. With both
    /// sides off the voice stays positioned but `update` ramps it silent.
    fn route(voice: &mut Voice, nr51: u8, index: u8) {
        voice.right_on = nr51 & (1 << index) != 0;
        voice.left_on = nr51 & (1 << (index + 4)) != 0;
        voice.pan = match (voice.left_on, voice.right_on) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
    }

    fn observe_trigger(voice: &mut Voice, bus: &Bus, nrx4_addr: u16) -> bool {
        let nrx4 = bus.register(nrx4_addr);
        voice.triggered = nrx4.bit(7);
        let edge = voice.triggered && nrx4.version() != voice.trigger_seen;
        voice.trigger_seen = nrx4.version();
        edge
    }

    fn update_pulse_a(&mut self, bus: &mut Bus, dt: f64, nr51: u8) {
        let params = decode_pulse(bus, bus::NR10, true);
        let voice = &mut self.pulse_a;

        if self.pulse_a_params != Some(params) {
            Self::load_pulse(voice, &params);
            self.pulse_a_params = Some(params);
        }

        let base_frequency = bits_to_frequency(params.frequency_bits);
        if Self::observe_trigger(voice, bus, bus::NR14) {
            voice.on_triggered(base_frequency);
        }

        let mut playing = !voice.stopped;
        playing &= Self::advance_common(voice, dt);

        // The sweep owns the audible frequency while it is applicable.
        if let VoiceKind::Pulse {
            sweep: Some(sweep), ..
        } = &mut voice.kind
        {
            match sweep.advance(dt) {
                EnvelopeStatus::Deactivated => playing = false,
                EnvelopeStatus::Active => {
                    if let Some(hz) = sweep.frequency() {
                        voice.frequency = hz;
                    }
                }
                EnvelopeStatus::NotApplicable => voice.frequency = base_frequency,
            }
        }

        Self::finish_pulse(voice, bus, nr51, 0, playing);
    }

    fn update_pulse_b(&mut self, bus: &mut Bus, dt: f64, nr51: u8) {
        let params = decode_pulse(bus, bus::NR21 - 1, false);
        let voice = &mut self.pulse_b;

        if self.pulse_b_params != Some(params) {
            Self::load_pulse(voice, &params);
            self.pulse_b_params = Some(params);
        }

        voice.frequency = bits_to_frequency(params.frequency_bits);
        if Self::observe_trigger(voice, bus, bus::NR24) {
            voice.on_triggered(voice.frequency);
        }

        let mut playing = !voice.stopped;
        playing &= Self::advance_common(voice, dt);

        Self::finish_pulse(voice, bus, nr51, 1, playing);
    }

    fn update_wave(&mut self, bus: &mut Bus, dt: f64, nr51: u8) {
        let params = decode_wave(bus);
        let voice = &mut self.wave;

        if self.wave_params != Some(params) {
            voice.length_env.enabled = params.length_enabled;
            voice.length_env.duration = params.length;
            if let VoiceKind::Wave { output_shift } = &mut voice.kind {
                *output_shift = params.output_shift;
            }
            self.wave_params = Some(params);
        }

        // The wave voice plays one 32-sample period per (2048 - bits) * 64
        // T-states: half the pulse rate for the same period field.
        voice.frequency = bits_to_frequency(params.frequency_bits) / 2.0;
        if Self::observe_trigger(voice, bus, bus::NR34) {
            voice.on_triggered(voice.frequency);
        }

        let mut playing = !voice.stopped && params.enabled;
        playing &= Self::advance_common(voice, dt);
        // Sample levels are baked into the wavetable; the voice itself plays
        // at full scale.
        voice.amplitude = 1.0;

        voice.stopped = !playing;
        bus.register_mut(bus::NR52).set_bit(2, playing);
        Self::route(voice, nr51, 2);
        if let Some(table) = self.memo.refresh(bus, params.output_shift) {
            voice.osc.set_wavetable(&table);
        }
        voice.update();
    }

    fn update_noise(&mut self, bus: &mut Bus, dt: f64, nr51: u8) {
        let params = decode_noise(bus);
        let voice = &mut self.noise;

        if self.noise_params != Some(params) {
            Self::load_envelope(
                voice,
                params.envelope_start,
                params.envelope_increasing,
                params.envelope_step,
            );
            voice.length_env.enabled = params.length_enabled;
            voice.length_env.duration = params.length;
            self.noise_params = Some(params);
        }

        voice.frequency = noise_frequency(params.clock_shift, params.divisor);
        if Self::observe_trigger(voice, bus, bus::NR44) {
            voice.on_triggered(voice.frequency);
        }

        let mut playing = !voice.stopped;
        playing &= Self::advance_common(voice, dt);

        voice.stopped = !playing;
        bus.register_mut(bus::NR52).set_bit(3, playing);
        Self::route(voice, nr51, 3);
        voice.update();
    }

    /// Fold a parameter snapshot into a voice's envelopes in place. Elapsed
    /// time is never touched here; only a trigger rewinds an envelope.
    fn load_envelope(voice: &mut Voice, start: u8, increasing: bool, step: f64) {
        match voice.amplitude_env.as_mut() {
            Some(env) => {
                env.start_step = start;
                env.increasing = increasing;
                env.step_duration = step;
            }
            None => voice.amplitude_env = Some(AmplitudeEnvelope::new(start, increasing, step)),
        }
    }

    fn load_pulse(voice: &mut Voice, params: &PulseParams) {
        Self::load_envelope(
            voice,
            params.envelope_start,
            params.envelope_increasing,
            params.envelope_step,
        );
        voice.length_env.enabled = params.length_enabled;
        voice.length_env.duration = params.length;
        if let VoiceKind::Pulse { sweep, duty } = &mut voice.kind {
            *duty = DUTY_CYCLES[params.duty as usize];
            if let (Some(sweep), Some(sp)) = (sweep.as_mut(), params.sweep) {
                sweep.sweep_time = sp.time;
                sweep.increasing = sp.increasing;
                sweep.shifts = sp.shifts;
            }
        }
        voice.osc.set_pulse_width(DUTY_CYCLES[params.duty as usize]);
    }

    /// Advance the amplitude and length envelopes shared by every voice;
    /// returns whether the voice is still playing.
    fn advance_common(voice: &mut Voice, dt: f64) -> bool {
        let mut playing = true;
        if let Some(env) = voice.amplitude_env.as_mut() {
            if env.advance(dt) == EnvelopeStatus::Deactivated {
                playing = false;
            }
            voice.amplitude = env.amplitude();
        }
        if voice.length_env.advance(dt) == EnvelopeStatus::Deactivated {
            playing = false;
        }
        playing
    }

    fn finish_pulse(voice: &mut Voice, bus: &mut Bus, nr51: u8, index: u8, playing: bool) {
        voice.stopped = !playing;
        bus.register_mut(bus::NR52).set_bit(index, playing);
        Self::route(voice, nr51, index);
        voice.update();
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
