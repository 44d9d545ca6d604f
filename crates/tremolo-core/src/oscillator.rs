/// Capability surface of a host tone generator.
///
/// The core never synthesizes PCM; it drives one sink per voice with
/// frequency/amplitude/pan ramps and lets the host's audio engine do the
/// synthesis. Implementations own any cross-thread handoff to an audio
/// callback; the core only ever calls these methods from the scheduler
/// thread.
pub trait Oscillator {
    fn start(&mut self);
    fn stop(&mut self);

    fn set_frequency(&mut self, hz: f32);
    fn ramp_frequency(&mut self, hz: f32, seconds: f32);

    /// `amplitude` is normalized to `0.0..=1.0`.
    fn set_amplitude(&mut self, amplitude: f32);
    fn ramp_amplitude(&mut self, amplitude: f32, seconds: f32);

    /// Pulse oscillators only: duty fraction in `0.0..=1.0`.
    fn set_pulse_width(&mut self, _width: f32) {}

    /// Custom-wave oscillators only: one period of the waveform, normalized
    /// to `-1.0..=1.0`.
    fn set_wavetable(&mut self, _samples: &[f32; 32]) {}

    /// `-1.0` hard left, `+1.0` hard right. Hosts typically satisfy this
    /// with a panner node wrapping the tone generator.
    fn ramp_pan(&mut self, pan: f32, seconds: f32);
}

/// Sink for headless operation: every parameter is accepted and discarded.
///
/// Running with null sinks is a supported configuration (host audio
/// disabled); envelope and routing state still advance normally.
pub struct NullOscillator;

impl Oscillator for NullOscillator {
    fn start(&mut self) {}
    fn stop(&mut self) {}
    fn set_frequency(&mut self, _hz: f32) {}
    fn ramp_frequency(&mut self, _hz: f32, _seconds: f32) {}
    fn set_amplitude(&mut self, _amplitude: f32) {}
    fn ramp_amplitude(&mut self, _amplitude: f32, _seconds: f32) {}
    fn ramp_pan(&mut self, _pan: f32, _seconds: f32) {}
}
