//! Square-wave tone generator capability.

/// A single-tone generator: the only hardware the player drives.
///
/// Implementations are infallible at this level; hardware faults are the
/// backend's own concern.
pub trait ToneOutput {
    /// Start (or retune) a square wave at `freq_hz`.
    fn start(&mut self, freq_hz: u16);

    /// Silence the output.
    fn stop(&mut self);
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn start(&mut self, freq_hz: u16) {
        (**self).start(freq_hz);
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}
