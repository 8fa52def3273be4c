//! Playback parameters
//!
//! Rate, pitch, and volume as the user sets them. Rate and pitch are
//! factors around a normal of 1.0; volume runs 0.0-1.0 but is shown to the
//! user as a percentage. All three move in 0.1 steps and clamp to range.

pub const RATE_MIN: f32 = 0.5;
pub const RATE_MAX: f32 = 2.0;
pub const PITCH_MIN: f32 = 0.5;
pub const PITCH_MAX: f32 = 2.0;
pub const VOLUME_MIN: f32 = 0.0;
pub const VOLUME_MAX: f32 = 1.0;

/// Slider step for all three parameters
pub const STEP: f32 = 0.1;

/// User-set speech delivery parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackParams {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for PlaybackParams {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Snap to the 0.1 step grid so repeated adjustments don't accumulate
/// floating point drift
fn snap(value: f32) -> f32 {
    (value / STEP).round() * STEP
}

impl PlaybackParams {
    pub fn set_rate(&mut self, rate: f32) {
        self.rate = snap(rate.clamp(RATE_MIN, RATE_MAX));
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = snap(pitch.clamp(PITCH_MIN, PITCH_MAX));
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = snap(volume.clamp(VOLUME_MIN, VOLUME_MAX));
    }

    /// Move rate one step; positive direction is faster
    pub fn step_rate(&mut self, direction: i32) {
        self.set_rate(self.rate + STEP * direction as f32);
    }

    pub fn step_pitch(&mut self, direction: i32) {
        self.set_pitch(self.pitch + STEP * direction as f32);
    }

    pub fn step_volume(&mut self, direction: i32) {
        self.set_volume(self.volume + STEP * direction as f32);
    }

    /// Volume as shown to the user (0-100%)
    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PlaybackParams::default();
        assert_eq!(params.rate, 1.0);
        assert_eq!(params.pitch, 1.0);
        assert_eq!(params.volume, 1.0);
    }

    #[test]
    fn test_setters_clamp() {
        let mut params = PlaybackParams::default();
        params.set_rate(10.0);
        assert_eq!(params.rate, RATE_MAX);
        params.set_rate(0.0);
        assert_eq!(params.rate, RATE_MIN);
        params.set_volume(-1.0);
        assert_eq!(params.volume, VOLUME_MIN);
        params.set_volume(2.0);
        assert_eq!(params.volume, VOLUME_MAX);
    }

    #[test]
    fn test_steps_stay_on_grid() {
        let mut params = PlaybackParams::default();
        for _ in 0..7 {
            params.step_rate(-1);
        }
        // 1.0 - 7*0.1 clamps at 0.5, not 0.3
        assert_eq!(params.rate, RATE_MIN);

        params.set_rate(1.0);
        for _ in 0..3 {
            params.step_rate(1);
        }
        assert!((params.rate - 1.3).abs() < 1e-6);
    }

    #[test]
    fn test_volume_percent() {
        let mut params = PlaybackParams::default();
        assert_eq!(params.volume_percent(), 100);
        params.set_volume(0.5);
        assert_eq!(params.volume_percent(), 50);
        params.step_volume(-1);
        assert_eq!(params.volume_percent(), 40);
        params.set_volume(0.0);
        assert_eq!(params.volume_percent(), 0);
    }
}
