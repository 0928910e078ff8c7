/// Default length of one shuffle window: ten minutes.
pub const DEFAULT_WINDOW_DURATION_MS: u64 = 10 * 60 * 1000;

/// Fixed odd constant XORed into the epoch before seeding the generator, so
/// consecutive epochs do not start from visibly similar small seeds.
pub const DEFAULT_SEED_MIX: u32 = 0x9E37_79B9;

/// Integer naming one fixed-length slot of wall-clock time.
pub type WindowEpoch = i64;

/// Maps wall-clock milliseconds onto shuffle windows and window seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleWindow {
    duration_ms: u64,
    seed_mix: u32,
}

impl Default for ShuffleWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DURATION_MS, DEFAULT_SEED_MIX)
    }
}

impl ShuffleWindow {
    /// `duration_ms` is clamped to at least 1.
    pub fn new(duration_ms: u64, seed_mix: u32) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            seed_mix,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// `floor(now_ms / duration_ms)`; floors toward negative infinity so the
    /// mapping stays monotonic for pre-1970 timestamps too.
    pub fn epoch(&self, now_ms: i64) -> WindowEpoch {
        let duration = i64::try_from(self.duration_ms).unwrap_or(i64::MAX);
        now_ms.div_euclid(duration)
    }

    /// Seed for the generator during `epoch`: the epoch's low 32 bits XOR
    /// the mixing constant.
    pub fn seed_for(&self, epoch: WindowEpoch) -> u32 {
        (epoch as u32) ^ self.seed_mix
    }

    pub fn seed_at(&self, now_ms: i64) -> u32 {
        self.seed_for(self.epoch(now_ms))
    }
}
