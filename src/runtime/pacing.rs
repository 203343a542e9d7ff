//! Frame rate limiting

use serde::{Deserialize, Serialize};

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// Keeps each loop iteration from finishing sooner than the frame time
pub struct FramePacer {
    limit: FpsLimit,
}

impl FramePacer {
    /// Last stretch of the wait is spun rather than slept
    const SPIN_MARGIN: f64 = 0.002;

    pub fn new(limit: FpsLimit) -> Self {
        Self { limit }
    }

    /// Seconds still to wait after `elapsed` seconds of work, if any
    pub fn remaining(&self, elapsed: f64) -> Option<f64> {
        let target = self.limit.frame_time()?;
        let remaining = target - elapsed;
        (remaining > 0.0).then_some(remaining)
    }

    /// Block until the frame that began at `frame_start` has used its time
    pub fn wait(&self, frame_start: f64) {
        let now = macroquad::time::get_time;
        let Some(target) = self.limit.frame_time() else { return };
        if self.remaining(now() - frame_start).is_none() {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            while now() - frame_start + Self::SPIN_MARGIN < target {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
        }
        while now() - frame_start < target {
            std::hint::spin_loop();
        }
    }
}
