use log::info;

/// Gates the main loop to a fixed frame rate.
///
/// Times are microsecond timer readings and may wrap.
pub struct FrameTimer {
    frame_interval_us: u32,
    last_frame_us: Option<u32>,
}

impl FrameTimer {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_interval_us: 1_000_000 / frame_rate.max(1),
            last_frame_us: None,
        }
    }

    pub fn frame_interval_us(&self) -> u32 {
        self.frame_interval_us
    }

    /// Returns true if a new frame should be produced at `now_us`.
    pub fn next_frame(&mut self, now_us: u32) -> bool {
        match self.last_frame_us {
            Some(last) if now_us.wrapping_sub(last) < self.frame_interval_us => false,
            _ => {
                self.last_frame_us = Some(now_us);
                true
            }
        }
    }
}

pub struct FpsMonitor {
    last_time_us: u32,
    frames: u32,
}

impl FpsMonitor {
    const FPS_INTERVAL_US: u32 = 1_000_000;

    pub fn new(now_us: u32) -> Self {
        Self {
            last_time_us: now_us,
            frames: 0,
        }
    }

    /// Counts a frame. Returns the frame count once per second.
    pub fn update(&mut self, now_us: u32) -> Option<u32> {
        self.frames += 1;
        if now_us.wrapping_sub(self.last_time_us) >= Self::FPS_INTERVAL_US {
            let frames = self.frames;
            info!("FPS: {}", frames);
            self.last_time_us = now_us;
            self.frames = 0;
            Some(frames)
        } else {
            None
        }
    }
}
