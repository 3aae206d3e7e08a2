/// Frame metadata handed to every per-frame update.
///
/// Animation steps in this kit are per-frame increments, not delta-scaled;
/// `delta` exists for the FPS readout.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator yielding one `FrameInfo` per driver step. Decoupled
/// from any rendering backend so scene updates can run headless.
pub struct FrameIterator {
    frame_number: u64,
    start_time: std::time::Instant,
    last_frame_time: std::time::Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = std::time::Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Rolling FPS readout for the viewer overlay, updated once per second.
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    const UPDATE_INTERVAL: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32) {
        self.frames += 1;
        self.elapsed += delta;
        if self.elapsed >= Self::UPDATE_INTERVAL {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
