/// Converts variable frame deltas into whole fixed simulation steps.
///
/// The core contracts all assume `dt > 0` and frame-rate-independent
/// correction factors; driving ticks through this accumulator gives every
/// step the same positive dt while the real frame time wobbles.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_catch_up: u32,
}

impl FixedTimestep {
    /// # Panics
    ///
    /// Panics if `dt` is not strictly positive.
    pub fn new(dt: f32) -> Self {
        assert!(dt > 0.0, "fixed timestep requires dt > 0");
        Self {
            dt,
            accumulator: 0.0,
            max_catch_up: 8,
        }
    }

    /// Limit how many steps a single slow frame may trigger. Excess time is
    /// dropped rather than snowballing into ever-longer frames.
    pub fn with_max_catch_up(mut self, steps: u32) -> Self {
        self.max_catch_up = steps.max(1);
        self
    }

    /// Feed one frame's wall-clock delta; returns how many fixed steps to
    /// run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * self.max_catch_up as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation fraction into the next step, for render smoothing.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}
