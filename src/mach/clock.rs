use chrono::Duration;

pub const NORMAL_IPS: f64 = 5.0;
pub const TURBO_MULTIPLIER: f64 = 36_000_000.0;
pub const MAX_IPF: f64 = 3_000_000.0;

/// How often the measured rate is refreshed.
pub fn update_interval() -> Duration {
    Duration::milliseconds(500)
}

/// ## Execution throttle
///
/// Turns wall time into instruction budgets for `Runtime::step`.
/// Call `tick` once per frame with the time since the last frame,
/// step with the budget it returns, then `consume` what actually ran.
#[derive(Debug, Clone)]
pub struct Clock {
    pub normal_ips: f64,
    pub turbo_multiplier: f64,
    /// Most instructions handed out by one `tick`.
    pub max_ipf: f64,
    turbo: bool,
    paused: bool,
    queued: f64,
    meter_elapsed: Duration,
    meter_count: f64,
    ips: Option<f64>,
}

impl Default for Clock {
    fn default() -> Clock {
        Clock::new(NORMAL_IPS, TURBO_MULTIPLIER, MAX_IPF)
    }
}

impl Clock {
    pub fn new(normal_ips: f64, turbo_multiplier: f64, max_ipf: f64) -> Clock {
        Clock {
            normal_ips,
            turbo_multiplier,
            max_ipf,
            turbo: false,
            paused: false,
            queued: 0.0,
            meter_elapsed: Duration::zero(),
            meter_count: 0.0,
            ips: None,
        }
    }

    pub fn target_ips(&self) -> f64 {
        if self.paused {
            0.0
        } else if self.turbo {
            self.normal_ips * self.turbo_multiplier
        } else {
            self.normal_ips
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_turbo(&self) -> bool {
        self.turbo
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.queued = 0.0;
    }

    pub fn set_turbo(&mut self, turbo: bool) {
        self.turbo = turbo;
        self.queued = 0.0;
    }

    /// Pause, and when already paused let exactly one instruction through.
    pub fn single_step(&mut self) {
        self.queued = if self.paused { 1.0 } else { 0.0 };
        self.paused = true;
    }

    /// Budget for this frame.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        self.queued += self.target_ips() * seconds(elapsed);
        self.meter_elapsed = self.meter_elapsed + elapsed;
        self.queued.min(self.max_ipf).max(0.0).floor() as usize
    }

    pub fn consume(&mut self, executed: usize) {
        self.queued -= executed as f64;
        self.meter_count += executed as f64;
        if self.meter_elapsed > update_interval() && self.meter_count > 0.0 {
            self.ips = Some(self.meter_count / seconds(self.meter_elapsed));
            self.meter_elapsed = Duration::zero();
            self.meter_count = 0.0;
        }
    }

    /// Measured instructions per second, once there is a measurement.
    pub fn ips(&self) -> Option<f64> {
        self.ips
    }
}

fn seconds(duration: Duration) -> f64 {
    match duration.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => duration.num_milliseconds() as f64 / 1_000.0,
    }
}
