#![allow(dead_code)]

use testtimer::timer::TickSource;

/// Tick source for driving a session by hand: records start/stop calls only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ManualTicks {
    pub running: bool,
    pub starts: u32,
    pub stops: u32,
}

impl TickSource for ManualTicks {
    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }
}
