use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// Every ticker run gets its own id, so ticks from a stopped run can be told
// apart from those of the run that replaced it on the same channel.
static NEXT_RUN_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    Tick(u64),
}

/// Drives a countdown session once per period.
pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
}

#[derive(Debug)]
struct Run {
    id: u64,
    cancel: Arc<AtomicBool>,
}

/// Posts ticks to the UI loop's channel from a background thread. Each tick
/// is scheduled against a fixed deadline, so sleep overshoot does not add up
/// over a long test.
#[derive(Debug)]
pub struct ThreadTicker {
    tx: mpsc::Sender<TimerEvent>,
    period: Duration,
    run: Option<Run>,
}

impl ThreadTicker {
    pub fn new(tx: mpsc::Sender<TimerEvent>) -> Self {
        Self::with_period(tx, TICK_PERIOD)
    }

    pub fn with_period(tx: mpsc::Sender<TimerEvent>, period: Duration) -> Self {
        Self {
            tx,
            period,
            run: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// True when a tick with this id came from the run still in progress.
    pub fn is_current(&self, run_id: u64) -> bool {
        self.run.as_ref().is_some_and(|run| run.id == run_id)
    }
}

impl TickSource for ThreadTicker {
    fn start(&mut self) {
        if self.run.is_some() {
            return;
        }

        let id = NEXT_RUN_ID.fetch_add(1, Ordering::SeqCst);
        let cancel = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::clone(&cancel);
        let tx = self.tx.clone();
        let period = self.period;

        thread::spawn(move || {
            log::debug!("Tick thread {} started ({:?})", id, thread::current().id());
            let mut deadline = Instant::now() + period;
            loop {
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                }
                if cancelled.load(Ordering::SeqCst) {
                    break;
                }
                if tx.send(TimerEvent::Tick(id)).is_err() {
                    break;
                }
                deadline += period;
            }
            log::debug!("Tick thread {} exiting", id);
        });

        self.run = Some(Run { id, cancel });
    }

    fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            run.cancel.store(true, Ordering::SeqCst);
        }
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_id(ev: TimerEvent) -> u64 {
        match ev {
            TimerEvent::Tick(id) => id,
        }
    }

    #[test]
    fn test_thread_ticker_posts_ticks() {
        let (tx, rx) = mpsc::channel();
        let mut ticker = ThreadTicker::with_period(tx, Duration::from_millis(10));
        ticker.start();
        assert!(ticker.is_running());

        let id = tick_id(rx.recv_timeout(Duration::from_secs(2)).unwrap());
        assert!(ticker.is_current(id));
        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.is_current(id));
    }

    #[test]
    fn test_thread_ticker_goes_quiet_after_stop() {
        let (tx, rx) = mpsc::channel();
        let mut ticker = ThreadTicker::with_period(tx, Duration::from_millis(10));
        ticker.start();
        rx.recv_timeout(Duration::from_secs(2)).unwrap();
        ticker.stop();

        // At most one tick can be in flight when the flag flips.
        thread::sleep(Duration::from_millis(50));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_restart_rejects_ticks_of_old_run() {
        let (tx, rx) = mpsc::channel();
        let mut ticker = ThreadTicker::with_period(tx.clone(), Duration::from_millis(10));
        ticker.start();
        let old = tick_id(rx.recv_timeout(Duration::from_secs(2)).unwrap());
        ticker.stop();

        // A second ticker sharing the channel, as the next session would.
        let mut next = ThreadTicker::with_period(tx, Duration::from_millis(10));
        next.start();
        let new = loop {
            let id = tick_id(rx.recv_timeout(Duration::from_secs(2)).unwrap());
            if id != old {
                break id;
            }
        };

        assert!(!next.is_current(old));
        assert!(next.is_current(new));
    }

    #[test]
    fn test_start_twice_keeps_one_thread() {
        let (tx, rx) = mpsc::channel();
        let mut ticker = ThreadTicker::with_period(tx, Duration::from_millis(20));
        ticker.start();
        ticker.start();
        thread::sleep(Duration::from_millis(110));
        drop(ticker);
        let ids: Vec<u64> = rx.try_iter().map(tick_id).collect();
        assert!(ids.len() <= 6, "expected a single tick thread, got {} ticks", ids.len());
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
    }
}
