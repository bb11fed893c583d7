//! Script driver: plays the training narrative.
//!
//! Each phase prints its banner, then posts its status update. Phases are
//! separated by a fixed pause so an observer watching the dashboard can see
//! each state. Nothing here branches on delivery results.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::model::PHASES;
use crate::notify::Notify;

/// Pause between phases when nothing else is configured.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

/// The narrative runner.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pause: Duration,
}

impl Script {
    pub fn new(pause: Duration) -> Self {
        Self { pause }
    }

    /// Run every phase in order, writing banners to `out`.
    ///
    /// Sleeps between phases but not after the last one. Only errors from
    /// writing to `out` are returned.
    pub fn run(&self, notifier: &impl Notify, out: &mut impl Write) -> io::Result<()> {
        for (i, phase) in PHASES.iter().enumerate() {
            if i > 0 {
                thread::sleep(self.pause);
            }

            writeln!(out, "{}", phase.banner)?;
            out.flush()?;

            log::info!("posting phase {}/{}: {}", i + 1, PHASES.len(), phase.label);
            notifier.notify(&phase.update());
        }

        Ok(())
    }
}
