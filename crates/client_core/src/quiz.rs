use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::AlertSink;

pub const DEFAULT_QUIZ_SECONDS: u32 = 600;
pub const TIME_UP_MESSAGE: &str = "Temps écoulé ! Le quiz va être soumis.";
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Where the remaining time is shown.
pub trait TimerDisplay {
    fn show(&mut self, text: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Expired,
    Halted,
}

/// Countdown for a quiz attempt, one step per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizTimer {
    remaining: u32,
    halted: bool,
}

impl Default for QuizTimer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIZ_SECONDS)
    }
}

impl QuizTimer {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            halted: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Shows the starting value. A timer created at zero expires immediately.
    pub fn start(
        &mut self,
        display: &mut dyn TimerDisplay,
        alerts: &mut dyn AlertSink,
    ) -> TickOutcome {
        display.show(&format_remaining(self.remaining));
        if self.remaining == 0 && !self.halted {
            return self.expire(alerts);
        }
        TickOutcome::Running
    }

    pub fn tick(
        &mut self,
        display: &mut dyn TimerDisplay,
        alerts: &mut dyn AlertSink,
    ) -> TickOutcome {
        if self.halted {
            return TickOutcome::Halted;
        }
        self.remaining = self.remaining.saturating_sub(1);
        display.show(&format_remaining(self.remaining));
        if self.remaining == 0 {
            return self.expire(alerts);
        }
        TickOutcome::Running
    }

    fn expire(&mut self, alerts: &mut dyn AlertSink) -> TickOutcome {
        self.halted = true;
        info!("quiz timer expired");
        alerts.alert(TIME_UP_MESSAGE);
        TickOutcome::Expired
    }
}

/// `M:SS`, seconds zero-padded, minutes unbounded.
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Drives `timer` once per second until it expires.
pub async fn run_quiz_timer(
    timer: &mut QuizTimer,
    display: &mut dyn TimerDisplay,
    alerts: &mut dyn AlertSink,
) {
    if timer.start(display, alerts) != TickOutcome::Running {
        return;
    }
    let mut ticker = interval(TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;
    loop {
        ticker.tick().await;
        if timer.tick(display, alerts) != TickOutcome::Running {
            break;
        }
    }
}

#[cfg(test)]
#[path = "tests/quiz_tests.rs"]
mod tests;
