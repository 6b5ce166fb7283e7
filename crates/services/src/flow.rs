use std::time::Duration;

use quiz_core::{Event, FlowError, QuestionBank, Session, Stage};
use tracing::{debug, info, warn};

use crate::countdown::CountdownTimer;

/// Countdown ticks once per second.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Simulated round-trip before an answer is recorded.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSettings {
    pub tick_period: Duration,
    pub submit_delay: Duration,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Owns the question bank and applies events to sessions.
///
/// Stateless with respect to any single session, so the UI and the console driver
/// can share one instance.
#[derive(Debug, Clone)]
pub struct FlowService {
    bank: QuestionBank,
    settings: FlowSettings,
}

impl FlowService {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            settings: FlowSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: FlowSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> FlowSettings {
        self.settings
    }

    #[must_use]
    pub fn start_session(&self) -> Session {
        debug!(questions = self.bank.len(), "session started");
        Session::new()
    }

    /// Apply an event to `session` and return the next session.
    ///
    /// # Errors
    ///
    /// Propagates the `FlowError` from the reducer. `session` is left as it was.
    pub fn dispatch(&self, session: &Session, event: Event) -> Result<Session, FlowError> {
        let name = event.name();
        match session.apply(&self.bank, event) {
            Ok(next) => {
                if next.stage() == session.stage() {
                    debug!(event = name, stage = %next.stage(), "event applied");
                } else {
                    info!(event = name, from = %session.stage(), to = %next.stage(), "stage changed");
                }
                Ok(next)
            }
            Err(err) if err.is_validation() => {
                debug!(event = name, stage = %session.stage(), %err, "input rejected");
                Err(err)
            }
            Err(err) => {
                warn!(event = name, stage = %session.stage(), %err, "event dropped");
                Err(err)
            }
        }
    }

    /// Arm a countdown timer with the configured period.
    #[must_use]
    pub fn arm_countdown(&self) -> CountdownTimer {
        info!(period = ?self.settings.tick_period, "countdown armed");
        CountdownTimer::arm(self.settings.tick_period)
    }

    /// Wait out the simulated submission round-trip.
    pub async fn submission_delay(&self) {
        if !self.settings.submit_delay.is_zero() {
            tokio::time::sleep(self.settings.submit_delay).await;
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives one session and owns the countdown timer while the countdown stage lasts.
///
/// The timer is armed right after a dispatch enters `Countdown` and dropped right
/// after a dispatch leaves it, so it never outlives the stage.
#[derive(Debug)]
pub struct FlowController {
    service: FlowService,
    session: Session,
    timer: Option<CountdownTimer>,
}

impl FlowController {
    #[must_use]
    pub fn new(service: FlowService) -> Self {
        let session = service.start_session();
        Self {
            service,
            session,
            timer: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn service(&self) -> &FlowService {
        &self.service
    }

    /// The countdown timer is currently armed.
    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Apply a user event.
    ///
    /// # Errors
    ///
    /// Returns the reducer's `FlowError`; the session and timer are unchanged on error.
    pub fn dispatch(&mut self, event: Event) -> Result<&Session, FlowError> {
        self.session = self.service.dispatch(&self.session, event)?;
        self.sync_timer();
        Ok(&self.session)
    }

    /// Submit the current answer after the simulated round-trip.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::EmptyAnswer` immediately, without waiting, for a blank draft.
    pub async fn submit_answer(&mut self) -> Result<&Session, FlowError> {
        if self.session.can_submit_answer() {
            self.service.submission_delay().await;
        }
        self.dispatch(Event::SubmitAnswer)
    }

    /// Wait for the next countdown tick and apply it.
    ///
    /// Returns `None` without waiting when no timer is armed.
    pub async fn next_tick(&mut self) -> Option<&Session> {
        let timer = self.timer.as_mut()?;
        timer.tick().await;
        self.dispatch(Event::Tick).ok()
    }

    /// Apply ticks until the countdown stage ends.
    pub async fn run_countdown(&mut self) -> &Session {
        while self.next_tick().await.is_some() {}
        &self.session
    }

    fn sync_timer(&mut self) {
        let counting = self.session.stage() == Stage::Countdown;
        match (counting, self.timer.is_some()) {
            (true, false) => self.timer = Some(self.service.arm_countdown()),
            (false, true) => {
                if let Some(timer) = self.timer.take() {
                    info!(ticks = timer.fired(), "countdown released");
                    timer.cancel();
                }
            }
            _ => {}
        }
    }
}
