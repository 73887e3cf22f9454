//! Step sequencer: playback state, its single timer, and the simulation log.
//!
//! All mutation goes through [`state::reduce`]; [`Sequencer`] only applies the returned
//! [`TimerCommand`] to its [`Ticker`] and feeds timer fires back in as [`Action::Tick`].

pub mod log;
pub mod state;
pub mod timer;

pub use log::{ExportArtifact, LogEntry, LogKind, SimulationLog};
pub use state::{Action, Phase, ReduceCtx, SimulationState, Speed, TimerCommand, reduce};
pub use timer::{Ticker, TimerGeneration};

use crate::{
    foundation::{clock::Clock, core::Millis, error::ProtovizResult},
    protocols::ProtocolDefinition,
};

/// Default time between steps at 1x speed.
pub const BASE_INTERVAL_MS: u64 = 2_000;

/// Drives one protocol's steps on a clock.
pub struct Sequencer<'a, C: Clock> {
    protocol: &'a ProtocolDefinition,
    clock: C,
    base_interval_ms: u64,
    state: SimulationState,
    ticker: Ticker,
    /// When the current step became active, for elapsed-time rendering.
    step_started: Millis,
}

impl<'a, C: Clock> Sequencer<'a, C> {
    pub fn new(protocol: &'a ProtocolDefinition, clock: C) -> Self {
        Self::with_interval(protocol, clock, BASE_INTERVAL_MS)
    }

    pub fn with_interval(protocol: &'a ProtocolDefinition, clock: C, base_interval_ms: u64) -> Self {
        let step_started = clock.now();
        Self {
            protocol,
            clock,
            base_interval_ms: base_interval_ms.max(1),
            state: SimulationState::default(),
            ticker: Ticker::new(),
            step_started,
        }
    }

    pub fn protocol(&self) -> &'a ProtocolDefinition {
        self.protocol
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.protocol.last_index())
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn speed(&self) -> Speed {
        self.state.speed
    }

    pub fn log(&self) -> &SimulationLog {
        &self.state.log
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn tick_period_ms(&self) -> u64 {
        self.state.speed.period_ms(self.base_interval_ms)
    }

    /// Milliseconds spent in the current step as of `now`.
    pub fn elapsed_in_step(&self, now: Millis) -> u64 {
        now.saturating_sub(self.step_started)
    }

    /// Apply `action` stamped with the clock's current time.
    pub fn dispatch(&mut self, action: Action) -> TimerCommand {
        let now = self.clock.now();
        self.dispatch_at(action, now)
    }

    #[tracing::instrument(skip(self), fields(protocol = %self.protocol.id))]
    fn dispatch_at(&mut self, action: Action, now: Millis) -> TimerCommand {
        let before = self.state.current_step;
        let ctx = ReduceCtx {
            protocol: self.protocol,
            now,
        };
        let cmd = reduce(&mut self.state, action, &ctx);
        match cmd {
            TimerCommand::None => {}
            TimerCommand::Start => {
                self.ticker.start(now, self.tick_period_ms());
            }
            TimerCommand::Stop => self.ticker.stop(),
            TimerCommand::Reschedule => self.ticker.reschedule(self.tick_period_ms()),
        }
        if self.state.current_step != before || action == Action::Reset || cmd == TimerCommand::Start {
            self.step_started = now;
        }
        cmd
    }

    pub fn play(&mut self) -> TimerCommand {
        self.dispatch(Action::Play)
    }

    pub fn pause(&mut self) -> TimerCommand {
        self.dispatch(Action::Pause)
    }

    pub fn toggle(&mut self) -> TimerCommand {
        self.dispatch(Action::Toggle)
    }

    pub fn step_forward(&mut self) -> TimerCommand {
        self.dispatch(Action::StepForward)
    }

    pub fn reset(&mut self) -> TimerCommand {
        self.dispatch(Action::Reset)
    }

    /// Validate and apply a speed multiplier.
    pub fn set_speed(&mut self, speed: f64) -> ProtovizResult<TimerCommand> {
        let speed = Speed::new(speed)?;
        Ok(self.dispatch(Action::SetSpeed(speed)))
    }

    /// Fire every tick due at or before `now`, each stamped with its own due time.
    ///
    /// Returns the number of ticks delivered.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        let mut fired = 0;
        while let Some(due) = self.ticker.fire_due(now) {
            self.dispatch_at(Action::Tick, due);
            fired += 1;
        }
        fired
    }

    /// [`Sequencer::advance_to`] the clock's current time.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now();
        self.advance_to(now)
    }

    /// Deliver a fire from an external event loop. Stale generations are ignored.
    pub fn on_timer(&mut self, generation: TimerGeneration) -> bool {
        let now = self.clock.now();
        if !self.ticker.fire(generation, now) {
            tracing::debug!(generation = generation.0, "stale timer fire ignored");
            return false;
        }
        self.dispatch_at(Action::Tick, now);
        true
    }

    /// Cancel the timer; the sequencer stays readable but inert.
    pub fn teardown(&mut self) {
        self.dispatch(Action::Pause);
    }

    pub fn export_log(&self) -> ProtovizResult<ExportArtifact> {
        self.state.log.export(&self.protocol.id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/mod.rs"]
mod tests;
