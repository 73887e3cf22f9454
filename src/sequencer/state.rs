use crate::{
    foundation::{
        core::Millis,
        error::{ProtovizError, ProtovizResult},
    },
    protocols::ProtocolDefinition,
    sequencer::log::{LogKind, SimulationLog},
};

/// Playback speed multiplier: `0.5`, `1.0`, `1.5` or `2.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speed(f64);

impl Speed {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;
    pub const STEP: f64 = 0.5;
    pub const NORMAL: Speed = Speed(1.0);

    pub fn new(value: f64) -> ProtovizResult<Self> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ProtovizError::validation(format!(
                "speed {value} outside [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        if (value / Self::STEP).fract() != 0.0 {
            return Err(ProtovizError::validation(format!(
                "speed {value} is not a multiple of {}",
                Self::STEP
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Tick period for a base interval at this speed.
    pub fn period_ms(self, base_interval_ms: u64) -> u64 {
        (base_interval_ms as f64 / self.0).round() as u64
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<f64> for Speed {
    type Error = ProtovizError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Speed> for f64 {
    fn from(s: Speed) -> f64 {
        s.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Not playing, more steps ahead.
    Idle,
    /// Playing; the ticker is armed.
    Advancing,
    /// Not playing, parked on the last step.
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Play,
    Pause,
    Toggle,
    StepForward,
    Reset,
    /// A timer fire.
    Tick,
    SetSpeed(Speed),
}

/// What the caller must do with the ticker after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    None,
    /// Arm the ticker, replacing any armed one.
    Start,
    Stop,
    /// Keep the pending fire; use the new period from then on.
    Reschedule,
}

/// Inputs a transition reads besides the state itself.
#[derive(Clone, Copy, Debug)]
pub struct ReduceCtx<'a> {
    pub protocol: &'a ProtocolDefinition,
    /// Timestamp for any log entry the transition appends.
    pub now: Millis,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SimulationState {
    pub current_step: usize,
    pub is_playing: bool,
    pub speed: Speed,
    pub log: SimulationLog,
    /// Step whose log entry was written most recently since the last reset.
    #[serde(skip)]
    announced: Option<usize>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            current_step: 0,
            is_playing: false,
            speed: Speed::NORMAL,
            log: SimulationLog::default(),
            announced: None,
        }
    }
}

impl SimulationState {
    pub fn phase(&self, last_index: usize) -> Phase {
        if self.is_playing {
            Phase::Advancing
        } else if self.current_step >= last_index {
            Phase::Complete
        } else {
            Phase::Idle
        }
    }

    fn announce(&mut self, ctx: &ReduceCtx<'_>) {
        if let Some(step) = ctx.protocol.step(self.current_step) {
            self.log.push(
                ctx.now,
                LogKind::Step {
                    ordinal: step.ordinal,
                    title: step.title.clone(),
                },
            );
            self.announced = Some(self.current_step);
        }
    }
}

/// The only place simulation state changes.
pub fn reduce(state: &mut SimulationState, action: Action, ctx: &ReduceCtx<'_>) -> TimerCommand {
    let last = ctx.protocol.last_index();
    match action {
        Action::Play => {
            if state.is_playing || state.current_step >= last {
                return TimerCommand::None;
            }
            state.is_playing = true;
            if state.announced != Some(state.current_step) {
                state.announce(ctx);
            }
            TimerCommand::Start
        }
        Action::Toggle => {
            let next = if state.is_playing {
                Action::Pause
            } else {
                Action::Play
            };
            reduce(state, next, ctx)
        }
        Action::Pause => {
            state.is_playing = false;
            TimerCommand::Stop
        }
        Action::StepForward => {
            state.is_playing = false;
            state.current_step = (state.current_step + 1).min(last);
            TimerCommand::Stop
        }
        Action::Reset => {
            state.is_playing = false;
            state.current_step = 0;
            state.announced = None;
            TimerCommand::Stop
        }
        Action::Tick => {
            if !state.is_playing {
                return TimerCommand::None;
            }
            if state.current_step < last {
                state.current_step += 1;
                state.announce(ctx);
                TimerCommand::None
            } else {
                state.is_playing = false;
                state.log.push(
                    ctx.now,
                    LogKind::Completed {
                        protocol: ctx.protocol.name.clone(),
                    },
                );
                TimerCommand::Stop
            }
        }
        Action::SetSpeed(speed) => {
            state.speed = speed;
            if state.is_playing {
                TimerCommand::Reschedule
            } else {
                TimerCommand::None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/state.rs"]
mod tests;
