use crate::foundation::core::Millis;

/// Identifies one arming of the [`Ticker`]; fires carrying an older generation are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerGeneration(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Armed {
    generation: TimerGeneration,
    period_ms: u64,
    next_due: Millis,
}

/// Single-slot periodic timer.
///
/// Arming always replaces the previous timer, so at most one is ever active.
#[derive(Clone, Debug, Default)]
pub struct Ticker {
    slot: Option<Armed>,
    generation: u64,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Millis, period_ms: u64) -> TimerGeneration {
        self.generation += 1;
        let generation = TimerGeneration(self.generation);
        let period_ms = period_ms.max(1);
        self.slot = Some(Armed {
            generation,
            period_ms,
            next_due: now.saturating_add(period_ms),
        });
        tracing::trace!(generation = generation.0, period_ms, "ticker armed");
        generation
    }

    pub fn stop(&mut self) {
        if let Some(armed) = self.slot.take() {
            tracing::trace!(generation = armed.generation.0, "ticker stopped");
        }
    }

    /// Change the period without touching the pending fire.
    pub fn reschedule(&mut self, period_ms: u64) {
        if let Some(armed) = &mut self.slot {
            armed.period_ms = period_ms.max(1);
        }
    }

    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.slot.is_some())
    }

    pub fn generation(&self) -> Option<TimerGeneration> {
        self.slot.map(|a| a.generation)
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.slot.map(|a| a.next_due)
    }

    pub fn period_ms(&self) -> Option<u64> {
        self.slot.map(|a| a.period_ms)
    }

    /// Consume the next fire if it is due at or before `now`, returning its due time.
    pub fn fire_due(&mut self, now: Millis) -> Option<Millis> {
        let armed = self.slot.as_mut()?;
        if armed.next_due > now {
            return None;
        }
        let due = armed.next_due;
        armed.next_due = due.saturating_add(armed.period_ms);
        Some(due)
    }

    /// Consume the pending fire if `generation` is current, regardless of its due time.
    pub fn fire(&mut self, generation: TimerGeneration, now: Millis) -> bool {
        match &mut self.slot {
            Some(armed) if armed.generation == generation => {
                armed.next_due = now.saturating_add(armed.period_ms);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/timer.rs"]
mod tests;
