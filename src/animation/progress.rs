use crate::animation::ease::Ease;

/// How a marker's interpolation fraction is chosen for a frame.
///
/// `Snapshot` freezes every in-flight marker at its scripted fraction (a mid-flight still, the
/// way the step illustrations read on paper). `Elapsed` derives the fraction from time spent in
/// the current step, which gives continuous motion when frames are rendered at a steady rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressMode {
    #[default]
    Snapshot,
    Elapsed { duration_ms: u64, ease: Ease },
}

impl ProgressMode {
    /// Resolve the fraction for a marker whose scripted position is `fixed`.
    ///
    /// `elapsed_ms` is measured from the moment the current step became active. When the
    /// sequencer is paused the scripted fraction is used regardless of mode.
    pub fn resolve(self, fixed: f64, playing: bool, elapsed_ms: u64) -> f64 {
        match self {
            Self::Snapshot => fixed,
            Self::Elapsed { .. } if !playing => fixed,
            Self::Elapsed { duration_ms, ease } => window_progress(0, duration_ms, elapsed_ms, ease),
        }
    }
}

/// Eased progress through a `[delay, delay + duration]` window.
pub fn window_progress(delay_ms: u64, duration_ms: u64, elapsed_ms: u64, ease: Ease) -> f64 {
    if elapsed_ms <= delay_ms {
        return 0.0;
    }
    if duration_ms == 0 {
        return 1.0;
    }
    let t = (elapsed_ms - delay_ms) as f64 / duration_ms as f64;
    ease.apply(t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
