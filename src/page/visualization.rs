use std::path::{Path, PathBuf};

use crate::{
    animation::progress::ProgressMode,
    config::Config,
    decor::theme::Theme,
    foundation::{
        clock::Clock,
        core::{Point, Surface},
        error::ProtovizResult,
    },
    protocols::{ProtocolDefinition, Registry},
    render::{
        draw::DrawList,
        frame::{Tooltip, hit_test_at, render_frame_at},
    },
    sequencer::{ExportArtifact, Sequencer, TimerCommand, TimerGeneration},
};

/// Number of log lines shown in the side panel.
const PANEL_LOG_LINES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user-facing message (toast).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PanelStep<'a> {
    pub ordinal: u32,
    pub title: &'a str,
    pub active: bool,
    /// Already passed in the current run.
    pub done: bool,
}

/// Side panel summary: step list, current step and the tail of the log.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Panel<'a> {
    pub protocol: &'a str,
    pub steps: Vec<PanelStep<'a>>,
    pub current_step: usize,
    pub current_title: &'a str,
    pub current_description: &'a str,
    pub playing: bool,
    pub speed: f64,
    pub can_step: bool,
    pub can_export: bool,
    pub recent_log: Vec<String>,
}

/// Protocol detail page: one sequencer, one canvas, the theme it renders with.
pub struct VisualizationPage<'a, C: Clock + Clone> {
    registry: &'a Registry,
    clock: C,
    base_interval_ms: u64,
    sequencer: Sequencer<'a, C>,
    surface: Surface,
    theme: Theme,
    progress: ProgressMode,
    notices: Vec<Notice>,
}

impl<'a, C: Clock + Clone> VisualizationPage<'a, C> {
    /// Open `protocol_id` with fresh state on an unmounted surface.
    pub fn new(registry: &'a Registry, protocol_id: &str, clock: C) -> ProtovizResult<Self> {
        let protocol = registry.require(protocol_id)?;
        let sequencer = Sequencer::new(protocol, clock.clone());
        Ok(Self {
            registry,
            clock,
            base_interval_ms: crate::sequencer::BASE_INTERVAL_MS,
            sequencer,
            surface: Surface::unmounted(),
            theme: Theme::default(),
            progress: ProgressMode::Snapshot,
            notices: Vec::new(),
        })
    }

    /// Open `protocol_id` with surface, theme, progress mode and playback taken from `config`.
    pub fn from_config(
        registry: &'a Registry,
        protocol_id: &str,
        clock: C,
        config: &Config,
    ) -> ProtovizResult<Self> {
        let mut page = Self::new(registry, protocol_id, clock)?
            .with_base_interval(config.playback.base_interval_ms)
            .with_surface(config.render.surface())
            .with_theme(config.theme)
            .with_progress_mode(config.render.progress);
        page.set_speed(config.playback.default_speed.value())?;
        Ok(page)
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_progress_mode(mut self, mode: ProgressMode) -> Self {
        self.progress = mode;
        self
    }

    /// Change the 1x step interval. Restarts the current protocol from a fresh state.
    pub fn with_base_interval(mut self, base_interval_ms: u64) -> Self {
        self.base_interval_ms = base_interval_ms;
        self.sequencer.teardown();
        self.sequencer = Sequencer::with_interval(
            self.sequencer.protocol(),
            self.clock.clone(),
            base_interval_ms,
        );
        self
    }

    pub fn protocol(&self) -> &'a ProtocolDefinition {
        self.sequencer.protocol()
    }

    pub fn sequencer(&self) -> &Sequencer<'a, C> {
        &self.sequencer
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn progress_mode(&self) -> ProgressMode {
        self.progress
    }

    /// Theme changes come from the shell that owns the toggle.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn play(&mut self) -> TimerCommand {
        self.sequencer.play()
    }

    pub fn pause(&mut self) -> TimerCommand {
        self.sequencer.pause()
    }

    pub fn toggle(&mut self) -> TimerCommand {
        self.sequencer.toggle()
    }

    pub fn step_forward(&mut self) -> TimerCommand {
        self.sequencer.step_forward()
    }

    pub fn reset(&mut self) -> TimerCommand {
        self.sequencer.reset()
    }

    pub fn set_speed(&mut self, speed: f64) -> ProtovizResult<TimerCommand> {
        self.sequencer.set_speed(speed)
    }

    /// Deliver every timer fire due by now.
    pub fn pump(&mut self) -> usize {
        self.sequencer.pump()
    }

    pub fn on_timer(&mut self, generation: TimerGeneration) -> bool {
        self.sequencer.on_timer(generation)
    }

    pub fn resize(&mut self, surface: Surface) {
        tracing::trace!(width = surface.width, height = surface.height, "canvas resized");
        self.surface = surface;
    }

    /// Switch to another protocol. The old timer is cancelled and the state starts over.
    ///
    /// An unknown id leaves the current protocol in place.
    #[tracing::instrument(skip(self), fields(from = %self.sequencer.protocol().id))]
    pub fn select_protocol(&mut self, protocol_id: &str) -> ProtovizResult<()> {
        let protocol = self.registry.require(protocol_id)?;
        self.sequencer.teardown();
        self.sequencer =
            Sequencer::with_interval(protocol, self.clock.clone(), self.base_interval_ms);
        tracing::info!(to = %protocol.id, "protocol selected");
        Ok(())
    }

    pub fn teardown(&mut self) {
        self.sequencer.teardown();
    }

    /// Draw list for the current step as of the clock's current time.
    pub fn frame(&self) -> DrawList {
        let elapsed = self.sequencer.elapsed_in_step(self.clock.now());
        render_frame_at(
            &self.protocol().scene,
            self.surface,
            self.sequencer.current_step(),
            self.sequencer.is_playing(),
            &self.theme.palette(),
            self.progress,
            elapsed,
        )
    }

    /// Tooltip under `point`, with markers where [`VisualizationPage::frame`] draws them.
    pub fn hit_test(&self, point: Point) -> Option<Tooltip> {
        hit_test_at(
            &self.protocol().scene,
            self.surface,
            self.sequencer.current_step(),
            self.sequencer.is_playing(),
            self.progress,
            self.sequencer.elapsed_in_step(self.clock.now()),
            point,
        )
    }

    pub fn panel(&self) -> Panel<'a> {
        let protocol = self.protocol();
        let current = self.sequencer.current_step();
        let steps = protocol
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| PanelStep {
                ordinal: s.ordinal,
                title: s.title.as_str(),
                active: i == current,
                done: i < current,
            })
            .collect();
        let step = protocol.step(current);
        Panel {
            protocol: protocol.name.as_str(),
            steps,
            current_step: current,
            current_title: step.map_or("", |s| s.title.as_str()),
            current_description: step.map_or("", |s| s.description.as_str()),
            playing: self.sequencer.is_playing(),
            speed: self.sequencer.speed().value(),
            can_step: current < protocol.last_index(),
            can_export: !self.sequencer.log().is_empty(),
            recent_log: self.sequencer.log().tail(PANEL_LOG_LINES),
        }
    }

    /// Export the log as an in-memory artifact and post a notice either way.
    pub fn export_log(&mut self) -> ProtovizResult<ExportArtifact> {
        let result = self.sequencer.export_log();
        self.report_export(result)
    }

    /// Export the log and write it into `dir`.
    pub fn save_log(&mut self, dir: &Path) -> ProtovizResult<PathBuf> {
        let result = self
            .sequencer
            .export_log()
            .and_then(|artifact| artifact.write_to(dir));
        self.report_export(result)
    }

    fn report_export<T>(&mut self, result: ProtovizResult<T>) -> ProtovizResult<T> {
        match &result {
            Ok(_) => self.notices.push(Notice::success("Simulation log exported!")),
            Err(err) => {
                tracing::warn!(error = %err, "log export failed");
                self.notices
                    .push(Notice::error(format!("Could not export the log: {err}")));
            }
        }
        result
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand pending notices to the host and clear them.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/visualization.rs"]
mod tests;
