use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::{TimeZone, Utc};

use crate::foundation::{
    core::Millis,
    error::{ProtovizError, ProtovizResult},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogKind {
    Step { ordinal: u32, title: String },
    Completed { protocol: String },
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step { ordinal, title } => write!(f, "Step {ordinal}: {title}"),
            Self::Completed { protocol } => write!(f, "Simulation completed - {protocol}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LogEntry {
    /// Wall-clock milliseconds since the Unix epoch.
    pub at: Millis,
    pub kind: LogKind,
}

impl LogEntry {
    /// `[HH:MM:SS] message`, with the time of day taken in `tz`.
    pub fn line_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let stamp = i64::try_from(self.at.0)
            .ok()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .map(|t| t.with_timezone(tz).format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());
        format!("[{stamp}] {}", self.kind)
    }

    /// [`LogEntry::line_in`] using local time.
    pub fn line(&self) -> String {
        self.line_in(&chrono::Local)
    }
}

/// Append-only simulation log with non-decreasing timestamps.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SimulationLog {
    entries: Vec<LogEntry>,
}

impl SimulationLog {
    /// Append an entry; a timestamp earlier than the previous entry is raised to match it.
    pub fn push(&mut self, at: Millis, kind: LogKind) {
        let at = self.entries.last().map_or(at, |prev| prev.at.max(at));
        tracing::debug!(entry = %kind, "simulation log");
        self.entries.push(LogEntry { at, kind });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that record step changes, in order.
    pub fn step_titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match &e.kind {
            LogKind::Step { title, .. } => Some(title.as_str()),
            LogKind::Completed { .. } => None,
        })
    }

    /// The last `n` formatted lines, oldest first.
    pub fn tail(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries[skip..].iter().map(LogEntry::line).collect()
    }

    /// Package the log as a plain-text download.
    pub fn export(&self, protocol_id: &str) -> ProtovizResult<ExportArtifact> {
        self.export_in(protocol_id, &chrono::Local)
    }

    pub fn export_in<Tz: TimeZone>(&self, protocol_id: &str, tz: &Tz) -> ProtovizResult<ExportArtifact>
    where
        Tz::Offset: fmt::Display,
    {
        if self.entries.is_empty() {
            return Err(ProtovizError::export("simulation log is empty"));
        }
        let body = self
            .entries
            .iter()
            .map(|e| e.line_in(tz))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(ExportArtifact {
            file_name: format!("{protocol_id}-simulation-log.txt"),
            mime: "text/plain",
            body,
        })
    }
}

/// A file ready to hand to the user.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub body: String,
}

impl ExportArtifact {
    /// Write the artifact into `dir`, returning the full path.
    #[tracing::instrument(skip(self), fields(file = %self.file_name))]
    pub fn write_to(&self, dir: &Path) -> ProtovizResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| {
            ProtovizError::export(format!("create '{}': {e}", dir.display()))
        })?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.body).map_err(|e| {
            ProtovizError::export(format!("write '{}': {e}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "simulation log exported");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/log.rs"]
mod tests;
