//! Colorful console output for problem fact changes.
//!
//! Provides a custom `tracing` layer that formats change events with colors.

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "taskforge_realtime=debug";

/// Initializes the change console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default filter. If another global subscriber is already
/// installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ChangeConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats problem fact change events with colors.
pub struct ChangeConsoleLayer;

impl<S: Subscriber> Layer<S> for ChangeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("taskforge_realtime") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_change_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    change: Option<String>,
    task: Option<String>,
    user: Option<String>,
    released: Option<u64>,
    notifications: Option<u64>,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let s = format!("{value:?}");
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "released" => self.released = Some(value),
            "notifications" => self.notifications = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "change" => &mut self.change,
            "task" => &mut self.task,
            "user" => &mut self.user,
            "error" => &mut self.error,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_change_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("change_applied") => format_line(level, "applied".bright_green().to_string(), v),
        Some("change_ignored") => format_line(level, "ignored".bright_black().to_string(), v),
        Some("task_created") => format_line(level, "created".bright_blue().to_string(), v),
        Some("change_failed") => {
            let mut line = format_line(level, "failed".bright_red().bold().to_string(), v);
            if let Some(error) = &v.error {
                line.push_str(&format!(": {}", error.red()));
            }
            line
        }
        Some("change_verified") => format!(
            "    {} {} notifications verified",
            "->".bright_blue(),
            v.notifications.unwrap_or(0).to_string().white()
        ),
        _ => String::new(),
    }
}

fn format_line(level: Level, outcome: String, v: &EventVisitor) -> String {
    let mut line = format!(
        "{} {} {} {}",
        level_label(level),
        "[Change]".bright_cyan(),
        v.change.as_deref().unwrap_or("change").white().bold(),
        outcome
    );
    if let Some(task) = &v.task {
        line.push_str(&format!(" task ({})", task.yellow()));
    }
    if let Some(user) = &v.user {
        line.push_str(&format!(" user ({})", user.yellow()));
    }
    if let Some(released) = v.released {
        line.push_str(&format!(
            ", released ({})",
            released.to_string().bright_magenta()
        ));
    }
    line
}

fn level_label(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}
