//! Integration test: engine log calls arrive as `tracing` events at the
//! mapped level.

use lint_bridge::logging::forward;
use lint_bridge::LintSeverity;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Events = Arc<Mutex<Vec<(Level, String, Option<String>)>>>;

struct Capture(Events);

#[derive(Default)]
struct Fields {
    message: String,
    error: Option<String>,
}

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "error" => self.error = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        self.0
            .lock()
            .expect("capture lock")
            .push((*event.metadata().level(), fields.message, fields.error));
    }
}

fn capture(f: impl FnOnce()) -> Vec<(Level, String, Option<String>)> {
    let events = Events::default();
    let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&events)));
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().expect("capture lock").clone();
    captured
}

#[test]
fn each_severity_lands_on_its_level() {
    let events = capture(|| {
        forward(LintSeverity::Fatal, None, Some("fatal"));
        forward(LintSeverity::Error, None, Some("error"));
        forward(LintSeverity::Warning, None, Some("warning"));
        forward(LintSeverity::Informational, None, Some("info"));
        forward(LintSeverity::Ignore, None, Some("ignored"));
    });

    let levels: Vec<(Level, &str)> = events
        .iter()
        .map(|(level, message, _)| (*level, message.as_str()))
        .collect();
    assert_eq!(
        levels,
        vec![
            (Level::ERROR, "fatal"),
            (Level::ERROR, "error"),
            (Level::WARN, "warning"),
            (Level::INFO, "info"),
            (Level::DEBUG, "ignored"),
        ]
    );
}

#[test]
fn error_is_attached_to_the_event() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let err: &dyn std::error::Error = &io;
    let events = capture(|| forward(LintSeverity::Warning, Some(err), Some("cannot scan")));

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, Level::WARN);
    assert_eq!(events[0].1, "cannot scan");
    assert_eq!(events[0].2.as_deref(), Some("disk on fire"));
}

#[test]
fn missing_message_logs_empty_text() {
    let events = capture(|| forward(LintSeverity::Informational, None, None));
    assert_eq!(events, vec![(Level::INFO, String::new(), None)]);
}
