//! crates/verbose/src/tracing_bridge.rs
//! Bridge between the tracing crate and a leveled writer.
//!
//! [`VerboseLayer`] is a tracing-subscriber layer that renders tracing events
//! through a [`LeveledWriter`], so libraries instrumented with the standard
//! `tracing` macros obey the same `-v`/`-vv`/`-vvv` threshold and the same
//! `[TIER]` prefix as direct calls to the writer.
//!
//! # Level mapping
//!
//! | tracing | tier |
//! |---|---|
//! | `ERROR`, `WARN`, `INFO` | [`Level::Verbose`] |
//! | `DEBUG` | [`Level::Debug`] |
//! | `TRACE` | [`Level::Trace`] |
//!
//! Each accepted event becomes one line holding its `message` field. Other
//! fields are not rendered, and events without a message write nothing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use verbose::{Level, LeveledWriter, init_tracing};
//!
//! init_tracing(LeveledWriter::with_writer(Level::Debug, std::io::stderr()))?;
//!
//! tracing::debug!(peers = 3, "connected");   // "connected"
//! tracing::trace!("suppressed at -vv");
//! ```

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Level as TracingLevel, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::util::TryInitError;

use crate::level::Level;
use crate::writer::LeveledWriter;

/// A tracing layer that writes events through a [`LeveledWriter`].
///
/// The writer sits behind a mutex so the layer can be shared by every thread
/// the subscriber dispatches from. Sink failures are dropped silently; the
/// layer never emits tracing events of its own while holding the lock.
pub struct VerboseLayer<W> {
    threshold: Level,
    writer: Mutex<LeveledWriter<W>>,
}

impl<W> VerboseLayer<W> {
    /// Creates a layer that renders accepted events through `writer`.
    #[must_use]
    pub fn new(writer: LeveledWriter<W>) -> Self {
        Self {
            threshold: writer.level(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the threshold of the wrapped writer.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.threshold
    }

    /// Consumes the layer and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> LeveledWriter<W> {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Map a tracing level to an emission tier.
    const fn tier_for(level: &TracingLevel) -> Level {
        match *level {
            TracingLevel::ERROR | TracingLevel::WARN | TracingLevel::INFO => Level::Verbose,
            TracingLevel::DEBUG => Level::Debug,
            TracingLevel::TRACE => Level::Trace,
        }
    }
}

impl<W> fmt::Debug for VerboseLayer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerboseLayer")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl<S, W> Layer<S> for VerboseLayer<W>
where
    S: Subscriber,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let tier = Self::tier_for(event.metadata().level());
        if !self.threshold.allows(tier) {
            return;
        }

        let mut message = EventMessage::default();
        event.record(&mut message);
        let Some(text) = message.text else {
            return;
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.try_write_line(tier, &[&text]);
    }
}

/// Captures the `message` field of an event; other fields are ignored.
#[derive(Default)]
struct EventMessage {
    text: Option<String>,
}

impl Visit for EventMessage {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.text = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.text = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber that routes tracing events through `writer`.
///
/// Fails when a global default subscriber has already been set.
pub fn init_tracing<W>(writer: LeveledWriter<W>) -> Result<(), TryInitError>
where
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(VerboseLayer::new(writer))
        .try_init()
}

/// Installs a global subscriber combining `filter` with the leveled writer.
///
/// Events rejected by `filter` never reach the writer; the remaining ones
/// are still gated by the writer's own threshold.
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
/// use verbose::{Level, LeveledWriter, init_tracing_with_filter};
///
/// let writer = LeveledWriter::with_writer(Level::Trace, std::io::stderr());
/// init_tracing_with_filter(writer, EnvFilter::new("my_tool=trace"))?;
/// ```
pub fn init_tracing_with_filter<W, F>(writer: LeveledWriter<W>, filter: F) -> Result<(), TryInitError>
where
    W: Write + Send + 'static,
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(VerboseLayer::new(writer))
        .try_init()
}
