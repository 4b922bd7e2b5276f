// Pbevents Event Pump
// Drains the native queue, dispatches each record to its decoder and
// flushes coalesced motion

use std::sync::Arc;

use crate::decode::{
    handle_keyboard, handle_pointer, handle_touch, read_int, InputState, PointerSample, TouchPhase,
    TouchSample,
};
use crate::input::{EventQueue, EventType, Property, RawEvent};
use crate::keymap::KeymapTables;
use crate::output::EventSink;

/// Pump behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpConfig {
    /// Records processed per `pump_events` call; at least 1
    pub max_events_per_call: usize,
    /// Post wheel clicks at the pointer position instead of (0, 0)
    pub wheel_at_cursor: bool,
    /// Wrap shifted on-screen keys in a synthetic left-shift press/release
    pub synthesize_shift: bool,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            max_events_per_call: 1,
            wheel_at_cursor: false,
            synthesize_shift: true,
        }
    }
}

/// What one `pump_events` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpStats {
    /// Records taken off the queue, including skipped and ignored ones
    pub processed: usize,
    /// Whether buffered motion was flushed at the end of the call
    pub flushed_motion: bool,
}

/// Event pump for one input subsystem.
///
/// Owns the queue and all decoder state. Every call is non-blocking.
pub struct EventPump<Q: EventQueue> {
    queue: Q,
    tables: Arc<KeymapTables>,
    state: InputState,
    config: PumpConfig,
}

impl<Q: EventQueue> EventPump<Q> {
    /// Create a pump over `queue` using the process-wide keymap tables
    pub fn new(queue: Q) -> Self {
        Self::with_tables(queue, KeymapTables::shared())
    }

    /// Create a pump with explicit tables
    pub fn with_tables(queue: Q, tables: Arc<KeymapTables>) -> Self {
        Self {
            queue,
            tables,
            state: InputState::new(),
            config: PumpConfig::default(),
        }
    }

    /// Replace the configuration. A zero event limit is raised to 1.
    pub fn with_config(mut self, config: PumpConfig) -> Self {
        self.config = PumpConfig {
            max_events_per_call: config.max_events_per_call.max(1),
            ..config
        };
        self
    }

    pub fn config(&self) -> &PumpConfig {
        &self.config
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn tables(&self) -> &KeymapTables {
        &self.tables
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }

    /// Consume the pump, returning its queue
    pub fn into_queue(self) -> Q {
        self.queue
    }

    /// Drain up to `max_events_per_call` records into `sink`, then flush
    /// any buffered motion.
    ///
    /// An empty queue, a failed poll, an unreadable type or a `None` type
    /// all end processing for this call. None of them is an error to the
    /// caller.
    pub fn pump_events<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> PumpStats {
        let mut stats = PumpStats::default();

        while stats.processed < self.config.max_events_per_call {
            let event = match self.queue.poll() {
                Ok(Some(event)) => event,
                Ok(None) => break,
                Err(e) => {
                    log::debug!("event poll failed: {}", e);
                    break;
                }
            };

            let raw_type = match event.int(Property::Type) {
                Ok(raw) => raw,
                Err(e) => {
                    log::debug!("unreadable event type: {}", e);
                    break;
                }
            };
            let event_type = EventType::from_raw(raw_type);
            if event_type == Some(EventType::None) {
                break;
            }
            stats.processed += 1;

            match event_type {
                Some(ty) => self.dispatch(ty, &event, sink),
                None => log::trace!("ignoring event of unknown type {}", raw_type),
            }
        }

        stats.flushed_motion = self.state.flush_motion(sink);
        stats
    }

    fn dispatch<E, S>(&mut self, ty: EventType, event: &E, sink: &mut S)
    where
        E: RawEvent + ?Sized,
        S: EventSink + ?Sized,
    {
        if ty != EventType::Keyboard {
            let window = event.window().unwrap_or_else(|e| {
                log::trace!("{}; treating window as absent", e);
                None
            });
            if window.is_none() {
                log::debug!("skipping {} event with no window", ty);
                return;
            }
        }

        match ty {
            EventType::Close => {
                log::debug!("window closed, posting quit");
                sink.post_quit();
            }
            EventType::Property => {
                let name = read_int(event, Property::Name);
                log::debug!("property change (name {})", name);
            }
            EventType::Pointer => {
                let sample = PointerSample::read(event);
                handle_pointer(&sample, &mut self.state, self.config.wheel_at_cursor, sink);
            }
            EventType::Keyboard => {
                handle_keyboard(event, &self.tables, self.config.synthesize_shift, sink);
            }
            EventType::MtouchTouch | EventType::MtouchMove | EventType::MtouchRelease => {
                if let Some(phase) = TouchPhase::from_event_type(ty) {
                    let sample = TouchSample::read(event);
                    handle_touch(phase, &sample, &mut self.state, sink);
                }
            }
            other => log::trace!("ignoring {} event", other),
        }
    }
}
