//! Bridge context shared by the producer (input surface) and consumer (tick loop).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::KeyboardConfiguration;
use crate::editable::{EditSession, Selection};
use crate::validation::ValidationResult;

use super::callback::KeyboardCallback;
use super::event::Event;
use super::queue::ThreadsafeQueue;

/// Consumer side of one keyboard channel.
///
/// Owns the event queue and the updates-enabled flag. Hand out
/// [`KeyboardProducer`]s to the threads that observe the input surface and
/// call [`KeyboardBridge::update`] once per tick.
#[derive(Debug, Default)]
pub struct KeyboardBridge {
    queue: Arc<ThreadsafeQueue<Event>>,
    updates_enabled: Arc<AtomicBool>,
}

impl KeyboardBridge {
    /// Create a bridge with updates disabled
    pub fn new() -> Self {
        Self::default()
    }

    pub fn producer(&self) -> KeyboardProducer {
        KeyboardProducer {
            queue: Arc::clone(&self.queue),
            updates_enabled: Arc::clone(&self.updates_enabled),
        }
    }

    pub fn enable_updates(&self) {
        if !self.updates_enabled.swap(true, Ordering::AcqRel) {
            tracing::info!("Keyboard updates enabled");
        }
    }

    /// Stop accepting events and drop everything not yet dispatched
    pub fn disable_updates(&self) {
        if self.updates_enabled.swap(false, Ordering::AcqRel) {
            let dropped = self.queue.drain().len();
            tracing::info!("Keyboard updates disabled, dropped {} pending events", dropped);
        }
    }

    pub fn updates_enabled(&self) -> bool {
        self.updates_enabled.load(Ordering::Acquire)
    }

    /// Number of events waiting for the next tick
    pub fn pending(&self) -> usize {
        self.queue.count()
    }

    /// Dispatch everything queued since the last tick, oldest first.
    ///
    /// Only the newest [`Event::TextEditUpdate`] of a tick is dispatched; older
    /// ones describe states that were already superseded. Returns the number
    /// of callbacks invoked. Never blocks.
    pub fn update(&self, callback: &mut impl KeyboardCallback) -> usize {
        let events = self.queue.drain();
        if events.is_empty() {
            return 0;
        }

        let newest_edit = events
            .iter()
            .rposition(|event| matches!(event, Event::TextEditUpdate { .. }));

        let mut dispatched = 0;
        for (index, event) in events.into_iter().enumerate() {
            match event {
                Event::TextEditUpdate { text, selection } => {
                    if Some(index) != newest_edit {
                        tracing::trace!("skipping stale text edit update");
                        continue;
                    }
                    callback.on_text_edit_update(&text, selection);
                }
                Event::SurfaceShown {
                    text,
                    selection,
                    configuration,
                } => callback.on_surface_shown(&text, selection, &configuration),
                Event::SurfaceHidden => callback.on_surface_hidden(),
            }
            dispatched += 1;
        }

        tracing::debug!("dispatched {} keyboard events", dispatched);
        dispatched
    }
}

/// Producer handle, cheap to clone and send to another thread.
#[derive(Debug, Clone)]
pub struct KeyboardProducer {
    queue: Arc<ThreadsafeQueue<Event>>,
    updates_enabled: Arc<AtomicBool>,
}

impl KeyboardProducer {
    /// Queue `event` unless updates are disabled; returns whether it was queued
    pub fn emit(&self, event: Event) -> bool {
        if !self.updates_enabled.load(Ordering::Acquire) {
            tracing::trace!("updates disabled, dropping {:?}", event.event_type());
            return false;
        }
        self.queue.enqueue(event);
        true
    }

    pub fn update_text_edit(&self, text: impl Into<String>, selection: Selection) -> bool {
        self.emit(Event::TextEditUpdate {
            text: text.into(),
            selection,
        })
    }

    pub fn show_surface(
        &self,
        text: impl Into<String>,
        selection: Selection,
        configuration: KeyboardConfiguration,
    ) -> bool {
        self.emit(Event::SurfaceShown {
            text: text.into(),
            selection,
            configuration: Box::new(configuration),
        })
    }

    pub fn hide_surface(&self) -> bool {
        self.emit(Event::SurfaceHidden)
    }

    /// Run `input` through the session's validator, commit it and queue the
    /// resulting text edit update
    pub fn apply_edit(&self, session: &mut EditSession, input: &str) -> ValidationResult {
        let result = session.insert(input);
        self.update_text_edit(session.text(), session.selection());
        result
    }
}
