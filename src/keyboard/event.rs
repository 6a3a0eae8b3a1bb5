//! Notifications carried from the producer thread to the consumer.

use crate::config::KeyboardConfiguration;
use crate::editable::Selection;

/// Tag of an [`Event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    TextEditUpdate,
    SurfaceShown,
    SurfaceHidden,
}

/// One state change of the input surface.
///
/// Events are moved into the queue by the producer and moved out by the
/// consumer; they are never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Committed text and selection after an edit
    TextEditUpdate { text: String, selection: Selection },
    /// The input surface became visible for a field
    SurfaceShown {
        text: String,
        selection: Selection,
        configuration: Box<KeyboardConfiguration>,
    },
    /// The input surface went away
    SurfaceHidden,
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::TextEditUpdate { .. } => EventType::TextEditUpdate,
            Event::SurfaceShown { .. } => EventType::SurfaceShown,
            Event::SurfaceHidden => EventType::SurfaceHidden,
        }
    }
}
