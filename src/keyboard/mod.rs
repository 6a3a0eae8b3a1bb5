//! Cross-thread delivery of keyboard notifications.
//!
//! The thread that owns the input surface holds a [`KeyboardProducer`] and
//! queues an [`Event`] for every committed edit or visibility change. The
//! consumer holds the [`KeyboardBridge`] and calls [`KeyboardBridge::update`]
//! once per tick, which drains the [`ThreadsafeQueue`] and dispatches each
//! event to a [`KeyboardCallback`].

mod bridge;
mod callback;
mod event;
mod queue;

pub use bridge::{KeyboardBridge, KeyboardProducer};
pub use callback::KeyboardCallback;
pub use event::{Event, EventType};
pub use queue::ThreadsafeQueue;
