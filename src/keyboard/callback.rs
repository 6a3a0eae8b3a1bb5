//! Consumer-side notification interface.

use crate::config::KeyboardConfiguration;
use crate::editable::Selection;

/// Receives dispatched events on the consumer thread.
///
/// Called from [`KeyboardBridge::update`](super::KeyboardBridge::update) in FIFO order.
pub trait KeyboardCallback {
    fn on_text_edit_update(&mut self, text: &str, selection: Selection);

    fn on_surface_shown(
        &mut self,
        text: &str,
        selection: Selection,
        configuration: &KeyboardConfiguration,
    );

    fn on_surface_hidden(&mut self);
}
