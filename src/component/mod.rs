pub(crate) mod event;
pub(crate) mod input_submit;
pub(crate) mod pattern;
pub(crate) mod style;

use crate::{actions::Action, app::layer_manager::EventHandlingStatus, page::WidgetExt};

/// A reusable widget owned by a layer.
///
/// Components turn terminal events into actions in `handle_events` and only
/// mutate themselves in `update`, when the action comes back from the queue.
pub(crate) trait Component: WidgetExt {
    fn get_id(&self) -> u64;

    #[must_use]
    fn handle_events(&self, event: &crate::tui::Event) -> EventHandlingStatus;

    fn update(&mut self, action: &Action);
}
