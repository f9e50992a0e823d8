//! Page module handles the UI layers and their behaviors.
//!
//! A layer owns the components it draws and acts as their host: it forwards
//! terminal events to them, feeds actions back, and listens for the custom
//! events they dispatch.

use crate::actions::Action;
use crate::app::layer_manager::EventHandlingStatus;
use crate::tui::Event;
use downcast_rs::{DowncastSync, impl_downcast};
use ratatui::Frame;
use ratatui::layout::Rect;

pub(crate) mod help_popup;
pub(crate) mod submit;

/// A trait that represents a UI layer/page in the application.
///
/// # Type Requirements
/// - Must implement [`WidgetExt`]
/// - Must implement [`EventLoopParticipant`]
/// - Must implement [`DowncastSync`]
pub trait Layer: WidgetExt + EventLoopParticipant + DowncastSync {
    /// Initialize the page, after it is pushed onto the layer stack
    fn init(&mut self) {}
}
impl_downcast!(sync Layer);

/// Extension trait for widgets that can be rendered to the screen.
pub(crate) trait WidgetExt {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Trait for layers that participate in the event loop.
///
/// # Test Features
/// When compiled with test configuration, provides additional methods:
/// - `event_loop_once`: Processes a single event and subsequent actions
/// - `event_loop_once_with_action`: Processes a single action and subsequent actions
pub(crate) trait EventLoopParticipant {
    /// Handle events
    #[must_use]
    fn handle_events(&mut self, event: &Event) -> EventHandlingStatus;

    /// Update the state of the layer with an action taken from the queue
    fn update(&mut self, action: Action);

    #[cfg(test)]
    /// Handle the event and check the returned status as [`EventHandlingStatus::Consumed`].
    fn handle_event_with_status_check(&mut self, event: &Event) {
        let status = self.handle_events(event);
        assert!(matches!(status, EventHandlingStatus::Consumed));
    }

    #[cfg(test)]
    fn event_loop_once(
        &mut self,
        rx: &mut tokio::sync::mpsc::UnboundedReceiver<Action>,
        event: Event,
    ) {
        let _ = self.handle_events(&event);
        while let Ok(action) = rx.try_recv() {
            self.update(action);
        }
    }

    #[cfg(test)]
    fn event_loop_once_with_action(
        &mut self,
        rx: &mut tokio::sync::mpsc::UnboundedReceiver<Action>,
        action: Action,
    ) {
        self.update(action);
        while let Ok(action) = rx.try_recv() {
            self.update(action);
        }
    }
}
