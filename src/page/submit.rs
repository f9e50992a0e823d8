use color_eyre::{Result, eyre::Context};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, List, ListItem},
};
use tracing::info;

use crate::{
    actions::{Action, ActionSender, LayerManageAction, Layers, PushTarget},
    app::layer_manager::EventHandlingStatus,
    component::{
        Component, event::CustomEvent, input_submit::InputSubmit, style::StyleHooks,
    },
    config::Config,
    tui::Event,
    utils::help_msg::{HelpEntry, HelpMsg},
};

use super::{EventLoopParticipant, Layer, WidgetExt};

/// Hosts one [`InputSubmit`] and lists the submit events it hears.
pub(crate) struct SubmitPage {
    tx: ActionSender,
    input: InputSubmit,

    /// Event name this page listens for
    listen_for: String,
    received: Vec<CustomEvent>,

    input_mode: bool,
}

impl SubmitPage {
    pub fn new(tx: ActionSender, config: &Config, input_mode: bool) -> Result<Self> {
        let styles = StyleHooks::try_from(&config.styles).context("Invalid style hooks")?;
        let input = InputSubmit::from_config(rand::random::<u64>(), tx.clone(), &config.input)
            .context("Error when building the input")?
            .with_styles(styles);

        Ok(Self {
            tx,
            input,
            listen_for: config.input.event_name.clone(),
            received: Vec::new(),
            input_mode,
        })
    }

    pub fn get_help_msg(&self) -> HelpMsg {
        let mut msg = self.input.get_help_msg();
        if !self.input_mode {
            msg.push(HelpEntry::new('?', "Help"));
            msg.push(HelpEntry::new('q', "Quit"));
        }
        msg
    }

    #[cfg(test)]
    pub fn received(&self) -> &[CustomEvent] {
        &self.received
    }

    fn render_received(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .received
            .iter()
            .map(|event| ListItem::new(Line::raw(event.detail.value.as_str())))
            .collect();
        let list = List::new(items).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(format!("Received `{}`", self.listen_for)),
        );
        frame.render_widget(list, area);
    }
}

impl EventLoopParticipant for SubmitPage {
    fn handle_events(&mut self, event: &Event) -> EventHandlingStatus {
        if let EventHandlingStatus::Consumed = self.input.handle_events(event) {
            return EventHandlingStatus::Consumed;
        }
        if self.input_mode {
            return EventHandlingStatus::Ignored;
        }
        match event {
            Event::Key(key) if key.code == KeyCode::Char('?') => {
                self.tx.send(LayerManageAction::Push(PushTarget {
                    layer: Layers::Help(self.get_help_msg()),
                    render_self: true,
                }));
                EventHandlingStatus::Consumed
            }
            _ => EventHandlingStatus::Ignored,
        }
    }

    fn update(&mut self, action: Action) {
        match &action {
            Action::SwitchInputMode(mode) => self.input_mode = *mode,
            Action::Dispatch(event) if event.is(&self.listen_for) => {
                info!(
                    value = event.detail.value.as_str(),
                    own = event.target == self.input.get_id(),
                    "Received `{}`",
                    event.event_type
                );
                self.received.push(event.clone());
            }
            _ => {}
        }
        self.input.update(&action);
    }
}

impl WidgetExt for SubmitPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .margin(1)
        .areas(area);

        self.input.render(frame, input_area);
        self.render_received(frame, list_area);
        self.get_help_msg().render(frame, help_area);
    }
}

impl Layer for SubmitPage {
    fn init(&mut self) {
        self.input.mount();
    }
}
