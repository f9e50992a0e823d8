use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style, palette::tailwind},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Clear, HighlightSpacing, List, ListItem, Padding},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    actions::{Action, ActionSender, LayerManageAction},
    app::layer_manager::EventHandlingStatus,
    tui::Event,
    utils::help_msg::{HelpEntry, HelpMsg},
};

use super::{EventLoopParticipant, Layer, WidgetExt};

/// Overlay listing the key bindings of the layer below
pub(crate) struct HelpPopup {
    help_msg: HelpMsg,

    longest_entry_size: u16,
    list_state: ratatui::widgets::ListState,

    tx: ActionSender,
}

impl HelpPopup {
    /// Returns `None` when there is nothing to show
    pub fn new(tx: ActionSender, msg: HelpMsg) -> Option<Self> {
        let longest = msg
            .iter()
            .map(|entry| UnicodeWidthStr::width(entry.to_string().as_str()))
            .max()?;

        Some(Self {
            help_msg: msg,
            longest_entry_size: longest as u16,
            list_state: ratatui::widgets::ListState::default(),
            tx,
        })
    }

    pub fn get_self_help_msg() -> HelpMsg {
        vec![
            HelpEntry::new('j', "Go Down"),
            HelpEntry::new('k', "Go Up"),
            HelpEntry::new('g', "Go to Top"),
            HelpEntry::new('G', "Go to Bottom"),
            HelpEntry::new(KeyCode::Esc, "Close help"),
        ]
        .into()
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let selected_row_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(tailwind::INDIGO.c400);

        let block = Block::new()
            .title(Line::raw("Help").centered())
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .padding(Padding::vertical(1));

        let items: Vec<ListItem> = self
            .help_msg
            .iter()
            .map(|entry| ListItem::from(Text::raw(format!("  {}  ", entry))))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(selected_row_style)
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

#[derive(Clone, Debug)]
pub enum HelpPopupAction {
    Up,
    Down,
    Start,
    End,
}
impl From<HelpPopupAction> for Action {
    fn from(value: HelpPopupAction) -> Self {
        Action::HelpPopup(value)
    }
}

impl EventLoopParticipant for HelpPopup {
    fn handle_events(&mut self, event: &Event) -> EventHandlingStatus {
        let Event::Key(key) = event else {
            return EventHandlingStatus::Ignored;
        };
        match key.code {
            KeyCode::Esc => self.tx.send(LayerManageAction::Pop),
            KeyCode::Char('j') | KeyCode::Down => self.tx.send(HelpPopupAction::Down),
            KeyCode::Char('k') | KeyCode::Up => self.tx.send(HelpPopupAction::Up),
            KeyCode::Char('g') => self.tx.send(HelpPopupAction::Start),
            KeyCode::Char('G') => self.tx.send(HelpPopupAction::End),
            _ => return EventHandlingStatus::Ignored,
        }
        EventHandlingStatus::Consumed
    }

    fn update(&mut self, action: Action) {
        let Action::HelpPopup(action) = action else {
            return;
        };
        match action {
            HelpPopupAction::Up => self.list_state.select_previous(),
            HelpPopupAction::Down => self.list_state.select_next(),
            HelpPopupAction::Start => self.list_state.select_first(),
            HelpPopupAction::End => self.list_state.select_last(),
        }
    }
}

impl Layer for HelpPopup {}

impl WidgetExt for HelpPopup {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = (self.longest_entry_size + 8).max(area.width.saturating_sub(4).min(50));
        let height = (self.help_msg.len() as u16 + 4).min(area.height.saturating_sub(3));

        let [show_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [show_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(show_area);
        let [_, bottom_help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(area);

        frame.render_widget(Clear, bottom_help_area);
        HelpPopup::get_self_help_msg().render(frame, bottom_help_area);

        frame.render_widget(Clear, show_area);
        self.render_list(frame, show_area);
    }
}
