use color_eyre::Result;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use tracing::{debug, info};
use tui_input::{Input, backend::crossterm::EventHandler};
use unicode_width::UnicodeWidthStr;

use crate::{
    actions::{Action, ActionSender, CompAction},
    app::layer_manager::EventHandlingStatus,
    config::InputSubmitConfig,
    page::WidgetExt,
    tui::Event,
    utils::help_msg::{HelpEntry, HelpMsg},
    utils::key_events::KeyEvent,
};

use super::{
    Component,
    event::{CustomEvent, DEFAULT_EVENT_NAME},
    pattern::Pattern,
    style::StyleHooks,
};

/// A text field paired with a submit button.
///
/// The button is enabled only while the field holds a non-empty text matching
/// the configured [`Pattern`]. Pressing the button (or Enter in the field)
/// dispatches a [`CustomEvent`] named after `event_name` carrying the value,
/// then clears the field.
///
/// Listen for the event: match [`Action::Dispatch`] in the host's `update`.
#[derive(Clone, Debug)]
pub(crate) struct InputSubmit {
    id: u64,
    tx: ActionSender,

    /// Editing buffer shown in the field. May hold invalid text.
    field: Input,
    state: InputSubmitState,
    styles: StyleHooks,

    focus: Option<Focus>,
    /// Mirrors the application's input mode
    input_mode: bool,
    hovered: bool,
    areas: RenderedAreas,
}

#[derive(Clone, Debug)]
pub(crate) struct InputSubmitState {
    /// Last valid text of the field, empty when the field is invalid
    pub value: String,
    pub disabled: bool,
    pub placeholder: String,
    pub auto_focus: bool,
    pub button_label: String,
    pub pattern: Pattern,
    pub event_name: String,
}

impl Default for InputSubmitState {
    fn default() -> Self {
        Self {
            value: String::new(),
            disabled: false,
            placeholder: String::new(),
            auto_focus: false,
            button_label: "Submit".into(),
            pattern: Pattern::default(),
            event_name: DEFAULT_EVENT_NAME.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    Input,
    Button,
}

#[derive(Clone, Copy, Debug, Default)]
struct RenderedAreas {
    input: Rect,
    button: Rect,
}

#[derive(Clone, Debug)]
pub(crate) enum InputSubmitAction {
    Focus(Option<Focus>),
    /// A key that edits the field
    Edit(KeyEvent),
    Paste(String),
    /// A key pressed in the field that may activate the button
    KeyPress(KeyEvent),
    Click,
    Hover(bool),
}

impl InputSubmit {
    pub fn new(id: u64, tx: ActionSender) -> Self {
        Self {
            id,
            tx,
            field: Input::default(),
            state: InputSubmitState::default(),
            styles: StyleHooks::default(),
            focus: None,
            input_mode: false,
            hovered: false,
            areas: RenderedAreas::default(),
        }
    }

    /// Build the component from configuration.
    ///
    /// Fails when the configured pattern does not compile.
    pub fn from_config(id: u64, tx: ActionSender, cfg: &InputSubmitConfig) -> Result<Self> {
        let mut comp = Self::new(id, tx);
        comp.set_pattern(&cfg.pattern)?;
        comp.set_event_name(cfg.event_name.as_str());
        comp.set_placeholder(cfg.placeholder.as_str());
        comp.set_button_label(cfg.button_label.as_str());
        comp.set_auto_focus(cfg.auto_focus);
        comp.set_disabled(cfg.disabled);
        comp.set_value(cfg.value.as_str());
        Ok(comp)
    }

    pub fn with_styles(self, styles: StyleHooks) -> Self {
        Self { styles, ..self }
    }

    /// Called by the host once the component is attached.
    pub fn mount(&self) {
        if self.state.auto_focus && !self.state.disabled {
            self.tx
                .send(self.get_action(InputSubmitAction::Focus(Some(Focus::Input))));
            self.tx.send(Action::SwitchInputMode(true));
        }
    }

    pub fn state(&self) -> &InputSubmitState {
        &self.state
    }

    pub fn is_button_disabled(&self) -> bool {
        self.state.disabled || self.state.value.is_empty()
    }

    /// Whether the text field is focused and receiving keystrokes
    pub fn is_typing(&self) -> bool {
        self.focus == Some(Focus::Input) && self.input_mode
    }

    pub fn set_value<T: Into<String>>(&mut self, value: T) {
        let value = value.into();
        self.field = Input::from(value.clone());
        self.on_input_change(&value);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && self.is_typing() {
            self.tx.send(Action::SwitchInputMode(false));
        }
        self.state.disabled = disabled;
        self.request_render();
    }

    pub fn set_placeholder<T: Into<String>>(&mut self, placeholder: T) {
        self.state.placeholder = placeholder.into();
        self.request_render();
    }

    pub fn set_auto_focus(&mut self, auto_focus: bool) {
        self.state.auto_focus = auto_focus;
    }

    pub fn set_button_label<T: Into<String>>(&mut self, label: T) {
        self.state.button_label = label.into();
        self.request_render();
    }

    pub fn set_event_name<T: Into<String>>(&mut self, event_name: T) {
        self.state.event_name = event_name.into();
    }

    /// Replace the validation pattern and revalidate the current text.
    pub fn set_pattern<T: AsRef<str>>(&mut self, source: T) -> Result<()> {
        self.state.pattern = Pattern::new(source)?;
        let text = self.field.value().to_string();
        self.on_input_change(&text);
        Ok(())
    }

    /// Store `raw` as the value when it is valid, otherwise clear the value.
    pub fn on_input_change(&mut self, raw: &str) {
        if self.state.pattern.is_valid(raw) {
            self.state.value = raw.to_string();
        } else {
            self.state.value.clear();
        }
        debug!(
            id = self.id,
            valid = !self.state.value.is_empty(),
            "Input changed"
        );
        self.request_render();
    }

    pub fn on_key_press(&mut self, key: &KeyEvent) {
        if key.code == KeyCode::Enter && !self.state.value.is_empty() {
            self.activate();
        }
    }

    /// Emit the submit event and reset. No-op while the button is disabled.
    pub fn activate(&mut self) {
        if self.is_button_disabled() {
            debug!(id = self.id, "Activation ignored, button is disabled");
            return;
        }
        let value = std::mem::take(&mut self.state.value);
        info!(
            id = self.id,
            event = self.state.event_name.as_str(),
            "Dispatching submit event"
        );
        self.tx.send(CustomEvent::submit(
            self.id,
            self.state.event_name.as_str(),
            value,
        ));
        self.field.reset();
        self.request_render();
    }

    fn request_render(&self) {
        self.tx.send(Action::Render);
    }

    fn get_action(&self, action: InputSubmitAction) -> Action {
        Action::Comp((CompAction::InputSubmit(action), self.id))
    }

    fn unwrap_action(&self, action: &Action) -> Option<InputSubmitAction> {
        let Action::Comp((CompAction::InputSubmit(action), id)) = action else {
            return None;
        };
        if *id != self.id {
            return None;
        }
        Some(action.clone())
    }

    fn focus_input(&self) {
        self.tx
            .send(self.get_action(InputSubmitAction::Focus(Some(Focus::Input))));
        self.tx.send(Action::SwitchInputMode(true));
    }

    fn focus_button(&self) {
        self.tx
            .send(self.get_action(InputSubmitAction::Focus(Some(Focus::Button))));
        if self.input_mode {
            self.tx.send(Action::SwitchInputMode(false));
        }
    }

    fn handle_key(&self, key: &crossterm::event::KeyEvent) -> EventHandlingStatus {
        match (self.focus, self.input_mode) {
            (Some(Focus::Input), true) => match key.code {
                KeyCode::Esc => self.tx.send(Action::SwitchInputMode(false)),
                KeyCode::Tab | KeyCode::BackTab => self.focus_button(),
                KeyCode::Enter => self
                    .tx
                    .send(self.get_action(InputSubmitAction::KeyPress((*key).into()))),
                _ => self
                    .tx
                    .send(self.get_action(InputSubmitAction::Edit((*key).into()))),
            },
            (Some(Focus::Input), false) => match key.code {
                KeyCode::Enter | KeyCode::Char('i') => self.tx.send(Action::SwitchInputMode(true)),
                KeyCode::Tab | KeyCode::BackTab => self.focus_button(),
                _ => return EventHandlingStatus::Ignored,
            },
            (Some(Focus::Button), _) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.tx.send(self.get_action(InputSubmitAction::Click))
                }
                KeyCode::Tab | KeyCode::BackTab => self.focus_input(),
                _ => return EventHandlingStatus::Ignored,
            },
            (None, _) => match key.code {
                KeyCode::Tab => self.focus_input(),
                KeyCode::BackTab => self.focus_button(),
                _ => return EventHandlingStatus::Ignored,
            },
        }
        EventHandlingStatus::Consumed
    }

    fn handle_mouse(&self, mouse: &crossterm::event::MouseEvent) -> EventHandlingStatus {
        let position = Position::new(mouse.column, mouse.row);
        let on_button = self.areas.button.contains(position);
        match mouse.kind {
            MouseEventKind::Moved if on_button != self.hovered => {
                self.tx
                    .send(self.get_action(InputSubmitAction::Hover(on_button)));
                EventHandlingStatus::Consumed
            }
            MouseEventKind::Down(MouseButton::Left) if on_button => {
                if self.focus != Some(Focus::Button) {
                    self.focus_button();
                }
                self.tx.send(self.get_action(InputSubmitAction::Click));
                EventHandlingStatus::Consumed
            }
            MouseEventKind::Down(MouseButton::Left) if self.areas.input.contains(position) => {
                self.focus_input();
                EventHandlingStatus::Consumed
            }
            _ => EventHandlingStatus::Ignored,
        }
    }

    pub fn get_help_msg(&self) -> HelpMsg {
        let mut msg = HelpMsg::default();
        if self.state.disabled {
            return msg;
        }
        match (self.focus, self.input_mode) {
            (Some(Focus::Input), true) => {
                msg.push(HelpEntry::new(KeyCode::Enter, "Submit"));
                msg.push(HelpEntry::new(KeyCode::Esc, "Stop typing"));
                msg.push(HelpEntry::new(KeyCode::Tab, "Focus button"));
            }
            (Some(Focus::Input), false) => {
                msg.push(HelpEntry::new(KeyCode::Enter, "Start typing"));
                msg.push(HelpEntry::new(KeyCode::Tab, "Focus button"));
            }
            (Some(Focus::Button), _) => {
                msg.push(HelpEntry::new(KeyCode::Enter, "Press button"));
                msg.push(HelpEntry::new(KeyCode::Tab, "Focus input"));
            }
            (None, _) => {
                msg.push(HelpEntry::new(KeyCode::Tab, "Focus input"));
            }
        }
        if !self.is_button_disabled() {
            msg.push(HelpEntry::new_plain("click", "Press button"));
        }
        msg
    }
}

impl Component for InputSubmit {
    fn get_id(&self) -> u64 {
        self.id
    }

    fn handle_events(&self, event: &Event) -> EventHandlingStatus {
        if self.state.disabled {
            return EventHandlingStatus::Ignored;
        }
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(s) if self.is_typing() => {
                self.tx
                    .send(self.get_action(InputSubmitAction::Paste(s.clone())));
                EventHandlingStatus::Consumed
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => EventHandlingStatus::Ignored,
        }
    }

    fn update(&mut self, action: &Action) {
        if let Action::SwitchInputMode(mode) = action {
            self.input_mode = *mode;
            return;
        }
        let Some(action) = self.unwrap_action(action) else {
            return;
        };

        match action {
            InputSubmitAction::Focus(focus) => {
                self.focus = focus;
                self.request_render();
            }
            InputSubmitAction::Edit(key) => {
                let before = self.field.value().to_string();
                self.field
                    .handle_event(&crossterm::event::Event::Key(key.into()));
                if self.field.value() != before {
                    let text = self.field.value().to_string();
                    self.on_input_change(&text);
                } else {
                    self.request_render();
                }
            }
            InputSubmitAction::Paste(string) => {
                string.chars().for_each(|c| {
                    self.field.handle(tui_input::InputRequest::InsertChar(c));
                });
                let text = self.field.value().to_string();
                self.on_input_change(&text);
            }
            InputSubmitAction::KeyPress(key) => self.on_key_press(&key),
            InputSubmitAction::Click => self.activate(),
            InputSubmitAction::Hover(hovered) => {
                self.hovered = hovered;
                self.request_render();
            }
        }
    }
}

impl WidgetExt for InputSubmit {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(self.styles.host), area);

        let [row, _] = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);
        frame.render_widget(Block::default().style(self.styles.container), row);

        let button_width = UnicodeWidthStr::width(self.state.button_label.as_str()) as u16 + 4;
        let [input_area, button_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(button_width)])
                .spacing(1)
                .areas(row);
        self.areas = RenderedAreas {
            input: input_area,
            button: button_area,
        };

        let width = input_area.width.max(3) - 3;
        let scroll = self.field.visual_scroll(width as usize);
        let border_style = match (self.focus, self.input_mode) {
            (Some(Focus::Input), true) => Color::Yellow.into(),
            (Some(Focus::Input), false) => Color::Cyan.into(),
            _ => Style::default(),
        };
        let text = if self.field.value().is_empty() {
            Line::from(Span::styled(
                self.state.placeholder.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.field.value())
        };
        let input_widget = Paragraph::new(text)
            .style(self.styles.input_style(self.state.disabled))
            .scroll((0, scroll as u16))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        frame.render_widget(input_widget, input_area);

        let button_widget = Paragraph::new(self.state.button_label.as_str())
            .centered()
            .style(
                self.styles
                    .button_style(self.is_button_disabled(), self.hovered),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(if self.focus == Some(Focus::Button) {
                        Color::Cyan.into()
                    } else {
                        Style::default()
                    }),
            );
        frame.render_widget(button_widget, button_area);

        if self.is_typing() {
            // Ratatui hides the cursor unless it's explicitly set
            let x = self.field.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((input_area.x + x as u16, input_area.y + 1))
        }
    }
}

#[cfg(test)]
impl InputSubmit {
    pub fn get_focus(&self) -> Option<Focus> {
        self.focus
    }
    pub fn get_field(&self) -> &str {
        self.field.value()
    }
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;
    use crate::utils::key_events::test_utils::{
        get_char_evt, get_click_evt, get_key_evt, get_move_evt,
    };

    fn get_comp(cfg: InputSubmitConfig) -> (InputSubmit, UnboundedReceiver<Action>) {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let comp = InputSubmit::from_config(1, tx.into(), &cfg).unwrap();
        while rx.try_recv().is_ok() {}
        (comp, rx)
    }

    /// A mounted component with `auto_focus`, ready for typing
    fn get_typing_comp(cfg: InputSubmitConfig) -> (InputSubmit, UnboundedReceiver<Action>) {
        let (mut comp, mut rx) = get_comp(InputSubmitConfig {
            auto_focus: true,
            ..cfg
        });
        comp.mount();
        drain(&mut comp, &mut rx);
        assert!(comp.is_typing());
        (comp, rx)
    }

    /// Perform queued actions, returning the dispatched events
    fn drain(comp: &mut InputSubmit, rx: &mut UnboundedReceiver<Action>) -> Vec<CustomEvent> {
        let mut events = vec![];
        while let Ok(action) = rx.try_recv() {
            if let Action::Dispatch(event) = &action {
                events.push(event.clone());
            }
            comp.update(&action);
        }
        events
    }

    fn send(
        comp: &mut InputSubmit,
        rx: &mut UnboundedReceiver<Action>,
        event: Event,
    ) -> Vec<CustomEvent> {
        let _ = comp.handle_events(&event);
        drain(comp, rx)
    }

    fn type_str(comp: &mut InputSubmit, rx: &mut UnboundedReceiver<Action>, s: &str) {
        for c in s.chars() {
            assert!(send(comp, rx, get_char_evt(c)).is_empty());
        }
    }

    #[test]
    fn initial_state_is_disabled() {
        let (comp, _rx) = get_comp(Default::default());
        assert!(comp.is_button_disabled());
        assert_eq!(comp.state().value, "");
        assert_eq!(comp.state().event_name, "default-input-submit-event");
        assert_eq!(comp.state().pattern.as_str(), r"^\w");
        assert_eq!(comp.get_focus(), None);
    }

    #[test]
    fn valid_text_enables_button() {
        for s in ["a", "abc", "a b", "Z-9", "_"] {
            let (mut comp, _rx) = get_comp(Default::default());
            comp.on_input_change(s);
            assert!(!comp.is_button_disabled(), "{s:?} should be valid");
            assert_eq!(comp.state().value, s);
        }
    }

    #[test]
    fn invalid_text_disables_button() {
        for s in ["", " a", "-", "!x"] {
            let (mut comp, _rx) = get_comp(Default::default());
            comp.on_input_change("ok");
            comp.on_input_change(s);
            assert!(comp.is_button_disabled(), "{s:?} should be invalid");
            assert_eq!(comp.state().value, "");
        }
    }

    #[test]
    fn typing_validates_each_change() {
        let (mut comp, mut rx) = get_typing_comp(Default::default());

        type_str(&mut comp, &mut rx, "a");
        assert!(!comp.is_button_disabled());
        assert_eq!(comp.state().value, "a");

        send(&mut comp, &mut rx, get_key_evt(KeyCode::Backspace));
        assert!(comp.is_button_disabled());
        assert_eq!(comp.state().value, "");

        // field keeps the invalid text while the value stays empty
        type_str(&mut comp, &mut rx, " x");
        assert_eq!(comp.get_field(), " x");
        assert_eq!(comp.state().value, "");
        assert!(comp.is_button_disabled());
    }

    #[test]
    fn enter_with_invalid_value_dispatches_nothing() {
        let (mut comp, mut rx) = get_typing_comp(Default::default());
        assert!(send(&mut comp, &mut rx, get_key_evt(KeyCode::Enter)).is_empty());

        type_str(&mut comp, &mut rx, "  ");
        assert!(send(&mut comp, &mut rx, get_key_evt(KeyCode::Enter)).is_empty());
        assert_eq!(comp.get_field(), "  ");
    }

    #[test]
    fn enter_with_valid_value_dispatches_once() {
        let (mut comp, mut rx) = get_typing_comp(InputSubmitConfig {
            event_name: "search-submit".into(),
            ..Default::default()
        });
        type_str(&mut comp, &mut rx, "query");

        let events = send(&mut comp, &mut rx, get_key_evt(KeyCode::Enter));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "search-submit");
        assert_eq!(events[0].detail.value, "query");
        assert!(events[0].bubbles && events[0].composed);

        assert_eq!(comp.state().value, "");
        assert_eq!(comp.get_field(), "");
        assert!(comp.is_button_disabled());

        // a second Enter finds nothing to submit
        assert!(send(&mut comp, &mut rx, get_key_evt(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn activation_always_resets() {
        for s in ["a", "hello world", "x1"] {
            let (mut comp, mut rx) = get_comp(Default::default());
            comp.on_input_change(s);
            comp.activate();
            let events = drain(&mut comp, &mut rx);
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].detail.value, s);
            assert_eq!(comp.state().value, "");
        }
    }

    #[test]
    fn click_button_scenario() {
        let (mut comp, mut rx) = get_typing_comp(Default::default());
        type_str(&mut comp, &mut rx, "a");
        assert!(!comp.is_button_disabled());

        send(&mut comp, &mut rx, get_key_evt(KeyCode::Tab));
        assert_eq!(comp.get_focus(), Some(Focus::Button));
        assert!(!comp.is_typing());

        let events = send(&mut comp, &mut rx, get_key_evt(KeyCode::Enter));
        assert_eq!(
            events,
            vec![CustomEvent::submit(1, "default-input-submit-event", "a")]
        );
        assert_eq!(comp.state().value, "");
        assert_eq!(comp.get_field(), "");

        // clicking a disabled button does nothing
        assert!(send(&mut comp, &mut rx, get_char_evt(' ')).is_empty());
    }

    #[test]
    fn mouse_click_and_hover() {
        let (mut comp, mut rx) = get_typing_comp(Default::default());
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                comp.render(f, area)
            })
            .unwrap();

        type_str(&mut comp, &mut rx, "ab");

        // button occupies columns 20..30 of rows 0..3
        send(&mut comp, &mut rx, get_move_evt(25, 1));
        assert!(comp.is_hovered());
        send(&mut comp, &mut rx, get_move_evt(5, 1));
        assert!(!comp.is_hovered());

        let events = send(&mut comp, &mut rx, get_click_evt(22, 2));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].detail.value, "ab");
        assert_eq!(comp.get_focus(), Some(Focus::Button));

        send(&mut comp, &mut rx, get_click_evt(3, 1));
        assert!(comp.is_typing());
    }

    #[test]
    fn paste_is_an_input_change() {
        let (mut comp, mut rx) = get_typing_comp(Default::default());
        send(&mut comp, &mut rx, Event::Paste("pasted".into()));
        assert_eq!(comp.state().value, "pasted");
    }

    #[test]
    fn disabled_component_is_inert() {
        let (mut comp, mut rx) = get_comp(InputSubmitConfig {
            disabled: true,
            auto_focus: true,
            value: "abc".into(),
            ..Default::default()
        });
        comp.mount();
        assert!(drain(&mut comp, &mut rx).is_empty());
        assert!(!comp.is_typing());
        assert!(comp.is_button_disabled());

        assert!(matches!(
            comp.handle_events(&get_key_evt(KeyCode::Tab)),
            EventHandlingStatus::Ignored
        ));
        comp.activate();
        assert!(drain(&mut comp, &mut rx).is_empty());
        assert_eq!(comp.state().value, "abc");

        comp.set_disabled(false);
        assert!(!comp.is_button_disabled());
    }

    #[test]
    fn disabling_while_typing_leaves_input_mode() {
        let (mut comp, mut rx) = get_typing_comp(Default::default());
        type_str(&mut comp, &mut rx, "ab");

        comp.set_disabled(true);
        let mut actions = vec![];
        while let Ok(action) = rx.try_recv() {
            comp.update(&action);
            actions.push(action);
        }
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::SwitchInputMode(false)))
        );
        assert!(!comp.is_typing());
        assert!(comp.is_button_disabled());

        // keystrokes no longer reach the field
        assert!(matches!(
            comp.handle_events(&get_char_evt('c')),
            EventHandlingStatus::Ignored
        ));
        assert_eq!(comp.get_field(), "ab");
    }

    #[test]
    fn disabling_when_idle_keeps_input_mode_alone() {
        let (mut comp, mut rx) = get_comp(Default::default());
        comp.set_disabled(true);
        while let Ok(action) = rx.try_recv() {
            assert!(!matches!(action, Action::SwitchInputMode(_)));
        }
    }

    #[test]
    fn set_value_runs_validation() {
        let (mut comp, _rx) = get_comp(Default::default());
        comp.set_value("-x");
        assert_eq!(comp.get_field(), "-x");
        assert_eq!(comp.state().value, "");

        comp.set_value("x");
        assert_eq!(comp.state().value, "x");
    }

    #[test]
    fn set_pattern_revalidates() {
        let (mut comp, _rx) = get_comp(Default::default());
        comp.set_value("-x");
        assert!(comp.is_button_disabled());

        comp.set_pattern("^-").unwrap();
        assert_eq!(comp.state().value, "-x");

        assert!(comp.set_pattern("[").is_err());
        // the previous pattern stays in place
        assert_eq!(comp.state().pattern.as_str(), "^-");
    }

    #[test]
    fn malformed_pattern_fails_construction() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel::<Action>();
        let cfg = InputSubmitConfig {
            pattern: "(".into(),
            ..Default::default()
        };
        assert!(InputSubmit::from_config(1, tx.into(), &cfg).is_err());
    }

    #[test]
    fn actions_for_other_components_are_ignored() {
        let (mut comp, _rx) = get_comp(Default::default());
        comp.update(&Action::Comp((
            CompAction::InputSubmit(InputSubmitAction::Focus(Some(Focus::Button))),
            2,
        )));
        assert_eq!(comp.get_focus(), None);
    }

    fn get_button_bg(t: &Terminal<TestBackend>) -> Option<Color> {
        t.backend()
            .buffer()
            .content()
            .iter()
            .find(|&c| c.symbol() == "S")
            .map(|c| c.bg)
    }

    #[test]
    fn test_render() {
        let (mut comp, mut rx) = get_comp(InputSubmitConfig {
            placeholder: "Type here".into(),
            ..Default::default()
        });
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                comp.render(f, area)
            })
            .unwrap();
        assert_snapshot!(terminal.backend(), @r#"
        "╭─────────────────╮ ╭────────╮"
        "│Type here        │ │ Submit │"
        "╰─────────────────╯ ╰────────╯"
        "                              "
        "#);
        assert_eq!(get_button_bg(&terminal), Some(Color::Reset));

        comp.mount();
        send(&mut comp, &mut rx, get_key_evt(KeyCode::Tab));
        type_str(&mut comp, &mut rx, "ab");
        terminal
            .draw(|f| {
                let area = f.area();
                comp.render(f, area)
            })
            .unwrap();
        assert_eq!(get_button_bg(&terminal), Some(Color::Cyan));
    }

    #[test]
    fn test_help_msg() {
        fn get_help_msg(comp: &InputSubmit) -> String {
            comp.get_help_msg().into()
        }
        let (mut comp, mut rx) = get_comp(Default::default());
        assert_eq!(get_help_msg(&comp), "Focus input: tab");

        send(&mut comp, &mut rx, get_key_evt(KeyCode::Tab));
        assert_eq!(
            get_help_msg(&comp),
            "Submit: enter | Stop typing: esc | Focus button: tab"
        );

        // clicking is only advertised while the button can be pressed
        type_str(&mut comp, &mut rx, "a");
        assert_eq!(
            get_help_msg(&comp),
            "Submit: enter | Stop typing: esc | Focus button: tab | Press button: click"
        );

        send(&mut comp, &mut rx, get_key_evt(KeyCode::Esc));
        assert_eq!(
            get_help_msg(&comp),
            "Start typing: enter | Focus button: tab | Press button: click"
        );

        comp.set_disabled(true);
        assert_eq!(get_help_msg(&comp), "");
    }
}
