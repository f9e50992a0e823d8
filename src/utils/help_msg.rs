use std::ops::Deref;

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::key_events::KeyEvent;

#[derive(Debug, Clone)]
enum HelpKey {
    Key(KeyEvent),
    /// Anything that is not a single key, e.g. `click` or `hjkl`
    Plain(String),
}

#[derive(Debug, Clone)]
pub(crate) struct HelpEntry {
    key: HelpKey,
    desc: String,
}

impl HelpEntry {
    pub(crate) fn new<T: Into<String>, K: Into<KeyEvent>>(event: K, desc: T) -> Self {
        Self {
            key: HelpKey::Key(event.into()),
            desc: desc.into(),
        }
    }
    pub(crate) fn new_plain<T: Into<String>>(event: T, desc: T) -> Self {
        Self {
            key: HelpKey::Plain(event.into()),
            desc: desc.into(),
        }
    }

    pub(crate) fn key(&self) -> String {
        match &self.key {
            HelpKey::Key(key) => key.to_string(),
            HelpKey::Plain(key) => key.clone(),
        }
    }

    pub(crate) fn desc(&self) -> &str {
        &self.desc
    }
}

impl std::fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.desc(), self.key())
    }
}

/// Ordered list of key hints, rendered as a one-line bar or listed in the help popup
#[derive(Default, Clone, Debug)]
pub(crate) struct HelpMsg {
    slices: Vec<HelpEntry>,
}

impl From<Vec<HelpEntry>> for HelpMsg {
    fn from(slices: Vec<HelpEntry>) -> Self {
        Self { slices }
    }
}

impl HelpMsg {
    pub(crate) fn push(&mut self, entry: HelpEntry) {
        self.slices.push(entry);
    }

    pub(crate) fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.to_string()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Deref for HelpMsg {
    type Target = Vec<HelpEntry>;

    fn deref(&self) -> &Self::Target {
        &self.slices
    }
}

impl std::fmt::Display for HelpMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self
            .slices
            .iter()
            .map(HelpEntry::to_string)
            .collect::<Vec<_>>()
            .join(" | ");
        f.write_str(&line)
    }
}

impl From<HelpMsg> for String {
    fn from(val: HelpMsg) -> Self {
        val.to_string()
    }
}
