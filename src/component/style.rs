//! Style-extension hooks for [`InputSubmit`](super::input_submit::InputSubmit).
//!
//! Each hook names one part of the widget (or one state of a part). Hooks are
//! read from configuration as [`StyleSpec`]s and resolved into ratatui
//! [`Style`]s once, when the component is built. State hooks (`*_disabled`,
//! `button_hover`) are patched on top of their base hook while rendering, so
//! they only need to name what changes.

use std::str::FromStr;

use color_eyre::{Result, eyre::eyre};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// A style as written in configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleSpec {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub modifiers: Vec<String>,
    /// Modifiers taken away, e.g. a state hook dropping its base's `bold`
    pub remove_modifiers: Vec<String>,
}

impl StyleSpec {
    fn new(fg: Option<&str>, bg: Option<&str>, modifiers: &[&str]) -> Self {
        Self {
            fg: fg.map(Into::into),
            bg: bg.map(Into::into),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            remove_modifiers: Vec::new(),
        }
    }

    fn without(self, modifiers: &[&str]) -> Self {
        Self {
            remove_modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            ..self
        }
    }

    pub fn to_style(&self) -> Result<Style> {
        let mut style = Style::default();
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(bg)?);
        }
        for modifier in &self.modifiers {
            style = style.add_modifier(parse_modifier(modifier)?);
        }
        for modifier in &self.remove_modifiers {
            style = style.remove_modifier(parse_modifier(modifier)?);
        }
        Ok(style)
    }
}

fn parse_color(s: &str) -> Result<Color> {
    Color::from_str(s).map_err(|_| eyre!("Unknown color `{}` in style hook", s))
}

fn parse_modifier(s: &str) -> Result<Modifier> {
    let modifier = match s.to_lowercase().replace(['-', ' '], "_").as_str() {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underlined" | "underline" => Modifier::UNDERLINED,
        "slow_blink" => Modifier::SLOW_BLINK,
        "rapid_blink" => Modifier::RAPID_BLINK,
        "reversed" => Modifier::REVERSED,
        "hidden" => Modifier::HIDDEN,
        "crossed_out" => Modifier::CROSSED_OUT,
        _ => return Err(eyre!("Unknown modifier `{}` in style hook", s)),
    };
    Ok(modifier)
}

/// Hooks as read from the `styles` table of the configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleHooksConfig {
    pub host: StyleSpec,
    pub container: StyleSpec,
    pub button: StyleSpec,
    pub button_disabled: StyleSpec,
    pub button_hover: StyleSpec,
    pub input: StyleSpec,
    pub input_disabled: StyleSpec,
}

impl Default for StyleHooksConfig {
    fn default() -> Self {
        Self {
            host: StyleSpec::default(),
            container: StyleSpec::default(),
            button: StyleSpec::new(Some("black"), Some("cyan"), &["bold"]),
            button_disabled: StyleSpec::new(Some("darkgray"), Some("reset"), &[])
                .without(&["bold"]),
            button_hover: StyleSpec::new(None, Some("lightcyan"), &[]),
            input: StyleSpec::default(),
            input_disabled: StyleSpec::new(Some("darkgray"), None, &[]),
        }
    }
}

/// Resolved hooks
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StyleHooks {
    pub host: Style,
    pub container: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub button_hover: Style,
    pub input: Style,
    pub input_disabled: Style,
}

impl TryFrom<&StyleHooksConfig> for StyleHooks {
    type Error = color_eyre::Report;

    fn try_from(cfg: &StyleHooksConfig) -> Result<Self> {
        Ok(Self {
            host: cfg.host.to_style()?,
            container: cfg.container.to_style()?,
            button: cfg.button.to_style()?,
            button_disabled: cfg.button_disabled.to_style()?,
            button_hover: cfg.button_hover.to_style()?,
            input: cfg.input.to_style()?,
            input_disabled: cfg.input_disabled.to_style()?,
        })
    }
}

impl Default for StyleHooks {
    fn default() -> Self {
        Self::try_from(&StyleHooksConfig::default()).expect("default style hooks are valid")
    }
}

impl StyleHooks {
    pub fn input_style(&self, disabled: bool) -> Style {
        if disabled {
            self.input.patch(self.input_disabled)
        } else {
            self.input
        }
    }

    pub fn button_style(&self, disabled: bool, hovered: bool) -> Style {
        if disabled {
            self.button.patch(self.button_disabled)
        } else if hovered {
            self.button.patch(self.button_hover)
        } else {
            self.button
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_style_spec() {
        let hook = StyleSpec::new(Some("red"), Some("#102030"), &["bold", "Crossed-Out"]);
        let style = hook.to_style().unwrap();
        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(style.bg, Some(Color::Rgb(0x10, 0x20, 0x30)));
        assert!(style.add_modifier.contains(Modifier::BOLD | Modifier::CROSSED_OUT));
    }

    #[test]
    fn removed_modifiers() {
        let hook = StyleSpec::new(None, None, &["italic"]).without(&["bold"]);
        let style = Style::default()
            .add_modifier(Modifier::BOLD)
            .patch(hook.to_style().unwrap());
        assert!(style.add_modifier.contains(Modifier::ITALIC));
        assert!(!style.add_modifier.contains(Modifier::BOLD));

        let hook = StyleSpec::new(None, None, &[]).without(&["glowing"]);
        assert!(hook.to_style().is_err());
    }

    #[test]
    fn unknown_color_or_modifier() {
        let hook = StyleSpec::new(Some("not-a-color"), None, &[]);
        assert!(hook.to_style().is_err());
        let hook = StyleSpec::new(None, None, &["sparkly"]);
        assert!(hook.to_style().is_err());
    }

    #[test]
    fn state_hooks_patch_base() {
        let hooks = StyleHooks::default();

        let enabled = hooks.button_style(false, false);
        assert_eq!(enabled.fg, Some(Color::Black));
        assert_eq!(enabled.bg, Some(Color::Cyan));

        let hovered = hooks.button_style(false, true);
        assert_eq!(hovered.fg, Some(Color::Black));
        assert_eq!(hovered.bg, Some(Color::LightCyan));

        // disabled wins over hover
        let disabled = hooks.button_style(true, true);
        assert_eq!(disabled.fg, Some(Color::DarkGray));
        assert_eq!(disabled.bg, Some(Color::Reset));
        assert!(enabled.add_modifier.contains(Modifier::BOLD));
        assert!(!disabled.add_modifier.contains(Modifier::BOLD));

        assert_eq!(hooks.input_style(false), Style::default());
        assert_eq!(hooks.input_style(true).fg, Some(Color::DarkGray));
    }
}
