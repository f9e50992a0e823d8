pub(crate) mod layer_manager;

use crate::{
    actions::{Action, Layers},
    config::Config,
    tui::{Event, TuiEnum},
};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use layer_manager::LayerManager;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

pub struct RootState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
    pub input_mode: bool,

    pub config: Config,
}

impl RootState {
    pub fn new(config: Config) -> Self {
        let (action_tx, action_rx) = tokio::sync::mpsc::unbounded_channel();
        Self {
            should_quit: false,
            should_suspend: false,
            action_tx,
            action_rx,
            input_mode: false,
            config,
        }
    }
}

pub struct App {
    layer_manager: LayerManager,
    state: RootState,
    tui: TuiEnum,
}

impl App {
    /// Build the app with the submit page as its first layer.
    ///
    /// Invalid input configuration (pattern, styles) fails here.
    pub fn new(state: RootState, tui: TuiEnum) -> Result<Self> {
        let layer_manager = LayerManager::new(&Layers::Submit, &state)?;
        Ok(Self {
            layer_manager,
            state,
            tui,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            let e = self.tui.next().await?;
            self.handle_event(e);
            self.perform_queued_actions()?;

            if self.state.should_suspend {
                self.tui.suspend()?;
                self.state.should_suspend = false;
                self.tui.resume()?;
                self.state.action_tx.send(Action::Resume)?;
            }
            if self.state.should_quit {
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Handle application-wide events (quitting, suspending, ticks)
    /// and hand everything else to the layer stack.
    fn handle_event(&mut self, event: Event) {
        let action = match &event {
            Event::Tick => Some(Action::Tick),
            Event::Render => Some(Action::Render),
            Event::Error => {
                warn!("Terminal event stream reported an error, quitting");
                Some(Action::Quit)
            }
            Event::Key(key) => match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
                (KeyModifiers::CONTROL, KeyCode::Char('z')) => Some(Action::Suspend),
                (_, KeyCode::Char('q')) if !self.state.input_mode => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        };

        match action {
            Some(action) => self.send(action),
            None => {
                let _ = self.layer_manager.handle_event(&event);
            }
        }
    }

    fn send(&self, action: Action) {
        if self.state.action_tx.send(action).is_err() {
            warn!("Action channel is closed");
        }
    }

    /// Perform every queued action, including the ones queued while performing.
    ///
    /// This SHOULD be the only place where the state of the application is changed.
    fn perform_queued_actions(&mut self) -> Result<()> {
        while let Ok(action) = self.state.action_rx.try_recv() {
            self.perform_action(action)?;
        }
        Ok(())
    }

    fn perform_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Suspend => self.state.should_suspend = true,
            Action::Tick => {}
            Action::Resume | Action::Render => {
                self.tui.draw(|f| self.layer_manager.render(f))?;
            }
            Action::SwitchInputMode(mode) => {
                self.state.input_mode = mode;
                self.layer_manager
                    .handle_action(Action::SwitchInputMode(mode));
            }
            Action::Layer(layer_action) => {
                self.layer_manager
                    .handle_layer_action(&layer_action, &self.state);
                self.send(Action::Render);
            }
            Action::Dispatch(event) => {
                let reached = self.layer_manager.dispatch(&event);
                if event.bubbles && event.composed {
                    info!(
                        value = event.detail.value.as_str(),
                        layers = reached,
                        "Custom event `{}` reached the application",
                        event.event_type
                    );
                }
            }
            Action::HelpPopup(_) | Action::Comp(_) => {
                self.layer_manager.handle_action(action);
            }
        }
        Ok(())
    }
}
