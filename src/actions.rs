use tracing::error;

use crate::{
    component::{event::CustomEvent, input_submit::InputSubmitAction},
    page::help_popup::HelpPopupAction,
    utils::help_msg::HelpMsg,
};

#[derive(Clone, Debug)]
pub enum Action {
    Tick,
    Render,
    Quit,
    Suspend,
    Resume,
    SwitchInputMode(bool),

    Layer(LayerManageAction),
    HelpPopup(HelpPopupAction),

    Comp((CompAction, u64)),
    /// A custom event emitted by a component, routed by the layer manager
    Dispatch(CustomEvent),
}

#[derive(Clone, Debug, strum::Display)]
pub enum Layers {
    Submit,
    Help(HelpMsg),
}

#[derive(Clone, Debug)]
pub struct PushTarget {
    pub layer: Layers,
    /// Whether the layer below keeps rendering (overlays)
    pub render_self: bool,
}

#[derive(Clone, Debug)]
pub enum LayerManageAction {
    Push(PushTarget),
    Pop,
}

impl From<LayerManageAction> for Action {
    fn from(value: LayerManageAction) -> Self {
        Action::Layer(value)
    }
}

impl From<CustomEvent> for Action {
    fn from(value: CustomEvent) -> Self {
        Action::Dispatch(value)
    }
}

#[derive(Clone, Debug)]
pub enum CompAction {
    InputSubmit(InputSubmitAction),
}

#[derive(Clone, Debug)]
pub struct ActionSender(pub tokio::sync::mpsc::UnboundedSender<Action>);

impl ActionSender {
    pub fn send<T: Into<Action>>(&self, action: T) {
        if let Err(e) = self.0.send(action.into()) {
            error!(
                "Action receiver is dropped or closed while the app is running: {:?}",
                e.0
            );
        }
    }
}
impl From<tokio::sync::mpsc::UnboundedSender<Action>> for ActionSender {
    fn from(value: tokio::sync::mpsc::UnboundedSender<Action>) -> Self {
        ActionSender(value)
    }
}
