use std::ops::{Deref, DerefMut};

use crate::{
    actions::{Action, LayerManageAction, Layers},
    component::event::CustomEvent,
    page::{Layer, help_popup::HelpPopup, submit::SubmitPage},
    tui::Event,
};
use color_eyre::{Result, eyre::eyre};
use ratatui::Frame;
use tracing::{debug, info, warn};

use super::RootState;

/// Whether a layer (or component) took care of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandlingStatus {
    Consumed,
    Ignored,
}

pub(super) struct BoxedLayer(Box<dyn Layer>);
impl Deref for BoxedLayer {
    type Target = dyn Layer;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
impl DerefMut for BoxedLayer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.0
    }
}
impl From<Box<dyn Layer>> for BoxedLayer {
    fn from(layer: Box<dyn Layer>) -> Self {
        Self(layer)
    }
}
impl BoxedLayer {
    fn into_layer_config(self, render: bool) -> LayerConfig {
        LayerConfig {
            layer: self,
            render,
        }
    }
}

pub(super) struct LayerConfig {
    layer: BoxedLayer,
    render: bool,
}

impl Deref for LayerConfig {
    type Target = BoxedLayer;

    fn deref(&self) -> &Self::Target {
        &self.layer
    }
}
impl DerefMut for LayerConfig {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layer
    }
}

pub(super) struct LayerManager {
    layers: Vec<LayerConfig>,
}

impl Deref for LayerManager {
    type Target = Vec<LayerConfig>;

    fn deref(&self) -> &Self::Target {
        &self.layers
    }
}

impl LayerManager {
    /// Start with the given layer at the bottom of the stack.
    ///
    /// Fails when the layer cannot be built from the current config
    /// (e.g. an invalid pattern).
    pub(super) fn new(layer: &Layers, state: &RootState) -> Result<Self> {
        let layer = LayerManager::get_layer(layer, state)?;
        Ok(Self {
            layers: vec![layer.into_layer_config(true)],
        })
    }

    pub(super) fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.layers
            .iter_mut()
            .filter(|page| page.render)
            .for_each(|page| page.render(f, area));
    }

    /// Terminal events only go to the top layer
    pub(super) fn handle_event(&mut self, event: &Event) -> EventHandlingStatus {
        match self.layers.last_mut() {
            Some(layer) => layer.handle_events(event),
            None => EventHandlingStatus::Ignored,
        }
    }

    /// Handle LayerManageAction for root app, updating the layer stack
    pub(super) fn handle_layer_action(&mut self, action: &LayerManageAction, state: &RootState) {
        match action {
            LayerManageAction::Push(target) => {
                let layer = match LayerManager::get_layer(&target.layer, state) {
                    Ok(layer) => layer,
                    Err(e) => {
                        warn!("Not pushing {} layer: {}", target.layer, e);
                        return;
                    }
                };
                if let Some(last) = self.layers.last_mut() {
                    last.render = target.render_self;
                }
                self.layers.push(layer.into_layer_config(true));
                info!(
                    "Pushing a {} layer, current layer will {} render, new layer stack length {}",
                    target.layer,
                    if target.render_self { "still" } else { "not" },
                    self.layers.len()
                );
            }
            LayerManageAction::Pop => {
                if self.layers.len() > 1 {
                    self.layers.pop();
                }
                if let Some(last) = self.layers.last_mut() {
                    last.render = true;
                }
                info!(
                    "Popping layer, current layer stack length {}",
                    self.layers.len()
                );
            }
        }
    }

    /// Passing the action to the top layer
    pub(super) fn handle_action(&mut self, action: Action) {
        if let Some(layer) = self.layers.last_mut() {
            layer.update(action);
        }
    }

    /// Deliver a custom event, starting at the host (top) layer.
    ///
    /// A bubbling, composed event then travels down to every layer beneath
    /// the host. Returns the number of layers the event reached.
    pub(super) fn dispatch(&mut self, event: &CustomEvent) -> usize {
        let mut reached = 0;
        for layer in self.layers.iter_mut().rev() {
            layer.update(Action::Dispatch(event.clone()));
            reached += 1;
            if !(event.bubbles && event.composed) {
                break;
            }
        }
        debug!(
            "Event `{}` reached {} of {} layers",
            event.event_type,
            reached,
            self.layers.len()
        );
        reached
    }

    /// Get a new layer based on the given layer type
    fn get_layer(layer: &Layers, state: &RootState) -> Result<BoxedLayer> {
        let tx = state.action_tx.clone();
        let mut page = match layer {
            Layers::Submit => {
                Box::new(SubmitPage::new(tx.into(), &state.config, state.input_mode)?)
                    as Box<dyn Layer>
            }
            Layers::Help(help_msg) => Box::new(
                HelpPopup::new(tx.into(), help_msg.clone())
                    .ok_or_else(|| eyre!("Help message is empty"))?,
            ),
        };
        page.init();
        Ok(page.into())
    }
}
