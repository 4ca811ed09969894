//! This module contains all the GUI related code.
//! Things that are drawn to via screen coordinates rather than world coordinates.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod brush;
pub mod control_window;

pub struct GuiPluginGroup;

impl PluginGroup for GuiPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(brush::BrushPlugin)
            .add(control_window::ControlWindowPlugin)
    }
}
