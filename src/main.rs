use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use falling_sand::entities::sandbox::SandboxBuilder;
use falling_sand::entities::EntitiesPluginGroup;
use falling_sand::gui::GuiPluginGroup;
use falling_sand::physics::fallingsand::data::sand_grid::SandGridError;

fn main() -> Result<(), SandGridError> {
    let sandbox = SandboxBuilder::new().build()?;
    let size = sandbox.get_viewport_size();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: Level::INFO,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Falling Sand".to_string(),
                        resolution: WindowResolution::new(size, size),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .insert_resource(Time::<Fixed>::from_duration(sandbox.get_tick_interval()))
        .insert_resource(sandbox)
        .add_plugins(EntitiesPluginGroup)
        .add_plugins(GuiPluginGroup)
        .run();
    Ok(())
}
