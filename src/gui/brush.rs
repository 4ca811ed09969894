use bevy::app::{App, Plugin, Update};
use bevy::ecs::query::With;
use bevy::ecs::system::{Query, Res, ResMut};
use bevy::input::mouse::MouseButton;
use bevy::input::Input;
use bevy::log::{debug, warn};
use bevy::math::Vec2;
use bevy::render::camera::Camera;
use bevy::transform::components::GlobalTransform;
use bevy::window::{PrimaryWindow, Window};
use bevy_egui::EguiContexts;

use crate::entities::sandbox::{MainCamera, SandboxData};
use crate::physics::fallingsand::util::vectors::RcVector;

/// The brush drops sand into whichever cell is under the cursor
/// for as long as the left mouse button is held.
pub struct BrushPlugin;

impl Plugin for BrushPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_brush_system);
    }
}

/// The side length of one cell on screen
/// The grid is fit into a square of `viewport` so the longest side fills it
pub fn cell_size(viewport: f32, num_rows: usize, num_cols: usize) -> f32 {
    viewport / num_rows.max(num_cols).max(1) as f32
}

/// Convert a world position into the cell it lands on
/// The grid is centered on the world origin, with row 0 at the top
pub fn world_to_cell(
    world: Vec2,
    num_rows: usize,
    num_cols: usize,
    cell_size: f32,
) -> Option<RcVector> {
    if cell_size <= 0.0 {
        return None;
    }
    let x = world.x + num_cols as f32 * cell_size / 2.0;
    let y = num_rows as f32 * cell_size / 2.0 - world.y;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let pos = RcVector::new((y / cell_size) as usize, (x / cell_size) as usize);
    if pos.row >= num_rows || pos.col >= num_cols {
        return None;
    }
    Some(pos)
}

/// Activate the cell under the cursor while the mouse is down
pub fn apply_brush_system(
    mouse: Res<Input<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut contexts: EguiContexts,
    mut sandbox: ResMut<SandboxData>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }
    // Clicks on the control window are not meant for the grid
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.get_single() else {
        return;
    };
    let Some(world) = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor))
    else {
        return;
    };

    let num_rows = sandbox.get_sand_grid().get_num_rows();
    let num_cols = sandbox.get_sand_grid().get_num_cols();
    let size = cell_size(window.width().min(window.height()), num_rows, num_cols);
    if let Some(pos) = world_to_cell(world, num_rows, num_cols, size) {
        debug!("Applying brush at {}", pos);
        if let Err(err) = sandbox.activate(pos) {
            warn!("Could not apply brush: {}", err);
        }
    }
}
