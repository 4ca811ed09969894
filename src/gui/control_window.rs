use bevy::{
    app::{App, Plugin, Update},
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::system::{Local, Res, ResMut},
    log::warn,
};
use bevy_egui::{
    egui::{self},
    EguiContexts,
};

use crate::entities::sandbox::{PlayPauseMode, SandboxData};

/// The largest grid the resize editors allow
const MAX_GRID_SIDE: usize = 500;

/// A window with the simulation controls and some stats
pub struct ControlWindowPlugin;

impl Plugin for ControlWindowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, control_window_system);
    }
}

/// Rows and columns typed into the resize editors, applied on "Resize"
#[derive(Default, Debug, Clone, Copy)]
pub struct ResizeForm {
    rows: usize,
    cols: usize,
    initialized: bool,
}

pub fn control_window_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    mut sandbox: ResMut<SandboxData>,
    mut form: Local<ResizeForm>,
) {
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    if !form.initialized {
        form.rows = sandbox.get_sand_grid().get_num_rows();
        form.cols = sandbox.get_sand_grid().get_num_cols();
        form.initialized = true;
    }
    egui::Window::new("Controls").show(contexts.ctx_mut(), |ui| {
        let clock = sandbox.get_clock();
        ui.label(format!("Mode: {}", sandbox.get_play_pause()));
        ui.label(format!("Tick: {}", clock.get_current_tick()));
        ui.label(format!(
            "Simulated: {:.2}s",
            clock.get_current_time().as_secs_f32()
        ));
        ui.label(format!(
            "Last tick: {}ms",
            clock.get_last_delta().as_millis()
        ));
        ui.label(format!("Grains: {}", sandbox.get_sand_grid().count_filled()));
        ui.label(format!("FPS: {:.0}", fps));
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Play").clicked() {
                sandbox.set_play_pause(PlayPauseMode::Play);
            }
            if ui.button("Pause").clicked() {
                sandbox.set_play_pause(PlayPauseMode::Pause);
            }
            if ui.button("Step").clicked() {
                sandbox.set_play_pause(PlayPauseMode::Step);
            }
            if ui.button("Clear").clicked() {
                sandbox.clear();
            }
        });
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Rows");
            ui.add(egui::DragValue::new(&mut form.rows).clamp_range(1..=MAX_GRID_SIDE));
            ui.label("Cols");
            ui.add(egui::DragValue::new(&mut form.cols).clamp_range(1..=MAX_GRID_SIDE));
        });
        if ui.button("Resize").clicked() {
            if let Err(err) = sandbox.resize(form.rows, form.cols) {
                warn!("Could not resize: {}", err);
            }
        }
    });
}
