use std::time::Duration;

use bevy::app::{App, FixedUpdate, Plugin, Startup, Update};
use bevy::asset::{Assets, Handle};
use bevy::core_pipeline::clear_color::ClearColorConfig;
use bevy::core_pipeline::core_2d::{Camera2d, Camera2dBundle};
use bevy::ecs::component::Component;
use bevy::ecs::query::With;
use bevy::ecs::system::{Commands, Query, ResMut, Resource};
use bevy::log::{info, trace};
use bevy::math::Vec2;
use bevy::render::color::Color;
use bevy::render::texture::Image;
use bevy::sprite::{Sprite, SpriteBundle};
use bevy::window::{PrimaryWindow, Window};
use rand::rngs::StdRng;
use rand::SeedableRng;
use strum_macros::Display;

use crate::gui::brush::cell_size;
use crate::physics::fallingsand::data::sand_grid::{SandGrid, SandGridError};
use crate::physics::fallingsand::elements::movement::tie_break::RngTieBreak;
use crate::physics::fallingsand::util::vectors::RcVector;
use crate::physics::util::clock::Clock;

/// Used to help identify our main camera
#[derive(Component)]
pub struct MainCamera;

/// Put this alongside the sprite the sand grid is drawn onto
#[derive(Component, Debug, Clone, Copy)]
pub struct SandSprite;

/// Whether the fixed timestep should advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlayPauseMode {
    Play,
    /// Advance exactly one tick, then pause
    Step,
    Pause,
}

pub struct SandboxBuilder {
    rows: usize,
    cols: usize,
    tick_interval: Duration,
    viewport_size: f32,
    seed: Option<u64>,
    paused: bool,
}

impl Default for SandboxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SandboxBuilder {
    pub fn new() -> Self {
        Self {
            rows: 50,
            cols: 50,
            tick_interval: Duration::from_millis(10),
            viewport_size: 500.0,
            seed: None,
            paused: false,
        }
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn viewport_size(mut self, viewport_size: f32) -> Self {
        self.viewport_size = viewport_size;
        self
    }

    /// Seed the tie break, leave unset to seed from entropy
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn build(&self) -> Result<SandboxData, SandGridError> {
        let sand_grid = SandGrid::new_empty(self.rows, self.cols)?;
        info!("Created {}x{} sand grid", self.rows, self.cols);
        let rng = self
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Ok(SandboxData {
            sand_grid,
            clock: Clock::new(),
            tie_break: RngTieBreak(rng),
            play_pause: if self.paused {
                PlayPauseMode::Pause
            } else {
                PlayPauseMode::Play
            },
            tick_interval: self.tick_interval,
            viewport_size: self.viewport_size,
            dirty: true,
        })
    }
}

/// The store for the simulation, owned by the app rather than the engine
/// The tick system and the brush both mutate it through bevy, which
/// serializes access for us.
#[derive(Resource)]
pub struct SandboxData {
    sand_grid: SandGrid,
    clock: Clock,
    tie_break: RngTieBreak<StdRng>,
    play_pause: PlayPauseMode,
    tick_interval: Duration,
    viewport_size: f32,
    /// Whether the texture is out of date
    dirty: bool,
}

/* Getters & Setters */
impl SandboxData {
    pub fn get_sand_grid(&self) -> &SandGrid {
        &self.sand_grid
    }
    pub fn get_clock(&self) -> Clock {
        self.clock
    }
    pub fn get_play_pause(&self) -> PlayPauseMode {
        self.play_pause
    }
    pub fn set_play_pause(&mut self, play_pause: PlayPauseMode) {
        self.play_pause = play_pause;
    }
    pub fn get_tick_interval(&self) -> Duration {
        self.tick_interval
    }
    pub fn get_viewport_size(&self) -> f32 {
        self.viewport_size
    }
    /// Returns whether the texture needs redrawing, and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Modifiers
impl SandboxData {
    /// Advance the simulation by one tick, if the mode allows it
    /// Returns None when paused, otherwise whether anything moved
    pub fn tick(&mut self) -> Option<bool> {
        match self.play_pause {
            PlayPauseMode::Pause => return None,
            PlayPauseMode::Step => self.play_pause = PlayPauseMode::Pause,
            PlayPauseMode::Play => {}
        }
        let next = self.sand_grid.step(&mut self.tie_break);
        let changed = next != self.sand_grid;
        self.sand_grid = next;
        self.clock.update(self.tick_interval);
        self.dirty |= changed;
        Some(changed)
    }

    /// Drop a grain of sand at pos
    pub fn activate(&mut self, pos: RcVector) -> Result<(), SandGridError> {
        self.sand_grid.activate_mut(pos)?;
        self.dirty = true;
        Ok(())
    }

    /// Empty the grid, keeping its size
    pub fn clear(&mut self) {
        let num_rows = self.sand_grid.get_num_rows();
        let num_cols = self.sand_grid.get_num_cols();
        // Same dimensions as a grid that already exists, so this cannot fail
        if let Ok(sand_grid) = SandGrid::new_empty(num_rows, num_cols) {
            self.replace_grid(sand_grid);
        }
    }

    /// Recreate the grid with new dimensions, leaves the old one on error
    pub fn resize(&mut self, num_rows: usize, num_cols: usize) -> Result<(), SandGridError> {
        let sand_grid = SandGrid::new_empty(num_rows, num_cols)?;
        info!("Resized sand grid to {}x{}", num_rows, num_cols);
        self.replace_grid(sand_grid);
        Ok(())
    }

    fn replace_grid(&mut self, sand_grid: SandGrid) {
        self.sand_grid = sand_grid;
        self.clock = Clock::new();
        self.dirty = true;
    }
}

/// A plugin that adds the sandbox systems
/// Expects a [SandboxData] resource to already be inserted
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
        app.add_systems(FixedUpdate, Self::process_system);
        app.add_systems(Update, Self::draw_system);
    }
}

/// Bevy Systems
impl SandboxPlugin {
    /// Spawn the camera and the sprite the grid is painted onto
    pub fn setup(
        mut commands: Commands,
        mut images: ResMut<Assets<Image>>,
        mut sandbox: ResMut<SandboxData>,
    ) {
        commands.spawn((
            Camera2dBundle {
                camera_2d: Camera2d {
                    clear_color: ClearColorConfig::Custom(Color::rgb(0.0, 0.0, 0.0)),
                },
                ..Default::default()
            },
            MainCamera,
        ));

        let image = sandbox.get_sand_grid().get_texture().to_bevy_image();
        let size = sandbox.get_viewport_size();
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    custom_size: Some(Vec2::new(size, size)),
                    ..Default::default()
                },
                texture: images.add(image),
                ..Default::default()
            },
            SandSprite,
        ));
        sandbox.take_dirty();
    }

    /// Run this system on the fixed timestep to advance the simulation
    pub fn process_system(mut sandbox: ResMut<SandboxData>) {
        if let Some(changed) = sandbox.tick() {
            trace!(
                "Tick {} changed: {}",
                sandbox.get_clock().get_current_tick(),
                changed
            );
        }
    }

    /// Upload the grid to its texture when it changed, and keep the sprite
    /// sized to the window
    pub fn draw_system(
        mut sandbox: ResMut<SandboxData>,
        mut images: ResMut<Assets<Image>>,
        mut sprites: Query<(&Handle<Image>, &mut Sprite), With<SandSprite>>,
        windows: Query<&Window, With<PrimaryWindow>>,
    ) {
        let viewport = windows
            .get_single()
            .map(|window| window.width().min(window.height()))
            .unwrap_or(sandbox.get_viewport_size());
        let num_rows = sandbox.get_sand_grid().get_num_rows();
        let num_cols = sandbox.get_sand_grid().get_num_cols();
        let cell = cell_size(viewport, num_rows, num_cols);
        let redraw = sandbox.take_dirty();
        for (handle, mut sprite) in sprites.iter_mut() {
            sprite.custom_size = Some(Vec2::new(num_cols as f32 * cell, num_rows as f32 * cell));
            if redraw {
                if let Some(image) = images.get_mut(handle) {
                    *image = sandbox.get_sand_grid().get_texture().to_bevy_image();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sandbox() -> SandboxData {
        SandboxBuilder::new().rows(4).cols(3).seed(5).build().unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let sandbox = SandboxBuilder::new().build().unwrap();
        assert_eq!(sandbox.get_sand_grid().get_num_rows(), 50);
        assert_eq!(sandbox.get_sand_grid().get_num_cols(), 50);
        assert_eq!(sandbox.get_tick_interval(), Duration::from_millis(10));
        assert_eq!(sandbox.get_viewport_size(), 500.0);
        assert_eq!(sandbox.get_play_pause(), PlayPauseMode::Play);
    }

    #[test]
    fn test_builder_rejects_zero_dimensions() {
        assert!(SandboxBuilder::new().rows(0).build().is_err());
        assert!(SandboxBuilder::new().cols(0).build().is_err());
    }

    #[test]
    fn test_tick_advances_grid_and_clock() {
        let mut sandbox = sandbox();
        sandbox.activate(RcVector::new(0, 1)).unwrap();
        assert_eq!(sandbox.tick(), Some(true));
        assert_eq!(
            sandbox.get_sand_grid().get(RcVector::new(1, 1)),
            crate::physics::fallingsand::elements::cell::Cell::Filled
        );
        assert_eq!(sandbox.get_clock().get_current_tick(), 1);
        assert_eq!(
            sandbox.get_clock().get_current_time(),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_settled_tick_reports_no_change() {
        let mut sandbox = sandbox();
        sandbox.activate(RcVector::new(3, 0)).unwrap();
        sandbox.take_dirty();
        assert_eq!(sandbox.tick(), Some(false));
        assert!(!sandbox.take_dirty());
    }

    #[test]
    fn test_pause_and_step() {
        let mut sandbox = SandboxBuilder::new()
            .rows(4)
            .cols(3)
            .paused(true)
            .build()
            .unwrap();
        sandbox.activate(RcVector::new(0, 0)).unwrap();
        assert_eq!(sandbox.tick(), None);
        assert_eq!(sandbox.get_clock().get_current_tick(), 0);

        sandbox.set_play_pause(PlayPauseMode::Step);
        assert_eq!(sandbox.tick(), Some(true));
        assert_eq!(sandbox.get_play_pause(), PlayPauseMode::Pause);
        assert_eq!(sandbox.tick(), None);
        assert_eq!(sandbox.get_clock().get_current_tick(), 1);
    }

    #[test]
    fn test_activate_out_of_bounds_is_reported() {
        let mut sandbox = sandbox();
        sandbox.take_dirty();
        assert!(sandbox.activate(RcVector::new(4, 0)).is_err());
        assert!(!sandbox.take_dirty());
        assert_eq!(sandbox.get_sand_grid().count_filled(), 0);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut sandbox = sandbox();
        sandbox.activate(RcVector::new(0, 0)).unwrap();
        sandbox.tick();
        sandbox.clear();
        assert_eq!(sandbox.get_sand_grid().count_filled(), 0);
        assert_eq!(sandbox.get_sand_grid().get_num_rows(), 4);
        assert_eq!(sandbox.get_clock().get_current_tick(), 0);

        sandbox.resize(8, 9).unwrap();
        assert_eq!(sandbox.get_sand_grid().get_num_rows(), 8);
        assert_eq!(sandbox.get_sand_grid().get_num_cols(), 9);

        assert!(sandbox.resize(0, 9).is_err());
        assert_eq!(sandbox.get_sand_grid().get_num_rows(), 8);
    }
}
