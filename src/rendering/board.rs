//! Board creation and rendering
//!
//! Batch-spawns the 64 board squares in a single operation and attaches the
//! pointer observers to each. The board exists only in the InGame state;
//! `DespawnOnExit` cleans it up automatically.

use crate::core::{BoardTheme, ClientSettings, GameState};
use crate::input::pointer::{on_square_click, on_square_hover, on_square_unhover};
use crate::rendering::highlights::update_highlight_markers;
use crate::rendering::utils::{Square, SquareMaterials};
use bevy::picking::pointer::PointerInteraction;
use bevy::prelude::*;

/// Marker component for board square entities
#[derive(Component)]
pub struct Board;

/// World-space position of a square's center
///
/// Columns run along X, rows along Z, so the board occupies the unit grid
/// from (0, 0) to (7, 7) and its center sits at (3.5, 0, 3.5).
pub fn square_translation(square: &Square) -> Vec3 {
    Vec3::new(square.col as f32, 0.0, square.row as f32)
}

/// Chess-notation name for a square entity, e.g. "Square e2"
///
/// Row 0 of the board string is the back rank (rank 8), matching the
/// backend's top-to-bottom orientation.
fn square_name(square: &Square) -> String {
    let file = (b'a' + square.col) as char;
    let rank = 8 - square.row;
    format!("Square {}{}", file, rank)
}

pub(crate) fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<SquareMaterials>,
) {
    let mesh = meshes.add(Plane3d::default().mesh().size(1.0, 1.0));

    // Collect all squares into a Vec, then spawn with observers attached
    let squares: Vec<_> = (0..64)
        .map(|index| {
            let square = Square::from_index(index);
            let material = materials.checkerboard(&square);

            (
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(square_translation(&square)),
                PointerInteraction::default(),
                square,
                Board,
                Name::new(square_name(&square)),
                DespawnOnExit(GameState::InGame),
            )
        })
        .collect();

    for square_bundle in squares {
        commands
            .spawn(square_bundle)
            .observe(on_square_click)
            .observe(on_square_hover)
            .observe(on_square_unhover);
    }

    debug!("[BOARD] Spawned 64 board squares");
}

/// System that rewrites the square materials when the theme changes
///
/// The material handles in [`SquareMaterials`] are shared by every square
/// entity, so updating the assets in place restyles the whole board.
pub fn apply_board_theme_system(
    settings: Res<ClientSettings>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    square_materials: Res<SquareMaterials>,
    mut last_theme: Local<Option<BoardTheme>>,
) {
    let current_theme = settings.board_theme;
    if *last_theme == Some(current_theme) {
        return;
    }
    *last_theme = Some(current_theme);

    let (light_color, dark_color) = current_theme.colors();
    if let Some(light) = materials.get_mut(&square_materials.light) {
        light.base_color = light_color;
    }
    if let Some(dark) = materials.get_mut(&square_materials.dark) {
        dark.base_color = dark_color;
    }
    if let Some(highlight) = materials.get_mut(&square_materials.highlight) {
        highlight.base_color = current_theme.highlight();
    }

    info!("[BOARD] Applied board theme {:?}", current_theme.name());
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SquareMaterials>()
            .add_systems(OnEnter(GameState::InGame), create_board)
            .add_systems(
                Update,
                (apply_board_theme_system, update_highlight_markers)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
