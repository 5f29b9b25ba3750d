//! Pointer observers for board squares
//!
//! Each square entity gets three observers at spawn time:
//!
//! - `on_square_click` - forwards the click as a [`SquareClicked`] message;
//!   the networking layer turns it into a backend request. No local logic
//!   decides what the click means - that is the backend's call.
//! - `on_square_hover` / `on_square_unhover` - visual feedback on squares
//!   the backend marked as legal destinations.

use crate::core::ClientSettings;
use crate::game::events::SquareClicked;
use crate::game::resources::BoardView;
use crate::rendering::utils::{Square, SquareMaterials};
use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use std::collections::HashMap;

/// Helper to check if primary button (left click) was used
fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Resource storing original materials of squares under hover feedback
///
/// Keyed by entity so unhover can restore the exact checkerboard material
/// that was swapped out.
#[derive(Resource, Default, Debug)]
pub struct OriginalMaterials {
    materials: HashMap<Entity, Handle<StandardMaterial>>,
}

/// Observer: forward a primary-button click on a square
pub fn on_square_click(
    click: On<Pointer<Click>>,
    squares: Query<&Square>,
    mut clicks: MessageWriter<SquareClicked>,
) {
    if !is_primary(click.event.button) {
        return;
    }

    let Ok(square) = squares.get(click.entity) else {
        warn!("[INPUT] Clicked entity {:?} has no Square component", click.entity);
        return;
    };

    debug!("[INPUT] Clicked square ({}, {})", square.row, square.col);
    clicks.write(SquareClicked {
        row: square.row,
        col: square.col,
    });
}

/// Observer: highlight a legal-destination square under the cursor
///
/// Only squares the latest response marked as destinations react, and only
/// while hints are enabled; everything else keeps its checkerboard color.
pub fn on_square_hover(
    hover: On<Pointer<Over>>,
    squares: Query<&Square>,
    board: Res<BoardView>,
    settings: Res<ClientSettings>,
    materials: Res<SquareMaterials>,
    mut material_query: Query<&mut MeshMaterial3d<StandardMaterial>>,
    mut original_materials: ResMut<OriginalMaterials>,
) {
    if !settings.show_hints {
        return;
    }

    let entity = hover.entity;
    let Ok(square) = squares.get(entity) else {
        return;
    };
    if !board.is_highlighted(square.index()) {
        return;
    }

    if let Ok(mut material_handle) = material_query.get_mut(entity) {
        original_materials
            .materials
            .insert(entity, material_handle.0.clone());
        material_handle.0 = materials.highlight.clone();
        trace!(
            "[INPUT] Hover highlight on square ({}, {})",
            square.row,
            square.col
        );
    }
}

/// Observer: restore a square's checkerboard material on unhover
pub fn on_square_unhover(
    unhover: On<Pointer<Out>>,
    mut material_query: Query<&mut MeshMaterial3d<StandardMaterial>>,
    mut original_materials: ResMut<OriginalMaterials>,
) {
    let entity = unhover.entity;
    if let Some(original_handle) = original_materials.materials.remove(&entity) {
        if let Ok(mut material_handle) = material_query.get_mut(entity) {
            material_handle.0 = original_handle;
        }
    }
}

/// Plugin registering the pointer interaction resources
pub struct PointerEventsPlugin;

impl Plugin for PointerEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OriginalMaterials>();
    }
}
