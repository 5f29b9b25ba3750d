//! Legal-move highlight markers
//!
//! Overlays a highlight quad on every square the moves string flags with
//! 'X'. Markers are rebuilt each frame from [`BoardView`], so they always
//! reflect the latest applied response; the `show_hints` setting suppresses
//! them without touching the underlying flags.

use crate::core::ClientSettings;
use crate::game::resources::BoardView;
use crate::rendering::board::Board;
use crate::rendering::utils::{Square, SquareMaterials};
use bevy::prelude::*;

/// Marker component for highlight overlay entities
#[derive(Component)]
pub struct HighlightMarker;

/// System that shows/hides the highlight overlays
pub fn update_highlight_markers(
    mut commands: Commands,
    settings: Res<ClientSettings>,
    board: Res<BoardView>,
    square_query: Query<(Entity, &Square), With<Board>>,
    marker_query: Query<Entity, (With<HighlightMarker>, Without<Board>)>,
    materials: Res<SquareMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let should_show = settings.show_hints && board.has_highlights();

    // Remove all existing markers, then rebuild from the current view
    for entity in marker_query.iter() {
        commands.entity(entity).despawn();
    }

    if !should_show {
        return;
    }

    for (entity, square) in square_query.iter() {
        if board.is_highlighted(square.index()) {
            commands.entity(entity).with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.add(Plane3d::default().mesh().size(0.9, 0.9))),
                    MeshMaterial3d(materials.highlight.clone()),
                    Transform::from_translation(Vec3::new(0.0, 0.01, 0.0)),
                    HighlightMarker,
                    Name::new("Move Highlight"),
                ));
            });
        }
    }
}
