//! Piece glyph rendering
//!
//! Maps the board string's occupant characters onto textured quads floating
//! just above their squares. The backend's wire convention is uppercase for
//! black and lowercase for white; any unrecognized character (the backend
//! sends '0') renders nothing.
//!
//! Glyph textures live under `assets/pieces/`, one image per (color, kind)
//! pair, loaded lazily through the `AssetServer` and shared across rebuilds
//! via [`GlyphAssets`].

use crate::core::GameState;
use crate::game::resources::BoardView;
use crate::rendering::board::square_translation;
use crate::rendering::utils::Square;
use bevy::picking::Pickable;
use bevy::prelude::*;
use std::collections::HashMap;

/// Side length of a glyph quad relative to the 1.0 square
const GLYPH_SIZE: f32 = 0.8;

/// Height offset keeping glyphs above the square and highlight overlays
const GLYPH_LIFT: f32 = 0.02;

#[derive(Clone, Copy, Debug, Component, PartialEq, Eq)]
pub enum PieceColor {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, Component, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A piece occupying a square, as decoded from the board string
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    /// All 12 recognized pieces, in wire-character order
    pub const ALL: [Piece; 12] = {
        use PieceColor::*;
        use PieceKind::*;
        [
            Piece { color: Black, kind: Bishop },
            Piece { color: Black, kind: King },
            Piece { color: Black, kind: Knight },
            Piece { color: Black, kind: Pawn },
            Piece { color: Black, kind: Queen },
            Piece { color: Black, kind: Rook },
            Piece { color: White, kind: Bishop },
            Piece { color: White, kind: King },
            Piece { color: White, kind: Knight },
            Piece { color: White, kind: Pawn },
            Piece { color: White, kind: Queen },
            Piece { color: White, kind: Rook },
        ]
    };

    /// Decode a board-string character; uppercase is black, lowercase white
    pub fn from_occupant(c: char) -> Option<Self> {
        use PieceColor::*;
        use PieceKind::*;
        let piece = match c {
            'B' => Piece { color: Black, kind: Bishop },
            'K' => Piece { color: Black, kind: King },
            'N' => Piece { color: Black, kind: Knight },
            'P' => Piece { color: Black, kind: Pawn },
            'Q' => Piece { color: Black, kind: Queen },
            'R' => Piece { color: Black, kind: Rook },
            'b' => Piece { color: White, kind: Bishop },
            'k' => Piece { color: White, kind: King },
            'n' => Piece { color: White, kind: Knight },
            'p' => Piece { color: White, kind: Pawn },
            'q' => Piece { color: White, kind: Queen },
            'r' => Piece { color: White, kind: Rook },
            _ => return None,
        };
        Some(piece)
    }

    /// The wire character this piece decodes from
    pub fn occupant(&self) -> char {
        let c = match self.kind {
            PieceKind::Bishop => 'b',
            PieceKind::King => 'k',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
        };
        match self.color {
            PieceColor::Black => c.to_ascii_uppercase(),
            PieceColor::White => c,
        }
    }

    /// Asset path of this piece's glyph texture
    pub fn texture_path(&self) -> &'static str {
        use PieceColor::*;
        use PieceKind::*;
        match (self.color, self.kind) {
            (Black, Bishop) => "pieces/black_bishop.png",
            (Black, King) => "pieces/black_king.png",
            (Black, Knight) => "pieces/black_knight.png",
            (Black, Pawn) => "pieces/black_pawn.png",
            (Black, Queen) => "pieces/black_queen.png",
            (Black, Rook) => "pieces/black_rook.png",
            (White, Bishop) => "pieces/white_bishop.png",
            (White, King) => "pieces/white_king.png",
            (White, Knight) => "pieces/white_knight.png",
            (White, Pawn) => "pieces/white_pawn.png",
            (White, Queen) => "pieces/white_queen.png",
            (White, Rook) => "pieces/white_rook.png",
        }
    }

    /// Human-readable name, used as the entity `Name`
    pub fn label(&self) -> &'static str {
        use PieceColor::*;
        use PieceKind::*;
        match (self.color, self.kind) {
            (Black, Bishop) => "black bishop",
            (Black, King) => "black king",
            (Black, Knight) => "black knight",
            (Black, Pawn) => "black pawn",
            (Black, Queen) => "black queen",
            (Black, Rook) => "black rook",
            (White, Bishop) => "white bishop",
            (White, King) => "white king",
            (White, Knight) => "white knight",
            (White, Pawn) => "white pawn",
            (White, Queen) => "white queen",
            (White, Rook) => "white rook",
        }
    }
}

/// Resource caching the shared glyph quad and one material per piece
///
/// Built once at startup so piece rebuilds reuse handles instead of
/// reloading textures.
#[derive(Resource)]
pub struct GlyphAssets {
    quad: Handle<Mesh>,
    by_occupant: HashMap<char, Handle<StandardMaterial>>,
}

impl FromWorld for GlyphAssets {
    fn from_world(world: &mut World) -> Self {
        let asset_server = world.resource::<AssetServer>().clone();
        let quad = world
            .resource_mut::<Assets<Mesh>>()
            .add(Plane3d::default().mesh().size(GLYPH_SIZE, GLYPH_SIZE));

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let mut by_occupant = HashMap::new();
        for piece in Piece::ALL {
            let material = materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(piece.texture_path())),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            });
            by_occupant.insert(piece.occupant(), material);
        }

        Self { quad, by_occupant }
    }
}

/// System that rebuilds the piece glyphs whenever the board view changes
///
/// The whole set is despawned and respawned from the board string, so the
/// display can never drift from the applied response. Glyphs ignore picking
/// so clicks always land on the square beneath them.
pub fn sync_piece_glyphs(
    mut commands: Commands,
    board: Res<BoardView>,
    glyphs: Res<GlyphAssets>,
    existing: Query<Entity, With<Piece>>,
) {
    if !board.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let mut spawned = 0;
    for index in 0..BoardView::SQUARES {
        let occupant = board.occupant(index);
        let Some(piece) = Piece::from_occupant(occupant) else {
            continue;
        };
        let Some(material) = glyphs.by_occupant.get(&occupant) else {
            continue;
        };

        let square = Square::from_index(index);
        commands.spawn((
            Mesh3d(glyphs.quad.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(square_translation(&square) + Vec3::Y * GLYPH_LIFT),
            piece,
            Pickable::IGNORE,
            Name::new(piece.label()),
            DespawnOnExit(GameState::InGame),
        ));
        spawned += 1;
    }

    debug!("[BOARD] Rebuilt {} piece glyphs", spawned);
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlyphAssets>().add_systems(
            Update,
            sync_piece_glyphs.run_if(in_state(GameState::InGame)),
        );
    }
}
