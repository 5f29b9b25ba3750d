//! Board rendering utilities - square component and materials
//!
//! - **Square**: component identifying a board square by (row, col)
//! - **SquareMaterials**: resource holding the material handles for the
//!   checkerboard colors and the legal-move highlight
//!
//! # Checkerboard
//!
//! Square colors alternate by (row + col) parity: an even sum is a light
//! square. With index = row*8+col this puts a light square at index 0, the
//! same orientation the backend's board string assumes.

use crate::core::ClientSettings;
use bevy::prelude::*;

/// One of the 64 board cells, addressed by (row, col) with both in 0..8
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Square for a 0..64 board-string index
    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }

    /// Index into the 64-character board string (row * 8 + col)
    pub fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Whether this square takes the light checkerboard color
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

/// Resource holding the board's material handles
///
/// Initialized from the default theme; [`crate::rendering::board`]'s theme
/// system rewrites the colors in place when the setting changes, so every
/// square entity restyles without respawning.
#[derive(Resource)]
pub struct SquareMaterials {
    pub light: Handle<StandardMaterial>,
    pub dark: Handle<StandardMaterial>,
    pub highlight: Handle<StandardMaterial>,
}

impl SquareMaterials {
    /// The checkerboard material for a square, by parity
    pub fn checkerboard(&self, square: &Square) -> Handle<StandardMaterial> {
        if square.is_light() {
            self.light.clone()
        } else {
            self.dark.clone()
        }
    }
}

impl FromWorld for SquareMaterials {
    fn from_world(world: &mut World) -> Self {
        let theme = ClientSettings::default().board_theme;
        let (light, dark) = theme.colors();
        let highlight = theme.highlight();

        let mut materials = world
            .get_resource_mut::<Assets<StandardMaterial>>()
            .expect("Assets<StandardMaterial> should be initialized before SquareMaterials");
        SquareMaterials {
            light: materials.add(light),
            dark: materials.add(dark),
            highlight: materials.add(highlight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_index_round_trip() {
        for index in 0..64 {
            let square = Square::from_index(index);
            assert_eq!(square.index(), index);
            assert!(square.row < 8);
            assert!(square.col < 8);
        }
    }

    #[test]
    fn test_index_formula() {
        let square = Square { row: 2, col: 3 };
        assert_eq!(square.index(), 19);
        assert_eq!(Square::from_index(19), square);
    }

    #[test]
    fn test_first_square_is_light() {
        assert!(Square::from_index(0).is_light());
    }

    #[test]
    fn test_last_square_is_light() {
        //! (7 + 7) is even, so h-corner matches the a-corner color
        assert!(Square { row: 7, col: 7 }.is_light());
    }

    #[test]
    fn test_checkerboard_alternates_horizontally() {
        for row in 0..8 {
            for col in 0..7 {
                let a = Square { row, col };
                let b = Square { row, col: col + 1 };
                assert_ne!(a.is_light(), b.is_light());
            }
        }
    }

    #[test]
    fn test_checkerboard_alternates_vertically() {
        for row in 0..7 {
            for col in 0..8 {
                let a = Square { row, col };
                let b = Square { row: row + 1, col };
                assert_ne!(a.is_light(), b.is_light());
            }
        }
    }

    #[test]
    fn test_diagonal_squares_share_color() {
        let squares = [
            Square { row: 0, col: 0 },
            Square { row: 2, col: 2 },
            Square { row: 4, col: 4 },
        ];
        assert!(squares.iter().all(|s| s.is_light()));
    }

    #[test]
    fn test_parity_over_all_indices() {
        //! Color is a pure function of (row + col) parity for every index
        for index in 0..64 {
            let square = Square::from_index(index);
            let expected = (square.row + square.col) % 2 == 0;
            assert_eq!(square.is_light(), expected, "index {}", index);
        }
    }
}
