use bevy::prelude::*;

/// A board square was clicked; `row`/`col` are in 0..8
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Message)]
pub struct SquareClicked {
    pub row: u8,
    pub col: u8,
}

/// An action button in the HUD was pressed, identified by its raw label
#[derive(Event, Debug, Clone, PartialEq, Eq, Message)]
pub struct ActionPressed {
    pub label: String,
}
