use crate::game::events::{ActionPressed, SquareClicked};
use crate::game::resources::{ActionButtons, BoardView, GameSession, StatusMessages};
use bevy::prelude::*;

/// Registers the view-state resources and interaction messages
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardView>()
            .init_resource::<StatusMessages>()
            .init_resource::<ActionButtons>()
            .init_resource::<GameSession>();

        app.add_message::<SquareClicked>()
            .add_message::<ActionPressed>();
    }
}
