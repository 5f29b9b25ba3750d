use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use remotechess::core::{CorePlugin, GameState};
use remotechess::game::GamePlugin;
use remotechess::input::PointerEventsPlugin;
use remotechess::networking::{ApiClient, NetworkingPlugin};
use remotechess::rendering::{BoardPlugin, PiecePlugin};
use remotechess::ui::UiPlugin;

const WINDOW_WIDTH: u32 = 1024;
const WINDOW_HEIGHT: u32 = 768;

/// Center of the 8x8 board in world space
const BOARD_CENTER: Vec3 = Vec3::new(3.5, 0.0, 3.5);

#[derive(Parser, Debug)]
#[command(name = "remotechess", version, about = "Chessboard client for a remote chess-playing backend")]
struct Args {
    /// Backend origin, e.g. https://chess.example.com
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server: String,
}

fn main() {
    let args = Args::parse();

    let window = Window {
        title: "remotechess".to_string(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };
    let primary_window = Some(window);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .add_plugins(EguiPlugin { enable_multipass_for_primary_context: false, ..default() })
        .add_plugins(MeshPickingPlugin)
        .init_state::<GameState>()
        .insert_resource(ApiClient::new(args.server))
        .add_plugins((
            CorePlugin,
            GamePlugin,
            NetworkingPlugin,
            BoardPlugin,
            PiecePlugin,
            PointerEventsPlugin,
            UiPlugin,
        ))
        .add_systems(Startup, setup_scene)
        .run();
}

fn setup_scene(mut commands: Commands) {
    // Lighting
    commands.spawn((
        PointLight {
            intensity: 100000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(BOARD_CENTER + Vec3::new(0.5, 8.0, 0.5)),
    ));

    // Top-down camera over the board; row 0 renders at the top edge
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(BOARD_CENTER + Vec3::Y * 11.0)
            .looking_at(BOARD_CENTER, Vec3::NEG_Z),
    ));
}
