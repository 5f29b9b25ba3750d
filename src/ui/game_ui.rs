//! HUD for the board view
//!
//! Two egui layers around the 3D board:
//!
//! - a top panel with the backend's two message lines and an in-flight
//!   spinner
//! - a bottom panel with the backend's action buttons plus the local
//!   settings controls (move hints, board theme)
//!
//! The connecting overlay covers the screen until the initial response
//! arrives. UI systems guard on `ctx_mut()` so a context mid-transition is
//! skipped rather than crashed on.

use crate::core::{BoardTheme, ClientSettings, GameState};
use crate::game::events::ActionPressed;
use crate::game::resources::{ActionButtons, StatusMessages};
use crate::networking::FetchTask;
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

/// Full-screen overlay shown while the initial board request is pending
pub fn connecting_ui(mut contexts: EguiContexts, messages: Res<StatusMessages>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(UiColors::BG_DARK))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(220.0);
                ui.label(
                    egui::RichText::new("REMOTE CHESS")
                        .size(44.0)
                        .strong()
                        .color(UiColors::TEXT_PRIMARY),
                );
                ui.add_space(40.0);
                ui.spinner();
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(&messages.message2)
                        .size(16.0)
                        .color(UiColors::TEXT_TERTIARY),
                );
            });
        });
}

/// In-game HUD: message lines on top, action buttons and settings below
pub fn board_hud_ui(
    mut contexts: EguiContexts,
    messages: Res<StatusMessages>,
    buttons: Res<ActionButtons>,
    mut settings: ResMut<ClientSettings>,
    in_flight: Option<Res<FetchTask>>,
    mut actions: MessageWriter<ActionPressed>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("status_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&messages.message1)
                            .size(18.0)
                            .strong()
                            .color(UiColors::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(&messages.message2)
                            .size(14.0)
                            .color(UiColors::TEXT_SECONDARY),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Request outstanding; the board stays interactive
                    if in_flight.is_some() {
                        ui.spinner();
                    }
                });
            });
            ui.add_space(6.0);
        });

    egui::TopBottomPanel::bottom("action_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for label in &buttons.labels {
                    let button = egui::Button::new(
                        egui::RichText::new(label)
                            .size(16.0)
                            .strong()
                            .color(egui::Color32::BLACK),
                    )
                    .fill(UiColors::ACCENT_GOLD)
                    .stroke(egui::Stroke::new(1.0, UiColors::BORDER))
                    .corner_radius(egui::CornerRadius::same(6));

                    if ui.add(button).clicked() {
                        actions.write(ActionPressed {
                            label: label.clone(),
                        });
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Read into locals so widget &muts don't trip change
                    // detection every frame
                    let mut show_hints = settings.show_hints;
                    let mut theme = settings.board_theme;

                    egui::ComboBox::from_id_salt("board_theme")
                        .selected_text(theme.name())
                        .show_ui(ui, |ui| {
                            for candidate in BoardTheme::ALL {
                                ui.selectable_value(&mut theme, candidate, candidate.name());
                            }
                        });
                    ui.checkbox(&mut show_hints, "Move hints");

                    if show_hints != settings.show_hints {
                        settings.show_hints = show_hints;
                    }
                    if theme != settings.board_theme {
                        settings.board_theme = theme;
                    }
                });
            });
            ui.add_space(8.0);
        });
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (
                connecting_ui.run_if(in_state(GameState::Connecting)),
                board_hud_ui.run_if(in_state(GameState::InGame)),
            ),
        );
    }
}
