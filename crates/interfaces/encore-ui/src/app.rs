use crate::components::header;
use crate::screens::{admin, dashboard, event, home, wizard};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use encore_app_core::{EncoreApplication, Route};

pub struct EncoreUiApp {
    core: EncoreApplication,
    home: home::HomeScreen,
    event: event::EventScreen,
    dashboard: dashboard::DashboardScreen,
}

impl EncoreUiApp {
    pub fn new(core: EncoreApplication) -> Self {
        Self {
            core,
            home: home::HomeScreen::default(),
            event: event::EventScreen::default(),
            dashboard: dashboard::DashboardScreen::default(),
        }
    }
}

impl eframe::App for EncoreUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_task_events();

        // Hidden master-console access; the web build hid this behind an
        // unlinked URL.
        if ctx.input(|i| i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::M)) {
            self.core.navigate(Route::Admin);
        }

        ctx.style_mut(|style| {
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(44.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp =
                            header::draw(tui, &self.core.state.route, self.core.is_busy());
                        if let Some(route) = resp.navigate_to {
                            self.core.navigate(route);
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Scroll,
                        },
                        padding: length(16.0),
                        gap: length(8.0),
                        size: percent(1.),
                        ..Default::default()
                    })
                    .add(|tui| match self.core.state.route.clone() {
                        Route::Home => home::draw(tui, &mut self.home, &mut self.core),
                        Route::EventDetail(id) => {
                            event::draw(tui, &mut self.event, &mut self.core, &id)
                        }
                        Route::Dashboard => dashboard::draw(tui, &mut self.dashboard),
                        Route::CreateEvent => wizard::draw(tui, &mut self.core),
                        Route::Admin => admin::draw(tui, &mut self.core),
                    });
                });
        });

        // Keep repainting while a background task is pending so its result
        // lands without waiting for input.
        if self.core.is_busy() {
            ctx.request_repaint();
        }
    }
}
