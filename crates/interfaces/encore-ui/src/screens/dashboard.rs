use crate::components::{chart, stat};
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use encore_app_core::dashboard_vm;

const RANGES: [&str; 3] = ["Últimos 7 dias", "Últimos 30 dias", "Este ano"];

/// The range selector is display-only; the mocked series never changes.
#[derive(Default)]
pub struct DashboardScreen {
    pub range: usize,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, screen: &mut DashboardScreen) {
    let vm = dashboard_vm();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        // Title row
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(2.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("Painel de Controle")
                        .size(20.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new("Visão geral em tempo real do seu império.")
                        .size(11.0)
                        .color(COL_TEXT_DIM),
                );
            });

            tui.ui(|ui| cmd_button(ui, "EXPORTAR", "outline", true));
        });

        stat::draw(&mut *tui, &vm.tiles);

        // Chart + recent sales
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(12.0),
            align_items: Some(taffy::AlignItems::Stretch),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            // Revenue panel
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 2.0,
                flex_basis: length(0.0),
                gap: length(8.0),
                padding: length(12.0),
                ..Default::default()
            })
            .bg_add(
                TuiBackground::new()
                    .with_background_color(COL_PANEL)
                    .with_border_color(COL_BORDER)
                    .with_border_width(1.0),
                |tui| {
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        justify_content: Some(taffy::JustifyContent::SpaceBetween),
                        align_items: Some(taffy::AlignItems::Center),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.label(
                            egui::RichText::new("Visão de Receita")
                                .size(14.0)
                                .strong()
                                .color(COL_TEXT),
                        );
                        tui.ui(|ui| {
                            egui::ComboBox::from_id_salt("revenue-range")
                                .selected_text(RANGES[screen.range])
                                .show_ui(ui, |ui| {
                                    for (ix, label) in RANGES.iter().enumerate() {
                                        ui.selectable_value(&mut screen.range, ix, *label);
                                    }
                                });
                        });
                    });

                    chart::draw(&mut *tui, &vm.chart_points, &vm.chart_peak_label);
                },
            );

            // Recent sales feed
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: length(0.0),
                gap: length(6.0),
                padding: length(12.0),
                ..Default::default()
            })
            .bg_add(
                TuiBackground::new()
                    .with_background_color(COL_PANEL)
                    .with_border_color(COL_BORDER)
                    .with_border_width(1.0),
                |tui| {
                    tui.label(
                        egui::RichText::new("Vendas Recentes")
                            .size(14.0)
                            .strong()
                            .color(COL_TEXT),
                    );

                    for sale in &vm.recent {
                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Row,
                            justify_content: Some(taffy::JustifyContent::SpaceBetween),
                            align_items: Some(taffy::AlignItems::Center),
                            padding: length(6.0),
                            size: taffy::Size {
                                width: percent(1.),
                                height: auto(),
                            },
                            ..Default::default()
                        })
                        .add(|tui| {
                            tui.style(taffy::Style {
                                flex_direction: taffy::FlexDirection::Row,
                                align_items: Some(taffy::AlignItems::Center),
                                gap: length(8.0),
                                ..Default::default()
                            })
                            .add(|tui| {
                                tui.label(
                                    egui::RichText::new(&sale.initials)
                                        .size(10.0)
                                        .strong()
                                        .color(COL_SUCCESS),
                                );
                                tui.style(taffy::Style {
                                    flex_direction: taffy::FlexDirection::Column,
                                    ..Default::default()
                                })
                                .add(|tui| {
                                    tui.label(
                                        egui::RichText::new(&sale.label)
                                            .size(11.0)
                                            .strong()
                                            .color(COL_TEXT),
                                    );
                                    tui.label(
                                        egui::RichText::new(&sale.event)
                                            .size(9.0)
                                            .color(COL_TEXT_DIM),
                                    );
                                });
                            });

                            tui.label(
                                egui::RichText::new(&sale.amount_label)
                                    .size(11.0)
                                    .strong()
                                    .color(COL_SUCCESS),
                            );
                        });
                    }
                },
            );
        });
    });
}
