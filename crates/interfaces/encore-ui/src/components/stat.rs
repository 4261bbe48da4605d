use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use encore_app_core::MetricTileVm;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, tiles: &[MetricTileVm]) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        gap: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        for tile in tiles {
            draw_tile(&mut *tui, tile);
        }
    });
}

fn draw_tile<'a>(tui: impl TuiBuilderLogic<'a>, tile: &MetricTileVm) {
    let (badge_col, arrow) = if tile.positive {
        (COL_SUCCESS, "▲")
    } else {
        (COL_DANGER, "▼")
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        gap: length(4.0),
        padding: length(12.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_CARD)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                align_items: Some(taffy::AlignItems::Center),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(&tile.label)
                        .size(11.0)
                        .color(COL_TEXT_DIM),
                );
                tui.label(
                    egui::RichText::new(format!("{arrow} {}", tile.change_label))
                        .size(10.0)
                        .strong()
                        .color(badge_col),
                );
            });

            tui.label(
                egui::RichText::new(&tile.value_label)
                    .size(22.0)
                    .strong()
                    .color(COL_TEXT),
            );
        },
    );
}
