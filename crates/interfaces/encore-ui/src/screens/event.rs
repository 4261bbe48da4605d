use crate::theme::*;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use encore_app_core::{event_detail_vm, EncoreApplication, EventDetailVm};
use encore_core::EventId;

/// Buyer fields live here, not in the domain state: the checkout is fully
/// simulated and nothing typed into it goes anywhere.
#[derive(Default)]
pub struct EventScreen {
    pub buyer_name: String,
    pub buyer_email: String,
    pub card_selected: bool,
}

#[derive(Default)]
struct Actions {
    increment: bool,
    decrement: bool,
    open_checkout: bool,
    close_checkout: bool,
    pay: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    screen: &mut EventScreen,
    app: &mut EncoreApplication,
    id: &EventId,
) {
    let Some(vm) = event_detail_vm(&app.state, id) else {
        tui.colored_label(COL_TEXT_DIM, "Evento não encontrado");
        return;
    };
    let mut act = Actions::default();

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
        draw_banner(&mut *tui, &vm);

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
            draw_about(&mut *tui, &vm);
            draw_tickets(&mut *tui, &vm, &mut act);
        });

        if vm.modal_open {
            draw_checkout_modal(&mut *tui, screen, &vm, &mut act);
        }
    });

    if act.decrement {
        app.decrement_tickets();
    }
    if act.increment {
        app.increment_tickets();
    }
    if act.open_checkout {
        app.open_checkout();
    }
    if act.pay {
        app.confirm_purchase();
    }
    if act.close_checkout {
        app.close_checkout();
    }
}

fn draw_banner<'a>(tui: impl TuiBuilderLogic<'a>, vm: &EventDetailVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        justify_content: Some(taffy::JustifyContent::FlexEnd),
        gap: length(4.0),
        padding: length(16.0),
        size: taffy::Size {
            width: percent(1.),
            height: length(150.0),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_ACCENT_DARK.linear_multiply(0.2))
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new(vm.category_label.to_uppercase())
                    .size(10.0)
                    .extra_letter_spacing(2.0)
                    .strong()
                    .color(COL_ACCENT),
            );
            tui.label(
                egui::RichText::new(&vm.event.title)
                    .size(26.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(format!("Apresentado por {}", vm.event.organizer))
                    .size(11.0)
                    .color(COL_TEXT_DIM),
            );
        },
    );
}

fn draw_about<'a>(tui: impl TuiBuilderLogic<'a>, vm: &EventDetailVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 2.0,
        flex_basis: length(0.0),
        gap: length(8.0),
        padding: length(16.0),
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
                gap: length(24.0),
                ..Default::default()
            })
            .add(|tui| {
                info_cell(&mut *tui, "DATA", &vm.date_label);
                info_cell(&mut *tui, "HORÁRIO", &vm.event.time);
            });

            tui.separator();

            tui.label(
                egui::RichText::new("Sobre este evento")
                    .size(16.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(&vm.event.description)
                    .size(12.0)
                    .color(COL_TEXT_DIM),
            );

            tui.ui(|ui| section_label(ui, "LOCALIZAÇÃO"));
            tui.label(
                egui::RichText::new(&vm.event.location)
                    .size(13.0)
                    .color(COL_TEXT),
            );
        },
    );
}

fn info_cell<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.label(
            egui::RichText::new(value)
                .size(13.0)
                .strong()
                .color(COL_TEXT),
        );
    });
}

fn draw_tickets<'a>(tui: impl TuiBuilderLogic<'a>, vm: &EventDetailVm, act: &mut Actions) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        gap: length(8.0),
        padding: length(16.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_CARD)
            .with_border_color(COL_ACCENT_DARK)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new("Ingressos")
                    .size(15.0)
                    .strong()
                    .color(COL_TEXT),
            );

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
                    egui::RichText::new(&vm.batch_name)
                        .size(13.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new(&vm.unit_price_label)
                        .size(17.0)
                        .strong()
                        .color(COL_ACCENT),
                );
            });

            // Quantity stepper, floored at one ticket
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::FlexEnd),
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .add(|tui| {
                if tui
                    .ui(|ui| ui.add(egui::Button::new("−").min_size(egui::vec2(28.0, 28.0))))
                    .clicked()
                {
                    act.decrement = true;
                }
                tui.label(
                    egui::RichText::new(vm.quantity.to_string())
                        .size(14.0)
                        .strong()
                        .color(COL_TEXT),
                );
                if tui
                    .ui(|ui| ui.add(egui::Button::new("+").min_size(egui::vec2(28.0, 28.0))))
                    .clicked()
                {
                    act.increment = true;
                }
            });

            tui.separator();

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
                tui.label(egui::RichText::new("Total").size(12.0).color(COL_TEXT_DIM));
                tui.label(
                    egui::RichText::new(&vm.total_label)
                        .size(22.0)
                        .strong()
                        .color(COL_TEXT),
                );
            });
            tui.label(
                egui::RichText::new("Taxas incluídas")
                    .size(9.0)
                    .color(COL_TEXT_DIM),
            );

            if tui
                .ui(|ui| cmd_button(ui, "COMPRAR AGORA", "primary", true))
                .clicked()
            {
                act.open_checkout = true;
            }
        },
    );
}

fn draw_checkout_modal<'a>(
    tui: impl TuiBuilderLogic<'a>,
    screen: &mut EventScreen,
    vm: &EventDetailVm,
    act: &mut Actions,
) {
    tui.ui(|ui| {
        egui::Window::new("Pagamento")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(
                egui::Frame::new()
                    .fill(COL_PANEL)
                    .stroke(egui::Stroke::new(1.0, COL_BORDER))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ui.ctx(), |ui| {
                ui.set_width(380.0);

                if let Some(receipt) = &vm.receipt {
                    // Simulated acknowledgement; nothing was recorded.
                    ui.colored_label(COL_SUCCESS, receipt);
                    ui.add_space(8.0);
                    if cmd_button(ui, "FECHAR", "primary", true).clicked() {
                        act.close_checkout = true;
                    }
                    return;
                }

                ui.label(
                    egui::RichText::new(&vm.event.title)
                        .size(13.0)
                        .strong()
                        .color(COL_TEXT),
                );
                ui.label(
                    egui::RichText::new(format!("{}x {}", vm.quantity, vm.batch_name))
                        .size(11.0)
                        .color(COL_TEXT_DIM),
                );
                ui.colored_label(
                    COL_ACCENT,
                    egui::RichText::new(&vm.total_label).size(18.0).strong(),
                );
                ui.add_space(8.0);

                section_label(ui, "DADOS PESSOAIS");
                ui.add(
                    egui::TextEdit::singleline(&mut screen.buyer_name)
                        .hint_text("Nome Completo")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut screen.buyer_email)
                        .hint_text("Endereço de E-mail")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                section_label(ui, "MÉTODO DE PAGAMENTO");
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut screen.card_selected, false, "PIX");
                    ui.selectable_value(&mut screen.card_selected, true, "Cartão");
                });
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if cmd_button(ui, &format!("PAGAR {}", vm.total_label), "success", true)
                        .clicked()
                    {
                        act.pay = true;
                    }
                    if cmd_button(ui, "CANCELAR", "ghost", true).clicked() {
                        act.close_checkout = true;
                    }
                });
            });
    });
}
