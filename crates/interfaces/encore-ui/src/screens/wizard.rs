use crate::components::forms::{text_area, text_field};
use crate::theme::*;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use encore_app_core::{wizard_vm, EncoreApplication, WizardVm};
use encore_core::{EventCategory, WizardStep};

#[derive(Default)]
struct Actions {
    next: bool,
    back: bool,
    generate: bool,
    publish: bool,
    dismiss_notice: bool,
    cover: Option<(String, Vec<u8>)>,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut EncoreApplication) {
    let Some(vm) = wizard_vm(&app.state) else {
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
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(4.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("Criar Novo Evento")
                    .size(24.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new("Lance sua experiência em minutos com nossa Assistente de IA.")
                    .size(12.0)
                    .color(COL_TEXT_DIM),
            );
        });

        // Step progress segments
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::Center),
            gap: length(10.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for i in 0..WizardStep::COUNT {
                let reached = vm.step.position() >= i;
                tui.style(taffy::Style {
                    size: taffy::Size {
                        width: length(90.0),
                        height: length(6.0),
                    },
                    ..Default::default()
                })
                .ui(|ui| {
                    let rect = ui.max_rect();
                    ui.painter().rect_filled(
                        rect,
                        3.0,
                        if reached { COL_ACCENT } else { COL_BORDER },
                    );
                });
            }
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(10.0),
            padding: length(16.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_PANEL)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                if let Some(wizard) = app.state.wizard.as_mut() {
                    match vm.step {
                        WizardStep::Basics => draw_basics(&mut *tui, wizard, &mut act),
                        WizardStep::DetailsAi => draw_details(&mut *tui, wizard, &vm, &mut act),
                        WizardStep::MediaReview => draw_review(&mut *tui, wizard, &vm, &mut act),
                    }
                }
            },
        );
    });

    if act.dismiss_notice {
        app.dismiss_wizard_notice();
    }
    if let Some((file_name, bytes)) = act.cover {
        app.set_cover_image(file_name, bytes);
    }
    if act.generate {
        if let Err(e) = app.start_description_generation() {
            tracing::error!("Failed to start description generation: {e}");
        }
    }
    if act.next {
        app.advance_wizard();
    }
    if act.back {
        app.back_wizard();
    }
    if act.publish {
        if let Err(e) = app.publish_draft() {
            tracing::error!("Failed to publish draft: {e}");
        }
    }
}

fn step_header<'a>(tui: impl TuiBuilderLogic<'a>, number: &str, title: &'static str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        align_items: Some(taffy::AlignItems::Center),
        gap: length(8.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(number)
                .size(14.0)
                .strong()
                .color(COL_ACCENT),
        );
        tui.label(
            egui::RichText::new(title)
                .size(16.0)
                .strong()
                .color(COL_TEXT),
        );
    });
}

fn footer<'a>(
    tui: impl TuiBuilderLogic<'a>,
    show_back: bool,
    forward: Option<(&str, &str, bool)>,
) -> (bool, bool) {
    let mut back = false;
    let mut fwd = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(if show_back {
            taffy::JustifyContent::SpaceBetween
        } else {
            taffy::JustifyContent::FlexEnd
        }),
        align_items: Some(taffy::AlignItems::Center),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        if show_back && tui.ui(|ui| cmd_button(ui, "VOLTAR", "ghost", true)).clicked() {
            back = true;
        }
        if let Some((label, variant, enabled)) = forward {
            if tui.ui(|ui| cmd_button(ui, label, variant, enabled)).clicked() {
                fwd = true;
            }
        }
    });

    (back, fwd)
}

fn draw_basics<'a>(
    tui: impl TuiBuilderLogic<'a>,
    wizard: &mut encore_app_core::WizardState,
    act: &mut Actions,
) {
    let draft = &mut wizard.draft;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        step_header(&mut *tui, "1", "Informações Básicas");

        text_field(
            &mut *tui,
            "TÍTULO DO EVENTO",
            &mut draft.title,
            "Ex: Summit de Inovação 2024",
        );

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: length(0.0),
                gap: length(2.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.ui(|ui| section_label(ui, "CATEGORIA"));
                tui.ui(|ui| {
                    egui::ComboBox::from_id_salt("event-category")
                        .selected_text(draft.category.label())
                        .width(ui.available_width())
                        .show_ui(ui, |ui| {
                            for category in EventCategory::ALL {
                                ui.selectable_value(
                                    &mut draft.category,
                                    category,
                                    category.label(),
                                );
                            }
                        });
                });
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: length(0.0),
                ..Default::default()
            })
            .add(|tui| {
                text_field(&mut *tui, "LOCALIZAÇÃO", &mut draft.location, "Expo Center, SP");
            });
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                ..Default::default()
            })
            .add(|tui| {
                text_field(&mut *tui, "DATA", &mut draft.date, "2024-11-15");
            });
            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                ..Default::default()
            })
            .add(|tui| {
                text_field(&mut *tui, "HORÁRIO", &mut draft.time, "19:00");
            });
            tui.style(taffy::Style {
                flex_grow: 1.0,
                flex_basis: length(0.0),
                ..Default::default()
            })
            .add(|tui| {
                text_field(&mut *tui, "PREÇO (R$)", &mut draft.price, "150,00");
            });
        });

        let (_, next) = footer(&mut *tui, false, Some(("PRÓXIMO PASSO", "primary", true)));
        act.next |= next;
    });
}

fn draw_details<'a>(
    tui: impl TuiBuilderLogic<'a>,
    wizard: &mut encore_app_core::WizardState,
    vm: &WizardVm,
    act: &mut Actions,
) {
    let draft = &mut wizard.draft;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
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
            step_header(&mut *tui, "2", "Detalhes & Magia IA");
            tui.label(
                egui::RichText::new("IA POWERED")
                    .size(9.0)
                    .extra_letter_spacing(2.0)
                    .strong()
                    .color(COL_SECONDARY),
            );
        });

        tui.label(
            egui::RichText::new("Alimente a IA com pontos-chave brutos. Ela cuidará da narrativa.")
                .size(10.0)
                .color(COL_TEXT_DIM),
        );
        text_area(
            &mut *tui,
            "DESTAQUES / PROMPT",
            &mut draft.key_details,
            "- Palestrante: João Silva\n- Tópico: Futuro da IA\n- Café grátis e networking",
            3,
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
            tui.ui(|ui| section_label(ui, "DESCRIÇÃO COMPLETA"));

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if vm.generating {
                    tui.ui_add(egui::Spinner::new().color(COL_ACCENT));
                }
                let label = if vm.generating { "GERANDO..." } else { "GERAR AUTO" };
                if tui
                    .ui(|ui| cmd_button(ui, label, "outline", !vm.generating))
                    .clicked()
                {
                    act.generate = true;
                }
            });
        });

        tui.ui_add(
            egui::TextEdit::multiline(&mut draft.description)
                .hint_text("A IA preencherá isso para você...")
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );

        if let Some(notice) = &vm.notice {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.colored_label(COL_WARN, notice);
                if tui.ui(|ui| cmd_button(ui, "OK", "ghost", true)).clicked() {
                    act.dismiss_notice = true;
                }
            });
        }

        let (back, next) = footer(&mut *tui, true, Some(("PRÓXIMO PASSO", "primary", true)));
        act.back |= back;
        act.next |= next;
    });
}

fn draw_review<'a>(
    tui: impl TuiBuilderLogic<'a>,
    wizard: &mut encore_app_core::WizardState,
    vm: &WizardVm,
    act: &mut Actions,
) {
    let draft = &wizard.draft;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        step_header(&mut *tui, "3", "Mídia & Revisão");

        // Cover upload area; bytes stay in memory only
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(6.0),
            padding: length(20.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                if let Some(cover) = &draft.cover {
                    tui.ui_add(
                        egui::Image::from_bytes(
                            format!("bytes://cover/{}", cover.file_name),
                            cover.bytes.clone(),
                        )
                        .max_width(360.0),
                    );
                    tui.label(
                        egui::RichText::new(&cover.file_name)
                            .size(10.0)
                            .color(COL_TEXT_DIM),
                    );
                }

                let label = if draft.cover.is_some() {
                    "TROCAR IMAGEM"
                } else {
                    "ENVIAR IMAGEM DE CAPA"
                };
                if tui.ui(|ui| cmd_button(ui, label, "outline", true)).clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Imagens", &["png", "jpg", "jpeg", "gif"])
                        .pick_file()
                    {
                        match std::fs::read(&path) {
                            Ok(bytes) => {
                                let file_name = path
                                    .file_name()
                                    .map(|s| s.to_string_lossy().to_string())
                                    .unwrap_or_else(|| "capa".to_string());
                                act.cover = Some((file_name, bytes));
                            }
                            Err(e) => tracing::error!("Failed to read cover image: {e}"),
                        }
                    }
                }
                tui.label(
                    egui::RichText::new("PNG, JPG ou GIF (max. 800x400px)")
                        .size(9.0)
                        .color(COL_TEXT_DIM),
                );
            },
        );

        // Summary (derived, not stored)
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(6.0),
            padding: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_CARD)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                tui.ui(|ui| section_label(ui, "RESUMO"));
                summary_row(&mut *tui, "Nome do Evento", &vm.summary.title);
                summary_row(&mut *tui, "Quando", &vm.summary.when);
                summary_row(&mut *tui, "Onde", &vm.summary.location);
                summary_row(&mut *tui, "Preço", &vm.summary.price_label);
            },
        );

        if vm.publishing {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.ui_add(egui::Spinner::new().color(COL_SUCCESS));
                tui.label(
                    egui::RichText::new("Publicando evento...")
                        .size(11.0)
                        .color(COL_TEXT_DIM),
                );
            });
        }

        let (back, publish) = footer(
            &mut *tui,
            true,
            Some(("PUBLICAR EVENTO", "success", vm.can_publish)),
        );
        act.back |= back;
        act.publish |= publish;
    });
}

fn summary_row<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &str) {
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
        tui.label(egui::RichText::new(label).size(11.0).color(COL_TEXT_DIM));
        tui.label(
            egui::RichText::new(value)
                .size(12.0)
                .strong()
                .color(COL_TEXT),
        );
    });
}
