use crate::theme::*;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use encore_app_core::ChartPointVm;

/// Area chart of the weekly revenue series, painted directly: filled mesh
/// under the polyline, quarter gridlines, day labels along the baseline.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, points: &[ChartPointVm], peak_label: &str) {
    tui.style(taffy::Style {
        flex_grow: 1.0,
        flex_shrink: 1.0,
        min_size: taffy::Size {
            width: length(0.0),
            height: length(220.0),
        },
        size: percent(1.),
        ..Default::default()
    })
    .ui(|ui| {
        let rect = ui.max_rect();
        let painter = ui.painter();

        painter.rect_filled(rect, 6.0, COL_BG);
        painter.rect_stroke(
            rect,
            6.0,
            egui::Stroke::new(1.0, COL_BORDER),
            egui::StrokeKind::Outside,
        );

        if points.is_empty() {
            return;
        }

        let pad = 18.0;
        let label_h = 16.0;
        let plot = egui::Rect::from_min_max(
            egui::pos2(rect.left() + pad, rect.top() + pad),
            egui::pos2(rect.right() - pad, rect.bottom() - pad - label_h),
        );
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return;
        }

        for i in 1..4 {
            let y = plot.top() + plot.height() * i as f32 / 4.0;
            painter.line_segment(
                [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
                egui::Stroke::new(1.0, COL_BORDER.linear_multiply(0.5)),
            );
        }

        painter.text(
            egui::pos2(plot.left(), rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            format!("pico {peak_label}"),
            egui::FontId::proportional(9.0),
            COL_TEXT_DIM,
        );

        let step = if points.len() > 1 {
            plot.width() / (points.len() - 1) as f32
        } else {
            0.0
        };
        let at = |ix: usize, normalized: f32| {
            egui::pos2(
                plot.left() + step * ix as f32,
                plot.bottom() - normalized.clamp(0.0, 1.0) * plot.height(),
            )
        };

        let fill = COL_ACCENT.linear_multiply(0.15);
        let mut mesh = egui::Mesh::default();
        for (ix, pair) in points.windows(2).enumerate() {
            let p0 = at(ix, pair[0].normalized);
            let p1 = at(ix + 1, pair[1].normalized);
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(p0, fill);
            mesh.colored_vertex(egui::pos2(p0.x, plot.bottom()), fill);
            mesh.colored_vertex(p1, fill);
            mesh.colored_vertex(egui::pos2(p1.x, plot.bottom()), fill);
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base + 1, base + 3, base + 2);
        }
        painter.add(egui::Shape::mesh(mesh));

        let line: Vec<egui::Pos2> = points
            .iter()
            .enumerate()
            .map(|(ix, p)| at(ix, p.normalized))
            .collect();
        painter.add(egui::Shape::line(line, egui::Stroke::new(2.0, COL_ACCENT)));

        for (ix, point) in points.iter().enumerate() {
            let pos = at(ix, point.normalized);
            painter.circle_filled(pos, 2.5, COL_ACCENT);
            painter.text(
                egui::pos2(pos.x, plot.bottom() + 4.0),
                egui::Align2::CENTER_TOP,
                &point.day,
                egui::FontId::proportional(10.0),
                COL_TEXT_DIM,
            );
        }
    });
}
