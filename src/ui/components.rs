//! Reusable UI components
//!
//! Standalone widgets used by the converter form.

use crate::theme;
use crate::types::LabelStyle;
use eframe::egui;

/// Selectable pill for a target option. Active pills use the accent
/// toggle colors; inactive ones lighten on hover.
pub fn option_pill(ui: &mut egui::Ui, label: &str, style: LabelStyle) -> egui::Response {
    let font = egui::FontId::proportional(theme::FONT_LABEL);
    let galley = ui.fonts(|f| f.layout_no_wrap(label.to_string(), font.clone(), theme::TEXT_PRIMARY));
    let size = egui::vec2(
        galley.rect.width() + theme::SPACING_LG * 2.0,
        theme::BUTTON_HEIGHT,
    );
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        match style {
            LabelStyle::Active => {
                painter.rect_filled(rect, theme::RADIUS_MEDIUM, theme::TOGGLE_GLOW);
                painter.rect_filled(rect.shrink(1.0), theme::RADIUS_MEDIUM - 1.0, theme::TOGGLE_SELECTED);
            }
            LabelStyle::Inactive => {
                let (fill, draw_rect) = theme::button_visual(&response, theme::TOGGLE_UNSELECTED, rect);
                painter.rect_filled(draw_rect, theme::RADIUS_MEDIUM, fill);
                painter.rect_stroke(
                    draw_rect,
                    theme::RADIUS_MEDIUM,
                    egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
                    egui::StrokeKind::Inside,
                );
            }
        }
        let color = match style {
            LabelStyle::Active => theme::TEXT_PRIMARY,
            LabelStyle::Inactive if response.hovered() => theme::TEXT_SECONDARY,
            LabelStyle::Inactive => theme::TEXT_MUTED,
        };
        painter.text(rect.center(), egui::Align2::CENTER_CENTER, label, font, color);
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Primary submit button. While `loading` the label is replaced by a
/// spinner and the button ignores clicks.
pub fn submit_button(ui: &mut egui::Ui, label: &str, loading: bool) -> egui::Response {
    let size = egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT_LARGE);
    let sense = if loading { egui::Sense::hover() } else { egui::Sense::click() };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = if loading {
            (theme::BTN_ACCENT_ACTIVE, rect)
        } else {
            theme::button_visual(&response, theme::BTN_ACCENT, rect)
        };
        ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);

        if loading {
            let spinner_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(18.0, 18.0));
            ui.put(spinner_rect, egui::Spinner::new().size(18.0).color(theme::TEXT_ON_ACCENT));
        } else {
            ui.painter().text(
                draw_rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{}  {}", egui_phosphor::regular::MAGIC_WAND, label),
                egui::FontId::proportional(theme::FONT_BODY),
                theme::TEXT_ON_ACCENT,
            );
        }
    }

    if !loading && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Small colored dot followed by a caption
pub fn status_dot(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 4.0, color);
        ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
    });
}
