//! View rendering (input section, options, result pane, toast)

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::*;
use crate::ui::components::{option_pill, status_dot, submit_button};
use eframe::egui;
use std::time::{Duration, Instant};

const TOAST_FADE: f32 = 0.3;

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(APP_NAME.to_uppercase())
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (color, text) = match self.controller.api_status() {
                    ApiStatus::Unknown => (theme::TEXT_DIM, "Checking API…"),
                    ApiStatus::Online => (theme::STATUS_SUCCESS, "API online"),
                    ApiStatus::Offline(_) => (theme::STATUS_ERROR, "API offline"),
                };
                let hover = match self.controller.api_status() {
                    ApiStatus::Offline(reason) => format!("{}\n{}", self.client.base_url(), reason),
                    _ => self.client.base_url().to_string(),
                };
                ui.scope(|ui| status_dot(ui, color, text)).response.on_hover_text(hover);
            });
        });
    }

    pub(crate) fn render_input_section(&mut self, ui: &mut egui::Ui) {
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::Label::new(
                    egui::RichText::new("ORIGINAL TEXT")
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);

            let input_id = ui.make_persistent_id("original_text");
            let response = ui.add(
                egui::TextEdit::multiline(self.controller.input_mut())
                    .id(input_id)
                    .hint_text("Type or paste the text you want to convert…")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY)
                    .frame(false),
            );
            if self.focus_input {
                self.focus_input = false;
                response.request_focus();
            }
            if response.changed() && self.controller.on_input_changed() {
                // Keep the cursor inside the truncated text
                if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), input_id) {
                    let ccursor = egui::text::CCursor::new(MAX_CHARS);
                    state.cursor.set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
                    state.store(ui.ctx(), input_id);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if self.controller.counter_at_limit() {
                    theme::STATUS_ERROR
                } else {
                    theme::TEXT_DIM
                };
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(self.controller.counter_text())
                            .size(theme::FONT_SMALL)
                            .color(color),
                    )
                    .selectable(false),
                );
            });
        });
    }

    pub(crate) fn render_target_options(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new("CONVERT FOR")
                    .size(theme::FONT_SECTION)
                    .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);

        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
            let targets = self.controller.targets();
            for (i, opt) in targets.options().iter().enumerate() {
                if option_pill(ui, &opt.label, targets.style(i)).clicked() {
                    clicked = Some(i);
                }
            }
        });
        if let Some(i) = clicked {
            self.controller.select_target(i);
        }
    }

    pub(crate) fn render_submit(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let shortcut = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
        let response = submit_button(ui, "Convert", self.controller.is_loading());
        let response = response.on_hover_text("Ctrl+Enter");
        if (response.clicked() || shortcut) && self.controller.submit_enabled() {
            self.start_conversion(ctx);
        }
    }

    pub(crate) fn render_result_section(&mut self, ui: &mut egui::Ui) {
        let mut copy_clicked = false;

        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("CONVERTED TEXT")
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = theme::button(format!("{}  Copy", egui_phosphor::regular::COPY));
                    if ui.add_enabled(self.controller.copy_enabled(), button).clicked() {
                        copy_clicked = true;
                    }
                });
            });
            ui.add_space(theme::SPACING_SM);

            egui::ScrollArea::vertical()
                .max_height(theme::RESULT_MAX_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    let result = self.controller.result();
                    let text = match result {
                        ResultPane::Placeholder => egui::RichText::new(MSG_PLACEHOLDER).italics(),
                        ResultPane::Loading => egui::RichText::new(MSG_CONVERTING),
                        ResultPane::Success(t) | ResultPane::Error(t) => egui::RichText::new(t),
                    };
                    let color = if result.is_error() {
                        theme::STATUS_ERROR
                    } else if result.is_placeholder() {
                        theme::TEXT_DIM
                    } else if *result == ResultPane::Loading {
                        theme::TEXT_MUTED
                    } else {
                        theme::TEXT_PRIMARY
                    };
                    let text = text.color(color);
                    let selectable = result.copyable_text().is_some();
                    ui.add(egui::Label::new(text.size(theme::FONT_BODY)).wrap().selectable(selectable));
                });
        });

        if copy_clicked {
            self.controller.copy_result(&mut self.clipboard, Instant::now());
        }
    }

    /// Toast at the bottom center of the central panel; fades during its
    /// last moments and schedules a repaint for its deadline.
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.controller.tick(now);

        let (Some(msg), Some(panel_rect)) = (self.controller.toast().visible(), self.central_panel_rect) else {
            return;
        };
        let remaining = self
            .controller
            .toast()
            .remaining(now)
            .unwrap_or(Duration::ZERO)
            .as_secs_f32();
        let alpha = (remaining / TOAST_FADE).clamp(0.0, 1.0);

        let (fill, icon) = match msg.severity {
            Severity::Success => (theme::STATUS_SUCCESS, egui_phosphor::regular::CHECK_CIRCLE),
            Severity::Error => (theme::BTN_DANGER, egui_phosphor::regular::WARNING_CIRCLE),
        };
        let fill = egui::Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), (240.0 * alpha) as u8);
        let text_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8);
        let toast_pos = egui::pos2(panel_rect.center().x, panel_rect.bottom() - theme::SPACING_XL);

        egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::CENTER_BOTTOM)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("{}  {}", icon, msg.text))
                                    .size(theme::FONT_BODY)
                                    .color(text_color),
                            )
                            .selectable(false),
                        );
                    });
            });

        let until_fade = remaining - TOAST_FADE;
        if until_fade > 0.0 {
            ctx.request_repaint_after(Duration::from_secs_f32(until_fade));
        } else {
            ctx.request_repaint();
        }
    }
}
