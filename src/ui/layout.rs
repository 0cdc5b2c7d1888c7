use crate::QuizApp;
use crate::model::QuizPhase;
use crate::view_models::format_clock;
use egui::{Align, Align2, CentralPanel, Color32, Context, Frame, Layout, RichText, Ui, Visuals};

/// Below this many seconds the clock turns red.
const LOW_TIME_SECS: u32 = 60;

pub fn quiz_header(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("quiz_header").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let (position, total) = app.session.question_position();
            ui.label(RichText::new(app.quiz_title()).strong());
            ui.separator();
            ui.label(format!("Question {position} of {total}"));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("✖ Exit").clicked() {
                    app.request_exit();
                }
                let paused = app.phase() == QuizPhase::Paused;
                if ui
                    .add_enabled(!paused, egui::Button::new("⏸ Pause"))
                    .clicked()
                {
                    app.pause_quiz();
                }

                let remaining = app.session.time_remaining();
                let clock = RichText::new(format!("⏱ {}", format_clock(remaining))).monospace();
                let clock = if remaining <= LOW_TIME_SECS {
                    clock.color(Color32::RED)
                } else {
                    clock
                };
                ui.label(clock);
            });
        });

        let (position, total) = app.session.question_position();
        let fraction = if total == 0 {
            0.0
        } else {
            position as f32 / total as f32
        };
        ui.add(egui::ProgressBar::new(fraction).desired_height(6.0));
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTONS -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Transient "N in a row" banner in the top right corner.
pub fn streak_toast(app: &QuizApp, ctx: &Context) {
    let Some(toast) = &app.streak_toast else {
        return;
    };
    egui::Area::new(egui::Id::new("streak_toast"))
        .anchor(Align2::RIGHT_TOP, [-16.0, 48.0])
        .show(ctx, |ui| {
            Frame::popup(ui.style())
                .fill(Color32::from_rgb(255, 140, 0))
                .inner_margin(egui::Margin::symmetric(14, 8))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(&toast.message)
                            .color(Color32::WHITE)
                            .strong()
                            .size(18.0),
                    );
                });
        });
}

/// Panel centered both vertically and horizontally, capped at
/// `max_width`, running `inner` for its content.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Scrollable panel for screens taller than the window.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            inner(ui);
                        });
                });
            });
    });
}
