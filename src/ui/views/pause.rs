use crate::QuizApp;
use crate::view_models::format_clock;
use egui::{Align2, Button, Context, RichText};

pub fn ui_pause_menu(app: &mut QuizApp, ctx: &Context) {
    let (position, total) = app.session.question_position();
    let remaining = app.session.time_remaining();

    egui::Window::new("⏸ Quiz paused")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(format!("Question {position} of {total}"));
                let clock = format!("⏱ {} left", format_clock(remaining));
                ui.label(RichText::new(clock).monospace());
                ui.add_space(12.0);

                if ui.add_sized([200.0, 36.0], Button::new("▶ Resume")).clicked() {
                    app.resume_quiz();
                }
                ui.add_space(4.0);
                if ui.add_sized([200.0, 36.0], Button::new("✖ Exit quiz")).clicked() {
                    app.request_exit();
                }
            });
        });
}

/// Confirmation before abandoning the quiz.
pub fn ui_confirm_exit(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Exit quiz?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.label("Your progress in this quiz will be lost.");
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Yes, exit").clicked() {
                    app.confirm_exit_quiz();
                }
                if ui.button("Keep going").clicked() {
                    app.cancel_exit();
                }
            });
        });
}
