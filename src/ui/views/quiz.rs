use crate::QuizApp;
use crate::model::QuizPhase;
use crate::ui::helpers::{answer_button, option_state};
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(question) = app.session.current_question().cloned() else {
        return;
    };
    let running = app.phase() == QuizPhase::Active;
    let answered = app.session.has_answered_current();
    let revealed = app.session.is_revealed();
    let selected = app.session.selected_answer().map(str::to_string);

    let est_height = 140.0 + 48.0 * question.options.len() as f32 + 120.0;
    centered_panel(ctx, est_height, 650.0, |ui| {
        let width = ui.available_width();

        ui.label(RichText::new(&question.text).size(20.0).strong());
        ui.add_space(16.0);

        let mut clicked = None;
        for (label, text) in question.labeled_options() {
            let state = option_state(
                &label,
                selected.as_deref(),
                &question.correct_answer,
                revealed,
            );
            if answer_button(ui, &label, text, width, state, running && !answered) {
                clicked = Some(label);
            }
            ui.add_space(6.0);
        }
        if let Some(label) = clicked {
            app.answer(&label);
        }

        ui.add_space(10.0);
        if revealed {
            let correct = selected.as_deref().is_some_and(|s| question.is_correct(s));
            let verdict = if correct {
                RichText::new("✅ Correct!").color(Color32::GREEN)
            } else {
                RichText::new(format!("❌ The answer was {}", question.correct_answer))
                    .color(Color32::RED)
            };
            ui.label(verdict.size(18.0));
            if !question.explanation.is_empty() {
                ui.label(format!("💡 {}", question.explanation));
            }
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let next_label = if app.session.is_last_question() {
                "Finish Quiz"
            } else {
                "Next Question →"
            };
            let next = Button::new(next_label).min_size([width / 2.0, 40.0].into());
            // wait for the reveal so the explanation is seen
            if ui.add_enabled(running && revealed, next).clicked() {
                app.next_question();
            }
        });

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
