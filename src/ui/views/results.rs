use crate::QuizApp;
use crate::ui::helpers::{big_list_button, stat_card};
use crate::ui::layout::scroll_panel;
use crate::view_models::{ResultsView, format_duration};
use egui::{Color32, Context, Grid, RichText, Ui};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.results_view() else {
        return;
    };

    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(view.headline());
            if view.timed_out {
                ui.label(RichText::new("⏰ Time ran out").color(Color32::YELLOW));
            }
        });
        ui.add_space(12.0);

        let card_w = (width - 8.0 * 3.0) / 4.0;
        ui.horizontal(|ui| {
            stat_card(ui, view.score_label(), "Score", card_w);
            stat_card(ui, format!("{}%", view.accuracy), "Accuracy", card_w);
            stat_card(ui, format!("+{}", view.xp_earned), "XP earned", card_w);
            stat_card(ui, format_duration(view.time_spent_secs), "Time", card_w);
        });

        ui.add_space(16.0);
        breakdown_section(ui, &view);
        ui.add_space(12.0);
        recommendations_section(ui, &view);
        ui.add_space(12.0);
        attempts_section(ui, &view);
        ui.add_space(12.0);
        leaderboard_section(ui, &view);

        ui.add_space(16.0);
        let btn_w = (width - 8.0) / 2.0;
        ui.horizontal(|ui| {
            if big_list_button(ui, "🔄 Retake Quiz".into(), btn_w, 40.0, true) {
                app.retake_quiz();
            }
            if big_list_button(ui, "📚 New Quiz".into(), btn_w, 40.0, true) {
                app.new_quiz();
            }
        });
    });
}

fn breakdown_section(ui: &mut Ui, view: &ResultsView) {
    ui.label(RichText::new("Topic breakdown").strong());
    Grid::new("topic_breakdown_grid")
        .striped(true)
        .num_columns(3)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Topic");
            ui.label("Correct");
            ui.label("Accuracy");
            ui.end_row();
            for row in &view.breakdown {
                ui.label(&row.topic);
                ui.label(format!("{}/{}", row.correct, row.total));
                ui.add(
                    egui::ProgressBar::new(row.accuracy as f32 / 100.0)
                        .text(format!("{}%", row.accuracy)),
                );
                ui.end_row();
            }
        });
}

fn recommendations_section(ui: &mut Ui, view: &ResultsView) {
    ui.label(RichText::new("Recommendations").strong());
    for rec in &view.recommendations {
        ui.label(format!("• {}", rec.title));
        ui.label(RichText::new(&rec.description).small().weak());
    }
}

fn attempts_section(ui: &mut Ui, view: &ResultsView) {
    if view.previous_attempts.is_empty() {
        return;
    }
    ui.label(RichText::new("Previous attempts").strong());
    Grid::new("previous_attempts_grid")
        .striped(true)
        .num_columns(3)
        .show(ui, |ui| {
            for attempt in &view.previous_attempts {
                ui.label(&attempt.date);
                ui.label(format!("{}%", attempt.score));
                ui.label(format!("{} XP", attempt.xp));
                ui.end_row();
            }
        });
}

fn leaderboard_section(ui: &mut Ui, view: &ResultsView) {
    ui.label(RichText::new("🏆 Leaderboard").strong());
    Grid::new("leaderboard_grid")
        .striped(true)
        .num_columns(4)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for (rank, entry) in view.leaderboard.iter().enumerate() {
                let name = RichText::new(&entry.name);
                let name = if entry.is_current_user {
                    name.strong().color(Color32::LIGHT_BLUE)
                } else {
                    name
                };
                ui.label(format!("#{}", rank + 1));
                ui.label(name);
                ui.label(format!("{}%", entry.score));
                ui.label(format!("{} XP", entry.xp));
                ui.end_row();
            }
        });
}
