use crate::QuizApp;
use crate::model::{ClassLevel, Subject};
use crate::ui::helpers::choice_button;
use crate::ui::layout::scroll_panel;
use crate::view_models::{DifficultyInfo, TopicInfo};
use egui::{Button, Color32, Context, RichText, Ui};

pub fn ui_selection(app: &mut QuizApp, ctx: &Context) {
    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading("🎯 Adaptive Quiz");
            ui.label("Pick your class, subject, topic and difficulty");
        });
        ui.add_space(16.0);

        class_row(app, ui, width);
        ui.add_space(12.0);
        subject_row(app, ui, width);
        ui.add_space(12.0);
        topic_grid(app, ui, width);
        ui.add_space(12.0);
        difficulty_row(app, ui, width);
        ui.add_space(16.0);
        summary_card(app, ui, width);

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(Color32::YELLOW));
        }
    });
}

fn class_row(app: &mut QuizApp, ui: &mut Ui, width: f32) {
    ui.label(RichText::new("Class").strong());
    let w = (width - 8.0 * 6.0) / ClassLevel::ALL.len() as f32;
    ui.horizontal(|ui| {
        for class_level in ClassLevel::ALL {
            let selected = app.selection.class_level == class_level;
            if choice_button(ui, class_level.to_string(), w, 32.0, selected) {
                app.select_class(class_level);
            }
        }
    });
}

fn subject_row(app: &mut QuizApp, ui: &mut Ui, width: f32) {
    ui.label(RichText::new("Subject").strong());
    let w = (width - 8.0 * 4.0) / Subject::ALL.len() as f32;
    ui.horizontal(|ui| {
        for subject in Subject::ALL {
            let icon = app
                .catalog
                .subject(subject)
                .map(|s| s.icon.clone())
                .unwrap_or_default();
            let selected = app.selection.subject == subject;
            if choice_button(ui, format!("{icon} {}", subject.name()), w, 40.0, selected) {
                app.select_subject(subject);
            }
        }
    });
}

fn topic_grid(app: &mut QuizApp, ui: &mut Ui, width: f32) {
    ui.label(RichText::new("Topic").strong());
    let infos: Vec<TopicInfo> = app.topic_infos();
    if infos.is_empty() {
        ui.label("No topics available for this subject yet.");
        return;
    }

    let w = (width - 8.0) / 2.0;
    egui::Grid::new("topic_grid")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (i, info) in infos.iter().enumerate() {
                if choice_button(ui, info.label(), w, 48.0, info.selected) {
                    app.select_topic(&info.id);
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn difficulty_row(app: &mut QuizApp, ui: &mut Ui, width: f32) {
    ui.label(RichText::new("Difficulty").strong());
    let infos: Vec<DifficultyInfo> = app.difficulty_infos();
    let w = (width - 8.0 * 2.0) / infos.len().max(1) as f32;
    ui.horizontal(|ui| {
        for info in &infos {
            if choice_button(ui, info.label(), w, 64.0, info.selected) {
                app.select_difficulty(info.difficulty);
            }
        }
    });
}

fn summary_card(app: &mut QuizApp, ui: &mut Ui, width: f32) {
    let Some(summary) = app.quiz_summary() else {
        ui.vertical_centered(|ui| {
            let placeholder = Button::new("Select a topic to start").min_size([width, 40.0].into());
            ui.add_enabled(false, placeholder);
        });
        return;
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.heading("Quiz Summary");
        ui.label(&summary.path);
        ui.add_space(6.0);
        egui::Grid::new("quiz_summary_grid")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label("Difficulty");
                ui.label(summary.difficulty.name());
                ui.end_row();
                ui.label("Questions");
                ui.label(summary.questions.to_string());
                ui.end_row();
                ui.label("Estimated time");
                ui.label(format!("{} min", summary.estimated_minutes));
                ui.end_row();
                ui.label("XP reward");
                ui.label(format!("up to {} XP", summary.estimated_xp));
                ui.end_row();
            });
    });

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        if ui
            .add_sized([width / 2.0, 44.0], Button::new(RichText::new("▶ Start Quiz").size(18.0)))
            .clicked()
        {
            app.start_quiz();
        }
    });
}
