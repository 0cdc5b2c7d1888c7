// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Choice button, highlighted when `selected`.
pub fn choice_button(ui: &mut Ui, label: String, width: f32, height: f32, selected: bool) -> bool {
    ui.add_sized([width, height], Button::new(label).selected(selected))
        .clicked()
}

/// How an answer option is painted once the user picked one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OptionState {
    Idle,
    Picked,
    Correct,
    Wrong,
}

pub fn option_state(
    label: &str,
    selected: Option<&str>,
    correct: &str,
    revealed: bool,
) -> OptionState {
    let picked = selected == Some(label);
    match (revealed, picked, label == correct) {
        (true, _, true) => OptionState::Correct,
        (true, true, false) => OptionState::Wrong,
        (false, true, _) => OptionState::Picked,
        _ => OptionState::Idle,
    }
}

pub fn answer_button(
    ui: &mut Ui,
    label: &str,
    text: &str,
    width: f32,
    state: OptionState,
    enabled: bool,
) -> bool {
    let (fill, stroke) = match state {
        OptionState::Idle => (None, None),
        OptionState::Picked => (None, Some(Stroke::new(2.0, Color32::LIGHT_BLUE))),
        OptionState::Correct => (Some(Color32::from_rgb(34, 139, 34)), None),
        OptionState::Wrong => (Some(Color32::from_rgb(178, 34, 34)), None),
    };
    let marker = match state {
        OptionState::Correct => " ✔",
        OptionState::Wrong => " ✖",
        _ => "",
    };

    let mut button = Button::new(RichText::new(format!("{label}.  {text}{marker}")).size(16.0))
        .min_size(Vec2::new(width, 40.0));
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    if let Some(stroke) = stroke {
        button = button.stroke(stroke);
    }
    ui.add_enabled(enabled, button).clicked()
}

/// Big number with its caption underneath.
pub fn stat_card(ui: &mut Ui, value: String, caption: &str, width: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).size(24.0).strong());
            ui.label(RichText::new(caption).small());
        });
    });
}
