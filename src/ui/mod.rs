mod helpers;
pub mod layout;
pub mod views;

use crate::app::{EframeStore, QuizApp, save_state};
use crate::model::QuizPhase;
use crate::store::ResultStore;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, quiz_header, streak_toast};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        {
            let mut store = frame.storage_mut().map(|s| EframeStore::new(s));
            self.pump(now, store.as_mut().map(|s| s as &mut dyn ResultStore));
        }

        // HEADER with clock and pause, only while a quiz runs
        if matches!(self.phase(), QuizPhase::Active | QuizPhase::Paused) {
            quiz_header(self, ctx);
        }

        // BOTTOM PANEL: dark or light theme
        bottom_panel(ctx);

        // Dispatch by phase
        match self.phase() {
            QuizPhase::Selection => views::selection::ui_selection(self, ctx),
            QuizPhase::Active => views::quiz::ui_quiz(self, ctx),
            QuizPhase::Paused => {
                views::quiz::ui_quiz(self, ctx);
                views::pause::ui_pause_menu(self, ctx);
            }
            QuizPhase::Results => views::results::ui_results(self, ctx),
        }

        if self.confirm_exit {
            views::pause::ui_confirm_exit(self, ctx);
        }
        streak_toast(self, ctx);

        // the clock keeps running without input
        if let Some(due) = self.session.next_timer_due() {
            ctx.request_repaint_after(due);
        }
        if self.streak_toast.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        save_state(self, storage);
    }
}
