use common::{GameSession, SubmitOutcome, log};
use eframe::egui;

pub struct GameApp {
    session: GameSession,
}

impl GameApp {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    fn submit_pending(&mut self) {
        let raw = self.session.pending_input().to_string();
        match self.session.submit(&raw) {
            SubmitOutcome::Accepted { word, points } => {
                log!("Accepted '{}' for {} points", word, points);
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => {}
        }
    }

    fn start_new_round(&mut self) {
        self.session.start_game();
        log!("New root word: {}", self.session.root_word());
    }

    fn render_error_window(&mut self, ctx: &egui::Context) {
        let Some(error) = self.session.error().cloned() else {
            return;
        };

        egui::Window::new(&error.title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(&error.message);
                if ui.button("OK").clicked() {
                    self.session.dismiss_error();
                }
            });
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Score: {}", self.session.score()))
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 New Word").clicked() {
                    self.start_new_round();
                }
            });
        });
    }

    fn render_used_words(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("used_words_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for word in self.session.used_words() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{}", word.chars().count()))
                                .monospace(),
                        );
                        ui.label(word);
                    });
                }
            });
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let error_shown = self.session.error().is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_top_bar(ui);
            ui.separator();

            ui.vertical_centered(|ui| {
                ui.heading(self.session.root_word().to_string());
            });
            ui.add_space(10.0);

            let response = ui.add_enabled(
                !error_shown,
                egui::TextEdit::singleline(self.session.pending_input_mut())
                    .hint_text("Enter your word")
                    .desired_width(f32::INFINITY),
            );

            if response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter))
            {
                self.submit_pending();
                response.request_focus();
            }

            ui.separator();
            self.render_used_words(ui);
        });

        self.render_error_window(ctx);
    }
}
