//! Main application UI and state management.
//! Renders the game, card editing and settings screens, drives the
//! one-second countdown and turns gestures into game-session intents.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::export::json::{export_cards_to_path, import_cards};
use crate::feedback::{FeedbackKind, Haptics, LoggingHaptics};
use crate::models::game_session::DRAG_JUDGE_THRESHOLD;
use crate::models::{Card, DeckStore, GameSession, Phase, Settings};
use crate::storage;

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    Game,
    EditCards,
    Settings,
}

/// Main application state
pub struct FlashApp {
    deck: DeckStore,
    session: GameSession,
    settings: Settings,
    settings_path: PathBuf,
    haptics: Box<dyn Haptics>,

    current_screen: AppScreen,

    // Fields for a new card on the edit screen
    new_prompt: String,
    new_answer: String,

    // Wall-clock anchor for the one-second countdown
    last_tick: Option<Instant>,
    window_focused: bool,

    // Horizontal displacement of the in-flight drag on the top card
    drag_offset: f32,

    celebration_played: bool,

    show_io_result_dialog: bool,
    io_result_message: String,
}

impl eframe::App for FlashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_focus_change(ctx);
        self.drive_countdown();

        match self.current_screen {
            AppScreen::Game => self.render_game_screen(ctx),
            AppScreen::EditCards => self.render_edit_screen(ctx),
            AppScreen::Settings => self.render_settings_screen(ctx),
        }

        if self.show_io_result_dialog {
            egui::Window::new("Import/Export Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.io_result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_io_result_dialog = false;
                    }
                });
        }

        // Keep the countdown moving even without input events
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl FlashApp {
    /// Creates the application around an already-loaded deck.
    pub fn new(deck: DeckStore, settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            deck,
            session: GameSession::new(),
            settings,
            settings_path,
            haptics: Box::new(LoggingHaptics),
            current_screen: AppScreen::Game,
            new_prompt: String::new(),
            new_answer: String::new(),
            last_tick: None,
            window_focused: true,
            drag_offset: 0.0,
            celebration_played: false,
            show_io_result_dialog: false,
            io_result_message: String::new(),
        }
    }

    /// Pauses the countdown when the window loses focus, resumes it when
    /// focus comes back (only if time and cards remain).
    fn handle_focus_change(&mut self, ctx: &egui::Context) {
        let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
        if focused == self.window_focused {
            return;
        }

        if focused {
            self.session.foregrounded(&self.deck);
        } else {
            self.session.backgrounded();
        }
        self.window_focused = focused;
    }

    /// Forwards one tick per elapsed wall-clock second to the session.
    fn drive_countdown(&mut self) {
        let now = Instant::now();
        let last = self.last_tick.get_or_insert(now);

        while now.duration_since(*last) >= Duration::from_secs(1) {
            *last += Duration::from_secs(1);
            self.session.tick();
        }
    }

    fn start_new_game(&mut self) {
        self.session = GameSession::new();
        self.deck.load();
        self.drag_offset = 0.0;
        self.celebration_played = false;
    }

    /// Renders the round: countdown, card stack, judgement buttons
    fn render_game_screen(&mut self, ctx: &egui::Context) {
        // Actions are collected during rendering and executed afterwards
        // to avoid borrowing conflicts
        let mut action_reveal = false;
        let mut action_judge: Option<bool> = None;
        let mut action_drag_release: Option<f32> = None;
        let mut action_new_game = false;
        let mut action_screen: Option<AppScreen> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⚙ Settings").clicked() {
                    action_screen = Some(AppScreen::Settings);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✚ Edit Cards").clicked() {
                        action_screen = Some(AppScreen::EditCards);
                    }
                });
            });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                ui.heading(format!("Time: {}", self.session.time_remaining));
                if self.session.phase == Phase::Paused {
                    ui.label("Paused");
                }
                ui.label(format!("{} cards left", self.deck.count()));
            });

            ui.add_space(20.0);

            if self.deck.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.heading("Congratulations!");
                    ui.label("You cleared the whole deck!");
                    ui.add_space(20.0);
                    if ui.button("Start Again").clicked() {
                        action_new_game = true;
                    }
                });
                return;
            }

            if self.session.phase == Phase::Ended {
                ui.vertical_centered(|ui| {
                    ui.heading("Time's up!");
                    ui.add_space(20.0);
                    if ui.button("Start Again").clicked() {
                        action_new_game = true;
                    }
                });
                return;
            }

            // Clone values to avoid borrowing issues
            let (prompt, answer) = match self.deck.top() {
                Some(card) => (card.prompt.clone(), card.answer.clone()),
                None => return,
            };
            let revealed = self.session.is_answer_revealed;

            ui.vertical_centered(|ui| {
                let fill = self.card_fill(ui);
                let card_frame = egui::Frame::group(ui.style())
                    .fill(fill)
                    .inner_margin(24.0);

                let inner = card_frame.show(ui, |ui| {
                    ui.set_min_size(egui::vec2(ui.available_width().min(420.0), 180.0));
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.heading(&prompt);
                        ui.add_space(20.0);
                        if revealed {
                            ui.label(&answer);
                        } else {
                            ui.weak("(click the card to reveal the answer)");
                        }
                        ui.add_space(20.0);
                    });
                });

                // The whole card is one gesture surface: click reveals,
                // a horizontal drag past the threshold judges
                let response = ui.interact(
                    inner.response.rect,
                    egui::Id::new("top_card"),
                    egui::Sense::click_and_drag(),
                );

                if response.clicked() {
                    action_reveal = true;
                }
                if response.dragged() && revealed {
                    self.drag_offset += response.drag_delta().x;
                }
                if response.drag_stopped() {
                    action_drag_release = Some(self.drag_offset);
                    self.drag_offset = 0.0;
                }
            });

            ui.add_space(20.0);

            // Mirror the disabled-button behavior: judging is possible only
            // while the answer is showing and the session is active
            let buttons_inactive =
                !self.session.is_answer_revealed || self.session.phase != Phase::Active;

            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() / 2.0 - 120.0).max(0.0));
                    if ui
                        .add_enabled(!buttons_inactive, egui::Button::new("✗ Incorrect"))
                        .clicked()
                    {
                        action_judge = Some(false);
                    }
                    ui.add_space(40.0);
                    if ui
                        .add_enabled(!buttons_inactive, egui::Button::new("✓ Correct"))
                        .clicked()
                    {
                        action_judge = Some(true);
                    }
                });
            });
        });

        // Execute deferred actions
        if action_reveal {
            self.session.reveal(&self.deck);
        }
        if let Some(correct) = action_judge {
            self.session
                .judge(&mut self.deck, correct, self.settings.recycle_incorrect_answers);
        }
        if let Some(delta_x) = action_drag_release {
            let verdict = self.session.drag_released(
                &mut self.deck,
                delta_x,
                self.settings.recycle_incorrect_answers,
            );
            match verdict {
                Some(true) if self.settings.haptic_on_correct => {
                    self.haptics.play(FeedbackKind::Success);
                }
                Some(false) if self.settings.haptic_on_incorrect => {
                    self.haptics.play(FeedbackKind::Error);
                }
                _ => {}
            }
        }
        if action_new_game {
            self.start_new_game();
        }
        if let Some(screen) = action_screen {
            self.current_screen = screen;
        }

        if self.deck.is_empty() && !self.celebration_played {
            if self.settings.celebrate_on_complete {
                self.haptics.play(FeedbackKind::Celebration);
            }
            self.celebration_played = true;
        }
    }

    /// Card background shifts toward green or red with the drag, so the
    /// verdict is visible before the card is released.
    fn card_fill(&self, ui: &egui::Ui) -> egui::Color32 {
        let base = ui.visuals().extreme_bg_color;
        if self.drag_offset == 0.0 {
            return base;
        }

        let strength = (self.drag_offset.abs() / DRAG_JUDGE_THRESHOLD).min(1.0);
        let target = if self.drag_offset > 0.0 {
            egui::Color32::DARK_GREEN
        } else {
            egui::Color32::DARK_RED
        };
        mix_colors(base, target, strength)
    }

    /// Renders the card authoring screen: add, delete, import and export
    fn render_edit_screen(&mut self, ctx: &egui::Context) {
        let mut action_add = false;
        let mut action_delete: Option<usize> = None;
        let mut action_export = false;
        let mut action_import = false;
        let mut action_done = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Edit Cards");
            ui.separator();

            ui.heading("Add new card");
            ui.horizontal(|ui| {
                ui.label("Prompt:");
                ui.text_edit_singleline(&mut self.new_prompt);
            });
            ui.horizontal(|ui| {
                ui.label("Answer:");
                ui.text_edit_singleline(&mut self.new_answer);
            });

            let can_add =
                !self.new_prompt.trim().is_empty() && !self.new_answer.trim().is_empty();
            if ui
                .add_enabled(can_add, egui::Button::new("Add Card"))
                .clicked()
            {
                action_add = true;
            }

            ui.separator();

            ui.heading(format!("Cards ({})", self.deck.count()));

            egui::ScrollArea::vertical()
                .id_source("cards_list")
                .max_height(300.0)
                .show(ui, |ui| {
                    for (i, card) in self.deck.cards().iter().enumerate() {
                        ui.group(|ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(format!("{}. {}", i + 1, card.prompt));
                                    ui.label(format!("   {}", card.answer));
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.button("Delete").clicked() {
                                            action_delete = Some(i);
                                        }
                                    },
                                );
                            });
                        });
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Export Cards").clicked() {
                    action_export = true;
                }
                if ui.button("Import Cards").clicked() {
                    action_import = true;
                }
            });

            ui.add_space(10.0);

            // Leaving the editor starts a fresh round with the edited deck
            if ui.button("Done").clicked() {
                action_done = true;
            }
        });

        // Execute deferred actions
        if action_add {
            let card = Card::new(self.new_prompt.trim(), self.new_answer.trim());
            // New cards go to the front of the deck, i.e. drawn last
            self.deck.add_card(card, 0);
            self.new_prompt.clear();
            self.new_answer.clear();
        }
        if let Some(index) = action_delete {
            self.deck.remove_cards(&[index]);
        }
        if action_export {
            self.handle_export();
        }
        if action_import {
            self.handle_import();
        }
        if action_done {
            self.start_new_game();
            self.current_screen = AppScreen::Game;
        }
    }

    /// Renders the settings screen; every change is persisted immediately
    fn render_settings_screen(&mut self, ctx: &egui::Context) {
        let mut changed = false;
        let mut action_done = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.label("Card re-use");
            changed |= ui
                .checkbox(
                    &mut self.settings.recycle_incorrect_answers,
                    "Recycle cards when answer incorrect?",
                )
                .changed();

            ui.add_space(10.0);

            ui.label("Haptics");
            changed |= ui
                .checkbox(
                    &mut self.settings.celebrate_on_complete,
                    "Celebration when game complete?",
                )
                .changed();
            changed |= ui
                .checkbox(
                    &mut self.settings.haptic_on_correct,
                    "Feedback on correct answer?",
                )
                .changed();
            changed |= ui
                .checkbox(
                    &mut self.settings.haptic_on_incorrect,
                    "Feedback on incorrect answer?",
                )
                .changed();

            ui.add_space(20.0);

            if ui.button("Done").clicked() {
                action_done = true;
            }
        });

        if changed {
            if let Err(err) = storage::settings::save(&self.settings_path, &self.settings) {
                log::error!("could not save settings: {err}");
            }
        }
        if action_done {
            self.current_screen = AppScreen::Game;
        }
    }

    /// Handles card list export to a user-chosen JSON file
    fn handle_export(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("cards.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            match export_cards_to_path(self.deck.cards(), &path.to_string_lossy()) {
                Ok(_) => {
                    self.io_result_message =
                        format!("{} cards exported successfully!", self.deck.count());
                }
                Err(e) => {
                    self.io_result_message = format!("Export failed: {}", e);
                }
            }
            self.show_io_result_dialog = true;
        }
    }

    /// Handles card list import from a user-chosen JSON file
    fn handle_import(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            match import_cards(&path.to_string_lossy()) {
                Ok(cards) => {
                    let imported = cards.len();
                    for card in cards {
                        let end = self.deck.count();
                        self.deck.add_card(card, end);
                    }
                    self.io_result_message =
                        format!("{} cards imported successfully!", imported);
                }
                Err(e) => {
                    self.io_result_message = format!(
                        "Import failed: {}\n\nExpected structure:\n[\n  {{\"prompt\": \"...\", \"answer\": \"...\"}}\n]",
                        e
                    );
                }
            }
            self.show_io_result_dialog = true;
        }
    }
}

fn mix_colors(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    egui::Color32::from_rgb(
        lerp(a.r(), b.r()),
        lerp(a.g(), b.g()),
        lerp(a.b(), b.b()),
    )
}
