//! TUI application state and logic

use crate::core::{DifficultyLevel, GameMode};
use crate::dictionary::Dictionary;
use crate::game::{FeedbackKind, GameSession, GameSettings};
use crate::profile::{Achievement, ProfileStore, UserProfile};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Which screen is on display
pub enum Screen {
    Menu,
    DifficultySelect { mode: GameMode },
    Playing,
    Results(Box<GameSummary>),
    Statistics,
    Achievements,
    Help,
}

/// Terminal summary of a finished game, for the results screen
pub struct GameSummary {
    pub won: bool,
    pub score: u32,
    pub max_streak: u32,
    pub total_words: u32,
    pub total_correct: u32,
    pub hints_used: u32,
    pub duration_seconds: u64,
    pub new_achievements: Vec<Achievement>,
    pub persist_error: Option<String>,
}

/// One-line message shown in the status bar
pub struct Feedback {
    pub text: String,
    pub tone: FeedbackTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Info,
    Success,
    Error,
}

impl Feedback {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: FeedbackTone::Info,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: FeedbackTone::Success,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: FeedbackTone::Error,
        }
    }
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub store: ProfileStore,
    pub profile: UserProfile,
    pub screen: Screen,
    pub session: Option<GameSession<'a>>,
    pub input_buffer: String,
    pub feedback: Option<Feedback>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, store: ProfileStore) -> Self {
        let (profile, feedback) = match store.load_profile() {
            Ok(profile) => (profile, None),
            Err(e) => (
                UserProfile::default(),
                Some(Feedback::error(format!("⚠ Profile unavailable: {e}"))),
            ),
        };

        Self {
            dictionary,
            store,
            profile,
            screen: Screen::Menu,
            session: None,
            input_buffer: String::new(),
            feedback,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::DifficultySelect { mode } => {
                let mode = *mode;
                self.handle_difficulty_key(key.code, mode);
            }
            Screen::Playing => self.handle_playing_key(key.code),
            Screen::Results(_) | Screen::Statistics | Screen::Achievements | Screen::Help => {
                self.handle_return_key(key.code);
            }
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let mode = match code {
            KeyCode::Char('1') => Some(GameMode::Classic),
            KeyCode::Char('2') => Some(GameMode::TimeAttack),
            KeyCode::Char('3') => Some(GameMode::Streak10),
            KeyCode::Char('4') => Some(GameMode::Streak50),
            KeyCode::Char('5') => Some(GameMode::Streak100),
            KeyCode::Char('6') => {
                self.screen = Screen::Statistics;
                return;
            }
            KeyCode::Char('7') => {
                self.screen = Screen::Achievements;
                return;
            }
            KeyCode::Char('8') => {
                self.screen = Screen::Help;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            // Invalid choices are recovered locally: stay on the menu
            _ => None,
        };

        if let Some(mode) = mode {
            self.feedback = None;
            self.screen = Screen::DifficultySelect { mode };
        }
    }

    fn handle_difficulty_key(&mut self, code: KeyCode, mode: GameMode) {
        let difficulty = match code {
            KeyCode::Char('1') => None,
            KeyCode::Char('2') => Some(DifficultyLevel::Beginner),
            KeyCode::Char('3') => Some(DifficultyLevel::Intermediate),
            KeyCode::Char('4') => Some(DifficultyLevel::Advanced),
            KeyCode::Char('5') => Some(DifficultyLevel::Expert),
            KeyCode::Esc => {
                self.screen = Screen::Menu;
                return;
            }
            // Out-of-range selections just leave the prompt up
            _ => return,
        };

        self.start_game(mode, difficulty);
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.finish_game();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_return_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                self.screen = Screen::Menu;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn start_game(&mut self, mode: GameMode, difficulty: Option<DifficultyLevel>) {
        match GameSession::new(self.dictionary, GameSettings { mode, difficulty }) {
            Ok(session) => {
                self.session = Some(session);
                self.screen = Screen::Playing;
                self.input_buffer.clear();
                self.feedback = None;
            }
            Err(e) => {
                self.feedback = Some(Feedback::error(format!("❌ Cannot start game: {e}")));
                self.screen = Screen::Menu;
            }
        }
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        match input.as_str() {
            "quit" => {
                self.finish_game();
            }
            "hint" => {
                if session.request_hint() {
                    self.feedback =
                        Some(Feedback::info(format!("💡 Hints used: {}", session.hints_used())));
                } else {
                    self.feedback = Some(Feedback::info("💡 Hints are already shown"));
                }
            }
            guess => {
                let Some(result) = session.submit_guess(guess) else {
                    // The countdown beat the guess; the session is over
                    self.finish_game();
                    return;
                };

                self.feedback = Some(match &result.kind {
                    FeedbackKind::Correct { points, streak } => {
                        let marker = if streak % 5 == 0 { "🔥" } else { "✅" };
                        Feedback::success(format!(
                            "{marker} Correct! +{points} points (Streak: {streak})"
                        ))
                    }
                    FeedbackKind::Won { points } => {
                        Feedback::success(format!("🎉 Correct! +{points} points. You won!"))
                    }
                    FeedbackKind::TryAgain { attempts_remaining } => Feedback::error(format!(
                        "❌ Incorrect. {attempts_remaining} attempts remaining."
                    )),
                    FeedbackKind::Revealed { word } => {
                        Feedback::error(format!("❌ Incorrect. The answer was: {word}"))
                    }
                });

                if !result.should_continue {
                    self.finish_game();
                }
            }
        }
    }

    /// Advance the countdown; called once per second by the event loop
    pub fn on_tick(&mut self) {
        if !matches!(self.screen, Screen::Playing) {
            return;
        }

        let finished = self.session.as_mut().is_some_and(|session| {
            session.tick();
            session.is_finished()
        });

        if finished {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.end_game();

        let result = session.to_result();
        let mut summary = GameSummary {
            won: session.won(),
            score: result.score,
            max_streak: result.max_streak,
            total_words: result.total_words,
            total_correct: result.total_correct,
            hints_used: result.hints_used,
            duration_seconds: result.duration_seconds,
            new_achievements: Vec::new(),
            persist_error: None,
        };

        // A store failure costs this game's progression, never the game
        match self.store.record_game(result) {
            Ok(newly_unlocked) => summary.new_achievements = newly_unlocked,
            Err(e) => summary.persist_error = Some(e.to_string()),
        }
        if let Ok(profile) = self.store.load_profile() {
            self.profile = profile;
        }

        self.screen = Screen::Results(Box::new(summary));
        self.input_buffer.clear();
        self.feedback = None;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wait for input, but never past the next countdown tick. Key
        // events and ticks are handled one at a time on this thread.
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
