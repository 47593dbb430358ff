//! Core application state and logic for the maze game.

use color_eyre::eyre::{Result, WrapErr as _};
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    events,
    session::Session,
    settings::Settings,
    types::{Difficulty, EndMenuItem, MainMenuItem, PauseMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to. The maze itself lives
/// in the [`Session`], which only exists while a game is running or paused.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Options the game was launched with.
    pub(crate) settings: Settings,
    /// Source of randomness for every maze generated during this run.
    ///
    /// Seeded once at launch, either from the command line or from the operating system, so a
    /// given seed replays the same sequence of mazes across restarts.
    pub(crate) rng: StdRng,
    /// Difficulty of the last game started, reused by restarts.
    pub(crate) difficulty: Difficulty,
    /// The game in progress, if any.
    pub(crate) session: Option<Session>,
}

impl App {
    /// Creates the application from the parsed command line.
    ///
    /// When a difficulty was given on the command line the first game starts right away instead of
    /// showing the main menu.
    ///
    /// # Errors
    ///
    /// This function returns an error if the first maze cannot be generated.
    pub fn new(settings: Settings) -> Result<Self> {
        let rng = settings
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut app = Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Easy),
            rng,
            difficulty: settings.difficulty.unwrap_or_default(),
            session: None,
            settings,
        };
        if let Some(difficulty) = app.settings.difficulty {
            app.start_game(difficulty)?;
        }

        Ok(app)
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws a frame, handles user input and advances the animations until the exit
    /// condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    /// - Maze generation failures when a new game starts.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
            self.tick();
        }

        Ok(())
    }

    /// Starts a fresh maze at `difficulty`, discarding any game in progress.
    pub(crate) fn start_game(&mut self, difficulty: Difficulty) -> Result<()> {
        let session = Session::new(difficulty, &mut self.rng, self.settings.transition())
            .wrap_err("failed to start a new game")?;

        self.difficulty = difficulty;
        self.session = Some(session);
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Starts a fresh maze at the difficulty of the last game.
    pub(crate) fn restart_game(&mut self) -> Result<()> {
        self.start_game(self.difficulty)
    }

    /// Drops the current game and shows the main menu with the last difficulty highlighted.
    pub(crate) fn quit_to_menu(&mut self) {
        self.session = None;
        self.screen = Screen::MainMenu(match self.difficulty {
            Difficulty::Easy => MainMenuItem::Easy,
            Difficulty::Medium => MainMenuItem::Medium,
            Difficulty::Hard => MainMenuItem::Hard,
        });
    }

    /// Opens the pause menu over a running game.
    pub(crate) fn pause_game(&mut self) {
        if self.screen == Screen::InGame {
            self.screen = Screen::Paused(PauseMenuItem::Resume);
        }
    }

    /// Closes the pause menu.
    pub(crate) fn resume_game(&mut self) {
        if matches!(self.screen, Screen::Paused(_)) {
            self.screen = Screen::InGame;
        }
    }

    /// Advances the running game by one frame and detects its completion.
    pub(crate) fn tick(&mut self) {
        if self.screen != Screen::InGame {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.tick();
        if session.is_complete() {
            self.screen = Screen::Ended(EndMenuItem::PlayAgain);
        }
    }
}
