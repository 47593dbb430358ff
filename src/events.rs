//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    maze::Direction,
    types::{EndMenuItem, MainMenuItem, MenuItem as _, PauseMenuItem, Screen},
    App,
};

/// Longest wait for input before the next frame is drawn, in milliseconds.
///
/// This keeps the torch flicker and the room fade animating while no key is pressed.
pub(crate) const FRAME_POLL_MS: u64 = 16;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a short
/// timeout so the animations keep running without input.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    Ok(())
}

/// Dispatches a single key press based on the current screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return Ok(());
    }

    match app.screen {
        Screen::MainMenu(item) => handle_main_menu(app, item, code)?,
        Screen::InGame => handle_in_game(app, code),
        Screen::Paused(item) => handle_pause_menu(app, item, code)?,
        Screen::Ended(item) => handle_end_menu(app, item, code)?,
    }

    Ok(())
}

/// Cursor movement shared by every menu.
enum MenuKey {
    /// Move the cursor down.
    Down,
    /// Move the cursor up.
    Up,
    /// Activate the highlighted item.
    Select,
    /// Leave the menu, where that makes sense.
    Back,
}

/// Maps a key to a menu action, if it has one.
const fn menu_key(code: KeyCode) -> Option<MenuKey> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(MenuKey::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(MenuKey::Up),
        KeyCode::Char('l') | KeyCode::Enter => Some(MenuKey::Select),
        KeyCode::Char('h') | KeyCode::Esc => Some(MenuKey::Back),
        _ => None,
    }
}

/// Maps a key to a walking direction: arrows or WASD.
const fn direction_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
        _ => None,
    }
}

/// Handles keys on the main menu.
///
/// Selecting a difficulty generates a new maze and enters the game.
fn handle_main_menu(app: &mut App, item: MainMenuItem, code: KeyCode) -> Result<()> {
    match menu_key(code) {
        Some(MenuKey::Down) => app.screen = Screen::MainMenu(item.next()),
        Some(MenuKey::Up) => app.screen = Screen::MainMenu(item.previous()),
        Some(MenuKey::Select) => match item.difficulty() {
            Some(difficulty) => app.start_game(difficulty)?,
            None => app.exit = true,
        },
        Some(MenuKey::Back) | None => {}
    }

    Ok(())
}

/// Handles keys while a maze is being played.
///
/// Move requests are forwarded to the session, which drops them while a room fade is running.
fn handle_in_game(app: &mut App, code: KeyCode) {
    if code == KeyCode::Esc {
        app.pause_game();
        return;
    }

    if let (Some(direction), Some(session)) = (direction_key(code), app.session.as_mut()) {
        let _ = session.move_player(direction);
    }
}

/// Handles keys on the pause menu.
fn handle_pause_menu(app: &mut App, item: PauseMenuItem, code: KeyCode) -> Result<()> {
    match menu_key(code) {
        Some(MenuKey::Down) => app.screen = Screen::Paused(item.next()),
        Some(MenuKey::Up) => app.screen = Screen::Paused(item.previous()),
        Some(MenuKey::Back) => app.resume_game(),
        Some(MenuKey::Select) => match item {
            PauseMenuItem::Resume => app.resume_game(),
            PauseMenuItem::Restart => app.restart_game()?,
            PauseMenuItem::Quit => app.quit_to_menu(),
        },
        None => {}
    }

    Ok(())
}

/// Handles keys on the end screen.
fn handle_end_menu(app: &mut App, item: EndMenuItem, code: KeyCode) -> Result<()> {
    match menu_key(code) {
        Some(MenuKey::Down) => app.screen = Screen::Ended(item.next()),
        Some(MenuKey::Up) => app.screen = Screen::Ended(item.previous()),
        Some(MenuKey::Select) => match item {
            EndMenuItem::PlayAgain => app.restart_game()?,
            EndMenuItem::MainMenu => app.quit_to_menu(),
        },
        Some(MenuKey::Back) => app.quit_to_menu(),
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::Position, types::Difficulty, Settings};

    /// A seeded app sitting on the main menu.
    fn create_test_app() -> App {
        App::new(Settings {
            difficulty: None,
            seed: Some(42),
            transition_ms: 1,
        })
        .expect("app creation succeeds")
    }

    /// Key that walks in `direction`.
    const fn arrow(direction: Direction) -> KeyCode {
        match direction {
            Direction::Up => KeyCode::Up,
            Direction::Right => KeyCode::Right,
            Direction::Down => KeyCode::Down,
            Direction::Left => KeyCode::Left,
        }
    }

    #[test]
    fn test_q_exits_from_any_screen() {
        let mut app = create_test_app();
        handle_key(&mut app, KeyCode::Char('q')).expect("key handled");
        assert!(app.exit);

        let mut app = create_test_app();
        app.start_game(Difficulty::Easy).expect("game starts");
        handle_key(&mut app, KeyCode::Char('q')).expect("key handled");
        assert!(app.exit);
    }

    #[test]
    fn test_main_menu_navigation_and_selection() {
        let mut app = create_test_app();

        handle_key(&mut app, KeyCode::Char('j')).expect("key handled");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Medium));
        handle_key(&mut app, KeyCode::Down).expect("key handled");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Hard));
        handle_key(&mut app, KeyCode::Char('k')).expect("key handled");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Medium));

        handle_key(&mut app, KeyCode::Enter).expect("key handled");
        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_main_menu_quit_item_exits() {
        let mut app = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Quit);

        handle_key(&mut app, KeyCode::Char('l')).expect("key handled");
        assert!(app.exit);
    }

    #[test]
    fn test_direction_keys() {
        assert_eq!(direction_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(direction_key(KeyCode::Char('D')), Some(Direction::Right));
        assert_eq!(direction_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(direction_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_arrow_moves_player_through_open_wall() {
        let mut app = create_test_app();
        app.start_game(Difficulty::Easy).expect("game starts");
        let grid = app
            .session
            .as_ref()
            .expect("a game is running")
            .navigator
            .grid()
            .clone();
        let open = Direction::ALL
            .into_iter()
            .find(|&direction| grid.is_open(Position::ORIGIN, direction))
            .expect("the origin has at least one passage");

        handle_key(&mut app, arrow(open)).expect("key handled");

        let session = app.session.as_ref().expect("a game is running");
        assert_ne!(session.navigator.position(), Position::ORIGIN);
        assert_eq!(session.moves, 1);
    }

    #[test]
    fn test_escape_pauses_and_resumes() {
        let mut app = create_test_app();
        app.start_game(Difficulty::Easy).expect("game starts");

        handle_key(&mut app, KeyCode::Esc).expect("key handled");
        assert_eq!(app.screen, Screen::Paused(PauseMenuItem::Resume));

        handle_key(&mut app, KeyCode::Esc).expect("key handled");
        assert_eq!(app.screen, Screen::InGame);
    }

    #[test]
    fn test_pause_menu_restart_and_quit() {
        let mut app = create_test_app();
        app.start_game(Difficulty::Hard).expect("game starts");
        app.screen = Screen::Paused(PauseMenuItem::Resume);

        handle_key(&mut app, KeyCode::Char('j')).expect("key handled");
        assert_eq!(app.screen, Screen::Paused(PauseMenuItem::Restart));
        handle_key(&mut app, KeyCode::Enter).expect("key handled");
        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.difficulty, Difficulty::Hard);

        app.screen = Screen::Paused(PauseMenuItem::Quit);
        handle_key(&mut app, KeyCode::Enter).expect("key handled");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Hard));
        assert!(app.session.is_none());
    }

    #[test]
    fn test_end_menu_actions() {
        let mut app = create_test_app();
        app.start_game(Difficulty::Easy).expect("game starts");
        app.screen = Screen::Ended(EndMenuItem::PlayAgain);

        handle_key(&mut app, KeyCode::Enter).expect("key handled");
        assert_eq!(app.screen, Screen::InGame);

        app.screen = Screen::Ended(EndMenuItem::PlayAgain);
        handle_key(&mut app, KeyCode::Char('j')).expect("key handled");
        assert_eq!(app.screen, Screen::Ended(EndMenuItem::MainMenu));
        handle_key(&mut app, KeyCode::Char('l')).expect("key handled");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Easy));
    }

    #[test]
    fn test_reaching_exit_ends_game() {
        let mut app = App::new(Settings {
            difficulty: Some(Difficulty::Easy),
            seed: Some(7),
            transition_ms: 1,
        })
        .expect("app creation succeeds");

        // Depth-first walk over the maze, pressing keys until the exit is reached.
        let grid = app
            .session
            .as_ref()
            .expect("a game is running")
            .navigator
            .grid()
            .clone();
        let mut trail = vec![Position::ORIGIN];
        let mut seen = vec![Position::ORIGIN];
        while app.screen == Screen::InGame {
            let here = *trail.last().expect("trail never empties before the exit");
            let next = Direction::ALL.into_iter().find_map(|direction| {
                let target = here.step(direction, grid.size())?;
                (grid.is_open(here, direction) && !seen.contains(&target))
                    .then_some((direction, target))
            });
            let (direction, target) = match next {
                Some(step) => {
                    seen.push(step.1);
                    trail.push(step.1);
                    step
                }
                None => {
                    let _ = trail.pop();
                    let back = *trail.last().expect("backtracking stays above the origin");
                    let direction = Direction::ALL
                        .into_iter()
                        .find(|&direction| here.step(direction, grid.size()) == Some(back))
                        .expect("trail cells are adjacent");
                    (direction, back)
                }
            };

            handle_key(&mut app, arrow(direction)).expect("key handled");
            std::thread::sleep(Duration::from_millis(3));
            app.tick();

            let position = app
                .session
                .as_ref()
                .map(|session| session.navigator.position());
            if app.screen == Screen::InGame {
                assert_eq!(position, Some(target), "every key press moves one room");
            }
        }

        assert_eq!(app.screen, Screen::Ended(EndMenuItem::PlayAgain));
    }
}
