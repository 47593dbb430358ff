//! Type definitions and enums for the application state and navigation.

use clap::ValueEnum;

/// Difficulty tiers offered by the main menu.
///
/// The tier only decides the side of the generated maze; the generator itself accepts any
/// positive size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    /// A 5 by 5 maze.
    #[default]
    Easy,
    /// A 10 by 10 maze.
    Medium,
    /// A 15 by 15 maze.
    Hard,
}

impl Difficulty {
    /// Side of the maze generated for this tier.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 10,
            Self::Hard => 15,
        }
    }

    /// Uppercase name shown in the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu with the difficulty choices.
    MainMenu(MainMenuItem),
    /// A maze is being played.
    InGame,
    /// The game is paused and the pause menu is drawn over the room.
    Paused(PauseMenuItem),
    /// The exit was reached.
    Ended(EndMenuItem),
}

/// Shared behaviour of the vertical menus.
///
/// Every menu is a fixed list of items; the cursor moves through them without wrapping around.
pub(crate) trait MenuItem: Copy + PartialEq + Sized + 'static {
    /// Title drawn on the menu's border.
    const TITLE: &'static str;

    /// Items in display order.
    const ITEMS: &'static [Self];

    /// Text drawn for this item.
    fn label(self) -> &'static str;

    /// Position of this item within [`ITEMS`](MenuItem::ITEMS).
    fn index(self) -> usize {
        Self::ITEMS
            .iter()
            .position(|&item| item == self)
            .unwrap_or_default()
    }

    /// The item below this one, or this one if it is the last.
    #[must_use]
    fn next(self) -> Self {
        Self::ITEMS
            .get(self.index() + 1)
            .copied()
            .unwrap_or(self)
    }

    /// The item above this one, or this one if it is the first.
    #[must_use]
    fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::ITEMS.get(index))
            .copied()
            .unwrap_or(self)
    }
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// Starts a 5 by 5 maze.
    Easy,
    /// Starts a 10 by 10 maze.
    Medium,
    /// Starts a 15 by 15 maze.
    Hard,
    /// Leaves the game.
    Quit,
}

impl MainMenuItem {
    /// Difficulty started by this item, if it starts a game at all.
    pub(crate) const fn difficulty(self) -> Option<Difficulty> {
        match self {
            Self::Easy => Some(Difficulty::Easy),
            Self::Medium => Some(Difficulty::Medium),
            Self::Hard => Some(Difficulty::Hard),
            Self::Quit => None,
        }
    }
}

impl MenuItem for MainMenuItem {
    const TITLE: &'static str = "Torchmaze";
    const ITEMS: &'static [Self] = &[Self::Easy, Self::Medium, Self::Hard, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy (5x5)",
            Self::Medium => "Medium (10x10)",
            Self::Hard => "Hard (15x15)",
            Self::Quit => "Quit",
        }
    }
}

/// Pause menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PauseMenuItem {
    /// Back to the running game.
    Resume,
    /// A fresh maze of the same difficulty.
    Restart,
    /// Abandon the game and return to the main menu.
    Quit,
}

impl MenuItem for PauseMenuItem {
    const TITLE: &'static str = "Paused";
    const ITEMS: &'static [Self] = &[Self::Resume, Self::Restart, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Restart => "Restart",
            Self::Quit => "Main Menu",
        }
    }
}

/// End screen navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EndMenuItem {
    /// A fresh maze of the same difficulty.
    PlayAgain,
    /// Return to the main menu.
    MainMenu,
}

impl MenuItem for EndMenuItem {
    const TITLE: &'static str = "You found the exit!";
    const ITEMS: &'static [Self] = &[Self::PlayAgain, Self::MainMenu];

    fn label(self) -> &'static str {
        match self {
            Self::PlayAgain => "Play Again",
            Self::MainMenu => "Main Menu",
        }
    }
}
