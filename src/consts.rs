//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Terminal window title
pub(crate) const TITLE: &str = "Snake Game";

/// Default number of snake movements per second
pub(crate) const DEFAULT_TICK_RATE: u32 = 8;

/// Default width & height of a grid cell in logical pixels
pub(crate) const DEFAULT_CELL_SIZE: u16 = 20;

/// Snake length at the start of a round
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 1;

/// Glyph for the parts of the snake and for the food
pub(crate) const CELL_SYMBOL: char = '●';

/// Glyph for the snake's head when it has collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Logical position of the score overlay
pub(crate) const SCORE_OFFSET: (u16, u16) = (10, 10);

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the score overlay
pub(crate) const SCORE_STYLE: Style = Style::new().fg(Color::White);

/// Style for the "you lost" prompt
pub(crate) const LOST_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
