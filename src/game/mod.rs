mod direction;
mod snake;
mod viewport;
pub(crate) use self::viewport::Viewport;
use self::direction::Direction;
use self::snake::Snake;
use crate::app::Transition;
use crate::audio::Cue;
use crate::command::Command;
use crate::consts;
use crate::render::Canvas;
use crate::util::Globals;
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
    Frame,
};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const LOST_MESSAGE: &str = "You Lost! Press C to Play Again, Esc for Menu, or Q to Quit";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    food: Position,
    /// A turn requested since the last tick, to be applied on the next one
    queued_turn: Option<Direction>,
    state: GameState,
    globals: Globals,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        let head = globals.viewport.center(globals.settings.cell_size());
        let mut game = Game {
            rng,
            snake: Snake::new(head),
            food: Position::ORIGIN,
            queued_turn: None,
            state: GameState::Playing,
            globals,
            next_tick: None,
        };
        game.place_food();
        game
    }

    /// Advance the game by one step.  Returns the sound to play, if any.
    pub(crate) fn tick(&mut self) -> Option<Cue> {
        self.next_tick = None;
        if !self.playing() {
            return None;
        }
        if let Some(direction) = self.queued_turn.take() {
            self.snake.turn(direction);
        }
        // Nothing happens until the player picks a direction
        let Some(direction) = self.snake.direction() else {
            return None;
        };
        let viewport = self.viewport();
        let Some(head) = direction
            .advance(self.snake.head(), self.cell_size())
            .filter(|&p| viewport.contains(p))
        else {
            return Some(self.die("wall"));
        };
        self.snake.advance(head);
        if self.snake.bites_itself() {
            return Some(self.die("self"));
        }
        if head == self.food {
            self.snake.grow();
            self.place_food();
            debug!(score = self.score(), "Snake ate");
            return Some(Cue::Eat);
        }
        None
    }

    /// Handle a command from the player.  Returns `Some` if the player is
    /// leaving the game.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Transition> {
        match (self.state, cmd) {
            (_, Command::Quit) => return Some(Transition::Quit),
            (_, Command::Cancel) => return Some(Transition::Menu),
            (GameState::Playing, Command::Up) => self.queue_turn(Direction::Up),
            (GameState::Playing, Command::Down) => self.queue_turn(Direction::Down),
            (GameState::Playing, Command::Left) => self.queue_turn(Direction::Left),
            (GameState::Playing, Command::Right) => self.queue_turn(Direction::Right),
            (GameState::Dead, Command::Confirm) => self.restart(),
            _ => (),
        }
        None
    }

    /// Start a new round in place with a fresh snake & food
    pub(crate) fn restart(&mut self) {
        self.snake = Snake::new(self.viewport().center(self.cell_size()));
        self.queued_turn = None;
        self.state = GameState::Playing;
        self.next_tick = None;
        self.place_food();
        info!("Round restarted");
    }

    fn place_food(&mut self) {
        self.food = self
            .viewport()
            .food_positions(self.cell_size())
            .choose(&mut self.rng)
            .unwrap_or(Position::ORIGIN);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Change the playable area.  The snake & food are left where they are,
    /// even if that is now out of bounds.
    pub(crate) fn resize(&mut self, viewport: Viewport) {
        self.globals.viewport = viewport;
    }

    /// Return how long to wait for input before the next tick is due, or
    /// `None` if the game isn't running
    pub(crate) fn time_until_tick(&mut self) -> Option<Duration> {
        if !self.playing() {
            return None;
        }
        let period = self.globals.settings.tick_period();
        let when = *self.next_tick.get_or_insert_with(|| Instant::now() + period);
        Some(when.saturating_duration_since(Instant::now()))
    }

    pub(crate) fn score(&self) -> usize {
        self.snake.length().saturating_sub(1)
    }

    fn queue_turn(&mut self, direction: Direction) {
        if self.queued_turn.is_none() && self.snake.can_turn(direction) {
            self.queued_turn = Some(direction);
        }
    }

    fn die(&mut self, cause: &'static str) -> Cue {
        self.state = GameState::Dead;
        info!(cause, score = self.score(), "Snake died");
        Cue::Death
    }

    fn playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.globals.viewport
    }

    fn cell_size(&self) -> u16 {
        self.globals.settings.cell_size()
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = Canvas::new(area, buf, self.cell_size());
        canvas.clear();
        canvas.draw_circle_cell(self.food, consts::FOOD_STYLE);
        for &p in self.snake.segments() {
            canvas.draw_circle_cell(p, consts::SNAKE_STYLE);
        }
        canvas.draw_text(
            &format!("Score: {}", self.score()),
            consts::SCORE_STYLE,
            Position::from(consts::SCORE_OFFSET),
        );
        if self.state == GameState::Dead {
            // Draw the head last so that, if it's a collision, we overwrite
            // whatever it's colliding with
            canvas.draw_glyph(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
            canvas.draw_centered_text(
                LOST_MESSAGE,
                consts::LOST_STYLE,
                self.viewport().height() / 3,
            );
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Playing,
    /// The snake hit a wall or itself.  Waiting for the player to choose
    /// what to do next.
    Dead,
}
