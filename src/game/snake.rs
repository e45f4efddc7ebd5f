use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The player's snake
///
/// All positions are in logical pixels relative to the top-left corner of the
/// viewport.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the snake's segments, with the head at the
    /// back.  Never empty.
    pub(super) segments: VecDeque<Position>,

    /// The maximum number of segments
    pub(super) length: usize,

    /// The direction in which the snake is moving, or `None` if it hasn't
    /// started moving yet
    pub(super) direction: Option<Direction>,
}

impl Snake {
    /// Create a new, motionless snake consisting of just a head at `head`
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
            length: consts::INITIAL_SNAKE_LENGTH,
            direction: None,
        }
    }

    pub(super) fn head(&self) -> Position {
        *self
            .segments
            .back()
            .expect("snake should always have at least one segment")
    }

    pub(super) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(super) fn length(&self) -> usize {
        self.length
    }

    pub(super) fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Can the snake start moving in `direction`?  Turning is only allowed
    /// onto an axis along which the snake is not currently moving, so it can
    /// never double back into its own neck.
    pub(super) fn can_turn(&self, direction: Direction) -> bool {
        self.direction
            .is_none_or(|current| current.axis() != direction.axis())
    }

    /// Change the snake's direction to `direction` if allowed.  Returns
    /// whether the turn happened.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        let ok = self.can_turn(direction);
        if ok {
            self.direction = Some(direction);
        }
        ok
    }

    /// Append `head` as the new head, dropping segments from the tail until
    /// the snake is no longer than its length
    pub(super) fn advance(&mut self, head: Position) {
        self.segments.push_back(head);
        while self.segments.len() > self.length {
            let _ = self.segments.pop_front();
        }
    }

    /// Does the head occupy the same position as any other segment?
    pub(super) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.segments.iter().rev().skip(1).any(|&p| p == head)
    }

    /// Extend the snake's length by one in response to eating
    pub(super) fn grow(&mut self) {
        self.length += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Direction::Up, true)]
    #[case(None, Direction::Left, true)]
    #[case(Some(Direction::Right), Direction::Left, false)]
    #[case(Some(Direction::Right), Direction::Right, false)]
    #[case(Some(Direction::Right), Direction::Up, true)]
    #[case(Some(Direction::Right), Direction::Down, true)]
    #[case(Some(Direction::Up), Direction::Down, false)]
    #[case(Some(Direction::Up), Direction::Left, true)]
    fn test_turn(
        #[case] current: Option<Direction>,
        #[case] requested: Direction,
        #[case] accepted: bool,
    ) {
        let mut snake = Snake::new(Position::new(400, 300));
        snake.direction = current;
        assert_eq!(snake.turn(requested), accepted);
        if accepted {
            assert_eq!(snake.direction, Some(requested));
        } else {
            assert_eq!(snake.direction, current);
        }
    }

    #[test]
    fn advance_drops_tail() {
        let mut snake = Snake::new(Position::new(420, 300));
        snake.segments = VecDeque::from([
            Position::new(380, 300),
            Position::new(400, 300),
            Position::new(420, 300),
        ]);
        snake.length = 3;
        snake.advance(Position::new(440, 300));
        assert_eq!(
            snake.segments(),
            &VecDeque::from([
                Position::new(400, 300),
                Position::new(420, 300),
                Position::new(440, 300),
            ])
        );
    }

    #[test]
    fn growth_keeps_tail() {
        let mut snake = Snake::new(Position::new(400, 300));
        snake.grow();
        assert_eq!(snake.length(), 2);
        snake.advance(Position::new(400, 320));
        assert_eq!(
            snake.segments(),
            &VecDeque::from([Position::new(400, 300), Position::new(400, 320)])
        );
    }

    #[test]
    fn bites_itself() {
        let mut snake = Snake::new(Position::new(0, 0));
        snake.segments = VecDeque::from([
            Position::new(40, 40),
            Position::new(60, 40),
            Position::new(60, 60),
            Position::new(40, 60),
            Position::new(40, 40),
        ]);
        snake.length = 5;
        assert!(snake.bites_itself());
    }
}
