use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Move `pos` one step of `step` pixels in this direction.  Returns `None`
    /// if the result would have a negative or unrepresentable coordinate.
    pub(crate) fn advance(self, pos: Position, step: u16) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.checked_sub(step)?,
            Direction::Down => y = y.checked_add(step)?,
            Direction::Left => x = x.checked_sub(step)?,
            Direction::Right => x = x.checked_add(step)?,
        }
        Some(Position { x, y })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}
