use ratatui::layout::{Position, Size};
use thiserror::Error;

/// The playable area, measured in logical pixels.  Every valid snake or food
/// position lies in `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    pub(crate) fn new(width: u16, height: u16) -> Result<Viewport, ViewportError> {
        if width == 0 || height == 0 {
            Err(ViewportError::Empty { width, height })
        } else {
            Ok(Viewport { width, height })
        }
    }

    /// Compute the viewport for a terminal of the given size, with each
    /// terminal cell displaying one grid cell of `cell_size` pixels.  Fails
    /// if either dimension is zero or doesn't fit in a `u16`.
    pub(crate) fn for_terminal(size: Size, cell_size: u16) -> Result<Viewport, ViewportError> {
        let too_large = ViewportError::TooLarge {
            cols: size.width,
            rows: size.height,
            cell_size,
        };
        let width = size.width.checked_mul(cell_size).ok_or(too_large)?;
        let height = size.height.checked_mul(cell_size).ok_or(too_large)?;
        Viewport::new(width, height)
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The grid-aligned position nearest to the middle of the viewport,
    /// rounding down
    pub(crate) fn center(self, cell_size: u16) -> Position {
        Position::new(
            align_down(self.width / 2, cell_size),
            align_down(self.height / 2, cell_size),
        )
    }

    /// Iterate over the grid-aligned positions at which food may be placed,
    /// i.e., those in `[0, width - cell_size) × [0, height - cell_size)`.  If
    /// the viewport is no more than one cell wide (or tall), 0 is used for
    /// that coordinate.
    pub(crate) fn food_positions(self, cell_size: u16) -> impl Iterator<Item = Position> {
        let xs = aligned_below(self.width, cell_size);
        let ys = aligned_below(self.height, cell_size);
        ys.flat_map(move |y| xs.clone().map(move |x| Position::new(x, y)))
    }
}

fn align_down(n: u16, cell_size: u16) -> u16 {
    n - n % cell_size
}

fn aligned_below(extent: u16, cell_size: u16) -> impl Iterator<Item = u16> + Clone {
    let limit = extent.saturating_sub(cell_size).max(1);
    (0..limit).step_by(usize::from(cell_size))
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ViewportError {
    #[error("viewport must be positive in both dimensions, got {width}x{height}")]
    Empty { width: u16, height: u16 },
    #[error("{cols}x{rows} terminal is too large for a cell size of {cell_size}")]
    TooLarge { cols: u16, rows: u16, cell_size: u16 },
}
