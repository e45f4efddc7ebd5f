//! Drawing primitives for the game screens.
//!
//! Everything above this module thinks in logical pixels; a [`Canvas`] maps
//! those onto terminal cells by dividing by the cell size, so one grid cell
//! occupies exactly one terminal cell.
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    cell_size: u16,
}

impl<'a> Canvas<'a> {
    pub(crate) fn new(area: Rect, buf: &'a mut Buffer, cell_size: u16) -> Canvas<'a> {
        Canvas {
            area,
            buf,
            cell_size,
        }
    }
}

impl Canvas<'_> {
    pub(crate) fn clear(&mut self) {
        Clear.render(self.area, self.buf);
    }

    /// Draw a filled circle in the grid cell at `pos`
    pub(crate) fn draw_circle_cell(&mut self, pos: Position, style: Style) {
        self.draw_glyph(pos, consts::CELL_SYMBOL, style);
    }

    pub(crate) fn draw_glyph(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(p) = self.to_cell(pos) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut(p) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }

    /// Draw a single line of text starting at `pos`, clipped at the right
    /// edge
    pub(crate) fn draw_text(&mut self, text: &str, style: Style, pos: Position) {
        let Some(p) = self.to_cell(pos) else {
            return;
        };
        let row = Rect {
            x: p.x,
            y: p.y,
            width: self.area.right().saturating_sub(p.x),
            height: 1,
        };
        Span::styled(text, style).render(row, self.buf);
    }

    /// Draw a single line of text horizontally centered on the row containing
    /// logical y-coordinate `y`
    pub(crate) fn draw_centered_text(&mut self, text: &str, style: Style, y: u16) {
        let Some(p) = self.to_cell(Position::new(0, y)) else {
            return;
        };
        let row = Rect {
            y: p.y,
            height: 1,
            ..self.area
        };
        Line::from(Span::styled(text, style))
            .centered()
            .render(row, self.buf);
    }

    /// Convert a logical position to the terminal cell displaying it, if that
    /// cell is within the canvas
    fn to_cell(&self, pos: Position) -> Option<Position> {
        let x = self.area.x.checked_add(pos.x / self.cell_size)?;
        let y = self.area.y.checked_add(pos.y / self.cell_size)?;
        let p = Position { x, y };
        self.area.contains(p).then_some(p)
    }
}
