use crate::config::GameConfig;
use crate::game::Viewport;
use ratatui::layout::{Flex, Layout, Rect};

/// State shared by all screens of the app and handed to each new game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) settings: GameConfig,
    pub(crate) viewport: Viewport,
}

/// Return the sub-rectangle of `area` with the given width, centered
/// horizontally
pub(crate) fn center_horizontally(area: Rect, width: u16) -> Rect {
    let [centered] = Layout::horizontal([width])
        .flex(Flex::Center)
        .areas(area);
    centered
}
