mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::Transition;
use crate::command::Command;
use crate::consts;
use crate::util::center_horizontally;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
}

impl MainMenu {
    pub(crate) fn new() -> Self {
        MainMenu::default()
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Handle a command from the player.  Returns `Some` if the player chose
    /// to leave the menu.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Transition> {
        match (self.selection, cmd) {
            (_, Command::Quit | Command::Cancel) => return Some(Transition::Quit),
            (Selection::PlayButton, Command::Confirm) => return Some(Transition::Play),
            (Selection::QuitButton, Command::Confirm) => return Some(Transition::Quit),
            (Selection::PlayButton, Command::Down) => self.selection = Selection::QuitButton,
            (Selection::QuitButton, Command::Up) => self.selection = Selection::PlayButton,
            _ => (),
        }
        None
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [logo_area, instructions_area, play_area, quit_area] =
            Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1])
                .flex(Flex::Center)
                .spacing(1)
                .areas(area);
        Logo.render(center_horizontally(logo_area, Logo::WIDTH), buf);
        Instructions.render(
            center_horizontally(instructions_area, Instructions::WIDTH),
            buf,
        );
        button("Play", "Enter", self.selection == Selection::PlayButton).render(play_area, buf);
        button("Quit", "q", self.selection == Selection::QuitButton).render(quit_area, buf);
    }
}

fn button(label: &'static str, key: &'static str, selected: bool) -> Line<'static> {
    let style = if selected {
        consts::MENU_SELECTION_STYLE
    } else {
        Style::new()
    };
    Line::from_iter([
        Span::styled(format!("[{label} ("), style),
        Span::styled(key, consts::KEY_STYLE.patch(style)),
        Span::styled(")]", style),
    ])
    .centered()
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Selection {
    #[default]
    PlayButton,
    QuitButton,
}
