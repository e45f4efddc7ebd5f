use crate::audio::AudioSink;
use crate::background::{record_session_start, spawn_detached, SessionSnapshot};
use crate::command::Command;
use crate::game::{Game, Viewport};
use crate::menu::MainMenu;
use crate::util::Globals;
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub(crate) struct App<A> {
    screen: Screen,
    globals: Globals,
    audio: A,
    /// Number of play sessions started so far
    sessions: u32,
}

impl<A: AudioSink> App<A> {
    pub(crate) fn new(globals: Globals, audio: A) -> App<A> {
        App {
            screen: Screen::Menu(MainMenu::new()),
            globals,
            audio,
            sessions: 0,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Menu(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    /// Wait for the next input event or game tick, whichever comes first, and
    /// act on it
    fn process_input(&mut self) -> io::Result<()> {
        let deadline = match self.screen {
            Screen::Game(ref mut game) => game.time_until_tick(),
            _ => None,
        };
        match deadline {
            Some(wait) if !poll(wait)? => self.tick(),
            _ => self.handle_event(&read()?),
        }
        Ok(())
    }

    fn tick(&mut self) {
        if let Screen::Game(ref mut game) = self.screen {
            if let Some(cue) = game.tick() {
                self.audio.play(cue);
            }
        }
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(cmd) = Command::from_event(event) else {
            return;
        };
        if let Command::Resize(cols, rows) = cmd {
            self.resize(Size::new(cols, rows));
        }
        let transition = match self.screen {
            Screen::Menu(ref mut menu) => menu.handle_command(cmd),
            Screen::Game(ref mut game) => game.handle_command(cmd),
            Screen::Quit => None,
        };
        if let Some(t) = transition {
            self.transition(t);
        }
    }

    fn resize(&mut self, size: Size) {
        match Viewport::for_terminal(size, self.globals.settings.cell_size()) {
            Ok(viewport) => {
                debug!(
                    width = viewport.width(),
                    height = viewport.height(),
                    "Viewport resized"
                );
                self.globals.viewport = viewport;
                if let Screen::Game(ref mut game) = self.screen {
                    game.resize(viewport);
                }
            }
            Err(e) => warn!(cols = size.width, rows = size.height, "Ignoring resize: {e}"),
        }
    }

    fn transition(&mut self, transition: Transition) {
        info!(?transition, "Switching screens");
        self.screen = match transition {
            Transition::Menu => Screen::Menu(MainMenu::new()),
            Transition::Play => {
                self.start_session();
                Screen::Game(Game::new(self.globals))
            }
            Transition::Quit => Screen::Quit,
        };
    }

    fn start_session(&mut self) {
        self.sessions = self.sessions.saturating_add(1);
        let snapshot = SessionSnapshot {
            number: self.sessions,
            viewport: Size::new(self.globals.viewport.width(), self.globals.viewport.height()),
            cell_size: self.globals.settings.cell_size(),
        };
        spawn_detached("session-start", move || {
            record_session_start(snapshot);
            Ok(())
        });
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

/// A request from the current screen to switch to another one
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Transition {
    Menu,
    Play,
    Quit,
}

#[derive(Clone, Debug)]
enum Screen {
    Menu(MainMenu),
    Game(Game),
    Quit,
}
