use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// The commands that raw terminal events are translated into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Quit,
    /// The terminal was resized to the given number of columns & rows
    Resize(u16, u16),
}

impl Command {
    /// Translate an input event.  Events that don't correspond to a command
    /// (including key releases) yield `None`.
    pub(crate) fn from_event(event: &Event) -> Option<Command> {
        match *event {
            Event::Resize(cols, rows) => Some(Command::Resize(cols, rows)),
            ref ev => Command::from_key_event(ev.as_key_press_event()?),
        }
    }

    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ' | 'c')) => {
                Some(Command::Confirm)
            }
            (_, KeyCode::Esc) => Some(Command::Cancel),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Command::Up)]
    #[case(KeyCode::Char('w'), Command::Up)]
    #[case(KeyCode::Char('k'), Command::Up)]
    #[case(KeyCode::Down, Command::Down)]
    #[case(KeyCode::Char('s'), Command::Down)]
    #[case(KeyCode::Char('j'), Command::Down)]
    #[case(KeyCode::Left, Command::Left)]
    #[case(KeyCode::Char('a'), Command::Left)]
    #[case(KeyCode::Char('h'), Command::Left)]
    #[case(KeyCode::Right, Command::Right)]
    #[case(KeyCode::Char('d'), Command::Right)]
    #[case(KeyCode::Char('l'), Command::Right)]
    #[case(KeyCode::Enter, Command::Confirm)]
    #[case(KeyCode::Char(' '), Command::Confirm)]
    #[case(KeyCode::Char('c'), Command::Confirm)]
    #[case(KeyCode::Esc, Command::Cancel)]
    #[case(KeyCode::Char('q'), Command::Quit)]
    fn test_key_press(#[case] code: KeyCode, #[case] cmd: Command) {
        assert_eq!(Command::from_event(&Event::Key(code.into())), Some(cmd));
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(Command::from_event(&ev), Some(Command::Quit));
    }

    #[test]
    fn resize() {
        assert_eq!(
            Command::from_event(&Event::Resize(100, 40)),
            Some(Command::Resize(100, 40))
        );
    }

    #[rstest]
    #[case(Event::Key(KeyCode::Char('x').into()))]
    #[case(Event::Key(KeyCode::Tab.into()))]
    #[case(Event::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT)))]
    #[case(Event::FocusLost)]
    #[case(Event::Key(KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    }))]
    fn test_ignored(#[case] ev: Event) {
        assert_eq!(Command::from_event(&ev), None);
    }
}
