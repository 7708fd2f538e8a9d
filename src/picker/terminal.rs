// Terminal front-end for the picker: ratatui owns the screen, crossterm
// supplies one blocking key read per frame.

use super::{view, Flow, Key, Picker, Selection};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{widgets::ListState, DefaultTerminal};

/// Map a crossterm key event to a picker key. Modified characters other
/// than Ctrl+C are dropped so they never reach the amount field.
pub fn translate(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let modified = event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::CtrlC,
        KeyCode::Char(_) if modified => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };
    Some(key)
}

/// Run the picker until the user quits and hand back the final selection.
/// The terminal is restored on both the success and the error path.
pub fn run(mut picker: Picker) -> Result<Selection> {
    let mut terminal = ratatui::try_init().context("Failed to initialise terminal")?;
    let result = event_loop(&mut terminal, &mut picker);
    ratatui::restore();
    result?;
    Ok(picker.finish())
}

fn event_loop(terminal: &mut DefaultTerminal, picker: &mut Picker) -> Result<()> {
    let mut list_state = ListState::default();
    loop {
        terminal
            .draw(|frame| view::render(frame, picker, &mut list_state))
            .context("Failed to draw picker")?;
        if let Event::Key(event) = event::read().context("Failed to read terminal event")? {
            if let Some(key) = translate(event) {
                if picker.update(key) == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }
}
