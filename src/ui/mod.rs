use crate::core::Mark;
use crate::player::Difficulty;
use crossterm::{
    event::{self, Event, KeyCode},
    execute, terminal,
};
use std::io::{self, Write};
use std::time::Duration;

/// 対局中のキー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cursor(isize, isize),
    Place,
    Reset,
    Quit,
}

pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(-1, 0)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(1, 0)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(0, -1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(0, 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// キー入力を一つ待つ (100ms ごとにポーリング)
pub fn read_action() -> anyhow::Result<Action> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = action_for_key(key.code) {
                    return Ok(action);
                }
            }
        }
    }
}

/// 待機中に溜まった入力を捨てる
pub fn drain_input() -> anyhow::Result<()> {
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }
    Ok(())
}

fn clear_screen() -> anyhow::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    )?;
    Ok(())
}

/// 難易度選択 (↑/↓ or j/k / Enter / q)
pub fn select_difficulty(default: Difficulty) -> anyhow::Result<Option<Difficulty>> {
    let mut selected_index = Difficulty::ALL
        .iter()
        .position(|d| *d == default)
        .unwrap_or(0);

    loop {
        clear_screen()?;
        print!("=== Marubatsu ===\r\n\r\n");
        print!("Select difficulty (↑/↓ or j/k / Enter / q):\r\n");
        print!("-------------------------------------------\r\n");
        for (i, d) in Difficulty::ALL.iter().enumerate() {
            if i == selected_index {
                print!("> {}\r\n", d.label());
            } else {
                print!("  {}\r\n", d.label());
            }
        }
        io::stdout().flush()?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        selected_index = selected_index.saturating_sub(1);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        if selected_index < Difficulty::ALL.len() - 1 {
                            selected_index += 1;
                        }
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        let idx = c as usize - '1' as usize;
                        return Ok(Some(Difficulty::ALL[idx]));
                    }
                    KeyCode::Enter => return Ok(Some(Difficulty::ALL[selected_index])),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

/// 記号選択。X が先手
pub fn select_symbol(manual: bool) -> anyhow::Result<Option<Mark>> {
    clear_screen()?;
    if manual {
        print!("Player 1, choose your symbol: [x] X (moves first) / [o] O / [q] Quit\r\n");
    } else {
        print!("Choose your symbol: [x] X (moves first) / [o] O / [q] Quit\r\n");
    }
    io::stdout().flush()?;

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('x') | KeyCode::Char('X') => return Ok(Some(Mark::X)),
                    KeyCode::Char('o') | KeyCode::Char('O') => return Ok(Some(Mark::O)),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}
