use crate::core::{Board, Mark, Move, BOARD_SIZE};
use crate::score::Tally;
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

pub struct DisplayState {
    pub cursor: Move,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub show_cursor: bool,
    /// 見出しに出す対戦相手名
    pub title: String,
    pub tally: Option<Tally>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Move { row: 1, col: 1 },
            status_msg: None,
            last_move: None,
            show_cursor: true, // Default to showing cursor
            title: String::new(),
            tally: None,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let clamp = |v: usize, d: isize| {
            (v as isize + d).clamp(0, BOARD_SIZE as isize - 1) as usize
        };
        self.cursor = Move {
            row: clamp(self.cursor.row, d_row),
            col: clamp(self.cursor.col, d_col),
        };
    }
}

pub fn render_board(board: &Board, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Marubatsu {} ===\r\n", state.title);
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    print!("    ");
    for col in 0..BOARD_SIZE {
        print!("  {} ", col);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    for (row, cells) in board.rows().iter().enumerate() {
        print!("{:2} |", row);
        for (col, cell) in cells.iter().enumerate() {
            let pos = Move { row, col };
            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_last_move = state.last_move == Some(pos);

            let char_str = cell.map(Mark::as_char).unwrap_or('.');
            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };
            let cell_text = format!("{}{}{} ", prefix, char_str, suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else {
                match cell {
                    Some(Mark::X) => print!("{}", cell_text.cyan()),
                    Some(Mark::O) => print!("{}", cell_text.magenta()),
                    None => print!("{}", cell_text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    if let Some(tally) = &state.tally {
        print!(
            "\r\nYou: {}  Opponent: {}  Draws: {}\r\n",
            tally.user, tally.opponent, tally.draws
        );
    }
    out.flush()
}
