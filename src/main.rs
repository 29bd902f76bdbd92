use crossterm::{execute, terminal};
use marubatsu_ai::config::GameConfig;
use marubatsu_ai::display::{render_board, DisplayState};
use marubatsu_ai::error::GameError;
use marubatsu_ai::game::{Game, MoveEvent};
use marubatsu_ai::player::Difficulty;
use marubatsu_ai::score::Scoreboard;
use marubatsu_ai::ui::{self, Action};
use std::io;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // TUI を崩さないようログはファイルへ
    let log_file = std::fs::File::create("marubatsu.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = GameConfig::load_or_default();
    info!(?config, "starting marubatsu");

    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run(&config).await;

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

async fn run(config: &GameConfig) -> anyhow::Result<()> {
    let mut scores = Scoreboard::new();
    let mut difficulty = config.difficulty;

    loop {
        difficulty = match ui::select_difficulty(difficulty)? {
            Some(d) => d,
            None => return Ok(()),
        };
        info!(%difficulty, "difficulty selected");

        let mut game = Game::new(difficulty.controller(config.random_opening));
        play_match(&mut game, difficulty, config, &mut scores).await?;
    }
}

fn status_line(game: &Game, event: MoveEvent) -> String {
    let human = game.human_mark();
    match event {
        MoveEvent::Won(mark) if game.is_manual() => {
            format!("Player {} wins!  [r] Play again  [q] Menu", mark)
        }
        MoveEvent::Won(mark) if Some(mark) == human => {
            "You win!  [r] Play again  [q] Menu".to_string()
        }
        MoveEvent::Won(_) => "Computer wins!  [r] Play again  [q] Menu".to_string(),
        MoveEvent::Draw => "It's a draw!  [r] Play again  [q] Menu".to_string(),
        MoveEvent::None => format!(
            "Player {}'s turn  [Arrows]: Move | [Enter]: Place | [r]: Reset | [q]: Menu",
            game.current_player()
        ),
    }
}

/// 一つの難易度で遊ぶ。リセットすると記号選択に戻る
async fn play_match(
    game: &mut Game,
    difficulty: Difficulty,
    config: &GameConfig,
    scores: &mut Scoreboard,
) -> anyhow::Result<()> {
    let title = match game.controller_name() {
        Some(name) => format!("vs {} ({})", name, difficulty.label()),
        None => difficulty.label().to_string(),
    };

    loop {
        let human = match ui::select_symbol(game.is_manual())? {
            Some(mark) => mark,
            None => return Ok(()),
        };

        let mut state = DisplayState {
            title: title.clone(),
            tally: Some(scores.get(difficulty)),
            ..DisplayState::default()
        };

        let mut event = game.choose_symbol(human)?;
        state.last_move = game.history().last().copied();

        loop {
            if state.status_msg.is_none() {
                state.status_msg = Some(status_line(game, event));
            }
            render_board(game.board(), &state)?;
            state.status_msg = None;

            match ui::read_action()? {
                Action::Cursor(d_row, d_col) => state.move_cursor(d_row, d_col),
                Action::Place => {
                    event = match game.apply_human_move(state.cursor) {
                        Ok(ev) => ev,
                        Err(GameError::InvalidMove { reason, .. }) => {
                            state.status_msg = Some(format!("Invalid move: {}", reason));
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    };
                    state.last_move = Some(state.cursor);

                    if game.awaiting_computer() {
                        state.status_msg = Some("Computer is thinking...".to_string());
                        render_board(game.board(), &state)?;
                        state.status_msg = None;

                        // 待機中の入力は受け付けない
                        tokio::time::sleep(Duration::from_millis(config.think_delay_ms)).await;
                        ui::drain_input()?;

                        event = game.computer_reply()?;
                        state.last_move = game.history().last().copied();
                    }

                    if event.is_terminal() {
                        scores.record(difficulty, human, event);
                        state.tally = Some(scores.get(difficulty));
                    }
                }
                Action::Reset => {
                    game.reset();
                    break;
                }
                Action::Quit => return Ok(()),
            }
        }
    }
}
