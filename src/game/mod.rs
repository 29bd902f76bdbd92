use crate::core::{Board, Mark, Move};
use crate::error::GameError;
use crate::logic::{outcome, Outcome};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 対局の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// 記号選択待ち
    ChoosingSymbol,
    InProgress,
    Won(Mark),
    Drawn,
}

/// 一手ごとの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEvent {
    None,
    Won(Mark),
    Draw,
}

impl MoveEvent {
    pub fn is_terminal(self) -> bool {
        !matches!(self, MoveEvent::None)
    }
}

impl From<Option<Outcome>> for MoveEvent {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            Some(Outcome::Win(mark)) => MoveEvent::Won(mark),
            Some(Outcome::Draw) => MoveEvent::Draw,
            None => MoveEvent::None,
        }
    }
}

/// 対局管理
///
/// 思考ルーチンは対局の間ずっと同じもの。`None` なら二人対戦。
pub struct Game {
    board: Board,
    current_player: Mark,
    phase: Phase,
    human: Option<Mark>,
    /// コンピュータの応手待ち。この間は人間の手を受け付けない
    awaiting_computer: bool,
    history: Vec<Move>,
    controller: Option<Box<dyn PlayerController>>,
}

impl Game {
    pub fn new(controller: Option<Box<dyn PlayerController>>) -> Self {
        Game {
            board: Board::new(),
            current_player: Mark::FIRST,
            phase: Phase::ChoosingSymbol,
            human: None,
            awaiting_computer: false,
            history: Vec::new(),
            controller,
        }
    }

    /// 記号を決めて対局開始。コンピュータが先手ならその場で一手指す
    pub fn new_match(
        human: Mark,
        controller: Option<Box<dyn PlayerController>>,
    ) -> Result<(Self, MoveEvent), GameError> {
        let mut game = Game::new(controller);
        let event = game.choose_symbol(human)?;
        Ok((game, event))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.human
    }

    /// 二人対戦では `None`
    pub fn computer_mark(&self) -> Option<Mark> {
        match (&self.controller, self.human) {
            (Some(_), Some(human)) => Some(human.opponent()),
            _ => None,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.controller.is_none()
    }

    pub fn controller_name(&self) -> Option<&str> {
        self.controller.as_deref().map(|c| c.name())
    }

    pub fn awaiting_computer(&self) -> bool {
        self.awaiting_computer
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won(_) | Phase::Drawn)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Won(mark) => Some(Outcome::Win(mark)),
            Phase::Drawn => Some(Outcome::Draw),
            _ => None,
        }
    }

    pub fn choose_symbol(&mut self, human: Mark) -> Result<MoveEvent, GameError> {
        if self.phase != Phase::ChoosingSymbol {
            return Err(GameError::OutOfTurn(
                "symbol already chosen; reset first".to_string(),
            ));
        }

        self.human = Some(human);
        self.phase = Phase::InProgress;
        info!(human = %human, opponent = self.controller_name().unwrap_or("manual"), "match started");

        if self.computer_mark() == Some(self.current_player) {
            self.awaiting_computer = true;
            return self.computer_reply();
        }
        Ok(MoveEvent::None)
    }

    fn reject(&self, mv: Move, reason: &str) -> GameError {
        warn!(%mv, reason, "move rejected");
        GameError::InvalidMove {
            row: mv.row,
            col: mv.col,
            reason: reason.to_string(),
        }
    }

    /// 人間の着手。二人対戦ならどちらの手番でもよい
    pub fn apply_human_move(&mut self, mv: Move) -> Result<MoveEvent, GameError> {
        match self.phase {
            Phase::ChoosingSymbol => return Err(self.reject(mv, "no symbol chosen yet")),
            Phase::Won(_) | Phase::Drawn => return Err(self.reject(mv, "match is over")),
            Phase::InProgress => {}
        }
        if self.awaiting_computer {
            return Err(self.reject(mv, "waiting for the computer's reply"));
        }
        if !mv.is_on_board() {
            warn!(%mv, "move off the board");
            return Err(GameError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if !self.board.is_empty_at(mv) {
            return Err(self.reject(mv, "cell is occupied"));
        }

        let event = self.apply(mv)?;
        if !event.is_terminal() && self.computer_mark() == Some(self.current_player) {
            self.awaiting_computer = true;
        }
        Ok(event)
    }

    /// コンピュータの応手。`apply_human_move` の後、手番がコンピュータのときに呼ぶ
    pub fn computer_reply(&mut self) -> Result<MoveEvent, GameError> {
        if !self.awaiting_computer {
            return Err(GameError::OutOfTurn(
                "it is not the computer's turn".to_string(),
            ));
        }
        let (controller, computer) = match (&self.controller, self.computer_mark()) {
            (Some(c), Some(m)) => (c, m),
            _ => {
                return Err(GameError::OutOfTurn(
                    "no computer opponent in this match".to_string(),
                ))
            }
        };

        let mv = controller.choose_move(&self.board, computer.opponent(), computer)?;
        debug!(%mv, by = controller.name(), "computer move");
        // 置けなかった場合は応手待ちのまま
        let event = self.apply(mv)?;
        self.awaiting_computer = false;
        Ok(event)
    }

    /// 人間の着手とコンピュータの応手をまとめて行う
    pub fn play_turn(&mut self, mv: Move) -> Result<MoveEvent, GameError> {
        let event = self.apply_human_move(mv)?;
        if self.awaiting_computer {
            return self.computer_reply();
        }
        Ok(event)
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::FIRST;
        self.phase = Phase::ChoosingSymbol;
        self.human = None;
        self.awaiting_computer = false;
        self.history.clear();
        info!("match reset");
    }

    fn apply(&mut self, mv: Move) -> Result<MoveEvent, GameError> {
        self.board.place(mv, self.current_player)?;
        self.history.push(mv);

        let event = MoveEvent::from(outcome(&self.board));
        match event {
            MoveEvent::Won(mark) => {
                self.phase = Phase::Won(mark);
                info!(winner = %mark, moves = self.history.len(), "match won");
            }
            MoveEvent::Draw => {
                self.phase = Phase::Drawn;
                info!(moves = self.history.len(), "match drawn");
            }
            MoveEvent::None => {
                self.current_player = self.current_player.opponent();
            }
        }
        Ok(event)
    }
}
