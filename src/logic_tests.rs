#[cfg(test)]
mod tests {
    use crate::core::{Board, Mark, Move};
    use crate::game::{Game, MoveEvent};
    use crate::logic::{is_terminal, outcome, winner, winning_cell, Outcome, LINES};
    use crate::player::{HeuristicAI, MinimaxAI, PlayerController};
    use std::collections::HashSet;

    /// 3^9 通りの全盤面 (到達不能なものも含む)
    fn all_boards() -> Vec<Board> {
        let mut boards = Vec::with_capacity(19683);
        for code in 0..19683usize {
            let mut board = Board::new();
            let mut c = code;
            for index in 0..9 {
                let mv = Move::from_index(index).unwrap();
                match c % 3 {
                    1 => board.set(mv, Mark::X),
                    2 => board.set(mv, Mark::O),
                    _ => {}
                }
                c /= 3;
            }
            boards.push(board);
        }
        boards
    }

    /// 正規の手順で到達できる全局面
    fn reachable_boards() -> Vec<Board> {
        fn walk(board: Board, to_move: Mark, seen: &mut HashSet<Board>) {
            if !seen.insert(board) || is_terminal(&board) {
                return;
            }
            for mv in board.empty_cells() {
                let mut next = board;
                next.set(mv, to_move);
                walk(next, to_move.opponent(), seen);
            }
        }

        let mut seen = HashSet::new();
        walk(Board::new(), Mark::FIRST, &mut seen);
        seen.into_iter().collect()
    }

    /// 8通りの対称変換 (回転 k 回 + 左右反転)
    fn transform(mv: Move, rotations: usize, reflect: bool) -> Move {
        let (mut row, mut col) = (mv.row, mv.col);
        if reflect {
            col = 2 - col;
        }
        for _ in 0..rotations {
            let (r, c) = (col, 2 - row);
            row = r;
            col = c;
        }
        Move { row, col }
    }

    fn transform_board(board: &Board, rotations: usize, reflect: bool) -> Board {
        let mut out = Board::new();
        for index in 0..9 {
            let mv = Move::from_index(index).unwrap();
            if let Some(mark) = board.get(mv) {
                out.set(transform(mv, rotations, reflect), mark);
            }
        }
        out
    }

    fn completed_marks(board: &Board) -> HashSet<Mark> {
        LINES
            .iter()
            .filter_map(|line| {
                let marks: Vec<Option<Mark>> = line
                    .iter()
                    .map(|&(row, col)| board.get(Move { row, col }))
                    .collect();
                match marks[0] {
                    Some(m) if marks.iter().all(|c| *c == Some(m)) => Some(m),
                    _ => None,
                }
            })
            .collect()
    }

    #[test]
    fn test_full_iff_no_empty_cells() {
        for board in all_boards() {
            assert_eq!(board.is_full(), board.empty_cells().is_empty(), "\n{}", board);
        }
    }

    #[test]
    fn test_winner_invariant_under_symmetry() {
        for board in all_boards() {
            // 両方の記号が揃っている盤面は走査順で結果が変わるので除外
            if completed_marks(&board).len() > 1 {
                continue;
            }
            let expected = winner(&board);
            for rotations in 0..4 {
                for reflect in [false, true] {
                    let t = transform_board(&board, rotations, reflect);
                    assert_eq!(winner(&t), expected, "\n{}\n->\n{}", board, t);
                }
            }
        }
    }

    #[test]
    fn test_reachable_boards_have_at_most_one_winning_mark() {
        let boards = reachable_boards();
        // 既知の局面数
        assert_eq!(boards.len(), 5478);
        for board in boards {
            assert!(completed_marks(&board).len() <= 1, "\n{}", board);
            let x = board.count(Mark::X);
            let o = board.count(Mark::O);
            assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn test_heuristic_always_takes_available_win() {
        let ai = HeuristicAI::new("Heuristic");
        for board in reachable_boards() {
            if is_terminal(&board) {
                continue;
            }
            let to_move = if board.count(Mark::X) == board.count(Mark::O) {
                Mark::X
            } else {
                Mark::O
            };
            let opponent = to_move.opponent();

            if let Some(win) = winning_cell(&board, to_move) {
                let mv = ai.choose_move(&board, opponent, to_move).unwrap();
                assert_eq!(mv, win, "\n{}", board);
                let mut after = board;
                after.set(mv, to_move);
                assert_eq!(winner(&after), Some(to_move));
            } else if let Some(threat) = winning_cell(&board, opponent) {
                let mv = ai.choose_move(&board, opponent, to_move).unwrap();
                assert_eq!(mv, threat, "\n{}", board);
            }
        }
    }

    /// 相手の全ての手を試し、minimax 側が一度も負けないことを確認する
    fn assert_never_loses(board: Board, to_move: Mark, computer: Mark, ai: &MinimaxAI) {
        match outcome(&board) {
            Some(Outcome::Win(mark)) => {
                assert_eq!(mark, computer, "minimax lost:\n{}", board);
                return;
            }
            Some(Outcome::Draw) => return,
            None => {}
        }

        if to_move == computer {
            let mv = ai.choose_move(&board, computer.opponent(), computer).unwrap();
            let mut next = board;
            next.place(mv, computer).unwrap();
            assert_never_loses(next, to_move.opponent(), computer, ai);
        } else {
            for mv in board.empty_cells() {
                let mut next = board;
                next.set(mv, to_move);
                assert_never_loses(next, to_move.opponent(), computer, ai);
            }
        }
    }

    #[test]
    fn test_minimax_never_loses_as_second_player() {
        let ai = MinimaxAI::new("Minimax");
        assert_never_loses(Board::new(), Mark::X, Mark::O, &ai);
    }

    #[test]
    fn test_minimax_never_loses_as_first_player_from_any_opening() {
        // ランダムな初手を全て列挙し、二手目以降は最善手
        let ai = MinimaxAI::new("Minimax").with_random_opening(false);
        for opening in Board::new().empty_cells() {
            let mut board = Board::new();
            board.set(opening, Mark::X);
            assert_never_loses(board, Mark::O, Mark::X, &ai);
        }
    }

    #[test]
    fn test_heuristic_blocks_top_row() {
        let (mut game, _) =
            Game::new_match(Mark::X, Some(Box::new(HeuristicAI::new("Heuristic")))).unwrap();
        let top_row = [
            Move { row: 0, col: 0 },
            Move { row: 0, col: 1 },
            Move { row: 0, col: 2 },
        ];

        for mv in top_row {
            if game.is_over() {
                break;
            }
            let x_before = game.board().count(Mark::X);
            match game.play_turn(mv) {
                Ok(event) => assert_ne!(event, MoveEvent::Won(Mark::X)),
                // O が先に置いていたマスは拒否される
                Err(_) => assert_eq!(game.board().count(Mark::X), x_before),
            }

            // X が上段に二つあり三つ目が空いていれば、O が塞いでいるはず
            let xs = top_row
                .iter()
                .filter(|m| game.board().get(**m) == Some(Mark::X))
                .count();
            if xs == 2 {
                assert!(top_row.iter().any(|m| game.board().get(*m) == Some(Mark::O)));
            }
        }
        assert_ne!(winner(game.board()), Some(Mark::X));
    }

    #[test]
    fn test_corner_opening_against_minimax_is_a_draw() {
        let (mut game, _) = Game::new_match(
            Mark::X,
            Some(Box::new(MinimaxAI::new("Minimax").with_random_opening(false))),
        )
        .unwrap();
        assert_eq!(game.play_turn(Move { row: 0, col: 0 }), Ok(MoveEvent::None));
        // 角の初手に負けない応手は中央のみ
        assert_eq!(game.board().get(Move { row: 1, col: 1 }), Some(Mark::O));

        // 以降は人間側も最善手で指す
        let human_ai = MinimaxAI::new("Human").with_random_opening(false);
        let mut event = MoveEvent::None;
        while !game.is_over() {
            let mv = human_ai
                .choose_move(game.board(), Mark::O, Mark::X)
                .unwrap();
            event = game.play_turn(mv).unwrap();
        }
        assert_eq!(event, MoveEvent::Draw);
        assert_eq!(game.history().len(), 9);
    }
}
