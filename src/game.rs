//! Game session: turn order and outcome tracking
//!
//! X (the human) always moves first and the sides alternate. After every
//! move the outcome is re-derived from the placed stone: a five through it
//! wins, otherwise a full board is a draw.

use log::info;

use crate::board::{Board, Player, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{EngineError, MoveError};
use crate::rules::{check_win, find_winner};

/// Outcome of a game as seen after the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Outcome of an arbitrary position, when the last move is unknown.
pub fn outcome(board: &Board) -> GameOutcome {
    match find_winner(board) {
        Some(player) => GameOutcome::Win(player),
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

/// Place the human's stone at `(row, col)` on `board`.
///
/// Fails when the coordinates are off the board, the game is already
/// decided or the cell is taken; the board is left unchanged in every case.
pub fn apply_human_move(board: &mut Board, row: usize, col: usize) -> Result<(), MoveError> {
    let pos = Pos::try_new(row, col)?;
    if outcome(board).is_over() {
        return Err(MoveError::GameOver);
    }
    board.set(pos, Player::X)
}

/// Outcome right after `player` played `pos`.
fn outcome_after(board: &Board, pos: Pos, player: Player) -> GameOutcome {
    if check_win(board, pos, player) {
        GameOutcome::Win(player)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// One game between the human and the computer.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Player,
    outcome: GameOutcome,
    last_move: Option<Pos>,
    history: Vec<(Pos, Player)>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: GameOutcome::InProgress,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Resume from a position with `turn` to move.
    pub fn from_board(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            outcome: outcome(&board),
            last_move: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Moves played since the game started or was resumed
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    pub fn is_human_turn(&self) -> bool {
        !self.outcome.is_over() && self.turn == Player::X
    }

    fn play(&mut self, pos: Pos, player: Player) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.turn != player {
            return Err(MoveError::NotYourTurn(player));
        }

        self.board.set(pos, player)?;
        self.history.push((pos, player));
        self.last_move = Some(pos);

        self.outcome = outcome_after(&self.board, pos, player);
        match self.outcome {
            GameOutcome::InProgress => self.turn = player.opponent(),
            GameOutcome::Win(winner) => {
                info!("{:?} wins with {} after {} moves", winner, pos, self.history.len())
            }
            GameOutcome::Draw => info!("draw after {} moves", self.history.len()),
        }
        Ok(self.outcome)
    }

    /// Play the human's move.
    pub fn apply_human_move(&mut self, pos: Pos) -> Result<GameOutcome, MoveError> {
        self.play(pos, Player::X)
    }

    /// Ask `engine` for the computer's move and play it.
    pub fn apply_computer_move(&mut self, engine: &mut AIEngine) -> Result<MoveResult, EngineError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver.into());
        }
        if self.turn != Player::O {
            return Err(MoveError::NotYourTurn(Player::O).into());
        }

        let result = engine.choose_move(&self.board)?;
        self.play(result.best_move, Player::O)?;
        Ok(result)
    }

    /// Clear the board and hand the first move back to X.
    pub fn restart(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        self.outcome = GameOutcome::InProgress;
        self.last_move = None;
        self.history.clear();
    }

    /// Status line for the current state.
    pub fn status(&self) -> &'static str {
        match self.outcome {
            GameOutcome::Win(Player::X) => "You win!",
            GameOutcome::Win(Player::O) => "Computer wins!",
            GameOutcome::Draw => "Draw!",
            GameOutcome::InProgress if self.turn == Player::X => "Your turn",
            GameOutcome::InProgress => "Computer is thinking...",
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::MoveSource;

    fn engine() -> AIEngine {
        AIEngine::with_config(EngineConfig::default().with_seed(5)).unwrap()
    }

    /// Full draw pattern with one X cell left open.
    fn almost_drawn() -> (Board, Pos) {
        let open = Pos::new(14, 13);
        let mut board = Board::new();
        for pos in Pos::all().filter(|&pos| pos != open) {
            let band = (pos.col as usize + 2 * (pos.row as usize % 2)) / 2 % 2;
            let player = if band == 0 { Player::X } else { Player::O };
            board.place_stone(pos, player);
        }
        (board, open)
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(game.is_human_turn());
        assert_eq!(game.status(), "Your turn");
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        let mut engine = engine();

        game.apply_human_move(Pos::new(7, 7)).unwrap();
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.status(), "Computer is thinking...");
        assert_eq!(
            game.apply_human_move(Pos::new(0, 0)),
            Err(MoveError::NotYourTurn(Player::X))
        );

        let result = game.apply_computer_move(&mut engine).unwrap();
        assert_eq!(result.source, MoveSource::Search);
        assert_eq!(game.last_move(), Some(result.best_move));
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.history().len(), 2);
        assert_eq!(
            game.apply_computer_move(&mut engine),
            Err(EngineError::Move(MoveError::NotYourTurn(Player::O)))
        );
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new();
        let mut engine = engine();
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        let reply = game.apply_computer_move(&mut engine).unwrap().best_move;

        assert_eq!(
            game.apply_human_move(reply),
            Err(MoveError::Occupied {
                row: reply.row as usize,
                col: reply.col as usize
            })
        );
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_human_win_ends_game() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(3, c), Player::X);
        }
        for c in 0..4 {
            board.place_stone(Pos::new(5, c), Player::O);
        }
        let mut game = Game::from_board(board, Player::X);

        assert_eq!(
            game.apply_human_move(Pos::new(3, 4)),
            Ok(GameOutcome::Win(Player::X))
        );
        assert_eq!(game.status(), "You win!");
        assert!(!game.is_human_turn());
        assert_eq!(
            game.apply_human_move(Pos::new(9, 9)),
            Err(MoveError::GameOver)
        );
        assert_eq!(
            game.apply_computer_move(&mut engine()),
            Err(EngineError::Move(MoveError::GameOver))
        );
    }

    #[test]
    fn test_computer_completes_five() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(12, c), Player::O);
        }
        board.place_stone(Pos::new(0, 0), Player::X);
        board.place_stone(Pos::new(0, 2), Player::X);
        board.place_stone(Pos::new(0, 4), Player::X);
        board.place_stone(Pos::new(0, 6), Player::X);
        let mut game = Game::from_board(board, Player::O);

        let result = game.apply_computer_move(&mut engine()).unwrap();
        assert_eq!(result.best_move, Pos::new(12, 4));
        assert_eq!(game.outcome(), GameOutcome::Win(Player::O));
        assert_eq!(game.status(), "Computer wins!");
    }

    #[test]
    fn test_last_cell_draws() {
        let (board, open) = almost_drawn();
        let mut game = Game::from_board(board, Player::X);
        assert_eq!(game.outcome(), GameOutcome::InProgress);

        assert_eq!(game.apply_human_move(open), Ok(GameOutcome::Draw));
        assert!(game.board().is_full());
        assert_eq!(game.status(), "Draw!");
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        game.apply_computer_move(&mut engine()).unwrap();

        game.restart();
        assert!(game.board().is_board_empty());
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert_eq!(game.last_move(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_outcome_of_position() {
        let (mut board, open) = almost_drawn();
        assert_eq!(outcome(&board), GameOutcome::InProgress);
        board.place_stone(open, Player::X);
        assert_eq!(outcome(&board), GameOutcome::Draw);

        let mut board = Board::new();
        for r in 0..5 {
            board.place_stone(Pos::new(r, r), Player::O);
        }
        assert_eq!(outcome(&board), GameOutcome::Win(Player::O));
    }

    #[test]
    fn test_free_apply_human_move() {
        let mut board = Board::new();
        apply_human_move(&mut board, 4, 4).unwrap();
        assert_eq!(board.get(Pos::new(4, 4)).player(), Some(Player::X));

        assert_eq!(
            apply_human_move(&mut board, 4, 4),
            Err(MoveError::Occupied { row: 4, col: 4 })
        );

        for c in 0..5 {
            board.place_stone(Pos::new(10, c), Player::O);
        }
        let before = board;
        assert_eq!(
            apply_human_move(&mut board, 14, 14),
            Err(MoveError::GameOver)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_free_apply_human_move_off_board() {
        let mut board = Board::new();
        for (row, col) in [(15, 0), (0, 15), (15, 15), (usize::MAX, 3)] {
            assert_eq!(
                apply_human_move(&mut board, row, col),
                Err(MoveError::OutOfBounds { row, col })
            );
        }
        assert_eq!(board, Board::new());
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.empty_cells().count(), 225);
        assert_eq!(outcome(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_game_rejects_hand_built_off_board_pos() {
        let mut game = Game::new();
        assert_eq!(
            game.apply_human_move(Pos { row: 15, col: 0 }),
            Err(MoveError::OutOfBounds { row: 15, col: 0 })
        );
        assert_eq!(game.board().stone_count(), 0);
        assert_eq!(game.turn(), Player::X);
        assert!(game.history().is_empty());
    }
}
