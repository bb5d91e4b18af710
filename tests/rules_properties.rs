use gomoku::board::{Board, Cell, Player, Pos, BOARD_SIZE};
use gomoku::eval::evaluate;
use gomoku::rules::{check_win, find_winner, is_draw, DIRECTIONS};
use gomoku::search::{candidates, search, INF, WIN_SCORE};
use gomoku::{outcome, GameOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LAST: u8 = BOARD_SIZE as u8 - 1;

/// The seven non-identity symmetries of the square that map lines to lines.
const SYMMETRIES: [fn(Pos) -> Pos; 7] = [
    |p| Pos::new(p.row, LAST - p.col),
    |p| Pos::new(LAST - p.row, p.col),
    |p| Pos::new(p.col, p.row),
    |p| Pos::new(LAST - p.col, LAST - p.row),
    |p| Pos::new(LAST - p.row, LAST - p.col),
    |p| Pos::new(p.col, LAST - p.row),
    |p| Pos::new(LAST - p.col, p.row),
];

fn transform(board: &Board, map: fn(Pos) -> Pos) -> Board {
    let mut out = Board::new();
    for pos in board.occupied().iter_ones() {
        if let Some(player) = board.get(pos).player() {
            out.set(map(pos), player).unwrap();
        }
    }
    out
}

fn random_board(rng: &mut StdRng, stones: usize) -> Board {
    let mut board = Board::new();
    let mut player = Player::X;
    let mut placed = 0;
    while placed < stones {
        let pos = Pos::new(rng.gen_range(0..15), rng.gen_range(0..15));
        if board.is_empty(pos) {
            board.set(pos, player).unwrap();
            player = player.opponent();
            placed += 1;
        }
    }
    board
}

/// Full board with no line longer than two.
fn drawn_board() -> Board {
    let mut board = Board::new();
    for pos in Pos::all() {
        let band = (pos.col as usize + 2 * (pos.row as usize % 2)) / 2 % 2;
        let player = if band == 0 { Player::X } else { Player::O };
        board.set(pos, player).unwrap();
    }
    board
}

#[test]
fn win_check_is_invariant_under_reflection() {
    let mut rng = StdRng::seed_from_u64(5);
    for round in 0..40 {
        // Dense boards so that fives actually occur in some rounds
        let board = random_board(&mut rng, 60 + round);
        for map in SYMMETRIES {
            let mirrored = transform(&board, map);
            for pos in board.occupied().iter_ones() {
                for player in [Player::X, Player::O] {
                    assert_eq!(
                        check_win(&board, pos, player),
                        check_win(&mirrored, map(pos), player)
                    );
                }
            }
            assert_eq!(find_winner(&board).is_some(), find_winner(&mirrored).is_some());
        }
    }
}

#[test]
fn evaluation_is_invariant_under_reflection() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..10 {
        let board = random_board(&mut rng, 40);
        for map in SYMMETRIES {
            assert_eq!(evaluate(&board), evaluate(&transform(&board, map)));
        }
    }
}

#[test]
fn run_length_decides_win() {
    let start = Pos::new(7, 7);
    for &(dr, dc) in &DIRECTIONS {
        for len in 1..=7 {
            for blocked_ends in [false, true] {
                let mut board = Board::new();
                let run: Vec<Pos> = (0..len)
                    .map(|i| start.offset(dr, dc, i - 3).unwrap())
                    .collect();
                for &pos in &run {
                    board.set(pos, Player::X).unwrap();
                }
                if blocked_ends {
                    for end in [-4, len - 3] {
                        let pos = start.offset(dr, dc, end).unwrap();
                        board.set(pos, Player::O).unwrap();
                    }
                }

                for &pos in &run {
                    assert_eq!(
                        check_win(&board, pos, Player::X),
                        len >= 5,
                        "len {len} dir ({dr}, {dc}) blocked {blocked_ends}"
                    );
                }
                let expected = if len >= 5 { Some(Player::X) } else { None };
                assert_eq!(find_winner(&board), expected);
            }
        }
    }
}

#[test]
fn full_board_without_five_is_a_draw() {
    let board = drawn_board();
    assert!(board.is_full());
    assert_eq!(find_winner(&board), None);
    assert!(is_draw(&board));
    assert_eq!(outcome(&board), GameOutcome::Draw);
}

#[test]
fn empty_board_candidates_cover_every_cell() {
    let board = Board::new();
    let moves = candidates(&board);
    assert_eq!(moves.len(), 225);
    assert!(moves.iter().all(|&pos| board.get(pos) == Cell::Empty));
}

#[test]
fn lone_stone_candidates_are_its_neighbours() {
    let mut board = Board::new();
    board.set(Pos::new(7, 7), Player::O).unwrap();

    let mut moves = candidates(&board);
    moves.sort();
    let mut expected: Vec<Pos> = (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&d| d != (0, 0))
        .map(|(dr, dc)| Pos::new(7, 7).offset(dr, dc, 1).unwrap())
        .collect();
    expected.sort();
    assert_eq!(moves, expected);
}

#[test]
fn open_four_of_x_scores_negative() {
    let mut board = Board::new();
    for c in 5..9 {
        board.set(Pos::new(5, c), Player::X).unwrap();
    }
    assert!(board.is_empty(Pos::new(5, 4)));
    assert!(board.is_empty(Pos::new(5, 9)));
    assert_eq!(evaluate(&board), -4 * 1000);
}

#[test]
fn decided_root_is_not_expanded() {
    let mut board = Board::new();
    for c in 0..5 {
        board.set(Pos::new(0, c), Player::X).unwrap();
    }
    assert_eq!(find_winner(&board), Some(Player::X));

    for depth in 1..=3 {
        let result = search(&board, depth, true, -INF, INF);
        assert_eq!(result.score, -WIN_SCORE + i32::from(depth));
        assert_eq!(result.best_move, None);
        assert_eq!(result.stats.nodes, 1);
    }
}
