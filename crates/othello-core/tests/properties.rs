use othello_core::bitboard::Bitboard;
use othello_core::board::Board;
use othello_core::cell::Cell;
use othello_core::flip;
use othello_core::game_state::GameState;
use othello_core::legality;
use othello_core::player::Player;
use othello_core::score::Score;
use othello_core::square::Square;
use proptest::prelude::*;

/// Plays the legal move selected by each index (modulo the number of legal
/// moves) until the choices run out or the mover cannot move.
fn play(choices: &[usize]) -> Vec<GameState> {
    let mut history = vec![GameState::new()];
    for &choice in choices {
        let game = history[history.len() - 1];
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let sq = moves.iter().nth(choice % moves.count() as usize).unwrap();
        history.push(game.place_at(sq).unwrap());
    }
    history
}

const DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Outflank check written against `Board::get` only: some direction from
/// `(row, col)` holds one or more opposing discs followed by a disc of
/// `player`.
fn brackets_by_walk(board: &Board, row: usize, col: usize, player: Player) -> bool {
    if board.get(row, col) != Ok(Cell::Empty) {
        return false;
    }
    DELTAS.iter().any(|&(dr, dc)| {
        let mut run = 0;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while (0..8).contains(&r) && (0..8).contains(&c) {
            match board.get(r as usize, c as usize) {
                Ok(Cell::Occupied(p)) if p == player.opponent() => run += 1,
                Ok(Cell::Occupied(_)) => return run > 0,
                _ => return false,
            }
            r += dr;
            c += dc;
        }
        false
    })
}

fn arb_square() -> impl Strategy<Value = Square> {
    (0usize..64).prop_map(|index| Square::from_index(index).unwrap())
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::A), Just(Player::B)]
}

fn arb_position() -> impl Strategy<Value = GameState> {
    prop::collection::vec(any::<usize>(), 0..60).prop_map(|choices| {
        let history = play(&choices);
        history[history.len() - 1]
    })
}

proptest! {
    #[test]
    fn cells_always_partition_the_board(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        for game in play(&choices) {
            let board = game.board();
            prop_assert_eq!(
                board.count(Player::A) + board.count(Player::B) + board.empty_count(),
                64
            );
            prop_assert!((board.discs(Player::A) & board.discs(Player::B)).is_empty());
            prop_assert_eq!(game.scores(), Score::of(board));
        }
    }

    #[test]
    fn turn_alternates_after_every_placement(choices in prop::collection::vec(any::<usize>(), 1..60)) {
        let history = play(&choices);
        for pair in history.windows(2) {
            prop_assert_eq!(pair[1].side_to_move(), pair[0].side_to_move().opponent());
            prop_assert_eq!(pair[1].board().empty_count() + 1, pair[0].board().empty_count());
        }
    }

    #[test]
    fn flips_only_convert_opponent_discs(game in arb_position(), sq in arb_square(), player in arb_player()) {
        let board = *game.board();
        let flipped = flip::flips(&board, sq, player);
        prop_assert_eq!(flipped & board.discs(player.opponent()), flipped);

        match flip::apply_move(&board, sq, player) {
            Ok(next) => {
                prop_assert!(!flipped.is_empty());
                prop_assert_eq!(next.count(player), board.count(player) + flipped.count() + 1);
                prop_assert_eq!(next.count(player.opponent()), board.count(player.opponent()) - flipped.count());
                // Discs of the mover never change hands.
                prop_assert_eq!(next.discs(player) & board.discs(player), board.discs(player));
            }
            Err(_) => {
                prop_assert!(flipped.is_empty());
            }
        }
    }

    #[test]
    fn legality_matches_flip_set(game in arb_position(), sq in arb_square(), player in arb_player()) {
        let board = *game.board();
        let legal = legality::is_legal(&board, sq, player);
        prop_assert_eq!(legal, !flip::flips(&board, sq, player).is_empty());
        prop_assert_eq!(legal, legality::legal_moves(&board, player).contains(sq));
        prop_assert_eq!(legal, legality::is_legal(&board, sq, player));
        if !board.is_square_empty(sq) {
            prop_assert!(!legal);
        }
    }

    #[test]
    fn legality_matches_cell_walk(game in arb_position(), player in arb_player()) {
        let board = *game.board();
        for sq in Square::iter() {
            prop_assert_eq!(
                legality::is_legal(&board, sq, player),
                brackets_by_walk(&board, sq.row(), sq.col(), player),
                "{} for {}", sq, player
            );
        }
    }

    #[test]
    fn accepted_move_changes_only_bracketed_discs(game in arb_position(), sq in arb_square(), player in arb_player()) {
        let board = *game.board();
        let Ok(next) = flip::apply_move(&board, sq, player) else {
            return Ok(());
        };
        // Every cell that changed owner was an opposing disc, except the target.
        for other in Square::iter().filter(|&other| other != sq) {
            let before = board.get(other.row(), other.col()).unwrap();
            let after = next.get(other.row(), other.col()).unwrap();
            if before != after {
                prop_assert_eq!(before, Cell::Occupied(player.opponent()));
                prop_assert_eq!(after, Cell::Occupied(player));
            }
        }
        prop_assert!(brackets_by_walk(&board, sq.row(), sq.col(), player));
    }

    #[test]
    fn game_over_iff_neither_side_can_move(game in arb_position()) {
        let board = game.board();
        let neither = Player::BOTH
            .iter()
            .all(|&p| legality::legal_moves(board, p) == Bitboard::EMPTY);
        prop_assert_eq!(game.is_game_over(), neither);
        prop_assert_eq!(game.winner().is_some(), neither);
    }

    #[test]
    fn rejected_placement_keeps_state(game in arb_position(), sq in arb_square()) {
        let before = game;
        if game.place_at(sq).is_err() {
            prop_assert_eq!(game, before);
            prop_assert!(game.is_game_over() || !game.legal_moves().contains(sq));
        }
    }
}

#[test]
fn initial_board_is_symmetric_for_both_players() {
    let board = Board::new();
    assert_eq!(
        legality::legal_moves(&board, Player::A).count(),
        legality::legal_moves(&board, Player::B).count()
    );
}

#[test]
fn cell_walk_agrees_on_edge_runs() {
    let boards = [
        "-BBBBBBBA-------------------------------------------------------",
        "-BB-A-----------------------------------------------------------",
        "ABB-BB--------------------------------------------------------BA",
        "---------B--------B--------B--------B--------B--------B--------A",
    ];
    for s in boards {
        let board = Board::from_string(s).unwrap();
        for player in Player::BOTH {
            for sq in Square::iter() {
                assert_eq!(
                    legality::is_legal(&board, sq, player),
                    brackets_by_walk(&board, sq.row(), sq.col(), player),
                    "{sq} for {player} on {s}"
                );
            }
        }
    }
}
