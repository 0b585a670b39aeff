//! Property-based tests using proptest.

use chess_rules::{is_in_check, moves_for, EnPassant, Game, Piece, ALL_SQUARES};
use proptest::prelude::*;

/// Strategy to pick moves out of whatever is legal at each ply
fn choices_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 1..60)
}

/// Play out a game, choosing each move by index into the legal move list.
fn playout(choices: &[usize]) -> Game {
    let mut game = Game::new();
    for choice in choices {
        let moves = game.legal_moves();
        if moves.is_empty() || game.result().is_some() {
            break;
        }
        let mv = moves[choice % moves.len()];
        let outcome = game
            .apply_move(mv.get_source(), mv.get_dest())
            .expect("generated moves are legal");
        if outcome.promotion_pending {
            game.promote(Piece::Queen).expect("a pawn is waiting");
        }
    }
    game
}

proptest! {
    /// Property: nobody is ever left standing in their own check
    #[test]
    fn prop_mover_never_in_check(choices in choices_strategy()) {
        let mut game = Game::new();
        for choice in choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mover = game.side_to_move();
            let mv = moves[choice % moves.len()];
            let outcome = game.apply_move(mv.get_source(), mv.get_dest()).unwrap();
            prop_assert!(!is_in_check(&outcome.board, mover));
            if outcome.promotion_pending {
                game.promote(Piece::Knight).unwrap();
            }
        }
    }

    /// Property: quiet destinations are empty and never overlap the attack destinations
    #[test]
    fn prop_quiet_and_attack_are_disjoint(choices in choices_strategy()) {
        let game = playout(&choices);
        let board = game.current_position();
        for sq in board.combined() {
            let moves = moves_for(&board, sq).unwrap();
            prop_assert!((moves.quiet & moves.attack).is_empty());
            for dest in moves.quiet {
                prop_assert!(board.is_empty(dest));
            }
            for dest in moves.attack {
                prop_assert_ne!(board.piece_on(dest), Some(Piece::King));
                prop_assert_ne!(board.color_on(dest), board.color_on(sq));
            }
        }
    }

    /// Property: only the side that just moved can have a pawn open to en passant
    #[test]
    fn prop_en_passant_window_belongs_to_last_mover(choices in choices_strategy()) {
        let game = playout(&choices);
        let board = game.current_position();
        for sq in ALL_SQUARES.iter() {
            let cell = board.cell(*sq);
            if let EnPassant::Active(behind) = cell.en_passant() {
                prop_assert_eq!(cell.occupant(), Some((Piece::Pawn, !game.side_to_move())));
                prop_assert!(board.is_empty(behind));
            }
        }
    }

    /// Property: the same moves from the same start give the same game
    #[test]
    fn prop_replay_is_deterministic(choices in choices_strategy()) {
        let first = playout(&choices);
        let second = playout(&choices);
        prop_assert_eq!(first.current_position(), second.current_position());
        prop_assert_eq!(first.side_to_move(), second.side_to_move());
        prop_assert_eq!(first.history(), second.history());
    }

    /// Property: every legal move the game lists is accepted by apply_move
    #[test]
    fn prop_listed_moves_are_accepted(choices in choices_strategy()) {
        let game = playout(&choices);
        if game.result().is_none() {
            for mv in game.legal_moves() {
                let mut trial = game.clone();
                prop_assert!(trial.apply_move(mv.get_source(), mv.get_dest()).is_ok());
            }
        }
    }
}
