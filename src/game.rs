use crate::attack::is_in_check;
use crate::bitboard::EMPTY;
use crate::board::{Board, Cell, EnPassant};
use crate::chess_move::{ChessMove, MoveRecord};
use crate::color::Color;
use crate::config::{CheckFilter, RulesConfig};
use crate::error::Error;
use crate::movegen::{moves_for, Moves};
use crate::piece::Piece;
use crate::square::Square;
use log::{debug, trace};

/// Where does the game stand for the side to move?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BoardStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// What was the result of this game?
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum GameResult {
    WhiteCheckmates,
    WhiteResigns,
    BlackCheckmates,
    BlackResigns,
    Stalemate,
}

/// What happened when a move was applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    /// A snapshot of the board after the move.
    pub board: Board,
    /// The piece that was taken, and the square it was taken on.  For an en-passant capture that
    /// square is beside the destination, not the destination itself.
    pub captured: Option<(Square, Piece)>,
    /// Was this an en-passant capture?
    pub en_passant: bool,
    /// Did a pawn reach the far rank?  If so, `Game::promote` must be called before play
    /// continues.
    pub promotion_pending: bool,
}

/// A single game of chess: the board, whose turn it is, what has been played, and what the
/// player currently has selected.
///
/// Every piece of session state lives here, so independent games never share anything.
///
/// ```
/// use chess_rules::{Game, Color, Square};
///
/// let mut game = Game::new();
/// assert_eq!(game.side_to_move(), Color::White);
///
/// let outcome = game.apply_move(Square::E2, Square::E4).expect("e2e4 is legal");
/// assert!(!outcome.promotion_pending);
/// assert_eq!(game.side_to_move(), Color::Black);
/// assert_eq!(game.history()[0].to_string(), "w: e2 -> e4");
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    selection: Option<(Square, Moves)>,
    pending_promotion: Option<Square>,
    resigned: Option<Color>,
    config: RulesConfig,
}

/// Play `source` to `dest` on a copy of `board`, without asking whether the move is legal.
///
/// Returns the new board, the captured piece (if any) and whether the capture was en passant.
fn play(board: &Board, source: Square, dest: Square) -> (Board, Option<(Square, Piece)>, bool) {
    let mut next = *board;
    let (piece, color) = match board.cell(source).occupant() {
        Some(occupant) => occupant,
        None => return (next, None, false),
    };

    // A pawn moving diagonally onto an empty square is taking the pawn beside it.
    let passed = Square::make_square(source.get_rank(), dest.get_file());
    let en_passant = piece == Piece::Pawn
        && board.is_empty(dest)
        && dest.get_file() != source.get_file()
        && board.cell(passed).en_passant().target() == Some(dest);

    let captured = if en_passant {
        next.clear(passed);
        Some((passed, Piece::Pawn))
    } else {
        board.piece_on(dest).map(|taken| (dest, taken))
    };

    let mut moved = Cell::new(piece, color, false);
    let double_step =
        (dest.get_rank().to_index() as i8 - source.get_rank().to_index() as i8).abs() == 2;
    if piece == Piece::Pawn && double_step {
        if let Some(behind) = dest.backward(color) {
            moved.set_en_passant(EnPassant::Active(behind));
        }
    }
    next.clear(source);

    // Any double step made before this move can no longer be answered.
    for sq in next.combined() {
        if next.cell(sq).en_passant().target().is_some() {
            trace!("en passant window for {} has closed", sq);
            next.cell_mut(sq).set_en_passant(EnPassant::Expired);
        }
    }
    next.set_cell(dest, moved);

    (next, captured, en_passant)
}

impl Game {
    /// Create a new `Game` with the initial position.
    ///
    /// ```
    /// use chess_rules::{Game, Board};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.current_position(), Board::default());
    /// ```
    pub fn new() -> Game {
        Game::new_with_board(Board::default())
    }

    /// Create a new `Game` with a specific starting position.  White moves first.
    pub fn new_with_board(board: Board) -> Game {
        Game {
            board,
            side_to_move: Color::White,
            history: vec![],
            selection: None,
            pending_promotion: None,
            resigned: None,
            config: RulesConfig::default(),
        }
    }

    /// Swap in a different rule set.
    ///
    /// ```
    /// use chess_rules::{Game, RulesConfig};
    ///
    /// let game = Game::new().with_config(RulesConfig::reference());
    /// assert!(!game.config().king_captures);
    /// ```
    pub fn with_config(mut self, config: RulesConfig) -> Game {
        self.config = config;
        self.selection = None;
        self
    }

    /// Let `color` move first instead of White.
    pub fn with_side_to_move(mut self, color: Color) -> Game {
        self.side_to_move = color;
        self
    }

    /// The rules this game enforces.
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    /// Get the current position on the board from the `Game` object.  This is a copy: changing
    /// it changes nothing in the game.
    pub fn current_position(&self) -> Board {
        self.board
    }

    /// Who's turn is it to move?
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Every move made so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The square of a pawn waiting to be promoted, if any.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Is the king of `color` in check right now?
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Where may the piece on `square` go?
    ///
    /// This is the raw rule output, trimmed according to the game's `RulesConfig`.  Pieces of
    /// either color may be asked about; only the side to move may actually play.
    ///
    /// ```
    /// use chess_rules::{Game, Square, Error};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.compute_moves(Square::B1).unwrap().len(), 2);
    /// assert_eq!(game.compute_moves(Square::B4), Err(Error::NoPieceOnSquare { square: Square::B4 }));
    /// ```
    ///
    /// Nothing may move while a pawn waits to be promoted, so this fails with
    /// `Error::PromotionPending` until `promote` is called.
    pub fn compute_moves(&self, square: Square) -> Result<Moves, Error> {
        if let Some(pending) = self.pending_promotion {
            return Err(Error::PromotionPending { square: pending });
        }
        self.compute_moves_with(square, self.config.check_filter)
    }

    fn compute_moves_with(&self, square: Square, filter: CheckFilter) -> Result<Moves, Error> {
        let mut moves = moves_for(&self.board, square)?;
        let (piece, color) = match self.board.cell(square).occupant() {
            Some(occupant) => occupant,
            None => return Err(Error::NoPieceOnSquare { square }),
        };

        if piece == Piece::King && !self.config.king_captures {
            moves.attack = EMPTY;
        }

        match filter {
            CheckFilter::Full => {
                let board = self.board;
                moves.retain(|dest| !is_in_check(&play(&board, square, dest).0, color));
            }
            CheckFilter::AlreadyInCheck => {
                if is_in_check(&self.board, color) {
                    moves = Moves::default();
                }
            }
            CheckFilter::Off => {}
        }

        Ok(moves)
    }

    /// Every move the side to move may make.  Empty while a promotion is pending.
    ///
    /// ```
    /// use chess_rules::Game;
    ///
    /// assert_eq!(Game::new().legal_moves().len(), 20);
    /// ```
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        if self.pending_promotion.is_some() {
            return vec![];
        }
        self.legal_moves_with(self.config.check_filter)
    }

    fn legal_moves_with(&self, filter: CheckFilter) -> Vec<ChessMove> {
        let mut result = vec![];
        for (src, _) in self.board.pieces(self.side_to_move) {
            if let Ok(moves) = self.compute_moves_with(src, filter) {
                result.extend(moves.all().map(|dest| ChessMove::new(src, dest)));
            }
        }
        result
    }

    /// What is the status of the side to move?
    ///
    /// Checkmate and stalemate are always judged with full legality checking, whatever the
    /// configured `CheckFilter`.
    pub fn status(&self) -> BoardStatus {
        let in_check = self.is_in_check(self.side_to_move);
        let can_move = !self.legal_moves_with(CheckFilter::Full).is_empty();
        match (can_move, in_check) {
            (true, false) => BoardStatus::Ongoing,
            (true, true) => BoardStatus::Check,
            (false, true) => BoardStatus::Checkmate,
            (false, false) => BoardStatus::Stalemate,
        }
    }

    /// What is the result of this game, if it is over?
    ///
    /// ```
    /// use chess_rules::Game;
    ///
    /// let game = Game::new();
    /// assert!(game.result().is_none());
    /// ```
    pub fn result(&self) -> Option<GameResult> {
        match self.resigned {
            Some(Color::White) => return Some(GameResult::WhiteResigns),
            Some(Color::Black) => return Some(GameResult::BlackResigns),
            None => {}
        }
        if self.pending_promotion.is_some() {
            return None;
        }
        match self.status() {
            BoardStatus::Checkmate => {
                if self.side_to_move == Color::White {
                    Some(GameResult::BlackCheckmates)
                } else {
                    Some(GameResult::WhiteCheckmates)
                }
            }
            BoardStatus::Stalemate => Some(GameResult::Stalemate),
            BoardStatus::Ongoing | BoardStatus::Check => None,
        }
    }

    /// `color` resigns the game
    ///
    /// ```
    /// use chess_rules::{Game, Color, GameResult};
    ///
    /// let mut game = Game::new();
    /// assert!(game.resign(Color::White));
    /// assert_eq!(game.result(), Some(GameResult::WhiteResigns));
    /// assert!(!game.resign(Color::Black));
    /// ```
    pub fn resign(&mut self, color: Color) -> bool {
        if self.result().is_some() {
            return false;
        }
        debug!("{:?} resigns", color);
        self.resigned = Some(color);
        self.selection = None;
        true
    }

    /// Select the piece on `square` and get the destinations it is offered.
    pub fn select(&mut self, square: Square) -> Result<Moves, Error> {
        let moves = self.compute_moves(square)?;
        trace!("selected {} with {} moves", square, moves.len());
        self.selection = Some((square, moves));
        Ok(moves)
    }

    /// Forget the current selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// The currently selected square and the moves it was offered.
    pub fn selected(&self) -> Option<(Square, Moves)> {
        self.selection
    }

    /// Move the selected piece to `dest`.
    ///
    /// ```
    /// use chess_rules::{Game, Square, Error};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(game.move_selected(Square::E4), Err(Error::NothingSelected));
    ///
    /// game.select(Square::E2).expect("a pawn stands on e2");
    /// game.move_selected(Square::E4).expect("e2e4 is legal");
    /// assert!(game.selected().is_none());
    /// ```
    pub fn move_selected(&mut self, dest: Square) -> Result<MoveOutcome, Error> {
        let (source, _) = self.selection.ok_or(Error::NothingSelected)?;
        self.apply_move(source, dest)
    }

    /// Make a chess move on the board.
    ///
    /// `dest` must be one of the destinations `compute_moves(source)` offers, and the piece must
    /// belong to the side to move.  Anything else is refused and the game is left exactly as it
    /// was.
    ///
    /// ```
    /// use chess_rules::{Game, Square, ChessMove, Error};
    ///
    /// let mut game = Game::new();
    /// let before = game.current_position();
    ///
    /// assert_eq!(
    ///     game.apply_move(Square::E2, Square::E5),
    ///     Err(Error::IllegalMove { mv: ChessMove::new(Square::E2, Square::E5) })
    /// );
    /// assert_eq!(game.current_position(), before);
    /// assert!(game.history().is_empty());
    /// ```
    pub fn apply_move(&mut self, source: Square, dest: Square) -> Result<MoveOutcome, Error> {
        let result = self.check_move(source, dest);
        if let Err(ref e) = result {
            debug!("refused {}{}: {}", source, dest, e);
        }
        let (piece, color) = result?;

        let (next, captured, en_passant) = play(&self.board, source, dest);
        let promotion_pending = piece == Piece::Pawn && dest.get_rank() == color.to_their_backrank();

        self.board = next;
        self.history.push(MoveRecord::new(color, source, dest));
        self.side_to_move = !color;
        self.selection = None;
        if promotion_pending {
            self.pending_promotion = Some(dest);
        }

        debug!(
            "{}{}{}",
            self.history[self.history.len() - 1],
            if en_passant { " (en passant)" } else { "" },
            if promotion_pending { " (promotion pending)" } else { "" }
        );

        Ok(MoveOutcome {
            board: self.board,
            captured,
            en_passant,
            promotion_pending,
        })
    }

    /// Everything that must hold before a move may be played.
    fn check_move(&self, source: Square, dest: Square) -> Result<(Piece, Color), Error> {
        if self.result().is_some() {
            return Err(Error::GameOver);
        }
        if let Some(square) = self.pending_promotion {
            return Err(Error::PromotionPending { square });
        }
        let (piece, color) = self
            .board
            .cell(source)
            .occupant()
            .ok_or(Error::NoPieceOnSquare { square: source })?;
        if color != self.side_to_move {
            return Err(Error::NotYourTurn { square: source });
        }
        if !self.compute_moves(source)?.contains(dest) {
            return Err(Error::IllegalMove {
                mv: ChessMove::new(source, dest),
            });
        }
        Ok((piece, color))
    }

    /// Replace the pawn waiting on the far rank with `piece`.
    ///
    /// ```
    /// use chess_rules::{Game, Piece, Error};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(game.promote(Piece::Queen), Err(Error::NoPromotionPending));
    /// ```
    pub fn promote(&mut self, piece: Piece) -> Result<(), Error> {
        let square = self.pending_promotion.ok_or(Error::NoPromotionPending)?;
        if !piece.is_promotion_target() {
            return Err(Error::InvalidPromotion { piece });
        }
        let color = self
            .board
            .color_on(square)
            .ok_or(Error::NoPieceOnSquare { square })?;

        let cell = self.board.cell_mut(square);
        cell.set_occupant(piece, color);
        cell.set_first_move(false);
        cell.set_en_passant(EnPassant::Unset);
        self.pending_promotion = None;
        debug!("{} promoted to {:?}", square, piece);
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
