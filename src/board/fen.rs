// src/board/fen.rs
// FEN (Forsyth-Edwards Notation) parsing and serialization. Piece placement
// is processed top-down by rank as the format specifies; `Board::set_bb`
// keeps `piece_on_sq`, the per-color occupancies, and the Zobrist hash in
// sync as pieces are dropped in, so a final `refresh_zobrist` only needs to
// account for side-to-move, castling rights, and the en-passant file.

use super::error::FenError;
use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use super::{Board, Color, Piece};
use crate::square::Square;
use std::str::FromStr;

pub const STARTPOS_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Replaces this board's state with the position described by `fen`.
    /// `self` should be empty (e.g. fresh from `Board::new_empty`) before
    /// calling; fields not overwritten by a short FEN keep their defaults.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or(FenError::MissingField("placement"))?;
        let side = fields.next().unwrap_or("w");
        let castling = fields.next().unwrap_or("-");
        let ep = fields.next().unwrap_or("-");
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount(ranks.len()));
        }

        let mut piece_bb = [[0u64; 6]; 2];
        let mut piece_on_sq = [super::EMPTY_SQ; 64];

        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    file += d as usize;
                    if file > 8 {
                        return Err(FenError::RankOverflow(rank));
                    }
                    continue;
                }
                let (piece, color) = CHAR_TO_PC
                    .get(c as usize)
                    .copied()
                    .flatten()
                    .ok_or(FenError::BadPieceChar(c))?;
                if file >= 8 {
                    return Err(FenError::RankOverflow(rank));
                }
                let sq = rank * 8 + file;
                piece_bb[color as usize][piece as usize] |= 1u64 << sq;
                piece_on_sq[sq] = (color as u8) << 3 | (piece as u8);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankUnderflow(rank));
            }
        }

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        let mut castling_rights = 0u8;
        if castling != "-" {
            for c in castling.chars() {
                castling_rights |= match c {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(FenError::BadCastlingChar(other)),
                };
            }
        }

        let en_passant = if ep == "-" {
            None
        } else {
            Some(Square::from_str(ep).map_err(|_| FenError::BadEnPassantSquare(ep.to_string()))?)
        };

        let halfmove_clock: u32 = halfmove
            .parse()
            .map_err(|_| FenError::BadHalfmoveClock(halfmove.to_string()))?;
        let fullmove_number: u32 = fullmove
            .parse()
            .map_err(|_| FenError::BadFullmoveNumber(fullmove.to_string()))?;

        *self = Board::new_empty();
        for color in [Color::White, Color::Black] {
            for piece in [
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                let bb = piece_bb[color as usize][piece as usize];
                if bb != 0 {
                    self.set_bb(color, piece, bb);
                }
            }
        }
        debug_assert_eq!(self.piece_on_sq, piece_on_sq);

        self.side_to_move = side_to_move;
        self.castling_rights = castling_rights;
        self.en_passant = en_passant;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self.history.clear();
        self.refresh_zobrist();

        Ok(())
    }

    /// Serializes this board to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);

        for rank in (0..8).rev() {
            let mut empty_run = 0u32;
            for file in 0..8 {
                let sq = rank * 8 + file;
                let occupant = self.piece_on_sq[sq];
                if occupant == super::EMPTY_SQ {
                    empty_run += 1;
                    continue;
                }
                if empty_run > 0 {
                    out.push_str(&empty_run.to_string());
                    empty_run = 0;
                }
                let color = (occupant >> 3) as usize;
                let piece = (occupant & 0b111) as usize;
                out.push(PC_TO_CHAR[color * 6 + piece]);
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling_rights == 0 {
            out.push('-');
        } else {
            if self.has_castling(CASTLE_WK) {
                out.push('K');
            }
            if self.has_castling(CASTLE_WQ) {
                out.push('Q');
            }
            if self.has_castling(CASTLE_BK) {
                out.push('k');
            }
            if self.has_castling(CASTLE_BQ) {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(&self.halfmove_clock.to_string());
        out.push(' ');
        out.push_str(&self.fullmove_number.to_string());

        out
    }
}
