// src/board/error.rs
// Plain hand-rolled error enums (no thiserror/anyhow), matching the rest of
// the crate's error-handling idiom.

use std::fmt;

/// A FEN string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    WrongRankCount(usize),
    BadPieceChar(char),
    RankOverflow(usize),
    RankUnderflow(usize),
    MissingField(&'static str),
    BadSideToMove(String),
    BadCastlingChar(char),
    BadEnPassantSquare(String),
    BadHalfmoveClock(String),
    BadFullmoveNumber(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRankCount(n) => {
                write!(f, "expected 8 ranks in piece placement, found {n}")
            }
            FenError::BadPieceChar(c) => write!(f, "unrecognized piece character '{c}'"),
            FenError::RankOverflow(rank) => write!(f, "rank {rank} has more than 8 files"),
            FenError::RankUnderflow(rank) => write!(f, "rank {rank} has fewer than 8 files"),
            FenError::MissingField(name) => write!(f, "FEN missing field: {name}"),
            FenError::BadSideToMove(s) => write!(f, "side to move must be 'w' or 'b', got '{s}'"),
            FenError::BadCastlingChar(c) => write!(f, "invalid castling rights character '{c}'"),
            FenError::BadEnPassantSquare(s) => write!(f, "invalid en-passant square '{s}'"),
            FenError::BadHalfmoveClock(s) => write!(f, "invalid halfmove clock '{s}'"),
            FenError::BadFullmoveNumber(s) => write!(f, "invalid fullmove number '{s}'"),
        }
    }
}

impl std::error::Error for FenError {}

/// A UCI long-algebraic move string failed to parse, or named a move that is
/// not legal in the position it was applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    BadLength(usize),
    BadSquare(String),
    BadPromotionChar(char),
    IllegalMove(String),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::BadLength(n) => {
                write!(f, "move string must be 4 or 5 characters, got {n}")
            }
            MoveParseError::BadSquare(s) => write!(f, "invalid square '{s}'"),
            MoveParseError::BadPromotionChar(c) => write!(f, "invalid promotion letter '{c}'"),
            MoveParseError::IllegalMove(s) => write!(f, "move '{s}' is not legal here"),
        }
    }
}

impl std::error::Error for MoveParseError {}
