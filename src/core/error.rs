//! Error taxonomy.
//!
//! Every `GameError` except `InvariantViolation` is a legality failure: the
//! action was refused, nothing changed, and the caller may re-prompt.
//! `InvariantViolation` means the engine's own state is inconsistent.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Position;

/// Why a semiosphere transition was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SemiosphereFault {
    /// Leaving was attempted by a player who is not inside.
    NotInSemiosphere,
    /// Entering was attempted by a player who is already inside.
    AlreadyInside,
    /// Entering requires standing on the topmost row.
    NotOnTopRow,
    /// No topmost-row cell currently admits the player.
    NoExitAvailable,
}

impl std::fmt::Display for SemiosphereFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SemiosphereFault::NotInSemiosphere => "player is not in the semiosphere",
            SemiosphereFault::AlreadyInside => "player is already in the semiosphere",
            SemiosphereFault::NotOnTopRow => "player is not on the topmost row",
            SemiosphereFault::NoExitAvailable => "no topmost-row cell is free to exit into",
        };
        f.write_str(text)
    }
}

/// Errors returned by board and engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: i64, column: i64 },

    #[error("cell {0} is occupied")]
    CellOccupied(Position),

    #[error("cell {0} already carries a mark")]
    MarkConflict(Position),

    #[error("cell {position} is protected by {owner}'s mark")]
    ForeignMarkProtected { position: Position, owner: PlayerId },

    #[error("cell {position} is blocked by {owner}'s planet")]
    PlanetBlocked { position: Position, owner: PlayerId },

    #[error("cell {0} has been taken by the void")]
    CellVoided(Position),

    #[error("cell {0} has no mark to erase")]
    NoMarkPresent(Position),

    #[error("the mark on cell {0} is your own and cannot be erased")]
    OwnMarkErase(Position),

    #[error("{0} is not carrying their planet")]
    PlanetNotCarried(PlayerId),

    #[error("action costs {required} moves but only {available} remain")]
    InsufficientBudget { required: u32, available: u32 },

    #[error("semiosphere: {0}")]
    InvalidSemiosphereState(SemiosphereFault),

    #[error("{0} is not standing on the board")]
    NotOnBoard(PlayerId),

    #[error("{0} has already been placed")]
    AlreadyPlaced(PlayerId),

    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("{0} has been lost to the void")]
    PlayerEliminated(PlayerId),

    #[error("it is not {actual}'s turn")]
    NotYourTurn { actual: PlayerId, expected: Option<PlayerId> },

    #[error("the game is not in progress")]
    NotInProgress,

    #[error("{pending} still has moves left this round")]
    RoundInProgress { pending: PlayerId },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl GameError {
    /// Whether this error signals corrupted engine state rather than an
    /// illegal action.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::InvariantViolation(_))
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        GameError::InvariantViolation(message.into())
    }
}

/// Errors raised while loading or validating a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("board must have at least 2 rows and 1 column, got {rows}x{columns}")]
    BoardTooSmall { rows: usize, columns: usize },

    #[error("game needs between {min} and {max} players, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },
}

/// Outcome of a single action.
pub type ActionResult = Result<super::action::ActionOutcome, GameError>;
