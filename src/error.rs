// Purpose: Error taxonomy shared by the container and the decoder, plus the exit codes of the binary.

use crate::decoder::Instruction;
use std::fmt::{Display, Formatter};

/// Alias of `core::result::Result` with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
    // Container
    //
    /// An absent value was handed to an insertion operation.
    InvalidArgument {
        argument: &'static str,
    },

    // Decoder
    //
    /// A token of the numeric sequence is not an `i32` or the separator is not `", "`.
    MalformedSequence {
        token: String,
        source: Option<std::num::ParseIntError>,
    },
    /// The instruction string holds a character outside of `F`, `B` and `R`.
    InvalidInstruction {
        position: usize,
        found: char,
    },
    /// `F` or `B` was requested while the sequence was already empty.
    EmptyStructureViolation {
        position: usize,
        instruction: Instruction,
    },

    // Ambient
    //
    Io(std::io::Error),
    TryInit(tracing_subscriber::util::TryInitError),
}

/// Process exit codes of the `m-deque` binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    MalformedSequence,
    EmptyStructureViolation,
    InvalidInstruction,
    /// Reading stdin or installing the subscriber failed (`EX_IOERR`).
    Io,
}

impl Error {
    /// Exit code reported by the binary when this error ends the run.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::MalformedSequence { .. } => ExitStatus::MalformedSequence,
            Self::EmptyStructureViolation { .. } => ExitStatus::EmptyStructureViolation,
            Self::InvalidInstruction { .. } => ExitStatus::InvalidInstruction,
            Self::InvalidArgument { .. } | Self::Io(_) | Self::TryInit(_) => ExitStatus::Io,
        }
    }
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::MalformedSequence => 1,
            Self::EmptyStructureViolation => 2,
            Self::InvalidInstruction => 3,
            Self::Io => 74,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    #[inline]
    fn from(from: ExitStatus) -> Self {
        std::process::ExitCode::from(from.code())
    }
}

impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { argument } => {
                write!(f, "Value cannot be absent. Argument name: {argument}.")
            }
            Self::MalformedSequence { token, .. } => {
                write!(f, "Invalid numerical sequence: `{token}` is not an integer.")
            }
            Self::InvalidInstruction { position, found } => {
                write!(f, "Instruction sequence is invalid: `{found}` at position {position}.")
            }
            Self::EmptyStructureViolation {
                position,
                instruction,
            } => write!(
                f,
                "Instructions are invalid for the given sequence: `{}` at position {position} \
                 found nothing to drop.",
                instruction.symbol()
            ),
            Self::Io(err) => write!(f, "Could not read the input: {err}"),
            Self::TryInit(err) => write!(f, "Could not install the log subscriber: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedSequence {
                source: Some(err), ..
            } => Some(err),
            Self::Io(err) => Some(err),
            Self::TryInit(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(from: std::io::Error) -> Self {
        Self::Io(from)
    }
}

impl From<tracing_subscriber::util::TryInitError> for Error {
    #[inline]
    fn from(from: tracing_subscriber::util::TryInitError) -> Self {
        Self::TryInit(from)
    }
}

// =====================
// Tests
// =====================
