// Purpose: Decodes a numeric sequence by dropping and reversing it according to F/B/R instructions.

use crate::{
    error::{Error, Result},
    m_deque::MDeque,
};

/// Separator between the numbers of a sequence, e.g. `12, 43, 189`.
pub const SEPARATOR: &str = ", ";

/// One symbol of the instruction alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `F`: drop the first element.
    DropFront,
    /// `B`: drop the last element.
    DropBack,
    /// `R`: reverse the sequence.
    Reverse,
}

impl Instruction {
    pub const fn symbol(self) -> char {
        match self {
            Self::DropFront => 'F',
            Self::DropBack => 'B',
            Self::Reverse => 'R',
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = char;

    #[inline]
    fn try_from(from: char) -> core::result::Result<Self, Self::Error> {
        match from {
            'F' => Ok(Self::DropFront),
            'B' => Ok(Self::DropBack),
            'R' => Ok(Self::Reverse),
            other => Err(other),
        }
    }
}

/// Checks the whole instruction string before anything is executed.
///
/// The empty string is valid. The first character outside of `F`, `B` and `R` is reported with
/// its zero-based character position.
pub fn validate(instructions: &str) -> Result<Vec<Instruction>> {
    instructions
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Instruction::try_from(symbol)
                .map_err(|found| Error::InvalidInstruction { position, found })
        })
        .collect()
}

/// Parses a `", "`-separated list of integers into a deque, front to back.
///
/// Any token that is not an `i32` rejects the whole line, including an empty line and stray
/// whitespace around a separator.
pub fn parse_sequence(sequence: &str) -> Result<MDeque<i32>> {
    let mut deque = MDeque::new();
    for token in sequence.split(SEPARATOR) {
        let value = token
            .parse::<i32>()
            .map_err(|err| Error::MalformedSequence {
                token: token.to_owned(),
                source: Some(err),
            })?;
        deque.push_back(value);
    }
    tracing::debug!(len = deque.len(), "parsed sequence");
    Ok(deque)
}

/// Applies validated instructions one at a time.
///
/// Stops at the first `F` or `B` that finds the deque empty; instructions before it have
/// already been applied.
pub fn decode(deque: &mut MDeque<i32>, instructions: &[Instruction]) -> Result<()> {
    for (position, &instruction) in instructions.iter().enumerate() {
        tracing::debug!(
            position,
            symbol = %instruction.symbol(),
            len = deque.len(),
            "applying instruction"
        );
        let dropped = match instruction {
            Instruction::DropFront => deque.pop_front(),
            Instruction::DropBack => deque.pop_back(),
            Instruction::Reverse => {
                deque.reverse();
                continue;
            }
        };
        if dropped.is_none() {
            return Err(Error::EmptyStructureViolation {
                position,
                instruction,
            });
        }
    }
    Ok(())
}

/// Validates `instructions`, parses `sequence` and decodes it, in that order.
///
/// An invalid instruction string is reported before the sequence is even parsed, so no
/// deque is built or mutated for it.
pub fn run(sequence: &str, instructions: &str) -> Result<MDeque<i32>> {
    let instructions = validate(instructions)?;
    let mut deque = parse_sequence(sequence)?;
    decode(&mut deque, &instructions)?;
    Ok(deque)
}

// =====================
// Tests
// =====================
