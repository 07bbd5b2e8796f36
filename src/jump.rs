//! Precomputed jump table for loop brackets.


use crate::code::{Opcode, Program};
use crate::error::Error;


/// Bidirectional mapping between matched `[` and `]` positions.
///
/// Built once before execution, read-only afterwards. Each loop boundary
/// evaluation becomes a constant-time lookup instead of a scan over the
/// loop body.
#[derive(Debug, Clone)]
pub struct JumpTable {
    // pairs[p] is the matching bracket position for the bracket at p,
    // None at non-bracket positions
    pairs: Vec<Option<usize>>,
}

impl JumpTable {
    /// Scan the program once and record every matched bracket pair.
    ///
    /// Validation runs to completion before any execution begins; an
    /// unmatched bracket rejects the whole program.
    /// # Arguments
    /// * `program` - The loaded opcode sequence to validate.
    /// # Errors
    /// * [Error::UnmatchedCloseBracket] - A `]` with no open loop, at its program position.
    /// * [Error::UnmatchedOpenBracket] - A `[` left open at the end of the scan,
    ///   reported innermost-first.
    pub fn build(program: &Program) -> Result<Self, Error> {
        let mut pairs = vec![None; program.len()];
        let mut stack = Vec::new();

        for (position, opcode) in program.iter().enumerate() {
            match opcode {
                Opcode::LoopStart => stack.push(position),
                Opcode::LoopEnd => {
                    let Some(open_position) = stack.pop() else {
                        return Err(Error::UnmatchedCloseBracket(position));
                    };
                    pairs[open_position] = Some(position);
                    pairs[position] = Some(open_position);
                },
                _ => {},
            }
        }

        match stack.pop() {
            Some(open_position) => Err(Error::UnmatchedOpenBracket(open_position)),
            None => Ok(Self { pairs }),
        }
    }

    /// The matching bracket position for the bracket at `position`.
    ///
    /// Only called by the executor on validated `[`/`]` positions, where a
    /// match is guaranteed to exist.
    pub fn target(&self, position: usize) -> usize {
        self.pairs[position].expect("validated bracket position")
    }

    /// The matching bracket position, or [None] at non-bracket positions.
    pub fn matching(&self, position: usize) -> Option<usize> {
        self.pairs[position]
    }
}
