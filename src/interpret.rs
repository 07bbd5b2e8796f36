//! The Brainfuck interpreter.


use std::io::{Read, Write};

use crate::code::{Opcode, Program};
use crate::error::Error;
use crate::io::{read_byte, write_byte};
use crate::jump::JumpTable;
use crate::tape::Tape;


// number of leading cells shown by the '#' diagnostic
const DUMP_WINDOW: usize = 10;

/// How a run ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExitOutcome {
    /// The instruction pointer reached the end of the program.
    Completed,
    /// A `,` command observed end-of-input; the run stops cleanly.
    EndOfInput,
}

/// Executes a validated program against a fresh tape.
///
/// Construction builds the [JumpTable], so bracket errors surface before
/// any tape mutation. The interpreter owns the tape and the IO channel
/// halves for the duration of one run and is discarded afterwards.
/// # Example
/// ```
/// use bfrun::code::load_code;
/// use bfrun::interpret::{ExitOutcome, Interpreter};
///
/// let program = load_code(",+.");
/// let mut output = Vec::new();
/// let mut interpreter = Interpreter::new(&program, &b"A"[..], &mut output).unwrap();
/// assert_eq!(interpreter.run().unwrap(), ExitOutcome::Completed);
/// drop(interpreter);
/// assert_eq!(output, b"B");
/// ```
#[derive(Debug)]
pub struct Interpreter<'a, R: Read, W: Write> {
    program: &'a [Opcode],
    jumps: JumpTable,
    tape: Tape,
    input: R,
    output: W,
}

impl<'a, R: Read, W: Write> Interpreter<'a, R, W> {
    /// Validate the program's brackets and set up a zeroed tape.
    /// # Errors
    /// * [Error::UnmatchedOpenBracket] / [Error::UnmatchedCloseBracket] -
    ///   Propagated from [JumpTable::build]; the program is rejected outright.
    pub fn new(program: &'a Program, input: R, output: W) -> Result<Self, Error> {
        let jumps = JumpTable::build(program)?;
        Ok(Self {
            program,
            jumps,
            tape: Tape::new(),
            input,
            output,
        })
    }

    /// Run the program to completion.
    ///
    /// There is no step bound; a non-terminating program runs forever.
    /// End-of-input on `,` is a clean exit, not an error.
    pub fn run(&mut self) -> Result<ExitOutcome, Error> {
        let mut ins_ptr = 0;

        while ins_ptr < self.program.len() {
            match self.program[ins_ptr] {
                Opcode::Inc => self.tape.inc(),
                Opcode::Dec => self.tape.dec(),
                Opcode::Left => self.tape.move_left(),
                Opcode::Right => self.tape.move_right(),
                Opcode::Input => {
                    self.output.flush()?;  // flush pending output before blocking on input
                    match read_byte(&mut self.input)? {
                        Some(byte) => self.tape.read(byte),
                        None => return Ok(ExitOutcome::EndOfInput),
                    }
                },
                Opcode::Output => write_byte(&mut self.output, self.tape.write())?,
                Opcode::LoopStart => {
                    // skip the loop if the current cell is 0
                    if self.tape.current() == 0 {
                        ins_ptr = self.jumps.target(ins_ptr);
                    }
                },
                Opcode::LoopEnd => {
                    // return to the start of the loop if the current cell is not 0
                    if self.tape.current() != 0 {
                        ins_ptr = self.jumps.target(ins_ptr);
                    }
                },
                Opcode::Dump => eprintln!("{}", self.tape.snapshot(DUMP_WINDOW)),
            }
            ins_ptr += 1;
        }

        self.output.flush()?;
        Ok(ExitOutcome::Completed)
    }
}
