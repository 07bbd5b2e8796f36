//! Loading source text into a stream of opcodes.


/// A single Brainfuck command.
///
/// The `#` diagnostic is a no-op on tape and control flow; it only dumps
/// interpreter state to stderr.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Opcode {
    Inc,        // +
    Dec,        // -
    Left,       // <
    Right,      // >
    Input,      // ,
    Output,     // .
    LoopStart,  // [
    LoopEnd,    // ]
    Dump,       // #
}

pub type Program = Vec<Opcode>;

/// Filter raw source text down to the recognized commands.
///
/// Every character outside the command set is treated as a comment and
/// discarded, so loading never fails. Bracket balance is checked later, by
/// [`JumpTable::build`](crate::jump::JumpTable::build).
/// # Arguments
/// * `code` - The raw Brainfuck source text.
/// # Example
/// ```
/// use bfrun::code::{load_code, Opcode};
///
/// let program = load_code("increment twice: ++ then output with .");
/// assert_eq!(program, vec![Opcode::Inc, Opcode::Inc, Opcode::Output]);
/// ```
pub fn load_code(code: &str) -> Program {
    let mut program = Vec::new();
    for character in code.chars() {
        match character {
            '+' => program.push(Opcode::Inc),
            '-' => program.push(Opcode::Dec),
            '<' => program.push(Opcode::Left),
            '>' => program.push(Opcode::Right),
            ',' => program.push(Opcode::Input),
            '.' => program.push(Opcode::Output),
            '[' => program.push(Opcode::LoopStart),
            ']' => program.push(Opcode::LoopEnd),
            '#' => program.push(Opcode::Dump),
            _ => {},  // Ignore all other characters (comments, etc.)
        }
    }
    program
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_code() {
        let code = "++[>+<,.-]#";
        let program = load_code(code);
        assert_eq!(program, vec![
            Opcode::Inc,
            Opcode::Inc,
            Opcode::LoopStart,
            Opcode::Right,
            Opcode::Inc,
            Opcode::Left,
            Opcode::Input,
            Opcode::Output,
            Opcode::Dec,
            Opcode::LoopEnd,
            Opcode::Dump,
        ]);
    }

    #[test]
    fn test_load_code_discards_comments() {
        let code = "read one byte with comma: , and echo it (everything else is noise)";
        let program = load_code(code);
        assert_eq!(program, vec![Opcode::Input]);
    }

    #[test]
    fn test_load_code_empty_source() {
        assert!(load_code("just a comment").is_empty());
        assert!(load_code("").is_empty());
    }
}
