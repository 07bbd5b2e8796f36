//! A simple Brainfuck interpreter.
//!
//! Source text is loaded into a stream of opcodes, loop brackets are
//! validated and resolved into a precomputed jump table, and the program
//! is then executed against a fixed 30,000-cell byte tape wired to a
//! byte-oriented IO channel.

pub mod code;
pub mod error;
pub mod interpret;
pub mod io;
pub mod jump;
pub mod tape;



#[doc(inline)]
pub use code::*;

#[doc(inline)]
pub use error::*;

#[doc(inline)]
pub use interpret::*;

#[doc(inline)]
pub use jump::*;

#[doc(inline)]
pub use tape::*;
