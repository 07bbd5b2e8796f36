//! Byte-at-a-time input and output over the IO channel.


use std::io::{self, Read, Write};
use std::slice;


/// Read a single byte from the channel.
/// # Returns
/// * `Some(byte)` - The next input byte.
/// * `None` - End-of-input was reached.
pub fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut byte = 0;
    match input.read(slice::from_mut(&mut byte))? {
        0 => Ok(None),
        _ => Ok(Some(byte)),
    }
}

/// Write a single byte to the channel.
pub fn write_byte<W: Write>(output: &mut W, byte: u8) -> io::Result<()> {
    output.write_all(slice::from_ref(&byte))
}
