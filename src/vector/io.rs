//! Text framing for `Vector`: whitespace-separated elements in storage order, no header.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::FormatOptions;
use crate::error::UtError;
use crate::vector::Vector;

impl<T: fmt::Display> Vector<T> {
    /// Write the elements using `opts.separator` between neighbours.
    pub fn write_with<W: Write>(&self, out: &mut W, opts: &FormatOptions) -> Result<(), UtError> {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                out.write_all(opts.separator.as_bytes())?;
            }
            write!(out, "{value}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: FromStr> Vector<T> {
    /// Overwrite every element with the next `size()` tokens.
    ///
    /// Storage is left untouched unless all tokens parse.
    pub fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<(), UtError>
    where
        I: Iterator<Item = &'a str>,
    {
        self.data = parse_tokens(self.data.len(), tokens)?;
        Ok(())
    }

    /// Read `size()` whitespace-separated elements from `reader`.
    ///
    /// Consumes nothing past the last element, so several containers can be read in turn from
    /// one stream (pass `&mut reader`).
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<(), UtError> {
        self.data = read_values(self.data.len(), &mut reader)?;
        Ok(())
    }
}

/// Parse exactly `count` values from `tokens`.
pub(crate) fn parse_tokens<'a, T, I>(count: usize, tokens: &mut I) -> Result<Vec<T>, UtError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let mut parsed = Vec::with_capacity(count);
    for _ in 0..count {
        let token = tokens.next().ok_or(UtError::UnexpectedEof)?;
        let value = token.parse::<T>().map_err(|_| UtError::Parse(token.to_string()))?;
        parsed.push(value);
    }
    Ok(parsed)
}

/// Pull the next whitespace-delimited token, stopping right after its last byte.
fn next_token<R: BufRead>(reader: &mut R) -> Result<Option<String>, UtError> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut done = false;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(b);
            }
            used += 1;
        }
        reader.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| UtError::Parse(String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Read exactly `count` values from `reader`.
pub(crate) fn read_values<T, R>(count: usize, reader: &mut R) -> Result<Vec<T>, UtError>
where
    T: FromStr,
    R: BufRead,
{
    let mut parsed = Vec::with_capacity(count);
    for _ in 0..count {
        let token = next_token(reader)?.ok_or(UtError::UnexpectedEof)?;
        let value = token.parse::<T>().map_err(|_| UtError::Parse(token))?;
        parsed.push(value);
    }
    Ok(parsed)
}
