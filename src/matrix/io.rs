//! Text framing for `TriangularMatrix`: one row per line, each row in vector framing.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::FormatOptions;
use crate::error::UtError;
use crate::matrix::TriangularMatrix;
use crate::vector::io::{parse_tokens, read_values};
use crate::vector::Vector;

impl<T: fmt::Display> TriangularMatrix<T> {
    /// Write every row followed by `opts.row_terminator`.
    pub fn write_with<W: Write>(&self, out: &mut W, opts: &FormatOptions) -> Result<(), UtError> {
        for row in self.rows() {
            row.write_with(out, opts)?;
            out.write_all(opts.row_terminator.as_bytes())?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<T: FromStr> TriangularMatrix<T> {
    /// Overwrite every row in order; row lengths come from the matrix, not the input.
    ///
    /// Entries are left untouched unless the whole matrix parses.
    pub fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<(), UtError>
    where
        I: Iterator<Item = &'a str>,
    {
        let parsed = self
            .rows()
            .map(|row| parse_tokens::<T, I>(row.size(), &mut *tokens))
            .collect::<Result<Vec<_>, _>>()?;
        self.replace_rows(parsed);
        Ok(())
    }

    /// Read every row from `reader`, leaving anything after the last entry unread.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<(), UtError> {
        let parsed = self
            .rows()
            .map(|row| read_values::<T, R>(row.size(), &mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        self.replace_rows(parsed);
        Ok(())
    }

    fn replace_rows(&mut self, parsed: Vec<Vec<T>>) {
        for (row, values) in self.rows_mut().zip(parsed) {
            *row = Vector::from_parts(values, row.start_index());
        }
    }
}
