//! Text persistence for [`DenseMatrix`].
//!
//! The format is one row per line, elements separated by a single space,
//! each value in scientific notation with 16 digits after the decimal
//! point (round-trip precision for IEEE doubles). There is no header;
//! dimensions are implied by the line and token counts.

use crate::dense::DenseMatrix;
use crate::error::MatrixError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

impl DenseMatrix {
    /// Write the matrix in the text format to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), MatrixError> {
        for row in self.data.rows() {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(writer, " ")?;
                }
                write!(writer, "{v:.16e}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Save the matrix to a file, replacing any existing content.
    ///
    /// The file handle is released on every exit path before returning.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MatrixError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Replace this matrix's dimensions and contents with data parsed
    /// from `reader`.
    ///
    /// Blank lines are skipped; each non-blank line is split on
    /// whitespace and every token parsed as `f64`. Fails with
    /// [`MatrixError::Format`] on ragged rows, unparsable tokens, or a
    /// source with no usable rows, leaving the matrix unchanged.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<(), MatrixError> {
        let parsed = parse_rows(reader)?;
        *self = DenseMatrix::from_rows(&parsed)?;
        Ok(())
    }

    /// Load the matrix from a file. This is the one operation permitted
    /// to change the dimensions after construction.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MatrixError> {
        self.read_from(BufReader::new(File::open(path)?))
    }

    /// Construct a matrix directly from a file, dimensions inferred
    /// from the content.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        let parsed = parse_rows(BufReader::new(File::open(path)?))?;
        DenseMatrix::from_rows(&parsed)
    }
}

fn parse_rows<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>, MatrixError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut num_cols = None;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| MatrixError::Format(format!("invalid number: {token:?}")))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match num_cols {
            None => num_cols = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(MatrixError::Format(format!(
                    "inconsistent number of columns: expected {}, got {}",
                    n,
                    row.len()
                )));
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(MatrixError::Format("no data".to_string()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_write_format() {
        let m = DenseMatrix::from_rows(&[vec![1.0, -0.5], vec![2.5e10, 0.0]]).unwrap();
        let mut buf = Vec::new();
        m.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1.0000000000000000e0 -5.0000000000000000e-1");
        assert_eq!(lines[1], "2.5000000000000000e10 0.0000000000000000e0");
    }

    #[test]
    fn test_read_roundtrip_in_memory() {
        let original = DenseMatrix::from_rows(&[
            vec![std::f64::consts::PI, -1.0 / 3.0, 1e-300],
            vec![6.02214076e23, 0.1, -2.5],
        ])
        .unwrap();
        let mut buf = Vec::new();
        original.write_to(&mut buf).unwrap();

        let mut loaded = DenseMatrix::new(1, 1).unwrap();
        loaded.read_from(&buf[..]).unwrap();

        assert_eq!(loaded.dimensions(), original.dimensions());
        for i in 0..2 {
            for j in 0..3 {
                assert_relative_eq!(
                    loaded.get(i, j).unwrap(),
                    original.get(i, j).unwrap(),
                    max_relative = 1e-10
                );
            }
        }
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let text = "\n1 2\n\n3 4\n\n";
        let mut m = DenseMatrix::new(1, 1).unwrap();
        m.read_from(text.as_bytes()).unwrap();
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.get(1, 0).unwrap(), 3.0);
    }

    #[test]
    fn test_read_rejects_ragged_rows() {
        let text = "1 2\n3 4 5\n";
        let mut m = DenseMatrix::new(1, 1).unwrap();
        let err = m.read_from(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::Format(ref msg)
            if msg.contains("inconsistent number of columns")));
    }

    #[test]
    fn test_read_rejects_empty_source() {
        let mut m = DenseMatrix::new(1, 1).unwrap();
        let err = m.read_from("".as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::Format(ref msg) if msg.contains("no data")));

        let err = m.read_from("\n  \n".as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::Format(ref msg) if msg.contains("no data")));
    }

    #[test]
    fn test_read_rejects_bad_token() {
        let text = "1 2\n3 four\n";
        let mut m = DenseMatrix::new(1, 1).unwrap();
        let err = m.read_from(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MatrixError::Format(ref msg) if msg.contains("four")));
    }

    #[test]
    fn test_failed_read_leaves_matrix_unchanged() {
        let mut m = DenseMatrix::from_rows(&[vec![9.0, 8.0]]).unwrap();
        let before = m.clone();
        assert!(m.read_from("1 2\n3\n".as_bytes()).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut m = DenseMatrix::new(1, 1).unwrap();
        let err = m
            .load("/nonexistent/densemat-test-missing.txt")
            .unwrap_err();
        assert!(matches!(err, MatrixError::Io(_)));
    }
}
