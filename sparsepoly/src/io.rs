use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::polynomials::Polynomial;

impl Polynomial {
    /// Overwrites `path` with the textual form as its only line.
    ///
    /// The file handle is released on every path out of this function; a
    /// failed flush is reported rather than lost in the drop.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        write!(writer, "{}", self)?;
        writer.flush()?;
        info!("saved {} to {}", self, path.display());
        Ok(())
    }

    /// Reads the first line of `path` and parses it.
    ///
    /// # Errors
    ///
    /// I/O errors from opening or reading the file are returned unchanged;
    /// a malformed line gives [`PolynomialError::Parse`](crate::PolynomialError::Parse).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut line = String::new();
        BufReader::new(File::open(path)?).read_line(&mut line)?;
        let polynomial = Polynomial::from_text(line.trim_end_matches(['\r', '\n']))?;
        info!("loaded {} from {}", polynomial, path.display());
        Ok(polynomial)
    }
}
