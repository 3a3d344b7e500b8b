use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::consts::OUTPUT_EXTENSION;

pub fn create_output_file(path: &Path, extension: &str) -> io::Result<File> {
    let file_path = if path.is_dir() {
        path.join(extension)
    } else {
        path.with_extension(extension)
    };

    info!("creating output file {:?}", file_path);

    File::create(file_path)
}

// Opens the destination for the tab separated rows.
// All binaries open it before computing so that a bad path errors early.
pub fn open_output(location: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match location {
        Some(path) => Ok(Box::new(BufWriter::new(create_output_file(
            path,
            OUTPUT_EXTENSION,
        )?))),
        None => {
            debug!("writing rows to stdout");
            Ok(Box::new(BufWriter::new(io::stdout().lock())))
        }
    }
}

/// Writes one line per row and flushes the writer.
pub fn write_rows<W: Write + ?Sized, T: Display>(writer: &mut W, rows: &[T]) -> io::Result<()> {
    for row in rows {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()
}
