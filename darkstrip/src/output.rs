use std::io::Write;
use std::path::Path;

/// Print the confirmation line for a processed file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_processed(writer: &mut impl Write, path: &Path) -> std::io::Result<()> {
    writeln!(writer, "Processed: {}", path.display())?;
    writer.flush()
}
