use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

/// Resolves a command-line source: an existing file is read (PDFs via `pdf-extract`),
/// anything else is taken as literal text.
pub fn load_text(path_or_text: &str) -> Result<String, AppError> {
    let path = Path::new(path_or_text);
    if !path.is_file() {
        debug!("Source is not a file, using it as literal text ({} chars)", path_or_text.len());
        return Ok(path_or_text.to_string());
    }

    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        debug!("Extracting text from PDF {}", path.display());
        pdf_extract::extract_text(path)
            .map_err(|e| AppError::Pdf(format!("{}: {e}", path.display())))
    } else {
        debug!("Reading text file {}", path.display());
        std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))
    }
}

/// Writes `contents` to `path` and returns its absolute form.
pub fn write_output(path: &Path, contents: &str) -> Result<std::path::PathBuf, AppError> {
    std::fs::write(path, contents).map_err(|e| AppError::io(path, e))?;
    std::fs::canonicalize(path).map_err(|e| AppError::io(path, e))
}
