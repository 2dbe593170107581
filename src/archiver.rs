use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::Product;

/// Writes the products as a pretty-printed JSON array (two-space indent).
/// The file is created 0644 on unix, truncating any previous run's output.
pub fn save_to_file(products: &[Product], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(products)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
