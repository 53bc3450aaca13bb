use std::io;
use std::path::Path;

/// True if `path` looks like a previous output of this generator: it holds a
/// `README.md` or `Home.md`, or exactly one entry which is a `.md` file.
pub fn is_output_directory(path: impl AsRef<Path>) -> io::Result<bool> {
    let path = path.as_ref();
    if path.join("README.md").exists() || path.join("Home.md").exists() {
        return Ok(true);
    }

    let mut entries = std::fs::read_dir(path)?;
    let (Some(first), None) = (entries.next(), entries.next()) else {
        return Ok(false);
    };
    let first = first?;
    Ok(first.path().extension().is_some_and(|ext| ext == "md"))
}
