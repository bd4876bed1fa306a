//! Saves live response bodies as test fixtures (feature `test-mode`, `SF_RECORD=1`).
//!
//! Files land in `SF_FIXDIR`, or `tests/fixtures` of this crate, named
//! `<endpoint>_<key>.<ext>` with the ticker list made filesystem-safe, so
//! `AAPL,MSFT` becomes `prices_AAPL-MSFT.json`.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

fn fixture_dir() -> PathBuf {
    match env::var_os("SF_FIXDIR") {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
    }
}

fn file_name(endpoint: &str, key: &str, ext: &str) -> String {
    let key: String = key
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' => c,
            _ => '-',
        })
        .collect();
    format!("{endpoint}_{key}.{ext}")
}

/// Writes `body` and returns the path it went to.
pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> io::Result<PathBuf> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(file_name(endpoint, key, ext));
    fs::write(&path, body)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), "fixture recorded");
    if env::var("SF_DEBUG").is_ok_and(|v| v == "1") {
        eprintln!("SF_RECORD: wrote {}", path.display());
    }
    Ok(path)
}
