use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{eyre, Result, WrapErr};
use log::{info, trace};

/// The file an image is written to when no output path is given.
pub fn default_image_path(ean: &str) -> PathBuf {
    PathBuf::from(format!("{ean}.png"))
}

/// Writes `bytes` to `path`, refusing to replace an existing file unless `force` is set.
pub fn write_image<P: AsRef<Path>>(path: P, bytes: &[u8], force: bool) -> Result<()> {
    let path = path.as_ref();
    trace!("Opening '{}' for writing", path.display());

    let mut file = if force {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
    } else {
        OpenOptions::new().write(true).create_new(true).open(path)
    }
    .wrap_err_with(|| eyre!("Cannot create file '{}'", path.display()))?;

    file.write_all(bytes)
        .wrap_err_with(|| eyre!("Cannot write image to '{}'", path.display()))?;

    info!("Wrote {} bytes to '{}'", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_fs::{prelude::*, TempDir};

    use super::{default_image_path, write_image};

    #[test]
    fn default_path_is_named_after_the_code() {
        assert_eq!(
            std::path::Path::new("5000112637922.png"),
            default_image_path("5000112637922")
        );
    }

    #[test]
    fn image_is_written_to_new_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("barcode.png");

        write_image(file.path(), b"png", false).unwrap();
        file.assert("png");
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("barcode.png");
        file.write_str("old").unwrap();

        assert!(write_image(file.path(), b"new", false).is_err());
        file.assert("old");

        write_image(file.path(), b"new", true).unwrap();
        file.assert("new");
    }
}
