use anyhow::{bail, Context, Result};
use cvkick_wizard::CvFile;
use directories::UserDirs;
use std::fs;
use std::path::PathBuf;

pub fn expand_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| {
            trimmed
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
        })
        .unwrap_or(trimmed);

    if let Some(rest) = unquoted.strip_prefix("~/") {
        if let Some(dirs) = UserDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(unquoted)
}

pub fn pick_file(raw: &str) -> Result<CvFile> {
    let path = expand_path(raw);
    let metadata =
        fs::metadata(&path).with_context(|| format!("Cannot open {}", path.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;

    let mime_type = mime_guess::from_path(&path).first_or_octet_stream();

    Ok(CvFile::new(name, metadata.len(), mime_type.essence_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_name_size_and_type() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("Resume.PDF");
        let mut file = fs::File::create(&path).expect("create file");
        file.write_all(&[0u8; 2048]).expect("write file");

        let cv = pick_file(&path.to_string_lossy()).expect("readable file");

        assert_eq!(cv.name, "Resume.PDF");
        assert_eq!(cv.size, 2048);
        assert_eq!(cv.mime_type, "application/pdf");
    }

    #[test]
    fn quoted_paths_from_drag_and_drop_are_accepted() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("my cv.docx");
        fs::write(&path, b"docx").expect("write file");

        let cv = pick_file(&format!("'{}' ", path.display())).expect("readable file");

        assert_eq!(cv.name, "my cv.docx");
        assert_eq!(
            cv.mime_type,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn directories_and_missing_files_are_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(pick_file(&dir.path().to_string_lossy()).is_err());
        assert!(pick_file(&dir.path().join("absent.pdf").to_string_lossy()).is_err());
    }

    #[test]
    fn file_type_follows_the_extension() {
        let dir = tempfile::tempdir().expect("temp dir");
        for (name, expected) in [
            ("cv", "application/octet-stream"),
            ("cv.html", "text/html"),
        ] {
            let path = dir.path().join(name);
            fs::write(&path, b"x").expect("write file");
            let cv = pick_file(&path.to_string_lossy()).expect("readable file");
            assert_eq!(cv.mime_type, expected, "{name}");
        }
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(dirs) = UserDirs::new() {
            assert_eq!(
                expand_path("~/cv.pdf"),
                dirs.home_dir().join("cv.pdf")
            );
        }
        assert_eq!(expand_path("/tmp/cv.pdf"), PathBuf::from("/tmp/cv.pdf"));
    }
}
