use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Renders the release section for `tag`.
pub fn render_entry(tag: &str, notes: &[String]) -> String {
    let mut entry = format!("## {}\n\n", tag);
    if notes.is_empty() {
        entry.push_str("- No changes recorded.\n");
    }
    for note in notes {
        entry.push_str(&format!("- {}\n", note.trim()));
    }
    entry
}

/// Inserts a release section at the top of the changelog.
///
/// A leading `# ` title line stays first. Missing files are created.
pub fn prepend_entry(path: &Path, tag: &str, notes: &[String]) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let entry = render_entry(tag, notes);

    let (first_line, rest) = existing
        .split_once('\n')
        .unwrap_or((existing.as_str(), ""));
    let updated = if first_line.starts_with("# ") {
        format!("{}\n\n{}\n{}", first_line, entry, rest.trim_start_matches('\n'))
    } else if existing.is_empty() {
        entry
    } else {
        format!("{}\n{}", entry, existing)
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, updated)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_entry() {
        let notes = vec!["feat: add compare".to_string(), "fix: typo ".to_string()];
        assert_eq!(
            render_entry("v1.1.0", &notes),
            "## v1.1.0\n\n- feat: add compare\n- fix: typo\n"
        );
    }

    #[test]
    fn test_render_entry_without_notes() {
        assert_eq!(render_entry("v0.0.1", &[]), "## v0.0.1\n\n- No changes recorded.\n");
    }

    #[test]
    fn test_prepend_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        prepend_entry(&path, "v0.1.0", &["initial".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "## v0.1.0\n\n- initial\n");
    }

    #[test]
    fn test_prepend_keeps_title_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, "# Changelog\n\n## v0.1.0\n\n- initial\n").unwrap();

        prepend_entry(&path, "v0.2.0", &["feat: more".to_string()]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Changelog\n\n## v0.2.0\n\n- feat: more\n\n## v0.1.0\n\n- initial\n"
        );
    }

    #[test]
    fn test_prepend_without_title() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, "## v0.1.0\n\n- initial\n").unwrap();

        prepend_entry(&path, "v0.1.1", &["fix: bug".to_string()]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "## v0.1.1\n\n- fix: bug\n\n## v0.1.0\n\n- initial\n"
        );
    }
}
