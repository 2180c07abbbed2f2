use crate::error::Result;
use crate::logger;
use crate::models::{Entry, MissingMeaning};
use std::fs;
use std::path::Path;

pub const SEPARATOR: &str = " - ";
const LISTING_RULE_REPEAT: usize = 40;

/// The single entry shown when the list at `path` has nothing to offer.
pub fn sentinel_entry(path: &Path) -> Entry {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Entry::new(
        format!("Add words to {}", name),
        "Format: word - meaning",
    )
}

/// Parses one list line. Blank lines yield `None`; every other line yields an entry.
pub fn parse_line(line: &str, missing_meaning: MissingMeaning) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.split_once(SEPARATOR) {
        Some((word, meaning)) => Some(Entry::new(word.trim(), meaning.trim())),
        None => Some(Entry::new(line, missing_meaning.text())),
    }
}

pub fn parse_entries(content: &str, missing_meaning: MissingMeaning) -> Vec<Entry> {
    content
        .lines()
        .filter_map(|line| parse_line(line, missing_meaning))
        .collect()
}

pub fn load_entries(path: &Path, missing_meaning: MissingMeaning) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content, missing_meaning))
}

/// Loads the list, substituting the sentinel entry when the file is missing,
/// unreadable or has no entries. Never returns an empty vector.
pub fn load_or_sentinel(path: &Path, missing_meaning: MissingMeaning) -> Vec<Entry> {
    let entries = match load_entries(path, missing_meaning) {
        Ok(entries) => entries,
        Err(e) => {
            logger::log(&format!("Could not load {}: {}", path.display(), e));
            Vec::new()
        }
    };

    if entries.is_empty() {
        return vec![sentinel_entry(path)];
    }

    logger::log(&format!("Loaded {} entries from {}", entries.len(), path.display()));
    entries
}

pub fn format_listing(entries: &[Entry]) -> String {
    let rule = SEPARATOR.repeat(LISTING_RULE_REPEAT);
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("Word: {}\n", entry.word));
        out.push_str(&format!("Meaning: {}\n", entry.meaning));
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_line_simple() {
        let entry = parse_line("run - to move fast", MissingMeaning::Empty).unwrap();
        assert_eq!(entry.word, "run");
        assert_eq!(entry.meaning, "to move fast");
    }

    #[test]
    fn test_parse_line_trims_both_parts() {
        let entry = parse_line("   run   -   to move fast  ", MissingMeaning::Empty).unwrap();
        assert_eq!(entry.word, "run");
        assert_eq!(entry.meaning, "to move fast");
    }

    #[test]
    fn test_parse_line_splits_on_first_separator_only() {
        let entry = parse_line("well - in a good way - healthy", MissingMeaning::Empty).unwrap();
        assert_eq!(entry.word, "well");
        assert_eq!(entry.meaning, "in a good way - healthy");
    }

    #[test]
    fn test_parse_line_without_separator_empty_meaning() {
        let entry = parse_line("jump", MissingMeaning::Empty).unwrap();
        assert_eq!(entry, Entry::new("jump", ""));
    }

    #[test]
    fn test_parse_line_without_separator_placeholder() {
        let entry = parse_line("jump", MissingMeaning::Placeholder).unwrap();
        assert_eq!(entry, Entry::new("jump", "(No meaning provided)"));
    }

    #[test]
    fn test_parse_line_hyphenated_word_is_not_split() {
        let entry = parse_line("well-known", MissingMeaning::Empty).unwrap();
        assert_eq!(entry.word, "well-known");
        assert_eq!(entry.meaning, "");
    }

    #[test]
    fn test_parse_line_blank() {
        assert!(parse_line("", MissingMeaning::Empty).is_none());
        assert!(parse_line("   \t ", MissingMeaning::Empty).is_none());
    }

    #[test]
    fn test_parse_entries_skips_blank_lines() {
        let content = "run - to move fast\n\n\njump\n   \nsit - to rest";
        let entries = parse_entries(content, MissingMeaning::Empty);
        assert_eq!(
            entries,
            vec![
                Entry::new("run", "to move fast"),
                Entry::new("jump", ""),
                Entry::new("sit", "to rest"),
            ]
        );
    }

    #[test]
    fn test_load_entries_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "run - to move fast\njump").unwrap();

        let entries = load_entries(file.path(), MissingMeaning::Empty).unwrap();
        assert_eq!(
            entries,
            vec![Entry::new("run", "to move fast"), Entry::new("jump", "")]
        );
    }

    #[test]
    fn test_load_entries_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_entries(&dir.path().join("nope.txt"), MissingMeaning::Empty);
        assert!(matches!(result, Err(crate::Error::IOFailed(_))));
    }

    #[test]
    fn test_load_or_sentinel_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let entries = load_or_sentinel(&dir.path().join("oxford3000.txt"), MissingMeaning::Empty);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "Add words to oxford3000.txt");
        assert_eq!(entries[0].meaning, "Format: word - meaning");
    }

    #[test]
    fn test_load_or_sentinel_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\n\n   \n").unwrap();

        let entries = load_or_sentinel(file.path(), MissingMeaning::Empty);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].word.starts_with("Add words to"));
    }

    #[test]
    fn test_load_or_sentinel_keeps_real_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a - b\nc - d\n").unwrap();

        let entries = load_or_sentinel(file.path(), MissingMeaning::Empty);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_sentinel_uses_file_name_only() {
        let entry = sentinel_entry(Path::new("lists/nested/gre.txt"));
        assert_eq!(entry.word, "Add words to gre.txt");
        assert_eq!(entry.meaning, "Format: word - meaning");
    }

    #[test]
    fn test_format_listing() {
        let entries = vec![Entry::new("jump", "(No meaning provided)")];
        let listing = format_listing(&entries);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "Word: jump");
        assert_eq!(lines[1], "Meaning: (No meaning provided)");
        assert_eq!(lines[2], " - ".repeat(40));
        assert_eq!(lines.len(), 3);
    }
}
