use std::{fs, path::Path};

/// Used when neither `TOPIC_NOTES` nor the notes file is available.
const FALLBACK_NOTES: &str = "\
AUDIENCE: Native English speakers (A1–A2). Reply in ENGLISH only.
STYLE: concise, step-by-step; include pronunciation; end with \"Try it:\".
WORD LOOKUPS: meaning + POS; pronunciation; morphology; etymology; collocations; 2–3 examples.
PRONUNCIATION: explain mouth/tongue, minimal pairs, examples, mnemonic.
GRAMMAR: subject pronouns order; tiny conj table if relevant; note irregulars.
OUT OF SCOPE: reply exactly \"This is outside my current topic.\"
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesSource {
    Override,
    File,
    Fallback,
}

/// Resolve the teaching notes: inline override, then the notes file, then
/// the built-in fallback. Content is taken verbatim.
pub fn load_notes(override_notes: Option<&str>, notes_file: &Path) -> (String, NotesSource) {
    if let Some(notes) = override_notes.filter(|n| !n.is_empty()) {
        return (notes.to_string(), NotesSource::Override);
    }

    if notes_file.exists() {
        match fs::read_to_string(notes_file) {
            Ok(notes) => return (notes, NotesSource::File),
            Err(e) => tracing::warn!(
                path = %notes_file.display(),
                error = %e,
                "Notes file unreadable, using built-in notes"
            ),
        }
    }

    (FALLBACK_NOTES.to_string(), NotesSource::Fallback)
}

pub fn build_system_prompt(topic_name: &str, notes: &str) -> String {
    format!(
        "You are {topic_name}.\n\
         Teach Spanish to a beginner, but EXPLAIN EVERYTHING IN ENGLISH.\n\
         Follow the didactic NOTES below strictly.\n\
         \n\
         === TEACHING NOTES ===\n\
         {notes}\n\
         === END NOTES ===\n"
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn override_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "from file").unwrap();

        let (notes, source) = load_notes(Some("inline notes"), file.path());
        assert_eq!(notes, "inline notes");
        assert_eq!(source, NotesSource::Override);
    }

    #[test]
    fn empty_override_falls_through_to_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ser vs estar").unwrap();

        let (notes, source) = load_notes(Some(""), file.path());
        assert_eq!(notes, "ser vs estar");
        assert_eq!(source, NotesSource::File);
    }

    #[test]
    fn missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let (notes, source) = load_notes(None, &dir.path().join("nope.md"));
        assert_eq!(source, NotesSource::Fallback);
        assert!(notes.contains("This is outside my current topic."));
        assert!(notes.contains("WORD LOOKUPS"));
    }

    #[test]
    fn prompt_frames_notes_verbatim() {
        let prompt = build_system_prompt("Profe", "  any *notes* at all  ");
        assert!(prompt.starts_with("You are Profe.\n"));
        assert!(prompt.contains("EXPLAIN EVERYTHING IN ENGLISH"));
        assert!(prompt.contains("=== TEACHING NOTES ===\n  any *notes* at all  \n=== END NOTES ===\n"));
    }
}
