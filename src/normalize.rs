//! Rewrites shorthand learner queries into fuller instructions before they
//! reach the model.
//!
//! Rules are tried in order and the first match wins, so a bare word is
//! always treated as a lookup even if it happens to contain "ene".

pub const WORD_LOOKUP_PREFIX: &str = "[WORD LOOKUP] Define and analyze the Spanish word: ";
pub const PRONOUNCE_ENE: &str =
    "[PRONUNCIATION] Explain how to pronounce the letter Ñ with examples and a mnemonic.";

type Rule = fn(&str) -> Option<String>;

const RULES: &[Rule] = &[word_lookup, pronounce_ene];

/// Trim `raw` and apply the first matching rewrite rule, if any.
pub fn normalize(raw: &str) -> String {
    let q = raw.trim();
    RULES
        .iter()
        .find_map(|rule| rule(q))
        .unwrap_or_else(|| q.to_string())
}

fn word_lookup(q: &str) -> Option<String> {
    is_word_like(q).then(|| format!("{WORD_LOOKUP_PREFIX}{q}"))
}

fn pronounce_ene(q: &str) -> Option<String> {
    let lower = q.to_lowercase();
    (lower.contains("pronounce") && (lower.contains('ñ') || lower.contains("ene")))
        .then(|| PRONOUNCE_ENE.to_string())
}

/// One word, or two joined by a single hyphen, made of Spanish letters only.
pub fn is_word_like(q: &str) -> bool {
    let mut parts = q.split('-');
    let first_ok = parts.next().is_some_and(is_spanish_token);
    let second_ok = parts.next().map_or(true, is_spanish_token);
    first_ok && second_ok && parts.next().is_none()
}

fn is_spanish_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_spanish_letter)
}

fn is_spanish_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || "ÁÉÍÓÚÜÑáéíóúüñ".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_becomes_lookup() {
        assert_eq!(
            normalize("hola"),
            "[WORD LOOKUP] Define and analyze the Spanish word: hola"
        );
    }

    #[test]
    fn lookup_trims_and_keeps_accents() {
        assert_eq!(
            normalize("  camión  "),
            "[WORD LOOKUP] Define and analyze the Spanish word: camión"
        );
        assert_eq!(normalize("PINGÜINO"), format!("{WORD_LOOKUP_PREFIX}PINGÜINO"));
    }

    #[test]
    fn hyphenated_pair_is_a_word() {
        assert_eq!(normalize("franco-español"), format!("{WORD_LOOKUP_PREFIX}franco-español"));
    }

    #[test]
    fn malformed_hyphenation_is_not_a_word() {
        for q in ["a-b-c", "-hola", "hola-", "ho--la", "hola2", "çava", "año nuevo"] {
            assert!(!is_word_like(q), "{q} should not be word-like");
        }
    }

    #[test]
    fn pronunciation_shortcut_ignores_wording() {
        assert_eq!(normalize("how do I pronounce the ñ?"), PRONOUNCE_ENE);
        assert_eq!(normalize("Pronounce ENE please"), PRONOUNCE_ENE);
        // loose match: "ene" inside an unrelated word still fires
        assert_eq!(normalize("pronounce generous"), PRONOUNCE_ENE);
    }

    #[test]
    fn word_rule_takes_precedence() {
        assert_eq!(normalize("pronounceñ"), format!("{WORD_LOOKUP_PREFIX}pronounceñ"));
    }

    #[test]
    fn other_questions_pass_through_trimmed() {
        assert_eq!(
            normalize("  what does hola mean in English "),
            "what does hola mean in English"
        );
        assert_eq!(normalize("how do I pronounce rr?"), "how do I pronounce rr?");
    }
}
