//! Static fallback glossary.
//!
//! A small bidirectional Myanmar/Chinese term table used only when both the
//! cache and the upstream provider have failed. This is a last-resort,
//! non-AI substitute so the customer still gets something usable for the
//! most common banking phrases.

/// Marker appended to substring matches to signal a partial translation.
pub const PARTIAL_MARKER: &str = "(အခြေခံဘာသာပြန်ချက် / 基础翻译)";

/// Term table in lookup order. Order matters: substring scans return the
/// first containing entry, so reordering changes results for mixed input.
const TERMS: [(&str, &str); 16] = [
    ("ငွေထုတ်", "提款 / Withdrawal"),
    ("ငွေသွင်း", "存款 / Deposit"),
    ("လက်ကျန်ငွေ", "余额 / Balance"),
    ("အကောင့်", "账户 / Account"),
    ("ပြဿနာ", "问题 / Problem"),
    ("အကူအညီ", "帮助 / Help"),
    ("စောင့်ဆိုင်းနေ", "等待中 / Waiting"),
    ("လုပ်ဆောင်နေ", "处理中 / Processing"),
    ("提款", "ငွေထုတ် / Withdrawal"),
    ("存款", "ငွေသွင်း / Deposit"),
    ("余额", "လက်ကျန်ငွေ / Balance"),
    ("账户", "အကောင့် / Account"),
    ("问题", "ပြဿနာ / Problem"),
    ("帮助", "အကူအညီ / Help"),
    ("等待", "စောင့်ဆိုင်း / Wait"),
    ("处理", "လုပ်ဆောင် / Process"),
];

/// Fallback term lookup over the static table.
///
/// # Examples
///
/// ```
/// use padauk_core::Glossary;
///
/// let glossary = Glossary::default();
///
/// // Exact match returns the bare translation
/// assert_eq!(glossary.lookup("ငွေထုတ်"), Some("提款 / Withdrawal".to_string()));
///
/// // No entry at all
/// assert_eq!(glossary.lookup("hello"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Glossary {
    terms: &'static [(&'static str, &'static str)],
}

impl Default for Glossary {
    fn default() -> Self {
        Self { terms: &TERMS }
    }
}

impl Glossary {
    /// Look up a fallback translation for `text`.
    ///
    /// Tries an exact match on the trimmed input first. Failing that, scans
    /// the table in order for the first term contained in the input
    /// (case-insensitive on the input side) and returns its translation
    /// annotated with [`PARTIAL_MARKER`].
    pub fn lookup(&self, text: &str) -> Option<String> {
        let trimmed = text.trim();

        for (term, translation) in self.terms {
            if *term == trimmed {
                return Some((*translation).to_string());
            }
        }

        let lower = text.to_lowercase();
        for (term, translation) in self.terms {
            if text.contains(term) || lower.contains(&term.to_lowercase()) {
                return Some(format!("{} {}", translation, PARTIAL_MARKER));
            }
        }

        None
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_burmese() {
        let glossary = Glossary::default();
        assert_eq!(
            glossary.lookup("ငွေသွင်း"),
            Some("存款 / Deposit".to_string())
        );
    }

    #[test]
    fn test_exact_match_chinese() {
        let glossary = Glossary::default();
        assert_eq!(
            glossary.lookup("提款"),
            Some("ငွေထုတ် / Withdrawal".to_string())
        );
    }

    #[test]
    fn test_exact_match_trims_whitespace() {
        let glossary = Glossary::default();
        assert_eq!(
            glossary.lookup("  余额  "),
            Some("လက်ကျန်ငွေ / Balance".to_string())
        );
    }

    #[test]
    fn test_substring_match_is_annotated() {
        let glossary = Glossary::default();
        let result = glossary.lookup("ကျွန်တော် ငွေထုတ် ချင်ပါတယ်").unwrap();
        assert!(result.starts_with("提款 / Withdrawal"));
        assert!(result.ends_with(PARTIAL_MARKER));
    }

    #[test]
    fn test_substring_match_uses_table_order() {
        let glossary = Glossary::default();
        // Contains both ငွေထုတ် and ပြဿနာ; the earlier table entry wins.
        let result = glossary.lookup("ငွေထုတ် ပြဿနာ").unwrap();
        assert!(result.starts_with("提款 / Withdrawal"));
    }

    #[test]
    fn test_no_match() {
        let glossary = Glossary::default();
        assert_eq!(glossary.lookup("completely unrelated"), None);
        assert_eq!(glossary.lookup(""), None);
    }
}
