//! Sample Catalog: fixed example text pairs per language.
//!
//! Pure data. Each language maps to one "incorrect" and one "correct"
//! example, used to seed the two panes when the language selection changes.
//! Lookups are keyed by a typed [`Language`] enum; string ids exist only at
//! the UI boundary, and an unknown id falls back to the plaintext
//! placeholder at the call site.

mod samples;

/// One catalog entry: the incorrect/correct example texts for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePair {
    /// Example text for the left ("incorrect") pane.
    pub incorrect: &'static str,
    /// Example text for the right ("correct") pane.
    pub correct: &'static str,
}

/// Languages with a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub enum Language {
    /// Fallback entry; both samples are a plain placeholder.
    #[default]
    Plaintext,
    CSharp,
    Cpp,
    C,
    Java,
    Python,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    Php,
    Ruby,
    Swift,
    Kotlin,
    Sql,
    Html,
    Css,
    Json,
    Xml,
    Yaml,
    Markdown,
    Shell,
    PowerShell,
}

impl Language {
    /// Every catalog language, in selector order.
    pub const ALL: [Self; 23] = [
        Self::Plaintext,
        Self::CSharp,
        Self::Cpp,
        Self::C,
        Self::Java,
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Go,
        Self::Rust,
        Self::Php,
        Self::Ruby,
        Self::Swift,
        Self::Kotlin,
        Self::Sql,
        Self::Html,
        Self::Css,
        Self::Json,
        Self::Xml,
        Self::Yaml,
        Self::Markdown,
        Self::Shell,
        Self::PowerShell,
    ];

    /// Stable string id (also the syntax-mode id handed to editors).
    pub const fn id(self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::CSharp => "csharp",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Java => "java",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Sql => "sql",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Markdown => "markdown",
            Self::Shell => "shell",
            Self::PowerShell => "powershell",
        }
    }

    /// Human-readable name for the language selector.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Plaintext => "Plain Text",
            Self::CSharp => "C#",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::Java => "Java",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Php => "PHP",
            Self::Ruby => "Ruby",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Sql => "SQL",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Yaml => "YAML",
            Self::Markdown => "Markdown",
            Self::Shell => "Shell",
            Self::PowerShell => "PowerShell",
        }
    }

    /// Resolve a string id to a language.
    ///
    /// Returns `None` for unknown ids; callers substitute the plaintext
    /// placeholder pair (configuration absence is not fatal).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lang| lang.id() == id)
    }

    /// The fixed example pair for this language.
    pub const fn samples(self) -> &'static SamplePair {
        samples::lookup(self)
    }

    /// The next language in selector order, wrapping at the end.
    pub fn cycle_next(self) -> Self {
        let idx = Self::ALL.iter().position(|&lang| lang == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous language in selector order, wrapping at the start.
    pub fn cycle_prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&lang| lang == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_samples() {
        for lang in Language::ALL {
            let pair = lang.samples();
            assert!(!pair.incorrect.is_empty(), "{lang} missing incorrect sample");
            assert!(!pair.correct.is_empty(), "{lang} missing correct sample");
        }
    }

    #[test]
    fn test_from_id_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_id(lang.id()), Some(lang));
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert_eq!(Language::from_id("brainfuck"), None);
        assert_eq!(Language::from_id(""), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Language::PowerShell.cycle_next(), Language::Plaintext);
        assert_eq!(Language::Plaintext.cycle_prev(), Language::PowerShell);

        let mut lang = Language::Plaintext;
        for _ in 0..Language::ALL.len() {
            lang = lang.cycle_next();
        }
        assert_eq!(lang, Language::Plaintext);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Language::ALL.iter().map(|l| l.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Language::ALL.len());
    }
}
