use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Languages the execution service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    CSharp,
    #[default]
    Java,
    Python,
}

struct LanguagePatterns {
    csharp: Regex,
    java: Regex,
    python: Regex,
}

static PATTERNS: LazyLock<LanguagePatterns> = LazyLock::new(|| LanguagePatterns {
    csharp: compile(Language::CSharp.pattern()),
    java: compile(Language::Java.pattern()),
    python: compile(Language::Python.pattern()),
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("language patterns are valid literals")
}

impl Language {
    /// Selector order.
    pub const ALL: [Language; 3] = [Language::CSharp, Language::Java, Language::Python];

    pub fn display_name(self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::Java => "Java",
            Language::Python => "Python",
        }
    }

    /// Asset name of the selector icon.
    pub fn icon(self) -> &'static str {
        match self {
            Language::CSharp => "c.png",
            Language::Java => "java2.png",
            Language::Python => "py.png",
        }
    }

    /// Code the execution service expects in the `language` field.
    pub fn engine_code(self) -> &'static str {
        match self {
            Language::CSharp => "cs",
            Language::Java => "java",
            Language::Python => "py",
        }
    }

    /// Validation pattern, searched anywhere in the source.
    ///
    /// Keywords fold case over ASCII only (`(?i-u:..)`), so `ſ` or the Kelvin
    /// sign never stand in for `s` or `k`. `\s` still accepts Unicode spaces.
    pub fn pattern(self) -> &'static str {
        match self {
            Language::CSharp => r"(?i-u:namespace)\s+|(?i-u:console\.writeline)",
            Language::Java => r"(?i-u:public)\s+(?i-u:class)\s+|(?i-u:system\.out\.println)",
            Language::Python => r"(?i-u:def)\s+|(?i-u:print\()",
        }
    }

    /// Best-effort check that `source` looks like this language.
    ///
    /// This is a heuristic, not a parser: a valid program that avoids the
    /// marker keywords is rejected, and any text containing them passes.
    pub fn matches_source(self, source: &str) -> bool {
        let patterns = &*PATTERNS;
        let regex = match self {
            Language::CSharp => &patterns.csharp,
            Language::Java => &patterns.java,
            Language::Python => &patterns.python,
        };
        regex.is_match(source)
    }

    pub fn next(self) -> Self {
        match self {
            Language::CSharp => Language::Java,
            Language::Java => Language::Python,
            Language::Python => Language::CSharp,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Language::CSharp => Language::Python,
            Language::Java => Language::CSharp,
            Language::Python => Language::Java,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_codes_are_fixed() {
        let codes: Vec<_> = Language::ALL.iter().map(|l| l.engine_code()).collect();
        assert_eq!(codes, vec!["cs", "java", "py"]);
    }

    #[test]
    fn icon_references_are_fixed() {
        let icons: Vec<_> = Language::ALL.iter().map(|l| l.icon()).collect();
        assert_eq!(icons, vec!["c.png", "java2.png", "py.png"]);
    }

    #[test]
    fn patterns_are_case_insensitive_searches() {
        assert!(Language::Python.matches_source("x = 1\nPRINT(x)"));
        assert!(Language::Java.matches_source("  PUBLIC   CLASS Main {}"));
        assert!(Language::CSharp.matches_source("console.writeline(\"hi\");"));
        assert!(!Language::Python.matches_source("print \"py2\""));
        assert!(!Language::Java.matches_source("// Write your code here"));
    }

    #[test]
    fn case_folding_stays_within_ascii() {
        assert!(!Language::Java.matches_source("\u{17f}y\u{17f}tem.out.println(1);"));
        assert!(!Language::CSharp.matches_source("name\u{17f}pace App {}"));
        assert!(!Language::CSharp.matches_source("con\u{17f}ole.writeline(1);"));
        assert!(Language::Python.matches_source("DEF\u{a0}f(): pass"));
        assert!(Language::Java.matches_source("Public\tClass\u{2003}Main {}"));
    }

    #[test]
    fn cycling_visits_every_language() {
        let mut lang = Language::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(lang, Language::Java);
        assert_eq!(seen.len(), 3);
        assert_eq!(Language::Java.next().prev(), Language::Java);
    }
}
