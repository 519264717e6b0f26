//! Domain Value Objects

use std::fmt;

/// URL-safe forum slug
///
/// Either derived from the title (lowercase, whitespace to hyphens, strip
/// everything outside `[a-z0-9-]`, collapse and trim hyphens) or supplied
/// explicitly (trimmed, taken as-is).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a title; `None` when nothing survives
    /// (e.g. a title of only symbols)
    pub fn derive(title: &str) -> Option<Self> {
        let slug = slugify(title);
        if slug.is_empty() { None } else { Some(Self(slug)) }
    }

    /// An explicitly supplied slug, trimmed; `None` when blank
    pub fn from_explicit(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_was_hyphen = false;

    for ch in title.to_lowercase().chars() {
        let mapped = if ch.is_whitespace() { '-' } else { ch };
        match mapped {
            'a'..='z' | '0'..='9' => {
                out.push(mapped);
                last_was_hyphen = false;
            }
            '-' => {
                if !last_was_hyphen {
                    out.push('-');
                    last_was_hyphen = true;
                }
            }
            // Anything else is dropped
            _ => {}
        }
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_derivation() {
        assert_eq!(Slug::derive("Hello World").unwrap().as_str(), "hello-world");
        assert_eq!(
            Slug::derive("Grand Slam Debates 2024").unwrap().as_str(),
            "grand-slam-debates-2024"
        );
    }

    #[test]
    fn test_symbols_stripped_and_hyphens_collapsed() {
        assert_eq!(
            Slug::derive("  The G.O.A.T.  --  debate!!  ").unwrap().as_str(),
            "the-goat-debate"
        );
        assert_eq!(Slug::derive("a   b").unwrap().as_str(), "a-b");
    }

    #[test]
    fn test_all_symbols_yields_none() {
        assert!(Slug::derive("!!!").is_none());
        assert!(Slug::derive("???  ***").is_none());
        assert!(Slug::derive("").is_none());
    }

    #[test]
    fn test_leading_trailing_hyphens_trimmed() {
        assert_eq!(Slug::derive("--tennis--").unwrap().as_str(), "tennis");
    }

    #[test]
    fn test_explicit_slug_trimmed_not_rewritten() {
        assert_eq!(
            Slug::from_explicit("  My-Custom-Slug  ").unwrap().as_str(),
            "My-Custom-Slug"
        );
        assert!(Slug::from_explicit("   ").is_none());
    }
}
