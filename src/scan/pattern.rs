//! Gitignore-style glob patterns matched against repository-relative paths.
//!
//! Patterns support:
//! - `*` - any run of characters except `/`
//! - `?` - a single character except `/`
//! - `[abc]`, `[a-c]`, `[!a]` - character classes
//! - `**` - zero or more whole path segments
//!
//! A pattern without a slash is tested against every segment of the path, so
//! `*.log` matches `a.log` and `sub/dir/a.log`, and `build` matches everything
//! under a `build/` directory. A pattern with a slash is anchored at the
//! repository root and matches the path itself or any directory above it.
//! A trailing slash restricts the pattern to directories. Braces are literal;
//! there is no `{a,b}` alternation.

use globset::{GlobBuilder, GlobMatcher};
use std::fmt;

use crate::utils::normalize_path;

/// A compiled gitignore-style pattern.
#[derive(Clone)]
pub struct Pattern {
    original: String,
    kind: PatternKind,
}

#[derive(Clone)]
enum PatternKind {
    /// Never matches anything
    Empty,
    /// Tested against individual path segments
    Segment { glob: GlobMatcher, directory_only: bool },
    /// Tested against the path and its leading directory prefixes
    Anchored { glob: GlobMatcher, directory_only: bool },
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the glob syntax is invalid (e.g. an unclosed `[`).
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let original = pattern.to_string();
        let mut body = pattern.replace('\\', "/");

        let directory_only = body.ends_with('/');
        while body.ends_with('/') {
            body.pop();
        }
        let anchored = body.contains('/');
        let body = body.trim_start_matches('/');

        if body.is_empty() {
            return Ok(Self { original, kind: PatternKind::Empty });
        }

        let body = literal_braces(body);
        let glob = GlobBuilder::new(&body).literal_separator(true).build()?.compile_matcher();
        let kind = if anchored {
            PatternKind::Anchored { glob, directory_only }
        } else {
            PatternKind::Segment { glob, directory_only }
        };

        Ok(Self { original, kind })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Check whether a repository-relative path matches this pattern.
    pub fn is_match(&self, path: &str) -> bool {
        let path = normalize_path(path);
        if path.is_empty() {
            return false;
        }

        match &self.kind {
            PatternKind::Empty => false,
            PatternKind::Segment { glob, directory_only } => {
                let segments: Vec<&str> = path.split('/').collect();
                let candidates =
                    if *directory_only { &segments[..segments.len() - 1] } else { &segments[..] };
                candidates.iter().any(|segment| glob.is_match(segment))
            }
            PatternKind::Anchored { glob, directory_only } => {
                if glob.is_match(path.as_str()) && !directory_only {
                    return true;
                }
                path.match_indices('/').any(|(idx, _)| glob.is_match(&path[..idx]))
            }
        }
    }
}

/// Rewrite `{` and `}` outside character classes as one-character classes.
///
/// Braces are ordinary characters in gitignore patterns, but globset reads
/// them as alternation.
fn literal_braces(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '[' => {
                out.push('[');
                if let Some(&negate @ ('!' | '^')) = chars.peek() {
                    out.push(negate);
                    chars.next();
                }
                // a `]` right after the opening bracket is part of the class
                if let Some(&']') = chars.peek() {
                    out.push(']');
                    chars.next();
                }
                for inner in chars.by_ref() {
                    out.push(inner);
                    if inner == ']' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.original).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Match a single pattern against a path. An invalid pattern matches nothing.
pub fn matches(pattern: &str, path: &str) -> bool {
    Pattern::new(pattern).map(|p| p.is_match(path)).unwrap_or(false)
}

/// Check whether any pattern in the list matches the path.
pub fn matches_any(patterns: &[Pattern], path: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::{matches, matches_any, Pattern};

    #[test]
    fn star_stays_within_one_segment() {
        assert!(matches("src/*.rs", "src/main.rs"));
        assert!(!matches("src/*.rs", "src/bin/main.rs"));
        assert!(matches("*.rs", "main.rs"));
    }

    #[test]
    fn question_mark_matches_single_character() {
        assert!(matches("file?.txt", "file1.txt"));
        assert!(!matches("file?.txt", "file10.txt"));
        assert!(!matches("a?b", "a/b"));
    }

    #[test]
    fn character_classes_and_ranges() {
        assert!(matches("log[0-9].txt", "log7.txt"));
        assert!(!matches("log[0-9].txt", "logx.txt"));
        assert!(matches("[abc].md", "b.md"));
        assert!(!matches("[!abc].md", "b.md"));
    }

    #[test]
    fn basename_patterns_match_at_any_depth() {
        for path in ["a.log", "sub/a.log", "sub/dir/a.log"] {
            assert!(matches("*.log", path), "{path}");
        }
        assert!(!matches("*.log", "a.log.bak"));
    }

    #[test]
    fn basename_pattern_agrees_with_basename_for_top_level_files() {
        let cases = [("*.md", "README.md"), ("Makefile", "Makefile"), ("?.py", "ab.py")];
        for (pattern, path) in cases {
            let basename = path.rsplit('/').next().unwrap();
            assert_eq!(matches(pattern, path), matches(pattern, basename));
        }
    }

    #[test]
    fn basename_pattern_matches_directory_segments() {
        assert!(matches("node_modules", "node_modules/pkg/index.js"));
        assert!(matches("build", "app/build/out.js"));
        assert!(!matches("build", "app/rebuild/out.js"));
    }

    #[test]
    fn double_star_matches_every_path() {
        for path in ["a", "a/b", "deep/nested/path/file.txt", ".env"] {
            assert!(matches("**", path), "{path}");
        }
    }

    #[test]
    fn trailing_double_star_is_recursive() {
        assert!(matches("docs/**", "docs/a/b.txt"));
        assert!(matches("docs/**", "docs/readme.md"));
        assert!(!matches("docs/**", "doc/a.txt"));
        assert!(!matches("docs/**", "src/docs/a.txt"));
    }

    #[test]
    fn inner_double_star_matches_zero_or_more_segments() {
        assert!(matches("src/**/mod.rs", "src/mod.rs"));
        assert!(matches("src/**/mod.rs", "src/a/b/mod.rs"));
        assert!(matches("**/fixtures/*.json", "tests/fixtures/x.json"));
        assert!(matches("**/fixtures/*.json", "fixtures/x.json"));
    }

    #[test]
    fn anchored_patterns_match_from_root() {
        assert!(matches("docs/internal/*", "docs/internal/notes.md"));
        assert!(!matches("docs/internal/*", "other/docs/internal/notes.md"));
        assert!(matches("/README.md", "README.md"));
        assert!(!matches("/README.md", "sub/README.md"));
    }

    #[test]
    fn anchored_directory_covers_descendants() {
        assert!(matches("docs/internal", "docs/internal/a/b.md"));
        assert!(!matches("docs/internal", "docs/internals.md"));
    }

    #[test]
    fn trailing_slash_matches_directories_only() {
        assert!(matches("logs/", "logs/today.txt"));
        assert!(matches("logs/", "app/logs/today.txt"));
        assert!(!matches("logs/", "logs"));
        assert!(matches("config/local/", "config/local/a.toml"));
        assert!(!matches("config/local/", "config/local"));
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        assert!(!matches("", "a.txt"));
        assert!(!matches("/", "a.txt"));
        assert!(!matches("*", ""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches("*.MD", "readme.md"));
        assert!(matches("*.MD", "README.MD"));
    }

    #[test]
    fn windows_separators_are_normalized() {
        assert!(matches("docs/**", "docs\\guide\\intro.md"));
        assert!(matches("*.log", "sub\\a.log"));
    }

    #[test]
    fn braces_are_literal_characters() {
        assert!(matches("{a,b}.txt", "{a,b}.txt"));
        assert!(!matches("{a,b}.txt", "a.txt"));
        assert!(!matches("{a,b}.txt", "b.txt"));
        assert!(matches("*.{js}", "app.{js}"));
        assert!(!matches("*.{js}", "app.js"));
        assert!(matches("tmpl/}", "tmpl/}"));
    }

    #[test]
    fn braces_inside_character_classes_stay_in_the_class() {
        assert!(matches("[{}]x", "{x"));
        assert!(matches("[{}]x", "}x"));
        assert!(!matches("[{}]x", "ax"));
        assert!(matches("[!{]x", "ax"));
        assert!(!matches("[!{]x", "{x"));
    }

    #[test]
    fn invalid_glob_is_rejected() {
        assert!(Pattern::new("[abc").is_err());
        assert!(!matches("[abc", "a"));
    }

    #[test]
    fn matches_any_checks_every_pattern() {
        let patterns = vec![Pattern::new("*.lock").unwrap(), Pattern::new("dist/**").unwrap()];
        assert!(matches_any(&patterns, "Cargo.lock"));
        assert!(matches_any(&patterns, "dist/app.js"));
        assert!(!matches_any(&patterns, "src/app.js"));
        assert!(!matches_any(&[], "anything"));
    }

    #[test]
    fn display_keeps_original_text() {
        let pattern = Pattern::new("docs\\**").unwrap();
        assert_eq!(pattern.to_string(), "docs\\**");
        assert_eq!(pattern.as_str(), "docs\\**");
    }
}
