//! Suppression-comment rules and the static registry.
//!
//! Each rule is a plain function over raw file text; the registry is an
//! explicitly enumerated table so the active rule set is auditable at a
//! glance. Rules scoped to one repo profile only run when `--repo` selects
//! it; shared rules always run, except that coverage-ignore is suppressed
//! for test files (tests are allowed to mark code as untestable).

use crate::models::Violation;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum trimmed length of a sanitization-disable justification.
const MIN_JUSTIFICATION_CHARS: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq)]
/// Which repo profile a rule applies to.
pub enum Scope {
    Api,
    Admin,
    Shared,
}

impl Scope {
    pub fn applies_to(self, repo: &str) -> bool {
        match self {
            Scope::Api => repo == "api",
            Scope::Admin => repo == "admin",
            Scope::Shared => true,
        }
    }
}

/// A registered check: runs over (file content, file path) and returns
/// every occurrence as its own violation.
pub struct Rule {
    pub id: &'static str,
    pub scope: Scope,
    pub skip_in_test_files: bool,
    pub check: fn(&str, &str) -> Vec<Violation>,
}

/// The full rule table. Order here fixes the per-file report order.
pub static RULES: [Rule; 6] = [
    Rule {
        id: "eslint-disable",
        scope: Scope::Admin,
        skip_in_test_files: false,
        check: check_eslint_disable,
    },
    Rule {
        id: "biome-ignore",
        scope: Scope::Api,
        skip_in_test_files: false,
        check: check_biome_ignore,
    },
    Rule {
        id: "ts-ignore",
        scope: Scope::Api,
        skip_in_test_files: false,
        check: check_ts_ignore,
    },
    Rule {
        id: "sanitization-disable",
        scope: Scope::Api,
        skip_in_test_files: false,
        check: check_sanitization_disable,
    },
    Rule {
        id: "istanbul-ignore",
        scope: Scope::Shared,
        skip_in_test_files: true,
        check: check_istanbul_ignore,
    },
    Rule {
        id: "it-skip",
        scope: Scope::Shared,
        skip_in_test_files: false,
        check: check_it_skip,
    },
];

/// 1-based line of a byte offset into `content`.
fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

fn collect_matches(
    re: &Regex,
    content: &str,
    file: &str,
    rule: &'static str,
    message: &str,
) -> Vec<Violation> {
    re.find_iter(content)
        .map(|m| Violation {
            file: file.to_string(),
            line: line_of(content, m.start()),
            rule: rule.to_string(),
            message: message.to_string(),
        })
        .collect()
}

fn check_eslint_disable(content: &str, file: &str) -> Vec<Violation> {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)//\s*eslint-disable").unwrap());
    collect_matches(
        &RE,
        content,
        file,
        "eslint-disable",
        "found eslint-disable comment",
    )
}

fn check_biome_ignore(content: &str, file: &str) -> Vec<Violation> {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)//\s*biome-ignore.*").unwrap());
    collect_matches(
        &RE,
        content,
        file,
        "biome-ignore",
        "found biome-ignore comment; remove it and conform to linting rules",
    )
}

fn check_ts_ignore(content: &str, file: &str) -> Vec<Violation> {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?m)(?:/\*|//)\s*@ts-ignore(?:\s|$)").unwrap());
    collect_matches(&RE, content, file, "ts-ignore", "found @ts-ignore comment")
}

fn check_istanbul_ignore(content: &str, file: &str) -> Vec<Violation> {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?:/\*|//)\s*istanbul\s+ignore\b").unwrap());
    collect_matches(
        &RE,
        content,
        file,
        "istanbul-ignore",
        "found istanbul ignore comment; add appropriate tests",
    )
}

fn check_it_skip(content: &str, file: &str) -> Vec<Violation> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bit\.skip\s*\(").unwrap());
    collect_matches(&RE, content, file, "it-skip", "found it.skip statement")
}

/// Sanitization bypasses must carry a written justification.
///
/// The marker is matched in exact lowercase only; capitalized variants are
/// left untouched by every rule. A known limitation of the policy, kept
/// as-is.
fn check_sanitization_disable(content: &str, file: &str) -> Vec<Violation> {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"//\s*check-sanitization-disable(?::[ \t]*([^\n]*))?").unwrap()
    });
    let mut out = Vec::new();
    for caps in RE.captures_iter(content) {
        let whole = caps.get(0).unwrap();
        let justification = caps.get(1).map(|g| g.as_str().trim()).unwrap_or("");
        let message = if justification.is_empty() {
            "check-sanitization-disable missing justification. \
             Format: // check-sanitization-disable: <reason>"
                .to_string()
        } else {
            let len = justification.chars().count();
            if len >= MIN_JUSTIFICATION_CHARS {
                continue;
            }
            format!(
                "Justification too short ({} chars). Minimum {} characters required.",
                len, MIN_JUSTIFICATION_CHARS
            )
        };
        out.push(Violation {
            file: file.to_string(),
            line: line_of(content, whole.start()),
            rule: "sanitization-disable".to_string(),
            message,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eslint_disable_found() {
        let v = check_eslint_disable("// eslint-disable no-console\nconst x = 1;", "test.ts");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].line, 1);
        assert!(v[0].message.contains("eslint-disable"));
    }

    #[test]
    fn test_eslint_disable_case_insensitive() {
        let v = check_eslint_disable("// ESLINT-DISABLE no-console\n", "test.ts");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_eslint_disable_not_found() {
        let v = check_eslint_disable("const x = 1;\nconsole.log(x);", "test.ts");
        assert!(v.is_empty());
    }

    #[test]
    fn test_biome_ignore_found() {
        let v = check_biome_ignore(
            "// biome-ignore lint/suspicious/noExplicitAny: temp\nconst x: any = 1;",
            "test.ts",
        );
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].line, 1);
    }

    #[test]
    fn test_biome_ignore_multiline() {
        let content = "\n// biome-ignore lint: temp\nconst x = 1;\n// biome-ignore format: temp\nconst y = 2;\n";
        let v = check_biome_ignore(content, "test.ts");
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].line, 2);
        assert_eq!(v[1].line, 4);
    }

    #[test]
    fn test_ts_ignore_single_line() {
        let v = check_ts_ignore("// @ts-ignore\nconst x = 1;", "test.ts");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].line, 1);
    }

    #[test]
    fn test_ts_ignore_block_comment() {
        let v = check_ts_ignore("/* @ts-ignore */\nconst x = 1;", "test.ts");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_ts_ignore_at_end_of_input() {
        let v = check_ts_ignore("// @ts-ignore", "test.ts");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_ts_ignore_requires_directive_boundary() {
        let v = check_ts_ignore("// @ts-ignorelist\nconst x = 1;", "test.ts");
        assert!(v.is_empty());
    }

    #[test]
    fn test_istanbul_ignore_variations() {
        let content =
            "\n// istanbul ignore next\nconst x = 1;\n/* istanbul ignore next */\nconst y = 2;\n";
        let v = check_istanbul_ignore(content, "test.ts");
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].line, 2);
        assert_eq!(v[1].line, 4);
    }

    #[test]
    fn test_istanbul_ignore_not_found() {
        let v = check_istanbul_ignore("function test() { return true; }", "test.ts");
        assert!(v.is_empty());
    }

    #[test]
    fn test_it_skip_found() {
        let v = check_it_skip("it.skip(\"test\", () => {});", "a.test.ts");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].line, 1);
    }

    #[test]
    fn test_it_skip_case_sensitive() {
        let v = check_it_skip("It.Skip(\"test\", () => {});", "a.test.ts");
        assert!(v.is_empty());
    }

    #[test]
    fn test_it_skip_plain_it_not_matched() {
        let v = check_it_skip("it(\"test\", () => {});", "a.test.ts");
        assert!(v.is_empty());
    }

    #[test]
    fn test_sanitization_valid_justification() {
        let v = check_sanitization_disable(
            "// check-sanitization-disable: legacy code needs refactoring first\n",
            "test.ts",
        );
        assert!(v.is_empty());
    }

    #[test]
    fn test_sanitization_exactly_ten_chars_valid() {
        let v = check_sanitization_disable("// check-sanitization-disable: 1234567890\n", "test.ts");
        assert!(v.is_empty());
    }

    #[test]
    fn test_sanitization_missing_justification() {
        let v = check_sanitization_disable("// check-sanitization-disable\nconst x = 1;", "test.ts");
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("missing justification"));
        assert!(v[0]
            .message
            .contains("Format: // check-sanitization-disable: <reason>"));
    }

    #[test]
    fn test_sanitization_colon_without_text() {
        let v = check_sanitization_disable("// check-sanitization-disable:", "test.ts");
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("missing justification"));
    }

    #[test]
    fn test_sanitization_colon_with_whitespace_only() {
        let v = check_sanitization_disable("// check-sanitization-disable:  ", "test.ts");
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("missing justification"));
    }

    #[test]
    fn test_sanitization_nine_chars_too_short() {
        let v = check_sanitization_disable("// check-sanitization-disable: 123456789\n", "test.ts");
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("too short"));
        assert!(v[0].message.contains("9 chars"));
        assert!(v[0].message.contains("Minimum 10 characters required"));
    }

    #[test]
    fn test_sanitization_five_chars_too_short() {
        let v = check_sanitization_disable("// check-sanitization-disable: short\n", "test.ts");
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("too short"));
        assert!(v[0].message.contains("5 chars"));
    }

    #[test]
    fn test_sanitization_one_char_too_short() {
        let v = check_sanitization_disable("// check-sanitization-disable: x\n", "test.ts");
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("1 chars"));
    }

    #[test]
    fn test_sanitization_mixed_case_never_matches() {
        let cases = [
            "// Check-Sanitization-Disable: valid justification text",
            "// CHECK-SANITIZATION-DISABLE: valid justification text",
            "// check-Sanitization-disable: valid justification text",
            "// Check-sanitization-disable: valid justification text",
        ];
        for content in cases {
            let v = check_sanitization_disable(content, "test.ts");
            assert!(v.is_empty(), "mixed-case variant must not match: {content}");
        }
    }

    #[test]
    fn test_sanitization_multiple_occurrences_report_each_line() {
        let content = "// check-sanitization-disable\n\n// check-sanitization-disable: short\n";
        let v = check_sanitization_disable(content, "test.ts");
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].line, 1);
        assert_eq!(v[1].line, 3);
    }

    #[test]
    fn test_same_pattern_thrice_yields_three_violations() {
        let content = "// @ts-ignore\n// @ts-ignore\nconst x = 1;\n// @ts-ignore\n";
        let v = check_ts_ignore(content, "test.ts");
        assert_eq!(v.len(), 3);
        assert_eq!(
            v.iter().map(|v| v.line).collect::<Vec<_>>(),
            vec![1, 2, 4]
        );
    }

    #[test]
    fn test_scope_applies_to() {
        assert!(Scope::Api.applies_to("api"));
        assert!(!Scope::Api.applies_to("admin"));
        assert!(Scope::Admin.applies_to("admin"));
        assert!(!Scope::Admin.applies_to("api"));
        assert!(Scope::Shared.applies_to("api"));
        assert!(Scope::Shared.applies_to("admin"));
    }
}
