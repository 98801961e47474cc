//! Lexical detection of dismissive phrasing.
//!
//! The pattern table is data: adding, removing or editing a row is a behaviour
//! change and bumps [`PATTERN_SET_VERSION`]. Matching is case-insensitive and a
//! pure function of the input text.

use regex::{RegexSet, RegexSetBuilder};

pub const PATTERN_SET_VERSION: u32 = 2;

/// `(name, pattern)` rows. Names only show up in logs.
pub const DISMISSAL_PATTERNS: &[(&str, &str)] = &[
    (
        "pre-existing",
        r"(?:existing|pre-existing|preexisting)\s+(?:issues?|bugs?|problems?|errors?|defects?)",
    ),
    (
        "not-ours",
        r"(?:not|isn'?t|aren'?t|is\s+not|are\s+not)\s+(?:related|caused|introduced)\s+(?:to|by)\s+(?:this|our|the|my)",
    ),
    (
        "unrelated",
        r"unrelated\s+(?:issues?|bugs?|problems?|errors?|to\s+(?:this|our|the))",
    ),
    (
        "separate",
        r"separate\s+(?:issues?|bugs?|problems?|concerns?|matters?)",
    ),
    (
        "out-of-scope",
        r"(?:outside|beyond)\s+(?:the\s+)?scope\s+of\s+(?:this|our|the)",
    ),
    (
        "already-broken",
        r"(?:was\s+)?already\s+(?:present|broken|failing|there)\s+(?:before|on\s+main|in\s+main)",
    ),
    (
        "known",
        r"known\s+(?:issues?|bugs?|problems?|limitations?)",
    ),
    (
        "not-introduced",
        r"not\s+something\s+we\s+introduced",
    ),
    (
        "declared",
        r"(?:this|the|these)\s+(?:issues?|bugs?|problems?|errors?)\s+(?:is|are|was|were|appears?)\s+(?:to\s+be\s+)?(?:pre-existing|preexisting|unrelated)",
    ),
];

#[derive(Debug, Clone)]
pub struct DismissalClassifier {
    set: RegexSet,
}

impl DismissalClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_patterns(DISMISSAL_PATTERNS.iter().map(|(_, pattern)| *pattern))
    }

    pub fn with_patterns<I, P>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let set = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()?;
        Ok(Self { set })
    }

    pub fn is_dismissal(&self, text: &str) -> bool {
        !text.is_empty() && self.set.is_match(text)
    }

    /// Indices of every pattern that matches `text`, ascending.
    pub fn matching(&self, text: &str) -> Vec<usize> {
        if text.is_empty() {
            return Vec::new();
        }
        self.set.matches(text).into_iter().collect()
    }
}

/// Name of the built-in pattern at `index`.
pub fn pattern_name(index: usize) -> &'static str {
    DISMISSAL_PATTERNS
        .get(index)
        .map(|(name, _)| *name)
        .unwrap_or("custom")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> DismissalClassifier {
        DismissalClassifier::new().unwrap()
    }

    fn matched_names(text: &str) -> Vec<&'static str> {
        classifier()
            .matching(text)
            .into_iter()
            .map(pattern_name)
            .collect()
    }

    #[test]
    fn every_pattern_compiles() {
        let c = classifier();
        assert_eq!(c.set.len(), DISMISSAL_PATTERNS.len());
    }

    #[test]
    fn pre_existing_and_unrelated() {
        let text = "This appears to be a pre-existing issue unrelated to our changes.";
        assert!(classifier().is_dismissal(text));
        assert_eq!(matched_names(text), ["pre-existing", "unrelated"]);
    }

    #[test]
    fn separate_issue_out_of_scope() {
        let text = "That's a separate issue, outside the scope of this PR.";
        assert!(classifier().is_dismissal(text));
        assert_eq!(matched_names(text), ["separate", "out-of-scope"]);
    }

    #[test]
    fn fixing_a_bug_is_not_a_dismissal() {
        assert!(!classifier().is_dismissal("I fixed the bug in the parser."));
    }

    #[test]
    fn empty_text_is_never_a_dismissal() {
        assert!(!classifier().is_dismissal(""));
        assert!(classifier().matching("").is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        assert!(classifier().is_dismissal("KNOWN LIMITATION of the tokenizer"));
        assert!(classifier().is_dismissal("This Is Not Related To Our change"));
    }

    #[test]
    fn each_family_has_a_trigger() {
        let cases = [
            ("The failing test is a preexisting bug.", "pre-existing"),
            ("These errors aren't caused by my edit.", "not-ours"),
            ("An unrelated problem in CI.", "unrelated"),
            ("That's a separate concern.", "separate"),
            ("Beyond scope of the task.", "out-of-scope"),
            ("The lint was already failing on main.", "already-broken"),
            ("It's a known bug upstream.", "known"),
            ("This is not something we introduced.", "not-introduced"),
            ("The errors were unrelated.", "declared"),
        ];
        for (text, family) in cases {
            assert!(
                matched_names(text).contains(&family),
                "{text:?} should match {family}"
            );
        }
    }

    #[test]
    fn ordinary_progress_reports_pass() {
        for text in [
            "Running the test suite now.",
            "All 42 tests pass after the change.",
            "I added error handling for the missing file case.",
            "The issue was a missing null check; fixed in parser.rs.",
            "Let me look at the existing tests first.",
        ] {
            assert!(!classifier().is_dismissal(text), "false positive: {text:?}");
        }
    }

    #[test]
    fn verdict_is_deterministic() {
        let c = classifier();
        let text = "Looks like a known issue; moving on.\nOtherwise done.";
        let first = c.is_dismissal(text);
        for _ in 0..10 {
            assert_eq!(c.is_dismissal(text), first);
            assert_eq!(c.matching(text), c.matching(text));
        }
        assert!(first);
    }

    #[test]
    fn custom_patterns() {
        let c = DismissalClassifier::with_patterns(["not my problem"]).unwrap();
        assert!(c.is_dismissal("Honestly, NOT MY PROBLEM."));
        assert!(!c.is_dismissal("pre-existing issue"));
        assert!(DismissalClassifier::with_patterns(["("]).is_err());
    }
}
