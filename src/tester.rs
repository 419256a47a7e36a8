//! Run a compiled pattern over sample text and summarise the matches.

use itertools::Itertools;

use crate::compiled::Pattern;

/// Optional parts of a [`MatchReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TestOptions {
    /// Compute the share of the sample covered by matches.
    pub coverage: bool,
    /// Collect the distinct match texts.
    pub unique: bool,
}

/// One match. `start..end` are byte offsets into the sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub matches: Vec<Match>,
    /// Percentage of sample bytes inside a match, if requested.
    pub coverage: Option<f64>,
    /// Distinct match texts in first-seen order, if requested.
    pub unique: Option<Vec<String>>,
}

impl MatchReport {
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_match(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn first(&self) -> Option<&Match> {
        self.matches.first()
    }

    pub fn last(&self) -> Option<&Match> {
        self.matches.last()
    }
}

/// Match `pattern` against `text`.
///
/// Global patterns report every non-overlapping match, others the first.
pub fn test_pattern(pattern: &Pattern, text: &str, options: &TestOptions) -> MatchReport {
    let found = pattern.regex().find_iter(text).map(|m| Match {
        text: m.as_str().to_string(),
        start: m.start(),
        end: m.end(),
    });
    let matches: Vec<Match> = if pattern.is_global() {
        found.collect()
    } else {
        found.take(1).collect()
    };

    let coverage = options.coverage.then(|| {
        if text.is_empty() {
            0.0
        } else {
            let covered: usize = matches.iter().map(|m| m.end - m.start).sum();
            covered as f64 * 100.0 / text.len() as f64
        }
    });
    let unique: Option<Vec<String>> = options
        .unique
        .then(|| matches.iter().map(|m| m.text.clone()).unique().collect());

    MatchReport {
        matches,
        coverage,
        unique,
    }
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} match{}",
            self.count(),
            if self.count() == 1 { "" } else { "es" }
        )?;
        for m in &self.matches {
            writeln!(f, "  {:?} at {}..{}", m.text, m.start, m.end)?;
        }
        if let (Some(first), Some(last)) = (self.first(), self.last()) {
            writeln!(f, "first: {:?} at {}", first.text, first.start)?;
            writeln!(f, "last: {:?} at {}", last.text, last.start)?;
        }
        if let Some(coverage) = self.coverage {
            writeln!(f, "coverage: {coverage:.1}%")?;
        }
        if let Some(unique) = &self.unique {
            writeln!(
                f,
                "unique: {}",
                unique.iter().map(|s| format!("{s:?}")).join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> TestOptions {
        TestOptions {
            coverage: true,
            unique: true,
        }
    }

    #[test]
    fn non_global_reports_first_match_only() {
        let p = Pattern::new(r"\d+", "").unwrap();
        let report = test_pattern(&p, "a1 b22 c1", &TestOptions::default());
        assert_eq!(report.count(), 1);
        assert_eq!(report.first().unwrap().text, "1");
        assert_eq!(report.coverage, None);
        assert_eq!(report.unique, None);
    }

    #[test]
    fn global_reports_every_match() {
        let p = Pattern::new(r"\d+", "g").unwrap();
        let report = test_pattern(&p, "a1 b22 c1", &all());
        assert_eq!(report.count(), 3);
        assert_eq!(report.first().unwrap().start, 1);
        assert_eq!(report.last().unwrap().start, 8);
        assert_eq!(
            report.unique,
            Some(vec!["1".to_string(), "22".to_string()])
        );
        let coverage = report.coverage.unwrap();
        assert!((coverage - 400.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn no_match() {
        let p = Pattern::new("z", "g").unwrap();
        let report = test_pattern(&p, "abc", &all());
        assert!(!report.is_match());
        assert_eq!(report.coverage, Some(0.0));
        assert_eq!(report.to_string(), "0 matches\ncoverage: 0.0%\nunique: \n");
    }

    #[test]
    fn empty_sample_has_zero_coverage() {
        let p = Pattern::new("a*", "g").unwrap();
        let report = test_pattern(&p, "", &all());
        assert_eq!(report.coverage, Some(0.0));
    }

    #[test]
    fn report_renders_positions() {
        let p = Pattern::new("b", "").unwrap();
        let report = test_pattern(&p, "abc", &TestOptions::default());
        assert_eq!(
            report.to_string(),
            "1 match\n  \"b\" at 1..2\nfirst: \"b\" at 1\nlast: \"b\" at 1\n"
        );
    }
}
