//! Ordered first-match-wins rule tables over opaque status strings.

use std::borrow::Cow;

use crate::error::TableError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Predicate half of a [`Rule`].
pub enum Matcher {
    /// Matches a missing or empty status only.
    Absent,
    /// Matches a non-empty status containing the marker (case-sensitive substring).
    Contains(Cow<'static, str>),
    /// Matches everything. Exactly one per table, in last position.
    Always,
}

impl Matcher {
    /// Marker matcher.
    pub fn contains(marker: impl Into<Cow<'static, str>>) -> Self {
        Self::Contains(marker.into())
    }

    /// Evaluates the predicate. An empty string counts as an absent status.
    pub fn matches(&self, status: Option<&str>) -> bool {
        match (self, present(status)) {
            (Self::Always, _) => true,
            (Self::Absent, status) => status.is_none(),
            (Self::Contains(marker), Some(status)) => status.contains(marker.as_ref()),
            (Self::Contains(_), None) => false,
        }
    }
}

fn present(status: Option<&str>) -> Option<&str> {
    status.filter(|status| !status.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One predicate/result pair.
pub struct Rule<T> {
    /// Predicate deciding whether this rule applies.
    pub matcher: Matcher,
    /// Token produced when the predicate matches.
    pub result: T,
}

impl<T> Rule<T> {
    /// Rule for a missing or empty status.
    pub fn absent(result: T) -> Self {
        Self {
            matcher: Matcher::Absent,
            result,
        }
    }

    /// Rule for statuses containing `marker`.
    pub fn contains(marker: impl Into<Cow<'static, str>>, result: T) -> Self {
        Self {
            matcher: Matcher::contains(marker),
            result,
        }
    }

    /// Always-matching rule.
    pub fn fallback(result: T) -> Self {
        Self {
            matcher: Matcher::Always,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered rules evaluated top to bottom; the first match wins.
///
/// The engine applies no prioritization beyond declaration order, so more specific markers
/// must be declared before more general ones that could match the same status.
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
    fallback: T,
}

impl<T> RuleTable<T> {
    /// Validates and builds a table.
    ///
    /// # Errors
    ///
    /// Fails when the table is empty, does not end with exactly one fallback rule, declares an
    /// absent-status rule after a marker rule, or uses an empty marker.
    pub fn new(rules: Vec<Rule<T>>) -> Result<Self, TableError> {
        validate(&rules)?;
        let mut rules = rules;
        match rules.pop() {
            Some(last) => Ok(Self {
                rules,
                fallback: last.result,
            }),
            None => Err(TableError::EmptyTable),
        }
    }

    pub(crate) fn builtin(rules: Vec<Rule<T>>, fallback: T) -> Self {
        Self { rules, fallback }
    }

    /// Resolves `status` to the result of the first matching rule.
    pub fn resolve(&self, status: Option<&str>) -> &T {
        self.resolve_with_index(status).1
    }

    /// Like [`RuleTable::resolve`], also returning the index of the matched rule. The fallback
    /// rule reports index `len() - 1`.
    pub fn resolve_with_index(&self, status: Option<&str>) -> (usize, &T) {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matcher.matches(status))
            .map(|(index, rule)| (index, &rule.result))
            .unwrap_or((self.rules.len(), &self.fallback))
    }

    /// Number of rules including the fallback.
    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    /// Always `false`; a valid table holds at least the fallback rule.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Result produced when no other rule matches.
    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Non-fallback rules in evaluation order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

/// Checks the structural invariants of a rule list.
///
/// # Errors
///
/// See [`RuleTable::new`].
pub fn validate<T>(rules: &[Rule<T>]) -> Result<(), TableError> {
    if rules.is_empty() {
        return Err(TableError::EmptyTable);
    }

    let fallbacks: Vec<usize> = rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.matcher == Matcher::Always)
        .map(|(index, _)| index)
        .collect();
    match fallbacks.as_slice() {
        [] => return Err(TableError::MissingFallback),
        [index] if *index != rules.len() - 1 => {
            return Err(TableError::FallbackNotLast { index: *index })
        }
        [_] => {}
        many => return Err(TableError::DuplicateFallback { count: many.len() }),
    }

    let mut seen_marker = false;
    for (index, rule) in rules.iter().enumerate() {
        match &rule.matcher {
            Matcher::Contains(marker) if marker.is_empty() => {
                return Err(TableError::EmptyMarker { index })
            }
            Matcher::Contains(_) => seen_marker = true,
            Matcher::Absent if seen_marker => {
                return Err(TableError::AbsentRuleAfterMarker { index })
            }
            Matcher::Absent | Matcher::Always => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn table() -> RuleTable<&'static str> {
        RuleTable::new(vec![
            Rule::absent("none"),
            Rule::contains("ERR", "error"),
            Rule::contains("RUN", "running"),
            Rule::fallback("other"),
        ])
        .expect("valid table")
    }

    #[test]
    fn first_declared_marker_wins_when_several_are_present() {
        let table = table();
        assert_eq!(*table.resolve(Some("RUN_ERR")), "error");
        assert_eq!(*table.resolve(Some("ERR_RUN")), "error");
        assert_eq!(*table.resolve(Some("RUNNING")), "running");
    }

    #[test]
    fn matching_is_case_sensitive_substring() {
        let table = table();
        assert_eq!(*table.resolve(Some("run")), "other");
        assert_eq!(*table.resolve(Some("xxERRxx")), "error");
    }

    #[test]
    fn absent_and_empty_status_use_the_absent_rule() {
        let table = table();
        assert_eq!(table.resolve_with_index(None), (0, &"none"));
        assert_eq!(table.resolve_with_index(Some("")), (0, &"none"));
        assert_eq!(table.resolve_with_index(Some("???")), (3, &"other"));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn absent_status_without_absent_rule_reaches_fallback() {
        let table = RuleTable::new(vec![Rule::contains("A", 1), Rule::fallback(0)])
            .expect("valid table");
        assert_eq!(*table.resolve(None), 0);
    }

    #[test]
    fn structural_violations_are_reported() {
        assert_eq!(
            RuleTable::<u8>::new(Vec::new()).expect_err("empty"),
            TableError::EmptyTable
        );
        assert_eq!(
            RuleTable::new(vec![Rule::contains("A", 1)]).expect_err("no fallback"),
            TableError::MissingFallback
        );
        assert_eq!(
            RuleTable::new(vec![Rule::fallback(0), Rule::contains("A", 1)])
                .expect_err("fallback first"),
            TableError::FallbackNotLast { index: 0 }
        );
        assert_eq!(
            RuleTable::new(vec![Rule::fallback(0), Rule::fallback(1)]).expect_err("two"),
            TableError::DuplicateFallback { count: 2 }
        );
        assert_eq!(
            RuleTable::new(vec![Rule::contains("", 1), Rule::fallback(0)]).expect_err("empty"),
            TableError::EmptyMarker { index: 0 }
        );
        assert_eq!(
            RuleTable::new(vec![
                Rule::contains("A", 1),
                Rule::absent(2),
                Rule::fallback(0)
            ])
            .expect_err("absent late"),
            TableError::AbsentRuleAfterMarker { index: 1 }
        );
    }
}
