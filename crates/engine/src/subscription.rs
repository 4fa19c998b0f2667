// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change pattern matching and subscriptions

/// Pattern for matching change names
///
/// Supports:
///   - Exact: "batch:advanced"
///   - Table wildcard: "batch:*" matches every batch change
///   - Everything: "*"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangePattern(String);

impl ChangePattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.trim().to_string())
    }

    /// Check if this pattern matches a change name
    pub fn matches(&self, change_name: &str) -> bool {
        match self.0.as_str() {
            "" => false,
            "*" => true,
            pattern => match (pattern.split_once(':'), change_name.split_once(':')) {
                (Some((table, "*")), Some((change_table, _))) => table == change_table,
                _ => pattern == change_name,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Subscriber handle for unsubscribing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

/// A subscription to specific change patterns
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub patterns: Vec<ChangePattern>,
}

impl Subscription {
    pub fn new(id: impl Into<String>, patterns: Vec<ChangePattern>) -> Self {
        Self {
            id: SubscriberId(id.into()),
            patterns,
        }
    }

    /// Subscription receiving every change
    pub fn all(id: impl Into<String>) -> Self {
        Self::new(id, vec![ChangePattern::new("*")])
    }

    /// Check if any pattern matches the change
    pub fn matches(&self, change_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(change_name))
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
