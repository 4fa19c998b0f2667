// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve user-typed ids, which may be unique prefixes

use anyhow::bail;

/// Find the item whose id equals `key`, or whose id uniquely starts with it
pub fn resolve<'a, T>(
    items: &'a [T],
    key: &str,
    kind: &str,
    id_of: impl Fn(&T) -> &str,
) -> anyhow::Result<&'a T> {
    let key = key.trim();
    if key.is_empty() {
        bail!("{} id must not be empty", kind);
    }
    if let Some(exact) = items.iter().find(|item| id_of(item) == key) {
        return Ok(exact);
    }

    let mut matches = items.iter().filter(|item| id_of(item).starts_with(key));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only),
        (Some(_), Some(_)) => bail!("{} id '{}' is ambiguous", kind, key),
        (None, _) => bail!("no {} matches '{}'", kind, key),
    }
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod tests;
