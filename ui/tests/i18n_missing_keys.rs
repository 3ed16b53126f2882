use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en) `beacon-ui.ftl`, and nothing the fallback lacks.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<tag>/beacon-ui.ftl`
/// 2. Copy all keys from `en/beacon-ui.ftl`
/// 3. Register it below and run `cargo test -p beacon-ui`.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN: &str = include_str!("../i18n/en/beacon-ui.ftl");
    const RU: &str = include_str!("../i18n/ru/beacon-ui.ftl");

    let fallback_keys = extract_keys(EN);
    assert!(!fallback_keys.is_empty(), "Fallback (en) contains no keys.");
    assert_no_dup_keys(EN, "en");

    let locales: &[(&str, &str)] = &[
        ("ru", RU),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        let extra: BTreeSet<_> = keys.difference(&fallback_keys).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to the fallback:\n  {}",
                extra.len(),
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn required_keys_are_all_in_fallback() {
    const EN: &str = include_str!("../i18n/en/beacon-ui.ftl");
    let keys = extract_keys(EN);

    let missing: Vec<_> = ui::i18n::REQUIRED_KEYS
        .iter()
        .filter(|k| !keys.contains(**k))
        .collect();
    assert!(missing.is_empty(), "REQUIRED_KEYS not in en: {missing:?}");
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        if let Some(key) = message_key(line) {
            keys.insert(key.to_string());
        }
    }

    keys
}

fn message_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let (left, _right) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('*');
    valid.then_some(key)
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if let Some(key) = message_key(raw) {
            if !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
