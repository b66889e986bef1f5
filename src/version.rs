//! Runtime version comparison.
//!
//! Versions are compared the way PHP's `version_compare` does it, so that
//! strings reported by the runtime itself (`8.2.7`, `8.3.0-dev`,
//! `7.4.3-4ubuntu2.19`) order the same way the runtime would order them.

use std::cmp::Ordering;

/// One canonical piece of a version string.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Number(u64),
    Word(String),
}

/// Rank of a special form. Numbers rank as `#`.
fn special_rank(word: &str) -> i32 {
    // Prefix matching mirrors the runtime: "alpha1" canonicalizes to "alpha",
    // but "pre" is still recognised via its leading "p".
    const FORMS: &[(&str, i32)] = &[
        ("dev", 0),
        ("alpha", 1),
        ("a", 1),
        ("beta", 2),
        ("b", 2),
        ("RC", 3),
        ("rc", 3),
        ("#", 4),
        ("pl", 5),
        ("p", 5),
    ];

    FORMS
        .iter()
        .find(|(form, _)| word.starts_with(form))
        .map(|(_, rank)| *rank)
        .unwrap_or(-6)
}

fn segment_rank(segment: &Segment) -> i32 {
    match segment {
        Segment::Number(_) => special_rank("#"),
        Segment::Word(word) => special_rank(word),
    }
}

/// Split a version string into canonical segments.
///
/// `-`, `_` and `+` act like `.`, and a boundary is inserted wherever digits
/// meet non-digits. Other punctuation stays inside word segments.
fn canonicalize(version: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_is_digit = false;

    let flush = |current: &mut String, is_digit: bool, segments: &mut Vec<Segment>| {
        if current.is_empty() {
            return;
        }
        let segment = if is_digit {
            current
                .parse::<u64>()
                .map(Segment::Number)
                .unwrap_or(Segment::Number(u64::MAX))
        } else {
            Segment::Word(current.clone())
        };
        segments.push(segment);
        current.clear();
    };

    for c in version.trim().chars() {
        if matches!(c, '.' | '-' | '_' | '+') {
            flush(&mut current, current_is_digit, &mut segments);
            continue;
        }
        let is_digit = c.is_ascii_digit();
        if !current.is_empty() && is_digit != current_is_digit {
            flush(&mut current, current_is_digit, &mut segments);
        }
        current_is_digit = is_digit;
        current.push(c);
    }
    flush(&mut current, current_is_digit, &mut segments);

    segments
}

/// Compare two version strings.
///
/// Returns `None` when either side has no digits at all, since such a string
/// is not a version.
pub fn compare_versions(left: &str, right: &str) -> Option<Ordering> {
    if !left.chars().any(|c| c.is_ascii_digit()) || !right.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let left = canonicalize(left);
    let right = canonicalize(right);

    for (l, r) in left.iter().zip(right.iter()) {
        let ordering = match (l, r) {
            (Segment::Number(a), Segment::Number(b)) => a.cmp(b),
            _ => segment_rank(l).cmp(&segment_rank(r)),
        };
        if ordering != Ordering::Equal {
            return Some(ordering);
        }
    }

    // One side ran out. A trailing number makes the longer side newer;
    // a trailing word is compared against the release marker.
    let ordering = match left.len().cmp(&right.len()) {
        Ordering::Equal => Ordering::Equal,
        Ordering::Greater => match &left[right.len()] {
            Segment::Number(_) => Ordering::Greater,
            word => segment_rank(word).cmp(&special_rank("#")),
        },
        Ordering::Less => match &right[left.len()] {
            Segment::Number(_) => Ordering::Less,
            word => special_rank("#").cmp(&segment_rank(word)),
        },
    };
    Some(ordering)
}

/// Whether `version` is at least `minimum`. Unparsable input never is.
pub fn version_at_least(version: &str, minimum: &str) -> bool {
    matches!(
        compare_versions(version, minimum),
        Some(Ordering::Greater | Ordering::Equal)
    )
}
