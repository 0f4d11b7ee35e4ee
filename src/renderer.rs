use crate::collector::{Entry, EntrySequence};

/// Renders the greeting template for a complete entry sequence.
///
/// Entries are substituted verbatim, joined with `", "` and a final
/// `" and "`, so two entries render as `"Hello, {0} and {1}"`.
///
/// # Panics
///
/// Panics if `entries` is not complete. The collector enforces the count,
/// so hitting this is a bug in the caller, not a user error.
pub fn render(greeting: &str, entries: &EntrySequence) -> String {
    assert!(
        entries.is_complete(),
        "EntrySequence must be complete before rendering!"
    );
    let names: Vec<&str> = entries.iter().map(Entry::text).collect();
    let listed = match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    };
    format!("{greeting}, {listed}")
}
