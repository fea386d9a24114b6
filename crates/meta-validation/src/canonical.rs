//! Label → name canonicalization.
//!
//! The mapping is deterministic and idempotent (`f(f(x)) == f(x)`):
//!
//! 1. Non-ASCII characters are dropped without breaking the surrounding word.
//! 2. Any other non-alphanumeric ASCII character separates words.
//! 3. A word is also split where a lowercase letter or digit is followed by
//!    an uppercase letter (`firstName` → `first`, `Name`). Runs of capitals
//!    are not split (`URLField` stays one word).
//! 4. Words are joined in camelCase: the first is lower-cased, each later
//!    word is lower-cased with its first character upper-cased.
//! 5. A leading digit is prefixed with `n`, keeping the name identifier-safe.
//!
//! ```
//! use meta_validation::compute_name_from_label;
//!
//! assert_eq!(compute_name_from_label("Test name"), "testName");
//! assert_eq!(compute_name_from_label("2nd address"), "n2ndAddress");
//! ```

/// Derive the identifier-safe name for `label`. Returns an empty string when
/// the label has no ASCII alphanumerics.
#[must_use]
pub fn compute_name_from_label(label: &str) -> String {
    let mut name = String::with_capacity(label.len());

    for (index, word) in split_words(label).iter().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                name.push(first.to_ascii_lowercase());
            } else {
                name.push(first.to_ascii_uppercase());
            }
            name.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, 'n');
    }
    name
}

/// Whether `name` can be stored as a name: non-empty ASCII alphanumerics
/// that do not start with a digit.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric())
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn split_words(label: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut after_lower_or_digit = false;

    for c in label.chars() {
        if !c.is_ascii() {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase() && after_lower_or_digit {
                words.push(std::mem::take(&mut current));
            }
            after_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
            current.push(c);
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            after_lower_or_digit = false;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
