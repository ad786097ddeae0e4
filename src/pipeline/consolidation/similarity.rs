//! Name similarity: the predicate deciding whether two textual mentions
//! denote the same real-world party.
//!
//! This is the correctness-critical primitive of the whole consolidation
//! algorithm, so it is a standalone pure function with no state and no
//! configuration.

/// True when `a` and `b` plausibly name the same party:
/// exact case-insensitive match, one name being an initialed form of the
/// other ("J. Doe" / "Jane Doe"), or a match after corporate-suffix
/// normalization ("Acme Inc." / "ACME, LLC").
pub fn names_similar(a: &str, b: &str) -> bool {
    let a = a.trim();
    let b = b.trim();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.eq_ignore_ascii_case(b) {
        return true;
    }
    if initialed_form(a, b) || initialed_form(b, a) {
        return true;
    }
    let na = normalize_corporate(a);
    let nb = normalize_corporate(b);
    !na.is_empty() && na == nb
}

/// Corporate suffixes carrying no identity: dropped during normalization.
const CORPORATE_SUFFIXES: &[&str] = &[
    "inc", "incorporated", "llc", "llp", "corp", "corporation", "co", "company", "ltd", "na",
];

/// Lowercase, strip punctuation, drop corporate-suffix tokens.
/// Periods are removed rather than split on so "N.A." stays one token.
fn normalize_corporate(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c == '.' {
                None
            } else if c.is_alphanumeric() {
                Some(c)
            } else {
                Some(' ')
            }
        })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| !CORPORATE_SUFFIXES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `short` is an initialed/truncated form of `long`: first initial plus
/// matching last token ("J. Doe" vs "Jane Doe", "J Q Smith" vs "John Q. Smith").
fn initialed_form(short: &str, long: &str) -> bool {
    let short_tokens: Vec<String> = tokens(short);
    let long_tokens: Vec<String> = tokens(long);
    if short_tokens.len() < 2 || long_tokens.len() < 2 {
        return false;
    }

    let short_first = &short_tokens[0];
    let long_first = &long_tokens[0];
    // The shorter mention leads with a bare initial.
    if short_first.len() != 1 || long_first.len() < 2 {
        return false;
    }
    if short_first.chars().next() != long_first.chars().next() {
        return false;
    }
    short_tokens.last() == long_tokens.last()
}

fn tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(String::from)
        .collect()
}
