//! Name inflection for generated identifiers and paths.
//!
//! Class-style names and path-style names are two different transforms over
//! the same raw input: [`classify`] drops separators (including a leading
//! underscore) while [`dasherize`] keeps a leading underscore verbatim so it
//! survives into directory and file names.

use serde::Serialize;

use super::error::GenerateError;

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("woman", "women"),
    ("man", "men"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
];

const UNINFLECTED: &[&str] = &[
    "news",
    "series",
    "species",
    "sheep",
    "fish",
    "deer",
    "data",
    "information",
    "equipment",
    "metadata",
];

/// Every name variant the templates and the path resolver need
///
/// All fields are pure functions of `raw`; deriving twice from the same raw
/// name yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    /// The name exactly as supplied
    pub raw: String,
    /// PascalCase, plurality preserved (`users` → `Users`)
    pub classified: String,
    /// PascalCase, last word singularised (`users` → `User`)
    pub classified_singular: String,
    /// PascalCase, last word pluralised (`user` → `Users`)
    pub classified_plural: String,
    /// `classified` with its first letter lowercased
    pub lower_camel: String,
    /// `classified_singular` with its first letter lowercased
    pub lower_camel_singular: String,
    /// `classified_plural` with its first letter lowercased
    pub lower_camel_plural: String,
    /// lower-kebab, leading underscores kept (`_userProfiles` → `_user-profiles`)
    pub dasherized: String,
    /// lower-kebab of the singular form (`_users` → `_user`)
    pub dasherized_singular: String,
}

/// Derive all [`NameVariants`] from a raw resource name.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidName`] if the name is empty, contains a
/// path separator, contains anything but ASCII letters, digits, `-`, `_`,
/// `.` and spaces, or would classify to an identifier that does not start
/// with a letter.
pub fn inflect(raw: &str) -> Result<NameVariants, GenerateError> {
    let invalid = |reason| GenerateError::InvalidName {
        name: raw.to_string(),
        reason,
    };
    if raw.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if raw.contains('/') || raw.contains('\\') {
        return Err(invalid("name must not contain path separators"));
    }
    if !raw.chars().all(is_name_char) {
        return Err(invalid(
            "name may only contain ASCII letters, digits, '-', '_', '.' and spaces",
        ));
    }

    let classified = classify(raw);
    match classified.chars().next() {
        None => return Err(invalid("name has no alphanumeric characters")),
        Some(c) if c.is_ascii_digit() => {
            return Err(invalid("class names cannot start with a digit"))
        }
        Some(_) => {}
    }

    let classified_singular = singular(&classified);
    let classified_plural = pluralize(&classified);

    Ok(NameVariants {
        raw: raw.to_string(),
        lower_camel: lower_first(&classified),
        lower_camel_singular: lower_first(&classified_singular),
        lower_camel_plural: lower_first(&classified_plural),
        dasherized: dasherize(raw),
        dasherized_singular: dasherize(&singular(raw)),
        classified,
        classified_singular,
        classified_plural,
    })
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ')
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.') || c.is_whitespace()
}

/// Split on `-`, `_`, `.`, whitespace and lower→upper camel boundaries.
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert a raw name to PascalCase
///
/// ```rust
/// use resgen::generator::classify;
///
/// assert_eq!(classify("users"), "Users");
/// assert_eq!(classify("_users"), "Users");
/// assert_eq!(classify("user-profiles"), "UserProfiles");
/// assert_eq!(classify("userProfiles"), "UserProfiles");
/// ```
pub fn classify(s: &str) -> String {
    split_words(s).iter().map(|w| upper_first(w)).collect()
}

/// Convert a raw name to lower-kebab case, keeping leading underscores
///
/// ```rust
/// use resgen::generator::dasherize;
///
/// assert_eq!(dasherize("users"), "users");
/// assert_eq!(dasherize("_users"), "_users");
/// assert_eq!(dasherize("userProfiles"), "user-profiles");
/// assert_eq!(dasherize("user_profiles"), "user-profiles");
/// ```
pub fn dasherize(s: &str) -> String {
    let body = s.trim_start_matches('_');
    let prefix = &s[..s.len() - body.len()];
    let words = split_words(body)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>();
    format!("{}{}", prefix, words.join("-"))
}

/// Index where the last word of `s` begins.
fn last_word_start(s: &str) -> usize {
    let mut start = 0;
    let mut prev_lower = false;
    for (i, c) in s.char_indices() {
        if is_separator(c) {
            start = i + c.len_utf8();
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            start = i;
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    start
}

/// Re-apply the case of `original`'s first letter to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        upper_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// Trailing separators are dropped before the last word is inflected.
fn inflect_last_word(s: &str, f: fn(&str) -> String) -> String {
    let s = s.trim_end_matches(is_separator);
    let start = last_word_start(s);
    let (prefix, word) = s.split_at(start);
    if word.is_empty() {
        return s.to_string();
    }
    format!("{}{}", prefix, f(word))
}

fn singular_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if UNINFLECTED.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((single, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == lower) {
        return match_case(word, single);
    }
    if IRREGULAR.iter().any(|(single, _)| *single == lower) {
        return word.to_string();
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return word.to_string();
    }
    if lower.len() > 3 && lower.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if ["sses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return word[..word.len() - 2].to_string();
    }
    if let Some(stripped) = word.strip_suffix('s').or_else(|| word.strip_suffix('S')) {
        if !stripped.is_empty() {
            return stripped.to_string();
        }
    }
    word.to_string()
}

fn plural_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if UNINFLECTED.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(single, _)| *single == lower) {
        return match_case(word, plural);
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) || lower.ends_with('s') {
        return word.to_string();
    }
    let mut tail = lower.chars().rev();
    if let (Some('y'), Some(before)) = (tail.next(), tail.next()) {
        if !"aeiou".contains(before) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
    }
    if ["x", "z", "ch", "sh"].iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Singularise the last word of a name
///
/// ```rust
/// use resgen::generator::singular;
///
/// assert_eq!(singular("Users"), "User");
/// assert_eq!(singular("_users"), "_user");
/// assert_eq!(singular("Categories"), "Category");
/// assert_eq!(singular("Status"), "Status");
/// assert_eq!(singular("user"), "user");
/// ```
pub fn singular(s: &str) -> String {
    inflect_last_word(s, singular_word)
}

/// Pluralise the last word of a name; a trailing `s` counts as already plural
///
/// ```rust
/// use resgen::generator::pluralize;
///
/// assert_eq!(pluralize("User"), "Users");
/// assert_eq!(pluralize("Users"), "Users");
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("Person"), "People");
/// ```
pub fn pluralize(s: &str) -> String {
    inflect_last_word(s, plural_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflect_plain_plural() {
        let v = inflect("users").unwrap();
        assert_eq!(v.classified, "Users");
        assert_eq!(v.classified_singular, "User");
        assert_eq!(v.classified_plural, "Users");
        assert_eq!(v.lower_camel, "users");
        assert_eq!(v.lower_camel_singular, "user");
        assert_eq!(v.dasherized, "users");
        assert_eq!(v.dasherized_singular, "user");
    }

    #[test]
    fn test_inflect_leading_underscore() {
        let v = inflect("_users").unwrap();
        assert_eq!(v.classified, "Users");
        assert_eq!(v.lower_camel, "users");
        assert_eq!(v.dasherized, "_users");
        assert_eq!(v.dasherized_singular, "_user");
    }

    #[test]
    fn test_inflect_singular_input() {
        let v = inflect("user").unwrap();
        assert_eq!(v.classified, "User");
        assert_eq!(v.classified_singular, "User");
        assert_eq!(v.classified_plural, "Users");
        assert_eq!(v.lower_camel_plural, "users");
    }

    #[test]
    fn test_inflect_multi_word() {
        let v = inflect("blogPosts").unwrap();
        assert_eq!(v.classified, "BlogPosts");
        assert_eq!(v.classified_singular, "BlogPost");
        assert_eq!(v.lower_camel_singular, "blogPost");
        assert_eq!(v.dasherized, "blog-posts");
        assert_eq!(v.dasherized_singular, "blog-post");

        let v = inflect("order_line-items").unwrap();
        assert_eq!(v.classified, "OrderLineItems");
        assert_eq!(v.dasherized, "order-line-items");
    }

    #[test]
    fn test_irregular_and_uninflected() {
        assert_eq!(singular("People"), "Person");
        assert_eq!(singular("salesPeople"), "salesPerson");
        assert_eq!(pluralize("Child"), "Children");
        assert_eq!(singular("News"), "News");
        assert_eq!(pluralize("Series"), "Series");
        assert_eq!(singular("Addresses"), "Address");
        assert_eq!(singular("Boxes"), "Box");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(singular("Analysis"), "Analysis");
    }

    #[test]
    fn test_trailing_separators_do_not_block_singular() {
        let v = inflect("users_").unwrap();
        assert_eq!(v.classified_singular, "User");
        assert_eq!(v.dasherized, "users");
        assert_eq!(v.dasherized_singular, "user");

        assert_eq!(singular("blog-posts-"), "blog-post");
        assert_eq!(pluralize("user."), "users");
    }

    #[test]
    fn test_separated_names_are_accepted() {
        let v = inflect("order line.items").unwrap();
        assert_eq!(v.classified, "OrderLineItems");
        assert_eq!(v.dasherized, "order-line-items");
    }

    #[test]
    fn test_inflect_is_deterministic() {
        for name in ["users", "_users", "blogPosts", "people", "status"] {
            assert_eq!(inflect(name).unwrap(), inflect(name).unwrap());
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "", "   ", "___", "users/admin", "2fa", "!!!", "user$", "users'", "_9lives",
            "üsers",
        ] {
            assert!(
                matches!(inflect(name), Err(GenerateError::InvalidName { .. })),
                "expected {name:?} to be rejected"
            );
        }
    }
}
