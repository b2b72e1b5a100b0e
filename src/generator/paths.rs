use super::inflect::NameVariants;
use super::select::{
    ArtifactDescriptor, NAME_PLACEHOLDER, SINGULAR_PLACEHOLDER, SUFFIX_PLACEHOLDER,
};

/// Resolve the final posix-style path of a descriptor.
///
/// Placeholders are substituted in a single left-to-right pass so a
/// substituted name can never be re-expanded. Unless `flat`, the result is
/// prefixed with the dasherized resource directory; subdirectories inside
/// the pattern (`dto/`, `entities/`) are kept either way.
pub fn resolve_path(
    descriptor: &ArtifactDescriptor,
    names: &NameVariants,
    flat: bool,
    test_stub_suffix: &str,
) -> String {
    let placeholders = [
        (NAME_PLACEHOLDER, names.dasherized.as_str()),
        (SINGULAR_PLACEHOLDER, names.dasherized_singular.as_str()),
        (SUFFIX_PLACEHOLDER, test_stub_suffix),
    ];

    let pattern = descriptor.file_pattern.as_str();
    let mut relative = String::with_capacity(pattern.len() + names.dasherized.len());
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for (placeholder, value) in placeholders {
            if let Some(tail) = rest.strip_prefix(placeholder) {
                relative.push_str(value);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            relative.push(c);
        }
        rest = chars.as_str();
    }

    if flat {
        relative
    } else {
        format!("{}/{}", names.dasherized, relative)
    }
}
