//! Naming utilities for converting between different case conventions
//!
//! The Go source file's base name drives two derived identifiers in the
//! generated PHP: a snake_case namespace segment and a PascalCase class name.

use std::path::Path;

/// Base name of a Go source file: the file name without its extension
///
/// - services/MyGo.go -> MyGo
/// - mygo.go -> mygo
pub fn base_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
}

/// Convert PascalCase to snake_case
///
/// An underscore goes before every uppercase letter except the first
/// character, then everything is lowercased:
/// - MyGo -> my_go
/// - mygo -> mygo
/// - HTTPLib -> h_t_t_p_lib
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            result.push('_');
        }
        result.push(ch);
    }

    result.to_lowercase()
}

/// Convert snake_case to PascalCase
///
/// Splits on underscores and uppercases the first character of each part:
/// - my_go -> MyGo
/// - mygo -> Mygo
/// - MyGo -> MyGo
pub fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Find the position of matching closing paren, handling nested parens/brackets
///
/// Returns the index of the closing paren that matches the implicit opening paren
/// at position -1 (i.e., we start at depth 0 looking for the first ')' at depth 0).
pub fn find_matching_paren(text: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' | '[' | '{' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            ']' | '}' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}
