use crate::errors::ExtractError;
use crate::model::{Param, VOID_TYPE};

/// A comma-separated parameter segment before elided types are filled in
#[derive(Debug)]
struct ParameterEntry {
    name: String,
    ty: Option<String>,
}

/// Parse a raw Go parameter list (the text between the parentheses)
///
/// Go lets consecutive parameters share a trailing type (`a, b int`); bare
/// names take the type of the nearest following typed parameter. A bare name
/// with no typed parameter after it is an error.
pub(crate) fn parse_params(
    params_str: &str,
    function: &str,
    line: usize,
) -> Result<Vec<Param>, ExtractError> {
    let mut entries: Vec<ParameterEntry> = params_str
        .split(',')
        .filter_map(parse_single_parameter_entry)
        .collect();

    // Walk backwards so each bare name sees the next explicit type
    let mut current_type: Option<String> = None;
    for entry in entries.iter_mut().rev() {
        if entry.ty.is_some() {
            current_type.clone_from(&entry.ty);
        } else {
            entry.ty.clone_from(&current_type);
        }
    }

    entries
        .into_iter()
        .map(|entry| match entry.ty {
            Some(ty) => Ok(Param::new(entry.name, ty)),
            None => Err(ExtractError::UntypedParameter {
                function: function.to_string(),
                param: entry.name,
                line,
            }),
        })
        .collect()
}

fn parse_single_parameter_entry(raw: &str) -> Option<ParameterEntry> {
    let mut fields = raw.split_whitespace();
    let name = fields.next()?.to_string();
    let ty = fields.collect::<Vec<_>>().join(" ");

    Some(ParameterEntry {
        name,
        ty: (!ty.is_empty()).then_some(ty),
    })
}

/// Normalize the raw text after a declaration's parameter list
///
/// The body brace and everything after it is dropped and one layer of
/// parentheses is stripped, so `(int, error)` stays one opaque token.
pub(crate) fn parse_return_type(return_str: &str) -> String {
    let mut return_str = return_str.trim();

    if let Some(idx) = return_str.find('{') {
        return_str = return_str[..idx].trim();
    }

    let return_str = return_str.strip_prefix('(').unwrap_or(return_str);
    let return_str = return_str.strip_suffix(')').unwrap_or(return_str).trim();

    if return_str.is_empty() {
        VOID_TYPE.to_string()
    } else {
        return_str.to_string()
    }
}
