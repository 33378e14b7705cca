//! # Environment-Variable Expansion
//!
//! Expands `$NAME` and `${NAME}` inside a `$schema` reference so documents
//! can point at checkouts whose location differs per machine, e.g.
//! `"$schema": "${SCHEMA_ROOT}/app.schema.json"`.
//!
//! Unset variables are left verbatim rather than replaced with the empty
//! string, so a typo shows up as an unresolvable path in the failure line.

/// Expand variables from the process environment.
pub fn expand_env_vars(input: &str) -> String {
    expand_with(input, |name| std::env::var(name).ok())
}

/// Expand variables using `lookup` to resolve names.
///
/// `$NAME` consumes the longest run of ASCII alphanumerics and `_`.
/// `${NAME}` consumes everything up to the closing brace. A `$` followed by
/// neither, or a `${` without a closing brace, is copied through unchanged.
pub fn expand_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                let name = &braced[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &braced[end + 1..];
            } else {
                out.push('$');
                rest = after;
            }
            continue;
        }

        let name_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if name_len == 0 {
            out.push('$');
            rest = after;
            continue;
        }

        let name = &after[..name_len];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}
