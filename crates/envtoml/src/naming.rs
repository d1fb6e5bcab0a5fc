//! Field-to-key naming for record fields.

use std::borrow::Cow;

/// Whether a record field takes part in decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Declared `pub`; looked up in the document.
    Visible,
    /// Private or restricted (`pub(crate)`, `pub(super)`, ...); skipped.
    Hidden,
}

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared identifier.
    pub name: &'static str,
    /// Explicit key override (`#[key = "..."]`).
    pub tag: Option<&'static str>,
    pub visibility: Visibility,
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        tag: Option<&'static str>,
        visibility: Visibility,
    ) -> Self {
        Self {
            name,
            tag,
            visibility,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Document key this field is read from.
    ///
    /// An explicit tag wins unconditionally; otherwise the declared name is
    /// converted with [`to_snake_case`].
    pub fn key(&self) -> Cow<'static, str> {
        match self.tag {
            Some(tag) => Cow::Borrowed(tag),
            None => {
                let name = self.name.strip_prefix("r#").unwrap_or(self.name);
                Cow::Owned(to_snake_case(name))
            }
        }
    }
}

/// Convert an identifier to lowercase, underscore-separated form.
///
/// A separator goes before an uppercase character (other than the first)
/// when the next character is lowercase or the previous one is, so
/// `MaxConnection` becomes `max_connection` and `HTTPServer` becomes
/// `http_server`.
pub fn to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    for (idx, ch) in chars.iter().enumerate() {
        if idx > 0 && ch.is_uppercase() {
            let next_lower = chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
            let prev_lower = chars[idx - 1].is_lowercase();
            if next_lower || prev_lower {
                out.push('_');
            }
        }
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn camel_case_boundaries_split() {
        assert_eq!(to_snake_case("MaxConnection"), "max_connection");
        assert_eq!(to_snake_case("ShowSlowQuery"), "show_slow_query");
        assert_eq!(to_snake_case("connectionMax"), "connection_max");
    }

    #[test]
    fn acronym_runs_split_before_last_capital() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("IP"), "ip");
        assert_eq!(to_snake_case("DC"), "dc");
        assert_eq!(to_snake_case("ServerID"), "server_id");
    }

    #[test]
    fn snake_and_digits_pass_through() {
        assert_eq!(to_snake_case("max_connection"), "max_connection");
        assert_eq!(to_snake_case("Int1"), "int1");
        assert_eq!(to_snake_case("Float32Value"), "float32_value");
    }

    #[test]
    fn tag_overrides_derived_name() {
        let field = FieldDescriptor::new("MaxConnection", Some("maxConn"), Visibility::Visible);
        assert_eq!(field.key(), "maxConn");
        let field = FieldDescriptor::new("MaxConnection", None, Visibility::Visible);
        assert_eq!(field.key(), "max_connection");
    }

    #[test]
    fn raw_identifiers_lose_prefix() {
        let field = FieldDescriptor::new("r#type", None, Visibility::Visible);
        assert_eq!(field.key(), "type");
    }
}
