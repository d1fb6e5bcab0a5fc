//! Read-only queries over a parsed TOML tree.

use crate::path::ResolvedPath;
use toml::value::Datetime;
use toml::{Table, Value};

/// Query contract the decoder needs from a document tree.
pub trait TreeQuery {
    /// Whether a node exists at the path.
    fn has(&self, path: &ResolvedPath<'_>) -> bool {
        self.get_path(path).is_some()
    }

    /// Node stored at the path, walking nested tables segment by segment.
    fn get_path(&self, path: &ResolvedPath<'_>) -> Option<&Value>;

    /// Local key names of this table.
    fn local_keys(&self) -> Vec<&str>;
}

impl TreeQuery for Table {
    fn get_path(&self, path: &ResolvedPath<'_>) -> Option<&Value> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            match current.get(*segment) {
                Some(Value::Table(child)) => current = child,
                _ => return None,
            }
        }
        current.get(*last)
    }

    fn local_keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

/// Short name of a node's kind, used in diagnostics.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Datetime(datetime) => datetime_kind(datetime),
        Value::Array(_) => "array",
        Value::Table(_) => "table",
    }
}

/// Which of the four TOML date-time forms a value is.
pub fn datetime_kind(datetime: &Datetime) -> &'static str {
    match (datetime.date, datetime.time, datetime.offset) {
        (Some(_), Some(_), Some(_)) => "offset datetime",
        (Some(_), Some(_), None) => "local datetime",
        (Some(_), None, _) => "local date",
        (None, _, _) => "local time",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tree() -> Table {
        r#"
        title = "t"
        [owner]
        name = "n"
        [owner.development]
        name = "dev"
        [[servers]]
        ip = "10.0.0.1"
        "#
        .parse::<Table>()
        .expect("toml")
    }

    #[test]
    fn walks_nested_tables() {
        let tree = tree();
        let path = ResolvedPath::join(&["owner", "development", "name"]);
        assert_eq!(
            tree.get_path(&path).and_then(Value::as_str),
            Some("dev")
        );
        assert!(tree.has(&ResolvedPath::join(&["title"])));
        assert!(!tree.has(&ResolvedPath::join(&["title", "name"])));
    }

    #[test]
    fn does_not_descend_into_table_arrays() {
        let tree = tree();
        assert!(tree.has(&ResolvedPath::join(&["servers"])));
        assert!(!tree.has(&ResolvedPath::join(&["servers", "ip"])));
    }

    #[test]
    fn empty_path_has_nothing() {
        let tree = tree();
        assert!(!tree.has(&ResolvedPath::join(&["", ""])));
    }

    #[test]
    fn datetime_kinds_are_distinguished() {
        let tree: Table = r#"
        odt = 1979-05-27T07:32:00-08:00
        ldt = 1979-05-27T07:32:00
        ld = 1979-05-27
        lt = 07:32:00
        "#
        .parse()
        .expect("toml");
        let kinds: Vec<&str> = ["odt", "ldt", "ld", "lt"]
            .iter()
            .map(|key| kind_name(&tree[*key]))
            .collect();
        assert_eq!(
            kinds,
            vec!["offset datetime", "local datetime", "local date", "local time"]
        );
    }

    #[test]
    fn keys_lists_local_names() {
        let tree = tree();
        let mut keys = tree.local_keys();
        keys.sort_unstable();
        assert_eq!(keys, vec!["owner", "servers", "title"]);
    }
}
