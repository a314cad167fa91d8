use super::error::DataError;
use super::model::Entry;

/// Link of the first entry in `subset` named exactly `name`.
///
/// Later entries sharing the name are unreachable through this lookup.
pub fn resolve_link<'a>(subset: &[&'a Entry], name: &str) -> Result<&'a str, DataError> {
    subset
        .iter()
        .find(|e| e.name == name)
        .map(|e| e.link.as_str())
        .ok_or_else(|| DataError::NameNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::entry;

    #[test]
    fn returns_link_of_named_entry() {
        let a = entry("A", 4.0, 1200.0);
        let c = entry("C", 4.5, 9999.0);
        assert_eq!(resolve_link(&[&a, &c], "A").unwrap(), "https://example.com/A");
    }

    #[test]
    fn first_match_wins_on_duplicate_names() {
        let mut first = entry("A", 4.0, 1200.0);
        first.link = "https://first".into();
        let mut second = entry("A", 3.5, 900.0);
        second.link = "https://second".into();
        assert_eq!(resolve_link(&[&first, &second], "A").unwrap(), "https://first");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let a = entry("A", 4.0, 1200.0);
        let err = resolve_link(&[&a], "a").unwrap_err();
        assert!(matches!(err, DataError::NameNotFound(n) if n == "a"));
        assert!(resolve_link(&[], "A").is_err());
    }
}
