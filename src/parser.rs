// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::group::Group;
use crate::link::Link;
use crate::scanner::entries;

#[derive(Parser)]
#[grammar = "rfc8288.pest"]
pub struct Rfc8288Parser;

/// Parses a `Link` header value into a `Group` keyed by relation type.
///
/// Parsing is best-effort: entries that do not parse are skipped, so an
/// empty or wholly malformed value gives an empty group. When two entries
/// share a relation type the later one wins.
///
/// ```
/// let group = httplink::parse(
///     r#"<https://example.com/?page=2>; rel="next", <https://example.com/?page=34>; rel="last""#,
/// );
///
/// assert_eq!(group.len(), 2);
/// assert_eq!(group["next"].uri(), "https://example.com/?page=2");
/// assert_eq!(group["last"].uri(), "https://example.com/?page=34");
/// ```
pub fn parse(input: &str) -> Group {
    entries(input)
        .filter_map(|entry| match Link::parse(entry) {
            Ok(link) => {
                trace!("Parsed link {:?} with rel {:?}", link.uri().as_str(), link.rel());
                Some(link)
            }
            Err(err) => {
                debug!("Skipping malformed link entry {:?}: {}", entry, err);
                None
            }
        })
        .collect()
}

/// Parses several values of the same header as one comma-joined value.
///
/// ```
/// let group = httplink::parse_values(vec![
///     r#"<https://example.com/?page=2>; rel="next""#,
///     r#"<https://example.com/?page=34>; rel="last""#,
/// ]);
///
/// assert_eq!(group.len(), 2);
/// ```
pub fn parse_values<I, S>(values: I) -> Group
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|value| value.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    parse(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let actual = parse("");

        assert!(actual.is_empty());
        assert_eq!(actual.len(), 0);
    }

    #[test]
    fn malformed_input() {
        assert!(parse("garbage").is_empty());
        assert!(parse(r#"<https://example.org; rel="next""#).is_empty());
        assert!(parse(",,,").is_empty());
    }

    #[test]
    fn skips_malformed_entry() {
        let input = r#"https://example.org/1; rel="prev", <https://example.org/3>; rel="next""#;

        let actual = parse(input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual["next"].uri(), "https://example.org/3");
        assert!(actual.get("prev").is_none());
    }

    #[test]
    fn unterminated_target_before_good_entry() {
        let input = r#"<https://example.org/1; rel="prev", <https://example.org/3>; rel="next""#;

        let actual = parse(input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual["next"].uri(), "https://example.org/3");
        assert!(actual.get("prev").is_none());
    }

    #[test]
    fn stray_quote_before_good_entry() {
        let input = r#"<https://example.org/1>; title=a"b, <https://example.org/3>; rel="next""#;

        let actual = parse(input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual["next"].uri(), "https://example.org/3");
    }

    #[test]
    fn unterminated_quoted_value_before_good_entry() {
        let input = r#"<https://example.org/1>; rel="prev; title="a, <https://example.org/3>; rel=next"#;

        let actual = parse(input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual["next"].uri(), "https://example.org/3");
    }

    #[test]
    fn duplicate_rel_last_wins() {
        let input = r#"<https://example.org/1>; rel="item", <https://example.org/2>; rel="item""#;

        let actual = parse(input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual["item"].uri(), "https://example.org/2");
    }

    #[test]
    fn missing_rel_uses_empty_key() {
        let input = r#"<https://example.org/1>, <https://example.org/2>; title="two""#;

        let actual = parse(input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual[""].uri(), "https://example.org/2");
        assert_eq!(actual[""].rel(), "");
    }

    #[test]
    fn commas_inside_target_and_title() {
        let input = r#"<https://example.org/?ids=1,2>; rel="next"; title="one, two", </>; rel="up""#;

        let actual = parse(input);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual["next"].uri(), "https://example.org/?ids=1,2");
        assert_eq!(
            actual["next"].extra().get("title").map(String::as_str),
            Some("one, two")
        );
        assert_eq!(actual["up"].uri(), "/");
    }

    #[test]
    fn values_are_joined() {
        let actual = parse_values(&[
            r#"<https://example.org/3>; rel="next""#,
            "",
            r#"<https://example.org/1>; rel="prev""#,
        ]);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual["next"].uri(), "https://example.org/3");
        assert_eq!(actual["prev"].uri(), "https://example.org/1");
    }

    #[test]
    fn later_values_win() {
        let actual = parse_values(vec![
            String::from(r#"<https://example.org/3>; rel="next""#),
            String::from(r#"<https://example.org/4>; rel="next""#),
        ]);

        assert_eq!(actual["next"].uri(), "https://example.org/4");
    }

    #[test]
    fn no_values() {
        assert!(parse_values(Vec::<String>::new()).is_empty());
    }
}
