// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::param::{Param, Value};
use crate::parser::{Rfc8288Parser, Rule};
use crate::uri::UriRef;
use pest::iterators::Pair;
use pest::Parser;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// A single web link: its target, its relation type and any other params.
///
/// The relation type is an opaque string; `rel="next"` and
/// `rel="start http://example.net/relation/other"` are both kept as written.
/// Every other param lands in `extra`, keyed by its lower-cased name.
///
/// ```
/// use httplink::link::Link;
///
/// let link = Link::parse(r#"<https://example.com/?page=2>; rel="next"; title="foo""#)
///     .expect("Expect a valid link");
///
/// assert_eq!(link.uri(), "https://example.com/?page=2");
/// assert_eq!(link.rel(), "next");
/// assert_eq!(link.extra().get("title").map(String::as_str), Some("foo"));
/// assert_eq!(link.to_string(), "https://example.com/?page=2");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    uri: UriRef,
    rel: String,
    extra: HashMap<String, String>,
}

impl Link {
    /// Parses a single link entry, such as `<https://example.org>; rel=next`.
    ///
    /// The input must not hold more than one entry; see `crate::parse` for
    /// whole header values.
    pub fn parse(input: &str) -> Result<Link> {
        if input.trim().is_empty() {
            return Err(ParserError::EmptyEntry(input.to_string()).into());
        }

        match Rfc8288Parser::parse(Rule::link, input)?.next() {
            Some(pair) => Link::from_rule(pair),
            None => Err(ParserError::EmptyEntry(input.to_string()).into()),
        }
    }

    pub fn from_rule(pair: Pair<Rule>) -> Result<Link> {
        ensure!(
            pair.as_rule() == Rule::link,
            ParserError::InvalidRule(Rule::link, pair.as_rule())
        );

        let mut target = String::new();
        let mut rel = String::new();
        let mut extra = HashMap::new();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::target => {
                    target.push_str(inner_pair.as_str());
                }

                Rule::param => {
                    let (name, value) = Param::from_rule(inner_pair)?.into_parts();
                    let value = value.unwrap_or_default();

                    if name == "rel" {
                        rel = value;
                    } else {
                        extra.insert(name, value);
                    }
                }

                Rule::lead | Rule::EOI => (),

                _ => unreachable!(),
            }
        }

        let link = Link {
            uri: target.into(),
            rel,
            extra,
        };

        Ok(link)
    }

    pub fn uri(&self) -> &UriRef {
        &self.uri
    }

    /// The `rel` param, or an empty string when the link has none.
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// The individual relation types of a space-separated `rel`.
    ///
    /// ```
    /// use httplink::link::Link;
    ///
    /// let link = Link::parse(r#"<http://example.org/>; rel="start http://example.net/relation/other""#)
    ///     .expect("Expect a valid link");
    ///
    /// let rels: Vec<&str> = link.rels().collect();
    ///
    /// assert_eq!(rels, vec!["start", "http://example.net/relation/other"]);
    /// ```
    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.rel.split_whitespace()
    }

    pub fn extra(&self) -> &HashMap<String, String> {
        &self.extra
    }

    /// Looks up a param other than `rel` as a typed value.
    ///
    /// An RFC8187 `name*` param takes precedence over a plain `name` param
    /// when it decodes.
    pub fn param(&self, name: &str) -> Option<Value> {
        let name = name.to_lowercase();
        let extended = self
            .extra
            .get(&format!("{}*", name))
            .and_then(|value| Value::from_extended(value));

        extended.or_else(|| self.extra.get(&name).map(|value| Value::from(value.as_str())))
    }
}

impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.uri)
    }
}
