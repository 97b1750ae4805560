// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::parser::Rule;
use percent_encoding::{percent_decode, utf8_percent_encode, DEFAULT_ENCODE_SET};
use pest::iterators::Pair;
use std::fmt::{self, Display};

/// A link param pair as written in the header.
///
/// The name is lower-cased; the value has its surrounding quotes stripped
/// and is otherwise untouched. A param with no `=value` has no value.
///
/// ## Examples
///
/// ```
/// use httplink::param::Param;
///
/// let param = Param::new("rel", Some("next".into()));
///
/// assert_eq!(param.name(), "rel");
/// assert_eq!(param.value(), Some("next"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    value: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Param {
        Param {
            name: name.into(),
            value,
        }
    }

    pub fn from_rule(pair: Pair<Rule>) -> Result<Param> {
        ensure!(
            pair.as_rule() == Rule::param,
            ParserError::InvalidRule(Rule::param, pair.as_rule())
        );

        let mut name = String::new();
        let mut value = None;

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::name => name.push_str(&inner_pair.as_str().to_lowercase()),

                Rule::value => value = Some(inner_pair.as_str().to_string()),

                Rule::quoted_value => {
                    let text = inner_pair
                        .into_inner()
                        .next()
                        .map(|text| text.as_str())
                        .unwrap_or_default();

                    value = Some(text.to_string());
                }

                _ => unreachable!(),
            }
        }

        Ok(Param { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_ref().map(String::as_str)
    }

    /// Consumes the param and returns its name and value.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.name, self.value)
    }
}

/// The character encoding of a compound value.
///
/// RFC8187 Section 3.2.1 names it as "charset" and defines it as:
///
/// ```abnf
/// charset = "UTF-8" / mime-charset
/// ```
///
/// It also says:
///
/// > Producers MUST use the "UTF-8" ([RFC3629]) character encoding.
/// > Extension character encodings (mime-charset) are reserved for future
/// > use.
#[derive(Clone, Debug, PartialEq)]
pub enum Encoding {
    Utf8,
    Extension(String),
}

impl From<&str> for Encoding {
    fn from(s: &str) -> Encoding {
        let sl = s.to_lowercase();

        match &sl[..] {
            "utf-8" => Encoding::Utf8,
            _ => Encoding::Extension(sl),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(formatter, "UTF-8"),
            Encoding::Extension(ext) => write!(formatter, "{}", ext),
        }
    }
}

/// A typed param value, either a simple text or a compound of text,
/// character encoding and optionally a language tag.
///
/// RFC8187 names a compound value "extended value". When the encoding of a
/// compound value is not UTF-8 the text is kept percent-encoded.
///
/// ```
/// use httplink::param::{Encoding, Value};
///
/// let value = Value::from_extended("UTF-8'de'n%c3%a4chstes%20Kapitel");
///
/// assert_eq!(
///     value,
///     Some(Value::Compound {
///         encoding: Encoding::Utf8,
///         language: Some("de".into()),
///         value: "nächstes Kapitel".into(),
///     })
/// );
/// ```
///
/// ```
/// use httplink::param::{Encoding, Value};
///
/// let value = Value::Compound {
///     encoding: Encoding::Utf8,
///     language: Some("en".into()),
///     value: "GBP (£)".into(),
/// };
///
/// assert_eq!(value.to_string(), "UTF-8'en'GBP%20(%C2%A3)".to_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Simple(String),
    Compound {
        encoding: Encoding,
        language: Option<String>,
        value: String,
    },
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Simple(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Simple(s)
    }
}

impl Value {
    /// Decodes an RFC8187 `charset'language'value-chars` string.
    ///
    /// Returns `None` when the charset or either separator is missing, or
    /// when a UTF-8 value does not decode.
    pub fn from_extended(s: &str) -> Option<Value> {
        let mut parts = s.splitn(3, '\'');
        let charset = parts.next().filter(|charset| !charset.is_empty())?;
        let language = parts.next()?;
        let encoded = parts.next()?;

        let encoding = Encoding::from(charset);
        let value = match encoding {
            Encoding::Utf8 => percent_decode(encoded.as_bytes())
                .decode_utf8()
                .ok()?
                .into_owned(),
            Encoding::Extension(_) => encoded.to_string(),
        };

        let language = if language.is_empty() {
            None
        } else {
            Some(language.to_string())
        };

        Some(Value::Compound {
            encoding,
            language,
            value,
        })
    }

    /// Returns the text value from either simple or compound values.
    pub fn text(&self) -> &str {
        match self {
            Value::Simple(value) => value.as_str(),
            Value::Compound { value, .. } => value.as_str(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Simple(val) => write!(formatter, "{}", val),
            Value::Compound {
                encoding,
                language,
                value,
            } => {
                let val = match encoding {
                    Encoding::Utf8 => utf8_percent_encode(value, DEFAULT_ENCODE_SET).to_string(),
                    _ => value.to_string(),
                };

                write!(
                    formatter,
                    "{}'{}'{}",
                    encoding,
                    language.as_ref().map(String::as_str).unwrap_or(""),
                    val
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Rfc8288Parser;
    use pest::Parser;

    fn first_param(input: &str) -> Param {
        let link = Rfc8288Parser::parse(Rule::link, input)
            .expect("unsuccessful parse")
            .next()
            .unwrap();

        let pair = link
            .into_inner()
            .find(|pair| pair.as_rule() == Rule::param)
            .expect("Expect a param");

        Param::from_rule(pair).expect("Expect a valid param")
    }

    #[test]
    fn token_value() {
        assert_eq!(
            first_param("<https://example.org>; rel=next"),
            Param::new("rel", Some("next".into()))
        );
    }

    #[test]
    fn quoted_value_keeps_inner_whitespace() {
        assert_eq!(
            first_param(r#"<https://example.org>; title=" previous chapter ""#),
            Param::new("title", Some(" previous chapter ".into()))
        );
    }

    #[test]
    fn empty_quoted_value() {
        assert_eq!(
            first_param(r#"<https://example.org>; title="""#),
            Param::new("title", Some("".into()))
        );
    }

    #[test]
    fn name_is_lower_cased() {
        assert_eq!(
            first_param(r#"<https://example.org>; TiTle="Foo""#),
            Param::new("title", Some("Foo".into()))
        );
    }

    #[test]
    fn no_value() {
        let param = first_param("<https://example.org>; foo");

        assert_eq!(param, Param::new("foo", None));
        assert_eq!(param.value(), None);
    }

    #[test]
    fn star_param() {
        let param = first_param("</TheBook/chapter2>; title*=UTF-8'de'letztes%20Kapitel");

        assert_eq!(param.name(), "title*");
        assert_eq!(param.value(), Some("UTF-8'de'letztes%20Kapitel"));
    }

    #[test]
    fn wrong_rule_type() {
        let pair = Rfc8288Parser::parse(Rule::link, "<https://example.org>")
            .expect("unsuccessful parse")
            .next()
            .unwrap();

        assert!(Param::from_rule(pair).is_err());
    }

    #[test]
    fn extended_value_without_language() {
        assert_eq!(
            Value::from_extended("utf-8''%E2%82%AC%20rates"),
            Some(Value::Compound {
                encoding: Encoding::Utf8,
                language: None,
                value: "€ rates".into(),
            })
        );
    }

    #[test]
    fn extended_value_extension_encoding_is_kept_encoded() {
        let value = Value::from_extended("GIB''%C0%FF%EE").expect("Expect a compound value");

        assert_eq!(
            value,
            Value::Compound {
                encoding: Encoding::Extension("gib".into()),
                language: None,
                value: "%C0%FF%EE".into(),
            }
        );
        assert_eq!(value.to_string(), "gib''%C0%FF%EE");
    }

    #[test]
    fn text_ignores_encoding() {
        let compound = Value::from_extended("UTF-8'de'letztes%20Kapitel").expect("Expect a value");

        assert_eq!(compound.text(), "letztes Kapitel");
        assert_eq!(Value::from("letztes Kapitel").text(), "letztes Kapitel");
    }

    #[test]
    fn extended_value_malformed() {
        assert_eq!(Value::from_extended("letztes%20Kapitel"), None);
        assert_eq!(Value::from_extended("''letztes"), None);
        assert_eq!(Value::from_extended("UTF-8'de'%C0%FF"), None);
    }
}
