// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Extracts `Link` headers from the `http` crate's types.
//!
//! Every function returns `None` when there is nothing to parse, either
//! because no request or response was given or because the `Link` header is
//! absent. A present header that yields no links gives `Some` empty group.

use crate::group::Group;
use crate::parser::parse_values;
use ::http::header::LINK;
use ::http::{HeaderMap, Request, Response};

/// Parses every `Link` value in `headers` as a single comma-joined value.
///
/// ```
/// use http::header::{HeaderMap, HeaderValue, LINK};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(LINK, HeaderValue::from_static(r#"<https://example.com/?page=2>; rel="next""#));
///
/// let group = httplink::http::parse_header(&headers).expect("Expect a Link header");
///
/// assert_eq!(group["next"].uri(), "https://example.com/?page=2");
/// assert!(httplink::http::parse_header(&HeaderMap::new()).is_none());
/// ```
pub fn parse_header(headers: &HeaderMap) -> Option<Group> {
    if !headers.contains_key(LINK) {
        debug!("No Link header present");
        return None;
    }

    let values = headers
        .get_all(LINK)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()));

    Some(parse_values(values))
}

pub fn parse_request<B>(req: Option<&Request<B>>) -> Option<Group> {
    req.and_then(|req| parse_header(req.headers()))
}

pub fn parse_response<B>(resp: Option<&Response<B>>) -> Option<Group> {
    resp.and_then(|resp| parse_header(resp.headers()))
}
