// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Splits a raw `Link` header value into its comma-separated entries.
//!
//! A comma only separates entries at the top level: commas inside a `<...>`
//! target or inside a quoted param value belong to the entry.

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Outside,
    Target,
    Quoted,
}

#[derive(Debug, PartialEq)]
enum Scan {
    /// Entry ends before the byte offset, the rest starts after it.
    Split(usize),
    /// No separator before the end of the input.
    End,
    /// The input ended inside the quoted value opened at this offset.
    OpenQuote(usize),
}

/// Iterates over the trimmed, non-empty entries of a header value.
///
/// A `"` opens a quoted value only right after `=`. Quotes inside a target
/// and `<` inside a quoted value are literal. There is no escaping mechanism.
///
/// An unterminated `<` or quote only spoils its own entry: a new `<` inside
/// a target splits at the last comma seen in that target, and a quote still
/// open at the end of the input is taken as a literal character.
///
/// ```
/// use httplink::scanner::entries;
///
/// let input = r#"<https://example.org/a,b>; rel="next", </x>; title="x, y""#;
/// let actual: Vec<&str> = entries(input).collect();
///
/// assert_eq!(
///     actual,
///     vec![r#"<https://example.org/a,b>; rel="next""#, r#"</x>; title="x, y""#]
/// );
/// ```
pub fn entries(input: &str) -> Entries<'_> {
    Entries { rest: input }
}

#[derive(Debug, Clone)]
pub struct Entries<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let (entry, rest) = split_entry(self.rest);
            self.rest = rest;

            let entry = entry.trim();
            if !entry.is_empty() {
                return Some(entry);
            }
        }

        None
    }
}

/// Splits the first entry off `input`, returning it and the remainder.
fn split_entry(input: &str) -> (&str, &str) {
    let mut literal_quotes = Vec::new();

    loop {
        match scan(input, &literal_quotes) {
            Scan::Split(idx) => return (&input[..idx], &input[idx + 1..]),
            Scan::End => return (input, ""),
            Scan::OpenQuote(idx) => literal_quotes.push(idx),
        }
    }
}

/// Scans for the next top-level comma. Quotes at the `literal_quotes` offsets
/// never open a quoted value.
fn scan(input: &str, literal_quotes: &[usize]) -> Scan {
    let mut state = State::Outside;
    let mut previous = None;
    let mut quote = 0;
    let mut target_comma = None;

    for (idx, c) in input.char_indices() {
        match (state, c) {
            (State::Outside, ',') => return Scan::Split(idx),
            (State::Outside, '<') => {
                state = State::Target;
                target_comma = None;
            }
            (State::Outside, '"') if previous == Some('=') && !literal_quotes.contains(&idx) => {
                state = State::Quoted;
                quote = idx;
            }
            (State::Target, ',') => target_comma = Some(idx),
            (State::Target, '<') => {
                if let Some(comma) = target_comma {
                    return Scan::Split(comma);
                }
            }
            (State::Target, '>') | (State::Quoted, '"') => state = State::Outside,
            _ => (),
        }

        if !c.is_whitespace() {
            previous = Some(c);
        }
    }

    match state {
        State::Quoted => Scan::OpenQuote(quote),
        _ => Scan::End,
    }
}
