// https://www.w3.org/TR/did-core/#did-syntax
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, satisfy},
    combinator::recognize,
    multi::{many0, many1},
    sequence::{terminated, tuple},
    IResult,
};

use crate::DidRange;

/// Byte ranges of the method name and the method-specific id within the parsed input.
pub(crate) type DidRanges = (DidRange, DidRange);

// method-char = %x61-7A / DIGIT
fn is_method_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

// pct-encoded = "%" HEXDIG HEXDIG
pub(crate) fn pct_encoded(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('%'),
        satisfy(|c| c.is_ascii_hexdigit()),
        satisfy(|c| c.is_ascii_hexdigit()),
    )))(input)
}

// idchar = ALPHA / DIGIT / "." / "-" / "_" / pct-encoded
fn idchar(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(satisfy(|c| c.is_ascii_alphanumeric() || ".-_".contains(c))),
        pct_encoded,
    ))(input)
}

// method-name = 1*method-char
fn method_name(input: &str) -> IResult<&str, &str> {
    take_while1(is_method_char)(input)
}

// method-specific-id = *( *idchar ":" ) 1*idchar
fn method_specific_id(input: &str) -> IResult<&str, &str> {
    log::trace!("did::parsing::method_specific_id >> input: {:?}", input);
    let ret = recognize(tuple((
        many0(terminated(many0(idchar), char(':'))),
        many1(idchar),
    )))(input);
    log::trace!("did::parsing::method_specific_id >> ret: {:?}", ret);
    ret
}

// did = "did:" method-name ":" method-specific-id
pub(crate) fn parse_did_ranges(input: &str) -> IResult<&str, DidRanges> {
    let (remaining, (scheme, method, _, id)) =
        tuple((tag("did:"), method_name, char(':'), method_specific_id))(input)?;

    let method_start = scheme.len();
    let method_end = method_start + method.len();
    let id_start = method_end + 1;
    let id_end = id_start + id.len();

    Ok((remaining, (method_start..method_end, id_start..id_end)))
}
