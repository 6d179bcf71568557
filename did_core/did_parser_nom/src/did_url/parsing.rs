use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, satisfy},
    combinator::{opt, recognize},
    multi::many0,
    sequence::{preceded, tuple},
    IResult,
};

use crate::{
    did::{parse_did_ranges, pct_encoded},
    DidRange,
};

type UrlPart<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

pub(super) struct DidUrlRanges {
    pub did: DidRange,
    pub method: DidRange,
    pub id: DidRange,
    pub path: Option<DidRange>,
    pub query: Option<DidRange>,
    pub fragment: Option<DidRange>,
}

// unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~".contains(c)
}

// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
fn is_sub_delims(c: char) -> bool {
    "!$&'()*+,;=".contains(c)
}

// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
fn pchar(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(satisfy(|c| is_unreserved(c) || is_sub_delims(c) || ":@".contains(c))),
        pct_encoded,
    ))(input)
}

// path-abempty = *( "/" segment )
// segment = *pchar
fn path_abempty(input: &str) -> IResult<&str, &str> {
    recognize(many0(preceded(char('/'), many0(pchar))))(input)
}

// query = *( pchar / "/" / "?" )
// fragment = *( pchar / "/" / "?" )
fn query_or_fragment(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((pchar, tag("/"), tag("?")))))(input)
}

// did-url = did path-abempty [ "?" query ] [ "#" fragment ]
pub(super) fn parse_did_url_ranges(input: &str) -> IResult<&str, DidUrlRanges> {
    let (remaining, ((method, id), (path, query, fragment))) = tuple((
        parse_did_ranges,
        tuple((
            path_abempty,
            opt(preceded(char('?'), query_or_fragment)),
            opt(preceded(char('#'), query_or_fragment)),
        )),
    ))(input)?;

    Ok((remaining, to_ranges(method, id, (path, query, fragment))))
}

fn to_ranges(method: DidRange, id: DidRange, (path, query, fragment): UrlPart<'_>) -> DidUrlRanges {
    let did_end = id.end;

    let path_range = (!path.is_empty()).then(|| did_end..did_end + path.len());
    let mut position = did_end + path.len();

    let query_range = query.map(|query| {
        let start = position + 1;
        position = start + query.len();
        start..position
    });

    let fragment_range = fragment.map(|fragment| {
        let start = position + 1;
        start..start + fragment.len()
    });

    DidUrlRanges {
        did: 0..did_end,
        method,
        id,
        path: path_range,
        query: query_range,
        fragment: fragment_range,
    }
}
