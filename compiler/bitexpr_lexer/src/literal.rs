//! Integer literal decoding.
//!
//! `0x`/`0X` selects hexadecimal, `0b`/`0B` binary, a leading `0` followed by
//! more digits octal, anything else decimal. Values are unsigned 64-bit
//! magnitudes; a literal that does not fit is rejected.

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while, take_while1};
use nom::character::complete::{char, satisfy};
use nom::combinator::{all_consuming, map_res, recognize, value};
use nom::sequence::{pair, preceded};
use nom::IResult;

fn digits_in(radix: u32) -> impl Fn(&str) -> IResult<&str, &str> {
    move |input| take_while1(move |c: char| c.is_digit(radix))(input)
}

fn hex_literal(input: &str) -> IResult<&str, u64> {
    map_res(preceded(tag_no_case("0x"), digits_in(16)), |d| {
        u64::from_str_radix(d, 16)
    })(input)
}

fn binary_literal(input: &str) -> IResult<&str, u64> {
    map_res(preceded(tag_no_case("0b"), digits_in(2)), |d| {
        u64::from_str_radix(d, 2)
    })(input)
}

fn octal_literal(input: &str) -> IResult<&str, u64> {
    map_res(preceded(char('0'), digits_in(8)), |d| u64::from_str_radix(d, 8))(input)
}

fn decimal_literal(input: &str) -> IResult<&str, u64> {
    alt((
        map_res(
            recognize(pair(
                satisfy(|c| c.is_ascii_digit() && c != '0'),
                take_while(|c: char| c.is_ascii_digit()),
            )),
            |d: &str| d.parse::<u64>(),
        ),
        value(0, char('0')),
    ))(input)
}

/// Decodes one complete literal lexeme, or `None` if it is malformed or too
/// large for 64 bits.
pub fn parse_literal(lexeme: &str) -> Option<u64> {
    all_consuming(alt((
        hex_literal,
        binary_literal,
        octal_literal,
        decimal_literal,
    )))(lexeme)
    .ok()
    .map(|(_, value)| value)
}
