//! Low-level nom parser functions for textual style values.
//!
//! This module turns declarations such as `"12pt"`, `"1.5em"`, `"var(--gap, 4pt)"` or
//! `"0 0 100 50"` into [`StyleValue`]s for a given [`StyleKey`].

use crate::font::{FontStyle, FontWeight};
use crate::position::PositionMode;
use crate::property::{StyleKey, StyleValue, VarRef};
use crate::text::TextAlign;
use folio_types::{AspectRatio, Color, Rect};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while1};
use nom::character::complete::{char, digit1, multispace0, multispace1, one_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Unknown style property: '{0}'")]
    UnknownProperty(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

type ParseErr<'a> = nom::error::Error<&'a str>;

// --- Helper Parsers ---

fn ws<'a, P>(
    inner: P,
) -> impl Parser<&'a str, Output = <P as Parser<&'a str>>::Output, Error = ParseErr<'a>>
where
    P: Parser<&'a str, Error = ParseErr<'a>>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Length Parsers ---

#[derive(Debug, Clone, Copy)]
enum Unit {
    Points(f32),
    Em,
}

fn parse_unit(input: &str) -> IResult<&str, Unit> {
    alt((
        value(Unit::Em, tag_no_case("em")),
        value(Unit::Points(1.0), tag_no_case("pt")),
        value(Unit::Points(1.0), tag_no_case("px")), // Treat px as pt
        value(Unit::Points(72.0), tag_no_case("in")),
        value(Unit::Points(28.35), tag_no_case("cm")),
        value(Unit::Points(2.835), tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length with an optional unit (e.g. "12pt", "1in", "1.5em").
pub fn parse_length(input: &str) -> IResult<&str, StyleValue> {
    map((parse_number, opt(parse_unit)), |(v, unit)| match unit {
        Some(Unit::Em) => StyleValue::Em(v),
        Some(Unit::Points(scale)) => StyleValue::Length(v * scale),
        None => StyleValue::Length(v),
    })
    .parse(input)
}

/// Parses a hex color (e.g. "#FF0000" or "#F00").
pub fn parse_color(input: &str) -> IResult<&str, StyleValue> {
    map(
        map_res(
            recognize((char('#'), take_while1(|c: char| c.is_ascii_hexdigit()))),
            Color::from_hex,
        ),
        StyleValue::Color,
    )
    .parse(input)
}

/// Parses four numbers separated by whitespace and/or commas: `x y width height`.
pub fn parse_rect(input: &str) -> IResult<&str, StyleValue> {
    map_res(
        separated_list1(
            alt((recognize(ws(char(','))), multispace1)),
            parse_number,
        ),
        |parts: Vec<f32>| match parts.as_slice() {
            [x, y, w, h] => Ok(StyleValue::Rect(Rect::new(*x, *y, *w, *h))),
            _ => Err("a rectangle needs exactly four values"),
        },
    )
    .parse(input)
}

/// Parses `var(--name)` or `var(--name, fallback)`.
pub fn parse_var(input: &str) -> IResult<&str, StyleValue> {
    map(
        delimited(
            (tag_no_case("var("), multispace0, tag("--")),
            (
                take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
                opt(preceded(ws(char(',')), parse_fallback)),
            ),
            (multispace0, char(')')),
        ),
        |(name, fallback): (&str, Option<StyleValue>)| StyleValue::Var(VarRef::new(name, fallback)),
    )
    .parse(input)
}

fn parse_fallback(input: &str) -> IResult<&str, StyleValue> {
    alt((parse_var, parse_color, parse_length)).parse(input)
}

/// Helper to run a parser over the whole input and convert its result.
fn run_parser<'a, T, P>(key: StyleKey, parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = ParseErr<'a>>,
{
    all_consuming(ws(parser))
        .parse(input)
        .map(|(_, v)| v)
        .map_err(|_| invalid(key, input))
}

fn invalid(key: StyleKey, input: &str) -> StyleParseError {
    StyleParseError::InvalidValue {
        property: key.name().to_string(),
        value: input.to_string(),
    }
}

// --- Keyword Parsers ---

pub fn parse_position_mode(s: &str) -> Result<PositionMode, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "static" => Ok(PositionMode::Static),
        "relative" => Ok(PositionMode::Relative),
        "absolute" => Ok(PositionMode::Absolute),
        "fixed" => Ok(PositionMode::Fixed),
        _ => Err(invalid(StyleKey::PositionMode, s)),
    }
}

pub fn parse_font_style(s: &str) -> Result<FontStyle, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "normal" => Ok(FontStyle::Normal),
        "italic" => Ok(FontStyle::Italic),
        "oblique" => Ok(FontStyle::Oblique),
        _ => Err(invalid(StyleKey::FontStyle, s)),
    }
}

pub fn parse_text_align(s: &str) -> Result<TextAlign, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "left" | "start" => Ok(TextAlign::Start),
        "right" | "end" => Ok(TextAlign::End),
        "center" => Ok(TextAlign::Center),
        "justify" => Ok(TextAlign::Justify),
        _ => Err(invalid(StyleKey::TextAlign, s)),
    }
}

fn parse_bool(key: StyleKey, s: &str) -> Result<bool, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" => Ok(true),
        "false" | "no" => Ok(false),
        _ => Err(invalid(key, s)),
    }
}

/// Parses the value of a `--name` variable declaration.
///
/// Lengths, colors and nested `var()` references are recognised; anything else is kept
/// as text.
pub fn parse_variable_value(input: &str) -> Result<StyleValue, StyleParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StyleParseError::InvalidValue {
            property: "variable".to_string(),
            value: input.to_string(),
        });
    }
    Ok(all_consuming(parse_fallback)
        .parse(trimmed)
        .map(|(_, v)| v)
        .unwrap_or_else(|_| StyleValue::Text(trimmed.into())))
}

/// Parses a textual value for `key`.
///
/// Every property accepts a `var()` reference. An aspect ratio that cannot be understood
/// is kept as text rather than rejected; it resolves to no scaling at layout time.
pub fn parse_property(key: StyleKey, input: &str) -> Result<StyleValue, StyleParseError> {
    if let Ok(v) = run_parser(key, parse_var, input) {
        return Ok(v);
    }
    let text = input.trim();
    match key {
        StyleKey::FontSize
        | StyleKey::LineHeight
        | StyleKey::X
        | StyleKey::Y
        | StyleKey::Width
        | StyleKey::Height => run_parser(key, parse_length, input),
        StyleKey::Color | StyleKey::BackgroundColor => run_parser(key, parse_color, input),
        StyleKey::ViewPort => run_parser(key, parse_rect, input),
        StyleKey::FontFamily => {
            let family = text.trim_matches(|c| c == '"' || c == '\'');
            if family.is_empty() {
                Err(invalid(key, input))
            } else {
                Ok(StyleValue::Text(family.into()))
            }
        }
        StyleKey::FontWeight => FontWeight::parse(text)
            .map(StyleValue::Weight)
            .ok_or_else(|| invalid(key, input)),
        StyleKey::FontStyle => parse_font_style(text).map(StyleValue::FontStyle),
        StyleKey::TextAlign => parse_text_align(text).map(StyleValue::Align),
        StyleKey::PositionMode => parse_position_mode(text).map(StyleValue::Position),
        StyleKey::DrawTextFromTop => parse_bool(key, text).map(StyleValue::Bool),
        StyleKey::AspectRatio => Ok(AspectRatio::parse(text)
            .map(StyleValue::Aspect)
            .unwrap_or_else(|| StyleValue::Text(text.into()))),
    }
}
