#![warn(clippy::uninlined_format_args)]

//! Parser for the plain-text trip snapshot format.
//!
//! ```text
//! trip 沖縄旅行
//! member taro 太郎
//! member hana 花子
//! rate USD 0.0067
//! expense 3000 by taro for taro, hana
//! expense 20 USD by hana for taro hana
//! expense 1200 by ? for taro hana
//! settled expense 500 by hana for taro
//! ```
//!
//! Lines starting with `#` are comments.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while_m_n, take_while1},
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    multi::separated_list1,
};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberLine<'a> {
    pub line: usize,
    pub id: &'a str,
    pub display_name: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateLine<'a> {
    pub line: usize,
    pub currency: &'a str,
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine<'a> {
    pub line: usize,
    pub amount: Decimal,
    /// `None` means yen.
    pub currency: Option<&'a str>,
    /// `None` when written as `?`.
    pub payer: Option<&'a str>,
    pub splits: Vec<&'a str>,
    pub settled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub trip: &'a str,
    pub members: Vec<MemberLine<'a>>,
    pub rates: Vec<RateLine<'a>>,
    pub expenses: Vec<ExpenseLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Trip is declared again at line {line}")]
    DuplicateTrip { line: usize },
    #[error("Snapshot has no `trip` declaration")]
    MissingTrip,
}

enum Statement<'a> {
    Trip(&'a str),
    Member(MemberLine<'a>),
    Rate(RateLine<'a>),
    Expense(ExpenseLine<'a>),
}

fn is_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\u{3000}'
}

fn sp(input: &str) -> IResult<&str, &str> {
    take_while(is_space).parse(input)
}

fn sp1(input: &str) -> IResult<&str, &str> {
    take_while1(is_space).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-' || c == '.' || c == '@')
        .parse(input)
}

fn text(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != '\n' && c != '\r')
        .map(str::trim)
        .parse(input)
}

fn decimal(input: &str) -> IResult<&str, Decimal> {
    map_res(
        recognize((digit1, opt((char('.'), digit1)))),
        Decimal::from_str,
    )
    .parse(input)
}

fn currency(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 3, |c: char| c.is_ascii_alphabetic()).parse(input)
}

// trip {label}
fn trip(input: &str) -> IResult<&str, &str> {
    (tag_no_case("trip"), sp1, text)
        .map(|(_, _, label)| label)
        .parse(input)
}

// member {id} {display name}
fn member(input: &str) -> IResult<&str, MemberLine<'_>> {
    (tag_no_case("member"), sp1, identifier, sp1, text)
        .map(|(_, _, id, _, display_name)| MemberLine {
            line: 0,
            id,
            display_name,
        })
        .parse(input)
}

// rate {currency} {units per yen}
fn rate(input: &str) -> IResult<&str, RateLine<'_>> {
    (tag_no_case("rate"), sp1, currency, sp1, decimal)
        .map(|(_, _, currency, _, rate)| RateLine {
            line: 0,
            currency,
            rate,
        })
        .parse(input)
}

fn payer(input: &str) -> IResult<&str, Option<&str>> {
    alt((char('?').map(|_| None), identifier.map(Some))).parse(input)
}

fn split_separator(input: &str) -> IResult<&str, &str> {
    alt((recognize((sp, alt((char(','), char('、'))), sp)), sp1)).parse(input)
}

// [settled] expense {amount} [{currency}] by {payer|?} for {member}...
fn expense(input: &str) -> IResult<&str, ExpenseLine<'_>> {
    (
        opt((tag_no_case("settled"), sp1)),
        tag_no_case("expense"),
        sp1,
        opt(char('¥')),
        decimal,
        opt((sp1, currency).map(|(_, code)| code)),
        sp1,
        tag_no_case("by"),
        sp1,
        payer,
        sp1,
        tag_no_case("for"),
        opt((sp1, separated_list1(split_separator, identifier)).map(|(_, ids)| ids)),
    )
        .map(
            |(settled, _, _, _, amount, currency, _, _, _, payer, _, _, splits)| ExpenseLine {
                line: 0,
                amount,
                currency,
                payer,
                splits: splits.unwrap_or_default(),
                settled: settled.is_some(),
            },
        )
        .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        trip.map(Statement::Trip),
        member.map(Statement::Member),
        rate.map(Statement::Rate),
        expense.map(Statement::Expense),
    ))
    .parse(input)
}

pub fn parse_snapshot(input: &str) -> Result<Snapshot<'_>, ParseError> {
    let mut trip_label = None;
    let mut members = Vec::new();
    let mut rates = Vec::new();
    let mut expenses = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line = idx + 1;
        let content = raw_line.trim_matches(is_space);
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let (rest, parsed) = statement(content).map_err(|err| ParseError::SyntaxError {
            line,
            detail: err.to_string(),
        })?;
        let rest = rest.trim();
        if !rest.is_empty() {
            return Err(ParseError::SyntaxError {
                line,
                detail: format!("unexpected input: {rest}"),
            });
        }

        match parsed {
            Statement::Trip(label) => {
                if trip_label.replace(label).is_some() {
                    return Err(ParseError::DuplicateTrip { line });
                }
            }
            Statement::Member(member) => members.push(MemberLine { line, ..member }),
            Statement::Rate(rate) => rates.push(RateLine { line, ..rate }),
            Statement::Expense(expense) => expenses.push(ExpenseLine { line, ..expense }),
        }
    }

    Ok(Snapshot {
        trip: trip_label.ok_or(ParseError::MissingTrip)?,
        members,
        rates,
        expenses,
    })
}
