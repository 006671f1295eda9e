use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, opt, repeat, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{Operator, RuleType};

use super::parser::{ParsedClause, ParsedRuleSet};

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Tags -------------------------------------------------------------------

fn tag<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_lowercase() || c == '_').parse_next(input)
}

fn rule_type(input: &mut &str) -> ModalResult<RuleType> {
    ws.parse_next(input)?;
    tag.try_map(str::parse::<RuleType>)
        .context(StrContext::Expected(StrContextValue::Description(
            "rule type",
        )))
        .parse_next(input)
}

fn operator(input: &mut &str) -> ModalResult<Operator> {
    ws.parse_next(input)?;
    tag.try_map(str::parse::<Operator>)
        .context(StrContext::Expected(StrContextValue::Description(
            "operator",
        )))
        .parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        match any.parse_next(input)? {
            '"' => return Ok(s),
            '\\' => match any.parse_next(input)? {
                '"' => s.push('"'),
                '\\' => s.push('\\'),
                'n' => s.push('\n'),
                't' => s.push('\t'),
                other => {
                    s.push('\\');
                    s.push(other);
                }
            },
            c => s.push(c),
        }
    }
}

/// Unquoted numeric token such as `100`, `19.99` or `-5`. Kept as text; the
/// engine stores every value as a string.
fn bare_number<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit() || c == '.'),
    )
        .take()
        .parse_next(input)
}

fn value(input: &mut &str) -> ModalResult<String> {
    ws.parse_next(input)?;
    alt((string_literal, bare_number.map(str::to_owned)))
        .context(StrContext::Expected(StrContextValue::Description("value")))
        .parse_next(input)
}

fn value_list(input: &mut &str) -> ModalResult<Vec<String>> {
    ws.parse_next(input)?;
    '['.parse_next(input)?;
    let values: Vec<String> = separated(0.., value, (ws, ',')).parse_next(input)?;
    // trailing comma
    opt((ws, ',')).parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(']')
        .context(StrContext::Expected(StrContextValue::CharLiteral(']')))
        .parse_next(input)?;
    Ok(values)
}

// -- Clauses ----------------------------------------------------------------

fn clause(input: &mut &str) -> ModalResult<ParsedClause> {
    let rule_type = rule_type.parse_next(input)?;
    let operator = cut_err(operator).parse_next(input)?;
    let values = opt(value_list).parse_next(input)?.unwrap_or_default();
    Ok(ParsedClause {
        rule_type,
        operator,
        values,
    })
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_rule_set(input: &mut &str) -> ModalResult<ParsedRuleSet> {
    let clauses: Vec<ParsedClause> = repeat(0.., clause).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(ParsedRuleSet { clauses })
}
