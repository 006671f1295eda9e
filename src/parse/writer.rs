use std::fmt::Write;

use crate::Rule;

/// Canonical text form: one clause per line, every value quoted.
pub(crate) fn write_rules(rules: &[Rule]) -> String {
    let mut out = String::new();
    for rule in rules {
        let _ = write!(out, "{} {}", rule.rule_type(), rule.operator());
        if !rule.values().is_empty() {
            out.push_str(" [");
            for (i, value) in rule.values().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                push_quoted(&mut out, value);
            }
            out.push(']');
        }
        out.push('\n');
    }
    out
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_escapes_specials() {
        let mut out = String::new();
        push_quoted(&mut out, "say \"hi\"\tnow\\");
        assert_eq!(out, r#""say \"hi\"\tnow\\""#);
    }

    #[test]
    fn empty_rule_list_writes_nothing() {
        assert_eq!(write_rules(&[]), "");
    }
}
