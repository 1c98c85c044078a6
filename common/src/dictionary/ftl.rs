//! Fluent Translation List (FTL) flattening.
//!
//! The resource is parsed once by the Fluent runtime and its message
//! entries are walked directly. Messages become `id` entries and attributes
//! become `id.attr` entries. Text elements are kept exactly as the parser
//! resolved them, so indented lines starting with `#` and blank lines inside
//! a multi-line pattern stay part of the value. Placeables are rendered back
//! in Fluent notation (`{ $count }`) so placeholder parity can still see
//! them. Terms (`-brand = ...`) are private to the resource and are skipped.

use std::collections::BTreeMap;

use fluent_syntax::ast::{
    CallArguments, Entry, Expression, InlineExpression, Pattern, PatternElement, VariantKey,
};
use fluent_templates::fluent_bundle::FluentResource;

use super::DictionaryError;

pub(super) fn parse(source: &str) -> Result<BTreeMap<String, String>, DictionaryError> {
    let resource = FluentResource::try_new(source.to_owned()).map_err(|(_, errors)| {
        DictionaryError::FluentSyntax {
            count: errors.len(),
            first: errors
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    })?;

    let mut entries = BTreeMap::new();
    for entry in resource.entries() {
        let Entry::Message(message) = entry else {
            continue;
        };
        let id = message.id.name;
        if let Some(value) = &message.value {
            entries.insert(id.to_owned(), render_pattern(value));
        }
        for attribute in &message.attributes {
            entries.insert(
                format!("{id}.{}", attribute.id.name),
                render_pattern(&attribute.value),
            );
        }
    }
    Ok(entries)
}

fn render_pattern(pattern: &Pattern<&str>) -> String {
    let mut out = String::new();
    write_pattern(&mut out, pattern);
    out
}

fn write_pattern(out: &mut String, pattern: &Pattern<&str>) {
    for element in &pattern.elements {
        match element {
            PatternElement::TextElement { value } => out.push_str(value),
            PatternElement::Placeable { expression } => write_placeable(out, expression),
        }
    }
}

fn write_placeable(out: &mut String, expression: &Expression<&str>) {
    out.push_str("{ ");
    write_expression(out, expression);
    out.push_str(" }");
}

fn write_expression(out: &mut String, expression: &Expression<&str>) {
    match expression {
        Expression::Inline(inline) => write_inline(out, inline),
        Expression::Select { selector, variants } => {
            write_inline(out, selector);
            out.push_str(" ->");
            for variant in variants {
                out.push('\n');
                if variant.default {
                    out.push('*');
                }
                out.push('[');
                match &variant.key {
                    VariantKey::Identifier { name } => out.push_str(name),
                    VariantKey::NumberLiteral { value } => out.push_str(value),
                }
                out.push_str("] ");
                write_pattern(out, &variant.value);
            }
            out.push('\n');
        }
    }
}

fn write_inline(out: &mut String, inline: &InlineExpression<&str>) {
    match inline {
        InlineExpression::StringLiteral { value } => {
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
        InlineExpression::NumberLiteral { value } => out.push_str(value),
        InlineExpression::VariableReference { id } => {
            out.push('$');
            out.push_str(id.name);
        }
        InlineExpression::MessageReference { id, attribute } => {
            out.push_str(id.name);
            if let Some(attribute) = attribute {
                out.push('.');
                out.push_str(attribute.name);
            }
        }
        InlineExpression::TermReference {
            id,
            attribute,
            arguments,
        } => {
            out.push('-');
            out.push_str(id.name);
            if let Some(attribute) = attribute {
                out.push('.');
                out.push_str(attribute.name);
            }
            if let Some(arguments) = arguments {
                write_arguments(out, arguments);
            }
        }
        InlineExpression::FunctionReference { id, arguments } => {
            out.push_str(id.name);
            write_arguments(out, arguments);
        }
        InlineExpression::Placeable { expression } => write_placeable(out, expression),
    }
}

fn write_arguments(out: &mut String, arguments: &CallArguments<&str>) {
    out.push('(');
    let mut first = true;
    for positional in &arguments.positional {
        if !first {
            out.push_str(", ");
        }
        first = false;
        write_inline(out, positional);
    }
    for named in &arguments.named {
        if !first {
            out.push_str(", ");
        }
        first = false;
        out.push_str(named.name.name);
        out.push_str(": ");
        write_inline(out, &named.value);
    }
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parsed(source: &str) -> BTreeMap<String, String> {
        parse(source).unwrap_or_else(|error| panic!("resource should parse: {error}"))
    }

    #[rstest]
    fn collects_messages_and_attributes() {
        let source = concat!(
            "# Bills page\n",
            "bills-title = Factures\n",
            "    .help = Consultez vos factures\n",
            "    .note = Mises à jour chaque mois\n",
            "save = Enregistrer\n",
        );

        let entries = parsed(source);

        assert_eq!(
            entries.get("bills-title").map(String::as_str),
            Some("Factures")
        );
        assert_eq!(
            entries.get("bills-title.help").map(String::as_str),
            Some("Consultez vos factures")
        );
        assert_eq!(
            entries.get("bills-title.note").map(String::as_str),
            Some("Mises à jour chaque mois")
        );
        assert_eq!(entries.get("save").map(String::as_str), Some("Enregistrer"));
    }

    #[rstest]
    #[case::plain(
        "notice =\n    Première ligne\n    deuxième ligne\n",
        "Première ligne\ndeuxième ligne"
    )]
    #[case::blank_line("notice =\n    Ligne un\n\n    Ligne deux\n", "Ligne un\n\nLigne deux")]
    #[case::hash_text(
        "notice =\n    Voir la liste\n    # 3 est prioritaire\n",
        "Voir la liste\n# 3 est prioritaire"
    )]
    fn keeps_multiline_pattern_text(#[case] source: &str, #[case] expected: &str) {
        let entries = parsed(source);

        assert_eq!(entries.get("notice").map(String::as_str), Some(expected));
    }

    #[rstest]
    fn messages_with_only_attributes_have_no_bare_entry() {
        let entries = parsed("login-input =\n    .placeholder = Courriel\n");

        assert!(!entries.contains_key("login-input"));
        assert_eq!(
            entries.get("login-input.placeholder").map(String::as_str),
            Some("Courriel")
        );
    }

    #[rstest]
    fn skips_terms_and_their_attributes() {
        let source = concat!(
            "-brand = Koveo\n",
            "    .gender = masculine\n",
            "welcome = Bienvenue chez { -brand }\n",
        );

        let entries = parsed(source);

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries.get("welcome").map(String::as_str),
            Some("Bienvenue chez { -brand }")
        );
    }

    #[rstest]
    fn renders_select_expressions_with_their_selector() {
        let source = concat!(
            "bills-due = { $count ->\n",
            "    [one] Une facture à payer\n",
            "   *[other] { $count } factures à payer\n",
            "}\n",
        );

        let entries = parsed(source);
        let value = entries.get("bills-due").map_or("", String::as_str);

        assert!(value.starts_with("{ $count ->"), "got {value:?}");
        assert!(value.contains("[one] Une facture à payer"), "got {value:?}");
        assert!(value.contains("*[other] { $count } factures à payer"), "got {value:?}");
        let names: Vec<String> = crate::extract_placeholders(value).into_iter().collect();
        assert_eq!(names, ["count"]);
    }

    #[rstest]
    fn renders_function_calls_with_arguments() {
        let entries = parsed("due = Échéance { DATETIME($date, month: \"long\") }\n");

        assert_eq!(
            entries.get("due").map(String::as_str),
            Some("Échéance { DATETIME($date, month: \"long\") }")
        );
    }

    #[rstest]
    fn reports_syntax_errors() {
        match parse("message = {") {
            Err(DictionaryError::FluentSyntax { count, .. }) => assert!(count > 0),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }
}
