//! Test utilities: textual dumps of chains for snapshots.

use crate::ast::Step;
use crate::internalize::InternedStep;
use crate::{CommandParser, parse_command};

/// One line per step, `Or` groups indented by two spaces.
pub fn dump_chain(steps: &[Step]) -> String {
    let mut lines = Vec::new();
    dump_steps(steps, 0, &mut lines);
    lines.join("\n")
}

fn dump_steps(steps: &[Step], indent: usize, lines: &mut Vec<String>) {
    for step in steps {
        let pad = "  ".repeat(indent);
        let line = match step {
            Step::Start => format!("Start {:?}", crate::START_ARGUMENT),
            Step::HasType(arg)
            | Step::InScheme(arg)
            | Step::IsInstance(arg)
            | Step::Follow(arg)
            | Step::FollowInverse(arg) => format!("{} {arg:?}", step.kind()),
            Step::HasValue { field, values } => format!("HasValue {field:?} {values:?}"),
            Step::HasBroader { taxonomy, target } => format!("HasBroader {taxonomy:?} {target:?}"),
            Step::Eval | Step::IsActive | Step::IsInactive | Step::Or(_) => step.kind().to_string(),
        };
        lines.push(format!("{pad}{line}"));
        dump_steps(step.subchain(), indent + 1, lines);
    }
}

/// Same layout as [`dump_chain`], symbols printed as `#id`.
pub fn dump_interned(steps: &[InternedStep]) -> String {
    let mut lines = Vec::new();
    dump_interned_steps(steps, 0, &mut lines);
    lines.join("\n")
}

fn dump_interned_steps(steps: &[InternedStep], indent: usize, lines: &mut Vec<String>) {
    for step in steps {
        let pad = "  ".repeat(indent);
        let line = match step {
            InternedStep::HasType(sym)
            | InternedStep::InScheme(sym)
            | InternedStep::IsInstance(sym)
            | InternedStep::Follow(sym)
            | InternedStep::FollowInverse(sym) => format!("{} {sym}", step.kind()),
            InternedStep::HasValue { field, values } => format!("HasValue {field} {values:?}"),
            InternedStep::HasBroader { taxonomy, target } => {
                format!("HasBroader {taxonomy} {target}")
            }
            _ => step.kind().to_string(),
        };
        lines.push(format!("{pad}{line}"));
        dump_interned_steps(step.subchain(), indent + 1, lines);
    }
}

/// Parses `command` and dumps the chain, panicking on error.
pub fn expect_chain(command: &str) -> String {
    match parse_command(command) {
        Ok(chain) => dump_chain(&chain),
        Err(err) => panic!("expected `{command}` to parse, got: {err}"),
    }
}

/// Parses `command` and renders the error, panicking on success.
pub fn expect_error(command: &str) -> String {
    expect_error_with(&CommandParser::new(), command)
}

pub fn expect_error_with(parser: &CommandParser, command: &str) -> String {
    match parser.parse(command) {
        Ok(chain) => panic!(
            "expected `{command}` to fail, got:\n{}",
            dump_chain(&chain)
        ),
        Err(err) => format!("{:?}: {err}", err.category()),
    }
}
