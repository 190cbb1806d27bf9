use super::cst::{Cst, NodeId, NodeKind};
use super::error::VhdlError;

/// The predefined physical units of `std.standard.time`.
///
/// A physical-literal derivation whose unit is not in this set is pruned.
/// User-defined physical types are not resolved at this stage, so the prune
/// is surfaced as a warning wherever it fires.
pub const TIME_UNITS: [&str; 8] = ["fs", "ps", "ns", "us", "ms", "sec", "min", "hr"];

/// Prunes impossible derivations and collapses `_ambig` nodes.
///
/// Per `_ambig` node, in order: alternatives containing a deletable subtree
/// are dropped, the application family is reduced to its function-call
/// reading, structurally identical survivors are de-duplicated, and a single
/// survivor is spliced in place. An `_ambig` left with no survivors is a
/// parse failure. Running the pass twice yields the same tree.
pub fn shape(tree: &mut Cst, warnings: &mut Vec<String>) -> Result<(), VhdlError> {
    // children first, so nested ambiguities resolve before their parents
    let mut order = tree.reachable();
    order.reverse();
    for id in order {
        if tree.get(id).is_ambig() == false {
            continue;
        }
        let alternatives = match tree.get(id) {
            NodeKind::Ambig { alternatives } => alternatives.clone(),
            _ => continue,
        };
        let considered: Vec<String> = alternatives
            .iter()
            .map(|a| tree.get(*a).kind_name().to_string())
            .collect();

        // semantic filter
        let mut kept = Vec::new();
        for alt in &alternatives {
            match deletable_unit(tree, *alt) {
                Some(unit) => {
                    let pos = tree.first_position(*alt);
                    warnings.push(format!(
                        "line {}: pruned physical literal with unit '{}' (user-defined physical types are not resolved)",
                        pos.map(|p| p.line()).unwrap_or(0),
                        unit
                    ));
                }
                None => kept.push(*alt),
            }
        }
        // the application family collapses onto its function-call reading
        let has_call = kept
            .iter()
            .any(|a| match tree.get(*a) {
                NodeKind::FunctionCall { .. } => true,
                _ => false,
            });
        if has_call == true {
            kept.retain(|a| is_application_shadow(tree, *a) == false);
        }

        // de-duplicate structurally identical derivations
        let mut unique: Vec<NodeId> = Vec::new();
        for c in kept {
            if unique.iter().any(|u| tree.deep_eq(*u, c)) == false {
                unique.push(c);
            }
        }

        match unique.len() {
            0 => {
                let pos = tree
                    .first_position(*alternatives.first().unwrap())
                    .unwrap_or(crate::core::lexer::Position::new());
                return Err(VhdlError::ParseFailure {
                    line: pos.line(),
                    column: pos.col(),
                    expected: TIME_UNITS.iter().map(|s| s.to_string()).collect(),
                    considered: considered,
                });
            }
            1 => {
                let survivor = tree.get(unique[0]).clone();
                tree.replace(id, survivor);
            }
            _ => {
                tree.replace(id, NodeKind::Ambig { alternatives: unique });
            }
        }
    }
    Ok(())
}

/// Resolves any `_ambig` node still standing after the shaper by taking its
/// first derivation, reporting each occurrence as a warning.
pub fn finalize(tree: &mut Cst, warnings: &mut Vec<String>) {
    let mut order = tree.reachable();
    order.reverse();
    for id in order {
        let (first, count) = match tree.get(id) {
            NodeKind::Ambig { alternatives } => match alternatives.first() {
                Some(f) => (*f, alternatives.len()),
                None => continue,
            },
            _ => continue,
        };
        let pos = tree.first_position(first);
        warnings.push(
            VhdlError::AmbiguityUnresolved {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
                column: pos.as_ref().map(|p| p.col()).unwrap_or(0),
                alternatives: count,
            }
            .to_string(),
        );
        let survivor = tree.get(first).clone();
        tree.replace(id, survivor);
    }
}

/// Searches the subtree for a physical literal whose unit is not predefined,
/// returning the offending unit.
fn deletable_unit(tree: &Cst, id: NodeId) -> Option<String> {
    if let NodeKind::PhysicalLiteral { unit_name, .. } = tree.get(id) {
        let unit = tree.identifier_text(*unit_name);
        let lowered = unit.to_ascii_lowercase();
        if TIME_UNITS.iter().any(|u| *u == lowered) == false {
            return Some(unit);
        }
    }
    for child in tree.children(id) {
        if let Some(unit) = deletable_unit(tree, child) {
            return Some(unit);
        }
    }
    None
}

/// Checks whether an alternative is a name-shaped shadow of the application
/// family (indexed reading, or the slice-as-subtype reading of a bare-name
/// argument). These cede to a surviving function-call reading.
fn is_application_shadow(tree: &Cst, id: NodeId) -> bool {
    match tree.get(id) {
        NodeKind::Name { name_val } => match tree.get(*name_val) {
            NodeKind::IndexedName { .. } | NodeKind::SliceName { .. } => true,
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::super::parse::{ParserOptions, VhdlParser};
    use super::*;
    use crate::core::lexer::Position;

    #[test]
    fn predefined_unit_passes() {
        let parsed = VhdlParser::read(
            "package p is constant t : time := 10 ns; end package;",
            &ParserOptions::default(),
        )
        .unwrap();
        assert_eq!(parsed.tree.count_ambig(), 0);
        // the physical reading survived
        let rendered = parsed.tree.format(parsed.tree.get_root());
        assert_eq!(rendered.contains("10 ns"), true);
    }

    #[test]
    fn unknown_unit_fails_the_parse() {
        let result = VhdlParser::read(
            "package p is constant t : time := 10 xs; end package;",
            &ParserOptions::default(),
        );
        match result {
            Err(VhdlError::ParseFailure { considered, .. }) => {
                assert_eq!(considered.contains(&"numeric_literal".to_string()), true);
            }
            other => panic!("expected a parse failure, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn ambiguous_call_collapses_to_function_call() {
        let opts = ParserOptions {
            explicit_ambig: true,
            ..Default::default()
        };
        let parsed = VhdlParser::read(
            "architecture rtl of e is begin x <= f(3); end;",
            &opts,
        )
        .unwrap();
        assert_eq!(parsed.ambig_before > 0, true);
        assert_eq!(parsed.tree.count_ambig(), 0);
        assert_eq!(parsed.warnings.is_empty(), true);
        let rendered = parsed.tree.format(parsed.tree.get_root());
        assert_eq!(rendered.contains("f(3)"), true);
    }

    #[test]
    fn shaper_is_idempotent() {
        let opts = ParserOptions {
            explicit_ambig: true,
            ..Default::default()
        };
        let parsed = VhdlParser::read(
            "architecture rtl of e is begin x <= f(a) + g(1, 2); end;",
            &opts,
        )
        .unwrap();
        let mut again = parsed.tree.clone();
        let mut warnings = Vec::new();
        shape(&mut again, &mut warnings).unwrap();
        assert_eq!(again, parsed.tree);
    }

    #[test]
    fn unresolved_ambiguity_takes_first_and_warns() {
        // hand-build an ambig the filter cannot decide
        let mut tree = Cst::new();
        let t0 = tree.push_terminal(String::from("a"), Position::place(1, 1));
        let i0 = tree.push(NodeKind::Identifier { id: t0 });
        let t1 = tree.push_terminal(String::from("b"), Position::place(1, 1));
        let i1 = tree.push(NodeKind::Identifier { id: t1 });
        let ambig = tree.push(NodeKind::Ambig {
            alternatives: vec![i0, i1],
        });
        let name = tree.push(NodeKind::Name { name_val: ambig });
        tree.set_root(name);

        let mut warnings = Vec::new();
        shape(&mut tree, &mut warnings).unwrap();
        assert_eq!(tree.count_ambig(), 1);
        finalize(&mut tree, &mut warnings);
        assert_eq!(tree.count_ambig(), 0);
        assert_eq!(warnings.len(), 1);
        assert_eq!(tree.format(tree.get_root()), "a");
    }
}
