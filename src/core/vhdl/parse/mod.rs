use super::cst::{Cst, NodeId, NodeKind};
use super::error::VhdlError;
use super::shape;
use super::token::{Delimiter, Keyword, VhdlToken, VhdlTokenizer};
use crate::core::lexer::{Position, Token};
use std::str::FromStr;
use std::time::Duration;
use std::time::Instant;

mod decl;
mod expr;
mod stmt;

/// Tuning knobs for a single parse.
#[derive(Debug, PartialEq, Clone)]
pub struct ParserOptions {
    /// Emit the full alternative set for applied names instead of resolving
    /// them to the function-call reading at parse time.
    pub explicit_ambig: bool,
    /// Give up on a file once this much wall-clock time has elapsed. Checked
    /// at a coarse grain, between design units.
    pub timeout: Option<Duration>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            explicit_ambig: false,
            timeout: None,
        }
    }
}

/// The outcome of parsing one design file: the finished tree plus the
/// diagnostics gathered along the way.
#[derive(Debug)]
pub struct Parsed {
    pub tree: Cst,
    pub warnings: Vec<String>,
    pub ambig_before: usize,
    pub ambig_after: usize,
}

/// Recursive-descent parser over the VHDL token stream.
///
/// Applied names and physical literals come out as explicit `_ambig`
/// alternatives (the grammar's intrinsically ambiguous rules); everything
/// else parses deterministically. Speculative attempts are unwound by
/// truncating the arena back to a mark.
pub struct VhdlParser {
    tokens: Vec<Token<VhdlToken>>,
    idx: usize,
    tree: Cst,
    rules: Vec<&'static str>,
    warnings: Vec<String>,
    explicit_ambig: bool,
    deadline: Option<Instant>,
}

impl VhdlParser {
    /// Parses the source text `s` into a disambiguated, parent-linked tree.
    pub fn read(s: &str, opts: &ParserOptions) -> Result<Parsed, VhdlError> {
        let tokens = VhdlTokenizer::from_str(s)?.try_into_tokens()?;
        let mut parser = Self {
            tokens: tokens,
            idx: 0,
            tree: Cst::new(),
            rules: Vec::new(),
            warnings: Vec::new(),
            explicit_ambig: opts.explicit_ambig,
            deadline: opts.timeout.map(|t| Instant::now() + t),
        };
        let root = parser.parse_design_file()?;
        let mut tree = parser.tree;
        tree.set_root(root);
        let mut warnings = parser.warnings;

        // prune impossible derivations and collapse what remains
        let ambig_before = tree.count_ambig();
        shape::shape(&mut tree, &mut warnings)?;
        let ambig_after = tree.count_ambig();
        shape::finalize(&mut tree, &mut warnings);

        tree.link_parents();
        Ok(Parsed {
            tree: tree,
            warnings: warnings,
            ambig_before: ambig_before,
            ambig_after: ambig_after,
        })
    }

    // --- token cursor --------------------------------------------------------

    /// References the token `n` places ahead of the cursor, saturating at EOF.
    pub(super) fn peek_at(&self, n: usize) -> &VhdlToken {
        match self.tokens.get(self.idx + n) {
            Some(t) => t.as_type(),
            None => self.tokens.last().unwrap().as_type(),
        }
    }

    pub(super) fn peek(&self) -> &VhdlToken {
        self.peek_at(0)
    }

    pub(super) fn peek_kw(&self, kw: &Keyword) -> bool {
        self.peek().check_keyword(kw)
    }

    pub(super) fn peek_delim(&self, d: &Delimiter) -> bool {
        self.peek().check_delimiter(d)
    }

    /// The source position of the token under the cursor.
    pub(super) fn position(&self) -> Position {
        match self.tokens.get(self.idx) {
            Some(t) => t.locate().clone(),
            None => self.tokens.last().unwrap().locate().clone(),
        }
    }

    /// Consumes the token under the cursor.
    pub(super) fn advance(&mut self) -> Token<VhdlToken> {
        let token = self.tokens[self.idx.min(self.tokens.len() - 1)].clone();
        if self.idx < self.tokens.len() - 1 {
            self.idx += 1;
        }
        token
    }

    /// Consumes the token under the cursor and lifts it into the tree as a
    /// terminal carrying its source text.
    pub(super) fn take_terminal(&mut self) -> NodeId {
        let token = self.advance();
        let (pos, ttype) = token.decouple();
        self.tree.push_terminal(ttype.to_string(), pos)
    }

    /// Consumes the keyword `kw` if it is next, lifting it into the tree.
    pub(super) fn accept_kw(&mut self, kw: &Keyword) -> Option<NodeId> {
        match self.peek_kw(kw) {
            true => Some(self.take_terminal()),
            false => None,
        }
    }

    /// Consumes the delimiter `d` if it is next, without keeping a node.
    pub(super) fn accept_delim(&mut self, d: &Delimiter) -> bool {
        match self.peek_delim(d) {
            true => {
                self.advance();
                true
            }
            false => false,
        }
    }

    /// Consumes the delimiter `d` if it is next, lifting it into the tree.
    pub(super) fn accept_delim_terminal(&mut self, d: &Delimiter) -> Option<NodeId> {
        match self.peek_delim(d) {
            true => Some(self.take_terminal()),
            false => None,
        }
    }

    pub(super) fn expect_kw(&mut self, kw: &Keyword) -> Result<NodeId, VhdlError> {
        match self.peek_kw(kw) {
            true => Ok(self.take_terminal()),
            false => Err(self.err_expected(&[kw.as_str()])),
        }
    }

    pub(super) fn expect_delim(&mut self, d: &Delimiter) -> Result<(), VhdlError> {
        match self.peek_delim(d) {
            true => {
                self.advance();
                Ok(())
            }
            false => Err(self.err_expected(&[d.as_str()])),
        }
    }

    /// Consumes an identifier token and wraps it in an `Identifier` node.
    pub(super) fn expect_identifier(&mut self) -> Result<NodeId, VhdlError> {
        match self.peek() {
            VhdlToken::Identifier(id) => {
                let extended = match id {
                    super::token::Identifier::Extended(_) => true,
                    _ => false,
                };
                let t = self.take_terminal();
                let inner = match extended {
                    true => self.tree.push(NodeKind::ExtendedIdentifier { id: t }),
                    false => t,
                };
                Ok(self.tree.push(NodeKind::Identifier { id: inner }))
            }
            _ => Err(self.err_expected(&["identifier"])),
        }
    }

    /// Consumes an identifier if one is next.
    pub(super) fn accept_identifier(&mut self) -> Option<NodeId> {
        match self.peek() {
            VhdlToken::Identifier(_) => self.expect_identifier().ok(),
            _ => None,
        }
    }

    pub(super) fn is_identifier(&self) -> bool {
        match self.peek() {
            VhdlToken::Identifier(_) => true,
            _ => false,
        }
    }

    /// Builds a parse failure at the cursor with the expected token set and
    /// the rules currently under consideration.
    pub(super) fn err_expected(&self, expected: &[&str]) -> VhdlError {
        let pos = self.position();
        VhdlError::ParseFailure {
            line: pos.line(),
            column: pos.col(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
            considered: self.rules.iter().map(|s| s.to_string()).collect(),
        }
    }

    // --- backtracking --------------------------------------------------------

    /// Saves the cursor and arena state for a speculative parse.
    pub(super) fn mark(&self) -> (usize, usize) {
        (self.idx, self.tree.mark())
    }

    /// Rolls the cursor and arena back to a previously saved mark.
    pub(super) fn reset(&mut self, mark: (usize, usize)) {
        self.idx = mark.0;
        self.tree.reset(mark.1);
    }

    pub(super) fn push(&mut self, kind: NodeKind) -> NodeId {
        self.tree.push(kind)
    }

    pub(super) fn enter(&mut self, rule: &'static str) {
        self.rules.push(rule);
    }

    pub(super) fn exit(&mut self) {
        self.rules.pop();
    }

    pub(super) fn warn(&mut self, msg: String) {
        self.warnings.push(msg);
    }

    pub(super) fn is_explicit_ambig(&self) -> bool {
        self.explicit_ambig
    }

    // --- design units --------------------------------------------------------

    fn parse_design_file(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("design_file");
        let mut units = Vec::new();
        while self.peek().is_eof() == false {
            if let Some(deadline) = self.deadline {
                if Instant::now() > deadline {
                    return Err(VhdlError::TimedOut);
                }
            }
            units.push(self.parse_design_unit()?);
        }
        self.exit();
        Ok(self.push(NodeKind::DesignFile {
            design_units: units,
        }))
    }

    fn parse_design_unit(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("design_unit");
        // gather the context clause items leading the library unit
        let mut items = Vec::new();
        loop {
            if self.peek_kw(&Keyword::Library) == true {
                let clause = self.parse_library_clause()?;
                items.push(self.push(NodeKind::ContextItem { clause: clause }));
            } else if self.peek_kw(&Keyword::Use) == true {
                let clause = self.parse_use_clause()?;
                items.push(self.push(NodeKind::ContextItem { clause: clause }));
            } else if self.peek_kw(&Keyword::Context) == true
                && self.peek_at(2).check_keyword(&Keyword::Is) == false
            {
                let clause = self.parse_context_reference()?;
                items.push(self.push(NodeKind::ContextItem { clause: clause }));
            } else {
                break;
            }
        }
        let context_clause = match items.is_empty() {
            true => None,
            false => Some(self.push(NodeKind::ContextClause {
                context_items: items,
            })),
        };
        let library_unit = self.parse_library_unit()?;
        self.exit();
        Ok(self.push(NodeKind::DesignUnit {
            context_clause: context_clause,
            library_unit: library_unit,
        }))
    }

    fn parse_library_unit(&mut self) -> Result<NodeId, VhdlError> {
        if self.peek_kw(&Keyword::Entity) == true {
            let unit = self.parse_entity_declaration()?;
            let primary = self.push(NodeKind::PrimaryUnit { unit: unit });
            Ok(self.push(NodeKind::LibraryUnit { unit: primary }))
        } else if self.peek_kw(&Keyword::Architecture) == true {
            let body = self.parse_architecture_body()?;
            let secondary = self.push(NodeKind::SecondaryUnit { body: body });
            Ok(self.push(NodeKind::LibraryUnit { unit: secondary }))
        } else if self.peek_kw(&Keyword::Package) == true {
            if self.peek_at(1).check_keyword(&Keyword::Body) == true {
                let body = self.parse_package_body()?;
                let secondary = self.push(NodeKind::SecondaryUnit { body: body });
                Ok(self.push(NodeKind::LibraryUnit { unit: secondary }))
            } else if self.peek_at(2).check_keyword(&Keyword::Is) == true
                && self.peek_at(3).check_keyword(&Keyword::New) == true
            {
                let unit = self.parse_package_instantiation()?;
                let primary = self.push(NodeKind::PrimaryUnit { unit: unit });
                Ok(self.push(NodeKind::LibraryUnit { unit: primary }))
            } else {
                let unit = self.parse_package_declaration()?;
                let primary = self.push(NodeKind::PrimaryUnit { unit: unit });
                Ok(self.push(NodeKind::LibraryUnit { unit: primary }))
            }
        } else if self.peek_kw(&Keyword::Context) == true {
            let unit = self.parse_context_declaration()?;
            let primary = self.push(NodeKind::PrimaryUnit { unit: unit });
            Ok(self.push(NodeKind::LibraryUnit { unit: primary }))
        } else if self.peek_kw(&Keyword::Configuration) == true {
            let unit = self.parse_unsupported_unit()?;
            let primary = self.push(NodeKind::PrimaryUnit { unit: unit });
            Ok(self.push(NodeKind::LibraryUnit { unit: primary }))
        } else {
            Err(self.err_expected(&[
                "entity",
                "architecture",
                "package",
                "context",
                "configuration",
            ]))
        }
    }

    fn parse_library_clause(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Library)?;
        let mut names = Vec::new();
        loop {
            let identifier = self.expect_identifier()?;
            names.push(self.push(NodeKind::LogicalName {
                identifier: identifier,
            }));
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::LibraryClause {
            logical_names: names,
        }))
    }

    fn parse_use_clause(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Use)?;
        let mut names = Vec::new();
        loop {
            names.push(self.parse_selected_name()?);
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::UseClause {
            selected_names: names,
        }))
    }

    fn parse_context_reference(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Context)?;
        let mut names = Vec::new();
        loop {
            names.push(self.parse_selected_name()?);
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::ContextReference {
            selected_names: names,
        }))
    }

    /// Parses a dotted name into nested `SelectedName` nodes. The suffix may
    /// be `all` as in a use clause.
    pub(super) fn parse_selected_name(&mut self) -> Result<NodeId, VhdlError> {
        let base = self.expect_identifier()?;
        let mut node = self.push(NodeKind::Name { name_val: base });
        let mut selected = None;
        while self.accept_delim(&Delimiter::Dot) == true {
            let suffix_val = if self.peek_kw(&Keyword::All) == true {
                self.take_terminal()
            } else {
                match self.peek() {
                    VhdlToken::CharLiteral(_) | VhdlToken::StrLiteral(_) => self.take_terminal(),
                    _ => self.expect_identifier()?,
                }
            };
            let prefix = self.push(NodeKind::Prefix { name: node });
            let suffix = self.push(NodeKind::Suffix { name: suffix_val });
            let sel = self.push(NodeKind::SelectedName {
                prefix: prefix,
                suffix: suffix,
            });
            selected = Some(sel);
            node = self.push(NodeKind::Name { name_val: sel });
        }
        match selected {
            Some(sel) => Ok(sel),
            None => Err(self.err_expected(&["."])),
        }
    }

    // --- primary and secondary units ----------------------------------------

    fn parse_entity_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("entity_declaration");
        self.expect_kw(&Keyword::Entity)?;
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::Is)?;

        let generic_clause = match self.peek_kw(&Keyword::Generic) {
            true => Some(self.parse_generic_clause()?),
            false => None,
        };
        let port_clause = match self.peek_kw(&Keyword::Port) {
            true => Some(self.parse_port_clause()?),
            false => None,
        };
        let entity_header = self.push(NodeKind::EntityHeader {
            generic_clause: generic_clause,
            port_clause: port_clause,
        });

        let mut declarative_part = Vec::new();
        while self.peek_kw(&Keyword::End) == false && self.peek_kw(&Keyword::Begin) == false {
            let item = self.parse_declaration()?;
            declarative_part.push(self.push(NodeKind::EntityDeclarativeItem { item: item }));
        }

        // statements in an entity are carried as raw token runs
        let entity_statement_part = match self.accept_kw(&Keyword::Begin) {
            Some(_) => {
                let mut items = Vec::new();
                while self.peek_kw(&Keyword::End) == false {
                    if self.peek().is_eof() == true {
                        return Err(self.err_expected(&["end"]));
                    }
                    let mut tokens = Vec::new();
                    loop {
                        let done = self.peek_delim(&Delimiter::Terminator);
                        tokens.push(self.take_terminal());
                        if done == true {
                            break;
                        }
                    }
                    items.push(self.push(NodeKind::EntityStatement { tokens: tokens }));
                }
                Some(self.push(NodeKind::EntityStatementPart { items: items }))
            }
            None => None,
        };

        self.expect_kw(&Keyword::End)?;
        let entity_token = self.accept_kw(&Keyword::Entity);
        let element_simple_name = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::EntityDeclaration {
            identifier: identifier,
            entity_header: entity_header,
            entity_declarative_part: declarative_part,
            entity_statement_part: entity_statement_part,
            entity_token: entity_token,
            element_simple_name: element_simple_name,
        }))
    }

    fn parse_architecture_body(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("architecture_body");
        self.expect_kw(&Keyword::Architecture)?;
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::Of)?;
        let entity_name = self.parse_name()?;
        self.expect_kw(&Keyword::Is)?;

        let mut declarative_part = Vec::new();
        while self.peek_kw(&Keyword::Begin) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["begin"]));
            }
            let item = self.parse_declaration()?;
            declarative_part.push(self.push(NodeKind::BlockDeclarativeItem { item: item }));
        }
        self.expect_kw(&Keyword::Begin)?;

        let mut statement_part = Vec::new();
        while self.peek_kw(&Keyword::End) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            statement_part.push(self.parse_concurrent_statement()?);
        }
        self.expect_kw(&Keyword::End)?;
        let architecture_token = self.accept_kw(&Keyword::Architecture);
        let architecture_simple_name = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::ArchitectureBody {
            identifier: identifier,
            entity_name: entity_name,
            architecture_declarative_part: declarative_part,
            architecture_statement_part: statement_part,
            architecture_token: architecture_token,
            architecture_simple_name: architecture_simple_name,
        }))
    }

    fn parse_package_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("package_declaration");
        self.expect_kw(&Keyword::Package)?;
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::Is)?;

        let generic_clause = match self.peek_kw(&Keyword::Generic) {
            true => Some(self.parse_generic_clause()?),
            false => None,
        };
        let generic_map_aspect = match self.peek_kw(&Keyword::Generic) {
            true => {
                let aspect = self.parse_generic_map_aspect()?;
                self.expect_delim(&Delimiter::Terminator)?;
                Some(aspect)
            }
            false => None,
        };
        let package_header = self.push(NodeKind::PackageHeader {
            generic_clause: generic_clause,
            generic_map_aspect: generic_map_aspect,
        });

        let mut declarative_part = Vec::new();
        while self.peek_kw(&Keyword::End) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            let item = self.parse_declaration()?;
            declarative_part.push(self.push(NodeKind::PackageDeclarativeItem { item: item }));
        }
        self.expect_kw(&Keyword::End)?;
        let package_token = match self.peek_kw(&Keyword::Package) {
            true => Some(self.take_terminal()),
            false => None,
        };
        let package_simple_name = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::PackageDeclaration {
            identifier: identifier,
            package_header: package_header,
            package_declarative_part: declarative_part,
            package_token: package_token,
            package_simple_name: package_simple_name,
        }))
    }

    pub(super) fn parse_package_body(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("package_body");
        self.expect_kw(&Keyword::Package)?;
        self.expect_kw(&Keyword::Body)?;
        let simple_name = self.expect_identifier()?;
        self.expect_kw(&Keyword::Is)?;

        let mut declarative_part = Vec::new();
        while self.peek_kw(&Keyword::End) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            let item = self.parse_declaration()?;
            declarative_part.push(self.push(NodeKind::DeclarativeItem { item: item }));
        }
        self.expect_kw(&Keyword::End)?;
        let package_token = match self.peek_kw(&Keyword::Package) {
            true => {
                let t = self.take_terminal();
                self.expect_kw(&Keyword::Body)?;
                Some(t)
            }
            false => None,
        };
        let simple_name_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::PackageBody {
            simple_name: simple_name,
            declarative_part: declarative_part,
            package_token: package_token,
            simple_name_end: simple_name_end,
        }))
    }

    pub(super) fn parse_package_instantiation(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("package_instantiation_declaration");
        self.expect_kw(&Keyword::Package)?;
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::Is)?;
        self.expect_kw(&Keyword::New)?;
        let uninstantiated_package_name = self.parse_name()?;
        let generic_map_aspect = match self.peek_kw(&Keyword::Generic) {
            true => Some(self.parse_generic_map_aspect()?),
            false => None,
        };
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::PackageInstantiationDeclaration {
            identifier: identifier,
            uninstantiated_package_name: uninstantiated_package_name,
            generic_map_aspect: generic_map_aspect,
        }))
    }

    fn parse_context_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("context_declaration");
        self.expect_kw(&Keyword::Context)?;
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::Is)?;
        let mut items = Vec::new();
        loop {
            if self.peek_kw(&Keyword::Library) == true {
                let clause = self.parse_library_clause()?;
                items.push(self.push(NodeKind::ContextItem { clause: clause }));
            } else if self.peek_kw(&Keyword::Use) == true {
                let clause = self.parse_use_clause()?;
                items.push(self.push(NodeKind::ContextItem { clause: clause }));
            } else if self.peek_kw(&Keyword::Context) == true {
                let clause = self.parse_context_reference()?;
                items.push(self.push(NodeKind::ContextItem { clause: clause }));
            } else {
                break;
            }
        }
        let context_clause = self.push(NodeKind::ContextClause {
            context_items: items,
        });
        self.expect_kw(&Keyword::End)?;
        self.accept_kw(&Keyword::Context);
        let simple_name = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::ContextDeclaration {
            identifier: identifier,
            context_clause: context_clause,
            simple_name: simple_name,
        }))
    }

    /// Skims a configuration declaration as a raw token run.
    ///
    /// Block configurations nest as `for ... end for;`, so the skim tracks
    /// that nesting to find the unit's own `end`.
    fn parse_unsupported_unit(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("configuration_declaration");
        let mut tokens = Vec::new();
        let mut depth = 0;
        loop {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            if self.peek_kw(&Keyword::For) == true {
                depth += 1;
                tokens.push(self.take_terminal());
            } else if self.peek_kw(&Keyword::End) == true {
                tokens.push(self.take_terminal());
                if self.peek_kw(&Keyword::For) == true {
                    depth -= 1;
                    tokens.push(self.take_terminal());
                } else if depth == 0 {
                    // the unit's own closing: `end [configuration] [name];`
                    while self.peek_delim(&Delimiter::Terminator) == false {
                        if self.peek().is_eof() == true {
                            return Err(self.err_expected(&[";"]));
                        }
                        tokens.push(self.take_terminal());
                    }
                    tokens.push(self.take_terminal());
                    break;
                } else {
                    return Err(self.err_expected(&["for"]));
                }
            } else {
                tokens.push(self.take_terminal());
            }
        }
        let pos = self.tree.first_position(*tokens.first().unwrap());
        self.warn(format!(
            "unsupported design unit configuration_declaration at line {}",
            pos.map(|p| p.line()).unwrap_or(0)
        ));
        self.exit();
        Ok(self.push(NodeKind::UnsupportedUnit { tokens: tokens }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(s: &str) -> Parsed {
        VhdlParser::read(s, &ParserOptions::default()).unwrap()
    }

    #[test]
    fn minimal_entity() {
        let parsed = parse("entity e is port (a : in std_logic); end entity;");
        let tree = &parsed.tree;
        let root = tree.get_root();
        assert_eq!(tree.get(root).kind_name(), "design_file");
        assert_eq!(tree.children(root).len(), 1);
    }

    #[test]
    fn empty_design_file() {
        let parsed = parse("");
        let tree = &parsed.tree;
        assert_eq!(tree.children(tree.get_root()).len(), 0);
    }

    #[test]
    fn architecture_end_variants() {
        parse("entity e is end;");
        parse("entity e is end entity;");
        parse("entity e is end entity e;");
        let parsed = parse("architecture rtl of e is begin end architecture rtl;");
        let tree = &parsed.tree;
        assert_eq!(tree.children(tree.get_root()).len(), 1);
    }

    #[test]
    fn context_clause_items() {
        let parsed = parse(
            "library ieee;\nuse ieee.std_logic_1164.all;\nentity e is end entity;",
        );
        let tree = &parsed.tree;
        let unit = tree.children(tree.get_root())[0];
        // the design unit carries both context items
        let ctx = tree.children(unit)[0];
        assert_eq!(tree.get(ctx).kind_name(), "context_clause");
        assert_eq!(tree.children(ctx).len(), 2);
    }

    #[test]
    fn configuration_is_skimmed() {
        let parsed = parse(
            "configuration cfg of e is for rtl end for; end configuration cfg;\nentity e2 is end;",
        );
        assert_eq!(parsed.warnings.is_empty(), false);
        let tree = &parsed.tree;
        assert_eq!(tree.children(tree.get_root()).len(), 2);
    }
}
