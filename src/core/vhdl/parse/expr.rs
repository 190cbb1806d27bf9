use super::super::cst::{NodeId, NodeKind};
use super::super::error::VhdlError;
use super::super::token::literal::AbstLiteral;
use super::super::token::{Delimiter, Keyword, VhdlToken};
use super::VhdlParser;

/// One argument of an applied name, carrying every reading it supports.
pub(super) struct AppArg {
    /// The association-element reading (function-call parameters).
    pub assoc: NodeId,
    /// The bare expression when the argument had no formal, `open`, or
    /// `inertial` decoration (indexed-name reading).
    pub plain_expr: Option<NodeId>,
    /// The discrete-range reading when the argument carried range syntax
    /// (slice-name reading).
    pub range: Option<NodeId>,
}

impl VhdlParser {
    // --- expressions ---------------------------------------------------------

    pub(super) fn parse_expression(&mut self) -> Result<NodeId, VhdlError> {
        let conditional = self.accept_delim_terminal(&Delimiter::CondConv);
        let mut tokens = vec![self.parse_relation()?];
        while self.peek_logical_op() == true {
            tokens.push(self.take_terminal());
            tokens.push(self.parse_relation()?);
        }
        let logical = self.push(NodeKind::LogicalExpression {
            logical_tokens: tokens,
        });
        Ok(self.push(NodeKind::Expression {
            conditional: conditional,
            expression: logical,
        }))
    }

    fn peek_logical_op(&self) -> bool {
        match self.peek().as_keyword() {
            Some(kw) => match kw {
                Keyword::And
                | Keyword::Or
                | Keyword::Xor
                | Keyword::Nand
                | Keyword::Nor
                | Keyword::Xnor => true,
                _ => false,
            },
            None => false,
        }
    }

    fn peek_rel_op(&self) -> bool {
        match self.peek().as_delimiter() {
            Some(d) => match d {
                Delimiter::Eq
                | Delimiter::Inequality
                | Delimiter::Lt
                | Delimiter::SigAssign
                | Delimiter::Gt
                | Delimiter::GTE
                | Delimiter::MatchEQ
                | Delimiter::MatchNE
                | Delimiter::MatchLT
                | Delimiter::MatchLTE
                | Delimiter::MatchGT
                | Delimiter::MatchGTE => true,
                _ => false,
            },
            None => false,
        }
    }

    fn parse_relation(&mut self) -> Result<NodeId, VhdlError> {
        let expr1 = self.parse_shift_expression()?;
        let (rel_op, expr2) = match self.peek_rel_op() {
            true => {
                let op = self.take_terminal();
                let rhs = self.parse_shift_expression()?;
                (Some(op), Some(rhs))
            }
            false => (None, None),
        };
        Ok(self.push(NodeKind::Relation {
            expr1: expr1,
            rel_op: rel_op,
            expr2: expr2,
        }))
    }

    fn peek_shift_op(&self) -> bool {
        match self.peek().as_keyword() {
            Some(kw) => match kw {
                Keyword::Sll
                | Keyword::Srl
                | Keyword::Sla
                | Keyword::Sra
                | Keyword::Rol
                | Keyword::Ror => true,
                _ => false,
            },
            None => false,
        }
    }

    fn parse_shift_expression(&mut self) -> Result<NodeId, VhdlError> {
        let expr1 = self.parse_simple_expression()?;
        let (shift_op, expr2) = match self.peek_shift_op() {
            true => {
                let op = self.take_terminal();
                let rhs = self.parse_simple_expression()?;
                (Some(op), Some(rhs))
            }
            false => (None, None),
        };
        Ok(self.push(NodeKind::ShiftExpression {
            expr1: expr1,
            shift_op: shift_op,
            expr2: expr2,
        }))
    }

    fn peek_adding_op(&self) -> bool {
        match self.peek().as_delimiter() {
            Some(d) => match d {
                Delimiter::Plus | Delimiter::Dash | Delimiter::Ampersand => true,
                _ => false,
            },
            None => false,
        }
    }

    pub(super) fn parse_simple_expression(&mut self) -> Result<NodeId, VhdlError> {
        let sign = match self.peek_delim(&Delimiter::Plus) || self.peek_delim(&Delimiter::Dash) {
            true => Some(self.take_terminal()),
            false => None,
        };
        let term = self.parse_term()?;
        let mut ops = Vec::new();
        while self.peek_adding_op() == true {
            let op = self.take_terminal();
            let rhs = self.parse_term()?;
            ops.push(self.push(NodeKind::SimpleExpressionOp { op: op, term: rhs }));
        }
        Ok(self.push(NodeKind::SimpleExpression {
            sign: sign,
            term: term,
            ops: ops,
        }))
    }

    fn peek_mult_op(&self) -> bool {
        match self.peek() {
            VhdlToken::Delimiter(Delimiter::Star) | VhdlToken::Delimiter(Delimiter::FwdSlash) => {
                true
            }
            VhdlToken::Keyword(Keyword::Mod) | VhdlToken::Keyword(Keyword::Rem) => true,
            _ => false,
        }
    }

    fn parse_term(&mut self) -> Result<NodeId, VhdlError> {
        let factor = self.parse_factor()?;
        let mut ops = Vec::new();
        while self.peek_mult_op() == true {
            let op = self.take_terminal();
            let rhs = self.parse_factor()?;
            ops.push(self.push(NodeKind::TermOp {
                op: op,
                factor: rhs,
            }));
        }
        Ok(self.push(NodeKind::Term {
            factor: factor,
            ops: ops,
        }))
    }

    fn parse_factor(&mut self) -> Result<NodeId, VhdlError> {
        if self.peek_kw(&Keyword::Abs) == true || self.peek_kw(&Keyword::Not) == true {
            let op = self.take_terminal();
            let primary = self.parse_primary()?;
            return Ok(self.push(NodeKind::Factor {
                factor_op: Some(op),
                primary: primary,
                exponent: None,
            }));
        }
        let primary = self.parse_primary()?;
        let exponent = match self.accept_delim(&Delimiter::DoubleStar) {
            true => Some(self.parse_primary()?),
            false => None,
        };
        Ok(self.push(NodeKind::Factor {
            factor_op: None,
            primary: primary,
            exponent: exponent,
        }))
    }

    // --- primaries -----------------------------------------------------------

    pub(super) fn parse_primary(&mut self) -> Result<NodeId, VhdlError> {
        match self.peek().clone() {
            VhdlToken::Delimiter(Delimiter::ParenL) => {
                let inner = self.parse_aggregate_or_paren()?;
                Ok(self.push(NodeKind::Primary { item: inner }))
            }
            VhdlToken::AbstLiteral(abst) => {
                let term = self.take_terminal();
                let value = match abst {
                    AbstLiteral::Decimal(_) => self.push(NodeKind::DecimalLiteral { value: term }),
                    AbstLiteral::Based(_) => self.push(NodeKind::BasedLiteral { value: term }),
                };
                let abstract_literal = self.push(NodeKind::AbstractLiteral {
                    abstract_literal: value,
                });
                // a following identifier makes this a physical literal; the
                // unit's validity is judged by the ambiguity shaper
                let numeric = if self.is_identifier() == true {
                    let unit_name = self.expect_identifier()?;
                    let physical = self.push(NodeKind::PhysicalLiteral {
                        abstract_literal: Some(abstract_literal),
                        unit_name: unit_name,
                    });
                    let reading = self.push(NodeKind::NumericLiteral {
                        numeric_literal: physical,
                    });
                    self.push(NodeKind::Ambig {
                        alternatives: vec![reading],
                    })
                } else {
                    self.push(NodeKind::NumericLiteral {
                        numeric_literal: abstract_literal,
                    })
                };
                let literal = self.push(NodeKind::Literal { item: numeric });
                Ok(self.push(NodeKind::Primary { item: literal }))
            }
            VhdlToken::BitStrLiteral(_) => {
                let term = self.take_terminal();
                let bits = self.push(NodeKind::BitStringLiteral { literal: term });
                let literal = self.push(NodeKind::Literal { item: bits });
                Ok(self.push(NodeKind::Primary { item: literal }))
            }
            VhdlToken::CharLiteral(_) => {
                let term = self.take_terminal();
                let char_lit = self.push(NodeKind::CharacterLiteral { char: term });
                let name = self.push(NodeKind::Name { name_val: char_lit });
                Ok(self.push(NodeKind::Primary { item: name }))
            }
            VhdlToken::StrLiteral(_) => {
                if self.peek_at(1).check_delimiter(&Delimiter::ParenL) == true {
                    // operator symbol applied as a function, e.g. "+"(a, b)
                    let name = self.parse_name()?;
                    self.primary_from_name(name)
                } else {
                    let term = self.take_terminal();
                    let string = self.push(NodeKind::StringLiteral { string: term });
                    let literal = self.push(NodeKind::Literal { item: string });
                    Ok(self.push(NodeKind::Primary { item: literal }))
                }
            }
            VhdlToken::Keyword(Keyword::Null) => {
                let term = self.take_terminal();
                let literal = self.push(NodeKind::Literal { item: term });
                Ok(self.push(NodeKind::Primary { item: literal }))
            }
            VhdlToken::Keyword(Keyword::New) => {
                self.advance();
                let allocator = self.parse_allocator_body()?;
                let alloc = self.push(NodeKind::Allocator {
                    allocator: allocator,
                });
                Ok(self.push(NodeKind::Primary { item: alloc }))
            }
            VhdlToken::Identifier(_) => {
                let name = self.parse_name()?;
                // a tick followed by an opening paren makes a qualified expression
                if self.peek_delim(&Delimiter::SingleQuote) == true
                    && self.peek_at(1).check_delimiter(&Delimiter::ParenL) == true
                {
                    self.advance();
                    let type_mark = self.push(NodeKind::TypeMark { name: name });
                    let inner = self.parse_aggregate_or_paren()?;
                    let qualified = self.push(NodeKind::QualifiedExpression {
                        type_mark: type_mark,
                        expression: inner,
                    });
                    return Ok(self.push(NodeKind::Primary { item: qualified }));
                }
                self.primary_from_name(name)
            }
            _ => Err(self.err_expected(&["primary"])),
        }
    }

    fn parse_allocator_body(&mut self) -> Result<NodeId, VhdlError> {
        let mark = self.mark();
        if self.is_identifier() == true {
            let name = self.parse_name()?;
            if self.peek_delim(&Delimiter::SingleQuote) == true
                && self.peek_at(1).check_delimiter(&Delimiter::ParenL) == true
            {
                self.advance();
                let type_mark = self.push(NodeKind::TypeMark { name: name });
                let inner = self.parse_aggregate_or_paren()?;
                return Ok(self.push(NodeKind::QualifiedExpression {
                    type_mark: type_mark,
                    expression: inner,
                }));
            }
            self.reset(mark);
        }
        self.parse_subtype_indication()
    }

    /// Resolves an applied name at primary position into its readings.
    ///
    /// Outside of explicit-ambiguity mode the function-call reading is taken
    /// directly. With explicit ambiguity the alternative set carries the
    /// indexed-name reading and, for a lone bare-name argument, the
    /// slice-as-subtype reading; the shaper prunes it back down.
    fn primary_from_name(&mut self, name: NodeId) -> Result<NodeId, VhdlError> {
        let applied = match self.tree_kind(name) {
            NodeKind::Name { name_val } => {
                let inner = *name_val;
                match self.tree_kind(inner) {
                    NodeKind::IndexedName {
                        prefix,
                        expressions,
                    } => Some((*prefix, expressions.clone())),
                    _ => None,
                }
            }
            _ => None,
        };
        let (prefix, expressions) = match applied {
            Some(parts) => parts,
            None => return Ok(self.push(NodeKind::Primary { item: name })),
        };

        // function-call reading: arguments become association elements
        let callee = match self.tree_kind(prefix) {
            NodeKind::Prefix { name } => *name,
            _ => prefix,
        };
        let mut parameters = Vec::new();
        for e in &expressions {
            parameters.push(self.as_association_element(*e));
        }
        let call = self.push(NodeKind::FunctionCall {
            name: callee,
            parameters: parameters,
        });

        if self.is_explicit_ambig() == false {
            return Ok(self.push(NodeKind::Primary { item: call }));
        }

        let mut alternatives = vec![call, name];
        // slice reading: a single bare-name argument doubles as a subtype
        if expressions.len() == 1 {
            if let Some(arg_name) = self.expression_as_bare_name(expressions[0]) {
                let type_mark = self.push(NodeKind::TypeMark { name: arg_name });
                let subtype = self.push(NodeKind::SubtypeIndication {
                    resolution_indication: None,
                    type_mark: type_mark,
                    constraint: None,
                });
                let range = self.push(NodeKind::DiscreteRange { range: subtype });
                let slice = self.push(NodeKind::SliceName {
                    prefix: prefix,
                    discrete_range: range,
                });
                alternatives.push(self.push(NodeKind::Name { name_val: slice }));
            }
        }
        let ambig = self.push(NodeKind::Ambig {
            alternatives: alternatives,
        });
        Ok(self.push(NodeKind::Primary { item: ambig }))
    }

    fn tree_kind(&self, id: NodeId) -> &NodeKind {
        self.tree.get(id)
    }

    /// Wraps a bare expression argument as a positional association element.
    pub(super) fn as_association_element(&mut self, arg: NodeId) -> NodeId {
        match self.tree_kind(arg) {
            NodeKind::AssociationElement { .. } => arg,
            _ => {
                let designator = self.push(NodeKind::ActualDesignator {
                    inertial: None,
                    actual: arg,
                });
                let part = self.push(NodeKind::ActualPart { actual: designator });
                self.push(NodeKind::AssociationElement {
                    formal: None,
                    actual: part,
                })
            }
        }
    }

    /// Digs through an expression that is nothing but a wrapped name.
    pub(super) fn expression_as_bare_name(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = id;
        loop {
            cursor = match self.tree_kind(cursor) {
                NodeKind::Expression {
                    conditional: None,
                    expression,
                } => *expression,
                NodeKind::LogicalExpression { logical_tokens } => match logical_tokens.len() {
                    1 => logical_tokens[0],
                    _ => return None,
                },
                NodeKind::Relation {
                    expr1,
                    rel_op: None,
                    ..
                } => *expr1,
                NodeKind::ShiftExpression {
                    expr1,
                    shift_op: None,
                    ..
                } => *expr1,
                NodeKind::SimpleExpression {
                    sign: None,
                    term,
                    ops,
                } => match ops.is_empty() {
                    true => *term,
                    false => return None,
                },
                NodeKind::Term { factor, ops } => match ops.is_empty() {
                    true => *factor,
                    false => return None,
                },
                NodeKind::Factor {
                    factor_op: None,
                    primary,
                    exponent: None,
                } => *primary,
                NodeKind::Primary { item } => *item,
                NodeKind::Name { name_val } => match self.tree_kind(*name_val) {
                    NodeKind::Identifier { .. }
                    | NodeKind::ExtendedIdentifier { .. }
                    | NodeKind::SelectedName { .. } => return Some(cursor),
                    _ => return None,
                },
                _ => return None,
            };
        }
    }

    // --- names ---------------------------------------------------------------

    /// Parses a name chain: selections, applications, and attributes.
    ///
    /// Applications come out in the indexed-name reading; `primary_from_name`
    /// re-interprets the outermost one when the name stands as a primary.
    pub(super) fn parse_name(&mut self) -> Result<NodeId, VhdlError> {
        let base = match self.peek() {
            VhdlToken::Identifier(_) => self.expect_identifier()?,
            VhdlToken::CharLiteral(_) => {
                let term = self.take_terminal();
                self.push(NodeKind::CharacterLiteral { char: term })
            }
            VhdlToken::StrLiteral(_) => self.take_terminal(),
            _ => return Err(self.err_expected(&["identifier"])),
        };
        let mut node = self.push(NodeKind::Name { name_val: base });
        loop {
            if self.peek_delim(&Delimiter::Dot) == true {
                self.advance();
                let suffix_val = if self.peek_kw(&Keyword::All) == true {
                    self.take_terminal()
                } else {
                    match self.peek() {
                        VhdlToken::CharLiteral(_) | VhdlToken::StrLiteral(_) => {
                            self.take_terminal()
                        }
                        _ => self.expect_identifier()?,
                    }
                };
                let prefix = self.push(NodeKind::Prefix { name: node });
                let suffix = self.push(NodeKind::Suffix { name: suffix_val });
                let sel = self.push(NodeKind::SelectedName {
                    prefix: prefix,
                    suffix: suffix,
                });
                node = self.push(NodeKind::Name { name_val: sel });
            } else if self.peek_delim(&Delimiter::ParenL) == true {
                node = self.parse_application(node)?;
            } else if self.peek_delim(&Delimiter::BrackL) == true {
                // a signature announces an attribute with one
                let signature = self.parse_signature()?;
                self.expect_delim(&Delimiter::SingleQuote)?;
                let designator = self.parse_attribute_designator()?;
                let prefix = self.push(NodeKind::Prefix { name: node });
                let attr = self.push(NodeKind::AttributeName {
                    prefix: prefix,
                    signature: Some(signature),
                    attribute_designator: designator,
                    expression: None,
                });
                node = self.push(NodeKind::Name { name_val: attr });
            } else if self.peek_delim(&Delimiter::SingleQuote) == true {
                if self.peek_at(1).check_delimiter(&Delimiter::ParenL) == true {
                    // qualified expression; the primary level owns the tick
                    break;
                }
                self.advance();
                let designator = self.parse_attribute_designator()?;
                let prefix = self.push(NodeKind::Prefix { name: node });
                let attr = self.push(NodeKind::AttributeName {
                    prefix: prefix,
                    signature: None,
                    attribute_designator: designator,
                    expression: None,
                });
                node = self.push(NodeKind::Name { name_val: attr });
            } else {
                break;
            }
        }
        Ok(node)
    }

    fn parse_attribute_designator(&mut self) -> Result<NodeId, VhdlError> {
        if self.is_identifier() == true {
            self.expect_identifier()
        } else {
            match self.peek() {
                // predefined attributes spelled as keywords, e.g. 'range
                VhdlToken::Keyword(_) => {
                    let term = self.take_terminal();
                    Ok(self.push(NodeKind::Identifier { id: term }))
                }
                _ => Err(self.err_expected(&["attribute designator"])),
            }
        }
    }

    /// Parses `prefix(...)` into the canonical name-shaped reading.
    fn parse_application(&mut self, prefix_name: NodeId) -> Result<NodeId, VhdlError> {
        let args = self.parse_application_args()?;
        let prefix = self.push(NodeKind::Prefix { name: prefix_name });
        // a lone range-syntax argument can only be a slice
        if args.len() == 1 && args[0].range.is_some() {
            let slice = self.push(NodeKind::SliceName {
                prefix: prefix,
                discrete_range: args[0].range.unwrap(),
            });
            return Ok(self.push(NodeKind::Name { name_val: slice }));
        }
        let expressions = args
            .iter()
            .map(|a| match a.plain_expr {
                Some(e) => e,
                None => match a.range {
                    Some(r) => r,
                    None => a.assoc,
                },
            })
            .collect();
        let indexed = self.push(NodeKind::IndexedName {
            prefix: prefix,
            expressions: expressions,
        });
        Ok(self.push(NodeKind::Name { name_val: indexed }))
    }

    fn parse_application_args(&mut self) -> Result<Vec<AppArg>, VhdlError> {
        self.expect_delim(&Delimiter::ParenL)?;
        let mut args = Vec::new();
        loop {
            args.push(self.parse_application_arg()?);
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        Ok(args)
    }

    fn parse_application_arg(&mut self) -> Result<AppArg, VhdlError> {
        // range syntax first: `a to b`, `x'range`, `t range a to b`
        let mark = self.mark();
        if let Some(range) = self.try_parse_range_arg() {
            if self.peek_delim(&Delimiter::Comma) == true
                || self.peek_delim(&Delimiter::ParenR) == true
            {
                let designator = self.push(NodeKind::ActualDesignator {
                    inertial: None,
                    actual: range,
                });
                let part = self.push(NodeKind::ActualPart { actual: designator });
                let assoc = self.push(NodeKind::AssociationElement {
                    formal: None,
                    actual: part,
                });
                return Ok(AppArg {
                    assoc: assoc,
                    plain_expr: None,
                    range: Some(range),
                });
            }
            self.reset(mark);
        }

        // named association: `formal => actual`
        let formal = if self.is_identifier() == true {
            let mark = self.mark();
            match self.parse_name() {
                Ok(n) => match self.peek_delim(&Delimiter::Arrow) {
                    true => {
                        self.advance();
                        Some(self.push(NodeKind::FormalPart { formal: n }))
                    }
                    false => {
                        self.reset(mark);
                        None
                    }
                },
                Err(_) => {
                    self.reset(mark);
                    None
                }
            }
        } else {
            None
        };

        // actual part
        if self.peek_kw(&Keyword::Open) == true {
            let open = self.take_terminal();
            let designator = self.push(NodeKind::ActualDesignator {
                inertial: None,
                actual: open,
            });
            let part = self.push(NodeKind::ActualPart { actual: designator });
            let assoc = self.push(NodeKind::AssociationElement {
                formal: formal,
                actual: part,
            });
            return Ok(AppArg {
                assoc: assoc,
                plain_expr: None,
                range: None,
            });
        }
        let inertial = self.accept_kw(&Keyword::Inertial);
        let expr = self.parse_expression()?;
        let designator = self.push(NodeKind::ActualDesignator {
            inertial: inertial,
            actual: expr,
        });
        let part = self.push(NodeKind::ActualPart { actual: designator });
        let assoc = self.push(NodeKind::AssociationElement {
            formal: formal,
            actual: part,
        });
        let plain = match formal.is_none() && inertial.is_none() {
            true => Some(expr),
            false => None,
        };
        Ok(AppArg {
            assoc: assoc,
            plain_expr: plain,
            range: None,
        })
    }

    /// Attempts to read the upcoming tokens as a discrete range, yielding
    /// `None` (with the cursor untouched) when no range syntax shows up.
    pub(super) fn try_parse_range_arg(&mut self) -> Option<NodeId> {
        // subtype with an explicit range constraint, or a range attribute
        if self.is_identifier() == true {
            let mark = self.mark();
            if let Ok(name) = self.parse_name() {
                if self.peek_kw(&Keyword::Range) == true {
                    self.advance();
                    if let Ok(range) = self.parse_range() {
                        let range_constraint = self.push(NodeKind::RangeConstraint { range: range });
                        let constraint = self.push(NodeKind::Constraint {
                            constraint: range_constraint,
                        });
                        let type_mark = self.push(NodeKind::TypeMark { name: name });
                        let subtype = self.push(NodeKind::SubtypeIndication {
                            resolution_indication: None,
                            type_mark: type_mark,
                            constraint: Some(constraint),
                        });
                        return Some(self.push(NodeKind::DiscreteRange { range: subtype }));
                    }
                }
                if let Some(attr) = self.name_as_range_attribute(name) {
                    return Some(self.push(NodeKind::DiscreteRange { range: attr }));
                }
            }
            self.reset(mark);
        }
        // plain `left to right` / `left downto right`
        let mark = self.mark();
        if let Ok(left) = self.parse_simple_expression() {
            if self.peek_kw(&Keyword::To) == true || self.peek_kw(&Keyword::Downto) == true {
                let direction = self.take_terminal();
                if let Ok(right) = self.parse_simple_expression() {
                    let lit = self.push(NodeKind::RangeLiteral {
                        left: left,
                        direction: direction,
                        right: right,
                    });
                    return Some(self.push(NodeKind::DiscreteRange { range: lit }));
                }
            }
        }
        self.reset(mark);
        None
    }

    /// Unwraps a name ending in a `'range`/`'reverse_range` attribute.
    fn name_as_range_attribute(&self, name: NodeId) -> Option<NodeId> {
        match self.tree_kind(name) {
            NodeKind::Name { name_val } => {
                let inner = *name_val;
                match self.tree_kind(inner) {
                    NodeKind::AttributeName {
                        attribute_designator,
                        ..
                    } => {
                        let text = self
                            .tree
                            .identifier_text(*attribute_designator)
                            .to_ascii_lowercase();
                        match text == "range" || text == "reverse_range" {
                            true => Some(inner),
                            false => None,
                        }
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    // --- ranges --------------------------------------------------------------

    /// Parses a range: `a to b`, `a downto b`, or a range attribute.
    pub(super) fn parse_range(&mut self) -> Result<NodeId, VhdlError> {
        let mark = self.mark();
        let left = self.parse_simple_expression()?;
        if self.peek_kw(&Keyword::To) == true || self.peek_kw(&Keyword::Downto) == true {
            let direction = self.take_terminal();
            let right = self.parse_simple_expression()?;
            return Ok(self.push(NodeKind::RangeLiteral {
                left: left,
                direction: direction,
                right: right,
            }));
        }
        // fall back to an attribute range, e.g. `arg'range`
        self.reset(mark);
        let name = self.parse_name()?;
        match self.name_as_range_attribute(name) {
            Some(attr) => Ok(attr),
            None => Err(self.err_expected(&["to", "downto", "'range"])),
        }
    }

    /// Parses a discrete range: an explicit range or a (possibly constrained)
    /// subtype indication.
    pub(super) fn parse_discrete_range(&mut self) -> Result<NodeId, VhdlError> {
        if let Some(range) = self.try_parse_range_arg() {
            return Ok(range);
        }
        let mark = self.mark();
        match self.parse_range() {
            Ok(range) => Ok(self.push(NodeKind::DiscreteRange { range: range })),
            Err(_) => {
                self.reset(mark);
                let subtype = self.parse_subtype_indication()?;
                Ok(self.push(NodeKind::DiscreteRange { range: subtype }))
            }
        }
    }

    // --- aggregates and choices ----------------------------------------------

    /// Parses a parenthesized construct: an aggregate, or a lone expression
    /// in parentheses (returned unwrapped).
    pub(super) fn parse_aggregate_or_paren(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_delim(&Delimiter::ParenL)?;
        let mut items = Vec::new();
        let mut any_choices = false;
        loop {
            let choices = {
                let mark = self.mark();
                match self.try_parse_choices_arrow() {
                    Some(c) => Some(c),
                    None => {
                        self.reset(mark);
                        None
                    }
                }
            };
            if choices.is_some() == true {
                any_choices = true;
            }
            let expression = self.parse_expression()?;
            items.push(self.push(NodeKind::ElementAssociation {
                choices: choices,
                expression: expression,
            }));
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        if items.len() == 1 && any_choices == false {
            // plain parenthesized expression
            match self.tree_kind(items[0]) {
                NodeKind::ElementAssociation { expression, .. } => return Ok(*expression),
                _ => (),
            }
        }
        Ok(self.push(NodeKind::Aggregate {
            element_associations: items,
        }))
    }

    fn try_parse_choices_arrow(&mut self) -> Option<NodeId> {
        let choices = match self.parse_choices() {
            Ok(c) => c,
            Err(_) => return None,
        };
        match self.peek_delim(&Delimiter::Arrow) {
            true => {
                self.advance();
                Some(choices)
            }
            false => None,
        }
    }

    pub(super) fn parse_choices(&mut self) -> Result<NodeId, VhdlError> {
        let mut choices = vec![self.parse_choice()?];
        while self.accept_delim(&Delimiter::Pipe) == true {
            choices.push(self.parse_choice()?);
        }
        Ok(self.push(NodeKind::Choices { choices: choices }))
    }

    fn parse_choice(&mut self) -> Result<NodeId, VhdlError> {
        if self.peek_kw(&Keyword::Others) == true {
            let term = self.take_terminal();
            return Ok(self.push(NodeKind::Choice { choice: term }));
        }
        if let Some(range) = self.try_parse_range_arg() {
            return Ok(self.push(NodeKind::Choice { choice: range }));
        }
        let expr = self.parse_simple_expression()?;
        Ok(self.push(NodeKind::Choice { choice: expr }))
    }

    // --- signatures ----------------------------------------------------------

    pub(super) fn parse_signature(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_delim(&Delimiter::BrackL)?;
        let mut types = Vec::new();
        let mut return_type = None;
        while self.peek_delim(&Delimiter::BrackR) == false {
            if self.accept_kw(&Keyword::Return).is_some() == true {
                let name = self.parse_name()?;
                return_type = Some(self.push(NodeKind::TypeMark { name: name }));
                break;
            }
            let name = self.parse_name()?;
            types.push(self.push(NodeKind::TypeMark { name: name }));
            if self.accept_delim(&Delimiter::Comma) == false {
                if self.accept_kw(&Keyword::Return).is_some() == true {
                    let name = self.parse_name()?;
                    return_type = Some(self.push(NodeKind::TypeMark { name: name }));
                }
                break;
            }
        }
        self.expect_delim(&Delimiter::BrackR)?;
        Ok(self.push(NodeKind::Signature {
            types: types,
            return_type: return_type,
        }))
    }
}
