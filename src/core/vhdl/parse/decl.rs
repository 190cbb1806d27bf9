use super::super::cst::{NodeId, NodeKind};
use super::super::error::VhdlError;
use super::super::token::{Delimiter, Keyword, VhdlToken};
use super::VhdlParser;

impl VhdlParser {
    /// Parses one declaration as found in entity, architecture, package,
    /// process, subprogram, block, and protected-type declarative parts.
    ///
    /// The caller wraps the result in its region's item kind.
    pub(super) fn parse_declaration(&mut self) -> Result<NodeId, VhdlError> {
        if self.peek_kw(&Keyword::Type) == true {
            self.parse_type_declaration()
        } else if self.peek_kw(&Keyword::Subtype) == true {
            self.parse_subtype_declaration()
        } else if self.peek_kw(&Keyword::Constant) == true {
            self.parse_constant_declaration()
        } else if self.peek_kw(&Keyword::Signal) == true {
            self.parse_signal_declaration()
        } else if self.peek_kw(&Keyword::Variable) == true || self.peek_kw(&Keyword::Shared) == true
        {
            self.parse_variable_declaration()
        } else if self.peek_kw(&Keyword::File) == true {
            self.parse_file_declaration()
        } else if self.peek_kw(&Keyword::Alias) == true {
            self.parse_alias_declaration()
        } else if self.peek_kw(&Keyword::Attribute) == true {
            self.parse_attribute_declaration_or_specification()
        } else if self.peek_kw(&Keyword::Component) == true {
            self.parse_component_declaration()
        } else if self.peek_kw(&Keyword::Use) == true {
            self.parse_use_clause()
        } else if self.peek_kw(&Keyword::Function) == true
            || self.peek_kw(&Keyword::Procedure) == true
            || self.peek_kw(&Keyword::Pure) == true
            || self.peek_kw(&Keyword::Impure) == true
        {
            self.parse_subprogram()
        } else if self.peek_kw(&Keyword::Package) == true {
            if self.peek_at(1).check_keyword(&Keyword::Body) == true {
                self.parse_package_body()
            } else if self.peek_at(2).check_keyword(&Keyword::Is) == true
                && self.peek_at(3).check_keyword(&Keyword::New) == true
            {
                self.parse_package_instantiation()
            } else {
                self.parse_package_declaration_nested()
            }
        } else {
            Err(self.err_expected(&["declaration"]))
        }
    }

    fn parse_package_declaration_nested(&mut self) -> Result<NodeId, VhdlError> {
        // a nested package declaration reads exactly like a top-level one
        self.parse_package_declaration()
    }

    // --- types ---------------------------------------------------------------

    fn parse_type_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("type_declaration");
        self.expect_kw(&Keyword::Type)?;
        let identifier = self.expect_identifier()?;
        if self.accept_delim(&Delimiter::Terminator) == true {
            let incomplete = self.push(NodeKind::IncompleteTypeDeclaration {
                identifier: identifier,
            });
            self.exit();
            return Ok(self.push(NodeKind::TypeDeclaration {
                declaration: incomplete,
            }));
        }
        self.expect_kw(&Keyword::Is)?;
        let definition = self.parse_type_definition()?;
        self.expect_delim(&Delimiter::Terminator)?;
        let full = self.push(NodeKind::FullTypeDeclaration {
            identifier: identifier,
            type_definition: definition,
        });
        self.exit();
        Ok(self.push(NodeKind::TypeDeclaration { declaration: full }))
    }

    fn parse_type_definition(&mut self) -> Result<NodeId, VhdlError> {
        let inner = if self.peek_delim(&Delimiter::ParenL) == true {
            let enumeration = self.parse_enumeration_type_definition()?;
            self.push(NodeKind::ScalarTypeDefinition {
                definition: enumeration,
            })
        } else if self.peek_kw(&Keyword::Range) == true {
            self.advance();
            let range = self.parse_range()?;
            if self.peek_kw(&Keyword::Units) == true {
                let physical = self.parse_physical_type_definition(range)?;
                self.push(NodeKind::ScalarTypeDefinition {
                    definition: physical,
                })
            } else {
                let by_range = self.push(NodeKind::RangeTypeDefinition { range: range });
                self.push(NodeKind::ScalarTypeDefinition {
                    definition: by_range,
                })
            }
        } else if self.peek_kw(&Keyword::Array) == true {
            let array = self.parse_array_type_definition()?;
            self.push(NodeKind::CompositeTypeDefinition { definition: array })
        } else if self.peek_kw(&Keyword::Record) == true {
            let record = self.parse_record_type_definition()?;
            self.push(NodeKind::CompositeTypeDefinition { definition: record })
        } else if self.peek_kw(&Keyword::Access) == true {
            self.advance();
            let subtype = self.parse_subtype_indication()?;
            self.push(NodeKind::AccessTypeDefinition {
                subtype_indication: subtype,
            })
        } else if self.peek_kw(&Keyword::File) == true {
            self.advance();
            self.expect_kw(&Keyword::Of)?;
            let type_mark = self.parse_type_mark()?;
            self.push(NodeKind::FileTypeDefinition {
                type_mark: type_mark,
            })
        } else if self.peek_kw(&Keyword::Protected) == true {
            let protected = self.parse_protected_type_definition()?;
            self.push(NodeKind::ProtectedTypeDefinition {
                definition: protected,
            })
        } else {
            return Err(self.err_expected(&[
                "(",
                "range",
                "array",
                "record",
                "access",
                "file",
                "protected",
            ]));
        };
        Ok(self.push(NodeKind::TypeDefinition { definition: inner }))
    }

    fn parse_enumeration_type_definition(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_delim(&Delimiter::ParenL)?;
        let mut literals = Vec::new();
        loop {
            let literal = match self.peek() {
                VhdlToken::CharLiteral(_) => {
                    let term = self.take_terminal();
                    self.push(NodeKind::CharacterLiteral { char: term })
                }
                _ => self.expect_identifier()?,
            };
            literals.push(self.push(NodeKind::EnumerationLiteral { literal: literal }));
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        Ok(self.push(NodeKind::EnumerationTypeDefinition { literals: literals }))
    }

    fn parse_physical_type_definition(&mut self, range: NodeId) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Units)?;
        let primary_unit = self.expect_identifier()?;
        self.expect_delim(&Delimiter::Terminator)?;
        let mut secondary_units = Vec::new();
        while self.peek_kw(&Keyword::End) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            let identifier = self.expect_identifier()?;
            self.expect_delim(&Delimiter::Eq)?;
            let literal = self.parse_physical_literal_plain()?;
            self.expect_delim(&Delimiter::Terminator)?;
            secondary_units.push(self.push(NodeKind::SecondaryUnitDeclaration {
                identifier: identifier,
                literal: literal,
            }));
        }
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Units)?;
        let units_simple_name = self.accept_identifier();
        Ok(self.push(NodeKind::PhysicalTypeDefinition {
            range: range,
            primary_unit: primary_unit,
            secondary_units: secondary_units,
            units_simple_name: units_simple_name,
        }))
    }

    /// Parses a physical literal in a context where the unit is being
    /// declared, so no ambiguity is emitted.
    fn parse_physical_literal_plain(&mut self) -> Result<NodeId, VhdlError> {
        let abstract_literal = match self.peek() {
            VhdlToken::AbstLiteral(abst) => {
                let kind = abst.clone();
                let term = self.take_terminal();
                let value = match kind {
                    super::super::token::literal::AbstLiteral::Decimal(_) => {
                        self.push(NodeKind::DecimalLiteral { value: term })
                    }
                    super::super::token::literal::AbstLiteral::Based(_) => {
                        self.push(NodeKind::BasedLiteral { value: term })
                    }
                };
                Some(self.push(NodeKind::AbstractLiteral {
                    abstract_literal: value,
                }))
            }
            _ => None,
        };
        let unit_name = self.expect_identifier()?;
        Ok(self.push(NodeKind::PhysicalLiteral {
            abstract_literal: abstract_literal,
            unit_name: unit_name,
        }))
    }

    fn parse_array_type_definition(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Array)?;
        self.expect_delim(&Delimiter::ParenL)?;
        // unbounded form: `type_mark range <>` entries
        let mark = self.mark();
        if let Some(defs) = self.try_parse_index_subtype_definitions() {
            self.expect_delim(&Delimiter::ParenR)?;
            self.expect_kw(&Keyword::Of)?;
            let subtype = self.parse_subtype_indication()?;
            let unbounded = self.push(NodeKind::UnboundedArrayDefinition {
                definition: defs,
                subtype_indication: subtype,
            });
            return Ok(self.push(NodeKind::ArrayTypeDefinition {
                definition: unbounded,
            }));
        }
        self.reset(mark);
        let mut ranges = Vec::new();
        loop {
            ranges.push(self.parse_discrete_range()?);
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        self.expect_kw(&Keyword::Of)?;
        let subtype = self.parse_subtype_indication()?;
        let index_constraint = self.push(NodeKind::IndexConstraint {
            discrete_ranges: ranges,
        });
        let constrained = self.push(NodeKind::ConstrainedArrayDefinition {
            index_constraint: index_constraint,
            subtype_indication: subtype,
        });
        Ok(self.push(NodeKind::ArrayTypeDefinition {
            definition: constrained,
        }))
    }

    fn try_parse_index_subtype_definitions(&mut self) -> Option<Vec<NodeId>> {
        let mut defs = Vec::new();
        loop {
            let mark = self.mark();
            if self.is_identifier() == false {
                return None;
            }
            let name = match self.parse_type_mark_name() {
                Ok(n) => n,
                Err(_) => return None,
            };
            if self.peek_kw(&Keyword::Range) == false {
                self.reset(mark);
                return None;
            }
            self.advance();
            if self.accept_delim(&Delimiter::Box) == false {
                self.reset(mark);
                return None;
            }
            let type_mark = self.push(NodeKind::TypeMark { name: name });
            defs.push(self.push(NodeKind::IndexSubtypeDefinition {
                type_mark: type_mark,
            }));
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        Some(defs)
    }

    fn parse_record_type_definition(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Record)?;
        let mut declarations = Vec::new();
        while self.peek_kw(&Keyword::End) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            let identifiers = self.parse_identifier_list()?;
            self.expect_delim(&Delimiter::Colon)?;
            let subtype = self.parse_subtype_indication()?;
            self.expect_delim(&Delimiter::Terminator)?;
            declarations.push(self.push(NodeKind::ElementDeclaration {
                identifiers: identifiers,
                subtype_indication: subtype,
            }));
        }
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Record)?;
        let record_type_simple_name = self.accept_identifier();
        Ok(self.push(NodeKind::RecordTypeDefinition {
            declarations: declarations,
            record_type_simple_name: record_type_simple_name,
        }))
    }

    fn parse_protected_type_definition(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Protected)?;
        if self.accept_kw(&Keyword::Body).is_some() == true {
            let mut declarative_part = Vec::new();
            while self.peek_kw(&Keyword::End) == false {
                if self.peek().is_eof() == true {
                    return Err(self.err_expected(&["end"]));
                }
                let item = self.parse_declaration()?;
                declarative_part.push(self.push(NodeKind::DeclarativeItem { item: item }));
            }
            self.expect_kw(&Keyword::End)?;
            self.expect_kw(&Keyword::Protected)?;
            self.expect_kw(&Keyword::Body)?;
            let simple_name = self.accept_identifier();
            return Ok(self.push(NodeKind::ProtectedTypeBody {
                declarative_part: declarative_part,
                simple_name: simple_name,
            }));
        }
        let mut declarative_part = Vec::new();
        while self.peek_kw(&Keyword::End) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            let item = self.parse_declaration()?;
            declarative_part.push(self.push(NodeKind::ProtectedTypeDeclarativeItem { item: item }));
        }
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Protected)?;
        let simple_name = self.accept_identifier();
        Ok(self.push(NodeKind::ProtectedTypeDeclaration {
            declarative_part: declarative_part,
            simple_name: simple_name,
        }))
    }

    fn parse_subtype_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Subtype)?;
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::Is)?;
        let subtype = self.parse_subtype_indication()?;
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::SubtypeDeclaration {
            identifier: identifier,
            subtype_indication: subtype,
        }))
    }

    // --- objects -------------------------------------------------------------

    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<NodeId>, VhdlError> {
        let mut identifiers = vec![self.expect_identifier()?];
        while self.accept_delim(&Delimiter::Comma) == true {
            identifiers.push(self.expect_identifier()?);
        }
        Ok(identifiers)
    }

    fn parse_default_expression(&mut self) -> Result<Option<NodeId>, VhdlError> {
        match self.accept_delim(&Delimiter::VarAssign) {
            true => Ok(Some(self.parse_expression()?)),
            false => Ok(None),
        }
    }

    fn parse_constant_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Constant)?;
        let identifiers = self.parse_identifier_list()?;
        self.expect_delim(&Delimiter::Colon)?;
        let subtype = self.parse_subtype_indication()?;
        let default = self.parse_default_expression()?;
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::ConstantDeclaration {
            identifiers: identifiers,
            subtype_indication: subtype,
            default: default,
        }))
    }

    fn parse_signal_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Signal)?;
        let identifiers = self.parse_identifier_list()?;
        self.expect_delim(&Delimiter::Colon)?;
        let subtype = self.parse_subtype_indication()?;
        let kind = match self.peek_kw(&Keyword::Register) || self.peek_kw(&Keyword::Bus) {
            true => Some(self.take_terminal()),
            false => None,
        };
        let default = self.parse_default_expression()?;
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::SignalDeclaration {
            identifiers: identifiers,
            subtype_indication: subtype,
            kind: kind,
            default: default,
        }))
    }

    fn parse_variable_declaration(&mut self) -> Result<NodeId, VhdlError> {
        let shared = self.accept_kw(&Keyword::Shared);
        self.expect_kw(&Keyword::Variable)?;
        let identifiers = self.parse_identifier_list()?;
        self.expect_delim(&Delimiter::Colon)?;
        let subtype = self.parse_subtype_indication()?;
        let default = self.parse_default_expression()?;
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::VariableDeclaration {
            shared: shared,
            identifiers: identifiers,
            subtype_indication: subtype,
            default: default,
        }))
    }

    fn parse_file_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::File)?;
        let identifier_list = self.parse_identifier_list()?;
        self.expect_delim(&Delimiter::Colon)?;
        let subtype = self.parse_subtype_indication()?;
        let open_info = match self.peek_kw(&Keyword::Open) || self.peek_kw(&Keyword::Is) {
            true => {
                let open_kind = match self.accept_kw(&Keyword::Open) {
                    Some(_) => Some(self.parse_expression()?),
                    None => None,
                };
                self.expect_kw(&Keyword::Is)?;
                let name = self.parse_expression()?;
                Some(self.push(NodeKind::FileOpenInformation {
                    open_kind: open_kind,
                    name: name,
                }))
            }
            false => None,
        };
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::FileDeclaration {
            identifier_list: identifier_list,
            subtype_indication: subtype,
            open_info: open_info,
        }))
    }

    fn parse_alias_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Alias)?;
        let designator = match self.peek() {
            VhdlToken::CharLiteral(_) | VhdlToken::StrLiteral(_) => self.take_terminal(),
            _ => self.expect_identifier()?,
        };
        let alias_designator = self.push(NodeKind::AliasDesignator {
            designator: designator,
        });
        let subtype = match self.accept_delim(&Delimiter::Colon) {
            true => Some(self.parse_subtype_indication()?),
            false => None,
        };
        self.expect_kw(&Keyword::Is)?;
        let name = self.parse_name()?;
        let signature = match self.peek_delim(&Delimiter::BrackL) {
            true => Some(self.parse_signature()?),
            false => None,
        };
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::AliasDeclaration {
            alias_designator: alias_designator,
            subtype_indication: subtype,
            name: name,
            signature: signature,
        }))
    }

    fn parse_attribute_declaration_or_specification(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Attribute)?;
        let identifier = self.expect_identifier()?;
        if self.accept_delim(&Delimiter::Colon) == true {
            let type_mark = self.parse_type_mark()?;
            self.expect_delim(&Delimiter::Terminator)?;
            return Ok(self.push(NodeKind::AttributeDeclaration {
                identifier: identifier,
                type_mark: type_mark,
            }));
        }
        self.expect_kw(&Keyword::Of)?;
        // entity specification: designators or `others`/`all`, then the class
        let mut entity_name_list = Vec::new();
        if self.peek_kw(&Keyword::Others) == true || self.peek_kw(&Keyword::All) == true {
            entity_name_list.push(self.take_terminal());
        } else {
            loop {
                let tag_val = match self.peek() {
                    VhdlToken::CharLiteral(_) | VhdlToken::StrLiteral(_) => self.take_terminal(),
                    _ => self.expect_identifier()?,
                };
                let tag = self.push(NodeKind::EntityTag { tag: tag_val });
                let signature = match self.peek_delim(&Delimiter::BrackL) {
                    true => Some(self.parse_signature()?),
                    false => None,
                };
                entity_name_list.push(self.push(NodeKind::EntityDesignator {
                    entity_tag: tag,
                    signature: signature,
                }));
                if self.accept_delim(&Delimiter::Comma) == false {
                    break;
                }
            }
        }
        self.expect_delim(&Delimiter::Colon)?;
        let class = self.take_terminal();
        let entity_class = self.push(NodeKind::EntityClass {
            entity_class: class,
        });
        let specification = self.push(NodeKind::EntitySpecification {
            entity_name_list: entity_name_list,
            entity_class: entity_class,
        });
        self.expect_kw(&Keyword::Is)?;
        let expression = self.parse_expression()?;
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::AttributeSpecification {
            designator: identifier,
            specification: specification,
            expression: expression,
        }))
    }

    fn parse_component_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Component)?;
        let identifier = self.expect_identifier()?;
        let is_token = self.accept_kw(&Keyword::Is);
        let local_generic_clause = match self.peek_kw(&Keyword::Generic) {
            true => Some(self.parse_generic_clause()?),
            false => None,
        };
        let local_port_clause = match self.peek_kw(&Keyword::Port) {
            true => Some(self.parse_port_clause()?),
            false => None,
        };
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Component)?;
        let component_simple_name = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::ComponentDeclaration {
            identifier: identifier,
            is_token: is_token,
            local_generic_clause: local_generic_clause,
            local_port_clause: local_port_clause,
            component_simple_name: component_simple_name,
        }))
    }

    // --- subprograms ---------------------------------------------------------

    fn parse_subprogram(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("subprogram_declaration");
        let pure = match self.peek_kw(&Keyword::Pure) || self.peek_kw(&Keyword::Impure) {
            true => Some(self.take_terminal()),
            false => None,
        };
        let is_function = self.peek_kw(&Keyword::Function);
        let kind = self.take_terminal();
        let designator_val = match self.peek() {
            VhdlToken::StrLiteral(_) => self.take_terminal(),
            _ => self.expect_identifier()?,
        };

        // `function f is new g ...` instantiates a generic subprogram
        if self.peek_kw(&Keyword::Is) == true && self.peek_at(1).check_keyword(&Keyword::New) == true
        {
            self.advance();
            self.advance();
            let name = self.parse_name()?;
            let signature = match self.peek_delim(&Delimiter::BrackL) {
                true => Some(self.parse_signature()?),
                false => None,
            };
            let generic_map_aspect = match self.peek_kw(&Keyword::Generic) {
                true => Some(self.parse_generic_map_aspect()?),
                false => None,
            };
            self.expect_delim(&Delimiter::Terminator)?;
            self.exit();
            return Ok(self.push(NodeKind::SubprogramInstantiationDeclaration {
                kind: kind,
                identifier: designator_val,
                name: name,
                signature: signature,
                generic_map_aspect: generic_map_aspect,
            }));
        }

        let designator = self.push(NodeKind::Designator {
            designator: designator_val,
        });
        let subprogram_header = match self.peek_kw(&Keyword::Generic) {
            true => Some(self.parse_subprogram_header()?),
            false => None,
        };
        let parameter = self.accept_kw(&Keyword::Parameter);
        let formal_parameter_list = match self.peek_delim(&Delimiter::ParenL) {
            true => self.parse_parameter_interface_list()?,
            false => Vec::new(),
        };
        let spec_inner = match is_function {
            true => {
                self.expect_kw(&Keyword::Return)?;
                let type_mark = self.parse_type_mark()?;
                self.push(NodeKind::FunctionSpecification {
                    pure: pure,
                    designator: designator,
                    subprogram_header: subprogram_header,
                    parameter: parameter,
                    formal_parameter_list: formal_parameter_list,
                    type_mark: type_mark,
                })
            }
            false => self.push(NodeKind::ProcedureSpecification {
                designator: designator,
                subprogram_header: subprogram_header,
                parameter: parameter,
                formal_parameter_list: formal_parameter_list,
            }),
        };
        let specification = self.push(NodeKind::SubprogramSpecification {
            specification: spec_inner,
        });

        if self.accept_delim(&Delimiter::Terminator) == true {
            self.exit();
            return Ok(self.push(NodeKind::SubprogramDeclaration {
                specification: specification,
            }));
        }
        self.expect_kw(&Keyword::Is)?;
        let mut declarative_part = Vec::new();
        while self.peek_kw(&Keyword::Begin) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["begin"]));
            }
            let item = self.parse_declaration()?;
            declarative_part.push(self.push(NodeKind::DeclarativeItem { item: item }));
        }
        self.expect_kw(&Keyword::Begin)?;
        let statement_part = self.parse_sequence_of_statements()?;
        self.expect_kw(&Keyword::End)?;
        let end_kind = match self.peek_kw(&Keyword::Function) || self.peek_kw(&Keyword::Procedure) {
            true => Some(self.take_terminal()),
            false => None,
        };
        let end_designator = match self.peek() {
            VhdlToken::Identifier(_) => {
                let id = self.expect_identifier()?;
                Some(self.push(NodeKind::Designator { designator: id }))
            }
            VhdlToken::StrLiteral(_) => {
                let t = self.take_terminal();
                Some(self.push(NodeKind::Designator { designator: t }))
            }
            _ => None,
        };
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::SubprogramBody {
            specification: specification,
            declarative_part: declarative_part,
            statement_part: statement_part,
            kind: end_kind,
            designator: end_designator,
        }))
    }

    fn parse_subprogram_header(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Generic)?;
        self.expect_delim(&Delimiter::ParenL)?;
        let mut elements = Vec::new();
        loop {
            elements.push(self.parse_generic_interface_element()?);
            if self.accept_delim(&Delimiter::Terminator) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        let generic_map = match self.peek_kw(&Keyword::Generic) {
            true => Some(self.parse_generic_map_aspect()?),
            false => None,
        };
        Ok(self.push(NodeKind::SubprogramHeader {
            elements: elements,
            generic_map: generic_map,
        }))
    }

    // --- interface lists -----------------------------------------------------

    pub(super) fn parse_generic_clause(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("generic_clause");
        self.expect_kw(&Keyword::Generic)?;
        self.expect_delim(&Delimiter::ParenL)?;
        let mut elements = Vec::new();
        loop {
            elements.push(self.parse_generic_interface_element()?);
            if self.accept_delim(&Delimiter::Terminator) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::GenericClause {
            interface_elements: elements,
        }))
    }

    pub(super) fn parse_port_clause(&mut self) -> Result<NodeId, VhdlError> {
        self.enter("port_clause");
        self.expect_kw(&Keyword::Port)?;
        self.expect_delim(&Delimiter::ParenL)?;
        let mut elements = Vec::new();
        loop {
            let declaration = self.parse_interface_signal_declaration()?;
            elements.push(self.push(NodeKind::PortInterfaceElement {
                port_declaration: declaration,
            }));
            if self.accept_delim(&Delimiter::Terminator) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::PortClause {
            interface_elements: elements,
        }))
    }

    fn parse_generic_interface_element(&mut self) -> Result<NodeId, VhdlError> {
        let declaration = if self.peek_kw(&Keyword::Type) == true {
            self.advance();
            let identifier = self.expect_identifier()?;
            self.push(NodeKind::InterfaceIncompleteTypeDeclaration {
                identifier: identifier,
            })
        } else if self.peek_kw(&Keyword::Package) == true {
            self.parse_interface_package_declaration()?
        } else if self.peek_kw(&Keyword::Function) == true
            || self.peek_kw(&Keyword::Procedure) == true
            || self.peek_kw(&Keyword::Pure) == true
            || self.peek_kw(&Keyword::Impure) == true
        {
            self.parse_interface_subprogram_declaration()?
        } else {
            self.parse_interface_constant_declaration()?
        };
        Ok(self.push(NodeKind::GenericInterfaceElement {
            generic_declaration: declaration,
        }))
    }

    fn parse_interface_constant_declaration(&mut self) -> Result<NodeId, VhdlError> {
        let constant = self.accept_kw(&Keyword::Constant);
        let identifier_list = self.parse_identifier_list()?;
        self.expect_delim(&Delimiter::Colon)?;
        let mode = self.parse_mode_opt();
        let subtype = self.parse_subtype_indication()?;
        let default = self.parse_default_expression()?;
        Ok(self.push(NodeKind::InterfaceConstantDeclaration {
            constant: constant,
            identifier_list: identifier_list,
            mode: mode,
            subtype_indication: subtype,
            default: default,
        }))
    }

    fn parse_interface_signal_declaration(&mut self) -> Result<NodeId, VhdlError> {
        let signal = self.accept_kw(&Keyword::Signal);
        let identifier_list = self.parse_identifier_list()?;
        self.expect_delim(&Delimiter::Colon)?;
        let mode = self.parse_mode_opt();
        let subtype = self.parse_subtype_indication()?;
        let bus = self.accept_kw(&Keyword::Bus);
        let default = self.parse_default_expression()?;
        Ok(self.push(NodeKind::InterfaceSignalDeclaration {
            signal: signal,
            identifier_list: identifier_list,
            mode: mode,
            subtype_indication: subtype,
            bus: bus,
            default: default,
        }))
    }

    fn parse_interface_variable_declaration(&mut self) -> Result<NodeId, VhdlError> {
        let variable = self.accept_kw(&Keyword::Variable);
        let identifier_list = self.parse_identifier_list()?;
        self.expect_delim(&Delimiter::Colon)?;
        let mode = self.parse_mode_opt();
        let subtype = self.parse_subtype_indication()?;
        let default = self.parse_default_expression()?;
        Ok(self.push(NodeKind::InterfaceVariableDeclaration {
            variable: variable,
            identifier_list: identifier_list,
            mode: mode,
            subtype_indication: subtype,
            default: default,
        }))
    }

    fn parse_interface_package_declaration(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Package)?;
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::Is)?;
        self.expect_kw(&Keyword::New)?;
        let uninstantiated_package_name = self.parse_name()?;
        self.expect_kw(&Keyword::Generic)?;
        self.expect_kw(&Keyword::Map)?;
        self.expect_delim(&Delimiter::ParenL)?;
        let aspect_inner = if self.peek_delim(&Delimiter::Box) == true {
            let t = self.take_terminal();
            self.expect_delim(&Delimiter::ParenR)?;
            t
        } else if self.peek_kw(&Keyword::Default) == true {
            let t = self.take_terminal();
            self.expect_delim(&Delimiter::ParenR)?;
            t
        } else {
            let list = self.parse_association_list()?;
            self.expect_delim(&Delimiter::ParenR)?;
            self.push(NodeKind::GenericMapAspect {
                association_list: list,
            })
        };
        let aspect = self.push(NodeKind::InterfacePackageGenericMapAspect {
            aspect: aspect_inner,
        });
        Ok(self.push(NodeKind::InterfacePackageDeclaration {
            identifier: identifier,
            uninstantiated_package_name: uninstantiated_package_name,
            interface_package_generic_map_aspect: aspect,
        }))
    }

    fn parse_interface_subprogram_declaration(&mut self) -> Result<NodeId, VhdlError> {
        let pure = match self.peek_kw(&Keyword::Pure) || self.peek_kw(&Keyword::Impure) {
            true => Some(self.take_terminal()),
            false => None,
        };
        let is_function = self.peek_kw(&Keyword::Function);
        if is_function == true {
            self.expect_kw(&Keyword::Function)?;
        } else {
            self.expect_kw(&Keyword::Procedure)?;
        }
        let designator_val = match self.peek() {
            VhdlToken::StrLiteral(_) => self.take_terminal(),
            _ => self.expect_identifier()?,
        };
        let designator = self.push(NodeKind::Designator {
            designator: designator_val,
        });
        let parameter = self.accept_kw(&Keyword::Parameter);
        let formal_parameter_list = match self.peek_delim(&Delimiter::ParenL) {
            true => self.parse_parameter_interface_list()?,
            false => Vec::new(),
        };
        let aspect_inner = match is_function {
            true => {
                self.expect_kw(&Keyword::Return)?;
                let type_mark = self.parse_type_mark()?;
                self.push(NodeKind::InterfaceFunctionSpecification {
                    pure: pure,
                    designator: designator,
                    parameter: parameter,
                    formal_parameter_list: formal_parameter_list,
                    type_mark: type_mark,
                })
            }
            false => self.push(NodeKind::InterfaceProcedureSpecification {
                designator: designator,
                parameter: parameter,
                formal_parameter_list: formal_parameter_list,
            }),
        };
        let specification = self.push(NodeKind::InterfaceSubprogramSpecification {
            aspect: aspect_inner,
        });
        let default = match self.accept_kw(&Keyword::Is) {
            Some(_) => {
                let name = if self.peek_delim(&Delimiter::Box) == true {
                    self.take_terminal()
                } else {
                    self.parse_name()?
                };
                Some(self.push(NodeKind::InterfaceSubprogramDefault { name: name }))
            }
            None => None,
        };
        Ok(self.push(NodeKind::InterfaceSubprogramDeclaration {
            interface_subprogram_specification: specification,
            interface_subprogram_default: default,
        }))
    }

    fn parse_parameter_interface_list(&mut self) -> Result<Vec<NodeId>, VhdlError> {
        self.expect_delim(&Delimiter::ParenL)?;
        let mut elements = Vec::new();
        loop {
            let declaration = if self.peek_kw(&Keyword::Signal) == true {
                self.parse_interface_signal_declaration()?
            } else if self.peek_kw(&Keyword::Variable) == true {
                self.parse_interface_variable_declaration()?
            } else if self.peek_kw(&Keyword::File) == true {
                self.advance();
                let identifier_list = self.parse_identifier_list()?;
                self.expect_delim(&Delimiter::Colon)?;
                let subtype = self.parse_subtype_indication()?;
                self.push(NodeKind::InterfaceFileDeclaration {
                    identifier_list: identifier_list,
                    subtype_indication: subtype,
                })
            } else {
                self.parse_interface_constant_declaration()?
            };
            elements.push(self.push(NodeKind::ParameterInterfaceElement {
                parameter_declaration: declaration,
            }));
            if self.accept_delim(&Delimiter::Terminator) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::ParenR)?;
        Ok(elements)
    }

    fn parse_mode_opt(&mut self) -> Option<NodeId> {
        let is_mode = match self.peek().as_keyword() {
            Some(kw) => match kw {
                Keyword::In
                | Keyword::Out
                | Keyword::Inout
                | Keyword::Buffer
                | Keyword::Linkage => true,
                _ => false,
            },
            None => false,
        };
        match is_mode {
            true => Some(self.take_terminal()),
            false => None,
        }
    }

    // --- subtype indications -------------------------------------------------

    /// Parses a type mark as a plain (possibly selected) name, leaving any
    /// parenthesized constraint for the caller.
    pub(super) fn parse_type_mark_name(&mut self) -> Result<NodeId, VhdlError> {
        let base = self.expect_identifier()?;
        let mut node = self.push(NodeKind::Name { name_val: base });
        while self.peek_delim(&Delimiter::Dot) == true {
            self.advance();
            let suffix_val = self.expect_identifier()?;
            let prefix = self.push(NodeKind::Prefix { name: node });
            let suffix = self.push(NodeKind::Suffix { name: suffix_val });
            let sel = self.push(NodeKind::SelectedName {
                prefix: prefix,
                suffix: suffix,
            });
            node = self.push(NodeKind::Name { name_val: sel });
        }
        Ok(node)
    }

    pub(super) fn parse_type_mark(&mut self) -> Result<NodeId, VhdlError> {
        let name = self.parse_type_mark_name()?;
        Ok(self.push(NodeKind::TypeMark { name: name }))
    }

    pub(super) fn parse_subtype_indication(&mut self) -> Result<NodeId, VhdlError> {
        // a parenthesized element resolution leads the type mark
        let resolution_indication = if self.peek_delim(&Delimiter::ParenL) == true {
            self.advance();
            let inner_name = self.parse_type_mark_name()?;
            self.expect_delim(&Delimiter::ParenR)?;
            let inner = self.push(NodeKind::ResolutionIndication { item: inner_name });
            let element = self.push(NodeKind::ElementResolution { item: inner });
            Some(self.push(NodeKind::ResolutionIndication { item: element }))
        } else {
            None
        };

        let first = self.parse_type_mark_name()?;
        let (resolution_indication, type_mark_name) = match resolution_indication {
            Some(r) => (Some(r), first),
            // two names in a row make the first a resolution function
            None => match self.is_identifier() {
                true => {
                    let second = self.parse_type_mark_name()?;
                    let res = self.push(NodeKind::ResolutionIndication { item: first });
                    (Some(res), second)
                }
                false => (None, first),
            },
        };
        let type_mark = self.push(NodeKind::TypeMark {
            name: type_mark_name,
        });

        let constraint = if self.peek_kw(&Keyword::Range) == true {
            self.advance();
            let range = self.parse_range()?;
            let range_constraint = self.push(NodeKind::RangeConstraint { range: range });
            Some(self.push(NodeKind::Constraint {
                constraint: range_constraint,
            }))
        } else if self.peek_delim(&Delimiter::ParenL) == true {
            let array = self.parse_array_constraint()?;
            Some(self.push(NodeKind::Constraint { constraint: array }))
        } else {
            None
        };

        Ok(self.push(NodeKind::SubtypeIndication {
            resolution_indication: resolution_indication,
            type_mark: type_mark,
            constraint: constraint,
        }))
    }

    fn parse_array_constraint(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_delim(&Delimiter::ParenL)?;
        let index_constraint = if self.peek_kw(&Keyword::Open) == true {
            let t = self.take_terminal();
            self.expect_delim(&Delimiter::ParenR)?;
            t
        } else {
            let mut ranges = Vec::new();
            loop {
                ranges.push(self.parse_discrete_range()?);
                if self.accept_delim(&Delimiter::Comma) == false {
                    break;
                }
            }
            self.expect_delim(&Delimiter::ParenR)?;
            self.push(NodeKind::IndexConstraint {
                discrete_ranges: ranges,
            })
        };
        let array_element_constraint = match self.peek_delim(&Delimiter::ParenL) {
            true => {
                let nested = self.parse_array_constraint()?;
                Some(self.push(NodeKind::ArrayElementConstraint {
                    element_constraint: nested,
                }))
            }
            false => None,
        };
        Ok(self.push(NodeKind::ArrayConstraint {
            index_constraint: index_constraint,
            array_element_constraint: array_element_constraint,
        }))
    }

    // --- association aspects -------------------------------------------------

    pub(super) fn parse_generic_map_aspect(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Generic)?;
        self.expect_kw(&Keyword::Map)?;
        self.expect_delim(&Delimiter::ParenL)?;
        let association_list = self.parse_association_list()?;
        self.expect_delim(&Delimiter::ParenR)?;
        Ok(self.push(NodeKind::GenericMapAspect {
            association_list: association_list,
        }))
    }

    pub(super) fn parse_port_map_aspect(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Port)?;
        self.expect_kw(&Keyword::Map)?;
        self.expect_delim(&Delimiter::ParenL)?;
        let association_list = self.parse_association_list()?;
        self.expect_delim(&Delimiter::ParenR)?;
        Ok(self.push(NodeKind::PortMapAspect {
            association_list: association_list,
        }))
    }

    pub(super) fn parse_association_list(&mut self) -> Result<Vec<NodeId>, VhdlError> {
        let mut list = Vec::new();
        loop {
            list.push(self.parse_association_element()?);
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        Ok(list)
    }

    fn parse_association_element(&mut self) -> Result<NodeId, VhdlError> {
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
        let designator = if self.peek_kw(&Keyword::Open) == true {
            let open = self.take_terminal();
            self.push(NodeKind::ActualDesignator {
                inertial: None,
                actual: open,
            })
        } else {
            let inertial = self.accept_kw(&Keyword::Inertial);
            let expr = self.parse_expression()?;
            self.push(NodeKind::ActualDesignator {
                inertial: inertial,
                actual: expr,
            })
        };
        let part = self.push(NodeKind::ActualPart { actual: designator });
        Ok(self.push(NodeKind::AssociationElement {
            formal: formal,
            actual: part,
        }))
    }
}
