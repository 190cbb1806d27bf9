use super::node::{NodeId, NodeKind};
use super::Cst;

impl Cst {
    /// Formats the optional node with the given affixes, or produces nothing.
    fn f_opt(&self, id: &Option<NodeId>, pre: &str, post: &str) -> String {
        match id {
            Some(id) => {
                let s = self.format(*id);
                match s.is_empty() {
                    true => String::new(),
                    false => format!("{}{}{}", pre, s, post),
                }
            }
            None => String::new(),
        }
    }

    /// Formats a separated list with the given affixes, or produces nothing
    /// when the list is empty.
    fn f_list(&self, ids: &[NodeId], pre: &str, sep: &str, post: &str) -> String {
        if ids.is_empty() == true {
            return String::new();
        }
        let body = ids
            .iter()
            .map(|id| self.format(*id))
            .collect::<Vec<String>>()
            .join(sep);
        match body.is_empty() {
            true => String::new(),
            false => format!("{}{}{}", pre, body, post),
        }
    }

    /// Renders the subtree at `id` back into VHDL source text.
    ///
    /// The rendering is deterministic and total: keywords come out lowercase,
    /// optional punctuation appears exactly when its field is present, and
    /// re-tokenizing the result reproduces the token stream of the original
    /// source.
    pub fn format(&self, id: NodeId) -> String {
        match self.get(id) {
            NodeKind::Terminal(t) => t.as_str().to_string(),
            // a tree still carrying alternatives renders its first derivation
            NodeKind::Ambig { alternatives } => match alternatives.first() {
                Some(first) => self.format(*first),
                None => String::new(),
            },
            NodeKind::UnsupportedUnit { tokens } => self.f_list(tokens, "", " ", ""),
            NodeKind::ExtendedIdentifier { id } => self.format(*id),
            NodeKind::Identifier { id } => self.format(*id),
            NodeKind::CharacterLiteral { char } => self.format(*char),
            NodeKind::StringLiteral { string } => self.format(*string),
            NodeKind::BitStringLiteral { literal } => self.format(*literal),
            NodeKind::DecimalLiteral { value } => self.format(*value),
            NodeKind::BasedLiteral { value } => self.format(*value),
            NodeKind::AbstractLiteral { abstract_literal } => self.format(*abstract_literal),
            NodeKind::PhysicalLiteral {
                abstract_literal,
                unit_name,
            } => format!(
                "{}{}",
                self.f_opt(abstract_literal, "", " "),
                self.format(*unit_name)
            ),
            NodeKind::NumericLiteral { numeric_literal } => self.format(*numeric_literal),
            NodeKind::Literal { item } => self.format(*item),
            NodeKind::EnumerationLiteral { literal } => self.format(*literal),
            NodeKind::FunctionCall { name, parameters } => format!(
                "{}{}",
                self.format(*name),
                self.f_list(parameters, "(", ", ", ")")
            ),
            NodeKind::QualifiedExpression {
                type_mark,
                expression,
            } => match self.get(*expression) {
                NodeKind::Expression { .. } => format!(
                    "{}'({})",
                    self.format(*type_mark),
                    self.format(*expression)
                ),
                _ => format!("{}'{}", self.format(*type_mark), self.format(*expression)),
            },
            NodeKind::Allocator { allocator } => format!("new {}", self.format(*allocator)),
            NodeKind::Primary { item } => match self.get(*item) {
                // parentheses preserve precedence when a full expression nests
                NodeKind::Expression { .. } => format!("({})", self.format(*item)),
                _ => self.format(*item),
            },
            NodeKind::Factor {
                factor_op,
                primary,
                exponent,
            } => match factor_op {
                Some(op) => format!("{} {}", self.format(*op), self.format(*primary)),
                None => format!(
                    "{}{}",
                    self.format(*primary),
                    self.f_opt(exponent, "**", "")
                ),
            },
            NodeKind::TermOp { op, factor } => {
                format!("{} {}", self.format(*op), self.format(*factor))
            }
            NodeKind::Term { factor, ops } => format!(
                "{}{}",
                self.format(*factor),
                self.f_list(ops, " ", " ", "")
            ),
            NodeKind::SimpleExpressionOp { op, term } => {
                format!("{} {}", self.format(*op), self.format(*term))
            }
            NodeKind::SimpleExpression { sign, term, ops } => format!(
                "{}{}{}",
                self.f_opt(sign, "", ""),
                self.format(*term),
                self.f_list(ops, " ", " ", "")
            ),
            NodeKind::ShiftExpression {
                expr1,
                shift_op,
                expr2,
            } => format!(
                "{}{}{}",
                self.format(*expr1),
                self.f_opt(shift_op, " ", ""),
                self.f_opt(expr2, " ", "")
            ),
            NodeKind::Relation {
                expr1,
                rel_op,
                expr2,
            } => format!(
                "{}{}{}",
                self.format(*expr1),
                self.f_opt(rel_op, " ", ""),
                self.f_opt(expr2, " ", "")
            ),
            NodeKind::LogicalExpression { logical_tokens } => {
                self.f_list(logical_tokens, "", " ", "")
            }
            NodeKind::Expression {
                conditional,
                expression,
            } => format!(
                "{}{}",
                self.f_opt(conditional, "", " "),
                self.format(*expression)
            ),
            NodeKind::RangeLiteral {
                left,
                direction,
                right,
            } => format!(
                "{} {} {}",
                self.format(*left),
                self.format(*direction),
                self.format(*right)
            ),
            NodeKind::DiscreteRange { range } => self.format(*range),
            NodeKind::Choice { choice } => self.format(*choice),
            NodeKind::Choices { choices } => self.f_list(choices, "", " | ", ""),
            NodeKind::ElementAssociation {
                choices,
                expression,
            } => format!(
                "{}{}",
                self.f_opt(choices, "", " => "),
                self.format(*expression)
            ),
            NodeKind::Aggregate {
                element_associations,
            } => self.f_list(element_associations, "(", ", ", ")"),
            NodeKind::IndexedName {
                prefix,
                expressions,
            } => format!(
                "{}{}",
                self.format(*prefix),
                self.f_list(expressions, "(", ", ", ")")
            ),
            NodeKind::AttributeName {
                prefix,
                signature,
                attribute_designator,
                expression,
            } => format!(
                "{}{}'{}{}",
                self.format(*prefix),
                self.f_opt(signature, "", ""),
                self.format(*attribute_designator),
                self.f_opt(expression, "(", ")")
            ),
            NodeKind::SliceName {
                prefix,
                discrete_range,
            } => format!(
                "{}({})",
                self.format(*prefix),
                self.format(*discrete_range)
            ),
            NodeKind::Name { name_val } => self.format(*name_val),
            NodeKind::Prefix { name } => self.format(*name),
            NodeKind::Suffix { name } => self.format(*name),
            NodeKind::SelectedName { prefix, suffix } => {
                format!("{}.{}", self.format(*prefix), self.format(*suffix))
            }
            NodeKind::TypeMark { name } => self.format(*name),
            NodeKind::Signature { types, return_type } => format!(
                "[{}{}]",
                self.f_list(
                    types,
                    "",
                    ", ",
                    match return_type.is_some() {
                        true => " ",
                        false => "",
                    }
                ),
                self.f_opt(return_type, "return ", "")
            ),
            NodeKind::RecordElementResolution {
                record_element_simple_name,
                resolution_indication,
            } => format!(
                "{} {}",
                self.format(*record_element_simple_name),
                self.format(*resolution_indication)
            ),
            NodeKind::RecordResolution { items } => self.f_list(items, "", ", ", ""),
            NodeKind::ElementResolution { item } => self.format(*item),
            NodeKind::ResolutionIndication { item } => match self.get(*item) {
                NodeKind::Name { .. } => self.format(*item),
                _ => format!("({})", self.format(*item)),
            },
            NodeKind::SubtypeIndication {
                resolution_indication,
                type_mark,
                constraint,
            } => format!(
                "{}{}{}",
                self.f_opt(resolution_indication, "", " "),
                self.format(*type_mark),
                self.f_opt(constraint, "", "")
            ),
            NodeKind::RangeConstraint { range } => format!(" range {}", self.format(*range)),
            NodeKind::IndexConstraint { discrete_ranges } => {
                self.f_list(discrete_ranges, "(", ", ", ")")
            }
            NodeKind::RecordElementConstraint {
                record_element_simple_name,
                constraint,
            } => format!(
                "{} {}",
                self.format(*record_element_simple_name),
                self.format(*constraint)
            ),
            NodeKind::RecordConstraint {
                record_element_constraints,
            } => self.f_list(record_element_constraints, "(", ", ", ")"),
            NodeKind::ArrayElementConstraint { element_constraint } => {
                self.format(*element_constraint)
            }
            NodeKind::ArrayConstraint {
                index_constraint,
                array_element_constraint,
            } => format!(
                "{}{}",
                match self.get(*index_constraint) {
                    NodeKind::Terminal(t) => format!("({})", t.as_str()),
                    _ => self.format(*index_constraint),
                },
                self.f_opt(array_element_constraint, "", "")
            ),
            NodeKind::Constraint { constraint } => self.format(*constraint),
            NodeKind::EnumerationTypeDefinition { literals } => {
                self.f_list(literals, "(", ", ", ")")
            }
            NodeKind::RangeTypeDefinition { range } => format!("range {}", self.format(*range)),
            NodeKind::SecondaryUnitDeclaration {
                identifier,
                literal,
            } => format!(
                "{} = {};",
                self.format(*identifier),
                self.format(*literal)
            ),
            NodeKind::PhysicalTypeDefinition {
                range,
                primary_unit,
                secondary_units,
                units_simple_name,
            } => format!(
                "range {} units\n{};\n{}end units{}",
                self.format(*range),
                self.format(*primary_unit),
                self.f_list(secondary_units, "", "\n", "\n"),
                self.f_opt(units_simple_name, " ", "")
            ),
            NodeKind::ScalarTypeDefinition { definition } => self.format(*definition),
            NodeKind::IndexSubtypeDefinition { type_mark } => {
                format!("{} range <>", self.format(*type_mark))
            }
            NodeKind::UnboundedArrayDefinition {
                definition,
                subtype_indication,
            } => format!(
                "array ({}) of {}",
                self.f_list(definition, "", ", ", ""),
                self.format(*subtype_indication)
            ),
            NodeKind::ConstrainedArrayDefinition {
                index_constraint,
                subtype_indication,
            } => format!(
                "array{} of {}",
                self.format(*index_constraint),
                self.format(*subtype_indication)
            ),
            NodeKind::ArrayTypeDefinition { definition } => self.format(*definition),
            NodeKind::ElementDeclaration {
                identifiers,
                subtype_indication,
            } => format!(
                "{}: {};",
                self.f_list(identifiers, "", ", ", ""),
                self.format(*subtype_indication)
            ),
            NodeKind::RecordTypeDefinition {
                declarations,
                record_type_simple_name,
            } => format!(
                "record\n{}\nend record{}",
                self.f_list(declarations, "", "\n", ""),
                self.f_opt(record_type_simple_name, " ", "")
            ),
            NodeKind::CompositeTypeDefinition { definition } => self.format(*definition),
            NodeKind::AccessTypeDefinition { subtype_indication } => {
                format!("access {}", self.format(*subtype_indication))
            }
            NodeKind::FileTypeDefinition { type_mark } => {
                format!("file of {}", self.format(*type_mark))
            }
            NodeKind::ProtectedTypeDeclarativeItem { item } => self.format(*item),
            NodeKind::ProtectedTypeDeclaration {
                declarative_part,
                simple_name,
            } => format!(
                "protected\n{}end protected{}",
                self.f_list(declarative_part, "", "\n", "\n"),
                self.f_opt(simple_name, " ", "")
            ),
            NodeKind::ProtectedTypeBody {
                declarative_part,
                simple_name,
            } => format!(
                "protected body\n{}end protected body{}",
                self.f_list(declarative_part, "", "\n", "\n"),
                self.f_opt(simple_name, " ", "")
            ),
            NodeKind::ProtectedTypeDefinition { definition } => self.format(*definition),
            NodeKind::TypeDefinition { definition } => self.format(*definition),
            NodeKind::SubtypeDeclaration {
                identifier,
                subtype_indication,
            } => format!(
                "subtype {} is {};",
                self.format(*identifier),
                self.format(*subtype_indication)
            ),
            NodeKind::FullTypeDeclaration {
                identifier,
                type_definition,
            } => format!(
                "type {} is {};",
                self.format(*identifier),
                self.format(*type_definition)
            ),
            NodeKind::IncompleteTypeDeclaration { identifier } => {
                format!("type {};", self.format(*identifier))
            }
            NodeKind::TypeDeclaration { declaration } => self.format(*declaration),
            NodeKind::ConstantDeclaration {
                identifiers,
                subtype_indication,
                default,
            } => format!(
                "constant {} : {}{};",
                self.f_list(identifiers, "", ", ", ""),
                self.format(*subtype_indication),
                self.f_opt(default, " := ", "")
            ),
            NodeKind::SignalDeclaration {
                identifiers,
                subtype_indication,
                kind,
                default,
            } => format!(
                "signal {} : {}{}{};",
                self.f_list(identifiers, "", ", ", ""),
                self.format(*subtype_indication),
                self.f_opt(kind, " ", ""),
                self.f_opt(default, " := ", "")
            ),
            NodeKind::VariableDeclaration {
                shared,
                identifiers,
                subtype_indication,
                default,
            } => format!(
                "{}variable {} : {}{};",
                self.f_opt(shared, "", " "),
                self.f_list(identifiers, "", ", ", ""),
                self.format(*subtype_indication),
                self.f_opt(default, " := ", "")
            ),
            NodeKind::FileOpenInformation { open_kind, name } => format!(
                "{}is {}",
                self.f_opt(open_kind, "open ", " "),
                self.format(*name)
            ),
            NodeKind::FileDeclaration {
                identifier_list,
                subtype_indication,
                open_info,
            } => format!(
                "file {} : {}{};",
                self.f_list(identifier_list, "", ", ", ""),
                self.format(*subtype_indication),
                self.f_opt(open_info, " ", "")
            ),
            NodeKind::AliasDesignator { designator } => self.format(*designator),
            NodeKind::AliasDeclaration {
                alias_designator,
                subtype_indication,
                name,
                signature,
            } => format!(
                "alias {}{} is {}{};",
                self.format(*alias_designator),
                self.f_opt(subtype_indication, " : ", ""),
                self.format(*name),
                self.f_opt(signature, "", "")
            ),
            NodeKind::AttributeDeclaration {
                identifier,
                type_mark,
            } => format!(
                "attribute {} : {};",
                self.format(*identifier),
                self.format(*type_mark)
            ),
            NodeKind::EntityTag { tag } => self.format(*tag),
            NodeKind::EntityDesignator {
                entity_tag,
                signature,
            } => format!(
                "{}{}",
                self.format(*entity_tag),
                self.f_opt(signature, "", "")
            ),
            NodeKind::EntityClass { entity_class } => self.format(*entity_class),
            NodeKind::EntitySpecification {
                entity_name_list,
                entity_class,
            } => format!(
                "{} : {}",
                self.f_list(entity_name_list, "", ", ", ""),
                self.format(*entity_class)
            ),
            NodeKind::AttributeSpecification {
                designator,
                specification,
                expression,
            } => format!(
                "attribute {} of {} is {};",
                self.format(*designator),
                self.format(*specification),
                self.format(*expression)
            ),
            NodeKind::ComponentDeclaration {
                identifier,
                is_token,
                local_generic_clause,
                local_port_clause,
                component_simple_name,
            } => format!(
                "component {}{}\n{}{}end component{};\n",
                self.format(*identifier),
                self.f_opt(is_token, " ", ""),
                self.f_opt(local_generic_clause, "", "\n"),
                self.f_opt(local_port_clause, "", "\n"),
                self.f_opt(component_simple_name, " ", "")
            ),
            NodeKind::InterfaceSignalDeclaration {
                signal,
                identifier_list,
                mode,
                subtype_indication,
                bus,
                default,
            } => format!(
                "{}{} : {}{}{}{}",
                self.f_opt(signal, "", " "),
                self.f_list(identifier_list, "", ", ", ""),
                self.f_opt(mode, "", " "),
                self.format(*subtype_indication),
                self.f_opt(bus, " ", ""),
                self.f_opt(default, " := ", "")
            ),
            NodeKind::InterfaceVariableDeclaration {
                variable,
                identifier_list,
                mode,
                subtype_indication,
                default,
            } => format!(
                "{}{} : {}{}{}",
                self.f_opt(variable, "", " "),
                self.f_list(identifier_list, "", ", ", ""),
                self.f_opt(mode, "", " "),
                self.format(*subtype_indication),
                self.f_opt(default, " := ", "")
            ),
            NodeKind::InterfaceConstantDeclaration {
                constant,
                identifier_list,
                mode,
                subtype_indication,
                default,
            } => format!(
                "{}{} : {}{}{}",
                self.f_opt(constant, "", " "),
                self.f_list(identifier_list, "", ", ", ""),
                self.f_opt(mode, "", " "),
                self.format(*subtype_indication),
                self.f_opt(default, " := ", "")
            ),
            NodeKind::InterfaceFileDeclaration {
                identifier_list,
                subtype_indication,
            } => format!(
                "file {} : {}",
                self.f_list(identifier_list, "", ", ", ""),
                self.format(*subtype_indication)
            ),
            NodeKind::InterfaceIncompleteTypeDeclaration { identifier } => {
                format!("type {}", self.format(*identifier))
            }
            NodeKind::InterfacePackageGenericMapAspect { aspect } => match self.get(*aspect) {
                NodeKind::Terminal(t) => format!("generic map ({})", t.as_str()),
                _ => self.format(*aspect),
            },
            NodeKind::InterfacePackageDeclaration {
                identifier,
                uninstantiated_package_name,
                interface_package_generic_map_aspect,
            } => format!(
                "package {} is new {} {}",
                self.format(*identifier),
                self.format(*uninstantiated_package_name),
                self.format(*interface_package_generic_map_aspect)
            ),
            NodeKind::InterfaceProcedureSpecification {
                designator,
                parameter,
                formal_parameter_list,
            } => format!(
                "procedure {}{}{}",
                self.format(*designator),
                self.f_opt(parameter, " ", ""),
                self.f_list(formal_parameter_list, " (", "; ", ")")
            ),
            NodeKind::InterfaceFunctionSpecification {
                pure,
                designator,
                parameter,
                formal_parameter_list,
                type_mark,
            } => format!(
                "{}function {}{}{} return {}",
                self.f_opt(pure, "", " "),
                self.format(*designator),
                self.f_opt(parameter, " ", ""),
                self.f_list(formal_parameter_list, " (", "; ", ")"),
                self.format(*type_mark)
            ),
            NodeKind::InterfaceSubprogramSpecification { aspect } => self.format(*aspect),
            NodeKind::InterfaceSubprogramDefault { name } => self.format(*name),
            NodeKind::InterfaceSubprogramDeclaration {
                interface_subprogram_specification,
                interface_subprogram_default,
            } => format!(
                "{}{}",
                self.format(*interface_subprogram_specification),
                self.f_opt(interface_subprogram_default, " is ", "")
            ),
            NodeKind::GenericInterfaceElement {
                generic_declaration,
            } => self.format(*generic_declaration),
            NodeKind::ParameterInterfaceElement {
                parameter_declaration,
            } => self.format(*parameter_declaration),
            NodeKind::PortInterfaceElement { port_declaration } => {
                self.format(*port_declaration)
            }
            NodeKind::GenericClause { interface_elements } => format!(
                "generic (\n{}\n);",
                self.f_list(interface_elements, "", ";\n", "")
            ),
            NodeKind::PortClause { interface_elements } => format!(
                "port (\n{}\n);",
                self.f_list(interface_elements, "", ";\n", "")
            ),
            NodeKind::FormalPart { formal } => self.format(*formal),
            NodeKind::ActualDesignator { inertial, actual } => format!(
                "{}{}",
                self.f_opt(inertial, "", " "),
                self.format(*actual)
            ),
            NodeKind::ActualPart { actual } => self.format(*actual),
            NodeKind::AssociationElement { formal, actual } => format!(
                "{}{}",
                self.f_opt(formal, "", " => "),
                self.format(*actual)
            ),
            NodeKind::GenericMapAspect { association_list } => format!(
                "generic map (\n{}\n)",
                self.f_list(association_list, "", ",\n", "")
            ),
            NodeKind::PortMapAspect { association_list } => format!(
                "port map (\n{}\n)",
                self.f_list(association_list, "", ",\n", "")
            ),
            NodeKind::Designator { designator } => self.format(*designator),
            NodeKind::SubprogramHeader {
                elements,
                generic_map,
            } => format!(
                "generic({}){}",
                self.f_list(elements, "", "; ", ""),
                self.f_opt(generic_map, " ", "")
            ),
            NodeKind::ProcedureSpecification {
                designator,
                subprogram_header,
                parameter,
                formal_parameter_list,
            } => format!(
                "procedure {}{}{}{}",
                self.format(*designator),
                self.f_opt(subprogram_header, " ", ""),
                self.f_opt(parameter, " ", ""),
                self.f_list(formal_parameter_list, " (", "; ", ")")
            ),
            NodeKind::FunctionSpecification {
                pure,
                designator,
                subprogram_header,
                parameter,
                formal_parameter_list,
                type_mark,
            } => format!(
                "{}function {}{}{}{} return {}",
                self.f_opt(pure, "", " "),
                self.format(*designator),
                self.f_opt(subprogram_header, " ", ""),
                self.f_opt(parameter, " ", ""),
                self.f_list(formal_parameter_list, " (", "; ", ")"),
                self.format(*type_mark)
            ),
            NodeKind::SubprogramSpecification { specification } => self.format(*specification),
            NodeKind::SubprogramDeclaration { specification } => {
                format!("{};", self.format(*specification))
            }
            NodeKind::SubprogramBody {
                specification,
                declarative_part,
                statement_part,
                kind,
                designator,
            } => format!(
                "{} is\n{}begin\n{}end{}{};",
                self.format(*specification),
                self.f_list(declarative_part, "", "\n", "\n"),
                self.f_list(statement_part, "", "\n", "\n"),
                self.f_opt(kind, " ", ""),
                self.f_opt(designator, " ", "")
            ),
            NodeKind::SubprogramInstantiationDeclaration {
                kind,
                identifier,
                name,
                signature,
                generic_map_aspect,
            } => format!(
                "{} {} is new {}{}{};",
                self.format(*kind),
                self.format(*identifier),
                self.format(*name),
                self.f_opt(signature, "", ""),
                self.f_opt(generic_map_aspect, " ", "")
            ),
            NodeKind::WaveformElement { value, time } => format!(
                "{}{}",
                self.format(*value),
                self.f_opt(time, " after ", "")
            ),
            NodeKind::Waveform { elements } => self.f_list(elements, "", ", ", ""),
            NodeKind::Target { target } => self.format(*target),
            NodeKind::DelayMechanism {
                time_expression,
                mechanism,
            } => match time_expression {
                Some(t) => format!("reject {} {}", self.format(*t), self.format(*mechanism)),
                None => self.format(*mechanism),
            },
            NodeKind::SimpleWaveformAssignment {
                target,
                delay,
                waveform,
            } => format!(
                "{} <= {}{};",
                self.format(*target),
                self.f_opt(delay, "", " "),
                self.format(*waveform)
            ),
            NodeKind::SimpleForceAssignment {
                target,
                force_mode,
                expression,
            } => format!(
                "{} <= force {}{};",
                self.format(*target),
                self.f_opt(force_mode, "", " "),
                self.format(*expression)
            ),
            NodeKind::SimpleReleaseAssignment { target, force_mode } => format!(
                "{} <= release{};",
                self.format(*target),
                self.f_opt(force_mode, " ", "")
            ),
            NodeKind::SimpleSignalAssignment { item } => self.format(*item),
            NodeKind::SignalAssignmentStatement { label, assignment } => format!(
                "{}{}",
                self.f_opt(label, "", ": "),
                self.format(*assignment)
            ),
            NodeKind::SimpleVariableAssignment { target, expression } => format!(
                "{} := {};",
                self.format(*target),
                self.format(*expression)
            ),
            NodeKind::VariableAssignmentStatement { label, assignment } => format!(
                "{}{}",
                self.f_opt(label, "", ": "),
                self.format(*assignment)
            ),
            NodeKind::ElsifBranch {
                condition,
                statements,
            } => format!(
                "elsif {} then\n{}",
                self.format(*condition),
                self.f_list(statements, "", "\n", "")
            ),
            NodeKind::IfStatement {
                label,
                condition,
                if_branch_statements,
                elsif_branches,
                else_token,
                else_branch_statements,
                label_end,
            } => format!(
                "{}if {} then\n{}{}{}{}end if{};",
                self.f_opt(label, "", ": "),
                self.format(*condition),
                self.f_list(if_branch_statements, "", "\n", "\n"),
                self.f_list(elsif_branches, "", "\n", "\n"),
                self.f_opt(else_token, "", "\n"),
                self.f_list(else_branch_statements, "", "\n", "\n"),
                self.f_opt(label_end, " ", "")
            ),
            NodeKind::CaseStatementAlternative {
                choices,
                statements,
            } => format!(
                "when {} =>{}",
                self.format(*choices),
                self.f_list(statements, "\n", "\n", "")
            ),
            NodeKind::CaseStatement {
                label,
                qmark,
                expression,
                alternatives,
                qmark_end,
                label_end,
            } => format!(
                "{}case{} {} is\n{}end case{}{};",
                self.f_opt(label, "", ": "),
                self.f_opt(qmark, "", ""),
                self.format(*expression),
                self.f_list(alternatives, "", "\n", "\n"),
                self.f_opt(qmark_end, "", ""),
                self.f_opt(label_end, " ", "")
            ),
            NodeKind::ConditionClause { condition } => {
                format!("until {}", self.format(*condition))
            }
            NodeKind::WaitStatement {
                label,
                sensitivity_clause,
                condition_clause,
                timeout_clause,
            } => format!(
                "{}wait{}{}{};",
                self.f_opt(label, "", ": "),
                self.f_list(sensitivity_clause, " on ", ", ", ""),
                self.f_opt(condition_clause, " ", ""),
                self.f_opt(timeout_clause, " for ", "")
            ),
            NodeKind::Assertion {
                condition,
                report,
                severity,
            } => format!(
                "assert {}{}{}",
                self.format(*condition),
                self.f_opt(report, "\nreport ", ""),
                self.f_opt(severity, "\nseverity ", "")
            ),
            NodeKind::AssertionStatement { label, assertion } => format!(
                "{}{};",
                self.f_opt(label, "", ": "),
                self.format(*assertion)
            ),
            NodeKind::ReportStatement {
                label,
                expression,
                severity,
            } => format!(
                "{}report {}{};",
                self.f_opt(label, "", ": "),
                self.format(*expression),
                self.f_opt(severity, " severity ", "")
            ),
            NodeKind::ProcedureCall {
                procedure_name,
                actual_parameter_part,
            } => format!(
                "{}{}",
                self.format(*procedure_name),
                self.f_list(actual_parameter_part, "(", ", ", ")")
            ),
            NodeKind::ProcedureCallStatement {
                label,
                procedure_call,
            } => format!(
                "{}{};",
                self.f_opt(label, "", ": "),
                self.format(*procedure_call)
            ),
            NodeKind::ReturnStatement { label, expression } => format!(
                "{}return{};",
                self.f_opt(label, "", ": "),
                self.f_opt(expression, " ", "")
            ),
            NodeKind::ParameterSpecification {
                identifier,
                discrete_range,
            } => format!(
                "{} in {}",
                self.format(*identifier),
                self.format(*discrete_range)
            ),
            NodeKind::IterationScheme { spec } => match self.get(*spec) {
                NodeKind::Expression { .. } => format!("while {}", self.format(*spec)),
                _ => format!("for {}", self.format(*spec)),
            },
            NodeKind::LoopStatement {
                loop_label,
                iteration_scheme,
                sequence_of_statements,
                loop_label_end,
            } => format!(
                "{}{}loop\n{}end loop{};",
                self.f_opt(loop_label, "", ": "),
                self.f_opt(iteration_scheme, "", " "),
                self.f_list(sequence_of_statements, "", "\n", "\n"),
                self.f_opt(loop_label_end, " ", "")
            ),
            NodeKind::ExitStatement {
                label,
                loop_label,
                condition,
            } => format!(
                "{}exit{}{};",
                self.f_opt(label, "", ": "),
                self.f_opt(loop_label, " ", ""),
                self.f_opt(condition, " when ", "")
            ),
            NodeKind::NextStatement {
                label,
                loop_label,
                condition,
            } => format!(
                "{}next{}{};",
                self.f_opt(label, "", ": "),
                self.f_opt(loop_label, " ", ""),
                self.f_opt(condition, " when ", "")
            ),
            NodeKind::NullStatement { label } => {
                format!("{}null;", self.f_opt(label, "", ": "))
            }
            NodeKind::SequentialStatement { item } => self.format(*item),
            NodeKind::ProcessSensitivityList { list } => self.f_list(list, "", ", ", ""),
            NodeKind::ProcessStatement {
                process_label,
                postponed,
                process_sensitivity_list,
                is_token,
                process_declarative_part,
                process_statement_part,
                postponed_end,
                process_label_end,
            } => format!(
                "{}{}process{}{}\n{}begin\n{}end{} process{};",
                self.f_opt(process_label, "", ": "),
                self.f_opt(postponed, "", " "),
                self.f_opt(process_sensitivity_list, "(", ")"),
                self.f_opt(is_token, " ", ""),
                self.f_list(process_declarative_part, "", "\n", "\n"),
                self.f_list(process_statement_part, "", "\n", "\n"),
                self.f_opt(postponed_end, " ", ""),
                self.f_opt(process_label_end, " ", "")
            ),
            NodeKind::SelectedWaveformPair { waveform, choices } => format!(
                "{} when {}",
                self.format(*waveform),
                self.format(*choices)
            ),
            NodeKind::SelectedWaveforms { selections } => {
                self.f_list(selections, "", ",\n", "")
            }
            NodeKind::ConcurrentSelectedSignalAssignment {
                expression,
                qmark,
                target,
                guarded,
                delay_mechanism,
                selected_waveforms,
            } => format!(
                "with {} select{}\n{} <= {}{}\n{};",
                self.format(*expression),
                self.f_opt(qmark, " ", ""),
                self.format(*target),
                self.f_opt(guarded, "", " "),
                self.f_opt(delay_mechanism, "", " "),
                self.format(*selected_waveforms)
            ),
            NodeKind::ConditionalWaveformPair {
                waveform,
                condition,
            } => format!(
                "{} when {}",
                self.format(*waveform),
                self.format(*condition)
            ),
            NodeKind::ConditionalWaveforms {
                pairs,
                else_waveform,
            } => format!(
                "{}{}",
                self.f_list(pairs, "", " else ", ""),
                self.f_opt(else_waveform, " else ", "")
            ),
            NodeKind::ConcurrentConditionalSignalAssignment {
                target,
                guarded,
                delay_mechanism,
                conditional_waveforms,
            } => format!(
                "{} <= {}{}{};",
                self.format(*target),
                self.f_opt(guarded, "", " "),
                self.f_opt(delay_mechanism, "", " "),
                self.format(*conditional_waveforms)
            ),
            NodeKind::ConcurrentSimpleSignalAssignment {
                target,
                guarded,
                delay_mechanism,
                waveform,
            } => format!(
                "{} <= {}{}{};",
                self.format(*target),
                self.f_opt(guarded, "", " "),
                self.f_opt(delay_mechanism, "", " "),
                self.format(*waveform)
            ),
            NodeKind::ConcurrentSignalAssignmentStatement {
                label,
                postponed,
                assignment,
            } => format!(
                "{}{}{}",
                self.f_opt(label, "", ": "),
                self.f_opt(postponed, "", " "),
                self.format(*assignment)
            ),
            NodeKind::InstantiatedComponent {
                component_token,
                component_name,
            } => format!(
                "{}{}",
                self.f_opt(component_token, "", " "),
                self.format(*component_name)
            ),
            NodeKind::InstantiatedEntity {
                entity_name,
                architecture_identifier,
            } => format!(
                "entity {}{}",
                self.format(*entity_name),
                self.f_opt(architecture_identifier, "(", ")")
            ),
            NodeKind::InstantiatedConfiguration { configuration_name } => {
                format!("configuration {}", self.format(*configuration_name))
            }
            NodeKind::ComponentInstantiationStatement {
                label,
                unit,
                generic_map,
                port_map,
            } => format!(
                "{}: {}{}{};",
                self.format(*label),
                self.format(*unit),
                self.f_opt(generic_map, "\n", ""),
                self.f_opt(port_map, " ", "")
            ),
            NodeKind::BlockHeader {
                generic_clause,
                generic_map_aspect,
                port_clause,
                port_map_aspect,
            } => format!(
                "{}{}{}{}",
                self.f_opt(generic_clause, "", "\n"),
                self.f_opt(generic_map_aspect, "", ";\n"),
                self.f_opt(port_clause, "", "\n"),
                self.f_opt(port_map_aspect, "", ";\n")
            ),
            NodeKind::BlockStatement {
                label,
                guard_condition,
                is_token,
                block_header,
                block_declarative_part,
                block_statement_part,
                label_end,
            } => format!(
                "{}: block{}{}\n{}{}begin\n{}end block{};",
                self.format(*label),
                self.f_opt(guard_condition, " (", ")"),
                self.f_opt(is_token, " ", ""),
                self.format(*block_header),
                self.f_list(block_declarative_part, "", "\n", "\n"),
                self.f_list(block_statement_part, "", "\n", "\n"),
                self.f_opt(label_end, " ", "")
            ),
            NodeKind::GenerateStatementBody {
                block_declarative_part,
                begin_token,
                block_statement_part,
            } => format!(
                "{}{}{}",
                self.f_list(block_declarative_part, "", "\n", "\n"),
                self.f_opt(begin_token, "", "\n"),
                self.f_list(block_statement_part, "", "\n", "")
            ),
            NodeKind::ForGenerateStatement {
                label,
                generate_parameter_specification,
                generate_statement_body,
                label_end,
            } => format!(
                "{}: for {} generate\n{}\nend generate{};",
                self.format(*label),
                self.format(*generate_parameter_specification),
                self.format(*generate_statement_body),
                self.f_opt(label_end, " ", "")
            ),
            NodeKind::ElsifGenerateBranch {
                alternative_label,
                condition,
                body,
            } => format!(
                "elsif {}{} generate\n{}",
                self.f_opt(alternative_label, "", ": "),
                self.format(*condition),
                self.format(*body)
            ),
            NodeKind::IfGenerateStatement {
                label,
                if_label,
                condition,
                if_body,
                elsif_branches,
                else_label,
                else_body,
                label_end,
            } => format!(
                "{}: if {}{} generate\n{}\n{}{}end generate{};",
                self.format(*label),
                self.f_opt(if_label, "", ": "),
                self.format(*condition),
                self.format(*if_body),
                self.f_list(elsif_branches, "", "\n", "\n"),
                match else_body {
                    Some(b) => format!(
                        "else{} generate\n{}\n",
                        self.f_opt(else_label, " ", ":"),
                        self.format(*b)
                    ),
                    None => String::new(),
                },
                self.f_opt(label_end, " ", "")
            ),
            NodeKind::CaseGenerateAlternative {
                alternative_label,
                choices,
                body,
            } => format!(
                "when {}{} => {}",
                self.f_opt(alternative_label, "", ": "),
                self.format(*choices),
                self.format(*body)
            ),
            NodeKind::CaseGenerateStatement {
                label,
                expression,
                alternatives,
                label_end,
            } => format!(
                "{}: case {} generate\n{}end generate{};",
                self.format(*label),
                self.format(*expression),
                self.f_list(alternatives, "", "\n", "\n"),
                self.f_opt(label_end, " ", "")
            ),
            NodeKind::ConcurrentProcedureCallStatement {
                label,
                postponed,
                procedure_call,
            } => format!(
                "{}{}{};",
                self.f_opt(label, "", ": "),
                self.f_opt(postponed, "", " "),
                self.format(*procedure_call)
            ),
            NodeKind::ConcurrentAssertionStatement {
                label,
                postponed,
                assertion,
            } => format!(
                "{}{}{};",
                self.f_opt(label, "", ": "),
                self.f_opt(postponed, "", " "),
                self.format(*assertion)
            ),
            NodeKind::ConcurrentStatement { item } => self.format(*item),
            NodeKind::EntityDeclarativeItem { item } => self.format(*item),
            NodeKind::EntityStatement { tokens } => self.f_list(tokens, "", " ", ""),
            NodeKind::EntityStatementPart { items } => self.f_list(items, "", "\n", ""),
            NodeKind::EntityHeader {
                generic_clause,
                port_clause,
            } => format!(
                "{}{}",
                self.f_opt(generic_clause, "", "\n"),
                self.f_opt(port_clause, "", "")
            ),
            NodeKind::BlockDeclarativeItem { item } => self.format(*item),
            NodeKind::DeclarativeItem { item } => self.format(*item),
            NodeKind::PackageDeclarativeItem { item } => self.format(*item),
            NodeKind::EntityDeclaration {
                identifier,
                entity_header,
                entity_declarative_part,
                entity_statement_part,
                entity_token,
                element_simple_name,
            } => format!(
                "entity {} is\n{}\n{}{}end{}{};\n",
                self.format(*identifier),
                self.format(*entity_header),
                self.f_list(entity_declarative_part, "", "\n", "\n"),
                self.f_opt(entity_statement_part, "begin\n", "\n"),
                self.f_opt(entity_token, " ", ""),
                self.f_opt(element_simple_name, " ", "")
            ),
            NodeKind::ArchitectureBody {
                identifier,
                entity_name,
                architecture_declarative_part,
                architecture_statement_part,
                architecture_token,
                architecture_simple_name,
            } => format!(
                "architecture {} of {} is\n{}begin\n{}end{}{};\n",
                self.format(*identifier),
                self.format(*entity_name),
                self.f_list(architecture_declarative_part, "", "\n", "\n"),
                self.f_list(architecture_statement_part, "", "\n", "\n"),
                self.f_opt(architecture_token, " ", ""),
                self.f_opt(architecture_simple_name, " ", "")
            ),
            NodeKind::PackageHeader {
                generic_clause,
                generic_map_aspect,
            } => format!(
                "{}{}",
                self.f_opt(generic_clause, "", "\n"),
                self.f_opt(generic_map_aspect, "", ";\n")
            ),
            NodeKind::PackageDeclaration {
                identifier,
                package_header,
                package_declarative_part,
                package_token,
                package_simple_name,
            } => format!(
                "package {} is\n{}{}\nend{}{};",
                self.format(*identifier),
                self.f_opt(&Some(*package_header), "", "\n"),
                self.f_list(package_declarative_part, "", "\n", ""),
                self.f_opt(package_token, " ", ""),
                self.f_opt(package_simple_name, " ", "")
            ),
            NodeKind::PackageBody {
                simple_name,
                declarative_part,
                package_token,
                simple_name_end,
            } => format!(
                "package body {} is\n{}\nend{}{};",
                self.format(*simple_name),
                self.f_list(declarative_part, "", "\n", ""),
                self.f_opt(package_token, " ", " body"),
                self.f_opt(simple_name_end, " ", "")
            ),
            NodeKind::PackageInstantiationDeclaration {
                identifier,
                uninstantiated_package_name,
                generic_map_aspect,
            } => format!(
                "package {} is new {}{};",
                self.format(*identifier),
                self.format(*uninstantiated_package_name),
                self.f_opt(generic_map_aspect, " ", "")
            ),
            NodeKind::ContextDeclaration {
                identifier,
                context_clause,
                simple_name,
            } => format!(
                "context {} is\n{}end context{};",
                self.format(*identifier),
                self.format(*context_clause),
                self.f_opt(simple_name, " ", "")
            ),
            NodeKind::LogicalName { identifier } => self.format(*identifier),
            NodeKind::LibraryClause { logical_names } => {
                format!("library {};", self.f_list(logical_names, "", ", ", ""))
            }
            NodeKind::UseClause { selected_names } => {
                format!("use {};", self.f_list(selected_names, "", ", ", ""))
            }
            NodeKind::ContextReference { selected_names } => {
                format!("context {};", self.f_list(selected_names, "", ", ", ""))
            }
            NodeKind::ContextItem { clause } => self.format(*clause),
            NodeKind::ContextClause { context_items } => {
                self.f_list(context_items, "", "\n", "\n")
            }
            NodeKind::PrimaryUnit { unit } => self.format(*unit),
            NodeKind::SecondaryUnit { body } => self.format(*body),
            NodeKind::LibraryUnit { unit } => self.format(*unit),
            NodeKind::DesignUnit {
                context_clause,
                library_unit,
            } => format!(
                "{}{}",
                self.f_opt(context_clause, "", ""),
                self.format(*library_unit)
            ),
            NodeKind::DesignFile { design_units } => self.f_list(design_units, "", "\n", ""),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::core::lexer::Tokenize;
    use crate::core::vhdl::parse::{ParserOptions, VhdlParser};
    use crate::core::vhdl::token::VhdlTokenizer;

    /// Lexes `s` into comparable token text: comments dropped, case folded.
    fn normalize(s: &str) -> Vec<String> {
        VhdlTokenizer::tokenize(s)
            .into_iter()
            .map(|t| t.unwrap().take())
            .filter(|t| t.is_comment() == false && t.is_eof() == false)
            .map(|t| t.to_string().to_lowercase())
            .collect()
    }

    /// Checks the round-trip law: rendering the parsed tree reproduces the
    /// original token stream.
    fn roundtrip(s: &str) {
        let parsed = VhdlParser::read(s, &ParserOptions::default()).unwrap();
        let rendered = parsed.tree.format(parsed.tree.get_root());
        assert_eq!(normalize(&rendered), normalize(s), "source was: {}", s);
        // rendering is a fixed point: parsing the output renders identically
        let again = VhdlParser::read(&rendered, &ParserOptions::default()).unwrap();
        assert_eq!(again.tree.format(again.tree.get_root()), rendered);
    }

    #[test]
    fn roundtrip_entities() {
        roundtrip("entity e is end;");
        roundtrip("entity e is port (a : in std_logic); end entity;");
        roundtrip(
            "entity counter is
  generic (width : positive := 8; step : natural := 1);
  port (clk, rst : in std_logic;
        q : out std_logic_vector(width - 1 downto 0) := (others => '0'));
end entity counter;",
        );
    }

    #[test]
    fn roundtrip_architecture() {
        roundtrip(
            "-- a counter body
architecture rtl of counter is
  signal count : unsigned(width - 1 downto 0);
  constant zero : unsigned(width - 1 downto 0) := (others => '0');
begin
  q <= std_logic_vector(count);
  tick : process (clk, rst)
    variable next_count : unsigned(width - 1 downto 0);
  begin
    if rst = '1' then
      count <= zero;
    elsif rising_edge(clk) then
      next_count := count + step;
      count <= next_count after 1 ns;
    end if;
  end process tick;
end architecture rtl;",
        );
    }

    #[test]
    fn roundtrip_statements() {
        roundtrip(
            "architecture beh of tb is
begin
  main : process
  begin
    wait for 10 ns;
    wait on clk until ready = '1';
    for i in 0 to 7 loop
      next when skip(i);
      exit outer when done;
      report \"step\" severity note;
    end loop;
    case state is
      when idle => null;
      when run | halt => ready <= '1';
      when others => assert false report \"bad state\" severity failure;
    end case;
    stop;
  end process main;
end;",
        );
    }

    #[test]
    fn roundtrip_concurrent_statements() {
        roundtrip(
            "architecture top of soc is
begin
  u1 : component adder generic map (width => 8) port map (a => x, b => y, s => z);
  u2 : entity work.adder(fast) port map (a, b, open);
  g0 : for i in 0 to 3 generate
    signal t : std_logic;
  begin
    t <= a(i) and b(i);
  end generate g0;
  g1 : if width > 4 generate
    z <= x when sel = '1' else y when sel = '0' else unaffected;
  end generate;
  with state select
    led <= \"00\" when idle,
           \"11\" when others;
  check : assert a /= b report \"collision\";
end architecture;",
        );
    }

    #[test]
    fn roundtrip_packages() {
        roundtrip(
            "package util is
  generic (n : integer := 8; type t);
  type word is array (natural range <>) of bit;
  type state is (idle, run, halt);
  subtype nibble is word(3 downto 0);
  constant size : integer := n * 2;
  function parity (w : word) return bit;
  procedure dump (w : in word; ok : out boolean);
end package util;
package body util is
  function parity (w : word) return bit is
    variable acc : bit := '0';
  begin
    for i in w'range loop
      acc := acc xor w(i);
    end loop;
    return acc;
  end function parity;
end package body util;",
        );
    }

    #[test]
    fn roundtrip_expressions() {
        roundtrip(
            "architecture x of y is
begin
  a <= (b + c) * d mod 3 ** 2;
  e <= not f and (g xor h) or j(2);
  k <= std_logic_vector'(\"0011\");
  m <= word'(others => '0');
  n <= thing.field(3).sub;
  p <= v(7 downto 4) & v(3 downto 0);
  q <= r'length + s'high(1);
  t <= 2.5e3 * 16#ff# + x\"a5\";
end;",
        );
    }

    #[test]
    fn roundtrip_context_and_instantiation() {
        roundtrip(
            "library ieee;
use ieee.std_logic_1164.all, ieee.numeric_std.all;
package p is
  generic (n : integer);
end;
package q is new work.p generic map (n => 16);",
        );
    }

    #[test]
    fn roundtrip_bundled_libraries() {
        for (_, text) in crate::core::vhdl::stdlib::STD_SOURCES {
            roundtrip(text);
        }
        for (_, text) in crate::core::vhdl::stdlib::IEEE_SOURCES {
            roundtrip(text);
        }
    }

    #[test]
    fn parent_links_are_consistent() {
        let parsed = VhdlParser::read(
            "entity e is port (a : in bit); end; architecture a of e is begin a <= '1'; end;",
            &ParserOptions::default(),
        )
        .unwrap();
        let tree = &parsed.tree;
        let mut roots = 0;
        for id in tree.reachable() {
            match tree.get_node(id).get_parent() {
                Some(parent) => {
                    assert_eq!(tree.children(parent).contains(&id), true);
                }
                None => roots += 1,
            }
        }
        assert_eq!(roots, 1);
    }

    #[test]
    fn format_is_deterministic() {
        let src = "entity e is generic (n : integer := 4); port (a : in bit_vector(n - 1 downto 0)); end;";
        let one = VhdlParser::read(src, &ParserOptions::default()).unwrap();
        let two = VhdlParser::read(src, &ParserOptions::default()).unwrap();
        assert_eq!(
            one.tree.format(one.tree.get_root()),
            two.tree.format(two.tree.get_root())
        );
    }
}
