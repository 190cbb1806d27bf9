use super::node::{Field, FieldValue, NodeId, NodeKind};

fn one(name: &'static str, decl: &'static str, id: &NodeId) -> Field {
    Field::new(name, decl, FieldValue::One(*id))
}

fn opt(name: &'static str, decl: &'static str, id: &Option<NodeId>) -> Field {
    Field::new(name, decl, FieldValue::Opt(*id))
}

fn many(name: &'static str, decl: &'static str, ids: &Vec<NodeId>) -> Field {
    Field::new(name, decl, FieldValue::Many(ids.clone()))
}

impl NodeKind {
    /// Returns the production name for this node in the grammar's snake_case
    /// spelling.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Terminal(_) => "terminal",
            Self::Ambig { .. } => "_ambig",
            Self::UnsupportedUnit { .. } => "unsupported_unit",
            Self::ExtendedIdentifier { .. } => "extended_identifier",
            Self::Identifier { .. } => "identifier",
            Self::CharacterLiteral { .. } => "character_literal",
            Self::StringLiteral { .. } => "string_literal",
            Self::BitStringLiteral { .. } => "bit_string_literal",
            Self::DecimalLiteral { .. } => "decimal_literal",
            Self::BasedLiteral { .. } => "based_literal",
            Self::AbstractLiteral { .. } => "abstract_literal",
            Self::PhysicalLiteral { .. } => "physical_literal",
            Self::NumericLiteral { .. } => "numeric_literal",
            Self::Literal { .. } => "literal",
            Self::EnumerationLiteral { .. } => "enumeration_literal",
            Self::FunctionCall { .. } => "function_call",
            Self::QualifiedExpression { .. } => "qualified_expression",
            Self::Allocator { .. } => "allocator",
            Self::Primary { .. } => "primary",
            Self::Factor { .. } => "factor",
            Self::TermOp { .. } => "term_op",
            Self::Term { .. } => "term",
            Self::SimpleExpressionOp { .. } => "simple_expression_op",
            Self::SimpleExpression { .. } => "simple_expression",
            Self::ShiftExpression { .. } => "shift_expression",
            Self::Relation { .. } => "relation",
            Self::LogicalExpression { .. } => "logical_expression",
            Self::Expression { .. } => "expression",
            Self::RangeLiteral { .. } => "range_literal",
            Self::DiscreteRange { .. } => "discrete_range",
            Self::Choice { .. } => "choice",
            Self::Choices { .. } => "choices",
            Self::ElementAssociation { .. } => "element_association",
            Self::Aggregate { .. } => "aggregate",
            Self::IndexedName { .. } => "indexed_name",
            Self::AttributeName { .. } => "attribute_name",
            Self::SliceName { .. } => "slice_name",
            Self::Name { .. } => "name",
            Self::Prefix { .. } => "prefix",
            Self::Suffix { .. } => "suffix",
            Self::SelectedName { .. } => "selected_name",
            Self::TypeMark { .. } => "type_mark",
            Self::Signature { .. } => "signature",
            Self::RecordElementResolution { .. } => "record_element_resolution",
            Self::RecordResolution { .. } => "record_resolution",
            Self::ElementResolution { .. } => "element_resolution",
            Self::ResolutionIndication { .. } => "resolution_indication",
            Self::SubtypeIndication { .. } => "subtype_indication",
            Self::RangeConstraint { .. } => "range_constraint",
            Self::IndexConstraint { .. } => "index_constraint",
            Self::RecordElementConstraint { .. } => "record_element_constraint",
            Self::RecordConstraint { .. } => "record_constraint",
            Self::ArrayElementConstraint { .. } => "array_element_constraint",
            Self::ArrayConstraint { .. } => "array_constraint",
            Self::Constraint { .. } => "constraint",
            Self::EnumerationTypeDefinition { .. } => "enumeration_type_definition",
            Self::RangeTypeDefinition { .. } => "range_type_definition",
            Self::SecondaryUnitDeclaration { .. } => "secondary_unit_declaration",
            Self::PhysicalTypeDefinition { .. } => "physical_type_definition",
            Self::ScalarTypeDefinition { .. } => "scalar_type_definition",
            Self::IndexSubtypeDefinition { .. } => "index_subtype_definition",
            Self::UnboundedArrayDefinition { .. } => "unbounded_array_definition",
            Self::ConstrainedArrayDefinition { .. } => "constrained_array_definition",
            Self::ArrayTypeDefinition { .. } => "array_type_definition",
            Self::ElementDeclaration { .. } => "element_declaration",
            Self::RecordTypeDefinition { .. } => "record_type_definition",
            Self::CompositeTypeDefinition { .. } => "composite_type_definition",
            Self::AccessTypeDefinition { .. } => "access_type_definition",
            Self::FileTypeDefinition { .. } => "file_type_definition",
            Self::ProtectedTypeDeclarativeItem { .. } => "protected_type_declarative_item",
            Self::ProtectedTypeDeclaration { .. } => "protected_type_declaration",
            Self::ProtectedTypeBody { .. } => "protected_type_body",
            Self::ProtectedTypeDefinition { .. } => "protected_type_definition",
            Self::TypeDefinition { .. } => "type_definition",
            Self::SubtypeDeclaration { .. } => "subtype_declaration",
            Self::FullTypeDeclaration { .. } => "full_type_declaration",
            Self::IncompleteTypeDeclaration { .. } => "incomplete_type_declaration",
            Self::TypeDeclaration { .. } => "type_declaration",
            Self::ConstantDeclaration { .. } => "constant_declaration",
            Self::SignalDeclaration { .. } => "signal_declaration",
            Self::VariableDeclaration { .. } => "variable_declaration",
            Self::FileOpenInformation { .. } => "file_open_information",
            Self::FileDeclaration { .. } => "file_declaration",
            Self::AliasDesignator { .. } => "alias_designator",
            Self::AliasDeclaration { .. } => "alias_declaration",
            Self::AttributeDeclaration { .. } => "attribute_declaration",
            Self::EntityTag { .. } => "entity_tag",
            Self::EntityDesignator { .. } => "entity_designator",
            Self::EntityClass { .. } => "entity_class",
            Self::EntitySpecification { .. } => "entity_specification",
            Self::AttributeSpecification { .. } => "attribute_specification",
            Self::ComponentDeclaration { .. } => "component_declaration",
            Self::InterfaceSignalDeclaration { .. } => "interface_signal_declaration",
            Self::InterfaceVariableDeclaration { .. } => "interface_variable_declaration",
            Self::InterfaceConstantDeclaration { .. } => "interface_constant_declaration",
            Self::InterfaceFileDeclaration { .. } => "interface_file_declaration",
            Self::InterfaceIncompleteTypeDeclaration { .. } => {
                "interface_incomplete_type_declaration"
            }
            Self::InterfacePackageGenericMapAspect { .. } => {
                "interface_package_generic_map_aspect"
            }
            Self::InterfacePackageDeclaration { .. } => "interface_package_declaration",
            Self::InterfaceProcedureSpecification { .. } => "interface_procedure_specification",
            Self::InterfaceFunctionSpecification { .. } => "interface_function_specification",
            Self::InterfaceSubprogramSpecification { .. } => "interface_subprogram_specification",
            Self::InterfaceSubprogramDefault { .. } => "interface_subprogram_default",
            Self::InterfaceSubprogramDeclaration { .. } => "interface_subprogram_declaration",
            Self::GenericInterfaceElement { .. } => "generic_interface_element",
            Self::ParameterInterfaceElement { .. } => "parameter_interface_element",
            Self::PortInterfaceElement { .. } => "port_interface_element",
            Self::GenericClause { .. } => "generic_clause",
            Self::PortClause { .. } => "port_clause",
            Self::FormalPart { .. } => "formal_part",
            Self::ActualDesignator { .. } => "actual_designator",
            Self::ActualPart { .. } => "actual_part",
            Self::AssociationElement { .. } => "association_element",
            Self::GenericMapAspect { .. } => "generic_map_aspect",
            Self::PortMapAspect { .. } => "port_map_aspect",
            Self::Designator { .. } => "designator",
            Self::SubprogramHeader { .. } => "subprogram_header",
            Self::ProcedureSpecification { .. } => "procedure_specification",
            Self::FunctionSpecification { .. } => "function_specification",
            Self::SubprogramSpecification { .. } => "subprogram_specification",
            Self::SubprogramDeclaration { .. } => "subprogram_declaration",
            Self::SubprogramBody { .. } => "subprogram_body",
            Self::SubprogramInstantiationDeclaration { .. } => {
                "subprogram_instantiation_declaration"
            }
            Self::WaveformElement { .. } => "waveform_element",
            Self::Waveform { .. } => "waveform",
            Self::Target { .. } => "target",
            Self::DelayMechanism { .. } => "delay_mechanism",
            Self::SimpleWaveformAssignment { .. } => "simple_waveform_assignment",
            Self::SimpleForceAssignment { .. } => "simple_force_assignment",
            Self::SimpleReleaseAssignment { .. } => "simple_release_assignment",
            Self::SimpleSignalAssignment { .. } => "simple_signal_assignment",
            Self::SignalAssignmentStatement { .. } => "signal_assignment_statement",
            Self::SimpleVariableAssignment { .. } => "simple_variable_assignment",
            Self::VariableAssignmentStatement { .. } => "variable_assignment_statement",
            Self::ElsifBranch { .. } => "elsif_branch",
            Self::IfStatement { .. } => "if_statement",
            Self::CaseStatementAlternative { .. } => "case_statement_alternative",
            Self::CaseStatement { .. } => "case_statement",
            Self::ConditionClause { .. } => "condition_clause",
            Self::WaitStatement { .. } => "wait_statement",
            Self::Assertion { .. } => "assertion",
            Self::AssertionStatement { .. } => "assertion_statement",
            Self::ReportStatement { .. } => "report_statement",
            Self::ProcedureCall { .. } => "procedure_call",
            Self::ProcedureCallStatement { .. } => "procedure_call_statement",
            Self::ReturnStatement { .. } => "return_statement",
            Self::ParameterSpecification { .. } => "parameter_specification",
            Self::IterationScheme { .. } => "iteration_scheme",
            Self::LoopStatement { .. } => "loop_statement",
            Self::ExitStatement { .. } => "exit_statement",
            Self::NextStatement { .. } => "next_statement",
            Self::NullStatement { .. } => "null_statement",
            Self::SequentialStatement { .. } => "sequential_statement",
            Self::ProcessSensitivityList { .. } => "process_sensitivity_list",
            Self::ProcessStatement { .. } => "process_statement",
            Self::SelectedWaveformPair { .. } => "selected_waveform_pair",
            Self::SelectedWaveforms { .. } => "selected_waveforms",
            Self::ConcurrentSelectedSignalAssignment { .. } => {
                "concurrent_selected_signal_assignment"
            }
            Self::ConditionalWaveformPair { .. } => "conditional_waveform_pair",
            Self::ConditionalWaveforms { .. } => "conditional_waveforms",
            Self::ConcurrentConditionalSignalAssignment { .. } => {
                "concurrent_conditional_signal_assignment"
            }
            Self::ConcurrentSimpleSignalAssignment { .. } => "concurrent_simple_signal_assignment",
            Self::ConcurrentSignalAssignmentStatement { .. } => {
                "concurrent_signal_assignment_statement"
            }
            Self::InstantiatedComponent { .. } => "instantiated_component",
            Self::InstantiatedEntity { .. } => "instantiated_entity",
            Self::InstantiatedConfiguration { .. } => "instantiated_configuration",
            Self::ComponentInstantiationStatement { .. } => "component_instantiation_statement",
            Self::BlockHeader { .. } => "block_header",
            Self::BlockStatement { .. } => "block_statement",
            Self::GenerateStatementBody { .. } => "generate_statement_body",
            Self::ForGenerateStatement { .. } => "for_generate_statement",
            Self::ElsifGenerateBranch { .. } => "elsif_generate_branch",
            Self::IfGenerateStatement { .. } => "if_generate_statement",
            Self::CaseGenerateAlternative { .. } => "case_generate_alternative",
            Self::CaseGenerateStatement { .. } => "case_generate_statement",
            Self::ConcurrentProcedureCallStatement { .. } => "concurrent_procedure_call_statement",
            Self::ConcurrentAssertionStatement { .. } => "concurrent_assertion_statement",
            Self::ConcurrentStatement { .. } => "concurrent_statement",
            Self::EntityDeclarativeItem { .. } => "entity_declarative_item",
            Self::EntityStatement { .. } => "entity_statement",
            Self::EntityStatementPart { .. } => "entity_statement_part",
            Self::EntityHeader { .. } => "entity_header",
            Self::BlockDeclarativeItem { .. } => "block_declarative_item",
            Self::DeclarativeItem { .. } => "declarative_item",
            Self::PackageDeclarativeItem { .. } => "package_declarative_item",
            Self::EntityDeclaration { .. } => "entity_declaration",
            Self::ArchitectureBody { .. } => "architecture_body",
            Self::PackageHeader { .. } => "package_header",
            Self::PackageDeclaration { .. } => "package_declaration",
            Self::PackageBody { .. } => "package_body",
            Self::PackageInstantiationDeclaration { .. } => "package_instantiation_declaration",
            Self::ContextDeclaration { .. } => "context_declaration",
            Self::LogicalName { .. } => "logical_name",
            Self::LibraryClause { .. } => "library_clause",
            Self::UseClause { .. } => "use_clause",
            Self::ContextReference { .. } => "context_reference",
            Self::ContextItem { .. } => "context_item",
            Self::ContextClause { .. } => "context_clause",
            Self::PrimaryUnit { .. } => "primary_unit",
            Self::SecondaryUnit { .. } => "secondary_unit",
            Self::LibraryUnit { .. } => "library_unit",
            Self::DesignUnit { .. } => "design_unit",
            Self::DesignFile { .. } => "design_file",
        }
    }

    /// Lists the node's named fields in grammar order.
    ///
    /// The `decl` carried by each field is the union of node kinds the grammar
    /// allows at that position, used by the annotated tree rendering.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::Terminal(_) => vec![],
            Self::Ambig { alternatives } => vec![many("alternatives", "Any", alternatives)],
            Self::UnsupportedUnit { tokens } => vec![many("tokens", "Terminal", tokens)],
            Self::ExtendedIdentifier { id } => vec![one("id", "Terminal", id)],
            Self::Identifier { id } => vec![one("id", "Terminal | ExtendedIdentifier", id)],
            Self::CharacterLiteral { char } => vec![one("char", "Terminal", char)],
            Self::StringLiteral { string } => vec![one("string", "Terminal", string)],
            Self::BitStringLiteral { literal } => vec![one("literal", "Terminal", literal)],
            Self::DecimalLiteral { value } => vec![one("value", "Terminal", value)],
            Self::BasedLiteral { value } => vec![one("value", "Terminal", value)],
            Self::AbstractLiteral { abstract_literal } => vec![one(
                "abstract_literal",
                "DecimalLiteral | BasedLiteral",
                abstract_literal,
            )],
            Self::PhysicalLiteral {
                abstract_literal,
                unit_name,
            } => vec![
                opt("abstract_literal", "AbstractLiteral", abstract_literal),
                one("unit_name", "Identifier", unit_name),
            ],
            Self::NumericLiteral { numeric_literal } => vec![one(
                "numeric_literal",
                "AbstractLiteral | PhysicalLiteral",
                numeric_literal,
            )],
            Self::Literal { item } => vec![one(
                "item",
                "NumericLiteral | StringLiteral | BitStringLiteral | Terminal",
                item,
            )],
            Self::EnumerationLiteral { literal } => vec![one(
                "literal",
                "Identifier | CharacterLiteral",
                literal,
            )],
            Self::FunctionCall { name, parameters } => vec![
                one("name", "Name", name),
                many("parameters", "AssociationElement", parameters),
            ],
            Self::QualifiedExpression {
                type_mark,
                expression,
            } => vec![
                one("type_mark", "TypeMark", type_mark),
                one("expression", "Expression | Aggregate", expression),
            ],
            Self::Allocator { allocator } => vec![one(
                "allocator",
                "SubtypeIndication | QualifiedExpression",
                allocator,
            )],
            Self::Primary { item } => vec![one(
                "item",
                "Name | Literal | Aggregate | FunctionCall | QualifiedExpression | Allocator | Expression",
                item,
            )],
            Self::Factor {
                factor_op,
                primary,
                exponent,
            } => vec![
                opt("factor_op", "Terminal", factor_op),
                one("primary", "Primary", primary),
                opt("exponent", "Primary", exponent),
            ],
            Self::TermOp { op, factor } => vec![
                one("op", "Terminal", op),
                one("factor", "Factor", factor),
            ],
            Self::Term { factor, ops } => vec![
                one("factor", "Factor", factor),
                many("ops", "TermOp", ops),
            ],
            Self::SimpleExpressionOp { op, term } => vec![
                one("op", "Terminal", op),
                one("term", "Term", term),
            ],
            Self::SimpleExpression { sign, term, ops } => vec![
                opt("sign", "Terminal", sign),
                one("term", "Term", term),
                many("ops", "SimpleExpressionOp", ops),
            ],
            Self::ShiftExpression {
                expr1,
                shift_op,
                expr2,
            } => vec![
                one("expr1", "SimpleExpression", expr1),
                opt("shift_op", "Terminal", shift_op),
                opt("expr2", "SimpleExpression", expr2),
            ],
            Self::Relation {
                expr1,
                rel_op,
                expr2,
            } => vec![
                one("expr1", "ShiftExpression", expr1),
                opt("rel_op", "Terminal", rel_op),
                opt("expr2", "ShiftExpression", expr2),
            ],
            Self::LogicalExpression { logical_tokens } => vec![many(
                "logical_tokens",
                "Relation | Terminal",
                logical_tokens,
            )],
            Self::Expression {
                conditional,
                expression,
            } => vec![
                opt("conditional", "Terminal", conditional),
                one("expression", "LogicalExpression", expression),
            ],
            Self::RangeLiteral {
                left,
                direction,
                right,
            } => vec![
                one("left", "SimpleExpression", left),
                one("direction", "Terminal", direction),
                one("right", "SimpleExpression", right),
            ],
            Self::DiscreteRange { range } => vec![one(
                "range",
                "SubtypeIndication | RangeLiteral | AttributeName",
                range,
            )],
            Self::Choice { choice } => vec![one(
                "choice",
                "SimpleExpression | DiscreteRange | Identifier | Terminal",
                choice,
            )],
            Self::Choices { choices } => vec![many("choices", "Choice", choices)],
            Self::ElementAssociation {
                choices,
                expression,
            } => vec![
                opt("choices", "Choices", choices),
                one("expression", "Expression", expression),
            ],
            Self::Aggregate {
                element_associations,
            } => vec![many(
                "element_associations",
                "ElementAssociation",
                element_associations,
            )],
            Self::IndexedName {
                prefix,
                expressions,
            } => vec![
                one("prefix", "Prefix", prefix),
                many("expressions", "Expression", expressions),
            ],
            Self::AttributeName {
                prefix,
                signature,
                attribute_designator,
                expression,
            } => vec![
                one("prefix", "Prefix", prefix),
                opt("signature", "Signature", signature),
                one("attribute_designator", "Identifier", attribute_designator),
                opt("expression", "Expression", expression),
            ],
            Self::SliceName {
                prefix,
                discrete_range,
            } => vec![
                one("prefix", "Prefix", prefix),
                one("discrete_range", "DiscreteRange", discrete_range),
            ],
            Self::Name { name_val } => vec![one(
                "name_val",
                "Identifier | Terminal | CharacterLiteral | SelectedName | IndexedName | SliceName | AttributeName",
                name_val,
            )],
            Self::Prefix { name } => vec![one("name", "Name", name)],
            Self::Suffix { name } => vec![one("name", "Identifier | Terminal", name)],
            Self::SelectedName { prefix, suffix } => vec![
                one("prefix", "Prefix", prefix),
                one("suffix", "Suffix", suffix),
            ],
            Self::TypeMark { name } => vec![one("name", "Name", name)],
            Self::Signature { types, return_type } => vec![
                many("types", "TypeMark", types),
                opt("return_type", "TypeMark", return_type),
            ],
            Self::RecordElementResolution {
                record_element_simple_name,
                resolution_indication,
            } => vec![
                one(
                    "record_element_simple_name",
                    "Identifier",
                    record_element_simple_name,
                ),
                one(
                    "resolution_indication",
                    "ResolutionIndication",
                    resolution_indication,
                ),
            ],
            Self::RecordResolution { items } => {
                vec![many("items", "RecordElementResolution", items)]
            }
            Self::ElementResolution { item } => vec![one(
                "item",
                "ResolutionIndication | RecordResolution",
                item,
            )],
            Self::ResolutionIndication { item } => vec![one(
                "item",
                "Name | ElementResolution",
                item,
            )],
            Self::SubtypeIndication {
                resolution_indication,
                type_mark,
                constraint,
            } => vec![
                opt(
                    "resolution_indication",
                    "ResolutionIndication",
                    resolution_indication,
                ),
                one("type_mark", "TypeMark", type_mark),
                opt("constraint", "Constraint", constraint),
            ],
            Self::RangeConstraint { range } => vec![one(
                "range",
                "RangeLiteral | AttributeName",
                range,
            )],
            Self::IndexConstraint { discrete_ranges } => vec![many(
                "discrete_ranges",
                "DiscreteRange",
                discrete_ranges,
            )],
            Self::RecordElementConstraint {
                record_element_simple_name,
                constraint,
            } => vec![
                one(
                    "record_element_simple_name",
                    "Identifier",
                    record_element_simple_name,
                ),
                one("constraint", "ArrayConstraint | RecordConstraint", constraint),
            ],
            Self::RecordConstraint {
                record_element_constraints,
            } => vec![many(
                "record_element_constraints",
                "RecordElementConstraint",
                record_element_constraints,
            )],
            Self::ArrayElementConstraint { element_constraint } => vec![one(
                "element_constraint",
                "ArrayConstraint | RecordConstraint",
                element_constraint,
            )],
            Self::ArrayConstraint {
                index_constraint,
                array_element_constraint,
            } => vec![
                one(
                    "index_constraint",
                    "IndexConstraint | Terminal",
                    index_constraint,
                ),
                opt(
                    "array_element_constraint",
                    "ArrayElementConstraint",
                    array_element_constraint,
                ),
            ],
            Self::Constraint { constraint } => vec![one(
                "constraint",
                "RangeConstraint | ArrayConstraint | RecordConstraint",
                constraint,
            )],
            Self::EnumerationTypeDefinition { literals } => {
                vec![many("literals", "EnumerationLiteral", literals)]
            }
            Self::RangeTypeDefinition { range } => vec![one(
                "range",
                "RangeLiteral | AttributeName",
                range,
            )],
            Self::SecondaryUnitDeclaration {
                identifier,
                literal,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("literal", "PhysicalLiteral", literal),
            ],
            Self::PhysicalTypeDefinition {
                range,
                primary_unit,
                secondary_units,
                units_simple_name,
            } => vec![
                one("range", "RangeLiteral | AttributeName", range),
                one("primary_unit", "Identifier", primary_unit),
                many(
                    "secondary_units",
                    "SecondaryUnitDeclaration",
                    secondary_units,
                ),
                opt("units_simple_name", "Identifier", units_simple_name),
            ],
            Self::ScalarTypeDefinition { definition } => vec![one(
                "definition",
                "EnumerationTypeDefinition | RangeTypeDefinition | PhysicalTypeDefinition",
                definition,
            )],
            Self::IndexSubtypeDefinition { type_mark } => {
                vec![one("type_mark", "TypeMark", type_mark)]
            }
            Self::UnboundedArrayDefinition {
                definition,
                subtype_indication,
            } => vec![
                many("definition", "IndexSubtypeDefinition", definition),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
            ],
            Self::ConstrainedArrayDefinition {
                index_constraint,
                subtype_indication,
            } => vec![
                one("index_constraint", "IndexConstraint", index_constraint),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
            ],
            Self::ArrayTypeDefinition { definition } => vec![one(
                "definition",
                "UnboundedArrayDefinition | ConstrainedArrayDefinition",
                definition,
            )],
            Self::ElementDeclaration {
                identifiers,
                subtype_indication,
            } => vec![
                many("identifiers", "Identifier", identifiers),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
            ],
            Self::RecordTypeDefinition {
                declarations,
                record_type_simple_name,
            } => vec![
                many("declarations", "ElementDeclaration", declarations),
                opt(
                    "record_type_simple_name",
                    "Identifier",
                    record_type_simple_name,
                ),
            ],
            Self::CompositeTypeDefinition { definition } => vec![one(
                "definition",
                "ArrayTypeDefinition | RecordTypeDefinition",
                definition,
            )],
            Self::AccessTypeDefinition { subtype_indication } => vec![one(
                "subtype_indication",
                "SubtypeIndication",
                subtype_indication,
            )],
            Self::FileTypeDefinition { type_mark } => {
                vec![one("type_mark", "TypeMark", type_mark)]
            }
            Self::ProtectedTypeDeclarativeItem { item } => vec![one(
                "item",
                "SubprogramDeclaration | SubprogramInstantiationDeclaration | AttributeSpecification | UseClause",
                item,
            )],
            Self::ProtectedTypeDeclaration {
                declarative_part,
                simple_name,
            } => vec![
                many(
                    "declarative_part",
                    "ProtectedTypeDeclarativeItem",
                    declarative_part,
                ),
                opt("simple_name", "Identifier", simple_name),
            ],
            Self::ProtectedTypeBody {
                declarative_part,
                simple_name,
            } => vec![
                many("declarative_part", "DeclarativeItem", declarative_part),
                opt("simple_name", "Identifier", simple_name),
            ],
            Self::ProtectedTypeDefinition { definition } => vec![one(
                "definition",
                "ProtectedTypeDeclaration | ProtectedTypeBody",
                definition,
            )],
            Self::TypeDefinition { definition } => vec![one(
                "definition",
                "ScalarTypeDefinition | CompositeTypeDefinition | AccessTypeDefinition | FileTypeDefinition | ProtectedTypeDefinition",
                definition,
            )],
            Self::SubtypeDeclaration {
                identifier,
                subtype_indication,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
            ],
            Self::FullTypeDeclaration {
                identifier,
                type_definition,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("type_definition", "TypeDefinition", type_definition),
            ],
            Self::IncompleteTypeDeclaration { identifier } => {
                vec![one("identifier", "Identifier", identifier)]
            }
            Self::TypeDeclaration { declaration } => vec![one(
                "declaration",
                "FullTypeDeclaration | IncompleteTypeDeclaration",
                declaration,
            )],
            Self::ConstantDeclaration {
                identifiers,
                subtype_indication,
                default,
            } => vec![
                many("identifiers", "Identifier", identifiers),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
                opt("default", "Expression", default),
            ],
            Self::SignalDeclaration {
                identifiers,
                subtype_indication,
                kind,
                default,
            } => vec![
                many("identifiers", "Identifier", identifiers),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
                opt("kind", "Terminal", kind),
                opt("default", "Expression", default),
            ],
            Self::VariableDeclaration {
                shared,
                identifiers,
                subtype_indication,
                default,
            } => vec![
                opt("shared", "Terminal", shared),
                many("identifiers", "Identifier", identifiers),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
                opt("default", "Expression", default),
            ],
            Self::FileOpenInformation { open_kind, name } => vec![
                opt("open_kind", "Expression", open_kind),
                one("name", "Expression", name),
            ],
            Self::FileDeclaration {
                identifier_list,
                subtype_indication,
                open_info,
            } => vec![
                many("identifier_list", "Identifier", identifier_list),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
                opt("open_info", "FileOpenInformation", open_info),
            ],
            Self::AliasDesignator { designator } => vec![one(
                "designator",
                "Identifier | CharacterLiteral | Terminal",
                designator,
            )],
            Self::AliasDeclaration {
                alias_designator,
                subtype_indication,
                name,
                signature,
            } => vec![
                one("alias_designator", "AliasDesignator", alias_designator),
                opt("subtype_indication", "SubtypeIndication", subtype_indication),
                one("name", "Name", name),
                opt("signature", "Signature", signature),
            ],
            Self::AttributeDeclaration {
                identifier,
                type_mark,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("type_mark", "TypeMark", type_mark),
            ],
            Self::EntityTag { tag } => vec![one(
                "tag",
                "Identifier | CharacterLiteral | Terminal",
                tag,
            )],
            Self::EntityDesignator {
                entity_tag,
                signature,
            } => vec![
                one("entity_tag", "EntityTag", entity_tag),
                opt("signature", "Signature", signature),
            ],
            Self::EntityClass { entity_class } => vec![one("entity_class", "Terminal", entity_class)],
            Self::EntitySpecification {
                entity_name_list,
                entity_class,
            } => vec![
                many(
                    "entity_name_list",
                    "EntityDesignator | Terminal",
                    entity_name_list,
                ),
                one("entity_class", "EntityClass", entity_class),
            ],
            Self::AttributeSpecification {
                designator,
                specification,
                expression,
            } => vec![
                one("designator", "Identifier", designator),
                one("specification", "EntitySpecification", specification),
                one("expression", "Expression", expression),
            ],
            Self::ComponentDeclaration {
                identifier,
                is_token,
                local_generic_clause,
                local_port_clause,
                component_simple_name,
            } => vec![
                one("identifier", "Identifier", identifier),
                opt("is_token", "Terminal", is_token),
                opt("local_generic_clause", "GenericClause", local_generic_clause),
                opt("local_port_clause", "PortClause", local_port_clause),
                opt(
                    "component_simple_name",
                    "Identifier",
                    component_simple_name,
                ),
            ],
            Self::InterfaceSignalDeclaration {
                signal,
                identifier_list,
                mode,
                subtype_indication,
                bus,
                default,
            } => vec![
                opt("signal", "Terminal", signal),
                many("identifier_list", "Identifier", identifier_list),
                opt("mode", "Terminal", mode),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
                opt("bus", "Terminal", bus),
                opt("default", "Expression", default),
            ],
            Self::InterfaceVariableDeclaration {
                variable,
                identifier_list,
                mode,
                subtype_indication,
                default,
            } => vec![
                opt("variable", "Terminal", variable),
                many("identifier_list", "Identifier", identifier_list),
                opt("mode", "Terminal", mode),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
                opt("default", "Expression", default),
            ],
            Self::InterfaceConstantDeclaration {
                constant,
                identifier_list,
                mode,
                subtype_indication,
                default,
            } => vec![
                opt("constant", "Terminal", constant),
                many("identifier_list", "Identifier", identifier_list),
                opt("mode", "Terminal", mode),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
                opt("default", "Expression", default),
            ],
            Self::InterfaceFileDeclaration {
                identifier_list,
                subtype_indication,
            } => vec![
                many("identifier_list", "Identifier", identifier_list),
                one("subtype_indication", "SubtypeIndication", subtype_indication),
            ],
            Self::InterfaceIncompleteTypeDeclaration { identifier } => {
                vec![one("identifier", "Identifier", identifier)]
            }
            Self::InterfacePackageGenericMapAspect { aspect } => vec![one(
                "aspect",
                "GenericMapAspect | Terminal",
                aspect,
            )],
            Self::InterfacePackageDeclaration {
                identifier,
                uninstantiated_package_name,
                interface_package_generic_map_aspect,
            } => vec![
                one("identifier", "Identifier", identifier),
                one(
                    "uninstantiated_package_name",
                    "Name",
                    uninstantiated_package_name,
                ),
                one(
                    "interface_package_generic_map_aspect",
                    "InterfacePackageGenericMapAspect",
                    interface_package_generic_map_aspect,
                ),
            ],
            Self::InterfaceProcedureSpecification {
                designator,
                parameter,
                formal_parameter_list,
            } => vec![
                one("designator", "Designator", designator),
                opt("parameter", "Terminal", parameter),
                many(
                    "formal_parameter_list",
                    "ParameterInterfaceElement",
                    formal_parameter_list,
                ),
            ],
            Self::InterfaceFunctionSpecification {
                pure,
                designator,
                parameter,
                formal_parameter_list,
                type_mark,
            } => vec![
                opt("pure", "Terminal", pure),
                one("designator", "Designator", designator),
                opt("parameter", "Terminal", parameter),
                many(
                    "formal_parameter_list",
                    "ParameterInterfaceElement",
                    formal_parameter_list,
                ),
                one("type_mark", "TypeMark", type_mark),
            ],
            Self::InterfaceSubprogramSpecification { aspect } => vec![one(
                "aspect",
                "InterfaceProcedureSpecification | InterfaceFunctionSpecification",
                aspect,
            )],
            Self::InterfaceSubprogramDefault { name } => {
                vec![one("name", "Name | Terminal", name)]
            }
            Self::InterfaceSubprogramDeclaration {
                interface_subprogram_specification,
                interface_subprogram_default,
            } => vec![
                one(
                    "interface_subprogram_specification",
                    "InterfaceSubprogramSpecification",
                    interface_subprogram_specification,
                ),
                opt(
                    "interface_subprogram_default",
                    "InterfaceSubprogramDefault",
                    interface_subprogram_default,
                ),
            ],
            Self::GenericInterfaceElement {
                generic_declaration,
            } => vec![one(
                "generic_declaration",
                "InterfaceConstantDeclaration | InterfaceIncompleteTypeDeclaration | InterfaceSubprogramDeclaration | InterfacePackageDeclaration",
                generic_declaration,
            )],
            Self::ParameterInterfaceElement {
                parameter_declaration,
            } => vec![one(
                "parameter_declaration",
                "InterfaceConstantDeclaration | InterfaceSignalDeclaration | InterfaceVariableDeclaration | InterfaceFileDeclaration",
                parameter_declaration,
            )],
            Self::PortInterfaceElement { port_declaration } => vec![one(
                "port_declaration",
                "InterfaceSignalDeclaration",
                port_declaration,
            )],
            Self::GenericClause { interface_elements } => vec![many(
                "interface_elements",
                "GenericInterfaceElement",
                interface_elements,
            )],
            Self::PortClause { interface_elements } => vec![many(
                "interface_elements",
                "PortInterfaceElement",
                interface_elements,
            )],
            Self::FormalPart { formal } => vec![one("formal", "Name", formal)],
            Self::ActualDesignator { inertial, actual } => vec![
                opt("inertial", "Terminal", inertial),
                one(
                    "actual",
                    "Expression | SubtypeIndication | Terminal",
                    actual,
                ),
            ],
            Self::ActualPart { actual } => vec![one("actual", "ActualDesignator", actual)],
            Self::AssociationElement { formal, actual } => vec![
                opt("formal", "FormalPart", formal),
                one("actual", "ActualPart", actual),
            ],
            Self::GenericMapAspect { association_list } => vec![many(
                "association_list",
                "AssociationElement",
                association_list,
            )],
            Self::PortMapAspect { association_list } => vec![many(
                "association_list",
                "AssociationElement",
                association_list,
            )],
            Self::Designator { designator } => vec![one(
                "designator",
                "Identifier | Terminal",
                designator,
            )],
            Self::SubprogramHeader {
                elements,
                generic_map,
            } => vec![
                many("elements", "GenericInterfaceElement", elements),
                opt("generic_map", "GenericMapAspect", generic_map),
            ],
            Self::ProcedureSpecification {
                designator,
                subprogram_header,
                parameter,
                formal_parameter_list,
            } => vec![
                one("designator", "Designator", designator),
                opt("subprogram_header", "SubprogramHeader", subprogram_header),
                opt("parameter", "Terminal", parameter),
                many(
                    "formal_parameter_list",
                    "ParameterInterfaceElement",
                    formal_parameter_list,
                ),
            ],
            Self::FunctionSpecification {
                pure,
                designator,
                subprogram_header,
                parameter,
                formal_parameter_list,
                type_mark,
            } => vec![
                opt("pure", "Terminal", pure),
                one("designator", "Designator", designator),
                opt("subprogram_header", "SubprogramHeader", subprogram_header),
                opt("parameter", "Terminal", parameter),
                many(
                    "formal_parameter_list",
                    "ParameterInterfaceElement",
                    formal_parameter_list,
                ),
                one("type_mark", "TypeMark", type_mark),
            ],
            Self::SubprogramSpecification { specification } => vec![one(
                "specification",
                "ProcedureSpecification | FunctionSpecification",
                specification,
            )],
            Self::SubprogramDeclaration { specification } => vec![one(
                "specification",
                "SubprogramSpecification",
                specification,
            )],
            Self::SubprogramBody {
                specification,
                declarative_part,
                statement_part,
                kind,
                designator,
            } => vec![
                one("specification", "SubprogramSpecification", specification),
                many("declarative_part", "DeclarativeItem", declarative_part),
                many("statement_part", "SequentialStatement", statement_part),
                opt("kind", "Terminal", kind),
                opt("designator", "Designator", designator),
            ],
            Self::SubprogramInstantiationDeclaration {
                kind,
                identifier,
                name,
                signature,
                generic_map_aspect,
            } => vec![
                one("kind", "Terminal", kind),
                one("identifier", "Identifier", identifier),
                one("name", "Name", name),
                opt("signature", "Signature", signature),
                opt("generic_map_aspect", "GenericMapAspect", generic_map_aspect),
            ],
            Self::WaveformElement { value, time } => vec![
                one("value", "Expression | Terminal", value),
                opt("time", "Expression", time),
            ],
            Self::Waveform { elements } => vec![many(
                "elements",
                "WaveformElement | Terminal",
                elements,
            )],
            Self::Target { target } => vec![one("target", "Name | Aggregate", target)],
            Self::DelayMechanism {
                time_expression,
                mechanism,
            } => vec![
                opt("time_expression", "Expression", time_expression),
                one("mechanism", "Terminal", mechanism),
            ],
            Self::SimpleWaveformAssignment {
                target,
                delay,
                waveform,
            } => vec![
                one("target", "Target", target),
                opt("delay", "DelayMechanism", delay),
                one("waveform", "Waveform", waveform),
            ],
            Self::SimpleForceAssignment {
                target,
                force_mode,
                expression,
            } => vec![
                one("target", "Target", target),
                opt("force_mode", "Terminal", force_mode),
                one("expression", "Expression", expression),
            ],
            Self::SimpleReleaseAssignment { target, force_mode } => vec![
                one("target", "Target", target),
                opt("force_mode", "Terminal", force_mode),
            ],
            Self::SimpleSignalAssignment { item } => vec![one(
                "item",
                "SimpleWaveformAssignment | SimpleForceAssignment | SimpleReleaseAssignment",
                item,
            )],
            Self::SignalAssignmentStatement { label, assignment } => vec![
                opt("label", "Identifier", label),
                one("assignment", "SimpleSignalAssignment", assignment),
            ],
            Self::SimpleVariableAssignment { target, expression } => vec![
                one("target", "Target", target),
                one("expression", "Expression", expression),
            ],
            Self::VariableAssignmentStatement { label, assignment } => vec![
                opt("label", "Identifier", label),
                one("assignment", "SimpleVariableAssignment", assignment),
            ],
            Self::ElsifBranch {
                condition,
                statements,
            } => vec![
                one("condition", "Expression", condition),
                many("statements", "SequentialStatement", statements),
            ],
            Self::IfStatement {
                label,
                condition,
                if_branch_statements,
                elsif_branches,
                else_token,
                else_branch_statements,
                label_end,
            } => vec![
                opt("label", "Identifier", label),
                one("condition", "Expression", condition),
                many(
                    "if_branch_statements",
                    "SequentialStatement",
                    if_branch_statements,
                ),
                many("elsif_branches", "ElsifBranch", elsif_branches),
                opt("else_token", "Terminal", else_token),
                many(
                    "else_branch_statements",
                    "SequentialStatement",
                    else_branch_statements,
                ),
                opt("label_end", "Identifier", label_end),
            ],
            Self::CaseStatementAlternative {
                choices,
                statements,
            } => vec![
                one("choices", "Choices", choices),
                many("statements", "SequentialStatement", statements),
            ],
            Self::CaseStatement {
                label,
                qmark,
                expression,
                alternatives,
                qmark_end,
                label_end,
            } => vec![
                opt("label", "Identifier", label),
                opt("qmark", "Terminal", qmark),
                one("expression", "Expression", expression),
                many("alternatives", "CaseStatementAlternative", alternatives),
                opt("qmark_end", "Terminal", qmark_end),
                opt("label_end", "Identifier", label_end),
            ],
            Self::ConditionClause { condition } => vec![one("condition", "Expression", condition)],
            Self::WaitStatement {
                label,
                sensitivity_clause,
                condition_clause,
                timeout_clause,
            } => vec![
                opt("label", "Identifier", label),
                many("sensitivity_clause", "Name", sensitivity_clause),
                opt("condition_clause", "ConditionClause", condition_clause),
                opt("timeout_clause", "Expression", timeout_clause),
            ],
            Self::Assertion {
                condition,
                report,
                severity,
            } => vec![
                one("condition", "Expression", condition),
                opt("report", "Expression", report),
                opt("severity", "Expression", severity),
            ],
            Self::AssertionStatement { label, assertion } => vec![
                opt("label", "Identifier", label),
                one("assertion", "Assertion", assertion),
            ],
            Self::ReportStatement {
                label,
                expression,
                severity,
            } => vec![
                opt("label", "Identifier", label),
                one("expression", "Expression", expression),
                opt("severity", "Expression", severity),
            ],
            Self::ProcedureCall {
                procedure_name,
                actual_parameter_part,
            } => vec![
                one("procedure_name", "Name", procedure_name),
                many(
                    "actual_parameter_part",
                    "AssociationElement",
                    actual_parameter_part,
                ),
            ],
            Self::ProcedureCallStatement {
                label,
                procedure_call,
            } => vec![
                opt("label", "Identifier", label),
                one("procedure_call", "ProcedureCall", procedure_call),
            ],
            Self::ReturnStatement { label, expression } => vec![
                opt("label", "Identifier", label),
                opt("expression", "Expression", expression),
            ],
            Self::ParameterSpecification {
                identifier,
                discrete_range,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("discrete_range", "DiscreteRange", discrete_range),
            ],
            Self::IterationScheme { spec } => vec![one(
                "spec",
                "Expression | ParameterSpecification",
                spec,
            )],
            Self::LoopStatement {
                loop_label,
                iteration_scheme,
                sequence_of_statements,
                loop_label_end,
            } => vec![
                opt("loop_label", "Identifier", loop_label),
                opt("iteration_scheme", "IterationScheme", iteration_scheme),
                many(
                    "sequence_of_statements",
                    "SequentialStatement",
                    sequence_of_statements,
                ),
                opt("loop_label_end", "Identifier", loop_label_end),
            ],
            Self::ExitStatement {
                label,
                loop_label,
                condition,
            } => vec![
                opt("label", "Identifier", label),
                opt("loop_label", "Identifier", loop_label),
                opt("condition", "Expression", condition),
            ],
            Self::NextStatement {
                label,
                loop_label,
                condition,
            } => vec![
                opt("label", "Identifier", label),
                opt("loop_label", "Identifier", loop_label),
                opt("condition", "Expression", condition),
            ],
            Self::NullStatement { label } => vec![opt("label", "Identifier", label)],
            Self::SequentialStatement { item } => vec![one(
                "item",
                "WaitStatement | AssertionStatement | ReportStatement | SignalAssignmentStatement | VariableAssignmentStatement | ProcedureCallStatement | IfStatement | CaseStatement | LoopStatement | NextStatement | ExitStatement | ReturnStatement | NullStatement",
                item,
            )],
            Self::ProcessSensitivityList { list } => {
                vec![many("list", "Name | Terminal", list)]
            }
            Self::ProcessStatement {
                process_label,
                postponed,
                process_sensitivity_list,
                is_token,
                process_declarative_part,
                process_statement_part,
                postponed_end,
                process_label_end,
            } => vec![
                opt("process_label", "Identifier", process_label),
                opt("postponed", "Terminal", postponed),
                opt(
                    "process_sensitivity_list",
                    "ProcessSensitivityList",
                    process_sensitivity_list,
                ),
                opt("is_token", "Terminal", is_token),
                many(
                    "process_declarative_part",
                    "DeclarativeItem",
                    process_declarative_part,
                ),
                many(
                    "process_statement_part",
                    "SequentialStatement",
                    process_statement_part,
                ),
                opt("postponed_end", "Terminal", postponed_end),
                opt("process_label_end", "Identifier", process_label_end),
            ],
            Self::SelectedWaveformPair { waveform, choices } => vec![
                one("waveform", "Waveform", waveform),
                one("choices", "Choices", choices),
            ],
            Self::SelectedWaveforms { selections } => vec![many(
                "selections",
                "SelectedWaveformPair",
                selections,
            )],
            Self::ConcurrentSelectedSignalAssignment {
                expression,
                qmark,
                target,
                guarded,
                delay_mechanism,
                selected_waveforms,
            } => vec![
                one("expression", "Expression", expression),
                opt("qmark", "Terminal", qmark),
                one("target", "Target", target),
                opt("guarded", "Terminal", guarded),
                opt("delay_mechanism", "DelayMechanism", delay_mechanism),
                one("selected_waveforms", "SelectedWaveforms", selected_waveforms),
            ],
            Self::ConditionalWaveformPair {
                waveform,
                condition,
            } => vec![
                one("waveform", "Waveform", waveform),
                one("condition", "Expression", condition),
            ],
            Self::ConditionalWaveforms {
                pairs,
                else_waveform,
            } => vec![
                many("pairs", "ConditionalWaveformPair", pairs),
                opt("else_waveform", "Waveform", else_waveform),
            ],
            Self::ConcurrentConditionalSignalAssignment {
                target,
                guarded,
                delay_mechanism,
                conditional_waveforms,
            } => vec![
                one("target", "Target", target),
                opt("guarded", "Terminal", guarded),
                opt("delay_mechanism", "DelayMechanism", delay_mechanism),
                one(
                    "conditional_waveforms",
                    "ConditionalWaveforms",
                    conditional_waveforms,
                ),
            ],
            Self::ConcurrentSimpleSignalAssignment {
                target,
                guarded,
                delay_mechanism,
                waveform,
            } => vec![
                one("target", "Target", target),
                opt("guarded", "Terminal", guarded),
                opt("delay_mechanism", "DelayMechanism", delay_mechanism),
                one("waveform", "Waveform", waveform),
            ],
            Self::ConcurrentSignalAssignmentStatement {
                label,
                postponed,
                assignment,
            } => vec![
                opt("label", "Identifier", label),
                opt("postponed", "Terminal", postponed),
                one(
                    "assignment",
                    "ConcurrentSimpleSignalAssignment | ConcurrentConditionalSignalAssignment | ConcurrentSelectedSignalAssignment",
                    assignment,
                ),
            ],
            Self::InstantiatedComponent {
                component_token,
                component_name,
            } => vec![
                opt("component_token", "Terminal", component_token),
                one("component_name", "Name", component_name),
            ],
            Self::InstantiatedEntity {
                entity_name,
                architecture_identifier,
            } => vec![
                one("entity_name", "Name", entity_name),
                opt(
                    "architecture_identifier",
                    "Identifier",
                    architecture_identifier,
                ),
            ],
            Self::InstantiatedConfiguration { configuration_name } => {
                vec![one("configuration_name", "Name", configuration_name)]
            }
            Self::ComponentInstantiationStatement {
                label,
                unit,
                generic_map,
                port_map,
            } => vec![
                one("label", "Identifier", label),
                one(
                    "unit",
                    "InstantiatedComponent | InstantiatedEntity | InstantiatedConfiguration",
                    unit,
                ),
                opt("generic_map", "GenericMapAspect", generic_map),
                opt("port_map", "PortMapAspect", port_map),
            ],
            Self::BlockHeader {
                generic_clause,
                generic_map_aspect,
                port_clause,
                port_map_aspect,
            } => vec![
                opt("generic_clause", "GenericClause", generic_clause),
                opt("generic_map_aspect", "GenericMapAspect", generic_map_aspect),
                opt("port_clause", "PortClause", port_clause),
                opt("port_map_aspect", "PortMapAspect", port_map_aspect),
            ],
            Self::BlockStatement {
                label,
                guard_condition,
                is_token,
                block_header,
                block_declarative_part,
                block_statement_part,
                label_end,
            } => vec![
                one("label", "Identifier", label),
                opt("guard_condition", "Expression", guard_condition),
                opt("is_token", "Terminal", is_token),
                one("block_header", "BlockHeader", block_header),
                many(
                    "block_declarative_part",
                    "BlockDeclarativeItem",
                    block_declarative_part,
                ),
                many(
                    "block_statement_part",
                    "ConcurrentStatement",
                    block_statement_part,
                ),
                opt("label_end", "Identifier", label_end),
            ],
            Self::GenerateStatementBody {
                block_declarative_part,
                begin_token,
                block_statement_part,
            } => vec![
                many(
                    "block_declarative_part",
                    "BlockDeclarativeItem",
                    block_declarative_part,
                ),
                opt("begin_token", "Terminal", begin_token),
                many(
                    "block_statement_part",
                    "ConcurrentStatement",
                    block_statement_part,
                ),
            ],
            Self::ForGenerateStatement {
                label,
                generate_parameter_specification,
                generate_statement_body,
                label_end,
            } => vec![
                one("label", "Identifier", label),
                one(
                    "generate_parameter_specification",
                    "ParameterSpecification",
                    generate_parameter_specification,
                ),
                one(
                    "generate_statement_body",
                    "GenerateStatementBody",
                    generate_statement_body,
                ),
                opt("label_end", "Identifier", label_end),
            ],
            Self::ElsifGenerateBranch {
                alternative_label,
                condition,
                body,
            } => vec![
                opt("alternative_label", "Identifier", alternative_label),
                one("condition", "Expression", condition),
                one("body", "GenerateStatementBody", body),
            ],
            Self::IfGenerateStatement {
                label,
                if_label,
                condition,
                if_body,
                elsif_branches,
                else_label,
                else_body,
                label_end,
            } => vec![
                one("label", "Identifier", label),
                opt("if_label", "Identifier", if_label),
                one("condition", "Expression", condition),
                one("if_body", "GenerateStatementBody", if_body),
                many("elsif_branches", "ElsifGenerateBranch", elsif_branches),
                opt("else_label", "Identifier", else_label),
                opt("else_body", "GenerateStatementBody", else_body),
                opt("label_end", "Identifier", label_end),
            ],
            Self::CaseGenerateAlternative {
                alternative_label,
                choices,
                body,
            } => vec![
                opt("alternative_label", "Identifier", alternative_label),
                one("choices", "Choices", choices),
                one("body", "GenerateStatementBody", body),
            ],
            Self::CaseGenerateStatement {
                label,
                expression,
                alternatives,
                label_end,
            } => vec![
                one("label", "Identifier", label),
                one("expression", "Expression", expression),
                many("alternatives", "CaseGenerateAlternative", alternatives),
                opt("label_end", "Identifier", label_end),
            ],
            Self::ConcurrentProcedureCallStatement {
                label,
                postponed,
                procedure_call,
            } => vec![
                opt("label", "Identifier", label),
                opt("postponed", "Terminal", postponed),
                one("procedure_call", "ProcedureCall", procedure_call),
            ],
            Self::ConcurrentAssertionStatement {
                label,
                postponed,
                assertion,
            } => vec![
                opt("label", "Identifier", label),
                opt("postponed", "Terminal", postponed),
                one("assertion", "Assertion", assertion),
            ],
            Self::ConcurrentStatement { item } => vec![one(
                "item",
                "BlockStatement | ProcessStatement | ConcurrentProcedureCallStatement | ConcurrentAssertionStatement | ConcurrentSignalAssignmentStatement | ComponentInstantiationStatement | ForGenerateStatement | IfGenerateStatement | CaseGenerateStatement",
                item,
            )],
            Self::EntityDeclarativeItem { item } => vec![one(
                "item",
                "SubprogramDeclaration | SubprogramBody | SubprogramInstantiationDeclaration | PackageDeclaration | PackageBody | PackageInstantiationDeclaration | TypeDeclaration | SubtypeDeclaration | ConstantDeclaration | SignalDeclaration | FileDeclaration | AliasDeclaration | AttributeDeclaration | AttributeSpecification | UseClause",
                item,
            )],
            Self::EntityStatement { tokens } => vec![many("tokens", "Terminal", tokens)],
            Self::EntityStatementPart { items } => {
                vec![many("items", "EntityStatement", items)]
            }
            Self::EntityHeader {
                generic_clause,
                port_clause,
            } => vec![
                opt("generic_clause", "GenericClause", generic_clause),
                opt("port_clause", "PortClause", port_clause),
            ],
            Self::BlockDeclarativeItem { item } => vec![one(
                "item",
                "SubprogramDeclaration | SubprogramBody | SubprogramInstantiationDeclaration | PackageDeclaration | PackageBody | PackageInstantiationDeclaration | TypeDeclaration | SubtypeDeclaration | ConstantDeclaration | SignalDeclaration | VariableDeclaration | FileDeclaration | AliasDeclaration | ComponentDeclaration | AttributeDeclaration | AttributeSpecification | UseClause",
                item,
            )],
            Self::DeclarativeItem { item } => vec![one(
                "item",
                "SubprogramDeclaration | SubprogramBody | PackageDeclaration | PackageBody | TypeDeclaration | SubtypeDeclaration | ConstantDeclaration | VariableDeclaration | FileDeclaration | AliasDeclaration | AttributeDeclaration | AttributeSpecification | UseClause",
                item,
            )],
            Self::PackageDeclarativeItem { item } => vec![one(
                "item",
                "SubprogramDeclaration | SubprogramInstantiationDeclaration | PackageDeclaration | PackageInstantiationDeclaration | TypeDeclaration | SubtypeDeclaration | ConstantDeclaration | SignalDeclaration | VariableDeclaration | FileDeclaration | AliasDeclaration | ComponentDeclaration | AttributeDeclaration | AttributeSpecification | UseClause",
                item,
            )],
            Self::EntityDeclaration {
                identifier,
                entity_header,
                entity_declarative_part,
                entity_statement_part,
                entity_token,
                element_simple_name,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("entity_header", "EntityHeader", entity_header),
                many(
                    "entity_declarative_part",
                    "EntityDeclarativeItem",
                    entity_declarative_part,
                ),
                opt(
                    "entity_statement_part",
                    "EntityStatementPart",
                    entity_statement_part,
                ),
                opt("entity_token", "Terminal", entity_token),
                opt("element_simple_name", "Identifier", element_simple_name),
            ],
            Self::ArchitectureBody {
                identifier,
                entity_name,
                architecture_declarative_part,
                architecture_statement_part,
                architecture_token,
                architecture_simple_name,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("entity_name", "Name", entity_name),
                many(
                    "architecture_declarative_part",
                    "BlockDeclarativeItem",
                    architecture_declarative_part,
                ),
                many(
                    "architecture_statement_part",
                    "ConcurrentStatement",
                    architecture_statement_part,
                ),
                opt("architecture_token", "Terminal", architecture_token),
                opt(
                    "architecture_simple_name",
                    "Identifier",
                    architecture_simple_name,
                ),
            ],
            Self::PackageHeader {
                generic_clause,
                generic_map_aspect,
            } => vec![
                opt("generic_clause", "GenericClause", generic_clause),
                opt("generic_map_aspect", "GenericMapAspect", generic_map_aspect),
            ],
            Self::PackageDeclaration {
                identifier,
                package_header,
                package_declarative_part,
                package_token,
                package_simple_name,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("package_header", "PackageHeader", package_header),
                many(
                    "package_declarative_part",
                    "PackageDeclarativeItem",
                    package_declarative_part,
                ),
                opt("package_token", "Terminal", package_token),
                opt("package_simple_name", "Identifier", package_simple_name),
            ],
            Self::PackageBody {
                simple_name,
                declarative_part,
                package_token,
                simple_name_end,
            } => vec![
                one("simple_name", "Identifier", simple_name),
                many("declarative_part", "DeclarativeItem", declarative_part),
                opt("package_token", "Terminal", package_token),
                opt("simple_name_end", "Identifier", simple_name_end),
            ],
            Self::PackageInstantiationDeclaration {
                identifier,
                uninstantiated_package_name,
                generic_map_aspect,
            } => vec![
                one("identifier", "Identifier", identifier),
                one(
                    "uninstantiated_package_name",
                    "Name",
                    uninstantiated_package_name,
                ),
                opt("generic_map_aspect", "GenericMapAspect", generic_map_aspect),
            ],
            Self::ContextDeclaration {
                identifier,
                context_clause,
                simple_name,
            } => vec![
                one("identifier", "Identifier", identifier),
                one("context_clause", "ContextClause", context_clause),
                opt("simple_name", "Identifier", simple_name),
            ],
            Self::LogicalName { identifier } => vec![one("identifier", "Identifier", identifier)],
            Self::LibraryClause { logical_names } => {
                vec![many("logical_names", "LogicalName", logical_names)]
            }
            Self::UseClause { selected_names } => {
                vec![many("selected_names", "SelectedName", selected_names)]
            }
            Self::ContextReference { selected_names } => {
                vec![many("selected_names", "SelectedName", selected_names)]
            }
            Self::ContextItem { clause } => vec![one(
                "clause",
                "LibraryClause | UseClause | ContextReference",
                clause,
            )],
            Self::ContextClause { context_items } => {
                vec![many("context_items", "ContextItem", context_items)]
            }
            Self::PrimaryUnit { unit } => vec![one(
                "unit",
                "EntityDeclaration | PackageDeclaration | PackageInstantiationDeclaration | ContextDeclaration | UnsupportedUnit",
                unit,
            )],
            Self::SecondaryUnit { body } => vec![one(
                "body",
                "ArchitectureBody | PackageBody",
                body,
            )],
            Self::LibraryUnit { unit } => vec![one(
                "unit",
                "PrimaryUnit | SecondaryUnit",
                unit,
            )],
            Self::DesignUnit {
                context_clause,
                library_unit,
            } => vec![
                opt("context_clause", "ContextClause", context_clause),
                one("library_unit", "LibraryUnit", library_unit),
            ],
            Self::DesignFile { design_units } => {
                vec![many("design_units", "DesignUnit", design_units)]
            }
        }
    }
}
