use crate::core::lexer::Position;

/// Handle into the syntax tree's arena of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A lexical token promoted into the syntax tree: its source text and position.
///
/// Keyword text is stored lowercase; identifiers, literals, and delimiters keep
/// the text required to reproduce the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    text: String,
    position: Position,
}

impl Terminal {
    pub fn new(text: String, position: Position) -> Self {
        Self {
            text: text,
            position: position,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn locate(&self) -> &Position {
        &self.position
    }
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The value stored under one named field of a node.
#[derive(Debug, Clone)]
pub enum FieldValue {
    One(NodeId),
    Opt(Option<NodeId>),
    Many(Vec<NodeId>),
}

impl FieldValue {
    /// Flattens the field into its ordered handles.
    pub fn ids(&self) -> Vec<NodeId> {
        match self {
            Self::One(id) => vec![*id],
            Self::Opt(id) => id.iter().map(|i| *i).collect(),
            Self::Many(ids) => ids.clone(),
        }
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::Many(_) => true,
            _ => false,
        }
    }
}

/// A named field of a node along with its declared type, used by the tree
/// renderings and the generic traversals.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub decl: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: &'static str, decl: &'static str, value: FieldValue) -> Self {
        Self {
            name: name,
            decl: decl,
            value: value,
        }
    }
}

/// One node kind per grammar production of VHDL-2008 as carried by this
/// front-end. Fields hold handles into the owning tree's arena; terminal
/// tokens appear as `Terminal` nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // -- forest bookkeeping ---------------------------------------------------
    /// A lexical token lifted into the tree.
    Terminal(Terminal),
    /// Alternative derivations spanning the identical source range. Only
    /// present before disambiguation completes.
    Ambig { alternatives: Vec<NodeId> },
    /// A design unit recognized but not modeled (configurations). The raw
    /// token run is preserved.
    UnsupportedUnit { tokens: Vec<NodeId> },

    // -- lexical wrappers -----------------------------------------------------
    ExtendedIdentifier {
        id: NodeId,
    },
    Identifier {
        id: NodeId,
    },
    CharacterLiteral {
        char: NodeId,
    },
    StringLiteral {
        string: NodeId,
    },
    BitStringLiteral {
        literal: NodeId,
    },
    DecimalLiteral {
        value: NodeId,
    },
    BasedLiteral {
        value: NodeId,
    },
    AbstractLiteral {
        abstract_literal: NodeId,
    },
    PhysicalLiteral {
        abstract_literal: Option<NodeId>,
        unit_name: NodeId,
    },
    NumericLiteral {
        numeric_literal: NodeId,
    },
    Literal {
        item: NodeId,
    },
    EnumerationLiteral {
        literal: NodeId,
    },

    // -- expressions ----------------------------------------------------------
    FunctionCall {
        name: NodeId,
        parameters: Vec<NodeId>,
    },
    QualifiedExpression {
        type_mark: NodeId,
        expression: NodeId,
    },
    Allocator {
        allocator: NodeId,
    },
    Primary {
        item: NodeId,
    },
    Factor {
        factor_op: Option<NodeId>,
        primary: NodeId,
        exponent: Option<NodeId>,
    },
    TermOp {
        op: NodeId,
        factor: NodeId,
    },
    Term {
        factor: NodeId,
        ops: Vec<NodeId>,
    },
    SimpleExpressionOp {
        op: NodeId,
        term: NodeId,
    },
    SimpleExpression {
        sign: Option<NodeId>,
        term: NodeId,
        ops: Vec<NodeId>,
    },
    ShiftExpression {
        expr1: NodeId,
        shift_op: Option<NodeId>,
        expr2: Option<NodeId>,
    },
    Relation {
        expr1: NodeId,
        rel_op: Option<NodeId>,
        expr2: Option<NodeId>,
    },
    LogicalExpression {
        logical_tokens: Vec<NodeId>,
    },
    Expression {
        conditional: Option<NodeId>,
        expression: NodeId,
    },

    // -- ranges and aggregates ------------------------------------------------
    RangeLiteral {
        left: NodeId,
        direction: NodeId,
        right: NodeId,
    },
    DiscreteRange {
        range: NodeId,
    },
    Choice {
        choice: NodeId,
    },
    Choices {
        choices: Vec<NodeId>,
    },
    ElementAssociation {
        choices: Option<NodeId>,
        expression: NodeId,
    },
    Aggregate {
        element_associations: Vec<NodeId>,
    },

    // -- names ----------------------------------------------------------------
    IndexedName {
        prefix: NodeId,
        expressions: Vec<NodeId>,
    },
    AttributeName {
        prefix: NodeId,
        signature: Option<NodeId>,
        attribute_designator: NodeId,
        expression: Option<NodeId>,
    },
    SliceName {
        prefix: NodeId,
        discrete_range: NodeId,
    },
    Name {
        name_val: NodeId,
    },
    Prefix {
        name: NodeId,
    },
    Suffix {
        name: NodeId,
    },
    SelectedName {
        prefix: NodeId,
        suffix: NodeId,
    },
    TypeMark {
        name: NodeId,
    },
    Signature {
        types: Vec<NodeId>,
        return_type: Option<NodeId>,
    },

    // -- resolutions, subtypes, constraints -----------------------------------
    RecordElementResolution {
        record_element_simple_name: NodeId,
        resolution_indication: NodeId,
    },
    RecordResolution {
        items: Vec<NodeId>,
    },
    ElementResolution {
        item: NodeId,
    },
    ResolutionIndication {
        item: NodeId,
    },
    SubtypeIndication {
        resolution_indication: Option<NodeId>,
        type_mark: NodeId,
        constraint: Option<NodeId>,
    },
    RangeConstraint {
        range: NodeId,
    },
    IndexConstraint {
        discrete_ranges: Vec<NodeId>,
    },
    RecordElementConstraint {
        record_element_simple_name: NodeId,
        constraint: NodeId,
    },
    RecordConstraint {
        record_element_constraints: Vec<NodeId>,
    },
    ArrayElementConstraint {
        element_constraint: NodeId,
    },
    ArrayConstraint {
        index_constraint: NodeId,
        array_element_constraint: Option<NodeId>,
    },
    Constraint {
        constraint: NodeId,
    },

    // -- type definitions -----------------------------------------------------
    EnumerationTypeDefinition {
        literals: Vec<NodeId>,
    },
    RangeTypeDefinition {
        range: NodeId,
    },
    SecondaryUnitDeclaration {
        identifier: NodeId,
        literal: NodeId,
    },
    PhysicalTypeDefinition {
        range: NodeId,
        primary_unit: NodeId,
        secondary_units: Vec<NodeId>,
        units_simple_name: Option<NodeId>,
    },
    ScalarTypeDefinition {
        definition: NodeId,
    },
    IndexSubtypeDefinition {
        type_mark: NodeId,
    },
    UnboundedArrayDefinition {
        definition: Vec<NodeId>,
        subtype_indication: NodeId,
    },
    ConstrainedArrayDefinition {
        index_constraint: NodeId,
        subtype_indication: NodeId,
    },
    ArrayTypeDefinition {
        definition: NodeId,
    },
    ElementDeclaration {
        identifiers: Vec<NodeId>,
        subtype_indication: NodeId,
    },
    RecordTypeDefinition {
        declarations: Vec<NodeId>,
        record_type_simple_name: Option<NodeId>,
    },
    CompositeTypeDefinition {
        definition: NodeId,
    },
    AccessTypeDefinition {
        subtype_indication: NodeId,
    },
    FileTypeDefinition {
        type_mark: NodeId,
    },
    ProtectedTypeDeclarativeItem {
        item: NodeId,
    },
    ProtectedTypeDeclaration {
        declarative_part: Vec<NodeId>,
        simple_name: Option<NodeId>,
    },
    ProtectedTypeBody {
        declarative_part: Vec<NodeId>,
        simple_name: Option<NodeId>,
    },
    ProtectedTypeDefinition {
        definition: NodeId,
    },
    TypeDefinition {
        definition: NodeId,
    },
    SubtypeDeclaration {
        identifier: NodeId,
        subtype_indication: NodeId,
    },
    FullTypeDeclaration {
        identifier: NodeId,
        type_definition: NodeId,
    },
    IncompleteTypeDeclaration {
        identifier: NodeId,
    },
    TypeDeclaration {
        declaration: NodeId,
    },

    // -- object declarations --------------------------------------------------
    ConstantDeclaration {
        identifiers: Vec<NodeId>,
        subtype_indication: NodeId,
        default: Option<NodeId>,
    },
    SignalDeclaration {
        identifiers: Vec<NodeId>,
        subtype_indication: NodeId,
        kind: Option<NodeId>,
        default: Option<NodeId>,
    },
    VariableDeclaration {
        shared: Option<NodeId>,
        identifiers: Vec<NodeId>,
        subtype_indication: NodeId,
        default: Option<NodeId>,
    },
    FileOpenInformation {
        open_kind: Option<NodeId>,
        name: NodeId,
    },
    FileDeclaration {
        identifier_list: Vec<NodeId>,
        subtype_indication: NodeId,
        open_info: Option<NodeId>,
    },
    AliasDesignator {
        designator: NodeId,
    },
    AliasDeclaration {
        alias_designator: NodeId,
        subtype_indication: Option<NodeId>,
        name: NodeId,
        signature: Option<NodeId>,
    },
    AttributeDeclaration {
        identifier: NodeId,
        type_mark: NodeId,
    },
    EntityTag {
        tag: NodeId,
    },
    EntityDesignator {
        entity_tag: NodeId,
        signature: Option<NodeId>,
    },
    EntityClass {
        entity_class: NodeId,
    },
    EntitySpecification {
        entity_name_list: Vec<NodeId>,
        entity_class: NodeId,
    },
    AttributeSpecification {
        designator: NodeId,
        specification: NodeId,
        expression: NodeId,
    },
    ComponentDeclaration {
        identifier: NodeId,
        is_token: Option<NodeId>,
        local_generic_clause: Option<NodeId>,
        local_port_clause: Option<NodeId>,
        component_simple_name: Option<NodeId>,
    },

    // -- interface elements and associations ----------------------------------
    InterfaceSignalDeclaration {
        signal: Option<NodeId>,
        identifier_list: Vec<NodeId>,
        mode: Option<NodeId>,
        subtype_indication: NodeId,
        bus: Option<NodeId>,
        default: Option<NodeId>,
    },
    InterfaceVariableDeclaration {
        variable: Option<NodeId>,
        identifier_list: Vec<NodeId>,
        mode: Option<NodeId>,
        subtype_indication: NodeId,
        default: Option<NodeId>,
    },
    InterfaceConstantDeclaration {
        constant: Option<NodeId>,
        identifier_list: Vec<NodeId>,
        mode: Option<NodeId>,
        subtype_indication: NodeId,
        default: Option<NodeId>,
    },
    InterfaceFileDeclaration {
        identifier_list: Vec<NodeId>,
        subtype_indication: NodeId,
    },
    InterfaceIncompleteTypeDeclaration {
        identifier: NodeId,
    },
    InterfacePackageGenericMapAspect {
        aspect: NodeId,
    },
    InterfacePackageDeclaration {
        identifier: NodeId,
        uninstantiated_package_name: NodeId,
        interface_package_generic_map_aspect: NodeId,
    },
    InterfaceProcedureSpecification {
        designator: NodeId,
        parameter: Option<NodeId>,
        formal_parameter_list: Vec<NodeId>,
    },
    InterfaceFunctionSpecification {
        pure: Option<NodeId>,
        designator: NodeId,
        parameter: Option<NodeId>,
        formal_parameter_list: Vec<NodeId>,
        type_mark: NodeId,
    },
    InterfaceSubprogramSpecification {
        aspect: NodeId,
    },
    InterfaceSubprogramDefault {
        name: NodeId,
    },
    InterfaceSubprogramDeclaration {
        interface_subprogram_specification: NodeId,
        interface_subprogram_default: Option<NodeId>,
    },
    GenericInterfaceElement {
        generic_declaration: NodeId,
    },
    ParameterInterfaceElement {
        parameter_declaration: NodeId,
    },
    PortInterfaceElement {
        port_declaration: NodeId,
    },
    GenericClause {
        interface_elements: Vec<NodeId>,
    },
    PortClause {
        interface_elements: Vec<NodeId>,
    },
    FormalPart {
        formal: NodeId,
    },
    ActualDesignator {
        inertial: Option<NodeId>,
        actual: NodeId,
    },
    ActualPart {
        actual: NodeId,
    },
    AssociationElement {
        formal: Option<NodeId>,
        actual: NodeId,
    },
    GenericMapAspect {
        association_list: Vec<NodeId>,
    },
    PortMapAspect {
        association_list: Vec<NodeId>,
    },

    // -- subprograms ----------------------------------------------------------
    Designator {
        designator: NodeId,
    },
    SubprogramHeader {
        elements: Vec<NodeId>,
        generic_map: Option<NodeId>,
    },
    ProcedureSpecification {
        designator: NodeId,
        subprogram_header: Option<NodeId>,
        parameter: Option<NodeId>,
        formal_parameter_list: Vec<NodeId>,
    },
    FunctionSpecification {
        pure: Option<NodeId>,
        designator: NodeId,
        subprogram_header: Option<NodeId>,
        parameter: Option<NodeId>,
        formal_parameter_list: Vec<NodeId>,
        type_mark: NodeId,
    },
    SubprogramSpecification {
        specification: NodeId,
    },
    SubprogramDeclaration {
        specification: NodeId,
    },
    SubprogramBody {
        specification: NodeId,
        declarative_part: Vec<NodeId>,
        statement_part: Vec<NodeId>,
        kind: Option<NodeId>,
        designator: Option<NodeId>,
    },
    SubprogramInstantiationDeclaration {
        kind: NodeId,
        identifier: NodeId,
        name: NodeId,
        signature: Option<NodeId>,
        generic_map_aspect: Option<NodeId>,
    },

    // -- sequential statements ------------------------------------------------
    WaveformElement {
        value: NodeId,
        time: Option<NodeId>,
    },
    Waveform {
        elements: Vec<NodeId>,
    },
    Target {
        target: NodeId,
    },
    DelayMechanism {
        time_expression: Option<NodeId>,
        mechanism: NodeId,
    },
    SimpleWaveformAssignment {
        target: NodeId,
        delay: Option<NodeId>,
        waveform: NodeId,
    },
    SimpleForceAssignment {
        target: NodeId,
        force_mode: Option<NodeId>,
        expression: NodeId,
    },
    SimpleReleaseAssignment {
        target: NodeId,
        force_mode: Option<NodeId>,
    },
    SimpleSignalAssignment {
        item: NodeId,
    },
    SignalAssignmentStatement {
        label: Option<NodeId>,
        assignment: NodeId,
    },
    SimpleVariableAssignment {
        target: NodeId,
        expression: NodeId,
    },
    VariableAssignmentStatement {
        label: Option<NodeId>,
        assignment: NodeId,
    },
    ElsifBranch {
        condition: NodeId,
        statements: Vec<NodeId>,
    },
    IfStatement {
        label: Option<NodeId>,
        condition: NodeId,
        if_branch_statements: Vec<NodeId>,
        elsif_branches: Vec<NodeId>,
        else_token: Option<NodeId>,
        else_branch_statements: Vec<NodeId>,
        label_end: Option<NodeId>,
    },
    CaseStatementAlternative {
        choices: NodeId,
        statements: Vec<NodeId>,
    },
    CaseStatement {
        label: Option<NodeId>,
        qmark: Option<NodeId>,
        expression: NodeId,
        alternatives: Vec<NodeId>,
        qmark_end: Option<NodeId>,
        label_end: Option<NodeId>,
    },
    ConditionClause {
        condition: NodeId,
    },
    WaitStatement {
        label: Option<NodeId>,
        sensitivity_clause: Vec<NodeId>,
        condition_clause: Option<NodeId>,
        timeout_clause: Option<NodeId>,
    },
    Assertion {
        condition: NodeId,
        report: Option<NodeId>,
        severity: Option<NodeId>,
    },
    AssertionStatement {
        label: Option<NodeId>,
        assertion: NodeId,
    },
    ReportStatement {
        label: Option<NodeId>,
        expression: NodeId,
        severity: Option<NodeId>,
    },
    ProcedureCall {
        procedure_name: NodeId,
        actual_parameter_part: Vec<NodeId>,
    },
    ProcedureCallStatement {
        label: Option<NodeId>,
        procedure_call: NodeId,
    },
    ReturnStatement {
        label: Option<NodeId>,
        expression: Option<NodeId>,
    },
    ParameterSpecification {
        identifier: NodeId,
        discrete_range: NodeId,
    },
    IterationScheme {
        spec: NodeId,
    },
    LoopStatement {
        loop_label: Option<NodeId>,
        iteration_scheme: Option<NodeId>,
        sequence_of_statements: Vec<NodeId>,
        loop_label_end: Option<NodeId>,
    },
    ExitStatement {
        label: Option<NodeId>,
        loop_label: Option<NodeId>,
        condition: Option<NodeId>,
    },
    NextStatement {
        label: Option<NodeId>,
        loop_label: Option<NodeId>,
        condition: Option<NodeId>,
    },
    NullStatement {
        label: Option<NodeId>,
    },
    SequentialStatement {
        item: NodeId,
    },

    // -- concurrent statements ------------------------------------------------
    ProcessSensitivityList {
        list: Vec<NodeId>,
    },
    ProcessStatement {
        process_label: Option<NodeId>,
        postponed: Option<NodeId>,
        process_sensitivity_list: Option<NodeId>,
        is_token: Option<NodeId>,
        process_declarative_part: Vec<NodeId>,
        process_statement_part: Vec<NodeId>,
        postponed_end: Option<NodeId>,
        process_label_end: Option<NodeId>,
    },
    SelectedWaveformPair {
        waveform: NodeId,
        choices: NodeId,
    },
    SelectedWaveforms {
        selections: Vec<NodeId>,
    },
    ConcurrentSelectedSignalAssignment {
        expression: NodeId,
        qmark: Option<NodeId>,
        target: NodeId,
        guarded: Option<NodeId>,
        delay_mechanism: Option<NodeId>,
        selected_waveforms: NodeId,
    },
    ConditionalWaveformPair {
        waveform: NodeId,
        condition: NodeId,
    },
    ConditionalWaveforms {
        pairs: Vec<NodeId>,
        else_waveform: Option<NodeId>,
    },
    ConcurrentConditionalSignalAssignment {
        target: NodeId,
        guarded: Option<NodeId>,
        delay_mechanism: Option<NodeId>,
        conditional_waveforms: NodeId,
    },
    ConcurrentSimpleSignalAssignment {
        target: NodeId,
        guarded: Option<NodeId>,
        delay_mechanism: Option<NodeId>,
        waveform: NodeId,
    },
    ConcurrentSignalAssignmentStatement {
        label: Option<NodeId>,
        postponed: Option<NodeId>,
        assignment: NodeId,
    },
    InstantiatedComponent {
        component_token: Option<NodeId>,
        component_name: NodeId,
    },
    InstantiatedEntity {
        entity_name: NodeId,
        architecture_identifier: Option<NodeId>,
    },
    InstantiatedConfiguration {
        configuration_name: NodeId,
    },
    ComponentInstantiationStatement {
        label: NodeId,
        unit: NodeId,
        generic_map: Option<NodeId>,
        port_map: Option<NodeId>,
    },
    BlockHeader {
        generic_clause: Option<NodeId>,
        generic_map_aspect: Option<NodeId>,
        port_clause: Option<NodeId>,
        port_map_aspect: Option<NodeId>,
    },
    BlockStatement {
        label: NodeId,
        guard_condition: Option<NodeId>,
        is_token: Option<NodeId>,
        block_header: NodeId,
        block_declarative_part: Vec<NodeId>,
        block_statement_part: Vec<NodeId>,
        label_end: Option<NodeId>,
    },
    GenerateStatementBody {
        block_declarative_part: Vec<NodeId>,
        begin_token: Option<NodeId>,
        block_statement_part: Vec<NodeId>,
    },
    ForGenerateStatement {
        label: NodeId,
        generate_parameter_specification: NodeId,
        generate_statement_body: NodeId,
        label_end: Option<NodeId>,
    },
    ElsifGenerateBranch {
        alternative_label: Option<NodeId>,
        condition: NodeId,
        body: NodeId,
    },
    IfGenerateStatement {
        label: NodeId,
        if_label: Option<NodeId>,
        condition: NodeId,
        if_body: NodeId,
        elsif_branches: Vec<NodeId>,
        else_label: Option<NodeId>,
        else_body: Option<NodeId>,
        label_end: Option<NodeId>,
    },
    CaseGenerateAlternative {
        alternative_label: Option<NodeId>,
        choices: NodeId,
        body: NodeId,
    },
    CaseGenerateStatement {
        label: NodeId,
        expression: NodeId,
        alternatives: Vec<NodeId>,
        label_end: Option<NodeId>,
    },
    ConcurrentProcedureCallStatement {
        label: Option<NodeId>,
        postponed: Option<NodeId>,
        procedure_call: NodeId,
    },
    ConcurrentAssertionStatement {
        label: Option<NodeId>,
        postponed: Option<NodeId>,
        assertion: NodeId,
    },
    ConcurrentStatement {
        item: NodeId,
    },

    // -- declarative regions --------------------------------------------------
    EntityDeclarativeItem {
        item: NodeId,
    },
    EntityStatement {
        tokens: Vec<NodeId>,
    },
    EntityStatementPart {
        items: Vec<NodeId>,
    },
    EntityHeader {
        generic_clause: Option<NodeId>,
        port_clause: Option<NodeId>,
    },
    BlockDeclarativeItem {
        item: NodeId,
    },
    DeclarativeItem {
        item: NodeId,
    },
    PackageDeclarativeItem {
        item: NodeId,
    },

    // -- design units ---------------------------------------------------------
    EntityDeclaration {
        identifier: NodeId,
        entity_header: NodeId,
        entity_declarative_part: Vec<NodeId>,
        entity_statement_part: Option<NodeId>,
        entity_token: Option<NodeId>,
        element_simple_name: Option<NodeId>,
    },
    ArchitectureBody {
        identifier: NodeId,
        entity_name: NodeId,
        architecture_declarative_part: Vec<NodeId>,
        architecture_statement_part: Vec<NodeId>,
        architecture_token: Option<NodeId>,
        architecture_simple_name: Option<NodeId>,
    },
    PackageHeader {
        generic_clause: Option<NodeId>,
        generic_map_aspect: Option<NodeId>,
    },
    PackageDeclaration {
        identifier: NodeId,
        package_header: NodeId,
        package_declarative_part: Vec<NodeId>,
        package_token: Option<NodeId>,
        package_simple_name: Option<NodeId>,
    },
    PackageBody {
        simple_name: NodeId,
        declarative_part: Vec<NodeId>,
        package_token: Option<NodeId>,
        simple_name_end: Option<NodeId>,
    },
    PackageInstantiationDeclaration {
        identifier: NodeId,
        uninstantiated_package_name: NodeId,
        generic_map_aspect: Option<NodeId>,
    },
    ContextDeclaration {
        identifier: NodeId,
        context_clause: NodeId,
        simple_name: Option<NodeId>,
    },
    LogicalName {
        identifier: NodeId,
    },
    LibraryClause {
        logical_names: Vec<NodeId>,
    },
    UseClause {
        selected_names: Vec<NodeId>,
    },
    ContextReference {
        selected_names: Vec<NodeId>,
    },
    ContextItem {
        clause: NodeId,
    },
    ContextClause {
        context_items: Vec<NodeId>,
    },
    PrimaryUnit {
        unit: NodeId,
    },
    SecondaryUnit {
        body: NodeId,
    },
    LibraryUnit {
        unit: NodeId,
    },
    DesignUnit {
        context_clause: Option<NodeId>,
        library_unit: NodeId,
    },
    DesignFile {
        design_units: Vec<NodeId>,
    },
}

impl NodeKind {
    /// Casts `self` to a terminal token.
    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Self::Terminal(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Terminal(_) => true,
            _ => false,
        }
    }

    pub fn is_ambig(&self) -> bool {
        match self {
            Self::Ambig { .. } => true,
            _ => false,
        }
    }
}
