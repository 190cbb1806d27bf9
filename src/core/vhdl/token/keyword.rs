use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub enum Keyword {
    Abs,
    Access,
    After,
    Alias,
    All,
    And,
    Architecture,
    Array,
    Assert,
    Assume,
    // AssumeGuarantee "assume_guarantee" is omitted from VHDL-2019 LRM
    Attribute,
    Begin,
    Block,
    Body,
    Buffer,
    Bus,
    Case,
    Component,
    Configuration,
    Constant,
    Context,
    Cover,
    Default,
    Disconnect,
    Downto,
    Else,
    Elsif,
    End,
    Entity,
    Exit,
    Fairness,
    File,
    For,
    Force,
    Function,
    Generate,
    Generic,
    Group,
    Guarded,
    If,
    Impure,
    In,
    Inertial,
    Inout,
    Is,
    Label,
    Library,
    Linkage,
    Literal,
    Loop,
    Map,
    Mod,
    Nand,
    New,
    Next,
    Nor,
    Not,
    Null,
    Of,
    On,
    Open,
    Or,
    Others,
    Out,
    Package,
    Parameter,
    Port,
    Postponed,
    Private,
    Procedure,
    Process,
    Property,
    Protected,
    Pure,
    Range,
    Record,
    Register,
    Reject,
    Release,
    Rem,
    Report,
    Restrict,
    Return,
    Rol,
    Ror,
    Select,
    Sequence,
    Severity,
    Signal,
    Shared,
    Sla,
    Sll,
    Sra,
    Srl,
    Strong,
    Subtype,
    Then,
    To,
    Transport,
    Type,
    Unaffected,
    Units,
    Until,
    Use,
    Variable,
    View,
    Vmode,
    Vpkg,
    Vprop,
    Vunit,
    Wait,
    When,
    While,
    With,
    Xnor,
    Xor,
}

impl Keyword {
    /// Attempts to match the given string of characters `s` to a VHDL keyword.
    ///
    /// Compares `s` against keywords using ascii lowercase comparison.
    pub fn match_keyword(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_ref() {
            "abs" => Self::Abs,
            "access" => Self::Access,
            "after" => Self::After,
            "alias" => Self::Alias,
            "all" => Self::All,
            "and" => Self::And,
            "architecture" => Self::Architecture,
            "array" => Self::Array,
            "assert" => Self::Assert,
            "assume" => Self::Assume,
            "attribute" => Self::Attribute,
            "begin" => Self::Begin,
            "block" => Self::Block,
            "body" => Self::Body,
            "buffer" => Self::Buffer,
            "bus" => Self::Bus,
            "case" => Self::Case,
            "component" => Self::Component,
            "configuration" => Self::Configuration,
            "constant" => Self::Constant,
            "context" => Self::Context,
            "cover" => Self::Cover,
            "default" => Self::Default,
            "disconnect" => Self::Disconnect,
            "downto" => Self::Downto,
            "else" => Self::Else,
            "elsif" => Self::Elsif,
            "end" => Self::End,
            "entity" => Self::Entity,
            "exit" => Self::Exit,
            "fairness" => Self::Fairness,
            "file" => Self::File,
            "for" => Self::For,
            "force" => Self::Force,
            "function" => Self::Function,
            "generate" => Self::Generate,
            "generic" => Self::Generic,
            "group" => Self::Group,
            "guarded" => Self::Guarded,
            "if" => Self::If,
            "impure" => Self::Impure,
            "in" => Self::In,
            "inertial" => Self::Inertial,
            "inout" => Self::Inout,
            "is" => Self::Is,
            "label" => Self::Label,
            "library" => Self::Library,
            "linkage" => Self::Linkage,
            "literal" => Self::Literal,
            "loop" => Self::Loop,
            "map" => Self::Map,
            "mod" => Self::Mod,
            "nand" => Self::Nand,
            "new" => Self::New,
            "next" => Self::Next,
            "nor" => Self::Nor,
            "not" => Self::Not,
            "null" => Self::Null,
            "of" => Self::Of,
            "on" => Self::On,
            "open" => Self::Open,
            "or" => Self::Or,
            "others" => Self::Others,
            "out" => Self::Out,
            "package" => Self::Package,
            "parameter" => Self::Parameter,
            "port" => Self::Port,
            "postponed" => Self::Postponed,
            "private" => Self::Private,
            "procedure" => Self::Procedure,
            "process" => Self::Process,
            "property" => Self::Property,
            "protected" => Self::Protected,
            "pure" => Self::Pure,
            "range" => Self::Range,
            "record" => Self::Record,
            "register" => Self::Register,
            "reject" => Self::Reject,
            "release" => Self::Release,
            "rem" => Self::Rem,
            "report" => Self::Report,
            "restrict" => Self::Restrict,
            "return" => Self::Return,
            "rol" => Self::Rol,
            "ror" => Self::Ror,
            "select" => Self::Select,
            "sequence" => Self::Sequence,
            "severity" => Self::Severity,
            "signal" => Self::Signal,
            "shared" => Self::Shared,
            "sla" => Self::Sla,
            "sll" => Self::Sll,
            "sra" => Self::Sra,
            "srl" => Self::Srl,
            "strong" => Self::Strong,
            "subtype" => Self::Subtype,
            "then" => Self::Then,
            "to" => Self::To,
            "transport" => Self::Transport,
            "type" => Self::Type,
            "unaffected" => Self::Unaffected,
            "units" => Self::Units,
            "until" => Self::Until,
            "use" => Self::Use,
            "variable" => Self::Variable,
            "view" => Self::View,
            "vmode" => Self::Vmode,
            "vpkg" => Self::Vpkg,
            "vprop" => Self::Vprop,
            "vunit" => Self::Vunit,
            "wait" => Self::Wait,
            "when" => Self::When,
            "while" => Self::While,
            "with" => Self::With,
            "xnor" => Self::Xnor,
            "xor" => Self::Xor,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Abs => "abs",
            Self::Access => "access",
            Self::After => "after",
            Self::Alias => "alias",
            Self::All => "all",
            Self::And => "and",
            Self::Architecture => "architecture",
            Self::Array => "array",
            Self::Assert => "assert",
            Self::Assume => "assume",
            Self::Attribute => "attribute",
            Self::Begin => "begin",
            Self::Block => "block",
            Self::Body => "body",
            Self::Buffer => "buffer",
            Self::Bus => "bus",
            Self::Case => "case",
            Self::Component => "component",
            Self::Configuration => "configuration",
            Self::Constant => "constant",
            Self::Context => "context",
            Self::Cover => "cover",
            Self::Default => "default",
            Self::Disconnect => "disconnect",
            Self::Downto => "downto",
            Self::Else => "else",
            Self::Elsif => "elsif",
            Self::End => "end",
            Self::Entity => "entity",
            Self::Exit => "exit",
            Self::Fairness => "fairness",
            Self::File => "file",
            Self::For => "for",
            Self::Force => "force",
            Self::Function => "function",
            Self::Generate => "generate",
            Self::Generic => "generic",
            Self::Group => "group",
            Self::Guarded => "guarded",
            Self::If => "if",
            Self::Impure => "impure",
            Self::In => "in",
            Self::Inertial => "inertial",
            Self::Inout => "inout",
            Self::Is => "is",
            Self::Label => "label",
            Self::Library => "library",
            Self::Linkage => "linkage",
            Self::Literal => "literal",
            Self::Loop => "loop",
            Self::Map => "map",
            Self::Mod => "mod",
            Self::Nand => "nand",
            Self::New => "new",
            Self::Next => "next",
            Self::Nor => "nor",
            Self::Not => "not",
            Self::Null => "null",
            Self::Of => "of",
            Self::On => "on",
            Self::Open => "open",
            Self::Or => "or",
            Self::Others => "others",
            Self::Out => "out",
            Self::Package => "package",
            Self::Parameter => "parameter",
            Self::Port => "port",
            Self::Postponed => "postponed",
            Self::Private => "private",
            Self::Procedure => "procedure",
            Self::Process => "process",
            Self::Property => "property",
            Self::Protected => "protected",
            Self::Pure => "pure",
            Self::Range => "range",
            Self::Record => "record",
            Self::Register => "register",
            Self::Reject => "reject",
            Self::Release => "release",
            Self::Rem => "rem",
            Self::Report => "report",
            Self::Restrict => "restrict",
            Self::Return => "return",
            Self::Rol => "rol",
            Self::Ror => "ror",
            Self::Select => "select",
            Self::Sequence => "sequence",
            Self::Severity => "severity",
            Self::Signal => "signal",
            Self::Shared => "shared",
            Self::Sla => "sla",
            Self::Sll => "sll",
            Self::Sra => "sra",
            Self::Srl => "srl",
            Self::Strong => "strong",
            Self::Subtype => "subtype",
            Self::Then => "then",
            Self::To => "to",
            Self::Transport => "transport",
            Self::Type => "type",
            Self::Unaffected => "unaffected",
            Self::Units => "units",
            Self::Until => "until",
            Self::Use => "use",
            Self::Variable => "variable",
            Self::View => "view",
            Self::Vmode => "vmode",
            Self::Vpkg => "vpkg",
            Self::Vprop => "vprop",
            Self::Vunit => "vunit",
            Self::Wait => "wait",
            Self::When => "when",
            Self::While => "while",
            Self::With => "with",
            Self::Xnor => "xnor",
            Self::Xor => "xor",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
