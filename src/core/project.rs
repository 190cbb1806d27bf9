use crate::core::vhdl::cst::{Cst, NodeId, NodeKind};
use crate::core::vhdl::parse::{ParserOptions, VhdlParser};
use crate::core::vhdl::stdlib;
use crate::util::anyerror::CodeFault;
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use crate::util::strcmp;
use serde_derive::Serialize;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LibraryError {
    #[error("library named {0} already exists")]
    DuplicateLibrary(String),
    #[error("no library named {0}")]
    UnknownLibrary(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ProjectError {
    #[error("entity {0} already exists")]
    EntityExists(String),
    #[error("entity {0} doesn't exist")]
    NoSuchEntity(String),
    #[error("entity {0} already has an architecture ({1})")]
    ArchitectureExists(String, String),
    #[error("package {0} already exists")]
    PackageExists(String),
    #[error("package {0} doesn't exist")]
    NoSuchPackage(String),
    #[error("package {0} already has a body")]
    BodyExists(String),
}

/// The object class of an interface net.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Constant,
    Signal,
    Variable,
}

impl Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Constant => "constant",
                Self::Signal => "signal",
                Self::Variable => "variable",
            }
        )
    }
}

/// The direction of an interface net. Omitted modes read as `in`.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    In,
    Out,
    Inout,
    Buffer,
    Linkage,
}

impl FromStr for Dir {
    type Err = Fault;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_ref() {
            "in" => Self::In,
            "out" => Self::Out,
            "inout" => Self::Inout,
            "buffer" => Self::Buffer,
            "linkage" => Self::Linkage,
            _ => {
                return Err(Box::new(crate::util::anyerror::AnyError(format!(
                    "unsupported mode {:?}",
                    s
                ))))
            }
        })
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::In => "in",
                Self::Out => "out",
                Self::Inout => "inout",
                Self::Buffer => "buffer",
                Self::Linkage => "linkage",
            }
        )
    }
}

/// A constant, signal, or variable appearing in a generic or port list.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct InterfaceNet {
    pub name: String,
    pub access: Access,
    #[serde(rename = "type")]
    pub datatype: String,
    pub default: Option<String>,
    pub dir: Dir,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct InterfaceType {
    pub name: String,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct InterfaceSubprogram {
    pub name: String,
    pub default: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct InterfacePackage {
    pub name: String,
    pub base_name: String,
}

/// The generic/port interface family shared by modules and packages.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum InterfaceElement {
    Net(InterfaceNet),
    Type(InterfaceType),
    Subprogram(InterfaceSubprogram),
    Package(InterfacePackage),
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Subprogram {
    pub name: String,
}

/// An entity together with its (at most one) architecture.
#[derive(Debug, PartialEq, Serialize)]
pub struct Module {
    name: String,
    files: BTreeSet<PathBuf>,
    arch_name: String,
    context: Vec<String>,
    parameters: Vec<InterfaceElement>,
    ports: Vec<InterfaceNet>,
    declarations: Vec<String>,
    statements: Vec<String>,
}

impl Module {
    fn new(name: String, file: PathBuf) -> Self {
        let mut files = BTreeSet::new();
        files.insert(file);
        Self {
            name: name,
            files: files,
            arch_name: String::new(),
            context: Vec::new(),
            parameters: Vec::new(),
            ports: Vec::new(),
            declarations: Vec::new(),
            statements: Vec::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_arch_name(&self) -> &str {
        &self.arch_name
    }

    pub fn get_files(&self) -> &BTreeSet<PathBuf> {
        &self.files
    }

    pub fn get_parameters(&self) -> &Vec<InterfaceElement> {
        &self.parameters
    }

    pub fn get_ports(&self) -> &Vec<InterfaceNet> {
        &self.ports
    }

    pub fn get_declarations(&self) -> &Vec<String> {
        &self.declarations
    }

    pub fn get_statements(&self) -> &Vec<String> {
        &self.statements
    }

    fn add_context(&mut self, ctx: Vec<String>) {
        self.context.extend(ctx);
    }

    /// Pulls the generic and port interfaces out of an entity declaration.
    fn add_entity(&mut self, cst: &Cst, entity: NodeId) -> Result<(), ProjectError> {
        let header = match cst.get(entity) {
            NodeKind::EntityDeclaration { entity_header, .. } => *entity_header,
            _ => return Ok(()),
        };
        if let NodeKind::EntityHeader {
            generic_clause,
            port_clause,
        } = cst.get(header)
        {
            if let Some(gc) = generic_clause {
                self.parameters = extract_generics(cst, *gc);
            }
            if let Some(pc) = port_clause {
                self.ports = extract_ports(cst, *pc);
            }
        }
        Ok(())
    }

    fn add_arch(&mut self, cst: &Cst, arch: NodeId) {
        if let NodeKind::ArchitectureBody {
            identifier,
            architecture_declarative_part,
            architecture_statement_part,
            ..
        } = cst.get(arch)
        {
            self.arch_name = cst.identifier_text(*identifier);
            self.declarations = architecture_declarative_part
                .iter()
                .map(|d| cst.format(*d))
                .collect();
            self.statements = architecture_statement_part
                .iter()
                .map(|s| cst.format(*s))
                .collect();
        }
    }
}

/// A package declaration folded into a library.
#[derive(Debug, PartialEq, Serialize)]
pub struct DeclaredPackage {
    name: String,
    files: BTreeSet<PathBuf>,
    has_body: bool,
    parameters: Vec<InterfaceElement>,
    components: Vec<String>,
    constants: Vec<String>,
    types: Vec<String>,
    subprograms: Vec<Subprogram>,
}

impl DeclaredPackage {
    fn new(name: String, file: PathBuf) -> Self {
        let mut files = BTreeSet::new();
        files.insert(file);
        Self {
            name: name,
            files: files,
            has_body: false,
            parameters: Vec::new(),
            components: Vec::new(),
            constants: Vec::new(),
            types: Vec::new(),
            subprograms: Vec::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn has_body(&self) -> bool {
        self.has_body
    }

    pub fn get_parameters(&self) -> &Vec<InterfaceElement> {
        &self.parameters
    }

    pub fn get_subprograms(&self) -> &Vec<Subprogram> {
        &self.subprograms
    }

    pub fn get_files(&self) -> &BTreeSet<PathBuf> {
        &self.files
    }

    /// Pulls the header generics and the declared items out of a package
    /// declaration.
    fn add_package(&mut self, cst: &Cst, pkg: NodeId) {
        let (header, declarative_part) = match cst.get(pkg) {
            NodeKind::PackageDeclaration {
                package_header,
                package_declarative_part,
                ..
            } => (*package_header, package_declarative_part.clone()),
            _ => return,
        };
        if let NodeKind::PackageHeader { generic_clause, .. } = cst.get(header) {
            if let Some(gc) = generic_clause {
                self.parameters = extract_generics(cst, *gc);
            }
        }
        for item in declarative_part {
            let inner = match cst.get(item) {
                NodeKind::PackageDeclarativeItem { item } => *item,
                _ => continue,
            };
            match cst.get(inner) {
                NodeKind::SubprogramDeclaration { specification } => {
                    self.subprograms.push(Subprogram {
                        name: subprogram_designator(cst, *specification),
                    });
                }
                NodeKind::SubprogramInstantiationDeclaration { identifier, .. } => {
                    self.subprograms.push(Subprogram {
                        name: cst.identifier_text(*identifier),
                    });
                }
                NodeKind::ComponentDeclaration { identifier, .. } => {
                    self.components.push(cst.identifier_text(*identifier));
                }
                NodeKind::ConstantDeclaration { identifiers, .. } => {
                    for id in identifiers {
                        self.constants.push(cst.identifier_text(*id));
                    }
                }
                NodeKind::TypeDeclaration { declaration } => match cst.get(*declaration) {
                    NodeKind::FullTypeDeclaration { identifier, .. }
                    | NodeKind::IncompleteTypeDeclaration { identifier } => {
                        self.types.push(cst.identifier_text(*identifier));
                    }
                    _ => (),
                },
                NodeKind::SubtypeDeclaration { identifier, .. } => {
                    self.types.push(cst.identifier_text(*identifier));
                }
                _ => (),
            }
        }
    }

    fn add_body(&mut self) {
        self.has_body = true;
    }
}

/// A key in an instanced package's generic map: a formal name, or the
/// position of the association.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum MapKey {
    Formal(String),
    Position(usize),
}

impl Display for MapKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formal(name) => write!(f, "{}", name),
            Self::Position(idx) => write!(f, "{}", idx),
        }
    }
}

/// Handle to a declared package within its owning library's package table.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct PackageId(usize);

/// An instantiation of a declared (uninstantiated) package.
#[derive(Debug, PartialEq, Serialize)]
pub struct InstancedPackage {
    name: String,
    files: BTreeSet<PathBuf>,
    declaration: PackageId,
    mapping: Vec<(MapKey, String)>,
}

impl InstancedPackage {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_declaration(&self) -> PackageId {
        self.declaration
    }

    pub fn get_mapping(&self) -> &Vec<(MapKey, String)> {
        &self.mapping
    }

    pub fn get_files(&self) -> &BTreeSet<PathBuf> {
        &self.files
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Package {
    Declared(DeclaredPackage),
    Instanced(InstancedPackage),
}

impl Package {
    pub fn get_name(&self) -> &str {
        match self {
            Self::Declared(p) => p.get_name(),
            Self::Instanced(p) => p.get_name(),
        }
    }

    pub fn as_declared(&self) -> Option<&DeclaredPackage> {
        match self {
            Self::Declared(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_instanced(&self) -> Option<&InstancedPackage> {
        match self {
            Self::Instanced(p) => Some(p),
            _ => None,
        }
    }
}

/// A namespace of design units, identified by a case-insensitive name.
#[derive(Debug, PartialEq, Serialize)]
pub struct Library {
    name: String,
    packages: Vec<Package>,
    modules: Vec<Module>,
}

impl Library {
    fn new(name: String) -> Self {
        Self {
            name: name,
            packages: Vec::new(),
            modules: Vec::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_modules(&self) -> &Vec<Module> {
        &self.modules
    }

    pub fn get_packages(&self) -> &Vec<Package> {
        &self.packages
    }

    pub fn get_module(&self, name: &str) -> Option<&Module> {
        self.modules
            .iter()
            .find(|m| strcmp::cmp_ignore_case(&m.name, name))
    }

    fn get_module_mut(&mut self, name: &str) -> Option<&mut Module> {
        self.modules
            .iter_mut()
            .find(|m| strcmp::cmp_ignore_case(&m.name, name))
    }

    pub fn get_package(&self, name: &str) -> Option<&Package> {
        self.packages
            .iter()
            .find(|p| strcmp::cmp_ignore_case(p.get_name(), name))
    }

    pub fn get_package_by_id(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(id.0)
    }

    fn find_declared(&self, name: &str) -> Option<usize> {
        self.packages
            .iter()
            .position(|p| p.as_declared().is_some() && strcmp::cmp_ignore_case(p.get_name(), name))
    }

    /// Folds one parsed design file into the library, dispatching each of its
    /// library units in order.
    ///
    /// Each unit either folds in completely or leaves the library untouched;
    /// a failing unit aborts the remainder of the file. Units with no model
    /// (configurations, context declarations) are reported back as warnings.
    pub fn add_cst(&mut self, cst: &Cst) -> Result<Vec<String>, ProjectError> {
        let file = cst.get_path().to_path_buf();
        let mut warnings = Vec::new();
        let root = cst.get_root();
        let design_units = match cst.get(root) {
            NodeKind::DesignFile { design_units } => design_units.clone(),
            _ => Vec::new(),
        };
        for du in design_units {
            let (context_clause, library_unit) = match cst.get(du) {
                NodeKind::DesignUnit {
                    context_clause,
                    library_unit,
                } => (*context_clause, *library_unit),
                _ => continue,
            };
            let ctx = context_clause
                .map(|c| {
                    cst.children(c)
                        .into_iter()
                        .map(|item| cst.format(item))
                        .collect::<Vec<String>>()
                })
                .unwrap_or(Vec::new());
            let unit = match cst.get(library_unit) {
                NodeKind::LibraryUnit { unit } => *unit,
                _ => continue,
            };
            let lu = match cst.get(unit) {
                NodeKind::PrimaryUnit { unit } => *unit,
                NodeKind::SecondaryUnit { body } => *body,
                _ => continue,
            };
            match cst.get(lu) {
                NodeKind::EntityDeclaration { identifier, .. } => {
                    let name = cst.identifier_text(*identifier);
                    if self.get_module(&name).is_some() == true {
                        return Err(ProjectError::EntityExists(name));
                    }
                    let mut module = Module::new(name, file.clone());
                    module.add_context(ctx);
                    module.add_entity(cst, lu)?;
                    self.modules.push(module);
                }
                NodeKind::ArchitectureBody { entity_name, .. } => {
                    let name = cst.format(*entity_name);
                    match self.get_module_mut(&name) {
                        Some(module) => {
                            if module.arch_name.is_empty() == false {
                                return Err(ProjectError::ArchitectureExists(
                                    name,
                                    module.arch_name.clone(),
                                ));
                            }
                            module.add_context(ctx);
                            module.add_arch(cst, lu);
                            module.files.insert(file.clone());
                        }
                        None => return Err(ProjectError::NoSuchEntity(name)),
                    }
                }
                NodeKind::PackageDeclaration { identifier, .. } => {
                    let name = cst.identifier_text(*identifier);
                    if self.get_package(&name).is_some() == true {
                        return Err(ProjectError::PackageExists(name));
                    }
                    let mut package = DeclaredPackage::new(name, file.clone());
                    package.add_package(cst, lu);
                    self.packages.push(Package::Declared(package));
                }
                NodeKind::PackageBody { simple_name, .. } => {
                    let name = cst.identifier_text(*simple_name);
                    match self.find_declared(&name) {
                        Some(idx) => {
                            let package = match &mut self.packages[idx] {
                                Package::Declared(p) => p,
                                _ => unreachable!("find_declared only yields declarations"),
                            };
                            if package.has_body == true {
                                return Err(ProjectError::BodyExists(name));
                            }
                            package.add_body();
                            package.files.insert(file.clone());
                        }
                        None => return Err(ProjectError::NoSuchPackage(name)),
                    }
                }
                NodeKind::PackageInstantiationDeclaration {
                    identifier,
                    uninstantiated_package_name,
                    generic_map_aspect,
                } => {
                    let inst = cst.identifier_text(*identifier);
                    let pkgname = cst.format(*uninstantiated_package_name);
                    // the base package resolves in this library only; a
                    // leading library prefix is split off for the lookup
                    let base = match pkgname.rsplit_once('.') {
                        Some((_, suffix)) => suffix.to_string(),
                        None => pkgname.clone(),
                    };
                    let declaration = match self.find_declared(&base) {
                        Some(idx) => PackageId(idx),
                        None => return Err(ProjectError::NoSuchPackage(pkgname)),
                    };
                    let mut mapping = Vec::new();
                    if let Some(aspect) = generic_map_aspect {
                        if let NodeKind::GenericMapAspect { association_list } = cst.get(*aspect) {
                            for (idx, assoc) in association_list.iter().enumerate() {
                                if let NodeKind::AssociationElement { formal, actual } =
                                    cst.get(*assoc)
                                {
                                    let key = match formal {
                                        Some(f) => MapKey::Formal(cst.format(*f)),
                                        None => MapKey::Position(idx),
                                    };
                                    mapping.push((key, cst.format(*actual)));
                                }
                            }
                        }
                    }
                    let mut files = BTreeSet::new();
                    files.insert(file.clone());
                    self.packages.push(Package::Instanced(InstancedPackage {
                        name: inst,
                        files: files,
                        declaration: declaration,
                        mapping: mapping,
                    }));
                }
                other => {
                    warnings.push(format!("unsupported {}", other.kind_name()));
                }
            }
        }
        Ok(warnings)
    }
}

/// The result of analyzing one source file: the typed tree, the warnings
/// collected while parsing and folding, and the ambiguity diagnostics.
#[derive(Debug)]
pub struct Analyzed {
    pub cst: Cst,
    pub warnings: Vec<String>,
    pub ambig_before: usize,
    pub ambig_after: usize,
    /// With explicit ambiguity requested, whether shaping the explicit forest
    /// reproduced the resolve-at-parse-time tree.
    pub verified: Option<bool>,
}

/// The full project: an ordered set of libraries plus the parser they share.
#[derive(Debug, Serialize)]
pub struct Project {
    libraries: Vec<Library>,
    #[serde(skip)]
    options: ParserOptions,
}

impl Project {
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            libraries: Vec::new(),
            options: options,
        }
    }

    pub fn get_libraries(&self) -> &Vec<Library> {
        &self.libraries
    }

    /// Appends a new empty library, failing when the case-insensitive name is
    /// already taken.
    pub fn add_library(&mut self, name: &str) -> Result<&mut Library, LibraryError> {
        if self
            .libraries
            .iter()
            .any(|l| strcmp::cmp_ignore_case(&l.name, name))
            == true
        {
            return Err(LibraryError::DuplicateLibrary(name.to_string()));
        }
        self.libraries.push(Library::new(name.to_string()));
        Ok(self.libraries.last_mut().unwrap())
    }

    pub fn get_library(&self, name: &str) -> Result<&Library, LibraryError> {
        self.libraries
            .iter()
            .find(|l| strcmp::cmp_ignore_case(&l.name, name))
            .ok_or(LibraryError::UnknownLibrary(name.to_string()))
    }

    fn get_library_mut(&mut self, name: &str) -> Result<&mut Library, LibraryError> {
        self.libraries
            .iter_mut()
            .find(|l| strcmp::cmp_ignore_case(&l.name, name))
            .ok_or(LibraryError::UnknownLibrary(name.to_string()))
    }

    /// Reads, parses, and folds one source file into the named library.
    ///
    /// Returns the typed tree along with the warnings collected while parsing
    /// and folding. Failures leave previously folded units intact.
    pub fn add_file(&mut self, lib: &str, path: &Path) -> Result<Analyzed, Fault> {
        let contents = filesystem::read_to_string(path)?;
        self.add_source(lib, path, &contents)
    }

    /// Parses in-memory source text under the given path label and folds it
    /// into the named library.
    pub fn add_source(
        &mut self,
        lib: &str,
        path: &Path,
        contents: &str,
    ) -> Result<Analyzed, Fault> {
        let parsed = match VhdlParser::read(contents, &self.options) {
            Ok(p) => p,
            Err(e) => {
                return Err(Box::new(CodeFault(
                    Some(filesystem::into_std_str(path.to_path_buf())),
                    Box::new(e),
                )))
            }
        };
        let mut tree = parsed.tree;
        tree.set_path(path);
        let mut warnings = parsed.warnings;
        // under explicit ambiguity, cross-check the shaped forest against the
        // resolve-at-parse-time reading
        let verified = match self.options.explicit_ambig {
            true => {
                let plain = ParserOptions {
                    explicit_ambig: false,
                    timeout: self.options.timeout,
                };
                match VhdlParser::read(contents, &plain) {
                    Ok(check) => Some(
                        check.tree.format(check.tree.get_root())
                            == tree.format(tree.get_root()),
                    ),
                    Err(_) => Some(false),
                }
            }
            false => None,
        };
        let library = self.get_library_mut(lib)?;
        let mut fold_warnings = match library.add_cst(&tree) {
            Ok(w) => w,
            // keep the contributing file on project-level failures
            Err(e) => {
                return Err(Box::new(CodeFault(
                    Some(filesystem::into_std_str(path.to_path_buf())),
                    Box::new(e),
                )))
            }
        };
        warnings.append(&mut fold_warnings);
        Ok(Analyzed {
            cst: tree,
            warnings: warnings,
            ambig_before: parsed.ambig_before,
            ambig_after: parsed.ambig_after,
            verified: verified,
        })
    }

    /// Pre-loads the built-in `std` and `ieee` libraries from the bundled
    /// distilled sources.
    pub fn add_standard_libraries(&mut self) -> Result<(), Fault> {
        self.add_library("std")?;
        for (path, text) in stdlib::STD_SOURCES {
            self.add_source("std", &PathBuf::from(path), text)?;
        }
        self.add_library("ieee")?;
        for (path, text) in stdlib::IEEE_SOURCES {
            self.add_source("ieee", &PathBuf::from(path), text)?;
        }
        Ok(())
    }

    /// Renders the compact human summary: libraries, their packages and
    /// modules, and each interface. The preloaded `std`/`ieee` libraries are
    /// skipped.
    pub fn print_simple(&self) -> String {
        let mut out = String::new();
        for lib in &self.libraries {
            if lib.name == "std" || lib.name == "ieee" {
                continue;
            }
            out.push_str(&format!("library {}\n", lib.name));
            for pkg in &lib.packages {
                let (decl, inst) = match pkg {
                    Package::Declared(p) => (p, None),
                    Package::Instanced(i) => {
                        let base = lib
                            .get_package_by_id(i.declaration)
                            .and_then(|p| p.as_declared());
                        match base {
                            Some(b) => (b, Some(i)),
                            None => continue,
                        }
                    }
                };
                let mut files: Vec<String> = decl
                    .files
                    .iter()
                    .map(|f| filesystem::into_std_str(f.clone()))
                    .collect();
                if let Some(i) = inst {
                    files.extend(
                        i.files
                            .iter()
                            .map(|f| filesystem::into_std_str(f.clone())),
                    );
                    files.sort();
                    files.dedup();
                }
                let title = match inst {
                    Some(i) => format!("{} is {}", i.name, decl.name),
                    None => decl.name.clone(),
                };
                out.push_str(&format!("\tpackage {} -> {:?}\n", title, files));
                if decl.parameters.is_empty() == false {
                    out.push_str("\t\tgeneric\n");
                    for (idx, p) in decl.parameters.iter().enumerate() {
                        // an instantiation's map overrides the declared default
                        let mapped = inst.and_then(|i| {
                            i.mapping
                                .iter()
                                .find(|(k, _)| match k {
                                    MapKey::Position(pos) => *pos == idx,
                                    MapKey::Formal(f) => {
                                        strcmp::cmp_ignore_case(f, interface_name(p))
                                    }
                                })
                                .map(|(_, actual)| actual.clone())
                        });
                        out.push_str(&format!(
                            "\t\t\t{}\n",
                            describe_interface(p, mapped.as_ref())
                        ));
                    }
                }
                if decl.subprograms.is_empty() == false {
                    out.push_str("\t\tsubprogram\n");
                    for s in &decl.subprograms {
                        out.push_str(&format!("\t\t\t{}\n", s.name));
                    }
                }
            }
            for module in &lib.modules {
                let files: Vec<String> = module
                    .files
                    .iter()
                    .map(|f| filesystem::into_std_str(f.clone()))
                    .collect();
                out.push_str(&format!(
                    "\tmodule {}({}) -> {:?}\n",
                    module.name, module.arch_name, files
                ));
                if module.parameters.is_empty() == false {
                    out.push_str("\t\tgeneric\n");
                    for p in &module.parameters {
                        out.push_str(&format!("\t\t\t{}\n", describe_interface(p, None)));
                    }
                }
                if module.ports.is_empty() == false {
                    out.push_str("\t\tport\n");
                    for p in &module.ports {
                        out.push_str(&format!(
                            "\t\t\t{} : {} {}{}\n",
                            p.name,
                            p.dir,
                            p.datatype,
                            match &p.default {
                                Some(d) => format!(" := {}", d),
                                None => String::new(),
                            }
                        ));
                    }
                }
            }
        }
        out
    }
}

fn interface_name(element: &InterfaceElement) -> &str {
    match element {
        InterfaceElement::Net(n) => &n.name,
        InterfaceElement::Type(t) => &t.name,
        InterfaceElement::Subprogram(s) => &s.name,
        InterfaceElement::Package(p) => &p.name,
    }
}

fn describe_interface(element: &InterfaceElement, mapped: Option<&String>) -> String {
    match element {
        InterfaceElement::Net(n) => {
            let default = mapped.cloned().or(n.default.clone());
            format!(
                "{} : {}{}",
                n.name,
                n.datatype,
                match default {
                    Some(d) => format!(" := {}", d),
                    None => String::new(),
                }
            )
        }
        InterfaceElement::Type(t) => format!("type {}", t.name),
        InterfaceElement::Subprogram(s) => {
            let default = mapped.cloned().or(s.default.clone());
            format!(
                "subprogram {}{}",
                s.name,
                match default {
                    Some(d) => format!(" := {}", d),
                    None => String::new(),
                }
            )
        }
        InterfaceElement::Package(p) => format!("package {} is {}", p.name, p.base_name),
    }
}

/// Fans a generic clause out into interface elements; each declaration's
/// identifier list contributes one element per name.
fn extract_generics(cst: &Cst, generic_clause: NodeId) -> Vec<InterfaceElement> {
    let mut parameters = Vec::new();
    let elements = match cst.get(generic_clause) {
        NodeKind::GenericClause { interface_elements } => interface_elements.clone(),
        _ => return parameters,
    };
    for element in elements {
        let declaration = match cst.get(element) {
            NodeKind::GenericInterfaceElement {
                generic_declaration,
            } => *generic_declaration,
            _ => continue,
        };
        match cst.get(declaration) {
            NodeKind::InterfaceConstantDeclaration {
                identifier_list,
                subtype_indication,
                default,
                ..
            } => {
                for id in identifier_list {
                    parameters.push(InterfaceElement::Net(InterfaceNet {
                        name: cst.identifier_text(*id),
                        access: Access::Constant,
                        datatype: cst.format(*subtype_indication),
                        default: default.map(|d| cst.format(d)),
                        dir: Dir::In,
                    }));
                }
            }
            NodeKind::InterfaceIncompleteTypeDeclaration { identifier } => {
                parameters.push(InterfaceElement::Type(InterfaceType {
                    name: cst.identifier_text(*identifier),
                }));
            }
            NodeKind::InterfaceSubprogramDeclaration {
                interface_subprogram_specification,
                interface_subprogram_default,
            } => {
                parameters.push(InterfaceElement::Subprogram(InterfaceSubprogram {
                    name: cst.format(*interface_subprogram_specification),
                    default: interface_subprogram_default.map(|d| cst.format(d)),
                }));
            }
            NodeKind::InterfacePackageDeclaration {
                identifier,
                uninstantiated_package_name,
                ..
            } => {
                parameters.push(InterfaceElement::Package(InterfacePackage {
                    name: cst.identifier_text(*identifier),
                    base_name: cst.format(*uninstantiated_package_name),
                }));
            }
            _ => (),
        }
    }
    parameters
}

/// Fans a port clause out into interface nets.
fn extract_ports(cst: &Cst, port_clause: NodeId) -> Vec<InterfaceNet> {
    let mut ports = Vec::new();
    let elements = match cst.get(port_clause) {
        NodeKind::PortClause { interface_elements } => interface_elements.clone(),
        _ => return ports,
    };
    for element in elements {
        let declaration = match cst.get(element) {
            NodeKind::PortInterfaceElement { port_declaration } => *port_declaration,
            _ => continue,
        };
        if let NodeKind::InterfaceSignalDeclaration {
            identifier_list,
            mode,
            subtype_indication,
            default,
            ..
        } = cst.get(declaration)
        {
            let dir = mode
                .and_then(|m| Dir::from_str(&cst.format(m)).ok())
                .unwrap_or(Dir::In);
            for id in identifier_list {
                ports.push(InterfaceNet {
                    name: cst.identifier_text(*id),
                    access: Access::Signal,
                    datatype: cst.format(*subtype_indication),
                    default: default.map(|d| cst.format(d)),
                    dir: dir.clone(),
                });
            }
        }
    }
    ports
}

fn subprogram_designator(cst: &Cst, specification: NodeId) -> String {
    let inner = match cst.get(specification) {
        NodeKind::SubprogramSpecification { specification } => *specification,
        _ => return cst.format(specification),
    };
    match cst.get(inner) {
        NodeKind::ProcedureSpecification { designator, .. }
        | NodeKind::FunctionSpecification { designator, .. } => cst.format(*designator),
        _ => cst.format(inner),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn project_with_work() -> Project {
        let mut project = Project::new();
        project.add_library("work").unwrap();
        project
    }

    #[test]
    fn library_names_are_case_insensitive_and_unique() {
        let mut project = Project::new();
        project.add_library("Gates").unwrap();
        assert_eq!(
            project.add_library("gates").unwrap_err(),
            LibraryError::DuplicateLibrary("gates".to_string())
        );
        assert_eq!(project.get_library("GATES").is_ok(), true);
        assert_eq!(
            project.get_library("missing").unwrap_err(),
            LibraryError::UnknownLibrary("missing".to_string())
        );
    }

    #[test]
    fn minimal_entity_becomes_a_module() {
        let mut project = project_with_work();
        project
            .add_source(
                "work",
                &PathBuf::from("e.vhd"),
                "entity e is port (a : in std_logic); end entity;",
            )
            .unwrap();
        let lib = project.get_library("work").unwrap();
        assert_eq!(lib.get_modules().len(), 1);
        let module = lib.get_module("e").unwrap();
        assert_eq!(module.get_arch_name(), "");
        assert_eq!(module.get_files().len(), 1);
        let ports = module.get_ports();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].name, "a");
        assert_eq!(ports[0].dir, Dir::In);
        assert_eq!(ports[0].datatype, "std_logic");
        assert_eq!(ports[0].default, None);
        assert_eq!(ports[0].access, Access::Signal);
    }

    #[test]
    fn architecture_joins_its_entity() {
        let mut project = project_with_work();
        project
            .add_source(
                "work",
                &PathBuf::from("e.vhd"),
                "entity e is port (a : in std_logic); end entity;",
            )
            .unwrap();
        project
            .add_source(
                "work",
                &PathBuf::from("rtl.vhd"),
                "architecture rtl of e is begin end;",
            )
            .unwrap();
        let module = project.get_library("work").unwrap().get_module("e").unwrap();
        assert_eq!(module.get_arch_name(), "rtl");
        assert_eq!(module.get_files().len(), 2);
    }

    #[test]
    fn architecture_without_entity_is_rejected() {
        let mut project = project_with_work();
        let result = project.add_source(
            "work",
            &PathBuf::from("rtl.vhd"),
            "architecture rtl of ghost is begin end;",
        );
        assert_eq!(
            result.unwrap_err().to_string().contains("doesn't exist"),
            true
        );
    }

    #[test]
    fn second_architecture_is_rejected_and_first_kept() {
        let mut project = project_with_work();
        project
            .add_source("work", &PathBuf::from("e.vhd"), "entity e is end;")
            .unwrap();
        project
            .add_source(
                "work",
                &PathBuf::from("rtl.vhd"),
                "architecture rtl of e is begin end;",
            )
            .unwrap();
        let result = project.add_source(
            "work",
            &PathBuf::from("beh.vhd"),
            "architecture beh of e is begin end;",
        );
        assert_eq!(result.is_err(), true);
        let module = project.get_library("work").unwrap().get_module("E").unwrap();
        assert_eq!(module.get_arch_name(), "rtl");
    }

    #[test]
    fn duplicate_entity_is_rejected() {
        let mut project = project_with_work();
        project
            .add_source("work", &PathBuf::from("a.vhd"), "entity e is end;")
            .unwrap();
        let result = project.add_source("work", &PathBuf::from("b.vhd"), "entity E is end;");
        assert_eq!(
            result.unwrap_err().to_string().contains("already exists"),
            true
        );
    }

    #[test]
    fn package_with_generics_and_subprograms() {
        let mut project = project_with_work();
        project
            .add_source(
                "work",
                &PathBuf::from("p.vhd"),
                "package p is generic (n : integer := 8; type t); function f return t; end package;",
            )
            .unwrap();
        let lib = project.get_library("work").unwrap();
        let pkg = lib.get_package("p").unwrap().as_declared().unwrap();
        assert_eq!(pkg.has_body(), false);
        let params = pkg.get_parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params[0],
            InterfaceElement::Net(InterfaceNet {
                name: "n".to_string(),
                access: Access::Constant,
                datatype: "integer".to_string(),
                default: Some("8".to_string()),
                dir: Dir::In,
            })
        );
        assert_eq!(
            params[1],
            InterfaceElement::Type(InterfaceType {
                name: "t".to_string()
            })
        );
        let subprograms = pkg.get_subprograms();
        assert_eq!(subprograms.len(), 1);
        assert_eq!(subprograms[0].name, "f");
    }

    #[test]
    fn package_body_pairs_with_declaration() {
        let mut project = project_with_work();
        project
            .add_source(
                "work",
                &PathBuf::from("p.vhd"),
                "package p is end package; package body p is end package body;",
            )
            .unwrap();
        let lib = project.get_library("work").unwrap();
        let pkg = lib.get_package("p").unwrap().as_declared().unwrap();
        assert_eq!(pkg.has_body(), true);

        // a second body is one too many
        let result = project.add_source(
            "work",
            &PathBuf::from("pb.vhd"),
            "package body p is end package body;",
        );
        assert_eq!(result.unwrap_err().to_string().contains("already has"), true);
    }

    #[test]
    fn body_without_package_is_rejected() {
        let mut project = project_with_work();
        let result = project.add_source(
            "work",
            &PathBuf::from("pb.vhd"),
            "package body ghost is end package body;",
        );
        assert_eq!(
            result.unwrap_err().to_string().contains("doesn't exist"),
            true
        );
    }

    #[test]
    fn generic_package_instantiation() {
        let mut project = project_with_work();
        project
            .add_source(
                "work",
                &PathBuf::from("p.vhd"),
                "package p is generic (n : integer); end; package q is new work.p generic map (n => 16);",
            )
            .unwrap();
        let lib = project.get_library("work").unwrap();
        let inst = lib.get_package("q").unwrap().as_instanced().unwrap();
        let base = lib
            .get_package_by_id(inst.get_declaration())
            .unwrap()
            .as_declared()
            .unwrap();
        assert_eq!(base.get_name(), "p");
        assert_eq!(
            inst.get_mapping(),
            &vec![(MapKey::Formal("n".to_string()), "16".to_string())]
        );
    }

    #[test]
    fn instantiation_of_unknown_package_is_rejected() {
        let mut project = project_with_work();
        let result = project.add_source(
            "work",
            &PathBuf::from("q.vhd"),
            "package q is new work.ghost generic map (n => 16);",
        );
        assert_eq!(
            result.unwrap_err().to_string().contains("doesn't exist"),
            true
        );
    }

    #[test]
    fn empty_design_file_leaves_no_trace() {
        let mut project = project_with_work();
        project
            .add_source("work", &PathBuf::from("empty.vhd"), "")
            .unwrap();
        let lib = project.get_library("work").unwrap();
        assert_eq!(lib.get_modules().is_empty(), true);
        assert_eq!(lib.get_packages().is_empty(), true);
    }

    #[test]
    fn standard_libraries_preload() {
        let mut project = Project::new();
        project.add_standard_libraries().unwrap();
        let std_lib = project.get_library("std").unwrap();
        assert_eq!(std_lib.get_package("standard").is_some(), true);
        assert_eq!(std_lib.get_package("textio").is_some(), true);
        let ieee = project.get_library("ieee").unwrap();
        assert_eq!(ieee.get_package("std_logic_1164").is_some(), true);
        assert_eq!(ieee.get_package("NUMERIC_STD").is_some(), true);
    }
}
