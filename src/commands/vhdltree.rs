use crate::commands::helps::vhdltree as help;
use crate::core::fileset;
use crate::core::project::Project;
use crate::core::vhdl::parse::ParserOptions;
use crate::util::anyerror::AnyError;
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the implicit library user files are folded into.
const WORK_LIBRARY: &str = "work";

#[derive(Debug, PartialEq)]
pub struct Vhdltree {
    version: bool,
    ambig: bool,
    cst: bool,
    tree: bool,
    ast: bool,
    json: bool,
    simple: bool,
    std: bool,
    debug: bool,
    timeout: Option<u64>,
    inputs: Option<Vec<PathBuf>>,
    excludes: Option<Vec<PathBuf>>,
    positionals: Vec<PathBuf>,
}

impl Command for Vhdltree {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(help::HELP))?;
        Ok(Vhdltree {
            // flags
            version: cli.check(Arg::flag("version"))?,
            ambig: cli.check(Arg::flag("ambig").switch('a'))?,
            cst: cli.check(Arg::flag("cst"))?,
            tree: cli.check(Arg::flag("tree"))?,
            ast: cli.check(Arg::flag("ast"))?,
            json: cli.check(Arg::flag("json"))?,
            simple: cli.check(Arg::flag("simple"))?,
            std: cli.check(Arg::flag("std"))?,
            debug: cli.check(Arg::flag("debug"))?,
            // options
            timeout: cli.get(Arg::option("timeout").value("sec"))?,
            inputs: cli.get_all(Arg::option("input").switch('i').value("path"))?,
            excludes: cli.get_all(Arg::option("exclude").switch('e').value("path"))?,
            // positionals
            positionals: cli
                .remainder()?
                .into_iter()
                .map(|p: String| PathBuf::from(p))
                .collect(),
        })
    }

    fn execute(self) -> proc::Result {
        if self.version == true {
            println!("vhdltree {}", VERSION);
            return Ok(());
        }
        self.run()
    }
}

impl Vhdltree {
    fn run(&self) -> Result<(), Fault> {
        // gather the source files to analyze
        let mut inputs = self.inputs.clone().unwrap_or(Vec::new());
        inputs.extend(self.positionals.iter().map(|p| p.clone()));
        if inputs.is_empty() == true {
            inputs.push(PathBuf::from("."));
        }
        let excludes = self.excludes.clone().unwrap_or(Vec::new());
        let files = fileset::collect_files(&inputs, &excludes)?;

        let options = ParserOptions {
            explicit_ambig: self.ambig,
            timeout: self.timeout.map(|t| Duration::from_secs(t)),
        };
        let mut project = Project::with_options(options);
        if self.std == true {
            project.add_standard_libraries()?;
        }
        project.add_library(WORK_LIBRARY)?;

        let mut failures = 0;
        for file in &files {
            // the verilog front-end is recognized but not implemented
            if fileset::is_verilog(&file) == true {
                eprintln!(
                    "{}: skipping verilog source file {}",
                    "warning".yellow().bold(),
                    filesystem::into_std_str(file.clone())
                );
                continue;
            }
            let timer = Instant::now();
            match project.add_file(WORK_LIBRARY, &file) {
                Ok(analyzed) => {
                    for warning in &analyzed.warnings {
                        eprintln!("{}: {}", "warning".yellow().bold(), warning);
                    }
                    if self.ambig == true {
                        println!(
                            "ambig nodes: {} before, {} after disambiguation",
                            analyzed.ambig_before, analyzed.ambig_after
                        );
                        if let Some(matches) = analyzed.verified {
                            println!(
                                "disambiguated tree matches: {}",
                                match matches {
                                    true => "true".green(),
                                    false => "false".red(),
                                }
                            );
                        }
                    }
                    if self.debug == true {
                        let elapsed = timer.elapsed().as_secs_f64();
                        let lines = filesystem::read_to_string(&file)
                            .map(|s| s.lines().count())
                            .unwrap_or(0);
                        println!(
                            "analyzed {} ({} lines) in {:.2} seconds ({:.2} lines/sec)",
                            filesystem::into_std_str(file.clone()),
                            lines,
                            elapsed,
                            match elapsed > 0.0 {
                                true => lines as f64 / elapsed,
                                false => f64::INFINITY,
                            }
                        );
                    }
                    if self.cst == true {
                        println!("{}", analyzed.cst.print_tree(analyzed.cst.get_root()));
                    }
                    if self.tree == true {
                        println!("{}", analyzed.cst.print_annotated(analyzed.cst.get_root()));
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}", "error".red().bold(), e);
                    failures += 1;
                }
            }
        }

        if self.ast == true {
            println!("{:#?}", project);
        }
        if self.json == true {
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
        if self.simple == true {
            print!("{}", project.print_simple());
        }

        match failures {
            0 => Ok(()),
            _ => Err(AnyError(format!(
                "failed to analyze {} source file(s)",
                failures
            )))?,
        }
    }
}
