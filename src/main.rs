use cliproc::*;
use std::env;
use vhdltree::Vhdltree;

fn main() -> ExitCode {
    Cli::default().parse(env::args()).go::<Vhdltree>()
}
