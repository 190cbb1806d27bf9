pub const HELP: &str = r#"Parse VHDL source code and analyze the project structure.

Usage:
    vhdltree [options] [<path>...]

Arguments:
    <path>...             a source file or directory to parse (default: .)

Options:
    --input, -i <path>    a source file or directory to parse
    --exclude, -e <path>  a path prefix to skip
    --ambig, -a           report explicit-ambiguity diagnostics while parsing
    --timeout <sec>       give up on a single file after this many seconds
    --cst                 print each file's concrete syntax tree
    --tree                print each file's syntax tree with type annotations
    --ast                 print the assembled project model
    --json                print the assembled project model as json
    --simple              print a compact summary of libraries and units
    --std                 pre-load the built-in std and ieee libraries
    --debug               print per-file timing diagnostics
    --version             print version information and exit
    --help, -h            print help information
"#;
