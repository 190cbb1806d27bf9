use crate::util::anyerror::Fault;
use glob::glob;
use std::path::Path;
use std::path::PathBuf;

/// File extensions accepted as VHDL source code.
pub const VHDL_EXTENSIONS: [&str; 3] = ["vhd", "vhdl", "vht"];

/// File extensions recognized as Verilog/SystemVerilog source code. These are
/// reserved for a front-end that is not implemented; matching files are
/// reported and skipped.
pub const VLOG_EXTENSIONS: [&str; 11] = [
    "v", "vh", "verilog", "vlg", "vo", "vqm", "vt", "veo", "sv", "svh", "vlog",
];

/// Checks against file extensions to determine if the given file is VHDL source code.
pub fn is_vhdl(file: &Path) -> bool {
    match file.extension() {
        Some(ext) => VHDL_EXTENSIONS
            .iter()
            .any(|e| ext.eq_ignore_ascii_case(e) == true),
        None => false,
    }
}

/// Checks against file extensions to determine if the given file is Verilog source code.
pub fn is_verilog(file: &Path) -> bool {
    match file.extension() {
        Some(ext) => VLOG_EXTENSIONS
            .iter()
            .any(|e| ext.eq_ignore_ascii_case(e) == true),
        None => false,
    }
}

/// Checks if `file` falls under one of the `excludes` path prefixes.
fn is_excluded(file: &Path, excludes: &[PathBuf]) -> bool {
    excludes.iter().any(|ex| file.starts_with(ex) == true)
}

/// Gathers the list of VHDL files from the provided `includes` paths.
///
/// A file path is taken as-is (when not excluded); a directory is searched
/// recursively for files carrying a VHDL extension. The resulting list
/// preserves the order of `includes` and sorts the files found within a
/// directory for deterministic project assembly.
pub fn collect_files(includes: &[PathBuf], excludes: &[PathBuf]) -> Result<Vec<PathBuf>, Fault> {
    let mut files = Vec::new();
    for inpath in includes {
        if inpath.is_file() == true {
            if is_excluded(&inpath, excludes) == false {
                files.push(inpath.clone());
            }
        } else if inpath.is_dir() == true && is_excluded(&inpath, excludes) == false {
            let mut found = Vec::new();
            for ext in &VHDL_EXTENSIONS {
                let pattern = format!("{}/**/*.{}", inpath.display(), ext);
                for entry in glob(&pattern)? {
                    let path = entry?;
                    if path.is_file() == true && is_excluded(&path, excludes) == false {
                        found.push(path);
                    }
                }
            }
            found.sort();
            files.append(&mut found);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identify_vhdl_files() {
        assert_eq!(is_vhdl(&Path::new("alu.vhd")), true);
        assert_eq!(is_vhdl(&Path::new("alu.VHDL")), true);
        assert_eq!(is_vhdl(&Path::new("alu_tb.vht")), true);
        assert_eq!(is_vhdl(&Path::new("alu.v")), false);
        assert_eq!(is_vhdl(&Path::new("alu")), false);

        assert_eq!(is_verilog(&Path::new("alu.v")), true);
        assert_eq!(is_verilog(&Path::new("alu.sv")), true);
        assert_eq!(is_verilog(&Path::new("alu.vhd")), false);
    }

    #[test]
    fn collect_with_exclusion() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join("rtl")).unwrap();
        std::fs::create_dir(root.join("sim")).unwrap();
        std::fs::write(root.join("rtl/top.vhd"), "").unwrap();
        std::fs::write(root.join("rtl/alu.vhdl"), "").unwrap();
        std::fs::write(root.join("rtl/notes.txt"), "").unwrap();
        std::fs::write(root.join("sim/top_tb.vhd"), "").unwrap();

        let files = collect_files(&[root.to_path_buf()], &[]).unwrap();
        assert_eq!(files.len(), 3);

        let files = collect_files(&[root.to_path_buf()], &[root.join("sim")]).unwrap();
        assert_eq!(files.len(), 2);

        // direct file paths are taken as-is
        let files = collect_files(&[root.join("rtl/top.vhd")], &[]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
