use crate::util::anyerror::CodeFault;
use std::path::Path;
use std::path::PathBuf;

/// Reads the contents of `path` as text.
///
/// VHDL source files are specified as latin-1 encoded, so a file that is not
/// valid utf-8 is decoded byte-by-byte as latin-1 rather than rejected.
pub fn read_to_string(path: &Path) -> Result<String, CodeFault> {
    match std::fs::read_to_string(&path) {
        Ok(dump) => Ok(dump),
        Err(e) => {
            if e.kind() == std::io::ErrorKind::InvalidData {
                let bytes = match std::fs::read(&path) {
                    Ok(r) => r,
                    Err(e) => {
                        return Err(CodeFault(
                            Some(into_std_str(path.to_path_buf())),
                            Box::new(e),
                        ))
                    }
                };
                // latin-1 maps each byte directly to the same unicode code point
                Ok(bytes.into_iter().map(|b| b as char).collect())
            } else {
                Err(CodeFault(
                    Some(into_std_str(path.to_path_buf())),
                    Box::new(e),
                ))
            }
        }
    }
}

/// Replaces '\\' characters with single '/' character and converts the path
/// into a string.
pub fn into_std_str(path: PathBuf) -> String {
    let mut s = path.display().to_string().replace('\\', "/");
    if s.ends_with('/') == true {
        s.pop().unwrap();
    }
    s
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_path_display() {
        let p = PathBuf::from("c:\\users\\chase\\hdl");
        assert_eq!(into_std_str(p), "c:/users/chase/hdl".to_string());

        let p = PathBuf::from("/usr/share/vhdl/");
        assert_eq!(into_std_str(p), "/usr/share/vhdl".to_string());
    }

    #[test]
    fn latin1_fallback() {
        // 0xE9 is 'é' in latin-1 and invalid utf-8 on its own
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enc.vhd");
        std::fs::write(&path, b"-- caf\xe9\nentity e is end;\n").unwrap();
        let text = read_to_string(&path).unwrap();
        assert_eq!(text.contains("café"), true);
        assert_eq!(text.contains("entity e is end;"), true);
    }
}
