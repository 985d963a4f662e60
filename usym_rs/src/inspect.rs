use std::path::Path;
use std::process::Command;

use regex::Regex;

/// Runs an external binary-header dump utility (objdump by default) and
/// pulls the `.text` virtual memory address out of its section table.
pub struct Inspector {
    program: String,
}

impl Inspector {
    pub fn new(program: &str) -> Inspector {
        Inspector {
            program: program.to_owned(),
        }
    }

    /// Blocks until the inspector process exits; there is no timeout.
    /// A non-zero exit carries the captured stderr back to the caller.
    pub fn text_vma(&self, path: &Path) -> Result<u64, String> {
        let output = Command::new(&self.program)
            .arg("--headers")
            .arg("--section=.text")
            .arg(path)
            .output()
            .map_err(|e| format!("failed to run {}: {}", self.program, e))?;

        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).into_owned());
        }

        parse_text_vma(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts the VMA from the `.text` row of a section header table. The
/// row's fourth whitespace-delimited field is the address, hex without a
/// `0x` prefix.
pub fn parse_text_vma(headers: &str) -> Result<u64, String> {
    let regexp = Regex::new(r"(?m)^\s*\d+\s+\.text\s+\S+\s+(\S+)")
        .expect("failed to compile regexp");

    let vma = regexp
        .captures(headers)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| "no .text section in headers output".to_owned())?;

    u64::from_str_radix(vma, 16).map_err(|e| format!("failed to parse address {}: {}", vma, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: &str = "\
user/usr/bin/shell.exec:     file format elf64-x86-64

Sections:
Idx Name          Size      VMA               LMA               File off  Algn
  0 .text         000011d0  0000000000401000  0000000000401000  00001000  2**4
                  CONTENTS, ALLOC, LOAD, READONLY, CODE
";

    #[test]
    fn parses_text_row_vma() {
        assert_eq!(parse_text_vma(HEADERS).unwrap(), 0x401000);
    }

    #[test]
    fn missing_text_row_is_an_error() {
        let headers = "\
Sections:
Idx Name          Size      VMA               LMA               File off  Algn
  1 .data         00000100  0000000000403000  0000000000403000  00003000  2**3
";
        let err = parse_text_vma(headers).unwrap_err();
        assert!(err.contains("no .text section"), "{}", err);
    }

    #[test]
    fn non_hex_vma_field_is_an_error() {
        let headers = "  0 .text 000011d0 not-an-address 0 0 2**4\n";
        let err = parse_text_vma(headers).unwrap_err();
        assert!(err.contains("failed to parse address"), "{}", err);
    }

    #[test]
    fn text_prefixed_sections_do_not_match() {
        let headers = "  0 .text.hot 00000010 0000000000405000 0 0 2**4\n";
        assert!(parse_text_vma(headers).is_err());
    }

    #[test]
    fn missing_inspector_program_fails() {
        let inspector = Inspector::new("/nonexistent/usym-objdump");
        let err = inspector.text_vma(Path::new("whatever")).unwrap_err();
        assert!(err.contains("failed to run"), "{}", err);
    }
}
