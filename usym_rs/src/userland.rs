use std::path::Path;

use crate::inspect::Inspector;
use crate::session::Session;

/// Attaches the symbol table of `path` to the session at its `.text` VMA,
/// then sets a breakpoint on the program entry. The breakpoint directive
/// depends on the symbol file being attached first, so the order is fixed;
/// if inspection fails nothing is sent at all.
pub fn attach_and_break(
    path: &Path,
    inspector: &Inspector,
    session: &mut dyn Session,
) -> Result<u64, String> {
    let vma = inspector
        .text_vma(path)
        .map_err(|e| format!("failed to inspect {}: {}", path.display(), e))?;

    session.execute(&format!("add-symbol-file {} 0x{:x}", path.display(), vma))?;
    session.execute("break main")?;

    Ok(vma)
}
