mod inspect;
mod locate;
mod session;
mod userland;

use std::path::PathBuf;

pub use inspect::{parse_text_vma, Inspector};
pub use locate::SearchPolicy;
pub use session::{Session, WriterSession};
pub use userland::attach_and_break;

/// Resolves a logical program name and attaches its symbols to the session.
/// Returns the resolved path and the `.text` VMA on success.
pub fn attach_userland(
    name: &str,
    policy: &SearchPolicy,
    inspector: &Inspector,
    session: &mut dyn Session,
) -> Result<(PathBuf, u64), String> {
    let path = policy
        .resolve(name)
        .map_err(|e| format!("failed to locate program: {}", e))?;

    let vma = attach_and_break(&path, inspector, session)?;

    Ok((path, vma))
}
