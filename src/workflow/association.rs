//! Writes the problem directive back into the source file

use crate::directive::format_directive;
use crate::document::SourceFile;
use crate::error::Result;
use crate::language::comment_token;
use tracing::debug;

/// What [`write_association`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationWrite {
    /// A directive line was inserted
    Written,
    /// The inferred problem already matches; nothing written
    AlreadyAssociated,
    /// The language has no known comment token; nothing written
    UnsupportedLanguage,
}

/// Persist the confirmed problem into the document as a first-line directive
///
/// Writes only when nothing was inferred or the inferred ID differs from the
/// confirmed one, so an already-correct directive is never duplicated.
pub fn write_association(
    document: &mut SourceFile,
    attempted_problem_id: Option<u64>,
    problem_id: u64,
    language: &str,
) -> Result<AssociationWrite> {
    if attempted_problem_id == Some(problem_id) {
        return Ok(AssociationWrite::AlreadyAssociated);
    }

    let Some(token) = comment_token(language) else {
        debug!("No comment token for {language}; not writing directive");
        return Ok(AssociationWrite::UnsupportedLanguage);
    };

    // A stale directive below stays in place; only the first line is read.
    let line = format!("{}\n", format_directive(token, problem_id));
    document.insert_at_start(&line)?;
    debug!(
        "Associated {} with problem {problem_id}",
        document.path().display()
    );
    Ok(AssociationWrite::Written)
}
