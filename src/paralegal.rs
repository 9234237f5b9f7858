//! Paralegal Mode: one request per line, each reply shown and saved as a draft.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::cli::{is_sentinel, MODE_SENTINELS};
use crate::errors::OmneuroError;
use crate::openai::Conversation;
use crate::session::{read_line, ModeContext};

/// Drafts from this mode land in `<drafts>/paralegal/`.
pub const CATEGORY: &str = "paralegal";
pub const PROMPT: &str = "Paralegal > ";
pub const SYSTEM_PROMPT: &str =
    "You are a highly skilled paralegal trained in Maryland traffic law, ADA compliance, \
and legal writing. Be precise, respectful, and produce submission-ready drafts with \
clear headings, proper citations when appropriate, and clean structure.";

/// Run the mode until a sentinel or end of input.
///
/// Completion and save failures are reported and the loop keeps going; only
/// console I/O errors end it early.
pub fn paralegal_loop(
    ctx: &ModeContext<'_>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), OmneuroError> {
    writeln!(output, "Paralegal Mode ready. Ask for drafts, filings, letters, etc.")?;
    writeln!(output, "   (type 'back' to return to the menu)\n")?;

    while let Some(line) = read_line(input, output, PROMPT)? {
        let user = line.trim();
        if is_sentinel(user, &MODE_SENTINELS) {
            break;
        }
        if user.is_empty() {
            continue;
        }

        let conversation = Conversation::instructed(SYSTEM_PROMPT, user);
        let reply = match ctx.client.complete(&conversation) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "completion failed");
                writeln!(output, "Error: {}\n", e)?;
                continue;
            }
        };
        info!(chars = reply.len(), "received draft");

        writeln!(output, "\n--- Draft ---\n")?;
        writeln!(output, "{}", reply)?;
        writeln!(output, "\n-------------\n")?;

        match ctx.drafts.save(user, &reply, Some(CATEGORY)) {
            Ok(path) => writeln!(output, "Saved to: {}\n", path.display())?,
            Err(e) => {
                warn!(error = %e, "could not save draft");
                writeln!(output, "Warning: could not save draft: {}\n", e)?;
            }
        }
    }
    Ok(())
}
