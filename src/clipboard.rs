//! Clipboard access

use crate::error::ConvertError;
use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::warn;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ConvertError>;
}

/// The platform clipboard. The context is opened lazily so a headless
/// session only fails when a copy is actually attempted.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ConvertError> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| {
                warn!(error = %e, "Clipboard unavailable");
                ConvertError::ClipboardUnavailable(e.to_string())
            })?;
            self.ctx = Some(ctx);
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(ConvertError::ClipboardUnavailable("no clipboard context".into()));
        };
        if let Err(e) = ctx.set_contents(text.to_string()) {
            warn!(error = %e, "Clipboard write failed");
            // Reopen on the next attempt
            self.ctx = None;
            return Err(ConvertError::ClipboardUnavailable(e.to_string()));
        }
        Ok(())
    }
}

/// Records writes in memory; optionally fails every write.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ConvertError> {
        if self.fail {
            return Err(ConvertError::ClipboardUnavailable("denied".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
