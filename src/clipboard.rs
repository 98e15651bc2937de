//! System clipboard backed by copypasta.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use passforge::{Clipboard, ClipboardError};

pub struct SystemClipboard(Option<ClipboardContext>);

impl SystemClipboard {
    /// Connect to the clipboard. Failure is remembered and reported on the
    /// first write.
    pub fn connect() -> Self {
        SystemClipboard(ClipboardContext::new().ok())
    }

    /// A clipboard that is never used.
    pub fn disabled() -> Self {
        SystemClipboard(None)
    }

    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self
            .0
            .as_mut()
            .ok_or_else(|| ClipboardError("clipboard unavailable".to_string()))?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))?;
        // Read back so the provider has served it, then wipe our copy.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
