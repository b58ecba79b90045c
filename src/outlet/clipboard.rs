use anyhow::{Context, Result};

/// 剪贴板写入能力
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// 系统剪贴板
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("Failed to access system clipboard")?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .context("Failed to copy to clipboard")
    }
}
