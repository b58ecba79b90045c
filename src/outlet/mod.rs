//! 输出层 - 创意卡片的展示与复制
//!
//! 解析与生成只返回数据，所有副作用（终端输出、剪贴板）都经由这里的接口完成。

use anyhow::Result;

use crate::types::{IdeaRecord, find_idea};

mod card;
mod clipboard;

pub use card::{JsonPresenter, TerminalPresenter, render_card, render_cards};
pub use clipboard::{ClipboardSink, SystemClipboard};

/// 创意展示接口
pub trait IdeaPresenter {
    fn present(&mut self, ideas: &[IdeaRecord]) -> Result<()>;
}

/// 将指定id的创意复制到剪贴板
///
/// id不存在时什么也不做，返回 `Ok(false)`。
pub fn copy_idea(ideas: &[IdeaRecord], id: u32, sink: &mut dyn ClipboardSink) -> Result<bool> {
    let Some(idea) = find_idea(ideas, id) else {
        tracing::debug!(id, "no idea with this id, nothing copied");
        return Ok(false);
    };

    sink.write_text(&idea.clipboard_text())?;
    Ok(true)
}
