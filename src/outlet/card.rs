use std::io::Write;

use anyhow::{Context, Result};

use crate::outlet::IdeaPresenter;
use crate::types::IdeaRecord;

/// 渲染单张创意卡片
pub fn render_card(idea: &IdeaRecord) -> String {
    let mut card = format!("💡 #{} {}\n   {}\n", idea.id, idea.title, idea.description);
    if !idea.tags.is_empty() {
        card.push_str(&format!("   🏷  {}\n", idea.tags.join(" · ")));
    }
    card.push_str(&format!(
        "   📈 {}   ⏱  {}\n",
        idea.difficulty, idea.estimated_time
    ));
    card
}

/// 渲染全部卡片，带数量标题
pub fn render_cards(ideas: &[IdeaRecord]) -> String {
    if ideas.is_empty() {
        return "⚠️ 未能从模型返回内容中解析出任何创意\n".to_string();
    }

    let cards: Vec<String> = ideas.iter().map(render_card).collect();
    format!("✨ {} ideas generated\n\n{}", ideas.len(), cards.join("\n"))
}

/// 终端卡片输出
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> IdeaPresenter for TerminalPresenter<W> {
    fn present(&mut self, ideas: &[IdeaRecord]) -> Result<()> {
        self.out
            .write_all(render_cards(ideas).as_bytes())
            .context("Failed to write idea cards")?;
        self.out.flush()?;
        Ok(())
    }
}

/// JSON 输出，字段名与页面使用的一致
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> IdeaPresenter for JsonPresenter<W> {
    fn present(&mut self, ideas: &[IdeaRecord]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, ideas)
            .context("Failed to serialize ideas")?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, EstimatedTime};

    fn idea(id: u32, tags: &[&str]) -> IdeaRecord {
        IdeaRecord {
            id,
            title: format!("Idea {}", id),
            description: "Some description.".to_string(),
            difficulty: Difficulty::Hard,
            estimated_time: EstimatedTime::Standard,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_card() {
        let card = render_card(&idea(3, &["Alpha", "Beta"]));

        assert_eq!(
            card,
            "💡 #3 Idea 3\n   Some description.\n   🏷  Alpha · Beta\n   📈 Hard   ⏱  30-60 min\n"
        );
    }

    #[test]
    fn test_render_card_without_tags() {
        let card = render_card(&idea(1, &[]));
        assert!(!card.contains("🏷"));
    }

    #[test]
    fn test_render_cards_header() {
        let output = render_cards(&[idea(1, &[]), idea(2, &[])]);
        assert!(output.starts_with("✨ 2 ideas generated\n\n💡 #1"));
        assert!(output.contains("💡 #2 Idea 2"));
    }

    #[test]
    fn test_terminal_presenter_empty() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.present(&[]).unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("未能"));
    }

    #[test]
    fn test_json_presenter() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.present(&[idea(1, &["Alpha"])]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["estimatedTime"], "30-60 min");
        assert_eq!(value[0]["tags"][0], "Alpha");
    }
}
