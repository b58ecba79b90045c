use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// 创意难度
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 随机抽取时使用的固定候选表
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 预计耗时
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimatedTime {
    #[serde(rename = "15-30 min")]
    Quick,
    #[serde(rename = "30-60 min")]
    Standard,
    #[serde(rename = "1-2 hours")]
    Long,
}

impl EstimatedTime {
    pub const ALL: [EstimatedTime; 3] = [
        EstimatedTime::Quick,
        EstimatedTime::Standard,
        EstimatedTime::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstimatedTime::Quick => "15-30 min",
            EstimatedTime::Standard => "30-60 min",
            EstimatedTime::Long => "1-2 hours",
        }
    }
}

impl Display for EstimatedTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 解析后的单条内容创意
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    /// 从1开始的序号，按原文出现顺序
    pub id: u32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_time: EstimatedTime,
    /// 由标题推导的标签，最多3个
    pub tags: Vec<String>,
}

impl IdeaRecord {
    /// 复制到剪贴板时使用的纯文本
    pub fn clipboard_text(&self) -> String {
        format!(
            "{}\n\n{}\n\nDifficulty: {}\nEstimated Time: {}\nTags: {}",
            self.title,
            self.description,
            self.difficulty,
            self.estimated_time,
            self.tags.join(", ")
        )
    }
}

/// 按id在一批创意中查找
pub fn find_idea(ideas: &[IdeaRecord], id: u32) -> Option<&IdeaRecord> {
    ideas.iter().find(|idea| idea.id == id)
}
