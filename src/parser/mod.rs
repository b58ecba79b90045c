//! 创意文本解析器 - 将模型返回的编号列表转换为结构化的创意记录

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::types::{Difficulty, EstimatedTime, IdeaRecord};

mod tags;

pub use tags::{MAX_TAGS, derive_tags};

/// 没有描述行时使用的默认描述
pub const FALLBACK_DESCRIPTION: &str = "Create engaging content around this topic.";

/// 列表项起始标记：ASCII 数字 + `.` 或 `)`，其后必须还有内容
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[.)]\s*(.+)$").unwrap());

/// 正在累积的创意
struct DraftIdea {
    title: String,
    description: String,
}

impl DraftIdea {
    fn new(title: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            description: String::new(),
        }
    }

    fn append(&mut self, line: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(line);
    }
}

/// 使用线程本地随机源解析创意文本
pub fn parse_ideas(raw: &str) -> Vec<IdeaRecord> {
    parse_ideas_with(raw, &mut rand::rng())
}

/// 使用指定随机源解析创意文本
///
/// 难度与耗时仅由随机源决定，传入固定种子的随机源即可得到可复现的结果。
pub fn parse_ideas_with<R: Rng>(raw: &str, rng: &mut R) -> Vec<IdeaRecord> {
    let drafts = collect_drafts(raw);

    let ideas: Vec<IdeaRecord> = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| finalize(index, draft, rng))
        .collect();

    tracing::debug!(ideas = ideas.len(), "parsed idea list");
    ideas
}

/// 按行扫描，切分出每条创意的标题与描述
fn collect_drafts(raw: &str) -> Vec<DraftIdea> {
    let mut drafts = Vec::new();
    let mut current: Option<DraftIdea> = None;

    for line in raw.lines().map(trim_line).filter(|line| !line.is_empty()) {
        if let Some(captures) = LIST_MARKER.captures(line) {
            if let Some(done) = current.take() {
                drafts.push(done);
            }
            current = Some(DraftIdea::new(&captures[2]));
        } else if let Some(draft) = current.as_mut() {
            draft.append(line);
        }
        // 第一个编号之前的前导行直接丢弃
    }

    if let Some(done) = current {
        drafts.push(done);
    }

    drafts
}

/// 去除行首尾空白，包括 BOM
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn finalize<R: Rng>(index: usize, draft: DraftIdea, rng: &mut R) -> IdeaRecord {
    let description = if draft.description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        draft.description
    };

    let difficulty = Difficulty::ALL[rng.random_range(0..Difficulty::ALL.len())];
    let estimated_time = EstimatedTime::ALL[rng.random_range(0..EstimatedTime::ALL.len())];

    IdeaRecord {
        id: index as u32 + 1,
        tags: derive_tags(&draft.title),
        title: draft.title,
        description,
        difficulty,
        estimated_time,
    }
}
