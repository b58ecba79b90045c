/// 生成标签时忽略的常见词
const STOPWORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// 单条标题最多产生的标签数
pub const MAX_TAGS: usize = 3;

/// 从标题推导标签
///
/// 标题转小写后按单个空格切分，丢弃长度不超过3的词和常见词，
/// 保留前3个，并将首字母大写（其余部分保持原样，包括标点）。
pub fn derive_tags(title: &str) -> Vec<String> {
    title
        .to_lowercase()
        .split(' ')
        .filter(|word| word.chars().count() > 3)
        .filter(|word| !STOPWORDS.contains(word))
        .take(MAX_TAGS)
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_tags_basic() {
        assert_eq!(
            derive_tags("Buy organic coffee beans"),
            vec!["Organic", "Coffee", "Beans"]
        );
    }

    #[test]
    fn test_derive_tags_short_words_dropped() {
        assert!(derive_tags("Go").is_empty());
        assert!(derive_tags("Try it").is_empty());
    }

    #[test]
    fn test_derive_tags_truncates_after_filtering() {
        assert_eq!(
            derive_tags("The best guide to planning weekly healthy meals"),
            vec!["Best", "Guide", "Planning"]
        );
    }

    #[test]
    fn test_derive_tags_long_stopword() {
        assert_eq!(
            derive_tags("Cooking with herbs daily"),
            vec!["Cooking", "Herbs", "Daily"]
        );
    }

    #[test]
    fn test_derive_tags_keeps_punctuation() {
        assert_eq!(
            derive_tags("\"Zero-Waste\" Kitchen: Tips!"),
            vec!["\"zero-waste\"", "Kitchen:", "Tips!"]
        );
    }

    #[test]
    fn test_derive_tags_lowercases_rest_of_word() {
        assert_eq!(derive_tags("YOUTUBE Growth"), vec!["Youtube", "Growth"]);
    }

    #[test]
    fn test_derive_tags_repeated_spaces() {
        assert_eq!(derive_tags("Travel   journal"), vec!["Travel", "Journal"]);
    }

    #[test]
    fn test_derive_tags_counts_chars_not_bytes() {
        // "café" 为4个字符，保留；"été" 为3个字符，丢弃
        assert_eq!(derive_tags("été café"), vec!["Café"]);
    }
}
