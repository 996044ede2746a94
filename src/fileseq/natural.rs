//! # 自然顺序排序键
//!
//! 把文件名切分成交替的文本段和数字段，数字段按数值比较，
//! 文本段按字典序比较，使 `2.jpg` 排在 `10.jpg` 之前。
//!
//! ## 依赖关系
//! - 被 `fileseq/sequence.rs` 和 `commands/` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// 文件名中的一个记号：文本段或数字段
#[derive(Debug, Clone)]
enum Token {
    Text(String),
    Digits(String),
}

/// 自然排序键
///
/// 对同一文件名只构建一次，配合 `sort_by_cached_key` 使用。
/// 比较规则：逐记号比较，数字段按数值、文本段按字典序；
/// 全部相等时记号少的在前；数字段遇到文本段（一个名字以数字开头、
/// 另一个不以数字开头）退回整个文件名的字符串比较。
#[derive(Debug, Clone)]
pub struct NaturalKey {
    tokens: Vec<Token>,
    original: String,
}

/// 数字段匹配模式（全局只编译一次）
fn digit_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

impl NaturalKey {
    /// 从文件名构建排序键
    pub fn new(name: &str) -> Self {
        let mut tokens = Vec::new();
        let mut last = 0;

        for m in digit_runs().find_iter(name) {
            if m.start() > last {
                tokens.push(Token::Text(name[last..m.start()].to_string()));
            }
            tokens.push(Token::Digits(m.as_str().to_string()));
            last = m.end();
        }
        if last < name.len() {
            tokens.push(Token::Text(name[last..].to_string()));
        }

        NaturalKey {
            tokens,
            original: name.to_string(),
        }
    }
}

/// 按数值大小比较两段数字串
///
/// 去掉前导零后先比长度再比字典序，等价于任意精度的整数比较。
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.tokens.iter().zip(other.tokens.iter()) {
            let ord = match (a, b) {
                (Token::Digits(x), Token::Digits(y)) => cmp_digit_runs(x, y),
                (Token::Text(x), Token::Text(y)) => x.cmp(y),
                // 记号类型不一致：退回整个文件名的字符串比较
                _ => return self.original.cmp(&other.original),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.tokens.len().cmp(&other.tokens.len())
    }
}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NaturalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NaturalKey {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by_cached_key(|n| NaturalKey::new(n));
        v
    }

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert_eq!(
            sorted(&["a2.jpg", "a10.jpg", "a1.jpg"]),
            vec!["a1.jpg", "a2.jpg", "a10.jpg"]
        );
        assert_eq!(
            sorted(&["10.jpg", "2.jpg", "1.jpg"]),
            vec!["1.jpg", "2.jpg", "10.jpg"]
        );
    }

    #[test]
    fn test_digit_free_names_are_lexicographic() {
        assert_eq!(
            sorted(&["b.txt", "a.txt", "c.txt"]),
            vec!["a.txt", "b.txt", "c.txt"]
        );
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(
            sorted(&["010.png", "8.png", "007.png"]),
            vec!["007.png", "8.png", "010.png"]
        );
    }

    #[test]
    fn test_multiple_runs() {
        assert_eq!(
            sorted(&["ch2p10.jpg", "ch10p1.jpg", "ch2p9.jpg"]),
            vec!["ch2p9.jpg", "ch2p10.jpg", "ch10p1.jpg"]
        );
    }

    #[test]
    fn test_scene_numbered_outputs() {
        // ImageMagick 多页输出的命名形如 0-0.jpg, 0-1.jpg, ...
        assert_eq!(
            sorted(&["0-10.jpg", "0-2.jpg", "0-0.jpg", "0-1.jpg"]),
            vec!["0-0.jpg", "0-1.jpg", "0-2.jpg", "0-10.jpg"]
        );
    }

    #[test]
    fn test_shorter_prefix_sorts_first() {
        assert_eq!(sorted(&["a2b", "a2"]), vec!["a2", "a2b"]);
        assert_eq!(sorted(&["img1", "img"]), vec!["img", "img1"]);
    }

    #[test]
    fn test_digit_vs_text_falls_back_to_string_order() {
        // "2.jpg" 以数字开头而 "a.jpg" 不是，按整名字符串比较
        assert_eq!(sorted(&["a.jpg", "2.jpg"]), vec!["2.jpg", "a.jpg"]);
    }

    #[test]
    fn test_equal_value_different_padding() {
        assert_eq!(NaturalKey::new("a01"), NaturalKey::new("a1"));
        assert_eq!(
            NaturalKey::new("a01").cmp(&NaturalKey::new("a1")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_huge_digit_runs_do_not_overflow() {
        let big = "99999999999999999999999999999999.jpg";
        let bigger = "100000000000000000000000000000000.jpg";
        assert_eq!(sorted(&[bigger, big]), vec![big, bigger]);
    }
}
