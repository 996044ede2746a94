//! # 顺序编号分配
//!
//! 把一组文件按自然顺序排成序列，给每个文件分配一个从 1 开始、
//! 连续无空洞的零填充编号作为目标文件名，扩展名原样保留。
//!
//! ## 依赖关系
//! - 被 `fileseq/rename.rs` 和 `commands/` 使用
//! - 使用 `fileseq/natural.rs`, `fileseq/scan.rs`

use crate::fileseq::natural::NaturalKey;
use crate::fileseq::scan::FileEntry;

/// 一条编号分配：原文件、序号和目标文件名
#[derive(Debug, Clone)]
pub struct Slot {
    /// 原文件
    pub entry: FileEntry,
    /// 序号，从 1 开始
    pub index: usize,
    /// 目标文件名，如 `01.jpg`
    pub target: String,
}

/// 整个文件集合的编号分配
///
/// 在任何重命名发生之前一次性算好，之后的两阶段重命名只照表执行。
#[derive(Debug, Clone)]
pub struct SequenceAssignment {
    slots: Vec<Slot>,
    width: usize,
}

impl SequenceAssignment {
    /// 按自然顺序构建编号分配
    pub fn build(mut entries: Vec<FileEntry>) -> Self {
        entries.sort_by_cached_key(|e| NaturalKey::new(e.name()));

        let width = pad_width(entries.len());
        let slots = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let index = i + 1;
                let target = format!("{:0width$}{}", index, entry.extension());
                Slot {
                    entry,
                    index,
                    target,
                }
            })
            .collect();

        SequenceAssignment { slots, width }
    }

    /// 按序号顺序返回所有分配
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// 分配条数
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 编号宽度
    pub fn width(&self) -> usize {
        self.width
    }
}

/// 编号宽度：最少两位，文件更多时按位数加宽
fn pad_width(count: usize) -> usize {
    let mut digits = 1;
    let mut bound = 10;
    while count >= bound {
        digits += 1;
        bound *= 10;
    }
    digits.max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|n| FileEntry::new(n)).collect()
    }

    fn targets(a: &SequenceAssignment) -> Vec<String> {
        a.slots().iter().map(|s| s.target.clone()).collect()
    }

    #[test]
    fn test_assignment_follows_natural_order() {
        let a = SequenceAssignment::build(entries(&["shot_3.png", "shot_1.png", "shot_2.png"]));
        let order: Vec<&str> = a.slots().iter().map(|s| s.entry.name()).collect();
        assert_eq!(order, vec!["shot_1.png", "shot_2.png", "shot_3.png"]);
        assert_eq!(targets(&a), vec!["01.png", "02.png", "03.png"]);
    }

    #[test]
    fn test_indices_are_contiguous_from_one() {
        let a = SequenceAssignment::build(entries(&["d.txt", "b.txt", "a.txt", "c.txt"]));
        let indices: Vec<usize> = a.slots().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);

        let mut uniq = targets(&a);
        uniq.sort();
        uniq.dedup();
        assert_eq!(uniq.len(), a.len());
    }

    #[test]
    fn test_extensions_preserved_verbatim() {
        let a = SequenceAssignment::build(entries(&["x.PNG", "y.jpeg", "README"]));
        let map: Vec<(&str, &str)> = a
            .slots()
            .iter()
            .map(|s| (s.entry.name(), s.target.as_str()))
            .collect();
        // 无数字的名字按字典序：README < x.PNG < y.jpeg
        assert_eq!(
            map,
            vec![("README", "01"), ("x.PNG", "02.PNG"), ("y.jpeg", "03.jpeg")]
        );
    }

    #[test]
    fn test_width_grows_with_count() {
        let few = SequenceAssignment::build(entries(&["a.jpg"]));
        assert_eq!(few.width(), 2);

        let names: Vec<String> = (0..120).map(|i| format!("f{}.jpg", i)).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let many = SequenceAssignment::build(entries(&refs));
        assert_eq!(many.width(), 3);
        assert_eq!(many.slots()[0].target, "001.jpg");
        assert_eq!(many.slots()[119].target, "120.jpg");
    }

    #[test]
    fn test_empty_set() {
        let a = SequenceAssignment::build(vec![]);
        assert!(a.is_empty());
        assert_eq!(a.width(), 2);
    }
}
