use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Contig {
    pub name: String,
    pub len: u32,
    pub offset: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct IndexMeta {
    pub reference_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 持久化的后缀表：
/// - positions 即 sort_suffixes 的输出（定长 u64，跨平台稳定）
/// - contig 元信息用于把文本位置映射回 (contig, 偏移)
/// - meta 记录构建来源与时间，便于复现
#[derive(Debug, Serialize, Deserialize)]
pub struct SuffixTable {
    pub positions: Vec<u64>,
    pub contigs: Vec<Contig>,
    pub meta: IndexMeta,
}

impl SuffixTable {
    pub fn build(suftab: Vec<usize>, contigs: Vec<Contig>) -> Self {
        Self {
            positions: suftab.into_iter().map(|p| p as u64).collect(),
            contigs,
            meta: IndexMeta::default(),
        }
    }

    pub fn set_meta(&mut self, meta: IndexMeta) {
        self.meta = meta;
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let mut f = std::fs::File::create(path)?;
        bincode::serialize_into(&mut f, self)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let table: Self = bincode::deserialize_from(f)?;
        Ok(table)
    }

    /// 将文本位置映射到 (contig_index, contig_offset)。
    /// 落在分隔符 / 通配位置之外的 contig 区间才有映射。
    pub fn map_text_pos(&self, pos: u32) -> Option<(usize, u32)> {
        if self.contigs.is_empty() {
            return None;
        }
        let mut lo = 0usize;
        let mut hi = self.contigs.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            let c = &self.contigs[mid];
            if pos < c.offset {
                hi = mid;
            } else if pos >= c.offset + c.len {
                lo = mid + 1;
            } else {
                return Some((mid, pos - c.offset));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_text_pos_binary_search() {
        let table = SuffixTable {
            positions: vec![],
            contigs: vec![
                Contig { name: "chr1".into(), len: 4, offset: 0 },
                Contig { name: "chr2".into(), len: 3, offset: 5 },
            ],
            meta: IndexMeta::default(),
        };
        assert_eq!(table.map_text_pos(0), Some((0, 0)));
        assert_eq!(table.map_text_pos(3), Some((0, 3)));
        // 分隔符位置不属于任何 contig
        assert_eq!(table.map_text_pos(4), None);
        assert_eq!(table.map_text_pos(5), Some((1, 0)));
        assert_eq!(table.map_text_pos(7), Some((1, 2)));
        assert_eq!(table.map_text_pos(8), None);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut table = SuffixTable::build(
            vec![4, 1, 0, 3, 2],
            vec![Contig { name: "ref".into(), len: 4, offset: 0 }],
        );
        table.set_meta(IndexMeta {
            reference_file: Some("ref.fa".into()),
            build_args: None,
            build_timestamp: None,
        });
        let dir = std::env::temp_dir();
        let path = dir.join("sain_rust_table_test.suftab");
        let path = path.to_str().unwrap();
        table.save_to_file(path).unwrap();
        let loaded = SuffixTable::load_from_file(path).unwrap();
        assert_eq!(loaded.positions, table.positions);
        assert_eq!(loaded.contigs.len(), 1);
        assert_eq!(loaded.meta.reference_file.as_deref(), Some("ref.fa"));
        let _ = std::fs::remove_file(path);
    }
}
