use crate::util::dna;

/// codes 内部用 0xFF 标记 special 位置（通配符 / contig 分隔符）
const SPECIAL: u8 = u8::MAX;

/// 编码序列视图：
/// - 常规碱基以 [0..SIGMA) 编码，O(1) 按位置取码
/// - 非常规位置（N 等通配符、contig 间分隔符）统一标记为 special，
///   排序时视为"逐位置唯一且大于一切常规符号"
/// - 构建时一次性统计每个符号的出现次数与 special 连续区间，
///   后缀排序核心只依赖这些只读信息
#[derive(Debug, Clone)]
pub struct EncodedSequence {
    codes: Vec<u8>,
    symbol_counts: [usize; dna::SIGMA],
    special_count: usize,
    /// 极大 special 连续段 [start, end)，按 start 升序、互不重叠
    special_ranges: Vec<(usize, usize)>,
}

impl EncodedSequence {
    /// 从单条 DNA 序列（ASCII，大小写均可）构建。
    pub fn from_dna(seq: &[u8]) -> Self {
        Self::from_contigs(std::iter::once(seq))
    }

    /// 从多条 contig 构建，相邻 contig 之间插入一个 special 分隔符。
    pub fn from_contigs<'a, I>(contigs: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut enc = Self {
            codes: Vec::new(),
            symbol_counts: [0; dna::SIGMA],
            special_count: 0,
            special_ranges: Vec::new(),
        };
        let mut first = true;
        for contig in contigs {
            if !first {
                enc.push_special();
            }
            first = false;
            for &b in contig {
                match dna::to_code(b) {
                    Some(code) => enc.push_code(code),
                    None => enc.push_special(),
                }
            }
        }
        enc
    }

    fn push_code(&mut self, code: u8) {
        debug_assert!((code as usize) < dna::SIGMA);
        self.symbol_counts[code as usize] += 1;
        self.codes.push(code);
    }

    fn push_special(&mut self) {
        let pos = self.codes.len();
        match self.special_ranges.last_mut() {
            // 与上一段 special 相邻则并入同一极大区间
            Some(range) if range.1 == pos => range.1 = pos + 1,
            _ => self.special_ranges.push((pos, pos + 1)),
        }
        self.special_count += 1;
        self.codes.push(SPECIAL);
    }

    /// 总长度（不含概念上位于 len() 处的终止哨兵）。
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// 常规字母表大小，编码取值 0..alphabet_size()。
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        dna::SIGMA
    }

    /// 编码 `code` 在全序列中的出现次数。
    #[inline]
    pub fn symbol_count(&self, code: u8) -> usize {
        self.symbol_counts[code as usize]
    }

    /// special 位置总数；与各 symbol_count 之和恰为 len()。
    #[inline]
    pub fn special_count(&self) -> usize {
        self.special_count
    }

    /// 位置 `pos` 的符号编码；special 位置返回 None。
    #[inline]
    pub fn get(&self, pos: usize) -> Option<u8> {
        let c = self.codes[pos];
        if c == SPECIAL {
            None
        } else {
            Some(c)
        }
    }

    /// 极大 special 区间 [start, end)，按 start 升序。
    #[inline]
    pub fn special_ranges(&self) -> &[(usize, usize)] {
        &self.special_ranges
    }
}
