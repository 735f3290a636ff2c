use crate::seq::EncodedSequence;

/// special 位置折叠进统一编码空间：取 UNIQUE_BASE + 位置，
/// 保证 (a) 大于一切常规编码，(b) 逐位置唯一且随位置递增。
/// 由此两个 special 前缀的先后自然由位置决定。
const UNIQUE_BASE: usize = usize::MAX / 2;

enum Source<'a> {
    /// 顶层：外部编码序列，可能含 special 位置
    Encoded(&'a EncodedSequence),
    /// 递归层：上一层 S*-子串的名字数组，无 special
    Reduced(&'a [usize]),
}

/// 一个递归层看到的"序列"：统一了编码序列与名字数组两种来源，
/// 每层构建一次，附带该层的长度 / 字母表大小 / 符号频次表。
pub struct SainSeq<'a> {
    source: Source<'a>,
    pub totallength: usize,
    pub numofchars: usize,
    pub specialcharacters: usize,
    pub bucketsize: Vec<usize>,
}

impl<'a> SainSeq<'a> {
    pub fn from_encseq(encseq: &'a EncodedSequence) -> Self {
        let numofchars = encseq.alphabet_size();
        let bucketsize = (0..numofchars)
            .map(|c| encseq.symbol_count(c as u8))
            .collect();
        Self {
            source: Source::Encoded(encseq),
            totallength: encseq.len(),
            numofchars,
            specialcharacters: encseq.special_count(),
            bucketsize,
        }
    }

    /// 名字数组来源：符号即 0..numofchars 的名字，频次现场统计。
    pub fn from_names(names: &'a [usize], numofchars: usize) -> Self {
        let mut bucketsize = vec![0usize; numofchars];
        for &name in names {
            debug_assert!(name < numofchars);
            bucketsize[name] += 1;
        }
        Self {
            source: Source::Reduced(names),
            totallength: names.len(),
            numofchars,
            specialcharacters: 0,
            bucketsize,
        }
    }

    /// 位置 pos 的折叠编码：常规符号取其编码，special 取唯一大值。
    #[inline]
    pub fn get_code(&self, pos: usize) -> usize {
        debug_assert!(pos < self.totallength);
        match self.source {
            Source::Encoded(encseq) => match encseq.get(pos) {
                Some(code) => code as usize,
                None => UNIQUE_BASE + pos,
            },
            Source::Reduced(names) => names[pos],
        }
    }

    /// 概念上位于 totallength 处的终止哨兵的折叠编码。
    /// 仅用于分类扫描的初始化；哨兵本身经 forced-L 规则
    /// 保证最末实际位置为 L 型，因此取值只需唯一。
    #[inline]
    pub fn sentinel_code(&self) -> usize {
        UNIQUE_BASE + self.totallength
    }

    /// 折叠编码是否为常规符号。
    #[inline]
    pub fn is_regular_code(&self, cc: usize) -> bool {
        cc < self.numofchars
    }

    /// 极大 special 区间，升序；名字数组来源恒为空。
    pub fn special_ranges(&self) -> &[(usize, usize)] {
        match self.source {
            Source::Encoded(encseq) => encseq.special_ranges(),
            Source::Reduced(_) => &[],
        }
    }
}
