/// 定长位图：按 64 位机器字存储，每个位置一位。
/// 后缀分类（S/L 型标记）对每个位置只需一位，用位图可把
/// totallength+1 个标记压到 1/8 字节每位以内。
#[derive(Debug, Clone)]
pub struct Bitset {
    words: Vec<u64>,
    len: usize,
}

const WORD_BITS: usize = 64;

impl Bitset {
    /// 创建长度为 `len` 的全零位图。
    pub fn new(len: usize) -> Self {
        let nwords = (len + WORD_BITS - 1) / WORD_BITS;
        Self {
            words: vec![0u64; nwords],
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.words[idx / WORD_BITS] |= 1u64 << (idx % WORD_BITS);
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        (self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 != 0
    }

    /// 置位个数（诊断用）。
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
