use crate::index::sais::source::SainSeq;
use crate::util::bitset::Bitset;

/// S*-run 长度直方图上限；超过的归入溢出计数（仅诊断用）
pub const SSTAR_LENGTH_MAX: usize = 50;

/// 后缀分类结果：S/L 型位图与聚合统计。
///
/// 位图覆盖 [0, totallength]，totallength 处为隐式终止哨兵，
/// 恒为 S 型。位置 p 为 S 型当且仅当其后缀字典序小于 p+1 的后缀
/// （编码相等时由 p+1 的类型传递决定）。
pub struct SainInfo {
    is_s_type: Bitset,
    pub count_s: usize,
    /// S* 位置个数，含终止哨兵（最末实际位置恒为 L 型，
    /// 因此哨兵处的 L→S 转换必然发生一次）
    pub count_sstar: usize,
    pub total_sstar_length: usize,
    pub longer_than_max: usize,
    pub len_dist: [usize; SSTAR_LENGTH_MAX + 1],
}

impl SainInfo {
    /// 自右向左一次扫描完成分类。
    /// 要求 totallength >= 1（空序列由驱动层直接短路）。
    pub fn new(seq: &SainSeq) -> Self {
        let totallength = seq.totallength;
        debug_assert!(totallength >= 1);
        let mut info = Self {
            is_s_type: Bitset::new(totallength + 1),
            count_s: 0,
            count_sstar: 0,
            total_sstar_length: 0,
            longer_than_max: 0,
            len_dist: [0; SSTAR_LENGTH_MAX + 1],
        };
        info.is_s_type.set(totallength);

        let mut next_sstar_pos = totallength;
        let mut next_cc = seq.sentinel_code();
        let mut next_is_s = true;
        let mut position = totallength - 1;
        loop {
            let current_cc = seq.get_code(position);
            // 最末实际位置强制为 L 型：其后继是唯一最小的哨兵
            let current_is_s = position < totallength - 1
                && (current_cc < next_cc || (current_cc == next_cc && next_is_s));
            if current_is_s {
                info.count_s += 1;
                info.is_s_type.set(position);
            } else if next_is_s {
                // L→S 转换：position+1 是一个 S* 位置
                info.count_sstar += 1;
                debug_assert!(position < next_sstar_pos);
                let current_len = next_sstar_pos - position;
                info.total_sstar_length += current_len;
                if current_len <= SSTAR_LENGTH_MAX {
                    info.len_dist[current_len] += 1;
                } else {
                    info.longer_than_max += 1;
                }
                next_sstar_pos = position + 1;
            }
            next_is_s = current_is_s;
            next_cc = current_cc;
            if position == 0 {
                break;
            }
            position -= 1;
        }
        info
    }

    #[inline]
    pub fn totallength(&self) -> usize {
        self.is_s_type.len() - 1
    }

    #[inline]
    pub fn is_s_type(&self, position: usize) -> bool {
        self.is_s_type.get(position)
    }

    /// S* 判定：哨兵位置恒为 S*，其余为"S 型且前驱为 L 型"。
    #[inline]
    pub fn is_sstar(&self, position: usize) -> bool {
        position == self.totallength()
            || (position > 0 && self.is_s_type.get(position) && !self.is_s_type.get(position - 1))
    }

    /// 打印分类统计（CLI --stats 用）。
    pub fn show(&self) {
        let total = self.totallength() as f64;
        let sstar = self.count_sstar as f64;
        println!(
            "S-type: {} ({:.2})",
            self.count_s,
            self.count_s as f64 / total
        );
        println!("Sstar-type: {} ({:.2})", self.count_sstar, sstar / total);
        println!(
            "Sstar-type.length: {} ({:.2})",
            self.total_sstar_length,
            self.total_sstar_length as f64 / sstar
        );
        for (len, &count) in self.len_dist.iter().enumerate() {
            if count > 0 {
                println!("{} {} ({:.2})", len, count, count as f64 / sstar);
            }
        }
        if self.longer_than_max > 0 {
            println!(
                ">{} {} ({:.2})",
                SSTAR_LENGTH_MAX,
                self.longer_than_max,
                self.longer_than_max as f64 / sstar
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::EncodedSequence;

    fn classify_dna(dna: &[u8]) -> (EncodedSequence, SainInfo) {
        let enc = EncodedSequence::from_dna(dna);
        let info = {
            let seq = SainSeq::from_encseq(&enc);
            SainInfo::new(&seq)
        };
        (enc, info)
    }

    #[test]
    fn sentinel_is_always_sstar() {
        let (_, info) = classify_dna(b"A");
        assert!(info.is_s_type(1));
        assert!(info.is_sstar(1));
        // 唯一实际位置强制为 L 型
        assert!(!info.is_s_type(0));
        assert_eq!(info.count_sstar, 1);
    }

    #[test]
    fn classify_gtgta() {
        // G T G T A: 类型依次 S L S L L，S* = {2}，加哨兵共 2 个
        let (_, info) = classify_dna(b"GTGTA");
        assert!(info.is_s_type(0));
        assert!(!info.is_s_type(1));
        assert!(info.is_s_type(2));
        assert!(!info.is_s_type(3));
        assert!(!info.is_s_type(4));
        assert!(info.is_sstar(2));
        assert!(!info.is_sstar(0)); // 位置 0 没有前驱，不算 S*
        assert_eq!(info.count_sstar, 2);
        assert_eq!(info.count_s, 2);
    }

    #[test]
    fn equal_run_inherits_successor_type() {
        // A A A T: 相等编码由后继类型决定，AAA 全为 S 型
        let (_, info) = classify_dna(b"AAAT");
        assert!(info.is_s_type(0));
        assert!(info.is_s_type(1));
        assert!(info.is_s_type(2));
        assert!(!info.is_s_type(3));
        // 连续 S 段内部不是 S*
        assert!(!info.is_sstar(1));
        assert!(!info.is_sstar(2));
    }

    #[test]
    fn specials_are_never_sstar() {
        // special 折叠码随位置递增：段内各位为 S 型且其常规前驱
        // 必为 S 型，段尾（后继为常规码）为 L 型，故 special 永不为 S*
        let (_, info) = classify_dna(b"ANNA");
        for pos in 0..4 {
            if pos == 1 || pos == 2 {
                assert!(!info.is_sstar(pos), "special at {pos} must not be S*");
            }
        }
    }

    #[test]
    fn sstar_length_histogram_counts_runs() {
        let (_, info) = classify_dna(b"GTGTGTA");
        // S* 位置 {2, 4} 加哨兵；每段长度有界，无溢出
        assert_eq!(info.count_sstar, 3);
        assert_eq!(info.longer_than_max, 0);
        assert_eq!(
            info.len_dist.iter().sum::<usize>(),
            info.count_sstar,
            "每个 S* 段恰好进一个直方桶"
        );
    }
}
