//! 归约与命名：诱导一轮之后，S* 条目的相对序即 S*-子串序。
//! 本模块把它们稳定压到数组前部、为相邻子串做带长度的三路比较、
//! 按半下标（position/2，S* 不相邻故不冲突）写名字，再把稀疏
//! 名字表压实并补上哨兵自己的名字 0，构成下一层的归约序列。

use std::cmp::Ordering;

use crate::index::sais::classify::SainInfo;
use crate::index::sais::source::SainSeq;
use crate::index::sais::suftab::Suftab;

/// 把已填区间里的 S* 条目稳定前移到 [0, count_sstar)，
/// 其余槽位（直到 available）全部置为未定义。
pub fn move_sstar_to_front(
    info: &SainInfo,
    suftab: &mut Suftab,
    regularpositions: usize,
    available: usize,
) {
    let count = info.count_sstar;
    let mut ridx = 0;
    while ridx < regularpositions {
        let position = suftab.get_defined(ridx);
        if !info.is_sstar(position) {
            break;
        }
        ridx += 1;
    }
    if ridx < count {
        let mut widx = ridx;
        ridx += 1;
        loop {
            debug_assert!(widx < ridx && ridx < regularpositions);
            let position = suftab.get_defined(ridx);
            if info.is_sstar(position) {
                suftab.set(widx, position);
                widx += 1;
                suftab.clear(ridx);
                if widx == count {
                    break;
                }
            }
            ridx += 1;
        }
    }
    debug_assert!(available > 0);
    suftab.clear_range(count, available);
}

/// S*-子串三路比较：逐位比较折叠编码；编码相等时 S 型大于 L 型；
/// 双方都到达下一个 S* 边界才算相等（等内容且等长），一方先到
/// 边界则较短者小。起点本身是 S*，首轮比较跳过边界判定。
pub fn compare_sstar_strings(
    seq: &SainSeq,
    info: &SainInfo,
    mut start1: usize,
    mut start2: usize,
) -> Ordering {
    let totallength = seq.totallength;
    debug_assert!(start1 <= totallength && start2 <= totallength && start1 != start2);
    let mut firstcmp = true;
    loop {
        if start1 == totallength {
            return Ordering::Less;
        }
        if start2 == totallength {
            return Ordering::Greater;
        }
        let cc1 = seq.get_code(start1);
        let cc2 = seq.get_code(start2);
        match cc1.cmp(&cc2) {
            Ordering::Less => return Ordering::Less,
            Ordering::Greater => return Ordering::Greater,
            Ordering::Equal => {}
        }
        if info.is_s_type(start1) {
            if !info.is_s_type(start2) {
                // S > L
                return Ordering::Greater;
            }
            if !firstcmp {
                match (info.is_sstar(start1), info.is_sstar(start2)) {
                    (true, true) => return Ordering::Equal,
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    (false, false) => {}
                }
            }
        } else if info.is_s_type(start2) {
            // L < S
            return Ordering::Less;
        }
        start1 += 1;
        start2 += 1;
        firstcmp = false;
    }
}

/// 沿压实后的 S* 序给每个位置命名：与前一条目严格小于时名字加一。
/// 名字写入 count_sstar + position/2 槽位。返回最大名字值；
/// 名字互异当且仅当返回值 == count_sstar - 1。
pub fn assign_sstar_names(
    seq: &SainSeq,
    info: &SainInfo,
    suftab: &mut Suftab,
    available: usize,
) -> usize {
    let count = info.count_sstar;
    let mut previous_pos = suftab.get_defined(0);
    debug_assert!(info.is_sstar(previous_pos));
    let mut current_name = 0usize;
    for idx in 1..count {
        let position = suftab.get_defined(idx);
        debug_assert!(info.is_sstar(position));
        let cmp = compare_sstar_strings(seq, info, previous_pos, position);
        debug_assert_ne!(cmp, Ordering::Greater, "front entries must be sorted");
        if cmp == Ordering::Less {
            current_name += 1;
        }
        let slot = count + position / 2;
        debug_assert!(slot < available);
        suftab.set(slot, current_name);
        previous_pos = position;
    }
    current_name
}

/// 把稀疏名字表压实到 [count_sstar, 2*count_sstar)，末尾补 0
/// 作为哨兵自己的名字（恒唯一且最小）。压实顺序即原文本位置顺序，
/// 因此得到的就是归约序列。
pub fn move_names_to_front(info: &SainInfo, suftab: &mut Suftab, available: usize) {
    let count = info.count_sstar;
    let max_ridx = count + info.totallength() / 2;
    let mut widx = count;
    for ridx in count..=max_ridx {
        if let Some(name) = suftab.get(ridx) {
            if widx < ridx {
                debug_assert!(widx < available);
                suftab.set(widx, name);
            } else {
                debug_assert_eq!(widx, ridx);
            }
            widx += 1;
        }
    }
    debug_assert!(widx < available);
    suftab.set(widx, 0);
    widx += 1;
    debug_assert_eq!(widx, 2 * count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::EncodedSequence;

    fn setup(dna: &[u8]) -> (EncodedSequence, Vec<usize>) {
        let enc = EncodedSequence::from_dna(dna);
        let buf = vec![crate::index::sais::suftab::UNDEFINED; dna.len() + 1];
        (enc, buf)
    }

    #[test]
    fn compare_respects_length_tiebreak() {
        // GTGTA 中唯一实际 S* 是 2，与哨兵比较：哨兵恒最小
        let (enc, _) = setup(b"GTGTA");
        let seq = SainSeq::from_encseq(&enc);
        let info = SainInfo::new(&seq);
        assert_eq!(compare_sstar_strings(&seq, &info, 5, 2), Ordering::Less);
        assert_eq!(compare_sstar_strings(&seq, &info, 2, 5), Ordering::Greater);
    }

    #[test]
    fn equal_sstar_substrings_compare_equal() {
        // GTGTGTGTA：位置 2 与 4 的 S*-子串同为 G T G 且等长，应判相等
        let (enc, _) = setup(b"GTGTGTGTA");
        let seq = SainSeq::from_encseq(&enc);
        let info = SainInfo::new(&seq);
        assert!(info.is_sstar(2) && info.is_sstar(4));
        assert_eq!(compare_sstar_strings(&seq, &info, 2, 4), Ordering::Equal);
    }

    #[test]
    fn distinct_substrings_get_distinct_names() {
        // 对 GTGTA 手工走完一轮诱导后做压实与命名
        let (enc, mut buf) = setup(b"GTGTA");
        let seq = SainSeq::from_encseq(&enc);
        let info = SainInfo::new(&seq);
        // 一轮诱导的结果（见 induce 模块测试）
        buf.copy_from_slice(&[5, 4, 2, 0, 3, 1]);
        let mut tab = Suftab::new(&mut buf);
        let regular = 6;
        let available = 6;
        move_sstar_to_front(&info, &mut tab, regular, available);
        assert_eq!(tab.get(0), Some(5));
        assert_eq!(tab.get(1), Some(2));
        assert_eq!(tab.get(2), None);

        let last = assign_sstar_names(&seq, &info, &mut tab, available);
        assert_eq!(last, 1);
        move_names_to_front(&info, &mut tab, available);
        // 归约序列：位置 2 的名字 1，随后哨兵名字 0
        assert_eq!(tab.get(2), Some(1));
        assert_eq!(tab.get(3), Some(0));
        // 名字互异（last == count_sstar - 1），无须递归
        assert_eq!(last + 1, info.count_sstar);
    }
}
