//! 诱导排序的三类写入动作。所有放置都写到 putidx+1：
//! 0 号槽固定存放终止哨兵位置 totallength，桶偏移整体右移一格。
//! 桶越界（putidx+1 >= regularpositions）意味着分类或频次统计
//! 出错，属内部一致性破坏，仅以 debug 断言拦截。

use crate::index::sais::classify::SainInfo;
use crate::index::sais::source::SainSeq;
use crate::index::sais::suftab::Suftab;

/// 播种：按位置升序把所有实际 S* 位置放进各自符号的右端桶。
/// 此阶段桶内相对顺序任意，只要求集合成员正确。
pub fn insert_sstar_suffixes(
    seq: &SainSeq,
    info: &SainInfo,
    suftab: &mut Suftab,
    leftborder: &mut [usize],
    regularpositions: usize,
) {
    for position in 0..seq.totallength {
        if info.is_sstar(position) {
            let cc = seq.get_code(position);
            debug_assert!(seq.is_regular_code(cc), "S* position must be regular");
            debug_assert!(leftborder[cc] > 0);
            leftborder[cc] -= 1;
            let putidx = leftborder[cc];
            debug_assert!(putidx + 1 < regularpositions);
            suftab.set(putidx + 1, position);
        }
    }
}

/// 诱导 L 型：自左向右扫描已填槽位；已知 q 就位且 q-1 为 L 型时，
/// 把 q-1 追加到其符号桶左端（先写后加）。扫描方向与左对齐写入
/// 共同保证 L 型后缀按正确相对序出现。
pub fn induce_l_type(
    seq: &SainSeq,
    info: &SainInfo,
    suftab: &mut Suftab,
    leftborder: &mut [usize],
    regularpositions: usize,
) {
    for idx in 0..regularpositions {
        let Some(position) = suftab.get(idx) else {
            continue;
        };
        if position > 0 && !info.is_s_type(position - 1) {
            let cc = seq.get_code(position - 1);
            // special 折叠码不落常规桶：其后缀归入数组尾部的 special 区
            if seq.is_regular_code(cc) {
                let putidx = leftborder[cc];
                leftborder[cc] += 1;
                debug_assert!(putidx + 1 < regularpositions);
                suftab.set(putidx + 1, position - 1);
            }
        }
    }
}

/// special 区间补种：special 位置从不被主扫描放置，
/// 因而"紧邻 special 段左侧的 S 型位置"得不到诱导来源，须直接放入。
/// 区间须降序遍历：同一桶内，后缀 (c, special@s) 随 s 递增而增大，
/// 右对齐先放大者。
fn induce_s_from_special_ranges(
    seq: &SainSeq,
    info: &SainInfo,
    suftab: &mut Suftab,
    leftborder: &mut [usize],
    regularpositions: usize,
) {
    for &(start, _end) in seq.special_ranges().iter().rev() {
        if start > 0 {
            // 常规位置后接 special（唯一大值）必为 S 型
            debug_assert!(info.is_s_type(start - 1));
            let cc = seq.get_code(start - 1);
            debug_assert!(seq.is_regular_code(cc) && leftborder[cc] > 0);
            leftborder[cc] -= 1;
            let putidx = leftborder[cc];
            debug_assert!(putidx + 1 < regularpositions);
            suftab.set(putidx + 1, start - 1);
        }
    }
}

/// 诱导 S 型：先做 special 补种，再自右向左扫描；q 就位且 q-1 为
/// S 型时放入其符号桶右端（先减后写），与 L 趟对称。
pub fn induce_s_type(
    seq: &SainSeq,
    info: &SainInfo,
    suftab: &mut Suftab,
    leftborder: &mut [usize],
    regularpositions: usize,
) {
    induce_s_from_special_ranges(seq, info, suftab, leftborder, regularpositions);
    for idx in (0..regularpositions).rev() {
        let Some(position) = suftab.get(idx) else {
            continue;
        };
        if position > 0 && info.is_s_type(position - 1) {
            let cc = seq.get_code(position - 1);
            if seq.is_regular_code(cc) {
                debug_assert!(leftborder[cc] > 0);
                leftborder[cc] -= 1;
                let putidx = leftborder[cc];
                debug_assert!(putidx + 1 < regularpositions);
                suftab.set(putidx + 1, position - 1);
            }
        }
    }
}

/// 终种：递归（或命名判定）给出精确 S* 序后，把前 count_sstar 个
/// 槽位按序重新分发回右端桶。自大到小读出并即时清槽即可原地完成：
/// 第 idx 小的 S* 的落点下标不小于 idx，不会覆盖未读槽。
pub fn insert_sorted_sstar(
    seq: &SainSeq,
    suftab: &mut Suftab,
    leftborder: &mut [usize],
    regularpositions: usize,
    count_sstar: usize,
) {
    // 0 号槽的哨兵不动
    for idx in (1..count_sstar).rev() {
        let position = suftab.get_defined(idx);
        suftab.clear(idx);
        let cc = seq.get_code(position);
        debug_assert!(seq.is_regular_code(cc) && leftborder[cc] > 0);
        leftborder[cc] -= 1;
        let putidx = leftborder[cc];
        debug_assert!(putidx + 1 >= idx && putidx + 1 < regularpositions);
        suftab.set(putidx + 1, position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::sais::bucket;
    use crate::index::sais::suftab::UNDEFINED;
    use crate::seq::EncodedSequence;

    // 对 GTGTA 手工验证一层诱导的中间结果
    #[test]
    fn induction_round_on_gtgta() {
        let enc = EncodedSequence::from_dna(b"GTGTA");
        let seq = SainSeq::from_encseq(&enc);
        let info = SainInfo::new(&seq);
        assert_eq!(info.count_sstar, 2);

        let regular = seq.totallength + 1;
        let mut buf = vec![UNDEFINED; regular];
        buf[0] = seq.totallength;
        let mut tab = Suftab::new(&mut buf);
        let mut border = vec![0usize; seq.numofchars];

        bucket::end_buckets(&mut border, &seq.bucketsize);
        insert_sstar_suffixes(&seq, &info, &mut tab, &mut border, regular);
        // 唯一实际 S*（位置 2，G 桶）右对齐放在 G 桶末位
        assert_eq!(tab.get(3), Some(2));

        bucket::start_buckets(&mut border, &seq.bucketsize);
        induce_l_type(&seq, &info, &mut tab, &mut border, regular);
        bucket::end_buckets(&mut border, &seq.bucketsize);
        induce_s_type(&seq, &info, &mut tab, &mut border, regular);

        // 一层诱导后即为 GTGTA$ 的完整后缀序
        assert_eq!(*tab.slots_mut(), [5, 4, 2, 0, 3, 1]);
    }

    #[test]
    fn special_reseed_places_predecessor() {
        // ACN: N 为 special，C(位置 1) 只能经补种进入 C 桶
        let enc = EncodedSequence::from_dna(b"ACN");
        let seq = SainSeq::from_encseq(&enc);
        let info = SainInfo::new(&seq);

        let regular = seq.totallength + 1 - seq.specialcharacters;
        let mut buf = vec![UNDEFINED; seq.totallength + 1];
        buf[0] = seq.totallength;
        let mut tab = Suftab::new(&mut buf);
        let mut border = vec![0usize; seq.numofchars];

        bucket::end_buckets(&mut border, &seq.bucketsize);
        insert_sstar_suffixes(&seq, &info, &mut tab, &mut border, regular);
        bucket::start_buckets(&mut border, &seq.bucketsize);
        induce_l_type(&seq, &info, &mut tab, &mut border, regular);
        bucket::end_buckets(&mut border, &seq.bucketsize);
        induce_s_type(&seq, &info, &mut tab, &mut border, regular);

        // 常规后缀序：$(3) A..(0) C..(1)；N 的后缀不在常规区
        assert_eq!(tab.get(0), Some(3));
        assert_eq!(tab.get(1), Some(0));
        assert_eq!(tab.get(2), Some(1));
    }
}
