//! 线性时间后缀排序（SA-IS，诱导排序法），直接工作在编码序列上。
//!
//! 单层流水线：分类 → S* 播种 → 诱导 L → 诱导 S → S* 前移 →
//! 命名 → （名字重复则对名字串递归）→ 以精确 S* 序重播种并
//! 完成最后两趟诱导。每层递归规模至多减半，总工作量 O(n)。
//!
//! 数组约定：工作数组长 totallength+1，0 号槽恒为终止哨兵位置；
//! 常规后缀占前 regularpositions 个槽，special 位置的后缀
//! （逐位置唯一且极大）按位置升序排在尾部。

mod bucket;
mod classify;
mod induce;
mod name;
mod source;
mod suftab;

use std::cmp::Ordering;

use anyhow::{ensure, Result};

pub use self::classify::{SainInfo, SSTAR_LENGTH_MAX};

use self::source::SainSeq;
use self::suftab::{Suftab, UNDEFINED};
use crate::seq::EncodedSequence;

/// 对编码序列做完整后缀排序。
///
/// 返回长度 totallength+1 的位置数组：0 号元素恒为 totallength
/// （终止哨兵），其后是全部后缀的字典序（special 视为逐位置唯一
/// 且大于一切常规符号）。入口处校验序列视图自洽性，之后的一切
/// 失败都属内部不变量破坏。
pub fn sort_suffixes(encseq: &EncodedSequence) -> Result<Vec<usize>> {
    validate(encseq)?;
    let totallength = encseq.len();
    if totallength == 0 {
        return Ok(vec![0]);
    }
    let seq = SainSeq::from_encseq(encseq);
    let regularpositions = totallength + 1 - seq.specialcharacters;

    let mut slots = vec![UNDEFINED; totallength + 1];
    slots[0] = totallength;
    {
        let mut suftab = Suftab::new(&mut slots);
        rec_sort(&seq, &mut suftab, regularpositions);
    }

    // special 后缀以其唯一极大首符号定序：位置升序接在常规区之后
    let mut widx = regularpositions;
    for &(start, end) in encseq.special_ranges() {
        for position in start..end {
            slots[widx] = position;
            widx += 1;
        }
    }
    debug_assert_eq!(widx, totallength + 1);
    Ok(slots)
}

/// 分类统计（诊断入口，CLI --stats）；空序列返回 None。
pub fn classification_stats(encseq: &EncodedSequence) -> Option<SainInfo> {
    if encseq.is_empty() {
        return None;
    }
    let seq = SainSeq::from_encseq(encseq);
    Some(SainInfo::new(&seq))
}

fn validate(encseq: &EncodedSequence) -> Result<()> {
    let regular: usize = (0..encseq.alphabet_size())
        .map(|c| encseq.symbol_count(c as u8))
        .sum();
    ensure!(
        regular + encseq.special_count() == encseq.len(),
        "inconsistent sequence view: symbol counts {} + specials {} != length {}",
        regular,
        encseq.special_count(),
        encseq.len()
    );
    Ok(())
}

/// 一个递归层。进入时 0 号槽已放哨兵、[1, regularpositions) 未定义。
fn rec_sort(seq: &SainSeq, suftab: &mut Suftab, regularpositions: usize) {
    let info = SainInfo::new(seq);
    let count_sstar = info.count_sstar;
    let totallength = seq.totallength;
    // 命名阶段会越过 regularpositions 写到半下标区，上界取两者较大
    let available = (count_sstar + totallength / 2 + 1).max(regularpositions);
    debug_assert!(available <= suftab.len());

    let mut leftborder = vec![0usize; seq.numofchars];

    bucket::end_buckets(&mut leftborder, &seq.bucketsize);
    induce::insert_sstar_suffixes(seq, &info, suftab, &mut leftborder, regularpositions);
    bucket::start_buckets(&mut leftborder, &seq.bucketsize);
    induce::induce_l_type(seq, &info, suftab, &mut leftborder, regularpositions);
    bucket::end_buckets(&mut leftborder, &seq.bucketsize);
    induce::induce_s_type(seq, &info, suftab, &mut leftborder, regularpositions);

    name::move_sstar_to_front(&info, suftab, regularpositions, available);
    let last_name = name::assign_sstar_names(seq, &info, suftab, available);
    name::move_names_to_front(&info, suftab, available);

    if last_name + 1 < count_sstar {
        // 存在重名 S*-子串：对名字串递归求精确 S* 序
        let slots = suftab.slots_mut();
        let (front, rest) = slots.split_at_mut(count_sstar);
        let mut subslots = vec![UNDEFINED; count_sstar + 1];
        subslots[0] = count_sstar;
        {
            let subseq = SainSeq::from_names(&rest[..count_sstar], last_name + 1);
            let mut subtab = Suftab::new(&mut subslots);
            rec_sort(&subseq, &mut subtab, count_sstar + 1);
        }
        // 归约下标 → 原 S* 位置：名字串第 j 个符号对应文本序第 j 个
        // 实际 S*（末符号对应哨兵）。名字串已用毕，原区间改放升序 S* 表。
        let mut widx = 0;
        for position in 0..totallength {
            if info.is_sstar(position) {
                rest[widx] = position;
                widx += 1;
            }
        }
        debug_assert_eq!(widx, count_sstar - 1);
        for (k, &reduced) in subslots.iter().enumerate().skip(1) {
            front[k - 1] = if reduced == count_sstar - 1 {
                totallength
            } else {
                rest[reduced]
            };
        }
        debug_assert_eq!(front[0], totallength);
    }

    // 无论是否递归，命名阶段已破坏前部以外的槽位：
    // 以精确 S* 序重播种并重走两趟诱导得到本层最终结果
    suftab.clear_range(count_sstar, regularpositions.max(count_sstar));
    bucket::end_buckets(&mut leftborder, &seq.bucketsize);
    induce::insert_sorted_sstar(seq, suftab, &mut leftborder, regularpositions, count_sstar);
    bucket::start_buckets(&mut leftborder, &seq.bucketsize);
    induce::induce_l_type(seq, &info, suftab, &mut leftborder, regularpositions);
    bucket::end_buckets(&mut leftborder, &seq.bucketsize);
    induce::induce_s_type(seq, &info, suftab, &mut leftborder, regularpositions);
}

/// 校验 suftab 是否为 encseq 的合法后缀序：
/// 置换性 + 相邻后缀两两字典序严格递增。逐对朴素比较，
/// 最坏 O(n^2)，仅用于小输入或显式 --verify。
pub fn check_order(encseq: &EncodedSequence, suftab: &[usize]) -> bool {
    let totallength = encseq.len();
    if suftab.len() != totallength + 1 || suftab[0] != totallength {
        return false;
    }
    let mut seen = vec![false; totallength + 1];
    for &position in suftab {
        if position > totallength || seen[position] {
            return false;
        }
        seen[position] = true;
    }
    let seq = SainSeq::from_encseq(encseq);
    suftab
        .windows(2)
        .all(|pair| suffix_cmp(&seq, pair[0], pair[1]) == Ordering::Less)
}

fn suffix_cmp(seq: &SainSeq, mut a: usize, mut b: usize) -> Ordering {
    let totallength = seq.totallength;
    loop {
        match (a == totallength, b == totallength) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        // special 折叠码逐位置唯一，首个 special 处必然分出大小
        match seq.get_code(a).cmp(&seq.get_code(b)) {
            Ordering::Equal => {
                a += 1;
                b += 1;
            }
            unequal => return unequal,
        }
    }
}
