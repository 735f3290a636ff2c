//! # sain-rust
//!
//! 受 [GenomeTools](http://genometools.org) 的 `gt_sain` 启发的
//! Rust 版线性时间后缀排序器。
//!
//! 本 crate 面向大规模基因组序列提供索引构建原语，包括：
//!
//! - **编码序列视图**：碱基以小字母表编码，通配符 / contig 分隔符
//!   作为 special 位置，支持 O(1) 按位取符号与 special 区间枚举
//! - **SA-IS 后缀排序**：S/L/S* 分类、桶定位、两趟诱导、
//!   S*-子串命名与递归归约，全程单缓冲原地工作
//! - **后缀表持久化**：排序结果连同 contig 元信息落盘 / 读回
//!
//! ## 快速示例
//!
//! ```rust
//! use sain_rust::seq::EncodedSequence;
//! use sain_rust::index::sais;
//!
//! let enc = EncodedSequence::from_dna(b"ACGTACGTAGCTGATCGTAG");
//! let suftab = sais::sort_suffixes(&enc).unwrap();
//! // 0 号元素恒为终止哨兵位置
//! assert_eq!(suftab[0], enc.len());
//! assert!(sais::check_order(&enc, &suftab));
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA 文件解析
//! - [`seq`] — 编码序列视图
//! - [`index`] — SA-IS 后缀排序与后缀表持久化
//! - [`util`] — 碱基编码 / 位图等工具

pub mod io;
pub mod index;
pub mod seq;
pub mod util;
