/// 未定义槽位哨兵。合法位置取值为 0..=totallength，
/// 与 usize::MAX 永不冲突（序列长度远小于 usize::MAX）。
pub const UNDEFINED: usize = usize::MAX;

/// 工作数组包装：同一块缓冲在一个递归层内先后充当
/// 桶放置暂存、部分后缀序输出、S*-子串名字表三种角色。
/// 所有"槽位是否已填"的判断都经由本类型，避免裸的哨兵值比较
/// 散落在各诱导 pass 中。
pub struct Suftab<'a> {
    slots: &'a mut [usize],
}

impl<'a> Suftab<'a> {
    pub fn new(slots: &'a mut [usize]) -> Self {
        Self { slots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 已填槽位返回 Some(位置)，未定义槽位返回 None。
    #[inline]
    pub fn get(&self, idx: usize) -> Option<usize> {
        let v = self.slots[idx];
        if v == UNDEFINED {
            None
        } else {
            Some(v)
        }
    }

    /// 取一个必须已填的槽位。
    #[inline]
    pub fn get_defined(&self, idx: usize) -> usize {
        let v = self.slots[idx];
        debug_assert_ne!(v, UNDEFINED, "slot {idx} unexpectedly undefined");
        v
    }

    #[inline]
    pub fn set(&mut self, idx: usize, value: usize) {
        debug_assert_ne!(value, UNDEFINED);
        self.slots[idx] = value;
    }

    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.slots[idx] = UNDEFINED;
    }

    /// 把 [from, to) 全部置为未定义。
    pub fn clear_range(&mut self, from: usize, to: usize) {
        for slot in &mut self.slots[from..to] {
            *slot = UNDEFINED;
        }
    }

    /// 驱动层在递归边界需要显式切分缓冲（前段放 S* 序，后段放名字串）。
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [usize] {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_and_undefined_slots() {
        let mut buf = vec![UNDEFINED; 4];
        let mut tab = Suftab::new(&mut buf);
        assert_eq!(tab.len(), 4);
        assert_eq!(tab.get(0), None);
        tab.set(0, 7);
        assert_eq!(tab.get(0), Some(7));
        assert_eq!(tab.get_defined(0), 7);
        tab.clear(0);
        assert_eq!(tab.get(0), None);
    }

    #[test]
    fn clear_range_is_half_open() {
        let mut buf = vec![1usize, 2, 3, 4];
        let mut tab = Suftab::new(&mut buf);
        tab.clear_range(1, 3);
        assert_eq!(tab.get(0), Some(1));
        assert_eq!(tab.get(1), None);
        assert_eq!(tab.get(2), None);
        assert_eq!(tab.get(3), Some(4));
    }
}
