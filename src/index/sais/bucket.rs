/// 右端桶边界：leftborder[c] = 编码 ≤ c 的符号总数，即 c 号桶右端
/// 的 one-past 偏移。配合"先减后写"从右往左填桶。
pub fn end_buckets(leftborder: &mut [usize], bucketsize: &[usize]) {
    debug_assert_eq!(leftborder.len(), bucketsize.len());
    let mut sum = 0;
    for (border, &size) in leftborder.iter_mut().zip(bucketsize) {
        sum += size;
        *border = sum;
    }
}

/// 左端桶边界：leftborder[c] = 编码 < c 的符号总数，即 c 号桶左端偏移。
/// 配合"先写后加"从左往右填桶。
pub fn start_buckets(leftborder: &mut [usize], bucketsize: &[usize]) {
    debug_assert_eq!(leftborder.len(), bucketsize.len());
    let mut sum = 0;
    for (border, &size) in leftborder.iter_mut().zip(bucketsize) {
        *border = sum;
        sum += size;
    }
}
