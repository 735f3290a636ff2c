pub const SIGMA: usize = 4; // {0:A, 1:C, 2:G, 3:T}，N 等通配符不占字母表编码

/// 把 ASCII 碱基映射为 0..SIGMA 的编码；非 ACGT 的字符（N、IUPAC 简并码等）
/// 返回 None，由上层作为 special（通配）位置处理。
#[inline]
pub fn to_code(b: u8) -> Option<u8> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}
