use anyhow::Result;
use std::io::BufRead;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

/// 流式 FASTA 读取器：按记录迭代，序列行去空白并转大写。
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    pending_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            pending_header: None,
        }
    }

    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        Ok(self.reader.read_line(&mut self.buf)? > 0)
    }

    /// 读下一条记录；到文件尾返回 None。
    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        let header = match self.pending_header.take() {
            Some(h) => h,
            None => loop {
                if !self.read_line()? {
                    self.done = true;
                    return Ok(None);
                }
                if let Some(rest) = self.buf.strip_prefix('>') {
                    break rest.trim().to_string();
                }
            },
        };

        let (id, desc) = split_header(&header);

        let mut seq: Vec<u8> = Vec::new();
        loop {
            if !self.read_line()? {
                self.done = true;
                break;
            }
            if let Some(rest) = self.buf.strip_prefix('>') {
                self.pending_header = Some(rest.trim().to_string());
                break;
            }
            seq.extend(
                self.buf
                    .bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

fn split_header(header: &str) -> (String, Option<String>) {
    let mut parts = header.splitn(2, char::is_whitespace);
    let id = parts.next().unwrap_or("").to_string();
    let desc = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    (id, desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fasta() {
        let data = b">chr1 first\nACgTNN\n>chr2\nAAA\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("first"));
        assert_eq!(r1.seq, b"ACGTNN");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"AAA");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_crlf_and_whitespace() {
        let data = b">chr1 desc\r\nAC g t n\r\n acgt\r\n>chr2 \r\n N N N \r\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.seq, b"ACGTNACGT");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"NNN");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_leading_noise() {
        let data = b"\n; comment-ish\n>chr1\nACGT\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.seq, b"ACGT");
        assert!(r.next_record().unwrap().is_none());
    }
}
