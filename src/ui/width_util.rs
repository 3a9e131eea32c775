use crate::ui::ascii::ESC_BYTE;

type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

/// Width arithmetic on strings that may carry ANSI styling.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    fn strip_ansi(s: &str) -> String {
        let mut out = Vec::with_capacity(s.len());
        let mut bytes = s.bytes().peekable();

        while let Some(byte) = bytes.next() {
            if byte == ESC_BYTE && bytes.peek() == Some(&b'[') {
                Self::consume_csi(&mut bytes);
                continue;
            }
            out.push(byte);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn consume_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // skip '['
        for b in bytes.by_ref() {
            if b.is_ascii_alphabetic() {
                break;
            }
        }
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            format!("{s}{}", " ".repeat(width - w))
        }
    }

    /// Pads or cuts plain text to exactly `width` characters; cut text ends
    /// in `~`.
    pub fn fit(&self, s: &str, width: usize) -> String {
        let count = s.chars().count();
        if count <= width {
            return self.pad_visible(s, width);
        }
        if width == 0 {
            return String::new();
        }
        let mut out: String = s.chars().take(width - 1).collect();
        out.push('~');
        out
    }

    /// Left padding that centers `content_width` inside `container_width`.
    pub fn center_pad(&self, container_width: usize, content_width: usize) -> usize {
        container_width.saturating_sub(content_width) / 2
    }
}
