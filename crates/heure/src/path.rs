//! JSON path tracking for error reports (`$.fights[1].y[0]`).

pub(crate) struct JsonPath {
    buf: String,
}

impl JsonPath {
    pub(crate) fn root() -> Self {
        Self {
            buf: String::from("$"),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    /// Appends a key segment and returns the length to truncate back to.
    pub(crate) fn push_key(&mut self, key: &str) -> usize {
        let mark = self.buf.len();
        if is_identifier(key) {
            self.buf.push('.');
            self.buf.push_str(key);
        } else {
            self.buf.push('[');
            // Debug formatting gives a quoted, escaped key.
            self.buf.push_str(&format!("{key:?}"));
            self.buf.push(']');
        }
        mark
    }

    pub(crate) fn push_index(&mut self, idx: usize) -> usize {
        let mark = self.buf.len();
        self.buf.push_str(&format!("[{idx}]"));
        mark
    }

    pub(crate) fn truncate(&mut self, mark: usize) {
        self.buf.truncate(mark);
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
