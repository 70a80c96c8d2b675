/// Year stamped on every converted date; the source strings carry none.
pub const DEFAULT_YEAR: i32 = 2025;

#[derive(Debug, Clone)]
pub struct Options {
    /// Year used when rebuilding `date` (default: 2025)
    pub year: i32,
    /// Indentation size of the rendered document (default: 2 spaces)
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            indent: 2,
        }
    }
}

impl Options {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Years must render as four digits in `YYYY-MM-DD`.
    pub fn validate(&self) -> crate::Result<()> {
        if !(0..=9999).contains(&self.year) {
            return Err(crate::Error::Message(format!(
                "year {} is outside 0..=9999",
                self.year
            )));
        }
        Ok(())
    }
}
