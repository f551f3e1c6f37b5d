// removal pattern catalog - the textual shapes of sqlite debug endpoints

/// removal patterns for debug endpoints that hit the database, in catalog order.
///
/// the first two entries differ only in the casing of the marker comment; both
/// casings occur in the target source, so both are kept. the third drops the
/// comment requirement entirely and the fourth targets `app.post` handlers
/// instead of `app.get`.
pub const DEBUG_ENDPOINT_PATTERNS: [&str; 4] = [
    r"// DEBUG ENDPOINT.*?\n.*?app\.get.*?debug.*?\{.*?\n.*?db\..*?\n.*?\}\);",
    r"// Debug endpoint.*?\n.*?app\.get.*?debug.*?\{.*?\n.*?db\..*?\n.*?\}\);",
    r"app\.get.*?debug.*?\{.*?\n.*?db\..*?\n.*?\}\);",
    r"app\.post.*?debug.*?\{.*?\n.*?db\..*?\n.*?\}\);",
];

/// ordered sequence of removal patterns. position is the only identity a
/// pattern has, and near-duplicate entries are permitted.
///
/// the catalog is inert data: nothing here compiles, validates, or applies a
/// pattern. an external tool is expected to consume these shapes.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<&'static str>,
}

impl PatternCatalog {
    /// build the catalog from the fixed pattern table. no i/o, cannot fail.
    pub fn new() -> Self {
        PatternCatalog {
            patterns: DEBUG_ENDPOINT_PATTERNS.to_vec(),
        }
    }

    /// the patterns, in insertion order
    pub fn patterns(&self) -> &[&'static str] {
        &self.patterns
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::new()
    }
}
