use std::collections::HashMap;

/// Remap table from fund-ticker category codes to descriptive category
/// names. Codes are disjoint from ordinary category names, so the remap
/// only ever touches rows that carry a code.
#[derive(Clone, Debug)]
pub struct CategoryMap {
    entries: HashMap<String, String>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::from_pairs([
            ("BUIGX", "Buffer10/Hedged Equity"),
            ("KNGIX", "Covered Call"),
            ("ENGIX", "Buffer20/Innovator"),
            ("RYSE", "IR Hedge"),
            ("BTCVX", "Crypto"),
        ])
    }
}

impl CategoryMap {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// Returns the descriptive name for a code, or the input unchanged when
    /// it is not a known code.
    pub fn remap<'a>(&'a self, category: &'a str) -> &'a str {
        self.entries
            .get(category)
            .map(String::as_str)
            .unwrap_or(category)
    }
}
