use std::collections::HashMap;

use super::TokenKind;

/// Struct for storing terminal spellings with their respective token kind.
#[derive(Debug, Clone, Default)]
pub struct LexMap {
    map: HashMap<&'static str, TokenKind>,
}

impl LexMap {
    pub fn insert(&mut self, key: &'static str, value: TokenKind) {
        self.map.insert(key, value);
    }

    /// Check whether any known terminal starts with `key`.
    pub fn can_match(&self, key: &str) -> bool {
        for map_key in self.map.keys() {
            if map_key.starts_with(key) {
                return true;
            }
        }
        false
    }

    pub fn get(&self, key: &str) -> Option<TokenKind> {
        self.map.get(key).copied()
    }
}
