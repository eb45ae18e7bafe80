//! Access to the sheets of a game-data store

use indexmap::IndexMap;

use super::table::Sheet;

/// Read-only view of the sheets available for export
pub trait SheetSource {
    /// Sheet names in enumeration order
    fn available_sheets(&self) -> Vec<String>;

    /// Resolve a sheet by name
    fn sheet(&self, name: &str) -> Option<&Sheet>;
}

/// In-memory collection of sheets, kept in insertion order
#[derive(Debug, Default)]
pub struct GameData {
    sheets: IndexMap<String, Sheet>,
}

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet, returning the one it replaced if the name was taken
    pub fn insert(&mut self, sheet: Sheet) -> Option<Sheet> {
        self.sheets.insert(sheet.name.clone(), sheet)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl SheetSource for GameData {
    fn available_sheets(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }
}

impl FromIterator<Sheet> for GameData {
    fn from_iter<I: IntoIterator<Item = Sheet>>(iter: I) -> Self {
        let mut data = GameData::new();
        for sheet in iter {
            data.insert(sheet);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SheetRows;

    #[test]
    fn test_enumeration_order_is_insertion_order() {
        let data: GameData = ["Zone", "Action", "Item"]
            .into_iter()
            .map(|name| Sheet::new(name, Vec::new(), SheetRows::Single(Vec::new())))
            .collect();

        assert_eq!(data.available_sheets(), vec!["Zone", "Action", "Item"]);
        assert!(data.sheet("Action").is_some());
        assert!(data.sheet("Missing").is_none());
    }
}
