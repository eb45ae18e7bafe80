//! SQL identifier normalization
//!
//! Column names coming from the game data are CamelCase and may carry array
//! suffixes such as `Item[0]` or `Param{1}`. These are turned into lowercase
//! snake_case identifiers usable without quoting.

use std::sync::LazyLock;

use regex::Regex;

/// Structural key column names, never rewritten
pub const KEY_COLUMN: &str = "_key";
pub const SUBKEY_COLUMN: &str = "_subkey";

const RESERVED: &[&str] = &["order"];

/// `{12}` style groups (digits or `+`)
static BRACE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9+]+)\}").expect("valid brace-group pattern"));

/// Normalize a column name for use in an `INSERT` column list
pub fn column_identifier(input: &str) -> String {
    if input == KEY_COLUMN || input == SUBKEY_COLUMN {
        return input.to_string();
    }

    // The second pass never matches anything new; kept so the rule stays idempotent.
    let spaced = underscore_uppercase(&underscore_uppercase(input));
    let trimmed = spaced.trim_matches(|c| matches!(c, ' ' | '_' | ']'));
    let lowered = trimmed.to_lowercase().replace('[', "_");
    let ident: String = BRACE_GROUP
        .replace_all(&lowered, "_${1}")
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | ']'))
        .collect();

    if RESERVED.contains(&ident.as_str()) {
        format!("\"{ident}\"")
    } else {
        ident
    }
}

/// Table name for a sheet: lowercase, namespace separators become underscores
pub fn table_identifier(sheet_name: &str) -> String {
    sheet_name.to_lowercase().replace('/', "_")
}

/// Column name as written in `CREATE TABLE`: lowercase only
pub fn schema_column_name(name: &str) -> String {
    name.to_lowercase()
}

/// Insert `_` before every uppercase ASCII letter not already preceded by one
fn underscore_uppercase(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        if c.is_ascii_uppercase() && !out.ends_with('_') {
            out.push('_');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(column_identifier("SomeColumnName"), "some_column_name");
        assert_eq!(column_identifier("Name"), "name");
        assert_eq!(column_identifier("ClassJob"), "class_job");
    }

    #[test]
    fn test_reserved_word_is_quoted() {
        assert_eq!(column_identifier("order"), "\"order\"");
        assert_eq!(column_identifier("Order"), "\"order\"");
        assert_eq!(column_identifier("SortOrder"), "sort_order");
    }

    #[test]
    fn test_key_columns_pass_through() {
        assert_eq!(column_identifier("_key"), "_key");
        assert_eq!(column_identifier("_subkey"), "_subkey");
    }

    #[test]
    fn test_array_suffix() {
        assert_eq!(column_identifier("Item[0]"), "item_0");
        assert_eq!(column_identifier("BaseParam[12]"), "base_param_12");
    }

    #[test]
    fn test_brace_suffix() {
        assert_eq!(column_identifier("Param{1}"), "param_1");
        assert_eq!(column_identifier("Odd{x}"), "oddx");
        assert_eq!(column_identifier("Slot{1+2}"), "slot_1+2");
        assert_eq!(column_identifier("Pair{1}{23}"), "pair_1_23");
        assert_eq!(column_identifier("Open{12"), "open12");
    }

    #[test]
    fn test_trimming() {
        assert_eq!(column_identifier("  padded  "), "padded");
        assert_eq!(column_identifier("__x__"), "x");
    }

    #[test]
    fn test_underscore_not_doubled() {
        assert_eq!(column_identifier("Item_Level"), "item_level");
        assert_eq!(
            column_identifier(&column_identifier("SomeColumnName")),
            "some_column_name"
        );
    }

    #[test]
    fn test_total_over_empty_input() {
        assert_eq!(column_identifier(""), "");
        assert_eq!(column_identifier("unk3"), "unk3");
    }

    #[test]
    fn test_table_identifier() {
        assert_eq!(table_identifier("Item"), "item");
        assert_eq!(table_identifier("quest/001/ClsArc001"), "quest_001_clsarc001");
    }

    #[test]
    fn test_schema_column_name_is_lowercase_only() {
        assert_eq!(schema_column_name("ItemLevel"), "itemlevel");
        assert_eq!(schema_column_name("Order"), "order");
    }
}
