//! Conversions between storage rows and contract models

use super::row::TaleRow;
use crate::contract::Tale;

impl From<TaleRow> for Tale {
    fn from(row: TaleRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            text: row.text,
            nation: row.nation,
            source: row.source,
        }
    }
}

impl From<&Tale> for TaleRow {
    fn from(tale: &Tale) -> Self {
        Self {
            id: tale.id,
            title: tale.title.clone(),
            text: tale.text.clone(),
            nation: tale.nation.clone(),
            source: tale.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_missing_optional_columns_decodes() {
        let row: TaleRow =
            serde_json::from_str(r#"{"id": 7, "title": "The Lion's Whisker"}"#).unwrap();
        let tale: Tale = row.into();
        assert_eq!(tale.id, 7);
        assert_eq!(tale.title, "The Lion's Whisker");
        assert!(tale.nation.is_empty());
    }

    #[test]
    fn test_null_columns_decode_as_empty() {
        let row: TaleRow = serde_json::from_str(
            r#"{"id": 8, "title": "Momotaro", "text": null, "nation": "Japan", "source": null}"#,
        )
        .unwrap();
        assert_eq!(row.text, "");
        assert_eq!(row.source, "");
        assert_eq!(row.nation, "Japan");
    }

    #[test]
    fn test_row_serializes_with_table_column_names() {
        let tale = Tale {
            id: 1,
            title: "The Clever Hare".to_string(),
            text: "Long ago...".to_string(),
            nation: "Zimbabwe".to_string(),
            source: "Oral tradition".to_string(),
        };
        let value = serde_json::to_value(TaleRow::from(&tale)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "title": "The Clever Hare",
                "text": "Long ago...",
                "nation": "Zimbabwe",
                "source": "Oral tradition"
            })
        );
    }
}
