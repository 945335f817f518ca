use super::base::GeneralResult;
use super::document::Document;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// One page of a collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub page: u32,
    pub results: Vec<GeneralResult>,
    pub total_page: u64,
    pub total_result: u64,
}

impl SearchPage {
    /// `page` and `limit` are the values the request was made with.
    pub fn from_document(
        doc: &Document,
        page: u32,
        limit: NonZeroU32,
    ) -> Result<Self, DecodeError> {
        let results = doc
            .records()?
            .iter()
            .map(GeneralResult::from_resource)
            .collect();
        let total_result = doc.total_count().ok_or(DecodeError::MissingField("meta.count"))?;

        Ok(Self {
            page,
            results,
            total_page: total_result.div_ceil(u64::from(limit.get())),
            total_result,
        })
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page as u64) < self.total_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn total_page_rounds_up() {
        let doc = Document::from_value(json!({
            "data": [{ "id": "1", "type": "anime", "attributes": { "canonicalTitle": "Naruto" } }],
            "meta": { "count": 95 }
        }))
        .unwrap();

        let page = SearchPage::from_document(&doc, 1, limit(10)).unwrap();
        assert_eq!(page.total_result, 95);
        assert_eq!(page.total_page, 10);
        assert_eq!(page.results.len(), 1);
        assert!(page.has_next());
    }

    #[test]
    fn exact_multiple_and_empty() {
        let doc = Document::from_value(json!({ "data": [], "meta": { "count": 40 } })).unwrap();
        assert_eq!(SearchPage::from_document(&doc, 4, limit(10)).unwrap().total_page, 4);

        let doc = Document::from_value(json!({ "data": [], "meta": { "count": 0 } })).unwrap();
        let page = SearchPage::from_document(&doc, 1, limit(10)).unwrap();
        assert_eq!(page.total_page, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn missing_count_is_an_error() {
        let doc = Document::from_value(json!({ "data": [] })).unwrap();
        assert!(matches!(
            SearchPage::from_document(&doc, 1, limit(10)),
            Err(DecodeError::MissingField("meta.count"))
        ));
    }
}
