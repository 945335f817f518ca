use super::base::BaseModel;
use super::document::Document;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaModel {
    #[serde(flatten)]
    pub base: BaseModel,
    pub chapter_count: Option<u32>,
    pub volume_count: Option<u32>,
    pub serialization: Option<String>,
}

impl MangaModel {
    pub fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        let base = BaseModel::from_document(doc)?;
        let a = doc.primary()?.attributes();

        Ok(Self {
            base,
            chapter_count: a.count("chapterCount"),
            volume_count: a.count("volumeCount"),
            serialization: a.string("serialization"),
        })
    }
}
