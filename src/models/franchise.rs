use super::base::GeneralResult;
use super::document::{Document, Resource};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// A related title together with how it relates to the source title
/// (`sequel`, `side_story`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    #[serde(flatten)]
    pub result: GeneralResult,
    pub role: Option<String>,
}

impl Franchise {
    /// `root` is the `mediaRelationships` record, `destination` the media
    /// record it points at.
    #[must_use]
    pub fn from_pair(root: &Resource, destination: &Resource) -> Self {
        Self {
            result: GeneralResult::from_resource(destination),
            role: root.attributes().string("role"),
        }
    }

    /// Decodes a `media-relationships?include=destination` document, pairing
    /// `data[i]` with `included[i]`.
    pub fn list_from_document(doc: &Document) -> Result<Vec<Self>, DecodeError> {
        let roots = doc.records()?;

        if roots.len() != doc.included.len() {
            return Err(DecodeError::LengthMismatch {
                left: "mediaRelationships",
                left_len: roots.len(),
                right: "destinations",
                right_len: doc.included.len(),
            });
        }

        Ok(roots
            .iter()
            .zip(&doc.included)
            .map(|(root, destination)| Self::from_pair(root, destination))
            .collect())
    }
}
