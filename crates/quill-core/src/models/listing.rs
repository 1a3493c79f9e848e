//! Listing model

use serde::{Deserialize, Serialize};

use crate::dedup::DedupKey;
use crate::import::ImportRecord;

/// A classified ad clipped from one magazine issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Storage-assigned identity, 0 until the first successful save
    #[serde(default)]
    pub id: i64,
    /// Magazine volume
    pub volume: u32,
    /// Issue number within the volume
    pub issue: u32,
    /// Publication year
    pub year: u32,
    /// Listing category (e.g. "penpals", "zines", "tapes")
    pub category: String,
    /// Member number of the advertiser
    pub member: String,
    /// Advertiser accepts international replies
    pub international: bool,
    /// Listing asks for reviews rather than letters
    pub review: bool,
    /// Free-form ad text
    pub text: String,
}

impl DedupKey for Listing {
    type Key = (u32, u32, u32, String, String, bool, bool, String);

    fn dedup_key(&self) -> Self::Key {
        (
            self.volume,
            self.issue,
            self.year,
            self.category.clone(),
            self.member.clone(),
            self.international,
            self.review,
            self.text.clone(),
        )
    }
}

/// Import document shape: a top-level object with a named listing array
#[derive(Deserialize)]
struct ListingsDocument {
    listings: Vec<Listing>,
}

impl ImportRecord for Listing {
    const KIND: &'static str = "listing";
    // An issue can carry no ads, so an empty batch is a no-op
    const REQUIRE_NONEMPTY: bool = false;

    fn parse_batch(raw: &str) -> serde_json::Result<Vec<Self>> {
        let document: ListingsDocument = serde_json::from_str(raw)?;
        Ok(document.listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing() -> Listing {
        Listing {
            id: 0,
            volume: 3,
            issue: 14,
            year: 1987,
            category: "penpals".to_string(),
            member: "A4521".to_string(),
            international: true,
            review: false,
            text: "Seeking pen pals into tape trading".to_string(),
        }
    }

    #[test]
    fn dedup_key_ignores_identity_field() {
        let unsaved = listing();
        let saved = Listing { id: 7, ..listing() };

        assert_eq!(unsaved.dedup_key(), saved.dedup_key());
    }

    #[test]
    fn dedup_key_covers_every_other_field() {
        let base = listing();
        let other = Listing {
            review: true,
            ..listing()
        };

        assert_ne!(base.dedup_key(), other.dedup_key());
    }

    #[test]
    fn parse_batch_accepts_records_without_id() {
        let raw = r#"{
            "listings": [
                {
                    "volume": 3,
                    "issue": 14,
                    "year": 1987,
                    "category": "penpals",
                    "member": "A4521",
                    "international": true,
                    "review": false,
                    "text": "Seeking pen pals into tape trading"
                }
            ]
        }"#;

        let parsed = Listing::parse_batch(raw).unwrap();
        assert_eq!(parsed, vec![listing()]);
    }

    #[test]
    fn parse_batch_rejects_missing_array() {
        assert!(Listing::parse_batch(r#"{"records": []}"#).is_err());
    }
}
