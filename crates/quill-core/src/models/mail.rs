//! Mail correspondence model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dedup::DedupKey;
use crate::import::ImportRecord;

/// One pen-pal correspondence entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    /// Storage-assigned identity, 0 until the first successful save
    #[serde(default)]
    pub id: i64,
    /// Member number of the correspondent
    pub member: String,
    /// Date the letter was sent or received
    pub date: NaiveDate,
    /// Entry answers a previous letter rather than opening a thread
    pub reply: bool,
    /// Free-form notes about the letter
    pub notes: String,
}

impl DedupKey for Mail {
    type Key = (String, NaiveDate, bool, String);

    fn dedup_key(&self) -> Self::Key {
        (
            self.member.clone(),
            self.date,
            self.reply,
            self.notes.clone(),
        )
    }
}

/// Import document shape: a top-level object with a named mail array
#[derive(Deserialize)]
struct MailsDocument {
    mails: Vec<Mail>,
}

impl ImportRecord for Mail {
    const KIND: &'static str = "mail";
    // A mail import file with no entries is operator error
    const REQUIRE_NONEMPTY: bool = true;

    fn parse_batch(raw: &str) -> serde_json::Result<Vec<Self>> {
        let document: MailsDocument = serde_json::from_str(raw)?;
        Ok(document.mails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mail() -> Mail {
        Mail {
            id: 0,
            member: "B1207".to_string(),
            date: NaiveDate::from_ymd_opt(1987, 6, 1).unwrap(),
            reply: false,
            notes: "First letter, asked about zine swaps".to_string(),
        }
    }

    #[test]
    fn dedup_key_ignores_identity_field() {
        let unsaved = mail();
        let saved = Mail { id: 12, ..mail() };

        assert_eq!(unsaved.dedup_key(), saved.dedup_key());
    }

    #[test]
    fn parse_batch_reads_iso_dates() {
        let raw = r#"{
            "mails": [
                {
                    "member": "B1207",
                    "date": "1987-06-01",
                    "reply": false,
                    "notes": "First letter, asked about zine swaps"
                }
            ]
        }"#;

        let parsed = Mail::parse_batch(raw).unwrap();
        assert_eq!(parsed, vec![mail()]);
    }

    #[test]
    fn parse_batch_rejects_malformed_date() {
        let raw = r#"{"mails": [{"member": "B1207", "date": "June 1987", "reply": false, "notes": ""}]}"#;
        assert!(Mail::parse_batch(raw).is_err());
    }
}
