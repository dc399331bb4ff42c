//! Symptom Logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::{MedicalError, MedicalResult};

pub const MAX_SYMPTOM_CHARS: usize = 50;
pub const MAX_NOTES_CHARS: usize = 500;
pub const DEFAULT_SEVERITY: i64 = 5;

/// A stored symptom log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomLog {
    pub symptom_id: String,
    pub symptom: String,
    pub severity: u8,
    pub notes: Option<String>,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New symptom log body
///
/// `severity` is read as a plain integer so out-of-range values reach
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomLogRequest {
    pub symptom: String,
    #[serde(default = "default_severity")]
    pub severity: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
}

fn default_severity() -> i64 {
    DEFAULT_SEVERITY
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymptomLogUpdate {
    pub symptom: Option<String>,
    pub severity: Option<i64>,
    pub notes: Option<String>,
    pub is_resolved: Option<bool>,
}

fn check_symptom(symptom: &str) -> MedicalResult<String> {
    let symptom = symptom.trim();
    if symptom.is_empty() {
        return Err(MedicalError::Invalid("Symptom is required".to_string()));
    }
    if symptom.chars().count() > MAX_SYMPTOM_CHARS {
        return Err(MedicalError::Invalid(format!(
            "Symptom must be at most {} characters",
            MAX_SYMPTOM_CHARS
        )));
    }
    Ok(symptom.to_string())
}

fn check_severity(severity: i64) -> MedicalResult<u8> {
    match u8::try_from(severity) {
        Ok(s @ 1..=10) => Ok(s),
        _ => Err(MedicalError::Invalid(
            "Severity must be between 1 and 10".to_string(),
        )),
    }
}

fn check_notes(notes: &str) -> MedicalResult<()> {
    if notes.chars().count() > MAX_NOTES_CHARS {
        return Err(MedicalError::Invalid(format!(
            "Notes must be at most {} characters",
            MAX_NOTES_CHARS
        )));
    }
    Ok(())
}

#[derive(Debug)]
struct OwnedLog {
    owner: String,
    log: SymptomLog,
}

/// Symptom logs of every account, in insertion order
#[derive(Debug, Default)]
pub struct SymptomJournal {
    logs: RwLock<Vec<OwnedLog>>,
}

impl SymptomJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// All logs owned by `owner`, oldest first
    pub async fn list(&self, owner: &str) -> Vec<SymptomLog> {
        self.logs
            .read()
            .await
            .iter()
            .filter(|entry| entry.owner == owner)
            .map(|entry| entry.log.clone())
            .collect()
    }

    pub async fn add(&self, owner: &str, request: SymptomLogRequest) -> MedicalResult<SymptomLog> {
        let symptom = check_symptom(&request.symptom)?;
        let severity = check_severity(request.severity)?;
        if let Some(notes) = &request.notes {
            check_notes(notes)?;
        }

        let now = Utc::now();
        let log = SymptomLog {
            symptom_id: Uuid::new_v4().to_string(),
            symptom,
            severity,
            notes: request.notes,
            is_resolved: request.is_resolved,
            created_at: now,
            updated_at: now,
        };

        self.logs.write().await.push(OwnedLog {
            owner: owner.to_string(),
            log: log.clone(),
        });

        tracing::debug!(symptom_id = %log.symptom_id, "Symptom logged");
        Ok(log)
    }

    /// Apply a partial update. Nothing changes unless every field is valid.
    pub async fn update(
        &self,
        owner: &str,
        symptom_id: &str,
        update: SymptomLogUpdate,
    ) -> MedicalResult<SymptomLog> {
        let symptom = update.symptom.as_deref().map(check_symptom).transpose()?;
        let severity = update.severity.map(check_severity).transpose()?;
        if let Some(notes) = &update.notes {
            check_notes(notes)?;
        }

        let mut logs = self.logs.write().await;
        let entry = logs
            .iter_mut()
            .find(|entry| entry.owner == owner && entry.log.symptom_id == symptom_id)
            .ok_or(MedicalError::SymptomNotFound)?;

        let log = &mut entry.log;
        if let Some(symptom) = symptom {
            log.symptom = symptom;
        }
        if let Some(severity) = severity {
            log.severity = severity;
        }
        if update.notes.is_some() {
            log.notes = update.notes;
        }
        if let Some(resolved) = update.is_resolved {
            log.is_resolved = resolved;
        }
        log.updated_at = Utc::now();

        Ok(log.clone())
    }

    pub async fn remove(&self, owner: &str, symptom_id: &str) -> MedicalResult<()> {
        let mut logs = self.logs.write().await;
        let before = logs.len();
        logs.retain(|entry| !(entry.owner == owner && entry.log.symptom_id == symptom_id));

        if logs.len() == before {
            return Err(MedicalError::SymptomNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(symptom: &str, severity: i64) -> SymptomLogRequest {
        SymptomLogRequest {
            symptom: symptom.to_string(),
            severity,
            notes: None,
            is_resolved: false,
        }
    }

    #[test]
    fn test_request_defaults() {
        let request: SymptomLogRequest = serde_json::from_str(r#"{"symptom": "Headache"}"#).unwrap();
        assert_eq!(request.severity, DEFAULT_SEVERITY);
        assert!(!request.is_resolved);
        assert!(request.notes.is_none());
    }

    #[tokio::test]
    async fn test_add_and_list_per_owner() {
        let journal = SymptomJournal::new();
        journal.add("a@example.com", request("Headache", 3)).await.unwrap();
        journal.add("b@example.com", request("Backpain", 7)).await.unwrap();

        let logs = journal.list("a@example.com").await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].symptom, "Headache");
        assert_eq!(logs[0].severity, 3);
    }

    #[tokio::test]
    async fn test_severity_bounds() {
        let journal = SymptomJournal::new();
        assert!(journal.add("a@x.io", request("Nausea", 1)).await.is_ok());
        assert!(journal.add("a@x.io", request("Nausea", 10)).await.is_ok());

        for bad in [0, 11, -1, 300] {
            assert!(matches!(
                journal.add("a@x.io", request("Nausea", bad)).await,
                Err(MedicalError::Invalid(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_length_limits() {
        let journal = SymptomJournal::new();
        let long_symptom = "x".repeat(MAX_SYMPTOM_CHARS + 1);
        assert!(journal.add("a@x.io", request(&long_symptom, 5)).await.is_err());
        assert!(journal.add("a@x.io", request("  ", 5)).await.is_err());

        let mut with_notes = request("Cough", 5);
        with_notes.notes = Some("n".repeat(MAX_NOTES_CHARS + 1));
        assert!(journal.add("a@x.io", with_notes).await.is_err());
        assert!(journal.list("a@x.io").await.is_empty());
    }

    #[tokio::test]
    async fn test_update_is_partial_and_scoped() {
        let journal = SymptomJournal::new();
        let log = journal.add("a@x.io", request("Headache", 4)).await.unwrap();

        let update = SymptomLogUpdate {
            is_resolved: Some(true),
            ..Default::default()
        };
        assert_eq!(
            journal.update("b@x.io", &log.symptom_id, update.clone()).await,
            Err(MedicalError::SymptomNotFound)
        );

        let updated = journal.update("a@x.io", &log.symptom_id, update).await.unwrap();
        assert!(updated.is_resolved);
        assert_eq!(updated.symptom, "Headache");
        assert_eq!(updated.severity, 4);
        assert!(updated.updated_at >= log.updated_at);

        let bad = SymptomLogUpdate {
            severity: Some(12),
            ..Default::default()
        };
        assert!(journal.update("a@x.io", &log.symptom_id, bad).await.is_err());
        assert_eq!(journal.list("a@x.io").await[0].severity, 4);
    }

    #[tokio::test]
    async fn test_remove() {
        let journal = SymptomJournal::new();
        let log = journal.add("a@x.io", request("Headache", 4)).await.unwrap();

        assert_eq!(
            journal.remove("b@x.io", &log.symptom_id).await,
            Err(MedicalError::SymptomNotFound)
        );
        assert!(journal.remove("a@x.io", &log.symptom_id).await.is_ok());
        assert!(journal.list("a@x.io").await.is_empty());
    }
}
