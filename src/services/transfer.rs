//! Trip export / import and the compressed share-code transport

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};
use std::io::{Read, Write};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    itinerary::reconciler,
    models::transfer::{TripExport, EXPORT_VERSION},
    repository::Repository,
};

/// Leading tag of a share code; bump together with breaking format changes
const CODE_TAG: &str = "WF2";

/// Hex characters of the payload digest carried in the code
const CHECKSUM_LEN: usize = 8;

#[derive(Clone)]
pub struct TransferService {
    repository: Repository,
}

impl TransferService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Snapshot a whole trip into the interchange document.
    pub async fn export(&self, trip_id: Uuid) -> AppResult<TripExport> {
        let trip = self.repository.trips.get(trip_id).await?;
        let days = self.repository.itineraries.load(trip_id).await?;
        let expenses = self.repository.expenses.load(trip_id).await?;
        let checklist = self
            .repository
            .checklists
            .load(trip_id)
            .await?
            .unwrap_or_default();
        Ok(TripExport {
            trip_settings: trip,
            itinerary_data: days,
            expenses,
            checklist,
            version: EXPORT_VERSION,
            timestamp: Some(Utc::now()),
        })
    }

    /// Validate and apply an interchange document to an existing trip.
    ///
    /// All-or-nothing: the document is fully validated before the first
    /// write, so a malformed payload leaves current state untouched. The
    /// target trip keeps its identity; everything else is replaced.
    pub async fn import(&self, trip_id: Uuid, document: serde_json::Value) -> AppResult<()> {
        let parsed = validate_document(document)?;
        let current = self.repository.trips.get(trip_id).await?;

        let mut trip = parsed.trip_settings;
        trip.id = current.id;
        trip.crea_date = current.crea_date;
        trip.modif_date = Some(Utc::now());

        let mut days = parsed.itinerary_data;
        reconciler::recompute(&mut days, trip.start_date);

        self.repository.trips.update(&trip).await?;
        self.repository.itineraries.save(trip_id, &days).await?;
        self.repository.expenses.save(trip_id, &parsed.expenses).await?;
        self.repository
            .checklists
            .save(trip_id, &parsed.checklist)
            .await?;

        tracing::info!(trip_id = %trip_id, days = days.len(), "trip imported");
        Ok(())
    }

    /// Export a trip as a compressed text code for manual copy/paste.
    pub async fn export_code(&self, trip_id: Uuid) -> AppResult<String> {
        let document = self.export(trip_id).await?;
        encode_share_code(&document)
    }

    /// Import a trip from a compressed text code.
    pub async fn import_code(&self, trip_id: Uuid, code: &str) -> AppResult<()> {
        let document = decode_share_code(code)?;
        self.import(trip_id, document).await
    }
}

/// Check structural presence of the required top-level fields, then
/// parse the full document.
fn validate_document(document: serde_json::Value) -> AppResult<TripExport> {
    let object = document
        .as_object()
        .ok_or_else(|| AppError::ImportFormat("document is not a JSON object".to_string()))?;
    for field in ["tripSettings", "itineraryData"] {
        if !object.contains_key(field) {
            return Err(AppError::ImportFormat(format!("missing field {field:?}")));
        }
    }
    let parsed: TripExport = serde_json::from_value(document)
        .map_err(|e| AppError::ImportFormat(e.to_string()))?;
    if parsed.itinerary_data.is_empty() {
        return Err(AppError::ImportFormat(
            "itineraryData must contain at least one day".to_string(),
        ));
    }
    Ok(parsed)
}

/// Encode a document as `WF2.<checksum>.<base64(zlib(json))>`.
pub fn encode_share_code(document: &TripExport) -> AppResult<String> {
    let json = serde_json::to_vec(document)
        .map_err(|e| AppError::Internal(format!("serialize export: {e}")))?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    let payload = BASE64.encode(compressed);
    let checksum = &hex::encode(Sha256::digest(payload.as_bytes()))[..CHECKSUM_LEN];
    Ok(format!("{CODE_TAG}.{checksum}.{payload}"))
}

/// Decode a share code back into the interchange document.
pub fn decode_share_code(code: &str) -> AppResult<serde_json::Value> {
    let mut parts = code.trim().splitn(3, '.');
    let (tag, checksum, payload) = match (parts.next(), parts.next(), parts.next()) {
        (Some(tag), Some(checksum), Some(payload)) => (tag, checksum, payload),
        _ => return Err(AppError::ImportFormat("malformed share code".to_string())),
    };
    if tag != CODE_TAG {
        return Err(AppError::ImportFormat(format!("unknown share code tag {tag:?}")));
    }
    let expected = &hex::encode(Sha256::digest(payload.as_bytes()))[..CHECKSUM_LEN];
    if checksum != expected {
        return Err(AppError::ImportFormat("share code checksum mismatch".to_string()));
    }
    let compressed = BASE64
        .decode(payload)
        .map_err(|e| AppError::ImportFormat(format!("share code is not base64: {e}")))?;
    let mut json = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(|e| AppError::ImportFormat(format!("share code inflate failed: {e}")))?;
    serde_json::from_slice(&json)
        .map_err(|e| AppError::ImportFormat(format!("share code payload is not JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::reconciler::placeholder_sequence;
    use crate::models::enums::Season;
    use crate::models::trip::Trip;
    use chrono::NaiveDate;

    fn sample_export() -> TripExport {
        let start = NaiveDate::from_ymd_opt(2026, 1, 23).unwrap();
        TripExport {
            trip_settings: Trip {
                id: Uuid::new_v4(),
                name: "Kansai winter".to_string(),
                start_date: start,
                season: Season::Winter,
                crea_date: None,
                modif_date: None,
            },
            itinerary_data: placeholder_sequence(start, 3, Season::Winter),
            expenses: Vec::new(),
            checklist: Vec::new(),
            version: EXPORT_VERSION,
            timestamp: None,
        }
    }

    #[test]
    fn share_code_round_trips() {
        let export = sample_export();
        let code = encode_share_code(&export).unwrap();
        assert!(code.starts_with("WF2."));

        let document = decode_share_code(&code).unwrap();
        let parsed: TripExport = serde_json::from_value(document).unwrap();
        assert_eq!(parsed.trip_settings.id, export.trip_settings.id);
        assert_eq!(parsed.itinerary_data.len(), 3);
        assert_eq!(parsed.itinerary_data[0].label, "Day 1");
    }

    #[test]
    fn export_document_uses_interchange_field_names() {
        let value = serde_json::to_value(sample_export()).unwrap();
        assert!(value.get("tripSettings").is_some());
        assert!(value.get("itineraryData").is_some());
        assert!(value.get("checklist").is_some());
        assert_eq!(value["version"], EXPORT_VERSION);
    }

    #[test]
    fn tampered_share_code_is_rejected() {
        let code = encode_share_code(&sample_export()).unwrap();
        let mut tampered = code.clone();
        tampered.push('A');
        assert!(decode_share_code(&tampered).is_err());
        assert!(decode_share_code("WF2.deadbeef.AAAA").is_err());
        assert!(decode_share_code("nonsense").is_err());
        assert!(decode_share_code("XX9.12345678.AAAA").is_err());
    }

    #[test]
    fn document_validation_requires_core_fields() {
        assert!(validate_document(serde_json::json!({ "expenses": [] })).is_err());
        assert!(validate_document(serde_json::json!("not an object")).is_err());

        let good = serde_json::to_value(sample_export()).unwrap();
        assert!(validate_document(good).is_ok());

        let mut empty_days = serde_json::to_value(sample_export()).unwrap();
        empty_days["itineraryData"] = serde_json::json!([]);
        assert!(validate_document(empty_days).is_err());
    }
}
