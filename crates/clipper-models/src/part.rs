//! Batch request and response models.

use serde::{Deserialize, Serialize};

/// A requested sub-range `[from, to)` of a source video, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipPart {
    /// Source video name (no extension).
    pub video: String,

    /// Range start in seconds.
    pub from: i64,

    /// Range end in seconds.
    pub to: i64,
}

impl ClipPart {
    /// Create a new part request.
    pub fn new(video: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            video: video.into(),
            from,
            to,
        }
    }
}

/// One inbound batch of part requests, possibly across multiple videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    /// Requested parts, in caller order.
    pub parts: Vec<ClipPart>,

    /// Opaque token forwarded to source resolution when the deployment reads
    /// sources through authenticated URLs. Never inspected here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Terminal result for a single requested part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOutcome {
    pub video: String,
    pub from: i64,
    pub to: i64,
    pub succeeded: bool,
}

impl PartOutcome {
    /// Build the outcome for a part.
    pub fn new(part: &ClipPart, succeeded: bool) -> Self {
        Self {
            video: part.video.clone(),
            from: part.from,
            to: part.to,
            succeeded,
        }
    }
}

/// Response for one batch. Exactly one outcome per input part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub parts: Vec<PartOutcome>,
    pub has_errors: bool,
}

impl BatchResponse {
    /// Fold outcomes into a response; `has_errors` is the OR of failures.
    pub fn from_parts(parts: Vec<PartOutcome>) -> Self {
        let has_errors = parts.iter().any(|p| !p.succeeded);
        Self { parts, has_errors }
    }
}

/// Partition parts by video.
///
/// Within a group, input order is preserved. Groups are ordered by the first
/// appearance of each video in the input, so output order is deterministic.
pub fn group_by_video(parts: &[ClipPart]) -> Vec<(&str, Vec<&ClipPart>)> {
    let mut groups: Vec<(&str, Vec<&ClipPart>)> = Vec::new();
    for part in parts {
        match groups.iter_mut().find(|(video, _)| *video == part.video) {
            Some((_, group)) => group.push(part),
            None => groups.push((part.video.as_str(), vec![part])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_video_first_appearance_order() {
        let parts = vec![
            ClipPart::new("b", 0, 5),
            ClipPart::new("a", 0, 5),
            ClipPart::new("b", 10, 15),
            ClipPart::new("a", 20, 25),
        ];

        let groups = group_by_video(&parts);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "b");
        assert_eq!(groups[1].0, "a");
        assert_eq!(groups[0].1.iter().map(|p| p.from).collect::<Vec<_>>(), [0, 10]);
        assert_eq!(groups[1].1.iter().map(|p| p.from).collect::<Vec<_>>(), [0, 20]);
    }

    #[test]
    fn test_group_by_video_empty() {
        assert!(group_by_video(&[]).is_empty());
    }

    #[test]
    fn test_from_parts_has_errors() {
        let part = ClipPart::new("a", 0, 5);
        let ok = BatchResponse::from_parts(vec![
            PartOutcome::new(&part, true),
            PartOutcome::new(&part, true),
        ]);
        assert!(!ok.has_errors);

        let mixed = BatchResponse::from_parts(vec![
            PartOutcome::new(&part, true),
            PartOutcome::new(&part, false),
        ]);
        assert!(mixed.has_errors);

        let empty = BatchResponse::from_parts(Vec::new());
        assert!(!empty.has_errors);
    }

    #[test]
    fn test_request_json_contract() {
        let req: BatchRequest = serde_json::from_str(
            r#"{"parts":[{"video":"talk","from":3,"to":9}],"accessToken":"tok"}"#,
        )
        .unwrap();
        assert_eq!(req.parts, vec![ClipPart::new("talk", 3, 9)]);
        assert_eq!(req.access_token.as_deref(), Some("tok"));

        // accessToken is optional
        let req: BatchRequest =
            serde_json::from_str(r#"{"parts":[{"video":"talk","from":3,"to":9}]}"#).unwrap();
        assert!(req.access_token.is_none());
    }

    #[test]
    fn test_response_json_contract() {
        let part = ClipPart::new("talk", 3, 9);
        let resp = BatchResponse::from_parts(vec![PartOutcome::new(&part, false)]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["hasErrors"], true);
        assert_eq!(json["parts"][0]["video"], "talk");
        assert_eq!(json["parts"][0]["from"], 3);
        assert_eq!(json["parts"][0]["to"], 9);
        assert_eq!(json["parts"][0]["succeeded"], false);
    }
}
