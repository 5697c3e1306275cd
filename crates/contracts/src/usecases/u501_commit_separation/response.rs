use serde::{Deserialize, Serialize};

/// Ответ на фиксацию отбора.
///
/// The backend spells the flag `sucess` on this endpoint only. Keep it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSeparationResponse {
    #[serde(rename = "sucess")]
    pub success: bool,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typo_field_is_required_spelling() {
        let ok: CommitSeparationResponse =
            serde_json::from_str(r#"{"sucess": true}"#).unwrap();
        assert!(ok.success);

        let correct_spelling = serde_json::from_str::<CommitSeparationResponse>(r#"{"success": true}"#);
        assert!(correct_spelling.is_err());
    }
}
