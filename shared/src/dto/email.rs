use serde::{Deserialize, Serialize};

/// Body of `POST /api/email/send` (diagnostic screen only). The backend
/// keeps its original French field names on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailSendRequest {
    pub email: String,
    #[serde(rename = "nomCours")]
    pub course_name: String,
    #[serde(rename = "alerteId")]
    pub alert_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_request_keeps_backend_field_names() {
        let req = EmailSendRequest {
            email: "a@b.fr".to_string(),
            course_name: "AIR.PA".to_string(),
            alert_id: 3,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nomCours"], "AIR.PA");
        assert_eq!(json["alerteId"], 3);
    }
}
