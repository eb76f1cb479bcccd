use serde::{Deserialize, Serialize};

use crate::Error;

/// HTTP-level success is not enough: FinMind reports failures in `status`.
pub const STATUS_OK: i64 = 200;

/// Response envelope shared by every FinMind dataset.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub msg: String,
    pub status: i64,
    pub data: Option<Vec<T>>,
}

impl<T> ApiResponse<T> {
    /// Validates the envelope and returns its records.
    ///
    /// A non-200 `status` becomes [`Error::Api`] carrying the API message (or a
    /// generic one when the message is blank). A missing `data` array becomes
    /// [`Error::MissingData`]. An empty array is a valid, empty result.
    pub fn into_data(self) -> Result<Vec<T>, Error> {
        if self.status != STATUS_OK {
            let msg = if self.msg.trim().is_empty() {
                "API 回應異常".to_string()
            } else {
                self.msg
            };
            return Err(Error::Api {
                status: self.status,
                msg,
            });
        }
        self.data.ok_or(Error::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_data_success() {
        let resp: ApiResponse<i64> =
            serde_json::from_str(r#"{"msg":"success","status":200,"data":[1,2]}"#).unwrap();
        assert_eq!(resp.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn into_data_bad_status_keeps_message() {
        let resp: ApiResponse<i64> =
            serde_json::from_str(r#"{"msg":"Your level is register","status":402}"#).unwrap();
        match resp.into_data() {
            Err(Error::Api { status, msg }) => {
                assert_eq!(status, 402);
                assert_eq!(msg, "Your level is register");
            }
            _ => panic!("expected Api error"),
        }
    }

    #[test]
    fn into_data_bad_status_blank_message() {
        let resp: ApiResponse<i64> = serde_json::from_str(r#"{"msg":"","status":500}"#).unwrap();
        match resp.into_data() {
            Err(Error::Api { msg, .. }) => assert_eq!(msg, "API 回應異常"),
            _ => panic!("expected Api error"),
        }
    }

    #[test]
    fn into_data_missing_data() {
        let resp: ApiResponse<i64> =
            serde_json::from_str(r#"{"msg":"success","status":200}"#).unwrap();
        assert!(matches!(resp.into_data(), Err(Error::MissingData)));
    }

    #[test]
    fn envelope_of_records_without_data() {
        let resp: ApiResponse<crate::types::MonthRevenue> =
            serde_json::from_str(r#"{"msg":"success","status":200}"#).unwrap();
        assert!(resp.data.is_none());
        assert!(matches!(resp.into_data(), Err(Error::MissingData)));
    }

    #[test]
    fn into_data_null_data() {
        let resp: ApiResponse<i64> =
            serde_json::from_str(r#"{"msg":"success","status":200,"data":null}"#).unwrap();
        assert!(matches!(resp.into_data(), Err(Error::MissingData)));
    }
}
