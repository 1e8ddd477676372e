use serde::{Deserialize, Serialize};

/// Envelope every JSON endpoint of the campaign backend answers with
///
/// ```json
/// { "success": true, "data": { ... }, "message": "optional text" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Splits the envelope: payload on success, backend message on failure
    pub fn into_result(self) -> Result<Option<T>, Option<String>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.message.filter(|m| !m.trim().is_empty()))
        }
    }
}

/// One page of a server-paginated collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Query parameters of paginated list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number, as the backend expects it
    pub page: usize,
    pub limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageQuery {
    /// Builds a query from a 0-based page index
    pub fn from_index(page_index: usize, page_size: usize, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page_index + 1,
            limit: page_size.max(1),
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{"success":true,"data":[1,2,3]}"#;
        let resp: ApiResponse<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_result(), Ok(Some(vec![1, 2, 3])));
    }

    #[test]
    fn test_failure_envelope_keeps_message() {
        let json = r#"{"success":false,"message":"Campaign not found"}"#;
        let resp: ApiResponse<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_result(), Err(Some("Campaign not found".to_string())));
    }

    #[test]
    fn test_failure_with_blank_message() {
        let json = r#"{"success":false,"data":null,"message":"  "}"#;
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_result(), Err(None));
    }

    #[test]
    fn test_page_query_is_one_based() {
        let q = PageQuery::from_index(0, 25, "  ann ");
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 25);
        assert_eq!(q.search.as_deref(), Some("ann"));
        assert_eq!(PageQuery::from_index(3, 0, "").search, None);
        assert_eq!(PageQuery::from_index(3, 0, "").limit, 1);
    }
}
