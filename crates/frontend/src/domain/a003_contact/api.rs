use crate::shared::api::{self, segment, ApiError};
use contracts::domain::a003_contact::aggregate::{Contact, ContactUploadMapping, ContactUploadResult};
use contracts::shared::{Page, PageQuery};
use web_sys::{File, FormData};

/// Multipart: the original file plus the column mapping as JSON
pub async fn upload_contacts(
    campaign_id: &str,
    file: &File,
    mapping: &ContactUploadMapping,
) -> Result<ContactUploadResult, ApiError> {
    let mapping_json = serde_json::to_string(mapping).map_err(|e| ApiError::Request(e.to_string()))?;
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_str("mapping", &mapping_json)
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    api::post_multipart(&format!("/upload/contacts/{}", segment(campaign_id)), form).await
}

pub async fn fetch_contacts(campaign_id: &str, query: &PageQuery) -> Result<Page<Contact>, ApiError> {
    api::get_query(&format!("/upload/contacts/{}", segment(campaign_id)), query).await
}
