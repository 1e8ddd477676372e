use crate::shared::api::{self, segment, ApiError};
use contracts::domain::a001_campaign::aggregate::{
    Campaign, CampaignDto, CampaignField, CampaignStats, UpdateVariablesRequest, UploadedVariable,
};
use web_sys::{File, FormData};

pub async fn fetch_campaigns() -> Result<Vec<Campaign>, ApiError> {
    api::get("/campaigns").await
}

pub async fn fetch_by_id(id: &str) -> Result<Campaign, ApiError> {
    api::get(&format!("/campaigns/{}", segment(id))).await
}

/// Creates or updates depending on `dto.id`
pub async fn save_form(dto: &CampaignDto) -> Result<Campaign, ApiError> {
    match dto.id.as_deref() {
        Some(id) => api::put(&format!("/campaigns/{}", segment(id)), dto).await,
        None => api::post("/campaigns", dto).await,
    }
}

pub async fn delete_campaign(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/campaigns/{}", segment(id))).await
}

pub async fn fetch_fields(campaign_id: &str) -> Result<Vec<CampaignField>, ApiError> {
    api::get(&format!("/campaigns/fields/{}", segment(campaign_id))).await
}

pub async fn update_variables(id: &str, request: &UpdateVariablesRequest) -> Result<(), ApiError> {
    let _: Option<serde_json::Value> = api::put(&format!("/campaigns/{}/update-variables", segment(id)), request).await?;
    Ok(())
}

/// Uploads an asset for a variable; the response carries its public URL
pub async fn upload_variable(campaign_id: &str, key: &str, file: &File) -> Result<UploadedVariable, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_str("key", key)
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_str("campaignId", campaign_id)
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    api::post_multipart("/campaigns/upload-variable", form).await
}

pub async fn fetch_stats(id: &str) -> Result<CampaignStats, ApiError> {
    api::get(&format!("/campaigns/{}/stats", segment(id))).await
}
