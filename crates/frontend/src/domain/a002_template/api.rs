use crate::shared::api::{self, segment, ApiError};
use contracts::domain::a002_template::aggregate::{ConvertedDocument, Template, TemplateDto};
use web_sys::{File, FormData};

/// All templates, or only those of one campaign
pub async fn fetch_templates(campaign_id: Option<&str>) -> Result<Vec<Template>, ApiError> {
    match campaign_id {
        Some(id) => api::get(&format!("/templates/campaign/{}", segment(id))).await,
        None => api::get("/templates").await,
    }
}

pub async fn save_form(dto: &TemplateDto) -> Result<Template, ApiError> {
    match dto.id.as_deref() {
        Some(id) => api::put(&format!("/templates/{}", segment(id)), dto).await,
        None => api::post("/templates", dto).await,
    }
}

pub async fn delete_template(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/templates/{}", segment(id))).await
}

/// DOCX → HTML on the converter service
pub async fn convert_docx(file: &File) -> Result<ConvertedDocument, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    api::post_multipart("/converter/docsToHtml", form).await
}
