use crate::shared::api::{self, segment, ApiError};
use contracts::domain::a004_sms_upload::aggregate::{SendSmsForm, SendSmsResult, SmsUpload};
use web_sys::{Blob, File, FormData};

pub async fn send_sms(form: &SendSmsForm, file: &File) -> Result<SendSmsResult, ApiError> {
    let body = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    body.append_with_str("campaignName", form.campaign_name.trim())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    body.append_with_str("message", &form.message)
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    body.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    api::post_multipart("/sms/send-sms", body).await
}

pub async fn fetch_uploads() -> Result<Vec<SmsUpload>, ApiError> {
    api::get("/sms/data").await
}

/// The recipients file as it was uploaded
pub async fn download_file(upload_id: &str, file_name: &str) -> Result<Blob, ApiError> {
    api::get_blob(&format!(
        "/sms/download/{}/{}",
        segment(upload_id),
        segment(file_name)
    ))
    .await
}

/// Delivery log generated on request
pub async fn generate_log(upload_id: &str) -> Result<Blob, ApiError> {
    api::get_blob(&format!("/sms/generate-log/{}", segment(upload_id))).await
}
