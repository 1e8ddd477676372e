pub mod a001_campaign;
pub mod a002_template;
pub mod a003_contact;
pub mod a004_sms_upload;
