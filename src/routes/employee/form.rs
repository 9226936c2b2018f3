//! Multipart decoding for employee create/update.
//!
//! Text fields are collected first, then converted with the [`lenient`]
//! rules. An uploaded `profile_image` is written to the upload directory and
//! surfaced as a `/uploads/...` reference.

use std::collections::HashMap;
use std::path::Path;

use axum::body::Bytes;
use axum::extract::Multipart;
use chrono::Utc;

use crate::database::EmployeeData;
use crate::error::AppResult;

pub const PROFILE_IMAGE_FIELD: &str = "profile_image";

/// Lenient decode: conversion failures never reject the form. Numbers fall back
/// to zero, dates to absent, and each flag to its own default.
pub mod lenient {
    use std::str::FromStr;

    use chrono::NaiveDate;

    pub fn number<T: FromStr + Default>(raw: Option<&str>) -> T {
        raw.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// `YYYY-MM-DD`; empty or malformed input yields `None`.
    pub fn date(raw: Option<&str>) -> Option<NaiveDate> {
        raw.filter(|v| !v.is_empty())
            .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
    }

    /// True unless the value is exactly `"false"`.
    pub fn flag_default_on(raw: Option<&str>) -> bool {
        raw != Some("false")
    }

    /// False unless the value is exactly `"true"`.
    pub fn flag_default_off(raw: Option<&str>) -> bool {
        raw == Some("true")
    }
}

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Raw contents of an employee form before conversion.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    fields: HashMap<String, String>,
    image: Option<UploadedFile>,
}

impl EmployeeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = EmployeeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == PROFILE_IMAGE_FIELD {
                if let Some(file_name) = field.file_name().map(str::to_string) {
                    let bytes = field.bytes().await?;
                    if !file_name.is_empty() {
                        form.image = Some(UploadedFile { file_name, bytes });
                    }
                    continue;
                }
            }

            let value = field.text().await?;
            form.fields.insert(name, value);
        }

        Ok(form)
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_image(mut self, file_name: &str, bytes: impl Into<Bytes>) -> Self {
        self.image = Some(UploadedFile {
            file_name: file_name.to_string(),
            bytes: bytes.into(),
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Plaintext `password` field, when one was sent with content.
    pub fn password(&self) -> Option<&str> {
        self.get("password").map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn image(&self) -> Option<&UploadedFile> {
        self.image.as_ref()
    }

    /// Converts the text fields. `image_url` is left `None`; the caller sets it
    /// once the upload has been stored.
    pub fn decode(&self) -> EmployeeData {
        EmployeeData {
            id: self.text("id"),
            prefix: self.text("prefix"),
            first_name: self.text("first_name"),
            last_name: self.text("last_name"),
            nickname: self.text("nickname"),
            position_id: self.text("position_id"),
            color: self.text("color"),
            salary: lenient::number(self.get("salary")),
            pay_date: lenient::date(self.get("pay_date")),
            has_social_security: lenient::flag_default_off(self.get("has_social_security")),
            social_security_id: self.text("social_security_id"),
            tax_deduction: lenient::number(self.get("tax_deduction")),
            hourly_rate: lenient::number(self.get("hourly_rate")),
            overtime_rate: lenient::number(self.get("overtime_rate")),
            leave_personal: lenient::number(self.get("leave_personal")),
            leave_vacation: lenient::number(self.get("leave_vacation")),
            leave_sick: lenient::number(self.get("leave_sick")),
            email: self.text("email"),
            password_hash: self.text("password_hash"),
            status: lenient::flag_default_on(self.get("status")),
            payment_channel: self.text("payment_channel"),
            account_type: self.text("account_type"),
            bank_name: self.text("bank_name"),
            account_number: self.text("account_number"),
            bank_branch: self.text("bank_branch"),
            image_url: None,
        }
    }
}

/// Writes an upload as `<dir>/<unix-nanos>_<basename>` and returns its public
/// path. Two uploads of the same name within one nanosecond would collide.
pub async fn store_upload(dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<String> {
    tokio::fs::create_dir_all(dir).await?;

    let stored_name = format!(
        "{}_{}",
        Utc::now().timestamp_nanos_opt().unwrap_or_default(),
        base_name(file_name)
    );
    tokio::fs::write(dir.join(&stored_name), bytes).await?;

    Ok(format!("/uploads/{}", stored_name))
}

/// Deletes a file written by [`store_upload`], given its public URL.
/// Failures are logged, not returned.
pub async fn remove_upload(dir: &Path, url: &str) {
    let Some(stored_name) = url.strip_prefix("/uploads/") else {
        tracing::warn!("Not removing {}: not an upload URL", url);
        return;
    };

    match tokio::fs::remove_file(dir.join(base_name(stored_name))).await {
        Ok(()) => tracing::info!("Removed orphaned upload {}", url),
        Err(e) => tracing::warn!("Failed to remove orphaned upload {}: {}", url, e),
    }
}

fn base_name(file_name: &str) -> &str {
    match file_name.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name,
        _ => "upload",
    }
}
