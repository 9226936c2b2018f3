//! Extractors whose rejections render as [`AppError`], so a malformed body or
//! path comes back as `{"error": ...}` like every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequest)]
#[from_request(rejection(AppError))]
pub struct AppMultipart(pub axum::extract::Multipart);
