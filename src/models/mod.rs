//! Data models for cognito-tag.

pub mod auth;
