//! Webhook layer for posting messages to a chat endpoint.
//!
//! This module provides types and traits for:
//! - The webhook handle and its operations ([`Webhook`])
//! - Request bodies ([`Payload`], [`MultipartForm`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod hook;
mod http;
mod payload;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, ValidationError, WebhookError};
pub use hook::{USER_AGENT, USERNAME_LIMIT, Webhook, validate_avatar_url, validate_username};
pub use self::http::{
    FormPart, HttpClient, HttpRequest, HttpResponse, MultipartForm, PartContent, RequestBody,
};
pub use payload::Payload;
