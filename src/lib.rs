//! civic-sms — turns citizen text messages into municipal issue reports.

pub mod config;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod store;
pub mod webhook;
