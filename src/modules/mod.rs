// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

pub mod compose;
pub mod engine;
pub mod error;
pub mod logger;
pub mod recipients;
pub mod report;
pub mod settings;
pub mod smtp;
pub mod utils;
