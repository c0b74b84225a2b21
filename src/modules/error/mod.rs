// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use code::ErrorCode;
use snafu::{Location, Snafu};

pub mod code;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum MailBlastError {
    #[snafu(display("{message}"))]
    Generic {
        message: String,
        #[snafu(implicit)]
        location: Location,
        code: ErrorCode,
    },
}

pub type MailBlastResult<T, E = MailBlastError> = std::result::Result<T, E>;

impl MailBlastError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MailBlastError::Generic { code, .. } => *code,
        }
    }
}
