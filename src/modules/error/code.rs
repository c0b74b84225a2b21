// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCode {
    // Client-side errors (10000–10999)
    InvalidParameter = 10000,
    MissingConfiguration = 10010,
    RecipientFileError = 10020,
    AttachmentError = 10030,

    // Authentication errors (20000–20999)
    SmtpAuthenticationFailed = 20000,

    // Network connection errors (40000–40999)
    NetworkError = 40000,
    HttpResponseError = 40010,

    // Mail service errors (50000–50999)
    SmtpConnectionFailed = 50000,
    SmtpCommandFailed = 50010,

    // Text generation errors (60000–60999)
    GenerationFailed = 60000,

    // Internal system errors (70000–70999)
    InternalError = 70000,
}
