//! User-facing error messages.
//!
//! The transport is a one-way text stream, so upstream failures are
//! delivered to the customer as readable text in both Burmese and Chinese.
//! The wording is shown verbatim in the client UI.

use padauk_error::{PadaukError, UpstreamErrorKind};

/// Upstream is overloaded or down (503).
pub const SERVICE_UNAVAILABLE: &str =
    "ဝန်ဆောင်မှုယာယီမရရှိနိုင်ပါ။ ခဏစောင့်ပြီးပြန်လည်ကြိုးစားပေးပါ။ / 服务暂时不可用，请稍后重试。";

/// The provider throttled us (429).
pub const RATE_LIMITED: &str =
    "တောင်းဆိုမှုများလွန်းပါသည်။ ခဏစောင့်ပေးပါ။ / 请求过于频繁，请稍后重试。";

/// Malformed request (400).
pub const BAD_REQUEST: &str = "တောင်းဆိုမှုမှားယွင်းနေပါသည်။ / 请求格式错误。";

/// Authentication or authorization problem (401/403).
pub const AUTHORIZATION: &str = "ခွင့်ပြုချက်ပြဿနာရှိနေပါသည်။ / 权限验证失败。";

/// Anything else.
pub const GENERIC: &str =
    "ယာယီဘာသာပြန်ဆောင်ရွက်၍မရပါ။ ခဏစောင့်ပြီးပြန်လည်ကြိုးစားပေးပါ။ / 翻译服务暂时不可用，请稍后重试。";

/// Pick the customer-facing message for a failed upstream call.
pub fn user_message(error: &PadaukError) -> &'static str {
    let Some(upstream) = error.as_upstream() else {
        return GENERIC;
    };

    match &upstream.kind {
        UpstreamErrorKind::HttpError {
            status_code,
            message,
        } => match status_code {
            503 => SERVICE_UNAVAILABLE,
            429 => RATE_LIMITED,
            400 => BAD_REQUEST,
            401 | 403 => AUTHORIZATION,
            _ if mentions_overload(message) => SERVICE_UNAVAILABLE,
            _ => GENERIC,
        },
        UpstreamErrorKind::MissingApiKey(_) | UpstreamErrorKind::ClientCreation(_) => AUTHORIZATION,
        UpstreamErrorKind::ApiRequest(message)
        | UpstreamErrorKind::StreamInterrupted(message) => {
            if mentions_overload(message) {
                SERVICE_UNAVAILABLE
            } else {
                GENERIC
            }
        }
    }
}

fn mentions_overload(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("overloaded") || lower.contains("service unavailable")
}
