//! Translation of server business messages.
//!
//! The `/UserAuth` endpoints return machine phrases in their `Message`
//! array; known ones map to Persian user-facing text, everything else is
//! shown as received.

/// Generic transport-failure message shown for network/HTTP errors.
pub const GENERIC_ERROR_FA: &str = "خطا در برقراری ارتباط با سرور";

/// Success message for a saved home-screen layout.
pub const SAVE_SUCCESS_FA: &str = "تنظیمات صفحه اصلی با موفقیت ذخیره شد";

/// Translate one server business message, identity fallback.
pub fn translate_server_message(message: &str) -> String {
    match message {
        "Unauthorized" => "دسترسی غیرمجاز".to_string(),
        "InvalidRequest" => "درخواست نامعتبر است".to_string(),
        "DisplaySettingNotFound" => "تنظیمات نمایش یافت نشد".to_string(),
        "DisplaySettingSaveFailed" => "ذخیره تنظیمات نمایش ناموفق بود".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_message_is_translated() {
        assert_eq!(translate_server_message("Unauthorized"), "دسترسی غیرمجاز");
    }

    #[test]
    fn test_unknown_message_passes_through() {
        assert_eq!(
            translate_server_message("SomeNewServerPhrase"),
            "SomeNewServerPhrase"
        );
    }
}
