pub mod api_client;
pub mod api_utils;
pub mod i18n;
pub mod notify;
pub mod storage;
