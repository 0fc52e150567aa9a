//! Reusable view pieces shared by several pages.

pub mod storage_banner;
