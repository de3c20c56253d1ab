//! # Locale Initialization Unit Tests / 语言初始化单元测试
//!
//! Tests for the library-level locale setup: whatever the host system
//! reports, `init` must land on a locale the bundled translations cover.
//!
//! 库级语言设置的测试：无论宿主系统报告什么，`init` 都必须落在
//! 内置翻译所覆盖的语言上。

#[test]
fn init_selects_a_bundled_locale() {
    sheet_runner::init();
    let locale = rust_i18n::locale().to_string();
    assert!(
        locale == "en" || locale == "zh-CN",
        "unexpected locale: {locale}"
    );
}
