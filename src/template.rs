//! The shared page template. Every prototype page is this document with the
//! title and asset-root prefix substituted in.

use gtmpl::Template;

/// The template source. `{{.title}}` and `{{.asset_root}}` are filled from a
/// [`crate::page::PageDescriptor`]; everything else is emitted verbatim,
/// including the simulated device frame and the TDesign card markup.
pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{.title}} - 天道文化</title>
  <link rel="stylesheet" href="{{.asset_root}}styles/tdesign-theme.css">
  <link rel="stylesheet" href="{{.asset_root}}styles/reset.css">
  <link rel="stylesheet" href="{{.asset_root}}styles/common.css">
  <link rel="stylesheet" href="{{.asset_root}}components/all.css">
  <style>
    body {
      display: flex;
      justify-content: center;
      align-items: center;
      min-height: 100vh;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    }
  </style>
</head>
<body>
  <div class="device-iphone15pro device-iphone15pro--animated">
    <div class="device-frame">
      <div class="device-notch"></div>
      <div class="device-statusbar">
        <span class="statusbar-time">9:41</span>
        <div style="display: flex; gap: 4px;">
          <span class="statusbar-signal"></span>
          <span class="statusbar-wifi"></span>
          <span class="statusbar-battery"></span>
        </div>
      </div>

      <div class="device-screen">
        <div class="page-header">
          <div class="page-header__back">←</div>
          <div class="page-header__title">{{.title}}</div>
          <div class="page-header__action"></div>
        </div>

        <div class="scroll-area scroll-area--with-header">
          <div class="page-content">
            <div class="t-card t-card--bordered">
              <div class="t-card__header">
                <div class="t-card__header-wrapper">
                  <div class="t-card__title">{{.title}}</div>
                </div>
              </div>
              <div class="t-card__body">
                <p style="color: var(--td-text-color-secondary);">
                  这是 {{.title}} 页面的内容。基于 TDesign 设计规范开发。
                </p>
              </div>
            </div>
          </div>
        </div>
      </div>

      <div class="device-safe-area-bottom"></div>
    </div>
  </div>
</body>
</html>
"#;

/// Parses [`TEMPLATE`] into an executable [`Template`]. The source is a
/// compile-time constant, so a parse error here means the template itself is
/// broken, not the caller's input.
pub fn parse() -> Result<Template, String> {
    let mut template = Template::default();
    template.parse(TEMPLATE)?;
    Ok(template)
}
