use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use qrcode::QrCode;
use qrcode::render::svg;

use qrvault_domain::color::HexColor;

use crate::error::BridgeError;
use crate::frame::GrayFrame;

/// Minimum edge of rendered previews, in pixels.
pub const PREVIEW_SIZE: u32 = 256;

/// Largest raster scale, in pixels per module.
pub const MAX_MODULE_PX: u32 = 64;

/// Light modules around the symbol in raster output.
const QUIET_ZONE_MODULES: usize = 4;

/// Foreground (dark module) and background (light module) colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrStyle {
    pub foreground: HexColor,
    pub background: HexColor,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            foreground: HexColor::default_foreground(),
            background: HexColor::default_background(),
        }
    }
}

impl QrStyle {
    pub fn parse(foreground: &str, background: &str) -> Result<Self, BridgeError> {
        Ok(Self {
            foreground: HexColor::parse(foreground)?,
            background: HexColor::parse(background)?,
        })
    }
}

/// Render `text` as an SVG document.
pub fn render_svg(text: &str, style: &QrStyle) -> Result<String, BridgeError> {
    if text.is_empty() {
        return Err(BridgeError::EmptyData);
    }
    let code = QrCode::new(text.as_bytes())?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(PREVIEW_SIZE, PREVIEW_SIZE)
        .quiet_zone(true)
        .dark_color(svg::Color(style.foreground.as_str()))
        .light_color(svg::Color(style.background.as_str()))
        .build())
}

/// `data:` URL embedding an SVG document.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Live preview for an editor: `None` while there is nothing to encode.
pub fn preview(text: &str, style: &QrStyle) -> Result<Option<String>, BridgeError> {
    if text.is_empty() {
        return Ok(None);
    }
    render_svg(text, style).map(|svg| Some(svg_data_url(&svg)))
}

/// Render `text` black on white with `module_px` pixels per module.
///
/// `module_px` must lie in `1..=MAX_MODULE_PX`.
pub fn render_gray(text: &str, module_px: u32) -> Result<GrayFrame, BridgeError> {
    if text.is_empty() {
        return Err(BridgeError::EmptyData);
    }
    if !(1..=MAX_MODULE_PX).contains(&module_px) {
        return Err(BridgeError::InvalidScale { module_px });
    }
    let code = QrCode::new(text.as_bytes())?;
    let modules = code.width();
    let scale = module_px as usize;
    let invalid = || BridgeError::InvalidScale { module_px };
    let side = (modules + 2 * QUIET_ZONE_MODULES)
        .checked_mul(scale)
        .ok_or_else(invalid)?;
    let area = side.checked_mul(side).ok_or_else(invalid)?;
    let edge = u32::try_from(side).map_err(|_| invalid())?;

    let mut pixels = vec![u8::MAX; area];
    for (i, color) in code.to_colors().into_iter().enumerate() {
        if !matches!(color, qrcode::Color::Dark) {
            continue;
        }
        let mx = (i % modules + QUIET_ZONE_MODULES) * scale;
        let my = (i / modules + QUIET_ZONE_MODULES) * scale;
        for y in my..my + scale {
            pixels[y * side + mx..y * side + mx + scale].fill(0);
        }
    }
    GrayFrame::new(edge, edge, pixels)
}
