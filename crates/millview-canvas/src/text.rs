//! Label and overlay text rasterization
//!
//! tiny-skia has no text support, so glyphs are rasterized with `rusttype`
//! and blended into the pixmap pixel by pixel. The label font comes from a
//! `fontdb` system query for the sans-serif family, cached in a `OnceLock`.
//! On systems without any matching font the text passes are skipped and the
//! rest of the frame still renders.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point, Font, Scale};
use std::fs;
use std::sync::OnceLock;
use tiny_skia::{Color, Pixmap};

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

fn load_system_sans() -> Option<Font<'static>> {
    let families = [Family::SansSerif];
    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
    }
}

/// The cached label font, or `None` when the system has no sans-serif face.
pub fn label_font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(load_system_sans).as_ref()
}

/// Draw a line of text with its top-left corner at `(x, y)`.
///
/// No-op when no label font is available.
pub fn draw_text(pixmap: &mut Pixmap, text: &str, x: f32, y: f32, size: f32, color: Color) {
    let Some(font) = label_font() else {
        return;
    };

    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let start = point(x, y + v_metrics.ascent);

    let width = pixmap.width();
    let height = pixmap.height();
    let c = color.to_color_u8();
    let data = pixmap.data_mut();

    for glyph in font.layout(text, scale, start) {
        if let Some(bounding_box) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = gx as i32 + bounding_box.min.x;
                let py = gy as i32 + bounding_box.min.y;
                if v <= 0.0 || px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    return;
                }

                // Source-over blend against the (opaque) frame.
                let idx = ((py as u32 * width + px as u32) * 4) as usize;
                let blend = |dst: u8, src: u8| (src as f32 * v + dst as f32 * (1.0 - v)) as u8;
                data[idx] = blend(data[idx], c.red());
                data[idx + 1] = blend(data[idx + 1], c.green());
                data[idx + 2] = blend(data[idx + 2], c.blue());
                data[idx + 3] = 255;
            });
        }
    }
}
