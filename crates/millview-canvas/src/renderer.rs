//! Layered scene renderer
//!
//! Repaints the full frame from a [`Scene`] snapshot on every call. Fixed
//! z-order, later layers over earlier ones:
//!
//! 1. fine + major grid, phase-aligned with the pan offset
//! 2. workpiece rectangle colored by material
//! 3. toolpath segments, point markers and labels, with the per-segment
//!    phase derived from the simulation cursor
//! 4. machine/status overlay with a pulsing playback indicator
//! 5. coordinate axes, always on top
//!
//! Nothing is kept between frames, so identical inputs always produce
//! identical pixels.

use crate::mapper::CoordinateMapper;
use crate::scene::Scene;
use crate::text::draw_text;
use image::{Rgb, RgbImage};
use millview_core::{EngineConfig, Error, Material, PathPhase, Result, ScreenPoint};
use tiny_skia::{
    Color, FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform,
};
use tracing::{debug, trace};

/// Fine grid lines below this pixel spacing would flood the canvas.
const MIN_GRID_SPACING_PX: f64 = 4.0;
/// Overlay line height in pixels.
const OVERLAY_LINE_HEIGHT: f32 = 15.0;
/// Overlay and label font sizes.
const OVERLAY_FONT_SIZE: f32 = 12.0;
const LABEL_FONT_SIZE: f32 = 10.0;

fn background_color() -> Color {
    Color::from_rgba8(33, 41, 51, 255)
}
fn fine_grid_color() -> Color {
    Color::from_rgba8(48, 58, 71, 255)
}
fn major_grid_color() -> Color {
    Color::from_rgba8(68, 82, 99, 255)
}
fn completed_color() -> Color {
    Color::from_rgba8(189, 195, 199, 255)
}
fn active_color() -> Color {
    Color::from_rgba8(46, 204, 113, 255)
}
fn active_glow_color() -> Color {
    Color::from_rgba8(46, 204, 113, 80)
}
fn planned_color() -> Color {
    Color::from_rgba8(127, 140, 141, 255)
}
fn label_color() -> Color {
    Color::from_rgba8(236, 240, 241, 255)
}
fn axis_x_color() -> Color {
    Color::from_rgba8(231, 76, 60, 255)
}
fn axis_y_color() -> Color {
    Color::from_rgba8(46, 204, 113, 255)
}
fn workpiece_outline_color() -> Color {
    Color::from_rgba8(236, 240, 241, 70)
}

/// Render color for a workpiece material. Unknown materials fall back to the
/// default gray.
fn material_color(material: Material) -> Color {
    match material {
        Material::Aluminum => Color::from_rgba8(168, 178, 186, 255),
        Material::Steel => Color::from_rgba8(108, 117, 125, 255),
        Material::Brass => Color::from_rgba8(181, 166, 66, 255),
        Material::Copper => Color::from_rgba8(184, 115, 51, 255),
        Material::Wood => Color::from_rgba8(160, 120, 70, 255),
        Material::Acrylic => Color::from_rgba8(93, 173, 226, 255),
        Material::Foam => Color::from_rgba8(236, 234, 222, 255),
        Material::Other => Color::from_rgba8(120, 130, 140, 255),
    }
}

/// Full-frame renderer over a tiny-skia pixmap.
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    config: EngineConfig,
    mapper: CoordinateMapper,
}

impl SceneRenderer {
    pub fn new(config: EngineConfig) -> Self {
        let mapper = CoordinateMapper::new(&config);
        Self { config, mapper }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Render one frame. Clears and fully repaints the pixel surface.
    pub fn render(&self, scene: &Scene, width: u32, height: u32) -> Result<Pixmap> {
        scene.validate()?;

        debug!(
            width,
            height,
            points = scene.points.len(),
            cursor_active = scene.cursor.active,
            cursor_index = scene.cursor.index,
            "rendering frame"
        );

        let mut pixmap = Pixmap::new(width, height).ok_or(Error::Canvas { width, height })?;
        pixmap.fill(background_color());

        let origin = ScreenPoint::new(width as f64 / 2.0, height as f64 / 2.0);

        self.draw_grid(&mut pixmap, scene, origin);
        if scene.visibility.material {
            self.draw_workpiece(&mut pixmap, scene, origin);
        }
        if scene.visibility.toolpath {
            self.draw_toolpath(&mut pixmap, scene, origin);
        }
        self.draw_overlay(&mut pixmap, scene);
        self.draw_axes(&mut pixmap, scene, origin);

        Ok(pixmap)
    }

    /// Render one frame and convert it to an RGB image buffer for hosts that
    /// blit RGB or snapshot to disk. Alpha is dropped against the opaque
    /// background.
    pub fn render_image(&self, scene: &Scene, width: u32, height: u32) -> Result<RgbImage> {
        let pixmap = self.render(scene, width, height)?;
        let data = pixmap.data();
        Ok(RgbImage::from_fn(width, height, |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        }))
    }

    /// Layer 1: fine and major grids, phase-aligned with the pan offset so
    /// lines stay put in world space while panning.
    fn draw_grid(&self, pixmap: &mut Pixmap, scene: &Scene, origin: ScreenPoint) {
        let scale = self.mapper.scale(&scene.view);
        let phase_x = origin.x + scene.view.pan.x;
        let phase_y = origin.y + scene.view.pan.y;

        let fine_px = self.config.grid_spacing_mm * scale;
        if fine_px >= MIN_GRID_SPACING_PX {
            self.grid_pass(pixmap, fine_px, phase_x, phase_y, fine_grid_color());
        } else {
            trace!(spacing_px = fine_px, "fine grid below threshold, skipped");
        }

        let major_px = self.config.major_grid_spacing_mm * scale;
        if major_px >= MIN_GRID_SPACING_PX {
            self.grid_pass(pixmap, major_px, phase_x, phase_y, major_grid_color());
        }
    }

    fn grid_pass(&self, pixmap: &mut Pixmap, spacing: f64, phase_x: f64, phase_y: f64, color: Color) {
        let width = pixmap.width() as f64;
        let height = pixmap.height() as f64;

        let mut pb = PathBuilder::new();
        let mut x = phase_x.rem_euclid(spacing);
        while x <= width {
            pb.move_to(x as f32, 0.0);
            pb.line_to(x as f32, height as f32);
            x += spacing;
        }
        let mut y = phase_y.rem_euclid(spacing);
        while y <= height {
            pb.move_to(0.0, y as f32);
            pb.line_to(width as f32, y as f32);
            y += spacing;
        }

        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = false;
            let stroke = Stroke {
                width: 1.0,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Layer 2: workpiece rectangle, centered at the viewport center and
    /// sized by the bounds times the effective scale.
    fn draw_workpiece(&self, pixmap: &mut Pixmap, scene: &Scene, origin: ScreenPoint) {
        let scale = self.mapper.scale(&scene.view);
        let w = (scene.bounds.width * scale) as f32;
        let h = (scene.bounds.height * scale) as f32;
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        let cx = (origin.x + scene.view.pan.x) as f32;
        let cy = (origin.y + scene.view.pan.y) as f32;

        let Some(rect) = Rect::from_xywh(cx - w / 2.0, cy - h / 2.0, w, h) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);

        let mut paint = Paint::default();
        paint.set_color(material_color(scene.machine.material));
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        let mut outline = Paint::default();
        outline.set_color(workpiece_outline_color());
        outline.anti_alias = true;
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
    }

    /// Layer 3: toolpath segments, markers and labels.
    fn draw_toolpath(&self, pixmap: &mut Pixmap, scene: &Scene, origin: ScreenPoint) {
        if scene.points.is_empty() {
            return;
        }

        let scale = self.mapper.scale(&scene.view);
        let groove_width = (scene.machine.tool_diameter * scale).max(2.0) as f32;
        let marker_radius = (scene.machine.tool_diameter / 2.0 * scale)
            .max(self.config.min_marker_radius_px) as f32;

        for window in scene.points.windows(2).enumerate() {
            let (i, pair) = window;
            let from = self.mapper.to_screen(pair[0].x, pair[0].y, &scene.view, origin);
            let to = self.mapper.to_screen(pair[1].x, pair[1].y, &scene.view, origin);
            let phase = scene.cursor.phase_of(i);
            trace!(segment = i, phase = phase.name(), "toolpath segment");
            self.stroke_segment(pixmap, from, to, phase, groove_width);
        }

        for (i, p) in scene.points.iter().enumerate() {
            let s = self.mapper.to_screen(p.x, p.y, &scene.view, origin);
            let phase = scene.cursor.phase_of(i);
            self.draw_marker(pixmap, s, phase, marker_radius);

            let label_x = (s.x as f32) + marker_radius + 3.0;
            draw_text(
                pixmap,
                &format!("{}", i + 1),
                label_x,
                (s.y as f32) - marker_radius - LABEL_FONT_SIZE,
                LABEL_FONT_SIZE,
                label_color(),
            );
            draw_text(
                pixmap,
                &format!("{:.1}, {:.1}", p.x, p.y),
                label_x,
                s.y as f32,
                LABEL_FONT_SIZE,
                planned_color(),
            );
        }
    }

    fn stroke_segment(
        &self,
        pixmap: &mut Pixmap,
        from: ScreenPoint,
        to: ScreenPoint,
        phase: PathPhase,
        groove_width: f32,
    ) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;

        match phase {
            PathPhase::Completed => {
                // Wide opaque stroke: the cut groove.
                paint.set_color(completed_color());
                let stroke = Stroke {
                    width: groove_width,
                    line_cap: LineCap::Round,
                    ..Default::default()
                };
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
            PathPhase::Active => {
                // Translucent under-stroke as the glow, bright core on top.
                paint.set_color(active_glow_color());
                let glow = Stroke {
                    width: groove_width + 6.0,
                    line_cap: LineCap::Round,
                    ..Default::default()
                };
                pixmap.stroke_path(&path, &paint, &glow, Transform::identity(), None);

                paint.set_color(active_color());
                let core = Stroke {
                    width: 2.5,
                    line_cap: LineCap::Round,
                    ..Default::default()
                };
                pixmap.stroke_path(&path, &paint, &core, Transform::identity(), None);
            }
            PathPhase::Planned => {
                paint.set_color(planned_color());
                let stroke = Stroke {
                    width: 1.5,
                    dash: StrokeDash::new(vec![6.0, 4.0], 0.0),
                    ..Default::default()
                };
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    fn draw_marker(&self, pixmap: &mut Pixmap, center: ScreenPoint, phase: PathPhase, radius: f32) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius) else {
            return;
        };
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(match phase {
            PathPhase::Completed => completed_color(),
            PathPhase::Active => active_color(),
            PathPhase::Planned => planned_color(),
        });
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Layer 4: textual readout of machine parameters, zoom, point count and
    /// progress, plus the pulsing playback indicator.
    fn draw_overlay(&self, pixmap: &mut Pixmap, scene: &Scene) {
        let machine = scene.machine;
        let total = scene.points.len();

        let lines = [
            format!("material {}", machine.material),
            format!(
                "spindle {:.0} rpm  feed {:.0} mm/min  plunge {:.0} mm/min",
                machine.spindle_speed, machine.feed_rate, machine.plunge_rate
            ),
            format!(
                "safe Z {:.1} mm  tool {:.2} mm",
                machine.safe_height, machine.tool_diameter
            ),
            format!(
                "{}  points {}  progress {:.0}%",
                scene.view,
                total,
                scene.cursor.progress_percent(total)
            ),
        ];

        for (i, line) in lines.iter().enumerate() {
            draw_text(
                pixmap,
                line,
                8.0,
                8.0 + i as f32 * OVERLAY_LINE_HEIGHT,
                OVERLAY_FONT_SIZE,
                label_color(),
            );
        }

        // Pulsing run indicator. The pulse phase derives from the cursor
        // index so identical inputs give identical pixels.
        if scene.cursor.active && scene.cursor.index < total {
            let pulse = (scene.cursor.index % 4) as f32 / 3.0;
            let radius = 4.0 + 3.0 * pulse;
            let cx = pixmap.width() as f32 - 18.0;
            if let Some(path) = PathBuilder::from_circle(cx, 18.0, radius) {
                let mut paint = Paint::default();
                paint.anti_alias = true;
                paint.set_color(active_color());
                pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }

    /// Layer 5: short coordinate axes at the mapped world origin, always on
    /// top. X red, Y green.
    fn draw_axes(&self, pixmap: &mut Pixmap, scene: &Scene, origin: ScreenPoint) {
        let o = self.mapper.to_screen(0.0, 0.0, &scene.view, origin);
        let len = self.config.axis_length_px as f32;
        let stroke = Stroke {
            width: 2.0,
            ..Default::default()
        };

        let mut pb = PathBuilder::new();
        pb.move_to(o.x as f32, o.y as f32);
        pb.line_to(o.x as f32 + len, o.y as f32);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(axis_x_color());
            paint.anti_alias = false;
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        let mut pb = PathBuilder::new();
        pb.move_to(o.x as f32, o.y as f32);
        pb.line_to(o.x as f32, o.y as f32 - len);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(axis_y_color());
            paint.anti_alias = false;
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
