//! Canvas rendering of the observation report
//!
//! Draws the submitted record onto an offscreen canvas at 2x pixel density
//! and hands the result back as JPEG bytes for the PDF composer. The record
//! is redrawn rather than screenshotted from the live DOM, which keeps the
//! capture deterministic across browsers.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::features::submission::types::ObservationRecord;
use crate::services::client::{SubmissionError, SubmissionResult};

/// A4 proportions at CSS pixel resolution (96 dpi).
pub const PAGE_WIDTH_PX: u32 = 794;
pub const PAGE_HEIGHT_PX: u32 = 1123;
/// Capture scale; 2x keeps text crisp once the bitmap fills the PDF page.
pub const CAPTURE_SCALE: u32 = 2;

const MARGIN: f64 = 48.0;
const LINE_HEIGHT: f64 = 24.0;
const SECTION_GAP: f64 = 20.0;

/// A rendered report bitmap, JPEG-encoded.
pub struct ReportImage {
    pub data: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Renders the record to an offscreen canvas and returns the JPEG bytes.
pub fn render_report_image(record: &ObservationRecord) -> SubmissionResult<ReportImage> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| rendering_error("no document available"))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_rendering_error)?
        .dyn_into()
        .map_err(|_| rendering_error("canvas element has unexpected type"))?;

    let width_px = PAGE_WIDTH_PX * CAPTURE_SCALE;
    let height_px = PAGE_HEIGHT_PX * CAPTURE_SCALE;
    canvas.set_width(width_px);
    canvas.set_height(height_px);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_rendering_error)?
        .ok_or_else(|| rendering_error("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| rendering_error("2d context has unexpected type"))?;

    // Draw in CSS-pixel coordinates; the scale gives the 2x density.
    ctx.scale(CAPTURE_SCALE as f64, CAPTURE_SCALE as f64)
        .map_err(js_rendering_error)?;

    draw_report(&ctx, record)?;

    let data_url = canvas
        .to_data_url_with_type("image/jpeg")
        .map_err(js_rendering_error)?;
    let encoded = data_url
        .strip_prefix("data:image/jpeg;base64,")
        .ok_or_else(|| SubmissionError::ImageDecode {
            message: "unexpected data URL prefix".to_string(),
        })?;
    let data = BASE64
        .decode(encoded)
        .map_err(|e| SubmissionError::ImageDecode {
            message: e.to_string(),
        })?;

    Ok(ReportImage {
        data,
        width_px,
        height_px,
    })
}

fn draw_report(ctx: &CanvasRenderingContext2d, record: &ObservationRecord) -> SubmissionResult<()> {
    let width = PAGE_WIDTH_PX as f64;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, PAGE_HEIGHT_PX as f64);

    ctx.set_fill_style_str("#198754");
    ctx.set_font("bold 28px sans-serif");
    ctx.set_text_align("center");
    fill_text(ctx, "Classroom Observation", width / 2.0, 72.0)?;
    ctx.set_text_align("left");

    let mut y = 130.0;

    y = draw_section(ctx, "Teacher Information", y)?;
    y = draw_field(ctx, "Teacher's Name", &record.teacher_name, y)?;
    y = draw_field(ctx, "Teacher's Email", &record.teacher_email, y)?;
    y += SECTION_GAP;

    y = draw_section(ctx, "Class Details", y)?;
    y = draw_field(ctx, "Grade Level", &record.grade_level, y)?;
    y = draw_field(ctx, "Subject", &record.subject, y)?;
    y = draw_field(ctx, "Lesson Topic", &record.lesson_topic, y)?;
    y = draw_field(ctx, "Date", &record.observation_date, y)?;
    y = draw_field(ctx, "Time In", &record.time_in, y)?;
    y = draw_field(ctx, "Time Out", &record.time_out, y)?;
    y += SECTION_GAP;

    y = draw_section(ctx, "Observation Notes", y)?;
    ctx.set_font("15px sans-serif");
    ctx.set_fill_style_str("#212529");
    for line in wrap_text(ctx, &record.observation_notes, width - 2.0 * MARGIN)? {
        fill_text(ctx, &line, MARGIN, y)?;
        y += LINE_HEIGHT;
    }

    Ok(())
}

fn draw_section(
    ctx: &CanvasRenderingContext2d,
    title: &str,
    y: f64,
) -> SubmissionResult<f64> {
    ctx.set_fill_style_str("#198754");
    ctx.set_font("bold 18px sans-serif");
    fill_text(ctx, title, MARGIN, y)?;
    Ok(y + LINE_HEIGHT + 6.0)
}

fn draw_field(
    ctx: &CanvasRenderingContext2d,
    label: &str,
    value: &str,
    y: f64,
) -> SubmissionResult<f64> {
    ctx.set_fill_style_str("#6c757d");
    ctx.set_font("bold 15px sans-serif");
    fill_text(ctx, &format!("{label}:"), MARGIN, y)?;
    ctx.set_fill_style_str("#212529");
    ctx.set_font("15px sans-serif");
    fill_text(ctx, value, MARGIN + 160.0, y)?;
    Ok(y + LINE_HEIGHT)
}

/// Word-wraps `text` to `max_width`, preserving explicit line breaks.
fn wrap_text(
    ctx: &CanvasRenderingContext2d,
    text: &str,
    max_width: f64,
) -> SubmissionResult<Vec<String>> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            let measured = ctx
                .measure_text(&candidate)
                .map_err(js_rendering_error)?
                .width();
            if measured > max_width && !current.is_empty() {
                lines.push(current);
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }
    Ok(lines)
}

fn fill_text(ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64) -> SubmissionResult<()> {
    ctx.fill_text(text, x, y).map_err(js_rendering_error)
}

fn rendering_error(message: &str) -> SubmissionError {
    SubmissionError::Rendering {
        message: message.to_string(),
    }
}

fn js_rendering_error(value: JsValue) -> SubmissionError {
    SubmissionError::Rendering {
        message: format!("{value:?}"),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_render_produces_jpeg_at_capture_scale() {
        let record = ObservationRecord {
            teacher_name: "A. Lee".to_string(),
            teacher_email: "a.lee@example.edu".to_string(),
            observation_notes: "Engaged class.".to_string(),
            ..Default::default()
        };

        let image = render_report_image(&record).unwrap();
        assert_eq!(image.width_px, PAGE_WIDTH_PX * CAPTURE_SCALE);
        assert_eq!(image.height_px, PAGE_HEIGHT_PX * CAPTURE_SCALE);
        // JPEG SOI marker
        assert_eq!(&image.data[..2], &[0xFF, 0xD8]);
    }
}
