//! Single-line text measurement backed by `cosmic-text`.
//!
//! One `FontSystem` is shared by the whole process. Shaping is the expensive
//! part of measuring, and segment titles are re-measured on every reload, so
//! widths are cached per (text, size, weight).

use ahash::AHashMap;
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use pinstrip_core::{Font, FontWeight, MeasureText};

const MAX_CACHED_WIDTHS: usize = 4096;

#[derive(Clone, PartialEq, Eq, Hash)]
struct WidthKey {
    text: String,
    size_bits: u32,
    weight: FontWeight,
}

struct Engine {
    fs: FontSystem,
    widths: AHashMap<WidthKey, f32>,
}

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| {
        let fs = FontSystem::new();
        log::debug!("font system ready: {} faces", fs.db().len());
        Mutex::new(Engine {
            fs,
            widths: AHashMap::new(),
        })
    })
}

fn attrs_for(font: &Font) -> Attrs<'static> {
    let weight = match font.weight {
        FontWeight::Regular => Weight::NORMAL,
        FontWeight::Bold => Weight::BOLD,
    };
    Attrs::new().family(Family::SansSerif).weight(weight)
}

// Shape a single line (no wrapping) and return its advance width.
fn shape_width(fs: &mut FontSystem, text: &str, font: &Font) -> f32 {
    let mut buf = Buffer::new(fs, Metrics::new(font.size, font.line_height()));
    {
        let mut b = buf.borrow_with(fs);
        b.set_size(None, None);
        b.set_text(text, &attrs_for(font), Shaping::Advanced, None);
        b.shape_until_scroll(true);
    }
    buf.layout_runs().map(|run| run.line_w).fold(0.0f32, f32::max)
}

/// Width of `text` at `font`, single line.
pub fn measure_line(text: &str, font: &Font) -> f32 {
    // cosmic-text rejects a zero line height
    let line_height = font.line_height();
    if text.is_empty() || font.size <= 0.0 || line_height.is_nan() || line_height <= 0.0 {
        return 0.0;
    }
    let key = WidthKey {
        text: text.to_owned(),
        size_bits: font.size.to_bits(),
        weight: font.weight,
    };

    let mut eng = engine().lock();
    if let Some(w) = eng.widths.get(&key) {
        return *w;
    }
    let w = shape_width(&mut eng.fs, text, font);
    if eng.widths.len() >= MAX_CACHED_WIDTHS {
        log::trace!("width cache full, clearing");
        eng.widths.clear();
    }
    eng.widths.insert(key, w);
    w
}

/// `MeasureText` over the shared cosmic-text font system.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosmicMeasurer;

impl MeasureText for CosmicMeasurer {
    fn line_width(&self, text: &str, font: &Font) -> f32 {
        measure_line(text, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(measure_line("", &Font::bold(14.0)), 0.0);
        assert_eq!(measure_line("abc", &Font::regular(0.0)), 0.0);
    }

    #[test]
    fn zero_line_height_measures_nothing() {
        let font = Font {
            line_height_scale: 0.0,
            ..Font::bold(14.0)
        };
        assert_eq!(measure_line("Bee", &font), 0.0);
        assert_eq!(CosmicMeasurer.line_width("Bee", &font), 0.0);
    }

    #[test]
    fn widths_are_cached_and_stable() {
        let font = Font::bold(14.0);
        let a = CosmicMeasurer.line_width("Pinstrip", &font);
        let b = CosmicMeasurer.line_width("Pinstrip", &font);
        assert_eq!(a, b);
        assert!(a >= 0.0);
    }

    #[test]
    fn longer_text_is_not_narrower() {
        let font = Font::regular(16.0);
        let short = measure_line("a", &font);
        let long = measure_line("aaaa", &font);
        assert!(long >= short);
    }
}
