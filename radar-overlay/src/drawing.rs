use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use radar_maps::{LoadedOverlays, MapDefinition, WorldPos};
use tracing::debug;

const COLOR_MARKER: Rgba<u8> = Rgba([254, 77, 42, 255]);
const COLOR_MARKER_OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
const COLOR_BLANK: Rgba<u8> = Rgba([24, 24, 24, 255]);

/// Marker radius in pixels.
pub const MARKER_RADIUS: i32 = 5;

/// Radar bitmap with world positions plotted on top.
pub struct RadarCanvas<'a> {
    def: &'a MapDefinition,
    image: RgbaImage,
}

impl<'a> RadarCanvas<'a> {
    /// Start from the map's radar, optionally with the buy zones composited over it.
    pub fn new(def: &'a MapDefinition, overlays: LoadedOverlays, show_buyzones: bool) -> Self {
        let LoadedOverlays {
            radar: mut image,
            buyzones,
        } = overlays;
        if show_buyzones {
            image::imageops::overlay(&mut image, &buyzones, 0, 0);
        }
        RadarCanvas { def, image }
    }

    /// Plain square background, for when the radar bitmaps are not available.
    pub fn blank(def: &'a MapDefinition, size: u32) -> Self {
        RadarCanvas {
            def,
            image: RgbaImage::from_pixel(size, size, COLOR_BLANK),
        }
    }

    /// Draw a marker at `pos`. Returns false when the position falls outside the image.
    pub fn plot(&mut self, pos: WorldPos) -> bool {
        let w = self.image.width() as i32;
        let h = self.image.height() as i32;
        // Radar row 0 is the bottom of the bitmap.
        let (x, row) = self.def.world_to_radar(pos).pixel();
        let y = h - 1 - row;
        if x < 0 || x >= w || y < 0 || y >= h {
            debug!("{pos:?} projects to ({x}, {y}), outside {w}x{h}");
            return false;
        }
        draw_filled_circle_mut(&mut self.image, (x, y), MARKER_RADIUS + 1, COLOR_MARKER_OUTLINE);
        draw_filled_circle_mut(&mut self.image, (x, y), MARKER_RADIUS, COLOR_MARKER);
        true
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
