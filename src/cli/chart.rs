// src/cli/chart.rs
//
// PNG line chart of an SNR-versus-distance series

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb, RgbImage};
use log::info;
use std::path::Path;

use crate::analysis::SnrSample;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const ZERO_LINE: Rgb<u8> = Rgb([200, 60, 60]);
const TRACE: Rgb<u8> = Rgb([30, 90, 200]);

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Blank border around the plot area, pixels
    pub margin: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 400,
            margin: 40,
        }
    }
}

/// Plot-area mapping from (distance, dB) to pixel coordinates
struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn x(&self, distance: f64) -> f64 {
        let t = if self.x_max > self.x_min {
            (distance - self.x_min) / (self.x_max - self.x_min)
        } else {
            0.0
        };
        self.left + t * (self.right - self.left)
    }

    fn y(&self, snr_db: f64) -> f64 {
        let t = (snr_db - self.y_min) / (self.y_max - self.y_min);
        self.bottom - t * (self.bottom - self.top)
    }
}

/// Draw the series into an in-memory image
pub fn render_snr_chart(samples: &[SnrSample], config: &ChartConfig) -> Result<RgbImage> {
    if samples.len() < 2 {
        anyhow::bail!("Need at least two samples to draw a chart");
    }
    if config.width <= 2 * config.margin + 1 || config.height <= 2 * config.margin + 1 {
        anyhow::bail!(
            "Chart {}x{} is too small for a {} px margin",
            config.width,
            config.height,
            config.margin
        );
    }

    let x_min = samples.iter().map(|s| s.distance).fold(f64::INFINITY, f64::min);
    let x_max = samples.iter().map(|s| s.distance).fold(f64::NEG_INFINITY, f64::max);
    let mut y_min = samples.iter().map(|s| s.snr_db).fold(f64::INFINITY, f64::min);
    let mut y_max = samples.iter().map(|s| s.snr_db).fold(f64::NEG_INFINITY, f64::max);

    // Keep the 0 dB detection line in view
    y_min = y_min.min(0.0);
    y_max = y_max.max(0.0);
    if y_max - y_min < 1.0 {
        y_max += 0.5;
        y_min -= 0.5;
    }

    let margin = config.margin as f64;
    let frame = Frame {
        left: margin,
        right: (config.width - 1) as f64 - margin,
        top: margin,
        bottom: (config.height - 1) as f64 - margin,
        x_min,
        x_max,
        y_min,
        y_max,
    };

    let mut img: RgbImage = ImageBuffer::from_pixel(config.width, config.height, BACKGROUND);

    // Axes
    draw_line(&mut img, frame.left, frame.bottom, frame.right, frame.bottom, AXIS);
    draw_line(&mut img, frame.left, frame.top, frame.left, frame.bottom, AXIS);

    // Dashed 0 dB line
    let zero = frame.y(0.0);
    let mut x = frame.left;
    while x < frame.right {
        draw_line(&mut img, x, zero, (x + 6.0).min(frame.right), zero, ZERO_LINE);
        x += 12.0;
    }

    for pair in samples.windows(2) {
        draw_line(
            &mut img,
            frame.x(pair[0].distance),
            frame.y(pair[0].snr_db),
            frame.x(pair[1].distance),
            frame.y(pair[1].snr_db),
            TRACE,
        );
    }

    Ok(img)
}

/// Render the series and save it; the format follows the file extension
pub fn write_snr_chart(
    samples: &[SnrSample],
    config: &ChartConfig,
    output_path: &Path,
) -> Result<()> {
    let img = render_snr_chart(samples, config)?;
    img.save(output_path)
        .with_context(|| format!("Failed to write chart to {}", output_path.display()))?;
    info!("Chart saved to {}", output_path.display());
    Ok(())
}

fn draw_line(img: &mut RgbImage, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (x0 + t * (x1 - x0)).round();
        let y = (y0 + t * (y1 - y0)).round();
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
