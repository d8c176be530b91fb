//! Dominant-color extraction from uploaded images.
//!
//! The image is decoded, center-cropped and clustered with k-means over
//! RGB space. Cluster centers are returned as `#rrggbb` strings, largest
//! cluster first. Seeding is deterministic so the same image always yields
//! the same palette.

use std::collections::HashMap;

use image::{imageops, RgbImage};

use crate::color::Rgb;
use crate::error::CoreError;

/// Number of colors extracted per image.
pub const DEFAULT_CLUSTERS: usize = 5;

/// Side length of the center crop in pixels.
pub const CROP_SIZE: u32 = 200;

/// Upper bound on k-means refinement rounds.
const MAX_ITERATIONS: usize = 20;

/// File extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Check whether a filename has an accepted image extension (case-insensitive).
pub fn is_allowed_filename(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Decode `bytes` and return up to `k` dominant colors.
///
/// Returns fewer than `k` colors when the cropped region has fewer distinct
/// pixels than that.
pub fn extract_palette(bytes: &[u8], k: usize) -> Result<Vec<String>, CoreError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| CoreError::Validation(format!("Failed to read image: {e}")))?;

    let cropped = crop_center(&decoded.to_rgb8(), CROP_SIZE, CROP_SIZE);
    let points = weighted_pixels(&cropped);

    Ok(kmeans(&points, k).into_iter().map(Rgb::to_hex).collect())
}

/// Crop the central `width` x `height` region, clamped to the image bounds.
pub fn crop_center(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (w, h) = image.dimensions();
    let x = (w / 2).saturating_sub(width / 2);
    let y = (h / 2).saturating_sub(height / 2);
    imageops::crop_imm(image, x, y, width.min(w - x), height.min(h - y)).to_image()
}

/// A distinct color and the number of pixels that have it.
#[derive(Debug, Clone, Copy)]
struct WeightedPoint {
    rgb: [f64; 3],
    weight: usize,
}

/// Collapse pixels into distinct colors, in order of first appearance.
fn weighted_pixels(image: &RgbImage) -> Vec<WeightedPoint> {
    let mut index: HashMap<[u8; 3], usize> = HashMap::new();
    let mut points: Vec<WeightedPoint> = Vec::new();

    for pixel in image.pixels() {
        let key = pixel.0;
        match index.get(&key) {
            Some(&i) => points[i].weight += 1,
            None => {
                index.insert(key, points.len());
                points.push(WeightedPoint {
                    rgb: key.map(f64::from),
                    weight: 1,
                });
            }
        }
    }

    points
}

fn distance_sq(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest(centers: &[[f64; 3]], point: &[f64; 3]) -> usize {
    centers
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| distance_sq(a, point).total_cmp(&distance_sq(b, point)))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Weighted k-means. Centers are seeded from evenly spaced distinct colors.
fn kmeans(points: &[WeightedPoint], k: usize) -> Vec<Rgb> {
    if points.is_empty() || k == 0 {
        return Vec::new();
    }

    let k = k.min(points.len());
    let mut centers: Vec<[f64; 3]> = (0..k).map(|i| points[i * points.len() / k].rgb).collect();
    let mut assignment: Vec<usize> = vec![usize::MAX; points.len()];

    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (slot, point) in assignment.iter_mut().zip(points) {
            let cluster = nearest(&centers, &point.rgb);
            if *slot != cluster {
                *slot = cluster;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![[0.0_f64; 3]; k];
        let mut weights = vec![0usize; k];
        for (&cluster, point) in assignment.iter().zip(points) {
            for (sum, channel) in sums[cluster].iter_mut().zip(point.rgb) {
                *sum += channel * point.weight as f64;
            }
            weights[cluster] += point.weight;
        }

        // Empty clusters keep their previous center.
        for ((center, sum), &weight) in centers.iter_mut().zip(&sums).zip(&weights) {
            if weight > 0 {
                *center = (*sum).map(|s| s / weight as f64);
            }
        }
    }

    let mut sizes = vec![0usize; k];
    for (&cluster, point) in assignment.iter().zip(points) {
        sizes[cluster] += point.weight;
    }

    let mut clusters: Vec<(usize, Rgb)> = centers
        .iter()
        .zip(sizes)
        .filter(|(_, size)| *size > 0)
        .map(|(c, size)| {
            let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
            (size, Rgb::new(channel(c[0]), channel(c[1]), channel(c[2])))
        })
        .collect();

    clusters.sort_by(|a, b| b.0.cmp(&a.0));
    clusters.into_iter().map(|(_, rgb)| rgb).collect()
}
