use crate::{
    composition::constants::ShadowConstants,
    foundation::error::{ShotframeError, ShotframeResult},
};

/// Soft black drop shadow of a premultiplied RGBA8 layer.
///
/// Only the alpha of `silhouette` matters. The alpha plane is box-downsampled by
/// `shadow.downsample`, blurred with a gaussian of sigma `blur_px / 2` (in canvas pixels), then
/// sampled back up bilinearly and shifted down by `offset_y_px`. The result is a premultiplied
/// layer of the same size; compositing it with `shadow.opacity` gives the final shadow.
pub fn drop_shadow(
    silhouette: &[u8],
    width: u32,
    height: u32,
    shadow: &ShadowConstants,
) -> ShotframeResult<Vec<u8>> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| ShotframeError::surface("shadow buffer size overflow"))?;
    if silhouette.len() != len * 4 {
        return Err(ShotframeError::surface(
            "drop_shadow expects silhouette matching width*height*4",
        ));
    }
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    let d = shadow.downsample.max(1);
    let (sw, sh) = (width.div_ceil(d), height.div_ceil(d));
    let small = downsample_alpha(silhouette, width, height, d, sw, sh);

    let sigma = (shadow.blur_px / 2.0 / f64::from(d)) as f32;
    let blurred = if sigma > 0.0 {
        let radius = (3.0 * sigma).ceil() as u32;
        blur_alpha(&small, sw, sh, radius, sigma)?
    } else {
        small
    };

    let mut out = vec![0u8; len * 4];
    let inv_d = 1.0 / f64::from(d);
    for y in 0..height {
        let fy = (f64::from(y) - shadow.offset_y_px + 0.5) * inv_d - 0.5;
        for x in 0..width {
            let fx = (f64::from(x) + 0.5) * inv_d - 0.5;
            let a = sample_bilinear(&blurred, sw, sh, fx, fy);
            out[(y as usize * width as usize + x as usize) * 4 + 3] = a;
        }
    }
    Ok(out)
}

fn downsample_alpha(src: &[u8], width: u32, height: u32, d: u32, sw: u32, sh: u32) -> Vec<u8> {
    let mut out = vec![0u8; sw as usize * sh as usize];
    for by in 0..sh {
        for bx in 0..sw {
            let (x0, y0) = (bx * d, by * d);
            let (x1, y1) = ((x0 + d).min(width), (y0 + d).min(height));
            let mut sum = 0u32;
            for y in y0..y1 {
                for x in x0..x1 {
                    sum += u32::from(src[(y as usize * width as usize + x as usize) * 4 + 3]);
                }
            }
            let n = (x1 - x0) * (y1 - y0);
            out[by as usize * sw as usize + bx as usize] = ((sum + n / 2) / n) as u8;
        }
    }
    out
}

fn sample_bilinear(plane: &[u8], w: u32, h: u32, fx: f64, fy: f64) -> u8 {
    let (x0, y0) = (fx.floor(), fy.floor());
    let (tx, ty) = (fx - x0, fy - y0);
    let (x0, y0) = (x0 as i64, y0 as i64);
    // Outside the plane is fully transparent.
    let at = |x: i64, y: i64| -> f64 {
        if x < 0 || y < 0 || x >= i64::from(w) || y >= i64::from(h) {
            return 0.0;
        }
        f64::from(plane[y as usize * w as usize + x as usize])
    };
    let top = at(x0, y0) * (1.0 - tx) + at(x0 + 1, y0) * tx;
    let bottom = at(x0, y0 + 1) * (1.0 - tx) + at(x0 + 1, y0 + 1) * tx;
    (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8
}

/// Separable gaussian blur of a single 8-bit plane with clamped edges.
pub fn blur_alpha(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> ShotframeResult<Vec<u8>> {
    if src.len() != width as usize * height as usize {
        return Err(ShotframeError::surface(
            "blur_alpha expects src matching width*height",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; src.len()];
    let mut out = vec![0u8; src.len()];
    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ShotframeResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ShotframeError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / denom).exp())
        .collect();
    let sum: f64 = weights_f.iter().sum();

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }
    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        let row = (y * w) as usize;
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                acc += u64::from(kw) * u64::from(src[row + sx as usize]);
            }
            dst[row + x as usize] = q16_to_u8(acc);
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let (w, h) = (width as i32, height as i32);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                acc += u64::from(kw) * u64::from(src[(sy * w + x) as usize]);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/shadow.rs"]
mod tests;
