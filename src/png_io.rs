use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::warn;

use crate::error::RasterError;
use crate::image2d::Image2D;
use crate::pixel::{Gray8, RGBA8};

pub fn decode_rgba8(bytes: &[u8]) -> Result<Image2D<RGBA8>, RasterError> {
    let decoder = png::Decoder::new(bytes);
    let (info, mut reader) = decoder
        .read_info()
        .map_err(|e| RasterError::DecodeFailure(e.to_string()))?;

    if info.color_type != png::ColorType::RGBA || info.bit_depth != png::BitDepth::Eight {
        return Err(RasterError::DecodeFailure(format!(
            "unsupported PNG format: {:?}/{:?}, expected RGBA/8-bit",
            info.color_type, info.bit_depth
        )));
    }

    let mut buf = vec![0u8; info.buffer_size()];
    reader
        .next_frame(&mut buf)
        .map_err(|e| RasterError::DecodeFailure(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let mut img = Image2D::<RGBA8>::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let i = 4 * (x + y * width) as usize;
            img.set(x, y, RGBA8::new(buf[i], buf[i + 1], buf[i + 2], buf[i + 3]));
        }
    }
    Ok(img)
}

pub fn decode_rgba8_file(path: impl AsRef<Path>) -> Result<Image2D<RGBA8>, RasterError> {
    let bytes = std::fs::read(path).map_err(|e| RasterError::DecodeFailure(e.to_string()))?;
    decode_rgba8(&bytes)
}

pub fn encode_rgba8(path: impl AsRef<Path>, img: &Image2D<RGBA8>) -> bool {
    let file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            warn!("failed to create PNG output file: {}", e);
            return false;
        }
    };
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, img.width(), img.height());
    encoder.set_color(png::ColorType::RGBA);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = match encoder.write_header() {
        Ok(w) => w,
        Err(e) => {
            warn!("failed to write PNG header: {}", e);
            return false;
        }
    };

    let mut buf = Vec::with_capacity((img.width() * img.height() * 4) as usize);
    for y in 0..img.height() {
        for x in 0..img.width() {
            let p = img.get(x, y);
            buf.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
    }

    match writer.write_image_data(&buf) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to write PNG image data: {}", e);
            false
        }
    }
}

pub fn encode_gray8(path: impl AsRef<Path>, img: &Image2D<Gray8>) -> bool {
    let file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            warn!("failed to create PNG output file: {}", e);
            return false;
        }
    };
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, img.width(), img.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = match encoder.write_header() {
        Ok(w) => w,
        Err(e) => {
            warn!("failed to write PNG header: {}", e);
            return false;
        }
    };

    let mut buf = Vec::with_capacity((img.width() * img.height()) as usize);
    for y in 0..img.height() {
        for x in 0..img.width() {
            buf.push(img.get(x, y).0);
        }
    }

    match writer.write_image_data(&buf) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to write PNG image data: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_non_rgba_input() {
        let err = decode_rgba8(b"not a png").unwrap_err();
        assert!(matches!(err, RasterError::DecodeFailure(_)));
    }

    #[test]
    fn encode_then_decode_round_trips_pixel_values() {
        let dir = std::env::temp_dir();
        let path = dir.join("rusterizer_png_io_test.png");

        let mut img = Image2D::<RGBA8>::new(2, 2);
        img.set(0, 0, RGBA8::new(255, 0, 0, 255));
        img.set(1, 0, RGBA8::new(0, 255, 0, 255));
        img.set(0, 1, RGBA8::new(0, 0, 255, 255));
        img.set(1, 1, RGBA8::new(255, 255, 255, 255));

        assert!(encode_rgba8(&path, &img));
        let decoded = decode_rgba8_file(&path).expect("just-written PNG decodes");
        assert_eq!(decoded.get(0, 0), img.get(0, 0));
        assert_eq!(decoded.get(1, 1), img.get(1, 1));

        let _ = std::fs::remove_file(&path);
    }
}
