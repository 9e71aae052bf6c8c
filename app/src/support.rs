/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use image::ImageFormat;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use yuv_overlay::{yuv420_frame_size, BufferStoreMut, RgbImage, YuvError, YuvPlanarFrameMut};

/// Size of `BITMAPFILEHEADER` plus `BITMAPINFOHEADER`
const BMP_HEADERS_SIZE: usize = 14 + 40;
const BI_RGB: u32 = 0;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write {}: {source}", path.display())]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unsupported BMP format in {}: {reason}", path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },
    #[error("{} is too short, expected {expected} bytes but only {received} are available", path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        received: usize,
    },
    #[error(transparent)]
    Core(#[from] YuvError),
}

fn check_bmp_header(bytes: &[u8]) -> Result<(), String> {
    if bytes.len() < 2 || &bytes[0..2] != b"BM" {
        return Err("missing BM signature".to_string());
    }
    if bytes.len() < BMP_HEADERS_SIZE {
        return Err(format!(
            "header is truncated, {} bytes available",
            bytes.len()
        ));
    }
    let info_size = u32::from_le_bytes([bytes[14], bytes[15], bytes[16], bytes[17]]);
    if info_size < 40 {
        return Err(format!("info header of {info_size} bytes is not supported"));
    }
    let bit_count = u16::from_le_bytes([bytes[28], bytes[29]]);
    if bit_count != 24 {
        return Err(format!("{bit_count} bits per pixel, only 24 is supported"));
    }
    let compression = u32::from_le_bytes([bytes[30], bytes[31], bytes[32], bytes[33]]);
    if compression != BI_RGB {
        return Err(format!("compression {compression} is not supported"));
    }
    Ok(())
}

/// Reads uncompressed 24-bit BMP, rows are returned top-down
pub fn read_bmp<P: AsRef<Path>>(path: P) -> Result<RgbImage, AppError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AppError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    check_bmp_header(&bytes).map_err(|reason| AppError::UnsupportedFormat {
        path: path.to_path_buf(),
        reason,
    })?;
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Bmp).map_err(|e| {
        AppError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(RgbImage::from_rgb_bytes(rgb.as_raw(), width, height)?)
}

/// Reads first 8-bit YUV420 frame, trailing frames are ignored
pub fn read_yuv420<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
) -> Result<YuvPlanarFrameMut<'static>, AppError> {
    let path = path.as_ref();
    let frame_size = yuv420_frame_size(width, height)?;
    let unreadable = |source: std::io::Error| AppError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let available = file.metadata().map_err(unreadable)?.len();
    if available < frame_size as u64 {
        return Err(AppError::ShortRead {
            path: path.to_path_buf(),
            expected: frame_size,
            received: available as usize,
        });
    }
    let mut data = Vec::new();
    file.take(frame_size as u64)
        .read_to_end(&mut data)
        .map_err(unreadable)?;
    if data.len() < frame_size {
        return Err(AppError::ShortRead {
            path: path.to_path_buf(),
            expected: frame_size,
            received: data.len(),
        });
    }

    let frame = YuvPlanarFrameMut {
        data: BufferStoreMut::Owned(data),
        width,
        height,
    };
    frame.check_constraints()?;
    Ok(frame)
}

pub fn write_yuv420<P: AsRef<Path>>(path: P, frame: &YuvPlanarFrameMut) -> Result<(), AppError> {
    let path = path.as_ref();
    frame.check_constraints()?;
    let unwritable = |source: std::io::Error| AppError::FileUnwritable {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(unwritable)?;
    file.write_all(frame.as_bytes()).map_err(unwritable)?;
    file.flush().map_err(unwritable)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use yuv_overlay::RgbPixel;

    pub(crate) fn save_bmp(path: &Path, width: u32, height: u32, pixel: impl Fn(u32, u32) -> [u8; 3]) {
        let image = image::RgbImage::from_fn(width, height, |x, y| image::Rgb(pixel(x, y)));
        image.save_with_format(path, ImageFormat::Bmp).unwrap();
    }

    /// Hand-assembled bottom-up 24-bit BMP with padded rows
    fn raw_bmp(width: u32, height: u32, rows_bottom_up: &[Vec<[u8; 3]>]) -> Vec<u8> {
        let row_padded = (width as usize * 3 + 3) & !3;
        let pixel_bytes = row_padded * height as usize;
        let mut bmp = Vec::new();
        bmp.extend_from_slice(b"BM");
        bmp.extend_from_slice(&((BMP_HEADERS_SIZE + pixel_bytes) as u32).to_le_bytes());
        bmp.extend_from_slice(&[0u8; 4]);
        bmp.extend_from_slice(&(BMP_HEADERS_SIZE as u32).to_le_bytes());
        bmp.extend_from_slice(&40u32.to_le_bytes());
        bmp.extend_from_slice(&(width as i32).to_le_bytes());
        bmp.extend_from_slice(&(height as i32).to_le_bytes());
        bmp.extend_from_slice(&1u16.to_le_bytes());
        bmp.extend_from_slice(&24u16.to_le_bytes());
        bmp.extend_from_slice(&BI_RGB.to_le_bytes());
        bmp.extend_from_slice(&(pixel_bytes as u32).to_le_bytes());
        bmp.extend_from_slice(&[0u8; 16]);
        for row in rows_bottom_up {
            let start = bmp.len();
            for &[r, g, b] in row {
                bmp.extend_from_slice(&[b, g, r]);
            }
            bmp.resize(start + row_padded, 0);
        }
        bmp
    }

    #[test]
    fn test_bmp_rows_are_top_down() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.bmp");
        let rows_bottom_up = vec![
            vec![[0, 0, 255], [0, 0, 255], [0, 0, 255]],
            vec![[255, 0, 0], [0, 255, 0], [10, 20, 30]],
        ];
        std::fs::write(&path, raw_bmp(3, 2, &rows_bottom_up)).unwrap();

        let image = read_bmp(&path).unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.pixels[0], RgbPixel::new(255, 0, 0));
        assert_eq!(image.pixels[1], RgbPixel::new(0, 255, 0));
        assert_eq!(image.pixels[2], RgbPixel::new(10, 20, 30));
        assert!(image.pixels[3..].iter().all(|&px| px == RgbPixel::new(0, 0, 255)));
    }

    #[test]
    fn test_bmp_written_by_image_crate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.bmp");
        save_bmp(&path, 5, 4, |x, y| [x as u8 * 40, y as u8 * 60, 7]);
        let image = read_bmp(&path).unwrap();
        assert_eq!(image.pixels.len(), 20);
        assert_eq!(image.pixels[3 * 5 + 2], RgbPixel::new(80, 180, 7));
    }

    #[test]
    fn test_bmp_rejects_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not.bmp");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
        assert!(matches!(
            read_bmp(&path),
            Err(AppError::UnsupportedFormat { .. })
        ));

        let mut bmp = raw_bmp(1, 1, &[vec![[1, 2, 3]]]);
        bmp[28] = 8;
        std::fs::write(&path, &bmp).unwrap();
        assert!(matches!(
            read_bmp(&path),
            Err(AppError::UnsupportedFormat { .. })
        ));

        assert!(matches!(
            read_bmp(dir.path().join("missing.bmp")),
            Err(AppError::FileUnreadable { .. })
        ));
    }

    #[test]
    fn test_yuv_short_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.yuv");
        std::fs::write(&path, vec![0u8; 23]).unwrap();
        match read_yuv420(&path, 4, 4) {
            Err(AppError::ShortRead {
                expected, received, ..
            }) => assert_eq!((expected, received), (24, 23)),
            other => panic!("Expected short read, got {other:?}"),
        }
    }

    #[test]
    fn test_yuv_short_read_with_huge_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.yuv");
        std::fs::write(&path, vec![0u8; 24]).unwrap();
        match read_yuv420(&path, 2_000_000, 2_000_000) {
            Err(AppError::ShortRead {
                expected, received, ..
            }) => assert_eq!((expected, received), (6_000_000_000_000, 24)),
            other => panic!("Expected short read, got {other:?}"),
        }
    }

    #[test]
    fn test_yuv_reads_first_frame_and_writes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("two_frames.yuv");
        let output = dir.path().join("out.yuv");
        let bytes = (0..48u8).collect::<Vec<_>>();
        std::fs::write(&input, &bytes).unwrap();

        let frame = read_yuv420(&input, 4, 4).unwrap();
        assert_eq!(frame.as_bytes(), &bytes[..24]);

        write_yuv420(&output, &frame).unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), &bytes[..24]);
    }

    #[test]
    fn test_yuv_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let frame = YuvPlanarFrameMut::alloc(2, 2).unwrap();
        let target = dir.path().join("missing").join("out.yuv");
        assert!(matches!(
            write_yuv420(&target, &frame),
            Err(AppError::FileUnwritable { .. })
        ));
    }
}
