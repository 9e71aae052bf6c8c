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
use crate::support::{read_bmp, read_yuv420, write_yuv420};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use yuv_overlay::{default_workers, overlay_yuv420, rgb_to_yuv_with_workers};

#[derive(Debug, Clone)]
pub struct OverlayJob {
    pub frame: PathBuf,
    pub image: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pos_x: u32,
    pub pos_y: u32,
    pub workers: Option<usize>,
}

/// Decodes both inputs, composites the image and writes the frame.
///
/// Output file is created only after compositing succeeded.
pub fn run(job: &OverlayJob) -> Result<()> {
    let rgb = read_bmp(&job.image).context("Decoding overlay image")?;
    info!(
        path = %job.image.display(),
        width = rgb.width,
        height = rgb.height,
        "Decoded overlay image"
    );

    let mut frame = read_yuv420(&job.frame, job.width, job.height).context("Reading YUV frame")?;
    info!(
        path = %job.frame.display(),
        width = frame.width,
        height = frame.height,
        "Loaded YUV420 frame"
    );

    let workers = job.workers.unwrap_or_else(default_workers);
    let bands = workers.clamp(1, rgb.height as usize);
    let start_time = Instant::now();
    let yuv = rgb_to_yuv_with_workers(&rgb, workers).context("Converting image to YUV")?;
    debug!(bands, elapsed = ?start_time.elapsed(), "Converted RGB to YUV");

    overlay_yuv420(&mut frame, &yuv, job.pos_x, job.pos_y).context("Compositing overlay")?;
    debug!(x = job.pos_x, y = job.pos_y, "Composited overlay");

    write_yuv420(&job.output, &frame).context("Writing output frame")?;
    info!(path = %job.output.display(), "Overlay completed successfully");
    Ok(())
}
