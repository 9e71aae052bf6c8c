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
mod pipeline;
mod support;

use anyhow::Result;
use clap::Parser;
use pipeline::{run, OverlayJob};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Composites a BMP picture onto a raw YUV420 frame
#[derive(Parser, Debug)]
#[command(name = "yuv-overlay")]
#[command(version)]
struct Cli {
    /// Raw 8-bit YUV420 planar frame, only the first frame is used
    #[arg(short, long)]
    frame: PathBuf,

    /// Uncompressed 24-bit BMP picture to overlay
    #[arg(short, long)]
    image: PathBuf,

    /// Output YUV420 file
    #[arg(short, long, default_value = "output.yuv")]
    output: PathBuf,

    /// Frame width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Column of the picture's left edge
    #[arg(short, default_value_t = 0)]
    x: u32,

    /// Row of the picture's top edge
    #[arg(short, default_value_t = 0)]
    y: u32,

    /// Row bands used for color conversion, defaults to available parallelism
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let job = OverlayJob {
        frame: cli.frame,
        image: cli.image,
        output: cli.output,
        width: cli.width,
        height: cli.height,
        pos_x: cli.x,
        pos_y: cli.y,
        workers: cli.workers,
    };
    run(&job)
}
