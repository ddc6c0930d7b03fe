use pixelstyle::{ColorMode, RasterBuffer};

/// Deterministic RGB test image with a different value in every channel.
pub fn rgb_gradient(width: usize, height: usize) -> RasterBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / (width - 1).max(1)) as u8);
            data.push((y * 255 / (height - 1).max(1)) as u8);
            data.push(((x * 37 + y * 91) % 256) as u8);
        }
    }
    RasterBuffer::from_raw(width, height, ColorMode::Rgb, data).expect("valid gradient")
}

/// RGB image with hard-edged squares of alternating colors.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RasterBuffer {
    assert!(cell > 0, "cell size must be positive");

    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let px = if (x / cell + y / cell) % 2 == 0 {
                [230u8, 40, 40]
            } else {
                [20u8, 60, 210]
            };
            data.extend_from_slice(&px);
        }
    }
    RasterBuffer::from_raw(width, height, ColorMode::Rgb, data).expect("valid checkerboard")
}
