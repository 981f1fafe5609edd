use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary (P6) PPM image, creating missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(fs::File::create(filepath)?);

    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    writeln!(file, "P6")?;
    writeln!(file, "{width} {height}")?;
    writeln!(file, "255")?;
    file.write_all(buffer.buffer())?;
    file.flush()?;

    info!(
        path = %filepath.display(),
        width,
        height,
        bytes = buffer.buffer_size(),
        "wrote ppm"
    );

    Ok(())
}
