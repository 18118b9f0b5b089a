use crate::error::Result;
use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};
use half::f16;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a square single-mip texture with 32-bit float channels.
pub fn write_f32_texture(
    path: &Path,
    size: usize,
    data: &[f32],
    format: DxgiFormat,
) -> Result<()> {
    let mut bytes = Vec::with_capacity(data.len() * 4);
    for &float_val in data {
        bytes.extend_from_slice(&float_val.to_le_bytes());
    }
    write_texture(path, size, bytes, format)
}

/// Write a square RGBA16F texture, converting each channel to half precision.
pub fn write_f16_texture(path: &Path, size: usize, data: &[f32]) -> Result<()> {
    let mut bytes = Vec::with_capacity(data.len() * 2);
    for &float_val in data {
        let bits = f16::from_f32(float_val).to_bits();
        bytes.extend_from_slice(&bits.to_le_bytes());
    }
    write_texture(path, size, bytes, DxgiFormat::R16G16B16A16_Float)
}

fn write_texture(path: &Path, size: usize, bytes: Vec<u8>, format: DxgiFormat) -> Result<()> {
    let params = NewDxgiParams {
        height: size as u32,
        width: size as u32,
        depth: None,
        format,
        mipmap_levels: Some(1),
        array_layers: Some(1),
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Unknown,
    };

    let mut dds = Dds::new_dxgi(params)?;
    dds.data = bytes;
    let mut writer = BufWriter::new(File::create(path)?);
    dds.write(&mut writer)?;
    writer.flush()?;
    Ok(())
}
