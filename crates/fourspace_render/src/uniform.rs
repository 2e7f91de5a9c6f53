//! Versioned byte encoding of the per-frame view-projection transform
//!
//! The renderer receives the 5x5 transform as a fixed-layout record. Each
//! layout version pins the field order and size, so the host never packs
//! bytes by hand.

use std::fmt;

use fourspace_math::Affine5;

use crate::types::ViewProjUniform;

/// Byte layout of an encoded view-projection transform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniformLayout {
    /// Row-major 4x4 block, translation column, bottom row, scalar;
    /// 25 little-endian f32 values with no padding
    #[default]
    V1,
}

impl UniformLayout {
    /// Encoded size in bytes
    pub const fn size(self) -> usize {
        match self {
            UniformLayout::V1 => std::mem::size_of::<ViewProjUniform>(),
        }
    }
}

/// Error decoding a view-projection record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Buffer length does not match the layout
    WrongLength { layout: UniformLayout, expected: usize, actual: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongLength { layout, expected, actual } => write!(
                f,
                "{:?} view-projection record needs {} bytes, got {}",
                layout, expected, actual
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Encode a transform for upload
pub fn encode_view_projection(transform: &Affine5, layout: UniformLayout) -> Vec<u8> {
    match layout {
        UniformLayout::V1 => {
            let uniform = ViewProjUniform::from(*transform);
            let mut bytes = Vec::with_capacity(layout.size());
            for v in uniform_values(&uniform) {
                bytes.extend_from_slice(&v.to_le_bytes());
            }
            bytes
        }
    }
}

/// Decode a transform previously produced by [`encode_view_projection`]
pub fn decode_view_projection(bytes: &[u8], layout: UniformLayout) -> Result<Affine5, LayoutError> {
    if bytes.len() != layout.size() {
        return Err(LayoutError::WrongLength {
            layout,
            expected: layout.size(),
            actual: bytes.len(),
        });
    }

    match layout {
        UniformLayout::V1 => {
            let mut values = [0.0f32; 25];
            for (v, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
                *v = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            }

            let mut uniform = ViewProjUniform::default();
            for (i, row) in uniform.matrix.iter_mut().enumerate() {
                row.copy_from_slice(&values[i * 4..i * 4 + 4]);
            }
            uniform.column.copy_from_slice(&values[16..20]);
            uniform.row.copy_from_slice(&values[20..24]);
            uniform.scalar = values[24];
            Ok(Affine5::from(uniform))
        }
    }
}

fn uniform_values(u: &ViewProjUniform) -> impl Iterator<Item = f32> + '_ {
    u.matrix
        .iter()
        .flatten()
        .chain(u.column.iter())
        .chain(u.row.iter())
        .chain(std::iter::once(&u.scalar))
        .copied()
}
