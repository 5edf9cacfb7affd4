//! Eingebauter Kernel: facettierte Kugeln/Zylinder, STEP-Austausch über truck.

use super::facets::FacetBuilder;
use super::step;
use super::{
    CadFormat, CadReader, CadWriter, GeometryKernel, KernelError, ReadOutcome, Shape,
    TransferStatus,
};
use glam::DVec3;
use std::f64::consts::{PI, TAU};
use std::path::Path;

/// Auflösung der facettierten Primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tessellation {
    /// Segmente entlang des Umfangs (min. 3)
    pub segments: u32,
    /// Breitenringe der Kugel (min. 2)
    pub rings: u32,
}

impl Default for Tessellation {
    fn default() -> Self {
        Self {
            segments: 16,
            rings: 8,
        }
    }
}

impl Tessellation {
    fn clamped(self) -> Self {
        Self {
            segments: self.segments.max(3),
            rings: self.rings.max(2),
        }
    }
}

/// Facettierender Geometrie-Kernel
#[derive(Debug, Clone, Default)]
pub struct MeshKernel {
    tessellation: Tessellation,
}

impl MeshKernel {
    /// Erstellt einen Kernel mit der gewünschten Auflösung.
    pub fn new(tessellation: Tessellation) -> Self {
        Self {
            tessellation: tessellation.clamped(),
        }
    }

    /// Aktuelle Auflösung.
    pub fn tessellation(&self) -> Tessellation {
        self.tessellation
    }
}

fn check_radius(radius: f64) -> Result<(), KernelError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(KernelError::InvalidRadius(radius))
    }
}

fn check_position(p: DVec3) -> Result<(), KernelError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(KernelError::InvalidPosition(p))
    }
}

/// Zwei zu `axis` orthogonale Einheitsvektoren.
fn orthonormal_basis(axis: DVec3) -> (DVec3, DVec3) {
    let helper = if axis.x.abs() < 0.9 {
        DVec3::X
    } else {
        DVec3::Y
    };
    let u = axis.cross(helper).normalize();
    let v = axis.cross(u);
    (u, v)
}

impl GeometryKernel for MeshKernel {
    fn make_sphere(&self, center: DVec3, radius: f64) -> Result<Shape, KernelError> {
        check_radius(radius)?;
        check_position(center)?;

        let n = self.tessellation.segments as usize;
        let m = self.tessellation.rings as usize;
        let mut builder = FacetBuilder::new();

        // 0 = Nordpol, danach m-1 Ringe à n Punkte, zuletzt Südpol
        let north = 0;
        let south = 1 + (m - 1) * n;
        let ring = |k: usize, j: usize| 1 + (k - 1) * n + (j % n);

        builder.add_point(north, center + DVec3::Z * radius);
        builder.add_point(south, center - DVec3::Z * radius);
        for k in 1..m {
            let theta = PI * k as f64 / m as f64;
            let (sin_t, cos_t) = theta.sin_cos();
            for j in 0..n {
                let phi = TAU * j as f64 / n as f64;
                let (sin_p, cos_p) = phi.sin_cos();
                let offset = DVec3::new(sin_t * cos_p, sin_t * sin_p, cos_t) * radius;
                builder.add_point(ring(k, j), center + offset);
            }
        }

        for j in 0..n {
            builder.add_face(&[north, ring(1, j), ring(1, j + 1)]);
            for k in 1..m - 1 {
                builder.add_face(&[ring(k, j), ring(k + 1, j), ring(k + 1, j + 1), ring(k, j + 1)]);
            }
            builder.add_face(&[ring(m - 1, j), south, ring(m - 1, j + 1)]);
        }

        Ok(builder.into_solid())
    }

    fn make_cylinder(
        &self,
        base: DVec3,
        axis: DVec3,
        radius: f64,
        height: f64,
    ) -> Result<Shape, KernelError> {
        check_radius(radius)?;
        check_position(base)?;
        let direction = axis.normalize_or_zero();
        if !(height.is_finite() && height > 0.0) || direction == DVec3::ZERO {
            return Err(KernelError::DegenerateAxis { height });
        }

        let n = self.tessellation.segments as usize;
        let (u, v) = orthonormal_basis(direction);
        let top_offset = direction * height;
        let mut builder = FacetBuilder::new();

        // 0..n = Boden, n..2n = Deckel
        for j in 0..n {
            let phi = TAU * j as f64 / n as f64;
            let (sin_p, cos_p) = phi.sin_cos();
            let bottom = base + (u * cos_p + v * sin_p) * radius;
            builder.add_point(j, bottom);
            builder.add_point(n + j, bottom + top_offset);
        }

        for j in 0..n {
            let next = (j + 1) % n;
            builder.add_face(&[j, next, n + next, n + j]);
        }
        let bottom_cap: Vec<usize> = (0..n).rev().collect();
        let top_cap: Vec<usize> = (n..2 * n).collect();
        builder.add_face(&bottom_cap);
        builder.add_face(&top_cap);

        Ok(builder.into_solid())
    }
}

impl CadReader for MeshKernel {
    fn read(&self, path: &Path, format: CadFormat) -> ReadOutcome {
        match format {
            CadFormat::Step => step::read_file(path),
            CadFormat::Iges => ReadOutcome::failed(
                TransferStatus::NotSupported,
                "IGES-Import wird vom eingebauten Kernel nicht unterstützt",
            ),
        }
    }

    fn can_read(&self, format: CadFormat) -> bool {
        format == CadFormat::Step
    }
}

impl CadWriter for MeshKernel {
    fn write(&self, shape: &Shape, path: &Path, format: CadFormat) -> TransferStatus {
        match format {
            CadFormat::Step => step::write_file(shape, path),
            CadFormat::Iges => {
                log::warn!("IGES-Export wird vom eingebauten Kernel nicht unterstützt");
                TransferStatus::NotSupported
            }
        }
    }

    fn can_write(&self, format: CadFormat) -> bool {
        format == CadFormat::Step
    }
}
