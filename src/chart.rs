//! Proyección de series almacenadas a coordenadas de pantalla
//!
//! Cada región calcula una sola vez su factor de escala (píxeles por
//! unidad entera almacenada) y en cada redibujado limpia la superficie
//! completa y emite una polilínea por canal; no hay dibujado incremental.

use crate::render::{palette, Renderer, Rgb};

/// Posición de la línea base vertical de una región
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// El cero del dominio queda en el centro vertical
    Center,
    /// El cero del dominio queda en el borde inferior
    Bottom,
}

/// Región de gráfica independiente con escala propia
#[derive(Debug, Clone)]
pub struct ChartRegion {
    width: u32,
    height: u32,
    background: Rgb,
    baseline: Baseline,
    /// Píxeles por unidad entera almacenada
    scale: f32,
}

impl ChartRegion {
    /// Región centrada: `half_range` unidades ocupan media altura
    pub fn centered(width: u32, height: u32, background: Rgb, half_range: f32) -> Self {
        Self {
            width,
            height,
            background,
            baseline: Baseline::Center,
            scale: (height as f32 / 2.0) / half_range,
        }
    }

    /// Región con base inferior: `range` unidades ocupan la altura completa
    pub fn bottom(width: u32, height: u32, background: Rgb, range: f32) -> Self {
        Self {
            width,
            height,
            background,
            baseline: Baseline::Bottom,
            scale: height as f32 / range,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coordenada horizontal del índice `index` entre `points` muestras
    ///
    /// Reparto uniforme exacto en los extremos: `x(0) = 0` y
    /// `x(points-1) = width-1`.
    pub fn x_at(&self, index: usize, points: usize) -> i32 {
        (index as f32 * (self.width - 1) as f32 / (points - 1) as f32).round() as i32
    }

    /// Proyección vertical de un valor entero almacenado
    pub fn y_at(&self, value: i16) -> i32 {
        let offset = (value as f32 * self.scale) as i32;
        match self.baseline {
            Baseline::Center => self.height as i32 / 2 - offset,
            Baseline::Bottom => self.height as i32 - offset,
        }
    }

    /// Redibuja la región completa
    ///
    /// Limpia el fondo, dibuja la línea de referencia en las regiones
    /// centradas y una polilínea coloreada por canal a partir de pares de
    /// muestras consecutivas.
    pub fn draw<R: Renderer>(
        &self,
        traces: &[(&[i16], Rgb)],
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        renderer.clear(self.background)?;

        if self.baseline == Baseline::Center {
            let mid = self.height as i32 / 2;
            renderer.draw_line((0, mid), (self.width as i32, mid), 1, palette::GRID, 0.5)?;
        }

        for (series, color) in traces {
            let points = series.len();
            for i in 1..points {
                renderer.draw_line(
                    (self.x_at(i - 1, points), self.y_at(series[i - 1])),
                    (self.x_at(i, points), self.y_at(series[i])),
                    2,
                    *color,
                    1.0,
                )?;
            }
        }

        Ok(())
    }
}
