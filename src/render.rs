//! Capacidad de dibujo consumida por el proyector de gráficas
//!
//! La creación de ventanas, el backend gráfico y la rasterización son del
//! colaborador externo; aquí sólo se define la superficie mínima que el
//! proyector necesita: limpiar la región y dibujar segmentos coloreados.

/// Color RGB de 8 bits por canal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

/// Paleta fija de los canales del panel
pub mod palette {
    use super::Rgb;

    pub const RED: Rgb = Rgb::from_hex(0xF44336);
    pub const GREEN: Rgb = Rgb::from_hex(0x4CAF50);
    pub const BLUE: Rgb = Rgb::from_hex(0x2196F3);
    pub const ORANGE: Rgb = Rgb::from_hex(0xFF9800);
    pub const PURPLE: Rgb = Rgb::from_hex(0x9C27B0);
    pub const TEAL: Rgb = Rgb::from_hex(0x009688);

    /// Línea de referencia tenue de los gráficos centrados
    pub const GRID: Rgb = Rgb::from_hex(0x404040);
}

/// Superficie de píxeles de tamaño fijo con órdenes de línea
pub trait Renderer {
    type Error;

    /// Limpia la superficie completa con un color
    fn clear(&mut self, color: Rgb) -> Result<(), Self::Error>;

    /// Dibuja un segmento entre dos puntos en coordenadas de píxel
    fn draw_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgb,
        opacity: f32,
    ) -> Result<(), Self::Error>;
}
