//! Constantes y configuración del panel de instrumentos

use crate::render::Rgb;

/// Dispositivo I2C donde cuelga el sensor
pub const I2C_DEV: &str = "/dev/i2c-2";
/// Dirección de 7 bits del MPU6050
pub const MPU_ADDR: u8 = 0x68;

/// Periodo del tick de muestreo en milisegundos
pub const SAMPLE_PERIOD_MS: u64 = 20;
/// Periodo del tick de gráficas en milisegundos
pub const CHART_PERIOD_MS: u64 = 50;

/// Muestras retenidas por canal
pub const MAX_POINTS: usize = 200;

/// Geometría de las regiones de gráfica
pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 413;
pub const TEMP_CANVAS_HEIGHT: u32 = 414;

// Escalado entero uniforme del almacenamiento
/// g -> centésimas de g
pub const ACC_SCALE: f32 = 100.0;
/// grados -> décimas de grado
pub const ANG_SCALE: f32 = 10.0;
/// °C -> centésimas de grado
pub const TEMP_SCALE: f32 = 100.0;

// Dominio físico de cada región
/// La región de aceleración cubre ±2g
pub const ACCEL_RANGE_G: f32 = 2.0;
/// La región de orientación cubre ±90°
pub const ANGLE_RANGE_DEG: f32 = 90.0;
/// La región de temperatura cubre 0-60°C
pub const TEMP_RANGE_C: f32 = 60.0;

// Fondos de cada región
pub const ACCEL_BG: Rgb = Rgb::from_hex(0x101010);
pub const TILT_BG: Rgb = Rgb::from_hex(0x151515);
pub const TEMP_BG: Rgb = Rgb::from_hex(0x1A1A1A);

/// Configuración del pipeline completo
///
/// Los valores por defecto reproducen el panel de demostración. Con
/// `sample_period_ms == chart_period_ms` el pipeline degenera en el modo
/// acoplado de una sola cadencia.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Muestras por canal
    pub points: usize,
    /// Ancho de las tres regiones en píxeles
    pub width: u32,
    /// Alto de las regiones de aceleración y orientación
    pub height: u32,
    /// Alto de la región de temperatura
    pub temp_height: u32,
    /// Cadencia de muestreo
    pub sample_period_ms: u64,
    /// Cadencia de redibujado
    pub chart_period_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            points: MAX_POINTS,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            temp_height: TEMP_CANVAS_HEIGHT,
            sample_period_ms: SAMPLE_PERIOD_MS,
            chart_period_ms: CHART_PERIOD_MS,
        }
    }
}
