//! Funciones de conversión para datos del sensor MPU6050
//!
//! Este módulo proporciona funciones para convertir datos raw del sensor
//! a unidades físicas apropiadas como aceleraciones en G, velocidad angular
//! en grados por segundo, y temperatura en grados Celsius.

use crate::types::AccelFullScale;
use crate::types::GyroFullScale;
use crate::types::{PhysicalSample, RawSample};

/// Convierte datos brutos de acelerómetro a G según la escala configurada
///
/// # Arguments
/// * `raw` - Valores brutos del acelerómetro [x, y, z]
/// * `scale` - Configuración de escala completa del acelerómetro
///
/// # Returns
/// Aceleración en G [x, y, z]
pub fn accel_raw_to_g(raw: [i16; 3], scale: AccelFullScale) -> [f32; 3] {
    // LSB/g según el datasheet del MPU6050: 16384 para ±2g
    let lsb_per_g = match scale {
        AccelFullScale::Fs2G => 16384.0,
        AccelFullScale::Fs4G => 8192.0,
        AccelFullScale::Fs8G => 4096.0,
        AccelFullScale::Fs16G => 2048.0,
    };

    [
        raw[0] as f32 / lsb_per_g,
        raw[1] as f32 / lsb_per_g,
        raw[2] as f32 / lsb_per_g,
    ]
}

/// Convierte datos brutos de giroscopio a grados/segundo según la escala configurada
///
/// # Arguments
/// * `raw` - Valores brutos del giroscopio [x, y, z]
/// * `scale` - Configuración de escala completa del giroscopio
///
/// # Returns
/// Velocidad angular en grados/segundo [x, y, z]
pub fn gyro_raw_to_dps(raw: [i16; 3], scale: GyroFullScale) -> [f32; 3] {
    // LSB/(°/s) según el datasheet del MPU6050: 131 para ±250 dps
    let lsb_per_dps = match scale {
        GyroFullScale::Fs250Dps => 131.0,
        GyroFullScale::Fs500Dps => 65.5,
        GyroFullScale::Fs1000Dps => 32.8,
        GyroFullScale::Fs2000Dps => 16.4,
    };

    [
        raw[0] as f32 / lsb_per_dps,
        raw[1] as f32 / lsb_per_dps,
        raw[2] as f32 / lsb_per_dps,
    ]
}

/// Convierte datos brutos de temperatura a grados Celsius
///
/// # Arguments
/// * `raw` - Valor bruto del sensor de temperatura
///
/// # Returns
/// Temperatura en grados Celsius
pub fn temp_raw_to_celsius(raw: i16) -> f32 {
    // La fórmula se toma del datasheet del MPU6050:
    // Temp °C = TEMP_OUT / 340 + 36.53
    raw as f32 / 340.0 + 36.53
}

/// Convierte una muestra completa sin procesar a unidades físicas
pub fn raw_to_physical(
    raw: &RawSample,
    accel_scale: AccelFullScale,
    gyro_scale: GyroFullScale,
) -> PhysicalSample {
    PhysicalSample {
        accel_g: accel_raw_to_g(raw.accel, accel_scale),
        gyro_dps: gyro_raw_to_dps(raw.gyro, gyro_scale),
        temp_c: temp_raw_to_celsius(raw.temp),
    }
}
