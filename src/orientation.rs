//! Estimación de orientación (roll/pitch) a partir de la aceleración
//!
//! Estimación directa por muestra, sin estado ni filtrado: con el sensor
//! en movimiento el resultado es ruidoso por diseño. Cualquier filtrado
//! pertenece al llamador, no a estas funciones.

use crate::types::PhysicalSample;

/// Ángulo de alabeo en grados a partir de las componentes Y/Z
pub fn roll_degrees(ay: f32, az: f32) -> f32 {
    ay.atan2(az).to_degrees()
}

/// Ángulo de cabeceo en grados a partir de las tres componentes
pub fn pitch_degrees(ax: f32, ay: f32, az: f32) -> f32 {
    (-ax).atan2((ay * ay + az * az).sqrt()).to_degrees()
}

/// Par roll/pitch derivado de una muestra
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub roll_deg: f32,
    pub pitch_deg: f32,
}

impl Orientation {
    pub fn from_accel(sample: &PhysicalSample) -> Self {
        let [ax, ay, az] = sample.accel_g;
        Self {
            roll_deg: roll_degrees(ay, az),
            pitch_deg: pitch_degrees(ax, ay, az),
        }
    }
}
