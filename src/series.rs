//! Series temporales rodantes de capacidad fija
//!
//! Historia de tamaño fijo expuesta como vista contigua ordenada: el
//! índice 0 es la muestra más antigua y el último índice la más reciente.
//! La inserción desplaza todo una posición descartando la más antigua,
//! O(n) con n pequeño; no hay anillo con envoltura.

use crate::config::{ACC_SCALE, ANG_SCALE, TEMP_SCALE};
use crate::orientation::Orientation;
use crate::types::PhysicalSample;

/// Serie de longitud fija con valores enteros escalados
pub struct RollingSeries {
    data: Box<[i16]>,
}

impl RollingSeries {
    /// Serie de longitud `len` inicializada a cero
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0i16; len].into_boxed_slice(),
        }
    }

    /// Desplaza descartando la muestra más antigua y añade `value` al final
    pub fn push(&mut self, value: i16) {
        self.data.copy_within(1.., 0);
        let last = self.data.len() - 1;
        self.data[last] = value;
    }

    /// Vista ordenada de la más antigua a la más reciente
    pub fn as_slice(&self) -> &[i16] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Las seis series del panel: aceleración x/y/z, roll, pitch y temperatura
pub struct ChannelBank {
    pub accel_x: RollingSeries,
    pub accel_y: RollingSeries,
    pub accel_z: RollingSeries,
    pub roll: RollingSeries,
    pub pitch: RollingSeries,
    pub temp: RollingSeries,
}

impl ChannelBank {
    /// Banco con `points` muestras por canal, todo a cero
    pub fn new(points: usize) -> Self {
        Self {
            accel_x: RollingSeries::new(points),
            accel_y: RollingSeries::new(points),
            accel_z: RollingSeries::new(points),
            roll: RollingSeries::new(points),
            pitch: RollingSeries::new(points),
            temp: RollingSeries::new(points),
        }
    }

    /// Absorbe una muestra: deriva la orientación y empuja los seis
    /// canales de una vez, manteniéndolos como instantánea consistente
    /// del mismo instante de muestreo
    pub fn absorb(&mut self, sample: &PhysicalSample) {
        let tilt = Orientation::from_accel(sample);
        let [ax, ay, az] = sample.accel_g;

        self.accel_x.push((ax * ACC_SCALE) as i16);
        self.accel_y.push((ay * ACC_SCALE) as i16);
        self.accel_z.push((az * ACC_SCALE) as i16);
        self.roll.push((tilt.roll_deg * ANG_SCALE) as i16);
        self.pitch.push((tilt.pitch_deg * ANG_SCALE) as i16);
        self.temp.push((sample.temp_c * TEMP_SCALE) as i16);
    }

    /// Muestras retenidas por canal
    pub fn points(&self) -> usize {
        self.accel_x.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_fill_keeps_leading_zeros() {
        let mut series = RollingSeries::new(5);
        for v in [1, 2, 3] {
            series.push(v);
        }
        assert_eq!(series.as_slice(), &[0, 0, 1, 2, 3]);

        series.push(4);
        assert_eq!(series.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_length_is_invariant() {
        let mut series = RollingSeries::new(4);
        assert_eq!(series.len(), 4);
        for v in 0..100 {
            series.push(v);
            assert_eq!(series.len(), 4);
        }
    }

    #[test]
    fn test_overfill_keeps_last_n_in_order() {
        let n = 5;
        let mut series = RollingSeries::new(n);
        for v in 1..=12i16 {
            series.push(v);
        }
        // Tras n+k inserciones quedan las últimas n en orden de inserción
        assert_eq!(series.as_slice(), &[8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_absorb_scales_channels() {
        let mut bank = ChannelBank::new(3);
        let sample = PhysicalSample {
            accel_g: [0.5, 0.0, 1.0],
            gyro_dps: [0.0, 0.0, 0.0],
            temp_c: 55.777,
        };
        bank.absorb(&sample);

        assert_eq!(bank.accel_x.as_slice(), &[0, 0, 50]);
        assert_eq!(bank.accel_y.as_slice(), &[0, 0, 0]);
        assert_eq!(bank.accel_z.as_slice(), &[0, 0, 100]);
        // roll = 0°, pitch ≈ -26.565° -> -265 en décimas de grado
        assert_eq!(bank.roll.as_slice(), &[0, 0, 0]);
        assert_eq!(bank.pitch.as_slice(), &[0, 0, -265]);
        assert_eq!(bank.temp.as_slice(), &[0, 0, 5577]);
    }
}
