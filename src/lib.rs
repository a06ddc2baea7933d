//! Biblioteca Rust para el sensor de movimiento InvenSense MPU6050
//!
//! Esta biblioteca proporciona una interfaz para controlar el sensor MPU6050,
//! un IMU de 6 ejes con giroscopio, acelerómetro y sensor de temperatura,
//! junto con un pipeline de visualización tipo panel de instrumentos:
//! muestreo a cadencia rápida, entrega productor/consumidor de ranura única,
//! series temporales rodantes y proyección de gráficas a coordenadas de
//! pantalla mediante un renderizador externo.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

// Importaciones internas
pub mod chart;
pub mod config;
pub mod conversion;
pub mod device;
pub mod handoff;
pub mod interface;
pub mod orientation;
pub mod panel;
pub mod register;
pub mod render;
pub mod series;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports públicos
pub use conversion::{accel_raw_to_g, gyro_raw_to_dps, temp_raw_to_celsius};
pub use device::{Mpu6050, Mpu6050Error};
pub use orientation::Orientation;
pub use panel::{build_pipeline, ChartTask, SamplerTask};
pub use types::{AccelFullScale, GyroFullScale, PhysicalSample, RawSample};

use crate::interface::I2cInterface;

/// Crea un nuevo dispositivo MPU6050 usando el bus I2C
pub fn new_i2c_device<I, D, E>(i2c: I, address: u8, delay: D) -> Mpu6050<I2cInterface<I>, D>
where
    I: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    D: DelayMs<u32>,
{
    let interface = I2cInterface::new(i2c, address);
    Mpu6050::new(interface, delay)
}
