//! Driver del dispositivo MPU6050

use crate::conversion::raw_to_physical;
use crate::interface::Interface;
use crate::register;
use crate::types::{bits, AccelFullScale, GyroFullScale, PhysicalSample, RawSample, SENSOR_BLOCK_LEN};
use embedded_hal::blocking::delay::DelayMs;

/// Retardo de asentamiento tras despertar el chip
const WAKE_SETTLE_MS: u32 = 10;

/// Estado del driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// Sin inicializar; no se puede muestrear todavía
    Uninitialized,
    /// Secuencia de configuración aceptada
    Ready,
    /// La secuencia de configuración falló; el pipeline no debe arrancar
    Faulted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mpu6050Error {
    /// Fallo opaco de E/S en el bus
    Interface,
    /// El dispositivo no aceptó la secuencia de configuración;
    /// `step` es el índice de la escritura que falló
    InitFailed { step: u8 },
    /// Se perdió un intento de muestreo; el siguiente tick reintenta
    ReadFailed,
    /// Operación no válida en el estado actual del driver
    NotReady,
}

/// Driver del sensor
///
/// Posee en exclusiva el canal del bus durante toda la vida del proceso;
/// el único punto de acceso concurrente del pipeline es la ranura de
/// entrega, nunca el bus.
pub struct Mpu6050<I, D> {
    pub(crate) interface: I,
    pub(crate) delay: D,
    state: DeviceState,
    accel_fullscale: AccelFullScale,
    gyro_fullscale: GyroFullScale,
}

impl<I, D, E> Mpu6050<I, D>
where
    I: Interface<Error = E>,
    D: DelayMs<u32>,
{
    /// Create a new instance of Mpu6050
    pub fn new(interface: I, delay: D) -> Self {
        Self {
            interface,
            delay,
            state: DeviceState::Uninitialized,
            accel_fullscale: AccelFullScale::default(),
            gyro_fullscale: GyroFullScale::default(),
        }
    }

    /// Estado actual del driver
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Inicializa el dispositivo con la secuencia fija de configuración
    ///
    /// Despierta el chip, configura el filtro paso bajo y las escalas
    /// completas de giroscopio (±250 dps) y acelerómetro (±2g). Cualquier
    /// fallo aborta la secuencia y deja el driver en `Faulted`.
    pub fn initialize(&mut self) -> Result<(), Mpu6050Error> {
        // Despertar el chip (PWR_MGMT_1 = 0, limpia SLEEP); mientras duerme
        // todos los registros de datos leen cero
        self.config_step(0, register::PWR_MGMT_1, 0x00)?;
        self.delay.delay_ms(WAKE_SETTLE_MS);

        // DLPF
        self.config_step(1, register::CONFIG, bits::DLPF_CFG_42HZ)?;
        // GYRO ±250 dps
        self.config_step(2, register::GYRO_CONFIG, (self.gyro_fullscale as u8) << 3)?;
        // ACC ±2g
        self.config_step(3, register::ACCEL_CONFIG, (self.accel_fullscale as u8) << 3)?;

        self.state = DeviceState::Ready;
        Ok(())
    }

    fn config_step(&mut self, step: u8, reg: u8, value: u8) -> Result<(), Mpu6050Error> {
        match self.interface.write_reg(reg, value) {
            Ok(()) => Ok(()),
            Err(_) => {
                self.state = DeviceState::Faulted;
                Err(Mpu6050Error::InitFailed { step })
            }
        }
    }

    /// Lee el bloque contiguo de 14 bytes del sensor sin convertir
    ///
    /// Sólo es válido con el driver en `Ready`.
    pub fn read_raw(&mut self) -> Result<RawSample, Mpu6050Error> {
        if self.state != DeviceState::Ready {
            return Err(Mpu6050Error::NotReady);
        }

        let mut block = [0u8; SENSOR_BLOCK_LEN];
        self.interface
            .read_regs(register::ACCEL_XOUT_H, &mut block)
            .map_err(|_| Mpu6050Error::ReadFailed)?;

        Ok(RawSample::from_be_block(&block))
    }

    /// Lee una muestra completa y la convierte a unidades físicas
    ///
    /// En caso de fallo no se produce ningún valor parcial; el llamador
    /// conserva la muestra anterior y el siguiente tick reintenta.
    pub fn read_all(&mut self) -> Result<PhysicalSample, Mpu6050Error> {
        let raw = self.read_raw()?;
        Ok(raw_to_physical(&raw, self.accel_fullscale, self.gyro_fullscale))
    }

    /// Activa o desactiva el modo sleep del chip
    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), Mpu6050Error> {
        let value = if sleep { bits::SLEEP } else { 0x00 };
        self.interface
            .write_reg(register::PWR_MGMT_1, value)
            .map_err(|_| Mpu6050Error::Interface)
    }

    /// Consume el driver y devuelve la interfaz del bus
    pub fn release(self) -> I {
        self.interface
    }
}
