//! Módulo de abstracción para la comunicación con el dispositivo MPU6050

use embedded_hal::blocking::i2c;

#[cfg(feature = "linux")]
use linux_embedded_hal::i2cdev::linux::LinuxI2CError;

/// Error genérico para interfaces de comunicación
#[derive(Debug, Clone)]
pub enum InterfaceError<E> {
    /// Error de comunicación I2C
    I2cError(E),
    /// Parámetro inválido
    InvalidParameter,
}

#[cfg(feature = "linux")]
impl From<LinuxI2CError> for InterfaceError<LinuxI2CError> {
    fn from(error: LinuxI2CError) -> Self {
        InterfaceError::I2cError(error)
    }
}

/// Trait para abstraer la comunicación con el dispositivo MPU6050
pub trait Interface {
    /// Tipo de error que puede producir la interfaz
    type Error;

    /// Escribe un registro
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Lee un bloque de registros consecutivos empezando en `reg`
    fn read_regs(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error>;
}

/// Implementación de Interface para I2C
pub struct I2cInterface<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C, E> I2cInterface<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    /// Crea una nueva interfaz I2C
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Consume la interfaz y devuelve el dispositivo I2C subyacente
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Interface for I2cInterface<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    type Error = InterfaceError<E>;

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        // Una única transacción de dos bytes: registro + valor
        self.i2c
            .write(self.addr, &[reg, value])
            .map_err(InterfaceError::I2cError)
    }

    fn read_regs(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Err(InterfaceError::InvalidParameter);
        }

        // Escritura de un byte para seleccionar la dirección, después la lectura;
        // una transferencia parcial se reporta como error por el bus
        self.i2c
            .write_read(self.addr, &[reg], data)
            .map_err(InterfaceError::I2cError)
    }
}
