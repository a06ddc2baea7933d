//! Dobles de prueba compartidos: bus guionizado y superficie de grabación

use crate::interface::Interface;
use crate::render::{Renderer, Rgb};
use crate::types::SENSOR_BLOCK_LEN;
use embedded_hal::blocking::delay::DelayMs;

/// Bus falso que registra escrituras y sirve un bloque de datos fijo
#[derive(Default)]
pub struct ScriptedBus {
    pub writes: Vec<(u8, u8)>,
    pub reads: Vec<(u8, usize)>,
    pub fail_write_at: Option<usize>,
    pub fail_read: bool,
    pub block: [u8; SENSOR_BLOCK_LEN],
}

impl ScriptedBus {
    pub fn with_block(block: [u8; SENSOR_BLOCK_LEN]) -> Self {
        Self {
            block,
            ..Self::default()
        }
    }
}

impl Interface for ScriptedBus {
    type Error = ();

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), ()> {
        if self.fail_write_at == Some(self.writes.len()) {
            return Err(());
        }
        self.writes.push((reg, value));
        Ok(())
    }

    fn read_regs(&mut self, reg: u8, data: &mut [u8]) -> Result<(), ()> {
        if self.fail_read {
            return Err(());
        }
        self.reads.push((reg, data.len()));
        data.copy_from_slice(&self.block[..data.len()]);
        Ok(())
    }
}

pub struct NoopDelay;

impl DelayMs<u32> for NoopDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

/// Orden de línea registrada por la superficie falsa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCmd {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub width: u32,
    pub color: Rgb,
    pub opacity: f32,
}

/// Superficie que graba las órdenes de dibujo en lugar de rasterizar
#[derive(Default)]
pub struct RecordingSurface {
    pub clears: Vec<Rgb>,
    pub lines: Vec<LineCmd>,
}

impl Renderer for RecordingSurface {
    type Error = ();

    fn clear(&mut self, color: Rgb) -> Result<(), ()> {
        // Un clear invalida lo dibujado hasta ahora
        self.lines.clear();
        self.clears.push(color);
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgb,
        opacity: f32,
    ) -> Result<(), ()> {
        self.lines.push(LineCmd {
            from,
            to,
            width,
            color,
            opacity,
        });
        Ok(())
    }
}
