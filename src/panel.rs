//! Cableado del pipeline sensor → gráficas
//!
//! Dos tareas con cadencias independientes comparten únicamente la ranura
//! de entrega: la rápida muestrea el sensor y publica, la lenta absorbe la
//! última muestra en las series y redibuja las tres regiones. Ninguna de
//! las dos bloquea; parar el pipeline es dejar de invocar los ticks.

use crate::chart::ChartRegion;
use crate::config::{
    PanelConfig, ACCEL_BG, ACCEL_RANGE_G, ACC_SCALE, ANGLE_RANGE_DEG, ANG_SCALE, TEMP_BG,
    TEMP_RANGE_C, TEMP_SCALE, TILT_BG,
};
use crate::device::{Mpu6050, Mpu6050Error};
use crate::handoff::{sample_slot, SampleConsumer, SampleProducer};
use crate::interface::Interface;
use crate::render::{palette, Renderer};
use crate::series::ChannelBank;
use embedded_hal::blocking::delay::DelayMs;

/// Tarea de cadencia rápida: muestrea el sensor y publica en la ranura
pub struct SamplerTask<I, D> {
    device: Mpu6050<I, D>,
    producer: SampleProducer,
}

impl<I, D, E> SamplerTask<I, D>
where
    I: Interface<Error = E>,
    D: DelayMs<u32>,
{
    /// Un tick de muestreo
    ///
    /// Un fallo de lectura se devuelve sin reintento; el llamador lo
    /// registra y el siguiente tick vuelve a intentarlo.
    pub fn tick(&mut self) -> Result<(), Mpu6050Error> {
        let sample = self.device.read_all()?;
        self.producer.publish(sample);
        Ok(())
    }

    /// Acceso al driver, por ejemplo para dormir el chip al terminar
    pub fn device_mut(&mut self) -> &mut Mpu6050<I, D> {
        &mut self.device
    }
}

/// Tarea de cadencia lenta: absorbe la última muestra y redibuja
pub struct ChartTask {
    consumer: SampleConsumer,
    bank: ChannelBank,
    accel_region: ChartRegion,
    tilt_region: ChartRegion,
    temp_region: ChartRegion,
}

impl ChartTask {
    /// Un tick de gráficas sobre las tres superficies del panel
    ///
    /// Si no hay muestra pendiente el tick es un no-op y devuelve
    /// `Ok(false)`; es el estado estacionario esperado entre
    /// publicaciones, no un error. Con muestra, las seis series avanzan
    /// juntas y las tres regiones se redibujan desde esa única
    /// instantánea.
    pub fn tick<R: Renderer>(
        &mut self,
        accel: &mut R,
        tilt: &mut R,
        temp: &mut R,
    ) -> Result<bool, R::Error> {
        let sample = match self.consumer.take() {
            Some(sample) => sample,
            None => return Ok(false),
        };

        self.bank.absorb(&sample);

        self.accel_region.draw(
            &[
                (self.bank.accel_x.as_slice(), palette::RED),
                (self.bank.accel_y.as_slice(), palette::GREEN),
                (self.bank.accel_z.as_slice(), palette::BLUE),
            ],
            accel,
        )?;
        self.tilt_region.draw(
            &[
                (self.bank.roll.as_slice(), palette::ORANGE),
                (self.bank.pitch.as_slice(), palette::PURPLE),
            ],
            tilt,
        )?;
        self.temp_region
            .draw(&[(self.bank.temp.as_slice(), palette::TEAL)], temp)?;

        Ok(true)
    }

    /// Series acumuladas del panel
    pub fn bank(&self) -> &ChannelBank {
        &self.bank
    }
}

/// Construye el par de tareas del panel a partir de un dispositivo ya
/// inicializado
///
/// El contexto compartido se reparte explícitamente entre ambas tareas;
/// no hay estado global del proceso.
pub fn build_pipeline<I, D>(
    device: Mpu6050<I, D>,
    config: &PanelConfig,
) -> (SamplerTask<I, D>, ChartTask) {
    let (producer, consumer) = sample_slot();

    let accel_region = ChartRegion::centered(
        config.width,
        config.height,
        ACCEL_BG,
        ACCEL_RANGE_G * ACC_SCALE,
    );
    let tilt_region = ChartRegion::centered(
        config.width,
        config.height,
        TILT_BG,
        ANGLE_RANGE_DEG * ANG_SCALE,
    );
    let temp_region = ChartRegion::bottom(
        config.width,
        config.temp_height,
        TEMP_BG,
        TEMP_RANGE_C * TEMP_SCALE,
    );

    (
        SamplerTask { device, producer },
        ChartTask {
            consumer,
            bank: ChannelBank::new(config.points),
            accel_region,
            tilt_region,
            temp_region,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{NoopDelay, RecordingSurface, ScriptedBus};
    use crate::types::SENSOR_BLOCK_LEN;

    const REFERENCE_BLOCK: [u8; SENSOR_BLOCK_LEN] = [
        0x20, 0x00, 0x00, 0x00, 0x40, 0x00, 0x19, 0x90, 0, 0, 0, 0, 0, 0,
    ];

    fn pipeline_with_block(
        block: [u8; SENSOR_BLOCK_LEN],
    ) -> (SamplerTask<ScriptedBus, NoopDelay>, ChartTask) {
        let mut device = Mpu6050::new(ScriptedBus::with_block(block), NoopDelay);
        device.initialize().unwrap();
        let config = PanelConfig {
            points: 5,
            ..PanelConfig::default()
        };
        build_pipeline(device, &config)
    }

    #[test]
    fn test_end_to_end_reference_sample() {
        let (mut sampler, mut charts) = pipeline_with_block(REFERENCE_BLOCK);
        let mut accel = RecordingSurface::default();
        let mut tilt = RecordingSurface::default();
        let mut temp = RecordingSurface::default();

        sampler.tick().unwrap();
        assert!(charts.tick(&mut accel, &mut tilt, &mut temp).unwrap());

        // ax = 0.5g, az = 1.0g, temp ≈ 55.78°C, roll = 0°, pitch ≈ -26.57°
        let bank = charts.bank();
        assert_eq!(bank.accel_x.as_slice(), &[0, 0, 0, 0, 50]);
        assert_eq!(bank.accel_z.as_slice(), &[0, 0, 0, 0, 100]);
        assert_eq!(bank.roll.as_slice(), &[0, 0, 0, 0, 0]);
        assert_eq!(bank.pitch.as_slice(), &[0, 0, 0, 0, -265]);
        assert_eq!(bank.temp.as_slice(), &[0, 0, 0, 0, 5577]);

        // Tres superficies limpiadas con su fondo propio
        assert_eq!(accel.clears, vec![ACCEL_BG]);
        assert_eq!(tilt.clears, vec![TILT_BG]);
        assert_eq!(temp.clears, vec![TEMP_BG]);

        // accel: referencia + 3 canales x 4 segmentos; tilt: referencia +
        // 2 canales; temp: 1 canal sin referencia
        assert_eq!(accel.lines.len(), 1 + 3 * 4);
        assert_eq!(tilt.lines.len(), 1 + 2 * 4);
        assert_eq!(temp.lines.len(), 4);
    }

    #[test]
    fn test_chart_tick_without_sample_is_noop() {
        let (_sampler, mut charts) = pipeline_with_block(REFERENCE_BLOCK);
        let mut accel = RecordingSurface::default();
        let mut tilt = RecordingSurface::default();
        let mut temp = RecordingSurface::default();

        assert!(!charts.tick(&mut accel, &mut tilt, &mut temp).unwrap());
        assert!(accel.clears.is_empty());
        assert!(accel.lines.is_empty());
    }

    #[test]
    fn test_sample_consumed_at_most_once() {
        let (mut sampler, mut charts) = pipeline_with_block(REFERENCE_BLOCK);
        let mut accel = RecordingSurface::default();
        let mut tilt = RecordingSurface::default();
        let mut temp = RecordingSurface::default();

        sampler.tick().unwrap();
        assert!(charts.tick(&mut accel, &mut tilt, &mut temp).unwrap());
        // Segundo tick de gráficas sin nueva publicación: no-op
        assert!(!charts.tick(&mut accel, &mut tilt, &mut temp).unwrap());
        assert_eq!(charts.bank().accel_z.as_slice(), &[0, 0, 0, 0, 100]);
    }

    #[test]
    fn test_failed_sample_tick_publishes_nothing() {
        let (mut sampler, mut charts) = pipeline_with_block(REFERENCE_BLOCK);
        sampler.device_mut().interface.fail_read = true;

        assert_eq!(sampler.tick(), Err(Mpu6050Error::ReadFailed));

        let mut accel = RecordingSurface::default();
        let mut tilt = RecordingSurface::default();
        let mut temp = RecordingSurface::default();
        assert!(!charts.tick(&mut accel, &mut tilt, &mut temp).unwrap());
    }
}
