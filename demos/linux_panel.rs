//! Panel de instrumentos en tiempo real del MPU6050 en Linux
//!
//! Dos temporizadores cooperativos con cadencias independientes: el rápido
//! muestrea el sensor y publica en la ranura, el lento absorbe la última
//! muestra y redibuja las tres bandas de gráficas (aceleración, roll/pitch
//! y temperatura) usando plotters como renderizador.
//!
//! Para ejecutar: cargo run --example linux_panel --features plotting

use linux_embedded_hal::{Delay, I2cdev};
use mpu6050_rs::config::{I2C_DEV, MPU_ADDR};
use mpu6050_rs::panel::build_pipeline;
use mpu6050_rs::render::{Renderer, Rgb};
use mpu6050_rs::{self, config::PanelConfig};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

const PANEL_PATH: &str = "panel.png";

/// Adaptador de una sub-área de plotters a la superficie que consume el
/// proyector de gráficas
struct PlottersSurface<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
}

impl<'a> Renderer for PlottersSurface<'a> {
    type Error = Box<dyn Error>;

    fn clear(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.area.fill(&RGBColor(color.0, color.1, color.2))?;
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgb,
        opacity: f32,
    ) -> Result<(), Self::Error> {
        let style = RGBColor(color.0, color.1, color.2)
            .mix(opacity as f64)
            .stroke_width(width);
        self.area.draw(&PathElement::new(vec![from, to], style))?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("MPU6050 - Panel de instrumentos en tiempo real");

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    // Configurar el manejador para Ctrl+C
    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    // Crear instancia de I2C para Linux
    let i2c = I2cdev::new(I2C_DEV)?;
    let delay = Delay {};

    // Crear e inicializar el dispositivo MPU6050
    let mut device = mpu6050_rs::new_i2c_device(i2c, MPU_ADDR, delay);
    if let Err(e) = device.initialize() {
        // Sin configuración aceptada el pipeline no debe arrancar
        return Err(format!("Inicialización del MPU6050 fallida: {:?}", e).into());
    }
    println!("Dispositivo inicializado correctamente");

    let config = PanelConfig::default();
    let (mut sampler, mut charts) = build_pipeline(device, &config);

    // Una superficie apilada con las tres bandas del panel
    let total_height = config.height * 2 + config.temp_height;
    let root = BitMapBackend::new(PANEL_PATH, (config.width, total_height)).into_drawing_area();
    let (accel_area, rest) = root.split_vertically(config.height as i32);
    let (tilt_area, temp_area) = rest.split_vertically(config.height as i32);

    let mut accel_surface = PlottersSurface { area: accel_area };
    let mut tilt_surface = PlottersSurface { area: tilt_area };
    let mut temp_surface = PlottersSurface { area: temp_area };

    let sample_period = Duration::from_millis(config.sample_period_ms);
    let chart_period = Duration::from_millis(config.chart_period_ms);
    let mut next_sample = Instant::now();
    let mut next_chart = Instant::now();

    println!("Dibujando en '{}'. Presiona Ctrl+C para detener...", PANEL_PATH);

    while running.load(Ordering::SeqCst) {
        let now = Instant::now();

        if now >= next_sample {
            if let Err(e) = sampler.tick() {
                // Una muestra perdida no detiene el pipeline
                eprintln!("Error de muestreo: {:?}", e);
            }
            next_sample += sample_period;
        }

        if now >= next_chart {
            if charts.tick(&mut accel_surface, &mut tilt_surface, &mut temp_surface)? {
                root.present()?;
            }
            next_chart += chart_period;
        }

        thread::sleep(Duration::from_millis(1));
    }

    // Dormir el chip al salir
    let _ = sampler.device_mut().set_sleep(true);
    println!("Panel guardado como '{}'", PANEL_PATH);
    println!("Ejemplo finalizado");
    Ok(())
}
