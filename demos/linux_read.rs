use linux_embedded_hal::{Delay, I2cdev};
use mpu6050_rs::config::{I2C_DEV, MPU_ADDR};
use mpu6050_rs::{self, Orientation};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    println!("MPU6050 - Ejemplo de lectura básica");

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
    let i2c = match I2cdev::new(I2C_DEV) {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };
    let delay = Delay {};

    // Crear dispositivo MPU6050 con la dirección I2C estándar
    let mut device = mpu6050_rs::new_i2c_device(i2c, MPU_ADDR, delay);

    // Inicializar el dispositivo
    if let Err(e) = device.initialize() {
        eprintln!("Error al inicializar el dispositivo: {:?}", e);
        return;
    }
    println!("Dispositivo inicializado correctamente");

    // Leer datos continuamente hasta que se presione Ctrl+C
    println!("Leyendo datos. Presiona Ctrl+C para detener...");

    while running.load(Ordering::SeqCst) {
        match device.read_all() {
            Ok(sample) => {
                let tilt = Orientation::from_accel(&sample);
                println!(
                    "Aceleración: x={:+.3}G, y={:+.3}G, z={:+.3}G",
                    sample.accel_g[0], sample.accel_g[1], sample.accel_g[2]
                );
                println!(
                    "Giroscopio: x={:+.2}°/s, y={:+.2}°/s, z={:+.2}°/s",
                    sample.gyro_dps[0], sample.gyro_dps[1], sample.gyro_dps[2]
                );
                println!("Temperatura: {:.2}°C", sample.temp_c);
                println!("Roll: {:+.2}°, Pitch: {:+.2}°", tilt.roll_deg, tilt.pitch_deg);
                println!("-------------------");
            }
            // Una lectura perdida no es fatal; el siguiente ciclo reintenta
            Err(e) => eprintln!("Error al leer el sensor: {:?}", e),
        }
        thread::sleep(Duration::from_millis(200));
    }

    // Dormir el chip al salir
    let _ = device.set_sleep(true);
    println!("Ejemplo finalizado");
}
