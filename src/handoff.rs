//! Entrega de muestras entre el muestreo rápido y el dibujado lento
//!
//! Ranura única productor/consumidor con bandera de publicación: el
//! productor sobrescribe incondicionalmente y el consumidor sólo copia
//! cuando la bandera está puesta. La entrega pierde muestras a propósito;
//! desacopla ambas cadencias sin búfer creciente y el consumidor siempre
//! observa la muestra más reciente.

use crate::types::PhysicalSample;
use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct Slot {
    sample: UnsafeCell<PhysicalSample>,
    ready: AtomicBool,
}

// SAFETY: hay exactamente un productor y un consumidor (los handles no son
// clonables). El productor escribe la ranura antes de publicar la bandera
// con Release; el consumidor carga la bandera con Acquire antes de copiar.
// Ambos handles se disparan desde el mismo planificador cooperativo de un
// solo hilo, de modo que escritura y copia nunca se solapan.
unsafe impl Sync for Slot {}

/// Extremo productor de la ranura
pub struct SampleProducer {
    slot: Arc<Slot>,
}

/// Extremo consumidor de la ranura
pub struct SampleConsumer {
    slot: Arc<Slot>,
}

/// Crea el par productor/consumidor sobre una ranura vacía
pub fn sample_slot() -> (SampleProducer, SampleConsumer) {
    let slot = Arc::new(Slot {
        sample: UnsafeCell::new(PhysicalSample::default()),
        ready: AtomicBool::new(false),
    });
    (
        SampleProducer { slot: slot.clone() },
        SampleConsumer { slot },
    )
}

impl SampleProducer {
    /// Sobrescribe la ranura con la muestra y publica la bandera
    pub fn publish(&mut self, sample: PhysicalSample) {
        // Escritura completa antes del store Release de la bandera
        unsafe {
            *self.slot.sample.get() = sample;
        }
        self.slot.ready.store(true, Ordering::Release);
    }
}

impl SampleConsumer {
    /// Copia la muestra pendiente y limpia la bandera
    ///
    /// `None` es el estado estacionario esperado entre publicaciones; un
    /// valor publicado se observa como máximo una vez.
    pub fn take(&mut self) -> Option<PhysicalSample> {
        if !self.slot.ready.load(Ordering::Acquire) {
            return None;
        }
        let sample = unsafe { *self.slot.sample.get() };
        self.slot.ready.store(false, Ordering::Release);
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_with_temp(temp_c: f32) -> PhysicalSample {
        PhysicalSample {
            temp_c,
            ..PhysicalSample::default()
        }
    }

    #[test]
    fn test_empty_slot_yields_nothing() {
        let (_producer, mut consumer) = sample_slot();
        assert_eq!(consumer.take(), None);
    }

    #[test]
    fn test_at_most_once_delivery() {
        let (mut producer, mut consumer) = sample_slot();
        producer.publish(sample_with_temp(25.0));

        assert_eq!(consumer.take(), Some(sample_with_temp(25.0)));
        // Segunda encuesta antes de la siguiente publicación: no hay nada
        assert_eq!(consumer.take(), None);
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let (mut producer, mut consumer) = sample_slot();
        producer.publish(sample_with_temp(20.0));
        producer.publish(sample_with_temp(30.0));

        // Los ticks de consumo perdidos se coalescen en la muestra más reciente
        assert_eq!(consumer.take(), Some(sample_with_temp(30.0)));
        assert_eq!(consumer.take(), None);
    }
}
