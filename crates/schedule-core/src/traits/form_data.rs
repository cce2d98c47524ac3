//! `FormDataStore`: access to the form that owns circuits and readings.

use crate::types::{Circuit, ReadingStore};

/// The form's circuits and readings.
///
/// Readings are replaced wholesale: callers take a copy with `readings()`,
/// modify it, and write it back with `set_readings()`.
pub trait FormDataStore {
    /// Circuits in schedule order.
    fn circuits(&self) -> Vec<Circuit>;

    fn readings(&self) -> ReadingStore;

    fn set_readings(&mut self, readings: ReadingStore);
}

impl<T: FormDataStore + ?Sized> FormDataStore for &mut T {
    fn circuits(&self) -> Vec<Circuit> {
        (**self).circuits()
    }

    fn readings(&self) -> ReadingStore {
        (**self).readings()
    }

    fn set_readings(&mut self, readings: ReadingStore) {
        (**self).set_readings(readings)
    }
}

impl<T: FormDataStore + ?Sized> FormDataStore for Box<T> {
    fn circuits(&self) -> Vec<Circuit> {
        (**self).circuits()
    }

    fn readings(&self) -> ReadingStore {
        (**self).readings()
    }

    fn set_readings(&mut self, readings: ReadingStore) {
        (**self).set_readings(readings)
    }
}
