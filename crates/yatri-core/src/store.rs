//! Store acumulativo de campos del formulario.
//!
//! Contenedor "tonto" y libre de efectos: no valida nada (la validación es
//! responsabilidad del engine). Usa un mapa con orden de inserción para que
//! los snapshots iteren en orden de primer toque, estable para el resumen
//! de revisión y el fingerprint.

use indexmap::IndexMap;

use yatri_domain::{FieldKey, FieldValue};

static UNSET: FieldValue = FieldValue::Unset;

#[derive(Debug, Default)]
pub struct FormFieldStore {
    inner: IndexMap<FieldKey, FieldValue>,
}

impl FormFieldStore {
    pub fn new() -> Self {
        Self { inner: IndexMap::new() }
    }

    /// Valor actual del campo; `Unset` si nunca fue tocado.
    pub fn get(&self, key: FieldKey) -> &FieldValue {
        self.inner.get(&key).unwrap_or(&UNSET)
    }

    /// Reemplaza incondicionalmente el valor previo (last-write-wins).
    pub fn set(&mut self, key: FieldKey, value: FieldValue) {
        self.inner.insert(key, value);
    }

    /// Copia defensiva del mapeo completo, independiente de mutaciones
    /// posteriores. El paso de revisión/envío lee esta copia.
    pub fn snapshot(&self) -> IndexMap<FieldKey, FieldValue> {
        self.inner.clone()
    }

    /// Claves tocadas alguna vez, en orden de primer toque.
    pub fn touched(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.inner.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
