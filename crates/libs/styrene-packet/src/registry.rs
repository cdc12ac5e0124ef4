//! Fingerprint to constructor mapping.
//!
//! Registration happens on a [`RegistryBuilder`] owned by a single
//! initialisation path. [`RegistryBuilder::seal`] turns it into an immutable
//! [`Registry`] that decoders share by reference, so lookups never race with
//! registration.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use crate::config::DecodeLimits;
use crate::error::{DecodeError, RegistryError};
use crate::fingerprint::Fingerprint;
use crate::packet::{AsAny, Packet, PacketType};

/// Builds a zero-value instance of one packet type.
pub type Constructor = Box<dyn Fn() -> Box<dyn Packet> + Send + Sync>;

struct Entry {
    type_name: &'static str,
    type_id: TypeId,
    constructor: Constructor,
}

/// Mutable registry used during initialisation.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<Fingerprint, Entry>,
    limits: DecodeLimits,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Registers `T` under its own fingerprint with `T::default` as constructor.
    pub fn register<T: PacketType>(&mut self) -> Result<&mut Self, RegistryError> {
        self.register_with(T::FINGERPRINT, T::NAME, || Box::new(T::default()) as Box<dyn Packet>)
    }

    /// Registers an explicit zero-value constructor.
    ///
    /// The constructor is called once here: its product must report
    /// `fingerprint`. Registering the same concrete type twice under one
    /// fingerprint is a no-op; any other type is rejected.
    pub fn register_with<F>(
        &mut self,
        fingerprint: Fingerprint,
        type_name: &'static str,
        constructor: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: Fn() -> Box<dyn Packet> + Send + Sync + 'static,
    {
        if fingerprint.is_absent() {
            return Err(RegistryError::ReservedFingerprint { type_name });
        }

        let instance = constructor();
        let found = instance.fingerprint();
        if found != fingerprint {
            return Err(RegistryError::FingerprintMismatch {
                type_name,
                expected: fingerprint,
                found,
            });
        }
        let type_id = AsAny::as_any(&*instance).type_id();

        if let Some(existing) = self.entries.get(&fingerprint) {
            if existing.type_id == type_id {
                log::debug!("registry: {} already registered as {}", type_name, fingerprint);
                return Ok(self);
            }
            return Err(RegistryError::DuplicateRegistration {
                fingerprint,
                existing: existing.type_name,
                attempted: type_name,
            });
        }

        log::debug!("registry: registered {} as {}", type_name, fingerprint);
        self.entries.insert(
            fingerprint,
            Entry { type_name, type_id, constructor: Box::new(constructor) },
        );
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ends the initialisation phase.
    pub fn seal(self) -> Registry {
        log::debug!("registry: sealed with {} packet types", self.entries.len());
        Registry { entries: self.entries, limits: self.limits }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("types", &self.entries.len())
            .field("limits", &self.limits)
            .finish()
    }
}

/// Immutable, shareable registry consulted by every decode.
pub struct Registry {
    entries: HashMap<Fingerprint, Entry>,
    limits: DecodeLimits,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn lookup(&self, fingerprint: Fingerprint) -> Result<&Constructor, DecodeError> {
        self.entries
            .get(&fingerprint)
            .map(|entry| &entry.constructor)
            .ok_or(DecodeError::UnknownPacketType(fingerprint))
    }

    /// Builds a zero-value instance of the type registered under `fingerprint`.
    pub fn instantiate(&self, fingerprint: Fingerprint) -> Result<Box<dyn Packet>, DecodeError> {
        self.lookup(fingerprint).map(|constructor| constructor())
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.entries.contains_key(&fingerprint)
    }

    pub fn type_name(&self, fingerprint: Fingerprint) -> Option<&'static str> {
        self.entries.get(&fingerprint).map(|entry| entry.type_name)
    }

    /// Registered fingerprints in ascending order.
    pub fn fingerprints(&self) -> Vec<Fingerprint> {
        let mut fingerprints: Vec<_> = self.entries.keys().copied().collect();
        fingerprints.sort_unstable();
        fingerprints
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types = f.debug_map();
        for fingerprint in self.fingerprints() {
            types.entry(&fingerprint, &self.type_name(fingerprint).unwrap_or_default());
        }
        types.finish()
    }
}
