//! Demo packet types shared by the integration tests and benchmarks.
//!
//! The types under [`packets`] and [`enums`] are what the schema compiler
//! emits for the demo schema used by every runtime's conformance suite.
//! [`fixtures`] builds the same values the other runtimes test against.

pub mod enums;
pub mod fixtures;
pub mod packets;

use styrene_packet::{DecodeLimits, Registry, RegistryBuilder, RegistryError};

pub use enums::{DemoEnum, DemoEnum260, MyEnum};
pub use packets::{
    DemoAny, DemoIncludeVersion, DemoIncludeVersion3D76B02436B66199, DemoOuter, DemoPacket,
    DemoPacket2, DemoPacket3, DemoUnsigned, DemoVersion, DemoVersion3FC7F86674610139, MyInner,
};

/// Registers every demo packet type.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder
        .register::<MyInner>()?
        .register::<DemoOuter>()?
        .register::<DemoPacket>()?
        .register::<DemoPacket2>()?
        .register::<DemoPacket3>()?
        .register::<DemoUnsigned>()?
        .register::<DemoVersion3FC7F86674610139>()?
        .register::<DemoVersion>()?
        .register::<DemoIncludeVersion3D76B02436B66199>()?
        .register::<DemoIncludeVersion>()?
        .register::<DemoAny>()?;
    Ok(())
}

/// Sealed registry holding every demo packet type.
pub fn registry_with(limits: DecodeLimits) -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new().with_limits(limits);
    register_all(&mut builder)?;
    Ok(builder.seal())
}

pub fn registry() -> Result<Registry, RegistryError> {
    registry_with(DecodeLimits::default())
}
