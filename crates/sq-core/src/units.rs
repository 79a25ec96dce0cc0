// sq-core/src/units.rs

use uom::si::f64::{Length as UomLength, Pressure as UomPressure, Volume as UomVolume};

use crate::{Real, SqError, SqResult, ensure_finite};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Volume = UomVolume;

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn ml(v: f64) -> Volume {
    use uom::si::volume::milliliter;
    Volume::new::<milliliter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

/// Pressure as a plain number of standard atmospheres.
#[inline]
pub fn in_atm(p: Pressure) -> Real {
    use uom::si::pressure::atmosphere;
    p.get::<atmosphere>()
}

/// Volume as a plain number of milliliters.
#[inline]
pub fn in_ml(v: Volume) -> Real {
    use uom::si::volume::milliliter;
    v.get::<milliliter>()
}

/// Length as a plain number of meters.
#[inline]
pub fn in_m(l: Length) -> Real {
    use uom::si::length::meter;
    l.get::<meter>()
}

pub mod constants {
    /// Ambient pressure at the surface, in atm.
    pub const SURFACE_PRESSURE_ATM: f64 = 1.0;

    /// Seawater column that adds one atmosphere of pressure, in meters.
    pub const SEAWATER_M_PER_ATM: f64 = 10.0;

    /// Deepest depth a session accepts, in meters.
    pub const MAX_DEPTH_M: f64 = 190.0;

    /// Ambient pressure at `MAX_DEPTH_M`, in atm.
    pub const MAX_PRESSURE_ATM: f64 = SURFACE_PRESSURE_ATM + MAX_DEPTH_M / SEAWATER_M_PER_ATM;
}

/// Absolute ambient pressure at a seawater depth.
///
/// Each 10 m of seawater adds one atmosphere on top of the surface pressure.
pub fn depth_to_pressure(depth: Length) -> SqResult<Pressure> {
    let d = ensure_finite(in_m(depth), "depth")?;
    if d < 0.0 {
        return Err(SqError::InvalidArg {
            what: "depth must be non-negative",
            value: d,
        });
    }
    Ok(atm(
        constants::SURFACE_PRESSURE_ATM + d / constants::SEAWATER_M_PER_ATM,
    ))
}

/// Seawater depth at which the ambient pressure equals `p`.
pub fn pressure_to_depth(p: Pressure) -> SqResult<Length> {
    let p = ensure_finite(in_atm(p), "pressure")?;
    if p < constants::SURFACE_PRESSURE_ATM {
        return Err(SqError::InvalidArg {
            what: "pressure is below surface pressure",
            value: p,
        });
    }
    Ok(m(
        (p - constants::SURFACE_PRESSURE_ATM) * constants::SEAWATER_M_PER_ATM,
    ))
}
