//! Great-circle routines on a spherical Earth.
//!
//! These follow the haversine formulation used by the [geo] crate, reduced
//! to the two primitives the budget assembler needs and pinned to a sphere
//! of radius [`EARTH_RADIUS_KM`](crate::EARTH_RADIUS_KM).
//!
//! [geo](https://github.com/georust/geo)

use crate::EARTH_RADIUS_KM;
use geo::{CoordFloat, Point};
use num_traits::FromPrimitive;

/// Returns the great-circle distance between `a` and `b`, in kilometers.
///
/// Coincident points yield exactly zero, and swapping the arguments changes
/// the result by less than a nanometer.
pub fn distance_km<T>(a: Point<T>, b: Point<T>) -> T
where
    T: CoordFloat + FromPrimitive,
{
    let two = T::one() + T::one();

    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / two).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / two).sin().powi(2);
    let c = two * h.sqrt().asin();

    T::from_f64(EARTH_RADIUS_KM).unwrap() * c
}

/// Returns the initial great-circle bearing from `a` toward `b`, in degrees
/// within `[0, 360)`.
pub fn bearing_deg<T>(a: Point<T>, b: Point<T>) -> T
where
    T: CoordFloat + FromPrimitive,
{
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    let full_turn = T::from_f64(360.0).unwrap();
    let deg = y.atan2(x).to_degrees();
    ((deg % full_turn) + full_turn) % full_turn
}
