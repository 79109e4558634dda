//! Sun and moon positions and the search for the next instant a phase angle is reached.
//!
//! The phase angle of the sun is its apparent ecliptic longitude, which is zero at
//! the vernal equinox. The phase angle of the moon is its elongation from the sun in
//! ecliptic longitude, zero at new moon and π at full moon.
//!
//! [AnalyticEphemeris] uses low precision analytic theories (J. Meeus,
//! Astronomical Algorithms, ch. 25 for the sun and a truncated ch. 47 series
//! for the moon). Phases of the moon come out within a few minutes, equinoxes
//! and solstices within half an hour, which is enough for calendar entries
//! truncated to the minute.

use argmin::core::{CostFunction, Error as ArgminError, Executor, State};
use argmin::solver::brent::BrentRoot;
use chrono::{Duration, NaiveDateTime};
use log::trace;
use std::f64::consts::PI;
use thiserror::Error;

pub const TAU: f64 = 2.0 * PI;

/// Julian day of 1970-01-01 00:00 UTC
const JD_UNIX_EPOCH: f64 = 2_440_587.5;
/// Julian day of the J2000.0 epoch
const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Angles closer to the target than this count as already reached
const MIN_ANGLE: f64 = 1e-5;
/// Precision of the root in days, about 10 ms
const ROOT_TOLERANCE: f64 = 1e-7;

#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("phase search failed: {0}")]
    Solver(String),
    #[error("julian day {0} is outside the range of supported dates")]
    OutOfRange(f64),
    #[error("phase search returned {found}, which is not after {start}")]
    NotAfterStart {
        start: NaiveDateTime,
        found: NaiveDateTime,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Mean number of days for the phase angle to advance by a full circle
    fn period(&self) -> f64 {
        match self {
            Body::Sun => 365.242_19,
            Body::Moon => 29.530_589,
        }
    }
}

/// Locates the instants at which a body reaches a given phase angle
pub trait PhaseOracle {
    /// Next instant strictly after `start` at which the phase angle of `body`,
    /// taken modulo `cycle`, equals `target`. Angles are in radians.
    ///
    /// For the sun a `cycle` of π makes both equinoxes solutions of the target 0
    /// and both solstices solutions of the target π/2.
    fn next_phase(
        &self,
        body: Body,
        start: NaiveDateTime,
        cycle: f64,
        target: f64,
    ) -> Result<NaiveDateTime, EphemerisError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    /// Phase angle of `body` in [0, 2π) at the given julian day (UTC)
    pub fn phase_angle(&self, body: Body, jd: f64) -> f64 {
        let jde = jd + delta_t(jd) / 86_400.0;
        match body {
            Body::Sun => sun_longitude(jde),
            Body::Moon => (moon_longitude(jde) - sun_longitude(jde)).rem_euclid(TAU),
        }
    }

    /// Julian day of the first root after `from`. The root is bracketed by the
    /// days the mean motion needs for an eighth of `cycle` around the estimate,
    /// where the wrapped offset changes sign but does not jump.
    fn solve(
        &self,
        body: Body,
        from: f64,
        cycle: f64,
        target: f64,
    ) -> Result<f64, EphemerisError> {
        let rate = TAU / body.period();
        let mut to_cover = (target - self.phase_angle(body, from)).rem_euclid(cycle);
        if to_cover < MIN_ANGLE {
            to_cover += cycle;
        }
        let guess = from + to_cover / rate;
        let half_width = cycle / 8.0 / rate;
        let solver = BrentRoot::new(
            (guess - half_width).max(from),
            guess + half_width,
            ROOT_TOLERANCE,
        );
        let offset = PhaseOffset {
            ephemeris: *self,
            body,
            cycle,
            target,
        };
        let res = Executor::new(offset, solver)
            .configure(|state| state.max_iters(100))
            .run()
            .map_err(|err| EphemerisError::Solver(err.to_string()))?;
        trace!(
            "{:?} phase {:.4} after jd {:.5}: {} iterations",
            body,
            target,
            from,
            res.state().get_iter()
        );
        res.state()
            .get_param()
            .copied()
            .ok_or_else(|| EphemerisError::Solver("no root found".to_string()))
    }
}

/// Distance of the phase angle from the target, the function whose root is searched
struct PhaseOffset {
    ephemeris: AnalyticEphemeris,
    body: Body,
    cycle: f64,
    target: f64,
}

impl CostFunction for PhaseOffset {
    // one dimensional problem, the parameter is a julian day
    type Param = f64;
    type Output = f64;

    fn cost(&self, jd: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok(wrap(
            self.ephemeris.phase_angle(self.body, *jd) - self.target,
            self.cycle,
        ))
    }
}

impl PhaseOracle for AnalyticEphemeris {
    fn next_phase(
        &self,
        body: Body,
        start: NaiveDateTime,
        cycle: f64,
        target: f64,
    ) -> Result<NaiveDateTime, EphemerisError> {
        let found = from_julian_day(self.solve(body, julian_day(start), cycle, target)?)?;
        if found > start {
            Ok(found)
        } else {
            Err(EphemerisError::NotAfterStart { start, found })
        }
    }
}

/// Signed difference mapped into [-cycle/2, cycle/2)
fn wrap(angle: f64, cycle: f64) -> f64 {
    (angle + cycle / 2.0).rem_euclid(cycle) - cycle / 2.0
}

pub fn julian_day(time: NaiveDateTime) -> f64 {
    let since_epoch = time - NaiveDateTime::default();
    JD_UNIX_EPOCH + since_epoch.num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Instant of a julian day, rounded to the millisecond
pub fn from_julian_day(jd: f64) -> Result<NaiveDateTime, EphemerisError> {
    let millis = ((jd - JD_UNIX_EPOCH) * MILLIS_PER_DAY).round();
    if !millis.is_finite() {
        return Err(EphemerisError::OutOfRange(jd));
    }
    // `as` saturates, anything beyond the range of `Duration` fails below
    Duration::try_milliseconds(millis as i64)
        .and_then(|delta| NaiveDateTime::default().checked_add_signed(delta))
        .ok_or(EphemerisError::OutOfRange(jd))
}

/// Approximation of TT - UT in seconds (Espenak and Meeus polynomials)
fn delta_t(jd: f64) -> f64 {
    let y = 2000.0 + (jd - J2000) / 365.25;
    let u = (y - 1820.0) / 100.0;
    if (1961.0..1986.0).contains(&y) {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&y) {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&y) {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (2050.0..2150.0).contains(&y) {
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        -20.0 + 32.0 * u * u
    }
}

/// Nutation in longitude, main term only (degrees)
fn nutation(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    -0.00478 * omega.sin()
}

/// Apparent geocentric longitude of the sun in radians
fn sun_longitude(jde: f64) -> f64 {
    let t = (jde - J2000) / DAYS_PER_CENTURY;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    // aberration
    let lambda = l0 + center - 0.00569 + nutation(t);
    lambda.to_radians().rem_euclid(TAU)
}

/// Periodic terms for the longitude of the moon: multiples of D, M, M', F and
/// the coefficient in 1e-6 degrees
const MOON_TERMS: [(f64, f64, f64, f64, f64); 34] = [
    (0.0, 0.0, 1.0, 0.0, 6288774.0),
    (2.0, 0.0, -1.0, 0.0, 1274027.0),
    (2.0, 0.0, 0.0, 0.0, 658314.0),
    (0.0, 0.0, 2.0, 0.0, 213618.0),
    (0.0, 1.0, 0.0, 0.0, -185116.0),
    (0.0, 0.0, 0.0, 2.0, -114332.0),
    (2.0, 0.0, -2.0, 0.0, 58793.0),
    (2.0, -1.0, -1.0, 0.0, 57066.0),
    (2.0, 0.0, 1.0, 0.0, 53322.0),
    (2.0, -1.0, 0.0, 0.0, 45758.0),
    (0.0, 1.0, -1.0, 0.0, -40923.0),
    (1.0, 0.0, 0.0, 0.0, -34720.0),
    (0.0, 1.0, 1.0, 0.0, -30383.0),
    (2.0, 0.0, 0.0, -2.0, 15327.0),
    (0.0, 0.0, 1.0, 2.0, -12528.0),
    (0.0, 0.0, 1.0, -2.0, 10980.0),
    (4.0, 0.0, -1.0, 0.0, 10675.0),
    (0.0, 0.0, 3.0, 0.0, 10034.0),
    (4.0, 0.0, -2.0, 0.0, 8548.0),
    (2.0, 1.0, -1.0, 0.0, -7888.0),
    (2.0, 1.0, 0.0, 0.0, -6766.0),
    (1.0, 0.0, -1.0, 0.0, -5163.0),
    (1.0, 1.0, 0.0, 0.0, 4987.0),
    (2.0, -1.0, 1.0, 0.0, 4036.0),
    (2.0, 0.0, 2.0, 0.0, 3994.0),
    (4.0, 0.0, 0.0, 0.0, 3861.0),
    (2.0, 0.0, -3.0, 0.0, 3665.0),
    (0.0, 1.0, -2.0, 0.0, -2689.0),
    (2.0, 0.0, -1.0, 2.0, -2602.0),
    (2.0, -1.0, -2.0, 0.0, 2390.0),
    (1.0, 0.0, 1.0, 0.0, -2348.0),
    (2.0, -2.0, 0.0, 0.0, 2236.0),
    (0.0, 1.0, 2.0, 0.0, -2120.0),
    (0.0, 2.0, 0.0, 0.0, -2069.0),
];

/// Apparent geocentric longitude of the moon in radians
fn moon_longitude(jde: f64) -> f64 {
    let t = (jde - J2000) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let l = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65194000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113065000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
        - t4 / 14712000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
        + t4 / 863310000.0;
    // decreasing eccentricity of the earth orbit
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479264.290 * t;

    let periodic: f64 = MOON_TERMS
        .iter()
        .map(|(cd, cm, cmp, cf, coefficient)| {
            let argument = (cd * d + cm * m + cmp * mp + cf * f).to_radians();
            coefficient * e.powi(cm.abs() as i32) * argument.sin()
        })
        .sum::<f64>()
        + 3958.0 * a1.to_radians().sin()
        + 1962.0 * (l - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    (l + periodic / 1e6 + nutation(t))
        .to_radians()
        .rem_euclid(TAU)
}
