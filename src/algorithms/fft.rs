//! Radix-2 Cooley–Tukey transform.
//!
//! Recursive even/odd split with depth `log2 n`. Values stay complex through
//! every level. Each butterfly records one "comparison" on the metrics
//! recorder; the counter doubles as a combine-operation count here.
//!
//! Only lengths that are zero or a power of two are accepted;
//! [`fft_zero_padded`] pads other lengths with zeros first.

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

use log::debug;

use crate::error::VizError;
use crate::metrics::CoreMetricsRecorder;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit-magnitude value at `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { re: cos, im: sin }
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Transforms `signal` into its frequency-domain coefficients.
///
/// # Errors
///
/// Returns [`VizError::InvalidInput`] if the length is neither zero nor a
/// power of two.
pub fn fft<M>(signal: &[Complex], metrics: &mut M) -> Result<Vec<Complex>, VizError>
where
    M: CoreMetricsRecorder,
{
    let n = signal.len();
    if n != 0 && !n.is_power_of_two() {
        return Err(VizError::invalid_input(format!(
            "fft length {} is not a power of two",
            n
        )));
    }
    debug!("fft(n = {})", n);
    Ok(transform(signal.to_vec(), metrics))
}

/// [`fft`] over a real-valued signal.
pub fn fft_real<M>(signal: &[f64], metrics: &mut M) -> Result<Vec<Complex>, VizError>
where
    M: CoreMetricsRecorder,
{
    let signal: Vec<Complex> = signal.iter().copied().map(Complex::from).collect();
    fft(&signal, metrics)
}

/// Pads `signal` with zeros up to the next power of two, then transforms.
pub fn fft_zero_padded<M>(signal: &[Complex], metrics: &mut M) -> Vec<Complex>
where
    M: CoreMetricsRecorder,
{
    let mut padded = signal.to_vec();
    if !padded.is_empty() {
        padded.resize(padded.len().next_power_of_two(), Complex::ZERO);
    }
    debug!("fft_zero_padded(n = {} -> {})", signal.len(), padded.len());
    transform(padded, metrics)
}

/// Magnitude of every coefficient, for display.
pub fn magnitudes(spectrum: &[Complex]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

fn transform<M>(signal: Vec<Complex>, metrics: &mut M) -> Vec<Complex>
where
    M: CoreMetricsRecorder,
{
    let n = signal.len();
    if n <= 1 {
        return signal;
    }
    let (even, odd): (Vec<_>, Vec<_>) = signal
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);
    let even = transform(even.into_iter().map(|(_, c)| c).collect(), metrics);
    let odd = transform(odd.into_iter().map(|(_, c)| c).collect(), metrics);

    let half = n / 2;
    let mut out = vec![Complex::ZERO; n];
    for k in 0..half {
        metrics.record_comparison();
        let twiddle = Complex::from_angle(-2.0 * PI * k as f64 / n as f64) * odd[k];
        out[k] = even[k] + twiddle;
        out[k + half] = even[k] - twiddle;
    }
    out
}
