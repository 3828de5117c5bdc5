//! Intrinsic colours of main sequence stars, after Kenyon & Hartmann (1995),
//! indexed by spectral class with a whole class number ("G5", "M2").

use serde::{Deserialize, Serialize};

use crate::magnitude::Band;

const NAN: f64 = f64::NAN;

/// One row of the colour table. Every index is relative to V.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainSequenceColours {
    pub effective_temperature: f64,
    pub u_v: f64,
    pub b_v: f64,
    pub v_i: f64,
    pub v_j: f64,
    pub v_h: f64,
    pub v_k: f64,
    pub v_l: f64,
    pub v_m: f64,
    pub v_n: f64,
}

impl MainSequenceColours {
    /// Looks up the row for a spectral class such as `"B6"`.
    pub fn for_class(spectral_class: &str) -> Option<&'static MainSequenceColours> {
        COLOUR_TABLE
            .iter()
            .find(|(class, _)| *class == spectral_class)
            .map(|(_, colours)| colours)
    }

    /// Offset to add to a magnitude in `band` to reach V, or `None` when the
    /// colour is not tabulated for this class.
    pub fn to_v_offset(&self, band: Band) -> Option<f64> {
        let offset = match band {
            Band::V => 0.0,
            // Tabulated as X - V
            Band::U => -self.u_v,
            Band::B => -self.b_v,
            // Tabulated as V - X
            Band::I => self.v_i,
            Band::J => self.v_j,
            Band::H => self.v_h,
            Band::K => self.v_k,
            Band::L => self.v_l,
            Band::M => self.v_m,
            Band::N => self.v_n,
        };
        offset.is_finite().then_some(offset)
    }
}

const fn row(values: [f64; 10]) -> MainSequenceColours {
    MainSequenceColours {
        effective_temperature: values[0],
        u_v: values[1],
        b_v: values[2],
        v_i: values[3],
        v_j: values[4],
        v_h: values[5],
        v_k: values[6],
        v_l: values[7],
        v_m: values[8],
        v_n: values[9],
    }
}

// Columns: Teff, U-V, B-V, V-I, V-J, V-H, V-K, V-L, V-M, V-N
#[rustfmt::skip]
static COLOUR_TABLE: &[(&str, MainSequenceColours)] = &[
    ("B0", row([30000.0, -1.38, -0.30, -0.31, -0.70, -0.81, -0.93, -1.00, -1.05, NAN])),
    ("B1", row([25400.0, -1.26, -0.26, -0.27, -0.61, -0.71, -0.81, -0.88, -0.93, NAN])),
    ("B2", row([22000.0, -1.08, -0.24, -0.24, -0.55, -0.64, -0.74, -0.80, -0.85, NAN])),
    ("B3", row([18700.0, -0.90, -0.20, -0.19, -0.45, -0.52, -0.61, -0.66, -0.70, NAN])),
    ("B4", row([17000.0, -0.79, -0.18, -0.17, -0.40, -0.47, -0.54, -0.59, -0.63, NAN])),
    ("B5", row([15400.0, -0.69, -0.16, -0.15, -0.35, -0.42, -0.49, -0.53, -0.57, NAN])),
    ("B6", row([14000.0, -0.60, -0.13, -0.13, -0.32, -0.37, -0.43, -0.46, -0.50, NAN])),
    ("B7", row([13000.0, -0.48, -0.11, -0.11, -0.27, -0.32, -0.37, -0.40, -0.43, NAN])),
    ("B8", row([11900.0, -0.39, -0.09, -0.09, -0.22, -0.26, -0.30, -0.32, -0.35, NAN])),
    ("B9", row([10500.0, -0.21, -0.06, -0.05, -0.12, -0.14, -0.16, -0.17, -0.19, NAN])),
    ("A0", row([ 9520.0,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, 0.00])),
    ("A1", row([ 9230.0,  0.06,  0.03,  0.03,  0.06,  0.06,  0.07,  0.07,  0.07, NAN])),
    ("A2", row([ 8970.0,  0.12,  0.06,  0.06,  0.12,  0.13,  0.14,  0.15,  0.15, NAN])),
    ("A3", row([ 8720.0,  0.19,  0.09,  0.10,  0.18,  0.20,  0.21,  0.23,  0.23, NAN])),
    ("A4", row([ 8460.0,  0.25,  0.12,  0.13,  0.24,  0.26,  0.28,  0.30,  0.30, NAN])),
    ("A5", row([ 8200.0,  0.30,  0.15,  0.16,  0.31,  0.34,  0.36,  0.38,  0.38, NAN])),
    ("A6", row([ 8050.0,  0.35,  0.17,  0.19,  0.36,  0.41,  0.44,  0.46,  0.46, NAN])),
    ("A7", row([ 7850.0,  0.40,  0.20,  0.22,  0.40,  0.47,  0.50,  0.52,  0.52, NAN])),
    ("A8", row([ 7580.0,  0.44,  0.25,  0.27,  0.47,  0.55,  0.58,  0.60,  0.60, NAN])),
    ("A9", row([ 7390.0,  0.47,  0.28,  0.31,  0.52,  0.61,  0.64,  0.66,  0.66, NAN])),
    ("F0", row([ 7200.0,  0.50,  0.31,  0.35,  0.57,  0.68,  0.70,  0.73,  0.73, NAN])),
    ("F1", row([ 7050.0,  0.52,  0.34,  0.38,  0.62,  0.74,  0.76,  0.79,  0.79, NAN])),
    ("F2", row([ 6890.0,  0.53,  0.36,  0.40,  0.66,  0.79,  0.82,  0.85,  0.85, NAN])),
    ("F3", row([ 6740.0,  0.53,  0.39,  0.43,  0.70,  0.85,  0.88,  0.91,  0.91, NAN])),
    ("F4", row([ 6590.0,  0.54,  0.41,  0.46,  0.75,  0.91,  0.95,  0.98,  0.98, NAN])),
    ("F5", row([ 6440.0,  0.55,  0.44,  0.50,  0.83,  1.04,  1.10,  1.13,  1.13, NAN])),
    ("F6", row([ 6360.0,  0.58,  0.46,  0.52,  0.85,  1.07,  1.13,  1.16,  1.16, NAN])),
    ("F7", row([ 6280.0,  0.62,  0.49,  0.54,  0.88,  1.11,  1.17,  1.20,  1.20, NAN])),
    ("F8", row([ 6200.0,  0.67,  0.52,  0.56,  0.93,  1.17,  1.22,  1.26,  1.26, NAN])),
    ("F9", row([ 6115.0,  0.71,  0.55,  0.59,  0.97,  1.22,  1.28,  1.32,  1.32, NAN])),
    ("G0", row([ 6030.0,  0.76,  0.58,  0.62,  1.02,  1.27,  1.34,  1.38,  1.38, NAN])),
    ("G1", row([ 5945.0,  0.80,  0.60,  0.64,  1.05,  1.31,  1.38,  1.42,  1.42, NAN])),
    ("G2", row([ 5860.0,  0.84,  0.62,  0.66,  1.08,  1.35,  1.41,  1.45,  1.45, NAN])),
    ("G3", row([ 5830.0,  0.86,  0.63,  0.67,  1.10,  1.37,  1.44,  1.48,  1.48, NAN])),
    ("G4", row([ 5800.0,  0.89,  0.65,  0.68,  1.12,  1.40,  1.46,  1.50,  1.50, NAN])),
    ("G5", row([ 5770.0,  0.91,  0.66,  0.69,  1.14,  1.42,  1.49,  1.53,  1.53, NAN])),
    ("G6", row([ 5700.0,  0.96,  0.68,  0.71,  1.17,  1.46,  1.53,  1.57,  1.57, NAN])),
    ("G7", row([ 5630.0,  1.01,  0.71,  0.73,  1.20,  1.50,  1.58,  1.62,  1.62, NAN])),
    ("G8", row([ 5520.0,  1.08,  0.74,  0.75,  1.24,  1.55,  1.64,  1.68,  1.68, NAN])),
    ("G9", row([ 5410.0,  1.18,  0.78,  0.78,  1.30,  1.62,  1.72,  1.76,  1.76, NAN])),
    ("K0", row([ 5250.0,  1.33,  0.81,  0.81,  1.39,  1.74,  1.83,  1.88,  1.88, NAN])),
    ("K1", row([ 5080.0,  1.51,  0.86,  0.86,  1.46,  1.83,  1.93,  1.98,  1.98, NAN])),
    ("K2", row([ 4900.0,  1.72,  0.91,  0.92,  1.54,  1.94,  2.05,  2.10,  2.10, NAN])),
    ("K3", row([ 4730.0,  1.91,  0.96,  0.98,  1.63,  2.05,  2.17,  2.23,  2.23, NAN])),
    ("K4", row([ 4590.0,  2.08,  1.02,  1.05,  1.73,  2.17,  2.30,  2.37,  2.37, NAN])),
    ("K5", row([ 4350.0,  2.30,  1.15,  1.20,  1.92,  2.45,  2.59,  2.68,  2.68, NAN])),
    ("K6", row([ 4205.0,  2.48,  1.24,  1.34,  2.08,  2.63,  2.80,  2.90,  2.90, NAN])),
    ("K7", row([ 4060.0,  2.65,  1.33,  1.48,  2.24,  2.81,  2.98,  3.10,  3.10, NAN])),
    ("M0", row([ 3850.0,  2.76,  1.40,  1.78,  2.50,  3.15,  3.34,  3.48,  3.48, NAN])),
    ("M1", row([ 3720.0,  2.82,  1.46,  2.05,  2.74,  3.42,  3.63,  3.79,  3.79, NAN])),
    ("M2", row([ 3580.0,  2.86,  1.52,  2.30,  2.99,  3.88,  4.11,  4.30,  4.30, NAN])),
    ("M3", row([ 3470.0,  2.92,  1.53,  2.57,  3.35,  4.12,  4.36,  4.57,  4.57, NAN])),
    ("M4", row([ 3370.0,  2.97,  1.55,  3.03,  3.83,  4.58,  4.86,  5.10,  5.10, NAN])),
    ("M5", row([ 3240.0,  3.18,  1.60,  3.73,  4.48,  5.22,  5.53,  5.80,  5.80, NAN])),
    ("M6", row([ 3050.0,  3.33,  1.70,  4.55,  5.28,  5.96,  6.31,  6.63,  NAN,  NAN])),
];
