//! Physical constants (CODATA 2014 values).
//!
//! The table is frozen, read-only data with no lifecycle beyond process
//! start: every entry is a `const`, and [`CONSTANTS`] maps symbols to
//! values for callers that look constants up by name.

/// A named physical constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstant {
    /// Conventional symbol, e.g. `"k_B"`.
    pub symbol: &'static str,
    /// Numeric value in SI units.
    pub value: f64,
    /// SI unit string, empty for dimensionless quantities.
    pub unit: &'static str,
    /// Relative standard uncertainty; `None` for defined (exact) values.
    pub uncertainty: Option<f64>,
    /// Short description.
    pub description: &'static str,
}

// Universal constants

/// Speed of light in vacuum (m s^-1), defined.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Newtonian constant of gravitation (m^3 kg^-1 s^-2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_08e-11;

/// Planck constant (J s).
pub const PLANCK_CONSTANT: f64 = 6.626_070_040e-34;

/// Reduced Planck constant, h / (2 pi) (J s).
pub const REDUCED_PLANCK_CONSTANT: f64 = 1.054_571_800e-34;

// Electromagnetic constants

/// Magnetic constant (vacuum permeability), 4 pi x 1e-7 (N A^-2).
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_061e-6;

/// Electric constant (vacuum permittivity), 1 / (mu_0 c^2) (F m^-1).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817e-12;

/// Coulomb constant, 1 / (4 pi epsilon_0) (kg m^3 s^-4 A^-2).
pub const COULOMB_CONSTANT: f64 = 8.987_551_787_368_176_4e9;

/// Elementary charge (C).
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_620_8e-19;

// Atomic and nuclear constants

/// Fine-structure constant (dimensionless).
pub const FINE_STRUCTURE_CONSTANT: f64 = 7.297_352_566_4e-3;

/// Electron mass (kg).
pub const ELECTRON_MASS: f64 = 9.109_383_56e-31;

/// Proton mass (kg).
pub const PROTON_MASS: f64 = 1.672_621_898e-27;

/// Bohr radius, hbar / (alpha m_e c) (m).
pub const BOHR_RADIUS: f64 = 5.291_772_106_7e-11;

/// Classical electron radius, e^2 / (4 pi epsilon_0 m_e c^2) (m).
pub const CLASSICAL_ELECTRON_RADIUS: f64 = 2.817_940_322_7e-15;

// Physico-chemical constants

/// Avogadro constant (mol^-1).
pub const AVOGADRO_CONSTANT: f64 = 6.022_140_858e23;

/// Boltzmann constant (J K^-1).
pub const BOLTZMANN_CONSTANT: f64 = 1.380_648_53e-23;

/// Molar gas constant, N_A k_B (J mol^-1 K^-1).
pub const GAS_CONSTANT: f64 = 8.314_459_8;

/// Atomic mass constant (kg).
pub const ATOMIC_MASS_CONSTANT: f64 = 1.660_539_040e-27;

// Adopted values

/// Standard acceleration of gravity (m s^-2), defined.
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Standard atmosphere (Pa), defined.
pub const STANDARD_ATMOSPHERE: f64 = 101_325.0;

// Quantum Hall effect

/// Von Klitzing constant, 2 pi hbar / e^2 (ohm).
pub const VON_KLITZING_CONSTANT: f64 = 25_812.807_45;

/// Magnetic flux quantum, 2 pi hbar / e (Wb).
pub const FLUX_QUANTUM: f64 = 4.135_667_662e-15;

// Temperature scale anchors

/// Absolute zero on the Celsius scale.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Absolute zero on the Fahrenheit scale.
pub const ABSOLUTE_ZERO_FAHRENHEIT: f64 = -459.67;

/// The constant table, for lookup by symbol.
pub const CONSTANTS: &[PhysicalConstant] = &[
    PhysicalConstant {
        symbol: "c",
        value: SPEED_OF_LIGHT,
        unit: "m s^-1",
        uncertainty: None,
        description: "speed of light in vacuum",
    },
    PhysicalConstant {
        symbol: "G",
        value: GRAVITATIONAL_CONSTANT,
        unit: "m^3 kg^-1 s^-2",
        uncertainty: Some(4.7e-5),
        description: "Newtonian constant of gravitation",
    },
    PhysicalConstant {
        symbol: "h",
        value: PLANCK_CONSTANT,
        unit: "J s",
        uncertainty: Some(1.2e-8),
        description: "Planck constant",
    },
    PhysicalConstant {
        symbol: "hbar",
        value: REDUCED_PLANCK_CONSTANT,
        unit: "J s",
        uncertainty: Some(1.2e-8),
        description: "reduced Planck constant",
    },
    PhysicalConstant {
        symbol: "mu_0",
        value: VACUUM_PERMEABILITY,
        unit: "N A^-2",
        uncertainty: None,
        description: "magnetic constant (vacuum permeability)",
    },
    PhysicalConstant {
        symbol: "epsilon_0",
        value: VACUUM_PERMITTIVITY,
        unit: "F m^-1",
        uncertainty: None,
        description: "electric constant (vacuum permittivity)",
    },
    PhysicalConstant {
        symbol: "k_e",
        value: COULOMB_CONSTANT,
        unit: "kg m^3 s^-4 A^-2",
        uncertainty: None,
        description: "Coulomb constant",
    },
    PhysicalConstant {
        symbol: "e",
        value: ELEMENTARY_CHARGE,
        unit: "C",
        uncertainty: Some(6.1e-9),
        description: "elementary charge",
    },
    PhysicalConstant {
        symbol: "alpha",
        value: FINE_STRUCTURE_CONSTANT,
        unit: "",
        uncertainty: Some(2.3e-10),
        description: "fine-structure constant",
    },
    PhysicalConstant {
        symbol: "m_e",
        value: ELECTRON_MASS,
        unit: "kg",
        uncertainty: Some(1.2e-8),
        description: "electron mass",
    },
    PhysicalConstant {
        symbol: "m_p",
        value: PROTON_MASS,
        unit: "kg",
        uncertainty: Some(1.2e-8),
        description: "proton mass",
    },
    PhysicalConstant {
        symbol: "a_0",
        value: BOHR_RADIUS,
        unit: "m",
        uncertainty: Some(2.3e-9),
        description: "Bohr radius",
    },
    PhysicalConstant {
        symbol: "r_e",
        value: CLASSICAL_ELECTRON_RADIUS,
        unit: "m",
        uncertainty: Some(6.8e-10),
        description: "classical electron radius",
    },
    PhysicalConstant {
        symbol: "N_A",
        value: AVOGADRO_CONSTANT,
        unit: "mol^-1",
        uncertainty: Some(1.2e-8),
        description: "Avogadro constant",
    },
    PhysicalConstant {
        symbol: "k_B",
        value: BOLTZMANN_CONSTANT,
        unit: "J K^-1",
        uncertainty: Some(5.7e-7),
        description: "Boltzmann constant",
    },
    PhysicalConstant {
        symbol: "R",
        value: GAS_CONSTANT,
        unit: "J mol^-1 K^-1",
        uncertainty: Some(5.7e-7),
        description: "molar gas constant",
    },
    PhysicalConstant {
        symbol: "m_u",
        value: ATOMIC_MASS_CONSTANT,
        unit: "kg",
        uncertainty: Some(1.2e-8),
        description: "atomic mass constant",
    },
    PhysicalConstant {
        symbol: "g_n",
        value: STANDARD_GRAVITY,
        unit: "m s^-2",
        uncertainty: None,
        description: "standard acceleration of gravity",
    },
    PhysicalConstant {
        symbol: "atm",
        value: STANDARD_ATMOSPHERE,
        unit: "Pa",
        uncertainty: None,
        description: "standard atmosphere",
    },
    PhysicalConstant {
        symbol: "R_K",
        value: VON_KLITZING_CONSTANT,
        unit: "ohm",
        uncertainty: None,
        description: "von Klitzing constant",
    },
    PhysicalConstant {
        symbol: "Phi_0",
        value: FLUX_QUANTUM,
        unit: "Wb",
        uncertainty: None,
        description: "magnetic flux quantum",
    },
];

/// Look up a constant by its conventional symbol.
#[must_use]
pub fn lookup(symbol: &str) -> Option<&'static PhysicalConstant> {
    CONSTANTS.iter().find(|c| c.symbol == symbol)
}
