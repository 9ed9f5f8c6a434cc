//! Stoichiometry: masses of reactants needed for a target product mass.

use crate::error::AnalysisError;

/// Round to 4 decimal places.
fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Calculate the masses of the remaining substances needed to obtain
/// `product_mass` of the first substance.
///
/// `molar_masses` and `molar_ratios` must be positive and in the same
/// order, with the reaction product first. The returned masses (one per
/// substance after the product) are proportional to
/// `molar_mass * molar_ratio` and rounded to 4 decimal places.
///
/// # Example
/// ```
/// let masses = benchtop_analysis::reaction_substance_masses(
///     &[387.44, 105.99, 240.79, 159.60],
///     &[3.0, 3.0, 2.0, 3.0],
///     27.0,
/// )
/// .unwrap();
/// assert_eq!(masses, vec![7.3863, 11.1868, 11.1222]);
/// ```
pub fn reaction_substance_masses(
    molar_masses: &[f64],
    molar_ratios: &[f64],
    product_mass: f64,
) -> Result<Vec<f64>, AnalysisError> {
    if molar_masses.len() != molar_ratios.len() {
        return Err(AnalysisError::LengthMismatch {
            left: molar_masses.len(),
            right: molar_ratios.len(),
        });
    }
    if molar_masses.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if molar_masses.iter().any(|&m| m <= 0.0) {
        return Err(AnalysisError::NonPositive("molar mass"));
    }
    if molar_ratios.iter().any(|&r| r <= 0.0) {
        return Err(AnalysisError::NonPositive("molar ratio"));
    }
    if product_mass < 0.0 {
        return Err(AnalysisError::NonPositive("product mass"));
    }

    let product_weight = molar_masses[0] * molar_ratios[0];
    let scale = product_mass / product_weight;

    Ok(molar_masses[1..]
        .iter()
        .zip(&molar_ratios[1..])
        .map(|(&mass, &ratio)| round4(scale * mass * ratio))
        .collect())
}
