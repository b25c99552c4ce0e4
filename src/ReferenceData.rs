/// Experimental curves, sweep parameters and reference libraries.
///
/// # Examples
/// ```
/// use SaponKin::ReferenceData::al_mesfer_2017::al_mesfer_2017;
/// use SaponKin::ReferenceData::experimental_curves::SweepParameter;
/// let library = al_mesfer_2017();
/// let curves = library.curves(SweepParameter::Temperature).unwrap();
/// assert_eq!(curves[0].condition_temperature(), Some(293.0));
/// ```
pub mod experimental_curves;
/// Literature data of the batch reactor study bundled with the crate
pub mod al_mesfer_2017;
pub mod data_error;
