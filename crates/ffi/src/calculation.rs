use beccs_core::report::to_csv_string;
use beccs_core::{evaluate, CalculationInput, CalculationResult};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;
use tracing::debug;

use crate::error::{BeccsErrorCode, DefaultBeccsError};
use crate::helpers::{clear_last_error, track_error};

/// C-compatible calculation input.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BeccsInput {
    /// Null-terminated UTF-8 feedstock label (e.g. "hardwood").
    pub biomass_type: *const c_char,
    /// Feedstock mass (t).
    pub biomass_quantity_tons: f64,
    /// Captured share of emitted CO2 (fraction 0-1, not clamped).
    pub capture_efficiency: f64,
    /// Energy content before moisture derating (MJ/kg).
    pub calorific_value: f64,
    /// Water share of feedstock mass (fraction 0-1, not clamped).
    pub moisture_content: f64,
    /// CO2 released per tonne burned (tCO2/t).
    pub emission_factor: f64,
}

/// C-compatible calculation result, every field rounded to 2 decimals.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BeccsResult {
    /// CO2 Captured (tons).
    pub co2_captured_tons: f64,
    /// Carbon Credits (credits).
    pub carbon_credits: f64,
    /// Energy Output (MWh).
    pub energy_output_mwh: f64,
    /// Energy Efficiency (MWh/ton).
    pub energy_efficiency_mwh_per_ton: f64,
}

impl From<CalculationResult> for BeccsResult {
    fn from(result: CalculationResult) -> Self {
        Self {
            co2_captured_tons: result.co2_captured_tons,
            carbon_credits: result.carbon_credits,
            energy_output_mwh: result.energy_output_mwh,
            energy_efficiency_mwh_per_ton: result.energy_efficiency_mwh_per_ton,
        }
    }
}

impl From<BeccsResult> for CalculationResult {
    fn from(result: BeccsResult) -> Self {
        Self {
            co2_captured_tons: result.co2_captured_tons,
            carbon_credits: result.carbon_credits,
            energy_output_mwh: result.energy_output_mwh,
            energy_efficiency_mwh_per_ton: result.energy_efficiency_mwh_per_ton,
        }
    }
}

impl BeccsInput {
    /// Copy the C input into an owned [`CalculationInput`].
    ///
    /// # Safety
    /// `biomass_type` must be null or point to a valid null-terminated string.
    unsafe fn to_calculation_input(self) -> Result<CalculationInput, DefaultBeccsError> {
        if self.biomass_type.is_null() {
            return Err(DefaultBeccsError::null_pointer("biomass_type"));
        }
        let biomass_type = CStr::from_ptr(self.biomass_type)
            .to_str()
            .map_err(|_| DefaultBeccsError::invalid_utf8("biomass_type"))?;

        Ok(CalculationInput::new(
            biomass_type,
            self.biomass_quantity_tons,
            self.capture_efficiency,
            self.calorific_value,
            self.moisture_content,
            self.emission_factor,
        ))
    }
}

/// Validate an input and compute its BECCS metrics.
///
/// # Parameters
/// - `input`: Calculation parameters
/// - `out_result`: Receives the rounded metrics on success; untouched on failure
///
/// # Returns
/// - `Ok` (0) on success
/// - `NullPointer` if `input`, `input->biomass_type` or `out_result` is null
/// - `InvalidUtf8` if `input->biomass_type` is not UTF-8
/// - `EmptyBiomassType` if the label is blank
/// - `NonPositiveQuantity` if quantity, calorific value or emission factor is not positive
/// - `ComputationFailed` if a metric comes out NaN or infinite
///
/// On failure, `beccs_get_last_error()` returns the message.
///
/// # Safety
/// `input` and `out_result` must be null or valid, aligned pointers;
/// `input->biomass_type` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn beccs_compute(
    input: *const BeccsInput,
    out_result: *mut BeccsResult,
) -> BeccsErrorCode {
    if input.is_null() {
        return track_error(&DefaultBeccsError::null_pointer("input"));
    }
    if out_result.is_null() {
        return track_error(&DefaultBeccsError::null_pointer("out_result"));
    }

    let input = match (*input).to_calculation_input() {
        Ok(input) => input,
        Err(e) => return track_error(&e),
    };

    match evaluate(&input) {
        Ok(result) => {
            *out_result = result.into();
            clear_last_error();
            BeccsErrorCode::Ok
        }
        Err(e) => {
            debug!(error = %e, "beccs_compute rejected input");
            track_error(&DefaultBeccsError::from(e))
        }
    }
}

/// Render a result as the CSV export (header row plus one data row).
///
/// Writes at most `buffer_len` bytes including the terminating null. The
/// number of bytes the full export needs (excluding the null) is always
/// stored in `out_required`, so callers can size a buffer by passing
/// `buffer = NULL, buffer_len = 0` first.
///
/// # Returns
/// - `Ok` (0) if `buffer` is null or the whole export fit in it
/// - `NullPointer` if `result` or `out_required` is null
/// - `BufferTooSmall` if `buffer` cannot hold the export and its null; nothing is written
///
/// # Safety
/// `result` and `out_required` must be valid pointers; `buffer` must be null
/// or point to at least `buffer_len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn beccs_result_to_csv(
    result: *const BeccsResult,
    buffer: *mut c_char,
    buffer_len: usize,
    out_required: *mut usize,
) -> BeccsErrorCode {
    if result.is_null() {
        return track_error(&DefaultBeccsError::null_pointer("result"));
    }
    if out_required.is_null() {
        return track_error(&DefaultBeccsError::null_pointer("out_required"));
    }

    let csv = to_csv_string(&CalculationResult::from(*result));
    let bytes = csv.as_bytes();
    *out_required = bytes.len();

    if buffer.is_null() {
        clear_last_error();
        return BeccsErrorCode::Ok;
    }
    if buffer_len <= bytes.len() {
        return track_error(&DefaultBeccsError::buffer_too_small(bytes.len() + 1, buffer_len));
    }

    ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), buffer, bytes.len());
    *buffer.add(bytes.len()) = 0;
    clear_last_error();
    BeccsErrorCode::Ok
}
