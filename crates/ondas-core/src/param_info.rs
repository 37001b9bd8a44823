//! Parameter introspection for discoverable effect parameters.
//!
//! Index-based parameter access lets host shims and hardware controllers
//! map encoder knobs or raw parameter ids to effect setters without
//! knowing the concrete effect type. Unrecognized indices are ignored,
//! not errors — hosts routinely probe past the end of the list.
//!
//! Fully `no_std` compatible, no heap allocations.

/// Unit type for parameter display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamUnit {
    /// Milliseconds (ms) - for time parameters like delay time.
    Milliseconds,
    /// Percentage (%) - for mix, feedback, and normalized parameters.
    Percent,
    /// No unit - for dimensionless parameters.
    #[default]
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub fn suffix(self) -> &'static str {
        match self {
            ParamUnit::Milliseconds => " ms",
            ParamUnit::Percent => " %",
            ParamUnit::None => "",
        }
    }
}

/// Static metadata describing one effect parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Delay Time").
    pub name: &'static str,
    /// Short name for hardware displays, max 8 characters (e.g., "Time").
    pub short_name: &'static str,
    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,
    /// Minimum allowed value for this parameter.
    pub min: f32,
    /// Maximum allowed value for this parameter.
    pub max: f32,
    /// Default value when the effect is initialized or reset.
    pub default: f32,
    /// Recommended step increment for encoder-based control.
    pub step: f32,
}

/// Runtime parameter discovery and manipulation.
pub trait ParameterInfo {
    /// Number of parameters this effect exposes.
    ///
    /// Valid parameter indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at the given index, or `None` if
    /// `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at the given index, in the units
    /// declared by its descriptor. Out-of-range indices return 0.
    fn get_param(&self, index: usize) -> f32;

    /// Set the parameter at the given index. Values are clamped by the
    /// effect's own setters; out-of-range indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);
}
