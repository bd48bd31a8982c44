//! # floem-folder-picker
//!
//! A folder color picker widget for [Floem](https://github.com/lapce/floem).
//!
//! Shows a folder icon above a row of color swatches. Clicking a swatch
//! sends a small dot jumping from the swatch into the folder; when it lands
//! the folder blends to the new color and the selection ring springs over.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_folder_picker::{folder_picker, Palette};
//!
//! let selected = RwSignal::new(Palette::default().initial().clone());
//! // Use `folder_picker(selected)` in your Floem view tree.
//! ```

mod anchor;
mod color;
mod config;
mod constants;
mod folder;
mod math;
mod motion;
mod palette;
mod picker;
mod stage;
mod state;
mod swatch;
mod ticker;

pub use anchor::Anchor;
pub use color::SolidColor;
pub use config::{ConfigError, PickerConfig};
pub use motion::{ColorTransition, DotFrame, FlightPath, Spring, Tween};
pub use palette::{Palette, PaletteError, Swatch};
pub use state::{Flight, PickerState, RequestId};

use floem::prelude::*;
use floem::reactive::RwSignal;

/// Creates the picker with the default palette and timings.
///
/// `selected` is the committed swatch. The picker writes it when a flight
/// lands; external writes are shown as if committed. Values outside the
/// palette are replaced with the first swatch.
pub fn folder_picker(selected: RwSignal<Swatch>) -> impl IntoView {
    picker::picker(PickerConfig::default(), selected)
}

/// Creates the picker with a custom configuration.
pub fn folder_picker_with(
    config: PickerConfig,
    selected: RwSignal<Swatch>,
) -> Result<impl IntoView, ConfigError> {
    config.validate()?;
    Ok(picker::picker(config, selected))
}
