//! Capabilities a shape needs from the entity image that will eventually draw it.
//!
//! Every image answers [`EntityImage::is_hidden`]. The richer queries are optional: an image
//! opts in by returning itself from the matching `as_*` method, and callers that need one
//! get [`crate::Error::MissingCapability`] when it is absent.

use crate::geometry::Dimension;
use crate::ir::Ports;
use crate::text_metrics::TextMeasurer;

pub trait EntityImage: std::fmt::Debug {
    fn is_hidden(&self) -> bool;

    fn as_port_provider(&self) -> Option<&dyn PortProvider> {
        None
    }

    fn as_name_dimension_provider(&self) -> Option<&dyn NameDimensionProvider> {
        None
    }

    fn as_entry_exit_width_provider(&self) -> Option<&dyn EntryExitWidthProvider> {
        None
    }
}

/// Images split into named connection bands.
pub trait PortProvider {
    fn ports(&self, measurer: &dyn TextMeasurer) -> Ports;
}

/// Images whose name is drawn in a tab at the top-left corner (folders).
pub trait NameDimensionProvider {
    fn name_dimension(&self, measurer: &dyn TextMeasurer) -> Dimension;
}

/// Entry/exit point images whose label may be wider than the point itself.
pub trait EntryExitWidthProvider {
    fn max_width_from_label_for_entry_exit(&self, measurer: &dyn TextMeasurer) -> f64;
}
