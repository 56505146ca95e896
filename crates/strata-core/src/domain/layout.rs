//! Module layout registry.
//!
//! Every module is generated from the same three-layer skeleton. The
//! skeleton is described exactly once, by [`LAYERS`]: one [`LayerSpec`] per
//! layer, each listing its fixed subdirectories. Planning and the `layers`
//! command both read this table; nothing else hard-codes directory names.
//!
//! The table is a contract. No configuration option alters it.

use serde::Serialize;

use crate::domain::value_objects::Layer;

/// Name of the directory that holds every generated module.
pub const MODULES_DIR: &str = "modules";

/// One row of the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerSpec {
    /// The layer this row describes.
    pub layer: Layer,

    /// Subdirectories created under the layer root, in creation order.
    pub children: &'static [&'static str],
}

impl LayerSpec {
    pub const fn name(&self) -> &'static str {
        self.layer.as_str()
    }
}

/// Single source of truth for the module skeleton, in creation order.
pub static LAYERS: [LayerSpec; 3] = [
    LayerSpec {
        layer: Layer::Infrastructure,
        children: &["datasources", "models", "repositories"],
    },
    LayerSpec {
        layer: Layer::Domain,
        children: &["entities", "repositories", "usecases"],
    },
    LayerSpec {
        layer: Layer::Presentation,
        children: &["controllers", "pages", "widgets"],
    },
];

/// Look up the table row for `layer`.
pub fn spec_for(layer: Layer) -> &'static LayerSpec {
    // `LAYERS` is indexed in `Layer` declaration order.
    &LAYERS[layer as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_layer_order() {
        let layers: Vec<Layer> = LAYERS.iter().map(|s| s.layer).collect();
        assert_eq!(
            layers,
            [Layer::Infrastructure, Layer::Domain, Layer::Presentation]
        );
    }

    #[test]
    fn spec_for_matches_row() {
        for spec in &LAYERS {
            assert_eq!(spec_for(spec.layer), spec);
        }
    }

    #[test]
    fn domain_layer_children() {
        assert_eq!(
            spec_for(Layer::Domain).children,
            &["entities", "repositories", "usecases"]
        );
    }

    #[test]
    fn every_layer_has_three_children() {
        assert!(LAYERS.iter().all(|spec| spec.children.len() == 3));
    }
}
